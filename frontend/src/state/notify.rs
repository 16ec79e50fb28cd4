use leptos::*;
use uuid::Uuid;

pub const TOAST_AUTO_CLOSE_MS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Fire-and-forget toast sink shared through context.
#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<ToastQueue>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            queue: create_rw_signal(ToastQueue::default()),
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        let queue = self.queue;
        Signal::derive(move || queue.with(|q| q.toasts().to_vec()))
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn dismiss(&self, id: Uuid) {
        let _ = self.queue.try_update(|q| q.dismiss(id));
    }

    fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        if kind == ToastKind::Error {
            log::warn!("{}", message);
        }
        let Some(id) = self.queue.try_update(|q| q.push(kind, message)) else {
            return;
        };
        self.schedule_dismiss(id);
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: Uuid) {
        let notifier = *self;
        spawn_local(async move {
            crate::utils::timer::sleep_ms(TOAST_AUTO_CLOSE_MS).await;
            notifier.dismiss(id);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: Uuid) {}
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_notifier() -> Notifier {
    let notifier = Notifier::new();
    provide_context(notifier);
    notifier
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_else(provide_notifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn queue_push_and_dismiss_by_id() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "Saved");
        let second = queue.push(ToastKind::Error, "Failed");
        assert_eq!(queue.toasts().len(), 2);

        queue.dismiss(first);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, second);
        assert_eq!(queue.toasts()[0].kind, ToastKind::Error);
    }

    #[test]
    fn notifier_exposes_pushed_toasts() {
        with_runtime(|| {
            let notifier = use_notifier();
            notifier.success("Homecare added");
            notifier.error("Failed to delete");
            let toasts = notifier.toasts().get();
            assert_eq!(toasts.len(), 2);
            assert_eq!(toasts[0].message, "Homecare added");

            notifier.dismiss(toasts[0].id);
            assert_eq!(notifier.toasts().get().len(), 1);
        });
    }
}
