use crate::{
    components::{
        common::{Button, ButtonVariant},
        modal::Modal,
    },
    list::Confirmation,
};
use leptos::*;

/// Settles a pending confirmation and hands its target to `on_confirm`.
pub fn accept<T: 'static>(confirmation: RwSignal<Confirmation<T>>, on_confirm: Callback<T>) {
    if let Some(target) = confirmation.try_update(|c| c.confirm()).flatten() {
        on_confirm.call(target);
    }
}

pub fn decline<T: 'static>(confirmation: RwSignal<Confirmation<T>>) {
    let _ = confirmation.try_update(|c| c.cancel());
}

/// Dialog bound to a `Confirmation`; it is open exactly while a target is pending.
#[component]
pub fn ConfirmDialog<T>(
    confirmation: RwSignal<Confirmation<T>>,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    on_confirm: Callback<T>,
    #[prop(optional, into)] confirm_label: Option<String>,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] busy: MaybeSignal<bool>,
) -> impl IntoView
where
    T: Clone + 'static,
{
    let is_open = Signal::derive(move || confirmation.with(|c| c.is_pending()));
    let busy = Signal::derive(move || busy.get());
    let confirm_label = store_value(confirm_label.unwrap_or_else(|| "Confirm".to_string()));

    view! {
        <Modal is_open=is_open title=title on_close=Callback::new(move |_| decline(confirmation))>
            <p class="text-sm text-fg-muted">{message.clone()}</p>
            <div class="flex justify-end gap-2">
                <Button variant=ButtonVariant::Secondary attr:type="button" on:click=move |_| decline(confirmation)>
                    "Cancel"
                </Button>
                <Button variant=variant loading=busy attr:type="button" on:click=move |_| accept(confirmation, on_confirm)>
                    {confirm_label.get_value()}
                </Button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn accept_hands_out_pending_target_once() {
        with_runtime(|| {
            let confirmation = create_rw_signal(Confirmation::default());
            let deleted = create_rw_signal(Vec::<String>::new());
            let on_confirm = Callback::new(move |id: String| deleted.update(|d| d.push(id)));

            confirmation.update(|c| c.request("h1".to_string()));
            accept(confirmation, on_confirm);
            accept(confirmation, on_confirm);

            assert_eq!(deleted.get(), vec!["h1".to_string()]);
            assert_eq!(confirmation.get(), Confirmation::Confirmed);
        });
    }

    #[test]
    fn decline_never_reaches_callback() {
        with_runtime(|| {
            let confirmation = create_rw_signal(Confirmation::default());
            let calls = create_rw_signal(0u32);
            let on_confirm = Callback::new(move |_: String| calls.update(|n| *n += 1));

            confirmation.update(|c| c.request("s1".to_string()));
            decline(confirmation);
            accept(confirmation, on_confirm);

            assert_eq!(calls.get(), 0);
            assert_eq!(confirmation.get(), Confirmation::Cancelled);
        });
    }
}
