use crate::{api::ApiError, state::notify::Notifier};

/// Toasts the outcome of a create, update, delete or status change and runs `on_success` after a success.
pub fn report_mutation(notifier: Notifier, result: &Result<String, ApiError>, on_success: impl FnOnce()) {
    match result {
        Ok(message) => {
            notifier.success(message.clone());
            on_success();
        }
        Err(err) => notifier.error(err.error.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::notify::ToastKind;
    use crate::test_support::ssr::with_runtime;
    use leptos::*;

    #[test]
    fn success_toasts_and_runs_follow_up() {
        with_runtime(|| {
            let notifier = Notifier::new();
            let mut refreshed = false;
            report_mutation(notifier, &Ok("Homecare deleted successfully".into()), || refreshed = true);
            assert!(refreshed);
            let toasts = notifier.toasts().get();
            assert_eq!(toasts[0].kind, ToastKind::Success);
        });
    }

    #[test]
    fn failure_toasts_without_follow_up() {
        with_runtime(|| {
            let notifier = Notifier::new();
            let mut refreshed = false;
            report_mutation(notifier, &Err(ApiError::from_status(500, "Failed to delete homecare")), || {
                refreshed = true
            });
            assert!(!refreshed);
            let toasts = notifier.toasts().get();
            assert_eq!(toasts[0].message, "Failed to delete homecare");
            assert_eq!(toasts[0].kind, ToastKind::Error);
        });
    }
}
