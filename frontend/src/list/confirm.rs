/// Two-step guard for destructive actions.
///
/// `Confirmed` and `Cancelled` are terminal until the next `request`; neither
/// holds a target, so a second `confirm` can never act twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation<T> {
    Idle,
    PendingConfirmation(T),
    Confirmed,
    Cancelled,
}

impl<T> Default for Confirmation<T> {
    fn default() -> Self {
        Confirmation::Idle
    }
}

impl<T> Confirmation<T> {
    pub fn request(&mut self, target: T) {
        *self = Confirmation::PendingConfirmation(target);
    }

    /// Hands out the pending target and moves to `Confirmed`.
    pub fn confirm(&mut self) -> Option<T> {
        match std::mem::replace(self, Confirmation::Confirmed) {
            Confirmation::PendingConfirmation(target) => Some(target),
            other => {
                *self = other;
                None
            }
        }
    }

    pub fn cancel(&mut self) {
        if self.is_pending() {
            *self = Confirmation::Cancelled;
        }
    }

    pub fn pending(&self) -> Option<&T> {
        match self {
            Confirmation::PendingConfirmation(target) => Some(target),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Confirmation::PendingConfirmation(_))
    }
}
