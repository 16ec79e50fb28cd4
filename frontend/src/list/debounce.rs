pub const SEARCH_DEBOUNCE_MS: u32 = 500;

/// Identifies one scheduled debounce; only the most recent ticket may fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Debouncer {
    generation: u64,
    armed: bool,
}

impl Debouncer {
    /// Cancels any pending ticket and issues a new one.
    pub fn schedule(&mut self) -> DebounceTicket {
        self.generation = self.generation.wrapping_add(1);
        self.armed = true;
        DebounceTicket(self.generation)
    }

    /// Consumes `ticket` if it is still the pending one.
    pub fn take(&mut self, ticket: DebounceTicket) -> bool {
        if self.armed && ticket.0 == self.generation {
            self.armed = false;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) {
        self.armed = false;
    }

    pub fn is_pending(&self) -> bool {
        self.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_supersedes_older_ones() {
        let mut debouncer = Debouncer::default();
        let first = debouncer.schedule();
        let second = debouncer.schedule();
        assert!(!debouncer.take(first));
        assert!(debouncer.is_pending());
        assert!(debouncer.take(second));
        assert!(!debouncer.is_pending());
        assert!(!debouncer.take(second));
    }

    #[test]
    fn cancel_disarms_pending_ticket() {
        let mut debouncer = Debouncer::default();
        let ticket = debouncer.schedule();
        debouncer.cancel();
        assert!(!debouncer.take(ticket));
    }
}
