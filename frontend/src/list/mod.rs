//! Paginated, filtered list synchronization shared by every table page.

pub mod confirm;
pub mod controller;
pub mod debounce;
pub mod mutation;
pub mod view_model;

pub use confirm::Confirmation;
pub use controller::{ListController, ListFilters, LoadOutcome, PendingLoad, RefreshPolicy};
pub use debounce::SEARCH_DEBOUNCE_MS;
pub use mutation::report_mutation;
pub use view_model::{ListSource, ListViewModel};
