pub mod dates;
pub mod files;
pub mod modal;
pub mod preview;
pub mod validation;

pub use modal::{DetailModal, FormModal, ModalMode, ModalState};
pub use validation::FieldErrors;
