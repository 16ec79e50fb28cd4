pub mod availability_modal;
pub mod form_modal;
pub mod table;
pub mod view_modal;
