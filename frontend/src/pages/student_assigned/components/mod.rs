pub mod table;
pub mod view_modal;
