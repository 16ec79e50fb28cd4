pub mod auth;
pub mod notify;
pub mod token_store;
