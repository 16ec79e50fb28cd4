mod auth;
pub mod client;
mod homecare;
pub mod multipart;
pub mod pagination;
mod requests;
mod students;
pub mod types;

pub use auth::Portal;
pub use client::*;
pub use multipart::{Attachment, FieldValue, FormPayload};
pub use pagination::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
