use crate::api::{ApiError, Attachment};

/// Reads a picked file into memory so it can travel in a multipart body.
#[cfg(target_arch = "wasm32")]
pub async fn read_attachment(file: &web_sys::File) -> Result<Attachment, ApiError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| ApiError::validation(format!("Could not read {}", file.name())))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(Attachment {
        file_name: file.name(),
        mime_type: file.type_(),
        bytes,
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn read_attachment(file: &web_sys::File) -> Result<Attachment, ApiError> {
    let _ = file;
    Err(ApiError::validation("File uploads require a browser"))
}

/// First file of an `<input type="file">` change event.
pub fn first_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    let input = leptos::event_target::<web_sys::HtmlInputElement>(ev);
    input.files().and_then(|files| files.get(0))
}
