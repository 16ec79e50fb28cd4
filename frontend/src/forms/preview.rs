use std::rc::Rc;

/// Releases object URLs handed out for local file previews.
pub trait UrlRevoker {
    fn revoke(&self, url: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserUrls;

impl UrlRevoker for BrowserUrls {
    fn revoke(&self, url: &str) {
        if let Err(err) = web_sys::Url::revoke_object_url(url) {
            log::warn!("Failed to revoke preview URL: {:?}", err);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn create_object_url(file: &web_sys::File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// Image that came with the fetched entity; nothing to release.
    Remote(String),
    /// Object URL created for a file picked in this session.
    Local(String),
}

impl Preview {
    pub fn src(&self) -> &str {
        match self {
            Preview::Remote(url) | Preview::Local(url) => url,
        }
    }
}

/// Turns a base64 image body from the backend into a displayable data URL.
pub fn remote_image(encoded: Option<&str>) -> Option<Preview> {
    let encoded = encoded?.trim();
    if encoded.is_empty() {
        return None;
    }
    if encoded.starts_with("data:") || encoded.starts_with("http") {
        Some(Preview::Remote(encoded.to_string()))
    } else {
        Some(Preview::Remote(format!("data:image/png;base64,{}", encoded)))
    }
}

/// Owns at most one preview and revokes local URLs on replace, clear and drop.
pub struct ImagePreview {
    current: Option<Preview>,
    revoker: Rc<dyn UrlRevoker>,
}

impl ImagePreview {
    pub fn new(revoker: Rc<dyn UrlRevoker>) -> Self {
        Self {
            current: None,
            revoker,
        }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserUrls))
    }

    pub fn current(&self) -> Option<&Preview> {
        self.current.as_ref()
    }

    pub fn src(&self) -> Option<String> {
        self.current.as_ref().map(|p| p.src().to_string())
    }

    pub fn show_remote(&mut self, preview: Option<Preview>) {
        self.replace(preview);
    }

    pub fn show_local(&mut self, object_url: String) {
        self.replace(Some(Preview::Local(object_url)));
    }

    pub fn clear(&mut self) {
        self.replace(None);
    }

    fn replace(&mut self, next: Option<Preview>) {
        if let Some(Preview::Local(url)) = std::mem::replace(&mut self.current, next) {
            self.revoker.revoke(&url);
        }
    }
}

impl Drop for ImagePreview {
    fn drop(&mut self) {
        self.clear();
    }
}
