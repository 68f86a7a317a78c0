//! Browser capabilities the preview needs, behind traits so the handlers can
//! run against test doubles.

use js_sys::{Array, Function, Object, Promise, Reflect, Uint8Array};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FilePropertyBag, HtmlAnchorElement, Response};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("no browser window available")]
    NoWindow,
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("fetch returned HTTP {0}")]
    HttpStatus(u16),
    #[error("share failed: {0}")]
    Share(String),
    #[error("share was cancelled")]
    ShareCancelled,
    #[error("native sharing is not supported")]
    ShareUnsupported,
    #[error("download failed: {0}")]
    Download(String),
}

fn js_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

fn js_error_name(value: &JsValue) -> Option<String> {
    Reflect::get(value, &JsValue::from_str("name"))
        .ok()
        .and_then(|n| n.as_string())
}

/// A single file handed to the share sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareFile {
    pub name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub files: Vec<ShareFile>,
}

#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, PlatformError>;
}

pub trait Download {
    fn download(&self, url: &str, filename: &str) -> Result<(), PlatformError>;
}

#[allow(async_fn_in_trait)]
pub trait Share {
    fn is_supported(&self) -> bool;
    async fn share(&self, request: ShareRequest) -> Result<(), PlatformError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserFetch;

impl Fetch for BrowserFetch {
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, PlatformError> {
        let window = web_sys::window().ok_or(PlatformError::NoWindow)?;
        let response: Response = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(|e| PlatformError::Fetch(js_message(&e)))?
            .dyn_into()
            .map_err(|e| PlatformError::Fetch(js_message(&e)))?;

        if !response.ok() {
            return Err(PlatformError::HttpStatus(response.status()));
        }

        let body = response
            .array_buffer()
            .map_err(|e| PlatformError::Fetch(js_message(&e)))?;
        let buffer = JsFuture::from(body)
            .await
            .map_err(|e| PlatformError::Fetch(js_message(&e)))?;
        Ok(Uint8Array::new(&buffer).to_vec())
    }
}

/// Saves a resource through a transient `<a download>` element.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDownload;

impl Download for BrowserDownload {
    fn download(&self, url: &str, filename: &str) -> Result<(), PlatformError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(PlatformError::NoWindow)?;
        let body = document.body().ok_or(PlatformError::NoWindow)?;

        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|e| PlatformError::Download(js_message(&e)))?
            .dyn_into()
            .map_err(|e| PlatformError::Download(js_message(&e)))?;
        anchor.set_href(url);
        anchor.set_download(filename);

        body.append_child(&anchor)
            .map_err(|e| PlatformError::Download(js_message(&e)))?;
        anchor.click();
        anchor.remove();
        Ok(())
    }
}

/// `navigator.share` with a files payload.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeShare;

impl NativeShare {
    fn build_file(file: &ShareFile) -> Result<web_sys::File, PlatformError> {
        let bits = Array::of1(&Uint8Array::from(file.bytes.as_slice()));
        let options = FilePropertyBag::new();
        options.set_type(file.mime_type);
        web_sys::File::new_with_u8_array_sequence_and_options(&bits, &file.name, &options)
            .map_err(|e| PlatformError::Share(js_message(&e)))
    }

    fn build_data(request: &ShareRequest) -> Result<Object, PlatformError> {
        let files = Array::new();
        for file in &request.files {
            let built = Self::build_file(file)?;
            files.push(&built);
        }
        let data = Object::new();
        Reflect::set(&data, &JsValue::from_str("title"), &JsValue::from_str(&request.title))
            .map_err(|e| PlatformError::Share(js_message(&e)))?;
        Reflect::set(&data, &JsValue::from_str("files"), &files)
            .map_err(|e| PlatformError::Share(js_message(&e)))?;
        Ok(data)
    }
}

impl Share for NativeShare {
    fn is_supported(&self) -> bool {
        true
    }

    async fn share(&self, request: ShareRequest) -> Result<(), PlatformError> {
        let navigator = web_sys::window().ok_or(PlatformError::NoWindow)?.navigator();
        let share_fn: Function = Reflect::get(&navigator, &JsValue::from_str("share"))
            .ok()
            .and_then(|f| f.dyn_into().ok())
            .ok_or(PlatformError::ShareUnsupported)?;

        let data = Self::build_data(&request)?;
        let promise: Promise = share_fn
            .call1(&navigator, &data)
            .map_err(|e| PlatformError::Share(js_message(&e)))?
            .dyn_into()
            .map_err(|e| PlatformError::Share(js_message(&e)))?;

        match JsFuture::from(promise).await {
            Ok(_) => Ok(()),
            Err(e) if js_error_name(&e).as_deref() == Some("AbortError") => {
                Err(PlatformError::ShareCancelled)
            }
            Err(e) => Err(PlatformError::Share(js_message(&e))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Unavailable;

impl Share for Unavailable {
    fn is_supported(&self) -> bool {
        false
    }

    async fn share(&self, _request: ShareRequest) -> Result<(), PlatformError> {
        Err(PlatformError::ShareUnsupported)
    }
}

/// The share capability picked for this browser.
#[derive(Clone, Copy, Debug)]
pub enum PlatformShare {
    Native(NativeShare),
    Unavailable(Unavailable),
}

impl PlatformShare {
    pub fn detect() -> Self {
        let has_share = web_sys::window()
            .map(|w| w.navigator())
            .and_then(|nav| Reflect::has(&nav, &JsValue::from_str("share")).ok())
            .unwrap_or(false);

        if has_share {
            PlatformShare::Native(NativeShare)
        } else {
            PlatformShare::Unavailable(Unavailable)
        }
    }
}

impl Share for PlatformShare {
    fn is_supported(&self) -> bool {
        match self {
            PlatformShare::Native(native) => native.is_supported(),
            PlatformShare::Unavailable(none) => none.is_supported(),
        }
    }

    async fn share(&self, request: ShareRequest) -> Result<(), PlatformError> {
        match self {
            PlatformShare::Native(native) => native.share(request).await,
            PlatformShare::Unavailable(none) => none.share(request).await,
        }
    }
}
