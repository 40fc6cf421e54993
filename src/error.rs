use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures coming from the host environment. None of these are shown to the
/// visitor; callers log them and fall back to a usable page.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("no global window available")]
    NoWindow,
    #[error("event listener registration failed: {0}")]
    Listener(String),
    #[error("intersection observer unavailable: {0}")]
    ObserverUnsupported(String),
    #[error("could not open {url}: {reason}")]
    Open { url: String, reason: String },
    #[error("bundled content is invalid: {0}")]
    Content(#[from] serde_json::Error),
}

impl UiError {
    pub fn listener(err: JsValue) -> Self {
        UiError::Listener(format!("{:?}", err))
    }

    pub fn observer(err: JsValue) -> Self {
        UiError::ObserverUnsupported(format!("{:?}", err))
    }

    pub fn open(url: &str, err: JsValue) -> Self {
        UiError::Open {
            url: url.to_string(),
            reason: format!("{:?}", err),
        }
    }
}
