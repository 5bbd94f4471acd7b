//! Crate-wide error type.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here ever reaches the user as an exception. The boot sequence
//! reports `MissingElement` at debug level (the component just stays off)
//! and everything else at warn level, then moves on to the next component.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum MarqueeError {
    /// A required root element is not on the page.
    #[error("element not found: {0}")]
    MissingElement(&'static str),
    /// A DOM or JS call failed; the `JsValue` is stringified.
    #[error("dom call failed: {0}")]
    Js(String),
    /// The inline configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    /// A data attribute holds text that cannot be interpreted.
    #[error("invalid attribute {name}={value:?}")]
    InvalidAttribute { name: &'static str, value: String },
    /// The contact form transport reported a failure.
    #[error("submission failed: {0}")]
    Submit(String),
}

impl MarqueeError {
    /// Stable short code used as the log prefix.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingElement(_) => "E_MISSING_ELEMENT",
            Self::Js(_) => "E_DOM",
            Self::Config(_) => "E_CONFIG",
            Self::InvalidAttribute { .. } => "E_ATTRIBUTE",
            Self::Submit(_) => "E_SUBMIT",
        }
    }

    /// Whether this error only means "component not present on this page".
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::MissingElement(_))
    }
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for MarqueeError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub type Result<T, E = MarqueeError> = std::result::Result<T, E>;
