//! Error types for the poster engine

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, PosterError>;

/// Errors that can occur while collecting form state or generating the poster
#[derive(Error, Debug)]
pub enum PosterError {
    /// A required form field is absent at generate time
    #[error("Missing required input: {0}")]
    MissingInput(&'static str),

    /// The uploaded photo data URL could not be decoded
    #[error("Invalid photo: {0}")]
    InvalidPhoto(String),

    /// A decorative image failed to load (non-fatal, the element is omitted)
    #[error("Asset failed to load: {0}")]
    AssetLoad(String),

    /// The attendee photo failed to load (fatal)
    #[error("Photo failed to load: {0}")]
    PhotoLoad(String),

    /// A generation is already in flight
    #[error("A poster is already being generated")]
    Busy,

    /// Canvas unavailable or a drawing call failed
    #[error("Canvas error: {0}")]
    Canvas(String),

    /// PNG encoding produced no usable output
    #[error("PNG encode failed: {0}")]
    Encode(String),
}

impl PosterError {
    pub(crate) fn canvas(value: JsValue) -> PosterError {
        PosterError::Canvas(format!("{:?}", value))
    }
}

impl From<PosterError> for JsValue {
    fn from(err: PosterError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}
