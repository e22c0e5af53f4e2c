//! Provider output.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;

use super::Style;

/// Image returned by the provider, in whichever form it chose.
///
/// Adapters decide the variant once; downstream code only calls
/// [`ImageResult::into_image_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageResult {
    /// Hosted image.
    Url(String),

    /// Raw image bytes returned inline.
    InlineData { bytes: Vec<u8>, mime_type: String },
}

impl ImageResult {
    /// Renders the result as something a browser can put in `<img src>`.
    pub fn into_image_url(self) -> String {
        match self {
            ImageResult::Url(url) => url,
            ImageResult::InlineData { bytes, mime_type } => {
                format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
            }
        }
    }
}

/// Successful generation as returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub image_url: String,
    pub style: Style,
}

impl GenerationResult {
    pub fn new(image: ImageResult, style: Style) -> Self {
        Self {
            image_url: image.into_image_url(),
            style,
        }
    }
}
