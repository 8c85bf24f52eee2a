//! Product images.

use crate::localized::LocalizedString;
use serde::{Deserialize, Serialize};

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDimensions {
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

/// An image in a variant's ordered image list.
///
/// Images are identified by URL; position in the list is meaningful and is
/// diffed by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Image URL, the identity key.
    pub url: String,
    /// Localized label, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<LocalizedString>,
    /// Pixel dimensions, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<ImageDimensions>,
}

impl Image {
    /// Creates an image from a URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            label: None,
            dimensions: None,
        }
    }

    /// Sets the localized label.
    pub fn with_label(mut self, label: LocalizedString) -> Self {
        self.label = Some(label);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_omits_absent_fields() {
        let img = Image::new("https://img.example.com/a.png");
        let json = serde_json::to_value(&img).unwrap();
        assert_eq!(json, serde_json::json!({"url": "https://img.example.com/a.png"}));
    }
}
