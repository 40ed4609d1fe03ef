pub mod events;
pub mod listing;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

pub type FileSize = u64;

/// Prefix that marks a MIME type as an image.
pub const IMAGE_MIME_PREFIX: &str = "image/";

#[derive(Debug, Clone, PartialEq)]
pub enum CoreTypeError {
    ConversionError(String),
}

impl std::fmt::Display for CoreTypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreTypeError::ConversionError(msg) => write!(f, "Conversion Error: {}", msg),
        }
    }
}

impl std::error::Error for CoreTypeError {}

/// A file handed over by a file picker or a drop event, before any validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFile {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: FileSize,
}

impl RawFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: FileSize) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with(IMAGE_MIME_PREFIX)
    }
}

/// A photo that has been stored and accepted into an upload set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: String,
    pub name: String,
    /// Handle used to render the photo, e.g. a local blob reference or a remote URL.
    pub reference: String,
    pub size_bytes: FileSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum SettingName {
    #[strum(serialize = "max_photo_count")]
    MaxPhotoCount,
    #[strum(serialize = "simulated_upload_delay_ms")]
    SimulatedUploadDelayMs,
    #[strum(serialize = "listing_max_photo_count")]
    ListingMaxPhotoCount,
}

impl SettingName {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingName::MaxPhotoCount => "max_photo_count",
            SettingName::SimulatedUploadDelayMs => "simulated_upload_delay_ms",
            SettingName::ListingMaxPhotoCount => "listing_max_photo_count",
        }
    }

    /// Name of the environment variable that overrides this setting.
    pub fn env_var(&self) -> String {
        format!("REALTY_{}", self.as_str().to_uppercase())
    }
}

impl TryFrom<&str> for SettingName {
    type Error = CoreTypeError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "max_photo_count" => Ok(SettingName::MaxPhotoCount),
            "simulated_upload_delay_ms" => Ok(SettingName::SimulatedUploadDelayMs),
            "listing_max_photo_count" => Ok(SettingName::ListingMaxPhotoCount),
            _ => Err(CoreTypeError::ConversionError(format!(
                "Unknown setting name: {}",
                value
            ))),
        }
    }
}
