use std::{collections::HashMap, time::Duration};

use core_types::{SettingName, UploadedFile};
use domain::property_draft::LISTING_MAX_PHOTOS;

use crate::error::Error;

pub const DEFAULT_MAX_PHOTO_COUNT: usize = 10;
pub const DEFAULT_SIMULATED_UPLOAD_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Photo limit of a standalone uploader.
    pub max_photo_count: usize,
    pub simulated_upload_delay: Duration,
    /// Photo limit of the uploader embedded in the property form.
    pub listing_max_photo_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_photo_count: DEFAULT_MAX_PHOTO_COUNT,
            simulated_upload_delay: DEFAULT_SIMULATED_UPLOAD_DELAY,
            listing_max_photo_count: LISTING_MAX_PHOTOS,
        }
    }
}

fn parse_setting<T: std::str::FromStr>(
    map: &HashMap<String, String>,
    name: SettingName,
) -> Result<Option<T>, Error> {
    match map.get(name.as_str()) {
        None => Ok(None),
        Some(value) => value.trim().parse::<T>().map(Some).map_err(|_| {
            Error::SettingsError(format!("Invalid value '{}' for {}", value, name))
        }),
    }
}

fn positive_count(value: Option<usize>, name: SettingName) -> Result<Option<usize>, Error> {
    match value {
        Some(0) => Err(Error::SettingsError(format!("{} must be at least 1", name))),
        other => Ok(other),
    }
}

impl TryFrom<HashMap<String, String>> for Settings {
    type Error = Error;

    fn try_from(map: HashMap<String, String>) -> Result<Self, Self::Error> {
        let defaults = Settings::default();
        let max_photo_count = positive_count(
            parse_setting(&map, SettingName::MaxPhotoCount)?,
            SettingName::MaxPhotoCount,
        )?;
        let listing_max_photo_count = positive_count(
            parse_setting(&map, SettingName::ListingMaxPhotoCount)?,
            SettingName::ListingMaxPhotoCount,
        )?;
        let delay_ms: Option<u64> = parse_setting(&map, SettingName::SimulatedUploadDelayMs)?;

        Ok(Self {
            max_photo_count: max_photo_count.unwrap_or(defaults.max_photo_count),
            simulated_upload_delay: delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.simulated_upload_delay),
            listing_max_photo_count: listing_max_photo_count
                .unwrap_or(defaults.listing_max_photo_count),
        })
    }
}

impl Settings {
    pub fn to_map(&self) -> HashMap<String, String> {
        HashMap::from([
            (
                SettingName::MaxPhotoCount.as_str().to_string(),
                self.max_photo_count.to_string(),
            ),
            (
                SettingName::SimulatedUploadDelayMs.as_str().to_string(),
                self.simulated_upload_delay.as_millis().to_string(),
            ),
            (
                SettingName::ListingMaxPhotoCount.as_str().to_string(),
                self.listing_max_photo_count.to_string(),
            ),
        ])
    }
}

/// Point-in-time view of an upload controller for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadSnapshot {
    pub accepted: Vec<UploadedFile>,
    pub max_count: usize,
    pub is_uploading: bool,
    pub progress_percent: f64,
    pub drag_active: bool,
}

impl UploadSnapshot {
    pub fn remaining_capacity(&self) -> usize {
        self.max_count.saturating_sub(self.accepted.len())
    }

    /// The drop zone only takes new files when idle and not full.
    pub fn can_accept_more(&self) -> bool {
        !self.is_uploading && self.remaining_capacity() > 0
    }

    pub fn count_label(&self) -> String {
        format!("Uploaded photos ({}/{})", self.accepted.len(), self.max_count)
    }

    pub fn progress_label(&self) -> String {
        format!("{}% uploaded", self.progress_percent.round() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use utils::test_utils::uploaded_file;

    #[test]
    fn test_settings_from_empty_map() {
        let settings = Settings::try_from(HashMap::new()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.max_photo_count, 10);
        assert_eq!(settings.listing_max_photo_count, 15);
    }

    #[test]
    fn test_settings_from_map() {
        let map = HashMap::from([
            ("max_photo_count".to_string(), "4".to_string()),
            ("simulated_upload_delay_ms".to_string(), " 250 ".to_string()),
        ]);
        let settings = Settings::try_from(map).unwrap();
        assert_eq!(settings.max_photo_count, 4);
        assert_eq!(settings.simulated_upload_delay, Duration::from_millis(250));
        assert_eq!(settings.listing_max_photo_count, LISTING_MAX_PHOTOS);
    }

    #[test]
    fn test_settings_rejects_bad_values() {
        let map = HashMap::from([("max_photo_count".to_string(), "many".to_string())]);
        assert!(matches!(
            Settings::try_from(map),
            Err(Error::SettingsError(_))
        ));

        let map = HashMap::from([("listing_max_photo_count".to_string(), "0".to_string())]);
        assert!(matches!(
            Settings::try_from(map),
            Err(Error::SettingsError(_))
        ));
    }

    #[test]
    fn test_settings_map_round_trip() {
        let settings = Settings {
            max_photo_count: 3,
            simulated_upload_delay: Duration::from_millis(5),
            listing_max_photo_count: 7,
        };
        assert_eq!(Settings::try_from(settings.to_map()).unwrap(), settings);
    }

    #[test]
    fn test_snapshot_labels() {
        let snapshot = UploadSnapshot {
            accepted: vec![uploaded_file("a", "a.jpg")],
            max_count: 2,
            is_uploading: true,
            progress_percent: 66.666,
            drag_active: false,
        };
        assert_eq!(snapshot.count_label(), "Uploaded photos (1/2)");
        assert_eq!(snapshot.progress_label(), "67% uploaded");
        assert_eq!(snapshot.remaining_capacity(), 1);
        assert!(!snapshot.can_accept_more());

        let idle = UploadSnapshot {
            is_uploading: false,
            ..snapshot
        };
        assert!(idle.can_accept_more());
    }
}
