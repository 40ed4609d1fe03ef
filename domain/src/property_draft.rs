use core_types::{
    UploadedFile,
    listing::{BathType, Currency, District, HouseType, PropertyType, RentType},
};
use thiserror::Error;

/// Default photo limit of the uploader embedded in the property form.
pub const LISTING_MAX_PHOTOS: usize = 15;

/// Highest selectable bedroom count, shown as "5+".
pub const MAX_BEDROOMS: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftProblem {
    #[error("title is required")]
    MissingTitle,
    #[error("district is required")]
    MissingDistrict,
    #[error("price must be a positive number, got '{0}'")]
    InvalidPrice(String),
    #[error("bedrooms must be between 0 and {max}, got '{value}'", max = MAX_BEDROOMS)]
    InvalidBedrooms { value: String },
    #[error("area must be a positive number of square meters, got '{0}'")]
    InvalidArea(String),
    #[error("floor must be a whole number, got '{0}'")]
    InvalidFloor(String),
    #[error("total floors must be a positive whole number, got '{0}'")]
    InvalidTotalFloors(String),
    #[error("floor {floor} is above the top floor {total_floors}")]
    FloorAboveTotal { floor: u32, total_floors: u32 },
    #[error("at least one photo is required")]
    MissingPhotos,
    #[error("at most {max} photos are allowed, got {count}")]
    TooManyPhotos { count: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid property draft: {}", join_problems(.problems))]
pub struct DraftError {
    pub problems: Vec<DraftProblem>,
}

fn join_problems(problems: &[DraftProblem]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Raw state of the "add property" form. Numeric fields hold the text typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDraft {
    pub title: String,
    pub property_type: PropertyType,
    pub rent_type: RentType,
    pub price: String,
    pub currency: Currency,
    pub location: String,
    pub district: Option<District>,
    pub bedrooms: String,
    pub sqm: String,
    pub floor: String,
    pub total_floors: String,
    pub description: String,
    pub furnished: bool,
    pub pets_allowed: bool,
    pub kids_allowed: bool,
    pub balcony: bool,
    pub parking: bool,
    pub bath_type: BathType,
    pub has_yard: bool,
    pub house_type: HouseType,
    pub photos: Vec<UploadedFile>,
}

impl Default for PropertyDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            property_type: PropertyType::Apartment,
            rent_type: RentType::Long,
            price: String::new(),
            currency: Currency::Amd,
            location: String::new(),
            district: None,
            bedrooms: String::new(),
            sqm: String::new(),
            floor: String::new(),
            total_floors: String::new(),
            description: String::new(),
            furnished: false,
            pets_allowed: false,
            kids_allowed: false,
            balcony: false,
            parking: false,
            bath_type: BathType::Combined,
            has_yard: false,
            house_type: HouseType::Full,
            photos: Vec::new(),
        }
    }
}

/// Details that only exist for some property types.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDetails {
    Floors {
        floor: Option<u32>,
        total_floors: Option<u32>,
        bath_type: BathType,
    },
    House {
        house_type: HouseType,
        has_yard: bool,
    },
    None,
}

/// A validated property, ready to be saved.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySubmission {
    pub title: String,
    pub property_type: PropertyType,
    pub rent_type: RentType,
    pub price: u64,
    pub currency: Currency,
    pub location: Option<String>,
    pub district: District,
    pub bedrooms: u8,
    pub sqm: u32,
    pub description: String,
    pub furnished: bool,
    pub pets_allowed: bool,
    pub kids_allowed: bool,
    pub balcony: bool,
    pub parking: bool,
    pub details: TypeDetails,
    pub photos: Vec<UploadedFile>,
}

impl PropertySubmission {
    /// The first photo is shown as the main photo of the listing.
    pub fn main_photo(&self) -> Option<&UploadedFile> {
        self.photos.first()
    }
}

fn parse_positive<T>(value: &str) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    value
        .trim()
        .parse::<T>()
        .ok()
        .filter(|v| *v > T::default())
}

fn parse_optional(value: &str) -> Result<Option<u32>, ()> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value.parse::<u32>().map(Some).map_err(|_| ())
}

impl PropertyDraft {
    pub fn set_photos(&mut self, photos: Vec<UploadedFile>) {
        self.photos = photos;
    }

    /// Validates the draft against the default photo limit.
    pub fn validate(&self) -> Result<PropertySubmission, DraftError> {
        self.validate_with_photo_limit(LISTING_MAX_PHOTOS)
    }

    /// Validates the draft, reporting every problem at once.
    pub fn validate_with_photo_limit(
        &self,
        max_photos: usize,
    ) -> Result<PropertySubmission, DraftError> {
        let mut problems = Vec::new();

        let title = self.title.trim();
        if title.is_empty() {
            problems.push(DraftProblem::MissingTitle);
        }
        if self.district.is_none() {
            problems.push(DraftProblem::MissingDistrict);
        }

        let price = parse_positive::<u64>(&self.price);
        if price.is_none() {
            problems.push(DraftProblem::InvalidPrice(self.price.clone()));
        }

        let bedrooms = self
            .bedrooms
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|b| *b <= MAX_BEDROOMS);
        if bedrooms.is_none() {
            problems.push(DraftProblem::InvalidBedrooms {
                value: self.bedrooms.clone(),
            });
        }

        let sqm = parse_positive::<u32>(&self.sqm);
        if sqm.is_none() {
            problems.push(DraftProblem::InvalidArea(self.sqm.clone()));
        }

        let details = match self.property_type {
            PropertyType::Apartment | PropertyType::Room => {
                let floor = parse_optional(&self.floor).unwrap_or_else(|_| {
                    problems.push(DraftProblem::InvalidFloor(self.floor.clone()));
                    None
                });
                let total_floors = match parse_optional(&self.total_floors) {
                    Ok(Some(0)) | Err(_) => {
                        problems.push(DraftProblem::InvalidTotalFloors(self.total_floors.clone()));
                        None
                    }
                    Ok(total) => total,
                };
                if let (Some(floor), Some(total_floors)) = (floor, total_floors) {
                    if floor > total_floors {
                        problems.push(DraftProblem::FloorAboveTotal {
                            floor,
                            total_floors,
                        });
                    }
                }
                TypeDetails::Floors {
                    floor,
                    total_floors,
                    bath_type: self.bath_type,
                }
            }
            PropertyType::House => TypeDetails::House {
                house_type: self.house_type,
                has_yard: self.has_yard,
            },
            PropertyType::Commercial => TypeDetails::None,
        };

        if self.photos.is_empty() {
            problems.push(DraftProblem::MissingPhotos);
        } else if self.photos.len() > max_photos {
            problems.push(DraftProblem::TooManyPhotos {
                count: self.photos.len(),
                max: max_photos,
            });
        }

        match (price, bedrooms, sqm, self.district) {
            (Some(price), Some(bedrooms), Some(sqm), Some(district)) if problems.is_empty() => {
                let location = self.location.trim();
                Ok(PropertySubmission {
                    title: title.to_string(),
                    property_type: self.property_type,
                    rent_type: self.rent_type,
                    price,
                    currency: self.currency,
                    location: (!location.is_empty()).then(|| location.to_string()),
                    district,
                    bedrooms,
                    sqm,
                    description: self.description.trim().to_string(),
                    furnished: self.furnished,
                    pets_allowed: self.pets_allowed,
                    kids_allowed: self.kids_allowed,
                    balcony: self.balcony,
                    parking: self.parking,
                    details,
                    photos: self.photos.clone(),
                })
            }
            _ => Err(DraftError { problems }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: &str) -> UploadedFile {
        UploadedFile {
            id: id.to_string(),
            name: format!("{}.jpg", id),
            reference: format!("blob:local/{}", id),
            size_bytes: 10,
        }
    }

    fn valid_draft() -> PropertyDraft {
        PropertyDraft {
            title: "  Modern apartment in the center ".to_string(),
            price: "180000".to_string(),
            district: Some(District::Kentron),
            bedrooms: "2".to_string(),
            sqm: "65".to_string(),
            floor: "5".to_string(),
            total_floors: "9".to_string(),
            photos: vec![photo("a"), photo("b")],
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_apartment() {
        let submission = valid_draft().validate().unwrap();

        assert_eq!(submission.title, "Modern apartment in the center");
        assert_eq!(submission.price, 180_000);
        assert_eq!(submission.bedrooms, 2);
        assert_eq!(submission.sqm, 65);
        assert_eq!(submission.location, None);
        assert_eq!(
            submission.details,
            TypeDetails::Floors {
                floor: Some(5),
                total_floors: Some(9),
                bath_type: BathType::Combined,
            }
        );
        assert_eq!(submission.main_photo().unwrap().id, "a");
    }

    #[test]
    fn test_empty_draft_reports_all_problems() {
        let err = PropertyDraft::default().validate().unwrap_err();

        assert_eq!(
            err.problems,
            vec![
                DraftProblem::MissingTitle,
                DraftProblem::MissingDistrict,
                DraftProblem::InvalidPrice(String::new()),
                DraftProblem::InvalidBedrooms {
                    value: String::new()
                },
                DraftProblem::InvalidArea(String::new()),
                DraftProblem::MissingPhotos,
            ]
        );
        assert!(err.to_string().starts_with("Invalid property draft: title is required"));
    }

    #[test]
    fn test_studio_is_zero_bedrooms() {
        let draft = PropertyDraft {
            bedrooms: "0".to_string(),
            ..valid_draft()
        };
        assert_eq!(draft.validate().unwrap().bedrooms, 0);

        let draft = PropertyDraft {
            bedrooms: "6".to_string(),
            ..valid_draft()
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_price_must_be_positive() {
        for price in ["0", "-5", "abc", "12.5"] {
            let draft = PropertyDraft {
                price: price.to_string(),
                ..valid_draft()
            };
            let err = draft.validate().unwrap_err();
            assert_eq!(err.problems, vec![DraftProblem::InvalidPrice(price.to_string())]);
        }
    }

    #[test]
    fn test_floor_above_total() {
        let draft = PropertyDraft {
            floor: "10".to_string(),
            total_floors: "9".to_string(),
            ..valid_draft()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(
            err.problems,
            vec![DraftProblem::FloorAboveTotal {
                floor: 10,
                total_floors: 9
            }]
        );
    }

    #[test]
    fn test_floors_are_optional() {
        let draft = PropertyDraft {
            floor: String::new(),
            total_floors: " ".to_string(),
            ..valid_draft()
        };
        let submission = draft.validate().unwrap();
        assert_eq!(
            submission.details,
            TypeDetails::Floors {
                floor: None,
                total_floors: None,
                bath_type: BathType::Combined,
            }
        );
    }

    #[test]
    fn test_house_ignores_floor_fields() {
        let draft = PropertyDraft {
            property_type: PropertyType::House,
            floor: "not a number".to_string(),
            house_type: HouseType::Part,
            has_yard: true,
            ..valid_draft()
        };
        let submission = draft.validate().unwrap();
        assert_eq!(
            submission.details,
            TypeDetails::House {
                house_type: HouseType::Part,
                has_yard: true
            }
        );
    }

    #[test]
    fn test_commercial_has_no_details() {
        let draft = PropertyDraft {
            property_type: PropertyType::Commercial,
            ..valid_draft()
        };
        assert_eq!(draft.validate().unwrap().details, TypeDetails::None);
    }

    #[test]
    fn test_photo_limits() {
        let mut draft = valid_draft();
        draft.set_photos(Vec::new());
        assert_eq!(
            draft.validate().unwrap_err().problems,
            vec![DraftProblem::MissingPhotos]
        );

        draft.set_photos(
            (0..=LISTING_MAX_PHOTOS)
                .map(|i| photo(&i.to_string()))
                .collect(),
        );
        assert_eq!(
            draft.validate().unwrap_err().problems,
            vec![DraftProblem::TooManyPhotos {
                count: 16,
                max: LISTING_MAX_PHOTOS
            }]
        );
    }

    #[test]
    fn test_custom_photo_limit() {
        let draft = valid_draft();
        assert!(draft.validate_with_photo_limit(2).is_ok());

        let err = draft.validate_with_photo_limit(1).unwrap_err();
        assert_eq!(
            err.problems,
            vec![DraftProblem::TooManyPhotos { count: 2, max: 1 }]
        );
        assert!(err.to_string().contains("at most 1 photos are allowed, got 2"));
    }

    #[test]
    fn test_location_is_trimmed() {
        let draft = PropertyDraft {
            location: " Abovyan St. 10, apt 25 ".to_string(),
            ..valid_draft()
        };
        assert_eq!(
            draft.validate().unwrap().location.as_deref(),
            Some("Abovyan St. 10, apt 25")
        );
    }
}
