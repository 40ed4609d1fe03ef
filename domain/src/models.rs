use core_types::listing::{Currency, District, PropertyType, RentType};

#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub price: u64,
    pub currency: Currency,
    pub location: String,
    /// `None` for listings outside Yerevan.
    pub district: Option<District>,
    pub bedrooms: u8,
    pub sqm: u32,
    pub property_type: PropertyType,
    pub rent_type: RentType,
    pub furnished: bool,
    pub pets_allowed: bool,
    pub kids_allowed: bool,
    pub balcony: bool,
    pub parking: bool,
    pub instant_booking: bool,
    pub min_nights: u32,
    /// Latitude, longitude
    pub coordinates: (f64, f64),
    pub images: Vec<String>,
}

/// The static listings shown on the home page.
pub fn demo_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: "1".to_string(),
            title: "Modern apartment in the center".to_string(),
            price: 180_000,
            currency: Currency::Amd,
            location: "Kentron, Yerevan".to_string(),
            district: Some(District::Kentron),
            bedrooms: 2,
            sqm: 65,
            property_type: PropertyType::Apartment,
            rent_type: RentType::Long,
            furnished: true,
            pets_allowed: false,
            kids_allowed: true,
            balcony: true,
            parking: false,
            instant_booking: false,
            min_nights: 30,
            coordinates: (40.1833, 44.5167),
            images: vec![
                "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?w=400".to_string(),
            ],
        },
        Listing {
            id: "2".to_string(),
            title: "Cozy house with a garden".to_string(),
            price: 350,
            currency: Currency::Usd,
            location: "Arabkir, Yerevan".to_string(),
            district: Some(District::Arabkir),
            bedrooms: 3,
            sqm: 120,
            property_type: PropertyType::House,
            rent_type: RentType::Long,
            furnished: false,
            pets_allowed: true,
            kids_allowed: true,
            balcony: false,
            parking: true,
            instant_booking: false,
            min_nights: 30,
            coordinates: (40.2000, 44.5333),
            images: vec![
                "https://images.unsplash.com/photo-1513584684374-8bab748fbf90?w=400".to_string(),
            ],
        },
        Listing {
            id: "3".to_string(),
            title: "Studio by the sea".to_string(),
            price: 45,
            currency: Currency::Usd,
            location: "Batumi".to_string(),
            district: None,
            bedrooms: 1,
            sqm: 35,
            property_type: PropertyType::Apartment,
            rent_type: RentType::Daily,
            furnished: true,
            pets_allowed: false,
            kids_allowed: true,
            balcony: true,
            parking: false,
            instant_booking: true,
            min_nights: 2,
            coordinates: (41.6168, 41.6367),
            images: vec![
                "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=400".to_string(),
            ],
        },
    ]
}
