use std::str::FromStr;

use core_types::{
    CoreTypeError,
    listing::{Currency, District, RentType},
};

use crate::{models::Listing, search::matches_query};

/// Slider limits of the price filter for one rent type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBounds {
    pub min: u64,
    pub max: u64,
    pub step: u64,
}

impl PriceBounds {
    pub fn for_rent_type(rent_type: RentType) -> Self {
        match rent_type {
            RentType::Long => PriceBounds {
                min: 50_000,
                max: 1_000_000,
                step: 10_000,
            },
            RentType::Daily => PriceBounds {
                min: 20,
                max: 200,
                step: 5,
            },
        }
    }

    /// Clamps `value` into the bounds and snaps it down to a step.
    pub fn snap(&self, value: u64) -> u64 {
        let clamped = value.clamp(self.min, self.max);
        self.min + (clamped - self.min) / self.step * self.step
    }
}

/// Inclusive price range, expressed in `currency`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
    pub currency: Currency,
}

impl PriceRange {
    pub fn default_for(rent_type: RentType) -> Self {
        let (min, max) = match rent_type {
            RentType::Long => (50_000, 500_000),
            RentType::Daily => (20, 200),
        };
        PriceRange {
            min,
            max,
            currency: Currency::Amd,
        }
    }

    /// Listings priced in another currency are not filtered by price.
    pub fn contains(&self, price: u64, currency: Currency) -> bool {
        currency != self.currency || (self.min..=self.max).contains(&price)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BedroomFilter {
    #[default]
    Any,
    Studio,
    Exactly(u8),
    AtLeast(u8),
}

impl BedroomFilter {
    pub fn matches(&self, bedrooms: u8) -> bool {
        match self {
            BedroomFilter::Any => true,
            BedroomFilter::Studio => bedrooms == 0,
            BedroomFilter::Exactly(n) => bedrooms == *n,
            BedroomFilter::AtLeast(n) => bedrooms >= *n,
        }
    }
}

impl FromStr for BedroomFilter {
    type Err = CoreTypeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "any" => return Ok(BedroomFilter::Any),
            "studio" => return Ok(BedroomFilter::Studio),
            _ => {}
        }
        let parse = |digits: &str| {
            digits.parse::<u8>().map_err(|_| {
                CoreTypeError::ConversionError(format!("Failed convert to BedroomFilter: {}", s))
            })
        };
        match s.strip_suffix('+') {
            Some(digits) => Ok(BedroomFilter::AtLeast(parse(digits)?)),
            None => Ok(BedroomFilter::Exactly(parse(s)?)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FurnishedFilter {
    #[default]
    Any,
    Yes,
    No,
}

impl FurnishedFilter {
    pub fn matches(&self, furnished: bool) -> bool {
        match self {
            FurnishedFilter::Any => true,
            FurnishedFilter::Yes => furnished,
            FurnishedFilter::No => !furnished,
        }
    }
}

/// Switches shown on the long term tab. A set switch requires the feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LongTermAmenities {
    pub pets_allowed: bool,
    pub kids_allowed: bool,
    pub balcony: bool,
    pub parking: bool,
}

impl LongTermAmenities {
    fn matches(&self, listing: &Listing) -> bool {
        (!self.pets_allowed || listing.pets_allowed)
            && (!self.kids_allowed || listing.kids_allowed)
            && (!self.balcony || listing.balcony)
            && (!self.parking || listing.parking)
    }
}

/// Night counts offered by the minimum nights selector.
pub const MIN_NIGHTS_CHOICES: [u32; 4] = [1, 2, 3, 7];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DailyOptions {
    pub instant_booking: bool,
    /// Length of the intended stay; listings requiring more nights are hidden.
    pub nights: Option<u32>,
}

impl DailyOptions {
    fn matches(&self, listing: &Listing) -> bool {
        (!self.instant_booking || listing.instant_booking)
            && self.nights.is_none_or(|nights| listing.min_nights <= nights)
    }
}

/// Search and filter state of the home page.
///
/// Every predicate is independent and all of them must hold for a listing to
/// be shown. Amenity switches only apply on the tab that displays them.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingFilter {
    pub rent_type: RentType,
    pub price: PriceRange,
    districts: Vec<District>,
    pub bedrooms: BedroomFilter,
    pub furnished: FurnishedFilter,
    pub long_term: LongTermAmenities,
    pub daily: DailyOptions,
    pub query: String,
}

impl Default for ListingFilter {
    fn default() -> Self {
        Self::new(RentType::Long)
    }
}

impl ListingFilter {
    pub fn new(rent_type: RentType) -> Self {
        Self {
            rent_type,
            price: PriceRange::default_for(rent_type),
            districts: Vec::new(),
            bedrooms: BedroomFilter::default(),
            furnished: FurnishedFilter::default(),
            long_term: LongTermAmenities::default(),
            daily: DailyOptions::default(),
            query: String::new(),
        }
    }

    /// Restores the defaults of the current tab.
    pub fn reset(&mut self) {
        *self = Self::new(self.rent_type);
    }

    /// Switches tab. The price range resets because the two tabs use different scales.
    pub fn set_rent_type(&mut self, rent_type: RentType) {
        if self.rent_type != rent_type {
            self.rent_type = rent_type;
            self.price = PriceRange {
                currency: self.price.currency,
                ..PriceRange::default_for(rent_type)
            };
        }
    }

    /// Sets the price range, keeping it inside the slider bounds of the current tab.
    pub fn set_price_range(&mut self, min: u64, max: u64) {
        let bounds = PriceBounds::for_rent_type(self.rent_type);
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.price.min = bounds.snap(min);
        self.price.max = bounds.snap(max);
    }

    pub fn toggle_district(&mut self, district: District) {
        match self.districts.iter().position(|d| *d == district) {
            Some(index) => {
                self.districts.remove(index);
            }
            None => self.districts.push(district),
        }
    }

    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        if listing.rent_type != self.rent_type {
            return false;
        }
        if !self.price.contains(listing.price, listing.currency) {
            return false;
        }
        if !self.districts.is_empty()
            && !listing
                .district
                .is_some_and(|d| self.districts.contains(&d))
        {
            return false;
        }
        if !self.bedrooms.matches(listing.bedrooms) || !self.furnished.matches(listing.furnished) {
            return false;
        }
        let tab_options = match self.rent_type {
            RentType::Long => self.long_term.matches(listing),
            RentType::Daily => self.daily.matches(listing),
        };
        if !tab_options {
            return false;
        }

        let district_label = listing.district.map(|d| d.to_string()).unwrap_or_default();
        matches_query(
            &self.query,
            &[&listing.title, &listing.location, &district_label],
        )
    }

    /// Listings passing every predicate, in input order.
    pub fn apply<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        listings.iter().filter(|l| self.matches(l)).collect()
    }
}
