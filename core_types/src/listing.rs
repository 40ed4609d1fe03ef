use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::CoreTypeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Room,
    Commercial,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Room => "room",
            PropertyType::Commercial => "commercial",
        }
    }

    /// Apartments and rooms carry floor and bathroom details.
    pub fn has_floor_details(&self) -> bool {
        matches!(self, PropertyType::Apartment | PropertyType::Room)
    }
}

impl FromStr for PropertyType {
    type Err = CoreTypeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "apartment" => Ok(PropertyType::Apartment),
            "house" => Ok(PropertyType::House),
            "room" => Ok(PropertyType::Room),
            "commercial" => Ok(PropertyType::Commercial),
            _ => Err(CoreTypeError::ConversionError(format!(
                "Failed convert to PropertyType: {}",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentType {
    #[strum(serialize = "Long term")]
    Long,
    #[strum(serialize = "Daily")]
    Daily,
}

impl RentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RentType::Long => "long",
            RentType::Daily => "daily",
        }
    }
}

impl FromStr for RentType {
    type Err = CoreTypeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "long" => Ok(RentType::Long),
            "daily" => Ok(RentType::Daily),
            _ => Err(CoreTypeError::ConversionError(format!(
                "Failed convert to RentType: {}",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
pub enum Currency {
    #[strum(serialize = "AMD")]
    #[serde(rename = "AMD")]
    Amd,
    #[strum(serialize = "USD")]
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Amd => "AMD",
            Currency::Usd => "USD",
        }
    }
}

impl FromStr for Currency {
    type Err = CoreTypeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AMD" => Ok(Currency::Amd),
            "USD" => Ok(Currency::Usd),
            _ => Err(CoreTypeError::ConversionError(format!(
                "Failed convert to Currency: {}",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BathType {
    Bath,
    Shower,
    #[strum(serialize = "Combined bathroom")]
    Combined,
    #[strum(serialize = "Separate bathroom")]
    Separate,
}

impl BathType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BathType::Bath => "bath",
            BathType::Shower => "shower",
            BathType::Combined => "combined",
            BathType::Separate => "separate",
        }
    }
}

impl FromStr for BathType {
    type Err = CoreTypeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bath" => Ok(BathType::Bath),
            "shower" => Ok(BathType::Shower),
            "combined" => Ok(BathType::Combined),
            "separate" => Ok(BathType::Separate),
            _ => Err(CoreTypeError::ConversionError(format!(
                "Failed convert to BathType: {}",
                s
            ))),
        }
    }
}

/// Whether a house is rented as a whole or in part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseType {
    #[strum(serialize = "Whole house")]
    Full,
    #[strum(serialize = "Part of house")]
    Part,
}

impl HouseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HouseType::Full => "full",
            HouseType::Part => "part",
        }
    }
}

impl FromStr for HouseType {
    type Err = CoreTypeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(HouseType::Full),
            "part" => Ok(HouseType::Part),
            _ => Err(CoreTypeError::ConversionError(format!(
                "Failed convert to HouseType: {}",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum District {
    Kentron,
    Arabkir,
    Avan,
    Davtashen,
    Erebuni,
    #[strum(serialize = "Kanaker-Zeytun")]
    KanakerZeytun,
    #[strum(serialize = "Malatia-Sebastia")]
    MalatiaSebastia,
    #[strum(serialize = "Nork-Marash")]
    NorkMarash,
    Nubarashen,
    Shengavit,
}

impl District {
    pub fn as_str(&self) -> &'static str {
        match self {
            District::Kentron => "kentron",
            District::Arabkir => "arabkir",
            District::Avan => "avan",
            District::Davtashen => "davtashen",
            District::Erebuni => "erebuni",
            District::KanakerZeytun => "kanaker-zeytun",
            District::MalatiaSebastia => "malatia-sebastia",
            District::NorkMarash => "nork-marash",
            District::Nubarashen => "nubarashen",
            District::Shengavit => "shengavit",
        }
    }
}

impl FromStr for District {
    type Err = CoreTypeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(' ', "-");
        match key.as_str() {
            "kentron" => Ok(District::Kentron),
            "arabkir" => Ok(District::Arabkir),
            "avan" => Ok(District::Avan),
            "davtashen" => Ok(District::Davtashen),
            "erebuni" => Ok(District::Erebuni),
            "kanaker-zeytun" => Ok(District::KanakerZeytun),
            "malatia-sebastia" => Ok(District::MalatiaSebastia),
            "nork-marash" => Ok(District::NorkMarash),
            "nubarashen" => Ok(District::Nubarashen),
            "shengavit" => Ok(District::Shengavit),
            _ => Err(CoreTypeError::ConversionError(format!(
                "Failed convert to District: {}",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_keys_parse_back() {
        for t in PropertyType::iter() {
            assert_eq!(t.as_str().parse::<PropertyType>().unwrap(), t);
        }
        for t in RentType::iter() {
            assert_eq!(t.as_str().parse::<RentType>().unwrap(), t);
        }
        for c in Currency::iter() {
            assert_eq!(c.as_str().parse::<Currency>().unwrap(), c);
        }
        for b in BathType::iter() {
            assert_eq!(b.as_str().parse::<BathType>().unwrap(), b);
        }
        for h in HouseType::iter() {
            assert_eq!(h.as_str().parse::<HouseType>().unwrap(), h);
        }
        for d in District::iter() {
            assert_eq!(d.as_str().parse::<District>().unwrap(), d);
        }
    }

    #[test]
    fn test_district_parses_display_label() {
        assert_eq!(
            "Malatia-Sebastia".parse::<District>().unwrap(),
            District::MalatiaSebastia
        );
        assert_eq!(
            "nork marash".parse::<District>().unwrap(),
            District::NorkMarash
        );
        assert_eq!(District::iter().count(), 10);
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        assert!("villa".parse::<PropertyType>().is_err());
        assert!("weekly".parse::<RentType>().is_err());
        assert!("EUR".parse::<Currency>().is_err());
        assert!("paris".parse::<District>().is_err());
    }

    #[test]
    fn test_floor_details() {
        assert!(PropertyType::Apartment.has_floor_details());
        assert!(PropertyType::Room.has_floor_details());
        assert!(!PropertyType::House.has_floor_details());
        assert!(!PropertyType::Commercial.has_floor_details());
    }
}
