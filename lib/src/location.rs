//! Mapping between AWS region identifiers and S3 bucket location tokens.
//!
//! S3 reports where a bucket lives as a location token, while the EMR API
//! wants a region identifier. [`REGIONS`] is the single table both
//! directions are derived from.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::Error;

/// S3 bucket location tokens, named the way the S3 client libraries name them.
#[allow(clippy::upper_case_acronyms)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, enum_utils::FromStr, enum_utils::IterVariants,
)]
pub enum Location {
    #[enumeration(rename = "DEFAULT")]
    Default,
    USWest,
    USWest2,
    EU,
    EUCentral1,
    APSoutheast,
    APSoutheast2,
    APNortheast,
    SAEast,
    CNNorth1,
}

/// Regions a job flow can be launched in, with the token of their buckets.
pub const REGIONS: &[(&str, Location)] = &[
    ("us-east-1", Location::Default),
    ("us-west-1", Location::USWest),
    ("us-west-2", Location::USWest2),
    ("eu-west-1", Location::EU),
    ("ap-southeast-1", Location::APSoutheast),
    ("ap-southeast-2", Location::APSoutheast2),
    ("ap-northeast-1", Location::APNortheast),
    ("sa-east-1", Location::SAEast),
];

impl Location {
    pub fn name(self) -> &'static str {
        match self {
            Location::Default => "DEFAULT",
            Location::USWest => "USWest",
            Location::USWest2 => "USWest2",
            Location::EU => "EU",
            Location::EUCentral1 => "EUCentral1",
            Location::APSoutheast => "APSoutheast",
            Location::APSoutheast2 => "APSoutheast2",
            Location::APNortheast => "APNortheast",
            Location::SAEast => "SAEast",
            Location::CNNorth1 => "CNNorth1",
        }
    }

    /// The `LocationConstraint` S3 reports for a bucket in this location.
    /// Buckets in us-east-1 report none, which is the empty string here.
    pub fn constraint(self) -> &'static str {
        match self {
            Location::Default => "",
            Location::USWest => "us-west-1",
            Location::USWest2 => "us-west-2",
            Location::EU => "EU",
            Location::EUCentral1 => "eu-central-1",
            Location::APSoutheast => "ap-southeast-1",
            Location::APSoutheast2 => "ap-southeast-2",
            Location::APNortheast => "ap-northeast-1",
            Location::SAEast => "sa-east-1",
            Location::CNNorth1 => "cn-north-1",
        }
    }

    pub fn from_constraint(constraint: Option<&str>) -> Option<Location> {
        match constraint.unwrap_or_default() {
            // newer Ireland buckets report the region instead of `EU`
            "eu-west-1" => Some(Location::EU),
            constraint => Location::iter().find(|location| location.constraint() == constraint),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn locations() -> &'static HashMap<Location, &'static str> {
    static LOCATIONS: OnceLock<HashMap<Location, &'static str>> = OnceLock::new();
    LOCATIONS.get_or_init(|| {
        REGIONS
            .iter()
            .map(|&(region, location)| (location, region))
            .collect()
    })
}

pub fn regions() -> impl Iterator<Item = &'static str> {
    REGIONS.iter().map(|&(region, _)| region)
}

/// Turn a region identifier (or a token name such as `USWest2`) into a
/// location token.
pub fn resolve_location(region: &str) -> Result<Location, Error> {
    if let Ok(location) = Location::from_str(region) {
        return Ok(location);
    }

    REGIONS
        .iter()
        .find(|&&(known, _)| known == region)
        .map(|&(_, location)| location)
        .ok_or_else(|| Error::UnknownRegion {
            region: region.to_string(),
            choices: regions()
                .map(|region| format!("  *{}", region))
                .collect::<Vec<_>>()
                .join("\n"),
        })
}

pub fn resolve_region(location: Location) -> Result<&'static str, Error> {
    locations()
        .get(&location)
        .copied()
        .ok_or(Error::UnknownLocation(location))
}

/// Accepts either spelling of a region and returns its identifier.
pub fn normalize_region(region: &str) -> Result<&'static str, Error> {
    resolve_region(resolve_location(region)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_region_round_trips() {
        for region in regions() {
            let location = resolve_location(region).unwrap();
            assert_eq!(resolve_region(location).unwrap(), region);
        }
    }

    #[test]
    fn reverse_table_is_the_exact_inverse() {
        assert_eq!(locations().len(), REGIONS.len());
        for &(region, location) in REGIONS {
            assert_eq!(locations()[&location], region);
        }
    }

    #[test]
    fn unknown_region_lists_every_choice() {
        let err = resolve_location("mars-north-1").unwrap_err();
        assert!(matches!(err, Error::UnknownRegion { .. }));

        let message = err.to_string();
        assert!(message.starts_with("mars-north-1 is not a known AWS location"));
        for region in regions() {
            assert!(message.contains(&format!("  *{}", region)), "{}", message);
        }
    }

    #[test]
    fn token_names_pass_through() {
        assert_eq!(resolve_location("USWest2").unwrap(), Location::USWest2);
        assert_eq!(resolve_location("DEFAULT").unwrap(), Location::Default);
        assert_eq!(resolve_location("EUCentral1").unwrap(), Location::EUCentral1);
    }

    #[test]
    fn tokens_outside_the_table_have_no_region() {
        let location = resolve_location("CNNorth1").unwrap();
        assert!(matches!(
            resolve_region(location),
            Err(Error::UnknownLocation(Location::CNNorth1))
        ));
    }

    #[test]
    fn normalize_accepts_both_spellings() {
        assert_eq!(normalize_region("SAEast").unwrap(), "sa-east-1");
        assert_eq!(normalize_region("sa-east-1").unwrap(), "sa-east-1");
        assert!(normalize_region("sa-east").is_err());
    }

    #[test]
    fn constraints_map_back_to_tokens() {
        assert_eq!(Location::from_constraint(None), Some(Location::Default));
        assert_eq!(Location::from_constraint(Some("")), Some(Location::Default));
        assert_eq!(Location::from_constraint(Some("EU")), Some(Location::EU));
        assert_eq!(Location::from_constraint(Some("eu-west-1")), Some(Location::EU));
        assert_eq!(
            Location::from_constraint(Some("ap-southeast-2")),
            Some(Location::APSoutheast2)
        );
        assert_eq!(Location::from_constraint(Some("mars-north-1")), None);
    }

    #[test]
    fn names_parse_back() {
        for location in Location::iter() {
            assert_eq!(Location::from_str(location.name()), Ok(location));
        }
    }
}
