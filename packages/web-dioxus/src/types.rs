//! Type definitions for the castles API responses
//!
//! These mirror the server's castle domain types (`server_core::domains::castles`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// Country Types
// ============================================================================

/// ISO 3166-1 alpha-2 codes of the countries the site knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountryCode {
    At,
    Be,
    Bg,
    Hr,
    Cy,
    Cz,
    Dk,
    Ee,
    Fi,
    Fr,
    De,
    Gr,
    Hu,
    Ie,
    It,
    Lv,
    Lt,
    Lu,
    Mt,
    Nl,
    Pl,
    Pt,
    Ro,
    Sk,
    Si,
    Es,
    Se,
    Gb,
}

impl CountryCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::At => "at",
            Self::Be => "be",
            Self::Bg => "bg",
            Self::Hr => "hr",
            Self::Cy => "cy",
            Self::Cz => "cz",
            Self::Dk => "dk",
            Self::Ee => "ee",
            Self::Fi => "fi",
            Self::Fr => "fr",
            Self::De => "de",
            Self::Gr => "gr",
            Self::Hu => "hu",
            Self::Ie => "ie",
            Self::It => "it",
            Self::Lv => "lv",
            Self::Lt => "lt",
            Self::Lu => "lu",
            Self::Mt => "mt",
            Self::Nl => "nl",
            Self::Pl => "pl",
            Self::Pt => "pt",
            Self::Ro => "ro",
            Self::Sk => "sk",
            Self::Si => "si",
            Self::Es => "es",
            Self::Se => "se",
            Self::Gb => "gb",
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown country code: {0}")]
pub struct UnknownCountryCode(String);

impl FromStr for CountryCode {
    type Err = UnknownCountryCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "at" => Ok(Self::At),
            "be" => Ok(Self::Be),
            "bg" => Ok(Self::Bg),
            "hr" => Ok(Self::Hr),
            "cy" => Ok(Self::Cy),
            "cz" => Ok(Self::Cz),
            "dk" => Ok(Self::Dk),
            "ee" => Ok(Self::Ee),
            "fi" => Ok(Self::Fi),
            "fr" => Ok(Self::Fr),
            "de" => Ok(Self::De),
            "gr" => Ok(Self::Gr),
            "hu" => Ok(Self::Hu),
            "ie" => Ok(Self::Ie),
            "it" => Ok(Self::It),
            "lv" => Ok(Self::Lv),
            "lt" => Ok(Self::Lt),
            "lu" => Ok(Self::Lu),
            "mt" => Ok(Self::Mt),
            "nl" => Ok(Self::Nl),
            "pl" => Ok(Self::Pl),
            "pt" => Ok(Self::Pt),
            "ro" => Ok(Self::Ro),
            "sk" => Ok(Self::Sk),
            "si" => Ok(Self::Si),
            "es" => Ok(Self::Es),
            "se" => Ok(Self::Se),
            "gb" => Ok(Self::Gb),
            other => Err(UnknownCountryCode(other.to_string())),
        }
    }
}

/// Whether a country currently has castle data ingested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackingStatus {
    Tracked,
    NotTracked,
}

/// Static country configuration compiled into the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    pub code: CountryCode,
    pub tracking_status: TrackingStatus,
}

pub const COUNTRIES: [Country; 28] = [
    Country { name: "Austria", code: CountryCode::At, tracking_status: TrackingStatus::NotTracked },
    Country { name: "Belgium", code: CountryCode::Be, tracking_status: TrackingStatus::NotTracked },
    Country { name: "Bulgaria", code: CountryCode::Bg, tracking_status: TrackingStatus::NotTracked },
    Country { name: "Croatia", code: CountryCode::Hr, tracking_status: TrackingStatus::NotTracked },
    Country { name: "Cyprus", code: CountryCode::Cy, tracking_status: TrackingStatus::NotTracked },
    Country { name: "Czech Republic", code: CountryCode::Cz, tracking_status: TrackingStatus::NotTracked },
    Country { name: "Denmark", code: CountryCode::Dk, tracking_status: TrackingStatus::NotTracked },
    Country { name: "Estonia", code: CountryCode::Ee, tracking_status: TrackingStatus::NotTracked },
    Country { name: "Finland", code: CountryCode::Fi, tracking_status: TrackingStatus::NotTracked },
    Country { name: "France", code: CountryCode::Fr, tracking_status: TrackingStatus::NotTracked },
    Country { name: "Germany", code: CountryCode::De, tracking_status: TrackingStatus::NotTracked },
    Country { name: "Greece", code: CountryCode::Gr, tracking_status: TrackingStatus::NotTracked },
    Country { name: "Hungary", code: CountryCode::Hu, tracking_status: TrackingStatus::NotTracked },
    Country { name: "Ireland", code: CountryCode::Ie, tracking_status: TrackingStatus::Tracked },
    Country { name: "Italy", code: CountryCode::It, tracking_status: TrackingStatus::NotTracked },
    Country { name: "Latvia", code: CountryCode::Lv, tracking_status: TrackingStatus::NotTracked },
    Country { name: "Lithuania", code: CountryCode::Lt, tracking_status: TrackingStatus::NotTracked },
    Country { name: "Luxembourg", code: CountryCode::Lu, tracking_status: TrackingStatus::NotTracked },
    Country { name: "Malta", code: CountryCode::Mt, tracking_status: TrackingStatus::NotTracked },
    Country { name: "Netherlands", code: CountryCode::Nl, tracking_status: TrackingStatus::NotTracked },
    Country { name: "Poland", code: CountryCode::Pl, tracking_status: TrackingStatus::NotTracked },
    Country { name: "Portugal", code: CountryCode::Pt, tracking_status: TrackingStatus::Tracked },
    Country { name: "Romania", code: CountryCode::Ro, tracking_status: TrackingStatus::NotTracked },
    Country { name: "Slovakia", code: CountryCode::Sk, tracking_status: TrackingStatus::Tracked },
    Country { name: "Slovenia", code: CountryCode::Si, tracking_status: TrackingStatus::NotTracked },
    Country { name: "Spain", code: CountryCode::Es, tracking_status: TrackingStatus::NotTracked },
    Country { name: "Sweden", code: CountryCode::Se, tracking_status: TrackingStatus::NotTracked },
    Country { name: "United Kingdom", code: CountryCode::Gb, tracking_status: TrackingStatus::Tracked },
];

/// Countries that have castle data ingested.
pub fn tracked_countries() -> Vec<Country> {
    COUNTRIES
        .iter()
        .copied()
        .filter(|country| country.tracking_status == TrackingStatus::Tracked)
        .collect()
}

pub fn country_by_code(code: CountryCode) -> Option<Country> {
    COUNTRIES.iter().copied().find(|country| country.code == code)
}

// ============================================================================
// Castle Types
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Named facility flags shown on the detail page. Flags missing from the
/// payload decode as `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Facilities {
    pub assistance_dogs_allowed: bool,
    pub cafe: bool,
    pub restrooms: bool,
    pub giftshops: bool,
    pub picnic_area: bool,
    pub parking: bool,
    pub exhibitions: bool,
    pub wheelchair_support: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitingInfo {
    pub working_hours: String,
    pub facilities: Option<Facilities>,
}

/// A castle record as served by the listing and detail endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Castle {
    pub id: String,
    pub country: CountryCode,
    pub name: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub coordinates: Option<String>,
    #[serde(rename = "pictureURL")]
    pub picture_url: String,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub contact: Option<Contact>,
    #[serde(default)]
    pub visiting_info: Option<VisitingInfo>,
    #[serde(default)]
    pub property_condition: Option<String>,
    pub web_name: String,
}

// ============================================================================
// API Response Wrappers
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastlesResponse {
    pub data: Vec<Castle>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastleResponse {
    pub data: Castle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_envelope_decodes() {
        let raw = r#"{
            "data": [
                {
                    "id": "1f0d7c2e-0000-0000-0000-000000000000",
                    "country": "pt",
                    "name": "obidos",
                    "city": "obidos",
                    "state": "leiria",
                    "pictureURL": "https://example.com/obidos.jpg",
                    "sources": ["https://example.com/source"],
                    "propertyCondition": "intact",
                    "webName": "obidos-pt"
                }
            ]
        }"#;

        let response: CastlesResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.data.len(), 1);

        let castle = &response.data[0];
        assert_eq!(castle.country, CountryCode::Pt);
        assert_eq!(castle.web_name, "obidos-pt");
        assert_eq!(castle.picture_url, "https://example.com/obidos.jpg");
        assert_eq!(castle.property_condition.as_deref(), Some("intact"));
        assert!(castle.contact.is_none());
        assert!(castle.visiting_info.is_none());
    }

    #[test]
    fn empty_listing_envelope_decodes() {
        let response: CastlesResponse = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert!(response.data.is_empty());
    }

    #[test]
    fn tracked_countries_are_the_selectable_set() {
        let tracked = tracked_countries();
        let codes: Vec<CountryCode> = tracked.iter().map(|c| c.code).collect();
        assert_eq!(
            codes,
            vec![CountryCode::Ie, CountryCode::Pt, CountryCode::Sk, CountryCode::Gb]
        );
    }

    #[test]
    fn country_code_round_trip() {
        for country in &COUNTRIES {
            let parsed: CountryCode = country.code.as_str().parse().unwrap();
            assert_eq!(parsed, country.code);
        }
        assert!("zz".parse::<CountryCode>().is_err());
    }
}
