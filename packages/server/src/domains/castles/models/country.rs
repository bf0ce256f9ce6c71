use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// ISO 3166-1 alpha-2 codes of the countries the site knows about.
///
/// Stored in PostgreSQL as the `country_code` enum type, so a castle row can
/// never carry a code outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "country_code", rename_all = "lowercase")]
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

#[derive(Debug, thiserror::Error)]
#[error("unknown country code: {0}")]
pub struct UnknownCountryCode(String);

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

/// Static country configuration. Compiled into the binary; never mutated at
/// runtime.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
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
pub fn tracked_countries() -> impl Iterator<Item = &'static Country> {
    COUNTRIES
        .iter()
        .filter(|country| country.tracking_status == TrackingStatus::Tracked)
}

pub fn country_by_code(code: CountryCode) -> Option<&'static Country> {
    COUNTRIES.iter().find(|country| country.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_string_round_trip() {
        for country in &COUNTRIES {
            let parsed: CountryCode = country.code.as_str().parse().unwrap();
            assert_eq!(parsed, country.code);
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert!("zz".parse::<CountryCode>().is_err());
        assert!("".parse::<CountryCode>().is_err());
        assert!("PT".parse::<CountryCode>().is_err());
    }

    #[test]
    fn tracked_countries_match_ingested_data() {
        let tracked: Vec<CountryCode> = tracked_countries().map(|c| c.code).collect();
        assert_eq!(
            tracked,
            vec![CountryCode::Ie, CountryCode::Pt, CountryCode::Sk, CountryCode::Gb]
        );
    }

    #[test]
    fn every_code_has_a_country_entry() {
        assert_eq!(COUNTRIES.len(), 28);
        for country in &COUNTRIES {
            assert_eq!(country_by_code(country.code).unwrap().name, country.name);
        }
    }

    #[test]
    fn tracking_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&TrackingStatus::NotTracked).unwrap(),
            r#""not-tracked""#
        );
        assert_eq!(
            serde_json::to_string(&TrackingStatus::Tracked).unwrap(),
            r#""tracked""#
        );
    }
}
