use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::CountryCode;

/// Phone/email pair shown on the detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Named facility flags. Flags missing from a stored document decode as
/// `false`.
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facilities: Option<Facilities>,
}

/// A castle record. Read-only from this system's point of view: rows are
/// written by the out-of-band ingestion pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Castle {
    pub id: Uuid,
    pub country: CountryCode,
    pub name: String,
    pub city: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<String>,
    #[serde(rename = "pictureURL")]
    pub picture_url: String,
    pub sources: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Json<Contact>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visiting_info: Option<Json<VisitingInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_condition: Option<String>,
    pub web_name: String,
}

impl Castle {
    /// Look up exactly one castle by its URL slug. Absence is `Ok(None)`, not
    /// an error; the unique index on `web_name` guarantees at most one match.
    pub async fn find_by_web_name(web_name: &str, pool: &PgPool) -> Result<Option<Self>> {
        let castle = sqlx::query_as::<_, Self>("SELECT * FROM castles WHERE web_name = $1")
            .bind(web_name)
            .fetch_optional(pool)
            .await?;
        Ok(castle)
    }

    /// All castles whose country is in the given set. Order is
    /// store-determined.
    pub async fn find_by_countries(countries: &[CountryCode], pool: &PgPool) -> Result<Vec<Self>> {
        let castles = sqlx::query_as::<_, Self>("SELECT * FROM castles WHERE country = ANY($1)")
            .bind(countries)
            .fetch_all(pool)
            .await?;
        Ok(castles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_castle() -> Castle {
        Castle {
            id: Uuid::nil(),
            country: CountryCode::Pt,
            name: "guimaraes".to_string(),
            city: "guimaraes".to_string(),
            state: "braga".to_string(),
            district: None,
            coordinates: Some("41.4478,-8.2882".to_string()),
            picture_url: "https://example.com/guimaraes.jpg".to_string(),
            sources: vec!["https://example.com/source".to_string()],
            contact: Some(Json(Contact {
                phone: Some("+351 253 412 273".to_string()),
                email: None,
            })),
            visiting_info: Some(Json(VisitingInfo {
                working_hours: "10:00-18:00".to_string(),
                facilities: Some(Facilities {
                    parking: true,
                    restrooms: true,
                    ..Facilities::default()
                }),
            })),
            property_condition: Some("intact".to_string()),
            web_name: "guimaraes-pt".to_string(),
        }
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let json = serde_json::to_value(sample_castle()).unwrap();

        assert_eq!(json["country"], "pt");
        assert_eq!(json["webName"], "guimaraes-pt");
        assert_eq!(json["pictureURL"], "https://example.com/guimaraes.jpg");
        assert_eq!(json["propertyCondition"], "intact");
        assert_eq!(json["visitingInfo"]["workingHours"], "10:00-18:00");
        assert_eq!(json["visitingInfo"]["facilities"]["parking"], true);
        assert_eq!(json["visitingInfo"]["facilities"]["wheelchairSupport"], false);
        assert_eq!(json["contact"]["phone"], "+351 253 412 273");
    }

    #[test]
    fn absent_optionals_are_omitted() {
        let mut castle = sample_castle();
        castle.contact = None;
        castle.visiting_info = None;
        castle.property_condition = None;

        let json = serde_json::to_value(castle).unwrap();
        let object = json.as_object().unwrap();

        assert!(!object.contains_key("contact"));
        assert!(!object.contains_key("visitingInfo"));
        assert!(!object.contains_key("propertyCondition"));
        assert!(!object.contains_key("district"));
    }

    #[test]
    fn decodes_document_with_sparse_facilities() {
        let raw = r#"{
            "id": "00000000-0000-0000-0000-000000000000",
            "country": "ie",
            "name": "trim",
            "city": "trim",
            "state": "meath",
            "pictureURL": "https://example.com/trim.jpg",
            "sources": [],
            "visitingInfo": {
                "workingHours": "09:30-17:30",
                "facilities": { "parking": true }
            },
            "webName": "trim-ie"
        }"#;

        let castle: Castle = serde_json::from_str(raw).unwrap();
        let facilities = castle.visiting_info.unwrap().0.facilities.unwrap();

        assert!(facilities.parking);
        assert!(!facilities.cafe);
        assert!(!facilities.wheelchair_support);
    }

    #[test]
    fn serialization_round_trip() {
        let castle = sample_castle();
        let json = serde_json::to_string(&castle).unwrap();
        let decoded: Castle = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded.web_name, castle.web_name);
        assert_eq!(decoded.country, castle.country);
        assert_eq!(decoded.contact.as_deref(), castle.contact.as_deref());
        assert_eq!(decoded.visiting_info.as_deref(), castle.visiting_info.as_deref());
    }
}
