// Wire types for the Oasis directory backend.
//
// These mirror the backend's JSON exactly (Mongo `_id`, camelCase
// fields, the doubly-nested hours wrapper). `oasis-core` converts them
// into clean domain types; nothing outside that conversion should need
// to know about these shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The backend's uniform response envelope:
/// `{ code, message, success, result }`.
///
/// Every field is optional on the wire; a missing `result` is an empty
/// payload, not an error.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub result: Option<T>,
}

/// A resource document as the backend stores it.
///
/// `id` is `None` on create payloads (the backend assigns it). The
/// `extra` map keeps any field this client does not model, so admin
/// round-trips never drop data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub subcategory: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_languages: Option<Vec<String>>,
    #[serde(default)]
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_of_operation: Option<HoursWrapper>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub address_line_2: String,
    #[serde(default)]
    pub apt_unit_suite: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub eligibility_requirements: String,
    #[serde(default)]
    pub phone_numbers: Vec<PhoneNumberRecord>,
    #[serde(default)]
    pub required_documents: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_aid_details: Option<FinancialAidRecord>,
    #[serde(default)]
    pub contacts: Vec<ContactRecord>,
    #[serde(default)]
    pub internal_notes: Vec<InternalNoteRecord>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// The backend nests the weekly schedule one level deeper than its
/// field name suggests: `hoursOfOperation.hoursOfOperation[]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoursWrapper {
    #[serde(default)]
    pub hours_of_operation: Vec<DayScheduleRecord>,
}

/// One weekday row: `{ day: "Monday", period: ["9:00 AM", "5:00 PM"] }`.
/// An empty `period` array means closed that day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayScheduleRecord {
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub period: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumberRecord {
    #[serde(default)]
    pub phone_type: String,
    #[serde(default)]
    pub number: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialAidRecord {
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub immigration_status: String,
    #[serde(default)]
    pub deadline: String,
    #[serde(default)]
    pub amount: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InternalNoteRecord {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body: String,
}

/// A category taxonomy entry: `{ name, subcategories[] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub subcategories: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_record_tolerates_sparse_documents() {
        let record: ResourceRecord = serde_json::from_str(
            r#"{ "_id": "abc", "name": "Refugee Center", "category": ["Legal"] }"#,
        )
        .expect("sparse document should deserialize");
        assert_eq!(record.id.as_deref(), Some("abc"));
        assert_eq!(record.name, "Refugee Center");
        assert!(record.cost.is_none());
        assert!(record.available_languages.is_none());
        assert!(record.hours_of_operation.is_none());
    }

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let record: ResourceRecord = serde_json::from_str(
            r#"{ "_id": "abc", "name": "X", "recommendation": 3 }"#,
        )
        .expect("document with extra fields should deserialize");
        assert_eq!(record.extra.get("recommendation"), Some(&Value::from(3)));

        let json = serde_json::to_value(&record).expect("serialize");
        assert_eq!(json.get("recommendation"), Some(&Value::from(3)));
    }

    #[test]
    fn hours_wrapper_is_doubly_nested() {
        let record: ResourceRecord = serde_json::from_str(
            r#"{
                "name": "X",
                "hoursOfOperation": {
                    "hoursOfOperation": [
                        { "day": "Monday", "period": ["9:00 AM", "5:00 PM"] },
                        { "day": "Tuesday", "period": [] }
                    ]
                }
            }"#,
        )
        .expect("nested hours should deserialize");
        let hours = record.hours_of_operation.expect("wrapper present");
        assert_eq!(hours.hours_of_operation.len(), 2);
        assert_eq!(hours.hours_of_operation[0].day, "Monday");
        assert!(hours.hours_of_operation[1].period.is_empty());
    }
}
