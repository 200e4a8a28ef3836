//! Frontend Models
//!
//! Data structures matching the hostel backend's JSON payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// Room type the backend reserves for emergencies; never allocated
pub const EMERGENCY_ROOM_TYPE: &str = "Emergency";

/// Room types a student may apply for
pub const ROOM_TYPES: &[&str] = &["Single", "Double", "Triple"];

/// One allocable bed, as returned by `/api/admin/rooms-status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BedRecord {
    #[serde(default)]
    pub block_name: String,
    #[serde(deserialize_with = "string_or_number")]
    pub room_number: String,
    #[serde(default)]
    pub floor: Option<i64>,
    #[serde(default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub bed_label: Option<String>,
    #[serde(default, deserialize_with = "bool_or_int")]
    pub is_occupied: bool,
    #[serde(default)]
    pub occupant: Option<String>,
}

impl BedRecord {
    pub fn is_emergency(&self) -> bool {
        self.room_type.as_deref() == Some(EMERGENCY_ROOM_TYPE)
    }
}

/// Application state reported by `/api/status`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApplicationStatus {
    /// No application on file ("None", "Not Applied", anything unknown)
    #[default]
    NotApplied,
    Pending,
    Allocated,
}

impl From<String> for ApplicationStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Pending" => ApplicationStatus::Pending,
            "Allocated" => ApplicationStatus::Allocated,
            _ => ApplicationStatus::NotApplied,
        }
    }
}

impl From<ApplicationStatus> for String {
    fn from(status: ApplicationStatus) -> Self {
        match status {
            ApplicationStatus::NotApplied => "None".to_string(),
            ApplicationStatus::Pending => "Pending".to_string(),
            ApplicationStatus::Allocated => "Allocated".to_string(),
        }
    }
}

/// Response of `/api/status`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusResponse {
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub block_name: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub room_number: Option<String>,
    #[serde(default)]
    pub bed_label: Option<String>,
}

/// Response of `/api/login`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub email: String,
    #[serde(rename = "studentID", deserialize_with = "string_or_number")]
    pub student_id: String,
}

/// Generic `{message}` response (register, apply, auto-allocate)
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Response of `/api/ai-chat`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub reply: String,
}

/// Student registration payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub department: String,
    pub year: u16,
    pub gender: String,
    /// Backend expects 0/1
    #[serde(serialize_with = "bool_as_int")]
    pub physically_disabled: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Str(String),
    Int(i64),
    Float(f64),
}

impl From<StringOrNumber> for String {
    fn from(v: StringOrNumber) -> Self {
        match v {
            StringOrNumber::Str(s) => s,
            StringOrNumber::Int(n) => n.to_string(),
            StringOrNumber::Float(f) => f.to_string(),
        }
    }
}

fn string_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    StringOrNumber::deserialize(d).map(String::from)
}

fn opt_string_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Option::<StringOrNumber>::deserialize(d).map(|v| v.map(String::from))
}

fn bool_or_int<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrInt {
        Bool(bool),
        Int(i64),
    }

    Ok(match Option::<BoolOrInt>::deserialize(d)? {
        Some(BoolOrInt::Bool(b)) => b,
        Some(BoolOrInt::Int(n)) => n != 0,
        None => false,
    })
}

fn bool_as_int<S: serde::Serializer>(value: &bool, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u8(u8::from(*value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bed_record_from_backend_row() {
        let bed: BedRecord = serde_json::from_value(json!({
            "RoomNumber": 101,
            "Floor": null,
            "RoomType": "Double",
            "BlockName": "A",
            "BedLabel": "B",
            "IsOccupied": 1,
            "Occupant": "Asha Rao"
        }))
        .unwrap();

        assert_eq!(bed.room_number, "101");
        assert_eq!(bed.floor, None);
        assert!(bed.is_occupied);
        assert_eq!(bed.occupant.as_deref(), Some("Asha Rao"));
        assert!(!bed.is_emergency());
    }

    #[test]
    fn test_status_values() {
        let allocated: StatusResponse = serde_json::from_value(json!({
            "Status": "Allocated", "BlockName": "A", "RoomNumber": "101", "BedLabel": "B"
        }))
        .unwrap();
        assert_eq!(allocated.status, ApplicationStatus::Allocated);
        assert_eq!(allocated.room_number.as_deref(), Some("101"));

        let not_applied: StatusResponse =
            serde_json::from_value(json!({"email": "a@b.c", "Status": "Not Applied"})).unwrap();
        assert_eq!(not_applied.status, ApplicationStatus::NotApplied);

        let empty: StatusResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.status, ApplicationStatus::NotApplied);
    }

    #[test]
    fn test_login_response_numeric_student_id() {
        let resp: LoginResponse =
            serde_json::from_value(json!({"studentID": 42, "email": "s@uni.edu"})).unwrap();
        assert_eq!(resp.student_id, "42");
    }

    #[test]
    fn test_registration_payload_shape() {
        let reg = Registration {
            full_name: "Asha Rao".into(),
            email: "asha@uni.edu".into(),
            password: "pw".into(),
            department: "CSE".into(),
            year: 2,
            gender: "Female".into(),
            physically_disabled: true,
        };
        let value = serde_json::to_value(&reg).unwrap();
        assert_eq!(value["fullName"], "Asha Rao");
        assert_eq!(value["physicallyDisabled"], 1);
        assert_eq!(value["year"], 2);
    }
}
