use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::Symptom;

/// One saved tracker entry. `date` is a local calendar day (`YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomLog {
    pub id: String,
    pub date: NaiveDate,
    pub symptoms: Vec<Symptom>,
    pub severity: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
