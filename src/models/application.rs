//! Application submission and outcome records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Applicant input collected by the application modal.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationForm {
    pub student_name: String,
    pub email: String,
    pub phone: String,
    pub category: String,
    pub father_name: String,
    pub mother_name: String,
    pub school: String,
    pub address: String,
}

impl ApplicationForm {
    /// Names of required inputs that are still blank.
    ///
    /// Stands in for the browser's own required-field check; anything
    /// stricter is the gateway's job.
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            ("studentName", &self.student_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("category", &self.category),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Application id as issued by the gateway, textual or numeric.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ReceiptId {
    Number(serde_json::Number),
    Text(String),
}

impl Default for ReceiptId {
    fn default() -> Self {
        ReceiptId::Text(String::new())
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReceiptId::Number(n) => write!(f, "{}", n),
            ReceiptId::Text(s) => f.write_str(s),
        }
    }
}

/// Gateway response to an accepted application.
///
/// Every field is optional: acceptance is decided by the response status.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationReceipt {
    #[serde(default)]
    pub application_id: ReceiptId,
    #[serde(default)]
    pub exam_name: String,
    #[serde(default)]
    pub fee: f64,
}
