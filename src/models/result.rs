//! Result record returned by a roll-number lookup.

use serde::{Deserialize, Serialize};

/// Marks for one subject of a result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubjectResult {
    pub name: String,
    pub obtained_marks: f64,
    pub max_marks: f64,
    #[serde(default)]
    pub grade: String,
}

/// A published exam result for one candidate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub student_name: String,
    pub roll_number: String,
    pub exam_name: String,
    #[serde(default)]
    pub board: String,
    pub status: String,
    #[serde(default)]
    pub grade: String,
    pub percentage: f64,
    pub obtained_marks: f64,
    pub total_marks: f64,
    pub result_date: String,
    #[serde(default)]
    pub subjects: Vec<SubjectResult>,
}
