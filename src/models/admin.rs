//! Admin dashboard snapshot and home statistics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Aggregate counters shown on the home page.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomeStats {
    pub total_exams: u64,
    pub total_applications: u64,
    pub total_revenue: f64,
    pub today_applications: u64,
    pub active_users: u64,
    pub server_load: f64,
    #[serde(default)]
    pub school_board_exams: u64,
    #[serde(default)]
    pub university_exams: u64,
    #[serde(default)]
    pub government_exams: u64,
}

/// Overview block of the admin snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminOverview {
    pub total_exams: u64,
    pub total_applications: u64,
    pub total_revenue: f64,
    pub active_users: u64,
    pub today_revenue: f64,
    pub pending_applications: u64,
}

/// One entry of the recent-applications list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecentApplication {
    pub student_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_name: Option<String>,
    #[serde(default)]
    pub exam_id: String,
    pub applied_at: String,
    pub fee: f64,
    pub status: String,
}

impl RecentApplication {
    /// Exam name when the gateway supplied one, the raw id otherwise.
    pub fn exam_label(&self) -> &str {
        match self.exam_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.exam_id,
        }
    }
}

/// One entry of the recent-messages list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecentMessage {
    pub name: String,
    pub subject: String,
    pub submitted_at: String,
    pub status: String,
}

/// Health indicator value; the gateway sends either text ("99.9%") or a number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Metric {
    Number(f64),
    Text(String),
}

impl Default for Metric {
    fn default() -> Self {
        Metric::Text(String::new())
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Number(n) => write!(f, "{}", n),
            Metric::Text(s) => f.write_str(s),
        }
    }
}

/// System-health block of the admin snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SystemHealth {
    #[serde(default)]
    pub server_uptime: Metric,
    #[serde(default)]
    pub database_status: Metric,
    #[serde(default)]
    pub api_response_time: Metric,
    #[serde(default)]
    pub error_rate: Metric,
    #[serde(default)]
    pub active_connections: Metric,
}

/// Point-in-time admin dashboard aggregate.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminSnapshot {
    pub overview: AdminOverview,
    #[serde(default)]
    pub recent_applications: Vec<RecentApplication>,
    #[serde(default)]
    pub recent_messages: Vec<RecentMessage>,
    #[serde(default)]
    pub system_health: SystemHealth,
}
