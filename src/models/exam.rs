//! Exam model matching the gateway's exam records.

use serde::{Deserialize, Serialize};

/// One of the three exam groupings of the portal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    SchoolBoard,
    University,
    Government,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::SchoolBoard,
        Category::University,
        Category::Government,
    ];

    /// Path segment used by `GET exams/{category}`.
    pub fn as_path(&self) -> &'static str {
        match self {
            Category::SchoolBoard => "schoolBoard",
            Category::University => "university",
            Category::Government => "government",
        }
    }

    /// Label of the result-choice group for this category.
    pub fn group_label(&self) -> &'static str {
        match self {
            Category::SchoolBoard => "School Board Exams",
            Category::University => "University Exams",
            Category::Government => "Government Exams",
        }
    }
}

/// Fee schedule keyed by applicant category.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeeSchedule {
    pub general: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obc: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sc: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub st: Option<f64>,
}

impl FeeSchedule {
    /// OBC fee as displayed: a missing or zero entry shows the general rate.
    pub fn obc_or_general(&self) -> f64 {
        match self.obc {
            Some(fee) if fee != 0.0 => fee,
            _ => self.general,
        }
    }
}

/// School board exam extension.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SchoolBoardDetails {
    pub board: String,
    #[serde(rename = "class")]
    pub class_level: String,
    #[serde(default)]
    pub subjects: Vec<String>,
    pub registration_start: String,
    pub registration_end: String,
    #[serde(default)]
    pub registrations: u64,
}

/// University entrance exam extension.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UniversityDetails {
    pub university: String,
    #[serde(default)]
    pub eligibility: String,
    #[serde(default)]
    pub seats: u64,
    #[serde(default)]
    pub courses: Vec<String>,
    pub application_start: String,
    pub application_end: String,
    #[serde(default)]
    pub applicants: u64,
}

/// Government recruitment exam extension.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GovernmentDetails {
    pub organization: String,
    #[serde(default)]
    pub eligibility: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub vacancies: u64,
    #[serde(default)]
    pub posts: Vec<String>,
    pub application_start: String,
    pub application_end: String,
    #[serde(default)]
    pub applicants: u64,
}

/// Category-specific part of an exam, told apart by its identifying field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ExamDetails {
    SchoolBoard(SchoolBoardDetails),
    University(UniversityDetails),
    Government(GovernmentDetails),
}

/// An exam listing entry or full exam detail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub exam_type: String,
    pub exam_date: String,
    pub result_date: String,
    pub fee: FeeSchedule,
    #[serde(flatten)]
    pub details: ExamDetails,
}

impl Exam {
    pub fn category(&self) -> Category {
        match self.details {
            ExamDetails::SchoolBoard(_) => Category::SchoolBoard,
            ExamDetails::University(_) => Category::University,
            ExamDetails::Government(_) => Category::Government,
        }
    }

    /// Start and end of the registration/application window.
    pub fn window(&self) -> (&str, &str) {
        match &self.details {
            ExamDetails::SchoolBoard(d) => (&d.registration_start, &d.registration_end),
            ExamDetails::University(d) => (&d.application_start, &d.application_end),
            ExamDetails::Government(d) => (&d.application_start, &d.application_end),
        }
    }

    pub fn school_board(&self) -> Option<&SchoolBoardDetails> {
        match &self.details {
            ExamDetails::SchoolBoard(d) => Some(d),
            _ => None,
        }
    }

    pub fn government(&self) -> Option<&GovernmentDetails> {
        match &self.details {
            ExamDetails::Government(d) => Some(d),
            _ => None,
        }
    }
}
