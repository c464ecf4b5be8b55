//! Data models for the ExamVector portal.
//!
//! These models match the gateway's JSON records field for field.

mod admin;
mod application;
mod contact;
mod exam;
mod result;

pub use admin::*;
pub use application::*;
pub use contact::*;
pub use exam::*;
pub use result::*;
