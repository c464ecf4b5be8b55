//! Remote exam API access.
//!
//! The portal only ever talks to the gateway through the `Gateway` trait so
//! components can be driven against a canned implementation in tests.

mod http;

pub use http::HttpGateway;

use async_trait::async_trait;

use crate::errors::GatewayError;
use crate::models::{
    AdminSnapshot, ApplicationForm, ApplicationReceipt, Category, ContactAck, ContactMessage,
    Exam, HomeStats, ResultRecord,
};

/// Result type for gateway calls.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Request/response operations offered by the remote exam API.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// GET stats
    async fn home_stats(&self) -> GatewayResult<HomeStats>;

    /// GET exams/{category}
    async fn list_exams(&self, category: Category) -> GatewayResult<Vec<Exam>>;

    /// GET exam/{id}
    async fn exam(&self, exam_id: &str) -> GatewayResult<Exam>;

    /// POST exam/{id}/apply
    async fn apply(&self, exam_id: &str, form: &ApplicationForm)
        -> GatewayResult<ApplicationReceipt>;

    /// GET result/{rollNumber}/{examId}
    async fn result(&self, roll_number: &str, exam_id: &str) -> GatewayResult<ResultRecord>;

    /// POST contact
    async fn contact(&self, message: &ContactMessage) -> GatewayResult<ContactAck>;

    /// GET admin/dashboard
    async fn admin_dashboard(&self) -> GatewayResult<AdminSnapshot>;
}
