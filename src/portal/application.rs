//! Application modal: open for an exam, submit, close.

use super::results::REQUIRED_FIELDS;
use super::PortalContext;
use crate::errors::GatewayError;
use crate::models::{ApplicationForm, ApplicationReceipt, FeeSchedule};
use crate::view::format::{escape_html, rupees};
use crate::view::ids;

pub const DETAIL_ERROR: &str = "Error loading exam details. Please try again.";
pub const SELECT_EXAM_PROMPT: &str =
    "Please select a specific exam from the School Board, University, or Government sections to apply.";

/// How a submission attempt ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Accepted(ApplicationReceipt),
    /// Required inputs were blank; nothing was sent
    Incomplete,
    /// The modal carries no exam id; nothing was sent
    NoTarget,
    Rejected,
    Failed,
}

/// Element a click landed on, as far as the modal cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed backdrop around the modal content
    ModalBackdrop,
    /// Anything inside the modal content or elsewhere on the page
    Other,
}

#[derive(Clone)]
pub struct ApplicationWorkflow {
    ctx: PortalContext,
}

impl ApplicationWorkflow {
    pub fn new(ctx: PortalContext) -> Self {
        Self { ctx }
    }

    /// Fetch the exam, make it the active target and show the modal.
    pub async fn open_for(&self, exam_id: &str) {
        let generation = self.ctx.state.lock().await.begin_modal_load();

        let outcome = self.ctx.gateway.exam(exam_id).await;

        let mut state = self.ctx.state.lock().await;
        if !state.is_current_modal(generation) {
            tracing::debug!("Discarding superseded exam detail for {}", exam_id);
            return;
        }

        match outcome {
            Ok(exam) => {
                let mut doc = self.ctx.document.lock().await;
                doc.set_html(ids::FEE_INFO, render_fee_table(&exam.fee));
                doc.open_modal(format!("Apply for {}", exam.name), exam_id.to_string());
                state.set_active_target(exam);
            }
            Err(e) => {
                tracing::error!("Error loading exam details for {}: {}", exam_id, e);
                self.ctx.document.lock().await.alert(DETAIL_ERROR);
            }
        }
    }

    /// Send the form for the exam the modal was opened for.
    ///
    /// Only an accepted submission closes the modal and clears the form.
    pub async fn submit(&self, form: ApplicationForm) -> SubmitOutcome {
        let exam_id = {
            let mut doc = self.ctx.document.lock().await;
            doc.fill_application_form(form.clone());

            if !form.missing_required().is_empty() {
                doc.alert(REQUIRED_FIELDS);
                return SubmitOutcome::Incomplete;
            }

            let exam_id = doc.modal().exam_id.clone();
            if exam_id.is_empty() {
                doc.alert(SELECT_EXAM_PROMPT);
                return SubmitOutcome::NoTarget;
            }
            exam_id
        };

        tracing::info!("Submitting application for {}", exam_id);
        match self.ctx.gateway.apply(&exam_id, &form).await {
            Ok(receipt) => {
                self.ctx.document.lock().await.alert(format!(
                    "Application submitted successfully!\n\nApplication ID: {}\nExam: {}\nFee: {}\n\nYou will receive a confirmation email shortly.",
                    receipt.application_id,
                    receipt.exam_name,
                    rupees(receipt.fee)
                ));
                self.close().await;
                self.ctx.document.lock().await.reset_application_form();
                SubmitOutcome::Accepted(receipt)
            }
            Err(GatewayError::Transport(detail)) => {
                tracing::error!("Error submitting application for {}: {}", exam_id, detail);
                self.ctx
                    .document
                    .lock()
                    .await
                    .alert(format!("Error submitting application: {}", detail));
                SubmitOutcome::Failed
            }
            Err(e) => {
                tracing::warn!("Application for {} rejected: {}", exam_id, e);
                self.ctx
                    .document
                    .lock()
                    .await
                    .alert(format!("Error: {}", e.message()));
                SubmitOutcome::Rejected
            }
        }
    }

    /// Hide the modal and forget the active target.
    pub async fn close(&self) {
        let mut state = self.ctx.state.lock().await;
        state.clear_active_target();
        self.ctx.document.lock().await.hide_modal();
    }

    /// A click on the backdrop closes the modal; anything else is ignored.
    pub async fn click(&self, target: ClickTarget) {
        if target == ClickTarget::ModalBackdrop {
            self.close().await;
        }
    }

    /// Apply button outside any exam card.
    pub async fn prompt(&self) {
        self.ctx.document.lock().await.alert(SELECT_EXAM_PROMPT);
    }
}

/// Fee table of the modal.
///
/// OBC falls back to the general rate; SC and ST are shown as sent, with a
/// dash when the gateway omits them.
pub fn render_fee_table(fee: &FeeSchedule) -> String {
    let as_sent = |amount: Option<f64>| amount.map(rupees).unwrap_or_else(|| "—".to_string());

    let cells = [
        ("general", "General", rupees(fee.general)),
        ("obc", "OBC", rupees(fee.obc_or_general())),
        ("sc", "SC", as_sent(fee.sc)),
        ("st", "ST", as_sent(fee.st)),
    ];

    let cells: String = cells
        .iter()
        .map(|(key, label, amount)| {
            format!(
                r#"<div class="fee-cell" data-category="{}"><div class="fee-label">{}</div><div class="fee-amount">{}</div></div>"#,
                key,
                label,
                escape_html(amount)
            )
        })
        .collect();

    format!(
        r#"<h4>Application Fee</h4><div class="fee-grid">{}</div>"#,
        cells
    )
}
