//! Result lookup: exam choices, roll-number search, result view.

use super::navigation::Section;
use super::PortalContext;
use crate::errors::GatewayError;
use crate::models::{Category, Exam, ResultRecord};
use crate::view::format::{escape_html, number, short_date};
use crate::view::{ids, loading_message};

pub const CHOICES_ERROR: &str = "Error loading exam options";
pub const NOT_FOUND: &str = "Result not found. Please check your roll number and exam selection.";
pub const REQUIRED_FIELDS: &str = "Please fill in all required fields.";

/// How a result lookup ended.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(ResultRecord),
    Incomplete,
    NotFound,
    Failed,
}

#[derive(Clone)]
pub struct ResultWorkflow {
    ctx: PortalContext,
}

impl ResultWorkflow {
    pub fn new(ctx: PortalContext) -> Self {
        Self { ctx }
    }

    /// Build the grouped exam selector from all three listings.
    ///
    /// The listings are fetched concurrently; if any one fails the selector
    /// is left as it was and an inline error is shown instead.
    pub async fn populate_exam_choices(&self) {
        let generation = self.ctx.state.lock().await.begin_load(Section::Results);

        let gateway = &self.ctx.gateway;
        let outcome = tokio::try_join!(
            gateway.list_exams(Category::SchoolBoard),
            gateway.list_exams(Category::University),
            gateway.list_exams(Category::Government),
        );

        let state = self.ctx.state.lock().await;
        if !state.is_current(Section::Results, generation) {
            tracing::debug!("Discarding superseded exam choices (generation {})", generation);
            return;
        }

        let mut doc = self.ctx.document.lock().await;
        match outcome {
            Ok((school, university, government)) => {
                let markup = render_exam_choices(&[
                    (Category::SchoolBoard, school),
                    (Category::University, university),
                    (Category::Government, government),
                ]);
                doc.set_html(ids::RESULT_EXAM_SELECT, markup);
                doc.set_html(ids::RESULT_EXAM_STATUS, "");
            }
            Err(e) => {
                tracing::error!("Error loading exam options: {}", e);
                doc.set_html(ids::RESULT_EXAM_STATUS, loading_message(CHOICES_ERROR));
            }
        }
    }

    /// Look up a result and show it; failures alert and keep any shown result.
    pub async fn submit(&self, roll_number: &str, exam_id: &str) -> LookupOutcome {
        let roll_number = roll_number.trim();
        let exam_id = exam_id.trim();
        if roll_number.is_empty() || exam_id.is_empty() {
            self.ctx.document.lock().await.alert(REQUIRED_FIELDS);
            return LookupOutcome::Incomplete;
        }

        match self.ctx.gateway.result(roll_number, exam_id).await {
            Ok(record) => {
                let mut doc = self.ctx.document.lock().await;
                doc.set_html(ids::RESULT_DISPLAY, render_result(&record));
                doc.show_result();
                doc.scroll_into_view(ids::RESULT_DISPLAY);
                LookupOutcome::Found(record)
            }
            Err(GatewayError::Transport(detail)) => {
                tracing::error!("Error fetching result for {}: {}", roll_number, detail);
                self.ctx
                    .document
                    .lock()
                    .await
                    .alert(format!("Error fetching result: {}", detail));
                LookupOutcome::Failed
            }
            Err(e) => {
                tracing::info!("No result for {} in {}: {}", roll_number, exam_id, e);
                self.ctx.document.lock().await.alert(NOT_FOUND);
                LookupOutcome::NotFound
            }
        }
    }
}

/// Placeholder option plus one group per non-empty category.
pub fn render_exam_choices(listings: &[(Category, Vec<Exam>)]) -> String {
    let mut markup = String::from(r#"<option value="">Choose Exam</option>"#);
    for (category, exams) in listings {
        if exams.is_empty() {
            continue;
        }
        markup.push_str(&format!(r#"<optgroup label="{}">"#, category.group_label()));
        for exam in exams {
            markup.push_str(&format!(
                r#"<option value="{}">{}</option>"#,
                escape_html(&exam.id),
                escape_html(&exam.name)
            ));
        }
        markup.push_str("</optgroup>");
    }
    markup
}

pub fn render_result(record: &ResultRecord) -> String {
    let subjects = if record.subjects.is_empty() {
        String::new()
    } else {
        let cards: String = record
            .subjects
            .iter()
            .map(|subject| {
                format!(
                    r#"<div class="subject-card"><div class="subject-name">{}</div><div class="subject-marks">{}/{}</div><div class="subject-grade">Grade: {}</div></div>"#,
                    escape_html(&subject.name),
                    number(subject.obtained_marks),
                    number(subject.max_marks),
                    escape_html(&subject.grade)
                )
            })
            .collect();
        format!(
            r#"<div class="result-subjects"><h4>Subject-wise Results</h4><div class="subjects-grid">{}</div></div>"#,
            cards
        )
    };

    format!(
        concat!(
            r#"<div class="result-header">"#,
            "<h3>Examination Result</h3>",
            r#"<div class="result-student">{student}</div>"#,
            "<div>Roll Number: {roll}</div>",
            "<div>Exam: {exam}</div>",
            "<div>Board/Organization: {board}</div>",
            "</div>",
            r#"<div class="result-summary">"#,
            r#"<div class="result-status {status_class}">Status: {status}</div>"#,
            r#"<div class="result-grade">Grade: {grade} | Percentage: {percentage}%</div>"#,
            r#"<div class="result-marks">Marks: {obtained}/{total}</div>"#,
            "</div>",
            "{subjects}",
            r#"<div class="result-footer">Result declared on: {declared}</div>"#
        ),
        student = escape_html(&record.student_name),
        roll = escape_html(&record.roll_number),
        exam = escape_html(&record.exam_name),
        board = escape_html(&record.board),
        status_class = escape_html(&record.status.to_lowercase()),
        status = escape_html(&record.status),
        grade = escape_html(&record.grade),
        percentage = number(record.percentage),
        obtained = number(record.obtained_marks),
        total = number(record.total_marks),
        subjects = subjects,
        declared = short_date(&record.result_date),
    )
}
