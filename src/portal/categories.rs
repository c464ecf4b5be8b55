//! School-board, university and government listings.

use super::navigation::{listing_region, Section};
use super::PortalContext;
use crate::models::{Category, Exam, ExamDetails};
use crate::view::format::{escape_html, group_thousands, rupees, short_date};
use crate::view::loading_message;

pub const EMPTY_LISTING: &str = "No examinations found";
pub const LISTING_ERROR: &str = "Error loading examinations";

/// Equality predicates applied to a cached listing.
///
/// Blank or unset criteria impose no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExamFilter {
    pub board: Option<String>,
    pub class_level: Option<String>,
    pub exam_type: Option<String>,
    pub organization: Option<String>,
}

impl ExamFilter {
    pub fn board(mut self, board: impl Into<String>) -> Self {
        self.board = Some(board.into());
        self
    }

    pub fn class_level(mut self, class_level: impl Into<String>) -> Self {
        self.class_level = Some(class_level.into());
        self
    }

    pub fn exam_type(mut self, exam_type: impl Into<String>) -> Self {
        self.exam_type = Some(exam_type.into());
        self
    }

    pub fn organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn matches(&self, exam: &Exam) -> bool {
        let board = exam.school_board().map(|d| d.board.as_str());
        let class_level = exam.school_board().map(|d| d.class_level.as_str());
        let organization = exam.government().map(|d| d.organization.as_str());

        criterion_holds(&self.board, board)
            && criterion_holds(&self.class_level, class_level)
            && criterion_holds(&self.exam_type, Some(exam.exam_type.as_str()))
            && criterion_holds(&self.organization, organization)
    }

    pub fn apply<'a>(&self, exams: &'a [Exam]) -> Vec<&'a Exam> {
        exams.iter().filter(|exam| self.matches(exam)).collect()
    }
}

fn criterion_holds(wanted: &Option<String>, actual: Option<&str>) -> bool {
    match wanted.as_deref() {
        None | Some("") => true,
        Some(wanted) => actual == Some(wanted),
    }
}

/// Loads, renders and filters one category's listing.
#[derive(Clone)]
pub struct CategoryRenderer {
    ctx: PortalContext,
    category: Category,
}

impl CategoryRenderer {
    pub fn new(ctx: PortalContext, category: Category) -> Self {
        Self { ctx, category }
    }

    /// Fetch the listing, replace the cache and render it.
    ///
    /// Failures replace the listing region with an inline error.
    pub async fn load(&self) {
        let section = Section::from(self.category);
        let generation = self.ctx.state.lock().await.begin_load(section);

        let outcome = self.ctx.gateway.list_exams(self.category).await;

        let mut state = self.ctx.state.lock().await;
        if !state.is_current(section, generation) {
            tracing::debug!(
                "Discarding superseded {} listing (generation {})",
                self.category.as_path(),
                generation
            );
            return;
        }

        let region = listing_region(self.category);
        match outcome {
            Ok(exams) => {
                tracing::debug!("Loaded {} {} exams", exams.len(), self.category.as_path());
                let markup = render_listing(exams.iter());
                state.replace_listing(self.category, exams);
                self.ctx.document.lock().await.set_html(region, markup);
            }
            Err(e) => {
                tracing::error!("Error loading {} exams: {}", self.category.as_path(), e);
                self.ctx
                    .document
                    .lock()
                    .await
                    .set_html(region, loading_message(LISTING_ERROR));
            }
        }
    }

    /// Re-render the cached listing restricted to `filter`. Never fetches.
    pub async fn filter(&self, filter: &ExamFilter) {
        let state = self.ctx.state.lock().await;
        let markup = render_listing(filter.apply(state.listing(self.category)).into_iter());
        self.ctx
            .document
            .lock()
            .await
            .set_html(listing_region(self.category), markup);
    }
}

/// Markup for a listing: one card per exam, or the empty-state placeholder.
pub fn render_listing<'a>(exams: impl Iterator<Item = &'a Exam>) -> String {
    let cards: Vec<String> = exams.map(render_card).collect();
    if cards.is_empty() {
        return loading_message(EMPTY_LISTING);
    }
    cards.concat()
}

fn detail_row(label: &str, value: &str) -> String {
    format!(
        "<div><strong>{}:</strong> <span>{}</span></div>",
        label,
        escape_html(value)
    )
}

fn stat(value: &str, label: &str) -> String {
    format!(
        r#"<div class="exam-stat"><div class="exam-stat-number">{}</div><div class="exam-stat-label">{}</div></div>"#,
        escape_html(value),
        label
    )
}

fn tag_line(label: &str, items: &[String]) -> String {
    format!(
        r#"<div class="exam-tags"><strong>{}:</strong> {}</div>"#,
        label,
        escape_html(&items.join(", "))
    )
}

/// Markup for a single exam card.
pub fn render_card(exam: &Exam) -> String {
    let (window_start, window_end) = exam.window();
    let window = format!("{} - {}", short_date(window_start), short_date(window_end));

    let mut details = vec![
        detail_row("Exam Date", &short_date(&exam.exam_date)),
        detail_row("Result Date", &short_date(&exam.result_date)),
    ];

    let (meta, stats, tags, action) = match &exam.details {
        ExamDetails::SchoolBoard(d) => {
            details.push(detail_row("Registration", &window));
            details.push(detail_row("Fee (General)", &rupees(exam.fee.general)));
            (
                format!("{} • {} • Class {}", exam.exam_type, d.board, d.class_level),
                [
                    stat(&group_thousands(d.registrations), "Registrations"),
                    stat(&d.subjects.len().to_string(), "Subjects"),
                ],
                tag_line("Subjects", &d.subjects),
                "Register Now",
            )
        }
        ExamDetails::University(d) => {
            details.push(detail_row("Application", &window));
            details.push(detail_row("Fee (General)", &rupees(exam.fee.general)));
            details.push(detail_row("Eligibility", &d.eligibility));
            (
                format!("{} • {}", exam.exam_type, d.university),
                [
                    stat(&group_thousands(d.applicants), "Applicants"),
                    stat(&group_thousands(d.seats), "Seats"),
                ],
                tag_line("Courses", &d.courses),
                "Apply Now",
            )
        }
        ExamDetails::Government(d) => {
            details.push(detail_row("Application", &window));
            details.push(detail_row("Fee (General)", &rupees(exam.fee.general)));
            details.push(detail_row("Eligibility", &d.eligibility));
            details.push(detail_row("Salary Range", &d.salary));
            (
                format!("{} • {}", exam.exam_type, d.organization),
                [
                    stat(&group_thousands(d.applicants), "Applicants"),
                    stat(&group_thousands(d.vacancies), "Vacancies"),
                ],
                tag_line("Posts", &d.posts),
                "Apply Now",
            )
        }
    };

    format!(
        concat!(
            r#"<div class="exam-card" data-exam-id="{id}" data-category="{category}">"#,
            r#"<div class="exam-title">{name}</div>"#,
            r#"<div class="exam-meta">{meta}</div>"#,
            r#"<div class="exam-details">{details}</div>"#,
            r#"<div class="exam-stats">{stats}</div>"#,
            "{tags}",
            r#"<button class="btn btn-primary" data-action="apply" data-exam-id="{id}">{action}</button>"#,
            "</div>"
        ),
        id = escape_html(&exam.id),
        category = exam.category().as_path(),
        name = escape_html(&exam.name),
        meta = escape_html(&meta),
        details = details.concat(),
        stats = stats.concat(),
        tags = tags,
        action = action,
    )
}
