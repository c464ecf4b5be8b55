//! In-memory model of the portal page.
//!
//! Renderers write markup into named regions and flip visibility flags here;
//! a browser binding mirrors the same state onto the real DOM.

use std::collections::HashMap;

use super::format::escape_html;
use crate::models::{ApplicationForm, ContactMessage};

/// Element identifiers of the page regions the portal writes to.
pub mod ids {
    pub const HOME_STATS: &str = "homeStats";
    pub const SCHOOL_BOARD_COUNT: &str = "schoolBoardCount";
    pub const UNIVERSITY_COUNT: &str = "universityCount";
    pub const GOVERNMENT_COUNT: &str = "governmentCount";
    pub const SCHOOL_BOARD_EXAMS: &str = "schoolBoardExams";
    pub const UNIVERSITY_EXAMS: &str = "universityExams";
    pub const GOVERNMENT_EXAMS: &str = "governmentExams";
    pub const FEE_INFO: &str = "feeInfo";
    pub const APPLICATION_MODAL: &str = "applicationModal";
    pub const RESULT_EXAM_SELECT: &str = "resultExamSelect";
    pub const RESULT_EXAM_STATUS: &str = "resultExamStatus";
    pub const RESULT_DISPLAY: &str = "resultDisplay";
    pub const ADMIN_STATS: &str = "adminStats";
    pub const RECENT_APPLICATIONS: &str = "recentApplications";
    pub const RECENT_MESSAGES: &str = "recentMessages";
    pub const SYSTEM_HEALTH: &str = "systemHealth";
}

/// State of the application modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Modal {
    pub visible: bool,
    pub title: String,
    /// Hidden exam-id input submitted with the form
    pub exam_id: String,
}

/// The page as the user currently sees it.
#[derive(Debug, Clone, Default)]
pub struct Document {
    regions: HashMap<String, String>,
    active_section: Option<String>,
    selected_control: Option<String>,
    nav_open: bool,
    modal: Modal,
    application_form: ApplicationForm,
    contact_form: ContactMessage,
    result_visible: bool,
    scrolled_to: Option<String>,
    alerts: Vec<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the markup of a region.
    pub fn set_html(&mut self, id: &str, markup: impl Into<String>) {
        self.regions.insert(id.to_string(), markup.into());
    }

    /// Replace a region with escaped plain text.
    pub fn set_text(&mut self, id: &str, text: &str) {
        self.set_html(id, escape_html(text));
    }

    pub fn html(&self, id: &str) -> Option<&str> {
        self.regions.get(id).map(String::as_str)
    }

    /// Make `section_id` the only visible section.
    pub fn show_section(&mut self, section_id: &str) {
        self.active_section = Some(section_id.to_string());
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    pub fn is_section_visible(&self, section_id: &str) -> bool {
        self.active_section.as_deref() == Some(section_id)
    }

    /// Mark a navigation control as the selected one, clearing any other.
    pub fn select_control(&mut self, control_id: &str) {
        self.selected_control = Some(control_id.to_string());
    }

    pub fn selected_control(&self) -> Option<&str> {
        self.selected_control.as_deref()
    }

    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }

    pub fn close_nav(&mut self) {
        self.nav_open = false;
    }

    pub fn is_nav_open(&self) -> bool {
        self.nav_open
    }

    pub fn open_modal(&mut self, title: String, exam_id: String) {
        self.modal = Modal {
            visible: true,
            title,
            exam_id,
        };
    }

    /// Hide the modal; the title and hidden input keep their last values.
    pub fn hide_modal(&mut self) {
        self.modal.visible = false;
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn application_form(&self) -> &ApplicationForm {
        &self.application_form
    }

    /// Record what the user typed into the application form.
    pub fn fill_application_form(&mut self, form: ApplicationForm) {
        self.application_form = form;
    }

    pub fn reset_application_form(&mut self) {
        self.application_form = ApplicationForm::default();
        self.modal.exam_id.clear();
    }

    pub fn contact_form(&self) -> &ContactMessage {
        &self.contact_form
    }

    pub fn fill_contact_form(&mut self, message: ContactMessage) {
        self.contact_form = message;
    }

    pub fn reset_contact_form(&mut self) {
        self.contact_form = ContactMessage::default();
    }

    pub fn show_result(&mut self) {
        self.result_visible = true;
    }

    pub fn is_result_visible(&self) -> bool {
        self.result_visible
    }

    pub fn scroll_into_view(&mut self, id: &str) {
        self.scrolled_to = Some(id.to_string());
    }

    pub fn scrolled_to(&self) -> Option<&str> {
        self.scrolled_to.as_deref()
    }

    /// Show a blocking message to the user.
    pub fn alert(&mut self, message: impl Into<String>) {
        self.alerts.push(message.into());
    }

    pub fn last_alert(&self) -> Option<&str> {
        self.alerts.last().map(String::as_str)
    }
}
