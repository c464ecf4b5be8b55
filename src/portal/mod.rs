//! Client-side view/controller layer of the portal.
//!
//! `Portal` is the navigation controller: it owns the shared `PortalContext`
//! and hands it to each renderer and workflow.

mod admin;
mod application;
mod categories;
mod contact;
mod home;
mod navigation;
mod refresh;
mod results;
mod state;

pub use admin::{render_snapshot, AdminRenderer};
pub use application::{render_fee_table, ApplicationWorkflow, ClickTarget, SubmitOutcome};
pub use categories::{render_card, render_listing, CategoryRenderer, ExamFilter};
pub use contact::ContactWorkflow;
pub use home::{render_home, HomeRenderer};
pub use navigation::{listing_region, Section};
pub use refresh::RefreshHandle;
pub use results::{render_exam_choices, render_result, LookupOutcome, ResultWorkflow};
pub use state::{Generation, ViewState};

/// User-facing message texts, for callers that need to recognise them.
pub mod messages {
    pub use super::admin::{ADMIN_ERROR, NO_APPLICATIONS, NO_MESSAGES};
    pub use super::application::{DETAIL_ERROR, SELECT_EXAM_PROMPT};
    pub use super::categories::{EMPTY_LISTING, LISTING_ERROR};
    pub use super::contact::CONTACT_SENT;
    pub use super::home::STATS_ERROR;
    pub use super::results::{CHOICES_ERROR, NOT_FOUND, REQUIRED_FIELDS};
}

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::gateway::{Gateway, GatewayResult, HttpGateway};
use crate::models::{ApplicationForm, Category, ContactMessage, Exam};
use crate::view::Document;

/// Handles shared by every portal component.
#[derive(Clone)]
pub struct PortalContext {
    pub gateway: Arc<dyn Gateway>,
    pub state: Arc<Mutex<ViewState>>,
    pub document: Arc<Mutex<Document>>,
}

impl PortalContext {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self {
            gateway,
            state: Arc::new(Mutex::new(ViewState::new())),
            document: Arc::new(Mutex::new(Document::new())),
        }
    }
}

/// Navigation controller and entry point for every user action.
#[derive(Clone)]
pub struct Portal {
    ctx: PortalContext,
    home: HomeRenderer,
    school_board: CategoryRenderer,
    university: CategoryRenderer,
    government: CategoryRenderer,
    application: ApplicationWorkflow,
    results: ResultWorkflow,
    admin: AdminRenderer,
    contact: ContactWorkflow,
}

impl Portal {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        let ctx = PortalContext::new(gateway);
        Self {
            home: HomeRenderer::new(ctx.clone()),
            school_board: CategoryRenderer::new(ctx.clone(), Category::SchoolBoard),
            university: CategoryRenderer::new(ctx.clone(), Category::University),
            government: CategoryRenderer::new(ctx.clone(), Category::Government),
            application: ApplicationWorkflow::new(ctx.clone()),
            results: ResultWorkflow::new(ctx.clone()),
            admin: AdminRenderer::new(ctx.clone()),
            contact: ContactWorkflow::new(ctx.clone()),
            ctx,
        }
    }

    /// Portal backed by the HTTP gateway `config` points at.
    pub fn from_config(config: &Config) -> GatewayResult<Self> {
        let gateway = HttpGateway::from_config(config)?;
        tracing::info!("Portal gateway at {}", gateway.base_url());
        Ok(Self::new(Arc::new(gateway)))
    }

    /// Build from `config` and boot with its refresh period.
    pub async fn start(config: &Config) -> GatewayResult<(Self, RefreshHandle)> {
        let portal = Self::from_config(config)?;
        let refresh = portal.boot(config.refresh_period).await;
        Ok((portal, refresh))
    }

    /// Enter the home section and start the periodic refresh.
    pub async fn boot(&self, refresh_period: Duration) -> RefreshHandle {
        tracing::info!("Booting portal on the home section");
        self.activate(Section::Home, Section::Home.nav_control())
            .await;
        RefreshHandle::spawn(self.clone(), refresh_period)
    }

    /// Show `section`, select `control` and load the section's data.
    pub async fn activate(&self, section: Section, control: &str) {
        self.ctx.state.lock().await.set_active_section(section);
        {
            let mut doc = self.ctx.document.lock().await;
            doc.show_section(section.id());
            doc.select_control(control);
            doc.close_nav();
        }
        self.load_section(section).await;
    }

    /// Run the loader belonging to `section`.
    pub async fn load_section(&self, section: Section) {
        match section {
            Section::Home => self.home.load().await,
            Section::SchoolBoard => self.school_board.load().await,
            Section::University => self.university.load().await,
            Section::Government => self.government.load().await,
            Section::Results => self.results.populate_exam_choices().await,
            Section::Admin => self.admin.load().await,
        }
    }

    /// One tick of the periodic refresh.
    pub async fn refresh_tick(&self) {
        let active = self.active_section().await;
        if active.is_time_sensitive() {
            tracing::debug!("Refreshing {}", active.id());
            self.load_section(active).await;
        }
    }

    pub async fn toggle_nav(&self) {
        self.ctx.document.lock().await.toggle_nav();
    }

    pub fn category(&self, category: Category) -> &CategoryRenderer {
        match category {
            Category::SchoolBoard => &self.school_board,
            Category::University => &self.university,
            Category::Government => &self.government,
        }
    }

    pub async fn filter(&self, category: Category, filter: &ExamFilter) {
        self.category(category).filter(filter).await;
    }

    pub async fn open_application(&self, exam_id: &str) {
        self.application.open_for(exam_id).await;
    }

    /// Submit the application form; an accepted one reloads the active section.
    pub async fn submit_application(&self, form: ApplicationForm) -> SubmitOutcome {
        let outcome = self.application.submit(form).await;
        if matches!(outcome, SubmitOutcome::Accepted(_)) {
            let active = self.active_section().await;
            self.load_section(active).await;
        }
        outcome
    }

    pub async fn close_application(&self) {
        self.application.close().await;
    }

    pub async fn click(&self, target: ClickTarget) {
        self.application.click(target).await;
    }

    pub async fn prompt_application(&self) {
        self.application.prompt().await;
    }

    pub async fn lookup_result(&self, roll_number: &str, exam_id: &str) -> LookupOutcome {
        self.results.submit(roll_number, exam_id).await
    }

    pub async fn send_contact(&self, message: ContactMessage) -> bool {
        self.contact.submit(message).await
    }

    pub async fn active_section(&self) -> Section {
        self.ctx.state.lock().await.active_section()
    }

    pub async fn active_target(&self) -> Option<Exam> {
        self.ctx.state.lock().await.active_target().cloned()
    }

    pub async fn cached_listing(&self, category: Category) -> Vec<Exam> {
        self.ctx.state.lock().await.listing(category).to_vec()
    }

    /// Copy of the page as it currently stands.
    pub async fn document(&self) -> Document {
        self.ctx.document.lock().await.clone()
    }
}
