//! Admin dashboard.

use super::navigation::Section;
use super::PortalContext;
use crate::models::{AdminSnapshot, RecentApplication, RecentMessage, SystemHealth};
use crate::view::format::{crore, escape_html, group_thousands, lakh, rupees, short_date};
use crate::view::{empty_list_message, ids, loading_message, stat_card, Document};

pub const ADMIN_ERROR: &str = "Error loading admin data";
pub const NO_APPLICATIONS: &str = "No recent applications";
pub const NO_MESSAGES: &str = "No recent messages";

#[derive(Clone)]
pub struct AdminRenderer {
    ctx: PortalContext,
}

impl AdminRenderer {
    pub fn new(ctx: PortalContext) -> Self {
        Self { ctx }
    }

    /// Fetch the snapshot and replace every admin panel with it.
    ///
    /// A failed fetch only blanks the summary tiles; the lists and health
    /// panel keep whatever the previous snapshot rendered.
    pub async fn load(&self) {
        let generation = self.ctx.state.lock().await.begin_load(Section::Admin);

        let outcome = self.ctx.gateway.admin_dashboard().await;

        let state = self.ctx.state.lock().await;
        if !state.is_current(Section::Admin, generation) {
            tracing::debug!("Discarding superseded admin snapshot (generation {})", generation);
            return;
        }

        let mut doc = self.ctx.document.lock().await;
        match outcome {
            Ok(snapshot) => render_snapshot(&mut doc, &snapshot),
            Err(e) => {
                tracing::error!("Error loading admin data: {}", e);
                doc.set_html(ids::ADMIN_STATS, loading_message(ADMIN_ERROR));
            }
        }
    }
}

pub fn render_snapshot(doc: &mut Document, snapshot: &AdminSnapshot) {
    let overview = &snapshot.overview;
    let tiles = [
        stat_card(&overview.total_exams.to_string(), "Total Exams"),
        stat_card(&group_thousands(overview.total_applications), "Total Applications"),
        stat_card(&crore(overview.total_revenue), "Total Revenue"),
        stat_card(&group_thousands(overview.active_users), "Active Users"),
        stat_card(&lakh(overview.today_revenue), "Today's Revenue"),
        stat_card(
            &group_thousands(overview.pending_applications),
            "Pending Applications",
        ),
    ];
    doc.set_html(ids::ADMIN_STATS, tiles.concat());

    doc.set_html(
        ids::RECENT_APPLICATIONS,
        render_list(&snapshot.recent_applications, application_item, NO_APPLICATIONS),
    );
    doc.set_html(
        ids::RECENT_MESSAGES,
        render_list(&snapshot.recent_messages, message_item, NO_MESSAGES),
    );
    doc.set_html(ids::SYSTEM_HEALTH, render_health(&snapshot.system_health));
}

fn render_list<T>(items: &[T], render: fn(&T) -> String, empty: &str) -> String {
    if items.is_empty() {
        return empty_list_message(empty);
    }
    items.iter().map(render).collect()
}

fn application_item(app: &RecentApplication) -> String {
    format!(
        concat!(
            r#"<div class="admin-item">"#,
            r#"<div><div class="admin-item-title">{}</div><div class="admin-item-sub">{}</div><div class="admin-item-date">{}</div></div>"#,
            r#"<div class="admin-item-side"><div class="admin-item-fee">{}</div><div class="admin-item-status">{}</div></div>"#,
            "</div>"
        ),
        escape_html(&app.student_name),
        escape_html(app.exam_label()),
        short_date(&app.applied_at),
        rupees(app.fee),
        escape_html(&app.status),
    )
}

fn message_item(msg: &RecentMessage) -> String {
    format!(
        concat!(
            r#"<div class="admin-item">"#,
            r#"<div><div class="admin-item-title">{}</div><div class="admin-item-sub">{}</div><div class="admin-item-date">{}</div></div>"#,
            r#"<div class="admin-item-side"><div class="admin-item-status">{}</div></div>"#,
            "</div>"
        ),
        escape_html(&msg.name),
        escape_html(&msg.subject),
        short_date(&msg.submitted_at),
        escape_html(&msg.status),
    )
}

fn render_health(health: &SystemHealth) -> String {
    [
        (&health.server_uptime, "Server Uptime"),
        (&health.database_status, "Database"),
        (&health.api_response_time, "API Response"),
        (&health.error_rate, "Error Rate"),
        (&health.active_connections, "Active Connections"),
    ]
    .into_iter()
    .map(|(value, label)| {
        format!(
            r#"<div class="health-item"><div class="health-value">{}</div><div class="health-label">{}</div></div>"#,
            escape_html(&value.to_string()),
            label
        )
    })
    .collect()
}
