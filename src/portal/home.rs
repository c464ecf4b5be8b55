//! Home page statistics.

use super::navigation::Section;
use super::PortalContext;
use crate::models::HomeStats;
use crate::view::format::{crore, group_thousands, number};
use crate::view::{ids, loading_message, stat_card, Document};

pub const STATS_ERROR: &str = "Error loading statistics";

#[derive(Clone)]
pub struct HomeRenderer {
    ctx: PortalContext,
}

impl HomeRenderer {
    pub fn new(ctx: PortalContext) -> Self {
        Self { ctx }
    }

    pub async fn load(&self) {
        let generation = self.ctx.state.lock().await.begin_load(Section::Home);

        let outcome = self.ctx.gateway.home_stats().await;

        let state = self.ctx.state.lock().await;
        if !state.is_current(Section::Home, generation) {
            tracing::debug!("Discarding superseded home stats (generation {})", generation);
            return;
        }

        let mut doc = self.ctx.document.lock().await;
        match outcome {
            Ok(stats) => render_home(&mut doc, &stats),
            Err(e) => {
                tracing::error!("Error loading home data: {}", e);
                doc.set_html(ids::HOME_STATS, loading_message(STATS_ERROR));
            }
        }
    }
}

/// Write the six home tiles and the per-category counters.
pub fn render_home(doc: &mut Document, stats: &HomeStats) {
    let tiles = [
        stat_card(&stats.total_exams.to_string(), "Total Exams"),
        stat_card(&group_thousands(stats.total_applications), "Total Applications"),
        stat_card(&crore(stats.total_revenue), "Total Revenue"),
        stat_card(&group_thousands(stats.today_applications), "Today's Applications"),
        stat_card(&group_thousands(stats.active_users), "Active Users"),
        stat_card(&format!("{}%", number(stats.server_load)), "Server Load"),
    ];
    doc.set_html(ids::HOME_STATS, tiles.concat());

    doc.set_text(ids::SCHOOL_BOARD_COUNT, &stats.school_board_exams.to_string());
    doc.set_text(ids::UNIVERSITY_COUNT, &stats.university_exams.to_string());
    doc.set_text(ids::GOVERNMENT_COUNT, &stats.government_exams.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_home_tiles() {
        let stats = HomeStats {
            total_exams: 42,
            total_applications: 1_234_567,
            total_revenue: 250_000_000.0,
            today_applications: 3_200,
            active_users: 15_000,
            server_load: 37.0,
            school_board_exams: 12,
            university_exams: 18,
            government_exams: 12,
        };
        let mut doc = Document::new();
        render_home(&mut doc, &stats);

        let tiles = doc.html(ids::HOME_STATS).unwrap();
        assert_eq!(tiles.matches("stat-card").count(), 6);
        assert!(tiles.contains("1,234,567"));
        assert!(tiles.contains("₹25.0Cr"));
        assert!(tiles.contains("37%"));
        assert_eq!(doc.html(ids::UNIVERSITY_COUNT), Some("18"));
    }
}
