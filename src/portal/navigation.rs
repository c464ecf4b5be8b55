//! Page sections and their navigation controls.

use crate::models::Category;
use crate::view::ids;

/// The page region currently visible to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    SchoolBoard,
    University,
    Government,
    Results,
    Admin,
}

impl Section {
    /// Element id of the section.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::SchoolBoard => "school-board",
            Section::University => "university",
            Section::Government => "government",
            Section::Results => "results",
            Section::Admin => "admin",
        }
    }

    /// Id of the navigation control that leads to this section.
    pub fn nav_control(&self) -> &'static str {
        match self {
            Section::Home => "nav-home",
            Section::SchoolBoard => "nav-school-board",
            Section::University => "nav-university",
            Section::Government => "nav-government",
            Section::Results => "nav-results",
            Section::Admin => "nav-admin",
        }
    }

    /// Whether the periodic refresh reloads this section.
    pub fn is_time_sensitive(&self) -> bool {
        matches!(self, Section::Home | Section::Admin)
    }
}

impl From<Category> for Section {
    fn from(category: Category) -> Self {
        match category {
            Category::SchoolBoard => Section::SchoolBoard,
            Category::University => Section::University,
            Category::Government => Section::Government,
        }
    }
}

/// Region holding the rendered listing of a category.
pub fn listing_region(category: Category) -> &'static str {
    match category {
        Category::SchoolBoard => ids::SCHOOL_BOARD_EXAMS,
        Category::University => ids::UNIVERSITY_EXAMS,
        Category::Government => ids::GOVERNMENT_EXAMS,
    }
}
