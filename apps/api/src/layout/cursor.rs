//! Page geometry and vertical cursor arithmetic.
//!
//! Coordinates are PDF points with the origin at the bottom-left corner, so
//! the cursor starts near the top of the page and only ever decreases. There
//! is no lower bound: a long résumé walks the cursor below zero and the
//! remaining lines land off-page.

use serde::Serialize;

use crate::models::resume::{EducationEntry, ProjectEntry, ResumeRecord};

/// US letter.
pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;

pub const TOP_MARGIN: f32 = 50.0;
/// X of every title, body line and rule start.
pub const LEFT_X: f32 = 50.0;
/// X of bullet lines.
pub const BULLET_X: f32 = 60.0;
/// X where the rule under a section title ends.
pub const RULE_END_X: f32 = 550.0;
/// Rule sits this far below the section title baseline.
pub const RULE_DROP: f32 = 2.0;
/// Contact line sits this far below the name.
pub const CONTACT_DROP: f32 = 20.0;

pub const HEADER_ADVANCE: f32 = 40.0;
pub const SECTION_TITLE_ADVANCE: f32 = 20.0;
pub const LINE_ADVANCE: f32 = 15.0;
/// Added after every education and project entry, well-formed or not.
pub const ENTRY_GAP: f32 = 10.0;

/// Number of section titles drawn after the header.
pub const SECTION_COUNT: usize = 6;

/// The vertical position of the next thing to draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cursor {
    y: f32,
}

impl Cursor {
    pub fn top_of_page() -> Self {
        Cursor {
            y: PAGE_HEIGHT - TOP_MARGIN,
        }
    }

    pub fn y(self) -> f32 {
        self.y
    }

    fn down(self, by: f32) -> Self {
        Cursor { y: self.y - by }
    }

    pub fn after_header(self) -> Self {
        self.down(HEADER_ADVANCE)
    }

    pub fn after_section_title(self) -> Self {
        self.down(SECTION_TITLE_ADVANCE)
    }

    pub fn after_line(self) -> Self {
        self.down(LINE_ADVANCE)
    }

    pub fn after_entry_gap(self) -> Self {
        self.down(ENTRY_GAP)
    }
}

/// How many of each cursor step a record consumes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StepCounts {
    pub section_titles: usize,
    pub lines: usize,
    pub entry_gaps: usize,
}

impl StepCounts {
    /// Counts steps straight from the record without producing any draw
    /// operations.
    pub fn for_record(record: &ResumeRecord) -> Self {
        let education_lines: usize = record
            .education
            .iter()
            .map(|raw| if EducationEntry::parse(raw).is_ok() { 4 } else { 0 })
            .sum();
        let project_lines: usize = record
            .projects
            .iter()
            .map(|raw| match ProjectEntry::parse(raw) {
                Ok(entry) => 1 + entry.bullets.len(),
                Err(_) => 0,
            })
            .sum();

        StepCounts {
            section_titles: SECTION_COUNT,
            // objective + skills + soft skills are always one line each
            lines: 3 + education_lines + project_lines + record.certifications.len(),
            entry_gaps: record.education.len() + record.projects.len(),
        }
    }

    pub fn total_advance(self) -> f32 {
        HEADER_ADVANCE
            + self.section_titles as f32 * SECTION_TITLE_ADVANCE
            + self.lines as f32 * LINE_ADVANCE
            + self.entry_gaps as f32 * ENTRY_GAP
    }

    /// Where the cursor ends up after these steps.
    pub fn final_y(self) -> f32 {
        Cursor::top_of_page().y() - self.total_advance()
    }
}
