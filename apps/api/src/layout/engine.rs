//! Layout engine — turns a résumé record into positioned draw operations.
//!
//! Sections are drawn in a fixed order: header, career objective, education,
//! project experience, technical proficiency, certifications, soft skills.
//! The cursor is threaded through every step by value; nothing here touches
//! shared state, so two layouts never observe each other.
//!
//! Malformed education/project entries draw nothing but still consume the
//! post-entry gap. That spacing is part of the output format and must not be
//! folded into the filtering.

use serde::Serialize;
use tracing::debug;

use crate::layout::cursor::{Cursor, BULLET_X, CONTACT_DROP, LEFT_X, RULE_DROP, RULE_END_X};
use crate::layout::template::{
    resolve_template, Rgb, StandardFont, TemplateName, TemplateStyle, BODY_FONT,
    CONTACT_FONT_SIZE, NAME_FONT_SIZE,
};
use crate::models::resume::{rejoin_comma_list, EducationEntry, ProjectEntry, ResumeRecord};

pub const SECTION_OBJECTIVE: &str = "Career Objective";
pub const SECTION_EDUCATION: &str = "Education";
pub const SECTION_PROJECTS: &str = "Project Experience";
pub const SECTION_SKILLS: &str = "Technical Proficiency";
pub const SECTION_CERTIFICATIONS: &str = "Certifications";
pub const SECTION_SOFT_SKILLS: &str = "Soft Skills";

pub const BULLET_PREFIX: &str = "• ";
pub const COURSEWORK_PREFIX: &str = "Relevant coursework: ";

/// Width of the rule drawn under section titles.
pub const RULE_WIDTH: f32 = 1.0;

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// One positioned drawing primitive on the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// Single line of text with its baseline at `y`.
    Text {
        x: f32,
        y: f32,
        font: StandardFont,
        size: f32,
        color: Rgb,
        text: String,
    },
    /// Horizontal rule from `x1` to `x2` at height `y`.
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
        color: Rgb,
        width: f32,
    },
}

impl DrawOp {
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawOp::Text { text, .. } => Some(text),
            DrawOp::Rule { .. } => None,
        }
    }
}

/// A non-fatal problem found while laying out a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutWarning {
    /// Requested template name was not recognised; `professional` was used.
    UnknownTemplate { requested: String },
    /// Education line did not split into exactly four parts.
    MalformedEducation { index: usize, parts: usize },
    /// Project line had no `|` separating title and bullets.
    MalformedProject { index: usize, parts: usize },
}

/// Everything the renderer needs, plus diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutPlan {
    pub template: TemplateName,
    pub ops: Vec<DrawOp>,
    /// Cursor position after the last section.
    pub final_y: f32,
    pub warnings: Vec<LayoutWarning>,
}

impl LayoutPlan {
    /// Text of every text operation, in drawing order.
    pub fn lines(&self) -> Vec<&str> {
        self.ops.iter().filter_map(DrawOp::text).collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Public entry points
// ────────────────────────────────────────────────────────────────────────────

/// Lays out `record` with the template called `template_name`, falling back
/// to `professional` (with a warning) when the name is unknown.
pub fn layout_resume(record: &ResumeRecord, template_name: &str) -> LayoutPlan {
    let resolved = resolve_template(template_name);
    let mut plan = layout_with_style(record, resolved.style);
    if resolved.fell_back {
        plan.warnings.insert(
            0,
            LayoutWarning::UnknownTemplate {
                requested: template_name.to_string(),
            },
        );
    }
    plan
}

/// Lays out `record` with an already-resolved style.
pub fn layout_with_style(record: &ResumeRecord, style: &TemplateStyle) -> LayoutPlan {
    let mut page = Page::new(style);
    let mut y = Cursor::top_of_page();

    y = page.header(y, &record.name, &record.contact_line());

    y = page.section_title(y, SECTION_OBJECTIVE);
    y = page.text(y, LEFT_X, &record.objective);

    y = page.section_title(y, SECTION_EDUCATION);
    for (index, raw) in record.education.iter().enumerate() {
        match EducationEntry::parse(raw) {
            Ok(entry) => {
                y = page.text(y, LEFT_X, entry.degree);
                y = page.text(y, LEFT_X, entry.institution);
                y = page.text(y, LEFT_X, &format!("{COURSEWORK_PREFIX}{}", entry.coursework));
                y = page.text(y, LEFT_X, entry.year);
            }
            Err(parts) => page.warn(LayoutWarning::MalformedEducation { index, parts }),
        }
        y = y.after_entry_gap();
    }

    y = page.section_title(y, SECTION_PROJECTS);
    for (index, raw) in record.projects.iter().enumerate() {
        match ProjectEntry::parse(raw) {
            Ok(entry) => {
                y = page.text(y, LEFT_X, entry.title);
                for bullet in &entry.bullets {
                    y = page.bullet(y, BULLET_X, bullet);
                }
            }
            Err(parts) => page.warn(LayoutWarning::MalformedProject { index, parts }),
        }
        y = y.after_entry_gap();
    }

    y = page.section_title(y, SECTION_SKILLS);
    y = page.text(y, LEFT_X, &rejoin_comma_list(&record.skills));

    y = page.section_title(y, SECTION_CERTIFICATIONS);
    for cert in &record.certifications {
        y = page.bullet(y, BULLET_X, cert);
    }

    y = page.section_title(y, SECTION_SOFT_SKILLS);
    y = page.text(y, LEFT_X, &rejoin_comma_list(&record.soft_skills));

    debug!(
        template = style.name.as_str(),
        ops = page.ops.len(),
        final_y = y.y(),
        "Layout complete"
    );

    LayoutPlan {
        template: style.name,
        ops: page.ops,
        final_y: y.y(),
        warnings: page.warnings,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Drawing steps
// ────────────────────────────────────────────────────────────────────────────

/// Accumulates draw operations for one layout. Each step takes the cursor
/// and returns the advanced one.
struct Page<'a> {
    style: &'a TemplateStyle,
    ops: Vec<DrawOp>,
    warnings: Vec<LayoutWarning>,
}

impl<'a> Page<'a> {
    fn new(style: &'a TemplateStyle) -> Self {
        Page {
            style,
            ops: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn warn(&mut self, warning: LayoutWarning) {
        self.warnings.push(warning);
    }

    fn push_text(&mut self, x: f32, y: f32, font: StandardFont, size: f32, color: Rgb, text: String) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            font,
            size,
            color,
            text,
        });
    }

    fn header(&mut self, y: Cursor, name: &str, contact: &str) -> Cursor {
        self.push_text(
            LEFT_X,
            y.y(),
            self.style.heading_font,
            NAME_FONT_SIZE,
            self.style.heading_color,
            name.to_string(),
        );
        self.push_text(
            LEFT_X,
            y.y() - CONTACT_DROP,
            BODY_FONT,
            CONTACT_FONT_SIZE,
            Rgb::BLACK,
            contact.to_string(),
        );
        y.after_header()
    }

    fn section_title(&mut self, y: Cursor, title: &str) -> Cursor {
        self.push_text(
            LEFT_X,
            y.y(),
            self.style.heading_font,
            self.style.heading_size,
            self.style.heading_color,
            title.to_uppercase(),
        );
        self.ops.push(DrawOp::Rule {
            x1: LEFT_X,
            x2: RULE_END_X,
            y: y.y() - RULE_DROP,
            color: self.style.line_color,
            width: RULE_WIDTH,
        });
        y.after_section_title()
    }

    fn text(&mut self, y: Cursor, x: f32, text: &str) -> Cursor {
        self.push_text(
            x,
            y.y(),
            BODY_FONT,
            self.style.body_size,
            Rgb::BLACK,
            text.to_string(),
        );
        y.after_line()
    }

    fn bullet(&mut self, y: Cursor, x: f32, text: &str) -> Cursor {
        self.text(y, x, &format!("{BULLET_PREFIX}{text}"))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
