//! Writes a `LayoutPlan` to a single-page PDF with lopdf.
//!
//! Only the standard Type 1 fonts are used, each declared once with
//! WinAnsiEncoding and named `F1`, `F2`, … in order of first use. Every text
//! operation gets its own `BT … ET` block; rules are plain stroked paths.

use chrono::{DateTime, Utc};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, StringFormat, Stream};
use thiserror::Error;

use crate::layout::cursor::{PAGE_HEIGHT, PAGE_WIDTH};
use crate::layout::{DrawOp, LayoutPlan, Rgb, StandardFont};
use crate::models::resume::ResumeRecord;
use crate::render::encoding::encode_win_ansi;

const PDF_VERSION: &str = "1.4";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to encode page content: {0}")]
    Content(String),

    #[error("failed to serialize PDF: {0}")]
    Serialize(String),
}

/// Document-level metadata written to the trailer's `Info` dictionary.
#[derive(Debug, Clone)]
pub struct DocumentMeta {
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl DocumentMeta {
    pub fn for_record(record: &ResumeRecord, created_at: DateTime<Utc>) -> Self {
        let title = if record.name.trim().is_empty() {
            "Résumé".to_string()
        } else {
            format!("{} — Résumé", record.name.trim())
        };
        DocumentMeta { title, created_at }
    }
}

/// Renders `plan` to PDF bytes. Deterministic for a given plan and `meta`.
pub fn render_pdf(plan: &LayoutPlan, meta: &DocumentMeta) -> Result<Vec<u8>, RenderError> {
    let mut fonts = FontRegistry::default();
    let operations = page_operations(plan, &mut fonts);

    let mut doc = Document::with_version(PDF_VERSION);
    let pages_id = doc.new_object_id();

    let mut font_dict = Dictionary::new();
    for (resource_name, font) in fonts.entries() {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        font_dict.set(resource_name, font_id);
    }
    let resources_id = doc.add_object(dictionary! {
        "Font" => font_dict,
    });

    let content = Content { operations }
        .encode()
        .map_err(|e| RenderError::Content(e.to_string()))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, content));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            Object::Integer(PAGE_WIDTH as i64),
            Object::Integer(PAGE_HEIGHT as i64),
        ],
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let info_id = doc.add_object(dictionary! {
        "Title" => text_string(&meta.title),
        "Producer" => Object::string_literal(concat!("vitae ", env!("CARGO_PKG_VERSION"))),
        "CreationDate" => Object::string_literal(pdf_date(meta.created_at)),
    });
    doc.trailer.set("Info", info_id);

    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| RenderError::Serialize(e.to_string()))?;
    Ok(buffer)
}

// ────────────────────────────────────────────────────────────────────────────
// Content stream
// ────────────────────────────────────────────────────────────────────────────

fn page_operations(plan: &LayoutPlan, fonts: &mut FontRegistry) -> Vec<Operation> {
    let mut ops = Vec::with_capacity(plan.ops.len() * 6);
    for op in &plan.ops {
        match op {
            DrawOp::Text {
                x,
                y,
                font,
                size,
                color,
                text,
            } => {
                let resource = fonts.resource_name(*font);
                ops.push(Operation::new("BT", vec![]));
                ops.push(Operation::new(
                    "Tf",
                    vec![Object::Name(resource.into_bytes()), (*size).into()],
                ));
                ops.push(Operation::new("rg", rgb_operands(*color)));
                ops.push(Operation::new("Td", vec![(*x).into(), (*y).into()]));
                ops.push(Operation::new(
                    "Tj",
                    vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
                ));
                ops.push(Operation::new("ET", vec![]));
            }
            DrawOp::Rule {
                x1,
                x2,
                y,
                color,
                width,
            } => {
                ops.push(Operation::new("RG", rgb_operands(*color)));
                ops.push(Operation::new("w", vec![(*width).into()]));
                ops.push(Operation::new("m", vec![(*x1).into(), (*y).into()]));
                ops.push(Operation::new("l", vec![(*x2).into(), (*y).into()]));
                ops.push(Operation::new("S", vec![]));
            }
        }
    }
    ops
}

fn rgb_operands(color: Rgb) -> Vec<Object> {
    vec![color.r.into(), color.g.into(), color.b.into()]
}

/// Assigns `F1`, `F2`, … to fonts in order of first use.
#[derive(Default)]
struct FontRegistry {
    used: Vec<StandardFont>,
}

impl FontRegistry {
    fn resource_name(&mut self, font: StandardFont) -> String {
        let index = match self.used.iter().position(|f| *f == font) {
            Some(index) => index,
            None => {
                self.used.push(font);
                self.used.len() - 1
            }
        };
        format!("F{}", index + 1)
    }

    fn entries(&self) -> impl Iterator<Item = (String, StandardFont)> + '_ {
        self.used
            .iter()
            .enumerate()
            .map(|(i, font)| (format!("F{}", i + 1), *font))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Info dictionary helpers
// ────────────────────────────────────────────────────────────────────────────

/// PDF text string as UTF-16BE with a byte-order mark, so non-ASCII titles
/// survive in document properties.
fn text_string(text: &str) -> Object {
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

fn pdf_date(at: DateTime<Utc>) -> String {
    at.format("D:%Y%m%d%H%M%SZ").to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
