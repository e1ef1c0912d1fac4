//! The four résumé template presets.
//!
//! A template only changes the heading font, the heading/rule color and the
//! two font sizes. Body text is always Helvetica in black.

use serde::Serialize;

// ────────────────────────────────────────────────────────────────────────────
// Fonts and colors
// ────────────────────────────────────────────────────────────────────────────

/// The standard Type 1 fonts the templates draw with. Every PDF viewer ships
/// these, so nothing is embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaBoldOblique,
    CourierBold,
    TimesBold,
}

impl StandardFont {
    /// PostScript name written to the font dictionary's `BaseFont`.
    pub fn base_font(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            StandardFont::CourierBold => "Courier-Bold",
            StandardFont::TimesBold => "Times-Bold",
        }
    }
}

/// RGB color with components in `0.0..=1.0`, as PDF `rg`/`RG` expect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Rgb { r, g, b }
    }

    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    /// `#00008B`
    pub const DARK_BLUE: Rgb = Rgb::new(0.0, 0.0, 0.545_098);
    /// `#A9A9A9`
    pub const DARK_GRAY: Rgb = Rgb::new(0.662_745, 0.662_745, 0.662_745);
    /// `#006400`
    pub const DARK_GREEN: Rgb = Rgb::new(0.0, 0.392_157, 0.0);
    /// `#800080`
    pub const PURPLE: Rgb = Rgb::new(0.501_961, 0.0, 0.501_961);
}

/// Font used for every body, bullet and contact line.
pub const BODY_FONT: StandardFont = StandardFont::Helvetica;
/// Contact line size, independent of the template.
pub const CONTACT_FONT_SIZE: f32 = 10.0;
/// Name size in the header, independent of the template.
pub const NAME_FONT_SIZE: f32 = 18.0;

// ────────────────────────────────────────────────────────────────────────────
// Template presets
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateName {
    #[default]
    Professional,
    Minimalistic,
    Creative,
    Modern,
}

impl TemplateName {
    pub const ALL: [TemplateName; 4] = [
        TemplateName::Professional,
        TemplateName::Minimalistic,
        TemplateName::Creative,
        TemplateName::Modern,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateName::Professional => "professional",
            TemplateName::Minimalistic => "minimalistic",
            TemplateName::Creative => "creative",
            TemplateName::Modern => "modern",
        }
    }

    /// Exact, case-sensitive lookup. `None` for anything unrecognised.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    pub fn style(self) -> &'static TemplateStyle {
        match self {
            TemplateName::Professional => &PROFESSIONAL,
            TemplateName::Minimalistic => &MINIMALISTIC,
            TemplateName::Creative => &CREATIVE,
            TemplateName::Modern => &MODERN,
        }
    }
}

/// Visual parameters of one template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateStyle {
    pub name: TemplateName,
    pub heading_font: StandardFont,
    pub heading_color: Rgb,
    /// Stroke color of the rule under each section title.
    pub line_color: Rgb,
    pub heading_size: f32,
    pub body_size: f32,
}

static PROFESSIONAL: TemplateStyle = TemplateStyle {
    name: TemplateName::Professional,
    heading_font: StandardFont::HelveticaBold,
    heading_color: Rgb::DARK_BLUE,
    line_color: Rgb::DARK_BLUE,
    heading_size: 14.0,
    body_size: 10.0,
};

static MINIMALISTIC: TemplateStyle = TemplateStyle {
    name: TemplateName::Minimalistic,
    heading_font: StandardFont::CourierBold,
    heading_color: Rgb::DARK_GRAY,
    line_color: Rgb::DARK_GRAY,
    heading_size: 12.0,
    body_size: 10.0,
};

static CREATIVE: TemplateStyle = TemplateStyle {
    name: TemplateName::Creative,
    heading_font: StandardFont::TimesBold,
    heading_color: Rgb::DARK_GREEN,
    line_color: Rgb::DARK_GREEN,
    heading_size: 16.0,
    body_size: 12.0,
};

static MODERN: TemplateStyle = TemplateStyle {
    name: TemplateName::Modern,
    heading_font: StandardFont::HelveticaBoldOblique,
    heading_color: Rgb::PURPLE,
    line_color: Rgb::PURPLE,
    heading_size: 14.0,
    body_size: 10.0,
};

/// Result of resolving a user-supplied template name.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedTemplate {
    pub style: &'static TemplateStyle,
    /// True when the requested name was unknown and `professional` was used.
    pub fell_back: bool,
}

/// Resolves a template name, falling back to `professional` for unknown names.
pub fn resolve_template(name: &str) -> ResolvedTemplate {
    match TemplateName::from_name(name) {
        Some(template) => ResolvedTemplate {
            style: template.style(),
            fell_back: false,
        },
        None => ResolvedTemplate {
            style: TemplateName::default().style(),
            fell_back: true,
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_template_name_resolves_to_its_style() {
        for template in TemplateName::ALL {
            let resolved = resolve_template(template.as_str());
            assert!(!resolved.fell_back);
            assert_eq!(resolved.style.name, template);
        }
    }

    #[test]
    fn test_template_parameters() {
        let p = TemplateName::Professional.style();
        assert_eq!(p.heading_font, StandardFont::HelveticaBold);
        assert_eq!(p.heading_color, Rgb::DARK_BLUE);
        assert_eq!((p.heading_size, p.body_size), (14.0, 10.0));

        let m = TemplateName::Minimalistic.style();
        assert_eq!(m.heading_font, StandardFont::CourierBold);
        assert_eq!(m.line_color, Rgb::DARK_GRAY);
        assert_eq!((m.heading_size, m.body_size), (12.0, 10.0));

        let c = TemplateName::Creative.style();
        assert_eq!(c.heading_font, StandardFont::TimesBold);
        assert_eq!(c.heading_color, Rgb::DARK_GREEN);
        assert_eq!((c.heading_size, c.body_size), (16.0, 12.0));

        let md = TemplateName::Modern.style();
        assert_eq!(md.heading_font, StandardFont::HelveticaBoldOblique);
        assert_eq!(md.heading_color, Rgb::PURPLE);
        assert_eq!((md.heading_size, md.body_size), (14.0, 10.0));
    }

    #[test]
    fn test_default_template_is_professional() {
        assert_eq!(TemplateName::default(), TemplateName::Professional);
    }

    #[test]
    fn test_unknown_template_falls_back_to_professional() {
        for name in ["", "fancy", "Modern", " professional"] {
            let resolved = resolve_template(name);
            assert!(resolved.fell_back, "{name:?} should fall back");
            assert_eq!(resolved.style, TemplateName::Professional.style());
        }
    }

    #[test]
    fn test_colors_match_hex_values() {
        assert_eq!(Rgb::BLACK, Rgb::new(0.0, 0.0, 0.0));
        assert!((Rgb::PURPLE.r - 128.0 / 255.0).abs() < 1e-5);
        assert!((Rgb::DARK_BLUE.b - 139.0 / 255.0).abs() < 1e-5);
        assert!((Rgb::DARK_GRAY.g - 169.0 / 255.0).abs() < 1e-5);
        assert!((Rgb::DARK_GREEN.g - 100.0 / 255.0).abs() < 1e-5);
    }

    #[test]
    fn test_base_font_names() {
        assert_eq!(StandardFont::HelveticaBoldOblique.base_font(), "Helvetica-BoldOblique");
        assert_eq!(StandardFont::CourierBold.base_font(), "Courier-Bold");
    }
}
