//! Theme model: colors, typography, layout, effects, and template selection.

use serde::{Deserialize, Serialize};

/// Which structural invoice layout a theme renders with.
///
/// Unknown identifiers resolve to [`TemplateKind::Brutalist`], so a document
/// referencing a template this build does not know still renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TemplateKind {
    #[default]
    Brutalist,
    Executive,
    Midnight,
    Minimal,
    Classic,
    Tech,
    Elegant,
    Fresh,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 8] = [
        TemplateKind::Brutalist,
        TemplateKind::Executive,
        TemplateKind::Midnight,
        TemplateKind::Minimal,
        TemplateKind::Classic,
        TemplateKind::Tech,
        TemplateKind::Elegant,
        TemplateKind::Fresh,
    ];

    /// Stable identifier used in serialized themes.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Brutalist => "brutalist",
            TemplateKind::Executive => "executive",
            TemplateKind::Midnight => "midnight",
            TemplateKind::Minimal => "minimal",
            TemplateKind::Classic => "classic",
            TemplateKind::Tech => "tech",
            TemplateKind::Elegant => "elegant",
            TemplateKind::Fresh => "fresh",
        }
    }

    /// Resolve an identifier, falling back to the default template.
    pub fn from_id(id: &str) -> Self {
        match id {
            "executive" => TemplateKind::Executive,
            "midnight" => TemplateKind::Midnight,
            "minimal" => TemplateKind::Minimal,
            "classic" => TemplateKind::Classic,
            "tech" => TemplateKind::Tech,
            "elegant" => TemplateKind::Elegant,
            "fresh" => TemplateKind::Fresh,
            _ => TemplateKind::Brutalist,
        }
    }
}

impl From<String> for TemplateKind {
    fn from(id: String) -> Self {
        Self::from_id(&id)
    }
}

impl From<TemplateKind> for String {
    fn from(kind: TemplateKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Invoice color palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    /// Up to 3 gradient stops for the page background.
    pub gradient_stops: Vec<String>,
    pub accent: String,
    pub accent_secondary: String,
    pub card_bg: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub border: String,
    pub table_header_bg: String,
    pub table_alt_row: String,
}

/// Typeface configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: String,
    pub heading_font_family: String,
    /// Base size in px.
    pub base_font_size: f32,
    pub heading_weight: u16,
    pub body_weight: u16,
    /// Tracking in em.
    pub letter_spacing: f32,
    pub line_height: f32,
}

/// Density of whitespace between invoice sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    Compact,
    Normal,
    Airy,
}

/// Whether the invoice renders as a floating card or edge to edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutStyle {
    Card,
    FullBleed,
}

/// Page geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Corner radius in px.
    pub border_radius: f32,
    /// Card padding in px.
    pub card_padding: f32,
    pub spacing: Spacing,
    pub style: LayoutStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowDepth {
    Soft,
    Medium,
    Strong,
}

/// Decorative effects layered over the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effects {
    /// Film-grain opacity, 0..=1.
    pub grain_intensity: f32,
    /// Background blur in px.
    pub blur_strength: f32,
    pub shadow_depth: ShadowDepth,
    /// Accent glow opacity, 0..=1.
    pub glow_intensity: f32,
    /// Background gradient direction in degrees.
    pub gradient_angle: f32,
}

/// A complete visual theme for rendering an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "templateId")]
    pub template: TemplateKind,
    pub colors: ColorScheme,
    pub typography: Typography,
    pub layout: Layout,
    pub effects: Effects,
    /// Tiny preview gradient for catalog listings.
    pub preview_gradient: String,
}

/// Partial color update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_stops: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_header_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_alt_row: Option<String>,
}

impl ColorPatch {
    pub(crate) fn overlay(&self, colors: &mut ColorScheme) {
        if let Some(v) = &self.gradient_stops {
            colors.gradient_stops = v.clone();
        }
        if let Some(v) = &self.accent {
            colors.accent = v.clone();
        }
        if let Some(v) = &self.accent_secondary {
            colors.accent_secondary = v.clone();
        }
        if let Some(v) = &self.card_bg {
            colors.card_bg = v.clone();
        }
        if let Some(v) = &self.text_primary {
            colors.text_primary = v.clone();
        }
        if let Some(v) = &self.text_secondary {
            colors.text_secondary = v.clone();
        }
        if let Some(v) = &self.border {
            colors.border = v.clone();
        }
        if let Some(v) = &self.table_header_bg {
            colors.table_header_bg = v.clone();
        }
        if let Some(v) = &self.table_alt_row {
            colors.table_alt_row = v.clone();
        }
    }
}

/// Partial typography update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypographyPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_weight: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_weight: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
}

impl TypographyPatch {
    pub(crate) fn overlay(&self, typography: &mut Typography) {
        if let Some(v) = &self.font_family {
            typography.font_family = v.clone();
        }
        if let Some(v) = &self.heading_font_family {
            typography.heading_font_family = v.clone();
        }
        if let Some(v) = self.base_font_size {
            typography.base_font_size = v;
        }
        if let Some(v) = self.heading_weight {
            typography.heading_weight = v;
        }
        if let Some(v) = self.body_weight {
            typography.body_weight = v;
        }
        if let Some(v) = self.letter_spacing {
            typography.letter_spacing = v;
        }
        if let Some(v) = self.line_height {
            typography.line_height = v;
        }
    }
}

/// Partial layout update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_padding: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<LayoutStyle>,
}

impl LayoutPatch {
    pub(crate) fn overlay(&self, layout: &mut Layout) {
        if let Some(v) = self.border_radius {
            layout.border_radius = v;
        }
        if let Some(v) = self.card_padding {
            layout.card_padding = v;
        }
        if let Some(v) = self.spacing {
            layout.spacing = v;
        }
        if let Some(v) = self.style {
            layout.style = v;
        }
    }
}

/// Partial effects update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EffectsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grain_intensity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur_strength: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_depth: Option<ShadowDepth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glow_intensity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_angle: Option<f32>,
}

impl EffectsPatch {
    pub(crate) fn overlay(&self, effects: &mut Effects) {
        if let Some(v) = self.grain_intensity {
            effects.grain_intensity = v;
        }
        if let Some(v) = self.blur_strength {
            effects.blur_strength = v;
        }
        if let Some(v) = self.shadow_depth {
            effects.shadow_depth = v;
        }
        if let Some(v) = self.glow_intensity {
            effects.glow_intensity = v;
        }
        if let Some(v) = self.gradient_angle {
            effects.gradient_angle = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_template_kind_round_trip() {
        for kind in TemplateKind::ALL {
            assert_eq!(TemplateKind::from_id(kind.as_str()), kind);
        }
    }

    #[test]
    fn test_unknown_template_falls_back() {
        assert_eq!(TemplateKind::from_id("vaporwave"), TemplateKind::Brutalist);
        assert_eq!(TemplateKind::from_id(""), TemplateKind::Brutalist);
    }

    #[test]
    fn test_template_kind_serde_uses_ids() {
        assert_eq!(
            serde_json::to_string(&TemplateKind::Midnight).unwrap(),
            r#""midnight""#
        );
        assert_eq!(
            serde_json::from_str::<TemplateKind>(r#""elegant""#).unwrap(),
            TemplateKind::Elegant
        );
    }

    #[test]
    fn test_layout_style_serde_kebab_case() {
        assert_eq!(
            serde_json::to_string(&LayoutStyle::FullBleed).unwrap(),
            r#""full-bleed""#
        );
        assert_eq!(
            serde_json::from_str::<LayoutStyle>(r#""card""#).unwrap(),
            LayoutStyle::Card
        );
    }

    #[test]
    fn test_unknown_template_deserializes_to_default() {
        let kind: TemplateKind = serde_json::from_str(r#""holographic""#).unwrap();
        assert_eq!(kind, TemplateKind::Brutalist);
    }
}
