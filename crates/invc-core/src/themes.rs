//! Built-in theme catalog.
//!
//! Eight themes, each bound to one of the structural templates. The first
//! entry is the default; unknown ids resolve to it.

use lazy_static::lazy_static;

use crate::models::theme::{
    ColorScheme, Effects, Layout, LayoutStyle, ShadowDepth, Spacing, TemplateKind, Theme,
    Typography,
};

lazy_static! {
    /// The built-in theme catalog, in gallery order.
    pub static ref CATALOG: Vec<Theme> = build_catalog();
}

/// Resolve a theme id, falling back to the default (first) theme.
pub fn theme_by_id(id: &str) -> Theme {
    CATALOG
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .unwrap_or_else(default_theme)
}

/// The default theme.
pub fn default_theme() -> Theme {
    CATALOG[0].clone()
}

fn s(v: &str) -> String {
    v.to_string()
}

fn build_catalog() -> Vec<Theme> {
    vec![
        Theme {
            id: s("modern-brutalist"),
            name: s("Modern Brutalist"),
            description: s("Bold typography, stark contrasts, geometric shapes"),
            template: TemplateKind::Brutalist,
            preview_gradient: s(
                "linear-gradient(135deg, #ffffff 0%, #f0f0f0 50%, #e0e0e0 100%)",
            ),
            colors: ColorScheme {
                gradient_stops: vec![s("#ffffff"), s("#f5f5f5"), s("#eeeeee")],
                accent: s("#1a1a1a"),
                accent_secondary: s("#ff4500"),
                card_bg: s("#ffffff"),
                text_primary: s("#111111"),
                text_secondary: s("#555555"),
                border: s("#222222"),
                table_header_bg: s("#1a1a1a"),
                table_alt_row: s("#f5f5f5"),
            },
            typography: Typography {
                font_family: s("'Space Grotesk', sans-serif"),
                heading_font_family: s("'Space Grotesk', sans-serif"),
                base_font_size: 13.0,
                heading_weight: 700,
                body_weight: 400,
                letter_spacing: -0.03,
                line_height: 1.4,
            },
            layout: Layout {
                border_radius: 0.0,
                card_padding: 36.0,
                spacing: Spacing::Compact,
                style: LayoutStyle::FullBleed,
            },
            effects: Effects {
                grain_intensity: 0.0,
                blur_strength: 0.0,
                shadow_depth: ShadowDepth::Strong,
                glow_intensity: 0.0,
                gradient_angle: 180.0,
            },
        },
        Theme {
            id: s("executive-suite"),
            name: s("Executive Suite"),
            description: s("Formal serif typography with gold accents, centered header"),
            template: TemplateKind::Executive,
            preview_gradient: s(
                "linear-gradient(135deg, #f8f6f0 0%, #ede8df 50%, #d4c5a9 100%)",
            ),
            colors: ColorScheme {
                gradient_stops: vec![s("#f8f6f0"), s("#ede8df"), s("#d4c5a9")],
                accent: s("#8b6914"),
                accent_secondary: s("#5c4a1e"),
                card_bg: s("#fffef9"),
                text_primary: s("#1c1a15"),
                text_secondary: s("#6b6356"),
                border: s("#d4c5a9"),
                table_header_bg: s("#f5f0e5"),
                table_alt_row: s("#faf8f3"),
            },
            typography: Typography {
                font_family: s("'Lora', serif"),
                heading_font_family: s("'Playfair Display', serif"),
                base_font_size: 13.0,
                heading_weight: 600,
                body_weight: 400,
                letter_spacing: 0.01,
                line_height: 1.6,
            },
            layout: Layout {
                border_radius: 0.0,
                card_padding: 44.0,
                spacing: Spacing::Airy,
                style: LayoutStyle::FullBleed,
            },
            effects: Effects {
                grain_intensity: 0.0,
                blur_strength: 0.0,
                shadow_depth: ShadowDepth::Soft,
                glow_intensity: 0.0,
                gradient_angle: 180.0,
            },
        },
        Theme {
            id: s("midnight-pro"),
            name: s("Midnight Pro"),
            description: s("Dark paper with glowing sidebar accent strip"),
            template: TemplateKind::Midnight,
            preview_gradient: s(
                "linear-gradient(135deg, #0f172a 0%, #1e293b 50%, #0f172a 100%)",
            ),
            colors: ColorScheme {
                gradient_stops: vec![s("#0f172a"), s("#1e293b"), s("#0f172a")],
                accent: s("#38bdf8"),
                accent_secondary: s("#818cf8"),
                card_bg: s("#1e293b"),
                text_primary: s("#e2e8f0"),
                text_secondary: s("#94a3b8"),
                border: s("#334155"),
                table_header_bg: s("#334155"),
                table_alt_row: s("#253347"),
            },
            typography: Typography {
                font_family: s("'DM Sans', sans-serif"),
                heading_font_family: s("'Plus Jakarta Sans', sans-serif"),
                base_font_size: 13.0,
                heading_weight: 700,
                body_weight: 400,
                letter_spacing: -0.01,
                line_height: 1.5,
            },
            layout: Layout {
                border_radius: 0.0,
                card_padding: 40.0,
                spacing: Spacing::Normal,
                style: LayoutStyle::FullBleed,
            },
            effects: Effects {
                grain_intensity: 0.0,
                blur_strength: 0.0,
                shadow_depth: ShadowDepth::Strong,
                glow_intensity: 0.0,
                gradient_angle: 180.0,
            },
        },
        Theme {
            id: s("clean-minimal"),
            name: s("Clean Minimal"),
            description: s("Maximum whitespace, hairline dividers, ultra-clean"),
            template: TemplateKind::Minimal,
            preview_gradient: s("linear-gradient(135deg, #ffffff 0%, #fafafa 100%)"),
            colors: ColorScheme {
                gradient_stops: vec![s("#ffffff"), s("#fafafa"), s("#f5f5f5")],
                accent: s("#18181b"),
                accent_secondary: s("#71717a"),
                card_bg: s("#ffffff"),
                text_primary: s("#18181b"),
                text_secondary: s("#71717a"),
                border: s("#e4e4e7"),
                table_header_bg: s("transparent"),
                table_alt_row: s("#fafafa"),
            },
            typography: Typography {
                font_family: s("'Inter', sans-serif"),
                heading_font_family: s("'Inter', sans-serif"),
                base_font_size: 12.5,
                heading_weight: 500,
                body_weight: 400,
                letter_spacing: 0.0,
                line_height: 1.5,
            },
            layout: Layout {
                border_radius: 0.0,
                card_padding: 48.0,
                spacing: Spacing::Airy,
                style: LayoutStyle::FullBleed,
            },
            effects: Effects {
                grain_intensity: 0.0,
                blur_strength: 0.0,
                shadow_depth: ShadowDepth::Soft,
                glow_intensity: 0.0,
                gradient_angle: 180.0,
            },
        },
        Theme {
            id: s("corporate-classic"),
            name: s("Corporate Classic"),
            description: s("Blue header banner, traditional business layout"),
            template: TemplateKind::Classic,
            preview_gradient: s(
                "linear-gradient(135deg, #1e3a5f 0%, #2563eb 50%, #1e40af 100%)",
            ),
            colors: ColorScheme {
                gradient_stops: vec![s("#1e3a5f"), s("#2563eb"), s("#1e40af")],
                accent: s("#1e40af"),
                accent_secondary: s("#2563eb"),
                card_bg: s("#ffffff"),
                text_primary: s("#1e293b"),
                text_secondary: s("#64748b"),
                border: s("#e2e8f0"),
                table_header_bg: s("#1e40af"),
                table_alt_row: s("#f1f5f9"),
            },
            typography: Typography {
                font_family: s("'Open Sans', sans-serif"),
                heading_font_family: s("'Montserrat', sans-serif"),
                base_font_size: 13.0,
                heading_weight: 700,
                body_weight: 400,
                letter_spacing: 0.0,
                line_height: 1.5,
            },
            layout: Layout {
                border_radius: 0.0,
                card_padding: 0.0,
                spacing: Spacing::Normal,
                style: LayoutStyle::FullBleed,
            },
            effects: Effects {
                grain_intensity: 0.0,
                blur_strength: 0.0,
                shadow_depth: ShadowDepth::Medium,
                glow_intensity: 0.0,
                gradient_angle: 180.0,
            },
        },
        Theme {
            id: s("tech-startup"),
            name: s("Tech Startup"),
            description: s("Monospace accents, dotted lines, pill badges"),
            template: TemplateKind::Tech,
            preview_gradient: s(
                "linear-gradient(135deg, #f0fdf4 0%, #dcfce7 50%, #bbf7d0 100%)",
            ),
            colors: ColorScheme {
                gradient_stops: vec![s("#f0fdf4"), s("#dcfce7"), s("#bbf7d0")],
                accent: s("#059669"),
                accent_secondary: s("#10b981"),
                card_bg: s("#ffffff"),
                text_primary: s("#064e3b"),
                text_secondary: s("#6b7280"),
                border: s("#d1fae5"),
                table_header_bg: s("#ecfdf5"),
                table_alt_row: s("#f0fdf4"),
            },
            typography: Typography {
                font_family: s("'DM Sans', sans-serif"),
                heading_font_family: s("'Space Grotesk', sans-serif"),
                base_font_size: 13.0,
                heading_weight: 600,
                body_weight: 400,
                letter_spacing: -0.01,
                line_height: 1.5,
            },
            layout: Layout {
                border_radius: 8.0,
                card_padding: 40.0,
                spacing: Spacing::Normal,
                style: LayoutStyle::FullBleed,
            },
            effects: Effects {
                grain_intensity: 0.0,
                blur_strength: 0.0,
                shadow_depth: ShadowDepth::Soft,
                glow_intensity: 0.0,
                gradient_angle: 180.0,
            },
        },
        Theme {
            id: s("elegant"),
            name: s("Elegant"),
            description: s("Refined serif headings, thin accent borders, graceful spacing"),
            template: TemplateKind::Elegant,
            preview_gradient: s(
                "linear-gradient(135deg, #fdf2f8 0%, #fce7f3 50%, #fbcfe8 100%)",
            ),
            colors: ColorScheme {
                gradient_stops: vec![s("#fdf2f8"), s("#fce7f3"), s("#fbcfe8")],
                accent: s("#9d174d"),
                accent_secondary: s("#be185d"),
                card_bg: s("#ffffff"),
                text_primary: s("#1c1917"),
                text_secondary: s("#78716c"),
                border: s("#e7e5e4"),
                table_header_bg: s("#faf5f0"),
                table_alt_row: s("#fdfcfb"),
            },
            typography: Typography {
                font_family: s("'Lora', serif"),
                heading_font_family: s("'Cormorant Garamond', serif"),
                base_font_size: 13.0,
                heading_weight: 600,
                body_weight: 400,
                letter_spacing: 0.02,
                line_height: 1.6,
            },
            layout: Layout {
                border_radius: 0.0,
                card_padding: 48.0,
                spacing: Spacing::Airy,
                style: LayoutStyle::FullBleed,
            },
            effects: Effects {
                grain_intensity: 0.0,
                blur_strength: 0.0,
                shadow_depth: ShadowDepth::Soft,
                glow_intensity: 0.0,
                gradient_angle: 180.0,
            },
        },
        Theme {
            id: s("fresh-modern"),
            name: s("Fresh Modern"),
            description: s("Colored accent sidebar, clean modern sans-serif"),
            template: TemplateKind::Fresh,
            preview_gradient: s(
                "linear-gradient(135deg, #ede9fe 0%, #c4b5fd 50%, #8b5cf6 100%)",
            ),
            colors: ColorScheme {
                gradient_stops: vec![s("#ede9fe"), s("#c4b5fd"), s("#8b5cf6")],
                accent: s("#7c3aed"),
                accent_secondary: s("#a78bfa"),
                card_bg: s("#ffffff"),
                text_primary: s("#1e1b4b"),
                text_secondary: s("#6b7280"),
                border: s("#e5e7eb"),
                table_header_bg: s("#f5f3ff"),
                table_alt_row: s("#faf5ff"),
            },
            typography: Typography {
                font_family: s("'Manrope', sans-serif"),
                heading_font_family: s("'Outfit', sans-serif"),
                base_font_size: 13.0,
                heading_weight: 700,
                body_weight: 400,
                letter_spacing: -0.01,
                line_height: 1.5,
            },
            layout: Layout {
                border_radius: 0.0,
                card_padding: 40.0,
                spacing: Spacing::Normal,
                style: LayoutStyle::FullBleed,
            },
            effects: Effects {
                grain_intensity: 0.0,
                blur_strength: 0.0,
                shadow_depth: ShadowDepth::Medium,
                glow_intensity: 0.0,
                gradient_angle: 180.0,
            },
        },
    ]
}
