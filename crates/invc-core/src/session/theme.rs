//! Theme customization session.
//!
//! Holds the active theme. Selecting a theme replaces the whole value
//! (discarding prior customization); the update methods merge partial
//! changes into one subgroup without touching the others.

use crate::models::theme::{ColorPatch, EffectsPatch, LayoutPatch, Theme, TypographyPatch};
use crate::themes;

/// Owns the active theme and applies customizations.
#[derive(Debug, Clone)]
pub struct ThemeSession {
    theme: Theme,
}

impl ThemeSession {
    /// Start on the default theme.
    pub fn new() -> Self {
        Self {
            theme: themes::default_theme(),
        }
    }

    /// The active theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Switch to the theme with the given id, falling back to the default
    /// for unknown ids. Discards any customization of the previous theme.
    pub fn select(&mut self, id: &str) {
        self.theme = themes::theme_by_id(id);
    }

    /// Merge a partial color update.
    pub fn update_colors(&mut self, patch: &ColorPatch) {
        patch.overlay(&mut self.theme.colors);
    }

    /// Merge a partial typography update.
    pub fn update_typography(&mut self, patch: &TypographyPatch) {
        patch.overlay(&mut self.theme.typography);
    }

    /// Merge a partial layout update.
    pub fn update_layout(&mut self, patch: &LayoutPatch) {
        patch.overlay(&mut self.theme.layout);
    }

    /// Merge a partial effects update. Intensities are clamped to their
    /// valid ranges: grain and glow to 0..=1, blur to >= 0.
    pub fn update_effects(&mut self, patch: &EffectsPatch) {
        patch.overlay(&mut self.theme.effects);
        let effects = &mut self.theme.effects;
        effects.grain_intensity = effects.grain_intensity.clamp(0.0, 1.0);
        effects.glow_intensity = effects.glow_intensity.clamp(0.0, 1.0);
        effects.blur_strength = effects.blur_strength.max(0.0);
    }
}

impl Default for ThemeSession {
    fn default() -> Self {
        Self::new()
    }
}
