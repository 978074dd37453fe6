//! Style Configuration
//!
//! User preferences and document colors the resolver reads while computing
//! styles.

use crate::font_size::FontSizeSettings;
use crate::values::Color;

/// Style resolver settings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleConfig {
    /// Media type rules are selected for (`screen`, `print`, ...)
    pub media_type: String,
    /// Text of the user stylesheet
    pub user_style_sheet: Option<String>,

    /// `medium` font size in pixels
    pub medium_font_size: f32,
    /// `medium` size of monospace fonts
    pub medium_fixed_font_size: f32,
    /// Hard floor for computed font sizes
    pub minimum_font_size: f32,
    /// Floor for font sizes that came from keywords or relative units
    pub minimum_logical_font_size: f32,
    /// Page zoom, 1.0 for none
    pub zoom: f32,

    pub standard_font_family: String,
    pub fixed_font_family: String,
    pub serif_font_family: String,
    pub sans_serif_font_family: String,
    pub cursive_font_family: String,
    pub fantasy_font_family: String,

    /// Document link colors (`-khtml-link`, `-khtml-activelink`)
    pub link_color: Color,
    pub visited_link_color: Color,
    pub active_link_color: Color,
    /// Document text color (`-khtml-text`)
    pub text_color: Color,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            media_type: "screen".into(),
            user_style_sheet: None,
            medium_font_size: 16.0,
            medium_fixed_font_size: 13.0,
            minimum_font_size: 0.0,
            minimum_logical_font_size: 6.0,
            zoom: 1.0,
            standard_font_family: "Times New Roman".into(),
            fixed_font_family: "Courier New".into(),
            serif_font_family: "Times New Roman".into(),
            sans_serif_font_family: "Arial".into(),
            cursive_font_family: "Comic Sans MS".into(),
            fantasy_font_family: "Impact".into(),
            link_color: Color::rgb(0, 0, 238),
            visited_link_color: Color::rgb(85, 26, 139),
            active_link_color: Color::rgb(255, 0, 0),
            text_color: Color::BLACK,
        }
    }
}

impl StyleConfig {
    /// Font size settings for a document in quirks or strict mode
    pub fn font_size_settings(&self, quirks: bool) -> FontSizeSettings {
        FontSizeSettings {
            medium: self.medium_font_size,
            medium_fixed: self.medium_fixed_font_size,
            minimum: self.minimum_font_size,
            minimum_logical: self.minimum_logical_font_size,
            quirks,
            zoom: self.zoom,
        }
    }

    /// Printing uses the print stylesheet
    pub fn is_print(&self) -> bool {
        self.media_type.eq_ignore_ascii_case("print")
    }
}
