//! Font Sizes and Lengths
//!
//! Keyword font sizes, `larger`/`smaller` scaling, minimum font size
//! handling and conversion of CSS lengths to pixels.

use crate::computed::{FontDescription, GenericFamily};
use crate::keywords::Keyword;
use crate::values::Unit;

/// Pixels per inch used for absolute units
pub const DPI: f32 = 96.0;

/// `larger` / `smaller` step
pub const FONT_SIZE_STEP: f32 = 1.2;

const MIN_TABLE_MEDIUM: u32 = 9;
const MAX_TABLE_MEDIUM: u32 = 16;

/// Keyword sizes for medium sizes 9..=16 in quirks mode, xx-small..-khtml-xxx-large
const QUIRKS_FONT_SIZES: [[u8; 8]; 8] = [
    [9, 9, 9, 9, 11, 14, 18, 28],
    [9, 9, 9, 10, 12, 15, 20, 31],
    [9, 9, 9, 11, 13, 17, 22, 34],
    [9, 9, 10, 12, 14, 18, 24, 37],
    [9, 9, 10, 13, 16, 20, 26, 40],
    [9, 9, 11, 14, 17, 21, 28, 42],
    [9, 10, 12, 15, 17, 23, 30, 45],
    [9, 10, 13, 16, 18, 24, 32, 48],
];

/// Same as above for strict mode
const STRICT_FONT_SIZES: [[u8; 8]; 8] = [
    [9, 9, 9, 9, 11, 14, 18, 27],
    [9, 9, 9, 10, 12, 15, 20, 30],
    [9, 9, 10, 11, 13, 17, 22, 33],
    [9, 9, 10, 12, 14, 18, 24, 36],
    [9, 10, 12, 13, 16, 20, 26, 39],
    [9, 10, 12, 14, 17, 21, 28, 42],
    [9, 10, 13, 15, 18, 23, 30, 45],
    [9, 10, 13, 16, 18, 24, 32, 48],
];

/// Scale of each keyword against medium, outside the tables
const FONT_SIZE_FACTORS: [f32; 8] = [0.60, 0.75, 0.89, 1.0, 1.2, 1.5, 2.0, 3.0];

/// Font metrics needed to resolve `ex`
pub trait FontMetrics {
    /// x-height in pixels of the font
    fn x_height(&self, font: &FontDescription) -> f32;
}

/// Metrics without font data: the x-height is half the font size
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFontMetrics;

impl FontMetrics for DefaultFontMetrics {
    fn x_height(&self, font: &FontDescription) -> f32 {
        font.computed_size / 2.0
    }
}

/// Settings that shape font size computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizeSettings {
    pub medium: f32,
    pub medium_fixed: f32,
    pub minimum: f32,
    pub minimum_logical: f32,
    pub quirks: bool,
    /// Page zoom, 1.0 for none
    pub zoom: f32,
}

impl Default for FontSizeSettings {
    fn default() -> Self {
        Self {
            medium: 16.0,
            medium_fixed: 13.0,
            minimum: 0.0,
            minimum_logical: 6.0,
            quirks: false,
            zoom: 1.0,
        }
    }
}

impl FontSizeSettings {
    /// Medium size for a generic family
    pub fn medium_for(&self, generic: GenericFamily) -> f32 {
        if generic == GenericFamily::Monospace {
            self.medium_fixed
        } else {
            self.medium
        }
    }

    /// Pixel size of an absolute size keyword (`xx-small` .. `-khtml-xxx-large`)
    pub fn size_for_keyword(&self, keyword: Keyword, monospace: bool) -> f32 {
        let medium = if monospace { self.medium_fixed } else { self.medium };
        let column = keyword.offset_from(Keyword::XxSmall).min(7);
        let row = medium.round() as u32;
        if (MIN_TABLE_MEDIUM..=MAX_TABLE_MEDIUM).contains(&row) {
            let table = if self.quirks { &QUIRKS_FONT_SIZES } else { &STRICT_FONT_SIZES };
            return f32::from(table[(row - MIN_TABLE_MEDIUM) as usize][column]);
        }
        (FONT_SIZE_FACTORS[column] * medium).max(self.minimum_logical.max(1.0))
    }

    /// Size used for rendering, after zoom and the minimum font sizes.
    /// Sizes that came from absolute units are exempt from the logical minimum
    /// unless they were at least that large to begin with.
    pub fn computed_from_specified(&self, is_absolute_size: bool, specified: f32) -> f32 {
        let mut zoomed = specified * self.zoom;
        if zoomed < self.minimum {
            zoomed = self.minimum;
        }
        if zoomed < self.minimum_logical && (specified >= self.minimum_logical || !is_absolute_size) {
            zoomed = self.minimum_logical;
        }
        zoomed.max(1.0)
    }

    /// Store a specified size on a font, updating its computed size
    pub fn set_font_size(&self, font: &mut FontDescription, size: f32) {
        font.specified_size = size;
        font.computed_size = self.computed_from_specified(font.is_absolute_size, size);
    }

    /// Rescale an inherited relative size when the generic family switches
    /// between monospace and proportional
    pub fn check_generic_family_change(&self, font: &mut FontDescription, parent: Option<&FontDescription>) {
        let Some(parent) = parent else {
            return;
        };
        if font.is_absolute_size || font.generic == parent.generic {
            return;
        }
        let parent_mono = parent.generic == GenericFamily::Monospace;
        let child_mono = font.generic == GenericFamily::Monospace;
        if !parent_mono && !child_mono {
            return;
        }
        if self.medium <= 0.0 || self.medium_fixed <= 0.0 {
            return;
        }
        let factor = self.medium_fixed / self.medium;
        let size = if parent_mono {
            font.specified_size / factor
        } else {
            font.specified_size * factor
        };
        self.set_font_size(font, size);
    }
}

/// Pixel size of `larger` applied to `size`
#[inline]
pub fn larger(size: f32) -> f32 {
    size * FONT_SIZE_STEP
}

/// Pixel size of `smaller` applied to `size`
#[inline]
pub fn smaller(size: f32) -> f32 {
    size / FONT_SIZE_STEP
}

/// Convert a length to fractional pixels. `em` and `ex` resolve against
/// `font`. Returns `None` for non-length units.
pub fn length_to_px(value: f32, unit: Unit, font: &FontDescription, metrics: &dyn FontMetrics) -> Option<f32> {
    let factor = match unit {
        Unit::Px | Unit::Number => 1.0,
        Unit::Em => font.computed_size,
        Unit::Ex => metrics.x_height(font),
        Unit::Cm => DPI / 2.54,
        Unit::Mm => DPI / 25.4,
        Unit::In => DPI,
        Unit::Pt => DPI / 72.0,
        Unit::Pc => DPI * 12.0 / 72.0,
        _ => return None,
    };
    Some(value * factor)
}

/// Convert a length to whole pixels, truncating toward zero except for
/// values within rounding error of the next integer
pub fn compute_length(value: f32, unit: Unit, font: &FontDescription, metrics: &dyn FontMetrics) -> Option<i32> {
    let px = length_to_px(value, unit, font, metrics)?;
    Some(round_length(px))
}

pub(crate) fn round_length(px: f32) -> i32 {
    let truncated = px.trunc();
    if (px - truncated).abs() > 0.9999 {
        (truncated + px.signum()) as i32
    } else {
        truncated as i32
    }
}
