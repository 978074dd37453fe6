//! CSS Value Model
//!
//! Parsed, validated property values as stored in declarations.

use crate::keywords::Keyword;

/// Unit of a numeric value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Number,
    Percent,
    Px,
    Em,
    Ex,
    Cm,
    Mm,
    In,
    Pt,
    Pc,
    Deg,
    Rad,
    Grad,
    Ms,
    S,
    Hz,
    Khz,
    /// Unrecognized dimension suffix
    Dimension,
}

impl Unit {
    /// Map a dimension suffix to its unit (ASCII case-insensitive)
    pub fn from_suffix(suffix: &str) -> Self {
        match suffix.to_ascii_lowercase().as_str() {
            "px" => Self::Px,
            "em" => Self::Em,
            "ex" => Self::Ex,
            "cm" => Self::Cm,
            "mm" => Self::Mm,
            "in" => Self::In,
            "pt" => Self::Pt,
            "pc" => Self::Pc,
            "deg" => Self::Deg,
            "rad" => Self::Rad,
            "grad" => Self::Grad,
            "ms" => Self::Ms,
            "s" => Self::S,
            "hz" => Self::Hz,
            "khz" => Self::Khz,
            _ => Self::Dimension,
        }
    }

    /// Absolute or font-relative length unit
    #[inline]
    pub fn is_length(self) -> bool {
        matches!(
            self,
            Self::Px | Self::Em | Self::Ex | Self::Cm | Self::Mm | Self::In | Self::Pt | Self::Pc
        )
    }

    #[inline]
    pub fn is_font_relative(self) -> bool {
        matches!(self, Self::Em | Self::Ex)
    }

    #[inline]
    pub fn is_time(self) -> bool {
        matches!(self, Self::Ms | Self::S)
    }
}

/// A parsed CSS value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// CSS-wide `inherit`
    Inherit,
    /// CSS-wide `initial`
    Initial,
    Keyword(Keyword),
    /// Number, percentage or dimension
    Numeric(f32, Unit),
    String(String),
    Uri(String),
    /// `attr(name)` inside `content`
    Attr(String),
    Color(Color),
    Rect(Box<Rect>),
    /// `text-shadow` list, first shadow first
    Shadows(Vec<Shadow>),
    /// Space or comma separated list (family names, content, decorations, background layers)
    List(Vec<Value>),
}

impl Value {
    #[inline]
    pub fn px(v: f32) -> Self {
        Self::Numeric(v, Unit::Px)
    }

    #[inline]
    pub fn percent(v: f32) -> Self {
        Self::Numeric(v, Unit::Percent)
    }

    #[inline]
    pub fn number(v: f32) -> Self {
        Self::Numeric(v, Unit::Number)
    }

    /// Keyword carried by this value, if any
    #[inline]
    pub fn keyword(&self) -> Option<Keyword> {
        match self {
            Self::Keyword(k) => Some(*k),
            _ => None,
        }
    }

    #[inline]
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.keyword() == Some(kw)
    }

    /// `inherit` or `initial`
    #[inline]
    pub fn is_css_wide(&self) -> bool {
        matches!(self, Self::Inherit | Self::Initial)
    }

    /// Numeric value and unit, if any
    #[inline]
    pub fn numeric(&self) -> Option<(f32, Unit)> {
        match self {
            Self::Numeric(v, u) => Some((*v, *u)),
            _ => None,
        }
    }
}

/// `rect(top, right, bottom, left)` for `clip`
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub top: Value,
    pub right: Value,
    pub bottom: Value,
    pub left: Value,
}

/// One `text-shadow` entry
#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
    pub x: Value,
    pub y: Value,
    pub blur: Option<Value>,
    pub color: Option<Value>,
}

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const TRANSPARENT: Color = Color { r: 0, g: 0, b: 0, a: 0 };
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from `0xRRGGBB`
    pub const fn from_rgb24(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Parse `rgb` or `rrggbb` hex digits, with or without a leading `#`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
                Some(Self::rgb(r, g, b))
            }
            6 => {
                let rgb = u32::from_str_radix(hex, 16).ok()?;
                Some(Self::from_rgb24(rgb))
            }
            _ => None,
        }
    }

    /// Fixed color for a named or system color keyword.
    ///
    /// Link and text keywords depend on the document and are resolved by the
    /// applier instead.
    pub fn from_keyword(kw: Keyword) -> Option<Self> {
        use Keyword as K;
        Some(match kw {
            K::Aqua => Self::from_rgb24(0x00FFFF),
            K::Black => Self::BLACK,
            K::Blue => Self::from_rgb24(0x0000FF),
            K::Fuchsia => Self::from_rgb24(0xFF00FF),
            K::Gray | K::Grey => Self::from_rgb24(0x808080),
            K::Green => Self::from_rgb24(0x008000),
            K::Lime => Self::from_rgb24(0x00FF00),
            K::Maroon => Self::from_rgb24(0x800000),
            K::Navy => Self::from_rgb24(0x000080),
            K::Olive => Self::from_rgb24(0x808000),
            K::Orange => Self::from_rgb24(0xFFA500),
            K::Purple => Self::from_rgb24(0x800080),
            K::Red => Self::from_rgb24(0xFF0000),
            K::Silver => Self::from_rgb24(0xC0C0C0),
            K::Teal => Self::from_rgb24(0x008080),
            K::White => Self::WHITE,
            K::Yellow => Self::from_rgb24(0xFFFF00),
            K::Transparent => Self::TRANSPARENT,
            K::Activeborder => Self::from_rgb24(0xE0E0E0),
            K::Activecaption => Self::BLACK,
            K::Appworkspace => Self::BLACK,
            K::Buttonface => Self::from_rgb24(0xC0C0C0),
            K::Buttonhighlight => Self::from_rgb24(0xE0E0E0),
            K::Buttonshadow => Self::WHITE,
            K::Buttontext => Self::BLACK,
            K::Captiontext => Self::BLACK,
            K::Graytext => Self::BLACK,
            K::Highlight => Self::WHITE,
            K::Highlighttext => Self::WHITE,
            K::Inactiveborder => Self::WHITE,
            K::Inactivecaption => Self::WHITE,
            K::Inactivecaptiontext => Self::BLACK,
            K::Infobackground => Self::BLACK,
            K::Infotext => Self::BLACK,
            K::Menu => Self::WHITE,
            K::Menutext => Self::WHITE,
            K::Scrollbar => Self::WHITE,
            K::Threeddarkshadow => Self::from_rgb24(0x404040),
            K::Threedface => Self::from_rgb24(0xC0C0C0),
            K::Threedhighlight => Self::from_rgb24(0xE0E0E0),
            K::Threedlightshadow => Self::from_rgb24(0xC0C0C0),
            K::Threedshadow => Self::WHITE,
            K::Window => Self::WHITE,
            K::Windowframe => Self::WHITE,
            K::Windowtext => Self::BLACK,
            _ => return None,
        })
    }

    /// Fully transparent
    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_colors() {
        assert_eq!(Color::from_hex("#fff"), Some(Color::WHITE));
        assert_eq!(Color::from_hex("000080"), Some(Color::rgb(0, 0, 128)));
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#ggg"), None);
    }

    #[test]
    fn test_keyword_colors() {
        assert_eq!(Color::from_keyword(Keyword::Orange), Some(Color::rgb(255, 165, 0)));
        assert_eq!(Color::from_keyword(Keyword::Threeddarkshadow), Some(Color::from_rgb24(0x404040)));
        assert!(Color::from_keyword(Keyword::Transparent).is_some_and(Color::is_transparent));
        assert_eq!(Color::from_keyword(Keyword::KhtmlLink), None);
    }

    #[test]
    fn test_units() {
        assert_eq!(Unit::from_suffix("PX"), Unit::Px);
        assert_eq!(Unit::from_suffix("ff00"), Unit::Dimension);
        assert!(Unit::Pc.is_length());
        assert!(!Unit::Ms.is_length());
        assert!(Unit::Em.is_font_relative());
    }
}
