//! CSS Property Definitions
//!
//! All supported CSS properties. Shorthands only ever reach the cascade as
//! `inherit`/`initial`; otherwise the parser expands them into longhands.

macro_rules! properties {
    ($($variant:ident => $name:literal,)*) => {
        /// Property identifier
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum PropertyId {
            $($variant,)*
        }

        impl PropertyId {
            /// Every property, in declaration order
            pub const ALL: &'static [PropertyId] = &[$(PropertyId::$variant,)*];

            /// Parse a property name (ASCII case-insensitive)
            pub fn from_name(name: &str) -> Option<Self> {
                let lower = name.to_ascii_lowercase();
                Some(match lower.as_str() {
                    $($name => Self::$variant,)*
                    "-khtml-text-overflow" => Self::TextOverflow,
                    _ => return None,
                })
            }

            /// CSS name of the property
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }
        }
    };
}

properties! {
    // Display & Layout
    Display => "display",
    Position => "position",
    Float => "float",
    Clear => "clear",
    Top => "top",
    Right => "right",
    Bottom => "bottom",
    Left => "left",
    ZIndex => "z-index",
    Direction => "direction",
    UnicodeBidi => "unicode-bidi",
    Visibility => "visibility",
    Overflow => "overflow",
    Clip => "clip",
    Cursor => "cursor",
    Opacity => "opacity",

    // Box Model
    Width => "width",
    Height => "height",
    MinWidth => "min-width",
    MinHeight => "min-height",
    MaxWidth => "max-width",
    MaxHeight => "max-height",
    MarginTop => "margin-top",
    MarginRight => "margin-right",
    MarginBottom => "margin-bottom",
    MarginLeft => "margin-left",
    KhtmlMarginStart => "-khtml-margin-start",
    PaddingTop => "padding-top",
    PaddingRight => "padding-right",
    PaddingBottom => "padding-bottom",
    PaddingLeft => "padding-left",
    KhtmlPaddingStart => "-khtml-padding-start",

    // Border & Outline
    BorderTopWidth => "border-top-width",
    BorderRightWidth => "border-right-width",
    BorderBottomWidth => "border-bottom-width",
    BorderLeftWidth => "border-left-width",
    BorderTopStyle => "border-top-style",
    BorderRightStyle => "border-right-style",
    BorderBottomStyle => "border-bottom-style",
    BorderLeftStyle => "border-left-style",
    BorderTopColor => "border-top-color",
    BorderRightColor => "border-right-color",
    BorderBottomColor => "border-bottom-color",
    BorderLeftColor => "border-left-color",
    OutlineWidth => "outline-width",
    OutlineStyle => "outline-style",
    OutlineColor => "outline-color",
    OutlineOffset => "outline-offset",

    // Colors & Background
    Color => "color",
    BackgroundColor => "background-color",
    BackgroundImage => "background-image",
    BackgroundRepeat => "background-repeat",
    BackgroundAttachment => "background-attachment",
    BackgroundPositionX => "background-position-x",
    BackgroundPositionY => "background-position-y",

    // Fonts
    FontFamily => "font-family",
    FontSize => "font-size",
    FontStyle => "font-style",
    FontVariant => "font-variant",
    FontWeight => "font-weight",
    LineHeight => "line-height",

    // Text
    TextAlign => "text-align",
    TextDecoration => "text-decoration",
    TextIndent => "text-indent",
    TextTransform => "text-transform",
    TextShadow => "text-shadow",
    TextOverflow => "text-overflow",
    LetterSpacing => "letter-spacing",
    WordSpacing => "word-spacing",
    WhiteSpace => "white-space",
    VerticalAlign => "vertical-align",

    // Lists & Generated content
    ListStyleType => "list-style-type",
    ListStylePosition => "list-style-position",
    ListStyleImage => "list-style-image",
    Content => "content",

    // Tables
    BorderCollapse => "border-collapse",
    KhtmlBorderHorizontalSpacing => "-khtml-border-horizontal-spacing",
    KhtmlBorderVerticalSpacing => "-khtml-border-vertical-spacing",
    CaptionSide => "caption-side",
    EmptyCells => "empty-cells",
    TableLayout => "table-layout",

    // Paged media
    PageBreakBefore => "page-break-before",
    PageBreakAfter => "page-break-after",
    PageBreakInside => "page-break-inside",
    Orphans => "orphans",
    Widows => "widows",

    // Legacy scrollbar colors
    ScrollbarFaceColor => "scrollbar-face-color",
    ScrollbarShadowColor => "scrollbar-shadow-color",
    ScrollbarHighlightColor => "scrollbar-highlight-color",
    Scrollbar3dlightColor => "scrollbar-3dlight-color",
    ScrollbarDarkshadowColor => "scrollbar-darkshadow-color",
    ScrollbarTrackColor => "scrollbar-track-color",
    ScrollbarArrowColor => "scrollbar-arrow-color",

    // Flexible box
    KhtmlBoxAlign => "-khtml-box-align",
    KhtmlBoxDirection => "-khtml-box-direction",
    KhtmlBoxFlex => "-khtml-box-flex",
    KhtmlBoxFlexGroup => "-khtml-box-flex-group",
    KhtmlBoxLines => "-khtml-box-lines",
    KhtmlBoxOrdinalGroup => "-khtml-box-ordinal-group",
    KhtmlBoxOrient => "-khtml-box-orient",
    KhtmlBoxPack => "-khtml-box-pack",

    // Marquee
    KhtmlMarqueeDirection => "-khtml-marquee-direction",
    KhtmlMarqueeIncrement => "-khtml-marquee-increment",
    KhtmlMarqueeRepetition => "-khtml-marquee-repetition",
    KhtmlMarqueeSpeed => "-khtml-marquee-speed",
    KhtmlMarqueeStyle => "-khtml-marquee-style",

    // User interaction
    KhtmlUserDrag => "-khtml-user-drag",
    KhtmlUserModify => "-khtml-user-modify",
    KhtmlUserSelect => "-khtml-user-select",
    KhtmlMarginTopCollapse => "-khtml-margin-top-collapse",
    KhtmlMarginBottomCollapse => "-khtml-margin-bottom-collapse",

    // Shorthands
    Background => "background",
    BackgroundPosition => "background-position",
    Border => "border",
    BorderColor => "border-color",
    BorderStyle => "border-style",
    BorderWidth => "border-width",
    BorderTop => "border-top",
    BorderRight => "border-right",
    BorderBottom => "border-bottom",
    BorderLeft => "border-left",
    BorderSpacing => "border-spacing",
    Font => "font",
    ListStyle => "list-style",
    Margin => "margin",
    Padding => "padding",
    Outline => "outline",
    KhtmlMarquee => "-khtml-marquee",
    KhtmlMarginCollapse => "-khtml-margin-collapse",
}

use PropertyId as P;

const BACKGROUND: &[PropertyId] = &[
    P::BackgroundImage,
    P::BackgroundRepeat,
    P::BackgroundAttachment,
    P::BackgroundPositionX,
    P::BackgroundPositionY,
    P::BackgroundColor,
];
const BACKGROUND_POSITION: &[PropertyId] = &[P::BackgroundPositionX, P::BackgroundPositionY];
const BORDER_WIDTH: &[PropertyId] = &[
    P::BorderTopWidth,
    P::BorderRightWidth,
    P::BorderBottomWidth,
    P::BorderLeftWidth,
];
const BORDER_STYLE: &[PropertyId] = &[
    P::BorderTopStyle,
    P::BorderRightStyle,
    P::BorderBottomStyle,
    P::BorderLeftStyle,
];
const BORDER_COLOR: &[PropertyId] = &[
    P::BorderTopColor,
    P::BorderRightColor,
    P::BorderBottomColor,
    P::BorderLeftColor,
];
const BORDER: &[PropertyId] = &[
    P::BorderTopWidth,
    P::BorderRightWidth,
    P::BorderBottomWidth,
    P::BorderLeftWidth,
    P::BorderTopStyle,
    P::BorderRightStyle,
    P::BorderBottomStyle,
    P::BorderLeftStyle,
    P::BorderTopColor,
    P::BorderRightColor,
    P::BorderBottomColor,
    P::BorderLeftColor,
];
const BORDER_TOP: &[PropertyId] = &[P::BorderTopWidth, P::BorderTopStyle, P::BorderTopColor];
const BORDER_RIGHT: &[PropertyId] = &[P::BorderRightWidth, P::BorderRightStyle, P::BorderRightColor];
const BORDER_BOTTOM: &[PropertyId] = &[P::BorderBottomWidth, P::BorderBottomStyle, P::BorderBottomColor];
const BORDER_LEFT: &[PropertyId] = &[P::BorderLeftWidth, P::BorderLeftStyle, P::BorderLeftColor];
const BORDER_SPACING: &[PropertyId] = &[P::KhtmlBorderHorizontalSpacing, P::KhtmlBorderVerticalSpacing];
const FONT: &[PropertyId] = &[
    P::FontStyle,
    P::FontVariant,
    P::FontWeight,
    P::FontSize,
    P::LineHeight,
    P::FontFamily,
];
const LIST_STYLE: &[PropertyId] = &[P::ListStyleType, P::ListStylePosition, P::ListStyleImage];
const MARGIN: &[PropertyId] = &[P::MarginTop, P::MarginRight, P::MarginBottom, P::MarginLeft];
const PADDING: &[PropertyId] = &[P::PaddingTop, P::PaddingRight, P::PaddingBottom, P::PaddingLeft];
const OUTLINE: &[PropertyId] = &[P::OutlineWidth, P::OutlineStyle, P::OutlineColor];
const MARQUEE: &[PropertyId] = &[
    P::KhtmlMarqueeDirection,
    P::KhtmlMarqueeIncrement,
    P::KhtmlMarqueeRepetition,
    P::KhtmlMarqueeStyle,
    P::KhtmlMarqueeSpeed,
];
const MARGIN_COLLAPSE: &[PropertyId] = &[P::KhtmlMarginTopCollapse, P::KhtmlMarginBottomCollapse];

impl PropertyId {
    /// Longhands a shorthand expands to (empty for longhands)
    pub fn longhands(self) -> &'static [PropertyId] {
        match self {
            Self::Background => BACKGROUND,
            Self::BackgroundPosition => BACKGROUND_POSITION,
            Self::Border => BORDER,
            Self::BorderColor => BORDER_COLOR,
            Self::BorderStyle => BORDER_STYLE,
            Self::BorderWidth => BORDER_WIDTH,
            Self::BorderTop => BORDER_TOP,
            Self::BorderRight => BORDER_RIGHT,
            Self::BorderBottom => BORDER_BOTTOM,
            Self::BorderLeft => BORDER_LEFT,
            Self::BorderSpacing => BORDER_SPACING,
            Self::Font => FONT,
            Self::ListStyle => LIST_STYLE,
            Self::Margin => MARGIN,
            Self::Padding => PADDING,
            Self::Outline => OUTLINE,
            Self::KhtmlMarquee => MARQUEE,
            Self::KhtmlMarginCollapse => MARGIN_COLLAPSE,
            _ => &[],
        }
    }

    #[inline]
    pub fn is_shorthand(self) -> bool {
        !self.longhands().is_empty()
    }

    /// Applied in the first cascade pass, before properties that read the
    /// computed font or color
    pub fn is_high_priority(self) -> bool {
        matches!(
            self,
            Self::Background
                | Self::BackgroundImage
                | Self::Color
                | Self::Direction
                | Self::Display
                | Self::Font
                | Self::FontSize
                | Self::FontStyle
                | Self::FontFamily
                | Self::FontWeight
        )
    }

    /// Legacy scrollbar color property
    pub fn is_scrollbar_color(self) -> bool {
        matches!(
            self,
            Self::ScrollbarFaceColor
                | Self::ScrollbarShadowColor
                | Self::ScrollbarHighlightColor
                | Self::Scrollbar3dlightColor
                | Self::ScrollbarDarkshadowColor
                | Self::ScrollbarTrackColor
                | Self::ScrollbarArrowColor
        )
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for &id in PropertyId::ALL {
            assert_eq!(PropertyId::from_name(id.name()), Some(id));
        }
        assert_eq!(PropertyId::from_name("COLOR"), Some(PropertyId::Color));
        assert_eq!(PropertyId::from_name("-khtml-text-overflow"), Some(PropertyId::TextOverflow));
        assert_eq!(PropertyId::from_name("colour"), None);
    }

    #[test]
    fn test_shorthands() {
        assert_eq!(PropertyId::Margin.longhands().len(), 4);
        assert!(PropertyId::Font.is_shorthand());
        assert!(!PropertyId::FontSize.is_shorthand());
        assert!(PropertyId::Border.longhands().contains(&PropertyId::BorderLeftColor));
    }

    #[test]
    fn test_priority() {
        assert!(PropertyId::FontSize.is_high_priority());
        assert!(!PropertyId::LineHeight.is_high_priority());
        assert!(!PropertyId::BackgroundColor.is_high_priority());
    }
}
