//! CSS keyword identifiers
//!
//! Keywords that belong to one property are allocated contiguously, so the
//! parser validates a property with a range test and the applier turns a
//! keyword into the matching style enum by its offset in the group.

macro_rules! keywords {
    ($($variant:ident => $name:literal,)*) => {
        /// CSS keyword identifier
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum Keyword {
            $($variant,)*
        }

        impl Keyword {
            /// Look up a keyword, ignoring ASCII case
            pub fn from_name(name: &str) -> Option<Self> {
                let lower = name.to_ascii_lowercase();
                Some(match lower.as_str() {
                    $($name => Self::$variant,)*
                    _ => return None,
                })
            }

            /// Canonical lowercase spelling
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }
        }
    };
}

keywords! {
    Inherit => "inherit",
    Initial => "initial",

    // border-style
    None => "none",
    Hidden => "hidden",
    Inset => "inset",
    Groove => "groove",
    Ridge => "ridge",
    Outset => "outset",
    Dotted => "dotted",
    Dashed => "dashed",
    Solid => "solid",
    Double => "double",

    // system fonts
    Caption => "caption",
    Icon => "icon",
    Menu => "menu",
    MessageBox => "message-box",
    SmallCaption => "small-caption",
    StatusBar => "status-bar",

    Italic => "italic",
    Oblique => "oblique",
    SmallCaps => "small-caps",

    // font-weight
    Normal => "normal",
    Bold => "bold",
    Bolder => "bolder",
    Lighter => "lighter",

    // font-size
    XxSmall => "xx-small",
    XSmall => "x-small",
    Small => "small",
    Medium => "medium",
    Large => "large",
    XLarge => "x-large",
    XxLarge => "xx-large",
    KhtmlXxxLarge => "-khtml-xxx-large",
    Smaller => "smaller",
    Larger => "larger",

    // generic families
    Serif => "serif",
    SansSerif => "sans-serif",
    Cursive => "cursive",
    Fantasy => "fantasy",
    Monospace => "monospace",
    KhtmlBody => "-khtml-body",

    // colors
    Aqua => "aqua",
    Black => "black",
    Blue => "blue",
    Fuchsia => "fuchsia",
    Gray => "gray",
    Green => "green",
    Lime => "lime",
    Maroon => "maroon",
    Navy => "navy",
    Olive => "olive",
    Orange => "orange",
    Purple => "purple",
    Red => "red",
    Silver => "silver",
    Teal => "teal",
    White => "white",
    Yellow => "yellow",
    Transparent => "transparent",
    KhtmlLink => "-khtml-link",
    KhtmlActivelink => "-khtml-activelink",
    Activeborder => "activeborder",
    Activecaption => "activecaption",
    Appworkspace => "appworkspace",
    Buttonface => "buttonface",
    Buttonhighlight => "buttonhighlight",
    Buttonshadow => "buttonshadow",
    Buttontext => "buttontext",
    Captiontext => "captiontext",
    Graytext => "graytext",
    Highlight => "highlight",
    Highlighttext => "highlighttext",
    Inactiveborder => "inactiveborder",
    Inactivecaption => "inactivecaption",
    Inactivecaptiontext => "inactivecaptiontext",
    Infobackground => "infobackground",
    Infotext => "infotext",
    Menutext => "menutext",
    Scrollbar => "scrollbar",
    Threeddarkshadow => "threeddarkshadow",
    Threedface => "threedface",
    Threedhighlight => "threedhighlight",
    Threedlightshadow => "threedlightshadow",
    Threedshadow => "threedshadow",
    Window => "window",
    Windowframe => "windowframe",
    Windowtext => "windowtext",
    Grey => "grey",
    KhtmlText => "-khtml-text",

    // background-repeat
    Repeat => "repeat",
    RepeatX => "repeat-x",
    RepeatY => "repeat-y",
    NoRepeat => "no-repeat",

    // vertical-align
    Baseline => "baseline",
    Middle => "middle",
    Sub => "sub",
    Super => "super",
    TextTop => "text-top",
    TextBottom => "text-bottom",
    Top => "top",
    Bottom => "bottom",
    KhtmlBaselineMiddle => "-khtml-baseline-middle",

    // text-align
    KhtmlAuto => "-khtml-auto",
    Left => "left",
    Right => "right",
    Center => "center",
    Justify => "justify",
    KhtmlLeft => "-khtml-left",
    KhtmlRight => "-khtml-right",
    KhtmlCenter => "-khtml-center",

    // list-style-position
    Outside => "outside",
    Inside => "inside",

    // list-style-type
    Disc => "disc",
    Circle => "circle",
    Square => "square",
    Decimal => "decimal",
    DecimalLeadingZero => "decimal-leading-zero",
    LowerRoman => "lower-roman",
    UpperRoman => "upper-roman",
    LowerGreek => "lower-greek",
    LowerAlpha => "lower-alpha",
    LowerLatin => "lower-latin",
    UpperAlpha => "upper-alpha",
    UpperLatin => "upper-latin",
    Hebrew => "hebrew",
    Armenian => "armenian",
    Georgian => "georgian",
    CjkIdeographic => "cjk-ideographic",
    Hiragana => "hiragana",
    Katakana => "katakana",
    HiraganaIroha => "hiragana-iroha",
    KatakanaIroha => "katakana-iroha",

    // display
    Inline => "inline",
    Block => "block",
    ListItem => "list-item",
    RunIn => "run-in",
    Compact => "compact",
    InlineBlock => "inline-block",
    Table => "table",
    InlineTable => "inline-table",
    TableRowGroup => "table-row-group",
    TableHeaderGroup => "table-header-group",
    TableFooterGroup => "table-footer-group",
    TableRow => "table-row",
    TableColumnGroup => "table-column-group",
    TableColumn => "table-column",
    TableCell => "table-cell",
    TableCaption => "table-caption",
    KhtmlBox => "-khtml-box",
    KhtmlInlineBox => "-khtml-inline-box",

    // cursor
    Auto => "auto",
    Crosshair => "crosshair",
    Default => "default",
    Pointer => "pointer",
    Move => "move",
    EResize => "e-resize",
    NeResize => "ne-resize",
    NwResize => "nw-resize",
    NResize => "n-resize",
    SeResize => "se-resize",
    SwResize => "sw-resize",
    SResize => "s-resize",
    WResize => "w-resize",
    Text => "text",
    Wait => "wait",
    Help => "help",

    Ltr => "ltr",
    Rtl => "rtl",

    // text-transform
    Capitalize => "capitalize",
    Uppercase => "uppercase",
    Lowercase => "lowercase",

    Visible => "visible",
    Collapse => "collapse",
    Separate => "separate",
    Discard => "discard",
    Static => "static",
    Relative => "relative",
    Absolute => "absolute",
    Fixed => "fixed",
    Scroll => "scroll",
    Overlay => "overlay",
    Marquee => "marquee",
    Always => "always",
    Avoid => "avoid",
    Both => "both",
    Embed => "embed",
    BidiOverride => "bidi-override",
    Show => "show",
    Hide => "hide",
    Pre => "pre",
    Nowrap => "nowrap",
    Hand => "hand",
    Invert => "invert",
    Thin => "thin",
    Thick => "thick",
    Underline => "underline",
    Overline => "overline",
    LineThrough => "line-through",
    Blink => "blink",
    Clip => "clip",
    Ellipsis => "ellipsis",

    // box layout
    Stretch => "stretch",
    Start => "start",
    End => "end",
    Reverse => "reverse",
    Single => "single",
    Multiple => "multiple",
    Horizontal => "horizontal",
    Vertical => "vertical",
    InlineAxis => "inline-axis",
    BlockAxis => "block-axis",

    // marquee
    Forwards => "forwards",
    Backwards => "backwards",
    Ahead => "ahead",
    Up => "up",
    Down => "down",
    Infinite => "infinite",
    Slide => "slide",
    Alternate => "alternate",
    Unfurl => "unfurl",
    Slow => "slow",
    Fast => "fast",

    // user interaction
    Element => "element",
    ReadOnly => "read-only",
    ReadWrite => "read-write",
}

impl Keyword {
    /// Whether the keyword lies in `first..=last`
    #[inline]
    pub fn in_range(self, first: Keyword, last: Keyword) -> bool {
        first <= self && self <= last
    }

    /// Position of the keyword inside the group starting at `first`
    #[inline]
    pub fn offset_from(self, first: Keyword) -> usize {
        (self as usize).saturating_sub(first as usize)
    }

    /// Named, system or link color keyword (quirks-only `grey` excluded)
    pub fn is_color(self) -> bool {
        self.in_range(Keyword::Aqua, Keyword::Windowtext)
            || self == Keyword::Menu
            || self == Keyword::KhtmlText
    }

    /// `xx-small` through `-khtml-xxx-large`
    #[inline]
    pub fn is_absolute_font_size(self) -> bool {
        self.in_range(Keyword::XxSmall, Keyword::KhtmlXxxLarge)
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(Keyword::from_name("Bold"), Some(Keyword::Bold));
        assert_eq!(Keyword::from_name("-KHTML-BOX"), Some(Keyword::KhtmlBox));
        assert_eq!(Keyword::from_name("bogus"), None);
        assert_eq!(Keyword::LineThrough.name(), "line-through");
    }

    #[test]
    fn test_groups_are_contiguous() {
        assert!(Keyword::Hidden.in_range(Keyword::None, Keyword::Double));
        assert!(!Keyword::Caption.in_range(Keyword::None, Keyword::Double));
        assert_eq!(Keyword::Solid.offset_from(Keyword::None), 8);
        assert_eq!(Keyword::KatakanaIroha.offset_from(Keyword::Disc), 19);
        assert_eq!(Keyword::KhtmlInlineBox.offset_from(Keyword::Inline), 17);
        assert_eq!(Keyword::Help.offset_from(Keyword::Auto), 15);
    }

    #[test]
    fn test_color_keywords() {
        assert!(Keyword::Red.is_color());
        assert!(Keyword::Menu.is_color());
        assert!(Keyword::Windowtext.is_color());
        assert!(Keyword::KhtmlText.is_color());
        assert!(!Keyword::Grey.is_color());
        assert!(!Keyword::Bold.is_color());
    }
}
