//! Computed Styles
//!
//! The resolved style of one element. Inherited properties live in their own
//! group so a child starts from a copy of its parent's group, while
//! non-inherited properties start from their initial values.

use crate::keywords::Keyword;
use crate::matcher::{MatchFlags, PseudoState};
use crate::selectors::PseudoElement;
use crate::values::Color;

/// Enum lookup for a keyword of a contiguous keyword group
fn from_group<T: Copy>(kw: Keyword, first: Keyword, order: &[T]) -> Option<T> {
    if kw < first {
        return None;
    }
    order.get(kw.offset_from(first)).copied()
}

/// Resolved length
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Length {
    #[default]
    Auto,
    /// Pixels
    Fixed(i32),
    Percent(f32),
}

impl Length {
    #[inline]
    pub fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Pixel value against a percentage base
    pub fn resolve(self, base: i32) -> Option<i32> {
        match self {
            Self::Auto => None,
            Self::Fixed(px) => Some(px),
            Self::Percent(p) => Some((base as f32 * p / 100.0) as i32),
        }
    }
}

/// Four box sides
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Copy> Edges<T> {
    pub fn all(value: T) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// `display`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Display {
    #[default]
    Inline,
    Block,
    ListItem,
    RunIn,
    Compact,
    InlineBlock,
    Table,
    InlineTable,
    TableRowGroup,
    TableHeaderGroup,
    TableFooterGroup,
    TableRow,
    TableColumnGroup,
    TableColumn,
    TableCell,
    TableCaption,
    Box,
    InlineBox,
    None,
}

impl Display {
    const ORDER: [Display; 18] = [
        Self::Inline,
        Self::Block,
        Self::ListItem,
        Self::RunIn,
        Self::Compact,
        Self::InlineBlock,
        Self::Table,
        Self::InlineTable,
        Self::TableRowGroup,
        Self::TableHeaderGroup,
        Self::TableFooterGroup,
        Self::TableRow,
        Self::TableColumnGroup,
        Self::TableColumn,
        Self::TableCell,
        Self::TableCaption,
        Self::Box,
        Self::InlineBox,
    ];

    pub fn from_keyword(kw: Keyword) -> Option<Self> {
        if kw == Keyword::None {
            return Some(Self::None);
        }
        from_group(kw, Keyword::Inline, &Self::ORDER)
    }

    /// Inline-level display types
    pub fn is_inline_type(self) -> bool {
        matches!(self, Self::Inline | Self::InlineBlock | Self::InlineBox | Self::InlineTable)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Float {
    #[default]
    None,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Clear {
    #[default]
    None,
    Left,
    Right,
    Both,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnicodeBidi {
    #[default]
    Normal,
    Embed,
    Override,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Scroll,
    Auto,
    Marquee,
    Overlay,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
    Collapse,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WhiteSpace {
    #[default]
    Normal,
    Pre,
    Nowrap,
}

/// `border-style` / `outline-style`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BorderStyle {
    #[default]
    None,
    Hidden,
    Inset,
    Groove,
    Ridge,
    Outset,
    Dotted,
    Dashed,
    Solid,
    Double,
}

impl BorderStyle {
    const ORDER: [BorderStyle; 10] = [
        Self::None,
        Self::Hidden,
        Self::Inset,
        Self::Groove,
        Self::Ridge,
        Self::Outset,
        Self::Dotted,
        Self::Dashed,
        Self::Solid,
        Self::Double,
    ];

    pub fn from_keyword(kw: Keyword) -> Option<Self> {
        from_group(kw, Keyword::None, &Self::ORDER)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    #[default]
    Auto,
    Left,
    Right,
    Center,
    Justify,
    KhtmlLeft,
    KhtmlRight,
    KhtmlCenter,
}

impl TextAlign {
    const ORDER: [TextAlign; 8] = [
        Self::Auto,
        Self::Left,
        Self::Right,
        Self::Center,
        Self::Justify,
        Self::KhtmlLeft,
        Self::KhtmlRight,
        Self::KhtmlCenter,
    ];

    pub fn from_keyword(kw: Keyword) -> Option<Self> {
        from_group(kw, Keyword::KhtmlAuto, &Self::ORDER)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextTransform {
    Capitalize,
    Uppercase,
    Lowercase,
    #[default]
    None,
}

impl TextTransform {
    pub fn from_keyword(kw: Keyword) -> Option<Self> {
        if kw == Keyword::None {
            return Some(Self::None);
        }
        from_group(kw, Keyword::Capitalize, &[Self::Capitalize, Self::Uppercase, Self::Lowercase])
    }
}

/// `vertical-align`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum VerticalAlign {
    #[default]
    Baseline,
    Middle,
    Sub,
    Super,
    TextTop,
    TextBottom,
    Top,
    Bottom,
    BaselineMiddle,
    Length(Length),
}

impl VerticalAlign {
    const ORDER: [VerticalAlign; 9] = [
        Self::Baseline,
        Self::Middle,
        Self::Sub,
        Self::Super,
        Self::TextTop,
        Self::TextBottom,
        Self::Top,
        Self::Bottom,
        Self::BaselineMiddle,
    ];

    pub fn from_keyword(kw: Keyword) -> Option<Self> {
        from_group(kw, Keyword::Baseline, &Self::ORDER)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ListStyleType {
    #[default]
    Disc,
    Circle,
    Square,
    Decimal,
    DecimalLeadingZero,
    LowerRoman,
    UpperRoman,
    LowerGreek,
    LowerAlpha,
    LowerLatin,
    UpperAlpha,
    UpperLatin,
    Hebrew,
    Armenian,
    Georgian,
    CjkIdeographic,
    Hiragana,
    Katakana,
    HiraganaIroha,
    KatakanaIroha,
    None,
}

impl ListStyleType {
    const ORDER: [ListStyleType; 20] = [
        Self::Disc,
        Self::Circle,
        Self::Square,
        Self::Decimal,
        Self::DecimalLeadingZero,
        Self::LowerRoman,
        Self::UpperRoman,
        Self::LowerGreek,
        Self::LowerAlpha,
        Self::LowerLatin,
        Self::UpperAlpha,
        Self::UpperLatin,
        Self::Hebrew,
        Self::Armenian,
        Self::Georgian,
        Self::CjkIdeographic,
        Self::Hiragana,
        Self::Katakana,
        Self::HiraganaIroha,
        Self::KatakanaIroha,
    ];

    pub fn from_keyword(kw: Keyword) -> Option<Self> {
        if kw == Keyword::None {
            return Some(Self::None);
        }
        from_group(kw, Keyword::Disc, &Self::ORDER)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ListStylePosition {
    #[default]
    Outside,
    Inside,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cursor {
    #[default]
    Auto,
    Crosshair,
    Default,
    Pointer,
    Move,
    EResize,
    NeResize,
    NwResize,
    NResize,
    SeResize,
    SwResize,
    SResize,
    WResize,
    Text,
    Wait,
    Help,
}

impl Cursor {
    const ORDER: [Cursor; 16] = [
        Self::Auto,
        Self::Crosshair,
        Self::Default,
        Self::Pointer,
        Self::Move,
        Self::EResize,
        Self::NeResize,
        Self::NwResize,
        Self::NResize,
        Self::SeResize,
        Self::SwResize,
        Self::SResize,
        Self::WResize,
        Self::Text,
        Self::Wait,
        Self::Help,
    ];

    pub fn from_keyword(kw: Keyword) -> Option<Self> {
        from_group(kw, Keyword::Auto, &Self::ORDER)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CaptionSide {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EmptyCells {
    #[default]
    Show,
    Hide,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TableLayout {
    #[default]
    Auto,
    Fixed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PageBreak {
    #[default]
    Auto,
    Always,
    Avoid,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextOverflow {
    #[default]
    Clip,
    Ellipsis,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MarginCollapse {
    #[default]
    Collapse,
    Separate,
    Discard,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UserModify {
    #[default]
    ReadOnly,
    ReadWrite,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UserSelect {
    #[default]
    Auto,
    None,
    Text,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UserDrag {
    #[default]
    Auto,
    None,
    Element,
}

/// Underline, overline and line-through bits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextDecoration(u8);

impl TextDecoration {
    pub const NONE: TextDecoration = TextDecoration(0);
    pub const UNDERLINE: TextDecoration = TextDecoration(1);
    pub const OVERLINE: TextDecoration = TextDecoration(1 << 1);
    pub const LINE_THROUGH: TextDecoration = TextDecoration(1 << 2);

    #[inline]
    pub fn contains(self, other: TextDecoration) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn insert(&mut self, other: TextDecoration) {
        self.0 |= other.0;
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Generic family of the font
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GenericFamily {
    #[default]
    None,
    Serif,
    SansSerif,
    Cursive,
    Fantasy,
    Monospace,
}

/// Font selection state
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescription {
    /// Face names in preference order
    pub families: Vec<String>,
    pub generic: GenericFamily,
    /// Size asked for, before minimum sizes apply
    pub specified_size: f32,
    /// Size used for rendering and `em` units
    pub computed_size: f32,
    /// Size did not come from a keyword or a relative unit
    pub is_absolute_size: bool,
    pub italic: bool,
    pub small_caps: bool,
    /// 100..900
    pub weight: u16,
}

impl Default for FontDescription {
    fn default() -> Self {
        Self {
            families: Vec::new(),
            generic: GenericFamily::None,
            specified_size: 16.0,
            computed_size: 16.0,
            is_absolute_size: false,
            italic: false,
            small_caps: false,
            weight: 400,
        }
    }
}

/// `line-height`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum LineHeight {
    #[default]
    Normal,
    /// Multiple of the font size, in percent
    Percent(f32),
    Fixed(i32),
}

/// One side of a border
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderValue {
    pub width: i32,
    pub style: BorderStyle,
    /// `None` draws with the text color
    pub color: Option<Color>,
}

impl Default for BorderValue {
    fn default() -> Self {
        Self {
            width: 3,
            style: BorderStyle::None,
            color: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OutlineValue {
    pub border: BorderValue,
    pub offset: i32,
    /// `outline-style: auto`
    pub is_auto: bool,
}

/// `clip: rect(...)`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClipRect {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

/// One resolved `text-shadow`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShadowData {
    pub x: i32,
    pub y: i32,
    pub blur: i32,
    pub color: Option<Color>,
}

/// Generated content item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentItem {
    Text(String),
    Image(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BackgroundRepeat {
    #[default]
    Repeat,
    RepeatX,
    RepeatY,
    NoRepeat,
}

impl BackgroundRepeat {
    pub fn from_keyword(kw: Keyword) -> Option<Self> {
        from_group(
            kw,
            Keyword::Repeat,
            &[Self::Repeat, Self::RepeatX, Self::RepeatY, Self::NoRepeat],
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BackgroundAttachment {
    #[default]
    Scroll,
    Fixed,
}

/// One background layer. The `*_set` flags record which fields the cascade
/// wrote, so unset fields can repeat the pattern of earlier layers.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundLayer {
    pub image: Option<String>,
    pub repeat: BackgroundRepeat,
    pub attachment: BackgroundAttachment,
    pub x_position: Length,
    pub y_position: Length,
    pub image_set: bool,
    pub repeat_set: bool,
    pub attachment_set: bool,
    pub x_position_set: bool,
    pub y_position_set: bool,
}

impl Default for BackgroundLayer {
    fn default() -> Self {
        Self {
            image: None,
            repeat: BackgroundRepeat::Repeat,
            attachment: BackgroundAttachment::Scroll,
            x_position: Length::Percent(0.0),
            y_position: Length::Percent(0.0),
            image_set: false,
            repeat_set: false,
            attachment_set: false,
            x_position_set: false,
            y_position_set: false,
        }
    }
}

impl BackgroundLayer {
    fn is_empty(&self) -> bool {
        !(self.image_set
            || self.repeat_set
            || self.attachment_set
            || self.x_position_set
            || self.y_position_set)
    }
}

/// Background layer list; always holds at least one layer
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundLayers {
    layers: Vec<BackgroundLayer>,
}

impl Default for BackgroundLayers {
    fn default() -> Self {
        Self {
            layers: vec![BackgroundLayer::default()],
        }
    }
}

impl BackgroundLayers {
    #[inline]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BackgroundLayer> {
        self.layers.iter()
    }

    pub fn first(&self) -> &BackgroundLayer {
        &self.layers[0]
    }

    pub fn get(&self, index: usize) -> Option<&BackgroundLayer> {
        self.layers.get(index)
    }

    /// Layer `index`, appending default layers as needed
    pub fn layer_mut(&mut self, index: usize) -> &mut BackgroundLayer {
        if index >= self.layers.len() {
            self.layers.resize_with(index + 1, BackgroundLayer::default);
        }
        &mut self.layers[index]
    }

    /// Apply `clear` to every layer from `start` on
    pub(crate) fn clear_from(&mut self, start: usize, clear: impl Fn(&mut BackgroundLayer)) {
        for layer in self.layers.iter_mut().skip(start) {
            clear(layer);
        }
    }

    /// Back to a single default layer
    pub fn clear(&mut self) {
        self.layers.truncate(1);
        self.layers[0] = BackgroundLayer::default();
    }

    /// Drop trailing layers from the first one with nothing set, then repeat
    /// the set fields of the leading layers over the remaining unset ones
    pub fn adjust(&mut self) {
        if self.layers.len() < 2 {
            return;
        }
        if let Some(empty) = self.layers.iter().skip(1).position(BackgroundLayer::is_empty) {
            self.layers.truncate(empty + 1);
        }
        self.fill_unset(|l| l.image_set, |to, from| to.image = from.image.clone());
        self.fill_unset(|l| l.repeat_set, |to, from| to.repeat = from.repeat);
        self.fill_unset(|l| l.attachment_set, |to, from| to.attachment = from.attachment);
        self.fill_unset(|l| l.x_position_set, |to, from| to.x_position = from.x_position);
        self.fill_unset(|l| l.y_position_set, |to, from| to.y_position = from.y_position);
    }

    fn fill_unset(
        &mut self,
        is_set: impl Fn(&BackgroundLayer) -> bool,
        copy: impl Fn(&mut BackgroundLayer, &BackgroundLayer),
    ) {
        let Some(pattern) = self.layers.iter().position(|l| !is_set(l)) else {
            return;
        };
        if pattern == 0 {
            return;
        }
        for i in pattern..self.layers.len() {
            let source = self.layers[i - pattern].clone();
            copy(&mut self.layers[i], &source);
        }
    }
}

/// Legacy scrollbar palette colors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollbarColors {
    pub face: Option<Color>,
    pub shadow: Option<Color>,
    pub highlight: Option<Color>,
    pub light_3d: Option<Color>,
    pub dark_shadow: Option<Color>,
    pub track: Option<Color>,
    pub arrow: Option<Color>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MarqueeBehavior {
    None,
    #[default]
    Scroll,
    Slide,
    Alternate,
    Unfurl,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MarqueeDirection {
    #[default]
    Auto,
    Left,
    Right,
    Up,
    Down,
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeStyle {
    pub behavior: MarqueeBehavior,
    pub direction: MarqueeDirection,
    pub increment: Length,
    /// -1 repeats forever
    pub repetition: i32,
    /// Milliseconds between steps
    pub speed: i32,
}

impl Default for MarqueeStyle {
    fn default() -> Self {
        Self {
            behavior: MarqueeBehavior::Scroll,
            direction: MarqueeDirection::Auto,
            increment: Length::Fixed(6),
            repetition: -1,
            speed: 85,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BoxAlign {
    #[default]
    Stretch,
    Start,
    End,
    Center,
    Baseline,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BoxDirection {
    #[default]
    Normal,
    Reverse,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BoxLines {
    #[default]
    Single,
    Multiple,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BoxOrient {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BoxPack {
    #[default]
    Start,
    End,
    Center,
    Justify,
}

/// `-khtml-box-*` flexible box properties
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexibleBox {
    pub align: BoxAlign,
    pub flex: f32,
    pub flex_group: u32,
    pub lines: BoxLines,
    pub ordinal_group: u32,
    pub orient: BoxOrient,
    pub pack: BoxPack,
}

impl Default for FlexibleBox {
    fn default() -> Self {
        Self {
            align: BoxAlign::Stretch,
            flex: 0.0,
            flex_group: 1,
            lines: BoxLines::Single,
            ordinal_group: 1,
            orient: BoxOrient::Horizontal,
            pack: BoxPack::Start,
        }
    }
}

/// Properties a child copies from its parent
#[derive(Debug, Clone, PartialEq)]
pub struct InheritedStyle {
    pub color: Color,
    pub font: FontDescription,
    pub line_height: LineHeight,
    pub text_align: TextAlign,
    pub text_indent: Length,
    pub text_transform: TextTransform,
    pub letter_spacing: i32,
    pub word_spacing: i32,
    pub white_space: WhiteSpace,
    pub direction: Direction,
    pub visibility: Visibility,
    pub list_style_type: ListStyleType,
    pub list_style_position: ListStylePosition,
    pub list_style_image: Option<String>,
    pub cursor: Cursor,
    pub border_collapse: bool,
    pub horizontal_border_spacing: i32,
    pub vertical_border_spacing: i32,
    pub caption_side: CaptionSide,
    pub empty_cells: EmptyCells,
    pub orphans: u16,
    pub widows: u16,
    /// Empty for `none`
    pub text_shadow: Vec<ShadowData>,
    /// Decorations drawn on this element's text, from itself and ancestors
    pub text_decorations_in_effect: TextDecoration,
    pub box_direction: BoxDirection,
    pub user_modify: UserModify,
    pub user_select: UserSelect,
    pub scrollbar: ScrollbarColors,
}

impl Default for InheritedStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            font: FontDescription::default(),
            line_height: LineHeight::Normal,
            text_align: TextAlign::Auto,
            text_indent: Length::Fixed(0),
            text_transform: TextTransform::None,
            letter_spacing: 0,
            word_spacing: 0,
            white_space: WhiteSpace::Normal,
            direction: Direction::Ltr,
            visibility: Visibility::Visible,
            list_style_type: ListStyleType::Disc,
            list_style_position: ListStylePosition::Outside,
            list_style_image: None,
            cursor: Cursor::Auto,
            border_collapse: false,
            horizontal_border_spacing: 0,
            vertical_border_spacing: 0,
            caption_side: CaptionSide::Top,
            empty_cells: EmptyCells::Show,
            orphans: 2,
            widows: 2,
            text_shadow: Vec::new(),
            text_decorations_in_effect: TextDecoration::NONE,
            box_direction: BoxDirection::Normal,
            user_modify: UserModify::ReadOnly,
            user_select: UserSelect::Auto,
            scrollbar: ScrollbarColors::default(),
        }
    }
}

/// Properties that start at their initial value on every element
#[derive(Debug, Clone, PartialEq)]
pub struct NonInheritedStyle {
    pub display: Display,
    /// `display` before positioning and floating fixups
    pub original_display: Display,
    pub position: Position,
    pub float: Float,
    pub clear: Clear,
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
    /// `None` for `auto`
    pub z_index: Option<i32>,
    pub unicode_bidi: UnicodeBidi,
    pub overflow: Overflow,
    pub clip: Option<ClipRect>,
    pub opacity: f32,
    pub width: Length,
    pub height: Length,
    pub min_width: Length,
    pub min_height: Length,
    /// `None` for `none`
    pub max_width: Option<Length>,
    pub max_height: Option<Length>,
    pub margin: Edges<Length>,
    pub padding: Edges<Length>,
    pub border: Edges<BorderValue>,
    pub outline: OutlineValue,
    /// `None` paints no background color
    pub background_color: Option<Color>,
    pub background_layers: BackgroundLayers,
    pub vertical_align: VerticalAlign,
    pub text_decoration: TextDecoration,
    pub table_layout: TableLayout,
    pub page_break_before: PageBreak,
    pub page_break_after: PageBreak,
    pub page_break_inside: PageBreak,
    /// Generated content of `:before` / `:after` styles
    pub content: Option<Vec<ContentItem>>,
    pub text_overflow: TextOverflow,
    pub marquee: MarqueeStyle,
    pub flexible_box: FlexibleBox,
    pub user_drag: UserDrag,
    pub margin_top_collapse: MarginCollapse,
    pub margin_bottom_collapse: MarginCollapse,
}

impl Default for NonInheritedStyle {
    fn default() -> Self {
        Self {
            display: Display::Inline,
            original_display: Display::Inline,
            position: Position::Static,
            float: Float::None,
            clear: Clear::None,
            top: Length::Auto,
            right: Length::Auto,
            bottom: Length::Auto,
            left: Length::Auto,
            z_index: None,
            unicode_bidi: UnicodeBidi::Normal,
            overflow: Overflow::Visible,
            clip: None,
            opacity: 1.0,
            width: Length::Auto,
            height: Length::Auto,
            min_width: Length::Fixed(0),
            min_height: Length::Fixed(0),
            max_width: None,
            max_height: None,
            margin: Edges::all(Length::Fixed(0)),
            padding: Edges::all(Length::Fixed(0)),
            border: Edges::all(BorderValue::default()),
            outline: OutlineValue::default(),
            background_color: None,
            background_layers: BackgroundLayers::default(),
            vertical_align: VerticalAlign::Baseline,
            text_decoration: TextDecoration::NONE,
            table_layout: TableLayout::Auto,
            page_break_before: PageBreak::Auto,
            page_break_after: PageBreak::Auto,
            page_break_inside: PageBreak::Auto,
            content: None,
            text_overflow: TextOverflow::Clip,
            marquee: MarqueeStyle::default(),
            flexible_box: FlexibleBox::default(),
            user_drag: UserDrag::Auto,
            margin_top_collapse: MarginCollapse::Collapse,
            margin_bottom_collapse: MarginCollapse::Collapse,
        }
    }
}

/// Computed style for an element or pseudo-element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComputedStyle {
    pub inherited: InheritedStyle,
    pub non_inherited: NonInheritedStyle,
    /// Pseudo-element this style is for, `None` for the element itself
    pub style_type: Option<PseudoElement>,
    /// Link state of the element, recorded for links
    pub pseudo_state: PseudoState,
    /// What the style depends on besides the cascade
    pub match_flags: MatchFlags,
    pseudo_styles: u8,
}

impl ComputedStyle {
    /// Style with every property at its initial value
    pub fn initial() -> Self {
        Self::default()
    }

    /// Style inheriting from `parent`, non-inherited properties initial
    pub fn inherit_from(parent: &ComputedStyle) -> Self {
        Self {
            inherited: parent.inherited.clone(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn display(&self) -> Display {
        self.non_inherited.display
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.inherited.color
    }

    #[inline]
    pub fn font(&self) -> &FontDescription {
        &self.inherited.font
    }

    /// Some rule targets this pseudo-element of the element
    #[inline]
    pub fn has_pseudo_style(&self, pseudo: PseudoElement) -> bool {
        self.pseudo_styles & pseudo.bit() != 0
    }

    #[inline]
    pub fn set_has_pseudo_style(&mut self, pseudo: PseudoElement) {
        self.pseudo_styles |= pseudo.bit();
    }

    /// Resolved values, ignoring match bookkeeping
    pub fn same_values(&self, other: &ComputedStyle) -> bool {
        self.inherited == other.inherited && self.non_inherited == other.non_inherited
    }
}
