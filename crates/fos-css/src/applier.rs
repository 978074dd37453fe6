//! Property Application
//!
//! Writes cascaded declarations into a [`ComputedStyle`]. `inherit` and
//! `initial` go through a per-property descriptor that copies the field
//! from the parent style or from the initial style. Shorthands reach this
//! point only as `inherit`/`initial` and fan out to their longhands. Other
//! values are converted into the style's representation: lengths to
//! pixels, keywords to enums, colors to RGBA.

use std::sync::LazyLock;

use tracing::trace;

use crate::computed::{
    BackgroundAttachment, BackgroundLayer, BackgroundRepeat, BorderStyle, BoxAlign, BoxDirection,
    BoxLines, BoxOrient, BoxPack, CaptionSide, Clear, ClipRect, ComputedStyle, ContentItem, Cursor,
    Direction, Display, EmptyCells, Float, GenericFamily, Length, LineHeight, ListStylePosition,
    ListStyleType, MarginCollapse, MarqueeBehavior, MarqueeDirection, Overflow, PageBreak, Position,
    ShadowData, TableLayout, TextAlign, TextDecoration, TextOverflow, TextTransform, UnicodeBidi,
    UserDrag, UserModify, UserSelect, VerticalAlign, Visibility, WhiteSpace,
};
use crate::config::StyleConfig;
use crate::font_size::{self, FontMetrics, FontSizeSettings};
use crate::keywords::Keyword as K;
use crate::matcher::{PseudoState, SelectorMatcher};
use crate::properties::PropertyId as P;
use crate::selectors::PseudoElement;
use crate::values::{Color, Unit, Value};

static INITIAL: LazyLock<ComputedStyle> = LazyLock::new(ComputedStyle::initial);

/// `inherit` and `initial` behavior of a longhand
struct Descriptor {
    inherit: fn(&mut ComputedStyle, &ComputedStyle),
    initial: fn(&mut ComputedStyle),
}

/// Descriptor copying the given style fields
macro_rules! fields {
    ($($($path:ident).+),+) => {
        Descriptor {
            inherit: |style, parent| {
                $(style.$($path).+ = parent.$($path).+.clone();)+
            },
            initial: |style| {
                $(style.$($path).+ = INITIAL.$($path).+.clone();)+
            },
        }
    };
}

fn descriptor(property: P) -> Option<Descriptor> {
    Some(match property {
        P::Color => fields!(inherited.color),
        P::Direction => fields!(inherited.direction),
        P::Visibility => fields!(inherited.visibility),
        P::Cursor => fields!(inherited.cursor),

        P::Display => fields!(non_inherited.display),
        P::Position => fields!(non_inherited.position),
        P::Float => fields!(non_inherited.float),
        P::Clear => fields!(non_inherited.clear),
        P::Top => fields!(non_inherited.top),
        P::Right => fields!(non_inherited.right),
        P::Bottom => fields!(non_inherited.bottom),
        P::Left => fields!(non_inherited.left),
        P::ZIndex => fields!(non_inherited.z_index),
        P::UnicodeBidi => fields!(non_inherited.unicode_bidi),
        P::Overflow => fields!(non_inherited.overflow),
        P::Clip => fields!(non_inherited.clip),
        P::Opacity => fields!(non_inherited.opacity),

        P::Width => fields!(non_inherited.width),
        P::Height => fields!(non_inherited.height),
        P::MinWidth => fields!(non_inherited.min_width),
        P::MinHeight => fields!(non_inherited.min_height),
        P::MaxWidth => fields!(non_inherited.max_width),
        P::MaxHeight => fields!(non_inherited.max_height),
        P::MarginTop => fields!(non_inherited.margin.top),
        P::MarginRight => fields!(non_inherited.margin.right),
        P::MarginBottom => fields!(non_inherited.margin.bottom),
        P::MarginLeft => fields!(non_inherited.margin.left),
        P::PaddingTop => fields!(non_inherited.padding.top),
        P::PaddingRight => fields!(non_inherited.padding.right),
        P::PaddingBottom => fields!(non_inherited.padding.bottom),
        P::PaddingLeft => fields!(non_inherited.padding.left),

        P::BorderTopWidth => fields!(non_inherited.border.top.width),
        P::BorderRightWidth => fields!(non_inherited.border.right.width),
        P::BorderBottomWidth => fields!(non_inherited.border.bottom.width),
        P::BorderLeftWidth => fields!(non_inherited.border.left.width),
        P::BorderTopStyle => fields!(non_inherited.border.top.style),
        P::BorderRightStyle => fields!(non_inherited.border.right.style),
        P::BorderBottomStyle => fields!(non_inherited.border.bottom.style),
        P::BorderLeftStyle => fields!(non_inherited.border.left.style),
        P::BorderTopColor => fields!(non_inherited.border.top.color),
        P::BorderRightColor => fields!(non_inherited.border.right.color),
        P::BorderBottomColor => fields!(non_inherited.border.bottom.color),
        P::BorderLeftColor => fields!(non_inherited.border.left.color),
        P::OutlineWidth => fields!(non_inherited.outline.border.width),
        P::OutlineStyle => fields!(non_inherited.outline.border.style, non_inherited.outline.is_auto),
        P::OutlineColor => fields!(non_inherited.outline.border.color),
        P::OutlineOffset => fields!(non_inherited.outline.offset),
        P::BackgroundColor => fields!(non_inherited.background_color),

        P::FontStyle => fields!(inherited.font.italic),
        P::FontVariant => fields!(inherited.font.small_caps),
        P::FontWeight => fields!(inherited.font.weight),
        P::LineHeight => fields!(inherited.line_height),

        P::TextAlign => fields!(inherited.text_align),
        P::TextDecoration => fields!(non_inherited.text_decoration),
        P::TextIndent => fields!(inherited.text_indent),
        P::TextTransform => fields!(inherited.text_transform),
        P::TextShadow => fields!(inherited.text_shadow),
        P::TextOverflow => fields!(non_inherited.text_overflow),
        P::LetterSpacing => fields!(inherited.letter_spacing),
        P::WordSpacing => fields!(inherited.word_spacing),
        P::WhiteSpace => fields!(inherited.white_space),
        P::VerticalAlign => fields!(non_inherited.vertical_align),

        P::ListStyleType => fields!(inherited.list_style_type),
        P::ListStylePosition => fields!(inherited.list_style_position),
        P::ListStyleImage => fields!(inherited.list_style_image),
        P::Content => fields!(non_inherited.content),

        P::BorderCollapse => fields!(inherited.border_collapse),
        P::KhtmlBorderHorizontalSpacing => fields!(inherited.horizontal_border_spacing),
        P::KhtmlBorderVerticalSpacing => fields!(inherited.vertical_border_spacing),
        P::CaptionSide => fields!(inherited.caption_side),
        P::EmptyCells => fields!(inherited.empty_cells),
        P::TableLayout => fields!(non_inherited.table_layout),

        P::PageBreakBefore => fields!(non_inherited.page_break_before),
        P::PageBreakAfter => fields!(non_inherited.page_break_after),
        P::PageBreakInside => fields!(non_inherited.page_break_inside),
        P::Orphans => fields!(inherited.orphans),
        P::Widows => fields!(inherited.widows),

        P::ScrollbarFaceColor => fields!(inherited.scrollbar.face),
        P::ScrollbarShadowColor => fields!(inherited.scrollbar.shadow),
        P::ScrollbarHighlightColor => fields!(inherited.scrollbar.highlight),
        P::Scrollbar3dlightColor => fields!(inherited.scrollbar.light_3d),
        P::ScrollbarDarkshadowColor => fields!(inherited.scrollbar.dark_shadow),
        P::ScrollbarTrackColor => fields!(inherited.scrollbar.track),
        P::ScrollbarArrowColor => fields!(inherited.scrollbar.arrow),

        P::KhtmlBoxAlign => fields!(non_inherited.flexible_box.align),
        P::KhtmlBoxDirection => fields!(inherited.box_direction),
        P::KhtmlBoxFlex => fields!(non_inherited.flexible_box.flex),
        P::KhtmlBoxFlexGroup => fields!(non_inherited.flexible_box.flex_group),
        P::KhtmlBoxLines => fields!(non_inherited.flexible_box.lines),
        P::KhtmlBoxOrdinalGroup => fields!(non_inherited.flexible_box.ordinal_group),
        P::KhtmlBoxOrient => fields!(non_inherited.flexible_box.orient),
        P::KhtmlBoxPack => fields!(non_inherited.flexible_box.pack),

        P::KhtmlMarqueeDirection => fields!(non_inherited.marquee.direction),
        P::KhtmlMarqueeIncrement => fields!(non_inherited.marquee.increment),
        P::KhtmlMarqueeRepetition => fields!(non_inherited.marquee.repetition),
        P::KhtmlMarqueeSpeed => fields!(non_inherited.marquee.speed),
        P::KhtmlMarqueeStyle => fields!(non_inherited.marquee.behavior),

        P::KhtmlUserDrag => fields!(non_inherited.user_drag),
        P::KhtmlUserModify => fields!(inherited.user_modify),
        P::KhtmlUserSelect => fields!(inherited.user_select),
        P::KhtmlMarginTopCollapse => fields!(non_inherited.margin_top_collapse),
        P::KhtmlMarginBottomCollapse => fields!(non_inherited.margin_bottom_collapse),
        _ => return None,
    })
}

/// Field of a background layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LayerField {
    Image,
    Repeat,
    Attachment,
    PositionX,
    PositionY,
}

impl LayerField {
    fn of(property: P) -> Option<Self> {
        Some(match property {
            P::BackgroundImage => Self::Image,
            P::BackgroundRepeat => Self::Repeat,
            P::BackgroundAttachment => Self::Attachment,
            P::BackgroundPositionX => Self::PositionX,
            P::BackgroundPositionY => Self::PositionY,
            _ => return None,
        })
    }

    fn is_set(self, layer: &BackgroundLayer) -> bool {
        match self {
            Self::Image => layer.image_set,
            Self::Repeat => layer.repeat_set,
            Self::Attachment => layer.attachment_set,
            Self::PositionX => layer.x_position_set,
            Self::PositionY => layer.y_position_set,
        }
    }

    fn mark(self, layer: &mut BackgroundLayer, set: bool) {
        match self {
            Self::Image => layer.image_set = set,
            Self::Repeat => layer.repeat_set = set,
            Self::Attachment => layer.attachment_set = set,
            Self::PositionX => layer.x_position_set = set,
            Self::PositionY => layer.y_position_set = set,
        }
    }

    fn copy(self, to: &mut BackgroundLayer, from: &BackgroundLayer) {
        match self {
            Self::Image => to.image = from.image.clone(),
            Self::Repeat => to.repeat = from.repeat,
            Self::Attachment => to.attachment = from.attachment,
            Self::PositionX => to.x_position = from.x_position,
            Self::PositionY => to.y_position = from.y_position,
        }
        self.mark(to, true);
    }

    fn set_initial(self, layer: &mut BackgroundLayer) {
        self.copy(layer, &BackgroundLayer::default());
    }
}

/// Applies declarations to the style of one element
pub struct StyleApplier<'s, 'a> {
    config: &'s StyleConfig,
    fonts: FontSizeSettings,
    metrics: &'s dyn FontMetrics,
    matcher: &'s mut SelectorMatcher<'a>,
    parent: &'s ComputedStyle,
}

impl<'s, 'a> StyleApplier<'s, 'a> {
    /// `parent` is the style `inherit` reads from; for the root element it is
    /// a fresh initial style
    pub fn new(
        config: &'s StyleConfig,
        fonts: FontSizeSettings,
        metrics: &'s dyn FontMetrics,
        matcher: &'s mut SelectorMatcher<'a>,
        parent: &'s ComputedStyle,
    ) -> Self {
        Self {
            config,
            fonts,
            metrics,
            matcher,
            parent,
        }
    }

    #[inline]
    pub fn font_settings(&self) -> &FontSizeSettings {
        &self.fonts
    }

    /// Apply one declaration
    pub fn apply(&mut self, style: &mut ComputedStyle, property: P, value: &Value) {
        let property = match property {
            P::KhtmlMarginStart => start_side(style, P::MarginLeft, P::MarginRight),
            P::KhtmlPaddingStart => start_side(style, P::PaddingLeft, P::PaddingRight),
            other => other,
        };
        match value {
            Value::Inherit => self.apply_inherit(style, property),
            Value::Initial => self.apply_initial(style, property),
            _ => {
                if !self.apply_value(style, property, value) {
                    trace!(%property, ?value, "value not applicable");
                }
            }
        }
    }

    fn apply_inherit(&mut self, style: &mut ComputedStyle, property: P) {
        let parent = self.parent;
        match property {
            P::Background => {
                style.non_inherited.background_layers = parent.non_inherited.background_layers.clone();
                style.non_inherited.background_color = parent.non_inherited.background_color;
            }
            P::FontSize => {
                let font = &mut style.inherited.font;
                font.is_absolute_size = parent.inherited.font.is_absolute_size;
                self.fonts.set_font_size(font, parent.inherited.font.specified_size);
            }
            P::FontFamily => {
                style.inherited.font.families = parent.inherited.font.families.clone();
                style.inherited.font.generic = parent.inherited.font.generic;
            }
            _ => {
                if let Some(field) = LayerField::of(property) {
                    inherit_layers(style, parent, field);
                } else if property.is_shorthand() {
                    for &longhand in property.longhands() {
                        self.apply_inherit(style, longhand);
                    }
                } else if let Some(d) = descriptor(property) {
                    (d.inherit)(style, parent);
                }
            }
        }
    }

    fn apply_initial(&mut self, style: &mut ComputedStyle, property: P) {
        match property {
            P::Background => {
                style.non_inherited.background_layers.clear();
                style.non_inherited.background_color = None;
            }
            P::FontSize => {
                let mono = style.inherited.font.generic == GenericFamily::Monospace;
                let size = self.fonts.size_for_keyword(K::Medium, mono);
                let font = &mut style.inherited.font;
                font.is_absolute_size = false;
                self.fonts.set_font_size(font, size);
            }
            P::FontFamily => {
                style.inherited.font.families = vec![self.config.standard_font_family.clone()];
                style.inherited.font.generic = GenericFamily::None;
            }
            _ => {
                if let Some(field) = LayerField::of(property) {
                    let layers = &mut style.non_inherited.background_layers;
                    field.set_initial(layers.layer_mut(0));
                    layers.clear_from(1, |l| field.mark(l, false));
                } else if property.is_shorthand() {
                    for &longhand in property.longhands() {
                        self.apply_initial(style, longhand);
                    }
                } else if let Some(d) = descriptor(property) {
                    (d.initial)(style);
                }
            }
        }
    }

    /// Convert and store a specified value. Returns false when the value does
    /// not fit the property.
    fn apply_value(&mut self, style: &mut ComputedStyle, property: P, value: &Value) -> bool {
        let kw = value.keyword();
        let inh = &mut style.inherited;
        match property {
            P::Color => match self.color(value) {
                Some(c) => style.inherited.color = c,
                None => return false,
            },
            P::BackgroundColor => match self.color(value) {
                Some(c) => style.non_inherited.background_color = Some(c),
                None => return false,
            },
            P::BorderTopColor | P::BorderRightColor | P::BorderBottomColor | P::BorderLeftColor => {
                let Some(c) = self.color(value) else {
                    return false;
                };
                let border = &mut style.non_inherited.border;
                let side = match property {
                    P::BorderTopColor => &mut border.top,
                    P::BorderRightColor => &mut border.right,
                    P::BorderBottomColor => &mut border.bottom,
                    _ => &mut border.left,
                };
                side.color = Some(c);
            }
            P::OutlineColor => {
                // `invert` leaves the color unset
                style.non_inherited.outline.border.color = if kw == Some(K::Invert) {
                    None
                } else {
                    match self.color(value) {
                        Some(c) => Some(c),
                        None => return false,
                    }
                };
            }
            p if p.is_scrollbar_color() => {
                let Some(c) = self.color(value) else {
                    return false;
                };
                let bar = &mut style.inherited.scrollbar;
                let slot = match p {
                    P::ScrollbarFaceColor => &mut bar.face,
                    P::ScrollbarShadowColor => &mut bar.shadow,
                    P::ScrollbarHighlightColor => &mut bar.highlight,
                    P::Scrollbar3dlightColor => &mut bar.light_3d,
                    P::ScrollbarDarkshadowColor => &mut bar.dark_shadow,
                    P::ScrollbarTrackColor => &mut bar.track,
                    _ => &mut bar.arrow,
                };
                *slot = Some(c);
            }

            P::Display => match kw.and_then(Display::from_keyword) {
                Some(d) => style.non_inherited.display = d,
                None => return false,
            },
            P::Position => {
                style.non_inherited.position = match kw {
                    Some(K::Static) => Position::Static,
                    Some(K::Relative) => Position::Relative,
                    Some(K::Absolute) => Position::Absolute,
                    Some(K::Fixed) => Position::Fixed,
                    _ => return false,
                }
            }
            P::Float => {
                style.non_inherited.float = match kw {
                    Some(K::Left) => Float::Left,
                    Some(K::Right) => Float::Right,
                    Some(K::None | K::Center) => Float::None,
                    _ => return false,
                }
            }
            P::Clear => {
                style.non_inherited.clear = match kw {
                    Some(K::None) => Clear::None,
                    Some(K::Left) => Clear::Left,
                    Some(K::Right) => Clear::Right,
                    Some(K::Both) => Clear::Both,
                    _ => return false,
                }
            }
            P::Top | P::Right | P::Bottom | P::Left => {
                let Some(length) = self.length_or_percent(style, value, true) else {
                    return false;
                };
                let ni = &mut style.non_inherited;
                match property {
                    P::Top => ni.top = length,
                    P::Right => ni.right = length,
                    P::Bottom => ni.bottom = length,
                    _ => ni.left = length,
                }
            }
            P::ZIndex => {
                style.non_inherited.z_index = match value {
                    Value::Keyword(K::Auto) => None,
                    Value::Numeric(n, Unit::Number) => Some(*n as i32),
                    _ => return false,
                }
            }
            P::Direction => {
                inh.direction = match kw {
                    Some(K::Ltr) => Direction::Ltr,
                    Some(K::Rtl) => Direction::Rtl,
                    _ => return false,
                }
            }
            P::UnicodeBidi => {
                style.non_inherited.unicode_bidi = match kw {
                    Some(K::Normal) => UnicodeBidi::Normal,
                    Some(K::Embed) => UnicodeBidi::Embed,
                    Some(K::BidiOverride) => UnicodeBidi::Override,
                    _ => return false,
                }
            }
            P::Visibility => {
                inh.visibility = match kw {
                    Some(K::Visible) => Visibility::Visible,
                    Some(K::Hidden) => Visibility::Hidden,
                    Some(K::Collapse) => Visibility::Collapse,
                    _ => return false,
                }
            }
            P::Overflow => {
                style.non_inherited.overflow = match kw {
                    Some(K::Visible) => Overflow::Visible,
                    Some(K::Hidden) => Overflow::Hidden,
                    Some(K::Scroll) => Overflow::Scroll,
                    Some(K::Auto) => Overflow::Auto,
                    Some(K::Marquee) => Overflow::Marquee,
                    Some(K::Overlay) => Overflow::Overlay,
                    _ => return false,
                }
            }
            P::Clip => {
                let clip = match value {
                    Value::Rect(rect) => ClipRect {
                        top: self.clip_side(style, &rect.top),
                        right: self.clip_side(style, &rect.right),
                        bottom: self.clip_side(style, &rect.bottom),
                        left: self.clip_side(style, &rect.left),
                    },
                    Value::Keyword(K::Auto) => ClipRect::default(),
                    _ => return false,
                };
                style.non_inherited.clip = Some(clip);
            }
            P::Cursor => match kw.and_then(Cursor::from_keyword) {
                Some(c) => inh.cursor = c,
                None => return false,
            },
            P::Opacity => match value {
                Value::Numeric(n, Unit::Number) => style.non_inherited.opacity = n.clamp(0.0, 1.0),
                _ => return false,
            },

            P::Width | P::Height => {
                let Some(length) = self.length_or_percent(style, value, true) else {
                    return false;
                };
                if property == P::Width {
                    style.non_inherited.width = length;
                } else {
                    style.non_inherited.height = length;
                }
            }
            P::MinWidth | P::MinHeight => {
                let Some(length) = self.length_or_percent(style, value, false) else {
                    return false;
                };
                if property == P::MinWidth {
                    style.non_inherited.min_width = length;
                } else {
                    style.non_inherited.min_height = length;
                }
            }
            P::MaxWidth | P::MaxHeight => {
                let max = if kw == Some(K::None) {
                    None
                } else {
                    match self.length_or_percent(style, value, false) {
                        Some(length) => Some(length),
                        None => return false,
                    }
                };
                if property == P::MaxWidth {
                    style.non_inherited.max_width = max;
                } else {
                    style.non_inherited.max_height = max;
                }
            }
            P::MarginTop | P::MarginRight | P::MarginBottom | P::MarginLeft => {
                let Some(length) = self.length_or_percent(style, value, true) else {
                    return false;
                };
                let margin = &mut style.non_inherited.margin;
                match property {
                    P::MarginTop => margin.top = length,
                    P::MarginRight => margin.right = length,
                    P::MarginBottom => margin.bottom = length,
                    _ => margin.left = length,
                }
            }
            P::PaddingTop | P::PaddingRight | P::PaddingBottom | P::PaddingLeft => {
                let length = match self.length_or_percent(style, value, false) {
                    Some(Length::Fixed(px)) if px < 0 => return false,
                    Some(Length::Percent(p)) if p < 0.0 => return false,
                    Some(length) => length,
                    None => return false,
                };
                let padding = &mut style.non_inherited.padding;
                match property {
                    P::PaddingTop => padding.top = length,
                    P::PaddingRight => padding.right = length,
                    P::PaddingBottom => padding.bottom = length,
                    _ => padding.left = length,
                }
            }

            P::BorderTopWidth
            | P::BorderRightWidth
            | P::BorderBottomWidth
            | P::BorderLeftWidth
            | P::OutlineWidth => {
                let Some(width) = self.border_width(style, value) else {
                    return false;
                };
                let ni = &mut style.non_inherited;
                match property {
                    P::BorderTopWidth => ni.border.top.width = width,
                    P::BorderRightWidth => ni.border.right.width = width,
                    P::BorderBottomWidth => ni.border.bottom.width = width,
                    P::BorderLeftWidth => ni.border.left.width = width,
                    _ => ni.outline.border.width = width,
                }
            }
            P::BorderTopStyle | P::BorderRightStyle | P::BorderBottomStyle | P::BorderLeftStyle => {
                let Some(border_style) = kw.and_then(BorderStyle::from_keyword) else {
                    return false;
                };
                let border = &mut style.non_inherited.border;
                match property {
                    P::BorderTopStyle => border.top.style = border_style,
                    P::BorderRightStyle => border.right.style = border_style,
                    P::BorderBottomStyle => border.bottom.style = border_style,
                    _ => border.left.style = border_style,
                }
            }
            P::OutlineStyle => {
                let outline = &mut style.non_inherited.outline;
                if kw == Some(K::Auto) {
                    outline.border.style = BorderStyle::Dotted;
                    outline.is_auto = true;
                } else {
                    let Some(border_style) = kw.and_then(BorderStyle::from_keyword) else {
                        return false;
                    };
                    outline.border.style = border_style;
                    outline.is_auto = false;
                }
            }
            P::OutlineOffset => match self.length(style, value) {
                Some(px) => style.non_inherited.outline.offset = px,
                None => return false,
            },

            P::BackgroundImage
            | P::BackgroundRepeat
            | P::BackgroundAttachment
            | P::BackgroundPositionX
            | P::BackgroundPositionY => {
                let Some(field) = LayerField::of(property) else {
                    return false;
                };
                self.apply_layers(style, field, value);
            }

            P::FontSize => return self.apply_font_size(style, value),
            P::FontFamily => return self.apply_font_family(style, value),
            P::FontStyle => {
                inh.font.italic = match kw {
                    Some(K::Italic | K::Oblique) => true,
                    Some(K::Normal) => false,
                    _ => return false,
                }
            }
            P::FontVariant => {
                inh.font.small_caps = match kw {
                    Some(K::SmallCaps) => true,
                    Some(K::Normal) => false,
                    _ => return false,
                }
            }
            P::FontWeight => {
                inh.font.weight = match value {
                    Value::Keyword(K::Bold | K::Bolder) => 700,
                    Value::Keyword(K::Normal | K::Lighter) => 400,
                    Value::Numeric(w, Unit::Number) => *w as u16,
                    _ => return false,
                }
            }
            P::LineHeight => {
                let line_height = match value {
                    Value::Keyword(K::Normal) => LineHeight::Normal,
                    Value::Numeric(n, Unit::Number) => LineHeight::Percent((n * 100.0).trunc()),
                    Value::Numeric(p, Unit::Percent) => {
                        let size = style.inherited.font.computed_size as i32;
                        LineHeight::Fixed(size * p.trunc() as i32 / 100)
                    }
                    _ => match self.length(style, value) {
                        Some(px) => LineHeight::Fixed(px),
                        None => return false,
                    },
                };
                style.inherited.line_height = line_height;
            }

            P::TextAlign => match kw.and_then(TextAlign::from_keyword) {
                Some(align) => inh.text_align = align,
                // `text-align: "."` is accepted by the parser but not supported
                None => return false,
            },
            P::TextDecoration => {
                let mut decoration = TextDecoration::NONE;
                match value {
                    Value::Keyword(K::None) => {}
                    Value::List(items) => {
                        for item in items {
                            match item.keyword() {
                                Some(K::Underline) => decoration.insert(TextDecoration::UNDERLINE),
                                Some(K::Overline) => decoration.insert(TextDecoration::OVERLINE),
                                Some(K::LineThrough) => decoration.insert(TextDecoration::LINE_THROUGH),
                                _ => {}
                            }
                        }
                    }
                    _ => return false,
                }
                style.non_inherited.text_decoration = decoration;
            }
            P::TextIndent => match self.length_or_percent(style, value, false) {
                Some(length) => style.inherited.text_indent = length,
                None => return false,
            },
            P::TextTransform => match kw.and_then(TextTransform::from_keyword) {
                Some(t) => inh.text_transform = t,
                None => return false,
            },
            P::TextShadow => {
                let shadows = match value {
                    Value::Keyword(K::None) => Vec::new(),
                    Value::Shadows(list) => {
                        let mut shadows = Vec::with_capacity(list.len());
                        for shadow in list {
                            let (Some(x), Some(y)) = (self.length(style, &shadow.x), self.length(style, &shadow.y))
                            else {
                                return false;
                            };
                            let blur = match &shadow.blur {
                                Some(blur) => self.length(style, blur).unwrap_or(0),
                                None => 0,
                            };
                            let color = shadow.color.as_ref().and_then(|c| self.color(c));
                            shadows.push(ShadowData { x, y, blur, color });
                        }
                        shadows
                    }
                    _ => return false,
                };
                style.inherited.text_shadow = shadows;
            }
            P::TextOverflow => {
                style.non_inherited.text_overflow = match kw {
                    Some(K::Clip) => TextOverflow::Clip,
                    Some(K::Ellipsis) => TextOverflow::Ellipsis,
                    _ => return false,
                }
            }
            P::LetterSpacing | P::WordSpacing => {
                let spacing = if kw == Some(K::Normal) {
                    0
                } else {
                    match self.length(style, value) {
                        Some(px) => px,
                        None => return false,
                    }
                };
                if property == P::LetterSpacing {
                    style.inherited.letter_spacing = spacing;
                } else {
                    style.inherited.word_spacing = spacing;
                }
            }
            P::WhiteSpace => {
                inh.white_space = match kw {
                    Some(K::Normal) => WhiteSpace::Normal,
                    Some(K::Pre) => WhiteSpace::Pre,
                    Some(K::Nowrap) => WhiteSpace::Nowrap,
                    _ => return false,
                }
            }
            P::VerticalAlign => {
                let align = match kw {
                    Some(k) => match VerticalAlign::from_keyword(k) {
                        Some(align) => align,
                        None => return false,
                    },
                    None => match self.length_or_percent(style, value, false) {
                        Some(length) => VerticalAlign::Length(length),
                        None => return false,
                    },
                };
                style.non_inherited.vertical_align = align;
            }

            P::ListStyleType => match kw.and_then(ListStyleType::from_keyword) {
                Some(t) => inh.list_style_type = t,
                None => return false,
            },
            P::ListStylePosition => {
                inh.list_style_position = match kw {
                    Some(K::Outside) => ListStylePosition::Outside,
                    Some(K::Inside) => ListStylePosition::Inside,
                    _ => return false,
                }
            }
            P::ListStyleImage => {
                inh.list_style_image = match value {
                    Value::Uri(uri) => Some(uri.clone()),
                    Value::Keyword(K::None) => None,
                    _ => return false,
                }
            }
            P::Content => return self.apply_content(style, value),

            P::BorderCollapse => {
                inh.border_collapse = match kw {
                    Some(K::Collapse) => true,
                    Some(K::Separate) => false,
                    _ => return false,
                }
            }
            P::KhtmlBorderHorizontalSpacing | P::KhtmlBorderVerticalSpacing => {
                let Some(px) = self.length(style, value) else {
                    return false;
                };
                if property == P::KhtmlBorderHorizontalSpacing {
                    style.inherited.horizontal_border_spacing = px;
                } else {
                    style.inherited.vertical_border_spacing = px;
                }
            }
            P::CaptionSide => {
                inh.caption_side = match kw {
                    Some(K::Top) => CaptionSide::Top,
                    Some(K::Bottom) => CaptionSide::Bottom,
                    Some(K::Left) => CaptionSide::Left,
                    Some(K::Right) => CaptionSide::Right,
                    _ => return false,
                }
            }
            P::EmptyCells => {
                inh.empty_cells = match kw {
                    Some(K::Show) => EmptyCells::Show,
                    Some(K::Hide) => EmptyCells::Hide,
                    _ => return false,
                }
            }
            P::TableLayout => {
                style.non_inherited.table_layout = match kw {
                    Some(K::Auto) => TableLayout::Auto,
                    Some(K::Fixed) => TableLayout::Fixed,
                    _ => return false,
                }
            }
            P::PageBreakBefore | P::PageBreakAfter | P::PageBreakInside => {
                let brk = match kw {
                    Some(K::Auto) => PageBreak::Auto,
                    Some(K::Always) => PageBreak::Always,
                    Some(K::Avoid) => PageBreak::Avoid,
                    Some(K::Left) => PageBreak::Left,
                    Some(K::Right) => PageBreak::Right,
                    _ => return false,
                };
                let ni = &mut style.non_inherited;
                match property {
                    P::PageBreakBefore => ni.page_break_before = brk,
                    P::PageBreakAfter => ni.page_break_after = brk,
                    _ => ni.page_break_inside = brk,
                }
            }
            P::Orphans | P::Widows => {
                let Some(count) = value.numeric().filter(|(n, _)| *n >= 0.0).map(|(n, _)| n as u16) else {
                    return false;
                };
                if property == P::Orphans {
                    inh.orphans = count;
                } else {
                    inh.widows = count;
                }
            }

            P::KhtmlBoxAlign => {
                style.non_inherited.flexible_box.align = match kw {
                    Some(K::Stretch) => BoxAlign::Stretch,
                    Some(K::Start) => BoxAlign::Start,
                    Some(K::End) => BoxAlign::End,
                    Some(K::Center) => BoxAlign::Center,
                    Some(K::Baseline) => BoxAlign::Baseline,
                    _ => return false,
                }
            }
            P::KhtmlBoxDirection => {
                inh.box_direction = match kw {
                    Some(K::Normal) => BoxDirection::Normal,
                    Some(K::Reverse) => BoxDirection::Reverse,
                    _ => return false,
                }
            }
            P::KhtmlBoxLines => {
                style.non_inherited.flexible_box.lines = match kw {
                    Some(K::Single) => BoxLines::Single,
                    Some(K::Multiple) => BoxLines::Multiple,
                    _ => return false,
                }
            }
            P::KhtmlBoxOrient => {
                style.non_inherited.flexible_box.orient = match kw {
                    Some(K::Horizontal | K::InlineAxis) => BoxOrient::Horizontal,
                    Some(K::Vertical | K::BlockAxis) => BoxOrient::Vertical,
                    _ => return false,
                }
            }
            P::KhtmlBoxPack => {
                style.non_inherited.flexible_box.pack = match kw {
                    Some(K::Start) => BoxPack::Start,
                    Some(K::End) => BoxPack::End,
                    Some(K::Center) => BoxPack::Center,
                    Some(K::Justify) => BoxPack::Justify,
                    _ => return false,
                }
            }
            P::KhtmlBoxFlex => match value {
                Value::Numeric(n, Unit::Number) => style.non_inherited.flexible_box.flex = *n,
                _ => return false,
            },
            P::KhtmlBoxFlexGroup | P::KhtmlBoxOrdinalGroup => {
                let Some((n, _)) = value.numeric() else {
                    return false;
                };
                let group = n.max(0.0) as u32;
                if property == P::KhtmlBoxFlexGroup {
                    style.non_inherited.flexible_box.flex_group = group;
                } else {
                    style.non_inherited.flexible_box.ordinal_group = group;
                }
            }

            P::KhtmlMarqueeDirection => {
                style.non_inherited.marquee.direction = match kw {
                    Some(K::Forwards) => MarqueeDirection::Forward,
                    Some(K::Backwards) => MarqueeDirection::Backward,
                    Some(K::Auto) => MarqueeDirection::Auto,
                    Some(K::Ahead | K::Up) => MarqueeDirection::Up,
                    Some(K::Reverse | K::Down) => MarqueeDirection::Down,
                    Some(K::Left) => MarqueeDirection::Left,
                    Some(K::Right) => MarqueeDirection::Right,
                    _ => return false,
                }
            }
            P::KhtmlMarqueeIncrement => {
                let increment = match kw {
                    Some(K::Small) => Length::Fixed(1),
                    Some(K::Normal | K::Medium) => Length::Fixed(6),
                    Some(K::Large) => Length::Fixed(36),
                    Some(_) => return false,
                    None => match self.length_or_percent(style, value, false) {
                        Some(length) => length,
                        None => return false,
                    },
                };
                style.non_inherited.marquee.increment = increment;
            }
            P::KhtmlMarqueeRepetition => {
                style.non_inherited.marquee.repetition = match value {
                    Value::Keyword(K::Infinite) => -1,
                    Value::Numeric(n, Unit::Number) => *n as i32,
                    _ => return false,
                }
            }
            P::KhtmlMarqueeSpeed => {
                style.non_inherited.marquee.speed = match value {
                    Value::Keyword(K::Slow) => 500,
                    Value::Keyword(K::Normal) => 85,
                    Value::Keyword(K::Fast) => 10,
                    Value::Numeric(s, Unit::S) => (s * 1000.0) as i32,
                    Value::Numeric(ms, Unit::Ms | Unit::Number) => *ms as i32,
                    _ => return false,
                }
            }
            P::KhtmlMarqueeStyle => {
                style.non_inherited.marquee.behavior = match kw {
                    Some(K::None) => MarqueeBehavior::None,
                    Some(K::Scroll) => MarqueeBehavior::Scroll,
                    Some(K::Slide) => MarqueeBehavior::Slide,
                    Some(K::Alternate) => MarqueeBehavior::Alternate,
                    Some(K::Unfurl) => MarqueeBehavior::Unfurl,
                    _ => return false,
                }
            }

            P::KhtmlUserDrag => {
                style.non_inherited.user_drag = match kw {
                    Some(K::Auto) => UserDrag::Auto,
                    Some(K::None) => UserDrag::None,
                    Some(K::Element) => UserDrag::Element,
                    _ => return false,
                }
            }
            P::KhtmlUserModify => {
                inh.user_modify = match kw {
                    Some(K::ReadOnly) => UserModify::ReadOnly,
                    Some(K::ReadWrite) => UserModify::ReadWrite,
                    _ => return false,
                }
            }
            P::KhtmlUserSelect => {
                inh.user_select = match kw {
                    Some(K::Auto) => UserSelect::Auto,
                    Some(K::None) => UserSelect::None,
                    Some(K::Text) => UserSelect::Text,
                    _ => return false,
                }
            }
            P::KhtmlMarginTopCollapse | P::KhtmlMarginBottomCollapse => {
                let collapse = match kw {
                    Some(K::Collapse) => MarginCollapse::Collapse,
                    Some(K::Separate) => MarginCollapse::Separate,
                    Some(K::Discard) => MarginCollapse::Discard,
                    _ => return false,
                };
                if property == P::KhtmlMarginTopCollapse {
                    style.non_inherited.margin_top_collapse = collapse;
                } else {
                    style.non_inherited.margin_bottom_collapse = collapse;
                }
            }

            // Shorthands arrive expanded
            _ => return false,
        }
        true
    }

    fn apply_font_size(&mut self, style: &mut ComputedStyle, value: &Value) -> bool {
        let parent_font = &self.parent.inherited.font;
        let old_size = parent_font.specified_size;
        let parent_absolute = parent_font.is_absolute_size;

        let (size, absolute) = match value {
            Value::Keyword(k @ (K::Larger | K::Smaller)) => {
                let size = if *k == K::Larger {
                    font_size::larger(old_size)
                } else {
                    font_size::smaller(old_size)
                };
                (size, parent_absolute)
            }
            Value::Keyword(k) if k.is_absolute_font_size() => {
                let mono = style.inherited.font.generic == GenericFamily::Monospace;
                (self.fonts.size_for_keyword(*k, mono), false)
            }
            Value::Numeric(pct, Unit::Percent) => (pct * old_size / 100.0, parent_absolute),
            Value::Numeric(v, unit) => {
                let Some(px) = font_size::length_to_px(*v, *unit, parent_font, self.metrics) else {
                    return false;
                };
                (px, parent_absolute || !unit.is_font_relative())
            }
            _ => return false,
        };
        if size <= 0.0 {
            return false;
        }
        let font = &mut style.inherited.font;
        font.is_absolute_size = absolute;
        self.fonts.set_font_size(font, size);
        true
    }

    fn apply_font_family(&mut self, style: &mut ComputedStyle, value: &Value) -> bool {
        let Value::List(items) = value else {
            return false;
        };
        let mut families = Vec::with_capacity(items.len());
        let mut generic = style.inherited.font.generic;
        for item in items {
            match item {
                Value::String(face) => families.push(face.clone()),
                Value::Keyword(k) => {
                    let (face, family) = match k {
                        K::KhtmlBody => (&self.config.standard_font_family, None),
                        K::Serif => (&self.config.serif_font_family, Some(GenericFamily::Serif)),
                        K::SansSerif => (&self.config.sans_serif_font_family, Some(GenericFamily::SansSerif)),
                        K::Cursive => (&self.config.cursive_font_family, Some(GenericFamily::Cursive)),
                        K::Fantasy => (&self.config.fantasy_font_family, Some(GenericFamily::Fantasy)),
                        K::Monospace => (&self.config.fixed_font_family, Some(GenericFamily::Monospace)),
                        _ => continue,
                    };
                    if !face.is_empty() {
                        families.push(face.clone());
                    }
                    if let Some(family) = family {
                        generic = family;
                    }
                }
                _ => {}
            }
        }
        if families.is_empty() {
            return false;
        }
        style.inherited.font.families = families;
        style.inherited.font.generic = generic;
        true
    }

    /// Generated content, only meaningful on `:before` and `:after` styles
    fn apply_content(&mut self, style: &mut ComputedStyle, value: &Value) -> bool {
        if !matches!(style.style_type, Some(PseudoElement::Before | PseudoElement::After)) {
            return false;
        }
        let Value::List(items) = value else {
            return false;
        };
        let ctx = self.matcher.context();
        let element = ctx.document.tree.element(self.matcher.element());
        let mut content = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::String(text) => content.push(ContentItem::Text(text.clone())),
                Value::Uri(uri) => content.push(ContentItem::Image(uri.clone())),
                Value::Attr(name) => {
                    if let Some(text) = element.and_then(|e| e.get_attr(name)) {
                        content.push(ContentItem::Text(text.to_string()));
                    }
                }
                _ => {}
            }
        }
        style.non_inherited.content = Some(content);
        true
    }

    fn apply_layers(&mut self, style: &mut ComputedStyle, field: LayerField, value: &Value) {
        let single = std::slice::from_ref(value);
        let items = match value {
            Value::List(items) => items.as_slice(),
            _ => single,
        };
        let mut mapped = Vec::with_capacity(items.len());
        for item in items {
            mapped.push(self.layer_value(style, field, item));
        }
        let layers = &mut style.non_inherited.background_layers;
        for (i, item) in mapped.into_iter().enumerate() {
            let layer = layers.layer_mut(i);
            match item {
                LayerValue::Initial => field.set_initial(layer),
                LayerValue::Image(image) => {
                    layer.image = image;
                    field.mark(layer, true);
                }
                LayerValue::Repeat(repeat) => {
                    layer.repeat = repeat;
                    field.mark(layer, true);
                }
                LayerValue::Attachment(attachment) => {
                    layer.attachment = attachment;
                    field.mark(layer, true);
                }
                LayerValue::Position(position) => {
                    if field == LayerField::PositionX {
                        layer.x_position = position;
                    } else {
                        layer.y_position = position;
                    }
                    field.mark(layer, true);
                }
                LayerValue::Invalid => {}
            }
        }
        layers.clear_from(items.len(), |l| field.mark(l, false));
    }

    fn layer_value(&self, style: &ComputedStyle, field: LayerField, value: &Value) -> LayerValue {
        if matches!(value, Value::Initial) {
            return LayerValue::Initial;
        }
        let kw = value.keyword();
        match field {
            LayerField::Image => match value {
                Value::Uri(uri) => LayerValue::Image(Some(uri.clone())),
                Value::Keyword(K::None) => LayerValue::Image(None),
                _ => LayerValue::Invalid,
            },
            LayerField::Repeat => match kw.and_then(BackgroundRepeat::from_keyword) {
                Some(repeat) => LayerValue::Repeat(repeat),
                None => LayerValue::Invalid,
            },
            LayerField::Attachment => match kw {
                Some(K::Scroll) => LayerValue::Attachment(BackgroundAttachment::Scroll),
                Some(K::Fixed) => LayerValue::Attachment(BackgroundAttachment::Fixed),
                _ => LayerValue::Invalid,
            },
            LayerField::PositionX | LayerField::PositionY => {
                match self.length_or_percent(style, value, false) {
                    Some(length) => LayerValue::Position(length),
                    None => LayerValue::Invalid,
                }
            }
        }
    }

    /// Resolve a color value, including the document link and text colors
    fn color(&mut self, value: &Value) -> Option<Color> {
        match value {
            Value::Color(c) => Some(*c),
            Value::Keyword(K::KhtmlText) => Some(self.config.text_color),
            Value::Keyword(K::KhtmlActivelink) => Some(self.config.active_link_color),
            Value::Keyword(K::KhtmlLink) => {
                let (link, visited) = (self.config.link_color, self.config.visited_link_color);
                if link == visited || self.matcher.link_state(true) == PseudoState::Link {
                    Some(link)
                } else {
                    Some(visited)
                }
            }
            Value::Keyword(k) => Color::from_keyword(*k),
            _ => None,
        }
    }

    /// Whole pixels of a length value, `em`/`ex` against the style's font
    fn length(&self, style: &ComputedStyle, value: &Value) -> Option<i32> {
        let (v, unit) = value.numeric()?;
        if unit == Unit::Percent {
            return None;
        }
        font_size::compute_length(v, unit, &style.inherited.font, self.metrics)
    }

    fn length_or_percent(&self, style: &ComputedStyle, value: &Value, allow_auto: bool) -> Option<Length> {
        match value {
            Value::Keyword(K::Auto) if allow_auto => Some(Length::Auto),
            Value::Numeric(p, Unit::Percent) => Some(Length::Percent(*p)),
            _ => self.length(style, value).map(Length::Fixed),
        }
    }

    fn clip_side(&self, style: &ComputedStyle, value: &Value) -> Length {
        self.length_or_percent(style, value, true).unwrap_or(Length::Auto)
    }

    /// `thin`, `medium`, `thick` or a non-negative length
    fn border_width(&self, style: &ComputedStyle, value: &Value) -> Option<i32> {
        match value.keyword() {
            Some(K::Thin) => Some(1),
            Some(K::Medium) => Some(3),
            Some(K::Thick) => Some(5),
            Some(_) => None,
            None => self.length(style, value).filter(|w| *w >= 0),
        }
    }
}

/// Converted value for one background layer
enum LayerValue {
    Initial,
    Image(Option<String>),
    Repeat(BackgroundRepeat),
    Attachment(BackgroundAttachment),
    Position(Length),
    Invalid,
}

fn inherit_layers(style: &mut ComputedStyle, parent: &ComputedStyle, field: LayerField) {
    let layers = &mut style.non_inherited.background_layers;
    let mut count = 0;
    for parent_layer in parent.non_inherited.background_layers.iter() {
        if !field.is_set(parent_layer) {
            break;
        }
        field.copy(layers.layer_mut(count), parent_layer);
        count += 1;
    }
    layers.clear_from(count, |l| field.mark(l, false));
}

/// Physical side of a `-khtml-*-start` property
fn start_side(style: &ComputedStyle, left: P, right: P) -> P {
    if style.inherited.direction == Direction::Ltr { left } else { right }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::computed::Edges;
    use crate::font_size::DefaultFontMetrics;
    use crate::matcher::{EncodedUrl, MatchContext, NoHistory, VisitedLinks};
    use crate::CssParser;
    use fos_dom::{Document, NodeId};

    struct Fixture {
        doc: Document,
        link: NodeId,
        config: StyleConfig,
    }

    impl Fixture {
        fn new() -> Self {
            let mut doc = Document::new("http://example.com/index.html");
            let tree = doc.tree_mut();
            let html = tree.create_element("html");
            tree.append_child(NodeId::ROOT, html);
            let link = tree.create_element("a");
            tree.set_attribute(link, "href", "seen.html");
            tree.set_attribute(link, "title", "Greeting");
            tree.append_child(html, link);
            Self {
                doc,
                link,
                config: StyleConfig::default(),
            }
        }

        /// Apply `css` declarations to a style inheriting from `parent`
        fn apply_with(
            &self,
            css: &str,
            parent: &ComputedStyle,
            history: &dyn crate::matcher::HistoryOracle,
            style_type: Option<PseudoElement>,
        ) -> ComputedStyle {
            let encoded = EncodedUrl::new(self.doc.url());
            let ctx = MatchContext::new(&self.doc, history, &encoded);
            let mut matcher = SelectorMatcher::new(ctx, self.link);
            let metrics = DefaultFontMetrics;
            let fonts = self.config.font_size_settings(false);
            let mut applier = StyleApplier::new(&self.config, fonts, &metrics, &mut matcher, parent);
            let mut style = ComputedStyle::inherit_from(parent);
            style.style_type = style_type;
            let block = CssParser::new().parse_declaration_block(css);
            for high in [true, false] {
                for decl in block.iter().filter(|d| d.property.is_high_priority() == high) {
                    applier.apply(&mut style, decl.property, &decl.value);
                }
            }
            style
        }

        fn apply(&self, css: &str, parent: &ComputedStyle) -> ComputedStyle {
            self.apply_with(css, parent, &NoHistory, None)
        }
    }

    #[test]
    fn test_inherit_and_initial() {
        let f = Fixture::new();
        let mut parent = ComputedStyle::initial();
        parent.non_inherited.width = Length::Fixed(50);
        parent.inherited.color = Color::rgb(0, 128, 0);

        let style = f.apply("width: inherit; color: initial", &parent);
        assert_eq!(style.non_inherited.width, Length::Fixed(50));
        assert_eq!(style.inherited.color, Color::BLACK);
    }

    #[test]
    fn test_shorthand_inherit_fans_out() {
        let f = Fixture::new();
        let mut parent = ComputedStyle::initial();
        parent.non_inherited.margin = Edges::all(Length::Fixed(7));
        let style = f.apply("margin: inherit", &parent);
        assert_eq!(style.non_inherited.margin, Edges::all(Length::Fixed(7)));

        let style = f.apply("margin: 3px; margin: initial", &parent);
        assert_eq!(style.non_inherited.margin, Edges::all(Length::Fixed(0)));
    }

    #[test]
    fn test_lengths_use_own_font() {
        let f = Fixture::new();
        let parent = ComputedStyle::initial();
        let style = f.apply("font-size: 20px; width: 2em; height: 50%; padding-left: -3px", &parent);
        assert_eq!(style.inherited.font.computed_size, 20.0);
        assert_eq!(style.non_inherited.width, Length::Fixed(40));
        assert_eq!(style.non_inherited.height, Length::Percent(50.0));
        assert_eq!(style.non_inherited.padding.left, Length::Fixed(0));
    }

    #[test]
    fn test_font_size_keywords_and_relative() {
        let f = Fixture::new();
        let parent = f.apply("font-size: 20px", &ComputedStyle::initial());
        assert!(parent.inherited.font.is_absolute_size);

        let larger = f.apply("font-size: larger", &parent);
        assert!((larger.inherited.font.specified_size - 24.0).abs() < 1e-3);
        assert!(larger.inherited.font.is_absolute_size);

        let half = f.apply("font-size: 50%", &parent);
        assert_eq!(half.inherited.font.specified_size, 10.0);

        let em = f.apply("font-size: 1.5em", &parent);
        assert_eq!(em.inherited.font.specified_size, 30.0);

        let keyword = f.apply("font-size: x-large", &parent);
        assert_eq!(keyword.inherited.font.specified_size, 24.0);
        assert!(!keyword.inherited.font.is_absolute_size);
    }

    #[test]
    fn test_font_family_generic() {
        let f = Fixture::new();
        let style = f.apply("font-family: Foo Bar, monospace", &ComputedStyle::initial());
        assert_eq!(style.inherited.font.families, ["Foo Bar", "Courier New"]);
        assert_eq!(style.inherited.font.generic, GenericFamily::Monospace);
    }

    #[test]
    fn test_line_height() {
        let f = Fixture::new();
        let root = ComputedStyle::initial();
        assert_eq!(f.apply("line-height: 1.5", &root).inherited.line_height, LineHeight::Percent(150.0));
        assert_eq!(f.apply("line-height: 150%", &root).inherited.line_height, LineHeight::Fixed(24));
        assert_eq!(f.apply("line-height: 20px", &root).inherited.line_height, LineHeight::Fixed(20));
    }

    #[test]
    fn test_link_colors() {
        let f = Fixture::new();
        let root = ComputedStyle::initial();
        let unvisited = f.apply("color: -khtml-link", &root);
        assert_eq!(unvisited.inherited.color, f.config.link_color);

        let mut history = VisitedLinks::new();
        history.add("http://example.com/seen.html");
        let visited = f.apply_with("color: -khtml-link", &root, &history, None);
        assert_eq!(visited.inherited.color, f.config.visited_link_color);

        let active = f.apply("color: -khtml-activelink", &root);
        assert_eq!(active.inherited.color, f.config.active_link_color);
    }

    #[test]
    fn test_background_layers() {
        let f = Fixture::new();
        let root = ComputedStyle::initial();
        let style = f.apply("background: url(a.png) no-repeat, url(b.png) red", &root);
        let layers = &style.non_inherited.background_layers;
        assert_eq!(layers.len(), 2);
        assert_eq!(layers.first().image.as_deref(), Some("a.png"));
        assert_eq!(layers.first().repeat, BackgroundRepeat::NoRepeat);
        assert_eq!(layers.get(1).and_then(|l| l.image.as_deref()), Some("b.png"));
        assert_eq!(style.non_inherited.background_color, Some(Color::rgb(255, 0, 0)));

        let single = f.apply("background-image: url(c.png)", &style);
        assert_eq!(single.non_inherited.background_layers.len(), 1);

        let inherited = f.apply("background-image: inherit", &style);
        let layers = &inherited.non_inherited.background_layers;
        assert_eq!(layers.len(), 2);
        assert!(layers.iter().all(|l| l.image_set && !l.repeat_set));
    }

    #[test]
    fn test_content_only_on_generated_styles() {
        let f = Fixture::new();
        let root = ComputedStyle::initial();
        let css = "content: \"Hi \" attr(title) attr(missing)";
        assert_eq!(f.apply(css, &root).non_inherited.content, None);

        let before = f.apply_with(css, &root, &NoHistory, Some(PseudoElement::Before));
        assert_eq!(
            before.non_inherited.content,
            Some(vec![ContentItem::Text("Hi ".into()), ContentItem::Text("Greeting".into())])
        );
    }

    #[test]
    fn test_keyword_properties() {
        let f = Fixture::new();
        let style = f.apply(
            "display: table-cell; float: center; cursor: pointer; text-align: -khtml-center;
             border-top-width: thick; border-left-style: dashed; text-decoration: underline overline;
             z-index: 4; outline-color: invert; -khtml-margin-start: 9px",
            &ComputedStyle::initial(),
        );
        let ni = &style.non_inherited;
        assert_eq!(ni.display, Display::TableCell);
        assert_eq!(ni.float, Float::None);
        assert_eq!(style.inherited.cursor, Cursor::Pointer);
        assert_eq!(style.inherited.text_align, TextAlign::KhtmlCenter);
        assert_eq!(ni.border.top.width, 5);
        assert_eq!(ni.border.left.style, BorderStyle::Dashed);
        assert!(ni.text_decoration.contains(TextDecoration::UNDERLINE));
        assert!(ni.text_decoration.contains(TextDecoration::OVERLINE));
        assert!(!ni.text_decoration.contains(TextDecoration::LINE_THROUGH));
        assert_eq!(ni.z_index, Some(4));
        assert_eq!(ni.outline.border.color, None);
        assert_eq!(ni.margin.left, Length::Fixed(9));
    }

    #[test]
    fn test_text_shadow_and_clip() {
        let f = Fixture::new();
        let style = f.apply(
            "text-shadow: red 1px 2px 3px, 4px 5px; clip: rect(1px, auto, 3px, 4px)",
            &ComputedStyle::initial(),
        );
        let shadows = &style.inherited.text_shadow;
        assert_eq!(shadows.len(), 2);
        assert_eq!(shadows[0], ShadowData { x: 1, y: 2, blur: 3, color: Some(Color::rgb(255, 0, 0)) });
        assert_eq!(shadows[1].color, None);
        let clip = style.non_inherited.clip.unwrap_or_default();
        assert_eq!(clip.top, Length::Fixed(1));
        assert_eq!(clip.right, Length::Auto);
    }
}
