//! Property value grammar
//!
//! Validates the components of one declaration value against the grammar of
//! its property and expands shorthands into longhand declarations. Parsing is
//! all-or-nothing: declarations are collected in a scratch list and only
//! handed out once the whole value has been accepted.

use std::ops::BitOr;

use crate::declaration::Declaration;
use crate::keywords::Keyword as K;
use crate::properties::PropertyId as P;
use crate::value_list::{ParsedValue, ValueList};
use crate::values::{Color, Rect, Shadow, Unit, Value};

/// Unit classes a numeric component may be accepted as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Units(u8);

impl Units {
    pub const INTEGER: Units = Units(1);
    pub const NUMBER: Units = Units(1 << 1);
    pub const PERCENT: Units = Units(1 << 2);
    pub const LENGTH: Units = Units(1 << 3);
    pub const TIME: Units = Units(1 << 4);
    pub const NON_NEGATIVE: Units = Units(1 << 5);

    #[inline]
    pub const fn contains(self, other: Units) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Units {
    type Output = Units;

    fn bitor(self, rhs: Units) -> Units {
        Units(self.0 | rhs.0)
    }
}

/// Check a numeric component against the allowed unit classes.
///
/// Unitless numbers become `px` lengths when a length is allowed and either
/// the number is zero or parsing is not strict.
pub fn valid_unit(value: &ParsedValue, units: Units, strict: bool) -> Option<Value> {
    let (v, unit) = value.numeric()?;
    if units.contains(Units::NON_NEGATIVE) && v < 0.0 {
        return None;
    }
    match unit {
        Unit::Number => {
            if units.contains(Units::NUMBER) {
                Some(Value::number(v))
            } else if units.contains(Units::LENGTH) && (v == 0.0 || !strict) {
                Some(Value::px(v))
            } else if units.contains(Units::INTEGER) && v.fract().abs() < 0.001 {
                Some(Value::number(v))
            } else {
                None
            }
        }
        Unit::Percent if units.contains(Units::PERCENT) => Some(Value::Numeric(v, unit)),
        u if u.is_length() && units.contains(Units::LENGTH) => Some(Value::Numeric(v, unit)),
        u if u.is_time() && units.contains(Units::TIME) => Some(Value::Numeric(v, unit)),
        _ => None,
    }
}

#[inline]
fn keyword_of(value: &ParsedValue) -> Option<K> {
    value.ident().and_then(K::from_name)
}

#[inline]
fn one_of(kw: Option<K>, allowed: &[K]) -> Option<Value> {
    kw.filter(|k| allowed.contains(k)).map(Value::Keyword)
}

#[inline]
fn in_range(kw: Option<K>, first: K, last: K) -> Option<Value> {
    kw.filter(|k| k.in_range(first, last)).map(Value::Keyword)
}

/// Parse the value of one property.
///
/// Returns the longhand declarations the value expands to, or `None` when
/// the value is invalid for the property.
pub fn parse_property(
    property: P,
    values: ValueList,
    important: bool,
    strict: bool,
) -> Option<Vec<Declaration>> {
    if values.is_empty() {
        return None;
    }
    let mut parser = PropertyParser::new(values, important, strict);
    // Leftover components invalidate the whole declaration
    if parser.parse_value(property) && parser.values.at_end() {
        Some(parser.parsed)
    } else {
        None
    }
}

/// Parse a color string such as `#f00`, `red` or `rgb(255, 0, 0)`
pub fn parse_color_string(text: &str, strict: bool) -> Option<Color> {
    let mut input = cssparser::ParserInput::new(text);
    let mut parser = cssparser::Parser::new(&mut input);
    let values = ValueList::parse(&mut parser).ok()?;
    match values.as_slice() {
        [value] => {
            if let Some(kw) = keyword_of(value) {
                if let Some(color) = Color::from_keyword(kw) {
                    return Some(color);
                }
            }
            parse_color_from_value(value, strict)
        }
        _ => None,
    }
}

/// Color from a hex digit string or a color name
fn parse_color_name(name: &str) -> Option<Color> {
    if matches!(name.len(), 3 | 6) {
        if let Some(color) = Color::from_hex(name) {
            return Some(color);
        }
    }
    K::from_name(name).and_then(Color::from_keyword)
}

fn rgb_component(value: &ParsedValue) -> Option<i32> {
    let parsed = valid_unit(value, Units::INTEGER | Units::PERCENT, true)?;
    let (v, unit) = parsed.numeric()?;
    let scaled = if unit == Unit::Percent { v * 256.0 / 100.0 } else { v };
    Some((scaled as i32).clamp(0, 255))
}

/// `rgb(r, g, b)` or `rgba(r, g, b, a)` arguments
fn parse_rgb_function(args: &ValueList, with_alpha: bool) -> Option<Color> {
    let items = args.as_slice();
    let expected = if with_alpha { 7 } else { 5 };
    if items.len() != expected {
        return None;
    }
    if items.iter().skip(1).step_by(2).any(|sep| !sep.is_operator(',')) {
        return None;
    }
    let r = rgb_component(&items[0])? as u8;
    let g = rgb_component(&items[2])? as u8;
    let b = rgb_component(&items[4])? as u8;
    if !with_alpha {
        return Some(Color::rgb(r, g, b));
    }
    let alpha = valid_unit(&items[6], Units::NUMBER, true)?.numeric()?.0;
    Some(Color::rgba(r, g, b, (alpha.clamp(0.0, 1.0) * 255.0) as u8))
}

/// Color from one component, without keyword handling.
///
/// Quirks mode also reads an integer below 1,000,000 and a dimension or
/// identifier spelling 3 or 6 hex digits as a hex color.
pub fn parse_color_from_value(value: &ParsedValue, strict: bool) -> Option<Color> {
    match value {
        // The tokenizer reads `000e00` as a number in exponent notation
        ParsedValue::Number { raw, .. } if !strict && raw.contains(['e', 'E']) => parse_color_name(raw),
        ParsedValue::Number { value, .. } if !strict && (0.0..1_000_000.0).contains(value) => {
            let digits = format!("{:06}", (*value + 0.5) as i32);
            parse_color_name(&digits)
        }
        ParsedValue::Hash(hex) => Color::from_hex(hex),
        ParsedValue::Ident(name) => {
            if strict {
                K::from_name(name).filter(|k| k.is_color()).and_then(Color::from_keyword)
            } else {
                parse_color_name(name)
            }
        }
        ParsedValue::Dimension { raw, .. } if !strict => parse_color_name(raw),
        ParsedValue::Function { name, args } => match name.as_str() {
            "rgb" => parse_rgb_function(args, false),
            "rgba" => parse_rgb_function(args, true),
            _ => None,
        },
        _ => None,
    }
}

/// Grammar walker over one value list
struct PropertyParser {
    values: ValueList,
    strict: bool,
    important: bool,
    parsed: Vec<Declaration>,
    in_shorthand: bool,
}

impl PropertyParser {
    fn new(values: ValueList, important: bool, strict: bool) -> Self {
        Self {
            values,
            strict,
            important,
            parsed: Vec::new(),
            in_shorthand: false,
        }
    }

    #[inline]
    fn add(&mut self, property: P, value: Value) {
        self.parsed.push(Declaration::new(property, value, self.important));
    }

    /// Add `initial` for a property, expanding shorthands
    fn add_initial(&mut self, property: P) {
        let longhands = property.longhands();
        if longhands.is_empty() {
            self.add(property, Value::Initial);
        } else {
            for &longhand in longhands {
                self.add(longhand, Value::Initial);
            }
        }
    }

    /// Value of the most recent declaration, counting back from the end
    fn parsed_value(&self, back: usize) -> Option<Value> {
        let index = self.parsed.len().checked_sub(back)?;
        self.parsed.get(index).map(|d| d.value.clone())
    }

    /// Color accepted by color-valued properties
    fn color(&self, value: &ParsedValue) -> Option<Value> {
        if let Some(kw) = keyword_of(value) {
            if kw.is_color() || (kw == K::Grey && !self.strict) {
                return Some(Value::Keyword(kw));
            }
        }
        parse_color_from_value(value, self.strict).map(Value::Color)
    }

    #[inline]
    fn unit(&self, value: &ParsedValue, units: Units) -> Option<Value> {
        valid_unit(value, units, self.strict)
    }

    /// Parse one property at the cursor, adding its declarations
    fn parse_value(&mut self, property: P) -> bool {
        let Some(value) = self.values.current().cloned() else {
            return false;
        };
        let kw = keyword_of(&value);

        if let Some(wide @ (K::Inherit | K::Initial)) = kw {
            if self.values.len() != 1 {
                return false;
            }
            let wide = if wide == K::Inherit { Value::Inherit } else { Value::Initial };
            self.add(property, wide);
            self.values.advance();
            return true;
        }

        let length = Units::LENGTH;
        let length_percent = Units::LENGTH | Units::PERCENT;

        let primitive = match property {
            P::UnicodeBidi => one_of(kw, &[K::Normal, K::Embed, K::BidiOverride]),
            P::Position => one_of(kw, &[K::Static, K::Relative, K::Absolute, K::Fixed]),
            P::PageBreakBefore | P::PageBreakAfter => {
                one_of(kw, &[K::Auto, K::Always, K::Avoid, K::Left, K::Right])
            }
            P::PageBreakInside => one_of(kw, &[K::Auto, K::Avoid]),
            P::EmptyCells => one_of(kw, &[K::Show, K::Hide]),
            P::Content => return self.parse_content(property),
            P::WhiteSpace => one_of(kw, &[K::Normal, K::Pre, K::Nowrap]),
            P::Clip => match &value {
                ParsedValue::Function { .. } => return self.parse_clip_shape(property),
                _ => one_of(kw, &[K::Auto]),
            },
            P::CaptionSide => one_of(kw, &[K::Top, K::Bottom, K::Left, K::Right]),
            P::BorderCollapse => one_of(kw, &[K::Collapse, K::Separate]),
            P::Visibility => one_of(kw, &[K::Visible, K::Hidden, K::Collapse]),
            P::Overflow => one_of(
                kw,
                &[K::Visible, K::Hidden, K::Scroll, K::Auto, K::Marquee, K::Overlay],
            ),
            P::ListStylePosition => one_of(kw, &[K::Inside, K::Outside]),
            P::ListStyleType => {
                in_range(kw, K::Disc, K::KatakanaIroha).or_else(|| one_of(kw, &[K::None]))
            }
            P::Display => {
                in_range(kw, K::Inline, K::KhtmlInlineBox).or_else(|| one_of(kw, &[K::None]))
            }
            P::Direction => one_of(kw, &[K::Ltr, K::Rtl]),
            P::TextTransform => {
                in_range(kw, K::Capitalize, K::Lowercase).or_else(|| one_of(kw, &[K::None]))
            }
            P::Float => one_of(kw, &[K::Left, K::Right, K::None, K::Center]),
            P::Clear => one_of(kw, &[K::None, K::Left, K::Right, K::Both]),
            P::TextAlign => match &value {
                ParsedValue::String(s) => Some(Value::String(s.clone())),
                _ => in_range(kw, K::KhtmlAuto, K::KhtmlCenter),
            },
            P::OutlineStyle => one_of(kw, &[K::Auto]).or_else(|| in_range(kw, K::None, K::Double)),
            P::BorderTopStyle | P::BorderRightStyle | P::BorderBottomStyle | P::BorderLeftStyle => {
                in_range(kw, K::None, K::Double)
            }
            P::FontWeight => match kw {
                Some(k) => in_range(Some(k), K::Normal, K::Lighter),
                None => valid_unit(&value, Units::INTEGER | Units::NON_NEGATIVE, false)
                    .and_then(|v| v.numeric())
                    .map(|(w, _)| w as i32)
                    .filter(|w| w % 100 == 0 && (100..=900).contains(w))
                    .map(|w| Value::number(w as f32)),
            },
            P::BorderSpacing => return self.parse_pair(P::BorderSpacing),
            P::KhtmlBorderHorizontalSpacing | P::KhtmlBorderVerticalSpacing => {
                self.unit(&value, length | Units::NON_NEGATIVE)
            }
            p if p.is_scrollbar_color() => {
                if self.strict {
                    None
                } else {
                    self.color(&value)
                }
            }
            P::OutlineColor => one_of(kw, &[K::Invert]).or_else(|| self.color(&value)),
            P::BackgroundColor
            | P::BorderTopColor
            | P::BorderRightColor
            | P::BorderBottomColor
            | P::BorderLeftColor
            | P::Color => self.color(&value),
            P::Cursor => {
                if !self.strict && kw == Some(K::Hand) {
                    Some(Value::Keyword(K::Pointer))
                } else {
                    in_range(kw, K::Auto, K::Help)
                }
            }
            P::BackgroundAttachment
            | P::BackgroundImage
            | P::BackgroundPosition
            | P::BackgroundPositionX
            | P::BackgroundPositionY
            | P::BackgroundRepeat => return self.parse_background_longhand(property),
            P::ListStyleImage => match &value {
                ParsedValue::Uri(uri) if !uri.is_empty() => Some(Value::Uri(uri.clone())),
                _ => one_of(kw, &[K::None]),
            },
            P::OutlineWidth
            | P::BorderTopWidth
            | P::BorderRightWidth
            | P::BorderBottomWidth
            | P::BorderLeftWidth => one_of(kw, &[K::Thin, K::Medium, K::Thick])
                .or_else(|| self.unit(&value, length)),
            P::LetterSpacing | P::WordSpacing => {
                one_of(kw, &[K::Normal]).or_else(|| self.unit(&value, length))
            }
            P::TextIndent
            | P::PaddingTop
            | P::PaddingRight
            | P::PaddingBottom
            | P::PaddingLeft
            | P::KhtmlPaddingStart => self.unit(&value, length_percent),
            P::MaxHeight | P::MaxWidth => one_of(kw, &[K::None])
                .or_else(|| self.unit(&value, length_percent | Units::NON_NEGATIVE)),
            P::MinHeight | P::MinWidth => self.unit(&value, length_percent | Units::NON_NEGATIVE),
            P::FontSize => {
                in_range(kw, K::XxSmall, K::Larger).or_else(|| self.unit(&value, length_percent))
            }
            P::FontStyle => one_of(kw, &[K::Normal, K::Italic, K::Oblique]),
            P::FontVariant => one_of(kw, &[K::Normal, K::SmallCaps]),
            P::VerticalAlign => in_range(kw, K::Baseline, K::KhtmlBaselineMiddle)
                .or_else(|| self.unit(&value, length_percent)),
            P::Width | P::Height => one_of(kw, &[K::Auto])
                .or_else(|| self.unit(&value, length_percent | Units::NON_NEGATIVE)),
            P::Top
            | P::Right
            | P::Bottom
            | P::Left
            | P::MarginTop
            | P::MarginRight
            | P::MarginBottom
            | P::MarginLeft
            | P::KhtmlMarginStart => {
                one_of(kw, &[K::Auto]).or_else(|| self.unit(&value, length_percent))
            }
            P::ZIndex => one_of(kw, &[K::Auto])
                .or_else(|| valid_unit(&value, Units::INTEGER, false)),
            P::Orphans | P::Widows => valid_unit(&value, Units::INTEGER, false),
            P::LineHeight => one_of(kw, &[K::Normal])
                .or_else(|| self.unit(&value, Units::NUMBER | length_percent)),
            P::FontFamily => return self.parse_font_family_property(),
            P::TextDecoration => return self.parse_text_decoration(property),
            P::TableLayout => one_of(kw, &[K::Auto, K::Fixed]),
            P::OutlineOffset => self.unit(&value, length),
            P::TextShadow => match kw {
                Some(K::None) => Some(Value::Keyword(K::None)),
                _ => return self.parse_shadow(property),
            },
            P::Opacity | P::KhtmlBoxFlex => self.unit(&value, Units::NUMBER),
            P::KhtmlBoxAlign => {
                one_of(kw, &[K::Stretch, K::Start, K::End, K::Center, K::Baseline])
            }
            P::KhtmlBoxDirection => one_of(kw, &[K::Normal, K::Reverse]),
            P::KhtmlBoxLines => one_of(kw, &[K::Single, K::Multiple]),
            P::KhtmlBoxOrient => {
                one_of(kw, &[K::Horizontal, K::Vertical, K::InlineAxis, K::BlockAxis])
            }
            P::KhtmlBoxPack => one_of(kw, &[K::Start, K::End, K::Center, K::Justify]),
            P::KhtmlBoxFlexGroup | P::KhtmlBoxOrdinalGroup => {
                valid_unit(&value, Units::INTEGER | Units::NON_NEGATIVE, true)
            }
            P::KhtmlMarqueeDirection => one_of(
                kw,
                &[
                    K::Forwards,
                    K::Backwards,
                    K::Ahead,
                    K::Reverse,
                    K::Left,
                    K::Right,
                    K::Down,
                    K::Up,
                    K::Auto,
                ],
            ),
            P::KhtmlMarqueeIncrement => one_of(kw, &[K::Small, K::Large, K::Medium])
                .or_else(|| self.unit(&value, length_percent)),
            P::KhtmlMarqueeStyle => {
                one_of(kw, &[K::None, K::Slide, K::Scroll, K::Alternate, K::Unfurl])
            }
            P::KhtmlMarqueeRepetition => one_of(kw, &[K::Infinite])
                .or_else(|| self.unit(&value, Units::INTEGER | Units::NON_NEGATIVE)),
            P::KhtmlMarqueeSpeed => one_of(kw, &[K::Normal, K::Slow, K::Fast]).or_else(|| {
                self.unit(&value, Units::TIME | Units::INTEGER | Units::NON_NEGATIVE)
            }),
            P::KhtmlUserDrag => one_of(kw, &[K::Auto, K::None, K::Element]),
            P::KhtmlUserModify => one_of(kw, &[K::ReadOnly, K::ReadWrite]),
            P::KhtmlUserSelect => one_of(kw, &[K::Auto, K::None, K::Text]),
            P::TextOverflow => one_of(kw, &[K::Clip, K::Ellipsis]),
            P::KhtmlMarginCollapse => return self.parse_pair(P::KhtmlMarginCollapse),
            P::KhtmlMarginTopCollapse | P::KhtmlMarginBottomCollapse => {
                one_of(kw, &[K::Collapse, K::Separate, K::Discard])
            }

            P::Background => return self.parse_background_shorthand(),
            P::Border
            | P::BorderTop
            | P::BorderRight
            | P::BorderBottom
            | P::BorderLeft
            | P::Outline
            | P::ListStyle
            | P::KhtmlMarquee => return self.parse_shorthand(shorthand_parts(property)),
            P::BorderColor | P::BorderWidth | P::BorderStyle | P::Margin | P::Padding => {
                return self.parse_4_values(property.longhands());
            }
            P::Font => {
                // System font keywords are not supported
                if kw.is_some_and(|k| k.in_range(K::Caption, K::StatusBar)) {
                    return false;
                }
                return self.parse_font();
            }
            _ => None,
        };

        match primitive {
            Some(parsed) => {
                self.add(property, parsed);
                self.values.advance();
                true
            }
            None => false,
        }
    }

    /// Any-order shorthand; each part at most once, missing parts become `initial`
    fn parse_shorthand(&mut self, parts: &[P]) -> bool {
        let was_in_shorthand = std::mem::replace(&mut self.in_shorthand, true);
        let mut found = vec![false; parts.len()];

        while self.values.current().is_some() {
            let mut matched = false;
            for (i, &part) in parts.iter().enumerate() {
                if found[i] {
                    continue;
                }
                let mark = (self.parsed.len(), self.values.position());
                if self.parse_value(part) {
                    found[i] = true;
                    matched = true;
                    break;
                }
                self.parsed.truncate(mark.0);
                self.values.set_position(mark.1);
            }
            if !matched {
                self.in_shorthand = was_in_shorthand;
                return false;
            }
        }

        for (i, &part) in parts.iter().enumerate() {
            if !found[i] {
                self.add_initial(part);
            }
        }
        self.in_shorthand = was_in_shorthand;
        true
    }

    /// Box-side expansion: 1 value sets all sides, 2 set vertical/horizontal,
    /// 3 set top/horizontal/bottom, 4 set top/right/bottom/left.
    fn parse_4_values(&mut self, sides: &[P]) -> bool {
        let [top, right, bottom, left] = *sides else {
            return false;
        };
        let count = if self.in_shorthand { 1 } else { self.values.len() };
        match count {
            1 => {
                if !self.parse_value(top) {
                    return false;
                }
                let Some(value) = self.parsed_value(1) else {
                    return false;
                };
                self.add(right, value.clone());
                self.add(bottom, value.clone());
                self.add(left, value);
                true
            }
            2 => {
                if !self.parse_value(top) || !self.parse_value(right) {
                    return false;
                }
                let (Some(vertical), Some(horizontal)) = (self.parsed_value(2), self.parsed_value(1))
                else {
                    return false;
                };
                self.add(bottom, vertical);
                self.add(left, horizontal);
                true
            }
            3 => {
                if !self.parse_value(top) || !self.parse_value(right) || !self.parse_value(bottom) {
                    return false;
                }
                let Some(horizontal) = self.parsed_value(2) else {
                    return false;
                };
                self.add(left, horizontal);
                true
            }
            4 => sides.iter().all(|&side| self.parse_value(side)),
            _ => false,
        }
    }

    /// One value sets both longhands, two values set them in order
    fn parse_pair(&mut self, property: P) -> bool {
        let [first, second] = *property.longhands() else {
            return false;
        };
        match self.values.len() {
            1 => {
                if !self.parse_value(first) {
                    return false;
                }
                match self.parsed_value(1) {
                    Some(value) => {
                        self.add(second, value);
                        true
                    }
                    None => false,
                }
            }
            2 => self.parse_value(first) && self.parse_value(second),
            _ => false,
        }
    }

    /// `[style || variant || weight]? size [/ line-height]? family`
    fn parse_font(&mut self) -> bool {
        let mut style = None;
        let mut variant = None;
        let mut weight = None;

        while let Some(value) = self.values.current() {
            match keyword_of(value) {
                Some(K::Normal) => {}
                Some(k @ (K::Italic | K::Oblique)) => {
                    if style.replace(Value::Keyword(k)).is_some() {
                        return false;
                    }
                }
                Some(K::SmallCaps) => {
                    if variant.replace(Value::Keyword(K::SmallCaps)).is_some() {
                        return false;
                    }
                }
                Some(k) if k.in_range(K::Bold, K::Lighter) => {
                    if weight.replace(Value::Keyword(k)).is_some() {
                        return false;
                    }
                }
                Some(_) => break,
                None => {
                    // A bare number may still turn out to be a quirks-mode size
                    let numeric_weight = if weight.is_none() {
                        valid_unit(value, Units::INTEGER | Units::NON_NEGATIVE, true)
                            .and_then(|v| v.numeric())
                            .map(|(w, _)| w as i32)
                            .filter(|w| w % 100 == 0 && (100..=900).contains(w))
                    } else {
                        None
                    };
                    match numeric_weight {
                        Some(w) => weight = Some(Value::number(w as f32)),
                        None => break,
                    }
                }
            }
            self.values.advance();
        }

        let Some(value) = self.values.current() else {
            return false;
        };
        let size = match keyword_of(value) {
            Some(k) if k.in_range(K::XxSmall, K::Larger) => Some(Value::Keyword(k)),
            _ => self.unit(value, Units::LENGTH | Units::PERCENT),
        };
        let Some(size) = size else {
            return false;
        };
        if self.values.advance().is_none() {
            return false;
        }

        let mut line_height = Value::Keyword(K::Normal);
        if self.values.current().is_some_and(|v| v.is_operator('/')) {
            let Some(value) = self.values.advance().cloned() else {
                return false;
            };
            if keyword_of(&value) != Some(K::Normal) {
                match self.unit(&value, Units::NUMBER | Units::LENGTH | Units::PERCENT) {
                    Some(v) => line_height = v,
                    None => return false,
                }
            }
            if self.values.advance().is_none() {
                return false;
            }
        }

        let Some(family) = self.parse_font_family() else {
            return false;
        };
        if !self.values.at_end() {
            return false;
        }

        let normal = Value::Keyword(K::Normal);
        self.add(P::FontStyle, style.unwrap_or_else(|| normal.clone()));
        self.add(P::FontVariant, variant.unwrap_or_else(|| normal.clone()));
        self.add(P::FontWeight, weight.unwrap_or(normal));
        self.add(P::FontSize, size);
        self.add(P::LineHeight, line_height);
        self.add(P::FontFamily, family);
        true
    }

    fn parse_font_family_property(&mut self) -> bool {
        match self.parse_font_family() {
            Some(family) => {
                self.add(P::FontFamily, family);
                true
            }
            None => false,
        }
    }

    /// Comma separated family list. Identifier runs are joined with single
    /// spaces; a lone generic family name stays a keyword.
    fn parse_font_family(&mut self) -> Option<Value> {
        fn flush(name: &mut Vec<String>, families: &mut Vec<Value>) {
            match name.as_slice() {
                [] => {}
                [single] => {
                    let generic = K::from_name(single).filter(|k| k.in_range(K::Serif, K::KhtmlBody));
                    families.push(match generic {
                        Some(k) => Value::Keyword(k),
                        None => Value::String(single.clone()),
                    });
                }
                words => families.push(Value::String(words.join(" "))),
            }
            name.clear();
        }

        let mut families = Vec::new();
        let mut name: Vec<String> = Vec::new();
        while let Some(value) = self.values.current() {
            match value {
                ParsedValue::Ident(word) => name.push(word.clone()),
                ParsedValue::String(s) => {
                    flush(&mut name, &mut families);
                    families.push(Value::String(s.clone()));
                }
                ParsedValue::Operator(',') => flush(&mut name, &mut families),
                _ => break,
            }
            self.values.advance();
        }
        flush(&mut name, &mut families);

        (!families.is_empty()).then_some(Value::List(families))
    }

    /// `none | [underline || overline || line-through || blink]`
    fn parse_text_decoration(&mut self, property: P) -> bool {
        let Some(first) = self.values.current() else {
            return false;
        };
        if keyword_of(first) == Some(K::None) {
            self.add(property, Value::Keyword(K::None));
            self.values.advance();
            return true;
        }

        let mut lines = Vec::new();
        while let Some(value) = self.values.current() {
            match keyword_of(value) {
                Some(K::Blink) => {}
                Some(k @ (K::Underline | K::Overline | K::LineThrough)) => {
                    lines.push(Value::Keyword(k));
                }
                _ => return false,
            }
            self.values.advance();
        }
        if lines.is_empty() {
            return false;
        }
        self.add(property, Value::List(lines));
        true
    }

    /// `[<string> | attr(X) | <uri>]+`
    fn parse_content(&mut self, property: P) -> bool {
        let mut items = Vec::new();
        while let Some(value) = self.values.current() {
            let item = match value {
                ParsedValue::Uri(uri) => Value::Uri(uri.clone()),
                ParsedValue::String(s) => Value::String(s.clone()),
                ParsedValue::Function { name, args } => {
                    if name != "attr" {
                        return false;
                    }
                    match args.as_slice() {
                        [ParsedValue::Ident(attr)] => Value::Attr(attr.clone()),
                        _ => return false,
                    }
                }
                // quote keywords are not rendered
                _ => break,
            };
            items.push(item);
            self.values.advance();
        }
        if items.is_empty() {
            return false;
        }
        self.add(property, Value::List(items));
        true
    }

    /// `rect(t, r, b, l)` or `rect(t r b l)`
    fn parse_clip_shape(&mut self, property: P) -> bool {
        let Some(ParsedValue::Function { name, args }) = self.values.current() else {
            return false;
        };
        if name != "rect" {
            return false;
        }
        let items = args.as_slice();
        let with_commas = match items.len() {
            4 => false,
            7 => true,
            _ => return false,
        };
        let mut sides = Vec::with_capacity(4);
        for (i, item) in items.iter().enumerate() {
            if with_commas && i % 2 == 1 {
                if !item.is_operator(',') {
                    return false;
                }
                continue;
            }
            let side = if keyword_of(item) == Some(K::Auto) {
                Some(Value::Keyword(K::Auto))
            } else {
                self.unit(item, Units::LENGTH)
            };
            match side {
                Some(side) => sides.push(side),
                None => return false,
            }
        }
        let Ok([top, right, bottom, left]) = <[Value; 4]>::try_from(sides) else {
            return false;
        };
        self.add(property, Value::Rect(Box::new(Rect { top, right, bottom, left })));
        self.values.advance();
        true
    }

    /// Comma separated shadows: `<color>? <x> <y> <blur>? <color>?`
    fn parse_shadow(&mut self, property: P) -> bool {
        #[derive(Default)]
        struct Pending {
            x: Option<Value>,
            y: Option<Value>,
            blur: Option<Value>,
            color: Option<Value>,
        }

        let mut shadows = Vec::new();
        let mut pending = Pending::default();
        let (mut allow_x, mut allow_y, mut allow_blur) = (true, false, false);
        let mut allow_color = true;
        let mut allow_break = true;

        while let Some(value) = self.values.current().cloned() {
            if let ParsedValue::Operator(op) = value {
                if op != ',' || !allow_break {
                    return false;
                }
                let done = std::mem::take(&mut pending);
                if let (Some(x), Some(y)) = (done.x, done.y) {
                    shadows.push(Shadow { x, y, blur: done.blur, color: done.color });
                }
                allow_x = true;
                allow_color = true;
                allow_break = true;
                allow_y = false;
                allow_blur = false;
            } else if let Some(length) = valid_unit(&value, Units::LENGTH, true) {
                if allow_x {
                    pending.x = Some(length);
                    allow_x = false;
                    allow_y = true;
                    allow_color = false;
                    allow_break = false;
                } else if allow_y {
                    pending.y = Some(length);
                    allow_y = false;
                    allow_blur = true;
                    allow_color = true;
                    allow_break = true;
                } else if allow_blur {
                    pending.blur = Some(length);
                    allow_blur = false;
                } else {
                    return false;
                }
            } else {
                let Some(color) = self.color(&value) else {
                    return false;
                };
                if !allow_color {
                    return false;
                }
                pending.color = Some(color);
                allow_color = false;
                if allow_x {
                    allow_break = false;
                } else {
                    allow_blur = false;
                }
            }
            self.values.advance();
        }

        if !allow_break {
            return false;
        }
        if let (Some(x), Some(y)) = (pending.x, pending.y) {
            shadows.push(Shadow { x, y, blur: pending.blur, color: pending.color });
        }
        if shadows.is_empty() {
            return false;
        }
        self.add(property, Value::Shadows(shadows));
        true
    }

    fn background_color(&self, value: &ParsedValue) -> Option<Value> {
        self.color(value)
    }

    fn background_image(value: &ParsedValue) -> Option<Value> {
        match value {
            ParsedValue::Uri(uri) if !uri.is_empty() => Some(Value::Uri(uri.clone())),
            _ => one_of(keyword_of(value), &[K::None]),
        }
    }

    /// One position coordinate; keywords become percentages
    fn background_position_xy(
        &self,
        value: &ParsedValue,
        x_found: &mut bool,
        y_found: &mut bool,
    ) -> Option<Value> {
        match keyword_of(value) {
            Some(k @ (K::Left | K::Right)) => {
                if *x_found {
                    return None;
                }
                *x_found = true;
                Some(Value::percent(if k == K::Right { 100.0 } else { 0.0 }))
            }
            Some(k @ (K::Top | K::Bottom)) => {
                if *y_found {
                    return None;
                }
                *y_found = true;
                Some(Value::percent(if k == K::Bottom { 100.0 } else { 0.0 }))
            }
            Some(K::Center) => Some(Value::percent(50.0)),
            _ => self.unit(value, Units::LENGTH | Units::PERCENT),
        }
    }

    /// One or two position values, returned as (x, y). Advances the cursor.
    fn background_position(&mut self) -> Option<(Value, Value)> {
        let value = self.values.current()?.clone();
        let (mut first_is_x, mut first_is_y) = (false, false);
        let first = self.background_position_xy(&value, &mut first_is_x, &mut first_is_y)?;

        let next = self.values.advance().cloned().filter(|v| !v.is_operator(','));
        let (mut second_is_x, mut second_is_y) = (false, false);
        let mut second = None;
        if let Some(next) = next {
            second = self.background_position_xy(&next, &mut second_is_x, &mut second_is_y);
            if second.is_some() {
                self.values.advance();
            } else if !self.in_shorthand {
                return None;
            }
        }

        let second = second.unwrap_or_else(|| Value::percent(50.0));
        if first_is_y || second_is_x {
            Some((second, first))
        } else {
            Some((first, second))
        }
    }

    /// One layer value of a background longhand at the cursor
    fn background_layer(&mut self, property: P) -> Option<(Value, Option<Value>)> {
        let value = self.values.current()?.clone();
        let parsed = match property {
            P::BackgroundAttachment => one_of(keyword_of(&value), &[K::Scroll, K::Fixed]),
            P::BackgroundColor => self.background_color(&value),
            P::BackgroundImage => Self::background_image(&value),
            P::BackgroundRepeat => in_range(keyword_of(&value), K::Repeat, K::NoRepeat),
            P::BackgroundPositionX => {
                let (mut x, mut y) = (false, true);
                self.background_position_xy(&value, &mut x, &mut y)
            }
            P::BackgroundPositionY => {
                let (mut x, mut y) = (true, false);
                self.background_position_xy(&value, &mut x, &mut y)
            }
            P::BackgroundPosition => {
                return self.background_position().map(|(x, y)| (x, Some(y)));
            }
            _ => None,
        };
        let parsed = parsed?;
        self.values.advance();
        Some((parsed, None))
    }

    /// A background longhand, possibly a comma separated layer list
    fn parse_background_longhand(&mut self, property: P) -> bool {
        let mut first = Vec::new();
        let mut second = Vec::new();
        let mut allow_comma = false;

        while let Some(value) = self.values.current() {
            if allow_comma {
                if !value.is_operator(',') {
                    return false;
                }
                self.values.advance();
                allow_comma = false;
                continue;
            }
            let Some((a, b)) = self.background_layer(property) else {
                return false;
            };
            first.push(a);
            second.extend(b);
            allow_comma = true;
        }
        if first.is_empty() {
            return false;
        }

        let collapse = |mut layers: Vec<Value>| {
            if layers.len() == 1 {
                layers.pop().unwrap_or(Value::Initial)
            } else {
                Value::List(layers)
            }
        };
        if property == P::BackgroundPosition {
            self.add(P::BackgroundPositionX, collapse(first));
            self.add(P::BackgroundPositionY, collapse(second));
        } else {
            self.add(property, collapse(first));
        }
        true
    }

    /// Layered `background` shorthand; color only in the final layer
    fn parse_background_shorthand(&mut self) -> bool {
        const PARTS: [P; 5] = [
            P::BackgroundImage,
            P::BackgroundRepeat,
            P::BackgroundAttachment,
            P::BackgroundPosition,
            P::BackgroundColor,
        ];
        fn push_layer(slot: &mut Option<Value>, value: Value) {
            *slot = Some(match slot.take() {
                None => value,
                Some(Value::List(mut layers)) => {
                    layers.push(value);
                    Value::List(layers)
                }
                Some(previous) => Value::List(vec![previous, value]),
            });
        }

        let was_in_shorthand = std::mem::replace(&mut self.in_shorthand, true);
        let mut found = [false; 5];
        let mut slots: [Option<Value>; 5] = Default::default();
        let mut position_y: Option<Value> = None;

        let ok = 'parse: {
            while let Some(value) = self.values.current() {
                if value.is_operator(',') {
                    self.values.advance();
                    for (i, part) in PARTS.iter().enumerate() {
                        if *part == P::BackgroundColor {
                            if found[i] {
                                break 'parse false;
                            }
                        } else if !found[i] {
                            push_layer(&mut slots[i], Value::Initial);
                            if *part == P::BackgroundPosition {
                                push_layer(&mut position_y, Value::Initial);
                            }
                        }
                        found[i] = false;
                    }
                    if self.values.current().is_none() {
                        break;
                    }
                }

                let mut matched = false;
                for (i, &part) in PARTS.iter().enumerate() {
                    if found[i] {
                        continue;
                    }
                    let mark = self.values.position();
                    if let Some((a, b)) = self.background_layer(part) {
                        found[i] = true;
                        matched = true;
                        push_layer(&mut slots[i], a);
                        if let Some(b) = b {
                            push_layer(&mut position_y, b);
                        }
                        break;
                    }
                    self.values.set_position(mark);
                }
                if !matched {
                    break 'parse false;
                }
            }
            true
        };
        self.in_shorthand = was_in_shorthand;
        if !ok {
            return false;
        }

        for (i, part) in PARTS.iter().enumerate() {
            if !found[i] {
                push_layer(&mut slots[i], Value::Initial);
                if *part == P::BackgroundPosition {
                    push_layer(&mut position_y, Value::Initial);
                }
            }
        }

        for (part, slot) in PARTS.iter().zip(slots) {
            let value = slot.unwrap_or(Value::Initial);
            if *part == P::BackgroundPosition {
                self.add(P::BackgroundPositionX, value);
                self.add(P::BackgroundPositionY, position_y.take().unwrap_or(Value::Initial));
            } else {
                self.add(*part, value);
            }
        }
        true
    }
}

/// Parts tried by the any-order shorthands, in trial order
fn shorthand_parts(property: P) -> &'static [P] {
    match property {
        P::Border => &[P::BorderWidth, P::BorderStyle, P::BorderColor],
        P::Outline => &[P::OutlineWidth, P::OutlineStyle, P::OutlineColor],
        other => other.longhands(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssparser::{Parser, ParserInput};

    fn parse(property: P, css: &str, strict: bool) -> Option<Vec<Declaration>> {
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        let values = ValueList::parse(&mut parser).ok()?;
        parse_property(property, values, false, strict)
    }

    fn value_of(decls: &[Declaration], property: P) -> Option<&Value> {
        decls.iter().rev().find(|d| d.property == property).map(|d| &d.value)
    }

    #[test]
    fn test_valid_unit() {
        let zero = ParsedValue::Number { value: 0.0, integer: true, raw: "0".into() };
        let ten = ParsedValue::Number { value: 10.0, integer: true, raw: "10".into() };
        assert_eq!(valid_unit(&zero, Units::LENGTH, true), Some(Value::px(0.0)));
        assert_eq!(valid_unit(&ten, Units::LENGTH, true), None);
        assert_eq!(valid_unit(&ten, Units::LENGTH, false), Some(Value::px(10.0)));
        assert_eq!(valid_unit(&ten, Units::INTEGER, true), Some(Value::number(10.0)));

        let negative = ParsedValue::Dimension { value: -1.0, unit: Unit::Px, raw: "-1px".into() };
        assert_eq!(valid_unit(&negative, Units::LENGTH | Units::NON_NEGATIVE, true), None);

        let angle = ParsedValue::Dimension { value: 1.0, unit: Unit::Deg, raw: "1deg".into() };
        assert_eq!(valid_unit(&angle, Units::LENGTH | Units::NUMBER, true), None);
    }

    #[test]
    fn test_four_value_expansion() {
        let sides = [P::PaddingTop, P::PaddingRight, P::PaddingBottom, P::PaddingLeft];
        let cases: [(&str, [f32; 4]); 4] = [
            ("1px", [1.0, 1.0, 1.0, 1.0]),
            ("1px 2px", [1.0, 2.0, 1.0, 2.0]),
            ("1px 2px 3px", [1.0, 2.0, 3.0, 2.0]),
            ("1px 2px 3px 4px", [1.0, 2.0, 3.0, 4.0]),
        ];
        for (css, expected) in cases {
            let decls = parse(P::Padding, css, true).expect(css);
            for (side, px) in sides.iter().zip(expected) {
                assert_eq!(value_of(&decls, *side), Some(&Value::px(px)), "{css} {side}");
            }
        }
        assert!(parse(P::Padding, "1px 2px 3px 4px 5px", true).is_none());
    }

    #[test]
    fn test_shorthand_is_all_or_nothing() {
        assert!(parse(P::Margin, "10px garbage 5px", true).is_none());
        assert!(parse(P::Border, "1px solid nonsense", true).is_none());
    }

    #[test]
    fn test_border_shorthand_fills_initial() {
        let decls = parse(P::Border, "solid 2px", true).expect("border");
        assert_eq!(value_of(&decls, P::BorderLeftStyle), Some(&Value::Keyword(K::Solid)));
        assert_eq!(value_of(&decls, P::BorderTopWidth), Some(&Value::px(2.0)));
        assert_eq!(value_of(&decls, P::BorderBottomColor), Some(&Value::Initial));
        assert_eq!(decls.len(), 12);
    }

    #[test]
    fn test_inherit_must_stand_alone() {
        let decls = parse(P::Margin, "inherit", true).expect("inherit");
        assert_eq!(decls, vec![Declaration::new(P::Margin, Value::Inherit, false)]);
        assert!(parse(P::Margin, "inherit 1px", true).is_none());
    }

    #[test]
    fn test_trailing_components_rejected() {
        assert!(parse(P::Width, "10px 20px", true).is_none());
        assert!(parse(P::Color, "red blue", true).is_none());
    }

    #[test]
    fn test_quirks_colors() {
        let quirk = parse(P::Color, "000080", false).expect("quirks color");
        let hashed = parse(P::Color, "#000080", false).expect("hash color");
        assert_eq!(quirk, hashed);
        assert_eq!(value_of(&quirk, P::Color), Some(&Value::Color(Color::rgb(0, 0, 128))));
        assert!(parse(P::Color, "000080", true).is_none());
        assert!(parse(P::Color, "ff0000", true).is_none());
        assert!(parse(P::Color, "grey", true).is_none());
        assert!(parse(P::Color, "grey", false).is_some());
    }

    #[test]
    fn test_quirks_colors_with_exponent_digits() {
        let exponent = parse(P::Color, "000e00", false).expect("quirks color");
        assert_eq!(value_of(&exponent, P::Color), Some(&Value::Color(Color::rgb(0, 14, 0))));
        let short = parse(P::Color, "1e3", false).expect("quirks color");
        assert_eq!(value_of(&short, P::Color), Some(&Value::Color(Color::rgb(0x11, 0xee, 0x33))));
        let upper = parse(P::Color, "00E000", false).expect("quirks color");
        assert_eq!(value_of(&upper, P::Color), Some(&Value::Color(Color::rgb(0, 0xe0, 0))));
        assert!(parse(P::Color, "000e00", true).is_none());
        assert!(parse(P::Color, "1e5e", false).is_none());
    }

    #[test]
    fn test_functional_colors() {
        assert_eq!(parse_color_string("rgb(255, 0, 0)", true), Some(Color::rgb(255, 0, 0)));
        assert_eq!(parse_color_string("rgb(100%, 0%, 50%)", true), Some(Color::rgb(255, 0, 128)));
        assert_eq!(parse_color_string("rgba(0, 0, 0, 0.5)", true), Some(Color::rgba(0, 0, 0, 127)));
        assert_eq!(parse_color_string("rgb(1, 2)", true), None);
        assert_eq!(parse_color_string("navy", true), Some(Color::rgb(0, 0, 128)));
        assert_eq!(parse_color_string("f00", false), Some(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn test_font_shorthand() {
        let decls = parse(P::Font, "italic bold 12px/1.5 \"Helvetica Neue\", sans-serif", true)
            .expect("font");
        assert_eq!(value_of(&decls, P::FontStyle), Some(&Value::Keyword(K::Italic)));
        assert_eq!(value_of(&decls, P::FontVariant), Some(&Value::Keyword(K::Normal)));
        assert_eq!(value_of(&decls, P::FontWeight), Some(&Value::Keyword(K::Bold)));
        assert_eq!(value_of(&decls, P::FontSize), Some(&Value::px(12.0)));
        assert_eq!(value_of(&decls, P::LineHeight), Some(&Value::number(1.5)));
        assert_eq!(
            value_of(&decls, P::FontFamily),
            Some(&Value::List(vec![
                Value::String("Helvetica Neue".into()),
                Value::Keyword(K::SansSerif),
            ]))
        );

        assert!(parse(P::Font, "bold", true).is_none());
        assert!(parse(P::Font, "12px", true).is_none());
        assert!(parse(P::Font, "caption", true).is_none());
    }

    #[test]
    fn test_font_family_identifier_runs() {
        let decls = parse(P::FontFamily, "Times New Roman, serif", true).expect("family");
        assert_eq!(
            value_of(&decls, P::FontFamily),
            Some(&Value::List(vec![
                Value::String("Times New Roman".into()),
                Value::Keyword(K::Serif),
            ]))
        );
    }

    #[test]
    fn test_font_weight() {
        assert!(parse(P::FontWeight, "700", true).is_some());
        assert!(parse(P::FontWeight, "750", true).is_none());
        assert!(parse(P::FontWeight, "1000", true).is_none());
        assert!(parse(P::FontWeight, "lighter", true).is_some());
    }

    #[test]
    fn test_background_shorthand() {
        let decls = parse(P::Background, "url(a.png) no-repeat right top #fff", true).expect("bg");
        assert_eq!(value_of(&decls, P::BackgroundImage), Some(&Value::Uri("a.png".into())));
        assert_eq!(value_of(&decls, P::BackgroundRepeat), Some(&Value::Keyword(K::NoRepeat)));
        assert_eq!(value_of(&decls, P::BackgroundAttachment), Some(&Value::Initial));
        assert_eq!(value_of(&decls, P::BackgroundPositionX), Some(&Value::percent(100.0)));
        assert_eq!(value_of(&decls, P::BackgroundPositionY), Some(&Value::percent(0.0)));
        assert_eq!(value_of(&decls, P::BackgroundColor), Some(&Value::Color(Color::WHITE)));
    }

    #[test]
    fn test_background_layers() {
        let decls = parse(P::Background, "url(a.png) repeat-x, url(b.png)", true).expect("layers");
        assert_eq!(
            value_of(&decls, P::BackgroundImage),
            Some(&Value::List(vec![Value::Uri("a.png".into()), Value::Uri("b.png".into())]))
        );
        assert_eq!(
            value_of(&decls, P::BackgroundRepeat),
            Some(&Value::List(vec![Value::Keyword(K::RepeatX), Value::Initial]))
        );
        // color is only allowed in the final layer
        assert!(parse(P::Background, "red url(a.png), url(b.png)", true).is_none());
    }

    #[test]
    fn test_background_position_swaps_vertical_first() {
        let decls = parse(P::BackgroundPosition, "bottom left", true).expect("position");
        assert_eq!(value_of(&decls, P::BackgroundPositionX), Some(&Value::percent(0.0)));
        assert_eq!(value_of(&decls, P::BackgroundPositionY), Some(&Value::percent(100.0)));
        assert!(parse(P::BackgroundPosition, "left 10px 20px", true).is_none());
    }

    #[test]
    fn test_text_shadow() {
        let decls = parse(P::TextShadow, "1px 2px red, blue 3px 4px 5px", true).expect("shadow");
        let Some(Value::Shadows(shadows)) = value_of(&decls, P::TextShadow) else {
            panic!("no shadows");
        };
        assert_eq!(shadows.len(), 2);
        assert_eq!(shadows[0].color, Some(Value::Keyword(K::Red)));
        assert_eq!(shadows[1].blur, Some(Value::px(5.0)));
        assert!(parse(P::TextShadow, "1px", true).is_none());
        assert!(parse(P::TextShadow, "1px, 2px 3px", true).is_none());
    }

    #[test]
    fn test_text_decoration() {
        let decls = parse(P::TextDecoration, "underline blink overline", true).expect("deco");
        assert_eq!(
            value_of(&decls, P::TextDecoration),
            Some(&Value::List(vec![Value::Keyword(K::Underline), Value::Keyword(K::Overline)]))
        );
        assert!(parse(P::TextDecoration, "blink", true).is_none());
        assert!(parse(P::TextDecoration, "underline bold", true).is_none());
    }

    #[test]
    fn test_clip_and_content() {
        let decls = parse(P::Clip, "rect(1px, auto, 3px, 4px)", true).expect("clip");
        let Some(Value::Rect(rect)) = value_of(&decls, P::Clip) else {
            panic!("no rect");
        };
        assert_eq!(rect.right, Value::Keyword(K::Auto));
        assert!(parse(P::Clip, "rect(1px 2px 3px 4px)", true).is_some());
        assert!(parse(P::Clip, "rect(1px 2px 3px)", true).is_none());

        let decls = parse(P::Content, "\"[\" attr(title) \"]\"", true).expect("content");
        assert_eq!(
            value_of(&decls, P::Content),
            Some(&Value::List(vec![
                Value::String("[".into()),
                Value::Attr("title".into()),
                Value::String("]".into()),
            ]))
        );
    }

    #[test]
    fn test_quirks_only_values() {
        assert!(parse(P::Cursor, "hand", true).is_none());
        assert_eq!(
            parse(P::Cursor, "hand", false).as_deref().and_then(|d| value_of(d, P::Cursor)),
            Some(&Value::Keyword(K::Pointer))
        );
        assert!(parse(P::ScrollbarFaceColor, "red", true).is_none());
        assert!(parse(P::ScrollbarFaceColor, "red", false).is_some());
        assert!(parse(P::Width, "10", true).is_none());
        assert!(parse(P::Width, "10", false).is_some());
    }

    #[test]
    fn test_pairs() {
        let decls = parse(P::BorderSpacing, "2px", true).expect("spacing");
        assert_eq!(value_of(&decls, P::KhtmlBorderVerticalSpacing), Some(&Value::px(2.0)));
        let decls = parse(P::KhtmlMarginCollapse, "collapse discard", true).expect("collapse");
        assert_eq!(
            value_of(&decls, P::KhtmlMarginBottomCollapse),
            Some(&Value::Keyword(K::Discard))
        );
        assert!(parse(P::BorderSpacing, "1px 2px 3px", true).is_none());
    }

    #[test]
    fn test_marquee_shorthand() {
        let decls = parse(P::KhtmlMarquee, "alternate 10px infinite", true).expect("marquee");
        assert_eq!(value_of(&decls, P::KhtmlMarqueeStyle), Some(&Value::Keyword(K::Alternate)));
        assert_eq!(value_of(&decls, P::KhtmlMarqueeIncrement), Some(&Value::px(10.0)));
        assert_eq!(
            value_of(&decls, P::KhtmlMarqueeRepetition),
            Some(&Value::Keyword(K::Infinite))
        );
        assert_eq!(value_of(&decls, P::KhtmlMarqueeSpeed), Some(&Value::Initial));
    }
}
