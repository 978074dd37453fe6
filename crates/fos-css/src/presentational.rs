//! Presentational Attributes
//!
//! Legacy HTML attributes such as `bgcolor`, `align` and `<font size>` carry
//! style. They are turned into declarations, parsed in quirks mode, and take
//! part in the cascade between the user and author origins.

use fos_dom::{DomTree, ElementData, NodeId};
use tracing::trace;

use crate::declaration::DeclarationBlock;
use crate::parser::CssParser;

/// Attributes that map to style on some HTML element
const MAPPED_ATTRIBUTES: &[&str] = &[
    "align",
    "background",
    "bgcolor",
    "border",
    "color",
    "dir",
    "face",
    "height",
    "nowrap",
    "size",
    "text",
    "valign",
    "width",
];

/// Whether an attribute name can produce presentational style
#[inline]
pub fn is_mapped_attribute(name: &str) -> bool {
    MAPPED_ATTRIBUTES.iter().any(|a| a.eq_ignore_ascii_case(name))
}

/// Two elements carry the same mapped attributes with the same values, in
/// the same order
pub fn same_mapped_attributes(a: &ElementData, b: &ElementData) -> bool {
    fn mapped(e: &ElementData) -> Vec<(&str, &str)> {
        e.attrs()
            .iter()
            .filter(|attr| is_mapped_attribute(&attr.name))
            .map(|attr| (attr.name.as_str(), attr.value.as_str()))
            .collect()
    }
    mapped(a) == mapped(b)
}

/// Element carries any mapped attribute
pub fn has_mapped_attributes(element: &ElementData) -> bool {
    element.attrs().iter().any(|attr| is_mapped_attribute(&attr.name))
}

/// Declarations produced by the presentational attributes of an element, in
/// attribute order
pub fn presentational_declarations(tree: &DomTree, element: NodeId) -> DeclarationBlock {
    let mut block = DeclarationBlock::new();
    let Some(data) = tree.element(element) else {
        return block;
    };
    if !data.is_html {
        return block;
    }
    let tag = tree.resolve(data.local_name).to_ascii_lowercase();
    let parser = CssParser::quirks();
    for attr in data.attrs() {
        let Some(css) = attribute_css(&tag, &attr.name, attr.value.trim()) else {
            continue;
        };
        trace!(tag, attr = %attr.name, %css, "presentational style");
        block.extend(parser.parse_declaration_block(&css));
    }
    block
}

/// CSS text for one attribute on one element
fn attribute_css(tag: &str, name: &str, value: &str) -> Option<String> {
    // The value is pasted into CSS text; keep it inside its declaration
    if value.contains([';', '{', '}', '!']) {
        return None;
    }
    let css = match name {
        "dir" => match value.to_ascii_lowercase().as_str() {
            dir @ ("ltr" | "rtl") => format!("direction: {dir}; unicode-bidi: embed"),
            _ => return None,
        },
        "bgcolor" if accepts_bgcolor(tag) => format!("background-color: {value}"),
        "background" if matches!(tag, "body" | "table" | "td" | "th") && !value.is_empty() => {
            format!("background-image: url(\"{}\")", value.replace('"', "\\\""))
        }
        "text" if tag == "body" => format!("color: {value}"),
        "color" if tag == "font" => format!("color: {value}"),
        "color" if tag == "hr" => format!("border-style: solid; border-color: {value}; background-color: {value}"),
        "face" if tag == "font" => format!("font-family: {value}"),
        "size" if tag == "font" => format!("font-size: {}", font_size_keyword(value)?),
        "size" if tag == "hr" => {
            let size: i32 = leading_number(value)?.parse::<f32>().ok()? as i32;
            if size <= 1 {
                "border-bottom-width: 0".to_string()
            } else {
                format!("height: {}px", size - 2)
            }
        }
        "align" => align_css(tag, &value.to_ascii_lowercase())?,
        "valign" if is_table_part(tag) => format!("vertical-align: {}", value.to_ascii_lowercase()),
        "width" if accepts_dimensions(tag) || tag == "hr" => format!("width: {}", html_length(value)?),
        "height" if accepts_dimensions(tag) => format!("height: {}", html_length(value)?),
        "border" if tag == "table" => {
            let width = if value.is_empty() { 1 } else { leading_number(value)?.parse::<f32>().ok()? as i32 };
            if width <= 0 {
                "border-width: 0".to_string()
            } else {
                format!("border-width: {width}px; border-style: outset")
            }
        }
        "border" if matches!(tag, "img" | "object" | "input") => {
            format!("border-width: {}; border-style: solid", html_length(value)?)
        }
        "nowrap" if matches!(tag, "td" | "th") => "white-space: nowrap".to_string(),
        _ => return None,
    };
    Some(css)
}

fn accepts_bgcolor(tag: &str) -> bool {
    matches!(tag, "body" | "table" | "marquee") || is_table_part(tag)
}

fn is_table_part(tag: &str) -> bool {
    matches!(
        tag,
        "td" | "th" | "tr" | "thead" | "tbody" | "tfoot" | "col" | "colgroup"
    )
}

fn accepts_dimensions(tag: &str) -> bool {
    matches!(
        tag,
        "table"
            | "td"
            | "th"
            | "col"
            | "colgroup"
            | "img"
            | "iframe"
            | "object"
            | "embed"
            | "applet"
            | "marquee"
            | "canvas"
    )
}

fn is_replaced(tag: &str) -> bool {
    matches!(tag, "img" | "object" | "embed" | "applet" | "iframe" | "input")
}

fn align_css(tag: &str, value: &str) -> Option<String> {
    if tag == "table" {
        return Some(match value {
            "left" | "right" => format!("float: {value}"),
            "center" | "middle" => "margin-left: auto; margin-right: auto".to_string(),
            _ => return None,
        });
    }
    if tag == "hr" {
        return Some(match value {
            "left" => "margin-left: 0; margin-right: auto".to_string(),
            "right" => "margin-left: auto; margin-right: 0".to_string(),
            _ => "margin-left: auto; margin-right: auto".to_string(),
        });
    }
    if is_replaced(tag) {
        let align = match value {
            "left" | "right" => return Some(format!("float: {value}")),
            "absmiddle" | "center" => "middle",
            "middle" => "-khtml-baseline-middle",
            "absbottom" => "bottom",
            "texttop" => "text-top",
            "top" | "bottom" | "baseline" => value,
            _ => return None,
        };
        return Some(format!("vertical-align: {align}"));
    }
    let align = match value {
        "center" | "middle" => "-khtml-center",
        "left" => "-khtml-left",
        "right" => "-khtml-right",
        "justify" => "justify",
        _ => return None,
    };
    Some(format!("text-align: {align}"))
}

/// `<font size>`: 1..7, or relative to 3 when signed
fn font_size_keyword(value: &str) -> Option<&'static str> {
    let relative = matches!(value.as_bytes().first()?, b'+' | b'-');
    let n: i32 = value.trim_start_matches('+').parse().ok()?;
    let size = if relative { 3 + n } else { n };
    Some(match size {
        i32::MIN..=1 => "x-small",
        2 => "small",
        3 => "medium",
        4 => "large",
        5 => "x-large",
        6 => "xx-large",
        _ => "-khtml-xxx-large",
    })
}

/// Digits (and a decimal point) at the start of `value`
fn leading_number(value: &str) -> Option<&str> {
    let end = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(value.len());
    (end > 0).then(|| &value[..end])
}

/// HTML length attribute: pixels, or a percentage when followed by `%`
fn html_length(value: &str) -> Option<String> {
    let number = leading_number(value)?;
    if value[number.len()..].trim_start().starts_with('%') {
        Some(format!("{number}%"))
    } else {
        Some(format!("{number}px"))
    }
}
