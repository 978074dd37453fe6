//! fOS CSS Parser & Style System
//!
//! CSS parsing, selector matching and the cascade that turns matched
//! declarations into a computed style for every element.

pub mod keywords;
pub mod values;
pub mod properties;
pub mod declaration;
pub mod value_list;
pub mod property_parser;
pub mod parser;
pub mod selectors;
pub mod stylesheet;
pub mod rule_set;
pub mod matcher;
pub mod computed;
pub mod font_size;
pub mod applier;
pub mod adjust;
pub mod presentational;
pub mod style_sharing;
pub mod resolver;
pub mod config;

pub use computed::ComputedStyle;
pub use config::StyleConfig;
pub use declaration::{Declaration, DeclarationBlock};
pub use font_size::{DefaultFontMetrics, FontMetrics};
pub use keywords::Keyword;
pub use matcher::{HistoryOracle, NoHistory, PseudoState, VisitedLinks};
pub use parser::CssParser;
pub use properties::PropertyId;
pub use resolver::StyleResolver;
pub use rule_set::RuleSet;
pub use selectors::{PseudoElement, Selector};
pub use style_sharing::{SharingStats, StyleMap};
pub use stylesheet::StyleSheet;
pub use values::{Color, Unit, Value};

/// Parse a CSS stylesheet in strict mode
pub fn parse_stylesheet(css: &str) -> StyleSheet {
    CssParser::new().parse(css)
}

/// CSS parsing error
#[derive(Debug, thiserror::Error)]
pub enum CssError {
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: u32, message: String },
    #[error("Unknown property: {0}")]
    UnknownProperty(String),
    #[error("Invalid value for {property}: {value}")]
    InvalidValue { property: String, value: String },
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
}
