//! CSS Parser using cssparser
//!
//! Turns stylesheet, rule and declaration text into the internal model.
//! Invalid declarations and rules are dropped and logged; the rest of the
//! input is still parsed.

use std::sync::Arc;

use cssparser::{
    AtRuleParser, BasicParseErrorKind, CowRcStr, DeclarationParser, Delimiter, ParseError, Parser,
    ParserInput, ParserState, QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser,
    StyleSheetParser,
};
use tracing::{debug, trace};

use crate::CssError;
use crate::declaration::{Declaration, DeclarationBlock};
use crate::properties::PropertyId;
use crate::property_parser::{parse_color_string, parse_property};
use crate::selectors::{Selector, parse_selector_group};
use crate::stylesheet::{CssRule, ImportRule, MediaList, MediaRule, StyleRule, StyleSheet};
use crate::value_list::ValueList;
use crate::values::Color;

/// CSS Parser
///
/// Strict parsing follows CSS2.1. Quirks parsing additionally accepts unitless
/// lengths, hex colors without `#` and a few legacy keywords.
#[derive(Debug, Clone, Copy)]
pub struct CssParser {
    strict: bool,
}

impl Default for CssParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CssParser {
    /// Strict parser
    pub fn new() -> Self {
        Self { strict: true }
    }

    /// Parser for quirks-mode documents
    pub fn quirks() -> Self {
        Self { strict: false }
    }

    pub fn with_strict(strict: bool) -> Self {
        Self { strict }
    }

    #[inline]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Parse a CSS stylesheet
    pub fn parse(&self, css: &str) -> StyleSheet {
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        let mut top = TopLevelRuleParser {
            strict: self.strict,
            nested: false,
        };
        let rules = collect_rules(StyleSheetParser::new(&mut parser, &mut top));
        debug!(rules = rules.len(), strict = self.strict, "parsed stylesheet");
        StyleSheet::new(rules)
    }

    /// Parse a single rule
    pub fn parse_rule(&self, text: &str) -> Result<CssRule, CssError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        let mut top = TopLevelRuleParser {
            strict: self.strict,
            nested: false,
        };
        cssparser::parse_one_rule(&mut parser, &mut top).map_err(|e| CssError::ParseError {
            line: e.location.line + 1,
            message: format!("{:?}", e.kind),
        })
    }

    /// Parse a selector group such as `h1, .note > p`
    pub fn parse_selectors(&self, text: &str) -> Result<Vec<Selector>, CssError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        parser
            .parse_entirely(parse_selector_group)
            .map_err(|_| CssError::InvalidSelector(text.trim().to_string()))
    }

    /// Parse the contents of a `style` attribute or a rule body.
    ///
    /// Invalid declarations are skipped.
    pub fn parse_declaration_block(&self, text: &str) -> DeclarationBlock {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        parse_declarations(&mut parser, self.strict)
    }

    /// Parse one property value, expanding shorthands
    pub fn parse_value(
        &self,
        name: &str,
        value: &str,
        important: bool,
    ) -> Result<Vec<Declaration>, CssError> {
        let property =
            PropertyId::from_name(name).ok_or_else(|| CssError::UnknownProperty(name.to_string()))?;
        let invalid = || CssError::InvalidValue {
            property: property.name().to_string(),
            value: value.to_string(),
        };
        let mut input = ParserInput::new(value);
        let mut parser = Parser::new(&mut input);
        let values = parser.parse_entirely(ValueList::parse).map_err(|_| invalid())?;
        parse_property(property, values, important, self.strict).ok_or_else(invalid)
    }

    /// Parse a color string (`#rgb`, `#rrggbb`, names, `rgb()`, `rgba()`)
    pub fn parse_color(&self, text: &str) -> Option<Color> {
        parse_color_string(text, self.strict)
    }
}

fn collect_rules<'i, P>(rules: StyleSheetParser<'i, '_, '_, P>) -> Vec<CssRule>
where
    P: QualifiedRuleParser<'i, QualifiedRule = CssRule, Error = ()>
        + AtRuleParser<'i, AtRule = CssRule, Error = ()>,
{
    let mut out = Vec::new();
    for result in rules {
        match result {
            Ok(rule) => out.push(rule),
            Err((error, text)) => {
                trace!(line = error.location.line + 1, rule = text, "dropped invalid rule");
            }
        }
    }
    out
}

fn parse_declarations(input: &mut Parser<'_, '_>, strict: bool) -> DeclarationBlock {
    let mut block = DeclarationBlock::new();
    let mut body = DeclarationListParser { strict };
    for result in RuleBodyParser::new(input, &mut body) {
        match result {
            Ok(declarations) => {
                for declaration in declarations {
                    block.push(declaration);
                }
            }
            Err((_, text)) => trace!(declaration = text.trim(), "dropped invalid declaration"),
        }
    }
    block
}

enum AtRulePrelude {
    Import { href: String, media: MediaList },
    Media(MediaList),
}

/// Rule list parser for the top level and `@media` blocks
struct TopLevelRuleParser {
    strict: bool,
    /// Inside `@media`, where `@import` is not allowed
    nested: bool,
}

impl<'i> AtRuleParser<'i> for TopLevelRuleParser {
    type Prelude = AtRulePrelude;
    type AtRule = CssRule;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        if name.eq_ignore_ascii_case("import") && !self.nested {
            let href = input.expect_url_or_string()?.as_ref().to_string();
            let media = MediaList::parse(input);
            Ok(AtRulePrelude::Import { href, media })
        } else if name.eq_ignore_ascii_case("media") {
            Ok(AtRulePrelude::Media(MediaList::parse(input)))
        } else {
            debug!(at_rule = %name, "skipping unsupported at-rule");
            Err(input.new_error(BasicParseErrorKind::AtRuleInvalid(name)))
        }
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::AtRule, ParseError<'i, Self::Error>> {
        match prelude {
            AtRulePrelude::Media(media) => {
                let mut nested = TopLevelRuleParser {
                    strict: self.strict,
                    nested: true,
                };
                let rules = collect_rules(StyleSheetParser::new(input, &mut nested));
                Ok(CssRule::Media(MediaRule { media, rules }))
            }
            AtRulePrelude::Import { .. } => Err(input.new_error(BasicParseErrorKind::AtRuleBodyInvalid)),
        }
    }

    fn rule_without_block(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
    ) -> Result<Self::AtRule, ()> {
        match prelude {
            AtRulePrelude::Import { href, media } => Ok(CssRule::Import(ImportRule {
                href,
                media,
                sheet: None,
            })),
            AtRulePrelude::Media(_) => Err(()),
        }
    }
}

impl<'i> QualifiedRuleParser<'i> for TopLevelRuleParser {
    type Prelude = Vec<Selector>;
    type QualifiedRule = CssRule;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        parse_selector_group(input)
    }

    fn parse_block<'t>(
        &mut self,
        selectors: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        let declarations = parse_declarations(input, self.strict);
        Ok(CssRule::Style(Arc::new(StyleRule::new(selectors, declarations))))
    }
}

/// Declaration list parser; one declaration may expand to several longhands
struct DeclarationListParser {
    strict: bool,
}

impl<'i> DeclarationParser<'i> for DeclarationListParser {
    type Declaration = Vec<Declaration>;
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
        _start: &ParserState,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let Some(property) = PropertyId::from_name(&name) else {
            return Err(input.new_custom_error(()));
        };
        let values = input.parse_until_before(Delimiter::Bang, ValueList::parse)?;
        let important = input.try_parse(cssparser::parse_important).is_ok();
        input.expect_exhausted()?;
        parse_property(property, values, important, self.strict).ok_or_else(|| input.new_custom_error(()))
    }
}

impl<'i> AtRuleParser<'i> for DeclarationListParser {
    type Prelude = ();
    type AtRule = Vec<Declaration>;
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for DeclarationListParser {
    type Prelude = ();
    type QualifiedRule = Vec<Declaration>;
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, Vec<Declaration>, ()> for DeclarationListParser {
    fn parse_declarations(&self) -> bool {
        true
    }

    fn parse_qualified(&self) -> bool {
        false
    }
}
