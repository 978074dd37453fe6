//! Tokenized property values
//!
//! A declaration value is first read from the `cssparser` token stream into a
//! flat list of components. Property grammars then walk the list with a cursor,
//! so a shorthand can look ahead and back off without re-tokenizing.

use cssparser::{ParseError, Parser, Token};

use crate::values::Unit;

/// One component of a declaration value
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedValue {
    /// Identifier, case preserved
    Ident(String),
    /// `raw` keeps the source text for quirks hex colors
    Number { value: f32, integer: bool, raw: String },
    /// Percentage in percent (`50%` is `50.0`)
    Percentage(f32),
    /// Number with a unit suffix; `raw` keeps the source text for quirks hex colors
    Dimension { value: f32, unit: Unit, raw: String },
    String(String),
    Uri(String),
    /// Hash token without the leading `#`
    Hash(String),
    /// `,` or `/`
    Operator(char),
    Function { name: String, args: ValueList },
}

impl ParsedValue {
    /// Identifier text, if this is an identifier
    #[inline]
    pub fn ident(&self) -> Option<&str> {
        match self {
            Self::Ident(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn is_operator(&self, op: char) -> bool {
        matches!(self, Self::Operator(c) if *c == op)
    }

    /// Numeric magnitude and unit
    pub fn numeric(&self) -> Option<(f32, Unit)> {
        match self {
            Self::Number { value, .. } => Some((*value, Unit::Number)),
            Self::Percentage(v) => Some((*v, Unit::Percent)),
            Self::Dimension { value, unit, .. } => Some((*value, *unit)),
            _ => None,
        }
    }
}

/// Cursor over the components of one value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueList {
    values: Vec<ParsedValue>,
    pos: usize,
}

impl ValueList {
    pub fn new(values: Vec<ParsedValue>) -> Self {
        Self { values, pos: 0 }
    }

    /// Read components until the parser is exhausted
    pub fn parse<'i>(input: &mut Parser<'i, '_>) -> Result<Self, ParseError<'i, ()>> {
        let mut values = Vec::new();
        loop {
            input.skip_whitespace();
            let start = input.position();
            let token = match input.next() {
                Ok(token) => token.clone(),
                Err(_) => break,
            };
            let value = match token {
                Token::Ident(name) => ParsedValue::Ident(name.to_string()),
                Token::Number { value, int_value, .. } => ParsedValue::Number {
                    value,
                    integer: int_value.is_some(),
                    raw: input.slice_from(start).trim().to_string(),
                },
                Token::Percentage { unit_value, .. } => ParsedValue::Percentage(unit_value * 100.0),
                Token::Dimension { value, ref unit, .. } => ParsedValue::Dimension {
                    value,
                    unit: Unit::from_suffix(unit),
                    raw: input.slice_from(start).trim().to_string(),
                },
                Token::QuotedString(s) => ParsedValue::String(s.to_string()),
                Token::UnquotedUrl(s) => ParsedValue::Uri(s.to_string()),
                Token::Hash(s) | Token::IDHash(s) => ParsedValue::Hash(s.to_string()),
                Token::Comma => ParsedValue::Operator(','),
                Token::Delim('/') => ParsedValue::Operator('/'),
                Token::Function(ref name) => {
                    let name = name.to_ascii_lowercase();
                    let args = input.parse_nested_block(|block| ValueList::parse(block))?;
                    if name == "url" {
                        match args.values.as_slice() {
                            [ParsedValue::String(s)] => ParsedValue::Uri(s.clone()),
                            _ => return Err(input.new_custom_error(())),
                        }
                    } else {
                        ParsedValue::Function { name, args }
                    }
                }
                other => return Err(input.new_unexpected_token_error(other)),
            };
            values.push(value);
        }
        Ok(Self::new(values))
    }

    /// Total number of components
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Component under the cursor
    #[inline]
    pub fn current(&self) -> Option<&ParsedValue> {
        self.values.get(self.pos)
    }

    /// Move past the current component and return the new current one
    #[inline]
    pub fn advance(&mut self) -> Option<&ParsedValue> {
        if self.pos < self.values.len() {
            self.pos += 1;
        }
        self.values.get(self.pos)
    }

    /// Component at an absolute index
    #[inline]
    pub fn get(&self, index: usize) -> Option<&ParsedValue> {
        self.values.get(index)
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.values.len());
    }

    /// Every component has been consumed
    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos >= self.values.len()
    }

    /// All components, regardless of the cursor
    #[inline]
    pub fn as_slice(&self) -> &[ParsedValue] {
        &self.values
    }
}
