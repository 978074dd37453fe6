//! CSS Selectors
//!
//! Selector model and grammar. A selector is stored as a chain of simple
//! selectors that starts at the subject. Every link records how it relates to
//! the next simple selector to its left: another test on the same element, or
//! a combinator that moves to an ancestor or sibling.

use cssparser::{BasicParseErrorKind, ParseError, Parser, ParserInput, Token};

/// Tag or attribute name, kept as written and lowercased.
///
/// HTML elements compare against the lowercase form, other elements against
/// the name as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalName {
    name: Box<str>,
    lower: Box<str>,
}

impl LocalName {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            lower: name.to_ascii_lowercase().into(),
        }
    }

    /// Name as written
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Form to compare against, depending on the element's namespace
    #[inline]
    pub fn for_element(&self, is_html: bool) -> &str {
        if is_html { &self.lower } else { &self.name }
    }
}

/// Relation between a simple selector and the next one in the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// `a b`
    Descendant,
    /// `a > b`
    Child,
    /// `a + b`
    Sibling,
    /// Another test on the same element (`a.b`)
    SubSelector,
}

/// Attribute selector operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrMatch {
    /// `[attr]`
    Exists,
    /// `[attr=v]`
    Exact,
    /// `[attr~=v]`
    List,
    /// `[attr|=v]`
    Hyphen,
    /// `[attr^=v]`
    Begin,
    /// `[attr$=v]`
    End,
    /// `[attr*=v]`
    Contain,
}

/// Pseudo-element a style can be resolved for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PseudoElement {
    FirstLine,
    FirstLetter,
    Before,
    After,
    Selection,
}

impl PseudoElement {
    pub const ALL: [PseudoElement; 5] = [
        PseudoElement::FirstLine,
        PseudoElement::FirstLetter,
        PseudoElement::Before,
        PseudoElement::After,
        PseudoElement::Selection,
    ];

    #[inline]
    pub fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Pseudo-class or pseudo-element name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PseudoKind {
    /// Unsupported name; never matches
    Other,
    Empty,
    FirstChild,
    LastChild,
    OnlyChild,
    FirstLine,
    FirstLetter,
    Link,
    Visited,
    AnyLink,
    Hover,
    Focus,
    Active,
    Target,
    Lang,
    Root,
    Selection,
    Before,
    After,
}

impl PseudoKind {
    /// Look up a pseudo name (ASCII case-insensitive)
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "empty" => Self::Empty,
            "first-child" => Self::FirstChild,
            "last-child" => Self::LastChild,
            "only-child" => Self::OnlyChild,
            "first-line" => Self::FirstLine,
            "first-letter" => Self::FirstLetter,
            "link" => Self::Link,
            "visited" => Self::Visited,
            "any-link" | "-khtml-any-link" => Self::AnyLink,
            "hover" => Self::Hover,
            "focus" => Self::Focus,
            "active" => Self::Active,
            "target" => Self::Target,
            "root" => Self::Root,
            "selection" => Self::Selection,
            "before" => Self::Before,
            "after" => Self::After,
            _ => Self::Other,
        }
    }

    /// Pseudo-element this name selects, if any
    pub fn pseudo_element(self) -> Option<PseudoElement> {
        Some(match self {
            Self::FirstLine => PseudoElement::FirstLine,
            Self::FirstLetter => PseudoElement::FirstLetter,
            Self::Before => PseudoElement::Before,
            Self::After => PseudoElement::After,
            Self::Selection => PseudoElement::Selection,
            _ => return None,
        })
    }
}

/// The test a simple selector performs besides its tag
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorTest {
    /// Tag only
    None,
    Id(Box<str>),
    Class(Box<str>),
    Attribute {
        name: LocalName,
        op: AttrMatch,
        value: Box<str>,
    },
    Pseudo {
        kind: PseudoKind,
        /// `:lang(x)` argument
        argument: Option<Box<str>>,
    },
    Not(Box<SimpleSelector>),
}

/// One node of a selector chain
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleSelector {
    /// `None` for the universal selector
    pub tag: Option<LocalName>,
    pub test: SelectorTest,
}

impl SimpleSelector {
    fn universal(test: SelectorTest) -> Self {
        Self { tag: None, test }
    }

    /// Pseudo-element selected by this node, if any
    pub fn pseudo_element(&self) -> Option<PseudoElement> {
        match &self.test {
            SelectorTest::Pseudo { kind, .. } => kind.pseudo_element(),
            _ => None,
        }
    }

    /// Id value tested by this node
    pub fn id(&self) -> Option<&str> {
        match &self.test {
            SelectorTest::Id(id) => Some(id),
            _ => None,
        }
    }

    /// Class value tested by this node
    pub fn class(&self) -> Option<&str> {
        match &self.test {
            SelectorTest::Class(class) => Some(class),
            _ => None,
        }
    }

    fn add_specificity(&self, spec: &mut Specificity) {
        if self.tag.is_some() {
            spec.2 += 1;
        }
        match &self.test {
            SelectorTest::None => {}
            SelectorTest::Id(_) => spec.0 += 1,
            SelectorTest::Class(_) | SelectorTest::Attribute { .. } => spec.1 += 1,
            SelectorTest::Pseudo { kind, .. } => {
                if kind.pseudo_element().is_some() {
                    spec.2 += 1;
                } else {
                    spec.1 += 1;
                }
            }
            SelectorTest::Not(inner) => inner.add_specificity(spec),
        }
    }
}

/// Selector specificity as (ids, classes, tags)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Packed ordering key; each part saturates at 255
    pub fn value(self) -> u32 {
        (self.0.min(255) << 16) | (self.1.min(255) << 8) | self.2.min(255)
    }
}

/// A simple selector and its relation to the rest of the chain
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub simple: SimpleSelector,
    /// `None` on the last (leftmost) node
    pub relation: Option<Combinator>,
}

/// A complex selector, subject first
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    components: Vec<Component>,
    specificity: u32,
}

impl Selector {
    fn new(components: Vec<Component>) -> Self {
        let mut spec = Specificity::default();
        for component in &components {
            component.simple.add_specificity(&mut spec);
        }
        Self {
            components,
            specificity: spec.value(),
        }
    }

    /// Chain from the subject towards the leftmost simple selector
    #[inline]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// The subject's first simple selector, which carries its tag
    #[inline]
    pub fn subject(&self) -> &SimpleSelector {
        &self.components[0].simple
    }

    /// Packed specificity
    #[inline]
    pub fn specificity(&self) -> u32 {
        self.specificity
    }

    /// Pseudo-element of the subject compound, if any
    pub fn pseudo_element(&self) -> Option<PseudoElement> {
        for component in &self.components {
            if let Some(pseudo) = component.simple.pseudo_element() {
                return Some(pseudo);
            }
            if component.relation != Some(Combinator::SubSelector) {
                break;
            }
        }
        None
    }
}

type SelectorResult<'i, T> = Result<T, ParseError<'i, ()>>;

/// Parse a comma separated selector group
pub fn parse_selector_list(text: &str) -> Option<Vec<Selector>> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    parse_selector_group(&mut parser).ok()
}

/// Parse a selector group from a rule prelude. Any invalid selector fails
/// the whole group.
pub(crate) fn parse_selector_group<'i>(input: &mut Parser<'i, '_>) -> SelectorResult<'i, Vec<Selector>> {
    input.parse_comma_separated(parse_selector)
}

fn parse_selector<'i>(input: &mut Parser<'i, '_>) -> SelectorResult<'i, Selector> {
    input.skip_whitespace();
    let mut compounds = vec![parse_compound(input)?];
    let mut combinators = Vec::new();

    loop {
        let mut saw_space = false;
        let combinator = loop {
            let state = input.state();
            match input.next_including_whitespace().cloned() {
                Ok(Token::WhiteSpace(_)) => saw_space = true,
                Ok(Token::Delim('>')) => break Some(Combinator::Child),
                Ok(Token::Delim('+')) => break Some(Combinator::Sibling),
                Ok(_) => {
                    input.reset(&state);
                    break saw_space.then_some(Combinator::Descendant);
                }
                Err(_) => break None,
            }
        };
        let Some(combinator) = combinator else {
            break;
        };
        input.skip_whitespace();
        compounds.push(parse_compound(input)?);
        combinators.push(combinator);
    }
    input.expect_exhausted()?;

    // Pseudo-elements may only end the subject compound
    let last = compounds.len() - 1;
    for (i, compound) in compounds.iter().enumerate() {
        let misplaced = compound
            .iter()
            .enumerate()
            .any(|(j, s)| s.pseudo_element().is_some() && (i != last || j != compound.len() - 1));
        if misplaced {
            return Err(input.new_custom_error(()));
        }
    }

    let mut components = Vec::new();
    for (i, compound) in compounds.into_iter().enumerate().rev() {
        let relation = i.checked_sub(1).map(|prev| combinators[prev]);
        let count = compound.len();
        for (j, simple) in compound.into_iter().enumerate() {
            let relation = if j + 1 < count {
                Some(Combinator::SubSelector)
            } else {
                relation
            };
            components.push(Component { simple, relation });
        }
    }
    Ok(Selector::new(components))
}

/// Type selector followed by any number of specifiers
fn parse_compound<'i>(input: &mut Parser<'i, '_>) -> SelectorResult<'i, Vec<SimpleSelector>> {
    let start = input.state();
    let mut tag = None;
    let mut explicit = false;
    match input.next_including_whitespace().cloned() {
        Ok(Token::Ident(name)) => {
            tag = Some(LocalName::new(&name));
            explicit = true;
        }
        Ok(Token::Delim('*')) => explicit = true,
        _ => input.reset(&start),
    }

    let mut tests = Vec::new();
    loop {
        let state = input.state();
        match input.next_including_whitespace().cloned() {
            Ok(Token::IDHash(id)) => tests.push(SelectorTest::Id(id.as_ref().into())),
            Ok(Token::Delim('.')) => match input.next_including_whitespace().cloned() {
                Ok(Token::Ident(class)) => tests.push(SelectorTest::Class(class.as_ref().into())),
                _ => return Err(input.new_custom_error(())),
            },
            Ok(Token::SquareBracketBlock) => tests.push(input.parse_nested_block(parse_attribute)?),
            Ok(Token::Colon) => tests.push(parse_pseudo(input)?),
            _ => {
                input.reset(&state);
                break;
            }
        }
    }

    if !explicit && tests.is_empty() {
        return Err(input.new_error(BasicParseErrorKind::QualifiedRuleInvalid));
    }

    let mut tests = tests.into_iter();
    let head = SimpleSelector {
        tag,
        test: tests.next().unwrap_or(SelectorTest::None),
    };
    let mut compound = vec![head];
    compound.extend(tests.map(SimpleSelector::universal));
    Ok(compound)
}

/// Contents of `[...]`
fn parse_attribute<'i>(input: &mut Parser<'i, '_>) -> SelectorResult<'i, SelectorTest> {
    input.skip_whitespace();
    let name = LocalName::new(&input.expect_ident_cloned()?);
    let op = match input.next() {
        Err(_) => {
            return Ok(SelectorTest::Attribute {
                name,
                op: AttrMatch::Exists,
                value: "".into(),
            });
        }
        Ok(token) => token.clone(),
    };
    let op = match op {
        Token::Delim('=') => AttrMatch::Exact,
        Token::IncludeMatch => AttrMatch::List,
        Token::DashMatch => AttrMatch::Hyphen,
        Token::PrefixMatch => AttrMatch::Begin,
        Token::SuffixMatch => AttrMatch::End,
        Token::SubstringMatch => AttrMatch::Contain,
        other => return Err(input.new_unexpected_token_error(other)),
    };
    let value = match input.next()?.clone() {
        Token::Ident(v) | Token::QuotedString(v) => v,
        other => return Err(input.new_unexpected_token_error(other)),
    };
    input.expect_exhausted()?;
    Ok(SelectorTest::Attribute {
        name,
        op,
        value: value.as_ref().into(),
    })
}

/// Pseudo-class or pseudo-element after the first `:`
fn parse_pseudo<'i>(input: &mut Parser<'i, '_>) -> SelectorResult<'i, SelectorTest> {
    let mut token = input.next_including_whitespace()?.clone();
    if matches!(token, Token::Colon) {
        token = input.next_including_whitespace()?.clone();
    }
    match token {
        Token::Ident(name) => Ok(SelectorTest::Pseudo {
            kind: PseudoKind::from_name(&name),
            argument: None,
        }),
        Token::Function(name) => match name.to_ascii_lowercase().as_str() {
            "not" => {
                let inner = input.parse_nested_block(parse_negation)?;
                Ok(SelectorTest::Not(Box::new(inner)))
            }
            "lang" => {
                let lang = input.parse_nested_block(|block| -> SelectorResult<'i, _> {
                    block.skip_whitespace();
                    let lang = block.expect_ident_cloned()?;
                    block.skip_whitespace();
                    block.expect_exhausted()?;
                    Ok(lang)
                })?;
                Ok(SelectorTest::Pseudo {
                    kind: PseudoKind::Lang,
                    argument: Some(lang.as_ref().into()),
                })
            }
            _ => {
                input.parse_nested_block(|block| -> SelectorResult<'i, ()> {
                    while block.next().is_ok() {}
                    Ok(())
                })?;
                Ok(SelectorTest::Pseudo {
                    kind: PseudoKind::Other,
                    argument: None,
                })
            }
        },
        other => Err(input.new_unexpected_token_error(other)),
    }
}

/// `:not()` takes exactly one simple selector, which may not be a negation
/// or a pseudo-element
fn parse_negation<'i>(input: &mut Parser<'i, '_>) -> SelectorResult<'i, SimpleSelector> {
    input.skip_whitespace();
    let mut compound = parse_compound(input)?;
    input.skip_whitespace();
    input.expect_exhausted()?;
    let simple = match compound.pop() {
        Some(simple) if compound.is_empty() => simple,
        _ => return Err(input.new_custom_error(())),
    };
    // A type selector with a specifier is two simple selectors
    let two_parts = simple.tag.is_some() && simple.test != SelectorTest::None;
    if two_parts || matches!(simple.test, SelectorTest::Not(_)) || simple.pseudo_element().is_some() {
        return Err(input.new_custom_error(()));
    }
    Ok(simple)
}
