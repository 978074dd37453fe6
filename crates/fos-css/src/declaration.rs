//! Declaration blocks
//!
//! An ordered list of `(property, value, important)` entries. Entries keep
//! source order and may repeat a property; the last one wins.

use crate::properties::PropertyId;
use crate::values::Value;

/// CSS declaration (property: value)
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: PropertyId,
    pub value: Value,
    pub important: bool,
}

impl Declaration {
    pub fn new(property: PropertyId, value: Value, important: bool) -> Self {
        Self { property, value, important }
    }
}

/// Ordered declaration list of one rule, inline style or attribute mapping
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeclarationBlock {
    declarations: Vec<Declaration>,
}

impl DeclarationBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration
    #[inline]
    pub fn push(&mut self, declaration: Declaration) {
        self.declarations.push(declaration);
    }

    /// Append every declaration of `other`
    pub fn extend(&mut self, other: DeclarationBlock) {
        self.declarations.extend(other.declarations);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Declarations in source order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.declarations.iter()
    }

    /// Effective declaration for a property (last occurrence)
    pub fn get(&self, property: PropertyId) -> Option<&Declaration> {
        self.declarations.iter().rev().find(|d| d.property == property)
    }

    /// Effective value for a property
    #[inline]
    pub fn value(&self, property: PropertyId) -> Option<&Value> {
        self.get(property).map(|d| &d.value)
    }

    /// Whether the effective declaration of a property is `!important`
    pub fn is_important(&self, property: PropertyId) -> bool {
        self.get(property).is_some_and(|d| d.important)
    }

    /// Drop every entry for a property
    pub fn remove(&mut self, property: PropertyId) -> bool {
        let before = self.declarations.len();
        self.declarations.retain(|d| d.property != property);
        before != self.declarations.len()
    }
}

impl<'a> IntoIterator for &'a DeclarationBlock {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
