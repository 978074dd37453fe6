//! Stylesheet object model
//!
//! Parsed sheets keep their top-level rules in source order. `@import` and
//! `@media` rules carry the media list that decides whether their rules take
//! part in the cascade for a given medium.

use std::sync::Arc;

use cssparser::{Parser, Token};

use crate::declaration::DeclarationBlock;
use crate::selectors::Selector;

/// Comma separated list of media types. An empty list means `all`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaList {
    media: Vec<String>,
}

impl MediaList {
    /// List that matches every medium
    pub fn all() -> Self {
        Self::default()
    }

    /// Parse a `media` attribute value such as `"screen, print"`
    pub fn from_text(text: &str) -> Self {
        let media = text
            .split(',')
            .map(|m| m.trim().to_ascii_lowercase())
            .filter(|m| !m.is_empty())
            .collect();
        Self { media }
    }

    /// Read media type identifiers from an at-rule prelude
    pub(crate) fn parse(input: &mut Parser<'_, '_>) -> Self {
        let mut media = Vec::new();
        while let Ok(token) = input.next() {
            if let Token::Ident(name) = token {
                media.push(name.to_ascii_lowercase());
            }
        }
        Self { media }
    }

    /// Whether rules under this list apply to `medium`
    pub fn contains(&self, medium: &str) -> bool {
        self.media.is_empty()
            || self
                .media
                .iter()
                .any(|m| m == "all" || m.eq_ignore_ascii_case(medium))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.media.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.media.iter().map(String::as_str)
    }
}

/// Selector group with its declarations
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub selectors: Vec<Selector>,
    pub declarations: DeclarationBlock,
}

impl StyleRule {
    pub fn new(selectors: Vec<Selector>, declarations: DeclarationBlock) -> Self {
        Self { selectors, declarations }
    }
}

/// `@import url(...) media;`
#[derive(Debug, Clone)]
pub struct ImportRule {
    pub href: String,
    pub media: MediaList,
    /// Filled in by the loader once the sheet has been fetched and parsed
    pub sheet: Option<Arc<StyleSheet>>,
}

/// `@media list { rules }`
#[derive(Debug, Clone)]
pub struct MediaRule {
    pub media: MediaList,
    pub rules: Vec<CssRule>,
}

/// A rule in a stylesheet
#[derive(Debug, Clone)]
pub enum CssRule {
    Style(Arc<StyleRule>),
    Import(ImportRule),
    Media(MediaRule),
}

impl CssRule {
    /// Style rule, if this is one
    pub fn as_style(&self) -> Option<&Arc<StyleRule>> {
        match self {
            Self::Style(rule) => Some(rule),
            _ => None,
        }
    }
}

/// Parsed stylesheet
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    pub rules: Vec<CssRule>,
    /// Media the whole sheet applies to (`<link media>` / `<style media>`)
    pub media: MediaList,
}

impl StyleSheet {
    pub fn new(rules: Vec<CssRule>) -> Self {
        Self {
            rules,
            media: MediaList::all(),
        }
    }

    /// Restrict the sheet to a media list
    pub fn with_media(mut self, media: MediaList) -> Self {
        self.media = media;
        self
    }

    /// Top-level `@import` rules, for the loader to attach fetched sheets
    pub fn imports_mut(&mut self) -> impl Iterator<Item = &mut ImportRule> {
        self.rules.iter_mut().filter_map(|rule| match rule {
            CssRule::Import(import) => Some(import),
            _ => None,
        })
    }

    /// Style rules in source order, including those nested in `@media`
    /// blocks that apply to `medium` and in loaded imports
    pub fn style_rules(&self, medium: &str) -> Vec<Arc<StyleRule>> {
        let mut out = Vec::new();
        if self.media.contains(medium) {
            collect_style_rules(&self.rules, medium, &mut out);
        }
        out
    }
}

fn collect_style_rules(rules: &[CssRule], medium: &str, out: &mut Vec<Arc<StyleRule>>) {
    for rule in rules {
        match rule {
            CssRule::Style(style) => out.push(Arc::clone(style)),
            CssRule::Import(import) => {
                if let Some(sheet) = &import.sheet {
                    if import.media.contains(medium) && sheet.media.contains(medium) {
                        collect_style_rules(&sheet.rules, medium, out);
                    }
                }
            }
            CssRule::Media(media) => {
                if media.media.contains(medium) {
                    collect_style_rules(&media.rules, medium, out);
                }
            }
        }
    }
}
