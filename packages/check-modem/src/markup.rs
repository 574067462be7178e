// Copyright (C) 2023 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Just enough markup handling for the diagnostics tables.
//!
//! The modem renders its tables with inline styling (`<td bgcolor=...>`) and
//! bold headers. Only the table vocabulary matters to us, so instead of a
//! full HTML parser we split the text into tags and text runs and look at
//! tag names only. Nothing is validated: anything unexpected passes through.

/// Tags that are reduced to their bare name.
const BARE_TAGS: [&str; 4] = ["table", "tr", "td", "th"];
/// Tags that are dropped while keeping their content.
const UNWRAPPED_TAGS: [&str; 1] = ["b"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<'a> {
    pub raw: &'a str,
    /// Lowercase element name, empty for comments and declarations.
    pub name: String,
    pub closing: bool,
}

impl<'a> Tag<'a> {
    fn parse(raw: &'a str) -> Self {
        let inner = raw.trim_start_matches('<').trim_end_matches('>');
        let closing = inner.starts_with('/');
        let name = inner
            .trim_start_matches('/')
            .chars()
            .take_while(char::is_ascii_alphanumeric)
            .collect::<String>()
            .to_ascii_lowercase();
        Self { raw, name, closing }
    }

    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Text(&'a str),
    Tag(Tag<'a>),
}

pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.rest.is_empty() {
            return None;
        }
        let (token, rest) = match (self.rest.find('<'), self.rest.find('>')) {
            (Some(0), Some(gt)) => {
                let (raw, rest) = self.rest.split_at(gt + 1);
                (Token::Tag(Tag::parse(raw)), rest)
            }
            // A stray '<' without a matching '>' is plain text.
            (Some(0), None) | (None, _) => (Token::Text(self.rest), ""),
            (Some(lt), _) => {
                let (text, rest) = self.rest.split_at(lt);
                (Token::Text(text), rest)
            }
        };
        self.rest = rest;
        Some(token)
    }
}

pub fn tokenize(fragment: &str) -> Tokens<'_> {
    Tokens { rest: fragment }
}

/// Strips attributes from table tags and unwraps bold text.
pub fn normalize(fragment: &str) -> String {
    let mut normalized = String::with_capacity(fragment.len());
    for token in tokenize(fragment) {
        match token {
            Token::Text(text) => normalized.push_str(text),
            Token::Tag(tag) if UNWRAPPED_TAGS.contains(&tag.name.as_str()) => {}
            Token::Tag(tag) if BARE_TAGS.contains(&tag.name.as_str()) => {
                normalized.push('<');
                if tag.closing {
                    normalized.push('/');
                }
                normalized.push_str(&tag.name);
                normalized.push('>');
            }
            Token::Tag(tag) => normalized.push_str(tag.raw),
        }
    }
    normalized
}
