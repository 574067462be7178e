// Copyright (C) 2023 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use crate::markup::{tokenize, Token};
use std::error::Error;
use std::fmt::{Display, Formatter, Result as FormatResult};

pub type Row = Vec<String>;

#[derive(Debug, PartialEq, Eq)]
pub enum TableError {
    NoHeader,
}

impl Display for TableError {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        match self {
            Self::NoHeader => write!(f, "Table has no header row"),
        }
    }
}

impl Error for TableError {}

/// One data row keyed by the header row, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelRecord {
    fields: Vec<(String, String)>,
}

impl ChannelRecord {
    /// Pairs header and cells by position. Surplus cells are dropped, missing
    /// cells leave the field out.
    pub fn zip(header: &[String], cells: Row) -> Self {
        Self {
            fields: header.iter().cloned().zip(cells).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(field, value)| (field.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Turns a normalized table fragment into channel records, first row being
/// the header.
pub fn parse(fragment: &str) -> Result<Vec<ChannelRecord>, TableError> {
    let mut rows = rows(fragment).into_iter();
    let header = rows.next().ok_or(TableError::NoHeader)?;
    Ok(rows.map(|cells| ChannelRecord::zip(&header, cells)).collect())
}

#[derive(Default)]
struct RowCollector {
    rows: Vec<Row>,
    row: Option<Row>,
    cell: Option<String>,
}

impl RowCollector {
    fn open_row(&mut self) {
        self.close_row();
        self.row = Some(Row::new());
    }

    fn open_cell(&mut self) {
        self.close_cell();
        if self.row.is_none() {
            self.row = Some(Row::new());
        }
        self.cell = Some(String::new());
    }

    fn text(&mut self, text: &str) {
        if let Some(cell) = self.cell.as_mut() {
            cell.push_str(text);
        }
    }

    fn close_cell(&mut self) {
        if let (Some(cell), Some(row)) = (self.cell.take(), self.row.as_mut()) {
            row.push(clean_text(&cell));
        }
    }

    fn close_row(&mut self) {
        self.close_cell();
        match self.row.take() {
            Some(row) if !row.is_empty() => self.rows.push(row),
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<Row> {
        self.close_row();
        self.rows
    }
}

/// Collects the cell texts of every non-empty `<tr>`. Closing tags are
/// optional, markup other than rows and cells is skipped.
pub fn rows(fragment: &str) -> Vec<Row> {
    let mut collector = RowCollector::default();
    for token in tokenize(fragment) {
        match token {
            Token::Text(text) => collector.text(text),
            Token::Tag(tag) if tag.is("tr") && !tag.closing => collector.open_row(),
            Token::Tag(tag) if tag.is("tr") || tag.is("table") => collector.close_row(),
            Token::Tag(tag) if tag.is("td") || tag.is("th") => {
                if tag.closing {
                    collector.close_cell()
                } else {
                    collector.open_cell()
                }
            }
            Token::Tag(_) => {}
        }
    }
    collector.finish()
}

/// Decodes entities and trims the cell, inner blanks are kept as sent.
fn clean_text(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
        .trim()
        .to_string()
}


#[cfg(test)]
mod test_parse {
    use super::*;

    #[test]
    fn test_two_rows() {
        let records =
            parse("<table><tr><td>Channel</td><td>Power</td></tr><tr><td>1</td><td>5.2 dBmV</td></tr></table>")
                .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].fields().collect::<Vec<_>>(),
            vec![("Channel", "1"), ("Power", "5.2 dBmV")]
        );
        assert_eq!(records[0].get("Power"), Some("5.2 dBmV"));
        assert_eq!(records[0].get("SNR"), None);
    }

    #[test]
    fn test_row_order_is_kept() {
        let records = parse(
            "<table><tr><td>Channel</td></tr><tr><td>3</td></tr><tr><td>1</td></tr><tr><td>2</td></tr></table>",
        )
        .unwrap();
        assert_eq!(
            records
                .iter()
                .map(|r| r.get("Channel").unwrap())
                .collect::<Vec<_>>(),
            vec!["3", "1", "2"]
        );
    }

    #[test]
    fn test_surplus_cells_are_dropped() {
        let records =
            parse("<table><tr><td>Channel</td></tr><tr><td>1</td><td>extra</td></tr></table>").unwrap();
        assert_eq!(records[0].len(), 1);
    }

    #[test]
    fn test_missing_cells_are_absent() {
        let records =
            parse("<table><tr><td>Channel</td><td>Power</td></tr><tr><td>1</td></tr></table>").unwrap();
        assert_eq!(records[0].len(), 1);
        assert_eq!(records[0].get("Power"), None);
    }

    #[test]
    fn test_header_only() {
        assert_eq!(
            parse("<table><tr><td>Channel</td></tr></table>").unwrap(),
            vec![]
        );
    }

    #[test]
    fn test_no_header() {
        assert_eq!(parse("<table></table>"), Err(TableError::NoHeader));
    }
}
