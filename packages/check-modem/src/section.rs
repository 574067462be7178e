// Copyright (C) 2023 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FormatResult};

const TABLE_OPEN: &str = "<table";
const TABLE_CLOSE: &str = "</table>";

#[derive(Debug, PartialEq, Eq)]
pub enum SectionError {
    LabelNotFound(String),
    TableNotFound(String),
    UnterminatedTable(String),
}

impl Display for SectionError {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        match self {
            Self::LabelNotFound(label) => write!(f, "Section '{}' not found", label),
            Self::TableNotFound(label) => write!(f, "No table follows section '{}'", label),
            Self::UnterminatedTable(label) => {
                write!(f, "Table of section '{}' is not closed", label)
            }
        }
    }
}

impl Error for SectionError {}

/// Cuts the table belonging to `label` out of `document`.
///
/// The fragment starts at the first `<table` after the first occurrence of
/// the label and ends with the nearest `</table>`, both tags included. Tag
/// names match in any case, the label must match exactly.
pub fn extract<'a>(document: &'a str, label: &str) -> Result<&'a str, SectionError> {
    let after_label = document
        .find(label)
        .map(|pos| pos + label.len())
        .ok_or_else(|| SectionError::LabelNotFound(label.to_string()))?;
    // ASCII lowercasing keeps every byte offset valid for `document`.
    let lowercase = document.to_ascii_lowercase();
    let start = lowercase[after_label..]
        .find(TABLE_OPEN)
        .map(|pos| after_label + pos)
        .ok_or_else(|| SectionError::TableNotFound(label.to_string()))?;
    let end = lowercase[start..]
        .find(TABLE_CLOSE)
        .map(|pos| start + pos + TABLE_CLOSE.len())
        .ok_or_else(|| SectionError::UnterminatedTable(label.to_string()))?;
    Ok(&document[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "<html><table id=\"menu\"><tr><td>Forward Path</td></tr></table>\n\
        <h3>Forward Path</h3>\n<table border=1><tr><td>Channel</td></tr></table>\n\
        <h3>Return Path</h3>\n<table border=1><tr><td>Channel ID</td></tr></table>\n</html>";

    #[test]
    fn test_first_table_after_first_label() {
        // The first occurrence of the label sits inside the menu table.
        assert_eq!(
            extract(PAGE, "Forward Path").unwrap(),
            "<table border=1><tr><td>Channel</td></tr></table>"
        );
    }

    #[test]
    fn test_nearest_closing_tag() {
        assert_eq!(
            extract(PAGE, "Return Path").unwrap(),
            "<table border=1><tr><td>Channel ID</td></tr></table>"
        );
    }

    #[test]
    fn test_uppercase_tags() {
        assert_eq!(
            extract("<H3>Forward Path</H3><TABLE BORDER=1><TR><TD>1</TD></TR></Table><table>", "Forward Path")
                .unwrap(),
            "<TABLE BORDER=1><TR><TD>1</TD></TR></Table>"
        );
        assert_eq!(
            extract("<h3>FORWARD PATH</h3><table></table>", "Forward Path"),
            Err(SectionError::LabelNotFound("Forward Path".to_string()))
        );
    }

    #[test]
    fn test_label_not_found() {
        assert_eq!(
            extract(PAGE, "Upstream"),
            Err(SectionError::LabelNotFound("Upstream".to_string()))
        );
        assert_eq!(
            extract(PAGE, "Upstream").unwrap_err().to_string(),
            "Section 'Upstream' not found"
        );
    }

    #[test]
    fn test_table_not_found() {
        assert_eq!(
            extract("<h3>Forward Path</h3><p>n/a</p>", "Forward Path"),
            Err(SectionError::TableNotFound("Forward Path".to_string()))
        );
    }

    #[test]
    fn test_unterminated_table() {
        assert_eq!(
            extract("Forward Path<table><tr><td>1</td></tr>", "Forward Path"),
            Err(SectionError::UnterminatedTable("Forward Path".to_string()))
        );
    }
}
