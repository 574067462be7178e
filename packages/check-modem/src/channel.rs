// Copyright (C) 2023 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use crate::table::ChannelRecord;
use anyhow::{anyhow, Result};
use check_plugin::checking::Metric;
use lazy_static::lazy_static;
use regex::Regex;

/// Categorical, nothing to graph.
const MODULATION: &str = "Modulation";

lazy_static! {
    // Value up to the first blank, plus percent signs directly behind it.
    static ref NUMERIC_VALUE: Regex = Regex::new(r"^(.*?) (%*).*$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Path {
    Forward,
    Return,
}

impl Path {
    /// Heading of the section on the diagnostics page.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Forward => "Forward Path",
            Self::Return => "Return Path",
        }
    }

    pub fn id_field(&self) -> &'static str {
        match self {
            Self::Forward => "Channel",
            Self::Return => "Channel ID",
        }
    }

    fn metric_prefix(&self) -> &'static str {
        match self {
            Self::Forward => "FCh",
            Self::Return => "RCh",
        }
    }

    fn line_prefix(&self) -> &'static str {
        match self {
            Self::Forward => "FWD",
            Self::Return => "RET",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldReport {
    pub line: String,
    pub metric: Metric,
}

/// Drops unit suffixes: `"5.2 dBmV"` becomes `"5.2"`, `"98 %"` becomes
/// `"98%"`. Values without a blank are returned as they are.
pub fn numeric_value(value: &str) -> String {
    match NUMERIC_VALUE.captures(value) {
        Some(caps) => format!("{}{}", &caps[1], &caps[2]),
        None => value.to_string(),
    }
}

/// One report line and one metric per field, skipping the channel id, the
/// modulation and empty cells.
pub fn format_record(path: Path, record: &ChannelRecord) -> Result<Vec<FieldReport>> {
    let channel = record.get(path.id_field()).ok_or_else(|| {
        anyhow!(
            "{} row without '{}' field",
            path.label(),
            path.id_field()
        )
    })?;

    Ok(record
        .fields()
        .filter(|(name, value)| {
            *name != path.id_field() && *name != MODULATION && !value.is_empty()
        })
        .map(|(name, value)| FieldReport {
            line: format!(
                "{} Channel {} {}={}",
                path.line_prefix(),
                channel,
                name,
                value
            ),
            metric: Metric::new(
                format!("{} {} {}", path.metric_prefix(), channel, name),
                numeric_value(value),
            ),
        })
        .collect())
}
