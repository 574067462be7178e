// Copyright (C) 2023 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use crate::channel::{self, Path};
use crate::table::{self, ChannelRecord};
use crate::{markup, section, Config};
use anyhow::{Context, Result};
use check_plugin::checking::State;
use check_plugin::http::{self, FetchError, RequestConfig};
use check_plugin::output::Output;
use log::debug;

const NO_DATA: &str = "Modem reported no channel data.";

/// Which of the two diagnostics tables to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope {
    pub forward_path: bool,
    pub return_path: bool,
}

impl Scope {
    pub fn all() -> Self {
        Self {
            forward_path: true,
            return_path: true,
        }
    }

    pub fn forward_only() -> Self {
        Self {
            forward_path: true,
            return_path: false,
        }
    }

    pub fn return_only() -> Self {
        Self {
            forward_path: false,
            return_path: true,
        }
    }

    /// A single path flag restricts the report, no flag or both mean all.
    pub fn from_flags(forward: bool, ret: bool, all: bool) -> Self {
        Self {
            forward_path: forward || all || !ret,
            return_path: ret || all || !forward,
        }
    }

    pub fn paths(&self) -> Vec<Path> {
        let mut paths = Vec::new();
        if self.forward_path {
            paths.push(Path::Forward);
        }
        if self.return_path {
            paths.push(Path::Return);
        }
        paths
    }
}

pub async fn check_modem(cfg: &Config) -> Output {
    match collect(cfg).await {
        Ok(output) => output,
        Err(err) => Output::from_failure(&err, cfg.failure_state),
    }
}

async fn collect(cfg: &Config) -> Result<Output> {
    let client = http::build_client(&cfg.client).map_err(FetchError::from)?;
    let document = http::fetch_text(&client, RequestConfig::get(cfg.url())).await?;
    report(&document, cfg.scope)
}

pub fn read_section(document: &str, path: Path) -> Result<Vec<ChannelRecord>> {
    let fragment = section::extract(document, path.label())?;
    let normalized = markup::normalize(fragment);
    debug!("{} table: {}", path.label(), normalized);
    let records = table::parse(&normalized)
        .with_context(|| format!("Cannot read {} table", path.label()))?;
    debug!("{} records: {:?}", path.label(), records);
    Ok(records)
}

pub fn report(document: &str, scope: Scope) -> Result<Output> {
    let mut lines = Vec::new();
    let mut metrics = Vec::new();
    for path in scope.paths() {
        for record in read_section(document, path)? {
            for field in channel::format_record(path, &record)? {
                lines.push(field.line);
                metrics.push(field.metric);
            }
        }
    }

    if lines.is_empty() {
        return Ok(Output::from_summary(State::Ok, NO_DATA, &[]));
    }
    Ok(Output::from_report(State::Ok, &lines, &metrics))
}
