// Copyright (C) 2023 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use crate::checking::{Metric, State};
use crate::http::FetchError;
use std::fmt::{Display, Formatter, Result as FormatResult};

/// The single result a plugin prints before exiting with `state`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub state: State,
    text: String,
    perfdata: Option<String>,
}

impl Display for Output {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        write!(f, "{}", self.text)?;
        if let Some(perfdata) = &self.perfdata {
            write!(f, "|{}", perfdata)?;
        }
        Ok(())
    }
}

impl Output {
    /// One summary line, perf tokens separated by single blanks.
    pub fn from_summary(state: State, summary: &str, metrics: &[Metric]) -> Self {
        let perfdata = metrics
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<String>>()
            .join(" ");
        Self {
            state,
            text: summary.to_string(),
            perfdata: Some(perfdata),
        }
    }

    /// Multi line report: every line is terminated by a newline and every
    /// perf token is followed by a blank.
    pub fn from_report(state: State, lines: &[String], metrics: &[Metric]) -> Self {
        let text = lines.iter().map(|line| format!("{}\n", line)).collect();
        let perfdata = metrics.iter().map(|m| format!("{} ", m)).collect();
        Self {
            state,
            text,
            perfdata: Some(perfdata),
        }
    }

    pub fn from_error(state: State, message: &str) -> Self {
        Self {
            state,
            text: message.to_string(),
            perfdata: None,
        }
    }

    /// Retrieval problems report `failure_state`, anything we could not make
    /// sense of afterwards is UNKNOWN.
    pub fn from_failure(err: &anyhow::Error, failure_state: State) -> Self {
        let state = if err.downcast_ref::<FetchError>().is_some() {
            failure_state
        } else {
            State::Unknown
        };
        Self::from_error(state, &format!("Error! {:#}", err))
    }
}
