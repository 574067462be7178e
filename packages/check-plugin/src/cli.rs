// Copyright (C) 2023 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use crate::checking::State;
use crate::constants;
use clap::{Args, CommandFactory};
use std::path::PathBuf;

/// Arguments every device check understands.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Specify the host to query
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// If data retrieval fails, return critical
    #[arg(short, long)]
    pub critical: bool,

    /// If data retrieval fails, return warning
    #[arg(short, long)]
    pub warning: bool,

    /// Enable debug mode
    #[arg(short, long)]
    pub debug: bool,

    /// Set timeout in seconds
    #[arg(short, long, default_value_t = constants::DEFAULT_TIMEOUT)]
    pub timeout: u64,

    /// Additionally write the log to this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl CommonArgs {
    /// Critical wins whenever it is requested, warning is the default.
    pub fn failure_state(&self) -> State {
        if self.critical {
            State::Crit
        } else {
            State::Warn
        }
    }

    pub fn logging_level(&self) -> String {
        if self.debug {
            String::from("debug")
        } else {
            String::from("info")
        }
    }

    /// Returns the host or terminates with usage and the failure state.
    pub fn require_host<C: CommandFactory>(&self) -> String {
        match &self.host {
            Some(host) => host.clone(),
            None => {
                println!("-H HOST must be specified.\n");
                // Nothing sensible is left to do if stdout is gone.
                let _ = C::command().print_help();
                std::process::exit(self.failure_state().into());
            }
        }
    }
}
