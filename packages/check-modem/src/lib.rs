// Copyright (C) 2023 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Reports the forward and return path channel data of a Thomson DCM476
//! cable modem, scraped from its diagnostics page, mainly to graph it.

use check_plugin::checking::State;
use check_plugin::http::ClientConfig;

pub mod channel;
pub mod cli;
pub mod diagnostics;
pub mod markup;
pub mod section;
pub mod table;

pub use diagnostics::{check_modem, Scope};

pub const DIAGNOSTICS_PAGE: &str = "Diagnostics.asp";

pub struct Config {
    pub host: String,
    pub failure_state: State,
    pub scope: Scope,
    pub client: ClientConfig,
}

impl Config {
    pub fn url(&self) -> String {
        format!("http://{}/{}", self.host, DIAGNOSTICS_PAGE)
    }
}
