// Copyright (C) 2023 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Reports what a Kodi media center is currently playing.
//!
//! The player is asked over its JSON-RPC web interface for the active
//! player, the file it plays and the playback position. The position ends
//! up as performance data so that usage can be graphed.

use check_plugin::checking::State;
use check_plugin::http::{ClientConfig, RequestConfig};

pub mod cli;
pub mod playback;
pub mod rpc;

pub use playback::check_kodi;

pub struct Config {
    pub host: String,
    pub failure_state: State,
    pub client: ClientConfig,
    pub auth_user: Option<String>,
    pub auth_pw: Option<String>,
}

impl Config {
    pub fn url(&self) -> String {
        format!("http://{}/{}", self.host, rpc::API_PATH)
    }

    fn request(&self, payload: String) -> RequestConfig {
        RequestConfig {
            url: self.url(),
            query: vec![(rpc::QUERY_KEY.to_string(), payload)],
            auth_user: self.auth_user.clone(),
            auth_pw: self.auth_pw.clone(),
        }
    }
}
