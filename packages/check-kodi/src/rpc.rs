// Copyright (C) 2023 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};

pub const API_PATH: &str = "jsonrpc";
pub const QUERY_KEY: &str = "request";
const VERSION: &str = "2.0";
const REQUEST_ID: u32 = 1;

pub mod method {
    pub const GET_ACTIVE_PLAYERS: &str = "Player.GetActivePlayers";
    pub const GET_ITEM: &str = "Player.GetItem";
    pub const GET_PROPERTIES: &str = "Player.GetProperties";
}

#[derive(Serialize, Debug)]
pub struct Request<P: Serialize> {
    jsonrpc: &'static str,
    pub method: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<P>,
    id: u32,
}

impl Request<()> {
    pub fn new(method: &'static str) -> Self {
        Self {
            jsonrpc: VERSION,
            method,
            params: None,
            id: REQUEST_ID,
        }
    }
}

impl<P: Serialize> Request<P> {
    pub fn with_params(method: &'static str, params: P) -> Self {
        Self {
            jsonrpc: VERSION,
            method,
            params: Some(params),
            id: REQUEST_ID,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct PlayerParams {
    pub playerid: i64,
    pub properties: &'static [&'static str],
}

#[derive(Deserialize, Debug)]
pub struct Response<T> {
    result: Option<T>,
    error: Option<RpcError>,
}

#[derive(Deserialize, Debug)]
pub struct RpcError {
    code: i64,
    message: String,
}

impl<T> Response<T> {
    pub fn into_result(self, method: &str) -> Result<T> {
        if let Some(err) = self.error {
            bail!("{} failed: {} ({})", method, err.message, err.code);
        }
        self.result
            .ok_or_else(|| anyhow!("{} returned no result", method))
    }
}

#[derive(Deserialize, Debug)]
pub struct ActivePlayer {
    pub playerid: i64,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct ItemResult {
    pub item: Item,
}

#[derive(Deserialize, Debug)]
pub struct Item {
    #[serde(default)]
    pub file: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct PlayerProperties {
    #[serde(default)]
    pub percentage: Option<f64>,
}
