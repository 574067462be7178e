// Copyright (C) 2023 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use reqwest::{Client, StatusCode};
use std::error::Error;
use std::fmt::{Display, Formatter, Result as FormatResult};

pub use client::{build as build_client, ClientConfig};
pub use request::RequestConfig;

mod client;
mod request;

/// Anything that went wrong before we had a 200 response body in hand.
#[derive(Debug)]
pub enum FetchError {
    Transport(reqwest::Error),
    Status { url: String, status: StatusCode },
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        match self {
            Self::Transport(err) => write!(f, "{}", err),
            Self::Status { url, status } => {
                write!(f, "{} returned HTTP: {}", url, status.as_u16())
            }
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

/// Sends a GET and returns the body, insisting on `200 OK`.
pub async fn fetch_text(client: &Client, request_cfg: RequestConfig) -> Result<String, FetchError> {
    let response = request::send(client, request_cfg).await?;
    let status = response.status();
    log::debug!("{} answered with HTTP {}", response.url(), status);
    if status != StatusCode::OK {
        return Err(FetchError::Status {
            url: response.url().to_string(),
            status,
        });
    }
    Ok(response.text().await?)
}
