// Copyright (C) 2023 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Shared plumbing for the device check plugins: Nagios states, perf data,
//! the output line, the HTTP fetch and the common command line.

pub mod checking;
pub mod cli;
pub mod constants;
pub mod http;
pub mod output;
pub mod setup;
