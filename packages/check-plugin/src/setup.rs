// Copyright (C) 2023 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use crate::cli::CommonArgs;
use crate::constants;
use anyhow::Result;
use flexi_logger::{self, FileSpec, LogSpecification, LoggerHandle};
use std::path::Path;

pub enum SendTo {
    Null,
    Stderr,
}

/// stdout belongs to the monitoring core, so the log never goes there.
pub fn init_logging_from_args(args: &CommonArgs, basename: &str) -> Result<LoggerHandle> {
    let send_to = if args.debug {
        SendTo::Stderr
    } else {
        SendTo::Null
    };
    init_logging(
        &args.logging_level(),
        args.log_dir.as_deref(),
        basename,
        send_to,
    )
}

fn init_logging(
    level: &str,
    log_dir: Option<&Path>,
    basename: &str,
    send_to: SendTo,
) -> Result<LoggerHandle> {
    let spec = LogSpecification::parse(level)?;
    let mut logger = flexi_logger::Logger::with(spec);

    logger = match (log_dir, send_to) {
        (Some(dir), send_to) => {
            let logger = logger
                .log_to_file(make_log_file_spec(dir, basename))
                .rotate(
                    constants::log::FILE_MAX_SIZE,
                    constants::log::FILE_NAMING,
                    constants::log::FILE_CLEANUP,
                )
                .append()
                .duplicate_to_stdout(flexi_logger::Duplicate::None);
            match send_to {
                SendTo::Null => logger.duplicate_to_stderr(flexi_logger::Duplicate::None),
                SendTo::Stderr => logger.duplicate_to_stderr(flexi_logger::Duplicate::All),
            }
        }
        (None, SendTo::Stderr) => logger.log_to_stderr(),
        (None, SendTo::Null) => logger.do_not_log(),
    };

    Ok(logger.format(flexi_logger::detailed_format).start()?)
}

fn make_log_file_spec(log_dir: &Path, basename: &str) -> FileSpec {
    FileSpec::default()
        .directory(log_dir.to_owned())
        .suppress_timestamp()
        .basename(basename)
}
