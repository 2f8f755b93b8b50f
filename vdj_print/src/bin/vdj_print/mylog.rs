//
// Copyright (c) 2017 10x Genomics, Inc. All rights reserved.
//

// Custom logger

use chrono::Local;
use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Log to stderr at info level, or as set by RUST_LOG.
pub fn init_log() {
    let _ = Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        .parse_default_env()
        .try_init();
}
