// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Proteus CLI entrypoint.
//!
//! Runs the interactive demo host: a fixed element strip, a validator thread
//! with artificial latency, and the edge-creation tool wired between them.

use std::error::Error;
use std::time::Duration;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--latency-ms <ms>] [--continuous]\n\n--latency-ms sets the validator's artificial per-check latency (default 250).\n--continuous starts with chain-drawing mode on (Create keeps the tool armed)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    latency_ms: Option<u64>,
    continuous: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--latency-ms" => {
                if options.latency_ms.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let latency_ms: u64 = raw.parse().map_err(|_| ())?;
                options.latency_ms = Some(latency_ms);
            }
            "--continuous" => {
                if options.continuous {
                    return Err(());
                }
                options.continuous = true;
            }
            _ => return Err(()),
        }
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "proteus".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let mut demo = proteus::tui::DemoOptions::default();
        if let Some(latency_ms) = options.latency_ms {
            demo.latency = Duration::from_millis(latency_ms);
        }
        demo.continuous = options.continuous;

        proteus::tui::run(demo)
    })();

    if let Err(err) = result {
        eprintln!("proteus: {err}");
        std::process::exit(1);
    }
}
