// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use gateway_equality::config::{diff_snapshot_files, load_config, SnapshotKind};
use gateway_equality::Comparator;
use tracing_subscriber::EnvFilter;

const EXIT_EQUAL: u8 = 0;
const EXIT_DIFFERENT: u8 = 1;
const EXIT_ERROR: u8 = 2;

/// Parsed command line.
struct Args {
    kind: SnapshotKind,
    left: String,
    right: String,
    config: Option<String>,
}

fn usage(program: &str) -> String {
    let kinds: Vec<&str> = SnapshotKind::ALL.iter().map(|k| k.as_str()).collect();
    format!(
        "Usage: {} <kind> <left> <right> [--config <engine.yaml>]\n\
         Kinds: {}\n\
         Example: {} route routes/v1.yaml routes/v2.json",
        program,
        kinds.join(", "),
        program
    )
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut positional = Vec::new();
    let mut config = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                config = Some(path.clone());
            }
            _ => positional.push(arg.clone()),
        }
    }

    let [kind, left, right]: [String; 3] = positional
        .try_into()
        .map_err(|_| anyhow!("expected <kind> <left> <right>"))?;

    Ok(Args {
        kind: kind.parse()?,
        left,
        right,
        config,
    })
}

/// Logs go to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<bool> {
    let comparator = match &args.config {
        Some(path) => {
            let config = load_config(path)
                .with_context(|| format!("loading engine configuration '{}'", path))?;
            Comparator::from_config(&config)
        }
        None => Comparator::default(),
    };

    let difference = diff_snapshot_files(args.kind, &comparator, &args.left, &args.right)
        .with_context(|| format!("comparing {} snapshots", args.kind))?;

    match difference {
        None => {
            println!("equal: '{}' and '{}'", args.left, args.right);
            Ok(true)
        }
        Some(difference) => {
            println!("different: {}", difference);
            Ok(false)
        }
    }
}

fn main() -> ExitCode {
    init_logging();

    let argv: Vec<String> = env::args().collect();
    let program = argv.first().map(String::as_str).unwrap_or("gateway-equality");

    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {:#}", e);
            eprintln!("{}", usage(program));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match run(&args) {
        Ok(true) => ExitCode::from(EXIT_EQUAL),
        Ok(false) => ExitCode::from(EXIT_DIFFERENT),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
