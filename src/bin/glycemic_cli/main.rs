// ABOUTME: Glycemic CLI - look up nutrition features and food safety from the command line
// ABOUTME: Loads configuration and the nutrition table, then runs one query command
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Nutrition features for a serving
//! glycemic-cli features "white rice boiled" --serving "1 serving"
//!
//! # Safety label and explanation
//! glycemic-cli evaluate "apple raw" --serving 250g
//!
//! # Machine-readable output
//! glycemic-cli evaluate "apple raw" --json
//!
//! # Custom data and thresholds
//! glycemic-cli --data ./foods.csv --thresholds ./strict.json list --limit 20
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use glycemic_guard::{
    config::GlycemicConfig,
    errors::{AppResult, ErrorResponse},
    knowledge_base::KnowledgeBase,
    logging::LoggingConfig,
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "glycemic-cli",
    about = "Glycemic food safety advisor",
    long_about = "Look up nutrition facts for a food at a serving size and classify its blood-sugar impact from glycemic index and glycemic load."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Nutrition data CSV (overrides GLYCEMIC_DATA_PATH)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// JSON threshold file (overrides GLYCEMIC_THRESHOLDS_FILE)
    #[arg(long, global = true)]
    thresholds: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show nutrition features for a food at a serving size
    Features {
        /// Food name (case and spacing are ignored)
        food: String,

        /// Serving size, e.g. "100g", "150 g", "1 serving", "2.5 servings"
        #[arg(long, short = 's')]
        serving: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Classify a food serving as safe, caution, or unsafe
    Evaluate {
        /// Food name (case and spacing are ignored)
        food: String,

        /// Serving size, e.g. "100g", "150 g", "1 serving", "2.5 servings"
        #[arg(long, short = 's')]
        serving: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List known food names
    List {
        /// Show at most this many names
        #[arg(long)]
        limit: Option<usize>,
    },
}

impl Command {
    const fn wants_json(&self) -> bool {
        match self {
            Self::Features { json, .. } | Self::Evaluate { json, .. } => *json,
            Self::List { .. } => false,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("Warning: {e}");
    }

    let json = cli.command.wants_json();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let code = error.exit_code();
            if json {
                if let Err(serialize_error) =
                    helpers::display::print_json(&ErrorResponse::from(error))
                {
                    helpers::display::display_error(&serialize_error);
                }
            } else {
                helpers::display::display_error(&error);
            }
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let mut config = GlycemicConfig::load_with_thresholds_file(cli.thresholds.as_deref())?;
    if let Some(path) = cli.data {
        config.knowledge_base.data_path = path;
    }

    let knowledge_base = Arc::new(KnowledgeBase::from_path(
        &config.knowledge_base.data_path,
    )?);
    info!(
        foods = knowledge_base.len(),
        source = %knowledge_base.source(),
        "Knowledge base ready"
    );

    match cli.command {
        Command::Features {
            food,
            serving,
            json,
        } => {
            let serving = serving.unwrap_or_else(|| config.knowledge_base.default_serving.clone());
            commands::features(&knowledge_base, &food, &serving, json)
        }
        Command::Evaluate {
            food,
            serving,
            json,
        } => {
            let serving = serving.unwrap_or_else(|| config.knowledge_base.default_serving.clone());
            commands::evaluate(knowledge_base, config.thresholds, &food, &serving, json)
        }
        Command::List { limit } => {
            commands::list(&knowledge_base, limit);
            Ok(())
        }
    }
}
