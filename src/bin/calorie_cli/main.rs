// ABOUTME: Calorie CLI - food search, photo analysis, and daily log management from the terminal
// ABOUTME: Prints JSON results on stdout; logs go to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors
//!
//! Usage:
//! ```bash
//! # Search foods by name (falls back to the local dataset when offline)
//! calorie-cli search chicken
//!
//! # Recognize foods in a photo
//! calorie-cli analyze lunch.jpg
//!
//! # Add a preset food to today's log
//! calorie-cli quick salmon --meal dinner --log-file day.json
//!
//! # Add a manually entered food
//! calorie-cli custom --name "Protein Bar" --calories 210 --protein 20 --log-file day.json
//!
//! # Show today's totals
//! calorie-cli summary --log-file day.json
//! ```

mod commands;

use anyhow::Result;
use calorie_tracker::config::AppConfig;
use calorie_tracker::models::MealType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "calorie-cli",
    about = "Calorie tracker food lookup CLI",
    long_about = "Search foods, recognize foods in photos, and keep a daily meal log."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Search foods by name
    Search {
        /// Food name or partial name
        query: String,
    },

    /// Recognize foods in an image file
    Analyze {
        /// Path to the image
        image: PathBuf,
    },

    /// Log a preset food (apple, banana, chicken, rice, salmon, eggs)
    Quick {
        /// Preset keyword
        preset: String,

        /// Meal slot to log into
        #[arg(long, default_value = "snacks")]
        meal: MealType,

        /// Daily log record to update (created if missing)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Log a manually entered food
    Custom {
        /// Food name
        #[arg(long)]
        name: String,

        /// Calories (kcal)
        #[arg(long)]
        calories: String,

        /// Protein grams
        #[arg(long, default_value = "")]
        protein: String,

        /// Carbohydrate grams
        #[arg(long, default_value = "")]
        carbs: String,

        /// Fat grams
        #[arg(long, default_value = "")]
        fat: String,

        /// Meal slot to log into
        #[arg(long, default_value = "snacks")]
        meal: MealType,

        /// Daily log record to update (created if missing)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Show totals and target progress for today's log
    Summary {
        /// Daily log record to read
        #[arg(long)]
        log_file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env();
    if cli.verbose {
        config.logging = config.logging.verbose();
    }
    config.logging.init()?;

    match cli.command {
        Command::Search { query } => commands::search(&config, &query).await?,
        Command::Analyze { image } => commands::analyze(&config, &image).await?,
        Command::Quick {
            preset,
            meal,
            log_file,
        } => commands::quick(&preset, meal, log_file.as_deref()).await?,
        Command::Custom {
            name,
            calories,
            protein,
            carbs,
            fat,
            meal,
            log_file,
        } => {
            let input = calorie_tracker::meal_log::CustomFoodInput {
                name,
                calories,
                protein,
                carbs,
                fat,
            };
            commands::custom(&input, meal, log_file.as_deref()).await?;
        }
        Command::Summary { log_file } => commands::summary(&log_file).await?,
    }

    Ok(())
}
