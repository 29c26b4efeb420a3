// ABOUTME: Subcommand implementations for the calorie CLI
// ABOUTME: Each command runs one lookup or log operation and prints its JSON result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

use anyhow::{anyhow, Context, Result};
use calorie_tracker::config::AppConfig;
use calorie_tracker::lookup::{ImageInput, LookupEngine, SearchOutcome};
use calorie_tracker::meal_log::{
    local_today, preset_names, quick_food, CustomFoodInput, DailyLog, DailyLogRecord,
};
use calorie_tracker::models::{FoodItem, MealType};
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tracing::info;

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn search(config: &AppConfig, query: &str) -> Result<()> {
    let engine = LookupEngine::from_config(config)?;

    match engine.orchestrator().search(query).await {
        SearchOutcome::Completed { source, items, .. } => {
            print_json(&json!({ "query": query, "source": source, "items": items }))
        }
        SearchOutcome::Skipped => Err(anyhow!("search query is empty")),
        SearchOutcome::Superseded { .. } => Err(anyhow!("search was superseded")),
    }
}

pub async fn analyze(config: &AppConfig, image: &Path) -> Result<()> {
    let bytes = tokio::fs::read(image)
        .await
        .with_context(|| format!("failed to read image {}", image.display()))?;

    let engine = LookupEngine::from_config(config)?;
    let outcome = engine.photo().analyze(&ImageInput::Bytes(bytes)).await;
    print_json(&outcome)
}

pub async fn quick(preset: &str, meal: MealType, log_file: Option<&Path>) -> Result<()> {
    let food = quick_food(preset).ok_or_else(|| {
        anyhow!(
            "unknown preset '{preset}', expected one of: {}",
            preset_names().collect::<Vec<_>>().join(", ")
        )
    })?;
    log_food(food, meal, log_file).await
}

pub async fn custom(input: &CustomFoodInput, meal: MealType, log_file: Option<&Path>) -> Result<()> {
    let food = input.validate()?;
    log_food(food, meal, log_file).await
}

pub async fn summary(log_file: &Path) -> Result<()> {
    let log = load_log(Some(log_file)).await?;
    print_summary(&log)
}

async fn log_food(food: FoodItem, meal: MealType, log_file: Option<&Path>) -> Result<()> {
    let mut log = load_log(log_file).await?;
    let entry = log.add(meal, food).clone();
    info!(food = %entry.food.name, %meal, "Food logged");

    if let Some(path) = log_file {
        let record = serde_json::to_vec_pretty(&log.to_record())?;
        tokio::fs::write(path, record)
            .await
            .with_context(|| format!("failed to write daily log {}", path.display()))?;
    }

    print_json(&json!({ "meal": meal, "entry": entry }))?;
    print_summary(&log)
}

async fn load_log(log_file: Option<&Path>) -> Result<DailyLog> {
    let today = local_today();
    let Some(path) = log_file else {
        return Ok(DailyLog::new(today));
    };

    match tokio::fs::read(path).await {
        Ok(bytes) => {
            let record: DailyLogRecord = serde_json::from_slice(&bytes)
                .with_context(|| format!("daily log {} is not valid JSON", path.display()))?;
            Ok(DailyLog::load_for_day(record, today))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(DailyLog::new(today)),
        Err(e) => Err(e).with_context(|| format!("failed to read daily log {}", path.display())),
    }
}

fn print_summary(log: &DailyLog) -> Result<()> {
    print_json(&json!({
        "date": log.date(),
        "totals": log.totals(),
        "targets": log.targets(),
        "progress": log.progress(),
        "remainingCalories": log.remaining_calories(),
    }))
}
