// ABOUTME: Query commands for glycemic-cli
// ABOUTME: Runs feature lookups, safety evaluations, and food listings against a loaded table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use glycemic_guard::{
    config::ThresholdConfig,
    errors::AppResult,
    knowledge_base::KnowledgeBase,
    safety::RuleEngine,
};

use crate::helpers::display::{display_evaluation, display_features, print_json};

/// Print nutrition features for one food
pub fn features(kb: &KnowledgeBase, food: &str, serving: &str, json: bool) -> AppResult<()> {
    let features = kb.nutrition_features(food, serving)?;
    if json {
        print_json(&features)?;
    } else {
        display_features(food, serving, &features);
    }
    Ok(())
}

/// Print the safety assessment for one food
pub fn evaluate(
    kb: Arc<KnowledgeBase>,
    thresholds: ThresholdConfig,
    food: &str,
    serving: &str,
    json: bool,
) -> AppResult<()> {
    let engine = RuleEngine::builder()
        .source(kb)
        .thresholds(thresholds)
        .build()?;
    let evaluation = engine.evaluate_detailed(food, serving)?;
    if json {
        print_json(&evaluation)?;
    } else {
        display_evaluation(food, serving, &evaluation);
    }
    Ok(())
}

/// Print known food names, optionally truncated
pub fn list(kb: &KnowledgeBase, limit: Option<usize>) {
    let names = kb.list_all_foods();
    let shown = limit.unwrap_or(names.len()).min(names.len());
    for name in &names[..shown] {
        println!("{name}");
    }
    if shown < names.len() {
        println!("... and {} more", names.len() - shown);
    }
}
