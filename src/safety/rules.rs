// ABOUTME: Threshold propositions over glycemic load and glycemic index
// ABOUTME: Per-dimension categorization, most-severe label resolution, and explanation text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use glycemic_core::models::{GlycemicDimension, SafetyLabel};
use serde::{Deserialize, Serialize};

use crate::config::ThresholdConfig;

/// Category of a value against a pair of inclusive upper bounds
///
/// A value exactly at a bound belongs to the safer category.
#[must_use]
pub fn categorize(value: f64, safe_max: f64, caution_max: f64) -> SafetyLabel {
    if value <= safe_max {
        SafetyLabel::Safe
    } else if value <= caution_max {
        SafetyLabel::Caution
    } else {
        SafetyLabel::Unsafe
    }
}

/// Category of a glycemic load
#[must_use]
pub fn gl_category(glycemic_load: f64, thresholds: &ThresholdConfig) -> SafetyLabel {
    categorize(glycemic_load, thresholds.safe_gl, thresholds.caution_gl)
}

/// Category of a glycemic index
#[must_use]
pub fn gi_category(glycemic_index: f64, thresholds: &ThresholdConfig) -> SafetyLabel {
    categorize(glycemic_index, thresholds.safe_gi, thresholds.caution_gi)
}

/// Most severe of the per-dimension categories
#[must_use]
pub fn resolve_label(gl: SafetyLabel, gi: SafetyLabel) -> SafetyLabel {
    gl.max(gi)
}

/// Drop trailing zeros after the decimal point, keeping at least one decimal
fn trim_decimals(mut text: String) -> String {
    while text.ends_with('0') && !text.ends_with(".0") {
        text.pop();
    }
    text
}

/// Render a value with two decimals, dropping a trailing zero but keeping at least one
///
/// `8.0 -> "8.0"`, `20.44 -> "20.44"`, `12.5 -> "12.5"`
#[must_use]
pub fn format_quantity(value: f64) -> String {
    trim_decimals(format!("{value:.2}"))
}

/// Render a threshold, falling back to the exact value when two decimals lose precision
fn format_threshold(threshold: f64) -> String {
    let text = format_quantity(threshold);
    if text
        .parse::<f64>()
        .is_ok_and(|printed| printed.to_bits() == threshold.to_bits())
    {
        text
    } else {
        trim_decimals(format!("{threshold:?}"))
    }
}

/// Render a value known to lie above `bound` so the text also reads above it
///
/// Starts at two decimals and adds precision until the printed number exceeds
/// `bound`: `20.002` against `20.0` prints `"20.002"`, not `"20.0"`.
#[must_use]
pub fn format_exceeding(value: f64, bound: f64) -> String {
    for precision in 2..=17 {
        let text = trim_decimals(format!("{value:.precision$}"));
        if text.parse::<f64>().is_ok_and(|printed| printed > bound) {
            return text;
        }
    }
    trim_decimals(format!("{value:?}"))
}

/// One dimension's value, category, and the bounds it was judged against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleOutcome {
    /// Which dimension was evaluated
    pub dimension: GlycemicDimension,
    /// Observed value
    pub value: f64,
    /// Resulting category
    pub category: SafetyLabel,
    /// Upper bound of the safe category
    pub safe_threshold: f64,
    /// Upper bound of the caution category
    pub caution_threshold: f64,
}

impl RuleOutcome {
    /// Evaluate a glycemic load
    #[must_use]
    pub fn glycemic_load(value: f64, thresholds: &ThresholdConfig) -> Self {
        Self {
            dimension: GlycemicDimension::GlycemicLoad,
            value,
            category: gl_category(value, thresholds),
            safe_threshold: thresholds.safe_gl,
            caution_threshold: thresholds.caution_gl,
        }
    }

    /// Evaluate a glycemic index
    #[must_use]
    pub fn glycemic_index(value: f64, thresholds: &ThresholdConfig) -> Self {
        Self {
            dimension: GlycemicDimension::GlycemicIndex,
            value,
            category: gi_category(value, thresholds),
            safe_threshold: thresholds.safe_gi,
            caution_threshold: thresholds.caution_gi,
        }
    }

    /// Sentence naming the value, its category, and the deciding threshold
    #[must_use]
    pub fn sentence(&self) -> String {
        let subject = match self.dimension {
            GlycemicDimension::GlycemicLoad => "Glycemic load",
            GlycemicDimension::GlycemicIndex => "Glycemic index",
        };
        let safe = format_threshold(self.safe_threshold);
        let caution = format_threshold(self.caution_threshold);

        match self.category {
            SafetyLabel::Safe => {
                let value = format_quantity(self.value);
                format!("{subject} {value} within safe range (≤{safe}).")
            }
            SafetyLabel::Caution => {
                let value = format_exceeding(self.value, self.safe_threshold);
                format!(
                    "{subject} {value} exceeds safe threshold ({safe}); within caution range (≤{caution})."
                )
            }
            SafetyLabel::Unsafe => {
                let value = format_exceeding(self.value, self.caution_threshold);
                format!(
                    "{subject} {value} exceeds caution threshold ({caution}); unsafe range (>{caution})."
                )
            }
        }
    }
}

/// Full explanation: GL sentence, GI sentence, then the overall verdict
#[must_use]
pub fn build_explanation(gl: &RuleOutcome, gi: &RuleOutcome) -> String {
    let label = resolve_label(gl.category, gi.category);
    let overall = if label == SafetyLabel::Safe {
        "Overall: safe.".to_owned()
    } else {
        let drivers: Vec<&str> = [gl, gi]
            .iter()
            .filter(|outcome| outcome.category == label)
            .map(|outcome| outcome.dimension.display_name())
            .collect();
        format!("Overall: {label} (determined by {}).", drivers.join(" and "))
    };
    format!("{} {} {overall}", gl.sentence(), gi.sentence())
}
