//! Full-match statistics normalization.
//!
//! Merges the provider's reported metric list with the event-derived
//! period counts into one fixed-key statistics object per team. The
//! provider value wins; missing, null or zero values fall back to the
//! derived count.

use serde::Serialize;
use serde_json::Value;

use crate::insight::periods::PeriodCounts;
use crate::models::provider::StatisticEntry;

/// Fixed statistics key set exposed per team. Values stay as JSON
/// values: coercible strings become integers, anything else passes
/// through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedStats {
    pub total_shots: Value,
    pub shots_on_target: Value,
    pub ball_possession: Value,
    pub corners: Value,
    pub fouls: Value,
    pub yellow_cards: Value,
    pub red_cards: Value,
}

impl NormalizedStats {
    /// Statistics view backed purely by derived event counts, used for
    /// the half-scoped display where the provider only reports
    /// full-match numbers. Possession cannot be derived from events and
    /// stays null.
    pub fn from_counts(counts: &PeriodCounts) -> Self {
        Self {
            total_shots: counts.shots.into(),
            shots_on_target: counts.shots_on_target.into(),
            ball_possession: Value::Null,
            corners: counts.corners.into(),
            fouls: counts.fouls.into(),
            yellow_cards: counts.yellow_cards.into(),
            red_cards: counts.red_cards.into(),
        }
    }
}

/// Coerce a provider statistic value towards an integer.
///
/// Percentage strings ("55%") and "x/y" strings yield their leading
/// integer; floats are rounded; strings with no leading integer pass
/// through unchanged rather than being dropped.
pub fn coerce_stat(value: &Value) -> Value {
    match value {
        Value::Number(n) => {
            if let Some(int) = n.as_i64() {
                int.into()
            } else if let Some(float) = n.as_f64() {
                (float.round() as i64).into()
            } else {
                value.clone()
            }
        }
        Value::String(text) => {
            let digits: String = text
                .trim()
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            match digits.parse::<i64>() {
                Ok(int) => int.into(),
                Err(_) => value.clone(),
            }
        }
        other => other.clone(),
    }
}

/// Merge one team's provider metrics with its derived full-match counts.
pub fn normalize_team_stats(
    entries: &[StatisticEntry],
    fallback: &PeriodCounts,
) -> NormalizedStats {
    NormalizedStats {
        total_shots: pick(entries, "Total Shots", Some(fallback.shots)),
        shots_on_target: pick(entries, "Shots on Goal", Some(fallback.shots_on_target)),
        ball_possession: pick(entries, "Ball Possession", None),
        corners: pick(entries, "Corner Kicks", Some(fallback.corners)),
        fouls: pick(entries, "Fouls", Some(fallback.fouls)),
        yellow_cards: pick(entries, "Yellow Cards", Some(fallback.yellow_cards)),
        red_cards: pick(entries, "Red Cards", Some(fallback.red_cards)),
    }
}

fn pick(entries: &[StatisticEntry], metric: &str, fallback: Option<u32>) -> Value {
    let reported = entries
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(metric))
        .map(|entry| coerce_stat(&entry.value));

    match reported {
        Some(value) if !is_missing_or_zero(&value) => value,
        reported => match fallback {
            Some(count) => count.into(),
            None => reported.unwrap_or(Value::Null),
        },
    }
}

fn is_missing_or_zero(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Number(n) => n.as_i64() == Some(0),
        _ => false,
    }
}
