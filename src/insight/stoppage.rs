//! Stoppage-time estimation.
//!
//! A rough heuristic, not a predictive model: near the natural end of a
//! half, recent substitutions, cards and play interruptions are counted
//! and weighted into a bounded minute estimate. Outside the estimation
//! windows no value is produced at all: absence means "not yet
//! relevant", which is different from an estimate of zero.

use serde::Serialize;

use crate::insight::classifier::{classify, is_interruption, EventClass};
use crate::models::provider::MatchEvent;

/// Minutes of game time an event stays relevant for the estimate.
const RECENT_WINDOW_MINUTES: i64 = 20;
/// Per-event contributions; interruptions cost more game time than
/// routine substitutions or bookings.
const ROUTINE_WEIGHT: f64 = 1.0;
const INTERRUPTION_WEIGHT: f64 = 2.5;
/// Scale from weighted event count to minutes.
const MINUTES_PER_WEIGHT: f64 = 0.8;
const MIN_ESTIMATE: i64 = 1;
const MAX_ESTIMATE: i64 = 7;
/// Baselines when no qualifying events happened recently.
const FIRST_HALF_BASELINE: u32 = 3;
const SECOND_HALF_BASELINE: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoppageWindow {
    FirstHalfEnd,
    SecondHalfEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateBasis {
    RecentEvents,
    Baseline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoppageEstimate {
    pub minutes: u32,
    pub window: StoppageWindow,
    pub basis: EstimateBasis,
}

/// Estimate the added time for the current half.
///
/// Returns `None` outside the approach windows (elapsed 35-45 and
/// 80-90); inside a window the estimate is always within [1, 7].
pub fn estimate_stoppage(elapsed: Option<i64>, events: &[MatchEvent]) -> Option<StoppageEstimate> {
    let elapsed = elapsed?;
    let window = if (35..=45).contains(&elapsed) {
        StoppageWindow::FirstHalfEnd
    } else if (80..=90).contains(&elapsed) {
        StoppageWindow::SecondHalfEnd
    } else {
        return None;
    };

    let cutoff = elapsed - RECENT_WINDOW_MINUTES;
    let mut weight = 0.0;
    let mut qualifying = 0u32;

    for event in events {
        let Some(minute) = event.time.elapsed else {
            continue;
        };
        if minute < cutoff || minute > elapsed {
            continue;
        }
        let contribution = if is_interruption(
            event.kind_text(),
            event.detail_text(),
            event.comments_text(),
        ) {
            INTERRUPTION_WEIGHT
        } else {
            match classify(event.kind_text(), event.detail_text()) {
                EventClass::Substitution
                | EventClass::YellowCard
                | EventClass::RedCard
                | EventClass::Card => ROUTINE_WEIGHT,
                _ => continue,
            }
        };
        weight += contribution;
        qualifying += 1;
    }

    if qualifying == 0 {
        let minutes = match window {
            StoppageWindow::FirstHalfEnd => FIRST_HALF_BASELINE,
            StoppageWindow::SecondHalfEnd => SECOND_HALF_BASELINE,
        };
        return Some(StoppageEstimate {
            minutes,
            window,
            basis: EstimateBasis::Baseline,
        });
    }

    let minutes = ((weight * MINUTES_PER_WEIGHT).round() as i64)
        .clamp(MIN_ESTIMATE, MAX_ESTIMATE) as u32;
    Some(StoppageEstimate {
        minutes,
        window,
        basis: EstimateBasis::RecentEvents,
    })
}
