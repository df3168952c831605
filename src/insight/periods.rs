//! Per-team, per-period event counts derived purely from the event list.
//!
//! These counts are the display truth for period-scoped views and the
//! fallback source for full-match statistics the provider failed to
//! report.

use serde::Serialize;

use crate::insight::classifier::{classify, EventClass};
use crate::models::provider::{MatchEvent, MatchPhase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    First,
    Second,
}

/// Bucket an event minute into a half.
///
/// Minutes past 45 normally belong to the second half, but while the
/// fixture status still reports first-half play they are first-half
/// added time. Every timed event lands in exactly one period, so the
/// first and second buckets always sum to the full bucket.
pub fn period_of(elapsed: i64, phase: MatchPhase) -> Period {
    if elapsed <= 45 || phase == MatchPhase::FirstHalf {
        Period::First
    } else {
        Period::Second
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeriodCounts {
    pub shots: u32,
    pub shots_on_target: u32,
    pub corners: u32,
    pub fouls: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
}

impl PeriodCounts {
    fn record(&mut self, class: EventClass) {
        match class {
            // A goal is also a shot that hit the target.
            EventClass::Goal | EventClass::ShotOnTarget => {
                self.shots += 1;
                self.shots_on_target += 1;
            }
            EventClass::Shot => self.shots += 1,
            EventClass::Corner => self.corners += 1,
            EventClass::Foul => self.fouls += 1,
            EventClass::YellowCard => self.yellow_cards += 1,
            EventClass::RedCard => self.red_cards += 1,
            _ => {}
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamPeriods {
    pub first: PeriodCounts,
    pub second: PeriodCounts,
    pub full: PeriodCounts,
}

impl TeamPeriods {
    fn record(&mut self, class: EventClass, elapsed: Option<i64>, phase: MatchPhase) {
        // The full bucket counts every event; only timed events can be
        // attributed to a half.
        self.full.record(class);
        if let Some(elapsed) = elapsed {
            match period_of(elapsed, phase) {
                Period::First => self.first.record(class),
                Period::Second => self.second.record(class),
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchBreakdown {
    pub home: TeamPeriods,
    pub away: TeamPeriods,
}

/// Aggregate the event list into per-team period counts.
///
/// Events are attributed by direct team-id match against the fixture's
/// home/away ids; an event matching neither side is dropped from the
/// aggregates rather than guessed at.
pub fn aggregate(
    events: &[MatchEvent],
    home_id: Option<i64>,
    away_id: Option<i64>,
    phase: MatchPhase,
) -> MatchBreakdown {
    let mut breakdown = MatchBreakdown::default();

    for event in events {
        let class = classify(event.kind_text(), event.detail_text());
        let side = match event.team.id {
            Some(id) if Some(id) == home_id => &mut breakdown.home,
            Some(id) if Some(id) == away_id => &mut breakdown.away,
            _ => {
                tracing::debug!(
                    team_id = ?event.team.id,
                    "Dropping event attributed to neither home nor away team"
                );
                continue;
            }
        };
        side.record(class, event.time.elapsed, phase);
    }

    breakdown
}
