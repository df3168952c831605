//! Response contract exposed to the front end.

use serde::Serialize;
use serde_json::Value;

use crate::insight::periods::MatchBreakdown;
use crate::insight::stats::NormalizedStats;
use crate::insight::stoppage::StoppageEstimate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeagueSummary {
    pub id: i64,
    pub name: String,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamSide {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameTeams {
    pub home: TeamSide,
    pub away: TeamSide,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalsSnapshot {
    pub home: i64,
    pub away: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSnapshot {
    pub short: String,
    pub long: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureSnapshot {
    pub elapsed: Option<i64>,
    pub goals: GoalsSnapshot,
    pub score: String,
}

/// One entry of the live games listing.
#[derive(Debug, Clone, Serialize)]
pub struct LiveGameSummary {
    pub game_id: i64,
    pub title: String,
    pub league: LeagueSummary,
    pub teams: GameTeams,
    pub fixture: FixtureSnapshot,
    pub status: StatusSnapshot,
}

/// One classified entry of the event feed, most recent first.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineEvent {
    pub time: String,
    pub minute: Option<i64>,
    pub extra: Option<i64>,
    pub sort_key: i64,
    pub team: Option<String>,
    pub player: Option<String>,
    pub assist: Option<String>,
    pub classification: String,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamPairStats {
    pub home: NormalizedStats,
    pub away: NormalizedStats,
}

/// Full per-game payload of `/stats-aovivo/{game_id}`.
#[derive(Debug, Clone, Serialize)]
pub struct GameInsight {
    pub game_id: i64,
    pub title: String,
    pub league: LeagueSummary,
    pub teams: GameTeams,
    pub status: StatusSnapshot,
    pub elapsed: Option<i64>,
    pub score: String,
    pub goals: GoalsSnapshot,
    pub statistics: TeamPairStats,
    pub periods: MatchBreakdown,
    pub events: Vec<TimelineEvent>,
    pub lineups: Vec<Value>,
    pub players: Vec<Value>,
    pub stoppage_estimate: Option<StoppageEstimate>,
}
