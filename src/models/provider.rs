//! Payload models for the API-Sports football provider.
//!
//! Every field is optional or defaulted: the provider's envelope and
//! free-text vocabulary are not guaranteed, so a reshaped payload must
//! degrade to empty values instead of failing the whole request.

use serde::Deserialize;

/// One entry of `GET /fixtures?live=all` (and `GET /fixtures?id=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiveFixture {
    #[serde(default)]
    pub fixture: FixtureCore,
    #[serde(default)]
    pub league: LeagueRef,
    #[serde(default)]
    pub teams: TeamPair,
    #[serde(default)]
    pub goals: Goals,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureCore {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub status: FixtureStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureStatus {
    #[serde(default)]
    pub long: Option<String>,
    #[serde(default)]
    pub short: Option<String>,
    #[serde(default)]
    pub elapsed: Option<i64>,
}

/// Coarse match phase derived from the provider's short status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    NotStarted,
    FirstHalf,
    HalfTime,
    SecondHalf,
    ExtraTime,
    Penalties,
    Finished,
    Unknown,
}

impl FixtureStatus {
    pub fn phase(&self) -> MatchPhase {
        match self.short.as_deref() {
            Some("NS") | Some("TBD") | Some("PST") => MatchPhase::NotStarted,
            Some("1H") => MatchPhase::FirstHalf,
            Some("HT") => MatchPhase::HalfTime,
            Some("2H") => MatchPhase::SecondHalf,
            Some("ET") | Some("BT") => MatchPhase::ExtraTime,
            Some("P") => MatchPhase::Penalties,
            Some("FT") | Some("AET") | Some("PEN") => MatchPhase::Finished,
            _ => MatchPhase::Unknown,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeagueRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamPair {
    #[serde(default)]
    pub home: TeamRef,
    #[serde(default)]
    pub away: TeamRef,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Goals {
    #[serde(default)]
    pub home: Option<i64>,
    #[serde(default)]
    pub away: Option<i64>,
}

/// One entry of `GET /fixtures/events`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchEvent {
    #[serde(default)]
    pub time: EventClock,
    #[serde(default)]
    pub team: TeamRef,
    #[serde(default)]
    pub player: PlayerRef,
    #[serde(default)]
    pub assist: PlayerRef,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
}

impl MatchEvent {
    pub fn kind_text(&self) -> &str {
        self.kind.as_deref().unwrap_or("")
    }

    pub fn detail_text(&self) -> &str {
        self.detail.as_deref().unwrap_or("")
    }

    pub fn comments_text(&self) -> &str {
        self.comments.as_deref().unwrap_or("")
    }
}

/// The provider reports a minute-based clock; `extra` is the added-time
/// offset past 45/90 and `second` is only present on feeds that carry
/// sub-minute resolution.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventClock {
    #[serde(default)]
    pub elapsed: Option<i64>,
    #[serde(default)]
    pub extra: Option<i64>,
    #[serde(default)]
    pub second: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

/// One entry of `GET /fixtures/statistics`: a team plus its full-match
/// metric list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamStatistics {
    #[serde(default)]
    pub team: TeamRef,
    #[serde(default)]
    pub statistics: Vec<StatisticEntry>,
}

/// A single (metric, value) pair. Values arrive as numbers, percentage
/// strings ("55%"), "x/y" strings or null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatisticEntry {
    #[serde(default, rename = "type")]
    pub name: String,
    #[serde(default)]
    pub value: serde_json::Value,
}
