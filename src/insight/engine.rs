//! Composition of the insight pipeline: normalize, classify, aggregate,
//! estimate, and shape the front-end payloads.

use serde_json::Value;

use crate::insight::classifier::display_label;
use crate::insight::periods::{aggregate, MatchBreakdown};
use crate::insight::stats::{normalize_team_stats, NormalizedStats};
use crate::insight::stoppage::estimate_stoppage;
use crate::insight::timeline::{sort_key, time_label};
use crate::models::insight::{
    FixtureSnapshot, GameInsight, GameTeams, GoalsSnapshot, LeagueSummary, LiveGameSummary,
    StatusSnapshot, TeamPairStats, TeamSide, TimelineEvent,
};
use crate::models::provider::{
    LeagueRef, LiveFixture, MatchEvent, MatchPhase, StatisticEntry, TeamRef, TeamStatistics,
};

fn league_summary(league: &LeagueRef) -> LeagueSummary {
    LeagueSummary {
        id: league.id.unwrap_or(0),
        name: league.name.clone().unwrap_or_default(),
        country: league.country.clone(),
    }
}

fn team_side(team: &TeamRef) -> TeamSide {
    TeamSide {
        id: team.id.unwrap_or(0),
        name: team.name.clone().unwrap_or_default(),
    }
}

fn status_snapshot(fixture: &LiveFixture) -> StatusSnapshot {
    StatusSnapshot {
        short: fixture.fixture.status.short.clone().unwrap_or_default(),
        long: fixture.fixture.status.long.clone().unwrap_or_default(),
    }
}

fn score_line(fixture: &LiveFixture) -> String {
    format!(
        "{} - {}",
        fixture.goals.home.unwrap_or(0),
        fixture.goals.away.unwrap_or(0)
    )
}

fn game_title(fixture: &LiveFixture) -> String {
    format!(
        "{} vs {} (AO VIVO)",
        fixture.teams.home.name.as_deref().unwrap_or("?"),
        fixture.teams.away.name.as_deref().unwrap_or("?")
    )
}

/// Distinct leagues currently live, in first-seen order.
pub fn distinct_leagues(fixtures: &[LiveFixture]) -> Vec<LeagueSummary> {
    let mut leagues: Vec<LeagueSummary> = Vec::new();
    for fixture in fixtures {
        let summary = league_summary(&fixture.league);
        if !leagues.iter().any(|known| known.id == summary.id) {
            leagues.push(summary);
        }
    }
    leagues
}

/// Listing entry for one live fixture.
pub fn live_game_summary(fixture: &LiveFixture) -> LiveGameSummary {
    LiveGameSummary {
        game_id: fixture.fixture.id.unwrap_or(0),
        title: game_title(fixture),
        league: league_summary(&fixture.league),
        teams: GameTeams {
            home: team_side(&fixture.teams.home),
            away: team_side(&fixture.teams.away),
        },
        fixture: FixtureSnapshot {
            elapsed: fixture.fixture.status.elapsed,
            goals: GoalsSnapshot {
                home: fixture.goals.home.unwrap_or(0),
                away: fixture.goals.away.unwrap_or(0),
            },
            score: score_line(fixture),
        },
        status: status_snapshot(fixture),
    }
}

/// Classified event feed ordered by descending recency.
pub fn build_timeline(events: &[MatchEvent]) -> Vec<TimelineEvent> {
    let mut timeline: Vec<TimelineEvent> = events
        .iter()
        .map(|event| TimelineEvent {
            time: time_label(&event.time),
            minute: event.time.elapsed,
            extra: event.time.extra,
            sort_key: sort_key(&event.time),
            team: event.team.name.clone(),
            player: event.player.name.clone(),
            assist: event.assist.name.clone(),
            classification: display_label(event.kind_text(), event.detail_text()),
            detail: event.detail.clone(),
        })
        .collect();
    timeline.sort_by(|a, b| b.sort_key.cmp(&a.sort_key));
    timeline
}

fn stats_for_team(statistics: &[TeamStatistics], team_id: Option<i64>) -> Vec<StatisticEntry> {
    statistics
        .iter()
        .find(|entry| entry.team.id.is_some() && entry.team.id == team_id)
        .map(|entry| entry.statistics.clone())
        .unwrap_or_default()
}

/// Assemble the full per-game payload.
///
/// `half_view` swaps the headline statistics to the current half's
/// derived counts; the full-match normalization and all period buckets
/// are part of the payload either way.
pub fn build_game_insight(
    fixture: &LiveFixture,
    events: &[MatchEvent],
    statistics: &[TeamStatistics],
    lineups: Vec<Value>,
    players: Vec<Value>,
    half_view: bool,
) -> GameInsight {
    let phase = fixture.fixture.status.phase();
    let elapsed = fixture.fixture.status.elapsed;
    let home_id = fixture.teams.home.id;
    let away_id = fixture.teams.away.id;

    let periods: MatchBreakdown = aggregate(events, home_id, away_id, phase);

    let statistics_pair = if half_view {
        let second = matches!(
            phase,
            MatchPhase::SecondHalf | MatchPhase::ExtraTime | MatchPhase::Penalties | MatchPhase::Finished
        );
        let (home_counts, away_counts) = if second {
            (&periods.home.second, &periods.away.second)
        } else {
            (&periods.home.first, &periods.away.first)
        };
        TeamPairStats {
            home: NormalizedStats::from_counts(home_counts),
            away: NormalizedStats::from_counts(away_counts),
        }
    } else {
        TeamPairStats {
            home: normalize_team_stats(&stats_for_team(statistics, home_id), &periods.home.full),
            away: normalize_team_stats(&stats_for_team(statistics, away_id), &periods.away.full),
        }
    };

    GameInsight {
        game_id: fixture.fixture.id.unwrap_or(0),
        title: game_title(fixture),
        league: league_summary(&fixture.league),
        teams: GameTeams {
            home: team_side(&fixture.teams.home),
            away: team_side(&fixture.teams.away),
        },
        status: status_snapshot(fixture),
        elapsed,
        score: score_line(fixture),
        goals: GoalsSnapshot {
            home: fixture.goals.home.unwrap_or(0),
            away: fixture.goals.away.unwrap_or(0),
        },
        statistics: statistics_pair,
        periods,
        events: build_timeline(events),
        lineups,
        players,
        stoppage_estimate: estimate_stoppage(elapsed, events),
    }
}
