use radar_backend::insight::periods::{aggregate, period_of, Period, PeriodCounts};
use radar_backend::models::provider::{EventClock, MatchEvent, MatchPhase, TeamRef};

const HOME: i64 = 33;
const AWAY: i64 = 40;

fn event(team_id: i64, kind: &str, detail: &str, elapsed: i64) -> MatchEvent {
    MatchEvent {
        time: EventClock {
            elapsed: Some(elapsed),
            extra: None,
            second: None,
        },
        team: TeamRef {
            id: Some(team_id),
            name: Some("Team".to_string()),
        },
        kind: Some(kind.to_string()),
        detail: Some(detail.to_string()),
        ..Default::default()
    }
}

fn sum(first: &PeriodCounts, second: &PeriodCounts) -> PeriodCounts {
    PeriodCounts {
        shots: first.shots + second.shots,
        shots_on_target: first.shots_on_target + second.shots_on_target,
        corners: first.corners + second.corners,
        fouls: first.fouls + second.fouls,
        yellow_cards: first.yellow_cards + second.yellow_cards,
        red_cards: first.red_cards + second.red_cards,
    }
}

#[test]
fn first_half_yellow_card_lands_in_the_first_bucket() {
    let events = vec![event(HOME, "Card", "Yellow Card", 23)];
    let breakdown = aggregate(&events, Some(HOME), Some(AWAY), MatchPhase::FirstHalf);

    assert_eq!(breakdown.home.first.yellow_cards, 1);
    assert_eq!(breakdown.home.second.yellow_cards, 0);
    assert_eq!(breakdown.home.full.yellow_cards, 1);
    assert_eq!(breakdown.away.full.yellow_cards, 0);
}

#[test]
fn second_half_goal_counts_as_shot_and_shot_on_target() {
    let events = vec![event(AWAY, "Goal", "Normal Goal", 81)];
    let breakdown = aggregate(&events, Some(HOME), Some(AWAY), MatchPhase::SecondHalf);

    assert_eq!(breakdown.away.second.shots, 1);
    assert_eq!(breakdown.away.second.shots_on_target, 1);
    assert_eq!(breakdown.away.full.shots, 1);
    assert_eq!(breakdown.away.full.shots_on_target, 1);
    assert_eq!(breakdown.away.first.shots, 0);
}

#[test]
fn halves_sum_to_the_full_bucket_when_every_event_is_timed() {
    let events = vec![
        event(HOME, "Card", "Yellow Card", 12),
        event(HOME, "Goal", "Normal Goal", 44),
        event(HOME, "Shot", "Shot on Target", 58),
        event(HOME, "Foul", "", 77),
        event(AWAY, "Corner", "Corner Kick", 31),
        event(AWAY, "Shot", "Shot off Target", 62),
        event(AWAY, "Card", "Red Card", 88),
    ];
    let breakdown = aggregate(&events, Some(HOME), Some(AWAY), MatchPhase::SecondHalf);

    assert_eq!(sum(&breakdown.home.first, &breakdown.home.second), breakdown.home.full);
    assert_eq!(sum(&breakdown.away.first, &breakdown.away.second), breakdown.away.full);
}

#[test]
fn first_half_added_time_stays_in_the_first_bucket_while_1h_is_in_play() {
    // Some feeds report first-half stoppage as minute 46/47.
    assert_eq!(period_of(47, MatchPhase::FirstHalf), Period::First);
    assert_eq!(period_of(47, MatchPhase::SecondHalf), Period::Second);
    assert_eq!(period_of(45, MatchPhase::SecondHalf), Period::First);

    let events = vec![event(HOME, "Card", "Yellow Card", 46)];
    let breakdown = aggregate(&events, Some(HOME), Some(AWAY), MatchPhase::FirstHalf);
    assert_eq!(breakdown.home.first.yellow_cards, 1);
    assert_eq!(breakdown.home.second.yellow_cards, 0);
}

#[test]
fn events_matching_neither_team_are_dropped() {
    let events = vec![event(777, "Goal", "Normal Goal", 30)];
    let breakdown = aggregate(&events, Some(HOME), Some(AWAY), MatchPhase::FirstHalf);

    assert_eq!(breakdown.home.full.shots, 0);
    assert_eq!(breakdown.away.full.shots, 0);
}

#[test]
fn untimed_events_count_only_towards_the_full_bucket() {
    let mut untimed = event(HOME, "Goal", "Normal Goal", 0);
    untimed.time.elapsed = None;
    let breakdown = aggregate(&[untimed], Some(HOME), Some(AWAY), MatchPhase::SecondHalf);

    assert_eq!(breakdown.home.full.shots, 1);
    assert_eq!(breakdown.home.first.shots, 0);
    assert_eq!(breakdown.home.second.shots, 0);
}
