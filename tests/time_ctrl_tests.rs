// tests/time_ctrl_tests.rs

use read_my_mind_engine::domain::game::{GameMode, GameState, Phase};
use read_my_mind_engine::time_ctrl::{
    due_timer, Clock, DueTimer, ManualClock, TimingProfile, TimingRules,
};

#[test]
fn timing_profiles() {
    assert_eq!(
        TimingRules::from_profile(TimingProfile::Standard),
        TimingRules::new(1_500, Some(60), None)
    );
    assert_eq!(
        TimingRules::from_profile(TimingProfile::Party).round_break_secs,
        Some(5)
    );
    let untimed = TimingRules::from_profile(TimingProfile::Untimed);
    assert_eq!(untimed.turn_deadline_from(10), None);
    assert_eq!(untimed.next_round_from(10), None);
}

#[test]
fn deadlines_are_counted_from_now() {
    let rules = TimingRules::party();
    assert_eq!(rules.turn_deadline_from(1_000), Some(61_000));
    assert_eq!(rules.next_round_from(1_000), Some(6_000));
    assert_eq!(rules.turn_deadline_from(u64::MAX), Some(u64::MAX));
}

#[test]
fn manual_clock_clones_share_time() {
    let clock = ManualClock::starting_at(100);
    let other = clock.clone();

    clock.advance_ms(50);
    assert_eq!(other.now_ms(), 150);

    other.advance_secs(2);
    assert_eq!(clock.now_ms(), 2_150);

    clock.set(7);
    assert_eq!(other.now_ms(), 7);
}

#[test]
fn due_timer_looks_only_at_current_phase() {
    let mut s = GameState::waiting(GameMode::Coop, 10, 3);
    s.deal_ready_at = Some(100);
    s.turn_deadline = Some(200);
    s.next_round_at = Some(300);

    // В Waiting таймеры не действуют.
    assert_eq!(due_timer(&s, 1_000), DueTimer::None);

    s.phase = Phase::Dealing;
    assert_eq!(due_timer(&s, 99), DueTimer::None);
    assert_eq!(due_timer(&s, 100), DueTimer::DealSettled);

    s.phase = Phase::Playing;
    assert_eq!(due_timer(&s, 199), DueTimer::None);
    assert_eq!(due_timer(&s, 200), DueTimer::TurnExpired);

    s.phase = Phase::RoundBreak;
    assert_eq!(due_timer(&s, 300), DueTimer::RoundBreakOver);

    s.phase = Phase::RoundEnd;
    assert_eq!(due_timer(&s, 1_000), DueTimer::None);

    s.phase = Phase::GameOver;
    assert_eq!(due_timer(&s, 1_000), DueTimer::None);
}

#[test]
fn missing_timer_is_never_due() {
    let mut s = GameState::waiting(GameMode::Versus, 8, 3);
    s.phase = Phase::Playing;
    assert_eq!(due_timer(&s, u64::MAX), DueTimer::None);
}
