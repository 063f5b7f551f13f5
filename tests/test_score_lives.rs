use monster_catch::lives::LivesTracker;
use monster_catch::score::{ScoreLevel, POINTS_PER_LEVEL};

use proptest::prelude::*;

// ── ScoreLevel ────────────────────────────────────────────────────────────────

#[test]
fn starts_at_zero_level_one() {
    let s = ScoreLevel::new();
    assert_eq!(s.score(), 0);
    assert_eq!(s.level(), 1);
}

#[test]
fn no_level_up_without_scoring() {
    let mut s = ScoreLevel::new();
    assert!(!s.check_level_up());
    assert!(!s.check_level_up());
    assert_eq!(s.level(), 1);
}

#[test]
fn tenth_point_levels_up() {
    let mut s = ScoreLevel::new();
    for _ in 0..9 {
        s.add_score();
    }
    assert!(!s.check_level_up());
    s.add_score();
    assert!(s.check_level_up());
    assert_eq!(s.level(), 2);
}

#[test]
fn repeated_checks_at_same_score_fire_once() {
    let mut s = ScoreLevel::new();
    for _ in 0..10 {
        s.add_score();
    }
    assert!(s.check_level_up());
    assert!(!s.check_level_up());
    assert!(!s.check_level_up());
    assert_eq!(s.level(), 2);
}

#[test]
fn level_up_seen_even_when_checked_late() {
    // Checked only once the score is already 20: one level-up, not two
    let mut s = ScoreLevel::new();
    for _ in 0..20 {
        s.add_score();
    }
    assert!(s.check_level_up());
    assert_eq!(s.level(), 2);
}

#[test]
fn missing_the_multiple_skips_the_level() {
    let mut s = ScoreLevel::new();
    for _ in 0..11 {
        s.add_score();
    }
    assert!(!s.check_level_up());
    assert_eq!(s.level(), 1);
}

proptest! {
    #[test]
    fn one_level_per_ten_points(points in 0u32..200, checks_per_point in 1usize..4) {
        let mut s = ScoreLevel::new();
        let mut fired = 0;
        for _ in 0..points {
            s.add_score();
            for _ in 0..checks_per_point {
                if s.check_level_up() {
                    fired += 1;
                }
            }
        }
        prop_assert_eq!(fired, points / POINTS_PER_LEVEL);
        prop_assert_eq!(s.level(), 1 + points / POINTS_PER_LEVEL);
    }
}

// ── LivesTracker ──────────────────────────────────────────────────────────────

#[test]
fn initialize_creates_indexed_markers() {
    let lives = LivesTracker::initialize(5);
    assert_eq!(lives.remaining(), 5);
    let indices: Vec<u32> = lives.markers().iter().map(|m| m.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    assert!(lives.has_lives_remaining());
}

#[test]
fn lose_life_drops_highest_marker() {
    let mut lives = LivesTracker::initialize(5);
    lives.lose_life();
    assert_eq!(lives.remaining(), 4);
    let indices: Vec<u32> = lives.markers().iter().map(|m| m.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
}

#[test]
fn marker_count_tracks_remaining() {
    let mut lives = LivesTracker::initialize(5);
    for expected in (0..5).rev() {
        lives.lose_life();
        assert_eq!(lives.remaining(), expected);
        assert_eq!(lives.markers().len() as u32, expected);
    }
}

#[test]
fn five_losses_end_the_game() {
    let mut lives = LivesTracker::initialize(5);
    for _ in 0..5 {
        lives.lose_life();
    }
    assert!(!lives.has_lives_remaining());
    assert!(lives.markers().is_empty());
}

#[test]
fn losing_past_zero_is_ignored() {
    let mut lives = LivesTracker::initialize(5);
    for _ in 0..6 {
        lives.lose_life();
    }
    assert_eq!(lives.remaining(), 0);
    assert!(lives.markers().is_empty());
    assert!(!lives.has_lives_remaining());
}

#[test]
fn zero_lives_from_the_start() {
    let mut lives = LivesTracker::initialize(0);
    assert!(!lives.has_lives_remaining());
    lives.lose_life();
    assert_eq!(lives.remaining(), 0);
}
