mod common;

use std::time::{Duration, Instant};

use monster_catch::sound::{SoundClip, SoundScheduler};

use common::{AudioCall, FakeAudio};

const LIMIT: Duration = Duration::from_millis(200);

fn scheduler(audio: FakeAudio, cooldown: u32) -> SoundScheduler<FakeAudio> {
    SoundScheduler::new(audio, cooldown, SoundClip::Move1, LIMIT)
}

// ── Ambient ───────────────────────────────────────────────────────────────────

#[test]
fn ambient_waits_for_cooldown() {
    let mut s = scheduler(FakeAudio::default(), 3);
    s.maybe_play_ambient();
    s.maybe_play_ambient();
    assert!(s.player().calls.is_empty());
    s.maybe_play_ambient();
    assert_eq!(s.player().played(), vec![SoundClip::Move1]);
    assert_eq!(s.counter(), 0);
}

#[test]
fn ambient_repeats_every_cooldown() {
    let mut s = scheduler(FakeAudio::default(), 3);
    for _ in 0..9 {
        s.maybe_play_ambient();
    }
    assert_eq!(s.player().played().len(), 3);
}

#[test]
fn ambient_alternates_with_secondary() {
    let mut s = scheduler(FakeAudio::default(), 1).with_secondary(SoundClip::Move2);
    for _ in 0..4 {
        s.maybe_play_ambient();
    }
    assert_eq!(
        s.player().played(),
        vec![SoundClip::Move1, SoundClip::Move2, SoundClip::Move1, SoundClip::Move2]
    );
}

#[test]
fn cooldown_zero_plays_every_frame() {
    let mut s = scheduler(FakeAudio::default(), 0);
    s.maybe_play_ambient();
    s.maybe_play_ambient();
    assert_eq!(s.player().played().len(), 2);
}

// ── Cooldown adjustment ───────────────────────────────────────────────────────

#[test]
fn adjust_cooldown_tightens() {
    let mut s = scheduler(FakeAudio::default(), 10);
    s.adjust_cooldown(-1);
    assert_eq!(s.cooldown(), 9);
    s.adjust_cooldown(2);
    assert_eq!(s.cooldown(), 11);
}

#[test]
fn adjust_cooldown_never_goes_negative() {
    let mut s = scheduler(FakeAudio::default(), 1);
    s.adjust_cooldown(-5);
    assert_eq!(s.cooldown(), 0);
}

// ── Override ──────────────────────────────────────────────────────────────────

#[test]
fn override_with_nothing_playing_just_plays() {
    let mut s = scheduler(FakeAudio::default(), 10);
    s.override_and_play(false, SoundClip::Caught);
    assert_eq!(s.player().calls, vec![AudioCall::Play(SoundClip::Caught)]);
    assert_eq!(s.current(), Some(SoundClip::Caught));
}

#[test]
fn override_stops_the_current_clip_first() {
    let mut s = scheduler(FakeAudio::default(), 1);
    s.maybe_play_ambient();
    s.override_and_play(false, SoundClip::Landed);
    assert_eq!(
        s.player().calls,
        vec![
            AudioCall::Play(SoundClip::Move1),
            AudioCall::Stop(SoundClip::Move1),
            AudioCall::Play(SoundClip::Landed),
        ]
    );
}

#[test]
fn override_does_not_touch_ambient_counter() {
    let mut s = scheduler(FakeAudio::default(), 5);
    s.maybe_play_ambient();
    s.maybe_play_ambient();
    s.override_and_play(false, SoundClip::Caught);
    assert_eq!(s.counter(), 2);
}

#[test]
fn blocking_override_waits_for_quiet() {
    let mut s = scheduler(FakeAudio::busy_for(5), 10);
    s.override_and_play(true, SoundClip::Caught);
    assert_eq!(s.player().busy_polls.get(), 0);
}

#[test]
fn non_blocking_override_returns_while_busy() {
    let mut s = scheduler(FakeAudio::busy_for(5), 10);
    s.override_and_play(false, SoundClip::Caught);
    assert_eq!(s.player().busy_polls.get(), 5);
}

#[test]
fn blocking_override_gives_up_at_wait_limit() {
    let mut s = scheduler(FakeAudio::stuck(), 10);
    let started = Instant::now();
    s.override_and_play(true, SoundClip::Landed);
    let waited = started.elapsed();
    assert!(waited >= LIMIT);
    assert!(waited < Duration::from_secs(5));
}

#[test]
fn clip_metadata() {
    assert_eq!(SoundClip::Move1.file_name(), "Monster_Move1.wav");
    assert_eq!(SoundClip::Caught.file_name(), "Monster_Died.wav");
    assert_eq!(SoundClip::Move1.volume(), 0.5);
    assert_eq!(SoundClip::Landed.volume(), 1.0);
}
