use super::*;

fn source(text: &str, speed: u64, delay: u64) -> TypewriterSource {
    TypewriterSource {
        text: text.to_owned(),
        speed: Millis(speed),
        start_delay: Millis(delay),
    }
}

#[test]
fn reveals_one_character_per_tick_and_stops() {
    let mut t = Typewriter::new(source("hi", 10, 0), Millis::ZERO);
    t.advance_to(Millis::ZERO);
    assert_eq!(t.text(), "");
    t.advance_to(Millis(10));
    assert_eq!(t.text(), "h");
    t.advance_to(Millis(20));
    assert_eq!(t.text(), "hi");
    t.advance_to(Millis(500));
    assert_eq!(t.text(), "hi");
    assert!(t.is_done());
    assert_eq!(t.display(), "hi|");
}

#[test]
fn zero_delay_starts_immediately() {
    let mut t = Typewriter::new(source("hi", 25, 0), Millis::ZERO);
    t.advance_to(Millis(24));
    assert_eq!(t.text(), "");
    t.advance_to(Millis(25));
    assert_eq!(t.text(), "h");
    t.advance_to(Millis(50));
    assert_eq!(t.text(), "hi");
    t.advance_to(Millis(75));
    assert_eq!(t.text(), "hi");
}

#[test]
fn waits_for_start_delay() {
    let mut t = Typewriter::new(TypewriterSource::default(), Millis::ZERO);
    t.advance_to(Millis(221));
    assert_eq!(t.revealed_count(), 0);
    t.advance_to(Millis(222));
    assert_eq!(t.revealed_count(), 1);
    t.advance_to(Millis(200 + 22 * 10));
    assert_eq!(t.text(), "Mom, you a");
}

#[test]
fn counts_unicode_scalars() {
    let mut t = Typewriter::new(source("né❤", 1, 0), Millis::ZERO);
    t.advance_to(Millis(2));
    assert_eq!(t.text(), "né");
    t.advance_to(Millis(3));
    assert_eq!(t.view().revealed, "né❤");
    assert!(t.view().done);
}

#[test]
fn identical_source_does_not_restart() {
    let mut t = Typewriter::new(source("hello", 10, 0), Millis::ZERO);
    t.advance_to(Millis(30));
    t.set_source(source("hello", 10, 0));
    assert_eq!(t.text(), "hel");
}

#[test]
fn changed_source_restarts_from_zero() {
    let mut t = Typewriter::new(source("hello", 10, 0), Millis::ZERO);
    t.advance_to(Millis(30));

    t.set_source(source("hello", 5, 0));
    assert_eq!(t.revealed_count(), 0);
    assert_eq!(t.pending_timers(), 1);
    t.advance_to(Millis(35));
    assert_eq!(t.text(), "h");

    t.set_source(source("bye", 5, 100));
    t.advance_to(Millis(135));
    assert_eq!(t.text(), "");
    t.advance_to(Millis(140));
    assert_eq!(t.text(), "b");
}

#[test]
fn empty_text_is_done_immediately() {
    let mut t = Typewriter::new(source("", 10, 0), Millis::ZERO);
    t.advance_to(Millis(1_000));
    assert!(t.is_done());
    assert_eq!(t.display(), "|");
}

#[test]
fn teardown_stops_typing() {
    let mut t = Typewriter::new(source("hello", 10, 0), Millis::ZERO);
    t.advance_to(Millis(10));
    t.teardown();
    t.advance_to(Millis(1_000));
    assert_eq!(t.text(), "h");
}

#[test]
fn finished_typewriter_holds_no_timers() {
    let mut t = Typewriter::new(source("hi", 10, 0), Millis::ZERO);
    t.advance_to(Millis(20));
    assert!(t.is_done());
    assert_eq!(t.pending_timers(), 0);

    t.advance_to(Millis(u64::MAX));
    assert_eq!(t.display(), "hi|");
}

#[test]
fn empty_text_never_arms_the_tick() {
    let mut t = Typewriter::new(source("", 10, 0), Millis::ZERO);
    t.advance_to(Millis::ZERO);
    assert_eq!(t.pending_timers(), 0);
}
