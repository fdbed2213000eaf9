use super::*;

#[derive(Clone, Debug, PartialEq)]
enum Ev {
    A,
    B,
    Tick,
}

fn drain<E: Clone>(q: &mut TimerQueue<E>, until: Millis) -> Vec<Fired<E>> {
    std::iter::from_fn(|| q.pop_due(until)).collect()
}

#[test]
fn once_fires_at_due_time_and_only_once() {
    let mut q = TimerQueue::new(Millis(100));
    let id = q.once(Millis(50), Ev::A);
    assert!(q.is_pending(id));

    assert_eq!(q.pop_due(Millis(149)), None);
    assert_eq!(q.now(), Millis(149));

    let fired = q.pop_due(Millis(1_000)).unwrap();
    assert_eq!(fired.id, id);
    assert_eq!(fired.at, Millis(150));
    assert_eq!(fired.event, Ev::A);
    assert_eq!(q.now(), Millis(150));
    assert!(!q.is_pending(id));
    assert_eq!(q.pop_due(Millis(1_000)), None);
    assert_eq!(q.now(), Millis(1_000));
}

#[test]
fn ties_fire_in_scheduling_order() {
    let mut q = TimerQueue::default();
    q.once(Millis(10), Ev::B);
    q.once(Millis(10), Ev::A);
    q.once(Millis(5), Ev::Tick);
    let order: Vec<Ev> = drain(&mut q, Millis(10)).into_iter().map(|f| f.event).collect();
    assert_eq!(order, vec![Ev::Tick, Ev::B, Ev::A]);
}

#[test]
fn every_rearms_until_cancelled() {
    let mut q = TimerQueue::default();
    let id = q.every(Millis(30), Ev::Tick);
    let at: Vec<u64> = drain(&mut q, Millis(100)).iter().map(|f| f.at.0).collect();
    assert_eq!(at, vec![30, 60, 90]);
    assert!(q.is_pending(id));

    assert!(q.cancel(id));
    assert!(!q.cancel(id));
    assert!(drain(&mut q, Millis(1_000)).is_empty());
    assert_eq!(q.pending(), 0);
}

#[test]
fn cancelled_one_shot_never_fires() {
    let mut q = TimerQueue::default();
    let first = q.once(Millis(20), Ev::A);
    q.once(Millis(40), Ev::B);
    q.cancel(first);
    let fired = drain(&mut q, Millis(100));
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].event, Ev::B);
}

#[test]
fn zero_interval_is_clamped() {
    let mut q = TimerQueue::default();
    q.every(Millis(0), Ev::Tick);
    assert_eq!(drain(&mut q, Millis(3)).len(), 3);
}

#[test]
fn clock_never_moves_backwards() {
    let mut q: TimerQueue<Ev> = TimerQueue::new(Millis(500));
    assert_eq!(q.pop_due(Millis(100)), None);
    assert_eq!(q.now(), Millis(500));
}

#[test]
fn timers_scheduled_while_draining_use_fire_time() {
    let mut q = TimerQueue::default();
    q.once(Millis(10), Ev::A);
    let fired = q.pop_due(Millis(100)).unwrap();
    assert_eq!(fired.at, Millis(10));
    q.once(Millis(15), Ev::B);
    let next = q.pop_due(Millis(100)).unwrap();
    assert_eq!(next.at, Millis(25));
}

#[test]
fn repeating_timer_retires_at_end_of_clock() {
    let mut q = TimerQueue::new(Millis(u64::MAX - 3000));
    let id = q.every(Millis(1000), Ev::Tick);
    let fired: Vec<Fired<Ev>> = std::iter::from_fn(|| q.pop_due(Millis(u64::MAX)))
        .take(10)
        .collect();
    assert_eq!(fired.len(), 3);
    assert_eq!(fired[2].at, Millis(u64::MAX));
    assert!(!q.is_pending(id));
    assert_eq!(q.pop_due(Millis(u64::MAX)), None);
    assert_eq!(q.now(), Millis(u64::MAX));
}

#[test]
fn one_shot_at_end_of_clock_fires_once() {
    let mut q = TimerQueue::new(Millis(u64::MAX - 5));
    q.once(Millis(100), Ev::A);
    let fired = q.pop_due(Millis(u64::MAX)).unwrap();
    assert_eq!(fired.at, Millis(u64::MAX));
    assert_eq!(q.pop_due(Millis(u64::MAX)), None);
}
