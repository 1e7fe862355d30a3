use std::thread;
use std::time::{Duration, Instant};

use super::signal::StopSignal;
use super::types::PlaybackInfo;

#[test]
fn raise_transitions_exactly_once() {
    let stop = StopSignal::new();
    assert!(!stop.is_raised());
    assert!(stop.raise());
    assert!(stop.is_raised());
    assert!(!stop.raise());
    assert!(stop.is_raised());
}

#[test]
fn wait_timeout_expires_when_not_raised() {
    let stop = StopSignal::new();
    let start = Instant::now();
    assert!(!stop.wait_timeout(Duration::from_millis(20)));
    assert!(start.elapsed() >= Duration::from_millis(20));
}

#[test]
fn wait_timeout_returns_immediately_once_raised() {
    let stop = StopSignal::new();
    stop.raise();
    let start = Instant::now();
    assert!(stop.wait_timeout(Duration::from_secs(5)));
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[test]
fn wait_unblocks_across_threads() {
    let stop = StopSignal::new();
    let raiser = stop.clone();

    let handle = thread::spawn(move || {
        thread::sleep(Duration::from_millis(20));
        assert!(raiser.raise());
    });

    stop.wait();
    assert!(stop.is_raised());
    handle.join().unwrap();
}

#[test]
fn default_playback_info_reports_stopped() {
    let info = PlaybackInfo::default();
    assert!(info.position.is_none());
    assert!(info.duration.is_none());
    assert!(!info.paused);
}
