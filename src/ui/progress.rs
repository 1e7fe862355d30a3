//! The once-per-tick progress reporter and its bar rendering.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor::MoveToColumn,
    execute,
    style::Print,
    terminal::{Clear, ClearType},
};
use log::warn;

use crate::audio::{PlaybackSession, StopSignal};
use crate::config::UiSettings;

/// Integer percentage of `position` within `duration`, clamped to 100.
///
/// A zero or unknown duration reports 0 instead of dividing by zero; the bar
/// simply stays empty until the sink drains.
fn percent(position: Duration, duration: Option<Duration>) -> u64 {
    match duration {
        Some(d) if d.as_secs() > 0 => (position.as_secs() * 100 / d.as_secs()).min(100),
        _ => 0,
    }
}

/// Render a `width`-cell bar: `=` for the played portion, `>` at the
/// transition, spaces for the rest. Always `width + 2` characters.
fn render_bar(percent: u64, width: usize) -> String {
    let filled = (percent as usize * width) / 100;
    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    for i in 0..width {
        if i < filled {
            bar.push('=');
        } else if i == filled {
            bar.push('>');
        } else {
            bar.push(' ');
        }
    }
    bar.push(']');
    bar
}

/// One status line for the given transport state.
fn status_line(position: Duration, duration: Option<Duration>, paused: bool, width: usize) -> String {
    let p = percent(position, duration);
    let mut line = render_bar(p, width);
    line.push_str(&format!(" {p:3}%"));
    if paused {
        line.push_str(" [paused]");
    }
    line
}

/// Poll the session once per tick and redraw the status line in place until
/// playback reports the stopped sentinel or the stop signal is raised.
///
/// Always raises the stop signal on the way out so the coordinator unblocks
/// even when no key was ever pressed.
pub fn run_reporter(session: &PlaybackSession, stop: &StopSignal, ui: &UiSettings) {
    let tick = Duration::from_millis(ui.refresh_ms);
    let mut out = io::stdout();

    loop {
        let info = session.snapshot();
        let Some(position) = info.position else {
            break;
        };

        let line = status_line(position, info.duration, info.paused, ui.bar_width);
        if let Err(e) = execute!(
            out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(line)
        ) {
            warn!("progress redraw failed: {e}");
            break;
        }

        if stop.wait_timeout(tick) {
            break;
        }
    }

    stop.raise();
    let _ = execute!(out, Print("\r\n"));
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_handles_zero_and_unknown_durations() {
        assert_eq!(percent(Duration::from_secs(10), None), 0);
        assert_eq!(percent(Duration::from_secs(10), Some(Duration::ZERO)), 0);
    }

    #[test]
    fn percent_is_integer_division_clamped_to_100() {
        let dur = Some(Duration::from_secs(200));
        assert_eq!(percent(Duration::ZERO, dur), 0);
        assert_eq!(percent(Duration::from_secs(50), dur), 25);
        assert_eq!(percent(Duration::from_secs(199), dur), 99);
        assert_eq!(percent(Duration::from_secs(200), dur), 100);
        // Position past the duration (decoder overshoot) stays clamped.
        assert_eq!(percent(Duration::from_secs(300), dur), 100);
    }

    #[test]
    fn render_bar_is_always_width_plus_brackets() {
        for p in [0, 1, 49, 50, 99, 100] {
            assert_eq!(render_bar(p, 50).chars().count(), 52);
        }
    }

    #[test]
    fn render_bar_marks_the_transition() {
        assert_eq!(render_bar(0, 4), "[>   ]");
        assert_eq!(render_bar(50, 4), "[==> ]");
        assert_eq!(render_bar(100, 4), "[====]");
    }

    #[test]
    fn render_bar_fill_scales_with_width() {
        let bar = render_bar(50, 50);
        assert_eq!(bar.matches('=').count(), 25);
        assert_eq!(bar.matches('>').count(), 1);
    }

    #[test]
    fn status_line_tags_paused_playback() {
        let line = status_line(Duration::from_secs(5), Some(Duration::from_secs(10)), true, 10);
        assert!(line.ends_with("[paused]"));
        assert!(line.contains("50%"));

        let line = status_line(Duration::from_secs(5), Some(Duration::from_secs(10)), false, 10);
        assert!(!line.contains("[paused]"));
    }
}
