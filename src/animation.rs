// Copyright (c) 2026 rezky_nightky

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
    QueueableCommand,
};

use crate::banner;
use crate::palette::Tier;
use crate::rain::Rain;
use crate::runtime::LoopState;
use crate::surface::Surface;

const INTRO_TEXT: &str = "Starting the downpour...\nPress Ctrl+C to exit";
const EXIT_TEXT: &str = "Exiting the downpour...";

/// Granularity of the interruptible waits; a shutdown request aborts a
/// pending sleep within one slice.
const SLEEP_SLICE: Duration = Duration::from_millis(10);

#[derive(Clone, Copy, Debug)]
pub struct LoopConfig {
    pub tick: Duration,
    pub intro_pause: Duration,
    pub exit_pause: Duration,
    pub banner: bool,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(50),
            intro_pause: Duration::from_secs(2),
            exit_pause: Duration::from_secs(2),
            banner: true,
        }
    }
}

fn sleep_interruptible(total: Duration, stop: &AtomicBool) {
    let deadline = Instant::now() + total;
    while !stop.load(Ordering::Relaxed) {
        let now = Instant::now();
        if now >= deadline {
            break;
        }
        thread::sleep((deadline - now).min(SLEEP_SLICE));
    }
}

/// Owns the frame cadence: clear, advance, render, sleep, repeat. The
/// loop runs until the shutdown flag is raised, then walks the terminate
/// sequence (cursor back, alert-colored exit screen, screen clear).
pub struct AnimationLoop<W: Write> {
    surface: Surface,
    rain: Rain,
    out: W,
    shutdown: Arc<AtomicBool>,
    cfg: LoopConfig,
    state: LoopState,
    frame: u64,
}

impl<W: Write> AnimationLoop<W> {
    pub fn new(
        surface: Surface,
        rain: Rain,
        cfg: LoopConfig,
        shutdown: Arc<AtomicBool>,
        out: W,
    ) -> Self {
        Self {
            surface,
            rain,
            out,
            shutdown,
            cfg,
            state: LoopState::Idle,
            frame: 0,
        }
    }

    #[allow(dead_code)]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[allow(dead_code)]
    pub fn frames_drawn(&self) -> u64 {
        self.frame
    }

    pub fn run(&mut self) -> io::Result<()> {
        if self.cfg.banner {
            self.intro()?;
        }

        self.out
            .queue(Clear(ClearType::All))?
            .queue(cursor::Hide)?
            .flush()?;
        self.state = LoopState::Running;

        while !self.shutdown.load(Ordering::Relaxed) {
            self.surface.clear();
            self.rain.advance_all(self.frame, &mut self.surface);
            self.surface.render(&mut self.out)?;
            sleep_interruptible(self.cfg.tick, &self.shutdown);
            self.frame += 1;
        }

        self.terminate()
    }

    fn intro(&mut self) -> io::Result<()> {
        let width = self.surface.columns() as usize;
        let tint = self.surface.palette().color(Tier::Mid);
        for line in banner::boxed(INTRO_TEXT, width, '-') {
            if let Some(color) = tint {
                self.out.queue(SetForegroundColor(color))?;
            }
            self.out
                .queue(Print(line))?
                .queue(ResetColor)?
                .queue(Print('\n'))?;
        }
        self.out.flush()?;
        sleep_interruptible(self.cfg.intro_pause, &self.shutdown);
        Ok(())
    }

    /// The only path out of `Running`. Restores cursor visibility
    /// exactly once, shows the exit screen, then leaves a clean screen
    /// behind.
    fn terminate(&mut self) -> io::Result<()> {
        self.state = LoopState::Terminated;

        self.out
            .queue(cursor::Show)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(ResetColor)?;

        if self.cfg.banner {
            // Lower the flag so a second interrupt cuts the pause short.
            self.shutdown.store(false, Ordering::Relaxed);

            self.out.queue(Clear(ClearType::All))?;
            self.rain.set_error_mode(true);
            self.surface.clear();
            self.rain.advance_all(self.frame, &mut self.surface);
            self.surface.render(&mut self.out)?;

            let width = self.surface.columns() as usize;
            self.out.queue(Print('\n'))?;
            if let Some(color) = self.surface.palette().color(Tier::Alert) {
                self.out.queue(SetForegroundColor(color))?;
            }
            self.out
                .queue(Print(banner::center(EXIT_TEXT, width)))?
                .queue(ResetColor)?
                .queue(Print('\n'))?
                .flush()?;

            sleep_interruptible(self.cfg.exit_pause, &self.shutdown);
        }

        self.out
            .queue(Clear(ClearType::All))?
            .queue(cursor::MoveTo(0, 0))?
            .flush()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::palette::build_palette;
    use crate::runtime::{ColorMode, ColorScheme};

    const SHOW_CURSOR: &[u8] = b"\x1b[?25h";

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack
            .windows(needle.len())
            .filter(|w| *w == needle)
            .count()
    }

    fn make_loop(cfg: LoopConfig, shutdown: Arc<AtomicBool>) -> AnimationLoop<Vec<u8>> {
        let palette = build_palette(ColorScheme::Green, ColorMode::Color256);
        let surface = Surface::new(10, 5, palette);
        let rain = Rain::new(10, 5, vec!['0', '1'], false, StdRng::seed_from_u64(5));
        AnimationLoop::new(surface, rain, cfg, shutdown, Vec::new())
    }

    fn quick_cfg() -> LoopConfig {
        LoopConfig {
            tick: Duration::from_millis(1),
            intro_pause: Duration::from_millis(0),
            exit_pause: Duration::from_millis(0),
            banner: false,
        }
    }

    #[test]
    fn starts_idle() {
        let shutdown = Arc::new(AtomicBool::new(false));
        let l = make_loop(quick_cfg(), shutdown);
        assert_eq!(l.state(), LoopState::Idle);
    }

    #[test]
    fn interrupt_terminates_and_shows_the_cursor_once() {
        let shutdown = Arc::new(AtomicBool::new(false));
        let mut l = make_loop(quick_cfg(), Arc::clone(&shutdown));

        let trigger = Arc::clone(&shutdown);
        let t = thread::spawn(move || {
            thread::sleep(Duration::from_millis(40));
            trigger.store(true, Ordering::Relaxed);
        });

        l.run().unwrap();
        t.join().unwrap();

        assert_eq!(l.state(), LoopState::Terminated);
        assert!(l.frames_drawn() > 0);
        assert_eq!(count(&l.out, SHOW_CURSOR), 1);
    }

    #[test]
    fn preraised_flag_still_walks_the_terminate_sequence() {
        let shutdown = Arc::new(AtomicBool::new(true));
        let mut l = make_loop(quick_cfg(), shutdown);

        l.run().unwrap();

        assert_eq!(l.state(), LoopState::Terminated);
        assert_eq!(l.frames_drawn(), 0);
        assert_eq!(count(&l.out, SHOW_CURSOR), 1);
    }

    #[test]
    fn exit_screen_renders_in_the_alert_color() {
        let mut cfg = quick_cfg();
        cfg.banner = true;
        let shutdown = Arc::new(AtomicBool::new(true));
        let mut l = make_loop(cfg, shutdown);

        l.run().unwrap();

        let text = String::from_utf8(l.out.clone()).unwrap();
        // 256-color green theme: alert tier is ansi 196.
        assert!(text.contains("\x1b[38;5;196m"));
        assert!(text.contains("Exiting the downpour..."));
        assert_eq!(count(&l.out, SHOW_CURSOR), 1);
    }
}
