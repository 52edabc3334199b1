// SPDX-License-Identifier: MIT
//
// One scan, start to finish.
//
//   banner → [rain] → hide cursor → fetch → progress × N → discoveries
//          → keywords → summary → show cursor
//
// Every way out of `run` (success, fetch failure, interrupt) shows the
// cursor before returning. The session's guard covers anything else,
// including a write error halfway through.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use rand::Rng;
use synapse_render::sparkline::DEFAULT_LIMIT;
use synapse_render::{Session, StatusKind, banner, discovery, progress, sparkline, status, summary};
use synapse_scan::{KeywordFrequency, PaperSource, ScanError, detect};
use synapse_term::terminal::INTERRUPT_EXIT_CODE;
use synapse_term::{CursorState, Interrupt, Viewport};
use thiserror::Error;

use crate::cli::Config;

/// Linked from the summary line.
pub const REPO_URL: &str = "https://github.com/CrazhHolmes/SynapseScanner";

#[derive(Debug, Error)]
pub enum RunError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] ScanError),

    #[error("interrupted")]
    Interrupted,

    #[error("terminal write failed: {0}")]
    Io(#[from] io::Error),
}

impl RunError {
    /// Process exit status for this outcome.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Fetch(_) | Self::Io(_) => 1,
            Self::Interrupted => INTERRUPT_EXIT_CODE,
        }
    }
}

/// What a completed run found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub papers: usize,
    /// Distinct patterns, not detections.
    pub patterns: usize,
    pub elapsed: Duration,
}

/// Run one scan against `source`, drawing into `session`.
///
/// # Errors
///
/// [`RunError::Fetch`] when the source fails, [`RunError::Interrupted`]
/// when `interrupt` is raised before the run completes, and
/// [`RunError::Io`] when the terminal cannot be written.
pub fn run<S, W, V, R>(
    config: &Config,
    source: &S,
    interrupt: &Interrupt,
    session: &mut Session<W, V>,
    rng: &mut R,
) -> Result<RunReport, RunError>
where
    S: PaperSource + ?Sized,
    W: Write,
    V: Viewport,
    R: Rng + ?Sized,
{
    let started = Instant::now();

    banner::render(session)?;
    if config.matrix {
        config.rain.render(session, rng, interrupt)?;
    }
    if interrupt.is_raised() {
        return interrupted(session, false);
    }

    session.acquire()?;

    let query = config.paper_query();
    tracing::info!(
        domain = source.domain(),
        terms = ?query.terms,
        max = query.max_results,
        "scan started"
    );
    status::pending(
        session,
        StatusKind::Info,
        &format!("Scanning {} ...", source.domain()),
    )?;

    if interrupt.is_raised() {
        return interrupted(session, false);
    }
    let papers = match source.fetch(&query) {
        Ok(papers) => papers,
        Err(err) => {
            tracing::error!(error = %err, "fetch failed");
            status::finish(session, StatusKind::Err, &format!("Fetch failed: {err}"))?;
            session.release()?;
            return Err(err.into());
        }
    };
    if interrupt.is_raised() {
        return interrupted(session, false);
    }

    if papers.is_empty() {
        status::finish(session, StatusKind::Warn, "No papers returned from API.")?;
        session.release()?;
        tracing::info!("scan finished empty");
        return Ok(RunReport {
            papers: 0,
            patterns: 0,
            elapsed: started.elapsed(),
        });
    }
    status::finish(
        session,
        StatusKind::Ok,
        &format!("{} papers from {}", papers.len(), source.domain()),
    )?;

    let total = papers.len();
    for (i, paper) in papers.iter().enumerate() {
        if interrupt.is_raised() {
            return interrupted(session, i > 0);
        }
        progress::render(session, &paper.url, i + 1, total)?;
        if !config.step_delay.is_zero() {
            thread::sleep(config.step_delay);
        }
    }
    if interrupt.is_raised() {
        return interrupted(session, true);
    }
    session.writer().write_all(b"\n")?;

    let discoveries = detect(&papers);
    discovery::render(session, &discoveries)?;

    let keywords = KeywordFrequency::from_papers(&papers);
    sparkline::render(session, &keywords, DEFAULT_LIMIT)?;

    let report = RunReport {
        papers: total,
        patterns: discovery::dedup(&discoveries).len(),
        elapsed: started.elapsed(),
    };
    summary::render(
        session,
        report.papers,
        report.patterns,
        report.elapsed,
        Some(REPO_URL),
    )?;

    session.release()?;
    tracing::info!(papers = report.papers, patterns = report.patterns, "scan finished");
    Ok(report)
}

/// Report the interrupt and show the cursor if it was hidden.
///
/// An open progress line is ended first so the bar stays on screen.
fn interrupted<W: Write, V: Viewport>(
    session: &mut Session<W, V>,
    progress_open: bool,
) -> Result<RunReport, RunError> {
    tracing::warn!("interrupted");
    if progress_open {
        session.writer().write_all(b"\n")?;
    }
    status::finish(session, StatusKind::Warn, "Interrupted.")?;
    if session.cursor() == CursorState::Hidden {
        session.release()?;
    }
    Err(RunError::Interrupted)
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use synapse_render::rain::Rain;
    use synapse_scan::{Paper, Query};
    use synapse_term::FixedViewport;

    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    /// Serves a fixed list of papers.
    struct Canned(Vec<Paper>);

    impl PaperSource for Canned {
        fn domain(&self) -> &str {
            "test.invalid"
        }

        fn fetch(&self, _: &Query) -> Result<Vec<Paper>, ScanError> {
            Ok(self.0.clone())
        }
    }

    /// Always fails.
    struct Down;

    impl PaperSource for Down {
        fn domain(&self) -> &str {
            "test.invalid"
        }

        fn fetch(&self, _: &Query) -> Result<Vec<Paper>, ScanError> {
            Err(ScanError::Status(503))
        }
    }

    /// Counts fetches and serves nothing.
    #[derive(Default)]
    struct Counting {
        calls: Cell<usize>,
    }

    impl PaperSource for Counting {
        fn domain(&self) -> &str {
            "test.invalid"
        }

        fn fetch(&self, _: &Query) -> Result<Vec<Paper>, ScanError> {
            self.calls.set(self.calls.get() + 1);
            Ok(Vec::new())
        }
    }

    /// Writer that raises `interrupt` once `trigger` has been written.
    struct Tripwire<'a> {
        sink: &'a mut Vec<u8>,
        trigger: &'static [u8],
        interrupt: Interrupt,
        tripped: bool,
    }

    impl Write for Tripwire<'_> {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.sink.extend_from_slice(buf);
            if !self.tripped && buf.windows(self.trigger.len()).any(|w| w == self.trigger) {
                self.tripped = true;
                self.interrupt.raise();
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn config() -> Config {
        let mut config = Config::resolve(Cli::parse_from(["synapse"]), |_| None);
        config.step_delay = Duration::ZERO;
        config.rain = Rain::new(1).with_frame_delay(Duration::ZERO);
        config
    }

    fn papers() -> Vec<Paper> {
        vec![
            Paper::new(
                "Entanglement witnesses",
                "A quantum protocol using neural decoders.",
                "https://arxiv.org/abs/2401.00001v1",
                "arxiv.org",
            ),
            Paper::new(
                "Negative index metamaterial",
                "Quantum optics at the bench.",
                "https://arxiv.org/abs/2401.00002v1",
                "arxiv.org",
            ),
            Paper::new(
                "Galaxy rotation",
                "Dark matter halos.",
                "https://arxiv.org/abs/2401.00003v1",
                "arxiv.org",
            ),
        ]
    }

    fn assert_cursor_restored(out: &str) {
        assert!(out.ends_with("\x1b[?25h"), "output does not end by showing the cursor");
        assert_eq!(out.matches("\x1b[?25l").count(), 1);
        assert_eq!(out.matches("\x1b[?25h").count(), 1);
    }

    #[test]
    fn normal_run_restores_cursor() {
        let mut sink = Vec::new();
        let report = {
            let mut session = Session::new(&mut sink, config().theme(), FixedViewport(80));
            let report = run(
                &config(),
                &Canned(papers()),
                &Interrupt::new(),
                &mut session,
                &mut StdRng::seed_from_u64(0),
            )
            .unwrap();
            assert_eq!(session.cursor(), CursorState::Visible);
            report
        };
        assert_eq!(report.papers, 3);
        // quantum, metamaterial, AI
        assert_eq!(report.patterns, 3);

        let out = String::from_utf8(sink).unwrap();
        assert_cursor_restored(&out);
        assert!(out.contains("3/3  100%"));
        assert!(out.contains("Discoveries"));
        assert!(out.contains("keywords"));
        assert!(out.contains("3 papers"));
        assert!(out.contains(REPO_URL));
    }

    #[test]
    fn fetch_error_restores_cursor() {
        let mut sink = Vec::new();
        let err = {
            let mut session = Session::new(&mut sink, config().theme(), FixedViewport(80));
            let err = run(
                &config(),
                &Down,
                &Interrupt::new(),
                &mut session,
                &mut StdRng::seed_from_u64(0),
            )
            .unwrap_err();
            assert_eq!(session.cursor(), CursorState::Visible);
            err
        };
        assert!(matches!(err, RunError::Fetch(ScanError::Status(503))));
        assert_eq!(err.exit_code(), 1);

        let out = String::from_utf8(sink).unwrap();
        assert_cursor_restored(&out);
        assert!(out.contains("✘"));
        assert!(out.contains("Fetch failed"));
        assert!(!out.contains("Discoveries"));
    }

    #[test]
    fn interrupt_mid_progress_restores_cursor() {
        let interrupt = Interrupt::new();
        let mut sink = Vec::new();
        let err = {
            let wire = Tripwire {
                sink: &mut sink,
                trigger: b"1/3",
                interrupt: interrupt.clone(),
                tripped: false,
            };
            let mut session = Session::new(wire, config().theme(), FixedViewport(80));
            let err = run(
                &config(),
                &Canned(papers()),
                &interrupt,
                &mut session,
                &mut StdRng::seed_from_u64(0),
            )
            .unwrap_err();
            assert_eq!(session.cursor(), CursorState::Visible);
            err
        };
        assert!(matches!(err, RunError::Interrupted));
        assert_eq!(err.exit_code(), 130);

        let out = String::from_utf8(sink).unwrap();
        assert_cursor_restored(&out);
        assert!(!out.contains("2/3"), "progress continued after the interrupt");
        assert!(!out.contains("Discoveries"));

        // the bar line is ended, not overwritten
        let bar = out.find("1/3").unwrap();
        let tail = &out[bar..];
        let newline = tail.find('\n').unwrap();
        let notice = tail.find("Interrupted.").unwrap();
        assert!(newline < notice);
        assert!(tail[..newline].contains("33%"));
    }

    #[test]
    fn interrupt_before_run_skips_fetch() {
        let interrupt = Interrupt::new();
        interrupt.raise();
        let source = Counting::default();
        let mut sink = Vec::new();
        let err = {
            let mut session = Session::new(&mut sink, config().theme(), FixedViewport(80));
            let err = run(
                &config(),
                &source,
                &interrupt,
                &mut session,
                &mut StdRng::seed_from_u64(0),
            )
            .unwrap_err();
            assert_eq!(session.cursor(), CursorState::Visible);
            err
        };
        assert!(matches!(err, RunError::Interrupted));
        assert_eq!(source.calls.get(), 0, "fetched after the user interrupted");

        let out = String::from_utf8(sink).unwrap();
        assert!(out.contains("Interrupted."));
        assert!(!out.contains("Scanning"));
        assert!(!out.contains("\x1b[?25l"), "cursor hidden for a run that never started");
    }

    #[test]
    fn interrupt_during_rain_skips_fetch() {
        let interrupt = Interrupt::new();
        let source = Counting::default();
        let mut sink = Vec::new();
        let err = {
            let wire = Tripwire {
                sink: &mut sink,
                // only rain colors have a zero blue channel
                trigger: b";0m",
                interrupt: interrupt.clone(),
                tripped: false,
            };
            let mut config = config();
            config.matrix = true;
            let mut session = Session::new(wire, config.theme(), FixedViewport(20));
            run(
                &config,
                &source,
                &interrupt,
                &mut session,
                &mut StdRng::seed_from_u64(1),
            )
            .unwrap_err()
        };
        assert!(matches!(err, RunError::Interrupted));
        assert_eq!(source.calls.get(), 0);

        let out = String::from_utf8(sink).unwrap();
        // one frame, then the clear
        assert_eq!(out.matches(";0m").count(), 1);
        assert_eq!(out.matches("\x1b[H\x1b[J").count(), 1);
        assert!(out.contains("Interrupted."));
    }

    #[test]
    fn write_error_still_restores_on_drop() {
        /// Accepts the first `left` writes, then fails.
        struct Flaky<'a> {
            sink: &'a mut Vec<u8>,
            left: usize,
        }

        impl Write for Flaky<'_> {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                if self.left == 0 && buf != b"\x1b[?25h" {
                    return Err(io::Error::other("gone"));
                }
                self.left = self.left.saturating_sub(1);
                self.sink.extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut sink = Vec::new();
        {
            // banner + hide cursor, then the pending status fails
            let flaky = Flaky { sink: &mut sink, left: 2 };
            let mut session = Session::new(flaky, config().theme(), FixedViewport(80));
            let err = run(
                &config(),
                &Canned(papers()),
                &Interrupt::new(),
                &mut session,
                &mut StdRng::seed_from_u64(0),
            )
            .unwrap_err();
            assert!(matches!(err, RunError::Io(_)));
            assert_eq!(session.cursor(), CursorState::Hidden);
        }
        let out = String::from_utf8(sink).unwrap();
        assert!(out.ends_with("\x1b[?25h"));
    }

    #[test]
    fn empty_result_is_success() {
        let mut sink = Vec::new();
        let report = {
            let mut session = Session::new(&mut sink, config().theme(), FixedViewport(80));
            run(
                &config(),
                &Canned(Vec::new()),
                &Interrupt::new(),
                &mut session,
                &mut StdRng::seed_from_u64(0),
            )
            .unwrap()
        };
        assert_eq!(report.papers, 0);
        assert_eq!(report.patterns, 0);

        let out = String::from_utf8(sink).unwrap();
        assert_cursor_restored(&out);
        assert!(out.contains("No papers returned from API."));
        assert!(!out.contains("No breakthrough patterns detected."));
        assert!(!out.contains("keywords"));
        assert!(!out.contains("Done"));
    }

    #[test]
    fn matrix_runs_before_cursor_hides() {
        let mut sink = Vec::new();
        {
            let mut config = config();
            config.matrix = true;
            let mut session = Session::new(&mut sink, config.theme(), FixedViewport(20));
            run(
                &config,
                &Canned(Vec::new()),
                &Interrupt::new(),
                &mut session,
                &mut StdRng::seed_from_u64(3),
            )
            .unwrap();
        }
        let out = String::from_utf8(sink).unwrap();
        let clear = out.find("\x1b[H\x1b[J").unwrap();
        let hide = out.find("\x1b[?25l").unwrap();
        assert!(clear < hide);
    }
}
