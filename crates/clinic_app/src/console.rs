//! Console rendering of batch progress and results.
//!
//! The reporter only observes outcomes; nothing here feeds back into the
//! batch driver.

use std::fmt::Display;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use clinic_core::{Job, Outcome, ResolvedTarget, RunTally};
use clinic_engine::{JobProgress, Reporter, RunMode};
use owo_colors::{OwoColorize, Style};

use crate::reactions::{self, Rotation};

/// Every n-th job in lively mode gets an aside under its progress line.
const ASIDE_EVERY: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Plain status lines only.
    Boring,
    Lively,
    Chaos,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleStyle {
    pub tone: Tone,
    pub colors: bool,
}

impl ConsoleStyle {
    /// Boring output never uses colors; otherwise colors follow `is_terminal`.
    pub fn from_flags(boring: bool, chaos: bool, is_terminal: bool) -> Self {
        let tone = match (boring, chaos) {
            (true, _) => Tone::Boring,
            (false, true) => Tone::Chaos,
            (false, false) => Tone::Lively,
        };
        Self {
            tone,
            colors: tone != Tone::Boring && is_terminal,
        }
    }

    pub fn plain(tone: Tone) -> Self {
        Self {
            tone,
            colors: false,
        }
    }
}

pub struct ConsoleReporter<W: Write> {
    out: W,
    style: ConsoleStyle,
    rotation: Rotation,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, style: ConsoleStyle) -> Self {
        Self {
            out,
            style,
            rotation: Rotation::default(),
        }
    }

    fn boring(&self) -> bool {
        self.style.tone == Tone::Boring
    }

    fn chaos(&self) -> bool {
        self.style.tone == Tone::Chaos
    }

    fn paint(&self, text: impl Display, style: Style) -> String {
        if self.style.colors {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn line(&mut self, text: impl Display) {
        // Console output is best effort; a closed stdout must not stop the batch.
        let _ = writeln!(self.out, "{text}");
    }

    pub fn startup(&mut self) {
        match self.style.tone {
            Tone::Boring => self.line(reactions::BORING_STARTUP),
            Tone::Lively => {
                let banner = self.rotation.pick(reactions::STARTUP);
                let painted = self.paint(banner, Style::new().cyan().bold());
                self.line(painted);
            }
            Tone::Chaos => {
                let banner = self.rotation.pick(reactions::CHAOS_STARTUP);
                let painted = self.paint(banner, Style::new().magenta().bold());
                self.line(painted);
            }
        }
    }

    pub fn manual_header(&mut self, jobs: usize, years: usize, ensembles: usize) {
        let lines = [
            format!("Jobs queued: {jobs}"),
            format!("Years: {years}"),
            format!("Ensembles: {ensembles}"),
        ];
        self.line("");
        for text in lines {
            let painted = self.paint(text, Style::new().bold());
            self.line(painted);
        }
    }

    pub fn discovery_header(&mut self, years: usize) {
        self.line("");
        let mode = self.paint("Discovery mode enabled", Style::new().bold());
        self.line(mode);
        let count = self.paint(format!("Years to scan: {years}"), Style::new().bold());
        self.line(count);
    }

    pub fn summary(&mut self, tally: &RunTally, output_dir: &Path) {
        if self.boring() {
            let rule = "=".repeat(50);
            self.line("");
            self.line(&rule);
            self.line("SUMMARY");
            self.line(&rule);
            self.line(format!("Successfully Downloaded: {}", tally.success));
            self.line(format!("Already Existed: {}", tally.duplicate));
            self.line(format!("Failed: {}", tally.failed));
            self.line(format!("Output Directory: {}", output_dir.display()));
            self.line(&rule);
            return;
        }

        let header = self.rotation.pick(reactions::SUMMARY_HEADER);
        let outro = self.rotation.pick(reactions::SUMMARY_OUTRO);
        let rule = self.paint("=".repeat(50), Style::new().bold());
        let header = self.paint(format!("  {header}"), Style::new().bold());
        let green = Style::new().green();
        let success = self.paint(format!("  ✓ Downloaded: {}", tally.success), green);
        let yellow = Style::new().yellow();
        let duplicate = self.paint(format!("  ⊘ Already had: {}", tally.duplicate), yellow);
        let failed = self.paint(format!("  ✗ Failed: {}", tally.failed), Style::new().red());
        let cyan = Style::new().cyan();
        let hoard = self.paint(format!("  Archive: {}", output_dir.display()), cyan);
        let outro = self.paint(outro, cyan);

        self.line("");
        self.line(&rule);
        self.line(header);
        self.line(&rule);
        self.line(success);
        self.line(duplicate);
        self.line(failed);
        self.line(hoard);
        self.line(&rule);
        self.line(outro);

        if self.chaos() && tally.success > 0 {
            let cheer = self.paint(
                "\nUNSTOPPABLE!!! THE ARCHIVE HAS GROWN!!!",
                Style::new().magenta(),
            );
            self.line(cheer);
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn job_started(&mut self, progress: JobProgress<'_>) {
        let job = progress.job;
        let text = match (progress.mode, progress.planned) {
            (RunMode::Manual, Some(planned)) => format!(
                "[{}/{}] Processing {} - {}",
                progress.index, planned, job.year, job.ensemble
            ),
            _ => format!("Downloading: {} - {}", job.year, job.ensemble),
        };

        if self.boring() {
            self.line("");
            self.line(text);
            return;
        }

        let painted = self.paint(text, Style::new().blue().bold());
        self.line("");
        self.line(painted);
        if let Some(egg) = reactions::easter_egg(&job.ensemble) {
            let egg = self.paint(egg, Style::new().magenta());
            self.line(format!("├─ {egg}"));
        }
        if progress.index % ASIDE_EVERY == 0 {
            let aside = self.rotation.pick(reactions::PROGRESS_ASIDES);
            let aside = self.paint(aside, Style::new().cyan());
            self.line(format!("└─ {aside}"));
        }
    }

    fn success(&mut self, _job: &Job, target: &ResolvedTarget, _bytes_written: u64) {
        if self.boring() {
            self.line(format!("✓ Downloaded: {}", target.file_name));
            return;
        }
        let pool = if self.chaos() {
            reactions::CHAOS_SUCCESS
        } else {
            reactions::SUCCESS
        };
        let message = self.rotation.pick(pool);
        let mark = self.paint("✓", Style::new().green());
        let name = self.paint(&target.file_name, Style::new().bold());
        let message = self.paint(message, Style::new().green());
        self.line(format!("{mark} {name}"));
        self.line(format!("   └─ {message}"));
    }

    fn duplicate(&mut self, _job: &Job, target: &ResolvedTarget) {
        if self.boring() {
            self.line(format!("⊘ Already exists: {}", target.file_name));
            return;
        }
        let pool = if self.chaos() {
            reactions::CHAOS_DUPLICATE
        } else {
            reactions::DUPLICATE
        };
        let message = self.rotation.pick(pool);
        let mark = self.paint("⊘", Style::new().yellow());
        let name = self.paint(&target.file_name, Style::new().bold());
        let message = self.paint(message, Style::new().yellow());
        self.line(format!("{mark} {name}"));
        self.line(format!("   └─ {message}"));
    }

    fn failure(&mut self, _job: &Job, target: &ResolvedTarget, outcome: &Outcome) {
        if self.boring() {
            self.line(format!("✗ Failed ({outcome}): {}", target.file_name));
            return;
        }
        let pool = match outcome {
            _ if self.chaos() => reactions::CHAOS_FAILURE,
            Outcome::NotFound => reactions::NOT_FOUND,
            _ => reactions::CONNECTION,
        };
        let message = self.rotation.pick(pool);
        let mark = self.paint("✗", Style::new().red());
        let status = self.paint(format!("Failed ({outcome})"), Style::new().red());
        let message = self.paint(message, Style::new().red());
        self.line(format!("{mark} {status}: {}", target.file_name));
        self.line(format!("   └─ {message}"));
    }

    fn rate_limited(&mut self, _delay: Duration) {
        if self.boring() {
            self.line("⏳ Rate limiting...");
            return;
        }
        let message = self.rotation.pick(reactions::RATE_LIMIT);
        let mark = self.paint("⏳", Style::new().cyan());
        self.line(format!("{mark} {message}"));
    }

    fn discovery_started(&mut self, year: u32, candidates: usize) {
        if self.boring() {
            self.line(format!(
                "Discovering ensembles for {year} ({candidates} candidates)..."
            ));
            return;
        }
        let banner = self.rotation.pick(reactions::DISCOVERY_START);
        let banner = self.paint(
            format!("{banner}\nYear {year}, {candidates} names to try."),
            Style::new().cyan().bold(),
        );
        self.line("");
        self.line(banner);
    }

    fn discovery_progress(&mut self, checked: usize, total: usize, found: usize) {
        if self.boring() {
            return;
        }
        let text = self.paint(
            format!("  [{checked}/{total}] Still searching... {found} found so far"),
            Style::new().blue(),
        );
        self.line(text);
    }

    fn discovery_hit(&mut self, _year: u32, ensemble: &str) {
        if self.boring() {
            self.line(format!("  Found: {ensemble}"));
            return;
        }
        let message = self.rotation.pick(reactions::DISCOVERY_HIT);
        let text = self.paint(format!("  ✅ {ensemble}: {message}"), Style::new().green());
        self.line(text);
    }

    fn discovery_finished(&mut self, year: u32, found: &[String]) {
        if found.is_empty() {
            if self.boring() {
                self.line("No ensembles found with common naming patterns.");
            } else {
                let message = self.rotation.pick(reactions::DISCOVERY_NONE);
                let message = self.paint(message, Style::new().red());
                self.line(message);
            }
            return;
        }

        let names = found.join(", ");
        if self.boring() {
            self.line("");
            self.line(format!("Discovery complete: {} ensemble(s) found", found.len()));
            self.line(format!("Ensembles: {names}"));
        } else {
            let done = self.paint(
                format!("Discovery complete! Found {} ensemble(s) for {year}.", found.len()),
                Style::new().green().bold(),
            );
            let list = self.paint(format!("  Ensembles found: {names}"), Style::new().cyan());
            self.line(done);
            self.line(list);
        }
        self.line("");
    }
}
