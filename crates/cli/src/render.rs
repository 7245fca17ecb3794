//! Text renderer.
//!
//! Draws engine snapshots as fixed-width tables, or as one JSON object per line when
//! `--json` is given. The first write error (usually a closed pipe) closes the renderer:
//! later snapshots are dropped and `is_closed` tells the launcher to stop stepping.

use std::io::{self, Write};

use tracing::debug;

use osvis_core::Renderer;
use osvis_core::bankers::{ProcessStatus, SafetySnapshot};
use osvis_core::common::{PageId, Units};
use osvis_core::paging::{AccessOutcome, PagingSnapshot};

const RULE: &str = "==========================================================";
const THIN_RULE: &str = "----------------------------------------------------------";

/// Renderer writing to any `Write` sink.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
    json: bool,
    closed: bool,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer; `json` selects line-delimited JSON output.
    pub const fn new(out: W, json: bool) -> Self {
        Self {
            out,
            json,
            closed: false,
        }
    }

    /// True once a write has failed; nothing more is written after that.
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Prints the closing per-policy statistics table.
    pub fn print_statistics(&mut self, snapshot: &PagingSnapshot) {
        if self.json {
            return;
        }
        self.emit(|out| write_statistics(out, snapshot));
    }

    fn emit(&mut self, draw: impl FnOnce(&mut W) -> io::Result<()>) {
        if self.closed {
            return;
        }
        if let Err(e) = draw(&mut self.out).and_then(|()| self.out.flush()) {
            debug!(error = %e, "output closed");
            self.closed = true;
        }
    }
}

fn write_json(out: &mut impl Write, value: &impl serde::Serialize) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}

fn write_statistics(out: &mut impl Write, snapshot: &PagingSnapshot) -> io::Result<()> {
    writeln!(out, "PAGE FAULT STATISTICS")?;
    for policy in &snapshot.policies {
        writeln!(out, "  {:<8} {}", policy.policy.label(), policy.stats)?;
    }
    writeln!(out, "{RULE}")
}

fn units(row: &[Units]) -> String {
    row.iter().map(Units::to_string).collect::<Vec<_>>().join(" ")
}

fn frame_cells(frames: &[Option<PageId>]) -> String {
    let cells: Vec<String> = frames
        .iter()
        .map(|f| f.map_or_else(|| "-".to_string(), |p| p.to_string()))
        .collect();
    format!("[ {} ]", cells.join(" | "))
}

const fn status_label(status: ProcessStatus) -> &'static str {
    match status {
        ProcessStatus::Completed => "completed",
        ProcessStatus::Executing => "executing",
        ProcessStatus::Waiting => "waiting",
    }
}

fn sequence_label(processes: &[usize]) -> String {
    processes
        .iter()
        .map(|p| format!("P{p}"))
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn outcome_note(outcome: AccessOutcome) -> String {
    match outcome {
        AccessOutcome::Hit { .. } => "hit".to_string(),
        AccessOutcome::Filled { slot } => format!("fault, filled frame {}", slot + 1),
        AccessOutcome::Replaced { slot, evicted } => {
            format!("fault, evicted {evicted} from frame {}", slot + 1)
        }
    }
}

fn write_safety(out: &mut impl Write, snapshot: &SafetySnapshot) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "{}", snapshot.headline)?;
    writeln!(out, "{THIN_RULE}")?;
    writeln!(out, "      {:<12}{:<12}{:<12}", "Max", "Allocation", "Need")?;
    for (p, status) in snapshot.statuses.iter().enumerate() {
        let marker = if snapshot.highlight == Some(p) { '>' } else { ' ' };
        writeln!(
            out,
            "{marker} P{p:<3}{:<12}{:<12}{:<12}{}",
            units(&snapshot.max[p]),
            units(&snapshot.allocation[p]),
            units(&snapshot.need[p]),
            status_label(*status)
        )?;
    }
    writeln!(out, "{THIN_RULE}")?;

    let available = units(&snapshot.current_available);
    match snapshot.last_completed {
        Some(p) => writeln!(out, "Available: {available}   (after P{p} completes)")?,
        None => writeln!(out, "Available: {available}")?,
    }
    match snapshot.highlight {
        Some(p) => {
            writeln!(out, "P{p} needs: {}", units(&snapshot.need[p]))?;
            if snapshot.step > 0 {
                writeln!(
                    out,
                    "Current Safe Sequence: {}",
                    sequence_label(snapshot.completed())
                )?;
            }
        }
        None => writeln!(out, "Final Safe Sequence: {}", sequence_label(&snapshot.sequence))?,
    }
    Ok(())
}

fn write_paging(out: &mut impl Write, snapshot: &PagingSnapshot) -> io::Result<()> {
    let current = snapshot.last_report.as_ref().map(|r| r.position);
    let refs: Vec<String> = snapshot
        .reference
        .iter()
        .enumerate()
        .map(|(i, p)| {
            if current == Some(i) {
                format!("({p})")
            } else {
                p.to_string()
            }
        })
        .collect();

    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "Step {}/{}   references: {}",
        snapshot.step,
        snapshot.reference.len(),
        refs.join(" ")
    )?;
    writeln!(out, "{THIN_RULE}")?;
    for policy in &snapshot.policies {
        let note = snapshot
            .last_report
            .as_ref()
            .and_then(|r| r.outcome(policy.policy))
            .map_or_else(String::new, outcome_note);
        writeln!(
            out,
            "{:<8} {:<20} faults: {:<3} {note}",
            policy.policy.label(),
            frame_cells(&policy.frames),
            policy.faults
        )?;
    }
    if snapshot.complete {
        writeln!(out, "{THIN_RULE}")?;
        writeln!(out, "Reference string exhausted")?;
    }
    Ok(())
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render_safety(&mut self, snapshot: &SafetySnapshot) {
        if self.json {
            self.emit(|out| write_json(out, snapshot));
        } else {
            self.emit(|out| write_safety(out, snapshot));
        }
    }

    fn render_paging(&mut self, snapshot: &PagingSnapshot) {
        if self.json {
            self.emit(|out| write_json(out, snapshot));
        } else {
            self.emit(|out| write_paging(out, snapshot));
        }
    }
}
