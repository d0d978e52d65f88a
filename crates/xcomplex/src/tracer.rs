//! Tracing hooks for table evaluation.
//!
//! The arithmetic itself is pure and silent. Observation happens one level up,
//! when [`Table::build`](crate::Table::build) walks a set of operand pairs: the
//! builder is generic over a [`TableTracer`], chosen by the caller.
//!
//! | Tracer | Purpose |
//! |--------|---------|
//! | [`NoopTracer`] | Zero-cost no-op (default) |
//! | [`StderrTracer`] | Human-readable log of every evaluated cell on stderr |
//! | [`TallyTracer`] | Counts results per [`Kind`] |
//! | [`RecordingTracer`] | Keeps every event for later inspection |
//!
//! ```
//! use xcomplex::{Canonical, Operation, Table, TallyTracer, Kind};
//! use strum::IntoEnumIterator;
//!
//! let operands: Vec<Canonical> = Canonical::iter().collect();
//! let mut tally = TallyTracer::new();
//! let table = Table::build(Operation::Power, &operands, &mut tally);
//! let report = tally.report();
//! assert_eq!(report.total, table.cells().len());
//! assert!(report.count(Kind::Nan) > 0);
//! ```

use std::collections::HashMap;

use crate::{
    table::Operation,
    value::{Kind, Polar},
};

/// Trace event emitted while a table is built.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    /// A table over `rows × columns` operand pairs is about to be evaluated.
    Start {
        operation: Operation,
        rows: usize,
        columns: usize,
    },
    /// One operand pair was evaluated.
    Cell {
        operation: Operation,
        lhs: Polar,
        rhs: Polar,
        result: Polar,
    },
    /// Evaluation finished after `cells` cells.
    Finish { cells: usize },
}

/// Trait for observing table evaluation.
///
/// All methods default to no-ops, so implementations only override what they need.
pub trait TableTracer: std::fmt::Debug {
    /// Called once before any cell is evaluated.
    #[inline]
    fn on_start(&mut self, _operation: Operation, _rows: usize, _columns: usize) {}

    /// Called after each operand pair is evaluated.
    #[inline]
    fn on_cell(&mut self, _operation: Operation, _lhs: Polar, _rhs: Polar, _result: Polar) {}

    /// Called once after the last cell.
    #[inline]
    fn on_finish(&mut self, _cells: usize) {}
}

// ============================================================================
// NoopTracer
// ============================================================================

/// A tracer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracer;

impl TableTracer for NoopTracer {}

// ============================================================================
// StderrTracer
// ============================================================================

/// Tracer that prints every evaluated cell to stderr.
///
/// Output format:
/// ```text
/// --- pow over 15 x 15 ---
/// pow (1, 0.5) (2, 0) = (1, 1)  [finite]
/// --- 225 cells ---
/// ```
#[derive(Debug, Default)]
pub struct StderrTracer {
    /// Maximum number of cells to print. None = unlimited.
    limit: Option<usize>,
    count: usize,
    stopped: bool,
}

impl StderrTracer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracer that goes quiet after `limit` cells.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }
}

impl TableTracer for StderrTracer {
    fn on_start(&mut self, operation: Operation, rows: usize, columns: usize) {
        eprintln!("--- {operation} over {rows} x {columns} ---");
    }

    fn on_cell(&mut self, operation: Operation, lhs: Polar, rhs: Polar, result: Polar) {
        if self.stopped {
            return;
        }
        eprintln!("{operation} {lhs} {rhs} = {result}  [{}]", result.kind());
        self.count += 1;
        if let Some(limit) = self.limit
            && self.count >= limit
        {
            eprintln!("--- trace limit reached ({limit} cells) ---");
            self.stopped = true;
        }
    }

    fn on_finish(&mut self, cells: usize) {
        eprintln!("--- {cells} cells ---");
    }
}

// ============================================================================
// TallyTracer
// ============================================================================

/// Tracer that counts results by [`Kind`].
///
/// Handy for spotting regressions that turn finite limits into NaN: the NaN
/// count of the canonical power table is a single number to watch.
#[derive(Debug, Default)]
pub struct TallyTracer {
    counts: HashMap<Kind, usize>,
    total: usize,
}

/// Summary produced by [`TallyTracer::report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyReport {
    /// Per-kind counts, most frequent first.
    pub counts: Vec<(Kind, usize)>,
    pub total: usize,
}

impl TallyTracer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn report(&self) -> TallyReport {
        let mut counts: Vec<_> = self.counts.iter().map(|(&k, &v)| (k, v)).collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.to_string().cmp(&b.0.to_string())));
        TallyReport {
            counts,
            total: self.total,
        }
    }
}

impl TallyReport {
    /// Number of results of the given kind.
    #[must_use]
    pub fn count(&self, kind: Kind) -> usize {
        self.counts.iter().find(|(k, _)| *k == kind).map_or(0, |&(_, n)| n)
    }
}

impl TableTracer for TallyTracer {
    #[inline]
    fn on_cell(&mut self, _operation: Operation, _lhs: Polar, _rhs: Polar, result: Polar) {
        *self.counts.entry(result.kind()).or_insert(0) += 1;
        self.total += 1;
    }
}

impl std::fmt::Display for TallyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Result kinds ===")?;
        for (kind, count) in &self.counts {
            let pct = (*count as f64 / self.total as f64) * 100.0;
            writeln!(f, "  {kind:<18} {count:>6}  ({pct:>5.1}%)")?;
        }
        write!(f, "  {:<18} {:>6}", "total", self.total)
    }
}

// ============================================================================
// RecordingTracer
// ============================================================================

/// Tracer that records every event in order.
#[derive(Debug, Default)]
pub struct RecordingTracer {
    events: Vec<TraceEvent>,
}

impl RecordingTracer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    #[must_use]
    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }
}

impl TableTracer for RecordingTracer {
    fn on_start(&mut self, operation: Operation, rows: usize, columns: usize) {
        self.events.push(TraceEvent::Start {
            operation,
            rows,
            columns,
        });
    }

    fn on_cell(&mut self, operation: Operation, lhs: Polar, rhs: Polar, result: Polar) {
        self.events.push(TraceEvent::Cell {
            operation,
            lhs,
            rhs,
            result,
        });
    }

    fn on_finish(&mut self, cells: usize) {
        self.events.push(TraceEvent::Finish { cells });
    }
}
