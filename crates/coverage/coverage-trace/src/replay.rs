//! Trace replay
//!
//! Reads captured trace text back (a single `flush-<i>.txt` or the cumulative
//! `full_ops.txt`), pushes every operation through a fresh
//! [`TracingDrawer`] over a [`NullBackend`], and reports the recomputed
//! coverage next to the one recorded at capture time.
//!
//! Useful after changing the estimator, or to evaluate a log captured on one
//! display against the geometry of another.

use core::fmt;

use coverage_specs::DisplayGeometry;
use embedded_graphics::image::ImageRaw;
use embedded_graphics::pixelcolor::BinaryColor;

use crate::accumulator::AccountingError;
use crate::backend::NullBackend;
use crate::drawer::{DrawError, TracingDrawer};
use crate::operation::{DrawOperation, ParseError};
use crate::report::coverage_percent;
use crate::sink::CYCLE_SEPARATOR;

/// Marker found in per-cycle summary lines (`"3# Area drawn: 25%"`)
const SUMMARY_MARKER: &str = "# Area drawn: ";

/// Stand-in pixels for `drawImage`; only the traced region size is accounted
const PLACEHOLDER_IMAGE: [u8; 1] = [0];

/// Operation lines of one captured cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleLog<'a> {
    /// `(line number, text)` of each operation, 1-based within the log
    pub lines: Vec<(usize, &'a str)>,
    /// Coverage percent from the cycle's summary line, if present
    pub recorded_percent: Option<u64>,
}

/// Recomputed coverage of one cycle
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReplayOutcome {
    /// Position of the cycle in the log
    pub cycle_index: usize,
    /// Number of operations replayed
    pub operations: usize,
    /// Recomputed capped area
    pub area_drawn: u64,
    /// Drawable area of the replay geometry
    pub total_area: u64,
    /// Recomputed coverage, whole percent
    pub coverage_percent: u64,
    /// Coverage recorded at capture time
    pub recorded_percent: Option<u64>,
}

impl ReplayOutcome {
    /// Whether the recomputed coverage differs from the recorded one
    pub fn diverges(&self) -> bool {
        self.recorded_percent
            .is_some_and(|recorded| recorded != self.coverage_percent)
    }
}

/// Replay failure, pointing at the offending log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// Line is not a valid trace record
    Parse {
        /// 1-based line number
        line: usize,
        /// Parse failure
        source: ParseError,
    },
    /// Replaying the line drove accounting into an invalid state
    Accounting {
        /// 1-based line number
        line: usize,
        /// Accounting failure
        source: AccountingError,
    },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { line, source } => write!(f, "line {line}: {source}"),
            Self::Accounting { line, source } => write!(f, "line {line}: {source}"),
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse { source, .. } => Some(source),
            Self::Accounting { source, .. } => Some(source),
        }
    }
}

/// Parse the percent out of a summary line, if `line` is one
fn summary_percent(line: &str) -> Option<Option<u64>> {
    let (_, rest) = line.split_once(SUMMARY_MARKER)?;
    Some(rest.trim().trim_end_matches('%').parse().ok())
}

/// Split trace text into cycles
///
/// Cycles end at a separator line. Summary lines are dropped from the
/// operation list and their percent is kept. Blank lines are skipped, and a
/// trailing block with neither operations nor a summary is not a cycle.
pub fn split_cycles(text: &str) -> Vec<CycleLog<'_>> {
    let mut cycles = Vec::new();
    let mut current = CycleLog {
        lines: Vec::new(),
        recorded_percent: None,
    };

    for (number, line) in (1usize..).zip(text.lines()) {
        let line = line.trim();
        if line == CYCLE_SEPARATOR {
            let done = core::mem::replace(
                &mut current,
                CycleLog {
                    lines: Vec::new(),
                    recorded_percent: None,
                },
            );
            cycles.push(done);
        } else if let Some(percent) = summary_percent(line) {
            current.recorded_percent = percent;
        } else if !line.is_empty() {
            current.lines.push((number, line));
        }
    }

    if !current.lines.is_empty() || current.recorded_percent.is_some() {
        cycles.push(current);
    }
    cycles
}

/// Recompute the coverage of one cycle for `geometry`
///
/// # Errors
///
/// Returns `ReplayError` for the first line that does not parse or whose
/// accounting fails.
pub fn replay_cycle(geometry: DisplayGeometry, cycle_index: usize, cycle: &CycleLog<'_>) -> Result<ReplayOutcome, ReplayError> {
    let image = ImageRaw::<BinaryColor>::new(&PLACEHOLDER_IMAGE, 1);
    let mut drawer = TracingDrawer::new(NullBackend::<BinaryColor>::new(), geometry);

    for &(line, text) in &cycle.lines {
        let op: DrawOperation = text
            .parse()
            .map_err(|source| ReplayError::Parse { line, source })?;
        match drawer.apply(BinaryColor::On, &op, &image) {
            Ok(()) => {}
            Err(DrawError::Accounting(source)) => return Err(ReplayError::Accounting { line, source }),
            Err(DrawError::Backend(never)) => match never {},
        }
    }

    let area_drawn = drawer.area_drawn();
    let total_area = drawer.total_drawable_area();
    Ok(ReplayOutcome {
        cycle_index,
        operations: cycle.lines.len(),
        area_drawn,
        total_area,
        coverage_percent: coverage_percent(area_drawn, total_area),
        recorded_percent: cycle.recorded_percent,
    })
}

/// Replay every cycle of `text`
///
/// # Errors
///
/// Stops at the first failing cycle; see [`replay_cycle`].
pub fn replay_log(geometry: DisplayGeometry, text: &str) -> Result<Vec<ReplayOutcome>, ReplayError> {
    let outcomes = split_cycles(text)
        .iter()
        .enumerate()
        .map(|(index, cycle)| replay_cycle(geometry, index, cycle))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(cycles = outcomes.len(), "Trace replayed");
    Ok(outcomes)
}
