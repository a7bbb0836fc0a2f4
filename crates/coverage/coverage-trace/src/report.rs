//! Flush cycle reporting
//!
//! At every display refresh the pipeline closes the current cycle with
//! [`FlushCycleReporter::finish_cycle`]. The returned [`FlushRecord`] holds
//! everything needed to write the per-cycle artifacts; where they go is up to
//! a [`FlushSink`].

use core::convert::Infallible;

use crate::backend::DrawingBackend;
use crate::drawer::TracingDrawer;

/// Snapshot of one finished flush cycle
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlushRecord {
    /// Zero-based cycle number
    pub cycle_index: u64,
    /// Capped area drawn during the cycle
    pub area_drawn: u64,
    /// Drawable area of the display
    pub total_area: u64,
    /// Whole-percent coverage, truncated
    pub coverage_percent: u64,
    /// Draw call trace of the cycle
    pub trace_text: String,
}

impl FlushRecord {
    /// Build a record, computing coverage from the two areas
    pub fn new(cycle_index: u64, area_drawn: u64, total_area: u64, trace_text: String) -> Self {
        Self {
            cycle_index,
            area_drawn,
            total_area,
            coverage_percent: coverage_percent(area_drawn, total_area),
            trace_text,
        }
    }

    /// `"<index># Area drawn: <percent>%"`
    pub fn summary_line(&self) -> String {
        format!("{}# Area drawn: {}%", self.cycle_index, self.coverage_percent)
    }

    /// Per-cycle artifact: the trace followed by the summary line
    pub fn cycle_text(&self) -> String {
        let mut text = String::with_capacity(self.trace_text.len().saturating_add(32));
        text.push_str(&self.trace_text);
        text.push_str(&self.summary_line());
        text
    }
}

/// `100 × area / total`, truncated; 0 for an empty display
pub fn coverage_percent(area_drawn: u64, total_area: u64) -> u64 {
    area_drawn
        .saturating_mul(100)
        .checked_div(total_area)
        .unwrap_or(0)
}

/// Closes flush cycles and numbers them
#[derive(Debug, Clone, Default)]
pub struct FlushCycleReporter {
    next_index: u64,
}

impl FlushCycleReporter {
    /// Reporter whose first cycle is index 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Index the next finished cycle will get
    pub fn next_index(&self) -> u64 {
        self.next_index
    }

    /// Snapshot the drawer's cycle state, then reset it
    pub fn finish_cycle<B: DrawingBackend>(&mut self, drawer: &mut TracingDrawer<B>) -> FlushRecord {
        let record = FlushRecord::new(
            self.next_index,
            drawer.area_drawn(),
            drawer.total_drawable_area(),
            drawer.trace_snapshot(),
        );
        drawer.reset();
        self.next_index = self.next_index.saturating_add(1);

        tracing::info!(
            cycle = record.cycle_index,
            area_drawn = record.area_drawn,
            coverage = record.coverage_percent,
            "{}",
            record.summary_line()
        );
        record
    }
}

/// Destination for finished flush records
pub trait FlushSink {
    /// Error produced when a record cannot be stored
    type Error;

    /// Store one record
    fn accept(&mut self, record: &FlushRecord) -> Result<(), Self::Error>;
}

impl<S: FlushSink + ?Sized> FlushSink for &mut S {
    type Error = S::Error;

    fn accept(&mut self, record: &FlushRecord) -> Result<(), Self::Error> {
        (**self).accept(record)
    }
}

/// Sink keeping every record in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Vec<FlushRecord>,
}

impl MemorySink {
    /// Empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Records received so far, oldest first
    pub fn records(&self) -> &[FlushRecord] {
        &self.records
    }

    /// Consume the sink and return its records
    pub fn into_records(self) -> Vec<FlushRecord> {
        self.records
    }
}

impl FlushSink for MemorySink {
    type Error = Infallible;

    fn accept(&mut self, record: &FlushRecord) -> Result<(), Self::Error> {
        self.records.push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::NullBackend;
    use coverage_specs::DisplayGeometry;
    use embedded_graphics::pixelcolor::BinaryColor;

    #[test]
    fn test_coverage_percent_truncates() {
        assert_eq!(coverage_percent(0, 100), 0);
        assert_eq!(coverage_percent(199, 1000), 19);
        assert_eq!(coverage_percent(1000, 1000), 100);
        assert_eq!(coverage_percent(10, 0), 0);
    }

    #[test]
    fn test_summary_line_format() {
        let record = FlushRecord::new(3, 250, 1000, String::new());
        assert_eq!(record.summary_line(), "3# Area drawn: 25%");
    }

    #[test]
    fn test_cycle_text_appends_summary() {
        let record = FlushRecord::new(0, 200, 10_000, "fillRectangle x1=0 y1=0 x2=10 y2=20 area=200\n".to_string());
        assert_eq!(
            record.cycle_text(),
            "fillRectangle x1=0 y1=0 x2=10 y2=20 area=200\n0# Area drawn: 2%"
        );
    }

    #[test]
    fn test_finish_cycle_resets_and_numbers() {
        let mut drawer = TracingDrawer::new(NullBackend::<BinaryColor>::new(), DisplayGeometry::rectangular(100, 100));
        let mut reporter = FlushCycleReporter::new();

        drawer.fill_rectangle(BinaryColor::On, 0, 0, 50, 100).unwrap();
        let first = reporter.finish_cycle(&mut drawer);
        assert_eq!(first.cycle_index, 0);
        assert_eq!(first.area_drawn, 5000);
        assert_eq!(first.coverage_percent, 50);
        assert_eq!(drawer.area_drawn(), 0);
        assert_eq!(drawer.trace_text(), "");

        let second = reporter.finish_cycle(&mut drawer);
        assert_eq!(second.cycle_index, 1);
        assert_eq!(second.area_drawn, 0);
        assert_eq!(second.trace_text, "");
        assert_eq!(reporter.next_index(), 2);
    }

    #[test]
    fn test_memory_sink_keeps_order() {
        let mut sink = MemorySink::new();
        for i in 0..3 {
            sink.accept(&FlushRecord::new(i, i, 10, String::new())).unwrap();
        }
        let indices: Vec<u64> = sink.records().iter().map(|r| r.cycle_index).collect();
        assert_eq!(indices, [0, 1, 2]);
    }
}
