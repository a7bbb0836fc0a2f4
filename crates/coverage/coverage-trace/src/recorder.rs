//! Per-cycle draw call trace buffer

use core::fmt::Write as _;

use crate::DrawOperation;

/// Append-only text trace of the current flush cycle
///
/// One line per recorded operation:
///
/// ```text
/// drawRectangle x1=0 y1=0 x2=9 y2=9
/// fillRectangle x1=0 y1=0 x2=10 y2=20 area=200
/// ```
///
/// Prior lines are never modified. The buffer is only handed out as `&str`
/// or as an owned copy.
#[derive(Debug, Clone, Default)]
pub struct DrawCallRecorder {
    buffer: String,
    records: usize,
}

impl DrawCallRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record for `op`, with its accounted area if it has one
    pub fn record(&mut self, op: &DrawOperation, area: Option<u64>) {
        // Formatting into a String cannot fail.
        let _ = match area {
            Some(area) => writeln!(self.buffer, "{op} area={area}"),
            None => writeln!(self.buffer, "{op}"),
        };
        self.records = self.records.saturating_add(1);
    }

    /// Append caller-supplied text verbatim
    ///
    /// Used for annotations that belong to the same cycle (markers, summary
    /// lines). Does not count as a record.
    pub fn append(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Trace text recorded so far
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Owned copy of the trace text
    pub fn snapshot(&self) -> String {
        self.buffer.clone()
    }

    /// Number of operations recorded since the last reset
    pub fn record_count(&self) -> usize {
        self.records
    }

    /// Whether nothing has been written since the last reset
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Clear the buffer, keeping its allocation for the next cycle
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.records = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_outline_has_no_area() {
        let mut rec = DrawCallRecorder::new();
        rec.record(&DrawOperation::DrawVerticalLine { x: 1, y1: 2, y2: 3 }, None);
        assert_eq!(rec.text(), "drawVerticalLine x=1 y1=2 y2=3\n");
        assert_eq!(rec.record_count(), 1);
    }

    #[test]
    fn test_record_fill_has_area() {
        let mut rec = DrawCallRecorder::new();
        rec.record(
            &DrawOperation::FillRectangle {
                x1: 0,
                y1: 0,
                x2: 10,
                y2: 20,
            },
            Some(200),
        );
        assert_eq!(rec.text(), "fillRectangle x1=0 y1=0 x2=10 y2=20 area=200\n");
    }

    #[test]
    fn test_records_append_in_order() {
        let mut rec = DrawCallRecorder::new();
        rec.record(&DrawOperation::WritePixel { x: 0, y: 0 }, None);
        rec.append("-- marker --\n");
        rec.record(&DrawOperation::WritePixel { x: 1, y: 1 }, None);
        let lines: Vec<&str> = rec.text().lines().collect();
        assert_eq!(
            lines,
            ["writePixel x=0 y=0", "-- marker --", "writePixel x=1 y=1"]
        );
        assert_eq!(rec.record_count(), 2);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut rec = DrawCallRecorder::new();
        rec.record(&DrawOperation::WritePixel { x: 0, y: 0 }, None);
        let snap = rec.snapshot();
        rec.reset();
        assert_eq!(snap, "writePixel x=0 y=0\n");
        assert!(rec.is_empty());
        assert_eq!(rec.text(), "");
        assert_eq!(rec.record_count(), 0);
    }
}
