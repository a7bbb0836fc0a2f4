//! Tracing drawer
//!
//! [`TracingDrawer`] sits between the rendering pipeline and the real
//! backend. Every primitive call goes through four steps, in order:
//!
//! 1. estimate the filled area (fill primitives only)
//! 2. add it to the cycle's capped running total
//! 3. append a trace record carrying the *capped* contribution
//! 4. forward the unmodified call to the backend, exactly once
//!
//! Step 4 happens whatever steps 1-3 produced, so instrumentation never
//! changes what ends up on the display.
//!
//! ```
//! use coverage_specs::DisplayGeometry;
//! use coverage_trace::{NullBackend, TracingDrawer};
//! use embedded_graphics::pixelcolor::BinaryColor;
//!
//! let mut drawer = TracingDrawer::new(NullBackend::<BinaryColor>::new(), DisplayGeometry::rectangular(100, 100));
//! drawer.fill_rectangle(BinaryColor::On, 0, 0, 10, 20).unwrap();
//! drawer.draw_rectangle(BinaryColor::On, 0, 0, 10, 20).unwrap();
//!
//! assert_eq!(drawer.area_drawn(), 200);
//! assert_eq!(drawer.trace_text().lines().count(), 2);
//! ```
//!
//! The drawer takes `&mut self` everywhere, so a reset can never interleave
//! with a primitive call. A multi-threaded pipeline wraps the whole drawer in
//! one `Mutex` held across each call and each cycle boundary.

use core::fmt;

use coverage_specs::DisplayGeometry;
use embedded_graphics::image::ImageDrawable;

use crate::accumulator::{AccountingError, AreaAccumulator};
use crate::backend::DrawingBackend;
use crate::estimator;
use crate::operation::DrawOperation;
use crate::recorder::DrawCallRecorder;

/// Instrumenting wrapper around a [`DrawingBackend`]
///
/// Owns the cycle state (capped area total and trace buffer). The geometry
/// is fixed at construction.
pub struct TracingDrawer<B> {
    backend: B,
    geometry: DisplayGeometry,
    accumulator: AreaAccumulator,
    recorder: DrawCallRecorder,
}

/// Failure of one instrumented draw call
///
/// The backend has always been called by the time this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawError<E> {
    /// The backend reported an error
    Backend(E),
    /// Coverage accounting hit an invariant violation (fatal for the session)
    Accounting(AccountingError),
}

impl<E: fmt::Display> fmt::Display for DrawError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backend(e) => write!(f, "backend draw failed: {e}"),
            Self::Accounting(e) => write!(f, "coverage accounting failed: {e}"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for DrawError<E> {}

impl<E> From<AccountingError> for DrawError<E> {
    fn from(e: AccountingError) -> Self {
        Self::Accounting(e)
    }
}

impl<B: DrawingBackend> TracingDrawer<B> {
    /// Wrap `backend` for a display with the given geometry
    pub fn new(backend: B, geometry: DisplayGeometry) -> Self {
        let accumulator = AreaAccumulator::new(geometry.total_area());
        tracing::debug!(
            width = geometry.width,
            height = geometry.height,
            shape = geometry.shape.as_str(),
            drawer_area = accumulator.total_area(),
            "Tracing drawer created"
        );
        Self {
            backend,
            geometry,
            accumulator,
            recorder: DrawCallRecorder::new(),
        }
    }

    // ── accessors ───────────────────────────────────────────────────────────

    /// Capped area drawn since the last reset
    pub fn area_drawn(&self) -> u64 {
        self.accumulator.area_drawn()
    }

    /// Total drawable area of the display
    pub fn total_drawable_area(&self) -> u64 {
        self.accumulator.total_area()
    }

    /// Trace recorded since the last reset
    pub fn trace_text(&self) -> &str {
        self.recorder.text()
    }

    /// Owned copy of the current trace
    pub fn trace_snapshot(&self) -> String {
        self.recorder.snapshot()
    }

    /// Number of primitive calls traced since the last reset
    pub fn call_count(&self) -> usize {
        self.recorder.record_count()
    }

    /// Append caller text to this cycle's trace
    pub fn append_trace(&mut self, text: &str) {
        self.recorder.append(text);
    }

    /// Display geometry accounting caps against
    pub fn geometry(&self) -> DisplayGeometry {
        self.geometry
    }

    /// Whether accounting stopped after an invariant violation
    pub fn is_halted(&self) -> bool {
        self.accumulator.is_halted()
    }

    /// Get a reference to the wrapped backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get a mutable reference to the wrapped backend
    ///
    /// Calls made directly on the backend bypass tracing.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Consume the drawer and return the backend
    pub fn into_inner(self) -> B {
        self.backend
    }

    /// Start a new cycle: zero the area total and clear the trace
    pub fn reset(&mut self) {
        tracing::debug!(
            area_drawn = self.accumulator.area_drawn(),
            calls = self.recorder.record_count(),
            "Resetting draw cycle"
        );
        self.accumulator.reset();
        self.recorder.reset();
    }

    // ── instrumentation ─────────────────────────────────────────────────────

    /// Steps 1-3: estimate, accumulate, record
    fn account(&mut self, op: &DrawOperation) -> Result<(), AccountingError> {
        if !estimator::fills_area(op) {
            self.recorder.record(op, None);
            tracing::trace!(operation = op.name(), "draw call");
            return Ok(());
        }

        match self.accumulator.add(estimator::estimate(op)) {
            Ok(area) => {
                self.recorder.record(op, Some(area));
                tracing::trace!(operation = op.name(), area, "fill call");
                Ok(())
            }
            Err(e) => {
                self.recorder.record(op, None);
                tracing::error!(operation = op.name(), error = %e, "Coverage accounting halted");
                Err(e)
            }
        }
    }

    /// Combine the accounting outcome with the backend result
    fn finish(accounted: Result<(), AccountingError>, drawn: Result<(), B::Error>) -> Result<(), DrawError<B::Error>> {
        drawn.map_err(DrawError::Backend)?;
        accounted.map_err(DrawError::Accounting)
    }

    // ── primitives ──────────────────────────────────────────────────────────

    /// Write one pixel
    pub fn write_pixel(&mut self, color: B::Color, x: i32, y: i32) -> Result<(), DrawError<B::Error>> {
        let accounted = self.account(&DrawOperation::WritePixel { x, y });
        let drawn = self.backend.write_pixel(color, x, y);
        Self::finish(accounted, drawn)
    }

    /// Line from `(x1, y1)` to `(x2, y2)`
    pub fn draw_line(&mut self, color: B::Color, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<(), DrawError<B::Error>> {
        let accounted = self.account(&DrawOperation::DrawLine { x1, y1, x2, y2 });
        let drawn = self.backend.draw_line(color, x1, y1, x2, y2);
        Self::finish(accounted, drawn)
    }

    /// Horizontal line on row `y`
    pub fn draw_horizontal_line(&mut self, color: B::Color, x1: i32, x2: i32, y: i32) -> Result<(), DrawError<B::Error>> {
        let accounted = self.account(&DrawOperation::DrawHorizontalLine { x1, x2, y });
        let drawn = self.backend.draw_horizontal_line(color, x1, x2, y);
        Self::finish(accounted, drawn)
    }

    /// Vertical line on column `x`
    pub fn draw_vertical_line(&mut self, color: B::Color, x: i32, y1: i32, y2: i32) -> Result<(), DrawError<B::Error>> {
        let accounted = self.account(&DrawOperation::DrawVerticalLine { x, y1, y2 });
        let drawn = self.backend.draw_vertical_line(color, x, y1, y2);
        Self::finish(accounted, drawn)
    }

    /// Rectangle outline
    pub fn draw_rectangle(&mut self, color: B::Color, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<(), DrawError<B::Error>> {
        let accounted = self.account(&DrawOperation::DrawRectangle { x1, y1, x2, y2 });
        let drawn = self.backend.draw_rectangle(color, x1, y1, x2, y2);
        Self::finish(accounted, drawn)
    }

    /// Rounded rectangle outline
    #[allow(clippy::too_many_arguments)]
    pub fn draw_rounded_rectangle(
        &mut self,
        color: B::Color,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        arc_width: i32,
        arc_height: i32,
    ) -> Result<(), DrawError<B::Error>> {
        let accounted = self.account(&DrawOperation::DrawRoundedRectangle {
            x,
            y,
            width,
            height,
            arc_width,
            arc_height,
        });
        let drawn = self
            .backend
            .draw_rounded_rectangle(color, x, y, width, height, arc_width, arc_height);
        Self::finish(accounted, drawn)
    }

    /// Filled rounded rectangle, accounted as its bounding box
    #[allow(clippy::too_many_arguments)]
    pub fn fill_rounded_rectangle(
        &mut self,
        color: B::Color,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        arc_width: i32,
        arc_height: i32,
    ) -> Result<(), DrawError<B::Error>> {
        let accounted = self.account(&DrawOperation::FillRoundedRectangle {
            x,
            y,
            width,
            height,
            arc_width,
            arc_height,
        });
        let drawn = self
            .backend
            .fill_rounded_rectangle(color, x, y, width, height, arc_width, arc_height);
        Self::finish(accounted, drawn)
    }

    /// Circle outline
    pub fn draw_circle(&mut self, color: B::Color, x: i32, y: i32, diameter: i32) -> Result<(), DrawError<B::Error>> {
        let accounted = self.account(&DrawOperation::DrawCircle { x, y, diameter });
        let drawn = self.backend.draw_circle(color, x, y, diameter);
        Self::finish(accounted, drawn)
    }

    /// Filled circle, accounted as `π r²`
    pub fn fill_circle(&mut self, color: B::Color, x: i32, y: i32, diameter: i32) -> Result<(), DrawError<B::Error>> {
        let accounted = self.account(&DrawOperation::FillCircle { x, y, diameter });
        let drawn = self.backend.fill_circle(color, x, y, diameter);
        Self::finish(accounted, drawn)
    }

    /// Ellipse outline
    pub fn draw_ellipse(&mut self, color: B::Color, x: i32, y: i32, width: i32, height: i32) -> Result<(), DrawError<B::Error>> {
        let accounted = self.account(&DrawOperation::DrawEllipse {
            x,
            y,
            width,
            height,
        });
        let drawn = self.backend.draw_ellipse(color, x, y, width, height);
        Self::finish(accounted, drawn)
    }

    /// Filled ellipse, accounted as its bounding box
    pub fn fill_ellipse(&mut self, color: B::Color, x: i32, y: i32, width: i32, height: i32) -> Result<(), DrawError<B::Error>> {
        let accounted = self.account(&DrawOperation::FillEllipse {
            x,
            y,
            width,
            height,
        });
        let drawn = self.backend.fill_ellipse(color, x, y, width, height);
        Self::finish(accounted, drawn)
    }

    /// Circle arc outline
    pub fn draw_circle_arc(
        &mut self,
        color: B::Color,
        x: i32,
        y: i32,
        diameter: i32,
        start_angle: f32,
        arc_angle: f32,
    ) -> Result<(), DrawError<B::Error>> {
        let accounted = self.account(&DrawOperation::DrawCircleArc {
            x,
            y,
            diameter,
            start_angle,
            arc_angle,
        });
        let drawn = self
            .backend
            .draw_circle_arc(color, x, y, diameter, start_angle, arc_angle);
        Self::finish(accounted, drawn)
    }

    /// Filled circle arc, accounted as `2π r × start_angle / 360`
    pub fn fill_circle_arc(
        &mut self,
        color: B::Color,
        x: i32,
        y: i32,
        diameter: i32,
        start_angle: f32,
        arc_angle: f32,
    ) -> Result<(), DrawError<B::Error>> {
        let accounted = self.account(&DrawOperation::FillCircleArc {
            x,
            y,
            diameter,
            start_angle,
            arc_angle,
        });
        let drawn = self
            .backend
            .fill_circle_arc(color, x, y, diameter, start_angle, arc_angle);
        Self::finish(accounted, drawn)
    }

    /// Ellipse arc outline
    #[allow(clippy::too_many_arguments)]
    pub fn draw_ellipse_arc(
        &mut self,
        color: B::Color,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        start_angle: f32,
        arc_angle: f32,
    ) -> Result<(), DrawError<B::Error>> {
        let accounted = self.account(&DrawOperation::DrawEllipseArc {
            x,
            y,
            width,
            height,
            start_angle,
            arc_angle,
        });
        let drawn = self
            .backend
            .draw_ellipse_arc(color, x, y, width, height, start_angle, arc_angle);
        Self::finish(accounted, drawn)
    }

    /// Filled ellipse arc (traced, not accounted)
    #[allow(clippy::too_many_arguments)]
    pub fn fill_ellipse_arc(
        &mut self,
        color: B::Color,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        start_angle: f32,
        arc_angle: f32,
    ) -> Result<(), DrawError<B::Error>> {
        let accounted = self.account(&DrawOperation::FillEllipseArc {
            x,
            y,
            width,
            height,
            start_angle,
            arc_angle,
        });
        let drawn = self
            .backend
            .fill_ellipse_arc(color, x, y, width, height, start_angle, arc_angle);
        Self::finish(accounted, drawn)
    }

    /// Image blit, accounted as `width × height`
    #[allow(clippy::too_many_arguments)]
    pub fn draw_image<I>(
        &mut self,
        image: &I,
        region_x: i32,
        region_y: i32,
        width: i32,
        height: i32,
        x: i32,
        y: i32,
        alpha: u8,
    ) -> Result<(), DrawError<B::Error>>
    where
        I: ImageDrawable<Color = B::Color>,
    {
        let accounted = self.account(&DrawOperation::DrawImage {
            region_x,
            region_y,
            width,
            height,
            x,
            y,
            alpha,
        });
        let drawn = self
            .backend
            .draw_image(image, region_x, region_y, width, height, x, y, alpha);
        Self::finish(accounted, drawn)
    }

    /// Filled rectangle, accounted as `|x1-x2| × |y1-y2|`
    pub fn fill_rectangle(&mut self, color: B::Color, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<(), DrawError<B::Error>> {
        let accounted = self.account(&DrawOperation::FillRectangle { x1, y1, x2, y2 });
        let drawn = self.backend.fill_rectangle(color, x1, y1, x2, y2);
        Self::finish(accounted, drawn)
    }

    /// Dispatch a [`DrawOperation`] to the matching primitive method
    ///
    /// `image` is only used by [`DrawOperation::DrawImage`]. Replay tooling
    /// uses this to push parsed trace lines back through the drawer.
    pub fn apply<I>(&mut self, color: B::Color, op: &DrawOperation, image: &I) -> Result<(), DrawError<B::Error>>
    where
        I: ImageDrawable<Color = B::Color>,
    {
        match *op {
            DrawOperation::WritePixel { x, y } => self.write_pixel(color, x, y),
            DrawOperation::DrawLine { x1, y1, x2, y2 } => self.draw_line(color, x1, y1, x2, y2),
            DrawOperation::DrawHorizontalLine { x1, x2, y } => self.draw_horizontal_line(color, x1, x2, y),
            DrawOperation::DrawVerticalLine { x, y1, y2 } => self.draw_vertical_line(color, x, y1, y2),
            DrawOperation::DrawRectangle { x1, y1, x2, y2 } => self.draw_rectangle(color, x1, y1, x2, y2),
            DrawOperation::DrawRoundedRectangle {
                x,
                y,
                width,
                height,
                arc_width,
                arc_height,
            } => self.draw_rounded_rectangle(color, x, y, width, height, arc_width, arc_height),
            DrawOperation::FillRoundedRectangle {
                x,
                y,
                width,
                height,
                arc_width,
                arc_height,
            } => self.fill_rounded_rectangle(color, x, y, width, height, arc_width, arc_height),
            DrawOperation::DrawCircle { x, y, diameter } => self.draw_circle(color, x, y, diameter),
            DrawOperation::FillCircle { x, y, diameter } => self.fill_circle(color, x, y, diameter),
            DrawOperation::DrawEllipse {
                x,
                y,
                width,
                height,
            } => self.draw_ellipse(color, x, y, width, height),
            DrawOperation::FillEllipse {
                x,
                y,
                width,
                height,
            } => self.fill_ellipse(color, x, y, width, height),
            DrawOperation::DrawCircleArc {
                x,
                y,
                diameter,
                start_angle,
                arc_angle,
            } => self.draw_circle_arc(color, x, y, diameter, start_angle, arc_angle),
            DrawOperation::FillCircleArc {
                x,
                y,
                diameter,
                start_angle,
                arc_angle,
            } => self.fill_circle_arc(color, x, y, diameter, start_angle, arc_angle),
            DrawOperation::DrawEllipseArc {
                x,
                y,
                width,
                height,
                start_angle,
                arc_angle,
            } => self.draw_ellipse_arc(color, x, y, width, height, start_angle, arc_angle),
            DrawOperation::FillEllipseArc {
                x,
                y,
                width,
                height,
                start_angle,
                arc_angle,
            } => self.fill_ellipse_arc(color, x, y, width, height, start_angle, arc_angle),
            DrawOperation::DrawImage {
                region_x,
                region_y,
                width,
                height,
                x,
                y,
                alpha,
            } => self.draw_image(image, region_x, region_y, width, height, x, y, alpha),
            DrawOperation::FillRectangle { x1, y1, x2, y2 } => self.fill_rectangle(color, x1, y1, x2, y2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockBackendError, RecordingBackend};
    use coverage_specs::DisplayGeometry;
    use embedded_graphics::image::ImageRaw;
    use embedded_graphics::pixelcolor::BinaryColor;

    const ON: BinaryColor = BinaryColor::On;

    fn drawer(geometry: DisplayGeometry) -> TracingDrawer<RecordingBackend<BinaryColor>> {
        TracingDrawer::new(RecordingBackend::new(), geometry)
    }

    #[test]
    fn test_fill_rectangle_area() {
        let mut d = drawer(DisplayGeometry::rectangular(100, 100));
        d.fill_rectangle(ON, 0, 0, 10, 20).unwrap();
        assert_eq!(d.area_drawn(), 200);
        assert_eq!(d.trace_text(), "fillRectangle x1=0 y1=0 x2=10 y2=20 area=200\n");
    }

    #[test]
    fn test_fill_circle_capped_on_round_display() {
        let mut d = drawer(DisplayGeometry::circular(100));
        assert_eq!(d.total_drawable_area(), 7853);
        d.fill_circle(ON, -50, -50, 200).unwrap();
        assert_eq!(d.area_drawn(), d.total_drawable_area());
        // The trace carries the capped value, not the raw π·100²
        assert!(d.trace_text().ends_with(" area=7853\n"), "{}", d.trace_text());
    }

    #[test]
    fn test_outlines_do_not_change_area() {
        let mut d = drawer(DisplayGeometry::rectangular(50, 50));
        d.draw_rectangle(ON, 0, 0, 49, 49).unwrap();
        d.draw_circle(ON, 0, 0, 50).unwrap();
        d.draw_ellipse(ON, 0, 0, 50, 20).unwrap();
        d.draw_line(ON, 0, 0, 49, 49).unwrap();
        d.write_pixel(ON, 3, 3).unwrap();
        assert_eq!(d.area_drawn(), 0);
        assert_eq!(d.call_count(), 5);
        assert!(!d.trace_text().contains("area="));
    }

    #[test]
    fn test_every_call_is_delegated_once_and_unmodified() {
        let mut d = drawer(DisplayGeometry::rectangular(50, 50));
        d.fill_rounded_rectangle(ON, 1, 2, 3, 4, 5, 6).unwrap();
        d.fill_ellipse_arc(ON, 1, 2, 30, 40, 10.0, 20.0).unwrap();
        d.draw_vertical_line(ON, 7, 8, 9).unwrap();
        assert_eq!(
            d.backend().operations(),
            vec![
                DrawOperation::FillRoundedRectangle {
                    x: 1,
                    y: 2,
                    width: 3,
                    height: 4,
                    arc_width: 5,
                    arc_height: 6
                },
                DrawOperation::FillEllipseArc {
                    x: 1,
                    y: 2,
                    width: 30,
                    height: 40,
                    start_angle: 10.0,
                    arc_angle: 20.0
                },
                DrawOperation::DrawVerticalLine { x: 7, y1: 8, y2: 9 },
            ]
        );
    }

    #[test]
    fn test_backend_error_still_traced_and_accounted() {
        let mut d = TracingDrawer::new(RecordingBackend::<BinaryColor>::failing(), DisplayGeometry::rectangular(100, 100));
        let result = d.fill_rectangle(ON, 0, 0, 5, 5);
        assert_eq!(result, Err(DrawError::Backend(MockBackendError)));
        assert_eq!(d.area_drawn(), 25);
        assert_eq!(d.backend().call_count(), 1);
        assert_eq!(d.call_count(), 1);
    }

    #[test]
    fn test_accounting_failure_still_delegates() {
        let mut d = drawer(DisplayGeometry::circular(100));
        // Negative start angle gives a negative estimate
        let result = d.fill_circle_arc(ON, 0, 0, 100, -90.0, 45.0);
        assert!(matches!(
            result,
            Err(DrawError::Accounting(AccountingError::NegativeArea { .. }))
        ));
        assert!(d.is_halted());
        assert_eq!(d.backend().call_count(), 1);
        assert_eq!(d.area_drawn(), 0);
        // Record present, without an area
        assert_eq!(
            d.trace_text(),
            "fillCircleArc x=0 y=0 diameter=100 startAngle=-90 arcAngle=45\n"
        );

        // Halt is permanent: later fills fail but still render and trace
        d.reset();
        assert_eq!(
            d.fill_rectangle(ON, 0, 0, 1, 1),
            Err(DrawError::Accounting(AccountingError::Halted))
        );
        assert_eq!(d.backend().call_count(), 2);
        assert_eq!(d.call_count(), 1);
        // Outlines never touch the accumulator
        assert!(d.draw_circle(ON, 0, 0, 10).is_ok());
    }

    #[test]
    fn test_negative_estimate_after_fill_keeps_total() {
        let mut d = drawer(DisplayGeometry::circular(100));
        d.fill_rectangle(ON, 0, 0, 10, 20).unwrap();
        let before = d.area_drawn();

        let arc = d.fill_circle_arc(ON, 0, 0, 100, -90.0, 45.0);
        assert_eq!(arc, Err(DrawError::Accounting(AccountingError::NegativeArea { amount: -78 })));
        let ellipse = d.fill_ellipse(ON, 0, 0, -10, 5);
        assert_eq!(ellipse, Err(DrawError::Accounting(AccountingError::Halted)));

        assert_eq!(d.area_drawn(), before);
        assert!(d.is_halted());
        assert_eq!(d.backend().call_count(), 3);
        // No negative area ever reaches the trace
        assert!(!d.trace_text().contains("area=-"), "{}", d.trace_text());
        assert_eq!(d.trace_text().matches("area=").count(), 1);
    }

    #[test]
    fn test_reset_clears_cycle_state() {
        let mut d = drawer(DisplayGeometry::rectangular(100, 100));
        d.fill_rectangle(ON, 0, 0, 10, 10).unwrap();
        d.append_trace("marker\n");
        d.reset();
        assert_eq!(d.area_drawn(), 0);
        assert_eq!(d.trace_text(), "");
        assert_eq!(d.call_count(), 0);
        // Backend history is not part of cycle state
        assert_eq!(d.backend().call_count(), 1);
    }

    #[test]
    fn test_apply_matches_direct_calls() {
        let data = [0u8; 2];
        let image = ImageRaw::<BinaryColor>::new(&data, 8);
        let ops = [
            DrawOperation::FillRectangle {
                x1: 0,
                y1: 0,
                x2: 4,
                y2: 4,
            },
            DrawOperation::DrawImage {
                region_x: 0,
                region_y: 0,
                width: 8,
                height: 2,
                x: 10,
                y: 10,
                alpha: 255,
            },
            DrawOperation::DrawLine {
                x1: 0,
                y1: 0,
                x2: 9,
                y2: 9,
            },
        ];

        let mut d = drawer(DisplayGeometry::rectangular(64, 64));
        for op in &ops {
            d.apply(ON, op, &image).unwrap();
        }
        assert_eq!(d.area_drawn(), 16 + 16);
        assert_eq!(d.backend().operations(), ops.to_vec());
        assert_eq!(
            d.trace_text(),
            "fillRectangle x1=0 y1=0 x2=4 y2=4 area=16\n\
             drawImage regionX=0 regionY=0 width=8 height=2 x=10 y=10 alpha=255 area=16\n\
             drawLine x1=0 y1=0 x2=9 y2=9\n"
        );
    }

    #[test]
    fn test_drawer_over_borrowed_backend() {
        let mut backend = RecordingBackend::<BinaryColor>::new();
        {
            let mut d = TracingDrawer::new(&mut backend, DisplayGeometry::rectangular(10, 10));
            d.fill_ellipse(ON, 0, 0, 4, 4).unwrap();
            assert_eq!(d.area_drawn(), 16);
        }
        assert_eq!(backend.call_count(), 1);
    }

    #[test]
    fn test_draw_error_display() {
        let e: DrawError<MockBackendError> = DrawError::Backend(MockBackendError);
        assert_eq!(e.to_string(), "backend draw failed: mock backend failure");
        let e: DrawError<MockBackendError> = AccountingError::Halted.into();
        assert_eq!(
            e.to_string(),
            "coverage accounting failed: area accounting halted after an earlier violation"
        );
    }
}
