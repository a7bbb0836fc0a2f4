//! Test doubles
//!
//! [`RecordingBackend`] stores every forwarded call as a [`DrawOperation`]
//! so tests can check that the tracing drawer delegates each primitive once
//! and unmodified.

use core::fmt;

use embedded_graphics::image::ImageDrawable;
use embedded_graphics::prelude::PixelColor;

use crate::{DrawOperation, DrawingBackend};

/// Backend that records calls instead of rendering
#[derive(Debug, Clone)]
pub struct RecordingBackend<C> {
    calls: Vec<(C, DrawOperation)>,
    fail: bool,
}

impl<C: PixelColor> RecordingBackend<C> {
    /// Backend that accepts every call
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            fail: false,
        }
    }

    /// Backend that records every call, then reports [`MockBackendError`]
    pub fn failing() -> Self {
        Self {
            calls: Vec::new(),
            fail: true,
        }
    }

    /// Forwarded operations, in call order
    pub fn operations(&self) -> Vec<DrawOperation> {
        self.calls.iter().map(|(_, op)| *op).collect()
    }

    /// Number of forwarded calls
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Color passed with each forwarded call (`C::default()` for images)
    pub fn colors(&self) -> Vec<C> {
        self.calls.iter().map(|(c, _)| *c).collect()
    }

    fn push(&mut self, color: C, op: DrawOperation) -> Result<(), MockBackendError> {
        self.calls.push((color, op));
        if self.fail {
            Err(MockBackendError)
        } else {
            Ok(())
        }
    }
}

impl<C: PixelColor> Default for RecordingBackend<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Failure injected by [`RecordingBackend::failing`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockBackendError;

impl fmt::Display for MockBackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mock backend failure")
    }
}

impl std::error::Error for MockBackendError {}

#[allow(clippy::too_many_arguments)]
impl<C: PixelColor + Default> DrawingBackend for RecordingBackend<C> {
    type Color = C;
    type Error = MockBackendError;

    fn write_pixel(&mut self, color: C, x: i32, y: i32) -> Result<(), Self::Error> {
        self.push(color, DrawOperation::WritePixel { x, y })
    }

    fn draw_line(&mut self, color: C, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<(), Self::Error> {
        self.push(color, DrawOperation::DrawLine { x1, y1, x2, y2 })
    }

    fn draw_horizontal_line(&mut self, color: C, x1: i32, x2: i32, y: i32) -> Result<(), Self::Error> {
        self.push(color, DrawOperation::DrawHorizontalLine { x1, x2, y })
    }

    fn draw_vertical_line(&mut self, color: C, x: i32, y1: i32, y2: i32) -> Result<(), Self::Error> {
        self.push(color, DrawOperation::DrawVerticalLine { x, y1, y2 })
    }

    fn draw_rectangle(&mut self, color: C, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<(), Self::Error> {
        self.push(color, DrawOperation::DrawRectangle { x1, y1, x2, y2 })
    }

    fn draw_rounded_rectangle(
        &mut self,
        color: C,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        arc_width: i32,
        arc_height: i32,
    ) -> Result<(), Self::Error> {
        self.push(
            color,
            DrawOperation::DrawRoundedRectangle {
                x,
                y,
                width,
                height,
                arc_width,
                arc_height,
            },
        )
    }

    fn fill_rounded_rectangle(
        &mut self,
        color: C,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        arc_width: i32,
        arc_height: i32,
    ) -> Result<(), Self::Error> {
        self.push(
            color,
            DrawOperation::FillRoundedRectangle {
                x,
                y,
                width,
                height,
                arc_width,
                arc_height,
            },
        )
    }

    fn draw_circle(&mut self, color: C, x: i32, y: i32, diameter: i32) -> Result<(), Self::Error> {
        self.push(color, DrawOperation::DrawCircle { x, y, diameter })
    }

    fn fill_circle(&mut self, color: C, x: i32, y: i32, diameter: i32) -> Result<(), Self::Error> {
        self.push(color, DrawOperation::FillCircle { x, y, diameter })
    }

    fn draw_ellipse(&mut self, color: C, x: i32, y: i32, width: i32, height: i32) -> Result<(), Self::Error> {
        self.push(
            color,
            DrawOperation::DrawEllipse {
                x,
                y,
                width,
                height,
            },
        )
    }

    fn fill_ellipse(&mut self, color: C, x: i32, y: i32, width: i32, height: i32) -> Result<(), Self::Error> {
        self.push(
            color,
            DrawOperation::FillEllipse {
                x,
                y,
                width,
                height,
            },
        )
    }

    fn draw_circle_arc(
        &mut self,
        color: C,
        x: i32,
        y: i32,
        diameter: i32,
        start_angle: f32,
        arc_angle: f32,
    ) -> Result<(), Self::Error> {
        self.push(
            color,
            DrawOperation::DrawCircleArc {
                x,
                y,
                diameter,
                start_angle,
                arc_angle,
            },
        )
    }

    fn fill_circle_arc(
        &mut self,
        color: C,
        x: i32,
        y: i32,
        diameter: i32,
        start_angle: f32,
        arc_angle: f32,
    ) -> Result<(), Self::Error> {
        self.push(
            color,
            DrawOperation::FillCircleArc {
                x,
                y,
                diameter,
                start_angle,
                arc_angle,
            },
        )
    }

    fn draw_ellipse_arc(
        &mut self,
        color: C,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        start_angle: f32,
        arc_angle: f32,
    ) -> Result<(), Self::Error> {
        self.push(
            color,
            DrawOperation::DrawEllipseArc {
                x,
                y,
                width,
                height,
                start_angle,
                arc_angle,
            },
        )
    }

    fn fill_ellipse_arc(
        &mut self,
        color: C,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        start_angle: f32,
        arc_angle: f32,
    ) -> Result<(), Self::Error> {
        self.push(
            color,
            DrawOperation::FillEllipseArc {
                x,
                y,
                width,
                height,
                start_angle,
                arc_angle,
            },
        )
    }

    fn draw_image<I>(
        &mut self,
        _image: &I,
        region_x: i32,
        region_y: i32,
        width: i32,
        height: i32,
        x: i32,
        y: i32,
        alpha: u8,
    ) -> Result<(), Self::Error>
    where
        I: ImageDrawable<Color = C>,
    {
        // Images carry no single color; record the default.
        self.push(
            C::default(),
            DrawOperation::DrawImage {
                region_x,
                region_y,
                width,
                height,
                x,
                y,
                alpha,
            },
        )
    }

    fn fill_rectangle(&mut self, color: C, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<(), Self::Error> {
        self.push(color, DrawOperation::FillRectangle { x1, y1, x2, y2 })
    }
}
