//! Rendering backends the tracing drawer delegates to
//!
//! [`DrawingBackend`] has one method per primitive, with the same geometric
//! parameters as the matching [`DrawOperation`](crate::DrawOperation) variant
//! plus the color. The tracing drawer calls exactly one of them per primitive,
//! with the arguments it received.
//!
//! Two backends ship with the crate:
//!
//! - [`GraphicsBackend`] renders into any embedded-graphics [`DrawTarget`]
//!   (framebuffers, the e-ink emulator, `MockDisplay`)
//! - [`NullBackend`] draws nothing, for replaying traces
//!
//! ## Angle convention
//!
//! Arc angles are in degrees, counter-clockwise from 3 o'clock. The
//! embedded-graphics primitives measure clockwise, so [`GraphicsBackend`]
//! negates start and sweep before drawing.

use core::convert::Infallible;
use core::marker::PhantomData;

use embedded_graphics::image::{Image, ImageDrawable, ImageDrawableExt};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Arc, Circle, ContainsPoint, Ellipse, Line, PointsIter, PrimitiveStyle, Rectangle,
    RoundedRectangle, Sector,
};

/// Target of every forwarded primitive call
///
/// Coordinates follow the rendering pipeline: `(x, y)` is the top-left
/// corner of the shape's bounding box unless the method says otherwise, and
/// line/rectangle corners are inclusive.
#[allow(clippy::too_many_arguments)]
pub trait DrawingBackend {
    /// Pixel color accepted by this backend
    type Color: PixelColor;
    /// Error raised by the backend
    type Error;

    /// Write one pixel
    fn write_pixel(&mut self, color: Self::Color, x: i32, y: i32) -> Result<(), Self::Error>;

    /// Line from `(x1, y1)` to `(x2, y2)`
    fn draw_line(&mut self, color: Self::Color, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<(), Self::Error>;

    /// Horizontal line on row `y`
    fn draw_horizontal_line(&mut self, color: Self::Color, x1: i32, x2: i32, y: i32) -> Result<(), Self::Error>;

    /// Vertical line on column `x`
    fn draw_vertical_line(&mut self, color: Self::Color, x: i32, y1: i32, y2: i32) -> Result<(), Self::Error>;

    /// Rectangle outline between two corners
    fn draw_rectangle(&mut self, color: Self::Color, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<(), Self::Error>;

    /// Rounded rectangle outline; `arc_width`/`arc_height` are the corner ellipse diameters
    fn draw_rounded_rectangle(
        &mut self,
        color: Self::Color,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        arc_width: i32,
        arc_height: i32,
    ) -> Result<(), Self::Error>;

    /// Filled rounded rectangle
    fn fill_rounded_rectangle(
        &mut self,
        color: Self::Color,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        arc_width: i32,
        arc_height: i32,
    ) -> Result<(), Self::Error>;

    /// Circle outline
    fn draw_circle(&mut self, color: Self::Color, x: i32, y: i32, diameter: i32) -> Result<(), Self::Error>;

    /// Filled circle
    fn fill_circle(&mut self, color: Self::Color, x: i32, y: i32, diameter: i32) -> Result<(), Self::Error>;

    /// Ellipse outline
    fn draw_ellipse(&mut self, color: Self::Color, x: i32, y: i32, width: i32, height: i32) -> Result<(), Self::Error>;

    /// Filled ellipse
    fn fill_ellipse(&mut self, color: Self::Color, x: i32, y: i32, width: i32, height: i32) -> Result<(), Self::Error>;

    /// Circle arc outline
    fn draw_circle_arc(
        &mut self,
        color: Self::Color,
        x: i32,
        y: i32,
        diameter: i32,
        start_angle: f32,
        arc_angle: f32,
    ) -> Result<(), Self::Error>;

    /// Filled circle arc (pie slice)
    fn fill_circle_arc(
        &mut self,
        color: Self::Color,
        x: i32,
        y: i32,
        diameter: i32,
        start_angle: f32,
        arc_angle: f32,
    ) -> Result<(), Self::Error>;

    /// Ellipse arc outline
    fn draw_ellipse_arc(
        &mut self,
        color: Self::Color,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        start_angle: f32,
        arc_angle: f32,
    ) -> Result<(), Self::Error>;

    /// Filled ellipse arc
    fn fill_ellipse_arc(
        &mut self,
        color: Self::Color,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        start_angle: f32,
        arc_angle: f32,
    ) -> Result<(), Self::Error>;

    /// Blit the `width × height` region at `(region_x, region_y)` of `image` to `(x, y)`
    fn draw_image<I>(
        &mut self,
        image: &I,
        region_x: i32,
        region_y: i32,
        width: i32,
        height: i32,
        x: i32,
        y: i32,
        alpha: u8,
    ) -> Result<(), Self::Error>
    where
        I: ImageDrawable<Color = Self::Color>;

    /// Filled rectangle between two corners
    fn fill_rectangle(&mut self, color: Self::Color, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<(), Self::Error>;
}

/// Forward through a mutable borrow so a drawer can wrap a backend it does not own
#[allow(clippy::too_many_arguments)]
impl<B: DrawingBackend> DrawingBackend for &mut B {
    type Color = B::Color;
    type Error = B::Error;

    fn write_pixel(&mut self, color: Self::Color, x: i32, y: i32) -> Result<(), Self::Error> {
        (**self).write_pixel(color, x, y)
    }

    fn draw_line(&mut self, color: Self::Color, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<(), Self::Error> {
        (**self).draw_line(color, x1, y1, x2, y2)
    }

    fn draw_horizontal_line(&mut self, color: Self::Color, x1: i32, x2: i32, y: i32) -> Result<(), Self::Error> {
        (**self).draw_horizontal_line(color, x1, x2, y)
    }

    fn draw_vertical_line(&mut self, color: Self::Color, x: i32, y1: i32, y2: i32) -> Result<(), Self::Error> {
        (**self).draw_vertical_line(color, x, y1, y2)
    }

    fn draw_rectangle(&mut self, color: Self::Color, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<(), Self::Error> {
        (**self).draw_rectangle(color, x1, y1, x2, y2)
    }

    fn draw_rounded_rectangle(
        &mut self,
        color: Self::Color,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        arc_width: i32,
        arc_height: i32,
    ) -> Result<(), Self::Error> {
        (**self).draw_rounded_rectangle(color, x, y, width, height, arc_width, arc_height)
    }

    fn fill_rounded_rectangle(
        &mut self,
        color: Self::Color,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        arc_width: i32,
        arc_height: i32,
    ) -> Result<(), Self::Error> {
        (**self).fill_rounded_rectangle(color, x, y, width, height, arc_width, arc_height)
    }

    fn draw_circle(&mut self, color: Self::Color, x: i32, y: i32, diameter: i32) -> Result<(), Self::Error> {
        (**self).draw_circle(color, x, y, diameter)
    }

    fn fill_circle(&mut self, color: Self::Color, x: i32, y: i32, diameter: i32) -> Result<(), Self::Error> {
        (**self).fill_circle(color, x, y, diameter)
    }

    fn draw_ellipse(&mut self, color: Self::Color, x: i32, y: i32, width: i32, height: i32) -> Result<(), Self::Error> {
        (**self).draw_ellipse(color, x, y, width, height)
    }

    fn fill_ellipse(&mut self, color: Self::Color, x: i32, y: i32, width: i32, height: i32) -> Result<(), Self::Error> {
        (**self).fill_ellipse(color, x, y, width, height)
    }

    fn draw_circle_arc(
        &mut self,
        color: Self::Color,
        x: i32,
        y: i32,
        diameter: i32,
        start_angle: f32,
        arc_angle: f32,
    ) -> Result<(), Self::Error> {
        (**self).draw_circle_arc(color, x, y, diameter, start_angle, arc_angle)
    }

    fn fill_circle_arc(
        &mut self,
        color: Self::Color,
        x: i32,
        y: i32,
        diameter: i32,
        start_angle: f32,
        arc_angle: f32,
    ) -> Result<(), Self::Error> {
        (**self).fill_circle_arc(color, x, y, diameter, start_angle, arc_angle)
    }

    fn draw_ellipse_arc(
        &mut self,
        color: Self::Color,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        start_angle: f32,
        arc_angle: f32,
    ) -> Result<(), Self::Error> {
        (**self).draw_ellipse_arc(color, x, y, width, height, start_angle, arc_angle)
    }

    fn fill_ellipse_arc(
        &mut self,
        color: Self::Color,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        start_angle: f32,
        arc_angle: f32,
    ) -> Result<(), Self::Error> {
        (**self).fill_ellipse_arc(color, x, y, width, height, start_angle, arc_angle)
    }

    fn draw_image<I>(
        &mut self,
        image: &I,
        region_x: i32,
        region_y: i32,
        width: i32,
        height: i32,
        x: i32,
        y: i32,
        alpha: u8,
    ) -> Result<(), Self::Error>
    where
        I: ImageDrawable<Color = Self::Color>,
    {
        (**self).draw_image(image, region_x, region_y, width, height, x, y, alpha)
    }

    fn fill_rectangle(&mut self, color: Self::Color, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<(), Self::Error> {
        (**self).fill_rectangle(color, x1, y1, x2, y2)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// GraphicsBackend
// ─────────────────────────────────────────────────────────────────────────────

/// Renders primitives into an embedded-graphics [`DrawTarget`]
///
/// Outlines use a 1 px stroke. Negative dimensions draw nothing. Image alpha
/// is ignored: e-ink and 1-bit targets have no blending, so blits are opaque.
pub struct GraphicsBackend<D> {
    target: D,
}

impl<D: DrawTarget> GraphicsBackend<D> {
    /// Wrap a draw target
    pub fn new(target: D) -> Self {
        Self { target }
    }

    /// Get a reference to the underlying target
    pub fn target(&self) -> &D {
        &self.target
    }

    /// Get a mutable reference to the underlying target
    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    /// Consume the backend and return the target
    pub fn into_inner(self) -> D {
        self.target
    }

    fn stroke(color: D::Color) -> PrimitiveStyle<D::Color> {
        PrimitiveStyle::with_stroke(color, 1)
    }

    /// Ellipse (arc) pixels whose polar angle lies inside the sweep
    #[allow(clippy::too_many_arguments)]
    fn draw_ellipse_sector(
        &mut self,
        color: D::Color,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        start_angle: f32,
        arc_angle: f32,
        filled: bool,
    ) -> Result<(), D::Error> {
        let bounds = Rectangle::new(Point::new(x, y), Size::new(dim(width), dim(height)));
        let ellipse = Ellipse::new(bounds.top_left, bounds.size);
        let inner = Ellipse::with_center(
            bounds.center(),
            Size::new(bounds.size.width.saturating_sub(2), bounds.size.height.saturating_sub(2)),
        );
        let cx = f64::from(x) + f64::from(bounds.size.width) / 2.0;
        let cy = f64::from(y) + f64::from(bounds.size.height) / 2.0;

        let pixels = ellipse
            .points()
            .filter(move |p| filled || !inner.contains(*p))
            .filter(move |p| {
                let dx = f64::from(p.x) + 0.5 - cx;
                let dy = f64::from(p.y) + 0.5 - cy;
                // Screen y grows downward; flip it for counter-clockwise angles.
                #[allow(clippy::cast_possible_truncation)]
                let angle = libm::atan2(-dy, dx).to_degrees() as f32;
                in_sweep(angle, start_angle, arc_angle)
            })
            .map(|p| Pixel(p, color));
        self.target.draw_iter(pixels)
    }
}

#[allow(clippy::too_many_arguments)]
impl<D: DrawTarget> DrawingBackend for GraphicsBackend<D> {
    type Color = D::Color;
    type Error = D::Error;

    fn write_pixel(&mut self, color: Self::Color, x: i32, y: i32) -> Result<(), Self::Error> {
        Pixel(Point::new(x, y), color).draw(&mut self.target)
    }

    fn draw_line(&mut self, color: Self::Color, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<(), Self::Error> {
        Line::new(Point::new(x1, y1), Point::new(x2, y2))
            .into_styled(Self::stroke(color))
            .draw(&mut self.target)
    }

    fn draw_horizontal_line(&mut self, color: Self::Color, x1: i32, x2: i32, y: i32) -> Result<(), Self::Error> {
        Line::new(Point::new(x1, y), Point::new(x2, y))
            .into_styled(Self::stroke(color))
            .draw(&mut self.target)
    }

    fn draw_vertical_line(&mut self, color: Self::Color, x: i32, y1: i32, y2: i32) -> Result<(), Self::Error> {
        Line::new(Point::new(x, y1), Point::new(x, y2))
            .into_styled(Self::stroke(color))
            .draw(&mut self.target)
    }

    fn draw_rectangle(&mut self, color: Self::Color, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<(), Self::Error> {
        Rectangle::with_corners(Point::new(x1, y1), Point::new(x2, y2))
            .into_styled(Self::stroke(color))
            .draw(&mut self.target)
    }

    fn draw_rounded_rectangle(
        &mut self,
        color: Self::Color,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        arc_width: i32,
        arc_height: i32,
    ) -> Result<(), Self::Error> {
        rounded(x, y, width, height, arc_width, arc_height)
            .into_styled(Self::stroke(color))
            .draw(&mut self.target)
    }

    fn fill_rounded_rectangle(
        &mut self,
        color: Self::Color,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        arc_width: i32,
        arc_height: i32,
    ) -> Result<(), Self::Error> {
        rounded(x, y, width, height, arc_width, arc_height)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.target)
    }

    fn draw_circle(&mut self, color: Self::Color, x: i32, y: i32, diameter: i32) -> Result<(), Self::Error> {
        Circle::new(Point::new(x, y), dim(diameter))
            .into_styled(Self::stroke(color))
            .draw(&mut self.target)
    }

    fn fill_circle(&mut self, color: Self::Color, x: i32, y: i32, diameter: i32) -> Result<(), Self::Error> {
        Circle::new(Point::new(x, y), dim(diameter))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.target)
    }

    fn draw_ellipse(&mut self, color: Self::Color, x: i32, y: i32, width: i32, height: i32) -> Result<(), Self::Error> {
        Ellipse::new(Point::new(x, y), Size::new(dim(width), dim(height)))
            .into_styled(Self::stroke(color))
            .draw(&mut self.target)
    }

    fn fill_ellipse(&mut self, color: Self::Color, x: i32, y: i32, width: i32, height: i32) -> Result<(), Self::Error> {
        Ellipse::new(Point::new(x, y), Size::new(dim(width), dim(height)))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.target)
    }

    fn draw_circle_arc(
        &mut self,
        color: Self::Color,
        x: i32,
        y: i32,
        diameter: i32,
        start_angle: f32,
        arc_angle: f32,
    ) -> Result<(), Self::Error> {
        Arc::new(
            Point::new(x, y),
            dim(diameter),
            Angle::from_degrees(-start_angle),
            Angle::from_degrees(-arc_angle),
        )
        .into_styled(Self::stroke(color))
        .draw(&mut self.target)
    }

    fn fill_circle_arc(
        &mut self,
        color: Self::Color,
        x: i32,
        y: i32,
        diameter: i32,
        start_angle: f32,
        arc_angle: f32,
    ) -> Result<(), Self::Error> {
        Sector::new(
            Point::new(x, y),
            dim(diameter),
            Angle::from_degrees(-start_angle),
            Angle::from_degrees(-arc_angle),
        )
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(&mut self.target)
    }

    fn draw_ellipse_arc(
        &mut self,
        color: Self::Color,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        start_angle: f32,
        arc_angle: f32,
    ) -> Result<(), Self::Error> {
        self.draw_ellipse_sector(color, x, y, width, height, start_angle, arc_angle, false)
    }

    fn fill_ellipse_arc(
        &mut self,
        color: Self::Color,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        start_angle: f32,
        arc_angle: f32,
    ) -> Result<(), Self::Error> {
        self.draw_ellipse_sector(color, x, y, width, height, start_angle, arc_angle, true)
    }

    fn draw_image<I>(
        &mut self,
        image: &I,
        region_x: i32,
        region_y: i32,
        width: i32,
        height: i32,
        x: i32,
        y: i32,
        _alpha: u8,
    ) -> Result<(), Self::Error>
    where
        I: ImageDrawable<Color = Self::Color>,
    {
        let region = Rectangle::new(Point::new(region_x, region_y), Size::new(dim(width), dim(height)));
        let sub_image = image.sub_image(&region);
        Image::new(&sub_image, Point::new(x, y)).draw(&mut self.target)
    }

    fn fill_rectangle(&mut self, color: Self::Color, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<(), Self::Error> {
        let area = Rectangle::with_corners(Point::new(x1, y1), Point::new(x2, y2));
        self.target.fill_solid(&area, color)
    }
}

/// Clamp a signed dimension to a drawable size; negatives draw nothing
fn dim(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

fn rounded(x: i32, y: i32, width: i32, height: i32, arc_width: i32, arc_height: i32) -> RoundedRectangle {
    let bounds = Rectangle::new(Point::new(x, y), Size::new(dim(width), dim(height)));
    // Corner radii are half the corner ellipse diameters.
    let corner = Size::new(dim(arc_width) / 2, dim(arc_height) / 2);
    RoundedRectangle::with_equal_corners(bounds, corner)
}

/// Whether `angle` lies on the sweep from `start` through `sweep` degrees
///
/// Positive sweeps run counter-clockwise, negative ones clockwise. Sweeps of
/// a full turn or more cover every angle.
fn in_sweep(angle: f32, start: f32, sweep: f32) -> bool {
    if sweep.abs() >= 360.0 {
        return true;
    }
    if sweep >= 0.0 {
        (angle - start).rem_euclid(360.0) <= sweep
    } else {
        (start - angle).rem_euclid(360.0) <= -sweep
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// NullBackend
// ─────────────────────────────────────────────────────────────────────────────

/// Backend that discards every call
///
/// Used to recompute coverage from a recorded trace without rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBackend<C = BinaryColor> {
    _color: PhantomData<C>,
}

impl<C> NullBackend<C> {
    /// Create a backend that draws nothing
    pub fn new() -> Self {
        Self {
            _color: PhantomData,
        }
    }
}

#[allow(clippy::too_many_arguments)]
impl<C: PixelColor> DrawingBackend for NullBackend<C> {
    type Color = C;
    type Error = Infallible;

    fn write_pixel(&mut self, _: C, _: i32, _: i32) -> Result<(), Infallible> {
        Ok(())
    }

    fn draw_line(&mut self, _: C, _: i32, _: i32, _: i32, _: i32) -> Result<(), Infallible> {
        Ok(())
    }

    fn draw_horizontal_line(&mut self, _: C, _: i32, _: i32, _: i32) -> Result<(), Infallible> {
        Ok(())
    }

    fn draw_vertical_line(&mut self, _: C, _: i32, _: i32, _: i32) -> Result<(), Infallible> {
        Ok(())
    }

    fn draw_rectangle(&mut self, _: C, _: i32, _: i32, _: i32, _: i32) -> Result<(), Infallible> {
        Ok(())
    }

    fn draw_rounded_rectangle(&mut self, _: C, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32) -> Result<(), Infallible> {
        Ok(())
    }

    fn fill_rounded_rectangle(&mut self, _: C, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32) -> Result<(), Infallible> {
        Ok(())
    }

    fn draw_circle(&mut self, _: C, _: i32, _: i32, _: i32) -> Result<(), Infallible> {
        Ok(())
    }

    fn fill_circle(&mut self, _: C, _: i32, _: i32, _: i32) -> Result<(), Infallible> {
        Ok(())
    }

    fn draw_ellipse(&mut self, _: C, _: i32, _: i32, _: i32, _: i32) -> Result<(), Infallible> {
        Ok(())
    }

    fn fill_ellipse(&mut self, _: C, _: i32, _: i32, _: i32, _: i32) -> Result<(), Infallible> {
        Ok(())
    }

    fn draw_circle_arc(&mut self, _: C, _: i32, _: i32, _: i32, _: f32, _: f32) -> Result<(), Infallible> {
        Ok(())
    }

    fn fill_circle_arc(&mut self, _: C, _: i32, _: i32, _: i32, _: f32, _: f32) -> Result<(), Infallible> {
        Ok(())
    }

    fn draw_ellipse_arc(&mut self, _: C, _: i32, _: i32, _: i32, _: i32, _: f32, _: f32) -> Result<(), Infallible> {
        Ok(())
    }

    fn fill_ellipse_arc(&mut self, _: C, _: i32, _: i32, _: i32, _: i32, _: f32, _: f32) -> Result<(), Infallible> {
        Ok(())
    }

    fn draw_image<I>(&mut self, _: &I, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: u8) -> Result<(), Infallible>
    where
        I: ImageDrawable<Color = C>,
    {
        Ok(())
    }

    fn fill_rectangle(&mut self, _: C, _: i32, _: i32, _: i32, _: i32) -> Result<(), Infallible> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    fn backend() -> GraphicsBackend<MockDisplay<BinaryColor>> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        GraphicsBackend::new(display)
    }

    fn lit(backend: &GraphicsBackend<MockDisplay<BinaryColor>>) -> usize {
        let display = backend.target();
        (0..64)
            .flat_map(|y| (0..64).map(move |x| Point::new(x, y)))
            .filter(|p| display.get_pixel(*p) == Some(BinaryColor::On))
            .count()
    }

    #[test]
    fn test_fill_rectangle_corners_inclusive() {
        let mut b = backend();
        b.fill_rectangle(BinaryColor::On, 0, 0, 9, 4).unwrap();
        assert_eq!(lit(&b), 50);
        assert_eq!(b.target().get_pixel(Point::new(9, 4)), Some(BinaryColor::On));
        assert_eq!(b.target().get_pixel(Point::new(10, 4)), None);
    }

    #[test]
    fn test_outline_rectangle() {
        let mut b = backend();
        b.draw_rectangle(BinaryColor::On, 0, 0, 9, 9).unwrap();
        // 10×10 border minus the 8×8 interior
        assert_eq!(lit(&b), 36);
    }

    #[test]
    fn test_lines() {
        let mut b = backend();
        b.draw_horizontal_line(BinaryColor::On, 0, 9, 3).unwrap();
        b.draw_vertical_line(BinaryColor::On, 20, 0, 4).unwrap();
        assert_eq!(lit(&b), 15);
    }

    #[test]
    fn test_write_pixel() {
        let mut b = backend();
        b.write_pixel(BinaryColor::On, 7, 8).unwrap();
        assert_eq!(lit(&b), 1);
        assert_eq!(b.target().get_pixel(Point::new(7, 8)), Some(BinaryColor::On));
    }

    #[test]
    fn test_negative_size_draws_nothing() {
        let mut b = backend();
        b.fill_ellipse(BinaryColor::On, 0, 0, -10, 10).unwrap();
        b.fill_circle(BinaryColor::On, 0, 0, -3).unwrap();
        assert_eq!(lit(&b), 0);
    }

    #[test]
    fn test_fill_ellipse_arc_half_is_top_half() {
        let mut b = backend();
        // 0° → 180° counter-clockwise covers the upper half
        b.fill_ellipse_arc(BinaryColor::On, 0, 0, 40, 20, 0.0, 180.0).unwrap();
        let display = b.target();
        assert_eq!(display.get_pixel(Point::new(20, 2)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(20, 17)), None);
    }

    #[test]
    fn test_draw_ellipse_arc_is_thinner_than_fill() {
        let mut outline = backend();
        outline.draw_ellipse_arc(BinaryColor::On, 0, 0, 40, 20, 0.0, 360.0).unwrap();
        let mut filled = backend();
        filled.fill_ellipse_arc(BinaryColor::On, 0, 0, 40, 20, 0.0, 360.0).unwrap();
        assert!(lit(&outline) > 0);
        assert!(lit(&outline) < lit(&filled));
    }

    #[test]
    fn test_in_sweep() {
        assert!(in_sweep(45.0, 0.0, 90.0));
        assert!(!in_sweep(135.0, 0.0, 90.0));
        // Wraps through 0°
        assert!(in_sweep(10.0, 350.0, 30.0));
        // Clockwise sweep
        assert!(in_sweep(-45.0, 0.0, -90.0));
        assert!(!in_sweep(45.0, 0.0, -90.0));
        assert!(in_sweep(123.0, 0.0, 360.0));
    }

    #[test]
    fn test_null_backend_accepts_everything() {
        let mut b = NullBackend::<BinaryColor>::new();
        assert!(b.fill_rectangle(BinaryColor::On, 0, 0, 1000, 1000).is_ok());
        assert!(b.draw_ellipse_arc(BinaryColor::On, 0, 0, 10, 10, 0.0, 90.0).is_ok());
    }
}
