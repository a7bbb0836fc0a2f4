//! Pixel area estimation per primitive
//!
//! Maps a [`DrawOperation`] to the number of pixels it is estimated to fill.
//! Estimates are raw: capping against the remaining drawable area happens in
//! the [`AreaAccumulator`](crate::AreaAccumulator).
//!
//! | Primitive | Estimate |
//! |-----------|----------|
//! | outlines, lines, pixels | 0 (traced, not accounted) |
//! | `fillRectangle` | `|x1-x2| × |y1-y2|` |
//! | `fillCircle` | `π r²`, `r = diameter / 2` |
//! | `fillEllipse`, `fillRoundedRectangle`, `drawImage` | `width × height` (bounding box) |
//! | `fillCircleArc` | `2π r × startAngle / 360` |
//! | `fillEllipseArc` | 0 |
//!
//! Bounding-box estimates over-count: ellipse curvature, rounded corners and
//! any part of an image blit that lands off-surface are all counted as drawn.
//!
//! The circle-arc formula scales a perimeter by the *start* angle rather than
//! a sector area by the swept angle, and filled ellipse arcs are not counted
//! at all. Both rules are kept so recomputed areas agree with the `area=`
//! values of earlier captures.

use core::f64::consts::PI;

use crate::DrawOperation;

/// Whether `op` takes part in coverage accounting
///
/// Accounted operations get an `area=` field in their trace record.
pub fn fills_area(op: &DrawOperation) -> bool {
    matches!(
        op,
        DrawOperation::FillRectangle { .. }
            | DrawOperation::FillCircle { .. }
            | DrawOperation::FillEllipse { .. }
            | DrawOperation::FillRoundedRectangle { .. }
            | DrawOperation::DrawImage { .. }
            | DrawOperation::FillCircleArc { .. }
    )
}

/// Raw estimated pixel area of `op`, truncated toward zero
///
/// Non-accounted operations return 0. Degenerate input (negative dimensions
/// or angles, such as a clockwise arc) can yield a negative estimate; the
/// accumulator rejects it as fatal.
pub fn estimate(op: &DrawOperation) -> i64 {
    match *op {
        DrawOperation::FillRectangle { x1, y1, x2, y2 } => {
            let w = u64::from(x1.abs_diff(x2));
            let h = u64::from(y1.abs_diff(y2));
            i64::try_from(w.saturating_mul(h)).unwrap_or(i64::MAX)
        }
        DrawOperation::FillCircle { diameter, .. } => {
            let radius = f64::from(diameter) / 2.0;
            truncate(PI * radius * radius)
        }
        DrawOperation::FillEllipse { width, height, .. }
        | DrawOperation::FillRoundedRectangle { width, height, .. }
        | DrawOperation::DrawImage { width, height, .. } => {
            i64::from(width).saturating_mul(i64::from(height))
        }
        DrawOperation::FillCircleArc {
            diameter,
            start_angle,
            ..
        } => {
            let radius = f64::from(diameter) / 2.0;
            truncate(2.0 * PI * radius * f64::from(start_angle) / 360.0)
        }
        DrawOperation::WritePixel { .. }
        | DrawOperation::DrawLine { .. }
        | DrawOperation::DrawHorizontalLine { .. }
        | DrawOperation::DrawVerticalLine { .. }
        | DrawOperation::DrawRectangle { .. }
        | DrawOperation::DrawRoundedRectangle { .. }
        | DrawOperation::DrawCircle { .. }
        | DrawOperation::DrawEllipse { .. }
        | DrawOperation::DrawCircleArc { .. }
        | DrawOperation::DrawEllipseArc { .. }
        | DrawOperation::FillEllipseArc { .. } => 0,
    }
}

/// Drop the fractional part; NaN maps to 0 and infinities saturate
fn truncate(area: f64) -> i64 {
    // SAFETY: `as` from f64 saturates at the i64 bounds and maps NaN to 0,
    // which is the intended clamping for pixel counts.
    #[allow(clippy::cast_possible_truncation)]
    let whole = libm::trunc(area) as i64;
    whole
}
