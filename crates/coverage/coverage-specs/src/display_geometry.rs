//! Display geometry types
//!
//! Defines the physical drawable surface that coverage accounting caps against.

use core::f64::consts::PI;

/// Shape of the physical drawable surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DisplayShape {
    /// Every pixel of the `width × height` bounding box is drawable
    Rectangular,
    /// Only the disc inscribed in the bounding box is drawable (round panels)
    Circular,
}

impl DisplayShape {
    /// Short lowercase name, as used in CLI arguments and summaries
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rectangular => "rectangular",
            Self::Circular => "circular",
        }
    }
}

impl core::fmt::Display for DisplayShape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical drawable surface of a display
///
/// Immutable once built. `width` and `height` must both be non-zero, and a
/// circular surface must have a square bounding box. [`DisplayGeometry::new`]
/// does not check this; use [`DisplayGeometry::checked`] where the values come
/// from outside the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DisplayGeometry {
    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,

    /// Surface shape
    pub shape: DisplayShape,
}

impl DisplayGeometry {
    /// Create a geometry without validating it
    pub const fn new(width: u32, height: u32, shape: DisplayShape) -> Self {
        Self {
            width,
            height,
            shape,
        }
    }

    /// Rectangular surface of `width × height` pixels
    pub const fn rectangular(width: u32, height: u32) -> Self {
        Self::new(width, height, DisplayShape::Rectangular)
    }

    /// Round surface inscribed in a `diameter × diameter` box
    pub const fn circular(diameter: u32) -> Self {
        Self::new(diameter, diameter, DisplayShape::Circular)
    }

    /// Create a geometry, rejecting values the accounting core cannot handle
    ///
    /// # Errors
    ///
    /// - [`GeometryError::ZeroDimension`] if `width` or `height` is zero
    /// - [`GeometryError::NonSquareCircle`] for a circular shape whose
    ///   bounding box is not square
    pub const fn checked(width: u32, height: u32, shape: DisplayShape) -> Result<Self, GeometryError> {
        if width == 0 || height == 0 {
            return Err(GeometryError::ZeroDimension { width, height });
        }
        if matches!(shape, DisplayShape::Circular) && width != height {
            return Err(GeometryError::NonSquareCircle { width, height });
        }
        Ok(Self::new(width, height, shape))
    }

    /// Total drawable area in pixels
    ///
    /// - Rectangular: `width × height`
    /// - Circular: `π × (width / 2)²`, truncated. The radius is the integer
    ///   half of the width, so only the width is consulted.
    pub fn total_area(&self) -> u64 {
        match self.shape {
            DisplayShape::Rectangular => u64::from(self.width).saturating_mul(u64::from(self.height)),
            DisplayShape::Circular => {
                let radius = f64::from(self.width / 2);
                // SAFETY: radius ≤ u32::MAX / 2, so π·r² is positive and far
                // below u64::MAX; the cast only drops the fractional part.
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let area = libm::trunc(PI * radius * radius) as u64;
                area
            }
        }
    }

    /// Whether pixel `(x, y)` lies on the physical surface
    ///
    /// For circular surfaces the pixel centre must fall inside the disc.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let in_box = x >= 0 && y >= 0 && i64::from(x) < i64::from(self.width) && i64::from(y) < i64::from(self.height);
        if !in_box {
            return false;
        }
        match self.shape {
            DisplayShape::Rectangular => true,
            DisplayShape::Circular => {
                let radius = f64::from(self.width / 2);
                let center = f64::from(self.width) / 2.0;
                let dx = f64::from(x) + 0.5 - center;
                let dy = f64::from(y) + 0.5 - center;
                dx * dx + dy * dy <= radius * radius
            }
        }
    }
}

/// Construction-time geometry errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// Width or height is zero
    ZeroDimension {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
    /// Circular surface with a non-square bounding box
    NonSquareCircle {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
}

impl core::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(f, "display dimensions must be non-zero (got {width}×{height})")
            }
            Self::NonSquareCircle { width, height } => {
                write!(f, "circular display needs a square bounding box (got {width}×{height})")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GeometryError {}
