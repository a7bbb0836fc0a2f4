//! Round display geometries

use crate::{DisplayGeometry, DisplayPreset};

/// i.MX RT595 EVK round panel (392×392)
///
/// Smartwatch-class AMOLED driven through a partial-refresh flush pipeline.
/// Drawable area is the inscribed disc: ⌊π × 196²⌋ = 120 687 px.
pub const MIMXRT595_ROUND: DisplayPreset = DisplayPreset {
    name: "mimxrt595-round",
    description: "i.MX RT595 EVK round panel, 392x392",
    geometry: DisplayGeometry::circular(392),
};

/// Generic 240×240 round watch face
pub const ROUND_240: DisplayPreset = DisplayPreset {
    name: "round-240",
    description: "Generic 240x240 round watch face",
    geometry: DisplayGeometry::circular(240),
};
