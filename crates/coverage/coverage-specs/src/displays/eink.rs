//! Rectangular e-ink display geometries
//!
//! Resolutions match the Waveshare and Good Display datasheets.

use crate::{DisplayGeometry, DisplayPreset};

/// Good Display GDEM0397T81P (3.97", 800×480, SSD1677)
pub const GDEM0397T81P: DisplayPreset = DisplayPreset {
    name: "gdem0397t81p",
    description: "Good Display 3.97\" e-ink, 800x480",
    geometry: DisplayGeometry::rectangular(800, 480),
};

/// Waveshare 2.13" V4 (250×122, SSD1680)
pub const WAVESHARE_2_13_V4: DisplayPreset = DisplayPreset {
    name: "waveshare-2.13-v4",
    description: "Waveshare 2.13\" V4 e-ink, 250x122",
    geometry: DisplayGeometry::rectangular(250, 122),
};

/// Waveshare 2.9" V2 (296×128, IL0373)
pub const WAVESHARE_2_9_V2: DisplayPreset = DisplayPreset {
    name: "waveshare-2.9-v2",
    description: "Waveshare 2.9\" V2 e-ink, 296x128",
    geometry: DisplayGeometry::rectangular(296, 128),
};

/// Waveshare 4.2" V2 (400×300, SSD1619)
pub const WAVESHARE_4_2_V2: DisplayPreset = DisplayPreset {
    name: "waveshare-4.2-v2",
    description: "Waveshare 4.2\" V2 e-ink, 400x300",
    geometry: DisplayGeometry::rectangular(400, 300),
};
