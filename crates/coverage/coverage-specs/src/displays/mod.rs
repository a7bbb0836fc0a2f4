//! Pre-configured display geometries
//!
//! Round smartwatch-class panels and the rectangular e-ink panels used on the
//! partial-refresh targets.

pub mod eink;
pub mod round;

pub use eink::*;
pub use round::*;

use crate::DisplayGeometry;

/// Named display geometry template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DisplayPreset {
    /// Lookup name (lowercase, dash separated)
    pub name: &'static str,
    /// Human readable description
    pub description: &'static str,
    /// Drawable surface
    pub geometry: DisplayGeometry,
}

/// Every built-in preset, round panels first
pub const PRESETS: &[DisplayPreset] = &[
    MIMXRT595_ROUND,
    ROUND_240,
    GDEM0397T81P,
    WAVESHARE_2_13_V4,
    WAVESHARE_2_9_V2,
    WAVESHARE_4_2_V2,
];

/// Find a preset by name, ignoring ASCII case
pub fn preset_by_name(name: &str) -> Option<&'static DisplayPreset> {
    PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_lookup() {
        let preset = preset_by_name("mimxrt595-round").map(|p| p.geometry);
        assert_eq!(preset, Some(MIMXRT595_ROUND.geometry));
        assert!(preset_by_name("MIMXRT595-ROUND").is_some());
        assert!(preset_by_name("no-such-panel").is_none());
    }

    #[test]
    fn test_preset_names_unique() {
        for (i, a) in PRESETS.iter().enumerate() {
            for b in PRESETS.iter().skip(i.saturating_add(1)) {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_presets_are_valid_geometries() {
        for preset in PRESETS {
            let g = preset.geometry;
            assert!(
                DisplayGeometry::checked(g.width, g.height, g.shape).is_ok(),
                "preset {} is not a valid geometry",
                preset.name
            );
        }
    }
}
