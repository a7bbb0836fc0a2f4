//! Display selection shared by the subcommands.

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use coverage_specs::{preset_by_name, DisplayGeometry, DisplayShape};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShapeArg {
    Rectangular,
    Circular,
}

impl From<ShapeArg> for DisplayShape {
    fn from(shape: ShapeArg) -> Self {
        match shape {
            ShapeArg::Rectangular => DisplayShape::Rectangular,
            ShapeArg::Circular => DisplayShape::Circular,
        }
    }
}

/// Either a named preset or explicit dimensions
#[derive(Debug, Clone, Args)]
pub struct DisplayArgs {
    /// Built-in display preset (see `xtask presets`)
    #[arg(long, conflicts_with_all = ["width", "height"])]
    pub preset: Option<String>,
    /// Display width in pixels
    #[arg(long)]
    pub width: Option<u32>,
    /// Display height in pixels (defaults to the width)
    #[arg(long)]
    pub height: Option<u32>,
    /// Drawable surface shape
    #[arg(long, value_enum, default_value_t = ShapeArg::Rectangular)]
    pub shape: ShapeArg,
}

impl DisplayArgs {
    /// Resolve the arguments to a validated geometry
    pub fn resolve(&self) -> Result<DisplayGeometry> {
        if let Some(name) = &self.preset {
            return preset_by_name(name)
                .map(|preset| preset.geometry)
                .with_context(|| format!("unknown display preset `{name}`"));
        }

        let Some(width) = self.width else {
            bail!("pass --preset or --width");
        };
        let height = self.height.unwrap_or(width);
        Ok(DisplayGeometry::checked(width, height, self.shape.into())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(preset: Option<&str>, width: Option<u32>, height: Option<u32>, shape: ShapeArg) -> DisplayArgs {
        DisplayArgs {
            preset: preset.map(str::to_string),
            width,
            height,
            shape,
        }
    }

    #[test]
    fn resolves_preset() {
        let g = args(Some("mimxrt595-round"), None, None, ShapeArg::Rectangular)
            .resolve()
            .unwrap();
        assert_eq!(g, DisplayGeometry::circular(392));
    }

    #[test]
    fn height_defaults_to_width() {
        let g = args(None, Some(240), None, ShapeArg::Circular).resolve().unwrap();
        assert_eq!(g, DisplayGeometry::circular(240));
    }

    #[test]
    fn rejects_invalid_dimensions() {
        assert!(args(None, Some(240), Some(200), ShapeArg::Circular).resolve().is_err());
        assert!(args(None, Some(0), None, ShapeArg::Rectangular).resolve().is_err());
        assert!(args(None, None, None, ShapeArg::Rectangular).resolve().is_err());
        assert!(args(Some("nope"), None, None, ShapeArg::Rectangular).resolve().is_err());
    }
}
