//! Drawable Surface Geometry
//!
//! Describes the physical drawable region of a display: its extent and shape,
//! and the total pixel area that draw-call coverage is measured against.
//!
//! # Features
//!
//! - **no_std compatible** - Works on embedded systems
//! - **Display templates** - Pre-configured geometries for round smartwatch panels
//!   and common e-ink panels
//! - **Serde support** - Optional serialization/deserialization for TOML/JSON configs
//!
//! # Example
//!
//! ```
//! use coverage_specs::displays::MIMXRT595_ROUND;
//!
//! let geometry = MIMXRT595_ROUND.geometry;
//! println!("Display: {}", MIMXRT595_ROUND.name);
//! println!("Resolution: {}×{}", geometry.width, geometry.height);
//! println!("Drawable area: {} px", geometry.total_area());
//! ```
//!
//! # Custom Geometry
//!
//! ```
//! use coverage_specs::{DisplayGeometry, DisplayShape};
//!
//! const WATCH_FACE: DisplayGeometry = DisplayGeometry::new(240, 240, DisplayShape::Circular);
//! assert_eq!(WATCH_FACE.total_area(), 45_238);
//!
//! // Callers validate at construction time; the accounting core never re-checks.
//! assert!(DisplayGeometry::checked(240, 200, DisplayShape::Circular).is_err());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

mod display_geometry;
pub mod displays;

pub use display_geometry::{DisplayGeometry, DisplayShape, GeometryError};
pub use displays::{preset_by_name, DisplayPreset, PRESETS};
