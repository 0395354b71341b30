//! # Mosaic and field-of-view geometry
//!
//! Framing overlays are built from rectangular camera footprints projected onto RA/Dec space.
//! A footprint that is rectangular on the sky is a trapezoid in RA/Dec: every horizontal edge
//! is stretched in right ascension by `1/cos|dec|` at its own declination.
//!
//! | Layout | Cells | Outlined | Extra |
//! |--------|-------|----------|-------|
//! | `fov` | 3×3 reference grid | centre only | |
//! | `mosaic` | `columns × rows` | all | |
//! | `visual` | 3×3 reference grid | none | field circle |
//! | `list` | one box per target | all | |
//! | `offaxis` | main box | yes | guide box |
//!
//! ## See also
//! ------------
//! * [`compute_grid_panel`] – Footprint of one cell of a grid.
//! * [`plan_grid`] – Complete overlay for a target and a [`GridSettings`].
//! * [`OffAxisGuide`] – Placement of the guide field.

pub mod grid;
pub mod offaxis;
pub mod panel;

pub use grid::{plan_grid, plan_targets, FieldCircle, GridCell, GridPlan, GridSettings, GridType};
pub use offaxis::{GuidePosition, OffAxisGuide};
pub use panel::{compute_grid_panel, fov_box, FieldOfView, FovPanel};
