use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Percent, DEFAULT_FIELD_RADIUS, MAX_GRID_SIZE};
use crate::planner_errors::PlannerError;
use crate::ref_system::EquatorialCoordinate;

use super::offaxis::OffAxisGuide;
use super::panel::{compute_grid_panel, fov_box, FieldOfView, FovPanel};

const COLUMN_NAMES: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Layout of the framing overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridType {
    /// One field of view on a 3×3 reference grid
    #[default]
    Fov,
    /// `columns × rows` overlapping panels
    Mosaic,
    /// 3×3 reference grid with a circular field for naked-eye or binocular framing
    Visual,
    /// Independent targets, one box each
    List,
    /// Main field plus an off-axis guide field
    OffAxis,
}

/// Validated layout parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSettings {
    grid_type: GridType,
    fov: FieldOfView,
    columns: usize,
    rows: usize,
    overlap_percent: Percent,
    field_radius: Degree,
    offaxis: Option<OffAxisGuide>,
}

impl GridSettings {
    /// Arguments
    /// ---------
    /// * `grid_type`: requested layout.
    /// * `fov`: field of view of one exposure.
    /// * `columns`, `rows`: mosaic size, each in `1..=26`.
    /// * `overlap_percent`: overlap between adjacent panels, in `[0, 100)`.
    ///
    /// Return
    /// ------
    /// * The settings, or the [`PlannerError`] naming the first invalid value.
    pub fn new(
        grid_type: GridType,
        fov: FieldOfView,
        columns: usize,
        rows: usize,
        overlap_percent: Percent,
    ) -> Result<Self, PlannerError> {
        let size_ok = |n: usize| (1..=MAX_GRID_SIZE).contains(&n);
        if !size_ok(columns) || !size_ok(rows) {
            return Err(PlannerError::InvalidGridSize { columns, rows });
        }
        if !overlap_percent.is_finite() || !(0.0..100.0).contains(&overlap_percent) {
            return Err(PlannerError::InvalidOverlap(overlap_percent));
        }
        Ok(GridSettings {
            grid_type,
            fov,
            columns,
            rows,
            overlap_percent,
            field_radius: DEFAULT_FIELD_RADIUS,
            offaxis: None,
        })
    }

    pub fn with_field_radius(mut self, radius: Degree) -> Self {
        self.field_radius = radius;
        self
    }

    pub fn with_offaxis(mut self, guide: Option<OffAxisGuide>) -> Self {
        self.offaxis = guide;
        self
    }

    /// The layout actually drawn: a 1×1 mosaic is a plain field of view.
    pub fn effective_type(&self) -> GridType {
        match self.grid_type {
            GridType::Mosaic if self.columns == 1 && self.rows == 1 => GridType::Fov,
            other => other,
        }
    }

    pub fn fov(&self) -> &FieldOfView {
        &self.fov
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn overlap_percent(&self) -> Percent {
        self.overlap_percent
    }

    pub fn offaxis(&self) -> Option<&OffAxisGuide> {
        self.offaxis.as_ref()
    }
}

/// One labelled cell of a grid plan.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    /// Column letter then row number, `A1` at the top-left
    pub label: String,
    /// Whether the panel border is part of the overlay
    pub outlined: bool,
    pub panel: FovPanel,
}

/// Circle drawn by the visual layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldCircle {
    pub center: EquatorialCoordinate,
    pub radius: Degree,
}

/// Everything needed to draw the framing overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct GridPlan {
    pub grid_type: GridType,
    pub columns: usize,
    pub rows: usize,
    /// Row-major, top row first, larger RA first within a row
    pub cells: Vec<GridCell>,
    pub field_circle: Option<FieldCircle>,
    pub guide: Option<FovPanel>,
}

impl GridPlan {
    /// Cells whose border is drawn.
    pub fn outlined(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter().filter(|c| c.outlined)
    }

    pub fn cell(&self, label: &str) -> Option<&GridCell> {
        self.cells.iter().find(|c| c.label == label)
    }
}

fn cell_label(column: usize, row: usize) -> String {
    format!("{}{}", COLUMN_NAMES[column % COLUMN_NAMES.len()] as char, row + 1)
}

/// Lay out the framing overlay around `center`.
///
/// Mosaics span `columns × rows` panels with offsets from `+(n/2 - 0.5)` down to
/// `-(n/2 - 0.5)`, all outlined. The fov and visual layouts compute the 3×3 reference grid
/// around the target; fov outlines only the centre cell, visual outlines none and adds the field
/// circle. The off-axis layout has a single main box plus the guide box, and the list layout a
/// single box (see [`plan_targets`] for several targets).
///
/// Return
/// ------
/// * The [`GridPlan`], or [`PlannerError::MissingOffAxisGuide`] for an off-axis layout
///   without a guide.
pub fn plan_grid(
    center: &EquatorialCoordinate,
    settings: &GridSettings,
) -> Result<GridPlan, PlannerError> {
    let grid_type = settings.effective_type();
    let plan = match grid_type {
        GridType::Mosaic => reference_grid(center, settings, settings.columns, settings.rows),
        GridType::Fov | GridType::Visual => reference_grid(center, settings, 3, 3),
        GridType::List => plan_targets(std::slice::from_ref(center), &settings.fov),
        GridType::OffAxis => {
            let guide = settings.offaxis.ok_or(PlannerError::MissingOffAxisGuide)?;
            GridPlan {
                grid_type,
                columns: 1,
                rows: 1,
                cells: vec![GridCell {
                    label: cell_label(0, 0),
                    outlined: true,
                    panel: fov_box(center, &settings.fov),
                }],
                field_circle: None,
                guide: Some(guide.panel(center, &settings.fov)),
            }
        }
    };
    debug!(
        "Grid plan {:?}: {} cells, {} outlined",
        plan.grid_type,
        plan.cells.len(),
        plan.outlined().count()
    );
    Ok(plan)
}

fn reference_grid(
    center: &EquatorialCoordinate,
    settings: &GridSettings,
    columns: usize,
    rows: usize,
) -> GridPlan {
    let grid_type = settings.effective_type();
    let half_columns = columns as f64 / 2.0 - 0.5;
    let half_rows = rows as f64 / 2.0 - 0.5;

    let mut cells = Vec::with_capacity(columns * rows);
    for y in 0..rows {
        let row_offset = half_rows - y as f64;
        for x in 0..columns {
            let column_offset = half_columns - x as f64;
            let outlined = match grid_type {
                GridType::Mosaic => true,
                GridType::Visual => false,
                _ => x == 1 && y == 1,
            };
            cells.push(GridCell {
                label: cell_label(x, y),
                outlined,
                panel: compute_grid_panel(
                    center,
                    column_offset,
                    row_offset,
                    &settings.fov,
                    settings.overlap_percent,
                ),
            });
        }
    }

    GridPlan {
        grid_type,
        columns,
        rows,
        cells,
        field_circle: (grid_type == GridType::Visual).then_some(FieldCircle {
            center: *center,
            radius: settings.field_radius,
        }),
        guide: None,
    }
}

/// One outlined box per target, labelled by position in the list starting at 1.
pub fn plan_targets(targets: &[EquatorialCoordinate], fov: &FieldOfView) -> GridPlan {
    let cells = targets
        .iter()
        .enumerate()
        .map(|(i, target)| GridCell {
            label: (i + 1).to_string(),
            outlined: true,
            panel: fov_box(target, fov),
        })
        .collect();
    GridPlan {
        grid_type: GridType::List,
        columns: targets.len(),
        rows: 1,
        cells,
        field_circle: None,
        guide: None,
    }
}
