use crate::angles::cosd;
use crate::constants::{Degree, Hour, Percent, ARCMIN_TO_DEG};
use crate::planner_errors::PlannerError;
use crate::ref_system::EquatorialCoordinate;

/// Rectangular field of view of a camera, in degrees on the sky.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldOfView {
    width: Degree,
    height: Degree,
}

impl FieldOfView {
    pub fn new(width: Degree, height: Degree) -> Result<Self, PlannerError> {
        let valid = |v: Degree| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(PlannerError::InvalidFieldOfView { width, height });
        }
        Ok(FieldOfView { width, height })
    }

    /// Build a field of view from sides in arcminutes.
    pub fn from_arcmin(width: f64, height: f64) -> Result<Self, PlannerError> {
        FieldOfView::new(width * ARCMIN_TO_DEG, height * ARCMIN_TO_DEG)
    }

    /// Extent along right ascension, before the `1/cos(dec)` stretch.
    pub fn width(&self) -> Degree {
        self.width
    }

    /// Extent along declination.
    pub fn height(&self) -> Degree {
        self.height
    }
}

/// Footprint of one exposure in RA/Dec space.
///
/// The corners run top-left, top-right, bottom-right, bottom-left, where "top" is the edge at
/// the larger declination and "left" the edge at the smaller right ascension. The two horizontal
/// edges have different RA widths, so the footprint is a trapezoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FovPanel {
    pub center: EquatorialCoordinate,
    pub corners: [EquatorialCoordinate; 4],
    /// Column position in the grid, 0 at the mosaic centre
    pub column_offset: f64,
    /// Row position in the grid, 0 at the mosaic centre
    pub row_offset: f64,
}

impl FovPanel {
    /// Closed outline of the panel: the four corners followed by the first one again.
    pub fn polygon(&self) -> [EquatorialCoordinate; 5] {
        let [a, b, c, d] = self.corners;
        [a, b, c, d, a]
    }

    /// Widest RA extent of the two horizontal edges, in degrees.
    pub fn ra_spread(&self) -> Degree {
        let [a, b, c, d] = self.corners;
        (b.ra - a.ra).abs().max((c.ra - d.ra).abs())
    }

    /// Panel centre as RA hours and Dec degrees, the form mount controllers expect.
    pub fn center_hours(&self) -> (Hour, Degree) {
        (self.center.ra_hours(), self.center.dec)
    }
}

/// Largest |declination| at which the RA stretch is evaluated. Panel edges reaching past a
/// pole take the stretch of this declination.
const STRETCH_DEC_LIMIT: Degree = 89.9;

/// RA stretch at a declination: an arc of `x` degrees on the sky spans `x / cos|dec|` degrees
/// of right ascension.
fn ra_stretch(dec: Degree) -> f64 {
    1.0 / cosd(dec.abs().min(STRETCH_DEC_LIMIT))
}

/// Footprint of the panel at (`column_offset`, `row_offset`) of a grid centred on `center`.
///
/// The row offset moves the panel linearly in declination by `row·pitch·height`, with
/// `pitch = 1 - overlap/100`. The column offset moves it by `col·pitch·width` degrees on the
/// sky, converted to right ascension at the panel centre for the centre itself and at each
/// horizontal edge for the corners:
///
/// ```text
/// dec_e    = row_dec ± height / 2
/// ra_e     = ra + col·pitch·width / cos|dec_e|
/// corner_e = ra_e ∓ (width / 2) / cos|dec_e|
/// ```
///
/// Declinations are not folded back across the poles, and the stretch of an edge past a pole
/// is capped.
///
/// Arguments
/// ---------
/// * `center`: centre of the whole grid.
/// * `column_offset`: column position, positive towards larger RA.
/// * `row_offset`: row position, positive towards larger Dec.
/// * `fov`: field of view of one exposure.
/// * `overlap_percent`: share of the field of view shared by adjacent panels, in `[0, 100)`.
///
/// Return
/// ------
/// * The [`FovPanel`] of that grid cell.
pub fn compute_grid_panel(
    center: &EquatorialCoordinate,
    column_offset: f64,
    row_offset: f64,
    fov: &FieldOfView,
    overlap_percent: Percent,
) -> FovPanel {
    let pitch = 1.0 - overlap_percent / 100.0;
    let column_shift = column_offset * pitch * fov.width;

    let row_dec = center.dec + row_offset * pitch * fov.height;
    let edge = |dec: Degree| {
        let ra = center.ra + column_shift * ra_stretch(dec);
        let half_width = fov.width / 2.0 * ra_stretch(dec);
        (
            EquatorialCoordinate::new(ra - half_width, dec),
            EquatorialCoordinate::new(ra + half_width, dec),
        )
    };
    let (top_left, top_right) = edge(row_dec + fov.height / 2.0);
    let (bottom_left, bottom_right) = edge(row_dec - fov.height / 2.0);

    FovPanel {
        center: EquatorialCoordinate::new(center.ra + column_shift * ra_stretch(row_dec), row_dec),
        corners: [top_left, top_right, bottom_right, bottom_left],
        column_offset,
        row_offset,
    }
}

/// Footprint of a single exposure centred on `center`.
pub fn fov_box(center: &EquatorialCoordinate, fov: &FieldOfView) -> FovPanel {
    compute_grid_panel(center, 0.0, 0.0, fov, 0.0)
}
