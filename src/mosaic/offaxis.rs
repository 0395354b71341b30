use serde::{Deserialize, Serialize};

use crate::angles::cosd;
use crate::constants::Degree;
use crate::planner_errors::PlannerError;
use crate::ref_system::EquatorialCoordinate;

use super::panel::{fov_box, FieldOfView, FovPanel};

/// Side of the main field on which the guide field sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuidePosition {
    #[serde(rename = "T")]
    Top,
    #[serde(rename = "B")]
    Bottom,
    /// Towards larger right ascension
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
}

/// Off-axis guide camera: its own field of view, separated from the main field by a gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffAxisGuide {
    fov: FieldOfView,
    gap: Degree,
    position: GuidePosition,
}

impl OffAxisGuide {
    pub fn new(
        fov: FieldOfView,
        gap: Degree,
        position: GuidePosition,
    ) -> Result<Self, PlannerError> {
        if !gap.is_finite() || gap < 0.0 {
            return Err(PlannerError::InvalidOffAxisGap(gap));
        }
        Ok(OffAxisGuide { fov, gap, position })
    }

    pub fn fov(&self) -> &FieldOfView {
        &self.fov
    }

    pub fn gap(&self) -> Degree {
        self.gap
    }

    pub fn position(&self) -> GuidePosition {
        self.position
    }

    /// Centre of the guide field next to a main field.
    ///
    /// Vertical placements move by `main/2 + gap + guide/2` in declination. Horizontal ones move
    /// by the same sum of widths, stretched by `1/cos|dec|` at the main field's declination.
    pub fn center(
        &self,
        main_center: &EquatorialCoordinate,
        main_fov: &FieldOfView,
    ) -> EquatorialCoordinate {
        let vertical = main_fov.height() / 2.0 + self.gap + self.fov.height() / 2.0;
        let horizontal = (main_fov.width() / 2.0 + self.gap + self.fov.width() / 2.0)
            / cosd(main_center.dec.abs());

        let EquatorialCoordinate { ra, dec } = *main_center;
        match self.position {
            GuidePosition::Top => EquatorialCoordinate::new(ra, dec + vertical),
            GuidePosition::Bottom => EquatorialCoordinate::new(ra, dec - vertical),
            GuidePosition::Left => EquatorialCoordinate::new(ra + horizontal, dec),
            GuidePosition::Right => EquatorialCoordinate::new(ra - horizontal, dec),
        }
    }

    /// Footprint of the guide field next to a main field.
    pub fn panel(&self, main_center: &EquatorialCoordinate, main_fov: &FieldOfView) -> FovPanel {
        fov_box(&self.center(main_center, main_fov), &self.fov)
    }
}
