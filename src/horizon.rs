//! # Horizon profiles and visibility classification
//!
//! A [`HorizonProfile`] is a circular table of minimum altitudes, one sample per 5° of azimuth
//! starting at North. Short inputs are padded to 71 samples by repeating their **last** value
//! (no interpolation). Lookups round the azimuth to the nearest sample and wrap around the
//! circle, so an azimuth of 360° reads the 0° sample.
//!
//! A [`HorizonMask`] combines a mandatory *hard* profile (physical obstruction) with an
//! optional *soft* profile (preferred limit, e.g. trees or light domes). Classification of an
//! altitude proceeds in this order:
//!
//! 1. altitude ≤ 0° → no classification at all;
//! 2. soft profile configured and altitude above it → [`Visibility::Visible`];
//! 3. altitude above the hard profile → [`Visibility::BelowSoft`] when a soft profile exists,
//!    [`Visibility::Visible`] otherwise;
//! 4. otherwise → [`Visibility::BelowHard`].
//!
//! [`Visibility::MeridianCrossing`] is never produced here: the day series assigns it around
//! the meridian transit.

use crate::angles::scale_to_360;
use crate::constants::{Degree, HORIZON_SAMPLES, HORIZON_STEP};
use crate::planner_errors::PlannerError;

/// Number of 5° slots in a full turn of azimuth.
const SLOTS_PER_TURN: usize = 72;

/// Circular table of altitude limits, one per 5° of azimuth.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizonProfile {
    limits: Vec<Degree>,
}

impl HorizonProfile {
    /// A constant horizon at `altitude` degrees.
    pub fn flat(altitude: Degree) -> Self {
        HorizonProfile {
            limits: vec![altitude; HORIZON_SAMPLES],
        }
    }

    /// Build a profile from caller samples, padding to 71 entries with the last value.
    ///
    /// An empty input yields the flat 0° horizon. Inputs longer than 71 samples are kept whole.
    ///
    /// Arguments
    /// ---------
    /// * `samples`: altitude limits in degrees for azimuths 0°, 5°, 10°, …
    ///
    /// Return
    /// ------
    /// * The filled profile, or [`PlannerError::InvalidHorizonProfile`] naming the first
    ///   non-finite sample.
    pub fn fill(samples: &[Degree]) -> Result<Self, PlannerError> {
        if let Some(index) = samples.iter().position(|v| !v.is_finite()) {
            return Err(PlannerError::InvalidHorizonProfile { index });
        }
        let Some(&last) = samples.last() else {
            return Ok(HorizonProfile::flat(0.0));
        };

        let mut limits = samples.to_vec();
        if limits.len() < HORIZON_SAMPLES {
            limits.resize(HORIZON_SAMPLES, last);
        }
        Ok(HorizonProfile { limits })
    }

    pub fn limits(&self) -> &[Degree] {
        &self.limits
    }

    /// Altitude limit at an azimuth in degrees.
    ///
    /// The sample index is `round(az / 5)`, taken modulo the 72 slots of a full turn and then
    /// modulo the profile length, so the lookup never leaves the table.
    pub fn limit_at(&self, azimuth: Degree) -> Degree {
        let slot = (scale_to_360(azimuth) / HORIZON_STEP).round() as usize % SLOTS_PER_TURN;
        self.limits[slot % self.limits.len()]
    }
}

impl Default for HorizonProfile {
    fn default() -> Self {
        HorizonProfile::flat(0.0)
    }
}

/// Visibility category of one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Visible,
    BelowSoft,
    BelowHard,
    /// Inside the meridian-flip exclusion window
    MeridianCrossing,
}

/// Hard horizon plus optional soft horizon.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HorizonMask {
    soft: Option<HorizonProfile>,
    hard: HorizonProfile,
}

impl HorizonMask {
    /// Build a mask from optional raw profiles.
    ///
    /// When only a soft profile is given it becomes the hard profile and the mask has no soft
    /// limit. A missing hard profile is the flat 0° horizon.
    pub fn new(soft: Option<&[Degree]>, hard: Option<&[Degree]>) -> Result<Self, PlannerError> {
        let (soft, hard) = match (soft, hard) {
            (Some(soft), None) => (None, Some(soft)),
            other => other,
        };
        Ok(HorizonMask {
            soft: soft.map(HorizonProfile::fill).transpose()?,
            hard: HorizonProfile::fill(hard.unwrap_or(&[]))?,
        })
    }

    pub fn from_profiles(soft: Option<HorizonProfile>, hard: HorizonProfile) -> Self {
        HorizonMask { soft, hard }
    }

    pub fn soft(&self) -> Option<&HorizonProfile> {
        self.soft.as_ref()
    }

    pub fn hard(&self) -> &HorizonProfile {
        &self.hard
    }

    pub fn has_soft(&self) -> bool {
        self.soft.is_some()
    }

    /// Classify an altitude seen at a given azimuth.
    ///
    /// Return
    /// ------
    /// * `None` when `altitude <= 0`, otherwise the [`Visibility`] category.
    pub fn classify(&self, altitude: Degree, azimuth: Degree) -> Option<Visibility> {
        if altitude <= 0.0 {
            return None;
        }
        let above_hard = altitude > self.hard.limit_at(azimuth);
        let category = match &self.soft {
            Some(soft) if altitude > soft.limit_at(azimuth) => Visibility::Visible,
            Some(_) if above_hard => Visibility::BelowSoft,
            None if above_hard => Visibility::Visible,
            _ => Visibility::BelowHard,
        };
        Some(category)
    }
}

#[cfg(test)]
mod horizon_test {
    use super::*;

    #[test]
    fn test_fill_pads_with_last_value() {
        let profile = HorizonProfile::fill(&[10.0]).unwrap();
        assert_eq!(profile.limits().len(), 71);
        assert!(profile.limits().iter().all(|&v| v == 10.0));

        let profile = HorizonProfile::fill(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(&profile.limits()[..4], &[1.0, 2.0, 3.0, 3.0]);
        assert_eq!(profile.limits()[70], 3.0);

        let empty = HorizonProfile::fill(&[]).unwrap();
        assert_eq!(empty, HorizonProfile::flat(0.0));

        let long = HorizonProfile::fill(&[5.0; 80]).unwrap();
        assert_eq!(long.limits().len(), 80);
    }

    #[test]
    fn test_fill_rejects_non_finite() {
        assert_eq!(
            HorizonProfile::fill(&[1.0, f64::NAN]),
            Err(PlannerError::InvalidHorizonProfile { index: 1 })
        );
    }

    #[test]
    fn test_limit_lookup_wraps() {
        let mut samples: Vec<f64> = (0..71).map(|i| i as f64).collect();
        samples[0] = 42.0;
        let profile = HorizonProfile::fill(&samples).unwrap();

        assert_eq!(profile.limit_at(0.0), 42.0);
        assert_eq!(profile.limit_at(360.0), 42.0);
        assert_eq!(profile.limit_at(359.0), 42.0);
        assert_eq!(profile.limit_at(12.4), 2.0);
        assert_eq!(profile.limit_at(12.6), 3.0);
        assert_eq!(profile.limit_at(350.0), 70.0);
        // Slot 71 (355°) has no sample in a 71-entry profile and wraps to the first one
        assert_eq!(profile.limit_at(355.0), 42.0);
        assert_eq!(profile.limit_at(-5.0), 42.0);
    }

    #[test]
    fn test_soft_only_becomes_hard() {
        let mask = HorizonMask::new(Some(&[20.0]), None).unwrap();
        assert!(!mask.has_soft());
        assert_eq!(mask.hard().limit_at(100.0), 20.0);
        assert_eq!(mask.classify(25.0, 100.0), Some(Visibility::Visible));
        assert_eq!(mask.classify(15.0, 100.0), Some(Visibility::BelowHard));
    }

    #[test]
    fn test_classification_order() {
        let mask = HorizonMask::new(Some(&[30.0]), Some(&[10.0])).unwrap();
        assert_eq!(mask.classify(-1.0, 0.0), None);
        assert_eq!(mask.classify(0.0, 0.0), None);
        assert_eq!(mask.classify(5.0, 0.0), Some(Visibility::BelowHard));
        assert_eq!(mask.classify(10.0, 0.0), Some(Visibility::BelowHard));
        assert_eq!(mask.classify(20.0, 0.0), Some(Visibility::BelowSoft));
        assert_eq!(mask.classify(31.0, 0.0), Some(Visibility::Visible));

        let flat = HorizonMask::default();
        assert_eq!(flat.classify(0.5, 200.0), Some(Visibility::Visible));
    }
}
