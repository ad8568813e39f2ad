use crate::{location::distance, ElevationSample, LocationPoint};
use itertools::Itertools;
use serde::Serialize;

/// Severity bands used to color a route by slope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientClass {
    /// Above 10%.
    SteepClimb,
    /// Above 5%, up to 10%.
    Climb,
    /// Above 1%, up to 5%.
    GentleClimb,
    /// Above -1%, up to 1%.
    Flat,
    /// Above -5%, up to -1%.
    GentleDescent,
    /// Above -10%, up to -5%.
    Descent,
    /// -10% and below.
    SteepDescent,
}

impl GradientClass {
    /// Every class, steepest climb first, in legend order.
    pub const ALL: [Self; 7] = [
        Self::SteepClimb,
        Self::Climb,
        Self::GentleClimb,
        Self::Flat,
        Self::GentleDescent,
        Self::Descent,
        Self::SteepDescent,
    ];

    /// Classifies a gradient given in percent.
    ///
    /// Each boundary belongs to the band below it, so exactly 10% is
    /// a `Climb` and exactly -10% is a `SteepDescent`.
    pub fn classify(gradient_percent: f64) -> Self {
        if gradient_percent > 10.0 {
            Self::SteepClimb
        } else if gradient_percent > 5.0 {
            Self::Climb
        } else if gradient_percent > 1.0 {
            Self::GentleClimb
        } else if gradient_percent > -1.0 {
            Self::Flat
        } else if gradient_percent > -5.0 {
            Self::GentleDescent
        } else if gradient_percent > -10.0 {
            Self::Descent
        } else {
            Self::SteepDescent
        }
    }

    /// Hex RGB color for rendering.
    pub fn color(self) -> &'static str {
        match self {
            Self::SteepClimb => "#d73027",
            Self::Climb => "#fc8d59",
            Self::GentleClimb => "#fee08b",
            Self::Flat => "#91cf60",
            Self::GentleDescent => "#91bfdb",
            Self::Descent => "#4575b4",
            Self::SteepDescent => "#313695",
        }
    }

    /// Legend text.
    pub fn label(self) -> &'static str {
        match self {
            Self::SteepClimb => "> 10% steep climb",
            Self::Climb => "5-10% climb",
            Self::GentleClimb => "1-5% gentle climb",
            Self::Flat => "-1-1% flat",
            Self::GentleDescent => "-5--1% gentle descent",
            Self::Descent => "-10--5% descent",
            Self::SteepDescent => "< -10% steep descent",
        }
    }
}

/// Slope from `from` to `to` in percent; zero when they share a
/// location.
pub fn gradient_percent(from: &ElevationSample, to: &ElevationSample) -> f64 {
    let distance_km = distance(from.location, to.location);
    if distance_km > 0.0 {
        (to.elevation - from.elevation) / (distance_km * 1000.0) * 100.0
    } else {
        0.0
    }
}

/// The slope between two consecutive profile samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientSegment {
    pub start: LocationPoint,
    pub end: LocationPoint,
    pub gradient_percent: f64,
    pub class: GradientClass,
}

/// Returns one segment per consecutive pair of samples.
pub fn gradient_segments(profile: &[ElevationSample]) -> Vec<GradientSegment> {
    profile
        .iter()
        .tuple_windows()
        .map(|(from, to)| {
            let gradient_percent = gradient_percent(from, to);
            GradientSegment {
                start: from.location,
                end: to.location,
                gradient_percent,
                class: GradientClass::classify(gradient_percent),
            }
        })
        .collect()
}
