use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Height class of a lattice point.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Deep,
    Shallow,
    Shore,
    Land,
    Peak,
}

impl Band {
    pub const ALL: [Band; 5] = [
        Band::Deep,
        Band::Shallow,
        Band::Shore,
        Band::Land,
        Band::Peak,
    ];

    pub const fn default_color(self) -> [f32; 3] {
        match self {
            Band::Deep => [0.0, 0.0, 0.85],
            Band::Shallow => [0.8, 0.8, 0.1],
            Band::Shore => [0.1, 0.8, 0.3],
            Band::Land => [0.1, 0.1, 0.1],
            Band::Peak => [0.95, 0.95, 0.98],
        }
    }

    const fn index(self) -> usize {
        match self {
            Band::Deep => 0,
            Band::Shallow => 1,
            Band::Shore => 2,
            Band::Land => 3,
            Band::Peak => 4,
        }
    }
}

pub const DEFAULT_THRESHOLDS: [f32; 4] = [-0.30, -0.05, 0.05, 0.55];

///
/// Step function from raw height to color.
///
/// Each threshold is the inclusive upper bound of its band, the last band
/// takes everything above. NaN compares false everywhere and lands in
/// [`Band::Peak`].
///
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorBands {
    thresholds: [f32; 4],
    colors: [[f32; 3]; 5],
}

impl ColorBands {
    pub fn new(thresholds: [f32; 4], colors: [[f32; 3]; 5]) -> Result<Self, BandsError> {
        if thresholds.iter().any(|t| !t.is_finite()) {
            return Err(BandsError::NonFinite);
        }

        if thresholds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(BandsError::Unordered(thresholds));
        }

        Ok(Self { thresholds, colors })
    }

    pub fn thresholds(&self) -> &[f32; 4] {
        &self.thresholds
    }

    pub fn classify(&self, height: f32) -> Band {
        self.thresholds
            .iter()
            .position(|t| height <= *t)
            .map_or(Band::Peak, |i| Band::ALL[i])
    }

    pub fn color(&self, band: Band) -> [f32; 3] {
        self.colors[band.index()]
    }

    pub fn color_for(&self, height: f32) -> [f32; 3] {
        self.color(self.classify(height))
    }
}

impl Default for ColorBands {
    fn default() -> Self {
        Self {
            thresholds: DEFAULT_THRESHOLDS,
            colors: Band::ALL.map(Band::default_color),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum BandsError {
    #[error("band thresholds must be finite")]
    NonFinite,
    #[error("band thresholds must be strictly ascending, got {0:?}")]
    Unordered([f32; 4]),
}
