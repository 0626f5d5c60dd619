use ndarray::{Array2, Array3};
use serde::{Deserialize, Serialize};

/// Real-valued working precision for all geometric computation
pub type GeoReal = f64;

/// 2D fine-resolution field (track x scan)
pub type FineField = Array2<GeoReal>;

/// 3D coarse per-scan stack (scan x tie-point row x tie-point column)
pub type ScanStack = Array3<GeoReal>;

/// Longitude/latitude pair of grids
pub type LonLatGrids<T> = (Array2<T>, Array2<T>);

/// Coarse tie-point resolutions produced by the MODIS geolocation chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoarseResolution {
    /// 1km tie points (MOD03 style geolocation)
    OneKm,
    /// 5km tie points (geolocation embedded in L1B/L2 products)
    FiveKm,
}

impl CoarseResolution {
    pub fn meters(self) -> u32 {
        match self {
            CoarseResolution::OneKm => 1000,
            CoarseResolution::FiveKm => 5000,
        }
    }
}

impl TryFrom<u32> for CoarseResolution {
    type Error = TiepointError;

    fn try_from(meters: u32) -> Result<Self, Self::Error> {
        match meters {
            1000 => Ok(CoarseResolution::OneKm),
            5000 => Ok(CoarseResolution::FiveKm),
            other => Err(TiepointError::Configuration(format!(
                "Unsupported coarse resolution: {}m (expected 1000 or 5000)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for CoarseResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoarseResolution::OneKm => write!(f, "1km"),
            CoarseResolution::FiveKm => write!(f, "5km"),
        }
    }
}

/// Target pixel resolutions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FineResolution {
    M250,
    M500,
    Km1,
}

impl FineResolution {
    pub fn meters(self) -> u32 {
        match self {
            FineResolution::M250 => 250,
            FineResolution::M500 => 500,
            FineResolution::Km1 => 1000,
        }
    }

    /// Number of fine pixels per 1km instrument element, in each direction
    pub fn factor(self) -> usize {
        match self {
            FineResolution::M250 => 4,
            FineResolution::M500 => 2,
            FineResolution::Km1 => 1,
        }
    }
}

impl TryFrom<u32> for FineResolution {
    type Error = TiepointError;

    fn try_from(meters: u32) -> Result<Self, Self::Error> {
        match meters {
            250 => Ok(FineResolution::M250),
            500 => Ok(FineResolution::M500),
            1000 => Ok(FineResolution::Km1),
            other => Err(TiepointError::Configuration(format!(
                "Unsupported fine resolution: {}m (expected 250, 500 or 1000)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for FineResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FineResolution::M250 => write!(f, "250m"),
            FineResolution::M500 => write!(f, "500m"),
            FineResolution::Km1 => write!(f, "1km"),
        }
    }
}

/// Error types for tie-point interpolation
#[derive(Debug, thiserror::Error)]
pub enum TiepointError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

/// Result type for tie-point operations
pub type TiepointResult<T> = Result<T, TiepointError>;
