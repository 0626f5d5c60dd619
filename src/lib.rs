//! modis-tiepoints: second-order interpolation of MODIS geolocation tie points
//!
//! MODIS products often carry longitude/latitude only on a coarse tie-point grid (1km or 5km).
//! This library upsamples them to 1km, 500m or 250m pixels with the curvature-corrected
//! bilinear scheme of the Compact VIIRS SDR format, which accounts for the bow-tie shaped
//! scans of a whisk-broom sensor over a spherical Earth.
//!
//! ```no_run
//! use ndarray::Array2;
//! use modis_tiepoints::modis_1km_to_250m;
//!
//! let lon = Array2::<f32>::zeros((20, 1354));
//! let lat = Array2::<f32>::zeros((20, 1354));
//! let satz = Array2::<f32>::zeros((20, 1354));
//! let (lon_250, lat_250) = modis_1km_to_250m(&lon, &lat, &satz)?;
//! assert_eq!(lon_250.dim(), (80, 5416));
//! # Ok::<(), modis_tiepoints::TiepointError>(())
//! ```

pub mod types;
pub mod core;

// Re-export main types and functions for easier access
pub use types::{
    CoarseResolution, FineResolution, LonLatGrids, TiepointError, TiepointResult,
};

pub use crate::core::{
    modis_1km_to_1km, modis_1km_to_250m, modis_1km_to_500m, modis_5km_to_1km, modis_5km_to_250m,
    modis_5km_to_500m, InterpolationParams, ModisInterpolator, ScanFamily, ScanGeometry, SwathEdge,
};
