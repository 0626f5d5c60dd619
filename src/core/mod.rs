//! Core tie-point interpolation modules

pub mod cartesian;
pub mod chunking;
pub mod corners;
pub mod expansion;
pub mod family;
pub mod fine_coords;
pub mod geometry;
pub mod interpolate;
pub mod interpolator;
pub mod scan_geometry;

// Re-export main types
pub use chunking::{for_each_scan_chunk, ChunkLayout, ScanChunked};
pub use corners::QuadCorners;
pub use expansion::TiepointExpansion;
pub use family::{ScanFamily, SwathEdge};
pub use fine_coords::FineCoordinates;
pub use geometry::{compute_expansion_alignment, expansion_alignment, QuadCoefficients};
pub use interpolate::{corner_weighted_blend, interpolate_scans};
pub use interpolator::{
    modis_1km_to_1km, modis_1km_to_250m, modis_1km_to_500m, modis_5km_to_1km, modis_5km_to_250m,
    modis_5km_to_500m, InterpolationParams, ModisInterpolator,
};
pub use scan_geometry::ScanGeometry;
