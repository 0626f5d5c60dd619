use crate::core::expansion::{expansion_1km, expansion_5km, TiepointExpansion};
use crate::core::fine_coords::{
    scan_offsets_1km, scan_offsets_5km, track_offsets_1km, track_offsets_5km, FineCoordinates,
};
use crate::core::scan_geometry::ScanGeometry;
use crate::types::{TiepointError, TiepointResult};
use serde::{Deserialize, Serialize};

/// Tie-point spacing at the right swath edge of a 5km grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwathEdge {
    /// 271 tie-point columns
    Standard,
    /// 270 tie-point columns; the last tie point sits further from the swath edge
    Truncated,
}

impl SwathEdge {
    pub fn from_coarse_width(width: usize) -> TiepointResult<Self> {
        match width {
            271 => Ok(SwathEdge::Standard),
            270 => Ok(SwathEdge::Truncated),
            other => Err(TiepointError::Configuration(format!(
                "Can't interpolate 5km tie points with {} columns (expected 270 or 271)",
                other
            ))),
        }
    }
}

/// Tie-point layout family, selected by the coarse resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanFamily {
    /// 10 tie-point rows per scan, one tie point per 1km element
    OneKm,
    /// 2 tie-point rows per scan, one tie point every 5 elements
    FiveKm(SwathEdge),
}

impl ScanFamily {
    /// Normalized in-quad coordinates of every fine pixel for `scans` scans
    pub fn fine_coordinates(&self, geometry: &ScanGeometry, scans: usize) -> FineCoordinates {
        let (track, scan) = match *self {
            ScanFamily::OneKm => (track_offsets_1km(geometry), scan_offsets_1km(geometry)),
            ScanFamily::FiveKm(edge) => (
                track_offsets_5km(geometry),
                scan_offsets_5km(geometry, edge),
            ),
        };
        FineCoordinates::from_offsets(&track, &scan, geometry, scans)
    }

    /// Replication plan broadcasting per-quad values to fine pixels
    pub fn expansion(&self, geometry: &ScanGeometry) -> TiepointExpansion {
        match *self {
            ScanFamily::OneKm => expansion_1km(geometry),
            ScanFamily::FiveKm(edge) => expansion_5km(geometry, edge),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swath_edge_from_width() {
        assert_eq!(SwathEdge::from_coarse_width(271).unwrap(), SwathEdge::Standard);
        assert_eq!(SwathEdge::from_coarse_width(270).unwrap(), SwathEdge::Truncated);
        assert!(SwathEdge::from_coarse_width(269).is_err());
        assert!(SwathEdge::from_coarse_width(272).is_err());
    }

    #[test]
    fn test_coordinates_and_expansion_share_fine_shape() {
        for (coarse, fine, width) in [
            (1000, 250, None),
            (1000, 500, None),
            (1000, 1000, None),
            (5000, 1000, Some(271)),
            (5000, 500, Some(270)),
            (5000, 250, Some(271)),
        ] {
            let geometry = ScanGeometry::new(coarse, fine, width).unwrap();
            let coords = geometry.family.fine_coordinates(&geometry, 3);
            let expansion = geometry.family.expansion(&geometry);

            assert_eq!(coords.dim(), geometry.fine_shape(3));
            assert_eq!(expansion.rows.len(), geometry.fine_rows_per_scan);
            assert_eq!(expansion.cols.len(), geometry.fine_full_width);
        }
    }
}
