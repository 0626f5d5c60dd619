use crate::core::family::{ScanFamily, SwathEdge};
use crate::types::{CoarseResolution, FineResolution, TiepointError, TiepointResult};
use serde::{Deserialize, Serialize};

/// Instrument elements across a full MODIS 1km scan line
pub const MODIS_1KM_FULL_WIDTH: usize = 1354;

/// 1km detector rows swept by one MODIS scan
pub const DETECTORS_PER_SCAN_1KM: usize = 10;

/// Scan geometry constants for one (coarse, fine) resolution pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanGeometry {
    pub coarse: CoarseResolution,
    pub fine: FineResolution,
    pub family: ScanFamily,
    /// Tie-point rows per scan
    pub coarse_rows_per_scan: usize,
    /// Instrument elements between neighbouring tie-point columns
    pub coarse_cols_per_tie_point: usize,
    pub coarse_full_width: usize,
    /// Fine rows between two consecutive tie-point rows
    pub fine_rows_per_interval: usize,
    pub fine_rows_per_scan: usize,
    /// Fine columns between two consecutive tie-point columns
    pub fine_cols_per_tie_point: usize,
    pub fine_full_width: usize,
    /// Fine pixels per 1km element along each axis (4, 2 or 1)
    pub fine_factor: usize,
    /// Fine rows produced per coarse row
    pub resolution_factor: usize,
}

impl ScanGeometry {
    /// Derive the geometry for a resolution pair given in meters.
    ///
    /// `coarse_full_width` defaults to 1354 for 1km tie points and 271 for 5km tie points.
    /// Truncated 5km granules carry 270 columns and must say so explicitly.
    pub fn new(
        coarse_m: u32,
        fine_m: u32,
        coarse_full_width: Option<usize>,
    ) -> TiepointResult<Self> {
        let coarse = CoarseResolution::try_from(coarse_m)?;
        let fine = FineResolution::try_from(fine_m)?;
        Self::from_resolutions(coarse, fine, coarse_full_width)
    }

    pub fn from_resolutions(
        coarse: CoarseResolution,
        fine: FineResolution,
        coarse_full_width: Option<usize>,
    ) -> TiepointResult<Self> {
        let fine_factor = fine.factor();

        let (family, coarse_rows_per_scan, coarse_cols_per_tie_point, coarse_full_width) =
            match coarse {
                CoarseResolution::OneKm => {
                    let width = coarse_full_width.unwrap_or(MODIS_1KM_FULL_WIDTH);
                    if width < 2 {
                        return Err(TiepointError::Configuration(format!(
                            "1km tie-point grid needs at least 2 columns, got {}",
                            width
                        )));
                    }
                    (ScanFamily::OneKm, 10, 1, width)
                }
                CoarseResolution::FiveKm => {
                    let width = coarse_full_width.unwrap_or(271);
                    let edge = SwathEdge::from_coarse_width(width)?;
                    (ScanFamily::FiveKm(edge), 2, 5, width)
                }
            };

        let fine_rows_per_interval = fine_factor * DETECTORS_PER_SCAN_1KM / coarse_rows_per_scan;
        let fine_rows_per_scan = fine_rows_per_interval * coarse_rows_per_scan;
        let fine_cols_per_tie_point = fine_factor * coarse_cols_per_tie_point;
        let fine_full_width = match family {
            ScanFamily::OneKm => fine_factor * coarse_full_width,
            ScanFamily::FiveKm(_) => fine_factor * MODIS_1KM_FULL_WIDTH,
        };

        Ok(Self {
            coarse,
            fine,
            family,
            coarse_rows_per_scan,
            coarse_cols_per_tie_point,
            coarse_full_width,
            fine_rows_per_interval,
            fine_rows_per_scan,
            fine_cols_per_tie_point,
            fine_full_width,
            fine_factor,
            resolution_factor: (coarse.meters() / fine.meters()) as usize,
        })
    }

    /// True when the pair skips a resolution tier (5km to 500m or 250m).
    ///
    /// The curvature model was validated for single-tier steps only; output is still
    /// produced but with reduced accuracy.
    pub fn is_degraded(&self) -> bool {
        self.coarse == CoarseResolution::FiveKm && self.fine != FineResolution::Km1
    }

    /// Quads per scan along track
    pub fn quad_rows_per_scan(&self) -> usize {
        self.coarse_rows_per_scan - 1
    }

    /// Quads per scan across track
    pub fn quad_cols(&self) -> usize {
        self.coarse_full_width - 1
    }

    /// Fine output shape for a given number of scans
    pub fn fine_shape(&self, scans: usize) -> (usize, usize) {
        (scans * self.fine_rows_per_scan, self.fine_full_width)
    }
}

impl std::fmt::Display for ScanGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} ({} tie-point rows/scan, {} columns, fine {}x{} per scan)",
            self.coarse,
            self.fine,
            self.coarse_rows_per_scan,
            self.coarse_full_width,
            self.fine_rows_per_scan,
            self.fine_full_width
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_1km_to_250m_geometry() {
        let geometry = ScanGeometry::new(1000, 250, None).unwrap();

        assert_eq!(geometry.coarse_rows_per_scan, 10);
        assert_eq!(geometry.coarse_cols_per_tie_point, 1);
        assert_eq!(geometry.coarse_full_width, 1354);
        assert_eq!(geometry.fine_rows_per_interval, 4);
        assert_eq!(geometry.fine_rows_per_scan, 40);
        assert_eq!(geometry.fine_cols_per_tie_point, 4);
        assert_eq!(geometry.fine_full_width, 4 * 1354);
        assert_eq!(geometry.resolution_factor, 4);
        assert!(!geometry.is_degraded());
    }

    #[test]
    fn test_5km_geometry() {
        let geometry = ScanGeometry::new(5000, 1000, None).unwrap();
        assert_eq!(geometry.coarse_rows_per_scan, 2);
        assert_eq!(geometry.coarse_full_width, 271);
        assert_eq!(geometry.fine_rows_per_interval, 5);
        assert_eq!(geometry.fine_rows_per_scan, 10);
        assert_eq!(geometry.fine_cols_per_tie_point, 5);
        assert_eq!(geometry.fine_full_width, 1354);
        assert_eq!(geometry.resolution_factor, 5);
        assert_eq!(geometry.family, ScanFamily::FiveKm(SwathEdge::Standard));

        let truncated = ScanGeometry::new(5000, 250, Some(270)).unwrap();
        assert_eq!(truncated.family, ScanFamily::FiveKm(SwathEdge::Truncated));
        assert_eq!(truncated.fine_rows_per_interval, 20);
        assert_eq!(truncated.fine_rows_per_scan, 40);
        assert_eq!(truncated.fine_full_width, 4 * 1354);
        assert_eq!(truncated.resolution_factor, 20);
        assert!(truncated.is_degraded());
    }

    #[test]
    fn test_configuration_rejection() {
        assert!(matches!(
            ScanGeometry::new(2000, 250, None),
            Err(TiepointError::Configuration(_))
        ));
        assert!(matches!(
            ScanGeometry::new(1000, 100, None),
            Err(TiepointError::Configuration(_))
        ));
        assert!(matches!(
            ScanGeometry::new(5000, 1000, Some(269)),
            Err(TiepointError::Configuration(_))
        ));
        assert!(matches!(
            ScanGeometry::new(1000, 250, Some(1)),
            Err(TiepointError::Configuration(_))
        ));
    }
}
