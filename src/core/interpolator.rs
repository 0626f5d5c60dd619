use crate::core::chunking::{for_each_scan_chunk, ChunkLayout};
use crate::core::interpolate::interpolate_scans;
use crate::core::scan_geometry::ScanGeometry;
use crate::types::{LonLatGrids, TiepointError, TiepointResult};
use ndarray::Array2;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Execution parameters for tie-point interpolation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpolationParams {
    /// Scans handed to one worker at a time
    pub scans_per_chunk: usize,
    /// Spread chunks over the rayon thread pool (needs the `parallel` feature)
    pub parallel: bool,
}

impl Default for InterpolationParams {
    fn default() -> Self {
        Self {
            scans_per_chunk: 16,
            parallel: true,
        }
    }
}

/// Interpolator for MODIS geolocation tie points
#[derive(Debug, Clone)]
pub struct ModisInterpolator {
    geometry: ScanGeometry,
    params: InterpolationParams,
}

impl ModisInterpolator {
    /// Create an interpolator for a resolution pair in meters
    pub fn new(coarse_m: u32, fine_m: u32, coarse_full_width: Option<usize>) -> TiepointResult<Self> {
        Self::with_params(coarse_m, fine_m, coarse_full_width, InterpolationParams::default())
    }

    pub fn with_params(
        coarse_m: u32,
        fine_m: u32,
        coarse_full_width: Option<usize>,
        params: InterpolationParams,
    ) -> TiepointResult<Self> {
        let geometry = ScanGeometry::new(coarse_m, fine_m, coarse_full_width)?;
        if geometry.is_degraded() {
            log::warn!(
                "Interpolating {} geolocation to {} resolution may result in poor quality",
                geometry.coarse,
                geometry.fine
            );
        }
        Ok(Self { geometry, params })
    }

    pub fn geometry(&self) -> &ScanGeometry {
        &self.geometry
    }

    pub fn params(&self) -> &InterpolationParams {
        &self.params
    }

    /// Interpolate tie-point longitude/latitude (degrees) to the fine grid.
    ///
    /// `satz` is the satellite zenith angle in degrees on the same grid. The output has
    /// `resolution_factor` times as many rows and `fine_full_width` columns, in the element
    /// type of `lon`/`lat`.
    pub fn interpolate<T, Z>(
        &self,
        lon: &Array2<T>,
        lat: &Array2<T>,
        satz: &Array2<Z>,
    ) -> TiepointResult<LonLatGrids<T>>
    where
        T: Float + Send + Sync,
        Z: Float + Send + Sync,
    {
        let geometry = self.geometry;
        log::info!("Starting tie-point interpolation: {}", geometry);
        log::debug!("Input tie-point grid: {} x {}", lon.nrows(), lon.ncols());

        if lon.ncols() != geometry.coarse_full_width {
            return Err(TiepointError::ShapeMismatch(format!(
                "tie-point grid has {} columns, expected {} for {} tie points",
                lon.ncols(),
                geometry.coarse_full_width,
                geometry.coarse
            )));
        }

        let layout = ChunkLayout {
            rows_per_scan: geometry.coarse_rows_per_scan,
            scans_per_chunk: self.params.scans_per_chunk,
            parallel: self.params.parallel,
        };
        let chunked = for_each_scan_chunk::<T, Z, _>(
            |lon, lat, satz| interpolate_scans(&geometry, lon, lat, satz),
            layout,
        );
        let (fine_lon, fine_lat) = chunked.apply(lon.view(), lat.view(), satz.view())?;

        log::info!(
            "Interpolation completed. Output size: {} x {}",
            fine_lon.nrows(),
            fine_lon.ncols()
        );
        Ok((fine_lon, fine_lat))
    }
}

fn interpolate_with<T, Z>(
    coarse_m: u32,
    fine_m: u32,
    lon: &Array2<T>,
    lat: &Array2<T>,
    satz: &Array2<Z>,
) -> TiepointResult<LonLatGrids<T>>
where
    T: Float + Send + Sync,
    Z: Float + Send + Sync,
{
    ModisInterpolator::new(coarse_m, fine_m, Some(lon.ncols()))?.interpolate(lon, lat, satz)
}

/// Interpolate MODIS geolocation from 1km to 250m resolution
pub fn modis_1km_to_250m<T, Z>(
    lon: &Array2<T>,
    lat: &Array2<T>,
    satz: &Array2<Z>,
) -> TiepointResult<LonLatGrids<T>>
where
    T: Float + Send + Sync,
    Z: Float + Send + Sync,
{
    interpolate_with(1000, 250, lon, lat, satz)
}

/// Interpolate MODIS geolocation from 1km to 500m resolution
pub fn modis_1km_to_500m<T, Z>(
    lon: &Array2<T>,
    lat: &Array2<T>,
    satz: &Array2<Z>,
) -> TiepointResult<LonLatGrids<T>>
where
    T: Float + Send + Sync,
    Z: Float + Send + Sync,
{
    interpolate_with(1000, 500, lon, lat, satz)
}

/// Resample 1km geolocation onto its own grid through the curvature model.
///
/// Every output pixel lands on a tie point, so this reproduces the input and is mainly useful
/// as a consistency check of the pipeline.
pub fn modis_1km_to_1km<T, Z>(
    lon: &Array2<T>,
    lat: &Array2<T>,
    satz: &Array2<Z>,
) -> TiepointResult<LonLatGrids<T>>
where
    T: Float + Send + Sync,
    Z: Float + Send + Sync,
{
    interpolate_with(1000, 1000, lon, lat, satz)
}

/// Interpolate MODIS geolocation from 5km to 1km resolution
pub fn modis_5km_to_1km<T, Z>(
    lon: &Array2<T>,
    lat: &Array2<T>,
    satz: &Array2<Z>,
) -> TiepointResult<LonLatGrids<T>>
where
    T: Float + Send + Sync,
    Z: Float + Send + Sync,
{
    interpolate_with(5000, 1000, lon, lat, satz)
}

/// Interpolate MODIS geolocation from 5km to 500m resolution (reduced quality)
pub fn modis_5km_to_500m<T, Z>(
    lon: &Array2<T>,
    lat: &Array2<T>,
    satz: &Array2<Z>,
) -> TiepointResult<LonLatGrids<T>>
where
    T: Float + Send + Sync,
    Z: Float + Send + Sync,
{
    interpolate_with(5000, 500, lon, lat, satz)
}

/// Interpolate MODIS geolocation from 5km to 250m resolution (reduced quality)
pub fn modis_5km_to_250m<T, Z>(
    lon: &Array2<T>,
    lat: &Array2<T>,
    satz: &Array2<Z>,
) -> TiepointResult<LonLatGrids<T>>
where
    T: Float + Send + Sync,
    Z: Float + Send + Sync,
{
    interpolate_with(5000, 250, lon, lat, satz)
}
