use crate::types::{LonLatGrids, TiepointError, TiepointResult};
use ndarray::{concatenate, Array2, ArrayView2, Axis};
use num_traits::Float;
use std::marker::PhantomData;

/// How tie-point rows are grouped into independent work units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkLayout {
    /// Tie-point rows per scan; chunks never split a scan
    pub rows_per_scan: usize,
    pub scans_per_chunk: usize,
    /// Run chunks on the rayon thread pool
    pub parallel: bool,
}

impl ChunkLayout {
    pub fn rows_per_chunk(&self) -> usize {
        self.rows_per_scan * self.scans_per_chunk.max(1)
    }
}

/// A per-scan transform lifted to arbitrarily many scans, see [`for_each_scan_chunk`]
pub struct ScanChunked<T, Z, F> {
    transform: F,
    layout: ChunkLayout,
    _types: PhantomData<fn(T, Z) -> T>,
}

/// Lift `transform`, which must accept any whole number of scans, into a transform over a full
/// granule that runs it on scan-aligned chunks and stacks the outputs along track.
///
/// Scans never share tie points, so chunks are independent and may run in parallel.
pub fn for_each_scan_chunk<T, Z, F>(transform: F, layout: ChunkLayout) -> ScanChunked<T, Z, F>
where
    T: Float + Send + Sync,
    Z: Float + Send + Sync,
    F: Fn(ArrayView2<'_, T>, ArrayView2<'_, T>, ArrayView2<'_, Z>) -> TiepointResult<LonLatGrids<T>>
        + Sync,
{
    ScanChunked {
        transform,
        layout,
        _types: PhantomData,
    }
}

impl<T, Z, F> ScanChunked<T, Z, F>
where
    T: Float + Send + Sync,
    Z: Float + Send + Sync,
    F: Fn(ArrayView2<'_, T>, ArrayView2<'_, T>, ArrayView2<'_, Z>) -> TiepointResult<LonLatGrids<T>>
        + Sync,
{
    pub fn layout(&self) -> ChunkLayout {
        self.layout
    }

    pub fn apply(
        &self,
        lon: ArrayView2<'_, T>,
        lat: ArrayView2<'_, T>,
        satz: ArrayView2<'_, Z>,
    ) -> TiepointResult<LonLatGrids<T>> {
        validate_scan_aligned(&lon, &lat, &satz, self.layout.rows_per_scan)?;

        let rows_per_chunk = self.layout.rows_per_chunk();
        let chunks: Vec<_> = lon
            .axis_chunks_iter(Axis(0), rows_per_chunk)
            .zip(lat.axis_chunks_iter(Axis(0), rows_per_chunk))
            .zip(satz.axis_chunks_iter(Axis(0), rows_per_chunk))
            .map(|((lon, lat), satz)| (lon, lat, satz))
            .collect();

        log::debug!(
            "Dispatching {} chunk(s) of up to {} scan(s) (parallel: {})",
            chunks.len(),
            self.layout.scans_per_chunk.max(1),
            self.layout.parallel
        );

        let results = dispatch(chunks, self.layout.parallel, |(lon, lat, satz)| {
            (self.transform)(lon, lat, satz)
        });

        let mut lons = Vec::with_capacity(results.len());
        let mut lats = Vec::with_capacity(results.len());
        for result in results {
            let (lon, lat) = result?;
            lons.push(lon);
            lats.push(lat);
        }

        Ok((stack_rows(&lons)?, stack_rows(&lats)?))
    }
}

/// Check that lon/lat/satz agree in shape and hold a whole, non-zero number of scans
pub fn validate_scan_aligned<T, Z>(
    lon: &ArrayView2<'_, T>,
    lat: &ArrayView2<'_, T>,
    satz: &ArrayView2<'_, Z>,
    rows_per_scan: usize,
) -> TiepointResult<()> {
    if lon.dim() != lat.dim() || lon.dim() != satz.dim() {
        return Err(TiepointError::ShapeMismatch(format!(
            "longitude {:?}, latitude {:?} and zenith {:?} arrays must have the same shape",
            lon.dim(),
            lat.dim(),
            satz.dim()
        )));
    }

    let rows = lon.nrows();
    if rows == 0 || rows % rows_per_scan != 0 {
        return Err(TiepointError::ShapeMismatch(format!(
            "{} tie-point rows is not a whole number of {}-row scans",
            rows, rows_per_scan
        )));
    }

    Ok(())
}

fn stack_rows<T: Clone>(parts: &[Array2<T>]) -> TiepointResult<Array2<T>> {
    let views: Vec<_> = parts.iter().map(|part| part.view()).collect();
    Ok(concatenate(Axis(0), &views)?)
}

#[cfg(feature = "parallel")]
fn dispatch<I, O, F>(items: Vec<I>, parallel: bool, f: F) -> Vec<O>
where
    I: Send,
    O: Send,
    F: Fn(I) -> O + Sync + Send,
{
    use rayon::prelude::*;

    if parallel {
        items.into_par_iter().map(f).collect()
    } else {
        items.into_iter().map(f).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn dispatch<I, O, F>(items: Vec<I>, _parallel: bool, f: F) -> Vec<O>
where
    F: Fn(I) -> O,
{
    items.into_iter().map(f).collect()
}
