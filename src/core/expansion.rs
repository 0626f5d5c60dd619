use crate::core::family::SwathEdge;
use crate::core::scan_geometry::ScanGeometry;
use crate::types::{FineField, GeoReal};
use ndarray::ArrayView3;
use std::iter::repeat;

/// Replication plan upsampling a per-quad stack to fine resolution.
///
/// `rows[r]` is the quad row feeding fine row `r` of every scan and `cols[c]` the quad
/// column feeding fine column `c`. Expansion only copies values, so the result is exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TiepointExpansion {
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
}

impl TiepointExpansion {
    /// Broadcast a `[scans, quad rows, quad cols]` stack to `[scans * rows, cols]`
    pub fn expand_to_fine(&self, stack: &ArrayView3<'_, GeoReal>) -> FineField {
        let scans = stack.dim().0;
        let rows_per_scan = self.rows.len();

        FineField::from_shape_fn((scans * rows_per_scan, self.cols.len()), |(r, c)| {
            stack[[r / rows_per_scan, self.rows[r % rows_per_scan], self.cols[c]]]
        })
    }
}

fn replicate(count: usize, times: usize) -> Vec<usize> {
    (0..count).flat_map(|i| repeat(i).take(times)).collect()
}

/// 1km family: every quad row and column is repeated once per fine pixel, then the scan is
/// padded by half an interval of rows at each end and one block of columns on the right.
///
/// For odd repeat counts the extra padding row goes to the bottom.
pub fn expansion_1km(geometry: &ScanGeometry) -> TiepointExpansion {
    let lines = geometry.fine_rows_per_interval;
    let cols = geometry.fine_cols_per_tie_point;

    let base_rows = replicate(geometry.quad_rows_per_scan(), lines);
    let top = lines / 2;
    let bottom = lines - top;
    let mut rows = Vec::with_capacity(base_rows.len() + lines);
    rows.extend_from_slice(&base_rows[..top]);
    rows.extend_from_slice(&base_rows);
    rows.extend_from_slice(&base_rows[base_rows.len() - bottom..]);

    let mut base_cols = replicate(geometry.quad_cols(), cols);
    let right = base_cols[base_cols.len() - cols..].to_vec();
    base_cols.extend(right);

    TiepointExpansion {
        rows,
        cols: base_cols,
    }
}

/// 5km family: one quad row covers the whole scan, columns get edge blocks on both sides.
///
/// A truncated (270 column) swath gets one more block of the last quad column before the
/// right edge block.
pub fn expansion_5km(geometry: &ScanGeometry, edge: SwathEdge) -> TiepointExpansion {
    let cols = geometry.fine_cols_per_tie_point;
    let edge_cols = 2 * (cols / geometry.coarse_cols_per_tie_point);

    let rows = replicate(
        geometry.quad_rows_per_scan(),
        2 * geometry.fine_rows_per_interval,
    );

    let base = replicate(geometry.quad_cols(), cols);
    let mut expanded = Vec::with_capacity(geometry.fine_full_width);
    expanded.extend_from_slice(&base[..edge_cols]);
    expanded.extend_from_slice(&base);
    if edge == SwathEdge::Truncated {
        expanded.extend_from_slice(&base[base.len() - cols..]);
    }
    expanded.extend_from_slice(&base[base.len() - edge_cols..]);

    TiepointExpansion {
        rows,
        cols: expanded,
    }
}
