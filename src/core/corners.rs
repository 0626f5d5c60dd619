use crate::types::{GeoReal, ScanStack, TiepointResult};
use ndarray::{s, Array2, ArrayView3};

/// The four corners of every adjacent tie-point quad, as shifted views of one scan stack.
///
/// Corner order follows the scan: A top-left, B top-right, C bottom-right, D bottom-left.
/// The last tie-point row and column of a scan never anchor a quad.
#[derive(Debug, Clone)]
pub struct QuadCorners<'a, T> {
    pub a: ArrayView3<'a, T>,
    pub b: ArrayView3<'a, T>,
    pub c: ArrayView3<'a, T>,
    pub d: ArrayView3<'a, T>,
}

impl<'a, T> QuadCorners<'a, T> {
    /// Split a `[scans, rows_per_scan, cols]` stack into its quad corners
    pub fn from_scans(stack: ArrayView3<'a, T>) -> Self {
        Self {
            a: stack.clone().slice_move(s![.., ..-1, ..-1]),
            b: stack.clone().slice_move(s![.., ..-1, 1..]),
            c: stack.clone().slice_move(s![.., 1.., 1..]),
            d: stack.slice_move(s![.., 1.., ..-1]),
        }
    }

    /// Quad count as `(scans, quad rows, quad columns)`
    pub fn dim(&self) -> (usize, usize, usize) {
        self.a.dim()
    }
}

/// Reshape a `[scans * rows_per_scan, cols]` grid into a per-scan stack
pub fn into_scan_stack(grid: Array2<GeoReal>, rows_per_scan: usize) -> TiepointResult<ScanStack> {
    let (rows, cols) = grid.dim();
    let stack = grid
        .as_standard_layout()
        .into_owned()
        .into_shape((rows / rows_per_scan, rows_per_scan, cols))?;
    Ok(stack)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_positions() {
        let grid = Array2::from_shape_fn((4, 3), |(i, j)| (i * 10 + j) as f64);
        let stack = into_scan_stack(grid, 2).unwrap();
        assert_eq!(stack.dim(), (2, 2, 3));

        let corners = QuadCorners::from_scans(stack.view());
        assert_eq!(corners.dim(), (2, 1, 2));

        // quad (scan 1, row 0, col 1) spans grid rows 2-3, columns 1-2
        assert_eq!(corners.a[[1, 0, 1]], 21.0);
        assert_eq!(corners.b[[1, 0, 1]], 22.0);
        assert_eq!(corners.c[[1, 0, 1]], 32.0);
        assert_eq!(corners.d[[1, 0, 1]], 31.0);
    }

    #[test]
    fn test_no_quads_across_scan_boundary() {
        let grid = Array2::from_shape_fn((4, 2), |(i, _)| i as f64);
        let stack = into_scan_stack(grid, 2).unwrap();
        let corners = QuadCorners::from_scans(stack.view());

        // bottom corners of the first scan come from row 1, never row 2
        assert_eq!(corners.d[[0, 0, 0]], 1.0);
        assert_eq!(corners.a[[1, 0, 0]], 2.0);
    }
}
