use crate::core::family::SwathEdge;
use crate::core::scan_geometry::ScanGeometry;
use crate::types::{FineField, GeoReal};

/// Normalized position of every fine pixel inside its enclosing tie-point quad.
///
/// `0` is the quad's first tie point and `1` the next one; pixels outside the outermost tie
/// points get coordinates below 0 or above 1 and are extrapolated.
#[derive(Debug, Clone)]
pub struct FineCoordinates {
    pub s_scan: FineField,
    pub s_track: FineField,
}

impl FineCoordinates {
    /// Broadcast per-row and per-column offsets (in fine pixels) over `scans` scans
    pub fn from_offsets(
        track_offsets: &[GeoReal],
        scan_offsets: &[GeoReal],
        geometry: &ScanGeometry,
        scans: usize,
    ) -> Self {
        let shape = (scans * track_offsets.len(), scan_offsets.len());
        let rows_per_scan = track_offsets.len();
        let lines = geometry.fine_rows_per_interval as GeoReal;
        let cols = geometry.fine_cols_per_tie_point as GeoReal;

        Self {
            s_scan: FineField::from_shape_fn(shape, |(_, c)| scan_offsets[c] / cols),
            s_track: FineField::from_shape_fn(shape, |(r, _)| {
                track_offsets[r % rows_per_scan] / lines
            }),
        }
    }

    pub fn dim(&self) -> (usize, usize) {
        self.s_scan.dim()
    }
}

/// Along-track offsets of one 1km-family scan.
///
/// Fine rows sit at pixel centres, half an interval before the first and after the last
/// tie-point row included, which gives `-f/2+0.5 .. -0.5`, then `0.5 .. f-0.5` per
/// interval, then `f+0.5 .. 1.5f`.
pub fn track_offsets_1km(geometry: &ScanGeometry) -> Vec<GeoReal> {
    let lines = geometry.fine_rows_per_interval;
    let last_interval = geometry.quad_rows_per_scan() as isize - 1;
    let half = lines as GeoReal / 2.0;

    (0..geometry.fine_rows_per_scan)
        .map(|row| {
            let position = row as GeoReal + 0.5 - half;
            let interval = ((position / lines as GeoReal).floor() as isize).clamp(0, last_interval);
            position - (interval as usize * lines) as GeoReal
        })
        .collect()
}

/// Across-track offsets of a 1km-family scan: `0 .. f-1` per tie point, with the final
/// block running on to `f .. 2f-1`.
pub fn scan_offsets_1km(geometry: &ScanGeometry) -> Vec<GeoReal> {
    let cols = geometry.fine_cols_per_tie_point;
    let last_quad = geometry.quad_cols() - 1;

    (0..geometry.fine_full_width)
        .map(|col| {
            let quad = (col / cols).min(last_quad);
            (col - quad * cols) as GeoReal
        })
        .collect()
}

/// Along-track offsets of a 5km-family scan: the first two fine rows precede the first
/// tie point.
pub fn track_offsets_5km(geometry: &ScanGeometry) -> Vec<GeoReal> {
    (0..geometry.fine_rows_per_scan)
        .map(|row| row as GeoReal - 2.0)
        .collect()
}

/// Across-track offsets of a 5km-family scan.
///
/// Interior columns cycle with the tie spacing shifted by two pixels. Tie points at the
/// swath edges are closer together, so the outermost columns take fixed offsets that depend
/// on whether the granule has 271 or 270 tie-point columns.
pub fn scan_offsets_5km(geometry: &ScanGeometry, edge: SwathEdge) -> Vec<GeoReal> {
    let cols = geometry.fine_cols_per_tie_point as isize;
    let width = geometry.fine_full_width;

    let mut offsets: Vec<GeoReal> = (0..width as isize)
        .map(|col| (col - 2).rem_euclid(cols) as GeoReal)
        .collect();

    offsets[0] = -2.0;
    offsets[1] = -1.0;

    let tail: &[GeoReal] = match edge {
        SwathEdge::Standard => &[5.0, 6.0],
        SwathEdge::Truncated => &[5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0],
    };
    offsets[width - tail.len()..].copy_from_slice(tail);

    offsets
}
