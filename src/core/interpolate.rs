use crate::core::cartesian::{lonlat_to_xyz, xyz_to_lonlat};
use crate::core::corners::{into_scan_stack, QuadCorners};
use crate::core::expansion::TiepointExpansion;
use crate::core::fine_coords::FineCoordinates;
use crate::core::geometry::compute_expansion_alignment;
use crate::core::scan_geometry::ScanGeometry;
use crate::types::{FineField, GeoReal, LonLatGrids, TiepointResult};
use ndarray::{ArrayView2, Zip};
use num_traits::Float;

/// Curvature-corrected in-quad coordinates `(a_scan, a_track)`
pub fn corrected_coordinates(
    coords: &FineCoordinates,
    c_expansion: &FineField,
    c_alignment: &FineField,
) -> (FineField, FineField) {
    let a_scan = Zip::from(&coords.s_scan)
        .and(&coords.s_track)
        .and(c_expansion)
        .and(c_alignment)
        .map_collect(|&s_s, &s_t, &c_exp, &c_ali| {
            s_s + s_s * (1.0 - s_s) * c_exp + s_t * (1.0 - s_t) * c_ali
        });

    (a_scan, coords.s_track.clone())
}

/// Blend of the four quad corners at corrected coordinates, for one value
pub fn blend_corners(
    a_scan: GeoReal,
    a_track: GeoReal,
    [a, b, c, d]: [GeoReal; 4],
) -> GeoReal {
    let top = (1.0 - a_scan) * a + a_scan * b;
    let bottom = (1.0 - a_scan) * d + a_scan * c;
    (1.0 - a_track) * top + a_track * bottom
}

/// Corner-weighted blend over fine grids of expanded corners
pub fn corner_weighted_blend(
    a_scan: &FineField,
    a_track: &FineField,
    corners: [&FineField; 4],
) -> FineField {
    let [a, b, c, d] = corners;

    let top = Zip::from(a_scan)
        .and(a)
        .and(b)
        .map_collect(|&s, &a, &b| (1.0 - s) * a + s * b);
    let bottom = Zip::from(a_scan)
        .and(d)
        .and(c)
        .map_collect(|&s, &d, &c| (1.0 - s) * d + s * c);

    Zip::from(a_track)
        .and(&top)
        .and(&bottom)
        .map_collect(|&t, &top, &bottom| (1.0 - t) * top + t * bottom)
}

/// Interpolate whole scans of tie points to fine resolution.
///
/// Rows of the inputs must be a whole number of scans; the chunk dispatcher guarantees this.
pub fn interpolate_scans<T, Z>(
    geometry: &ScanGeometry,
    lon: ArrayView2<'_, T>,
    lat: ArrayView2<'_, T>,
    satz: ArrayView2<'_, Z>,
) -> TiepointResult<LonLatGrids<T>>
where
    T: Float,
    Z: Float,
{
    let rows_per_scan = geometry.coarse_rows_per_scan;
    let scans = satz.nrows() / rows_per_scan;
    log::debug!("Interpolating {} scan(s): {}", scans, geometry);

    let zenith = satz.mapv(|v| v.to_f64().unwrap_or(GeoReal::NAN).to_radians());
    let zenith = into_scan_stack(zenith, rows_per_scan)?;
    let zenith_corners = QuadCorners::from_scans(zenith.view());
    let (c_exp, c_ali) = compute_expansion_alignment(&zenith_corners.a, &zenith_corners.b);

    let coords = geometry.family.fine_coordinates(geometry, scans);
    let expansion: TiepointExpansion = geometry.family.expansion(geometry);

    let c_exp_full = expansion.expand_to_fine(&c_exp.view());
    let c_ali_full = expansion.expand_to_fine(&c_ali.view());
    let (a_scan, a_track) = corrected_coordinates(&coords, &c_exp_full, &c_ali_full);

    let mut blended = Vec::with_capacity(3);
    for component in lonlat_to_xyz(&lon, &lat).into_components() {
        let stack = into_scan_stack(component, rows_per_scan)?;
        let corners = QuadCorners::from_scans(stack.view());

        let a = expansion.expand_to_fine(&corners.a);
        let b = expansion.expand_to_fine(&corners.b);
        let c = expansion.expand_to_fine(&corners.c);
        let d = expansion.expand_to_fine(&corners.d);

        blended.push(corner_weighted_blend(&a_scan, &a_track, [&a, &b, &c, &d]));
    }

    Ok(xyz_to_lonlat(&blended[0], &blended[1], &blended[2]))
}
