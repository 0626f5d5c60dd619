//! Longitude/latitude <-> unit-sphere Cartesian conversion.
//!
//! Blending Cartesian components instead of angles keeps the interpolation continuous across
//! the antimeridian and near the poles.

use crate::types::GeoReal;
use ndarray::{Array2, ArrayView2, Zip};
use num_traits::Float;

/// Cartesian components of a grid of unit vectors
#[derive(Debug, Clone)]
pub struct CartesianGrid {
    pub x: Array2<GeoReal>,
    pub y: Array2<GeoReal>,
    pub z: Array2<GeoReal>,
}

impl CartesianGrid {
    pub fn into_components(self) -> [Array2<GeoReal>; 3] {
        [self.x, self.y, self.z]
    }
}

/// Convert longitude/latitude (degrees) to x/y/z on the unit sphere
pub fn to_unit_vector(lon: GeoReal, lat: GeoReal) -> [GeoReal; 3] {
    let (lon, lat) = (lon.to_radians(), lat.to_radians());
    [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
}

/// Convert x/y/z to longitude/latitude (degrees).
///
/// The vector need not be unit length: latitude comes from `atan2(z, hypot(x, y))`, so
/// blended vectors inside the sphere convert without clamping.
pub fn from_vector(x: GeoReal, y: GeoReal, z: GeoReal) -> (GeoReal, GeoReal) {
    let lon = y.atan2(x).to_degrees();
    let lat = z.atan2(x.hypot(y)).to_degrees();
    (lon, lat)
}

pub fn lonlat_to_xyz<T: Float>(lon: &ArrayView2<'_, T>, lat: &ArrayView2<'_, T>) -> CartesianGrid {
    let mut x = Array2::zeros(lon.raw_dim());
    let mut y = Array2::zeros(lon.raw_dim());
    let mut z = Array2::zeros(lon.raw_dim());

    Zip::from(&mut x)
        .and(&mut y)
        .and(&mut z)
        .and(lon)
        .and(lat)
        .for_each(|x, y, z, &lon, &lat| {
            let lon = lon.to_f64().unwrap_or(GeoReal::NAN);
            let lat = lat.to_f64().unwrap_or(GeoReal::NAN);
            let [vx, vy, vz] = to_unit_vector(lon, lat);
            *x = vx;
            *y = vy;
            *z = vz;
        });

    CartesianGrid { x, y, z }
}

/// Convert Cartesian components back to longitude/latitude grids of element type `T`
pub fn xyz_to_lonlat<T: Float>(
    x: &Array2<GeoReal>,
    y: &Array2<GeoReal>,
    z: &Array2<GeoReal>,
) -> (Array2<T>, Array2<T>) {
    let mut lon = Array2::from_elem(x.raw_dim(), T::nan());
    let mut lat = Array2::from_elem(x.raw_dim(), T::nan());

    Zip::from(&mut lon)
        .and(&mut lat)
        .and(x)
        .and(y)
        .and(z)
        .for_each(|lon, lat, &x, &y, &z| {
            let (lon_deg, lat_deg) = from_vector(x, y, z);
            *lon = T::from(lon_deg).unwrap_or_else(T::nan);
            *lat = T::from(lat_deg).unwrap_or_else(T::nan);
        });

    (lon, lat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_unit_vector_axes() {
        let [x, y, z] = to_unit_vector(0.0, 0.0);
        assert_abs_diff_eq!(x, 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(y, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(z, 0.0, epsilon = 1e-15);

        let [_, _, z] = to_unit_vector(123.0, 90.0);
        assert_abs_diff_eq!(z, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_round_trip_grid() {
        let lon = Array2::from_shape_fn((3, 4), |(i, j)| -179.5 + 60.0 * j as f32 + i as f32);
        let lat = Array2::from_shape_fn((3, 4), |(i, j)| -80.0 + 40.0 * i as f32 + j as f32);

        let xyz = lonlat_to_xyz(&lon.view(), &lat.view());
        let (lon2, lat2): (Array2<f32>, Array2<f32>) = xyz_to_lonlat(&xyz.x, &xyz.y, &xyz.z);

        for ((a, b), (c, d)) in lon.iter().zip(lon2.iter()).zip(lat.iter().zip(lat2.iter())) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-4);
            assert_abs_diff_eq!(*c, *d, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_blend_across_antimeridian() {
        let east = to_unit_vector(179.5, 10.0);
        let west = to_unit_vector(-179.5, 10.0);
        let mid: Vec<f64> = east.iter().zip(west.iter()).map(|(a, b)| (a + b) / 2.0).collect();

        let (lon, lat) = from_vector(mid[0], mid[1], mid[2]);
        assert_abs_diff_eq!(lon.abs(), 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(lat, 10.0, epsilon = 1e-3);
    }
}
