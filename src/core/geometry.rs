//! Earth-curvature correction coefficients for a tie-point quad.
//!
//! A MODIS scan line projected onto a spherical Earth bows away from the straight line joining
//! its tie points, increasingly so towards the swath edges. The two coefficients computed here
//! (along-scan expansion and along-track alignment) are the second-order terms that bend the
//! bilinear interpolation coordinates back onto the true scan geometry.

use crate::types::{GeoReal, ScanStack};
use ndarray::{ArrayView3, Zip};

/// Mean Earth radius in km
pub const EARTH_RADIUS_KM: GeoReal = 6371.0;

/// Nominal Terra/Aqua orbit altitude in km
pub const SATELLITE_ALTITUDE_KM: GeoReal = 705.0;

/// Along-track ground width of one scan at nadir in km
pub const SCAN_WIDTH_KM: GeoReal = 10.00017;

const R: GeoReal = EARTH_RADIUS_KM;
const H: GeoReal = SATELLITE_ALTITUDE_KM;

/// Scan angle at the satellite for a viewing zenith angle (radians)
pub fn compute_phi(zeta: GeoReal) -> GeoReal {
    (R * zeta.sin() / (R + H)).asin()
}

/// Earth-centred angle between nadir and the viewed point
pub fn compute_theta(zeta: GeoReal, phi: GeoReal) -> GeoReal {
    zeta - phi
}

/// Inverse of [`compute_phi`]
pub fn compute_zeta(phi: GeoReal) -> GeoReal {
    ((R + H) * phi.sin() / R).asin()
}

/// Expansion and alignment coefficients for one quad
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadCoefficients {
    pub expansion: GeoReal,
    pub alignment: GeoReal,
}

/// Coefficients from the zenith angles (radians) of the quad's top corners A and B.
///
/// Bottom corners C and D share the scan-angle geometry of A and B and are not needed.
pub fn expansion_alignment(zeta_a: GeoReal, zeta_b: GeoReal) -> QuadCoefficients {
    let phi_a = compute_phi(zeta_a);
    let phi_b = compute_phi(zeta_b);
    let theta_a = compute_theta(zeta_a, phi_a);
    let theta_b = compute_theta(zeta_b, phi_b);

    let phi = (phi_a + phi_b) / 2.0;
    let zeta = compute_zeta(phi);
    let theta = compute_theta(zeta, phi);

    let sin_beta_2 = SCAN_WIDTH_KM / (2.0 * H);
    let d = ((R + H) / R * phi.cos() - zeta.cos()) * sin_beta_2;
    let e = zeta.cos() - (zeta.cos().powi(2) - d * d).sqrt();

    // Tie points symmetric about the sub-satellite track
    let denominator = if theta_a == theta_b {
        theta_a * 2.0
    } else {
        theta_a - theta_b
    };

    if denominator == 0.0 {
        // Both corners at nadir: theta ~ zeta * H / (R + H) and sin(zeta) ~ zeta, so the
        // alignment ratio tends to a constant while the expansion numerator vanishes.
        return QuadCoefficients {
            expansion: 0.0,
            alignment: 2.0 * e * (R + H) / H,
        };
    }

    QuadCoefficients {
        expansion: 4.0 * (((theta_a + theta_b) / 2.0 - theta) / denominator),
        alignment: 4.0 * e * zeta.sin() / denominator,
    }
}

/// Per-quad coefficients for stacks of A and B corner zenith angles (radians).
///
/// Returns `(c_expansion, c_alignment)` shaped like the inputs.
pub fn compute_expansion_alignment(
    satz_a: &ArrayView3<'_, GeoReal>,
    satz_b: &ArrayView3<'_, GeoReal>,
) -> (ScanStack, ScanStack) {
    let mut c_expansion = ScanStack::zeros(satz_a.raw_dim());
    let mut c_alignment = ScanStack::zeros(satz_a.raw_dim());

    Zip::from(&mut c_expansion)
        .and(&mut c_alignment)
        .and(satz_a)
        .and(satz_b)
        .for_each(|expansion, alignment, &zeta_a, &zeta_b| {
            let coefficients = expansion_alignment(zeta_a, zeta_b);
            *expansion = coefficients.expansion;
            *alignment = coefficients.alignment;
        });

    (c_expansion, c_alignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::Array3;

    #[test]
    fn test_phi_zeta_inverse() {
        for deg in [0.0_f64, 10.0, 35.0, 55.0, 65.0] {
            let zeta = deg.to_radians();
            let phi = compute_phi(zeta);
            assert!(phi <= zeta);
            assert_abs_diff_eq!(compute_zeta(phi), zeta, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_equal_zenith_coefficients_are_finite() {
        let zeta = 30.0_f64.to_radians();
        let coefficients = expansion_alignment(zeta, zeta);
        assert!(coefficients.expansion.is_finite());
        assert!(coefficients.alignment.is_finite());
        assert_abs_diff_eq!(coefficients.expansion, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_nadir_coefficients_match_limit() {
        let at_nadir = expansion_alignment(0.0, 0.0);
        assert!(at_nadir.expansion.is_finite());
        assert!(at_nadir.alignment.is_finite());

        let near_nadir = expansion_alignment(1e-6, 1e-6);
        assert_abs_diff_eq!(at_nadir.alignment, near_nadir.alignment, epsilon = 1e-6);
        assert_abs_diff_eq!(at_nadir.expansion, near_nadir.expansion, epsilon = 1e-6);
    }

    #[test]
    fn test_expansion_grows_towards_swath_edge() {
        let inner = expansion_alignment(10.0_f64.to_radians(), 11.0_f64.to_radians());
        let outer = expansion_alignment(60.0_f64.to_radians(), 61.0_f64.to_radians());
        assert!(inner.expansion.is_finite() && outer.expansion.is_finite());
        assert!(outer.expansion.abs() > inner.expansion.abs());
    }

    #[test]
    fn test_array_coefficients() {
        let satz_a = Array3::from_shape_fn((2, 3, 4), |(s, i, j)| {
            ((s + i + j) as f64 * 5.0).to_radians()
        });
        let satz_b = satz_a.mapv(|z| z + 1.0_f64.to_radians());

        let (c_exp, c_ali) = compute_expansion_alignment(&satz_a.view(), &satz_b.view());
        assert_eq!(c_exp.dim(), (2, 3, 4));
        assert_eq!(c_ali.dim(), (2, 3, 4));

        let single = expansion_alignment(satz_a[[1, 2, 3]], satz_b[[1, 2, 3]]);
        assert_eq!(c_exp[[1, 2, 3]], single.expansion);
        assert_eq!(c_ali[[1, 2, 3]], single.alignment);
        assert!(c_exp.iter().chain(c_ali.iter()).all(|v| v.is_finite()));
    }
}
