use crate::distribution::error::NormalDistErr;
use statrs::function::erf::{erfc, erfc_inv};
use std::f64::consts::SQRT_2;

pub fn std_normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / SQRT_2)
}

/// Inverse of `std_normal_cdf` on the open interval (0, 1)
pub fn std_normal_quantile(p: f64) -> Result<f64, NormalDistErr> {
    if !(p > 0.0 && p < 1.0) {
        return Err(NormalDistErr::QuantileOutOfBounds(p));
    }
    Ok(-SQRT_2 * erfc_inv(2.0 * p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SsComputeErr;

    #[test]
    fn standard_normal_cdf_values() {
        assert!((std_normal_cdf(0.0) - 0.5).abs() < 1e-15);
        assert!((std_normal_cdf(1.959963984540054) - 0.975).abs() < 1e-12);
        assert!((std_normal_cdf(-1.0) - 0.158655253931457).abs() < 1e-12);
    }

    #[test]
    fn std_normal_quantile_err() {
        if let Err(e) = std_normal_quantile(1.1) {
            let e: SsComputeErr = e.into();
            assert_eq!(
                String::from(
                    "while evaluating normal distribution: arguments to \
                    quantile function should be in (0, 1); got 1.1"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn std_normal_quantile_rejects_endpoints() {
        assert!(std_normal_quantile(0.0).is_err());
        assert!(std_normal_quantile(1.0).is_err());
        assert!(std_normal_quantile(f64::NAN).is_err());
    }

    #[test]
    fn std_normal_quantile_symmetric() {
        let upper = std_normal_quantile(0.975).unwrap();
        let lower = std_normal_quantile(0.025).unwrap();
        assert!((upper + lower).abs() < 1e-12);
    }

    #[test]
    fn quantile_inverts_cdf() {
        for p in [1e-10, 0.001, 0.05, 0.3, 0.5, 0.8, 0.975, 0.99] {
            let z = std_normal_quantile(p).unwrap();
            assert!((std_normal_cdf(z) / p - 1.).abs() < 1e-10);
        }
        assert!((std_normal_quantile(0.975).unwrap() - 1.959963985).abs() < 1e-9);
    }
}
