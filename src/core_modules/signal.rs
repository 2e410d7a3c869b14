// THEORY:
// The `signal` module runs fixed-coefficient FIR stencils over a 1D sample stream.
// Two stencils ship with the crate:
//
// -   `DERIVATIVE`: an 8-coefficient first-derivative estimator over the window
//     `i-4..=i+4` with the centre sample left out, normalised by 1188. A unit ramp
//     comes out as exactly 1.0.
// -   `SMOOTH9`: a 9-point quadratic smoothing stencil normalised by 231. It passes
//     constants and low-order polynomials through unchanged.
//
// Key architectural principles:
// 1.  **Kernels are data**: A `FirKernel` is just taps + divisor + whether the centre
//     sample is skipped. Callers can run their own stencils through the same code.
// 2.  **Length-preserving output**: The output is always as long as the input. The
//     `half` samples at each end, where the window would run off the edge, follow a
//     `Boundary` policy: zeroed (derivative) or copied verbatim (smoothing).
// 3.  **Non-negative smoothing**: `smooth9` is used on magnitudes, so its output is
//     clamped at zero after filtering.

pub mod signal {
    use crate::core_modules::error::{MathError, MathResult};
    use tracing::debug;

    /// What to write at the edges, where the full window does not fit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Boundary {
        Zero,
        Verbatim,
    }

    /// A symmetric FIR stencil.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct FirKernel<'a> {
        pub taps: &'a [f64],
        pub divisor: f64,
        /// When set, the taps cover the window minus its centre sample.
        pub skip_centre: bool,
    }

    pub const DERIVATIVE: FirKernel<'static> = FirKernel {
        taps: &[86.0, -142.0, -193.0, -126.0, 126.0, 193.0, 142.0, -86.0],
        divisor: 1188.0,
        skip_centre: true,
    };

    pub const SMOOTH9: FirKernel<'static> = FirKernel {
        taps: &[-21.0, 14.0, 39.0, 54.0, 59.0, 54.0, 39.0, 14.0, -21.0],
        divisor: 231.0,
        skip_centre: false,
    };

    impl FirKernel<'_> {
        /// Samples on either side of the centre.
        pub fn half_width(&self) -> usize {
            (self.taps.len() + usize::from(self.skip_centre)) / 2
        }

        pub fn window_len(&self) -> usize {
            2 * self.half_width() + 1
        }

        /// The taps must exactly cover an odd-length window.
        pub fn validate(&self) -> MathResult<()> {
            let expected = self.window_len() - usize::from(self.skip_centre);
            if self.taps.is_empty() || self.taps.len() != expected {
                return Err(MathError::DimensionMismatch {
                    left: self.taps.len(),
                    right: expected,
                });
            }
            Ok(())
        }

        pub fn apply(&self, data: &[f64], boundary: Boundary) -> MathResult<Vec<f64>> {
            self.validate()?;
            Ok(self.convolve(data, boundary))
        }

        fn convolve(&self, data: &[f64], boundary: Boundary) -> Vec<f64> {
            let mut out = match boundary {
                Boundary::Zero => vec![0.0; data.len()],
                Boundary::Verbatim => data.to_vec(),
            };
            let half = self.half_width();
            if data.len() < self.window_len() {
                debug!(
                    len = data.len(),
                    window = self.window_len(),
                    "signal shorter than kernel window, nothing filtered"
                );
                return out;
            }

            let mut window = Vec::with_capacity(self.taps.len());
            for i in half..data.len() - half {
                let span = &data[i - half..=i + half];
                window.clear();
                if self.skip_centre {
                    window.extend_from_slice(&span[..half]);
                    window.extend_from_slice(&span[half + 1..]);
                } else {
                    window.extend_from_slice(span);
                }
                let acc: f64 = self.taps.iter().zip(&window).map(|(t, v)| t * v).sum();
                out[i] = acc / self.divisor;
            }
            out
        }
    }

    pub fn dot_product(v1: &[f64], v2: &[f64]) -> MathResult<f64> {
        if v1.len() != v2.len() {
            return Err(MathError::DimensionMismatch {
                left: v1.len(),
                right: v2.len(),
            });
        }
        Ok(v1.iter().zip(v2).map(|(a, b)| a * b).sum())
    }

    /// First-derivative estimate; the 4 samples at each end are left at zero.
    pub fn derivative(data: &[f64]) -> Vec<f64> {
        DERIVATIVE.convolve(data, Boundary::Zero)
    }

    /// 9-point smoothing with the 4 samples at each end copied through, then every
    /// value clamped to be non-negative.
    pub fn smooth9(pts: &[f64]) -> Vec<f64> {
        let mut out = SMOOTH9.convolve(pts, Boundary::Verbatim);
        for v in &mut out {
            if *v < 0.0 {
                *v = 0.0;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::signal::*;
    use crate::core_modules::error::MathError;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn dot_product_requires_equal_lengths() {
        assert_eq!(dot_product(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(), 32.0);
        assert_eq!(dot_product(&[], &[]).unwrap(), 0.0);
        assert_eq!(
            dot_product(&[1.0; 8], &[1.0; 9]),
            Err(MathError::DimensionMismatch { left: 8, right: 9 })
        );
    }

    #[test]
    fn builtin_kernels_are_well_formed() {
        assert!(DERIVATIVE.validate().is_ok());
        assert!(SMOOTH9.validate().is_ok());
        assert_eq!(DERIVATIVE.window_len(), 9);
        assert_eq!(SMOOTH9.window_len(), 9);
        assert_eq!(SMOOTH9.taps.iter().sum::<f64>(), SMOOTH9.divisor);
    }

    #[test]
    fn malformed_kernel_is_rejected() {
        let even = FirKernel {
            taps: &[1.0, 1.0],
            divisor: 2.0,
            skip_centre: false,
        };
        assert_eq!(
            even.apply(&[1.0; 5], Boundary::Zero),
            Err(MathError::DimensionMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn derivative_of_unit_ramp_is_one_inside() {
        let ramp: Vec<f64> = (0..16).map(f64::from).collect();
        let d = derivative(&ramp);
        assert_eq!(d.len(), ramp.len());
        assert!(d[..4].iter().all(|&v| v == 0.0));
        assert!(d[12..].iter().all(|&v| v == 0.0));
        for &v in &d[4..12] {
            assert_relative_eq!(v, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn derivative_scales_with_slope_and_ignores_offset() {
        let line: Vec<f64> = (0..12).map(|i| 40.0 - 2.5 * f64::from(i)).collect();
        let d = derivative(&line);
        for &v in &d[4..8] {
            assert_relative_eq!(v, -2.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn derivative_of_short_signal_is_zero() {
        assert_eq!(derivative(&[1.0, 5.0, 2.0]), vec![0.0; 3]);
        assert!(derivative(&[]).is_empty());
    }

    #[test]
    fn smooth9_passes_constants_and_copies_edges() {
        let flat = vec![5.0; 12];
        assert_eq!(smooth9(&flat), flat);

        let mut data: Vec<f64> = (0..11).map(|i| f64::from(i * i)).collect();
        data[5] = 1000.0;
        let s = smooth9(&data);
        assert_eq!(&s[..4], &data[..4]);
        assert_eq!(&s[7..], &data[7..]);
        assert!(s[5] < data[5]);
    }

    #[test]
    fn smooth9_output_is_never_negative() {
        let data = [
            -3.0, 10.0, -50.0, 4.0, -1.0, 0.0, 80.0, -80.0, 2.5, -0.1, 7.0, -9.0, 3.0,
        ];
        let s = smooth9(&data);
        assert_eq!(s.len(), data.len());
        assert!(s.iter().all(|&v| v >= 0.0));
        assert_eq!(smooth9(&[-1.0, 2.0, -3.0]), vec![0.0, 2.0, 0.0]);

        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let len = rng.random_range(0..48);
            let d: Vec<f64> = (0..len).map(|_| rng.random_range(-1e4..1e4)).collect();
            let s = smooth9(&d);
            assert_eq!(s.len(), d.len());
            assert!(s.iter().all(|&v| v >= 0.0), "{d:?}");
        }
    }

    #[test]
    fn apply_runs_custom_kernels() {
        let box3 = FirKernel {
            taps: &[1.0, 1.0, 1.0],
            divisor: 3.0,
            skip_centre: false,
        };
        let out = box3.apply(&[3.0, 6.0, 9.0, 0.0], Boundary::Verbatim).unwrap();
        assert_eq!(out, vec![3.0, 6.0, 5.0, 0.0]);
    }
}
