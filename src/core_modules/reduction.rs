// THEORY:
// The `reduction` module holds the folds every other module is built from. Each one
// walks a flat slice once and collapses it to a scalar (or a scalar plus the index
// where it was found).
//
// Key architectural principles:
// 1.  **Explicit emptiness**: An extreme of nothing is undefined, so `max`/`min` and
//     friends return `MathError::EmptyInput` instead of inventing a sentinel.
// 2.  **First index wins**: `max_idx`/`min_idx` only move on a strict improvement, so
//     the reported index is the first position holding the extreme.
// 3.  **Channel plumbing**: `step_select` de-interleaves one channel out of strided
//     data and `interleave4` puts four channels back together. The Step4 statistics
//     are built on these two.

pub mod reduction {
    use crate::core_modules::error::{MathError, MathResult};
    use crate::core_modules::statistics::statistics::{CHANNELS, Vec4};

    pub fn max(data: &[f64]) -> MathResult<f64> {
        max_idx(data).map(|(value, _)| value)
    }

    pub fn min(data: &[f64]) -> MathResult<f64> {
        min_idx(data).map(|(value, _)| value)
    }

    /// Largest value and the first index holding it.
    pub fn max_idx(data: &[f64]) -> MathResult<(f64, usize)> {
        let first = *data.first().ok_or(MathError::EmptyInput)?;
        let mut best = (first, 0);
        for (i, &v) in data.iter().enumerate().skip(1) {
            if v > best.0 {
                best = (v, i);
            }
        }
        Ok(best)
    }

    /// Smallest value and the first index holding it.
    pub fn min_idx(data: &[f64]) -> MathResult<(f64, usize)> {
        let first = *data.first().ok_or(MathError::EmptyInput)?;
        let mut best = (first, 0);
        for (i, &v) in data.iter().enumerate().skip(1) {
            if v < best.0 {
                best = (v, i);
            }
        }
        Ok(best)
    }

    /// Returns `(max |x|, min |x|)`.
    pub fn max_min_abs(data: &[f64]) -> MathResult<(f64, f64)> {
        let abs: Vec<f64> = data.iter().map(|v| v.abs()).collect();
        Ok((max(&abs)?, min(&abs)?))
    }

    /// Keeps the elements whose position `i` satisfies `i % step == offset`.
    pub fn step_select(step: usize, offset: usize, data: &[f64]) -> MathResult<Vec<f64>> {
        if step == 0 {
            return Err(MathError::InvalidStep);
        }
        if offset >= step {
            return Err(MathError::IndexOutOfRange { index: offset, len: step });
        }
        Ok(data.iter().skip(offset).step_by(step).copied().collect())
    }

    /// Inverse of selecting channels 0..4 with `step_select(4, _, ..)`.
    pub fn interleave4(channels: [&[f64]; CHANNELS]) -> MathResult<Vec<f64>> {
        let len = channels[0].len();
        if let Some(other) = channels.iter().find(|c| c.len() != len) {
            return Err(MathError::DimensionMismatch { left: len, right: other.len() });
        }
        let mut out = Vec::with_capacity(len * CHANNELS);
        for i in 0..len {
            out.extend(channels.iter().map(|c| c[i]));
        }
        Ok(out)
    }

    pub fn sum(data: &[f64]) -> f64 {
        data.iter().sum()
    }

    /// Per-channel sums of interleaved 4-channel data.
    pub fn sum_step4(data: &[f64]) -> MathResult<Vec4> {
        check_channels(data)?;
        let mut sums = [0.0; CHANNELS];
        for group in data.chunks_exact(CHANNELS) {
            for (acc, v) in sums.iter_mut().zip(group) {
                *acc += v;
            }
        }
        Ok(sums)
    }

    pub(crate) fn check_channels(data: &[f64]) -> MathResult<()> {
        if data.len() % CHANNELS != 0 {
            return Err(MathError::MisalignedChannelData { len: data.len() });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::reduction::*;
    use crate::core_modules::error::MathError;

    #[test]
    fn extremes_report_first_index() {
        let data = [3.0, 7.0, -2.0, 7.0, -2.0];
        assert_eq!(max_idx(&data).unwrap(), (7.0, 1));
        assert_eq!(min_idx(&data).unwrap(), (-2.0, 2));
        assert_eq!(max(&data).unwrap(), 7.0);
        assert_eq!(min(&data).unwrap(), -2.0);
    }

    #[test]
    fn extremes_reject_empty_input() {
        assert_eq!(max(&[]), Err(MathError::EmptyInput));
        assert_eq!(min_idx(&[]), Err(MathError::EmptyInput));
        assert_eq!(max_min_abs(&[]), Err(MathError::EmptyInput));
    }

    #[test]
    fn max_min_abs_folds_sign() {
        assert_eq!(max_min_abs(&[-9.0, 2.0, -0.5, 4.0]).unwrap(), (9.0, 0.5));
    }

    #[test]
    fn step_select_picks_strided_positions() {
        let data: Vec<f64> = (0..10).map(f64::from).collect();
        assert_eq!(step_select(3, 1, &data).unwrap(), vec![1.0, 4.0, 7.0]);
        assert_eq!(step_select(1, 0, &data).unwrap(), data);
        assert_eq!(step_select(0, 0, &data), Err(MathError::InvalidStep));
        assert_eq!(
            step_select(4, 4, &data),
            Err(MathError::IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn de_interleave_then_interleave_restores_order() {
        let data: Vec<f64> = (0..24).map(|i| f64::from(i) * 1.5 - 4.0).collect();
        let c0 = step_select(4, 0, &data).unwrap();
        let c1 = step_select(4, 1, &data).unwrap();
        let c2 = step_select(4, 2, &data).unwrap();
        let c3 = step_select(4, 3, &data).unwrap();
        assert_eq!(interleave4([&c0[..], &c1[..], &c2[..], &c3[..]]).unwrap(), data);
    }

    #[test]
    fn interleave_rejects_ragged_channels() {
        let a = [1.0, 2.0];
        let b = [1.0];
        assert_eq!(
            interleave4([&a[..], &a[..], &b[..], &a[..]]),
            Err(MathError::DimensionMismatch { left: 2, right: 1 })
        );
    }

    #[test]
    fn sum_step4_splits_channels() {
        let data = [1.0, 10.0, 100.0, 1000.0, 2.0, 20.0, 200.0, 2000.0];
        assert_eq!(sum(&data), 3333.0);
        assert_eq!(sum_step4(&data).unwrap(), [3.0, 30.0, 300.0, 3000.0]);
        assert_eq!(sum_step4(&[]).unwrap(), [0.0; 4]);
        assert_eq!(
            sum_step4(&data[..7]),
            Err(MathError::MisalignedChannelData { len: 7 })
        );
    }
}
