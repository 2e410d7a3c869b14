// THEORY:
// The `statistics` module provides central tendency and dispersion, in two shapes:
// a scalar form over a flat sample, and a "Step4" form over interleaved 4-channel
// data (the RGBA layout of a frame buffer, or any four parallel sensor axes).
//
// Key architectural principles:
// 1.  **Channel results are fixed-size**: A 4-channel answer is a `Vec4`
//     (`[f64; 4]`), never a growable vector. Position `k` is always channel `k`.
// 2.  **Step4 reuses the scalar path**: Each channel is pulled out with
//     `step_select` and handed to the scalar function, so both shapes share one
//     definition of "median" or "mode".
// 3.  **Lower median**: For an even count the median is the lower of the two middle
//     values, not their average. Callers depend on getting an actual sample back.
// 4.  **Deterministic mode**: Among values tied for the highest count, the one seen
//     first in the input wins.
// 5.  **Population deviation**: `std_dev` divides by `n`, not `n - 1`.

pub mod statistics {
    use crate::core_modules::error::{MathError, MathResult};
    use crate::core_modules::reduction::reduction::{check_channels, step_select, sum, sum_step4};
    use std::collections::HashMap;

    pub const CHANNELS: usize = 4;

    /// One value per channel of interleaved 4-channel data.
    pub type Vec4 = [f64; CHANNELS];

    pub fn mean(data: &[f64]) -> MathResult<f64> {
        if data.is_empty() {
            return Err(MathError::EmptyInput);
        }
        Ok(sum(data) / data.len() as f64)
    }

    pub fn mean_step4(data: &[f64]) -> MathResult<Vec4> {
        let sums = sum_step4(data)?;
        if data.is_empty() {
            return Err(MathError::EmptyInput);
        }
        let n_vec = (data.len() / CHANNELS) as f64;
        Ok(sums.map(|s| s / n_vec))
    }

    /// Median of a copy of `data`; the caller's slice is left untouched.
    /// For an even count this is the lower middle element.
    pub fn median(data: &[f64]) -> MathResult<f64> {
        if data.is_empty() {
            return Err(MathError::EmptyInput);
        }
        let mut sorted = data.to_vec();
        sorted.sort_by(f64::total_cmp);
        let pos = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            Ok(sorted[pos - 1])
        } else {
            Ok(sorted[pos])
        }
    }

    pub fn median_step4(data: &[f64]) -> MathResult<Vec4> {
        per_channel(data, median)
    }

    /// Most frequent value. Ties go to the value that appears first.
    pub fn mode(data: &[f64]) -> MathResult<f64> {
        most_frequent(data.iter().map(|&v| [v])).map(|[v]| v)
    }

    /// Most frequent non-overlapping group of 4 consecutive values.
    pub fn mode_vec4(data: &[f64]) -> MathResult<Vec4> {
        check_channels(data)?;
        let groups = data
            .chunks_exact(CHANNELS)
            .map(|g| [g[0], g[1], g[2], g[3]]);
        most_frequent(groups)
    }

    pub fn mode_step4(data: &[f64]) -> MathResult<Vec4> {
        per_channel(data, mode)
    }

    /// Population standard deviation.
    pub fn std_dev(data: &[f64]) -> MathResult<f64> {
        let ave = mean(data)?;
        let sum2: f64 = data.iter().map(|v| (v - ave) * (v - ave)).sum();
        Ok((sum2 / data.len() as f64).sqrt())
    }

    pub fn std_dev_step4(data: &[f64]) -> MathResult<Vec4> {
        per_channel(data, std_dev)
    }

    fn per_channel(data: &[f64], f: fn(&[f64]) -> MathResult<f64>) -> MathResult<Vec4> {
        check_channels(data)?;
        let mut out = [0.0; CHANNELS];
        for (offset, slot) in out.iter_mut().enumerate() {
            *slot = f(&step_select(CHANNELS, offset, data)?)?;
        }
        Ok(out)
    }

    // Bit patterns make floats hashable; -0.0 and 0.0 count as the same value.
    fn key_bits<const N: usize>(values: &[f64; N]) -> [u64; N] {
        values.map(|v| if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() })
    }

    fn most_frequent<const N: usize>(
        items: impl Iterator<Item = [f64; N]>,
    ) -> MathResult<[f64; N]> {
        // Counts are kept in first-seen order so ties resolve to the earliest value.
        let mut slots: HashMap<[u64; N], usize> = HashMap::new();
        let mut counts: Vec<([f64; N], usize)> = Vec::new();
        for item in items {
            let slot = *slots.entry(key_bits(&item)).or_insert_with(|| {
                counts.push((item, 0));
                counts.len() - 1
            });
            counts[slot].1 += 1;
        }

        let mut best: Option<([f64; N], usize)> = None;
        for &(value, count) in &counts {
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((value, count));
            }
        }
        best.map(|(value, _)| value).ok_or(MathError::EmptyInput)
    }
}
