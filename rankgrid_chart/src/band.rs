// Copyright 2026 the RankGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Band synthesis for sparse ranking scales.
//!
//! A grid with only two or three band rows reads poorly, so the builder
//! injects one sampled intermediate threshold between each adjacent pair of
//! bands. Synthesis is intentionally randomized per render; substituting the
//! sampler makes a render reproducible.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;

/// Minimum number of distinct bands a grid needs before it is rendered
/// without synthesizing intermediate rows.
pub const MIN_BAND_COUNT: usize = 4;

/// A source of uniformly distributed integers for band synthesis.
///
/// Every [`rand::Rng`] is a sampler; tests can substitute a deterministic
/// implementation (e.g. a midpoint sampler) for exact expectations.
pub trait BandSampler {
    /// Returns an integer uniformly distributed in the closed interval
    /// `[lo, hi]`.
    fn sample(&mut self, lo: i64, hi: i64) -> i64;
}

impl<R: Rng + ?Sized> BandSampler for R {
    fn sample(&mut self, lo: i64, hi: i64) -> i64 {
        if lo > hi {
            return self.gen_range(hi..=lo);
        }
        self.gen_range(lo..=hi)
    }
}

/// Expands a sparse ordered band sequence by injecting one sampled
/// threshold between each adjacent pair.
///
/// Sequences with at least [`MIN_BAND_COUNT`] entries are returned
/// unchanged, order preserved. Otherwise each adjacent pair `(a, b)` emits
/// the sorted pair `{a, sampled in [a, b]}`, the final element is emitted
/// alone, and the flattened result is sorted ascending and deduplicated.
/// Every synthesized value therefore lies within the input's span.
pub fn synthesize_bands(bands: &[i64], sampler: &mut dyn BandSampler) -> Vec<i64> {
    if bands.len() >= MIN_BAND_COUNT {
        return bands.to_vec();
    }

    let mut out = Vec::with_capacity(bands.len() * 2);
    for (i, &band) in bands.iter().enumerate() {
        match bands.get(i + 1) {
            Some(&next) => {
                let sampled = sampler.sample(band.min(next), band.max(next));
                out.push(band.min(sampled));
                out.push(band.max(sampled));
            }
            None => out.push(band),
        }
    }
    out.sort_unstable();
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    /// Always picks the midpoint of the interval.
    struct Midpoint;

    impl BandSampler for Midpoint {
        fn sample(&mut self, lo: i64, hi: i64) -> i64 {
            lo + (hi - lo) / 2
        }
    }

    #[test]
    fn dense_input_is_returned_unchanged() {
        let bands = vec![160, 1, 100, 40];
        let out = synthesize_bands(&bands, &mut Midpoint);
        assert_eq!(out, bands, "order must be preserved, not re-sorted");
    }

    #[test]
    fn sparse_input_gains_intermediate_bands() {
        let out = synthesize_bands(&[1, 40, 100], &mut Midpoint);
        assert_eq!(out, vec![1, 20, 40, 70, 100]);
    }

    #[test]
    fn two_bands_stay_ordered_and_bounded() {
        let out = synthesize_bands(&[1, 160], &mut Midpoint);
        assert_eq!(out, vec![1, 80, 160]);
    }

    #[test]
    fn sampled_output_is_ascending_distinct_and_within_span() {
        let bands = vec![1, 40, 100];
        for seed in 0..64 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let out = synthesize_bands(&bands, &mut rng);

            assert!(out.windows(2).all(|w| w[0] < w[1]), "not ascending: {out:?}");
            for &band in &bands {
                assert!(out.contains(&band), "missing input band {band} in {out:?}");
            }
            for &v in &out {
                assert!((1..=100).contains(&v), "out of span: {v}");
            }
        }
    }
}
