//! Deterministic terrain generation from an integer seed.
//!
//! The raw seed is scrambled through a fixed xorshift chain to derive a
//! sub-column phase offset and an octave count, then a 1-D fractal noise
//! profile is sampled per column with the scrambled seed as sample
//! origin. Samples are normalized to the requested height range using
//! the observed extremes of the batch — not the nominal noise range — so
//! the full range is used no matter how tame the noise came out.

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use barrage_core::constants::NOISE_SCALE;

/// Scramble a seed so that nearby seeds produce unrelated terrain.
pub fn scramble_seed(seed: u32) -> u32 {
    let mut s = seed;
    s ^= s << 13;
    s ^= s >> 17;
    s ^= s << 5;
    s
}

/// Generate `width` column heights in `[min_height, max_height]`.
pub fn generate_heights(seed: u64, width: usize, min_height: i32, max_height: i32) -> Vec<i32> {
    let scrambled = scramble_seed(seed as u32);
    let offset = ((scrambled / 1000) % 100) as f64 / 10.0;
    let octaves = 4 + (scrambled % 6) as usize;

    let fbm = Fbm::<Perlin>::new(scrambled).set_octaves(octaves);
    let origin = scrambled as f64;
    let samples: Vec<f64> = (0..width)
        .map(|x| fbm.get([(x as f64 + offset) / NOISE_SCALE + origin, 0.5]))
        .collect();

    log::debug!("terrain gen: seed={seed} octaves={octaves} offset={offset:.1}");

    let min_val = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max_val = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max_val > min_val { max_val - min_val } else { 1.0 };

    samples
        .iter()
        .map(|raw| {
            let normalized = (raw - min_val) / range;
            (min_height as f64 + normalized * (max_height - min_height) as f64) as i32
        })
        .collect()
}
