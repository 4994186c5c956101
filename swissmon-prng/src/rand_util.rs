use crate::PseudoRandomNumberGenerator;

const TWO_POW_32: f64 = 4294967296.0;

/// Returns a random integer in the range `[min, max)`.
pub fn range(prng: &mut dyn PseudoRandomNumberGenerator, min: u64, max: u64) -> u64 {
    (prng.next() as u64).rem_euclid(max - min) + min
}

/// Returns a random float in the range `[0, 1)`.
pub fn unit(prng: &mut dyn PseudoRandomNumberGenerator) -> f64 {
    prng.next() as f64 / TWO_POW_32
}

/// Returns a random float in the range `[min, max)`.
pub fn uniform(prng: &mut dyn PseudoRandomNumberGenerator, min: f64, max: f64) -> f64 {
    min + unit(prng) * (max - min)
}

/// Returns a random element from the given slice.
pub fn sample_slice<'a, T>(
    prng: &mut dyn PseudoRandomNumberGenerator,
    slice: &'a [T],
) -> Option<&'a T> {
    if slice.is_empty() {
        return None;
    }
    if slice.len() == 1 {
        return slice.first();
    }
    let index = range(prng, 0, slice.len() as u64);
    slice.get(index as usize)
}
