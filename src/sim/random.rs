//! Seeded random helpers for spawning and recoloring balls

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::renderer::Rgb;

/// Red channel range used by [`CourtRng::random_color`]
pub const COLOR_RED_MIN: i32 = 40;
pub const COLOR_RED_MAX: i32 = 255;
/// Fixed green channel of every generated color
pub const COLOR_GREEN: u8 = 20;
/// Fixed blue channel of every generated color
pub const COLOR_BLUE: u8 = 40;

/// RNG owned by the court. Seeded so a run can be replayed.
#[derive(Debug, Clone)]
pub struct CourtRng {
    seed: u64,
    rng: Pcg32,
}

impl CourtRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `[min, max]`, both ends inclusive
    pub fn random_int(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..=max)
    }

    /// A dark red-ish color: only the red channel varies.
    pub fn random_color(&mut self) -> Rgb {
        let r = self.random_int(COLOR_RED_MIN, COLOR_RED_MAX) as u8;
        Rgb::new(r, COLOR_GREEN, COLOR_BLUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = CourtRng::new(7);
        let mut b = CourtRng::new(7);
        for _ in 0..32 {
            assert_eq!(a.random_int(-7, 7), b.random_int(-7, 7));
        }
        assert_eq!(a.random_color(), b.random_color());
    }

    #[test]
    fn test_random_int_hits_both_ends() {
        let mut rng = CourtRng::new(1);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..1000 {
            match rng.random_int(-1, 1) {
                -1 => seen_min = true,
                1 => seen_max = true,
                _ => {}
            }
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn test_random_int_degenerate_range() {
        let mut rng = CourtRng::new(3);
        assert_eq!(rng.random_int(5, 5), 5);
    }

    proptest! {
        #[test]
        fn random_color_only_red_varies(seed in any::<u64>()) {
            let mut rng = CourtRng::new(seed);
            for _ in 0..16 {
                let c = rng.random_color();
                prop_assert_eq!(c.g, 20);
                prop_assert_eq!(c.b, 40);
                prop_assert!(c.r >= 40);
            }
        }

        #[test]
        fn random_int_is_inclusive(seed in any::<u64>(), min in -100i32..100, span in 0i32..50) {
            let mut rng = CourtRng::new(seed);
            let max = min + span;
            let v = rng.random_int(min, max);
            prop_assert!(v >= min && v <= max);
        }
    }
}
