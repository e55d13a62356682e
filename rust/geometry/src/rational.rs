// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Small-denominator approximation of unit fractions

use std::fmt;

/// A fraction `numerator / denominator`
///
/// Not reduced: the approximation keeps whichever denominator it found first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fraction {
    pub numerator: u32,
    pub denominator: u32,
}

impl Fraction {
    #[inline]
    pub fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Closest fraction to `value` with a denominator in `1..=max_denominator`
///
/// `value` is clamped to `[0, 1]` first. The search starts from `1/1` and
/// scans denominators upwards, replacing the current best only on a strictly
/// smaller error, so the smallest denominator reaching the minimum wins.
pub fn approximate(value: f64, max_denominator: u32) -> Fraction {
    let v = clamp_unit(value);

    let mut best = Fraction::new(1, 1);
    let mut best_error = (v - 1.0).abs();

    for denominator in 1..=max_denominator {
        let numerator = (v * denominator as f64).round() as u32;
        let error = (v - numerator as f64 / denominator as f64).abs();
        if error < best_error {
            best = Fraction::new(numerator, denominator);
            best_error = error;
        }
    }

    best
}

/// Clamp to `[0, 1]`, mapping NaN to 0
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thirds() {
        assert_eq!(approximate(1.0 / 3.0, 10).to_string(), "1/3");
        assert_eq!(approximate(0.6667, 10).to_string(), "2/3");
    }

    #[test]
    fn test_smallest_denominator_wins() {
        // 2/4, 3/6, 4/8 and 5/10 are as good as 1/2
        assert_eq!(approximate(0.5, 10), Fraction::new(1, 2));
        assert_eq!(approximate(0.2, 10), Fraction::new(1, 5));
    }

    #[test]
    fn test_extremes() {
        assert_eq!(approximate(1.0, 10), Fraction::new(1, 1));
        assert_eq!(approximate(0.0, 10), Fraction::new(0, 1));
        assert_eq!(approximate(0.04, 10), Fraction::new(0, 1));
        assert_eq!(approximate(0.96, 10), Fraction::new(1, 1));
    }

    #[test]
    fn test_clamps_noise() {
        assert_eq!(approximate(1.0001, 10), Fraction::new(1, 1));
        assert_eq!(approximate(-0.0001, 10), Fraction::new(0, 1));
        assert_eq!(approximate(f64::NAN, 10), Fraction::new(0, 1));
    }

    #[test]
    fn test_denominator_limit() {
        assert_eq!(approximate(0.7, 10), Fraction::new(7, 10));
        assert_eq!(approximate(0.7, 4), Fraction::new(2, 3));
        assert_eq!(approximate(0.7, 1), Fraction::new(1, 1));
    }
}
