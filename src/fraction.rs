// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Cutlist Project

//! Mixed-fraction rendering of inch measurements
//!
//! Converts a resolved value like `12.9375` into the string `12 15/16` by
//! approximating the fractional part with a bounded-denominator rational.

use std::fmt;
use thiserror::Error;

/// Largest denominator considered when approximating a fractional part.
/// Generous for shop fractions, which bottom out at 64ths.
const MAX_DENOMINATOR: u64 = 1_000_000;

/// Continued-fraction remainders below this are floating-point noise, not
/// further terms.
const REMAINDER_CUTOFF: f64 = 1e-9;

/// Formatting failure
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FormatError {
    /// Input was negative, NaN, or infinite
    #[error("cannot format {0} as a length in inches")]
    OutOfDomain(f64),
    /// The fractional part collapsed to a whole number under the
    /// denominator bound
    #[error("fractional part of {0} does not reduce to a proper fraction")]
    Degenerate(f64),
}

/// A non-negative value split into a whole part and a reduced proper
/// fraction. `numerator == 0` means the value is whole; otherwise
/// `0 < numerator < denominator` and `gcd(numerator, denominator) == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixedFraction {
    whole: u64,
    numerator: u64,
    denominator: u64,
}

impl MixedFraction {
    /// Approximate a finite non-negative value, limiting the fraction
    /// denominator to [`MAX_DENOMINATOR`].
    pub fn approximate(value: f64) -> Result<Self, FormatError> {
        if !value.is_finite() || value < 0.0 {
            return Err(FormatError::OutOfDomain(value));
        }

        let whole = value.trunc() as u64;
        let fract = value.fract();
        // Exact whole numbers (including a -0.0 fractional part) carry no
        // fraction term at all.
        if fract == 0.0 {
            return Ok(Self {
                whole,
                numerator: 0,
                denominator: 1,
            });
        }

        let (numerator, denominator) = best_rational(fract);
        if denominator == 1 {
            // 0/1 or 1/1: the fractional part rounded away. Surface the
            // defect instead of printing a wrong whole number.
            return Err(FormatError::Degenerate(value));
        }

        Ok(Self {
            whole,
            numerator,
            denominator,
        })
    }

    pub fn whole(&self) -> u64 {
        self.whole
    }

    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    pub fn is_whole(&self) -> bool {
        self.numerator == 0
    }
}

impl fmt::Display for MixedFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.numerator == 0 {
            write!(f, "{}", self.whole)
        } else if self.whole == 0 {
            write!(f, "{}/{}", self.numerator, self.denominator)
        } else {
            write!(f, "{} {}/{}", self.whole, self.numerator, self.denominator)
        }
    }
}

/// Render a value as a mixed-fraction string, e.g. `12 23/32`.
pub fn format(value: f64) -> Result<String, FormatError> {
    MixedFraction::approximate(value).map(|fraction| fraction.to_string())
}

/// Best rational approximation of `x` in (0, 1) with denominator bounded
/// by [`MAX_DENOMINATOR`], using continued-fraction convergents.
/// Convergents and semiconvergents are in lowest terms by construction, so
/// no separate gcd reduction is needed.
fn best_rational(x: f64) -> (u64, u64) {
    let (mut p0, mut q0) = (0u64, 1u64);
    let (mut p1, mut q1) = (1u64, 0u64);
    let mut rest = x;

    loop {
        let term = rest.floor();
        let a = term as u64;
        let p2 = a * p1 + p0;
        let q2 = a * q1 + q0;

        if q2 > MAX_DENOMINATOR {
            // The next convergent overshoots the bound: the answer is the
            // last convergent or the closest semiconvergent under the
            // bound, whichever is nearer (the convergent wins ties).
            let k = (MAX_DENOMINATOR - q0) / q1;
            let (ps, qs) = (k * p1 + p0, k * q1 + q0);
            let conv_err = (x - p1 as f64 / q1 as f64).abs();
            let semi_err = (x - ps as f64 / qs as f64).abs();
            return if semi_err < conv_err { (ps, qs) } else { (p1, q1) };
        }

        (p0, q0) = (p1, q1);
        (p1, q1) = (p2, q2);

        rest -= term;
        if rest < REMAINDER_CUTOFF {
            return (p1, q1);
        }
        rest = 1.0 / rest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gcd(mut a: u64, mut b: u64) -> u64 {
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a
    }

    #[test]
    fn test_whole_values_have_no_fraction() {
        assert_eq!(format(0.0).unwrap(), "0");
        assert_eq!(format(12.0).unwrap(), "12");
        assert_eq!(format(13.0).unwrap(), "13");
    }

    #[test]
    fn test_negative_zero_is_not_spurious() {
        // A -0.0 fractional part compares equal to zero and must not
        // produce a 0/1 term.
        let f = MixedFraction::approximate(-0.0).unwrap();
        assert!(f.is_whole());
        assert_eq!(f.to_string(), "0");
    }

    #[test]
    fn test_proper_fractions_have_no_whole_prefix() {
        assert_eq!(format(23.0 / 32.0).unwrap(), "23/32");
        assert_eq!(format(15.0 / 32.0).unwrap(), "15/32");
        assert_eq!(format(0.5).unwrap(), "1/2");
    }

    #[test]
    fn test_mixed_values() {
        assert_eq!(format(12.9375).unwrap(), "12 15/16");
        assert_eq!(format(11.5625).unwrap(), "11 9/16");
        assert_eq!(format(2.5).unwrap(), "2 1/2");
        assert_eq!(format(8.84375).unwrap(), "8 27/32");
    }

    #[test]
    fn test_non_dyadic_values_recover_exact_ratios() {
        // These decimals are not exact in binary; the bounded
        // approximation must still land on the intended ratio.
        assert_eq!(format(1.0 / 3.0).unwrap(), "1/3");
        assert_eq!(format(2.0 / 3.0).unwrap(), "2/3");
        assert_eq!(format(0.1).unwrap(), "1/10");
        assert_eq!(format(0.05).unwrap(), "1/20");
    }

    #[test]
    fn test_fractions_are_reduced() {
        for x in [0.3, 0.71875, 1.0 / 3.0, 0.05, 0.9, 0.46875] {
            let f = MixedFraction::approximate(x).unwrap();
            assert_eq!(f.whole(), 0);
            assert!(f.denominator() > 1, "{} gave denominator 1", x);
            assert_eq!(
                gcd(f.numerator(), f.denominator()),
                1,
                "{}/{} not in lowest terms",
                f.numerator(),
                f.denominator()
            );
        }
    }

    #[test]
    fn test_degenerate_fract_is_an_error() {
        // Close enough to a whole number that the best bounded rational is
        // 1/1; the formatter reports the defect rather than printing it.
        assert!(matches!(
            MixedFraction::approximate(0.9999999999),
            Err(FormatError::Degenerate(_))
        ));
        assert!(matches!(
            MixedFraction::approximate(12.0 + 1e-13),
            Err(FormatError::Degenerate(_))
        ));
    }

    #[test]
    fn test_out_of_domain_inputs() {
        assert!(matches!(
            format(-1.5),
            Err(FormatError::OutOfDomain(_))
        ));
        assert!(matches!(
            format(f64::NAN),
            Err(FormatError::OutOfDomain(_))
        ));
        assert!(matches!(
            format(f64::INFINITY),
            Err(FormatError::OutOfDomain(_))
        ));
    }

    #[test]
    fn test_accessors() {
        let f = MixedFraction::approximate(12.9375).unwrap();
        assert_eq!(f.whole(), 12);
        assert_eq!(f.numerator(), 15);
        assert_eq!(f.denominator(), 16);
        assert!(!f.is_whole());
    }
}
