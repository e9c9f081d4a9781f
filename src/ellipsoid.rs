// Copyright (c) 2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The ellipsoid module contains functions relating the parameters of an
//! ellipsoid: its Semimajor axis (the equivalent of its radius), its
//! Semiminor axis and its inverse flattening.

pub mod wgs84;

use crate::{Distance, Metres};

/// Calculate the Semiminor axis of an ellipsoid, in the unit of its
/// Semimajor axis.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `inverse_f` - the inverse flattening.
/// # Examples
/// ```
/// use quick_georef::{Distance, Metres};
/// use quick_georef::ellipsoid::{calculate_minor_axis, wgs84};
///
/// let b = calculate_minor_axis(Distance::metres(wgs84::A.0), wgs84::INVERSE_F);
/// assert_eq!(Metres(6_356_752.314_245_179), b.to_metres());
/// ```
#[must_use]
pub fn calculate_minor_axis(a: Distance, inverse_f: f64) -> Distance {
    a.scale(1.0 - calculate_flattening(inverse_f))
}

/// Calculate the inverse flattening of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `b` - the Semiminor axis of an ellipsoid, less than `a`.
#[must_use]
pub fn calculate_inverse_flattening(a: Metres, b: Metres) -> f64 {
    a.0 / (a.0 - b.0)
}

/// Calculate the flattening ratio of an ellipsoid from its inverse flattening.
/// * `inverse_f` - the inverse flattening.
#[must_use]
pub fn calculate_flattening(inverse_f: f64) -> f64 {
    1.0 / inverse_f
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LengthUnit;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_calculate_inverse_flattening() {
        let b = calculate_minor_axis(Distance::metres(wgs84::A.0), wgs84::INVERSE_F).to_metres();
        assert!(is_within_tolerance(
            wgs84::INVERSE_F,
            calculate_inverse_flattening(wgs84::A, b),
            1e-9
        ));

        assert_eq!(2.0, calculate_inverse_flattening(Metres(2.0), Metres(1.0)));
        assert_eq!(0.5, calculate_flattening(2.0));
    }

    #[test]
    fn test_calculate_minor_axis_keeps_unit() {
        let b = calculate_minor_axis(Distance::new(4.0, LengthUnit::Kilometres), 4.0);
        assert_eq!(Distance::new(3.0, LengthUnit::Kilometres), b);
    }

    #[test]
    fn test_wgs84_defaults_are_approximately_consistent() {
        let b = calculate_minor_axis(Distance::metres(wgs84::A.0), wgs84::INVERSE_F).to_metres();
        assert_ne!(wgs84::B, b);
        assert!(is_within_tolerance(wgs84::B.0, b.0, 1e-3));
    }
}
