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

//! Number formatting for the sidecar files.
//!
//! GIS readers parse these files as text, so the exact form of each number
//! matters: reals are written in their shortest round trip form and the
//! `GeoTransform` uses C `printf` style exponents.

/// Format a real in its shortest round trip form, always with a fractional
/// part. Magnitudes below 1e-4 or from 1e16 upwards use an exponent.
/// # Examples
/// ```
/// use quick_georef::sidecar::format::format_real;
///
/// assert_eq!("1.0", format_real(1.0));
/// assert_eq!("0.1", format_real(0.1));
/// assert_eq!("6378137.0", format_real(6_378_137.0));
/// assert_eq!("1.0e-05", format_real(0.000_01));
/// ```
#[must_use]
pub fn format_real(value: f64) -> String {
    let magnitude = value.abs();
    if value.is_finite() && magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let formatted = format!("{value:e}");
        let (mantissa, exponent) = split_exponent(&formatted);
        if mantissa.contains('.') {
            c_exponent(mantissa, exponent)
        } else {
            c_exponent(&format!("{mantissa}.0"), exponent)
        }
    } else {
        // Debug keeps the ".0" of whole numbers.
        format!("{value:?}")
    }
}

/// Format a real like C's `%.<precision>e`, e.g. `-1.8000000000000000e+02`.
/// # Examples
/// ```
/// use quick_georef::sidecar::format::format_scientific;
///
/// assert_eq!("-1.8000000000000000e+02", format_scientific(-180.0, 16));
/// assert_eq!("0.0000000000000000e+00", format_scientific(0.0, 16));
/// ```
#[must_use]
pub fn format_scientific(value: f64, precision: usize) -> String {
    let formatted = format!("{value:.precision$e}");
    let (mantissa, exponent) = split_exponent(&formatted);
    c_exponent(mantissa, exponent)
}

/// Format a real like C's `%.<precision>f`.
#[must_use]
pub fn format_fixed(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

/// Split Rust's `{:e}` output into its mantissa and exponent.
fn split_exponent(formatted: &str) -> (&str, i32) {
    formatted.split_once('e').map_or((formatted, 0), |(mantissa, exponent)| {
        (mantissa, exponent.parse().unwrap_or_default())
    })
}

/// Join a mantissa and exponent the way C does: signed, at least two digits.
fn c_exponent(mantissa: &str, exponent: i32) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}
