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

//! The distance module contains `Distance`, a length quantity: a magnitude
//! together with the unit it was given in.
//!
//! Distances are immutable values. They are only combined after conversion
//! to `Metres`, the common base unit.

use crate::error::ParseDistanceError;
use crate::Metres;
use core::fmt;
use core::str::FromStr;

/// The Earth's equatorial radius measured in metres.
pub const EARTH_RADIUS: Metres = Metres(6_378_137.0);

/// The Earth's polar radius measured in metres.
pub const EARTH_POLAR_RADIUS: Metres = Metres(6_356_752.314_2);

/// The length units a `Distance` may be given in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthUnit {
    Metres,
    Kilometres,
    Megametres,
    Centimetres,
    Millimetres,
    Feet,
    Miles,
    NauticalMiles,
    /// The Earth's equatorial radius, `R⊕`.
    EarthRadius,
    /// The Earth's polar radius, `R⊕P`.
    EarthPolarRadius,
}

impl LengthUnit {
    /// The number of metres in one of this unit.
    #[must_use]
    pub const fn metres_per_unit(self) -> f64 {
        match self {
            Self::Metres => 1.0,
            Self::Kilometres => 1000.0,
            Self::Megametres => 1_000_000.0,
            Self::Centimetres => 0.01,
            Self::Millimetres => 0.001,
            Self::Feet => 0.3048,
            Self::Miles => 1609.344,
            Self::NauticalMiles => 1852.0,
            Self::EarthRadius => EARTH_RADIUS.0,
            Self::EarthPolarRadius => EARTH_POLAR_RADIUS.0,
        }
    }

    /// The symbol used when displaying a value in this unit.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Metres => "m",
            Self::Kilometres => "km",
            Self::Megametres => "Mm",
            Self::Centimetres => "cm",
            Self::Millimetres => "mm",
            Self::Feet => "ft",
            Self::Miles => "mi",
            Self::NauticalMiles => "nmi",
            Self::EarthRadius => "R⊕",
            Self::EarthPolarRadius => "R⊕P",
        }
    }
}

impl FromStr for LengthUnit {
    type Err = ParseDistanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Symbols are case sensitive: `Mm` is not `mm` and `R_E` is not `r_e`.
        match s {
            "m" => return Ok(Self::Metres),
            "km" => return Ok(Self::Kilometres),
            "Mm" => return Ok(Self::Megametres),
            "cm" => return Ok(Self::Centimetres),
            "mm" => return Ok(Self::Millimetres),
            "ft" => return Ok(Self::Feet),
            "mi" => return Ok(Self::Miles),
            "nmi" | "NM" => return Ok(Self::NauticalMiles),
            "R_E" | "earth_radius" | "R_⊕" | "R⊕" | "a_E" | "a_⊕" | "a⊕" => {
                return Ok(Self::EarthRadius)
            }
            "R_E_P" | "earth_polar_radius" | "R_⊕_P" | "R⊕P" | "b_E" | "b_⊕" | "b⊕" => {
                return Ok(Self::EarthPolarRadius)
            }
            _ => {}
        }

        match s.to_lowercase().as_str() {
            "meter" | "meters" | "metre" | "metres" => Ok(Self::Metres),
            "kilometer" | "kilometers" | "kilometre" | "kilometres" => Ok(Self::Kilometres),
            "megameter" | "megameters" | "megametre" | "megametres" => Ok(Self::Megametres),
            "centimeter" | "centimeters" | "centimetre" | "centimetres" => Ok(Self::Centimetres),
            "millimeter" | "millimeters" | "millimetre" | "millimetres" => Ok(Self::Millimetres),
            "foot" | "feet" => Ok(Self::Feet),
            "mile" | "miles" => Ok(Self::Miles),
            "nautical_mile" | "nautical_miles" => Ok(Self::NauticalMiles),
            _ => Err(ParseDistanceError::UnknownUnit(s.to_owned())),
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A length quantity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Distance {
    magnitude: f64,
    unit: LengthUnit,
}

impl Distance {
    /// Constructor.
    /// * `magnitude` - the value in `unit`s.
    /// * `unit` - the unit of the value.
    #[must_use]
    pub const fn new(magnitude: f64, unit: LengthUnit) -> Self {
        Self { magnitude, unit }
    }

    /// Construct a `Distance` measured in metres.
    #[must_use]
    pub const fn metres(magnitude: f64) -> Self {
        Self::new(magnitude, LengthUnit::Metres)
    }

    #[must_use]
    pub const fn magnitude(&self) -> f64 {
        self.magnitude
    }

    #[must_use]
    pub const fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// The distance in the base unit.
    /// # Examples
    /// ```
    /// use quick_georef::distance::{Distance, LengthUnit};
    /// use quick_georef::Metres;
    ///
    /// let d = Distance::new(2.5, LengthUnit::Kilometres);
    /// assert_eq!(Metres(2500.0), d.to_metres());
    /// ```
    #[must_use]
    pub fn to_metres(&self) -> Metres {
        Metres(self.magnitude * self.unit.metres_per_unit())
    }

    /// The distance expressed in another unit.
    #[must_use]
    pub fn in_unit(&self, unit: LengthUnit) -> f64 {
        if unit == self.unit {
            self.magnitude
        } else {
            self.to_metres().0 / unit.metres_per_unit()
        }
    }

    /// Multiply the distance by `factor`, keeping its unit.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.magnitude * factor, self.unit)
    }
}

/// Split `s` into its longest numeric prefix and the remainder.
fn split_magnitude(s: &str) -> Option<(f64, &str)> {
    s.char_indices()
        .map(|(i, _)| i)
        .chain(core::iter::once(s.len()))
        .rev()
        .filter(|&i| i > 0)
        .find_map(|i| {
            s[..i]
                .trim_end()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(|v| (v, s[i..].trim()))
        })
}

impl FromStr for Distance {
    type Err = ParseDistanceError;

    /// Parse a distance such as `"6378137.0 m"`, `"6378.137km"` or `"1 R_E"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (magnitude, unit) =
            split_magnitude(s).ok_or_else(|| ParseDistanceError::MissingMagnitude(s.to_owned()))?;
        if unit.is_empty() {
            return Err(ParseDistanceError::MissingUnit(s.to_owned()));
        }
        Ok(Self::new(magnitude, unit.parse()?))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}
