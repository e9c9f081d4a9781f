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

//! The wgs84 module contains the Earth parameters used when an ellipsoid
//! parameter is not given.
//!
//! The three values are the literal defaults and are only approximately
//! consistent with each other: `B` differs from the semi-minor axis derived
//! from `A` and `INVERSE_F` by about 0.05 mm.

use crate::Metres;

/// The WGS 84 Semimajor axis measured in metres.  
/// This is the radius at the equator.
pub const A: Metres = Metres(6_378_137.0);

/// The Earth's Semiminor axis measured in metres.  
/// This is the radius at the poles.
pub const B: Metres = Metres(6_356_752.314_2);

/// The WGS 84 inverse flattening.
pub const INVERSE_F: f64 = 298.257_223_563;
