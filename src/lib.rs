// Copyright (c) 2024-2025 Ken Barker

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

//! quick-georef
//!
//! Assign a georeference to a raster image that shows the whole globe in an
//! equirectangular (plate carrée) projection, but carries no georeference of
//! its own: e.g. a planetary map or a texture exported from a paint program.
//!
//! The image is assumed to span longitudes -180° to 180° and latitudes -90°
//! to 90°. From the image's pixel dimensions and an ellipsoid, the library
//! writes up to three sidecar files that GIS tools such as GDAL and QGIS
//! read alongside the image:
//!
//! - `<FILE>.aux.xml` - a GDAL PAM file holding the coordinate system and
//!   the `GeoTransform`;
//! - a worldfile - the affine transform, one value per line, named by
//!   replacing the last letter of `<FILE>` with `w`;
//! - a `.prj` file - the coordinate system as WKT.
//!
//! ## Ellipsoid
//!
//! The ellipsoid may be given by any of:
//!
//! - nothing: the Earth's parameters are used;
//! - a Semimajor axis: the Earth's inverse flattening is used;
//! - a Semimajor axis and an inverse flattening;
//! - an inverse flattening: the Earth's Semimajor axis is used;
//! - a Semimajor and a Semiminor axis.
//!
//! Axes are `Distance`s, a magnitude in any length unit including the
//! Earth's equatorial and polar radii, e.g. `"3396.19 km"` or `"0.53 R_E"`.
//!
//! The library depends upon the following crates:
//!
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres`,
//!   the base unit of every `Distance`;
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees`;
//! - [image](https://crates.io/crates/image) - to read image dimensions.

pub mod distance;
pub mod ellipsoid;
pub mod error;
pub mod options;
pub mod raster;
pub mod sidecar;
pub mod transform;

pub use angle_sc::Degrees;
pub use distance::{Distance, LengthUnit};
pub use error::{Error, Result, SidecarError};
pub use icao_units::si::Metres;
pub use options::OutputOptions;
pub use raster::{DimensionReader, ImageFileReader};
pub use sidecar::{SidecarKind, SidecarOutcome};
pub use transform::{ImageExtent, Transform};

use core::fmt;
use ellipsoid::wgs84;
use std::path::Path;

/// The parameters of an `Ellipsoid`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: Distance,
    /// The Semiminor axis of the ellipsoid.
    b: Distance,
    /// The inverse flattening of the ellipsoid.
    inverse_f: f64,
}

impl Ellipsoid {
    /// Construct an `Ellipsoid` from its Semimajor axis and inverse flattening.
    /// The Semiminor axis is given in the unit of the Semimajor axis.
    /// * `a` - the Semimajor axis of the `Ellipsoid`, positive.
    /// * `inverse_f` - the inverse flattening of the `Ellipsoid`, greater than 1.
    #[must_use]
    fn new(a: Distance, inverse_f: f64) -> Self {
        Self {
            a,
            b: ellipsoid::calculate_minor_axis(a, inverse_f),
            inverse_f,
        }
    }

    /// Resolve an `Ellipsoid` from the parameters a user has given.
    /// * `semi_major` - the Semimajor axis, if given.
    /// * `semi_minor` - the Semiminor axis, if given.
    /// * `inverse_f` - the inverse flattening, if given.
    ///
    /// The parameters that are not given are derived from those that are,
    /// using the Earth's values where there is nothing to derive them from.
    /// # Errors
    ///
    /// - `Error::ConflictingArguments` if both `semi_minor` and `inverse_f`
    ///   are given.
    /// - `Error::MissingArgument` if `semi_minor` is given without
    ///   `semi_major`.
    /// - `Error::InvalidArgument` if an axis is not positive, `semi_minor`
    ///   is not less than `semi_major` or `inverse_f` is not greater than 1.
    ///
    /// # Examples
    /// ```
    /// use quick_georef::{Distance, Ellipsoid};
    ///
    /// let mars = Ellipsoid::resolve(Some("3396.19 km".parse().unwrap()), None, Some(169.894)).unwrap();
    /// assert_eq!(169.894, mars.inverse_flattening());
    ///
    /// let a = Distance::metres(2.0);
    /// let b = Distance::metres(1.0);
    /// assert!(Ellipsoid::resolve(Some(a), Some(b), Some(2.0)).is_err());
    /// ```
    pub fn resolve(
        semi_major: Option<Distance>,
        semi_minor: Option<Distance>,
        inverse_f: Option<f64>,
    ) -> Result<Self> {
        let geoid = match (semi_major, semi_minor, inverse_f) {
            (_, Some(_), Some(_)) => {
                return Err(Error::ConflictingArguments(
                    "Can not specify both semi-minor axis and flattening".to_owned(),
                ))
            }
            (a, None, Some(inverse_f)) => {
                if !(inverse_f.is_finite() && inverse_f > 1.0) {
                    return Err(Error::InvalidArgument(format!(
                        "Inverse flattening must be greater than 1, not {inverse_f}"
                    )));
                }
                let a = a.unwrap_or(Distance::metres(wgs84::A.0));
                validate_axis("Semi-major", a)?;
                Self::new(a, inverse_f)
            }
            (None, Some(_), None) => {
                return Err(Error::MissingArgument(
                    "Can not specify semi-minor axis without semi-major axis".to_owned(),
                ))
            }
            (Some(a), Some(b), None) => {
                validate_axis("Semi-major", a)?;
                validate_axis("Semi-minor", b)?;
                let (a_metres, b_metres) = (a.to_metres(), b.to_metres());
                if a_metres.0 <= b_metres.0 {
                    return Err(Error::InvalidArgument(
                        "Semi-minor axis must be less than semi-major axis".to_owned(),
                    ));
                }
                Self {
                    a,
                    b,
                    inverse_f: ellipsoid::calculate_inverse_flattening(a_metres, b_metres),
                }
            }
            (Some(a), None, None) => {
                validate_axis("Semi-major", a)?;
                Self::new(a, wgs84::INVERSE_F)
            }
            (None, None, None) => Self::default(),
        };
        tracing::debug!(
            a = %geoid.a,
            b = %geoid.b,
            inverse_f = geoid.inverse_f,
            "resolved ellipsoid"
        );
        Ok(geoid)
    }

    /// The Semimajor axis of the ellipsoid, in the unit it was given in.
    #[must_use]
    pub const fn semi_major(&self) -> Distance {
        self.a
    }

    /// The Semiminor axis of the ellipsoid, in the unit it was given or
    /// derived in.
    #[must_use]
    pub const fn semi_minor(&self) -> Distance {
        self.b
    }

    /// The Semimajor axis of the ellipsoid in metres.
    #[must_use]
    pub fn a(&self) -> Metres {
        self.a.to_metres()
    }

    /// The Semiminor axis of the ellipsoid in metres.
    #[must_use]
    pub fn b(&self) -> Metres {
        self.b.to_metres()
    }

    /// The inverse flattening of the ellipsoid.
    #[must_use]
    pub const fn inverse_flattening(&self) -> f64 {
        self.inverse_f
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub fn flattening(&self) -> f64 {
        ellipsoid::calculate_flattening(self.inverse_f)
    }
}

impl Default for Ellipsoid {
    /// The Earth's parameters, taken as given rather than derived from each
    /// other.
    fn default() -> Self {
        Self {
            a: Distance::metres(wgs84::A.0),
            b: Distance::metres(wgs84::B.0),
            inverse_f: wgs84::INVERSE_F,
        }
    }
}

/// The summary printed after georeferencing, e.g.
/// `Equatorial radius: 6378137.00 m (1 R⊕)`.
impl fmt::Display for Ellipsoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Equatorial radius: {:.2} m ({} R⊕)",
            self.a().0,
            self.a.in_unit(LengthUnit::EarthRadius)
        )?;
        writeln!(
            f,
            "Polar radius: {:.2} m ({} R⊕P)",
            self.b().0,
            self.b.in_unit(LengthUnit::EarthPolarRadius)
        )?;
        write!(
            f,
            "Flattening: 1:{}",
            sidecar::format::format_real(self.inverse_f)
        )
    }
}

fn validate_axis(name: &str, axis: Distance) -> Result<()> {
    let metres = axis.to_metres().0;
    if metres.is_finite() && metres > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "{name} axis must be a positive distance, not {axis}"
        )))
    }
}

/// The result of georeferencing an image.
#[derive(Debug)]
pub struct Georeference {
    /// The size of the image.
    pub extent: ImageExtent,
    /// The transform from pixel to geographic coordinates.
    pub transform: Transform,
    /// The outcome of each enabled sidecar writer, in the order they ran.
    pub sidecars: Vec<core::result::Result<SidecarOutcome, SidecarError>>,
}

impl Georeference {
    /// The sidecar writers that failed.
    pub fn failures(&self) -> impl Iterator<Item = &SidecarError> {
        self.sidecars.iter().filter_map(|result| result.as_ref().err())
    }

    /// Whether every enabled sidecar writer either wrote its file or
    /// skipped it with a notice.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Georeference the image at `path` as spanning the whole globe.
/// * `path` - the image file.
/// * `geoid` - the ellipsoid of the coordinate system.
/// * `options` - the sidecar files to write.
/// * `reader` - reads the pixel dimensions of the image.
///
/// A sidecar writer that fails does not stop the others: its error is
/// recorded in the returned `Georeference`.
/// # Errors
///
/// `Error::UnreadableFile` if the image dimensions cannot be read, in which
/// case no sidecar file is written.
pub fn georeference<R: DimensionReader>(
    path: &Path,
    geoid: &Ellipsoid,
    options: &OutputOptions,
    reader: &R,
) -> Result<Georeference> {
    let extent = reader.read_dimensions(path)?;
    let transform = Transform::from_extent(extent);
    tracing::debug!(
        width = extent.width,
        height = extent.height,
        pixel_size_x = transform.pixel_size_x(),
        pixel_size_y = transform.pixel_size_y(),
        "calculated transform"
    );
    let sidecars = sidecar::write_sidecars(path, geoid, &transform, options);
    Ok(Georeference {
        extent,
        transform,
        sidecars,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_ellipsoid_defaults() {
        let geoid = Ellipsoid::resolve(None, None, None).unwrap();
        assert_eq!(Ellipsoid::default(), geoid);
        assert_eq!(wgs84::A, geoid.a());
        assert_eq!(wgs84::B, geoid.b());
        assert_eq!(wgs84::INVERSE_F, geoid.inverse_flattening());
        assert_eq!(1.0 / wgs84::INVERSE_F, geoid.flattening());
    }

    #[test]
    fn test_ellipsoid_semi_major_only() {
        for m in [1.0, 1737.4e3, 6_378_137.0, 71_492e3] {
            let geoid = Ellipsoid::resolve(Some(Distance::metres(m)), None, None).unwrap();
            assert_eq!(wgs84::INVERSE_F, geoid.inverse_flattening());
            assert_eq!(Metres(m * (1.0 - 1.0 / wgs84::INVERSE_F)), geoid.b());
        }
    }

    #[test]
    fn test_ellipsoid_semi_major_and_flattening() {
        for (m, inverse_f) in [(6_378_137.0, 298.257_223_563), (3_396_190.0, 169.894), (1.0, 1.5)] {
            let geoid =
                Ellipsoid::resolve(Some(Distance::metres(m)), None, Some(inverse_f)).unwrap();
            assert_eq!(Metres(m * (1.0 - 1.0 / inverse_f)), geoid.b());

            let derived = ellipsoid::calculate_inverse_flattening(geoid.a(), geoid.b());
            assert!(is_within_tolerance(inverse_f, derived, 1e-9 * inverse_f));
        }
    }

    #[test]
    fn test_ellipsoid_flattening_only_uses_earth_radius() {
        let geoid = Ellipsoid::resolve(None, None, Some(300.0)).unwrap();
        assert_eq!(wgs84::A, geoid.a());
        assert_eq!(Metres(wgs84::A.0 * (1.0 - 1.0 / 300.0)), geoid.b());
    }

    #[test]
    fn test_ellipsoid_semi_major_and_minor() {
        let a: Distance = "6378.137 km".parse().unwrap();
        let b: Distance = "6356752.3142 m".parse().unwrap();
        let geoid = Ellipsoid::resolve(Some(a), Some(b), None).unwrap();
        assert_eq!(a, geoid.semi_major());
        assert_eq!(b, geoid.semi_minor());
        assert!(is_within_tolerance(
            298.257_223_563,
            geoid.inverse_flattening(),
            1e-5
        ));
    }

    #[test]
    fn test_ellipsoid_derived_minor_keeps_unit() {
        let a = Distance::new(1.0, LengthUnit::EarthRadius);
        let geoid = Ellipsoid::resolve(Some(a), None, Some(2.0)).unwrap();
        assert_eq!(Distance::new(0.5, LengthUnit::EarthRadius), geoid.semi_minor());
    }

    #[test]
    fn test_ellipsoid_errors() {
        let a = Some(Distance::metres(2.0));
        let b = Some(Distance::metres(1.0));

        assert!(matches!(
            Ellipsoid::resolve(a, b, Some(2.0)),
            Err(Error::ConflictingArguments(_))
        ));
        assert!(matches!(
            Ellipsoid::resolve(None, b, Some(2.0)),
            Err(Error::ConflictingArguments(_))
        ));
        assert!(matches!(
            Ellipsoid::resolve(None, b, None),
            Err(Error::MissingArgument(_))
        ));
        assert!(matches!(
            Ellipsoid::resolve(b, a, None),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Ellipsoid::resolve(a, a, None),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Ellipsoid::resolve(a, Some(Distance::metres(-1.0)), None),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Ellipsoid::resolve(Some(Distance::metres(0.0)), None, None),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Ellipsoid::resolve(a, None, Some(1.0)),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Ellipsoid::resolve(a, None, Some(0.5)),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_ellipsoid_summary() {
        let expected = "Equatorial radius: 6378137.00 m (1 R⊕)
Polar radius: 6356752.31 m (1 R⊕P)
Flattening: 1:298.257223563";
        assert_eq!(expected, Ellipsoid::default().to_string());
    }

    #[test]
    fn test_ellipsoid_traits() {
        let geoid = Ellipsoid::default();
        let geoid_clone = geoid;
        assert!(geoid_clone == geoid);

        println!("Ellipsoid: {:?}", geoid);
    }
}
