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

//! The transform module maps an image's pixel grid onto the whole globe.
//!
//! The image is assumed to cover longitudes -180° to 180° and latitudes
//! -90° to 90°, with its top left corner at (90°N, 180°W).

use angle_sc::Degrees;

/// The longitude of the top left corner of the image.
pub const ORIGIN_LONGITUDE: Degrees = Degrees(-180.0);

/// The latitude of the top left corner of the image.
pub const ORIGIN_LATITUDE: Degrees = Degrees(90.0);

/// The size of an image in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageExtent {
    pub width: u32,
    pub height: u32,
}

impl ImageExtent {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// The affine transform from pixel to geographic coordinates for an image
/// spanning the whole globe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Degrees of longitude per pixel column.
    pixel_size_x: f64,
    /// Degrees of latitude per pixel row, negative: rows run southwards.
    pixel_size_y: f64,
}

impl Transform {
    /// Calculate the `Transform` of an image.
    /// * `extent` - the image size, both dimensions must be non zero.
    /// # Examples
    /// ```
    /// use quick_georef::transform::{ImageExtent, Transform};
    ///
    /// let transform = Transform::from_extent(ImageExtent::new(3600, 1800));
    /// assert_eq!(0.1, transform.pixel_size_x());
    /// assert_eq!(-0.1, transform.pixel_size_y());
    /// ```
    #[must_use]
    pub fn from_extent(extent: ImageExtent) -> Self {
        Self {
            pixel_size_x: 360.0 / f64::from(extent.width),
            pixel_size_y: -180.0 / f64::from(extent.height),
        }
    }

    #[must_use]
    pub const fn pixel_size_x(&self) -> f64 {
        self.pixel_size_x
    }

    #[must_use]
    pub const fn pixel_size_y(&self) -> f64 {
        self.pixel_size_y
    }

    #[must_use]
    pub const fn origin_longitude(&self) -> Degrees {
        ORIGIN_LONGITUDE
    }

    #[must_use]
    pub const fn origin_latitude(&self) -> Degrees {
        ORIGIN_LATITUDE
    }

    /// The GDAL `GeoTransform` coefficients:
    /// origin x, pixel width, row rotation, origin y, column rotation,
    /// pixel height.
    #[must_use]
    pub const fn geo_transform(&self) -> [f64; 6] {
        [
            ORIGIN_LONGITUDE.0,
            self.pixel_size_x,
            0.0,
            ORIGIN_LATITUDE.0,
            0.0,
            self.pixel_size_y,
        ]
    }

    /// The longitude and latitude of the centre of the top left pixel,
    /// the reference point of a worldfile.
    #[must_use]
    pub fn top_left_pixel_centre(&self) -> (Degrees, Degrees) {
        (
            Degrees(ORIGIN_LONGITUDE.0 + self.pixel_size_x / 2.0),
            Degrees(ORIGIN_LATITUDE.0 + self.pixel_size_y / 2.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_one_degree_pixels() {
        let transform = Transform::from_extent(ImageExtent::new(360, 180));
        assert_eq!(1.0, transform.pixel_size_x());
        assert_eq!(-1.0, transform.pixel_size_y());
        assert_eq!(
            [-180.0, 1.0, 0.0, 90.0, 0.0, -1.0],
            transform.geo_transform()
        );

        let (lon, lat) = transform.top_left_pixel_centre();
        assert_eq!(-179.5, lon.0);
        assert_eq!(89.5, lat.0);
    }

    #[test]
    fn test_transform_non_square_pixels() {
        let transform = Transform::from_extent(ImageExtent::new(720, 90));
        assert_eq!(0.5, transform.pixel_size_x());
        assert_eq!(-2.0, transform.pixel_size_y());
        assert_eq!(-180.0, transform.origin_longitude().0);
        assert_eq!(90.0, transform.origin_latitude().0);
    }
}
