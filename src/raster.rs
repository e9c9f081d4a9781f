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

//! The raster module reads the pixel dimensions of an image file.

use crate::error::{Error, Result};
use crate::transform::ImageExtent;
use std::path::Path;

/// Reads the size of an image without decoding its pixels.
pub trait DimensionReader {
    /// Read the width and height of the image at `path`.
    /// # Errors
    ///
    /// `Error::UnreadableFile` if the image cannot be read or has no pixels.
    fn read_dimensions(&self, path: &Path) -> Result<ImageExtent>;
}

/// A `DimensionReader` for the image formats supported by the `image` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageFileReader;

impl DimensionReader for ImageFileReader {
    fn read_dimensions(&self, path: &Path) -> Result<ImageExtent> {
        let (width, height) =
            image::image_dimensions(path).map_err(|source| Error::UnreadableFile {
                path: path.to_path_buf(),
                source: Box::new(source),
            })?;
        if width == 0 || height == 0 {
            return Err(Error::UnreadableFile {
                path: path.to_path_buf(),
                source: format!("image is {width}x{height} pixels").into(),
            });
        }
        Ok(ImageExtent::new(width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_png_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("globe.png");
        image::GrayImage::new(36, 18).save(&path).unwrap();

        let extent = ImageFileReader.read_dimensions(&path).unwrap();
        assert_eq!(ImageExtent::new(36, 18), extent);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.png");
        let result = ImageFileReader.read_dimensions(&path);
        assert!(matches!(result, Err(Error::UnreadableFile { .. })));
    }

    #[test]
    fn test_read_not_an_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, "not an image").unwrap();
        let result = ImageFileReader.read_dimensions(&path);
        assert!(matches!(result, Err(Error::UnreadableFile { .. })));
    }
}
