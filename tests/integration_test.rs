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

// extern crate we're testing, same as any other code would do.
extern crate quick_georef;

use quick_georef::{
    georeference, DimensionReader, Distance, Ellipsoid, Error, ImageExtent, ImageFileReader,
    OutputOptions, SidecarKind, SidecarOutcome,
};
use std::fs;
use std::path::Path;

/// A `DimensionReader` for images that need not exist.
struct FixedSize(ImageExtent);

impl DimensionReader for FixedSize {
    fn read_dimensions(&self, _path: &Path) -> quick_georef::Result<ImageExtent> {
        Ok(self.0)
    }
}

#[test]
fn test_georeference_default_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.tif");
    image::RgbImage::new(360, 180).save(&path).unwrap();

    let result = georeference(
        &path,
        &Ellipsoid::default(),
        &OutputOptions::default(),
        &ImageFileReader,
    )
    .unwrap();
    assert_eq!(ImageExtent::new(360, 180), result.extent);
    assert_eq!(1, result.sidecars.len());
    assert_eq!(0, result.failures().count());
    assert!(result.is_complete());

    let aux = fs::read_to_string(dir.path().join("grid.tif.aux.xml")).unwrap();
    let geo_transform = aux
        .lines()
        .find(|line| line.contains("<GeoTransform>"))
        .unwrap();
    assert_eq!(
        "  <GeoTransform> -1.8000000000000000e+02,  1.0,  0.0000000000000000e+00,  9.0000000000000000e+01,  0.0000000000000000e+00, -1.0000000</GeoTransform>",
        geo_transform
    );
    assert!(aux.contains(r#"SPHEROID["unnamed",6378137.0,298.257223563]"#));

    assert!(!dir.path().join("grid.tiw").exists());
    assert!(!dir.path().join("grid.prj").exists());
}

#[test]
fn test_georeference_all_sidecars() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mars.png");
    let a: Distance = "3396190 m".parse().unwrap();
    let geoid = Ellipsoid::resolve(Some(a), None, Some(169.894)).unwrap();
    let options = OutputOptions::resolve(None, None, Some(true));

    let result = georeference(&path, &geoid, &options, &FixedSize(ImageExtent::new(720, 360)))
        .unwrap();
    let kinds: Vec<SidecarKind> = result
        .sidecars
        .iter()
        .map(|outcome| outcome.as_ref().unwrap().kind())
        .collect();
    assert_eq!(
        vec![SidecarKind::AuxFile, SidecarKind::Worldfile, SidecarKind::PrjFile],
        kinds
    );

    let worldfile = fs::read_to_string(dir.path().join("mars.pnw")).unwrap();
    assert_eq!("0.5\n0.0\n0.0\n-0.5\n-179.75\n89.75\n", worldfile);

    let prj = fs::read_to_string(dir.path().join("mars.prj")).unwrap();
    assert_eq!(
        "GEOGCS[\"unnamed ellipse\",DATUM[\"unknown\",SPHEROID[\"unnamed\",3396190.0,169.894]],PRIMEM[\"Greenwich\",0],UNIT[\"degree\",0.0174532925199433]]\n",
        prj
    );

    let aux = fs::read_to_string(dir.path().join("mars.png.aux.xml")).unwrap();
    assert!(aux.contains(", -0.5000000</GeoTransform>"));
}

#[test]
fn test_worldfile_name_collision() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.tiw");
    let options = OutputOptions::resolve(Some(false), Some(true), None);

    let result = georeference(
        &path,
        &Ellipsoid::default(),
        &options,
        &FixedSize(ImageExtent::new(3600, 1800)),
    )
    .unwrap();
    assert_eq!(0, result.failures().count());
    assert_eq!(0.1, result.transform.pixel_size_x());
    assert_eq!(-0.1, result.transform.pixel_size_y());

    let outcome = result.sidecars[0].as_ref().unwrap();
    assert!(matches!(outcome, SidecarOutcome::Skipped { .. }));
    assert!(!path.exists());
    assert!(dir.path().join("map.prj").exists());
}

#[test]
fn test_unreadable_image_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.tif");
    let options = OutputOptions::resolve(None, Some(true), None);

    let result = georeference(&path, &Ellipsoid::default(), &options, &ImageFileReader);
    assert!(matches!(result, Err(Error::UnreadableFile { .. })));
    assert_eq!(0, fs::read_dir(dir.path()).unwrap().count());
}

#[test]
fn test_failed_sidecar_leaves_run_incomplete() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.tif");
    fs::create_dir(dir.path().join("grid.prj")).unwrap();
    let options = OutputOptions::resolve(None, Some(true), None);

    let result = georeference(
        &path,
        &Ellipsoid::default(),
        &options,
        &FixedSize(ImageExtent::new(360, 180)),
    )
    .unwrap();
    assert!(!result.is_complete());
    assert_eq!(1, result.failures().count());
    assert!(dir.path().join("grid.tif.aux.xml").is_file());
    assert!(dir.path().join("grid.tiw").is_file());
}
