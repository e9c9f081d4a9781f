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

//! The sidecar module writes the files GIS tools read to georeference an
//! image: a GDAL `.aux.xml` file, a worldfile and a `.prj` file.
//!
//! Each writer opens, writes and closes its own file. A failure in one
//! writer does not stop the others.

pub mod format;

use crate::error::SidecarError;
use crate::options::OutputOptions;
use crate::transform::Transform;
use crate::Ellipsoid;
use core::fmt;
use format::{format_fixed, format_real, format_scientific};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// The types of sidecar file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidecarKind {
    AuxFile,
    Worldfile,
    PrjFile,
}

/// What a sidecar writer did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SidecarOutcome {
    /// The sidecar file was written to `path`.
    Written { kind: SidecarKind, path: PathBuf },
    /// The sidecar file was not written, for `reason`.
    Skipped { kind: SidecarKind, reason: String },
}

impl SidecarOutcome {
    #[must_use]
    pub const fn kind(&self) -> SidecarKind {
        match self {
            Self::Written { kind, .. } | Self::Skipped { kind, .. } => *kind,
        }
    }
}

impl fmt::Display for SidecarOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Written { kind, path } => {
                let description = match kind {
                    SidecarKind::AuxFile => "sidecar file",
                    SidecarKind::Worldfile => "sidecar worldfile",
                    SidecarKind::PrjFile => "projection sidecar file",
                };
                write!(f, "Wrote {description} {}", path.display())
            }
            Self::Skipped { reason, .. } => f.write_str(reason),
        }
    }
}

/// The path of the aux file: `path` with `.aux.xml` appended.
/// # Examples
/// ```
/// use quick_georef::sidecar::aux_file_path;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(PathBuf::from("grid.tif.aux.xml"), aux_file_path(Path::new("grid.tif")));
/// ```
#[must_use]
pub fn aux_file_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".aux.xml");
    PathBuf::from(name)
}

/// The path of the worldfile: `path` with its last character replaced by `w`.
/// # Errors
///
/// `SidecarError::NonUtf8Path` if `path` is not valid UTF-8.
pub fn worldfile_path(path: &Path) -> Result<PathBuf, SidecarError> {
    let name = path
        .to_str()
        .ok_or_else(|| SidecarError::NonUtf8Path(path.to_path_buf()))?;
    let mut chars = name.chars();
    chars.next_back();
    Ok(PathBuf::from(format!("{}w", chars.as_str())))
}

/// The path of the `.prj` file: `path` with its extension replaced by `prj`,
/// or with `.prj` appended if it has no extension.
/// # Examples
/// ```
/// use quick_georef::sidecar::prj_file_path;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(PathBuf::from("maps/grid.prj"), prj_file_path(Path::new("maps/grid.tif")));
/// assert_eq!(PathBuf::from("maps.v2/grid.prj"), prj_file_path(Path::new("maps.v2/grid")));
/// ```
#[must_use]
pub fn prj_file_path(path: &Path) -> PathBuf {
    path.with_extension("prj")
}

/// The WKT definition of a geographic coordinate system on `ellipsoid`.
#[must_use]
pub fn render_wkt(ellipsoid: &Ellipsoid) -> String {
    format!(
        r#"GEOGCS["unnamed ellipse",DATUM["unknown",SPHEROID["unnamed",{},{}]],PRIMEM["Greenwich",0],UNIT["degree",0.0174532925199433]]"#,
        format_real(ellipsoid.a().0),
        format_real(ellipsoid.inverse_flattening())
    )
}

/// The contents of a GDAL PAM `.aux.xml` file.
/// # Examples
/// ```
/// use quick_georef::sidecar::render_aux_xml;
/// use quick_georef::transform::{ImageExtent, Transform};
/// use quick_georef::Ellipsoid;
///
/// let transform = Transform::from_extent(ImageExtent::new(360, 180));
/// let xml = render_aux_xml(&Ellipsoid::default(), &transform);
/// assert!(xml.contains("<GeoTransform> -1.8000000000000000e+02,  1.0,  "));
/// ```
#[must_use]
pub fn render_aux_xml(ellipsoid: &Ellipsoid, transform: &Transform) -> String {
    let [origin_x, pixel_x, row_rotation, origin_y, column_rotation, pixel_y] =
        transform.geo_transform();
    format!(
        "<PAMDataset>\n  <SRS>{}</SRS>\n  <GeoTransform> {},  {},  {},  {},  {}, {}</GeoTransform>\n</PAMDataset>\n",
        render_wkt(ellipsoid),
        format_scientific(origin_x, 16),
        format_real(pixel_x),
        format_scientific(row_rotation, 16),
        format_scientific(origin_y, 16),
        format_scientific(column_rotation, 16),
        format_fixed(pixel_y, 7)
    )
}

/// The contents of a worldfile: one value per line.
#[must_use]
pub fn render_worldfile(transform: &Transform) -> String {
    let (centre_lon, centre_lat) = transform.top_left_pixel_centre();
    [
        transform.pixel_size_x(),
        0.0,
        0.0,
        transform.pixel_size_y(),
        centre_lon.0,
        centre_lat.0,
    ]
    .iter()
    .map(|&value| format_real(value) + "\n")
    .collect()
}

fn write_file(
    kind: SidecarKind,
    path: PathBuf,
    contents: &str,
) -> Result<SidecarOutcome, SidecarError> {
    match fs::write(&path, contents) {
        Ok(()) => {
            tracing::info!(?kind, path = %path.display(), "wrote sidecar");
            Ok(SidecarOutcome::Written { kind, path })
        }
        Err(source) => Err(SidecarError::Io { path, source }),
    }
}

/// Write `<path>.aux.xml`.
/// # Errors
///
/// `SidecarError::Io` if the file cannot be written.
pub fn write_aux_file(
    path: &Path,
    ellipsoid: &Ellipsoid,
    transform: &Transform,
) -> Result<SidecarOutcome, SidecarError> {
    write_file(
        SidecarKind::AuxFile,
        aux_file_path(path),
        &render_aux_xml(ellipsoid, transform),
    )
}

/// Write the worldfile of `path`.
///
/// An image whose name already ends in `w` would share its name with its
/// worldfile, so the worldfile is skipped.
/// # Errors
///
/// `SidecarError::NonUtf8Path` if `path` is not valid UTF-8 or
/// `SidecarError::Io` if the file cannot be written.
pub fn write_worldfile(path: &Path, transform: &Transform) -> Result<SidecarOutcome, SidecarError> {
    let worldfile = worldfile_path(path)?;
    if worldfile == path {
        tracing::debug!(path = %path.display(), "worldfile would overwrite the image");
        return Ok(SidecarOutcome::Skipped {
            kind: SidecarKind::Worldfile,
            reason: format!(
                "Could not write worldfile as {} already ends in 'w' and would be overwritten",
                path.display()
            ),
        });
    }
    write_file(SidecarKind::Worldfile, worldfile, &render_worldfile(transform))
}

/// Write the `.prj` file of `path`.
/// # Errors
///
/// `SidecarError::Io` if the file cannot be written.
pub fn write_prj_file(path: &Path, ellipsoid: &Ellipsoid) -> Result<SidecarOutcome, SidecarError> {
    write_file(
        SidecarKind::PrjFile,
        prj_file_path(path),
        &(render_wkt(ellipsoid) + "\n"),
    )
}

/// Run every writer enabled in `options`, in the order aux file, worldfile,
/// `.prj` file.
pub fn write_sidecars(
    path: &Path,
    ellipsoid: &Ellipsoid,
    transform: &Transform,
    options: &OutputOptions,
) -> Vec<Result<SidecarOutcome, SidecarError>> {
    let mut results = Vec::with_capacity(3);
    if options.aux_file {
        results.push(write_aux_file(path, ellipsoid, transform));
    }
    if options.worldfile {
        results.push(write_worldfile(path, transform));
    }
    if options.prj_file {
        results.push(write_prj_file(path, ellipsoid));
    }
    for err in results.iter().filter_map(|result| result.as_ref().err()) {
        tracing::debug!(%err, "sidecar not written");
    }
    results
}
