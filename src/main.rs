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

//! Command line front end: georeference an image as spanning the whole globe.

use anyhow::Result;
use clap::Parser;
use quick_georef::{georeference, Distance, Ellipsoid, ImageFileReader, OutputOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "quick-georef", version)]
#[command(about = "Write sidecar files georeferencing an image as a global equirectangular map")]
struct Args {
    /// The image to georeference
    file: PathBuf,

    /// Semi-major axis (Equatorial radius), e.g. "6378137.0 m".
    /// Defaults to Earth's radius of 6378137.0 m
    #[arg(short = 'a', long, value_name = "DISTANCE")]
    semi_major: Option<Distance>,

    /// Semi-minor axis (Polar radius).
    /// Defaults to being calculated from semi-major axis and flattening
    #[arg(short = 'b', long, value_name = "DISTANCE")]
    semi_minor: Option<Distance>,

    /// Inverse flattening.
    /// Defaults to Earth's value of 298.257223563 or is calculated from the
    /// semi-major and semi-minor axes
    #[arg(short = 'f', long, value_name = "N", allow_negative_numbers = true)]
    flattening: Option<f64>,

    /// Create .aux.xml (on by default)
    #[arg(long, overrides_with = "no_auxfile")]
    auxfile: bool,

    /// Do not create .aux.xml
    #[arg(long, overrides_with = "auxfile")]
    no_auxfile: bool,

    /// Create worldfile, replacing the last letter of the file name with w
    /// (off by default unless prjfile is on)
    #[arg(long, overrides_with = "no_worldfile")]
    worldfile: bool,

    /// Do not create worldfile
    #[arg(long, overrides_with = "worldfile")]
    no_worldfile: bool,

    /// Create .prj (off by default unless worldfile is on)
    #[arg(long, overrides_with = "no_prjfile")]
    prjfile: bool,

    /// Do not create .prj
    #[arg(long, overrides_with = "prjfile")]
    no_prjfile: bool,
}

/// `Some(true)` for `--flag`, `Some(false)` for `--no-flag`, `None` for neither.
const fn choice(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl Args {
    fn output_options(&self) -> OutputOptions {
        OutputOptions::resolve(
            choice(self.auxfile, self.no_auxfile),
            choice(self.worldfile, self.no_worldfile),
            choice(self.prjfile, self.no_prjfile),
        )
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Log to stderr, stdout is for the tool's own messages
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let geoid = Ellipsoid::resolve(args.semi_major, args.semi_minor, args.flattening)?;
    let options = args.output_options();
    tracing::debug!(?options, file = %args.file.display(), "georeferencing");

    let result = georeference(&args.file, &geoid, &options, &ImageFileReader)?;
    for outcome in result.sidecars.iter().flatten() {
        println!("{outcome}");
    }
    println!("{geoid}");

    for err in result.failures() {
        eprintln!("Error: {err}");
    }
    Ok(if result.is_complete() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
