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

//! Error types for resolving the ellipsoid, reading the image and writing
//! sidecar files.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `Error`.
pub type Result<T> = core::result::Result<T, Error>;

/// Fatal errors: any of these stops the run before a sidecar file is written.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Conflicting arguments: {0}")]
    ConflictingArguments(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Could not read {}", path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// A failure to write one sidecar file. The other writers still run.
#[derive(Debug, Error)]
pub enum SidecarError {
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot derive a worldfile name from non UTF-8 path {}", .0.display())]
    NonUtf8Path(PathBuf),
}

/// The reasons a string is not a distance.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseDistanceError {
    #[error("Must be a distance, no magnitude in '{0}'")]
    MissingMagnitude(String),

    #[error("Must be a distance, no unit in '{0}'")]
    MissingUnit(String),

    #[error("Must be a distance, unknown length unit '{0}'")]
    UnknownUnit(String),
}
