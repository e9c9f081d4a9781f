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

//! The options module decides which sidecar files are written.

/// The sidecar files to write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    /// Write `<FILE>.aux.xml`.
    pub aux_file: bool,
    /// Write the worldfile.
    pub worldfile: bool,
    /// Write the `.prj` file.
    pub prj_file: bool,
}

impl OutputOptions {
    /// Resolve the options from the user's choices, `None` where the user did
    /// not choose.
    ///
    /// The aux file is written unless disabled. The worldfile and the `.prj`
    /// file are off by default but enabling either one enables the other,
    /// unless the other was set explicitly.
    /// # Examples
    /// ```
    /// use quick_georef::options::OutputOptions;
    ///
    /// let options = OutputOptions::resolve(None, Some(true), None);
    /// assert!(options.aux_file);
    /// assert!(options.worldfile);
    /// assert!(options.prj_file);
    /// ```
    #[must_use]
    pub fn resolve(aux_file: Option<bool>, worldfile: Option<bool>, prj_file: Option<bool>) -> Self {
        let worldfile = worldfile.unwrap_or(prj_file == Some(true));
        Self {
            aux_file: aux_file.unwrap_or(true),
            worldfile,
            prj_file: prj_file.unwrap_or(worldfile),
        }
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self::resolve(None, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = OutputOptions::default();
        assert!(options.aux_file);
        assert!(!options.worldfile);
        assert!(!options.prj_file);
    }

    #[test]
    fn test_prj_file_enables_worldfile() {
        let options = OutputOptions::resolve(None, None, Some(true));
        assert!(options.worldfile);
        assert!(options.prj_file);
    }

    #[test]
    fn test_explicit_choices_are_kept() {
        let options = OutputOptions::resolve(Some(false), Some(true), Some(false));
        assert!(!options.aux_file);
        assert!(options.worldfile);
        assert!(!options.prj_file);

        let options = OutputOptions::resolve(None, Some(false), Some(true));
        assert!(!options.worldfile);
        assert!(options.prj_file);

        let options = OutputOptions::resolve(None, Some(false), None);
        assert!(!options.worldfile);
        assert!(!options.prj_file);

        let options = OutputOptions::resolve(None, None, Some(false));
        assert!(!options.worldfile);
        assert!(!options.prj_file);
    }
}
