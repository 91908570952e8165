//! Configuration for interactive sessions

use crate::display::DisplayFormat;
use std::path::{Path, PathBuf};

/// Settings for an interactive [`Session`](crate::Session)
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Directory that relative save names are resolved against
    pub output_dir: PathBuf,
    /// How results are printed
    pub display: DisplayFormat,
    /// Create missing directories when saving
    pub create_dirs: bool,
}

impl SessionConfig {
    /// Create config saving into `output_dir`
    pub fn with_output_dir<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Set the result display format
    pub fn with_display(mut self, display: DisplayFormat) -> Self {
        self.display = display;
        self
    }

    /// Set whether missing directories are created when saving
    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    /// Resolve a user-entered file name to the path it is saved at
    pub fn resolve(&self, name: &str) -> PathBuf {
        let path = Path::new(name);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.output_dir.join(path)
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            display: DisplayFormat::Mapping,
            create_dirs: true,
        }
    }
}
