//! A unit is one subdirectory of `data/` paired with its expected
//! `<name>.yaml` and `<name>.txt` source files.

use std::fmt;
use std::path::PathBuf;

use super::layout::{TXT_EXT, YAML_EXT};

/// One candidate subdirectory of the data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    name: String,
    dir: PathBuf,
}

impl Unit {
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            dir: dir.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn yaml_path(&self) -> PathBuf {
        self.dir.join(format!("{}.{}", self.name, YAML_EXT))
    }

    pub fn txt_path(&self) -> PathBuf {
        self.dir.join(format!("{}.{}", self.name, TXT_EXT))
    }

    pub fn has_yaml(&self) -> bool {
        self.yaml_path().exists()
    }

    pub fn has_txt(&self) -> bool {
        self.txt_path().exists()
    }

    /// Which of the two expected source files are present.
    ///
    /// Presence means the path exists; a present-but-unreadable path is
    /// surfaced later as a per-unit read failure, not as a missing file.
    pub fn status(&self) -> UnitStatus {
        let missing = MissingFiles {
            yaml: !self.has_yaml(),
            txt: !self.has_txt(),
        };
        if missing.any() {
            UnitStatus::Missing(missing)
        } else {
            UnitStatus::Ready
        }
    }
}

/// Whether a unit has both source files or is skipped, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitStatus {
    Ready,
    Missing(MissingFiles),
}

/// Which expected files a skipped unit lacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingFiles {
    pub yaml: bool,
    pub txt: bool,
}

impl MissingFiles {
    pub fn any(&self) -> bool {
        self.yaml || self.txt
    }
}

impl fmt::Display for MissingFiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.yaml, self.txt) {
            (true, true) => write!(f, "yaml and txt"),
            (true, false) => write!(f, "yaml"),
            (false, true) => write!(f, "txt"),
            (false, false) => Ok(()),
        }
    }
}
