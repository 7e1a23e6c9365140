//! Common test utilities for Ultrac integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A test project for integration tests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new empty test project (no data/ directory)
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a test project with data/common.yaml in place
    pub fn with_preamble(preamble: &str) -> Self {
        let project = Self::new();
        project.write_file("data/common.yaml", preamble);
        project
    }

    /// Create a unit directory with optional yaml and txt sources
    pub fn add_unit(&self, name: &str, yaml: Option<&str>, txt: Option<&str>) -> PathBuf {
        let unit_dir = self.path.join("data").join(name);
        std::fs::create_dir_all(&unit_dir).expect("Failed to create unit directory");
        if let Some(content) = yaml {
            std::fs::write(unit_dir.join(format!("{name}.yaml")), content)
                .expect("Failed to write unit yaml");
        }
        if let Some(content) = txt {
            std::fs::write(unit_dir.join(format!("{name}.txt")), content)
                .expect("Failed to write unit txt");
        }
        unit_dir
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        self.write_file_bytes(path, content.as_bytes());
    }

    /// Write raw bytes in the project
    pub fn write_file_bytes(&self, path: &str, content: &[u8]) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Read a file from the project as raw bytes
    pub fn read_file_bytes(&self, path: &str) -> Vec<u8> {
        let file_path = self.path.join(path);
        std::fs::read(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_creation() {
        let project = TestProject::new();
        assert!(project.path.exists());
        assert!(!project.file_exists("data"));
    }

    #[test]
    fn test_project_with_preamble() {
        let project = TestProject::with_preamble("a: 1\n");
        assert_eq!(project.read_file("data/common.yaml"), "a: 1\n");
    }

    #[test]
    fn test_project_add_unit() {
        let project = TestProject::with_preamble("a: 1\n");
        project.add_unit("foo", Some("b: 2\n"), Some("hello"));

        assert!(project.file_exists("data/foo/foo.yaml"));
        assert!(project.file_exists("data/foo/foo.txt"));
    }

    #[test]
    fn test_project_add_partial_unit() {
        let project = TestProject::with_preamble("a: 1\n");
        project.add_unit("bar", None, Some("hello"));

        assert!(!project.file_exists("data/bar/bar.yaml"));
        assert!(project.file_exists("data/bar/bar.txt"));
    }
}
