#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::{TempDir, tempdir};

pub const CANONICAL_HEADER: [&str; 7] = [
    "brand_name",
    "model_name",
    "colour_name",
    "gb_spec_name",
    "network_name",
    "grade_name",
    "condition_name",
];

/// Returns the absolute path to a fixture under `tests/data`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// Scratch directory for input and combination files, removed on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.join(name);
        fs::write(&path, contents).expect("write temp file");
        path
    }

    /// Writes a product file, joining `header` and `rows` with `delimiter`.
    pub fn write_products(
        &self,
        name: &str,
        delimiter: char,
        header: &[&str],
        rows: &[Vec<&str>],
    ) -> PathBuf {
        let separator = delimiter.to_string();
        let mut contents = header.join(separator.as_str());
        contents.push('\n');
        for row in rows {
            contents.push_str(&row.join(separator.as_str()));
            contents.push('\n');
        }
        self.write(name, &contents)
    }
}

/// Reads a combinations file back as rows of cells, header included.
pub fn read_combinations(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .expect("open combinations file");
    reader
        .records()
        .map(|record| {
            record
                .expect("combinations record")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}
