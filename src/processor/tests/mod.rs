//! Processor integration tests


use std::path::PathBuf;
use tempfile::TempDir;

/// Write an input file into the test directory and return its path
pub fn write_input(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// A minimal well-formed export file: metadata rows, then data rows
pub fn sample_file(project: &str, data_rows: &[&str]) -> Vec<u8> {
    let mut content = format!(
        "REPORT;;;;\n{project};;;;\ngenerated;;;;\nSERVICIO;DESCRIPCION;TIPO;CTD;OBS\n"
    );
    for row in data_rows {
        content.push_str(row);
        content.push('\n');
    }
    content.into_bytes()
}
