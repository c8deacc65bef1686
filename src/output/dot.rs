//! DOT graph output writer.

use super::{ensure_parent_dir, validate_path};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write DOT content to a file
///
/// **Public** - main entry point for graph output
///
/// The file can be turned into an image with Graphviz,
/// e.g. `dot -Tsvg graph.dot -o graph.svg`.
pub fn write_dot(dot_content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing DOT graph to: {}", output_path.display());

    validate_path(output_path)?;
    ensure_parent_dir(output_path)?;

    if let Some(ext) = output_path.extension() {
        if ext != "dot" && ext != "gv" {
            debug!("Warning: File does not have .dot extension: {}", output_path.display());
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(dot_content.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.write_all(b"\n").map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!("DOT graph written successfully ({} bytes)", dot_content.len() + 1);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    const SIMPLE_DOT: &str = "digraph \"g\" {\n    0 [label=\"main\"];\n}";

    #[test]
    fn test_write_dot() {
        let temp_file = NamedTempFile::new().unwrap();
        write_dot(SIMPLE_DOT, temp_file.path()).unwrap();

        let written = std::fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(written, format!("{}\n", SIMPLE_DOT));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/graph.dot");

        write_dot(SIMPLE_DOT, &nested_path).unwrap();

        assert!(nested_path.exists());
    }

    #[test]
    fn test_write_rejects_empty_path() {
        assert!(write_dot(SIMPLE_DOT, "").is_err());
    }
}
