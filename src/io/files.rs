//! File collaborators: reading operands and writing labelled results

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;

use crate::io::{parse_with, ParseOptions};
use crate::matrix::{Scalar, SparseMatrix};
use crate::{Error, Operation, Result};

/// Extension given to result files
pub const OUTPUT_EXTENSION: &str = "txt";

/// Reads and parses a matrix file without bounds validation
pub fn read_matrix<T: Scalar, P: AsRef<Path>>(path: P) -> Result<SparseMatrix<T>> {
    read_matrix_with(path, ParseOptions::default())
}

/// Reads and parses a matrix file with the given options
pub fn read_matrix_with<T: Scalar, P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<SparseMatrix<T>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let matrix = parse_with(&text, options).map_err(|source| Error::ParseFile {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "loaded {}: {}x{} with {} non-zeros",
        path.display(),
        matrix.n_rows(),
        matrix.n_cols(),
        matrix.nnz()
    );
    Ok(matrix)
}

/// Writes `Result of <op>:` followed by the serialized matrix and a newline
pub fn write_result<T: Scalar, W: Write>(
    writer: &mut W,
    operation: Operation,
    matrix: &SparseMatrix<T>,
) -> std::io::Result<()> {
    writeln!(writer, "{}", operation.label())?;
    writeln!(writer, "{}", matrix)
}

/// Creates (or truncates) `path` and writes the labelled result into it.
///
/// Missing parent directories are created.
pub fn write_result_file<T: Scalar, P: AsRef<Path>>(
    path: P,
    operation: Operation,
    matrix: &SparseMatrix<T>,
) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut file = fs::File::create(path).map_err(io_err)?;
    write_result(&mut file, operation, matrix).map_err(io_err)?;

    debug!(
        "wrote result of {} ({} non-zeros) to {}",
        operation,
        matrix.nnz(),
        path.display()
    );
    Ok(())
}

/// Builds `<dir>/<name>.txt`
pub fn output_path<P: AsRef<Path>>(dir: P, name: &str) -> PathBuf {
    dir.as_ref().join(format!("{}.{}", name, OUTPUT_EXTENSION))
}
