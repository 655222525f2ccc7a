//! Reading and writing the sparse textual matrix format

pub mod files;
pub mod parser;
pub mod serializer;

pub use files::{output_path, read_matrix, read_matrix_with, write_result, write_result_file};
pub use parser::{parse, parse_with, ParseError, ParseErrorKind, ParseOptions};
