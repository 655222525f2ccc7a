//! Command line front end: reads two matrix files, applies an operation and
//! writes the labelled result. Missing arguments are prompted for on stdin.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::{debug, info};

use sparse_arith::config::AppConfig;
use sparse_arith::io::{output_path, read_matrix_with, write_result, write_result_file};
use sparse_arith::{Error, Operation, Result, SparseMatrix};

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// add, subtract or multiply
    operation: Option<String>,

    /// First matrix file
    left: Option<PathBuf>,

    /// Second matrix file
    right: Option<PathBuf>,

    /// Output file name (without extension), written into the output directory
    #[arg(short, long)]
    output: Option<String>,

    /// Configuration file (defaults to sparse_arith.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reject entries outside the declared matrix shape
    #[arg(long)]
    check_bounds: bool,

    #[arg(long)]
    debug: bool,
}

/// Line-based question/answer over any reader and writer
struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    fn ask(&mut self, question: &str) -> Result<String> {
        let stdout_err = |source| Error::Io {
            path: PathBuf::from("<stdout>"),
            source,
        };
        let stdin_err = |source| Error::Io {
            path: PathBuf::from("<stdin>"),
            source,
        };

        write!(self.output, "{}", question).map_err(stdout_err)?;
        self.output.flush().map_err(stdout_err)?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer).map_err(stdin_err)? == 0 {
            return Err(stdin_err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            )));
        }
        Ok(answer.trim().to_string())
    }
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::load()?,
    };
    init_logger(&config, args.debug);
    debug!("configuration: {:?}", config);

    let mut options = config.parse_options();
    options.check_bounds |= args.check_bounds;

    let interactive = args.operation.is_none() || args.left.is_none() || args.right.is_none();
    let stdin = io::stdin();
    let mut prompt = Prompt {
        input: stdin.lock(),
        output: io::stdout(),
    };

    let left = match args.left {
        Some(path) => path,
        None => prompt
            .ask("Enter the path to the first sparse matrix file: ")?
            .into(),
    };
    let right = match args.right {
        Some(path) => path,
        None => prompt
            .ask("Enter the path to the second sparse matrix file: ")?
            .into(),
    };

    let a: SparseMatrix = read_matrix_with(&left, options)?;
    let b: SparseMatrix = read_matrix_with(&right, options)?;

    let operation: Operation = match args.operation {
        Some(name) => name.parse()?,
        None => prompt
            .ask("Which operation would you like to perform? (add/subtract/multiply): ")?
            .parse()?,
    };

    let result = operation.apply(&a, &b)?;
    info!(
        "{} of {}x{} and {}x{} produced {}x{} with {} non-zeros",
        operation,
        a.n_rows(),
        a.n_cols(),
        b.n_rows(),
        b.n_cols(),
        result.n_rows(),
        result.n_cols(),
        result.nnz()
    );

    let output_name = match args.output {
        Some(name) => Some(name),
        None if interactive => {
            Some(prompt.ask("Enter the output filename (without extension): ")?)
                .filter(|name| !name.is_empty())
        }
        None => None,
    };

    match output_name {
        Some(name) => {
            let path = output_path(&config.output_dir, &name);
            write_result_file(&path, operation, &result)?;
            println!("Results have been written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            write_result(&mut stdout.lock(), operation, &result).map_err(|source| Error::Io {
                path: PathBuf::from("<stdout>"),
                source,
            })?;
        }
    }

    Ok(())
}

fn init_logger(config: &AppConfig, debug: bool) {
    let level = if debug { "debug" } else { config.log_level.as_str() };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(level)).try_init();
}
