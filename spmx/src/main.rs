use clap::{Parser, Subcommand};
use spmx::{
    load_matrix, render, save_matrix, DisplayFormat, ErrorCategory, MatrixError,
    MatrixOperations, Operation, Session, SessionConfig, SessionOutcome,
};
use std::{
    error::Error,
    path::{Path, PathBuf},
    process::ExitCode,
};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "SPMX - Add, subtract and multiply sparse matrices stored as text files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load two matrices and choose an operation from a menu
    Interactive {
        /// First matrix file
        left: PathBuf,

        /// Second matrix file
        right: PathBuf,

        /// Directory that relative save names are resolved against
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,

        /// Result display: mapping, text or json
        #[arg(long, default_value = "mapping")]
        format: DisplayFormat,

        /// Fail instead of creating missing directories when saving
        #[arg(long)]
        no_create_dirs: bool,
    },
    /// Apply one operation and print or save the result
    Compute {
        /// add, subtract or multiply
        op: Operation,

        /// First matrix file
        left: PathBuf,

        /// Second matrix file
        right: PathBuf,

        /// Save the result here instead of printing it
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Result display when printing: mapping, text or json
        #[arg(long, default_value = "text")]
        format: DisplayFormat,
    },
    /// Show matrix dimensions, or the non-zero entries of a row or column
    Info {
        /// Matrix file
        path: PathBuf,

        /// Row to list (optional)
        #[arg(long)]
        row: Option<usize>,

        /// Column to list (optional)
        #[arg(long)]
        col: Option<usize>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            failure_code(&*e)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn Error>> {
    match cli.command {
        Commands::Interactive {
            left,
            right,
            output_dir,
            format,
            no_create_dirs,
        } => {
            let config = SessionConfig::with_output_dir(output_dir)
                .with_display(format)
                .with_create_dirs(!no_create_dirs);
            handle_interactive(&left, &right, &config)
        }
        Commands::Compute {
            op,
            left,
            right,
            output,
            format,
        } => {
            handle_compute(op, &left, &right, output, format)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Info { path, row, col } => {
            handle_info(&path, row, col)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn handle_interactive(
    left: &Path,
    right: &Path,
    config: &SessionConfig,
) -> Result<ExitCode, Box<dyn Error>> {
    let left = load_matrix(left)?;
    let right = load_matrix(right)?;

    let stdin = std::io::stdin();
    let mut session = Session::new(config, stdin.lock(), std::io::stdout());

    // The session has already reported any failure to the user
    let code = match session.run(&left, &right)? {
        SessionOutcome::Completed { .. } => ExitCode::SUCCESS,
        SessionOutcome::InvalidChoice(_) => ExitCode::from(2),
        SessionOutcome::Failed(e) => exit_code(Some(e.category())),
    };
    Ok(code)
}

fn handle_compute(
    op: Operation,
    left: &Path,
    right: &Path,
    output: Option<PathBuf>,
    format: DisplayFormat,
) -> Result<(), Box<dyn Error>> {
    let left = load_matrix(left)?;
    let right = load_matrix(right)?;
    let result = op.apply(&left, &right)?;

    match output {
        Some(path) => {
            save_matrix(&result, &path, true)?;
            println!("Result of {op} saved to {}", path.display());
        }
        None => print!("{}", with_newline(render(&result, format))),
    }
    Ok(())
}

fn handle_info(path: &Path, row: Option<usize>, col: Option<usize>) -> Result<(), Box<dyn Error>> {
    let matrix = load_matrix(path)?;

    if let Some(r) = row {
        if r >= matrix.nrows() {
            return Err(format!("row {r} is outside a {}-row matrix", matrix.nrows()).into());
        }
        println!("Row {r} elements:");
        for (c, value) in matrix.get_row(r) {
            println!("  ({r}, {c}) = {value}");
        }
    } else if let Some(c) = col {
        if c >= matrix.ncols() {
            return Err(format!("column {c} is outside a {}-column matrix", matrix.ncols()).into());
        }
        println!("Column {c} elements:");
        for (r, value) in matrix.get_col(c) {
            println!("  ({r}, {c}) = {value}");
        }
    } else {
        println!("Matrix info:");
        println!("  Path: {}", path.display());
        println!("  Dimensions: {} x {}", matrix.nrows(), matrix.ncols());
        println!("  Non-zero elements: {}", matrix.nnz());
    }
    Ok(())
}

fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

fn failure_code(error: &(dyn Error + 'static)) -> ExitCode {
    exit_code(error.downcast_ref::<MatrixError>().map(MatrixError::category))
}

fn exit_code(category: Option<ErrorCategory>) -> ExitCode {
    let code = match category {
        None => 1,
        Some(ErrorCategory::Io) => 3,
        Some(ErrorCategory::Format) => 4,
        Some(ErrorCategory::Bounds) => 5,
        Some(ErrorCategory::Shape) => 6,
        Some(ErrorCategory::Arithmetic) => 7,
    };
    ExitCode::from(code)
}
