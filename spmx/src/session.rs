//! Interactive command layer
//!
//! A [`Session`] asks the user which operation to apply to two loaded
//! matrices, shows the result and optionally saves it. Input and output are
//! generic so the whole dialogue can be driven from tests.

use crate::config::SessionConfig;
use crate::display::render;
use crate::file_io::save_matrix;
use spmx_core::{MatrixError, Operation, SparseMatrix};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The operation succeeded; `saved_to` is set when the result was saved
    Completed {
        result: SparseMatrix,
        saved_to: Option<PathBuf>,
    },
    /// The user did not pick a known operation
    InvalidChoice(String),
    /// The operation or the save failed
    Failed(MatrixError),
}

/// One round of the operation menu over a pair of matrices
pub struct Session<'a, R, W> {
    config: &'a SessionConfig,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(config: &'a SessionConfig, input: R, output: W) -> Self {
        Self {
            config,
            input,
            output,
        }
    }

    /// Run the menu once
    ///
    /// Matrix errors are printed and returned as [`SessionOutcome::Failed`];
    /// only failures of the terminal itself are returned as `Err`.
    pub fn run(
        &mut self,
        left: &SparseMatrix,
        right: &SparseMatrix,
    ) -> io::Result<SessionOutcome> {
        writeln!(self.output, "Matrix 1: {}x{}", left.nrows(), left.ncols())?;
        writeln!(self.output, "Matrix 2: {}x{}", right.nrows(), right.ncols())?;
        writeln!(self.output, "Choose an operation:")?;
        for (i, op) in Operation::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {op}", i + 1)?;
        }

        let choice = self.prompt("Enter your choice (1/2/3): ")?;
        let Ok(op) = choice.parse::<Operation>() else {
            log::warn!("Unrecognized operation choice {choice:?}");
            writeln!(self.output, "Invalid choice.")?;
            return Ok(SessionOutcome::InvalidChoice(choice));
        };

        let result = match op.apply(left, right) {
            Ok(result) => result,
            Err(e) => return self.fail(e),
        };

        writeln!(self.output, "Result of {op}:")?;
        writeln!(self.output, "{}", render(&result, self.config.display))?;

        let answer = self.prompt("Do you want to save the result? (yes/no): ")?;
        if !answer.eq_ignore_ascii_case("yes") {
            writeln!(self.output, "Result not saved.")?;
            return Ok(SessionOutcome::Completed {
                result,
                saved_to: None,
            });
        }

        let name = self.prompt("Enter a file name to save the result (e.g., my_matrix.txt): ")?;
        if name.is_empty() {
            log::warn!("Empty file name, result not saved");
            writeln!(self.output, "No file name given. Result not saved.")?;
            return Ok(SessionOutcome::Completed {
                result,
                saved_to: None,
            });
        }

        let path = self.config.resolve(&name);
        if let Err(e) = save_matrix(&result, &path, self.config.create_dirs) {
            return self.fail(e);
        }
        writeln!(self.output, "Result saved to {}", path.display())?;

        Ok(SessionOutcome::Completed {
            result,
            saved_to: Some(path),
        })
    }

    fn prompt(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    fn fail(&mut self, error: MatrixError) -> io::Result<SessionOutcome> {
        writeln!(self.output, "Error: {error}")?;
        Ok(SessionOutcome::Failed(error))
    }
}
