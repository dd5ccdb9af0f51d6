use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use colored::Colorize;
use ppcheck_transformer::Transformer;

use crate::{
    directive::{Directive, count_occurrences},
    error::{AssertionFailure, CheckError, FailureKind},
};

/// Evaluates check files against one collected output
pub struct Interpreter<'a> {
    output: &'a str,
    /// Transformer that produced `output`, its macro table is dumped on failure
    transformer: Option<&'a dyn Transformer>,
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
}

impl<'a> Interpreter<'a> {
    pub fn new(output: &'a str, out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Self {
            output,
            transformer: None,
            out,
            err,
        }
    }
    pub fn with_transformer(mut self, transformer: &'a dyn Transformer) -> Self {
        self.transformer = Some(transformer);
        self
    }
    pub fn check_file(&mut self, path: &Path) -> Result<(), CheckError> {
        let file = File::open(path).map_err(|source| CheckError::Io { path: path.to_path_buf(), source })?;
        self.check_lines(BufReader::new(file), path)
    }
    /// Stops at the first directive that fails, `path` only names the lines in errors
    pub fn check_lines<R: BufRead>(&mut self, reader: R, path: &Path) -> Result<(), CheckError> {
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| CheckError::Io { path: path.to_path_buf(), source })?;
            let line_number = index + 1;
            let Some(directive) = Directive::classify(&line) else {
                return Err(CheckError::MalformedDirective {
                    path: path.to_path_buf(),
                    line: line_number,
                    text: line,
                });
            };
            log::trace!("{}:{}: {:?}", path.display(), line_number, directive);
            self.evaluate(directive, line_number)?;
        }
        Ok(())
    }
    pub fn evaluate(&mut self, directive: Directive<'_>, line: usize) -> Result<(), CheckError> {
        let kind = match directive {
            Directive::Forbidden(payload) if self.output.contains(payload) => FailureKind::FoundButNotExpected { payload: payload.to_string() },
            Directive::CountExact { expected, payload } => {
                let found = count_occurrences(self.output, payload);
                if found == expected {
                    return Ok(());
                }
                FailureKind::CountMismatch {
                    payload: payload.to_string(),
                    expected,
                    found,
                }
            }
            Directive::Contains(payload) if !self.output.contains(payload) => FailureKind::NotFoundButExpected { payload: payload.to_string() },
            Directive::Print => {
                writeln!(self.out, "{}", self.output).map_err(CheckError::Channel)?;
                return Ok(());
            }
            Directive::Forbidden(_) | Directive::Contains(_) | Directive::Ignored => return Ok(()),
        };

        let failure = AssertionFailure { line, kind };
        log::debug!("check line {} failed: {}", line, failure);
        self.dump().map_err(CheckError::Channel)?;
        Err(failure.into())
    }
    /// Writes the output and the macro table to the error channel
    fn dump(&mut self) -> std::io::Result<()> {
        writeln!(self.err, "{}", "--- output ---".bold())?;
        writeln!(self.err, "{}", self.output)?;
        if let Some(transformer) = self.transformer {
            writeln!(self.err, "{}", "--- macros ---".bold())?;
            write!(self.err, "{}", transformer.debug_macros())?;
        }
        self.err.flush()
    }
}
