use crate::config::{OutputFormat, SolverConfig};
use crate::error::{Result, SolverError};
use crate::hypergraph::{Hypergraph, Transversal};
use crate::solver::TransversalSolver;
use std::io::Write;
use std::path::Path;
use std::process::{Output, Stdio};
use std::thread;
use tempfile::NamedTempFile;
use tokio::time::timeout;

/// Minimal-transversal solver run as a child process.
///
/// Every call writes the hypergraph to its own uniquely named temporary
/// file, runs the solver on it under the configured timeout, and removes the
/// file when the call returns. Calls never share a file name.
#[derive(Debug, Clone)]
pub struct ExternalSolver {
    config: SolverConfig,
}

impl ExternalSolver {
    pub fn new(config: SolverConfig) -> Result<Self> {
        config.validate().map_err(SolverError::InvalidConfig)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn program(&self) -> String {
        self.config.program.display().to_string()
    }

    fn write_input(&self, hypergraph: &Hypergraph) -> Result<NamedTempFile> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("hypergraph-").suffix(".io");
        let mut file = match &self.config.work_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };

        file.write_all(hypergraph.to_solver_input().as_bytes())?;
        file.flush()?;

        log::debug!(
            "Wrote hypergraph with {} edges over {} vertices to {}",
            hypergraph.len(),
            hypergraph.universe(),
            file.path().display()
        );
        Ok(file)
    }

    fn run(&self, input: &Path) -> Result<String> {
        let program = self.program();
        let args = self.config.arguments_for(&input.display().to_string());

        // Inside a caller's runtime the child runs on its own thread and runtime
        let output = if tokio::runtime::Handle::try_current().is_ok() {
            thread::scope(|scope| {
                scope.spawn(|| self.execute(&args)).join().unwrap_or_else(|_| {
                    Err(SolverError::process(
                        self.program(),
                        "solver thread panicked",
                    ))
                })
            })?
        } else {
            self.execute(&args)?
        };

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            return Err(SolverError::process(
                program,
                format!("exited with {}: {}", output.status, stderr.trim()),
            ));
        }
        if !stderr.trim().is_empty() {
            log::warn!("Solver {} wrote to stderr: {}", program, stderr.trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run the solver to completion on a current-thread runtime
    fn execute(&self, args: &[String]) -> Result<Output> {
        let program = self.program();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let output = runtime.block_on(async {
            timeout(
                self.config.timeout(),
                tokio::process::Command::new(&self.config.program)
                    .args(args)
                    .stdin(Stdio::null())
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped())
                    .kill_on_drop(true)
                    .output(),
            )
            .await
        });

        match output {
            Err(_) => Err(SolverError::Timeout {
                program,
                timeout_ms: self.config.timeout_ms,
            }),
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(SolverError::process(program, "solver binary not found"))
            }
            Ok(Err(e)) => Err(SolverError::process(
                program,
                format!("failed to run solver: {e}"),
            )),
            Ok(Ok(output)) => Ok(output),
        }
    }
}

impl TransversalSolver for ExternalSolver {
    fn minimal_transversals(&self, hypergraph: &Hypergraph) -> Result<Vec<Transversal>> {
        let input = self.write_input(hypergraph)?;
        let stdout = self.run(input.path())?;
        let transversals = parse_solver_output(&stdout, self.config.output_format)?;

        if let Some(vertex) = transversals
            .iter()
            .filter_map(|t| t.iter().next_back())
            .find(|&&v| v >= hypergraph.universe())
        {
            return Err(SolverError::malformed(format!(
                "vertex {vertex} is outside the universe of size {}",
                hypergraph.universe()
            )));
        }
        if let Some(missed) = transversals.iter().find(|t| !hypergraph.is_transversal(t)) {
            return Err(SolverError::malformed(format!(
                "{missed:?} does not hit every edge"
            )));
        }

        log::debug!(
            "Solver {} returned {} minimal transversals",
            self.program(),
            transversals.len()
        );
        Ok(transversals)
    }
}

/// Parse solver standard output into transversals.
///
/// `TrailingMetadata` splits on `\n`, measures the widest line in
/// space-separated tokens and discards the last `width + 3` lines. Fewer
/// than two lines, or no non-blank line left after the trailer, is
/// `EmptyOutput`. Blank lines never count as transversals.
pub fn parse_solver_output(output: &str, format: OutputFormat) -> Result<Vec<Transversal>> {
    let body: Vec<&str> = match format {
        OutputFormat::TrailingMetadata => {
            let lines: Vec<&str> = output.split('\n').collect();
            if lines.len() < 2 || lines.iter().all(|line| line.trim().is_empty()) {
                return Err(SolverError::EmptyOutput);
            }

            let width = lines
                .iter()
                .map(|line| line.split(' ').count())
                .max()
                .unwrap_or(0);
            let trailer = width + 3;
            if lines.len() < trailer {
                return Err(SolverError::malformed(format!(
                    "expected at least {trailer} trailing lines, got {} lines",
                    lines.len()
                )));
            }
            lines[..lines.len() - trailer]
                .iter()
                .copied()
                .filter(|line| !line.trim().is_empty())
                .collect()
        }
        OutputFormat::Plain => output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect(),
    };

    if body.is_empty() {
        return Err(SolverError::EmptyOutput);
    }

    body.into_iter().map(parse_line).collect()
}

fn parse_line(line: &str) -> Result<Transversal> {
    line.split(' ')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|_| SolverError::malformed(format!("invalid vertex {token:?} in {line:?}")))
        })
        .collect()
}
