use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Argument that is replaced by the hypergraph file path
pub const INPUT_PLACEHOLDER: &str = "{input}";

/// How to invoke an external minimal-transversal solver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Solver executable
    pub program: PathBuf,

    /// Arguments; `{input}` is replaced by the hypergraph file path.
    /// Without a placeholder the path is appended last.
    pub args: Vec<String>,

    /// Upper bound on one solver run
    pub timeout_ms: u64,

    /// Directory for per-call hypergraph files (system temp dir if unset)
    pub work_dir: Option<PathBuf>,

    /// Layout of the solver's standard output
    pub output_format: OutputFormat,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("shd"),
            args: vec!["0".to_string(), INPUT_PLACEHOLDER.to_string(), "-".to_string()],
            timeout_ms: 60_000,
            work_dir: None,
            output_format: OutputFormat::TrailingMetadata,
        }
    }
}

impl SolverConfig {
    /// `shd 0 <input> -` at a given path
    pub fn shd(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            ..Default::default()
        }
    }

    /// Solver that takes the input path and prints one transversal per line
    pub fn plain(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: vec![INPUT_PLACEHOLDER.to_string()],
            output_format: OutputFormat::Plain,
            ..Default::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Arguments with the placeholder substituted
    pub fn arguments_for(&self, input: &str) -> Vec<String> {
        let mut args: Vec<String> = self
            .args
            .iter()
            .map(|arg| arg.replace(INPUT_PLACEHOLDER, input))
            .collect();
        if !self.args.iter().any(|arg| arg.contains(INPUT_PLACEHOLDER)) {
            args.push(input.to_string());
        }
        args
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.program.as_os_str().is_empty() {
            return Err("program must not be empty".to_string());
        }

        if self.timeout_ms == 0 {
            return Err("timeout_ms must be > 0".to_string());
        }

        let placeholders = self
            .args
            .iter()
            .filter(|arg| arg.contains(INPUT_PLACEHOLDER))
            .count();
        if placeholders > 1 {
            return Err(format!(
                "args reference {INPUT_PLACEHOLDER} {placeholders} times, expected at most once"
            ));
        }

        Ok(())
    }
}

/// Layout of solver output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One transversal per line, followed by `width + 3` metadata lines,
    /// where `width` is the largest token count of any line (shd layout)
    #[default]
    TrailingMetadata,

    /// One transversal per line and nothing else; blank lines are skipped
    Plain,
}
