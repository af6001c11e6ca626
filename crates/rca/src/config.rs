use serde::{Deserialize, Serialize};

/// Relational growth configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RcaConfig {
    /// Number of passes over the strategy
    pub depth: usize,

    /// Label of the synthetic element added to every attribute dimension
    pub disjunction_label: String,
}

impl Default for RcaConfig {
    fn default() -> Self {
        Self {
            depth: 1,
            disjunction_label: "*".to_string(),
        }
    }
}

impl RcaConfig {
    /// Configuration with a given depth
    pub fn with_depth(depth: usize) -> Self {
        Self {
            depth,
            ..Default::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.disjunction_label.trim().is_empty() {
            return Err("disjunction_label must not be empty".to_string());
        }

        Ok(())
    }
}
