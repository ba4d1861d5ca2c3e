use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LexicleanError;

/// Whether a call may learn the removal vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NormalizeMode {
    /// Training data: learn the removal vocabulary if not yet fitted, then apply it.
    #[serde(alias = "train")]
    FitAndApply,

    /// Inference data: apply the stored vocabulary, never learn.
    #[serde(alias = "test")]
    ApplyOnly,
}

impl NormalizeMode {
    /// Whether this mode may fit the removal vocabulary.
    pub fn fits(self) -> bool {
        matches!(self, NormalizeMode::FitAndApply)
    }
}

impl fmt::Display for NormalizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeMode::FitAndApply => write!(f, "fit-and-apply"),
            NormalizeMode::ApplyOnly => write!(f, "apply-only"),
        }
    }
}

impl FromStr for NormalizeMode {
    type Err = LexicleanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fit-and-apply" | "fit" | "train" => Ok(NormalizeMode::FitAndApply),
            "apply-only" | "apply" | "test" => Ok(NormalizeMode::ApplyOnly),
            other => Err(LexicleanError::invalid_input(format!(
                "unknown normalize mode: {other:?}"
            ))),
        }
    }
}
