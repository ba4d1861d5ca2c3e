//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexicleanArgs, OutputFormat};
use crate::error::Result;

/// Result structure for a fit run.
#[derive(Debug, Serialize, Deserialize)]
pub struct FitResult {
    pub records: usize,
    pub fitted: bool,
    pub vocabulary_size: usize,
    pub state_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleaned: Option<Vec<String>>,
}

/// Result structure for an apply run.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApplyResult {
    pub records: usize,
    pub vocabulary_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleaned: Option<Vec<String>>,
}

/// Result structure for cleaning one text.
#[derive(Debug, Serialize, Deserialize)]
pub struct CleanResult {
    pub input: String,
    pub cleaned: String,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &LexicleanArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &LexicleanArgs) -> Result<()> {
    let value = serde_json::to_value(result)?;

    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    match &value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                // cleaned records go last, one per line
                if key == "cleaned" {
                    continue;
                }
                if args.verbosity() > 0 {
                    println!("{key}: {}", format_value(val));
                }
            }
            match obj.get("cleaned") {
                Some(serde_json::Value::Array(records)) => {
                    if args.verbosity() > 0 {
                        println!();
                    }
                    for record in records {
                        println!("{}", format_value(record));
                    }
                }
                Some(cleaned) => println!("{}", format_value(cleaned)),
                None => {}
            }
        }
        other => println!("{}", format_value(other)),
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LexicleanArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(
            format_value(&serde_json::Value::String("test".to_string())),
            "test"
        );
        assert_eq!(
            format_value(&serde_json::Value::Number(serde_json::Number::from(42))),
            "42"
        );
        assert_eq!(format_value(&serde_json::Value::Bool(false)), "false");
        assert_eq!(format_value(&serde_json::Value::Null), "null");
        assert_eq!(format_value(&serde_json::json!(["a", 1])), "[a, 1]");
    }

    #[test]
    fn test_result_skips_missing_fields() {
        let result = ApplyResult {
            records: 2,
            vocabulary_size: 0,
            output_path: None,
            duration_ms: 1,
            cleaned: None,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("output_path").is_none());
        assert!(value.get("cleaned").is_none());
        assert_eq!(value["records"], 2);
    }
}
