//! Loading model parameters from TOML files.
//!
//! Parameter structs are expected to carry `#[serde(default)]` so that a
//! configuration file only needs to name the values it overrides.

use crate::errors::{GwmError, GwmResult};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::info;

/// Parse parameters from a TOML document.
pub fn parse_parameters<T: DeserializeOwned>(text: &str) -> GwmResult<T> {
    Ok(toml::from_str(text)?)
}

/// Load parameters from `path`, or fall back to the defaults when no path is given.
pub fn load_parameters<T>(path: Option<&Path>) -> GwmResult<T>
where
    T: DeserializeOwned + Default,
{
    match path {
        None => Ok(T::default()),
        Some(path) => {
            info!(path = %path.display(), "Loading parameters");
            let text = fs::read_to_string(path).map_err(|source| GwmError::Io {
                path: path.display().to_string(),
                source,
            })?;
            parse_parameters(&text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::path::PathBuf;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(default)]
    struct ExampleParameters {
        albedo: f64,
        steps: usize,
    }

    impl Default for ExampleParameters {
        fn default() -> Self {
            Self {
                albedo: 0.3,
                steps: 10,
            }
        }
    }

    #[test]
    fn test_defaults_without_path() {
        let params: ExampleParameters = load_parameters(None).unwrap();
        assert_eq!(params, ExampleParameters::default());
    }

    #[test]
    fn test_partial_override() {
        let params: ExampleParameters = parse_parameters("steps = 42").unwrap();
        assert_eq!(params.steps, 42);
        assert_eq!(params.albedo, 0.3);
    }

    #[test]
    fn test_invalid_toml() {
        let result: GwmResult<ExampleParameters> = parse_parameters("steps = \"many\"");
        assert!(matches!(result, Err(GwmError::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let path = PathBuf::from("/definitely/not/here/params.toml");
        let result: GwmResult<ExampleParameters> = load_parameters(Some(&path));
        assert!(matches!(result, Err(GwmError::Io { .. })));
    }
}
