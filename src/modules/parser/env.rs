//! Environment variable substitution

use once_cell::sync::Lazy;
use regex::Regex;
use spyglass_core::SpyglassError;

/// Regex pattern for environment variable placeholders: {{ env.VAR_NAME }}
static ENV_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*env\.([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap());

/// Environment variable substitutor
pub struct EnvSubstitutor {
    /// Whether to fail on missing environment variables
    strict: bool,
}

impl EnvSubstitutor {
    /// Create a new substitutor with strict mode (fails on missing vars)
    pub fn new() -> Self {
        Self { strict: true }
    }

    /// Create a new substitutor with lenient mode (leaves placeholders for missing vars)
    pub fn lenient() -> Self {
        Self { strict: false }
    }

    /// Substitute environment variables in the given content
    pub fn substitute(&self, content: &str) -> Result<String, SpyglassError> {
        // Load .env file if present (ignores errors)
        let _ = dotenvy::dotenv();

        let mut result = content.to_string();
        let mut missing: Vec<String> = Vec::new();

        let matches: Vec<(String, String)> = ENV_PATTERN
            .captures_iter(content)
            .map(|cap| {
                let full_match = cap.get(0).unwrap().as_str().to_string();
                let var_name = cap.get(1).unwrap().as_str().to_string();
                (full_match, var_name)
            })
            .collect();

        for (full_match, var_name) in matches {
            match std::env::var(&var_name) {
                Ok(value) => {
                    result = result.replace(&full_match, &value);
                }
                Err(_) => {
                    if self.strict {
                        missing.push(var_name);
                    }
                    // In lenient mode, leave the placeholder as-is
                }
            }
        }

        if let Some(first) = missing.into_iter().next() {
            return Err(SpyglassError::EnvVarNotFound(first));
        }

        Ok(result)
    }
}

impl Default for EnvSubstitutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_existing_var() {
        std::env::set_var("SPYGLASS_TEST_TITLE", "Test LG");
        let substitutor = EnvSubstitutor::new();
        let result = substitutor
            .substitute("site_title: {{ env.SPYGLASS_TEST_TITLE }}")
            .unwrap();
        assert_eq!(result, "site_title: Test LG");
    }

    #[test]
    fn test_strict_missing_var() {
        let substitutor = EnvSubstitutor::new();
        let result = substitutor.substitute("value: {{ env.SPYGLASS_DOES_NOT_EXIST }}");
        assert!(matches!(result, Err(SpyglassError::EnvVarNotFound(_))));
    }

    #[test]
    fn test_lenient_missing_var() {
        let substitutor = EnvSubstitutor::lenient();
        let content = "value: {{ env.SPYGLASS_DOES_NOT_EXIST }}";
        let result = substitutor.substitute(content).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_no_placeholders() {
        let substitutor = EnvSubstitutor::new();
        let result = substitutor.substitute("site_title: Plain").unwrap();
        assert_eq!(result, "site_title: Plain");
    }
}
