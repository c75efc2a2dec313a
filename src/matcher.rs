//! Text matchers built from operator-supplied pattern strings.
//!
//! Replace patterns and field modifier keys are compiled as regular
//! expressions exactly as written. They are trusted input: metacharacters in
//! a pattern or in a variable name keep their regex meaning and are not
//! escaped.

use crate::constants::VARIABLE_TOKEN;
use crate::error::{Error, Result};
use regex::{NoExpand, Regex};

/// A compiled pattern that replaces every match with literal text.
#[derive(Debug, Clone)]
pub struct TextMatcher {
    regex: Regex,
}

impl TextMatcher {
    /// Compiles `pattern` as a regular expression.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the pattern is not a valid regular expression
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| {
            Error::ConfigError(format!("invalid pattern '{pattern}': {e}"))
        })?;
        Ok(Self { regex })
    }

    /// The pattern source this matcher was compiled from.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Replaces all matches in `text` with `replacement`.
    /// `$` group references in `replacement` are not expanded.
    pub fn replace_all(&self, text: &str, replacement: &str) -> String {
        self.regex.replace_all(text, NoExpand(replacement)).into_owned()
    }
}

/// A replace pattern such as `@variable` or `{{variable}}` from which one
/// matcher per template variable is derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderPattern {
    pattern: String,
}

impl PlaceholderPattern {
    /// Validates that `pattern` contains the `variable` token.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the token is absent
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if !pattern.contains(VARIABLE_TOKEN) {
            return Err(Error::ConfigError(format!(
                "replace pattern must contain the text '{VARIABLE_TOKEN}', '{pattern}' is invalid"
            )));
        }
        Ok(Self { pattern })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Pattern text for one variable: every `variable` token replaced by `name`.
    pub fn placeholder_for(&self, name: &str) -> String {
        self.pattern.replace(VARIABLE_TOKEN, name)
    }

    /// Compiles the matcher for one variable.
    pub fn compile(&self, name: &str) -> Result<TextMatcher> {
        TextMatcher::new(&self.placeholder_for(name))
    }
}
