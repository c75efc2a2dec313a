//! Field modifiers rewrite raw CSV cell text before it reaches the template.
//!
//! A modifier is a flat `{"pattern": "replacement"}` object. Rules run in
//! the order they are written, each on the output of the previous one.

use crate::error::{Error, Result};
use crate::matcher::TextMatcher;
use indexmap::IndexMap;
use serde_json::error::Category;

fn modifier_shape_error(err: serde_json::Error) -> Error {
    Error::ConfigError(format!(
        "field modifier must be an object of pattern/value strings: {err}"
    ))
}

/// Ordered set of pattern → literal replacement rules.
#[derive(Debug, Clone, Default)]
pub struct FieldModifier {
    rules: Vec<(TextMatcher, String)>,
}

impl FieldModifier {
    /// Compiles every rule pattern, keeping the map's order.
    ///
    /// # Errors
    /// * `Error::ConfigError` if any pattern is not a valid regular expression
    pub fn new(rules: &IndexMap<String, String>) -> Result<Self> {
        let rules = rules
            .iter()
            .map(|(pattern, replacement)| Ok((TextMatcher::new(pattern)?, replacement.clone())))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Parses modifier text as a JSON object, falling back to YAML when the
    /// text is not JSON at all. Blank text means no rules.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the text is valid JSON but not a flat string
    ///   map, is neither JSON nor a YAML string map, or a pattern does not compile
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let rules: IndexMap<String, String> = match serde_json::from_str(content) {
            Ok(rules) => rules,
            // Well-formed JSON of the wrong shape must not reach YAML, which
            // would coerce numbers, booleans and null into strings
            Err(json_err) if json_err.classify() == Category::Data => {
                return Err(modifier_shape_error(json_err));
            }
            Err(json_err) => {
                serde_yaml::from_str(content).map_err(|_| modifier_shape_error(json_err))?
            }
        };
        Self::new(&rules)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Applies every rule in order; the empty modifier is the identity.
    pub fn apply(&self, value: &str) -> String {
        self.rules
            .iter()
            .fold(value.to_string(), |current, (matcher, replacement)| {
                matcher.replace_all(&current, replacement)
            })
    }

    /// Human readable rule list, e.g. `';' with ','`.
    pub fn describe(&self) -> String {
        if self.rules.is_empty() {
            return "none".to_string();
        }
        self.rules
            .iter()
            .map(|(matcher, replacement)| format!("'{}' with '{replacement}'", matcher.as_str()))
            .collect::<Vec<_>>()
            .join(" AND ")
    }
}
