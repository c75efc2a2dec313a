//! Template hydration: substituting record values into the template text.

use crate::error::Result;
use crate::matcher::{PlaceholderPattern, TextMatcher};
use crate::record::Record;

/// Replaces the placeholders of every template variable with record values.
///
/// Matchers are compiled once, up front, in variable-list order. Hydration
/// is a sequential fold over that list: a value inserted for one variable is
/// visible to the matchers of the variables after it (cascading
/// substitution).
#[derive(Debug, Clone)]
pub struct TemplateHydrator {
    matchers: Vec<(String, TextMatcher)>,
}

impl TemplateHydrator {
    /// # Errors
    /// * `Error::ConfigError` if a placeholder for some variable is not a valid
    ///   regular expression
    pub fn new(pattern: &PlaceholderPattern, variables: &[String]) -> Result<Self> {
        let matchers = variables
            .iter()
            .map(|variable| Ok((variable.clone(), pattern.compile(variable)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { matchers })
    }

    /// Produces a new string; `template` itself is left untouched.
    /// Variables absent from `record` leave their placeholders in place.
    pub fn hydrate(&self, template: &str, record: &Record) -> String {
        self.matchers
            .iter()
            .fold(template.to_string(), |text, (variable, matcher)| match record.get(variable) {
                Some(value) => matcher.replace_all(&text, value),
                None => text,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_REPLACE_PATTERN;

    fn default_pattern() -> PlaceholderPattern {
        PlaceholderPattern::new(DEFAULT_REPLACE_PATTERN).unwrap()
    }

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn vars(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_hydrate_letter() {
        let hydrator =
            TemplateHydrator::new(&default_pattern(), &vars(&["name", "relation"])).unwrap();
        let template = "Hello @name,\n\nYour @relation";
        let output = hydrator.hydrate(template, &record(&[("name", "Ajay"), ("relation", "brother")]));
        assert_eq!(output, "Hello Ajay,\n\nYour brother");
        assert_eq!(template, "Hello @name,\n\nYour @relation");
    }

    #[test]
    fn test_no_placeholder_left_behind() {
        let hydrator =
            TemplateHydrator::new(&default_pattern(), &vars(&["serial", "code"])).unwrap();
        let output = hydrator.hydrate(
            "@serial/@code @serial-@code\n@code",
            &record(&[("serial", "S-01"), ("code", "XY")]),
        );
        assert!(!output.contains("@serial"));
        assert!(!output.contains("@code"));
        assert_eq!(output.matches("S-01").count(), 2);
        assert_eq!(output.matches("XY").count(), 3);
    }

    #[test]
    fn test_custom_pattern() {
        let pattern = PlaceholderPattern::new(r"\{\{variable\}\}").unwrap();
        let hydrator = TemplateHydrator::new(&pattern, &vars(&["who"])).unwrap();
        assert_eq!(
            hydrator.hydrate("Hi {{who}}, not @who", &record(&[("who", "Seema")])),
            "Hi Seema, not @who"
        );
    }

    #[test]
    fn test_cascading_substitution() {
        // `x` is replaced first; the `@y` it inserts is then replaced by `y`
        let hydrator = TemplateHydrator::new(&default_pattern(), &vars(&["x", "y"])).unwrap();
        let output = hydrator.hydrate("[@x]", &record(&[("x", "see @y"), ("y", "why")]));
        assert_eq!(output, "[see why]");

        // In the reverse order the inserted text is never revisited
        let hydrator = TemplateHydrator::new(&default_pattern(), &vars(&["y", "x"])).unwrap();
        let output = hydrator.hydrate("[@x]", &record(&[("x", "see @y"), ("y", "why")]));
        assert_eq!(output, "[see @y]");
    }

    #[test]
    fn test_missing_value_keeps_placeholder() {
        let hydrator = TemplateHydrator::new(&default_pattern(), &vars(&["a"])).unwrap();
        assert_eq!(hydrator.hydrate("@a", &Record::new()), "@a");
    }

    #[test]
    fn test_invalid_placeholder_regex() {
        let pattern = PlaceholderPattern::new("[variable").unwrap();
        assert!(TemplateHydrator::new(&pattern, &vars(&["a"])).is_err());
    }
}
