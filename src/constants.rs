//! Common constants used throughout the template processor.

/// Token every replace pattern must contain; it stands for the variable name.
pub const VARIABLE_TOKEN: &str = "variable";

/// Replace pattern used when none is configured
pub const DEFAULT_REPLACE_PATTERN: &str = "@variable";

/// Field modifier used when none is configured (no rules)
pub const DEFAULT_FIELD_MODIFIER: &str = "{}";

/// Output directory used when none is configured
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Prefix marking a variable inside the output filename pattern
pub const FILENAME_VARIABLE_PREFIX: &str = "@";
