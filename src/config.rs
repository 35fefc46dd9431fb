//! Run configuration and input parsing

/// Immutable configuration for one backport run
///
/// Constructed once from the action inputs before any target is processed.
#[derive(Debug, Clone)]
pub struct BackportConfig {
    /// Template for backport PR titles; `{{base}}` and `{{originalTitle}}`
    /// placeholders are substituted per target
    pub title_template: String,
    /// Optional prefix for generated head branch names
    pub branch_name_prefix: Option<String>,
    /// Delete the head branch after its PR is confirmed merged
    pub delete_branch: bool,
    /// Labels to apply to every created backport PR
    pub labels_to_add: Vec<String>,
    /// Paths restored to their pre-cherry-pick state on each target
    pub files_to_skip: Vec<String>,
}

/// Default title template for backport PRs
pub const DEFAULT_TITLE_TEMPLATE: &str = "[Backport {{base}}] {{originalTitle}}";

/// Split a comma-delimited input into trimmed, non-empty entries
///
/// `None` or an all-whitespace input yields an empty list.
pub fn parse_list(input: Option<&str>) -> Vec<String> {
    input
        .map(|s| {
            s.split(',')
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Like [`parse_list`], but deduplicated preserving first occurrence
pub fn parse_unique_list(input: Option<&str>) -> Vec<String> {
    let mut entries = parse_list(input);
    let mut seen = std::collections::HashSet::new();
    entries.retain(|e| seen.insert(e.clone()));
    entries
}

/// Parse a boolean action input: `"true"` is true, anything else is false
pub fn parse_bool_input(input: Option<&str>) -> bool {
    input.is_some_and(|s| s.trim() == "true")
}
