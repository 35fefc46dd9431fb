//! Target resolution from pull request labels
//!
//! Labels of the form `backport <base> [<head>]` name the maintenance
//! branches a merged PR should be backported to.

use crate::event::BackportEvent;
use regex::Regex;
use std::collections::BTreeMap;

/// The action that triggered this run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerAction {
    /// The pull request was closed (and possibly merged)
    Closed,
    /// A label was added; carries the label name
    Labeled(String),
    /// Any other action; nothing to backport
    Other,
}

impl TriggerAction {
    /// Derive the trigger from an event payload
    pub fn from_event(event: &BackportEvent) -> Self {
        match event.action.as_str() {
            "closed" => Self::Closed,
            "labeled" => event
                .label
                .as_ref()
                .map_or(Self::Other, |l| Self::Labeled(l.name.clone())),
            _ => Self::Other,
        }
    }
}

/// Resolve backport targets from labels
///
/// On `closed` every label is considered; on `labeled` only the triggering
/// label. Labels that do not match `backport <base> [<head>]` are ignored.
/// The head branch defaults to `<prefix>-to-<base>` when a branch name
/// prefix is configured, `backport-<pr>-to-<base>` otherwise. Duplicate
/// labels for the same base collapse, last one wins.
pub fn resolve_targets(
    action: &TriggerAction,
    labels: &[String],
    branch_name_prefix: Option<&str>,
    pr_number: u64,
) -> BTreeMap<String, String> {
    let candidates: Vec<&str> = match action {
        TriggerAction::Closed => labels.iter().map(String::as_str).collect(),
        TriggerAction::Labeled(name) => vec![name.as_str()],
        TriggerAction::Other => Vec::new(),
    };

    let pattern = Regex::new(r"^backport (\S+)(?: (\S+))?$").unwrap();
    let prefix = branch_name_prefix.map(str::trim).filter(|p| !p.is_empty());

    let mut targets = BTreeMap::new();
    for label in candidates {
        let Some(captures) = pattern.captures(label) else {
            continue;
        };
        let base = captures[1].to_string();
        let head = captures.get(2).map_or_else(
            || match prefix {
                Some(p) => format!("{p}-to-{base}"),
                None => format!("backport-{pr_number}-to-{base}"),
            },
            |m| m.as_str().to_string(),
        );
        targets.insert(base, head);
    }

    targets
}

/// Substitute `{{base}}` and `{{originalTitle}}` placeholders in a template
///
/// All occurrences of each placeholder are replaced.
pub fn render_title(template: &str, base: &str, original_title: &str) -> String {
    template
        .replace("{{base}}", base)
        .replace("{{originalTitle}}", original_title)
}
