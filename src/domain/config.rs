//! Configuration domain model.
//!
//! The merged configuration is a typed record rather than a raw mapping.
//! Fields whose checks involve lenient integer coercion (or runtime type
//! inspection) are carried as raw [`serde_yaml::Value`] so that a bad value
//! surfaces as a validation message instead of a parse failure.

use serde::Deserialize;
use serde_yaml::Value;

/// Default path of the configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/config.yaml";

/// Path of the example configuration shipped with the toolkit.
pub const EXAMPLE_CONFIG_PATH: &str = "config/config.example.yaml";

/// Placeholder organization name shipped in the example configuration.
pub const ORGANIZATION_PLACEHOLDER: &str = "YourOrgName";

/// Fields that must be present and non-empty for the toolkit to operate.
pub const REQUIRED_FIELDS: &[&str] = &["organization"];

/// Canonical weekday names accepted for `weekly_report_day` (case-sensitive).
pub const VALID_DAYS_OF_WEEK: [&str; 7] =
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];

/// Toolkit configuration loaded from `config/config.yaml`.
///
/// Every field carries a serde default, so deserializing a partial file
/// performs the default merge: keys present in the file win, keys absent
/// fall back to the defaults. Unknown top-level keys are accepted and
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// GitHub organization handle. Required, validated against the
    /// placeholder and the no-spaces rule.
    #[serde(default)]
    pub organization: Option<String>,

    /// Optional GitHub API endpoint override.
    #[serde(default)]
    pub github_api_url: Option<String>,

    /// Seconds to keep cached API responses. Coerced to an integer.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl: Value,

    /// Directory holding cached API responses.
    #[serde(default = "default_cache_dir")]
    pub cache_dir: String,

    /// Path to the label definitions file. Must exist when set.
    #[serde(default = "default_labels_source")]
    pub labels_source: Option<String>,

    /// Optional tier-1 repository list file.
    #[serde(default)]
    pub tier1_repos: Option<String>,

    /// Optional tier-2 repository list file.
    #[serde(default)]
    pub tier2_repos: Option<String>,

    /// Optional tier-3 repository list file.
    #[serde(default)]
    pub tier3_repos: Option<String>,

    /// Days before an issue counts as stale. Coerced to an integer.
    #[serde(default = "default_stale_issue_days")]
    pub stale_issue_days: Value,

    /// Days before a pull request counts as stale. Coerced to an integer.
    #[serde(default = "default_stale_pr_days")]
    pub stale_pr_days: Value,

    /// Optional comma-separated labels applied to stale items.
    #[serde(default)]
    pub stale_labels: Option<String>,

    /// Optional comma-separated labels exempting items from staleness.
    #[serde(default)]
    pub stale_exempt_labels: Option<String>,

    /// Weekday on which the weekly report runs.
    #[serde(default = "default_weekly_report_day")]
    pub weekly_report_day: Value,

    /// Hour of day (0-23) at which the weekly report runs.
    #[serde(default = "default_weekly_report_hour")]
    pub weekly_report_hour: Value,

    /// Optional discussion number or category for the weekly report.
    #[serde(default)]
    pub weekly_report_discussion: Option<Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            organization: None,
            github_api_url: None,
            cache_ttl: default_cache_ttl(),
            cache_dir: default_cache_dir(),
            labels_source: default_labels_source(),
            tier1_repos: None,
            tier2_repos: None,
            tier3_repos: None,
            stale_issue_days: default_stale_issue_days(),
            stale_pr_days: default_stale_pr_days(),
            stale_labels: None,
            stale_exempt_labels: None,
            weekly_report_day: default_weekly_report_day(),
            weekly_report_hour: default_weekly_report_hour(),
            weekly_report_discussion: None,
        }
    }
}

fn default_cache_ttl() -> Value {
    Value::Number(300.into())
}

fn default_cache_dir() -> String {
    "/tmp/github-cache/".to_string()
}

fn default_labels_source() -> Option<String> {
    Some("config/labels.json".to_string())
}

fn default_stale_issue_days() -> Value {
    Value::Number(60.into())
}

fn default_stale_pr_days() -> Value {
    Value::Number(30.into())
}

fn default_weekly_report_day() -> Value {
    Value::String("Monday".to_string())
}

fn default_weekly_report_hour() -> Value {
    Value::Number(9.into())
}
