//! Field-level validation of the merged configuration.
//!
//! Validation is exhaustive per call: every check runs and appends its
//! message, so a caller can present all fixes at once. A bad field never
//! aborts the walk and never turns into an error return.

use std::path::Path;

use serde_yaml::Value;
use url::Url;

use crate::domain::Config;
use crate::domain::config::{ORGANIZATION_PLACEHOLDER, REQUIRED_FIELDS, VALID_DAYS_OF_WEEK};
use crate::domain::scalar;

use super::diagnostics::Diagnostics;

/// Validate the merged configuration and collect every finding.
///
/// Blocking problems land in `errors`; missing optional tier files land in
/// `warnings` and never fail validation.
pub fn validate_config(config: &Config) -> Diagnostics {
    let mut diagnostics = Diagnostics::default();

    check_required_fields(config, &mut diagnostics);
    check_organization(config, &mut diagnostics);
    check_github_api_url(config, &mut diagnostics);
    check_cache_ttl(config, &mut diagnostics);
    check_stale_issue_days(config, &mut diagnostics);
    check_stale_pr_days(config, &mut diagnostics);
    check_weekly_report_day(config, &mut diagnostics);
    check_weekly_report_hour(config, &mut diagnostics);
    check_weekly_report_discussion(config, &mut diagnostics);
    check_labels_source(config, &mut diagnostics);
    check_tier_files(config, &mut diagnostics);

    diagnostics
}

fn check_required_fields(config: &Config, diagnostics: &mut Diagnostics) {
    for field in REQUIRED_FIELDS {
        let value = match *field {
            "organization" => config.organization.as_deref(),
            _ => None,
        };
        if value.map_or(true, str::is_empty) {
            diagnostics.push_error(format!(
                "Required field '{field}' is missing or empty. Please set it in your config file."
            ));
        }
    }
}

fn check_organization(config: &Config, diagnostics: &mut Diagnostics) {
    let Some(org) = config.organization.as_deref().filter(|org| !org.is_empty()) else {
        return;
    };

    if org == ORGANIZATION_PLACEHOLDER {
        diagnostics.push_error(
            "Please change 'organization' from the default 'YourOrgName' to your actual GitHub organization name.",
        );
    }
    if org.contains(' ') {
        diagnostics.push_error(format!(
            "Organization name '{org}' contains spaces. Use the GitHub organization handle (no spaces)."
        ));
    }
}

fn check_github_api_url(config: &Config, diagnostics: &mut Diagnostics) {
    if let Some(api_url) = config.github_api_url.as_deref()
        && !api_url.is_empty()
        && Url::parse(api_url).is_err()
    {
        diagnostics.push_error(format!("github_api_url must be a valid URL, got: {api_url}"));
    }
}

fn check_cache_ttl(config: &Config, diagnostics: &mut Diagnostics) {
    match scalar::coerce_int(&config.cache_ttl) {
        Some(ttl) if ttl < 0 => {
            diagnostics.push_error("cache_ttl must be a positive number");
        }
        Some(_) => {}
        None => {
            diagnostics.push_error(format!(
                "cache_ttl must be a number, got: {}",
                scalar::display(&config.cache_ttl)
            ));
        }
    }
}

fn check_stale_issue_days(config: &Config, diagnostics: &mut Diagnostics) {
    match scalar::coerce_int(&config.stale_issue_days) {
        Some(days) if days < 1 => {
            diagnostics.push_error("stale_issue_days must be at least 1");
        }
        Some(_) => {}
        None => {
            diagnostics.push_error(format!(
                "stale_issue_days must be a number, got: {}",
                scalar::display(&config.stale_issue_days)
            ));
        }
    }
}

fn check_stale_pr_days(config: &Config, diagnostics: &mut Diagnostics) {
    match scalar::coerce_int(&config.stale_pr_days) {
        Some(days) if days < 1 => {
            diagnostics.push_error("stale_pr_days must be at least 1");
        }
        Some(_) => {}
        None => {
            diagnostics.push_error(format!(
                "stale_pr_days must be a number, got: {}",
                scalar::display(&config.stale_pr_days)
            ));
        }
    }
}

fn check_weekly_report_day(config: &Config, diagnostics: &mut Diagnostics) {
    let day = config.weekly_report_day.as_str();
    if !day.is_some_and(|day| VALID_DAYS_OF_WEEK.contains(&day)) {
        diagnostics.push_error(format!(
            "weekly_report_day must be a day of the week (Monday-Sunday), got: {}",
            scalar::display(&config.weekly_report_day)
        ));
    }
}

fn check_weekly_report_hour(config: &Config, diagnostics: &mut Diagnostics) {
    match scalar::coerce_int(&config.weekly_report_hour) {
        Some(hour) if !(0..=23).contains(&hour) => {
            diagnostics.push_error("weekly_report_hour must be between 0 and 23");
        }
        Some(_) => {}
        None => {
            diagnostics.push_error(format!(
                "weekly_report_hour must be a number, got: {}",
                scalar::display(&config.weekly_report_hour)
            ));
        }
    }
}

fn check_weekly_report_discussion(config: &Config, diagnostics: &mut Diagnostics) {
    let Some(value) = &config.weekly_report_discussion else {
        return;
    };

    let is_integer = matches!(value, Value::Number(number) if number.is_i64() || number.is_u64());
    if !is_integer && !matches!(value, Value::String(_)) {
        diagnostics.push_error(format!(
            "weekly_report_discussion must be a number or string, got: {}",
            scalar::type_name(value)
        ));
    }
}

fn check_labels_source(config: &Config, diagnostics: &mut Diagnostics) {
    if let Some(path) = config.labels_source.as_deref()
        && !path.is_empty()
        && !Path::new(path).exists()
    {
        diagnostics.push_error(format!("Labels file not found: {path}"));
    }
}

// Tier lists are optional resources: a dangling path is worth flagging but
// must not block validation.
fn check_tier_files(config: &Config, diagnostics: &mut Diagnostics) {
    let tier_files = [
        ("tier1_repos", &config.tier1_repos),
        ("tier2_repos", &config.tier2_repos),
        ("tier3_repos", &config.tier3_repos),
    ];

    for (field, value) in tier_files {
        if let Some(path) = value.as_deref()
            && !path.is_empty()
            && !Path::new(path).exists()
        {
            diagnostics.push_warning(format!("{field} file not found: {path}"));
        }
    }
}
