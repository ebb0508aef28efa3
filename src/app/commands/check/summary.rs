//! Human-readable summary of a loaded configuration.

use crate::domain::Config;
use crate::domain::scalar;

/// Render the post-validation summary.
///
/// Pure formatting: safe to call on an unvalidated configuration, where it
/// degrades to showing `N/A` placeholders.
pub fn render(config: &Config) -> String {
    let mut out = String::new();
    out.push_str("✅ Configuration loaded successfully\n");
    out.push_str(&format!(
        "   Organization: {}\n",
        config.organization.as_deref().unwrap_or("N/A")
    ));
    out.push_str(&format!(
        "   Cache TTL: {} seconds\n",
        scalar::display_or_na(&config.cache_ttl)
    ));
    out.push_str(&format!(
        "   Stale issue threshold: {} days\n",
        scalar::display_or_na(&config.stale_issue_days)
    ));
    out.push_str(&format!(
        "   Weekly report: {}s at {}:00\n",
        scalar::display_or_na(&config.weekly_report_day),
        scalar::display_or_na(&config.weekly_report_hour)
    ));
    out
}
