use colored::Colorize;
use serde::Serialize;
use std::fmt::Write as _;
use std::time::Duration;

#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub detail: String,
    pub duration_ms: u64,
}

impl CheckResult {
    #[must_use]
    pub fn new(name: &str, outcome: Result<String, String>, elapsed: Duration) -> Self {
        let (passed, detail) = match outcome {
            Ok(detail) => (true, detail),
            Err(detail) => (false, detail),
        };
        Self {
            name: name.to_string(),
            passed,
            detail,
            duration_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub scenario: String,
    pub base_url: String,
    pub started_at: String,
    pub checks: Vec<CheckResult>,
}

impl Report {
    #[must_use]
    pub fn new(scenario: &str, base_url: &str) -> Self {
        Self {
            scenario: scenario.to_string(),
            base_url: base_url.to_string(),
            started_at: chrono::Utc::now().to_rfc3339(),
            checks: Vec::new(),
        }
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    #[must_use]
    pub fn failures(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed).count()
    }
}

#[must_use]
pub fn render_console(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "📊 Contract Results".bright_cyan().bold());
    let _ = writeln!(out, "{}", "===================".cyan());
    let _ = writeln!(out, "Scenario: {} against {}", report.scenario, report.base_url);
    let _ = writeln!(out, "Started: {}", report.started_at);
    for check in &report.checks {
        let status = if check.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        let _ = writeln!(
            out,
            "{status} {} ({} ms) - {}",
            check.name.bold(),
            check.duration_ms,
            check.detail
        );
    }
    let total = report.checks.len();
    let failed = report.failures();
    let _ = writeln!(
        out,
        "Passed: {}  Failed: {}",
        (total - failed).to_string().green(),
        failed.to_string().red()
    );
    out
}

/// # Errors
/// Fails only if the report cannot be serialized.
pub fn render_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        let mut report = Report::new("smoke", "http://localhost:5000/api");
        report.checks.push(CheckResult::new(
            "health",
            Ok("ok".to_string()),
            Duration::from_millis(12),
        ));
        report.checks.push(CheckResult::new(
            "guess",
            Err("similarity 1.2 outside [0, 1]".to_string()),
            Duration::from_millis(30),
        ));
        report
    }

    #[test]
    fn failing_check_fails_the_report() {
        let report = sample();
        assert!(!report.passed());
        assert_eq!(report.failures(), 1);
    }

    #[test]
    fn console_report_lists_every_check() {
        let text = render_console(&sample());
        assert!(text.contains("health"));
        assert!(text.contains("similarity 1.2 outside [0, 1]"));
        assert!(text.contains("12 ms"));
    }

    #[test]
    fn json_report_is_machine_readable() {
        let json = render_json(&sample()).expect("serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["scenario"], "smoke");
        assert_eq!(value["checks"][1]["passed"], false);
        assert_eq!(value["checks"][0]["duration_ms"], 12);
    }
}
