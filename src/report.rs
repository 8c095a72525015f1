//! Final report rendering.

use std::fmt::Write;

use crate::record::{CheckRecord, Status};
use crate::ui::Theme;

const BANNER: &str = "============================================================";

/// The closing block printed whenever anything failed or warned. Static
/// advice, not derived from the record log.
const GENERAL_REMEDIES: [&str; 5] = [
    "check network connectivity and firewall settings",
    "try a different DNS server (e.g. 8.8.8.8 or 1.1.1.1)",
    "clear proxy variables: unset http_proxy https_proxy HTTP_PROXY HTTPS_PROXY",
    "use SSH instead of HTTPS: git@github.com:user/repo.git",
    "use a mirror of the Git host",
];

/// Render the diagnostic report for an ordered record log.
///
/// Pure function of its inputs: rendering the same log twice produces
/// identical text. When nothing failed or warned, the report is just the
/// success banner — the generic remedies are skipped.
pub fn render(records: &[CheckRecord], theme: &Theme) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", theme.border.apply_to(BANNER));
    let _ = writeln!(out, "{}", theme.header.apply_to("Diagnostic report"));
    let _ = writeln!(out, "{}", theme.border.apply_to(BANNER));

    let fails: Vec<&CheckRecord> = records.iter().filter(|r| r.status == Status::Fail).collect();
    let warnings: Vec<&CheckRecord> = records
        .iter()
        .filter(|r| r.status == Status::Warning)
        .collect();

    if fails.is_empty() && warnings.is_empty() {
        let _ = writeln!(
            out,
            "{}",
            theme
                .success
                .apply_to("All checks passed! Git connectivity looks good.")
        );
        return out;
    }

    if !fails.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}",
            theme.header.apply_to("Problems that need attention:")
        );
        for record in &fails {
            render_entry(&mut out, record, theme);
        }
    }

    if !warnings.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", theme.header.apply_to("Worth reviewing:"));
        for record in &warnings {
            render_entry(&mut out, record, theme);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", theme.header.apply_to("General remedies:"));
    for (i, remedy) in GENERAL_REMEDIES.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, remedy);
    }

    out
}

fn render_entry(out: &mut String, record: &CheckRecord, theme: &Theme) {
    let _ = writeln!(
        out,
        "  {} {}: {}",
        record.status.styled(theme),
        record.name,
        record.message
    );
    if let Some(solution) = &record.solution {
        let _ = writeln!(out, "    {}", theme.hint.apply_to(format!("↪ {solution}")));
    }
}
