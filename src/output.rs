use crate::report::AuditReport;

pub fn format_table_output(report: &AuditReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("Project: {}\n", report.project));
    for license in report.licenses.iter() {
        output.push_str(&format!("License: {}\n", license));
    }

    output.push_str("\nFiles:\n");
    if report.summary.is_empty() {
        output.push_str("(no files audited)\n");
    }
    for (path, &compliant) in &report.files {
        let mark = if compliant { "✅" } else { "❌" };
        output.push_str(&format!("{}: {}\n", path, mark));
    }

    let summary = &report.summary;
    output.push_str(&format!("\nTotal files: {}\n", summary.total_files));
    output.push_str(&format!("Compliant files: {}\n", summary.compliant_files));
    output.push_str(&format!("Non-compliant files: {}\n", summary.non_compliant_files));
    output.push_str(&format!("\nScore: {:.2}%\n", summary.score));

    output
}

pub fn format_json_output(report: &AuditReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
