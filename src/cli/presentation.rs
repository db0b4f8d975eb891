//! CLI presentation: text and json formatters per command.

use crate::build::BuildReport;
use crate::error::SiteError;
use crate::locale::Language;
use crate::normalize::ContactRecord;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;

pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, SiteError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn format_paths(slugs: &[String], format: &str) -> Result<String, SiteError> {
    if format == "json" {
        return to_pretty_json(slugs);
    }
    if slugs.is_empty() {
        return Ok("No photographer pages.".to_string());
    }
    Ok(slugs
        .iter()
        .map(|slug| format!("/photographers/{}", slug))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Contacts table: one row per contact, info lines stacked in one cell.
pub fn format_contacts(
    contacts: &[ContactRecord],
    language: Language,
    format: &str,
) -> Result<String, SiteError> {
    if format == "json" {
        let rows: Vec<serde_json::Value> = contacts
            .iter()
            .map(|c| {
                serde_json::json!({
                    "id": c.id,
                    "country": c.country(language),
                    "lines": c.info_lines(language),
                })
            })
            .collect();
        return to_pretty_json(&rows);
    }
    if contacts.is_empty() {
        return Ok("No contacts.".to_string());
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Country", "Contact"]);
    for contact in contacts {
        let lines = contact
            .info_lines(language)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![contact.country(language).to_string(), lines]);
    }
    Ok(format!(
        "{}\n\n{}",
        format_section_heading(&format!("Contacts ({})", language)),
        table
    ))
}

pub fn format_build_report(report: &BuildReport, out_dir: &str) -> String {
    let mut out = format!("{}\n\n", format_section_heading("Build"));
    out.push_str(&format!("  Output: {}\n", out_dir));
    out.push_str(&format!("  Source: {} ({:?} mode)\n", report.source, report.mode));
    out.push_str(&format!(
        "  Pages written: {}\n",
        report.pages.len().to_string().green()
    ));
    if !report.not_found.is_empty() {
        out.push_str(&format!(
            "  Not found: {} ({})\n",
            report.not_found.len().to_string().yellow(),
            report.not_found.join(", ")
        ));
    }
    if !report.skipped.is_empty() {
        out.push_str(&format!(
            "  Skipped: {} ({})\n",
            report.skipped.len().to_string().red(),
            report.skipped.join(", ")
        ));
    }
    out
}
