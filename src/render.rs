use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::ValueEnum;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Table};
use serde::Serialize;

use crate::dashboard::{relative_time, DashboardSummary};
use crate::types::{Document, FeedbackItem, MaintenanceRequest, Student};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// A record that can be shown as one table row.
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn short_datetime(at: DateTime<Utc>) -> String {
    short_date(at.date_naive())
}

impl TableRow for Student {
    const HEADERS: &'static [&'static str] =
        &["ID", "Name", "Email", "Room", "Program", "Year", "Status"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.room_number.clone(),
            self.program.clone(),
            self.year.to_string(),
            self.status.to_string(),
        ]
    }
}

impl TableRow for MaintenanceRequest {
    const HEADERS: &'static [&'static str] =
        &["ID", "Title", "Location", "Priority", "Status", "Date"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.location.clone(),
            self.priority.to_string(),
            self.status.to_string(),
            short_date(self.date),
        ]
    }
}

impl TableRow for Document {
    const HEADERS: &'static [&'static str] = &[
        "ID", "Document", "Category", "File", "Size", "Status", "Uploaded",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.category.to_string(),
            self.file_name.clone(),
            self.file_size.to_string(),
            self.status.to_string(),
            short_datetime(self.uploaded_at),
        ]
    }
}

impl TableRow for FeedbackItem {
    const HEADERS: &'static [&'static str] =
        &["ID", "Title", "Category", "Rating", "Status", "Date"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.category.to_string(),
            self.rating.stars(),
            self.status.to_string(),
            short_datetime(self.created_at),
        ]
    }
}

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
        );
    table
}

pub fn render_list<T: TableRow + Serialize>(
    rows: &[&T],
    format: OutputFormat,
    empty_message: &str,
) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(rows).context("encoding rows as JSON"),
        OutputFormat::Table if rows.is_empty() => Ok(empty_message.to_string()),
        OutputFormat::Table => {
            let mut table = new_table(T::HEADERS);
            for row in rows {
                table.add_row(row.cells());
            }
            Ok(table.to_string())
        }
    }
}

pub fn render_dashboard(summary: &DashboardSummary, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return serde_json::to_string_pretty(summary).context("encoding dashboard as JSON");
    }

    let mut metrics = new_table(&["Metric", "Value"]);
    let rating = summary
        .average_rating
        .map(|r| format!("{r:.1} / 5"))
        .unwrap_or_else(|| "-".to_string());
    for (label, value) in [
        (
            "Total students",
            format!("{} ({} active)", summary.total_students, summary.active_students),
        ),
        (
            "Occupancy rate",
            format!(
                "{}% ({}% rooms available)",
                summary.occupancy_rate, summary.rooms_available
            ),
        ),
        (
            "Maintenance requests",
            format!(
                "{} open ({} high priority)",
                summary.open_maintenance_requests, summary.high_priority_requests
            ),
        ),
        ("Pending documents", summary.pending_documents.to_string()),
        ("Feedback responses", summary.feedback_responses.to_string()),
        ("Average rating", rating),
    ] {
        metrics.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    if let Some(column) = metrics.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    let mut out = metrics.to_string();
    out.push_str("\nRecent activity\n");
    if summary.recent_activity.is_empty() {
        out.push_str("  (none yet)");
    } else {
        let now = Utc::now();
        let lines: Vec<String> = summary
            .recent_activity
            .iter()
            .map(|a| format!("  - {} ({})", a.title, relative_time(a.at, now)))
            .collect();
        out.push_str(&lines.join("\n"));
    }
    Ok(out)
}
