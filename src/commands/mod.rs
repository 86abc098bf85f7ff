use anyhow::Result;
use serde::Serialize;

use crate::cli::Command;
use crate::dashboard::DashboardSummary;
use crate::pages::Pages;
use crate::render::{render_dashboard, render_list, OutputFormat, TableRow};
use crate::storage::{CollectionStore, Record};

pub mod documents;
pub mod feedback;
pub mod maintenance;
pub mod students;

/// Runs one console command against the pages. Returns the text to print,
/// if any; toasts go through the stores' notifier instead.
pub trait CommandRunner {
    fn run(&self, pages: &mut Pages, format: OutputFormat) -> Result<Option<String>>;
}

impl Command {
    pub fn run(&self, pages: &mut Pages, format: OutputFormat) -> Result<Option<String>> {
        match self {
            Command::Students { cmd } => cmd.run(pages, format),
            Command::Maintenance { cmd } => cmd.run(pages, format),
            Command::Documents { cmd } => cmd.run(pages, format),
            Command::Feedback { cmd } => cmd.run(pages, format),
            Command::Dashboard => {
                let summary = DashboardSummary::collect(pages);
                render_dashboard(&summary, format).map(Some)
            }
        }
    }
}

pub(crate) fn list_records<T>(
    store: &CollectionStore<T>,
    search: Option<&str>,
    format: OutputFormat,
    empty_message: &str,
) -> Result<Option<String>>
where
    T: Record + TableRow + Serialize,
{
    let rows: Vec<&T> = match search {
        Some(term) => store.search(term),
        None => store.list().iter().collect(),
    };
    render_list(&rows, format, empty_message).map(Some)
}
