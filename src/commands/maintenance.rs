use anyhow::Result;

use super::{list_records, CommandRunner};
use crate::cli::MaintenanceCmd;
use crate::pages::Pages;
use crate::render::OutputFormat;
use crate::types::MaintenanceDraft;

impl CommandRunner for MaintenanceCmd {
    fn run(&self, pages: &mut Pages, format: OutputFormat) -> Result<Option<String>> {
        let store = &mut pages.maintenance;
        match self {
            MaintenanceCmd::List { search } => list_records(
                store,
                search.as_deref(),
                format,
                "No maintenance requests found.",
            ),
            MaintenanceCmd::Add {
                title,
                description,
                location,
                priority,
                date,
            } => {
                let draft = MaintenanceDraft {
                    title: title.clone(),
                    description: description.clone(),
                    location: location.clone(),
                    priority: priority.unwrap_or_default(),
                    date: *date,
                };
                let _ = store.add(draft);
                Ok(None)
            }
            MaintenanceCmd::Status { id, status } => {
                store.update_status(*id, *status);
                Ok(None)
            }
            MaintenanceCmd::Delete { id } => {
                store.remove(*id);
                Ok(None)
            }
            MaintenanceCmd::Undo => {
                store.undo_last_removal();
                Ok(None)
            }
        }
    }
}
