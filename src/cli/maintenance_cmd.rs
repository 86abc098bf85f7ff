use chrono::NaiveDate;
use clap::Subcommand;

use crate::types::{MaintenanceStatus, Priority, RecordId};

#[derive(Subcommand, Debug, Clone)]
pub enum MaintenanceCmd {
    #[command(about = "List maintenance requests")]
    List {
        #[arg(short, long, value_name = "TERM")]
        search: Option<String>,
    },
    #[command(about = "Submit a maintenance request")]
    Add {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long, help = "low, medium or high (default medium)")]
        priority: Option<Priority>,
        #[arg(long, value_name = "YYYY-MM-DD", help = "Scheduled date (default today)")]
        date: Option<NaiveDate>,
    },
    #[command(about = "Change a request's status")]
    Status {
        #[arg(value_name = "ID")]
        id: RecordId,
        #[arg(value_name = "STATUS", help = "pending, in-progress or completed")]
        status: MaintenanceStatus,
    },
    #[command(about = "Delete a request (can be undone)")]
    Delete {
        #[arg(value_name = "ID")]
        id: RecordId,
    },
    #[command(about = "Restore the last deleted request")]
    Undo,
}
