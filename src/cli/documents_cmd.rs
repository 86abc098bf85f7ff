use clap::Subcommand;

use crate::types::{DocumentCategory, DocumentStatus, RecordId};

#[derive(Subcommand, Debug, Clone)]
pub enum DocumentsCmd {
    #[command(about = "List documents")]
    List {
        #[arg(short, long, value_name = "TERM")]
        search: Option<String>,
    },
    #[command(about = "Record an uploaded document")]
    Add {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, help = "Contracts, Insurance, Medical, Financial or Other")]
        category: Option<DocumentCategory>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, value_name = "NAME", requires = "file_size")]
        file_name: Option<String>,
        #[arg(long, value_name = "BYTES", requires = "file_name")]
        file_size: Option<u64>,
    },
    #[command(about = "Change a document's review status")]
    Status {
        #[arg(value_name = "ID")]
        id: RecordId,
        #[arg(value_name = "STATUS", help = "pending, approved or rejected")]
        status: DocumentStatus,
    },
    #[command(about = "Delete a document (can be undone)")]
    Delete {
        #[arg(value_name = "ID")]
        id: RecordId,
    },
    #[command(about = "Restore the last deleted document")]
    Undo,
}
