use clap::Subcommand;

use crate::types::{FeedbackCategory, FeedbackStatus, Rating, RecordId};

#[derive(Subcommand, Debug, Clone)]
pub enum FeedbackCmd {
    #[command(about = "List feedback")]
    List {
        #[arg(short, long, value_name = "TERM")]
        search: Option<String>,
    },
    #[command(about = "Submit feedback")]
    Add {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, help = "Facilities, Services, Environment or Suggestions")]
        category: Option<FeedbackCategory>,
        #[arg(long, value_name = "1-5", help = "Star rating (default 3)")]
        rating: Option<Rating>,
        #[arg(long, default_value = "")]
        comment: String,
    },
    #[command(about = "Change a feedback item's status")]
    Status {
        #[arg(value_name = "ID")]
        id: RecordId,
        #[arg(value_name = "STATUS", help = "pending, in-progress or reviewed")]
        status: FeedbackStatus,
    },
    #[command(about = "Delete feedback (can be undone)")]
    Delete {
        #[arg(value_name = "ID")]
        id: RecordId,
    },
    #[command(about = "Restore the last deleted feedback")]
    Undo,
}
