use clap::{Parser, Subcommand};

use crate::cli::{DocumentsCmd, FeedbackCmd, MaintenanceCmd, StudentsCmd};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(
        about = "Student roster",
        long_about = "List, search, add, edit and remove student profiles."
    )]
    Students {
        #[command(subcommand)]
        cmd: StudentsCmd,
    },
    #[command(
        about = "Maintenance requests",
        long_about = "Submit maintenance requests and track them from pending to completed."
    )]
    Maintenance {
        #[command(subcommand)]
        cmd: MaintenanceCmd,
    },
    #[command(
        about = "Document uploads",
        long_about = "Record uploaded documents (metadata only) and review them."
    )]
    Documents {
        #[command(subcommand)]
        cmd: DocumentsCmd,
    },
    #[command(about = "Feedback log")]
    Feedback {
        #[command(subcommand)]
        cmd: FeedbackCmd,
    },
    #[command(about = "Show the dashboard summary and recent activity")]
    Dashboard,
}

/// One line typed into a session, parsed without a binary name.
#[derive(Parser, Debug)]
#[command(
    name = "dormdesk",
    no_binary_name = true,
    disable_version_flag = true
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub cmd: Command,
}
