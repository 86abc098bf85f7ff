use clap::Subcommand;

use crate::types::{RecordId, StudentStatus, StudyYear};

#[derive(Subcommand, Debug, Clone)]
pub enum StudentsCmd {
    #[command(about = "List students, optionally filtered by a search term")]
    List {
        #[arg(
            short,
            long,
            value_name = "TERM",
            help = "Match name, email, room or program (case-insensitive)"
        )]
        search: Option<String>,
    },
    #[command(about = "Add a student")]
    Add {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long = "room", value_name = "ROOM", default_value = "")]
        room_number: String,
        #[arg(long, default_value = "")]
        program: String,
        #[arg(long, value_name = "YEAR", help = "1st Year .. 5th Year")]
        year: Option<StudyYear>,
        #[arg(long, help = "Active, Inactive or Pending (default Pending)")]
        status: Option<StudentStatus>,
    },
    #[command(about = "Edit a student; omitted fields keep their value")]
    Edit {
        #[arg(value_name = "ID")]
        id: RecordId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long = "room", value_name = "ROOM")]
        room_number: Option<String>,
        #[arg(long)]
        program: Option<String>,
        #[arg(long, value_name = "YEAR")]
        year: Option<StudyYear>,
        #[arg(long)]
        status: Option<StudentStatus>,
    },
    #[command(about = "Change a student's status")]
    Status {
        #[arg(value_name = "ID")]
        id: RecordId,
        #[arg(value_name = "STATUS")]
        status: StudentStatus,
    },
    #[command(about = "Delete a student (can be undone)")]
    Delete {
        #[arg(value_name = "ID")]
        id: RecordId,
    },
    #[command(about = "Restore the last deleted student")]
    Undo,
}
