mod args;
mod command;
mod documents_cmd;
mod feedback_cmd;
mod maintenance_cmd;
mod students_cmd;
mod tokenize;

pub use args::Cli;
pub use command::{Command, SessionLine};
pub use documents_cmd::DocumentsCmd;
pub use feedback_cmd::FeedbackCmd;
pub use maintenance_cmd::MaintenanceCmd;
pub use students_cmd::StudentsCmd;
pub use tokenize::{split_line, TokenizeError};

pub use args::parse;
