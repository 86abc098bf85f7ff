use anyhow::Result;

use super::{list_records, CommandRunner};
use crate::cli::StudentsCmd;
use crate::pages::Pages;
use crate::render::OutputFormat;
use crate::types::StudentDraft;

impl CommandRunner for StudentsCmd {
    fn run(&self, pages: &mut Pages, format: OutputFormat) -> Result<Option<String>> {
        let store = &mut pages.students;
        match self {
            StudentsCmd::List { search } => {
                list_records(store, search.as_deref(), format, "No students found.")
            }
            StudentsCmd::Add {
                name,
                email,
                room_number,
                program,
                year,
                status,
            } => {
                let draft = StudentDraft {
                    name: name.clone(),
                    email: email.clone(),
                    room_number: room_number.clone(),
                    program: program.clone(),
                    year: *year,
                    status: *status,
                };
                // rejection is reported by the store's notifier
                let _ = store.add(draft);
                Ok(None)
            }
            StudentsCmd::Edit {
                id,
                name,
                email,
                room_number,
                program,
                year,
                status,
            } => {
                let Some(current) = store.get(*id) else {
                    log::debug!("edit for unknown student id={}", id);
                    return Ok(None);
                };
                let mut edited = current.clone();
                if let Some(name) = name {
                    edited.name = name.clone();
                }
                if let Some(email) = email {
                    edited.email = email.clone();
                }
                if let Some(room_number) = room_number {
                    edited.room_number = room_number.clone();
                }
                if let Some(program) = program {
                    edited.program = program.clone();
                }
                if let Some(year) = year {
                    edited.year = *year;
                }
                if let Some(status) = status {
                    edited.status = *status;
                }
                let _ = store.update(edited);
                Ok(None)
            }
            StudentsCmd::Status { id, status } => {
                store.update_status(*id, *status);
                Ok(None)
            }
            StudentsCmd::Delete { id } => {
                store.remove(*id);
                Ok(None)
            }
            StudentsCmd::Undo => {
                store.undo_last_removal();
                Ok(None)
            }
        }
    }
}
