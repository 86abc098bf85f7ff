use anyhow::Result;

use super::{list_records, CommandRunner};
use crate::cli::DocumentsCmd;
use crate::pages::Pages;
use crate::render::OutputFormat;
use crate::types::{DocumentDraft, FileSize, FileUpload};

impl CommandRunner for DocumentsCmd {
    fn run(&self, pages: &mut Pages, format: OutputFormat) -> Result<Option<String>> {
        let store = &mut pages.documents;
        match self {
            DocumentsCmd::List { search } => {
                list_records(store, search.as_deref(), format, "No documents found.")
            }
            DocumentsCmd::Add {
                title,
                category,
                description,
                file_name,
                file_size,
            } => {
                let file = match (file_name, file_size) {
                    (Some(name), Some(size)) => Some(FileUpload {
                        name: name.clone(),
                        size: FileSize::from_bytes(*size),
                    }),
                    _ => None,
                };
                let draft = DocumentDraft {
                    title: title.clone(),
                    category: category.unwrap_or_default(),
                    description: description.clone(),
                    file,
                };
                let _ = store.add(draft);
                Ok(None)
            }
            DocumentsCmd::Status { id, status } => {
                store.update_status(*id, *status);
                Ok(None)
            }
            DocumentsCmd::Delete { id } => {
                store.remove(*id);
                Ok(None)
            }
            DocumentsCmd::Undo => {
                store.undo_last_removal();
                Ok(None)
            }
        }
    }
}
