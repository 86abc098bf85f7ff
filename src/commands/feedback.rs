use anyhow::Result;

use super::{list_records, CommandRunner};
use crate::cli::FeedbackCmd;
use crate::pages::Pages;
use crate::render::OutputFormat;
use crate::types::FeedbackDraft;

impl CommandRunner for FeedbackCmd {
    fn run(&self, pages: &mut Pages, format: OutputFormat) -> Result<Option<String>> {
        let store = &mut pages.feedback;
        match self {
            FeedbackCmd::List { search } => {
                list_records(store, search.as_deref(), format, "No feedback found.")
            }
            FeedbackCmd::Add {
                title,
                category,
                rating,
                comment,
            } => {
                let draft = FeedbackDraft {
                    title: title.clone(),
                    category: category.unwrap_or_default(),
                    rating: rating.unwrap_or_default(),
                    comment: comment.clone(),
                };
                let _ = store.add(draft);
                Ok(None)
            }
            FeedbackCmd::Status { id, status } => {
                store.update_status(*id, *status);
                Ok(None)
            }
            FeedbackCmd::Delete { id } => {
                store.remove(*id);
                Ok(None)
            }
            FeedbackCmd::Undo => {
                store.undo_last_removal();
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::Configuration;
    use crate::notify::RecordingNotifier;
    use crate::types::{FeedbackCategory, Rating, RecordId};
    use std::sync::Arc;

    #[test]
    fn feedback_defaults_to_three_stars() {
        let mut pages = Pages::new(&Configuration::default(), Arc::new(RecordingNotifier::new()));
        FeedbackCmd::Add {
            title: "Gym hours".into(),
            category: Some(FeedbackCategory::Services),
            rating: None,
            comment: "Please open the gym before 7am.".into(),
        }
        .run(&mut pages, OutputFormat::Table)
        .unwrap();
        let item = pages.feedback.get(RecordId::new(4)).cloned().unwrap();
        assert_eq!(item.rating, Rating::default());
        assert_eq!(item.category, FeedbackCategory::Services);
    }

    #[test]
    fn empty_feedback_page() {
        let config = Configuration {
            seed: false,
            ..Configuration::default()
        };
        let mut pages = Pages::new(&config, Arc::new(RecordingNotifier::new()));
        let out = FeedbackCmd::List { search: None }
            .run(&mut pages, OutputFormat::Table)
            .unwrap();
        assert_eq!(out.as_deref(), Some("No feedback found."));
    }
}
