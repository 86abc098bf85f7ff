use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{is_blank, RecordId, ValidationError};
use crate::storage::{Editable, Record};

labelled_enum! {
    pub enum StudentStatus ("student status") {
        Active => "Active",
        Inactive => "Inactive",
        Pending => "Pending",
    }
}

impl Default for StudentStatus {
    fn default() -> Self {
        StudentStatus::Pending
    }
}

labelled_enum! {
    pub enum StudyYear ("year") {
        First => "1st Year",
        Second => "2nd Year",
        Third => "3rd Year",
        Fourth => "4th Year",
        Fifth => "5th Year",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Student {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub room_number: String,
    pub program: String,
    pub year: StudyYear,
    pub status: StudentStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
    pub room_number: String,
    pub program: String,
    pub year: Option<StudyYear>,
    pub status: Option<StudentStatus>,
}

fn missing_fields(
    name: &str,
    email: &str,
    room_number: &str,
    program: &str,
    has_year: bool,
) -> Vec<&'static str> {
    let mut missing = Vec::new();
    for (field, value) in [
        ("name", name),
        ("email", email),
        ("room number", room_number),
        ("program", program),
    ] {
        if is_blank(value) {
            missing.push(field);
        }
    }
    if !has_year {
        missing.push("year");
    }
    missing
}

impl Record for Student {
    type Status = StudentStatus;
    type Draft = StudentDraft;

    const SUBJECT: &'static str = "Student";
    const ADDED: &'static str = "Student added successfully";

    fn from_draft(
        id: RecordId,
        draft: StudentDraft,
        _now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let missing = missing_fields(
            &draft.name,
            &draft.email,
            &draft.room_number,
            &draft.program,
            draft.year.is_some(),
        );
        let year = match draft.year {
            Some(year) if missing.is_empty() => year,
            _ => return Err(ValidationError::MissingRequired { fields: missing }),
        };
        Ok(Student {
            id,
            name: draft.name,
            email: draft.email,
            room_number: draft.room_number,
            program: draft.program,
            year,
            status: draft.status.unwrap_or_default(),
        })
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn status(&self) -> StudentStatus {
        self.status
    }

    fn set_status(&mut self, status: StudentStatus) {
        self.status = status;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.room_number.as_str(),
            self.program.as_str(),
        ]
    }
}

impl Editable for Student {
    fn validate(&self) -> Result<(), ValidationError> {
        let missing = missing_fields(
            &self.name,
            &self.email,
            &self.room_number,
            &self.program,
            true,
        );
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingRequired { fields: missing })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn draft() -> StudentDraft {
        StudentDraft {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            room_number: "D-404".into(),
            program: "Mathematics".into(),
            year: Some(StudyYear::Second),
            status: None,
        }
    }

    #[test]
    fn draft_without_status_starts_pending() {
        let student = Student::from_draft(RecordId::new(9), draft(), Utc::now()).unwrap();
        assert_eq!(student.id, RecordId::new(9));
        assert_eq!(student.status, StudentStatus::Pending);
        assert_eq!(student.room_number, "D-404");
    }

    #[test]
    fn draft_status_is_kept() {
        let mut d = draft();
        d.status = Some(StudentStatus::Active);
        let student = Student::from_draft(RecordId::FIRST, d, Utc::now()).unwrap();
        assert_eq!(student.status, StudentStatus::Active);
    }

    #[test]
    fn blank_fields_are_reported_together() {
        let mut d = draft();
        d.email = "  ".into();
        d.year = None;
        let err = Student::from_draft(RecordId::FIRST, d, Utc::now()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingRequired {
                fields: vec!["email", "year"]
            }
        );
    }

    #[test]
    fn empty_draft_is_rejected() {
        let err = Student::from_draft(RecordId::FIRST, StudentDraft::default(), Utc::now())
            .unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all required fields");
    }

    #[test]
    fn edited_student_must_keep_required_fields() {
        let mut student = Student::from_draft(RecordId::FIRST, draft(), Utc::now()).unwrap();
        assert!(student.validate().is_ok());
        student.program.clear();
        assert!(student.validate().is_err());
    }

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!(StudentStatus::from_str("inactive").unwrap(), StudentStatus::Inactive);
        assert_eq!(StudyYear::from_str("3RD YEAR").unwrap(), StudyYear::Third);
        let err = StudyYear::from_str("6th Year").unwrap_err();
        assert!(err.to_string().contains("1st Year, 2nd Year"));
    }
}
