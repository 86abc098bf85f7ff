//! Mock data each page starts with.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::types::{
    Document, DocumentCategory, DocumentStatus, FeedbackCategory, FeedbackItem, FeedbackStatus,
    FileSize, MaintenanceRequest, MaintenanceStatus, Priority, Rating, RecordId, Student,
    StudentStatus, StudyYear,
};

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_default()
        .and_time(NaiveTime::MIN)
        .and_utc()
}

fn student(
    id: u64,
    name: &str,
    email: &str,
    room_number: &str,
    program: &str,
    year: StudyYear,
    status: StudentStatus,
) -> Student {
    Student {
        id: RecordId::new(id),
        name: name.into(),
        email: email.into(),
        room_number: room_number.into(),
        program: program.into(),
        year,
        status,
    }
}

pub fn students() -> Vec<Student> {
    use StudentStatus::*;
    use StudyYear::*;
    vec![
        student(1, "John Doe", "john.doe@example.com", "A-101", "Computer Science", Second, Active),
        student(
            2,
            "Jane Smith",
            "jane.smith@example.com",
            "B-205",
            "Business Administration",
            Third,
            Active,
        ),
        student(
            3,
            "Michael Johnson",
            "michael.johnson@example.com",
            "C-310",
            "Engineering",
            First,
            Active,
        ),
        student(
            4,
            "Emily Davis",
            "emily.davis@example.com",
            "A-105",
            "Psychology",
            Fourth,
            Inactive,
        ),
        student(
            5,
            "David Wilson",
            "david.wilson@example.com",
            "B-210",
            "Medicine",
            Second,
            Pending,
        ),
    ]
}

/// Open requests are scheduled for `today`.
pub fn maintenance_requests(today: NaiveDate) -> Vec<MaintenanceRequest> {
    let request = |id: u64,
                   title: &str,
                   description: &str,
                   location: &str,
                   priority: Priority,
                   status: MaintenanceStatus,
                   created_at: DateTime<Utc>| MaintenanceRequest {
        id: RecordId::new(id),
        title: title.into(),
        description: description.into(),
        location: location.into(),
        priority,
        date: today,
        created_at,
        status,
    };
    vec![
        request(
            1,
            "Broken sink in room A101",
            "The sink in room A101 is leaking and needs to be fixed.",
            "Building A, Room 101",
            Priority::High,
            MaintenanceStatus::Pending,
            day(2023, 4, 15),
        ),
        request(
            2,
            "Light bulb replacement",
            "The light bulb in the hallway of Building B is burnt out.",
            "Building B, Hallway",
            Priority::Medium,
            MaintenanceStatus::InProgress,
            day(2023, 4, 18),
        ),
        request(
            3,
            "AC not working",
            "The air conditioning in room C205 is not working properly.",
            "Building C, Room 205",
            Priority::High,
            MaintenanceStatus::Completed,
            day(2023, 4, 10),
        ),
    ]
}

pub fn documents() -> Vec<Document> {
    vec![
        Document {
            id: RecordId::new(1),
            title: "Housing Contract".into(),
            category: DocumentCategory::Contracts,
            description: Some("Signed housing contract for the academic year 2023-2024".into()),
            file_name: "housing-contract-2023.pdf".into(),
            file_size: FileSize::from_bytes(1_258_291),
            uploaded_at: day(2023, 4, 15),
            status: DocumentStatus::Approved,
        },
        Document {
            id: RecordId::new(2),
            title: "Proof of Insurance".into(),
            category: DocumentCategory::Insurance,
            description: Some("Proof of renter's insurance coverage".into()),
            file_name: "insurance-proof.pdf".into(),
            file_size: FileSize::from_bytes(870_400),
            uploaded_at: day(2023, 4, 18),
            status: DocumentStatus::Pending,
        },
        Document {
            id: RecordId::new(3),
            title: "Medical Information".into(),
            category: DocumentCategory::Medical,
            description: Some("Medical information and emergency contacts".into()),
            file_name: "medical-info.pdf".into(),
            file_size: FileSize::from_bytes(1_572_864),
            uploaded_at: day(2023, 4, 10),
            status: DocumentStatus::Approved,
        },
    ]
}

pub fn feedback() -> Vec<FeedbackItem> {
    let rating = |stars: u8| Rating::new(stars).unwrap_or_default();
    vec![
        FeedbackItem {
            id: RecordId::new(1),
            title: "Great housing experience".into(),
            category: FeedbackCategory::Facilities,
            rating: rating(5),
            comment: "The facilities are excellent and well-maintained.".into(),
            created_at: day(2023, 4, 15),
            status: FeedbackStatus::Reviewed,
        },
        FeedbackItem {
            id: RecordId::new(2),
            title: "Noise issues in Building B".into(),
            category: FeedbackCategory::Environment,
            rating: rating(2),
            comment: "There's too much noise in the evenings, making it difficult to study."
                .into(),
            created_at: day(2023, 4, 18),
            status: FeedbackStatus::Pending,
        },
        FeedbackItem {
            id: RecordId::new(3),
            title: "Suggestion for common areas".into(),
            category: FeedbackCategory::Suggestions,
            rating: rating(4),
            comment: "It would be great to have more study spaces in the common areas.".into(),
            created_at: day(2023, 4, 10),
            status: FeedbackStatus::InProgress,
        },
    ]
}
