use chrono::{NaiveDate, TimeZone, Utc};
use studyboard_core::{Priority, Stage, Task, TaskDraft, TaskValidationError};
use uuid::Uuid;

fn created_at() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap()
}

#[test]
fn new_task_enters_backlog_with_defaults() {
    let task = Task::new(
        TaskDraft {
            title: "read chapter 4".to_owned(),
            subject: "history".to_owned(),
            ..TaskDraft::default()
        },
        created_at(),
    )
    .unwrap();

    assert!(!task.id.is_nil());
    assert_eq!(task.stage, Stage::Backlog);
    assert_eq!(task.priority, Priority::Medium);
    assert_eq!(task.due_date, None);
    assert_eq!(task.description, "");
    assert_eq!(task.created_at, created_at());
    assert!(!task.is_done());
}

#[test]
fn text_fields_are_trimmed() {
    let task = Task::new(
        TaskDraft {
            title: "  essay draft  ".to_owned(),
            subject: "\tenglish\n".to_owned(),
            description: "  two pages minimum  ".to_owned(),
            ..TaskDraft::default()
        },
        created_at(),
    )
    .unwrap();

    assert_eq!(task.title, "essay draft");
    assert_eq!(task.subject, "english");
    assert_eq!(task.description, "two pages minimum");
}

#[test]
fn whitespace_only_title_is_rejected() {
    let err = Task::new(
        TaskDraft {
            title: "   ".to_owned(),
            subject: "physics".to_owned(),
            ..TaskDraft::default()
        },
        created_at(),
    )
    .unwrap_err();

    assert_eq!(err, TaskValidationError::EmptyTitle);
    assert!(err.to_string().contains("title"));
}

#[test]
fn whitespace_only_subject_is_rejected() {
    let err = Task::new(
        TaskDraft {
            title: "lab report".to_owned(),
            subject: " \n ".to_owned(),
            ..TaskDraft::default()
        },
        created_at(),
    )
    .unwrap_err();

    assert_eq!(err, TaskValidationError::EmptySubject);
}

#[test]
fn two_tasks_from_identical_drafts_get_distinct_ids() {
    let draft = TaskDraft {
        title: "same".to_owned(),
        subject: "same".to_owned(),
        ..TaskDraft::default()
    };

    let first = Task::new(draft.clone(), created_at()).unwrap();
    let second = Task::new(draft, created_at()).unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut task = Task::with_id(
        id,
        TaskDraft {
            title: "midterm prep".to_owned(),
            subject: "chemistry".to_owned(),
            priority: Priority::High,
            due_date: NaiveDate::from_ymd_opt(2024, 6, 15),
            description: "chapters 1-6".to_owned(),
        },
        created_at(),
    )
    .unwrap();
    task.stage = Stage::InProgress;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "midterm prep");
    assert_eq!(json["subject"], "chemistry");
    assert_eq!(json["priority"], "High");
    assert_eq!(json["dueDate"], "2024-06-15");
    assert_eq!(json["description"], "chapters 1-6");
    assert_eq!(json["stage"], "inprogress");
    assert!(json["createdAt"].is_string());

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn missing_due_date_serializes_as_empty_string() {
    let task = Task::new(
        TaskDraft {
            title: "no deadline".to_owned(),
            subject: "art".to_owned(),
            ..TaskDraft::default()
        },
        created_at(),
    )
    .unwrap();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["dueDate"], "");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded.due_date, None);
}

#[test]
fn past_due_dates_are_accepted() {
    // Retroactively created tasks may already be overdue, e.g. via import.
    let task = Task::new(
        TaskDraft {
            title: "overdue import".to_owned(),
            subject: "math".to_owned(),
            due_date: NaiveDate::from_ymd_opt(2020, 1, 1),
            ..TaskDraft::default()
        },
        created_at(),
    )
    .unwrap();

    assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2020, 1, 1));
}

#[test]
fn all_stages_serialize_lowercase() {
    for (stage, expected) in [
        (Stage::Backlog, "backlog"),
        (Stage::Todo, "todo"),
        (Stage::InProgress, "inprogress"),
        (Stage::Done, "done"),
    ] {
        assert_eq!(serde_json::to_value(stage).unwrap(), expected);
        assert_eq!(stage.as_str(), expected);
    }
}
