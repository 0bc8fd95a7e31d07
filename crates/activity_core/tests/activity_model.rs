use activity_core::{
    Activity, ActivityId, ActivityKind, Event, IdSequence, Task, TaskStatus, ValidationError,
    DATE_FORMAT,
};
use chrono::Local;

fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

#[test]
fn create_task_defaults_to_open_with_detail() {
    let ids = IdSequence::new();
    for (index, description) in ["Buy milk", "  padded  ", "ñandú"].into_iter().enumerate() {
        let task = Task::create(&ids, description).unwrap();
        let expected_number = index as u32 + 1;

        assert_eq!(task.status(), TaskStatus::Open);
        assert_eq!(task.id(), ActivityId::task(expected_number));
        assert_eq!(task.detail(), format!("{expected_number} - {description}"));
    }
}

#[test]
fn create_task_rejects_empty_and_blank_descriptions() {
    let ids = IdSequence::new();
    assert_eq!(
        Task::create(&ids, "").unwrap_err(),
        ValidationError::BlankDescription
    );
    assert_eq!(
        Task::create(&ids, "   ").unwrap_err(),
        ValidationError::BlankDescription
    );
    assert_eq!(ids.last_issued(), 0);
}

#[test]
fn task_summary_matches_expected_layout() {
    let ids = IdSequence::new();
    let task = Task::create(&ids, "Buy milk").unwrap();

    assert_eq!(
        Activity::from(task).render_summary(),
        format!(
            "Task=[id: 1, creationDate: {}, description: Buy milk, status: OPEN]",
            today()
        )
    );
}

#[test]
fn create_event_accepts_pattern_dates_without_calendar_check() {
    let ids = IdSequence::new();
    for occurs_on in ["15/03/2025", "31/02/2025", "99/99/9999"] {
        let event = Event::create(&ids, "Launch", "HQ", occurs_on).unwrap();
        assert_eq!(event.occurs_on(), occurs_on);
    }
}

#[test]
fn create_event_rejects_dates_outside_pattern() {
    let ids = IdSequence::new();
    for occurs_on in ["2025-03-15", "1/1/2025", "31-02-2025", "15/3/2025"] {
        let err = Event::create(&ids, "Launch", "HQ", occurs_on).unwrap_err();
        assert_eq!(err, ValidationError::InvalidOccursOn(occurs_on.to_string()));
    }
}

#[test]
fn create_event_rejects_blank_location() {
    let ids = IdSequence::new();
    let err = Event::create(&ids, "Launch", "   ", "15/03/2025").unwrap_err();
    assert_eq!(err, ValidationError::BlankLocation);
}

#[test]
fn event_detail_and_summary() {
    let ids = IdSequence::new();
    let event = Event::create(&ids, "Launch", "HQ", "15/03/2025").unwrap();

    assert_eq!(event.detail(), "1 - HQ - Launch");
    assert_eq!(
        event.to_string(),
        format!(
            "Event=[id: 1, creationDate: {}, description: Launch, occursOn: 15/03/2025, location: HQ]",
            today()
        )
    );
}

#[test]
fn task_and_event_sequences_are_independent() {
    let task_ids = IdSequence::new();
    let event_ids = IdSequence::new();

    let mut task_numbers = Vec::new();
    for round in 0..5 {
        task_numbers.push(Task::create(&task_ids, format!("task {round}")).unwrap().id().number);
        Event::create(&event_ids, "sync", "room", "01/01/2026").unwrap();
    }

    assert_eq!(task_numbers, vec![1, 2, 3, 4, 5]);
    assert_eq!(event_ids.last_issued(), 5);
}

#[test]
fn activity_accessors_dispatch_by_variant() {
    let ids = IdSequence::new();
    let task: Activity = Task::create(&ids, "write report").unwrap().into();
    let event: Activity = Event::create(&ids, "demo", "lab", "02/02/2026").unwrap().into();

    assert_eq!(task.kind(), ActivityKind::Task);
    assert_eq!(task.task_status(), Some(TaskStatus::Open));
    assert!(task.as_event().is_none());

    assert_eq!(event.kind(), ActivityKind::Event);
    assert_eq!(event.task_status(), None);
    assert_eq!(event.as_event().unwrap().location(), "lab");
    assert_eq!(event.description(), "demo");
}

#[test]
fn activity_serialization_uses_expected_wire_fields() {
    let ids = IdSequence::new();
    let mut task = Task::create(&ids, "ship release").unwrap();
    task.close();

    let json = serde_json::to_value(Activity::from(task)).unwrap();
    assert_eq!(json["type"], "task");
    assert_eq!(json["id"]["kind"], "task");
    assert_eq!(json["id"]["number"], 1);
    assert_eq!(json["description"], "ship release");
    assert_eq!(json["status"], "CLOSED");

    let event = Event::create(&ids, "launch", "HQ", "15/03/2025").unwrap();
    let json = serde_json::to_value(Activity::from(event)).unwrap();
    assert_eq!(json["type"], "event");
    assert_eq!(json["location"], "HQ");
    assert_eq!(json["occurs_on"], "15/03/2025");
}
