use chrono::{TimeZone, Utc};
use examtrack::{Exam, PreparationLevel, Topic, UserProfile};

use crate::ExamTrackHarness;

fn sample_profile() -> UserProfile {
    let mut analysis = Exam::new(
        "Analysis II",
        Utc.with_ymd_and_hms(2026, 9, 14, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2026, 9, 14, 8, 30, 0).unwrap(),
    );
    let mut limits = Topic::with_estimate("Limits", 90);
    limits.preparation_level = PreparationLevel::Yellow;
    limits.notes = "Redo chapter 4 exercises".to_string();
    analysis.topics.push(limits);
    analysis.topics.push(Topic::new("Series"));

    let chemistry = Exam::new(
        "Organic Chemistry",
        Utc.with_ymd_and_hms(2026, 10, 2, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2026, 10, 2, 14, 0, 0).unwrap(),
    );

    UserProfile {
        name: "Jona".to_string(),
        email: Some("jona@example.org".to_string()),
        exams: vec![analysis, chemistry],
    }
}

#[test]
fn save_then_load_roundtrip() {
    let harness = ExamTrackHarness::new();
    let storage = harness.storage();
    let profile = sample_profile();

    storage.save(&profile).expect("save failed");
    let reloaded = storage.load();

    assert_eq!(reloaded, profile);
    // Ordering and nesting survive, not just field values.
    assert_eq!(reloaded.exams[0].topics[0].id, profile.exams[0].topics[0].id);
    assert_eq!(reloaded.exams[0].topics[0].notes, "Redo chapter 4 exercises");
}

#[test]
fn missing_blob_loads_empty_default() {
    let harness = ExamTrackHarness::new();
    let profile = harness.storage().load();
    assert!(profile.name.is_empty());
    assert!(profile.email.is_none());
    assert!(profile.exams.is_empty());
}

#[test]
fn corrupt_blob_falls_back_to_default() {
    let harness = ExamTrackHarness::new();
    let storage = harness.storage();
    std::fs::write(storage.profile_path(), b"{ not json").expect("seed corrupt blob");

    let profile = storage.load();
    assert_eq!(profile, UserProfile::default());
}

#[test]
fn legacy_blob_loads_with_documented_defaults() {
    let harness = ExamTrackHarness::new();
    let storage = harness.storage();
    // Older schema revision: no email, topics without estimate or notes.
    let legacy = r#"{
        "name": "Jona",
        "exams": [
            {
                "id": "7f2f8a3e-1b7f-4f7e-9a53-0d6a4e1c2b10",
                "subject": "Analysis II",
                "date": "2026-09-14T00:00:00Z",
                "time": "2026-09-14T08:30:00Z",
                "topics": [
                    {
                        "id": "3d1f5c8a-9f24-4a4a-8a3f-6f0b2c9d4e11",
                        "name": "Limits",
                        "preparationLevel": "yellow"
                    }
                ]
            }
        ]
    }"#;
    std::fs::write(storage.profile_path(), legacy).expect("seed legacy blob");

    let profile = storage.load();
    assert_eq!(profile.name, "Jona");
    assert!(profile.email.is_none());
    let topic = &profile.exams[0].topics[0];
    assert_eq!(topic.preparation_level, PreparationLevel::Yellow);
    assert_eq!(topic.estimated_minutes, 60);
    assert!(topic.notes.is_empty());
}
