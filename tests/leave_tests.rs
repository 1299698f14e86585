use attendance_tool::leave::{LeaveCategory, LeaveInterval, LeaveMap};
use attendance_tool::roster;

#[test]
fn leave_records_round_trip_as_json() {
    let json = r#"{"02/09": {"category": "sick", "start": "09:00", "end": "12:00"}}"#;
    let map: LeaveMap = serde_json::from_str(json).unwrap();
    assert_eq!(map["02/09"].category, LeaveCategory::Sick);
    assert_eq!(map["02/09"].start, "09:00");

    let back = serde_json::to_string(&map).unwrap();
    let again: LeaveMap = serde_json::from_str(&back).unwrap();
    assert_eq!(map, again);
}

#[test]
fn category_labels_match_the_template_vocabulary() {
    assert_eq!(LeaveCategory::Annual.label(), "特休");
    assert_eq!(LeaveCategory::Personal.label(), "事假");
    assert_eq!(LeaveCategory::Sick.label(), "病假");
    assert_eq!(LeaveCategory::Official.label(), "公假");

    assert_eq!(LeaveCategory::from_label("病假"), Some(LeaveCategory::Sick));
    assert_eq!(LeaveCategory::from_label("喪假"), None);

    assert_eq!(LeaveCategory::Official.to_string(), "公假");
}

#[test]
fn intervals_build_from_any_string_kind() {
    let interval = LeaveInterval::new(LeaveCategory::Annual, "09:00", String::from("12:00"));
    assert_eq!(interval.start, "09:00");
    assert_eq!(interval.end, "12:00");
}

#[test]
fn roster_lists_the_known_names() {
    assert_eq!(roster::EMPLOYEES.len(), 7);
    assert!(roster::is_listed("高筑音 / Apple Kao"));
    assert!(!roster::is_listed("無名氏"));
}
