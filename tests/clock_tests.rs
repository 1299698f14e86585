use attendance_tool::clock::{TimeWindow, format_minutes, minutes_of};

#[test]
fn draw_stays_inside_the_clock_in_window() {
    // 08:50..=09:05 is the morning window used by the populator.
    let window = TimeWindow::new(8, 50, 9, 5);
    for _ in 0..200 {
        let value = window.draw();
        let minutes = minutes_of(&value).expect("draw emits HH:MM");
        assert!(
            (530..=545).contains(&minutes),
            "{value} outside 08:50..=09:05"
        );
    }
}

#[test]
fn draw_stays_inside_the_clock_out_window() {
    let window = TimeWindow::new(18, 0, 18, 10);
    for _ in 0..200 {
        let minutes = minutes_of(&window.draw()).expect("draw emits HH:MM");
        assert!((1080..=1090).contains(&minutes));
    }
}

#[test]
fn draw_is_zero_padded() {
    let window = TimeWindow::new(9, 5, 9, 5);
    assert_eq!(window.draw(), "09:05");
}

#[test]
fn degenerate_window_returns_its_only_minute() {
    let window = TimeWindow::new(18, 0, 18, 0);
    for _ in 0..10 {
        assert_eq!(window.draw(), "18:00");
    }
}

#[test]
fn window_bounds_are_minutes_of_day() {
    let window = TimeWindow::new(8, 50, 9, 5);
    assert_eq!(window.start(), 530);
    assert_eq!(window.end(), 545);
}

#[test]
fn minutes_round_trip() {
    assert_eq!(minutes_of("08:50"), Some(530));
    assert_eq!(minutes_of("18:10"), Some(1090));
    assert_eq!(minutes_of("00:00"), Some(0));
    assert_eq!(format_minutes(545), "09:05");
    assert_eq!(format_minutes(0), "00:00");
}

#[test]
fn malformed_times_do_not_parse() {
    assert_eq!(minutes_of(""), None);
    assert_eq!(minutes_of("12"), None);
    assert_eq!(minutes_of("25:00"), None);
    assert_eq!(minutes_of("12:60"), None);
    assert_eq!(minutes_of("ab:cd"), None);
}
