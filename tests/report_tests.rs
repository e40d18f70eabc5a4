use rattendance::core::calculator::monthly::build_monthly_summary;
use rattendance::core::report::{
    NO_RECORDS_MESSAGE, ReportLogic, ReportStyle, format_attendance,
};
use rattendance::core::subscribe::SubscribeLogic;
use rattendance::core::transition::TransitionLogic;
use rattendance::models::action::Action;
use rattendance::utils::date::YearMonth;
use rattendance::utils::formatting::jp_total_hours;

mod common;
use common::{CHANNEL, TEAM, USER, at, entry, jst, memory_pool};

fn style() -> ReportStyle {
    ReportStyle::new(jst(), "-")
}

#[test]
fn test_single_pair_report() {
    let entries = vec![
        entry("1", Action::Start, "2025-05-01T09:00:00.000000000+09:00"),
        entry("2", Action::End, "2025-05-01T17:30:00.000000000+09:00"),
    ];

    let text = format_attendance(&entries, "本社", YearMonth::parse("202505").ok(), &style());

    assert!(text.starts_with("勤務先: 本社\n"));
    assert!(text.contains("5月の勤怠記録"));
    assert!(text.contains("日付: 2025-05-01"));
    assert!(text.contains("・出勤 09:00 / 退勤 17:30（8時間30分）"));
    assert!(text.contains("合計: 8時間30分"));
    assert!(text.contains("月間合計勤務時間: 8時間30分"));
}

#[test]
fn test_only_adjacent_start_end_pairs_count() {
    let entries = vec![
        entry("1", Action::Start, "2025-05-01T09:00:00.000000000+09:00"),
        entry("2", Action::Start, "2025-05-01T09:05:00.000000000+09:00"),
        entry("3", Action::End, "2025-05-01T17:00:00.000000000+09:00"),
    ];

    let summary = build_monthly_summary(&entries, jst()).unwrap();
    assert_eq!(summary.days.len(), 1);
    assert_eq!(summary.days[0].pairs.len(), 1);
    assert_eq!(summary.days[0].pairs[0].start.format("%H:%M").to_string(), "09:05");

    let text = format_attendance(&entries, "本社", None, &style());
    assert!(text.contains("合計: 7時間55分"));
}

#[test]
fn test_input_order_does_not_matter() {
    let mut entries = vec![
        entry("1", Action::Start, "2025-05-02T09:00:00.000000000+09:00"),
        entry("2", Action::End, "2025-05-02T12:00:00.000000000+09:00"),
        entry("3", Action::Start, "2025-05-01T10:00:00.000000000+09:00"),
        entry("4", Action::End, "2025-05-01T11:15:00.000000000+09:00"),
    ];

    let sorted = format_attendance(&entries, "本社", None, &style());
    entries.reverse();
    let reversed = format_attendance(&entries, "本社", None, &style());

    assert_eq!(sorted, reversed);

    let first = sorted.find("日付: 2025-05-01").unwrap();
    let second = sorted.find("日付: 2025-05-02").unwrap();
    assert!(first < second);
    assert!(sorted.contains("月間合計勤務時間: 4時間15分"));
}

#[test]
fn test_unpaired_entries_are_ignored() {
    let entries = vec![
        entry("1", Action::End, "2025-05-01T08:00:00.000000000+09:00"),
        entry("2", Action::Start, "2025-05-01T09:00:00.000000000+09:00"),
        entry("3", Action::End, "2025-05-01T10:00:00.000000000+09:00"),
        entry("4", Action::Start, "2025-05-01T18:00:00.000000000+09:00"),
    ];

    let summary = build_monthly_summary(&entries, jst()).unwrap();
    assert_eq!(summary.days[0].pairs.len(), 1);
    assert!((summary.total_hours - 1.0).abs() < 1e-9);
}

#[test]
fn test_unparsable_timestamp_aborts_report() {
    let entries = vec![
        entry("1", Action::Start, "2025-05-01T09:00:00.000000000+09:00"),
        entry("2", Action::End, "yesterday evening"),
    ];

    let text = format_attendance(&entries, "本社", None, &style());
    assert!(text.starts_with("Error:"));
    assert!(!text.contains("月間合計勤務時間"));
}

#[test]
fn test_legacy_timestamp_layout_is_accepted() {
    let entries = vec![
        entry("1", Action::Start, "2025-05-01 09:00:00.123456 +0900 JST m=+0.000123"),
        entry("2", Action::End, "2025-05-01 18:00:00.123456 +0900 JST m=+32400.1"),
    ];

    let text = format_attendance(&entries, "本社", None, &style());
    assert!(text.contains("・出勤 09:00 / 退勤 18:00（9時間0分）"));
}

#[test]
fn test_total_hours_truncate_minutes() {
    assert_eq!(jp_total_hours(8.5), "8時間30分");
    assert_eq!(jp_total_hours(7.999), "7時間59分");
    assert_eq!(jp_total_hours(0.0), "0時間0分");
}

#[test]
fn test_monthly_report_filters_by_month() {
    let mut pool = memory_pool();
    SubscribeLogic::apply(&mut pool, TEAM, CHANNEL, USER, "本社", &at(2025, 4, 1, 8, 0)).unwrap();

    TransitionLogic::start(&mut pool, TEAM, CHANNEL, USER, &at(2025, 4, 30, 9, 0)).unwrap();
    TransitionLogic::end(&mut pool, TEAM, CHANNEL, USER, &at(2025, 4, 30, 12, 0)).unwrap();
    TransitionLogic::start(&mut pool, TEAM, CHANNEL, USER, &at(2025, 5, 1, 9, 0)).unwrap();
    TransitionLogic::end(&mut pool, TEAM, CHANNEL, USER, &at(2025, 5, 1, 17, 30)).unwrap();

    let may = YearMonth::parse("202505").unwrap();
    let report = ReportLogic::monthly(&mut pool, TEAM, CHANNEL, USER, may, &style()).unwrap();

    assert!(report.success);
    assert_eq!(report.year_month, "202505");
    assert_eq!(report.attendance_logs.len(), 2);
    assert!(report.formatted_data.contains("月間合計勤務時間: 8時間30分"));
    assert!(!report.formatted_data.contains("2025-04-30"));

    let june = YearMonth::parse("202506").unwrap();
    let empty = ReportLogic::monthly(&mut pool, TEAM, CHANNEL, USER, june, &style()).unwrap();
    assert!(empty.success);
    assert!(empty.attendance_logs.is_empty());
    assert_eq!(empty.message, NO_RECORDS_MESSAGE);
}

#[test]
fn test_year_month_parsing() {
    let now = at(2025, 7, 15, 12, 0);

    assert_eq!(YearMonth::resolve(None, &now).unwrap().to_string(), "202507");
    assert_eq!(YearMonth::resolve(Some(""), &now).unwrap().to_string(), "202507");

    let (from, to) = YearMonth::parse("202412").unwrap().stored_range(jst()).unwrap();
    assert_eq!(from, "2024-11-30T15:00:00.000000000+00:00");
    assert_eq!(to, "2024-12-31T15:00:00.000000000+00:00");

    assert!(YearMonth::parse("2025-05").is_err());
    assert!(YearMonth::parse("202513").is_err());
}
