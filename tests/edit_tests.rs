use rattendance::core::edit::EditLogic;
use rattendance::core::report::{NO_RECORDS_MESSAGE, ReportLogic, ReportStyle};
use rattendance::core::subscribe::SubscribeLogic;
use rattendance::core::transition::TransitionLogic;
use rattendance::db::entries::get_entry;
use rattendance::errors::AppError;
use rattendance::models::status::AttendanceStatus;
use rattendance::utils::date::YearMonth;

mod common;
use common::{CHANNEL, TEAM, USER, at, jst, memory_pool, utc};

#[test]
fn test_edit_rewrites_timestamp() {
    let mut pool = memory_pool();
    SubscribeLogic::apply(&mut pool, TEAM, CHANNEL, USER, "本社", &at(2025, 5, 1, 8, 0)).unwrap();
    let start =
        TransitionLogic::start(&mut pool, TEAM, CHANNEL, USER, &at(2025, 5, 1, 9, 0)).unwrap();

    let updated = EditLogic::update_timestamp(&mut pool, &start.id, &at(2025, 5, 1, 8, 45)).unwrap();

    assert_eq!(updated.id, start.id);
    assert_eq!(updated.timestamp, "2025-04-30T23:45:00.000000000+00:00");
    assert_eq!(updated.workplace_name, "本社");

    let stored = get_entry(&pool.conn, &start.id).unwrap().unwrap();
    assert_eq!(stored.timestamp, updated.timestamp);
}

#[test]
fn test_delete_resyncs_status() {
    let mut pool = memory_pool();
    SubscribeLogic::apply(&mut pool, TEAM, CHANNEL, USER, "本社", &at(2025, 5, 1, 8, 0)).unwrap();

    let start =
        TransitionLogic::start(&mut pool, TEAM, CHANNEL, USER, &at(2025, 5, 1, 9, 0)).unwrap();
    let end = TransitionLogic::end(&mut pool, TEAM, CHANNEL, USER, &at(2025, 5, 1, 17, 0)).unwrap();

    EditLogic::delete(&mut pool, &end.id).unwrap();
    let (b, latest) = TransitionLogic::status(&mut pool, TEAM, CHANNEL, USER).unwrap();
    assert_eq!(b.status, AttendanceStatus::Started);
    assert_eq!(latest.unwrap().id, start.id);

    // the shift can be closed again
    TransitionLogic::end(&mut pool, TEAM, CHANNEL, USER, &at(2025, 5, 1, 18, 0)).unwrap();

    let (b, _) = TransitionLogic::status(&mut pool, TEAM, CHANNEL, USER).unwrap();
    assert_eq!(b.status, AttendanceStatus::Ended);
}

#[test]
fn test_deleting_every_entry_resets_status() {
    let mut pool = memory_pool();
    SubscribeLogic::apply(&mut pool, TEAM, CHANNEL, USER, "本社", &at(2025, 5, 1, 8, 0)).unwrap();
    let start =
        TransitionLogic::start(&mut pool, TEAM, CHANNEL, USER, &at(2025, 5, 1, 9, 0)).unwrap();

    EditLogic::delete(&mut pool, &start.id).unwrap();

    let (b, latest) = TransitionLogic::status(&mut pool, TEAM, CHANNEL, USER).unwrap();
    assert_eq!(b.status, AttendanceStatus::NoHistory);
    assert!(latest.is_none());
}

#[test]
fn test_edit_moving_end_before_start_resyncs_status() {
    let mut pool = memory_pool();
    SubscribeLogic::apply(&mut pool, TEAM, CHANNEL, USER, "本社", &at(2025, 5, 1, 8, 0)).unwrap();
    TransitionLogic::start(&mut pool, TEAM, CHANNEL, USER, &at(2025, 5, 1, 9, 0)).unwrap();
    let end = TransitionLogic::end(&mut pool, TEAM, CHANNEL, USER, &at(2025, 5, 1, 17, 0)).unwrap();

    // no alternation check on edits: the start becomes the latest entry
    EditLogic::update_timestamp(&mut pool, &end.id, &at(2025, 5, 1, 8, 30)).unwrap();

    let (b, _) = TransitionLogic::status(&mut pool, TEAM, CHANNEL, USER).unwrap();
    assert_eq!(b.status, AttendanceStatus::Started);
}

#[test]
fn test_unknown_id_is_not_found() {
    let mut pool = memory_pool();

    let err = EditLogic::update_timestamp(&mut pool, "missing", &at(2025, 5, 1, 9, 0)).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = EditLogic::delete(&mut pool, "missing").unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn test_mixed_offsets_follow_instant_order() {
    let mut pool = memory_pool();
    SubscribeLogic::apply(&mut pool, TEAM, CHANNEL, USER, "本社", &at(2025, 5, 1, 8, 0)).unwrap();

    // 09:00+09:00 is 00:00Z, 05:00+00:00 is five hours later
    TransitionLogic::start(&mut pool, TEAM, CHANNEL, USER, &at(2025, 5, 1, 9, 0)).unwrap();
    let end = TransitionLogic::end(&mut pool, TEAM, CHANNEL, USER, &utc(2025, 5, 1, 5, 0)).unwrap();

    let (b, latest) = TransitionLogic::status(&mut pool, TEAM, CHANNEL, USER).unwrap();
    assert_eq!(b.status, AttendanceStatus::Ended);
    assert_eq!(latest.unwrap().id, end.id);

    // same instant written through another offset
    EditLogic::update_timestamp(&mut pool, &end.id, &at(2025, 5, 1, 14, 0)).unwrap();

    let (b, latest) = TransitionLogic::status(&mut pool, TEAM, CHANNEL, USER).unwrap();
    assert_eq!(b.status, AttendanceStatus::Ended);
    assert_eq!(latest.unwrap().id, end.id);

    let style = ReportStyle::new(jst(), "-");
    let may = YearMonth::parse("202505").unwrap();
    let report = ReportLogic::monthly(&mut pool, TEAM, CHANNEL, USER, may, &style).unwrap();
    assert!(report.formatted_data.contains("・出勤 09:00 / 退勤 14:00（5時間0分）"));
}

#[test]
fn test_month_follows_reporting_timezone() {
    let mut pool = memory_pool();
    SubscribeLogic::apply(&mut pool, TEAM, CHANNEL, USER, "本社", &at(2025, 5, 1, 8, 0)).unwrap();

    // June 1st in JST, still May 31st in UTC
    TransitionLogic::start(&mut pool, TEAM, CHANNEL, USER, &at(2025, 6, 1, 8, 0)).unwrap();
    TransitionLogic::end(&mut pool, TEAM, CHANNEL, USER, &at(2025, 6, 1, 10, 0)).unwrap();

    let style = ReportStyle::new(jst(), "-");

    let may = YearMonth::parse("202505").unwrap();
    let report = ReportLogic::monthly(&mut pool, TEAM, CHANNEL, USER, may, &style).unwrap();
    assert_eq!(report.message, NO_RECORDS_MESSAGE);

    let june = YearMonth::parse("202506").unwrap();
    let report = ReportLogic::monthly(&mut pool, TEAM, CHANNEL, USER, june, &style).unwrap();
    assert_eq!(report.attendance_logs.len(), 2);
    assert!(report.formatted_data.contains("日付: 2025-06-01"));
    assert!(report.formatted_data.contains("月間合計勤務時間: 2時間0分"));
}
