use predicates::str::contains;
use rattendance::core::report::ReportStyle;
use rattendance::core::slash::{
    HELP_TEXT, SlashCommand, SlashLogic, SlashRequest, UNKNOWN_COMMAND,
};

mod common;
use common::{CHANNEL, TEAM, USER, at, identity_args, jst, memory_pool, rti, setup_test_db};

fn request<'a>(command: &'a str, text: &'a str) -> SlashRequest<'a> {
    SlashRequest {
        team_id: TEAM,
        channel_id: CHANNEL,
        user_id: USER,
        command,
        text,
    }
}

#[test]
fn test_command_names() {
    assert_eq!(SlashCommand::parse("/start-work"), SlashCommand::StartWork);
    assert_eq!(SlashCommand::parse("/start-work-dev"), SlashCommand::StartWork);
    assert_eq!(SlashCommand::parse("/end-work"), SlashCommand::EndWork);
    assert_eq!(
        SlashCommand::parse("/subscribe-workplace-dev"),
        SlashCommand::SubscribeWorkplace
    );
    assert_eq!(SlashCommand::parse("/monthly-hours"), SlashCommand::MonthlyHours);
    assert_eq!(SlashCommand::parse("/help-attendance"), SlashCommand::Help);
    assert!(matches!(SlashCommand::parse("/lunch"), SlashCommand::Unknown(_)));
}

#[test]
fn test_slash_conversation() {
    let mut pool = memory_pool();
    let style = ReportStyle::new(jst(), "-");

    let reply = SlashLogic::respond(&mut pool, &request("/start-work", ""), &at(2025, 5, 1, 9, 0), &style);
    assert!(reply.text.starts_with("Failed to add attendance In log:"));

    let reply = SlashLogic::respond(
        &mut pool,
        &request("/subscribe-workplace", "本社"),
        &at(2025, 5, 1, 8, 0),
        &style,
    );
    assert_eq!(reply.text, "職場登録完了: 本社");

    let reply = SlashLogic::respond(&mut pool, &request("/end-work", ""), &at(2025, 5, 1, 8, 30), &style);
    assert_eq!(reply.text, "Failed to add attendance log: no start record found");

    let reply = SlashLogic::respond(&mut pool, &request("/start-work", ""), &at(2025, 5, 1, 9, 0), &style);
    assert_eq!(reply.text, "本社: 出勤");

    let reply = SlashLogic::respond(&mut pool, &request("/end-work-dev", ""), &at(2025, 5, 1, 18, 0), &style);
    assert_eq!(reply.text, "本社: 退勤");

    let reply = SlashLogic::respond(
        &mut pool,
        &request("/monthly-hours", "202505"),
        &at(2025, 6, 1, 9, 0),
        &style,
    );
    assert!(reply.text.contains("月間合計勤務時間: 9時間0分"));

    let reply = SlashLogic::respond(
        &mut pool,
        &request("/monthly-hours", ""),
        &at(2025, 6, 1, 9, 0),
        &style,
    );
    assert_eq!(reply.text, "出勤記録がありません。");

    let reply = SlashLogic::respond(
        &mut pool,
        &request("/monthly-hours", "June"),
        &at(2025, 6, 1, 9, 0),
        &style,
    );
    assert_eq!(reply.text, "年月の形式が不正です。");
}

#[test]
fn test_help_and_unknown() {
    let mut pool = memory_pool();
    let style = ReportStyle::new(jst(), "-");
    let now = at(2025, 5, 1, 9, 0);

    let reply = SlashLogic::respond(&mut pool, &request("/help-attendance", ""), &now, &style);
    assert_eq!(reply.text, HELP_TEXT);

    let reply = SlashLogic::respond(&mut pool, &request("/lunch", ""), &now, &style);
    assert_eq!(reply.text, UNKNOWN_COMMAND);
}

#[test]
fn test_slash_cli_json_reply() {
    let db_path = setup_test_db("cli_slash");

    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "slash"])
        .args(identity_args())
        .args(["--json", "/subscribe-workplace", "本社", "東京"])
        .assert()
        .success()
        .stdout(contains("{\"text\":\"職場登録完了: 本社 東京\"}"));

    rti()
        .args(["--db", &db_path, "slash"])
        .args(identity_args())
        .arg("/help-attendance")
        .assert()
        .success()
        .stdout(contains("/start-work: 出勤"));
}
