use clap::Parser;

use super::*;

#[test]
fn defaults_point_at_local_backend() {
    let cli = Cli::try_parse_from(["affiliate-cli", "health"]).unwrap();
    assert!(cli.base_url.ends_with("/api"));
    assert!(!cli.verbose);
    assert!(matches!(cli.command, Command::Health));
}

#[test]
fn nested_subcommands_parse() {
    let cli = Cli::try_parse_from([
        "affiliate-cli",
        "--base-url",
        "http://backend.test/api",
        "-v",
        "tweets",
        "bulk-schedule",
        "--item",
        "1=2024-05-01T10:00:00",
        "--item",
        "2=2024-05-02T10:00:00",
    ])
    .unwrap();
    assert_eq!(cli.base_url, "http://backend.test/api");
    assert!(cli.verbose);
    match cli.command {
        Command::Tweets(TweetsCommand { command: TweetsSubcommand::BulkSchedule { items } }) => {
            assert_eq!(items.len(), 2);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn analytics_defaults_to_thirty_days() {
    let cli = Cli::try_parse_from(["affiliate-cli", "analytics", "top-tweets"]).unwrap();
    match cli.command {
        Command::Analytics(AnalyticsCommand { command: AnalyticsSubcommand::TopTweets { days, limit } }) => {
            assert_eq!((days, limit), (30, 10));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn bulk_schedule_requires_an_item() {
    assert!(Cli::try_parse_from(["affiliate-cli", "tweets", "bulk-schedule"]).is_err());
}

#[test]
fn export_lines_are_shell_ready() {
    let pair = TokenPair { access_token: "a".into(), refresh_token: "r".into() };
    assert_eq!(export_lines(&pair), "export AFFILIATE_ACCESS_TOKEN=a\nexport AFFILIATE_REFRESH_TOKEN=r\n");
}
