use super::*;

mod test_helpers {
    use super::*;

    pub(super) fn parse_args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv)
            .unwrap_or_else(|err| panic!("argv={argv:?} should parse successfully: {err}"))
    }
}

use test_helpers::parse_args;

#[test]
fn no_subcommand_defaults_to_chat() {
    let args = parse_args(&["chatshell"]);
    assert!(args.command.is_none());
    assert!(args.log.is_none());
    assert!(args.delay_ms.is_none());
}

#[test]
fn global_flags_parse_before_and_after_subcommands() {
    let argv = ["chatshell", "--delay-ms", "250", "chat", "--log", "chat.log"];
    let args = parse_args(&argv);
    assert!(matches!(args.command, Some(Commands::Chat)));
    assert_eq!(args.delay_ms, Some(250));
    assert_eq!(
        args.log.as_deref(),
        Some(std::path::Path::new("chat.log")),
        "unexpected log path for argv={argv:?}"
    );
}

#[test]
fn say_collects_all_words_and_json_flag() {
    let args = parse_args(&["chatshell", "say", "--json", "hello", "there", "-x"]);
    match args.command {
        Some(Commands::Say { prompt, json }) => {
            assert!(json);
            assert_eq!(prompt, vec!["hello", "there", "-x"]);
        }
        _ => panic!("expected say subcommand"),
    }
}

#[test]
fn set_accepts_multi_word_values() {
    let args = parse_args(&["chatshell", "set", "greeting", "Hi", "there!"]);
    match args.command {
        Some(Commands::Set { key, value }) => {
            assert_eq!(key, "greeting");
            assert_eq!(value, Some(vec!["Hi".to_string(), "there!".to_string()]));
        }
        _ => panic!("expected set subcommand"),
    }
}

#[test]
fn unset_requires_a_key() {
    assert!(Args::try_parse_from(["chatshell", "unset"]).is_err());
    let args = parse_args(&["chatshell", "unset", "title"]);
    assert!(matches!(args.command, Some(Commands::Unset { key }) if key == "title"));
}

#[test]
fn invalid_delay_is_rejected() {
    assert!(Args::try_parse_from(["chatshell", "--delay-ms", "soon"]).is_err());
}
