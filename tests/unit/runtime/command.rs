use super::*;

fn kiosk(line: &str) -> Event {
    match parse_command(line).unwrap() {
        Some(Command::Kiosk(ev)) => ev,
        other => panic!("expected kiosk event for {line:?}, got {other:?}"),
    }
}

#[test]
fn blank_lines_are_skipped() {
    assert_eq!(parse_command("").unwrap(), None);
    assert_eq!(parse_command("   \t").unwrap(), None);
}

#[test]
fn play_takes_the_rest_of_the_line_as_label() {
    assert_eq!(
        kiosk("play  Opening Night "),
        Event::PressButton("Opening Night".into())
    );
    assert!(parse_command("play").is_err());
}

#[test]
fn unknown_words_are_button_labels() {
    assert_eq!(kiosk("outro"), Event::PressButton("outro".into()));
    assert_eq!(kiosk("behind the scenes"), Event::PressButton("behind the scenes".into()));
}

#[test]
fn transport_commands() {
    assert_eq!(kiosk("pause"), Event::PlayPause);
    assert_eq!(kiosk("stop"), Event::StopVideo);
    assert_eq!(kiosk("seek 12500"), Event::Seek(12_500));
    assert!(parse_command("seek").is_err());
    assert!(parse_command("seek -3").is_err());
    assert!(parse_command("stop now").is_err());
}

#[test]
fn word_with_and_without_weight() {
    assert_eq!(
        kiosk("word rust"),
        Event::SubmitWord {
            text: "rust".into(),
            weight: None
        }
    );
    assert_eq!(
        kiosk("word rust 7"),
        Event::SubmitWord {
            text: "rust".into(),
            weight: Some("7".into())
        }
    );
    assert!(parse_command("word").is_err());
    assert!(parse_command("word a b c").is_err());
}

#[test]
fn refresh_submits_an_empty_word() {
    assert_eq!(
        kiosk("refresh"),
        Event::SubmitWord {
            text: String::new(),
            weight: None
        }
    );
}

#[test]
fn console_only_commands() {
    assert_eq!(parse_command("status").unwrap(), Some(Command::Status));
    assert_eq!(parse_command("buttons").unwrap(), Some(Command::Buttons));
    assert_eq!(parse_command("quit").unwrap(), Some(Command::Quit));
    assert_eq!(parse_command("exit").unwrap(), Some(Command::Quit));
}
