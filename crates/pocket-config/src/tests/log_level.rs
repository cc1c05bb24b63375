use crate::LogLevel;

use std::str::FromStr;

use log::LevelFilter;

#[test]
fn given_known_level_names_when_parsed_then_mapped() {
    let cases = [
        ("off", LevelFilter::Off),
        ("error", LevelFilter::Error),
        ("WARN", LevelFilter::Warn),
        ("Info", LevelFilter::Info),
        ("debug", LevelFilter::Debug),
        (" trace ", LevelFilter::Trace),
    ];

    for (input, expected) in cases {
        assert_eq!(LogLevel::from_str(input).unwrap().0, expected, "{input}");
    }
}

#[test]
fn given_unknown_level_when_parsed_then_defaults_to_info() {
    assert_eq!(LogLevel::from_str("loud").unwrap().0, LevelFilter::Info);
}

#[test]
fn given_level_when_as_str_then_round_trips() {
    for level in ["off", "error", "warn", "info", "debug", "trace"] {
        assert_eq!(LogLevel::from_str(level).unwrap().as_str(), level);
    }
}
