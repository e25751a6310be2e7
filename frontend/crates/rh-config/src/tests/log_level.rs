use crate::LogLevel;

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::eq;
use log::LevelFilter;

#[test]
fn given_known_names_when_parsed_then_matching_filters() {
    let cases = [
        ("off", LevelFilter::Off),
        ("error", LevelFilter::Error),
        ("warn", LevelFilter::Warn),
        ("info", LevelFilter::Info),
        ("debug", LevelFilter::Debug),
        ("trace", LevelFilter::Trace),
    ];

    for (name, expected) in cases {
        let level = LogLevel::from_str(name).unwrap();
        assert_that!(*level, eq(expected));
    }
}

#[test]
fn given_mixed_case_name_when_parsed_then_recognized() {
    let level = LogLevel::from_str("DeBuG").unwrap();
    assert_that!(*level, eq(LevelFilter::Debug));
}

#[test]
fn given_unknown_name_when_parsed_then_falls_back_to_info() {
    let level = LogLevel::from_str("verbose").unwrap();
    assert_that!(*level, eq(LevelFilter::Info));
}

#[test]
fn given_log_level_when_converted_then_inner_filter() {
    let level = LogLevel(LevelFilter::Warn);
    let filter: LevelFilter = level.into();
    assert_that!(filter, eq(LevelFilter::Warn));
}
