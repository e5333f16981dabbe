//! Integration tests for the `logger` crate

use logger::{debug, error, info, warn};
use logger::{set_level, Level};

#[test]
fn level_parse_accepts_valid() {
    assert_eq!(Level::parse("error"), Some(Level::Error));
    assert_eq!(Level::parse("warn"), Some(Level::Warn));
    assert_eq!(Level::parse("info"), Some(Level::Info));
    assert_eq!(Level::parse("debug"), Some(Level::Debug));
}

#[test]
fn level_parse_accepts_alternate_spellings() {
    assert_eq!(Level::parse("err"), Some(Level::Error));
    assert_eq!(Level::parse("warning"), Some(Level::Warn));
    assert_eq!(Level::parse("INFO"), Some(Level::Info));
}

#[test]
fn level_parse_rejects_invalid() {
    assert_eq!(Level::parse("invalid"), None);
    assert_eq!(Level::parse(""), None);
}

#[test]
fn levels_order_by_severity() {
    assert!(Level::Error < Level::Warn);
    assert!(Level::Warn < Level::Info);
    assert!(Level::Info < Level::Debug);
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[cfg(feature = "log-debug")]
#[test]
fn debug_respects_runtime_switch() {
    use logger::{disable_debug, enable_debug, is_debug_enabled};
    set_level(Level::Debug);
    disable_debug();
    assert!(!is_debug_enabled());
    debug!("should be silent");
    enable_debug();
    assert!(is_debug_enabled());
    debug!("should emit");
}
