//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Location;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "`;`".to_string(),
            found: "`@`".to_string(),
        },
        Location::new(Rc::new("test.toy".to_string()), 1, 10),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_error_location() {
    let location = Location::new(Rc::new("test.toy".to_string()), 4, 2);
    let error = Error::new(
        ErrorImpl::ReadFailed {
            message: "broken pipe".to_string(),
        },
        location.clone(),
    );

    assert_eq!(error.get_location(), &location);
    assert_eq!(error.get_location().line, 4);
    assert_eq!(error.get_location().col, 2);
}

#[test]
fn test_read_failed_error() {
    let error = Error::new(
        ErrorImpl::ReadFailed {
            message: "broken pipe".to_string(),
        },
        Location::null(),
    );

    assert_eq!(error.get_error_name(), "ReadFailed");
    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_error().to_string(), "failed to read source: broken pipe");
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "`(`".to_string(),
            found: "identifier `x`".to_string(),
        },
        Location::null(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Expected `(`, found identifier `x`"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "`;`".to_string(),
            found: "<eof>".to_string(),
        },
        Location::new(Rc::new("test.toy".to_string()), 3, 1),
    );

    assert_eq!(
        error.to_string(),
        "unexpected token: expected `;`, found <eof> at test.toy:3:1"
    );
}
