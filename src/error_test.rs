use super::*;

#[test]
fn missing_element_is_absent() {
    let err = MarqueeError::MissingElement("#contact-form");
    assert!(err.is_absent());
    assert_eq!(err.error_code(), "E_MISSING_ELEMENT");
    assert_eq!(err.to_string(), "element not found: #contact-form");
}

#[test]
fn other_errors_are_not_absent() {
    let err = MarqueeError::Js("TypeError".to_owned());
    assert!(!err.is_absent());
    assert_eq!(err.error_code(), "E_DOM");
}

#[test]
fn invalid_attribute_display_quotes_value() {
    let err = MarqueeError::InvalidAttribute { name: "data-value", value: "abc".to_owned() };
    assert_eq!(err.to_string(), "invalid attribute data-value=\"abc\"");
    assert_eq!(err.error_code(), "E_ATTRIBUTE");
}

#[test]
fn serde_error_converts_to_config() {
    let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: MarqueeError = parse.into();
    assert!(matches!(err, MarqueeError::Config(_)));
    assert_eq!(err.error_code(), "E_CONFIG");
}
