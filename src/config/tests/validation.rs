//! Tests for configuration consistency validation.

use rstest::rstest;

use crate::BbConfig;
use crate::bitbucket::{BbError, TransportMethod};

#[rstest]
#[case::ssh("ssh", TransportMethod::Ssh)]
#[case::http("http", TransportMethod::Http)]
#[case::https("https", TransportMethod::Https)]
fn accepts_known_methods(#[case] value: &str, #[case] expected: TransportMethod) {
    let config = BbConfig {
        default_method: Some(value.to_owned()),
        ..Default::default()
    };

    assert!(config.validate().is_ok(), "{value} should validate");
    assert_eq!(config.transport_method(), Ok(expected));
}

#[rstest]
#[case::unknown("unknown")]
#[case::upper_case("SSH")]
#[case::empty("")]
fn rejects_unknown_method_naming_the_value(#[case] value: &str) {
    let config = BbConfig {
        default_method: Some(value.to_owned()),
        ..Default::default()
    };

    let result = config.validate();

    assert_eq!(
        result,
        Err(BbError::InvalidConfiguration {
            value: value.to_owned()
        })
    );
}

#[rstest]
fn invalid_method_message_names_the_key() {
    let config = BbConfig {
        default_method: Some("ftp".to_owned()),
        ..Default::default()
    };

    let message = config
        .validate()
        .expect_err("ftp should be rejected")
        .to_string();

    assert_eq!(message, "invalid config value for bb.default_method: ftp");
}

#[rstest]
fn rejects_incoming_with_outgoing() {
    let config = BbConfig {
        incoming: true,
        outgoing: true,
        ..Default::default()
    };

    let result = config.validate();

    assert!(
        matches!(result, Err(BbError::Configuration { .. })),
        "should reject conflicting directions, got {result:?}"
    );
}
