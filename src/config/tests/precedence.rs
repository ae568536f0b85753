//! Tests for configuration layer precedence.

use rstest::rstest;
use serde_json::json;

use super::helpers::{Layer, compose, defaults};
use crate::BbConfig;
use crate::bitbucket::TransportMethod;

#[rstest]
fn file_overrides_defaults() {
    let config = compose(vec![
        Layer::Defaults(json!({"username": "default-user"})),
        Layer::File(json!({"username": "file-user"})),
    ]);

    assert_eq!(config.username.as_deref(), Some("file-user"));
}

#[rstest]
fn environment_overrides_file() {
    let config = compose(vec![
        Layer::File(json!({"default_method": "http"})),
        Layer::Environment(json!({"default_method": "ssh"})),
    ]);

    assert_eq!(config.transport_method(), Ok(TransportMethod::Ssh));
}

#[rstest]
fn cli_overrides_environment() {
    let config = compose(vec![
        Layer::Environment(json!({"reponame": "env/repo"})),
        Layer::Cli(json!({"reponame": "cli/repo"})),
    ]);

    assert_eq!(config.reponame.as_deref(), Some("cli/repo"));
}

#[rstest]
fn cli_wins_for_ignore_forks_across_all_layers() {
    let config = compose(vec![
        Layer::Defaults(json!({"ignore_forks": "a/default"})),
        Layer::File(json!({"ignore_forks": "a/file"})),
        Layer::Environment(json!({"ignore_forks": "a/env"})),
        Layer::Cli(json!({"ignore_forks": "a/cli"})),
    ]);

    assert_eq!(config.ignored_forks().into_iter().collect::<Vec<_>>(), ["a/cli"]);
}

#[rstest]
fn defaults_apply_when_no_sources_provided() {
    let config = compose(vec![defaults()]);

    assert!(config.username.is_none(), "username should be None");
    assert!(config.password.is_none(), "password should be None");
    assert_eq!(
        config.transport_method(),
        Ok(TransportMethod::Https),
        "default_method should default to https"
    );
    assert_eq!(config.api_url(), "https://api.bitbucket.org/2.0");
    assert_eq!(config.scm(), "git");
    assert!(!config.forks, "forks should default to false");
    assert!(!config.private, "private should default to false");
}

#[rstest]
fn built_in_defaults_match_an_empty_config() {
    let config = BbConfig::default();

    assert_eq!(config.transport_method(), Ok(TransportMethod::Https));
    assert_eq!(config.api_url(), "https://api.bitbucket.org/2.0");
    assert_eq!(config.scm(), "git");
}

#[rstest]
fn file_values_sit_on_top_of_defaults() {
    let config = compose(vec![
        defaults(),
        Layer::File(json!({"create": true, "private": true, "scm": "hg"})),
    ]);

    assert!(config.create);
    assert!(config.private);
    assert_eq!(config.scm(), "hg");
}
