//! Short reference expansion.

use std::io::{self, Write};

use bbshort::BbConfig;
use bbshort::bitbucket::{BbError, SchemeRegistry};

use super::output::write_line;

/// Prints the full URL `--url` expands to.
///
/// # Errors
///
/// Returns [`BbError::Configuration`] if `--url` is missing and
/// [`BbError::UnresolvedReference`] if it is not a `bb` reference.
pub fn run(config: &BbConfig, registry: &SchemeRegistry) -> Result<(), BbError> {
    let mut stdout = io::stdout().lock();
    run_with_writer(config, registry, &mut stdout)
}

/// Expands `--url` and writes the result to `writer`.
pub fn run_with_writer<W: Write>(
    config: &BbConfig,
    registry: &SchemeRegistry,
    writer: &mut W,
) -> Result<(), BbError> {
    let reference = config.url.as_deref().ok_or_else(|| BbError::Configuration {
        message: "a short reference is required (use --url)".to_owned(),
    })?;
    let credentials = config.credentials()?;

    let repository = registry.open_repository(reference, false, &credentials)?;
    write_line(writer, repository.url())
}

#[cfg(test)]
mod tests {
    use bbshort::BbConfig;
    use bbshort::bitbucket::{BbError, SchemeRegistry, TransportFactories, TransportMethod};
    use rstest::rstest;

    use super::run_with_writer;

    fn expand(config: &BbConfig, default_method: TransportMethod) -> Result<String, BbError> {
        let registry = SchemeRegistry::new(default_method, TransportFactories::default());
        let mut buffer = Vec::new();
        run_with_writer(config, &registry, &mut buffer)?;
        Ok(String::from_utf8(buffer).expect("output should be valid UTF-8"))
    }

    fn config_for(reference: &str, password: Option<&str>) -> BbConfig {
        BbConfig {
            url: Some(reference.to_owned()),
            username: Some("me".to_owned()),
            password: password.map(ToOwned::to_owned),
            ..Default::default()
        }
    }

    #[rstest]
    #[case::bare_https("bb:sphinx", None, TransportMethod::Https, "https://me@bitbucket.org/me/sphinx/\n")]
    #[case::bare_http_is_upgraded("bb:sphinx", None, TransportMethod::Http, "https://me@bitbucket.org/me/sphinx/\n")]
    #[case::bare_ssh("bb://birkenfeld/sphinx", None, TransportMethod::Ssh, "ssh://hg@bitbucket.org/birkenfeld/sphinx/\n")]
    #[case::explicit_http("bb+http:birkenfeld/sphinx", None, TransportMethod::Https, "http://me@bitbucket.org/birkenfeld/sphinx/\n")]
    #[case::password("bb+https:sphinx", Some("pw"), TransportMethod::Https, "https://me:pw@bitbucket.org/me/sphinx/\n")]
    fn prints_expanded_url(
        #[case] reference: &str,
        #[case] password: Option<&str>,
        #[case] default_method: TransportMethod,
        #[case] expected: &str,
    ) {
        let output = expand(&config_for(reference, password), default_method)
            .expect("expansion should succeed");

        assert_eq!(output, expected);
    }

    #[rstest]
    fn rejects_foreign_scheme() {
        let result = expand(
            &config_for("https://example.com/repo", None),
            TransportMethod::Https,
        );

        assert!(
            matches!(result, Err(BbError::UnresolvedReference { .. })),
            "expected UnresolvedReference, got {result:?}"
        );
    }

    #[rstest]
    fn requires_a_reference() {
        let config = BbConfig {
            username: Some("me".to_owned()),
            ..Default::default()
        };

        let result = expand(&config, TransportMethod::Https);

        assert!(matches!(result, Err(BbError::Configuration { .. })));
    }
}
