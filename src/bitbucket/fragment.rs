//! Service constants and recognition of repository paths that point at
//! Bitbucket.

/// Scheme tag used in short references (`bb:repo`, `bb+ssh:owner/repo`).
pub const SERVICE_SCHEME_TAG: &str = "bb";

/// Domain of the hosted service.
pub const SERVICE_DOMAIN: &str = "bitbucket.org";

/// Extracts the repository path fragment from a configured path.
///
/// Recognises:
/// - full URLs whose host ends with [`SERVICE_DOMAIN`]
///   (`https://bitbucket.org/owner/repo` gives `owner/repo`);
/// - tagged URLs with `://` (`bb+ssh://owner/repo` gives `owner/repo`);
/// - the bare short form `bb:repo`;
/// - sub-scheme short forms `bb+http:repo`.
///
/// Anything else, including words that merely start with the tag
/// (`bbfoo`, `bb+foo`), yields `None`. An empty fragment also yields `None`.
#[must_use]
pub fn parse_path_fragment(path: &str) -> Option<String> {
    let fragment = if let Some((scheme, remainder)) = path.split_once("://") {
        parse_url_fragment(scheme, remainder)?
    } else if let Some(rest) = path
        .strip_prefix(SERVICE_SCHEME_TAG)
        .and_then(|after_tag| after_tag.strip_prefix(':'))
    {
        rest
    } else if is_tagged_sub_scheme(path) {
        path.split_once(':').map(|(_, rest)| rest)?
    } else {
        return None;
    };

    Some(fragment.to_owned()).filter(|value| !value.is_empty())
}

/// Handles the `scheme://authority/path` form.
fn parse_url_fragment<'a>(scheme: &str, remainder: &'a str) -> Option<&'a str> {
    let (authority, url_path) = remainder
        .find('/')
        .map_or((remainder, ""), |slash| remainder.split_at(slash));

    if host_of(authority).ends_with(SERVICE_DOMAIN) {
        return Some(url_path.trim_matches('/'));
    }

    if scheme.starts_with(SERVICE_SCHEME_TAG) {
        return Some(remainder.trim_matches('/'));
    }

    None
}

/// Strips user info and port from an authority component.
fn host_of(authority: &str) -> &str {
    let without_user = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host);
    without_user
        .split_once(':')
        .map_or(without_user, |(host, _)| host)
}

fn is_tagged_sub_scheme(path: &str) -> bool {
    path.strip_prefix(SERVICE_SCHEME_TAG)
        .is_some_and(|after_tag| after_tag.starts_with('+'))
        && path.contains(':')
}
