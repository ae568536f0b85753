//! Reading the `[paths]` section of a Mercurial configuration file.

use crate::bitbucket::ConfiguredPath;

const PATHS_SECTION: &str = "paths";

/// Parses the `[paths]` entries of an hgrc-style file in file order.
///
/// Redefining a name replaces its location but keeps its original position.
/// Comment lines (`#`, `;`), continuation lines, `%include`/`%unset`
/// directives and other sections are skipped.
#[must_use]
pub fn parse_paths_section(content: &str) -> Vec<ConfiguredPath> {
    let mut paths: Vec<ConfiguredPath> = Vec::new();
    let mut in_paths = false;

    for line in content.lines() {
        if line.starts_with([' ', '\t']) {
            continue;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(['#', ';', '%']) {
            continue;
        }

        if let Some(section) = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            in_paths = section.trim() == PATHS_SECTION;
            continue;
        }

        if !in_paths {
            continue;
        }

        let Some((name, location)) = trimmed.split_once('=') else {
            continue;
        };
        let (name, location) = (name.trim(), location.trim());
        if name.is_empty() {
            continue;
        }

        match paths.iter_mut().find(|path| path.name == name) {
            Some(existing) => location.clone_into(&mut existing.location),
            None => paths.push(ConfiguredPath::new(name, location)),
        }
    }

    paths
}
