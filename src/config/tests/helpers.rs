//! Layer composition for configuration tests.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::BbConfig;

/// One configuration source, lowest precedence first.
pub enum Layer {
    Defaults(Value),
    File(Value),
    Environment(Value),
    Cli(Value),
}

/// Defaults layer holding every field of [`BbConfig::default`].
pub fn defaults() -> Layer {
    Layer::Defaults(
        serde_json::to_value(BbConfig::default()).expect("default config should serialise"),
    )
}

/// Merges `layers` in order into a [`BbConfig`].
pub fn compose(layers: Vec<Layer>) -> BbConfig {
    let mut composer = MergeComposer::new();
    for layer in layers {
        match layer {
            Layer::Defaults(value) => composer.push_defaults(value),
            Layer::File(value) => composer.push_file(value, None),
            Layer::Environment(value) => composer.push_environment(value),
            Layer::Cli(value) => composer.push_cli(value),
        }
    }

    BbConfig::merge_from_layers(composer.layers()).expect("merge should succeed")
}
