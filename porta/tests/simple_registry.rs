//! Query semantics of the insertion-ordered registry.

mod common;

use common::{CSV, Codec, JSON, MediaType, Named, YAML, codec_names};
use porta::{Plugin, PluginRegistry, RegistryError, SimplePluginRegistry};
use std::sync::Arc;

fn codecs() -> SimplePluginRegistry<Codec, MediaType> {
    SimplePluginRegistry::of([JSON, YAML, CSV])
}

#[test]
fn test_count_excludes_absent_entries() {
    let inputs = [None, Some(JSON), None, None, Some(CSV), Some(YAML), None];
    let absent = inputs.iter().filter(|entry| entry.is_none()).count();

    let registry: SimplePluginRegistry<Codec, MediaType> =
        SimplePluginRegistry::from_nullable(inputs.clone());

    assert_eq!(registry.count_plugins(), inputs.len() - absent);
    assert_eq!(codec_names(&registry), ["json", "csv", "yaml"]);
}

#[test]
fn test_first_match_is_head_of_all_matches() {
    let registry = codecs();

    for media in [MediaType::Json, MediaType::Yaml, MediaType::Csv, MediaType::Binary] {
        let all = registry.plugins_for(&media);
        let first = registry.plugin_for(&media);

        assert_eq!(first, all.first().copied());
        assert_eq!(registry.has_plugin_for(&media), first.is_some());
    }
}

#[test]
fn test_all_matches_in_stored_order() {
    let registry = codecs();
    assert_eq!(codec_names(registry.plugins_for(&MediaType::Json)), ["json", "yaml"]);
    assert!(registry.plugins_for(&MediaType::Binary).is_empty());
}

#[test]
fn test_default_only_without_match() {
    let registry = codecs();
    let raw = Codec::new("raw", &[MediaType::Binary]);

    assert_eq!(registry.plugin_or_default_for(&MediaType::Binary, &raw), &raw);
    assert_eq!(registry.plugin_or_default_for(&MediaType::Csv, &raw), &CSV);

    let defaults = [raw.clone()];
    assert_eq!(
        codec_names(registry.plugins_or_defaults_for(&MediaType::Binary, &defaults)),
        ["raw"]
    );
    assert_eq!(
        codec_names(registry.plugins_or_defaults_for(&MediaType::Json, &defaults)),
        ["json", "yaml"]
    );
}

#[derive(Debug, PartialEq)]
struct Unsupported(MediaType);

#[test]
fn test_factory_error_surfaces_unchanged() {
    let registry = codecs();

    let missing = registry.plugin_for_or_else(&MediaType::Binary, || Unsupported(MediaType::Binary));
    assert_eq!(missing, Err(Unsupported(MediaType::Binary)));

    let found = registry.plugin_for_or_else(&MediaType::Yaml, || -> Unsupported {
        panic!("factory invoked although a plugin matches")
    });
    assert_eq!(found, Ok(&YAML));

    let missing = registry.plugins_for_or_else(&MediaType::Binary, || Unsupported(MediaType::Binary));
    assert_eq!(missing, Err(Unsupported(MediaType::Binary)));
}

#[test]
fn test_required_lookup() {
    let registry = codecs();

    assert_eq!(registry.required_plugin_for(&MediaType::Csv).ok(), Some(&CSV));

    let err = registry.required_plugin_for(&MediaType::Binary).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidArgument(_)));
    let message = err.to_string();
    assert!(message.starts_with("No plugin found for delimiter Binary!"));
    assert!(message.contains("\"json\""));

    let err = registry
        .required_plugin_for_with(&MediaType::Binary, || "binary output is not supported".into())
        .unwrap_err();
    assert_eq!(err.to_string(), "binary output is not supported");
}

#[test]
fn test_empty_registry_is_just_zero_matches() {
    let registry: SimplePluginRegistry<Codec, MediaType> = SimplePluginRegistry::empty();

    assert!(registry.is_empty());
    assert!(registry.plugins().is_empty());
    assert!(registry.plugin_for(&MediaType::Json).is_none());
    assert!(registry.plugins_for(&MediaType::Json).is_empty());
    assert!(!registry.has_plugin_for(&MediaType::Json));
    assert!(registry.required_plugin_for(&MediaType::Json).is_err());
    assert_eq!(registry.plugin_or_default_for(&MediaType::Json, &JSON), &JSON);
    assert_eq!(registry.iter().next(), None);
}

#[test]
fn test_trait_object_plugins() {
    let registry: SimplePluginRegistry<Arc<dyn Named>, MediaType> =
        SimplePluginRegistry::of([Arc::new(CSV) as Arc<dyn Named>, Arc::new(YAML)]);

    let found = registry.plugin_for(&MediaType::Json).map(|plugin| plugin.name());
    assert_eq!(found, Some("yaml"));
    assert!(registry.plugins()[0].supports(&MediaType::Csv));
    assert_eq!(registry.plugins_for(&MediaType::Csv).len(), 1);
}

#[test]
fn test_contains_and_independence() {
    let registry = codecs();
    assert!(registry.contains(&YAML));
    assert!(!registry.contains(&Codec::new("xml", &[])));

    let rebuilt: SimplePluginRegistry<Codec, MediaType> =
        registry.iter().filter(|codec| codec.name != "yaml").cloned().collect();

    assert_eq!(codec_names(&rebuilt), ["json", "csv"]);
    assert_eq!(codec_names(&registry), ["json", "yaml", "csv"]);
}

#[test]
fn test_registry_is_shareable_across_threads() {
    let registry = Arc::new(codecs());

    let handles: Vec<_> = [MediaType::Json, MediaType::Csv]
        .into_iter()
        .map(|media| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || registry.plugin_for(&media).map(|codec| codec.name))
        })
        .collect();

    let found: Vec<_> = handles.into_iter().map(|handle| handle.join().unwrap()).collect();
    assert_eq!(found, [Some("json"), Some("csv")]);
}
