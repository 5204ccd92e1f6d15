//! Integration tests for brain-features.

use brain_features::{
    CatalogAccessors, DEFAULT_CATALOG, FeatureTags, SurfaceOptions, create_registry,
    naming::{DISABLE_PREFIX, to_accessor_name, to_pascal},
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn listing<'a>(pairs: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .map(|(name, tag)| format!("{name} -> {tag}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// === Default catalog scenario ===

#[test]
fn default_catalog_scenario() {
    let surface = create_registry(SurfaceOptions {
        disabled_tags: strings(&["disable_gen_UI", "disable_android_asr"]),
        catalog: Some(DEFAULT_CATALOG.iter().map(|s| s.to_string()).collect()),
        ..Default::default()
    });

    assert_eq!(surface.call("hasGenUI", false), Some(false));
    assert_eq!(surface.call("hasAndroidAsr", false), Some(false));
    assert_eq!(surface.call("hasAmazonSearchGraphql", false), Some(true));

    // Typed accessors agree with the dynamic table.
    assert!(!surface.hasGenUI(false));
    assert!(!surface.hasAndroidAsr(false));
    assert!(surface.hasAmazonSearchGraphql(false));
}

#[test]
fn default_catalog_accessor_names() {
    let surface = create_registry(SurfaceOptions::default());

    // One duplicate tag collapses into a single accessor.
    assert_eq!(surface.accessors().count(), DEFAULT_CATALOG.len() - 1);

    let head = listing(
        surface
            .accessors()
            .take(5)
            .map(|a| (a.name.as_str(), a.tag.as_str())),
    );
    insta::assert_snapshot!(head, @r"
    hasGenUI -> disable_gen_UI
    hasAndroidAsr -> disable_android_asr
    hasIosAsr -> disable_ios_asr
    hasWebAsr -> disable_web_asr
    hasAmazonSearchGraphql -> disable_amazon_search_graphql
    ");
}

#[test]
fn every_default_accessor_is_bound_to_its_tag() {
    let mut surface = create_registry(SurfaceOptions::default());

    for tag in DEFAULT_CATALOG {
        let name = to_accessor_name(tag, "has", Some(DISABLE_PREFIX));
        assert_eq!(surface.call(&name, false), Some(true), "{name}");

        surface.set_tags([*tag]);
        assert_eq!(surface.call(&name, false), Some(false), "{name}");
        assert_eq!(surface.call(&name, true), Some(false), "{name}");
        surface.set_tags(Vec::<String>::new());
    }
}

// === Custom catalogs ===

#[test]
fn custom_catalog_listing_with_collision() {
    let surface = create_registry(SurfaceOptions {
        catalog: Some(strings(&[
            "disable_gen_UI",
            "disable_android_asr",
            "disable_API_keys",
            "gen_UI",
        ])),
        ..Default::default()
    });

    let out = listing(
        surface
            .accessors()
            .map(|a| (a.name.as_str(), a.tag.as_str())),
    );
    insta::assert_snapshot!(out, @r"
    hasGenUI -> gen_UI
    hasAndroidAsr -> disable_android_asr
    hasAPIKeys -> disable_API_keys
    ");
}

#[test]
fn late_binding_after_set_tags() {
    let mut surface = create_registry(SurfaceOptions {
        disabled_tags: strings(&["disable_gen_UI"]),
        catalog: Some(strings(&["disable_gen_UI"])),
        ..Default::default()
    });

    assert_eq!(surface.call("hasGenUI", false), Some(false));
    surface.set_tags(Vec::<String>::new());
    assert_eq!(surface.call("hasGenUI", false), Some(true));
    assert!(surface.hasGenUI(false));
}

// === Registry properties ===

#[test]
fn registry_properties_over_catalog() {
    let disabled = &DEFAULT_CATALOG[..DEFAULT_CATALOG.len() / 2];
    let tags = FeatureTags::new(disabled.iter().copied());

    for tag in DEFAULT_CATALOG.iter().copied().chain(["", "unlisted", "DISABLE_TTS"]) {
        assert!(!tags.is_enabled(tag, true), "guest override for {tag:?}");
        assert_eq!(tags.is_enabled(tag, false), !tags.is_explicitly_listed(tag));
        assert_eq!(tags.is_explicitly_absent(tag, false), tags.is_enabled(tag, false));
        if !disabled.contains(&tag) {
            assert!(tags.is_enabled(tag, false), "allow-by-default for {tag:?}");
        }
    }
}

// === Transcoder ===

#[test]
fn transcoder_examples() {
    assert_eq!(to_pascal("gen_UI", None), "GenUI");
    assert_eq!(to_pascal("test_API_call", None), "TestAPICall");
    assert_eq!(to_pascal("disable_gen_UI", Some("disable_")), "GenUI");
    assert_eq!(
        to_pascal("disable_no_meeting_tab", Some("disable_")),
        "NoMeetingTab"
    );
    assert_eq!(to_accessor_name("admin_role", "check", None), "checkAdminRole");
}

#[test]
fn transcoder_is_total() {
    let inputs = [
        "",
        "_",
        "__",
        "disable_",
        "disable",
        "a",
        "Z",
        "ALL_CAPS_TAG",
        "with space_x",
        "dash-ed_tag",
        "ünïcödé_ßharp",
        "日本_語",
        "tab\t_nl\n",
        "___x___",
    ];
    for input in inputs {
        for strip in [None, Some("disable_"), Some("")] {
            let pascal = to_pascal(input, strip);
            assert!(!pascal.contains('_'));
            for verb in ["has", "", "can"] {
                let name = to_accessor_name(input, verb, strip);
                assert!(name.starts_with(verb));
                assert_eq!(&name[verb.len()..], pascal);
            }
        }
    }
}
