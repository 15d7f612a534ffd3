use std::sync::Once;

use grantscope_core::{
    build_program_url, derive_slug, page_base, resolve_hash_target, site_copy_url, site_share_url,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(guide_logging::initialize_for_tests);
}

#[test]
fn slugs_are_lowercase_hyphenated_and_stripped() {
    init_logging();
    assert_eq!(derive_slug("Cover Crop Cost Share"), "cover-crop-cost-share");
    assert_eq!(derive_slug("EQIP (Organic Initiative)!"), "eqip-organic-initiative");
    assert_eq!(derive_slug("  Drought   Relief  "), "drought-relief");
    assert_eq!(derive_slug("Pre--Hyphenated - Name"), "pre-hyphenated-name");
    assert_eq!(derive_slug("Phase 2 Pilot"), "phase-2-pilot");
    assert_eq!(derive_slug("Crème Brûlée Fund"), "crme-brle-fund");
    assert_eq!(derive_slug(""), "");
    assert_eq!(derive_slug("!!!"), "");
}

#[test]
fn slug_derivation_is_idempotent() {
    init_logging();
    for name in [
        "Cover Crop Cost Share",
        "EQIP (Organic Initiative)!",
        "  Drought   Relief  ",
        "a-",
        "",
    ] {
        let once = derive_slug(name);
        assert_eq!(derive_slug(&once), once, "not idempotent for {name:?}");
    }
}

#[test]
fn program_urls_embed_the_attribution_suffix_in_the_fragment() {
    init_logging();
    let url = build_program_url("https://example.com/grants/", "drought-relief");
    assert_eq!(
        url,
        "https://example.com/grants/#drought-relief?utm_source=share&utm_medium=card&utm_campaign=guide"
    );
}

#[test]
fn hash_targets_ignore_embedded_attribution_parameters() {
    init_logging();
    assert_eq!(
        resolve_hash_target("#drought-relief?utm_source=share&utm_medium=card"),
        Some("drought-relief".to_string())
    );
    assert_eq!(
        resolve_hash_target("drought-relief"),
        Some("drought-relief".to_string())
    );
    assert_eq!(resolve_hash_target("#"), None);
    assert_eq!(resolve_hash_target(""), None);
    assert_eq!(resolve_hash_target("#?utm_source=share"), None);
}

#[test]
fn hash_target_round_trips_through_the_program_url() {
    init_logging();
    for name in ["Cover Crop Cost Share", "EQIP (Organic Initiative)!", "Phase 2 Pilot"] {
        let slug = derive_slug(name);
        let url = build_program_url("https://example.com/grants/", &slug);
        let (_, fragment) = url.split_once('#').expect("fragment");
        assert_eq!(resolve_hash_target(fragment), Some(slug));
    }
}

#[test]
fn page_base_trims_a_trailing_index_document() {
    init_logging();
    assert_eq!(
        page_base("https://example.com/grants/index.html"),
        "https://example.com/grants/"
    );
    assert_eq!(
        page_base("https://example.com/grants/index.htm"),
        "https://example.com/grants/"
    );
    assert_eq!(
        page_base("https://example.com/grants/"),
        "https://example.com/grants/"
    );
    // Fragments and queries never leak into the base.
    assert_eq!(
        page_base("https://example.com/grants/index.html#drought-relief"),
        "https://example.com/grants/"
    );
}

#[test]
fn site_links_carry_their_own_attribution() {
    init_logging();
    assert_eq!(
        site_share_url("https://example.com/grants/"),
        "https://example.com/grants/?utm_source=share&utm_medium=site&utm_campaign=guide"
    );
    assert_eq!(
        site_copy_url("https://example.com/grants/"),
        "https://example.com/grants/?utm_source=copy&utm_medium=site&utm_campaign=guide"
    );
}
