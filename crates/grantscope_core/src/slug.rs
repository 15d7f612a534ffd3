use url::Url;

/// Attribution suffix appended after the fragment on card deep links.
///
/// The UTM parameters ride inside the fragment, not the query string.
/// Existing shared links rely on this exact placement, so it is preserved
/// even though it is not standard URL semantics.
const CARD_SHARE_SUFFIX: &str = "?utm_source=share&utm_medium=card&utm_campaign=guide";

/// Attribution suffix for page-level share links.
const SITE_SHARE_SUFFIX: &str = "?utm_source=share&utm_medium=site&utm_campaign=guide";

/// Attribution suffix for page-level copy links.
const SITE_COPY_SUFFIX: &str = "?utm_source=copy&utm_medium=site&utm_campaign=guide";

/// Derives the stable, URL-safe identifier for a display name: lower-case,
/// trimmed, everything outside `[a-z0-9\s-]` stripped, whitespace runs and
/// repeated hyphens collapsed to a single hyphen.
///
/// Slugs are not guaranteed unique across the collection; when two names
/// normalize identically the last rendered card owns the identifier.
pub fn derive_slug(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut prev_hyphen = false;
    for ch in lowered.trim().chars() {
        let mapped = if ch.is_whitespace() {
            '-'
        } else if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
            ch
        } else {
            continue;
        };
        if mapped == '-' {
            if !prev_hyphen {
                slug.push('-');
            }
            prev_hyphen = true;
        } else {
            slug.push(mapped);
            prev_hyphen = false;
        }
    }
    slug
}

/// Absolute deep link for one card: page base, `#`, slug, attribution
/// suffix.
pub fn build_program_url(base: &str, slug: &str) -> String {
    format!("{base}#{slug}{CARD_SHARE_SUFFIX}")
}

/// Page-level share link with site attribution.
pub fn site_share_url(base: &str) -> String {
    format!("{base}{SITE_SHARE_SUFFIX}")
}

/// Page-level copy link with site attribution.
pub fn site_copy_url(base: &str) -> String {
    format!("{base}{SITE_COPY_SUFFIX}")
}

/// Extracts the bare slug from a location hash. Strips a leading `#` and
/// ignores everything from the first `?` onward, so attribution parameters
/// embedded in the fragment never affect the lookup.
pub fn resolve_hash_target(location_hash: &str) -> Option<String> {
    let hash = location_hash
        .strip_prefix('#')
        .unwrap_or(location_hash);
    let slug = hash.split('?').next().unwrap_or("");
    if slug.is_empty() {
        None
    } else {
        Some(slug.to_string())
    }
}

/// Derives the shareable page base from a full page URL: origin plus path,
/// with a trailing `index.html` (or `index.htm`) trimmed and any fragment or
/// query dropped.
pub fn page_base(page_url: &str) -> String {
    match Url::parse(page_url) {
        Ok(url) => {
            let path = url.path();
            let trimmed = path
                .strip_suffix("index.html")
                .or_else(|| path.strip_suffix("index.htm"))
                .unwrap_or(path);
            format!("{}{}", url.origin().ascii_serialization(), trimmed)
        }
        Err(_) => {
            // Not an absolute URL; the best we can do is drop the fragment.
            page_url.split('#').next().unwrap_or(page_url).to_string()
        }
    }
}
