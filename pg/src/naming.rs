//! Filename derivation for generated and published artifacts

/// Inserted before the extension of a stripped-variant artifact
pub const STRIPPED_MARKER: &str = "_WITHOUT_ARCHITECTURE";

/// Matched case-insensitively when publishing
const PUBLISH_MARKER: &str = "without_architecture";

/// Suffix of a published stripped variant
pub const PUBLISHED_STRIPPED_SUFFIX: &str = "_wo";

/// Extension of every published artifact
pub const PUBLISHED_EXTENSION: &str = ".md";

/// Name of the stripped-variant artifact for a document.
///
/// `foo.bar.md` becomes `foo.bar_WITHOUT_ARCHITECTURE.md`; a name without a
/// dot gets the marker appended.
pub fn stripped_variant_name(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(dot) => format!("{}{}{}", &file_name[..dot], STRIPPED_MARKER, &file_name[dot..]),
        None => format!("{}{}", file_name, STRIPPED_MARKER),
    }
}

/// Normalized destination name for a generated artifact.
///
/// Lower-cases the name without its extension, turns the stripped marker
/// into a `_wo` suffix, always ends in `.md`, and tidies underscores.
pub fn published_name(file_name: &str) -> String {
    let base = file_stem(file_name).to_lowercase();
    let name = if base.contains(PUBLISH_MARKER) {
        format!(
            "{}{}{}",
            base.replace(PUBLISH_MARKER, ""),
            PUBLISHED_STRIPPED_SUFFIX,
            PUBLISHED_EXTENSION
        )
    } else {
        format!("{}{}", base, PUBLISHED_EXTENSION)
    };
    tidy_underscores(&name)
}

/// Name without its last extension; a leading dot does not start one.
fn file_stem(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(dot) if dot > 0 => &file_name[..dot],
        _ => file_name,
    }
}

/// Trim leading and trailing `_` and collapse runs of `_` into one.
fn tidy_underscores(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut previous_underscore = false;
    for c in name.trim_matches('_').chars() {
        if c == '_' && previous_underscore {
            continue;
        }
        previous_underscore = c == '_';
        out.push(c);
    }
    out
}
