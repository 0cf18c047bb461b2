//! Tag protection rule
//!
//! Decides whether a version is exempt from deletion based on its tags:
//! - no tags - not protected
//! - `latest` - protected
//! - `*.sha.*` - not protected (commit build)
//! - `*SNAPSHOT*` - not protected (snapshot build)
//! - any other tag - protected (release)
//!
//! Only the first tag is decisive; later tags are never consulted.

/// Tag that always protects a version
const LATEST_TAG: &str = "latest";

/// Marker of per-commit builds
const SHA_MARKER: &str = ".sha.";

/// Marker of snapshot builds
const SNAPSHOT_MARKER: &str = "SNAPSHOT";

/// Returns true if a version with these tags must not be deleted
pub fn is_protected<S: AsRef<str>>(tags: &[S]) -> bool {
    let Some(first) = tags.first() else {
        return false;
    };
    let tag: &str = first.as_ref();

    if tag == LATEST_TAG {
        true
    } else if tag.contains(SHA_MARKER) || tag.contains(SNAPSHOT_MARKER) {
        false
    } else {
        true
    }
}
