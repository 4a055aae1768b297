// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(WHEEL_LINE_PX > 0.0);
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC < 1.0);
    assert!(MAX_PHOTO_EDGE_PX >= 256);
    // placeholder must be opaque so a failed photo shows as a flat card
    assert_eq!(PLACEHOLDER_RGBA[3], 255);
    assert!(CLEAR_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
}

#[test]
fn photo_urls_follow_index_naming() {
    assert_eq!(photo_url(0), "photographs/0.avif");
    assert_eq!(photo_url(3), "photographs/3.avif");
    assert!(photo_url(2).starts_with(PHOTO_DIR));
    assert!(photo_url(2).ends_with(PHOTO_EXT));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn canvas_id_is_a_valid_element_id() {
    assert!(!CANVAS_ID.is_empty());
    assert!(!CANVAS_ID.contains(char::is_whitespace));
}
