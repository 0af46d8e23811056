// Host-side tests for page lifecycle decisions.

#![allow(dead_code)]
mod page {
    include!("../src/page.rs");
}

use page::*;

#[test]
fn only_the_loading_state_waits_for_the_parser() {
    assert!(still_loading("loading"));
    assert!(!still_loading("interactive"));
    assert!(!still_loading("complete"));
}

#[test]
fn cache_restore_remounts_an_empty_page() {
    // pagehide unmounted everything before the page entered the cache
    assert!(needs_remount(true, 0));
}

#[test]
fn fresh_load_and_live_widgets_are_left_alone() {
    // first pageshow of a normal load: init() mounts, not the listener
    assert!(!needs_remount(false, 0));
    assert!(!needs_remount(false, 3));
    assert!(!needs_remount(true, 2));
}
