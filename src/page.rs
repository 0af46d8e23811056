// Page lifecycle decisions. No DOM access, so host tests can include this.

/// `document.readyState` while the parser is still running.
pub const READY_STATE_LOADING: &str = "loading";

#[inline]
pub fn still_loading(ready_state: &str) -> bool {
    ready_state == READY_STATE_LOADING
}

/// A page restored from the back/forward cache comes back with its markup
/// but without the widgets `pagehide` unmounted. Remount only then, and only
/// if nothing is live already.
#[inline]
pub fn needs_remount(persisted: bool, live: usize) -> bool {
    persisted && live == 0
}
