//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::cursor::Cursor;

impl Cursor<'_> {
    /// Every lookahead burns fuel and every advance refills it, so a grammar
    /// loop that stops consuming trips this instead of hanging.
    #[inline]
    pub(super) fn ensure_progress(&self) {
        assert!(
            self.debug_fuel.get() != 0,
            "scanner is stuck: too many lookaheads without consuming"
        );
        self.debug_fuel.set(self.debug_fuel.get() - 1);
    }
}
