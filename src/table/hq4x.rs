//! Cell programs for the 4x filter.
//!
//! Each entry lists the secondary neighbor pairs it compares, then sixteen
//! cells in row-major order covering the 4x4 output block.

use super::{pick, put, Entry, X};
use super::{m11, m211, m31, m521, m53, m611, m71};

#[rustfmt::skip]
pub(super) static ENTRIES: [Entry; 256] = [
    // 0
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 1
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 2
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), put(m31(4, 2)), put(m53(4, 2)),
        put(m521(4, 3, 0)), put(m71(4, 0)), put(m71(4, 2)), put(m521(4, 5, 2)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 3
    Entry { tests: &[], cells: &[
        put(m53(4, 3)), put(m71(4, 3)), put(m31(4, 2)), put(m53(4, 2)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 2)), put(m521(4, 5, 2)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 4
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 5
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 6
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), put(m71(4, 5)), put(m53(4, 5)),
        put(m521(4, 3, 0)), put(m71(4, 0)), put(m71(4, 5)), put(m53(4, 5)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 7
    Entry { tests: &[], cells: &[
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 8
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m31(4, 0)), put(m71(4, 0)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m31(4, 6)), put(m71(4, 6)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 9
    Entry { tests: &[], cells: &[
        put(m53(4, 1)), put(m53(4, 1)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m71(4, 1)), put(m71(4, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m31(4, 6)), put(m71(4, 6)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 10
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, m53(4, 0), m11(1, 3)), pick(0, m31(4, 0), m11(1, 4)), put(m31(4, 2)), put(m53(4, 2)),
        pick(0, m31(4, 0), m11(3, 4)), pick(0, m71(4, 0), X), put(m71(4, 2)), put(m521(4, 5, 2)),
        put(m31(4, 6)), put(m71(4, 6)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 11
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m11(1, 3)), pick(0, X, m11(1, 4)), put(m31(4, 2)), put(m53(4, 2)),
        pick(0, X, m11(3, 4)), put(X), put(m71(4, 2)), put(m521(4, 5, 2)),
        put(m31(4, 6)), put(m71(4, 6)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 12
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m31(4, 0)), put(m71(4, 0)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m31(4, 6)), put(m71(4, 6)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 13
    Entry { tests: &[], cells: &[
        put(m53(4, 1)), put(m53(4, 1)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m71(4, 1)), put(m71(4, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m31(4, 6)), put(m71(4, 6)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 14
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, m53(4, 0), m11(1, 3)), pick(0, m31(4, 0), m53(1, 3)), pick(0, m71(4, 5), m31(1, 4)), pick(0, m53(4, 5), m31(4, 1)),
        pick(0, m31(4, 0), m211(3, 4, 1)), pick(0, m71(4, 0), m611(4, 3, 1)), put(m71(4, 5)), put(m53(4, 5)),
        put(m31(4, 6)), put(m71(4, 6)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 15
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m11(1, 3)), pick(0, X, m53(1, 3)), pick(0, m71(4, 5), m31(1, 4)), pick(0, m53(4, 5), m31(4, 1)),
        pick(0, X, m211(3, 4, 1)), pick(0, X, m611(4, 3, 1)), put(m71(4, 5)), put(m53(4, 5)),
        put(m31(4, 6)), put(m71(4, 6)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 16
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 2)), put(m31(4, 2)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 8)), put(m31(4, 8)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 17
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 2)), put(m31(4, 2)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 8)), put(m31(4, 8)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 18
    Entry { tests: &[(1, 5)], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), pick(0, m31(4, 2), m11(1, 4)), pick(0, m53(4, 2), m11(1, 5)),
        put(m521(4, 3, 0)), put(m71(4, 0)), pick(0, m71(4, 2), X), pick(0, m31(4, 2), m11(5, 4)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 8)), put(m31(4, 8)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 19
    Entry { tests: &[(1, 5)], cells: &[
        pick(0, m53(4, 3), m31(4, 1)), pick(0, m71(4, 3), m31(1, 4)), pick(0, m31(4, 2), m53(1, 5)), pick(0, m53(4, 2), m11(1, 5)),
        put(m53(4, 3)), put(m71(4, 3)), pick(0, m71(4, 2), m611(4, 5, 1)), pick(0, m31(4, 2), m211(5, 4, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 8)), put(m31(4, 8)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 20
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m53(4, 1)), put(m53(4, 1)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 1)), put(m71(4, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 8)), put(m31(4, 8)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 21
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m53(4, 1)), put(m53(4, 1)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 1)), put(m71(4, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 8)), put(m31(4, 8)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 22
    Entry { tests: &[(1, 5)], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), pick(0, X, m11(1, 4)), pick(0, X, m11(1, 5)),
        put(m521(4, 3, 0)), put(m71(4, 0)), put(X), pick(0, X, m11(5, 4)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 8)), put(m31(4, 8)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 23
    Entry { tests: &[(1, 5)], cells: &[
        pick(0, m53(4, 3), m31(4, 1)), pick(0, m71(4, 3), m31(1, 4)), pick(0, X, m53(1, 5)), pick(0, X, m11(1, 5)),
        put(m53(4, 3)), put(m71(4, 3)), pick(0, X, m611(4, 5, 1)), pick(0, X, m211(5, 4, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 8)), put(m31(4, 8)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 24
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m31(4, 0)), put(m71(4, 0)), put(m71(4, 2)), put(m31(4, 2)),
        put(m31(4, 6)), put(m71(4, 6)), put(m71(4, 8)), put(m31(4, 8)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 25
    Entry { tests: &[], cells: &[
        put(m53(4, 1)), put(m53(4, 1)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m71(4, 1)), put(m71(4, 1)), put(m71(4, 2)), put(m31(4, 2)),
        put(m31(4, 6)), put(m71(4, 6)), put(m71(4, 8)), put(m31(4, 8)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 26
    Entry { tests: &[(3, 1), (1, 5)], cells: &[
        pick(0, X, m11(1, 3)), pick(0, X, m11(1, 4)), pick(1, X, m11(1, 4)), pick(1, X, m11(1, 5)),
        pick(0, X, m11(3, 4)), put(X), put(X), pick(1, X, m11(5, 4)),
        put(m31(4, 6)), put(m71(4, 6)), put(m71(4, 8)), put(m31(4, 8)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 27
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m11(1, 3)), pick(0, X, m11(1, 4)), put(m31(4, 2)), put(m53(4, 2)),
        pick(0, X, m11(3, 4)), put(X), put(m71(4, 2)), put(m31(4, 2)),
        put(m31(4, 6)), put(m71(4, 6)), put(m71(4, 8)), put(m31(4, 8)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 28
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m53(4, 1)), put(m53(4, 1)),
        put(m31(4, 0)), put(m71(4, 0)), put(m71(4, 1)), put(m71(4, 1)),
        put(m31(4, 6)), put(m71(4, 6)), put(m71(4, 8)), put(m31(4, 8)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 29
    Entry { tests: &[], cells: &[
        put(m53(4, 1)), put(m53(4, 1)), put(m53(4, 1)), put(m53(4, 1)),
        put(m71(4, 1)), put(m71(4, 1)), put(m71(4, 1)), put(m71(4, 1)),
        put(m31(4, 6)), put(m71(4, 6)), put(m71(4, 8)), put(m31(4, 8)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 30
    Entry { tests: &[(1, 5)], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), pick(0, X, m11(1, 4)), pick(0, X, m11(1, 5)),
        put(m31(4, 0)), put(m71(4, 0)), put(X), pick(0, X, m11(5, 4)),
        put(m31(4, 6)), put(m71(4, 6)), put(m71(4, 8)), put(m31(4, 8)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 31
    Entry { tests: &[(3, 1), (1, 5)], cells: &[
        pick(0, X, m11(1, 3)), pick(0, X, m11(1, 4)), pick(1, X, m11(1, 4)), pick(1, X, m11(1, 5)),
        pick(0, X, m11(3, 4)), put(X), put(X), pick(1, X, m11(5, 4)),
        put(m31(4, 6)), put(m71(4, 6)), put(m71(4, 8)), put(m31(4, 8)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 32
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 33
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 34
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), put(m31(4, 2)), put(m53(4, 2)),
        put(m521(4, 3, 0)), put(m71(4, 0)), put(m71(4, 2)), put(m521(4, 5, 2)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 35
    Entry { tests: &[], cells: &[
        put(m53(4, 3)), put(m71(4, 3)), put(m31(4, 2)), put(m53(4, 2)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 2)), put(m521(4, 5, 2)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 36
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 37
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 38
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), put(m71(4, 5)), put(m53(4, 5)),
        put(m521(4, 3, 0)), put(m71(4, 0)), put(m71(4, 5)), put(m53(4, 5)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 39
    Entry { tests: &[], cells: &[
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 40
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m31(4, 0)), put(m71(4, 0)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m71(4, 7)), put(m71(4, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 7)), put(m53(4, 7)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 41
    Entry { tests: &[], cells: &[
        put(m53(4, 1)), put(m53(4, 1)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m71(4, 1)), put(m71(4, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m71(4, 7)), put(m71(4, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 7)), put(m53(4, 7)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 42
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, m53(4, 0), m11(1, 3)), pick(0, m31(4, 0), m211(1, 4, 3)), put(m31(4, 2)), put(m53(4, 2)),
        pick(0, m31(4, 0), m53(3, 1)), pick(0, m71(4, 0), m611(4, 3, 1)), put(m71(4, 2)), put(m521(4, 5, 2)),
        pick(0, m71(4, 7), m31(3, 4)), put(m71(4, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        pick(0, m53(4, 7), m31(4, 3)), put(m53(4, 7)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 43
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m11(1, 3)), pick(0, X, m211(1, 4, 3)), put(m31(4, 2)), put(m53(4, 2)),
        pick(0, X, m53(3, 1)), pick(0, X, m611(4, 3, 1)), put(m71(4, 2)), put(m521(4, 5, 2)),
        pick(0, m71(4, 7), m31(3, 4)), put(m71(4, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        pick(0, m53(4, 7), m31(4, 3)), put(m53(4, 7)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 44
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m31(4, 0)), put(m71(4, 0)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m71(4, 7)), put(m71(4, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 7)), put(m53(4, 7)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 45
    Entry { tests: &[], cells: &[
        put(m53(4, 1)), put(m53(4, 1)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m71(4, 1)), put(m71(4, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m71(4, 7)), put(m71(4, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 7)), put(m53(4, 7)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 46
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, m53(4, 0), m211(4, 1, 3)), pick(0, m31(4, 0), m31(4, 1)), put(m71(4, 5)), put(m53(4, 5)),
        pick(0, m31(4, 0), m31(4, 3)), pick(0, m71(4, 0), X), put(m71(4, 5)), put(m53(4, 5)),
        put(m71(4, 7)), put(m71(4, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 7)), put(m53(4, 7)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 47
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m211(4, 1, 3)), put(X), put(m71(4, 5)), put(m53(4, 5)),
        put(X), put(X), put(m71(4, 5)), put(m53(4, 5)),
        put(m71(4, 7)), put(m71(4, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 7)), put(m53(4, 7)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 48
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 2)), put(m31(4, 2)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 8)), put(m31(4, 8)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 49
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 2)), put(m31(4, 2)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 8)), put(m31(4, 8)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 50
    Entry { tests: &[(1, 5)], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), pick(0, m31(4, 2), m11(1, 4)), pick(0, m53(4, 2), m11(1, 5)),
        put(m521(4, 3, 0)), put(m71(4, 0)), pick(0, m71(4, 2), X), pick(0, m31(4, 2), m11(5, 4)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 8)), put(m31(4, 8)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 51
    Entry { tests: &[(1, 5)], cells: &[
        pick(0, m53(4, 3), m31(4, 1)), pick(0, m71(4, 3), m31(1, 4)), pick(0, m31(4, 2), m53(1, 5)), pick(0, m53(4, 2), m11(1, 5)),
        put(m53(4, 3)), put(m71(4, 3)), pick(0, m71(4, 2), m611(4, 5, 1)), pick(0, m31(4, 2), m211(5, 4, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 8)), put(m31(4, 8)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 52
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m53(4, 1)), put(m53(4, 1)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 1)), put(m71(4, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 8)), put(m31(4, 8)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 53
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m53(4, 1)), put(m53(4, 1)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 1)), put(m71(4, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 8)), put(m31(4, 8)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 54
    Entry { tests: &[(1, 5)], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), pick(0, X, m11(1, 4)), pick(0, X, m11(1, 5)),
        put(m521(4, 3, 0)), put(m71(4, 0)), put(X), pick(0, X, m11(5, 4)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 8)), put(m31(4, 8)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 55
    Entry { tests: &[(1, 5)], cells: &[
        pick(0, m53(4, 3), m31(4, 1)), pick(0, m71(4, 3), m31(1, 4)), pick(0, X, m53(1, 5)), pick(0, X, m11(1, 5)),
        put(m53(4, 3)), put(m71(4, 3)), pick(0, X, m611(4, 5, 1)), pick(0, X, m211(5, 4, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 8)), put(m31(4, 8)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 56
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m31(4, 0)), put(m71(4, 0)), put(m71(4, 2)), put(m31(4, 2)),
        put(m71(4, 7)), put(m71(4, 7)), put(m71(4, 8)), put(m31(4, 8)),
        put(m53(4, 7)), put(m53(4, 7)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 57
    Entry { tests: &[], cells: &[
        put(m53(4, 1)), put(m53(4, 1)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m71(4, 1)), put(m71(4, 1)), put(m71(4, 2)), put(m31(4, 2)),
        put(m71(4, 7)), put(m71(4, 7)), put(m71(4, 8)), put(m31(4, 8)),
        put(m53(4, 7)), put(m53(4, 7)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 58
    Entry { tests: &[(3, 1), (1, 5)], cells: &[
        pick(0, m53(4, 0), m211(4, 1, 3)), pick(0, m31(4, 0), m31(4, 1)), pick(1, m31(4, 2), m31(4, 1)), pick(1, m53(4, 2), m211(4, 1, 5)),
        pick(0, m31(4, 0), m31(4, 3)), pick(0, m71(4, 0), X), pick(1, m71(4, 2), X), pick(1, m31(4, 2), m31(4, 5)),
        put(m71(4, 7)), put(m71(4, 7)), put(m71(4, 8)), put(m31(4, 8)),
        put(m53(4, 7)), put(m53(4, 7)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 59
    Entry { tests: &[(3, 1), (1, 5)], cells: &[
        pick(0, X, m11(1, 3)), pick(0, X, m11(1, 4)), pick(1, m31(4, 2), m31(4, 1)), pick(1, m53(4, 2), m211(4, 1, 5)),
        pick(0, X, m11(3, 4)), put(X), pick(1, m71(4, 2), X), pick(1, m31(4, 2), m31(4, 5)),
        put(m71(4, 7)), put(m71(4, 7)), put(m71(4, 8)), put(m31(4, 8)),
        put(m53(4, 7)), put(m53(4, 7)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 60
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m53(4, 1)), put(m53(4, 1)),
        put(m31(4, 0)), put(m71(4, 0)), put(m71(4, 1)), put(m71(4, 1)),
        put(m71(4, 7)), put(m71(4, 7)), put(m71(4, 8)), put(m31(4, 8)),
        put(m53(4, 7)), put(m53(4, 7)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 61
    Entry { tests: &[], cells: &[
        put(m53(4, 1)), put(m53(4, 1)), put(m53(4, 1)), put(m53(4, 1)),
        put(m71(4, 1)), put(m71(4, 1)), put(m71(4, 1)), put(m71(4, 1)),
        put(m71(4, 7)), put(m71(4, 7)), put(m71(4, 8)), put(m31(4, 8)),
        put(m53(4, 7)), put(m53(4, 7)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 62
    Entry { tests: &[(1, 5)], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), pick(0, X, m11(1, 4)), pick(0, X, m11(1, 5)),
        put(m31(4, 0)), put(m71(4, 0)), put(X), pick(0, X, m11(5, 4)),
        put(m71(4, 7)), put(m71(4, 7)), put(m71(4, 8)), put(m31(4, 8)),
        put(m53(4, 7)), put(m53(4, 7)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 63
    Entry { tests: &[(3, 1), (1, 5)], cells: &[
        pick(0, X, m211(4, 1, 3)), put(X), pick(1, X, m11(1, 4)), pick(1, X, m11(1, 5)),
        put(X), put(X), put(X), pick(1, X, m11(5, 4)),
        put(m71(4, 7)), put(m71(4, 7)), put(m71(4, 8)), put(m31(4, 8)),
        put(m53(4, 7)), put(m53(4, 7)), put(m521(4, 7, 8)), put(m53(4, 8)),
    ] },
    // 64
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m521(4, 3, 6)), put(m71(4, 6)), put(m71(4, 8)), put(m521(4, 5, 8)),
        put(m53(4, 6)), put(m31(4, 6)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 65
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m521(4, 3, 6)), put(m71(4, 6)), put(m71(4, 8)), put(m521(4, 5, 8)),
        put(m53(4, 6)), put(m31(4, 6)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 66
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), put(m31(4, 2)), put(m53(4, 2)),
        put(m521(4, 3, 0)), put(m71(4, 0)), put(m71(4, 2)), put(m521(4, 5, 2)),
        put(m521(4, 3, 6)), put(m71(4, 6)), put(m71(4, 8)), put(m521(4, 5, 8)),
        put(m53(4, 6)), put(m31(4, 6)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 67
    Entry { tests: &[], cells: &[
        put(m53(4, 3)), put(m71(4, 3)), put(m31(4, 2)), put(m53(4, 2)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 2)), put(m521(4, 5, 2)),
        put(m521(4, 3, 6)), put(m71(4, 6)), put(m71(4, 8)), put(m521(4, 5, 8)),
        put(m53(4, 6)), put(m31(4, 6)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 68
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m521(4, 3, 6)), put(m71(4, 6)), put(m71(4, 8)), put(m521(4, 5, 8)),
        put(m53(4, 6)), put(m31(4, 6)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 69
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m521(4, 3, 6)), put(m71(4, 6)), put(m71(4, 8)), put(m521(4, 5, 8)),
        put(m53(4, 6)), put(m31(4, 6)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 70
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), put(m71(4, 5)), put(m53(4, 5)),
        put(m521(4, 3, 0)), put(m71(4, 0)), put(m71(4, 5)), put(m53(4, 5)),
        put(m521(4, 3, 6)), put(m71(4, 6)), put(m71(4, 8)), put(m521(4, 5, 8)),
        put(m53(4, 6)), put(m31(4, 6)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 71
    Entry { tests: &[], cells: &[
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
        put(m521(4, 3, 6)), put(m71(4, 6)), put(m71(4, 8)), put(m521(4, 5, 8)),
        put(m53(4, 6)), put(m31(4, 6)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 72
    Entry { tests: &[(7, 3)], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m31(4, 0)), put(m71(4, 0)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        pick(0, m31(4, 6), m11(3, 4)), pick(0, m71(4, 6), X), put(m71(4, 8)), put(m521(4, 5, 8)),
        pick(0, m53(4, 6), m11(7, 3)), pick(0, m31(4, 6), m11(7, 4)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 73
    Entry { tests: &[(7, 3)], cells: &[
        pick(0, m53(4, 1), m31(4, 3)), put(m53(4, 1)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        pick(0, m71(4, 1), m31(3, 4)), put(m71(4, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        pick(0, m31(4, 6), m53(3, 7)), pick(0, m71(4, 6), m611(4, 3, 7)), put(m71(4, 8)), put(m521(4, 5, 8)),
        pick(0, m53(4, 6), m11(7, 3)), pick(0, m31(4, 6), m211(7, 4, 3)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 74
    Entry { tests: &[(3, 1), (7, 3)], cells: &[
        pick(0, X, m11(1, 3)), pick(0, X, m11(1, 4)), put(m31(4, 2)), put(m53(4, 2)),
        pick(0, X, m11(3, 4)), put(X), put(m71(4, 2)), put(m521(4, 5, 2)),
        pick(1, X, m11(3, 4)), put(X), put(m71(4, 8)), put(m521(4, 5, 8)),
        pick(1, X, m11(7, 3)), pick(1, X, m11(7, 4)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 75
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m11(1, 3)), pick(0, X, m11(1, 4)), put(m31(4, 2)), put(m53(4, 2)),
        pick(0, X, m11(3, 4)), put(X), put(m71(4, 2)), put(m521(4, 5, 2)),
        put(m31(4, 6)), put(m71(4, 6)), put(m71(4, 8)), put(m521(4, 5, 8)),
        put(m53(4, 6)), put(m31(4, 6)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 76
    Entry { tests: &[(7, 3)], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m31(4, 0)), put(m71(4, 0)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        pick(0, m31(4, 6), m11(3, 4)), pick(0, m71(4, 6), X), put(m71(4, 8)), put(m521(4, 5, 8)),
        pick(0, m53(4, 6), m11(7, 3)), pick(0, m31(4, 6), m11(7, 4)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 77
    Entry { tests: &[(7, 3)], cells: &[
        pick(0, m53(4, 1), m31(4, 3)), put(m53(4, 1)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        pick(0, m71(4, 1), m31(3, 4)), put(m71(4, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        pick(0, m31(4, 6), m53(3, 7)), pick(0, m71(4, 6), m611(4, 3, 7)), put(m71(4, 8)), put(m521(4, 5, 8)),
        pick(0, m53(4, 6), m11(7, 3)), pick(0, m31(4, 6), m211(7, 4, 3)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 78
    Entry { tests: &[(3, 1), (7, 3)], cells: &[
        pick(0, m53(4, 0), m211(4, 1, 3)), pick(0, m31(4, 0), m31(4, 1)), put(m71(4, 5)), put(m53(4, 5)),
        pick(0, m31(4, 0), m31(4, 3)), pick(0, m71(4, 0), X), put(m71(4, 5)), put(m53(4, 5)),
        pick(1, m31(4, 6), m31(4, 3)), pick(1, m71(4, 6), X), put(m71(4, 8)), put(m521(4, 5, 8)),
        pick(1, m53(4, 6), m211(4, 7, 3)), pick(1, m31(4, 6), m31(4, 7)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 79
    Entry { tests: &[(3, 1), (7, 3)], cells: &[
        pick(0, X, m11(1, 3)), pick(0, X, m11(1, 4)), put(m71(4, 5)), put(m53(4, 5)),
        pick(0, X, m11(3, 4)), put(X), put(m71(4, 5)), put(m53(4, 5)),
        pick(1, m31(4, 6), m31(4, 3)), pick(1, m71(4, 6), X), put(m71(4, 8)), put(m521(4, 5, 8)),
        pick(1, m53(4, 6), m211(4, 7, 3)), pick(1, m31(4, 6), m31(4, 7)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 80
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 2)), put(m31(4, 2)),
        put(m521(4, 3, 6)), put(m71(4, 6)), pick(0, m71(4, 8), X), pick(0, m31(4, 8), m11(5, 4)),
        put(m53(4, 6)), put(m31(4, 6)), pick(0, m31(4, 8), m11(7, 4)), pick(0, m53(4, 8), m11(7, 5)),
    ] },
    // 81
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 2)), put(m31(4, 2)),
        put(m521(4, 3, 6)), put(m71(4, 6)), pick(0, m71(4, 8), X), pick(0, m31(4, 8), m11(5, 4)),
        put(m53(4, 6)), put(m31(4, 6)), pick(0, m31(4, 8), m11(7, 4)), pick(0, m53(4, 8), m11(7, 5)),
    ] },
    // 82
    Entry { tests: &[(1, 5), (5, 7)], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), pick(0, X, m11(1, 4)), pick(0, X, m11(1, 5)),
        put(m521(4, 3, 0)), put(m71(4, 0)), put(X), pick(0, X, m11(5, 4)),
        put(m521(4, 3, 6)), put(m71(4, 6)), put(X), pick(1, X, m11(5, 4)),
        put(m53(4, 6)), put(m31(4, 6)), pick(1, X, m11(7, 4)), pick(1, X, m11(7, 5)),
    ] },
    // 83
    Entry { tests: &[(1, 5), (5, 7)], cells: &[
        put(m53(4, 3)), put(m71(4, 3)), pick(0, m31(4, 2), m31(4, 1)), pick(0, m53(4, 2), m211(4, 1, 5)),
        put(m53(4, 3)), put(m71(4, 3)), pick(0, m71(4, 2), X), pick(0, m31(4, 2), m31(4, 5)),
        put(m521(4, 3, 6)), put(m71(4, 6)), pick(1, m71(4, 8), X), pick(1, m31(4, 8), m31(4, 5)),
        put(m53(4, 6)), put(m31(4, 6)), pick(1, m31(4, 8), m31(4, 7)), pick(1, m53(4, 8), m211(4, 7, 5)),
    ] },
    // 84
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m53(4, 1)), pick(0, m53(4, 1), m31(4, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 1)), pick(0, m71(4, 1), m31(5, 4)),
        put(m521(4, 3, 6)), put(m71(4, 6)), pick(0, m71(4, 8), m611(4, 5, 7)), pick(0, m31(4, 8), m53(5, 7)),
        put(m53(4, 6)), put(m31(4, 6)), pick(0, m31(4, 8), m211(7, 4, 5)), pick(0, m53(4, 8), m11(7, 5)),
    ] },
    // 85
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m53(4, 1)), pick(0, m53(4, 1), m31(4, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 1)), pick(0, m71(4, 1), m31(5, 4)),
        put(m521(4, 3, 6)), put(m71(4, 6)), pick(0, m71(4, 8), m611(4, 5, 7)), pick(0, m31(4, 8), m53(5, 7)),
        put(m53(4, 6)), put(m31(4, 6)), pick(0, m31(4, 8), m211(7, 4, 5)), pick(0, m53(4, 8), m11(7, 5)),
    ] },
    // 86
    Entry { tests: &[(1, 5)], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), pick(0, X, m11(1, 4)), pick(0, X, m11(1, 5)),
        put(m521(4, 3, 0)), put(m71(4, 0)), put(X), pick(0, X, m11(5, 4)),
        put(m521(4, 3, 6)), put(m71(4, 6)), put(m71(4, 8)), put(m31(4, 8)),
        put(m53(4, 6)), put(m31(4, 6)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 87
    Entry { tests: &[(1, 5), (5, 7)], cells: &[
        put(m53(4, 3)), put(m71(4, 3)), pick(0, X, m11(1, 4)), pick(0, X, m11(1, 5)),
        put(m53(4, 3)), put(m71(4, 3)), put(X), pick(0, X, m11(5, 4)),
        put(m521(4, 3, 6)), put(m71(4, 6)), pick(1, m71(4, 8), X), pick(1, m31(4, 8), m31(4, 5)),
        put(m53(4, 6)), put(m31(4, 6)), pick(1, m31(4, 8), m31(4, 7)), pick(1, m53(4, 8), m211(4, 7, 5)),
    ] },
    // 88
    Entry { tests: &[(7, 3), (5, 7)], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m31(4, 0)), put(m71(4, 0)), put(m71(4, 2)), put(m31(4, 2)),
        pick(0, X, m11(3, 4)), put(X), put(X), pick(1, X, m11(5, 4)),
        pick(0, X, m11(7, 3)), pick(0, X, m11(7, 4)), pick(1, X, m11(7, 4)), pick(1, X, m11(7, 5)),
    ] },
    // 89
    Entry { tests: &[(7, 3), (5, 7)], cells: &[
        put(m53(4, 1)), put(m53(4, 1)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m71(4, 1)), put(m71(4, 1)), put(m71(4, 2)), put(m31(4, 2)),
        pick(0, m31(4, 6), m31(4, 3)), pick(0, m71(4, 6), X), pick(1, m71(4, 8), X), pick(1, m31(4, 8), m31(4, 5)),
        pick(0, m53(4, 6), m211(4, 7, 3)), pick(0, m31(4, 6), m31(4, 7)), pick(1, m31(4, 8), m31(4, 7)), pick(1, m53(4, 8), m211(4, 7, 5)),
    ] },
    // 90
    Entry { tests: &[(3, 1), (1, 5), (7, 3), (5, 7)], cells: &[
        pick(0, m53(4, 0), m211(4, 1, 3)), pick(0, m31(4, 0), m31(4, 1)), pick(1, m31(4, 2), m31(4, 1)), pick(1, m53(4, 2), m211(4, 1, 5)),
        pick(0, m31(4, 0), m31(4, 3)), pick(0, m71(4, 0), X), pick(1, m71(4, 2), X), pick(1, m31(4, 2), m31(4, 5)),
        pick(2, m31(4, 6), m31(4, 3)), pick(2, m71(4, 6), X), pick(3, m71(4, 8), X), pick(3, m31(4, 8), m31(4, 5)),
        pick(2, m53(4, 6), m211(4, 7, 3)), pick(2, m31(4, 6), m31(4, 7)), pick(3, m31(4, 8), m31(4, 7)), pick(3, m53(4, 8), m211(4, 7, 5)),
    ] },
    // 91
    Entry { tests: &[(3, 1), (1, 5), (7, 3), (5, 7)], cells: &[
        pick(0, X, m11(1, 3)), pick(0, X, m11(1, 4)), pick(1, m31(4, 2), m31(4, 1)), pick(1, m53(4, 2), m211(4, 1, 5)),
        pick(0, X, m11(3, 4)), put(X), pick(1, m71(4, 2), X), pick(1, m31(4, 2), m31(4, 5)),
        pick(2, m31(4, 6), m31(4, 3)), pick(2, m71(4, 6), X), pick(3, m71(4, 8), X), pick(3, m31(4, 8), m31(4, 5)),
        pick(2, m53(4, 6), m211(4, 7, 3)), pick(2, m31(4, 6), m31(4, 7)), pick(3, m31(4, 8), m31(4, 7)), pick(3, m53(4, 8), m211(4, 7, 5)),
    ] },
    // 92
    Entry { tests: &[(7, 3), (5, 7)], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m53(4, 1)), put(m53(4, 1)),
        put(m31(4, 0)), put(m71(4, 0)), put(m71(4, 1)), put(m71(4, 1)),
        pick(0, m31(4, 6), m31(4, 3)), pick(0, m71(4, 6), X), pick(1, m71(4, 8), X), pick(1, m31(4, 8), m31(4, 5)),
        pick(0, m53(4, 6), m211(4, 7, 3)), pick(0, m31(4, 6), m31(4, 7)), pick(1, m31(4, 8), m31(4, 7)), pick(1, m53(4, 8), m211(4, 7, 5)),
    ] },
    // 93
    Entry { tests: &[(7, 3), (5, 7)], cells: &[
        put(m53(4, 1)), put(m53(4, 1)), put(m53(4, 1)), put(m53(4, 1)),
        put(m71(4, 1)), put(m71(4, 1)), put(m71(4, 1)), put(m71(4, 1)),
        pick(0, m31(4, 6), m31(4, 3)), pick(0, m71(4, 6), X), pick(1, m71(4, 8), X), pick(1, m31(4, 8), m31(4, 5)),
        pick(0, m53(4, 6), m211(4, 7, 3)), pick(0, m31(4, 6), m31(4, 7)), pick(1, m31(4, 8), m31(4, 7)), pick(1, m53(4, 8), m211(4, 7, 5)),
    ] },
    // 94
    Entry { tests: &[(3, 1), (1, 5), (7, 3), (5, 7)], cells: &[
        pick(0, m53(4, 0), m211(4, 1, 3)), pick(0, m31(4, 0), m31(4, 1)), pick(1, X, m11(1, 4)), pick(1, X, m11(1, 5)),
        pick(0, m31(4, 0), m31(4, 3)), pick(0, m71(4, 0), X), put(X), pick(1, X, m11(5, 4)),
        pick(2, m31(4, 6), m31(4, 3)), pick(2, m71(4, 6), X), pick(3, m71(4, 8), X), pick(3, m31(4, 8), m31(4, 5)),
        pick(2, m53(4, 6), m211(4, 7, 3)), pick(2, m31(4, 6), m31(4, 7)), pick(3, m31(4, 8), m31(4, 7)), pick(3, m53(4, 8), m211(4, 7, 5)),
    ] },
    // 95
    Entry { tests: &[(3, 1), (1, 5)], cells: &[
        pick(0, X, m11(1, 3)), pick(0, X, m11(1, 4)), pick(1, X, m11(1, 4)), pick(1, X, m11(1, 5)),
        pick(0, X, m11(3, 4)), put(X), put(X), pick(1, X, m11(5, 4)),
        put(m31(4, 6)), put(m71(4, 6)), put(m71(4, 8)), put(m31(4, 8)),
        put(m53(4, 6)), put(m31(4, 6)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 96
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 8)), put(m521(4, 5, 8)),
        put(m53(4, 3)), put(m71(4, 3)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 97
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 8)), put(m521(4, 5, 8)),
        put(m53(4, 3)), put(m71(4, 3)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 98
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), put(m31(4, 2)), put(m53(4, 2)),
        put(m521(4, 3, 0)), put(m71(4, 0)), put(m71(4, 2)), put(m521(4, 5, 2)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 8)), put(m521(4, 5, 8)),
        put(m53(4, 3)), put(m71(4, 3)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 99
    Entry { tests: &[], cells: &[
        put(m53(4, 3)), put(m71(4, 3)), put(m31(4, 2)), put(m53(4, 2)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 2)), put(m521(4, 5, 2)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 8)), put(m521(4, 5, 8)),
        put(m53(4, 3)), put(m71(4, 3)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 100
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 8)), put(m521(4, 5, 8)),
        put(m53(4, 3)), put(m71(4, 3)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 101
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 8)), put(m521(4, 5, 8)),
        put(m53(4, 3)), put(m71(4, 3)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 102
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), put(m71(4, 5)), put(m53(4, 5)),
        put(m521(4, 3, 0)), put(m71(4, 0)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 8)), put(m521(4, 5, 8)),
        put(m53(4, 3)), put(m71(4, 3)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 103
    Entry { tests: &[], cells: &[
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 8)), put(m521(4, 5, 8)),
        put(m53(4, 3)), put(m71(4, 3)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 104
    Entry { tests: &[(7, 3)], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m31(4, 0)), put(m71(4, 0)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        pick(0, X, m11(3, 4)), put(X), put(m71(4, 8)), put(m521(4, 5, 8)),
        pick(0, X, m11(7, 3)), pick(0, X, m11(7, 4)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 105
    Entry { tests: &[(7, 3)], cells: &[
        pick(0, m53(4, 1), m31(4, 3)), put(m53(4, 1)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        pick(0, m71(4, 1), m31(3, 4)), put(m71(4, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        pick(0, X, m53(3, 7)), pick(0, X, m611(4, 3, 7)), put(m71(4, 8)), put(m521(4, 5, 8)),
        pick(0, X, m11(7, 3)), pick(0, X, m211(7, 4, 3)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 106
    Entry { tests: &[(7, 3)], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), put(m31(4, 2)), put(m53(4, 2)),
        put(m31(4, 0)), put(m71(4, 0)), put(m71(4, 2)), put(m521(4, 5, 2)),
        pick(0, X, m11(3, 4)), put(X), put(m71(4, 8)), put(m521(4, 5, 8)),
        pick(0, X, m11(7, 3)), pick(0, X, m11(7, 4)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 107
    Entry { tests: &[(3, 1), (7, 3)], cells: &[
        pick(0, X, m11(1, 3)), pick(0, X, m11(1, 4)), put(m31(4, 2)), put(m53(4, 2)),
        pick(0, X, m11(3, 4)), put(X), put(m71(4, 2)), put(m521(4, 5, 2)),
        pick(1, X, m11(3, 4)), put(X), put(m71(4, 8)), put(m521(4, 5, 8)),
        pick(1, X, m11(7, 3)), pick(1, X, m11(7, 4)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 108
    Entry { tests: &[(7, 3)], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m31(4, 0)), put(m71(4, 0)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        pick(0, X, m11(3, 4)), put(X), put(m71(4, 8)), put(m521(4, 5, 8)),
        pick(0, X, m11(7, 3)), pick(0, X, m11(7, 4)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 109
    Entry { tests: &[(7, 3)], cells: &[
        pick(0, m53(4, 1), m31(4, 3)), put(m53(4, 1)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        pick(0, m71(4, 1), m31(3, 4)), put(m71(4, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        pick(0, X, m53(3, 7)), pick(0, X, m611(4, 3, 7)), put(m71(4, 8)), put(m521(4, 5, 8)),
        pick(0, X, m11(7, 3)), pick(0, X, m211(7, 4, 3)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 110
    Entry { tests: &[(7, 3)], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), put(m71(4, 5)), put(m53(4, 5)),
        put(m31(4, 0)), put(m71(4, 0)), put(m71(4, 5)), put(m53(4, 5)),
        pick(0, X, m11(3, 4)), put(X), put(m71(4, 8)), put(m521(4, 5, 8)),
        pick(0, X, m11(7, 3)), pick(0, X, m11(7, 4)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 111
    Entry { tests: &[(3, 1), (7, 3)], cells: &[
        pick(0, X, m211(4, 1, 3)), put(X), put(m71(4, 5)), put(m53(4, 5)),
        put(X), put(X), put(m71(4, 5)), put(m53(4, 5)),
        pick(1, X, m11(3, 4)), put(X), put(m71(4, 8)), put(m521(4, 5, 8)),
        pick(1, X, m11(7, 3)), pick(1, X, m11(7, 4)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 112
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 2)), put(m31(4, 2)),
        put(m53(4, 3)), put(m71(4, 3)), pick(0, m71(4, 8), m611(4, 5, 7)), pick(0, m31(4, 8), m211(5, 4, 7)),
        pick(0, m53(4, 3), m31(4, 7)), pick(0, m71(4, 3), m31(7, 4)), pick(0, m31(4, 8), m53(7, 5)), pick(0, m53(4, 8), m11(7, 5)),
    ] },
    // 113
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 2)), put(m31(4, 2)),
        put(m53(4, 3)), put(m71(4, 3)), pick(0, m71(4, 8), m611(4, 5, 7)), pick(0, m31(4, 8), m211(5, 4, 7)),
        pick(0, m53(4, 3), m31(4, 7)), pick(0, m71(4, 3), m31(7, 4)), pick(0, m31(4, 8), m53(7, 5)), pick(0, m53(4, 8), m11(7, 5)),
    ] },
    // 114
    Entry { tests: &[(1, 5), (5, 7)], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), pick(0, m31(4, 2), m31(4, 1)), pick(0, m53(4, 2), m211(4, 1, 5)),
        put(m521(4, 3, 0)), put(m71(4, 0)), pick(0, m71(4, 2), X), pick(0, m31(4, 2), m31(4, 5)),
        put(m53(4, 3)), put(m71(4, 3)), pick(1, m71(4, 8), X), pick(1, m31(4, 8), m31(4, 5)),
        put(m53(4, 3)), put(m71(4, 3)), pick(1, m31(4, 8), m31(4, 7)), pick(1, m53(4, 8), m211(4, 7, 5)),
    ] },
    // 115
    Entry { tests: &[(1, 5), (5, 7)], cells: &[
        put(m53(4, 3)), put(m71(4, 3)), pick(0, m31(4, 2), m31(4, 1)), pick(0, m53(4, 2), m211(4, 1, 5)),
        put(m53(4, 3)), put(m71(4, 3)), pick(0, m71(4, 2), X), pick(0, m31(4, 2), m31(4, 5)),
        put(m53(4, 3)), put(m71(4, 3)), pick(1, m71(4, 8), X), pick(1, m31(4, 8), m31(4, 5)),
        put(m53(4, 3)), put(m71(4, 3)), pick(1, m31(4, 8), m31(4, 7)), pick(1, m53(4, 8), m211(4, 7, 5)),
    ] },
    // 116
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m53(4, 1)), put(m53(4, 1)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 1)), put(m71(4, 1)),
        put(m53(4, 3)), put(m71(4, 3)), pick(0, m71(4, 8), X), pick(0, m31(4, 8), m31(4, 5)),
        put(m53(4, 3)), put(m71(4, 3)), pick(0, m31(4, 8), m31(4, 7)), pick(0, m53(4, 8), m211(4, 7, 5)),
    ] },
    // 117
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m53(4, 1)), put(m53(4, 1)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 1)), put(m71(4, 1)),
        put(m53(4, 3)), put(m71(4, 3)), pick(0, m71(4, 8), X), pick(0, m31(4, 8), m31(4, 5)),
        put(m53(4, 3)), put(m71(4, 3)), pick(0, m31(4, 8), m31(4, 7)), pick(0, m53(4, 8), m211(4, 7, 5)),
    ] },
    // 118
    Entry { tests: &[(1, 5)], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), pick(0, X, m11(1, 4)), pick(0, X, m11(1, 5)),
        put(m521(4, 3, 0)), put(m71(4, 0)), put(X), pick(0, X, m11(5, 4)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 8)), put(m31(4, 8)),
        put(m53(4, 3)), put(m71(4, 3)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 119
    Entry { tests: &[(1, 5)], cells: &[
        pick(0, m53(4, 3), m31(4, 1)), pick(0, m71(4, 3), m31(1, 4)), pick(0, X, m53(1, 5)), pick(0, X, m11(1, 5)),
        put(m53(4, 3)), put(m71(4, 3)), pick(0, X, m611(4, 5, 1)), pick(0, X, m211(5, 4, 1)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 8)), put(m31(4, 8)),
        put(m53(4, 3)), put(m71(4, 3)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 120
    Entry { tests: &[(7, 3)], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m31(4, 0)), put(m71(4, 0)), put(m71(4, 2)), put(m31(4, 2)),
        pick(0, X, m11(3, 4)), put(X), put(m71(4, 8)), put(m31(4, 8)),
        pick(0, X, m11(7, 3)), pick(0, X, m11(7, 4)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 121
    Entry { tests: &[(7, 3), (5, 7)], cells: &[
        put(m53(4, 1)), put(m53(4, 1)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m71(4, 1)), put(m71(4, 1)), put(m71(4, 2)), put(m31(4, 2)),
        pick(0, X, m11(3, 4)), put(X), pick(1, m71(4, 8), X), pick(1, m31(4, 8), m31(4, 5)),
        pick(0, X, m11(7, 3)), pick(0, X, m11(7, 4)), pick(1, m31(4, 8), m31(4, 7)), pick(1, m53(4, 8), m211(4, 7, 5)),
    ] },
    // 122
    Entry { tests: &[(3, 1), (1, 5), (7, 3), (5, 7)], cells: &[
        pick(0, m53(4, 0), m211(4, 1, 3)), pick(0, m31(4, 0), m31(4, 1)), pick(1, m31(4, 2), m31(4, 1)), pick(1, m53(4, 2), m211(4, 1, 5)),
        pick(0, m31(4, 0), m31(4, 3)), pick(0, m71(4, 0), X), pick(1, m71(4, 2), X), pick(1, m31(4, 2), m31(4, 5)),
        pick(2, X, m11(3, 4)), put(X), pick(3, m71(4, 8), X), pick(3, m31(4, 8), m31(4, 5)),
        pick(2, X, m11(7, 3)), pick(2, X, m11(7, 4)), pick(3, m31(4, 8), m31(4, 7)), pick(3, m53(4, 8), m211(4, 7, 5)),
    ] },
    // 123
    Entry { tests: &[(3, 1), (7, 3)], cells: &[
        pick(0, X, m11(1, 3)), pick(0, X, m11(1, 4)), put(m31(4, 2)), put(m53(4, 2)),
        pick(0, X, m11(3, 4)), put(X), put(m71(4, 2)), put(m31(4, 2)),
        pick(1, X, m11(3, 4)), put(X), put(m71(4, 8)), put(m31(4, 8)),
        pick(1, X, m11(7, 3)), pick(1, X, m11(7, 4)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 124
    Entry { tests: &[(7, 3)], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m53(4, 1)), put(m53(4, 1)),
        put(m31(4, 0)), put(m71(4, 0)), put(m71(4, 1)), put(m71(4, 1)),
        pick(0, X, m11(3, 4)), put(X), put(m71(4, 8)), put(m31(4, 8)),
        pick(0, X, m11(7, 3)), pick(0, X, m11(7, 4)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 125
    Entry { tests: &[(7, 3)], cells: &[
        pick(0, m53(4, 1), m31(4, 3)), put(m53(4, 1)), put(m53(4, 1)), put(m53(4, 1)),
        pick(0, m71(4, 1), m31(3, 4)), put(m71(4, 1)), put(m71(4, 1)), put(m71(4, 1)),
        pick(0, X, m53(3, 7)), pick(0, X, m611(4, 3, 7)), put(m71(4, 8)), put(m31(4, 8)),
        pick(0, X, m11(7, 3)), pick(0, X, m211(7, 4, 3)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 126
    Entry { tests: &[(1, 5), (7, 3)], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), pick(0, X, m11(1, 4)), pick(0, X, m11(1, 5)),
        put(m31(4, 0)), put(m71(4, 0)), put(X), pick(0, X, m11(5, 4)),
        pick(1, X, m11(3, 4)), put(X), put(m71(4, 8)), put(m31(4, 8)),
        pick(1, X, m11(7, 3)), pick(1, X, m11(7, 4)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 127
    Entry { tests: &[(3, 1), (1, 5), (7, 3)], cells: &[
        pick(0, X, m211(4, 1, 3)), put(X), pick(1, X, m11(1, 4)), pick(1, X, m11(1, 5)),
        put(X), put(X), put(X), pick(1, X, m11(5, 4)),
        pick(2, X, m11(3, 4)), put(X), put(m71(4, 8)), put(m31(4, 8)),
        pick(2, X, m11(7, 3)), pick(2, X, m11(7, 4)), put(m31(4, 8)), put(m53(4, 8)),
    ] },
    // 128
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 129
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 130
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), put(m31(4, 2)), put(m53(4, 2)),
        put(m521(4, 3, 0)), put(m71(4, 0)), put(m71(4, 2)), put(m521(4, 5, 2)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 131
    Entry { tests: &[], cells: &[
        put(m53(4, 3)), put(m71(4, 3)), put(m31(4, 2)), put(m53(4, 2)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 2)), put(m521(4, 5, 2)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 132
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 133
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 134
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), put(m71(4, 5)), put(m53(4, 5)),
        put(m521(4, 3, 0)), put(m71(4, 0)), put(m71(4, 5)), put(m53(4, 5)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 135
    Entry { tests: &[], cells: &[
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 136
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m31(4, 0)), put(m71(4, 0)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m31(4, 6)), put(m71(4, 6)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 137
    Entry { tests: &[], cells: &[
        put(m53(4, 1)), put(m53(4, 1)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m71(4, 1)), put(m71(4, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m31(4, 6)), put(m71(4, 6)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 138
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, m53(4, 0), m11(1, 3)), pick(0, m31(4, 0), m11(1, 4)), put(m31(4, 2)), put(m53(4, 2)),
        pick(0, m31(4, 0), m11(3, 4)), pick(0, m71(4, 0), X), put(m71(4, 2)), put(m521(4, 5, 2)),
        put(m31(4, 6)), put(m71(4, 6)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 139
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m11(1, 3)), pick(0, X, m11(1, 4)), put(m31(4, 2)), put(m53(4, 2)),
        pick(0, X, m11(3, 4)), put(X), put(m71(4, 2)), put(m521(4, 5, 2)),
        put(m31(4, 6)), put(m71(4, 6)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 140
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m31(4, 0)), put(m71(4, 0)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m31(4, 6)), put(m71(4, 6)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 141
    Entry { tests: &[], cells: &[
        put(m53(4, 1)), put(m53(4, 1)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m71(4, 1)), put(m71(4, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m31(4, 6)), put(m71(4, 6)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 142
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, m53(4, 0), m11(1, 3)), pick(0, m31(4, 0), m53(1, 3)), pick(0, m71(4, 5), m31(1, 4)), pick(0, m53(4, 5), m31(4, 1)),
        pick(0, m31(4, 0), m211(3, 4, 1)), pick(0, m71(4, 0), m611(4, 3, 1)), put(m71(4, 5)), put(m53(4, 5)),
        put(m31(4, 6)), put(m71(4, 6)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 143
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m11(1, 3)), pick(0, X, m53(1, 3)), pick(0, m71(4, 5), m31(1, 4)), pick(0, m53(4, 5), m31(4, 1)),
        pick(0, X, m211(3, 4, 1)), pick(0, X, m611(4, 3, 1)), put(m71(4, 5)), put(m53(4, 5)),
        put(m31(4, 6)), put(m71(4, 6)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 144
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 2)), put(m31(4, 2)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 7)), put(m71(4, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m53(4, 7)), put(m53(4, 7)),
    ] },
    // 145
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 2)), put(m31(4, 2)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 7)), put(m71(4, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m53(4, 7)), put(m53(4, 7)),
    ] },
    // 146
    Entry { tests: &[(1, 5)], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), pick(0, m31(4, 2), m211(1, 4, 5)), pick(0, m53(4, 2), m11(1, 5)),
        put(m521(4, 3, 0)), put(m71(4, 0)), pick(0, m71(4, 2), m611(4, 5, 1)), pick(0, m31(4, 2), m53(5, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 7)), pick(0, m71(4, 7), m31(5, 4)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m53(4, 7)), pick(0, m53(4, 7), m31(4, 5)),
    ] },
    // 147
    Entry { tests: &[(1, 5)], cells: &[
        put(m53(4, 3)), put(m71(4, 3)), pick(0, m31(4, 2), m31(4, 1)), pick(0, m53(4, 2), m211(4, 1, 5)),
        put(m53(4, 3)), put(m71(4, 3)), pick(0, m71(4, 2), X), pick(0, m31(4, 2), m31(4, 5)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 7)), put(m71(4, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m53(4, 7)), put(m53(4, 7)),
    ] },
    // 148
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m53(4, 1)), put(m53(4, 1)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 1)), put(m71(4, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 7)), put(m71(4, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m53(4, 7)), put(m53(4, 7)),
    ] },
    // 149
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m53(4, 1)), put(m53(4, 1)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 1)), put(m71(4, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 7)), put(m71(4, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m53(4, 7)), put(m53(4, 7)),
    ] },
    // 150
    Entry { tests: &[(1, 5)], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), pick(0, X, m211(1, 4, 5)), pick(0, X, m11(1, 5)),
        put(m521(4, 3, 0)), put(m71(4, 0)), pick(0, X, m611(4, 5, 1)), pick(0, X, m53(5, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 7)), pick(0, m71(4, 7), m31(5, 4)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m53(4, 7)), pick(0, m53(4, 7), m31(4, 5)),
    ] },
    // 151
    Entry { tests: &[(1, 5)], cells: &[
        put(m53(4, 3)), put(m71(4, 3)), put(X), pick(0, X, m211(4, 1, 5)),
        put(m53(4, 3)), put(m71(4, 3)), put(X), put(X),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 7)), put(m71(4, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m53(4, 7)), put(m53(4, 7)),
    ] },
    // 152
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m31(4, 0)), put(m71(4, 0)), put(m71(4, 2)), put(m31(4, 2)),
        put(m31(4, 6)), put(m71(4, 6)), put(m71(4, 7)), put(m71(4, 7)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m53(4, 7)), put(m53(4, 7)),
    ] },
    // 153
    Entry { tests: &[], cells: &[
        put(m53(4, 1)), put(m53(4, 1)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m71(4, 1)), put(m71(4, 1)), put(m71(4, 2)), put(m31(4, 2)),
        put(m31(4, 6)), put(m71(4, 6)), put(m71(4, 7)), put(m71(4, 7)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m53(4, 7)), put(m53(4, 7)),
    ] },
    // 154
    Entry { tests: &[(3, 1), (1, 5)], cells: &[
        pick(0, m53(4, 0), m211(4, 1, 3)), pick(0, m31(4, 0), m31(4, 1)), pick(1, m31(4, 2), m31(4, 1)), pick(1, m53(4, 2), m211(4, 1, 5)),
        pick(0, m31(4, 0), m31(4, 3)), pick(0, m71(4, 0), X), pick(1, m71(4, 2), X), pick(1, m31(4, 2), m31(4, 5)),
        put(m31(4, 6)), put(m71(4, 6)), put(m71(4, 7)), put(m71(4, 7)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m53(4, 7)), put(m53(4, 7)),
    ] },
    // 155
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m11(1, 3)), pick(0, X, m11(1, 4)), put(m31(4, 2)), put(m53(4, 2)),
        pick(0, X, m11(3, 4)), put(X), put(m71(4, 2)), put(m31(4, 2)),
        put(m31(4, 6)), put(m71(4, 6)), put(m71(4, 7)), put(m71(4, 7)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m53(4, 7)), put(m53(4, 7)),
    ] },
    // 156
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m53(4, 1)), put(m53(4, 1)),
        put(m31(4, 0)), put(m71(4, 0)), put(m71(4, 1)), put(m71(4, 1)),
        put(m31(4, 6)), put(m71(4, 6)), put(m71(4, 7)), put(m71(4, 7)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m53(4, 7)), put(m53(4, 7)),
    ] },
    // 157
    Entry { tests: &[], cells: &[
        put(m53(4, 1)), put(m53(4, 1)), put(m53(4, 1)), put(m53(4, 1)),
        put(m71(4, 1)), put(m71(4, 1)), put(m71(4, 1)), put(m71(4, 1)),
        put(m31(4, 6)), put(m71(4, 6)), put(m71(4, 7)), put(m71(4, 7)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m53(4, 7)), put(m53(4, 7)),
    ] },
    // 158
    Entry { tests: &[(3, 1), (1, 5)], cells: &[
        pick(0, m53(4, 0), m211(4, 1, 3)), pick(0, m31(4, 0), m31(4, 1)), pick(1, X, m11(1, 4)), pick(1, X, m11(1, 5)),
        pick(0, m31(4, 0), m31(4, 3)), pick(0, m71(4, 0), X), put(X), pick(1, X, m11(5, 4)),
        put(m31(4, 6)), put(m71(4, 6)), put(m71(4, 7)), put(m71(4, 7)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m53(4, 7)), put(m53(4, 7)),
    ] },
    // 159
    Entry { tests: &[(3, 1), (1, 5)], cells: &[
        pick(0, X, m11(1, 3)), pick(0, X, m11(1, 4)), put(X), pick(1, X, m211(4, 1, 5)),
        pick(0, X, m11(3, 4)), put(X), put(X), put(X),
        put(m31(4, 6)), put(m71(4, 6)), put(m71(4, 7)), put(m71(4, 7)),
        put(m53(4, 6)), put(m521(4, 7, 6)), put(m53(4, 7)), put(m53(4, 7)),
    ] },
    // 160
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 161
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 162
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), put(m31(4, 2)), put(m53(4, 2)),
        put(m521(4, 3, 0)), put(m71(4, 0)), put(m71(4, 2)), put(m521(4, 5, 2)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 163
    Entry { tests: &[], cells: &[
        put(m53(4, 3)), put(m71(4, 3)), put(m31(4, 2)), put(m53(4, 2)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 2)), put(m521(4, 5, 2)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 164
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 165
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 166
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), put(m71(4, 5)), put(m53(4, 5)),
        put(m521(4, 3, 0)), put(m71(4, 0)), put(m71(4, 5)), put(m53(4, 5)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 167
    Entry { tests: &[], cells: &[
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 168
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m31(4, 0)), put(m71(4, 0)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m71(4, 7)), put(m71(4, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 7)), put(m53(4, 7)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 169
    Entry { tests: &[], cells: &[
        put(m53(4, 1)), put(m53(4, 1)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m71(4, 1)), put(m71(4, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m71(4, 7)), put(m71(4, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 7)), put(m53(4, 7)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 170
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, m53(4, 0), m11(1, 3)), pick(0, m31(4, 0), m211(1, 4, 3)), put(m31(4, 2)), put(m53(4, 2)),
        pick(0, m31(4, 0), m53(3, 1)), pick(0, m71(4, 0), m611(4, 3, 1)), put(m71(4, 2)), put(m521(4, 5, 2)),
        pick(0, m71(4, 7), m31(3, 4)), put(m71(4, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        pick(0, m53(4, 7), m31(4, 3)), put(m53(4, 7)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 171
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m11(1, 3)), pick(0, X, m211(1, 4, 3)), put(m31(4, 2)), put(m53(4, 2)),
        pick(0, X, m53(3, 1)), pick(0, X, m611(4, 3, 1)), put(m71(4, 2)), put(m521(4, 5, 2)),
        pick(0, m71(4, 7), m31(3, 4)), put(m71(4, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        pick(0, m53(4, 7), m31(4, 3)), put(m53(4, 7)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 172
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m31(4, 0)), put(m71(4, 0)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m71(4, 7)), put(m71(4, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 7)), put(m53(4, 7)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 173
    Entry { tests: &[], cells: &[
        put(m53(4, 1)), put(m53(4, 1)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m71(4, 1)), put(m71(4, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m71(4, 7)), put(m71(4, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 7)), put(m53(4, 7)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 174
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, m53(4, 0), m211(4, 1, 3)), pick(0, m31(4, 0), m31(4, 1)), put(m71(4, 5)), put(m53(4, 5)),
        pick(0, m31(4, 0), m31(4, 3)), pick(0, m71(4, 0), X), put(m71(4, 5)), put(m53(4, 5)),
        put(m71(4, 7)), put(m71(4, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 7)), put(m53(4, 7)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 175
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m211(4, 1, 3)), put(X), put(m71(4, 5)), put(m53(4, 5)),
        put(X), put(X), put(m71(4, 5)), put(m53(4, 5)),
        put(m71(4, 7)), put(m71(4, 7)), put(m611(4, 5, 7)), put(m521(4, 5, 7)),
        put(m53(4, 7)), put(m53(4, 7)), put(m521(4, 7, 5)), put(m211(4, 7, 5)),
    ] },
    // 176
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 2)), put(m31(4, 2)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 7)), put(m71(4, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m53(4, 7)), put(m53(4, 7)),
    ] },
    // 177
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 2)), put(m31(4, 2)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 7)), put(m71(4, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m53(4, 7)), put(m53(4, 7)),
    ] },
    // 178
    Entry { tests: &[(1, 5)], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), pick(0, m31(4, 2), m211(1, 4, 5)), pick(0, m53(4, 2), m11(1, 5)),
        put(m521(4, 3, 0)), put(m71(4, 0)), pick(0, m71(4, 2), m611(4, 5, 1)), pick(0, m31(4, 2), m53(5, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 7)), pick(0, m71(4, 7), m31(5, 4)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m53(4, 7)), pick(0, m53(4, 7), m31(4, 5)),
    ] },
    // 179
    Entry { tests: &[(1, 5)], cells: &[
        put(m53(4, 3)), put(m71(4, 3)), pick(0, m31(4, 2), m31(4, 1)), pick(0, m53(4, 2), m211(4, 1, 5)),
        put(m53(4, 3)), put(m71(4, 3)), pick(0, m71(4, 2), X), pick(0, m31(4, 2), m31(4, 5)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 7)), put(m71(4, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m53(4, 7)), put(m53(4, 7)),
    ] },
    // 180
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m53(4, 1)), put(m53(4, 1)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 1)), put(m71(4, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 7)), put(m71(4, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m53(4, 7)), put(m53(4, 7)),
    ] },
    // 181
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m53(4, 1)), put(m53(4, 1)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 1)), put(m71(4, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 7)), put(m71(4, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m53(4, 7)), put(m53(4, 7)),
    ] },
    // 182
    Entry { tests: &[(1, 5)], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), pick(0, X, m211(1, 4, 5)), pick(0, X, m11(1, 5)),
        put(m521(4, 3, 0)), put(m71(4, 0)), pick(0, X, m611(4, 5, 1)), pick(0, X, m53(5, 1)),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 7)), pick(0, m71(4, 7), m31(5, 4)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m53(4, 7)), pick(0, m53(4, 7), m31(4, 5)),
    ] },
    // 183
    Entry { tests: &[(1, 5)], cells: &[
        put(m53(4, 3)), put(m71(4, 3)), put(X), pick(0, X, m211(4, 1, 5)),
        put(m53(4, 3)), put(m71(4, 3)), put(X), put(X),
        put(m521(4, 3, 7)), put(m611(4, 3, 7)), put(m71(4, 7)), put(m71(4, 7)),
        put(m211(4, 7, 3)), put(m521(4, 7, 3)), put(m53(4, 7)), put(m53(4, 7)),
    ] },
    // 184
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m31(4, 0)), put(m71(4, 0)), put(m71(4, 2)), put(m31(4, 2)),
        put(m71(4, 7)), put(m71(4, 7)), put(m71(4, 7)), put(m71(4, 7)),
        put(m53(4, 7)), put(m53(4, 7)), put(m53(4, 7)), put(m53(4, 7)),
    ] },
    // 185
    Entry { tests: &[], cells: &[
        put(m53(4, 1)), put(m53(4, 1)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m71(4, 1)), put(m71(4, 1)), put(m71(4, 2)), put(m31(4, 2)),
        put(m71(4, 7)), put(m71(4, 7)), put(m71(4, 7)), put(m71(4, 7)),
        put(m53(4, 7)), put(m53(4, 7)), put(m53(4, 7)), put(m53(4, 7)),
    ] },
    // 186
    Entry { tests: &[(3, 1), (1, 5)], cells: &[
        pick(0, m53(4, 0), m211(4, 1, 3)), pick(0, m31(4, 0), m31(4, 1)), pick(1, m31(4, 2), m31(4, 1)), pick(1, m53(4, 2), m211(4, 1, 5)),
        pick(0, m31(4, 0), m31(4, 3)), pick(0, m71(4, 0), X), pick(1, m71(4, 2), X), pick(1, m31(4, 2), m31(4, 5)),
        put(m71(4, 7)), put(m71(4, 7)), put(m71(4, 7)), put(m71(4, 7)),
        put(m53(4, 7)), put(m53(4, 7)), put(m53(4, 7)), put(m53(4, 7)),
    ] },
    // 187
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m11(1, 3)), pick(0, X, m211(1, 4, 3)), put(m31(4, 2)), put(m53(4, 2)),
        pick(0, X, m53(3, 1)), pick(0, X, m611(4, 3, 1)), put(m71(4, 2)), put(m31(4, 2)),
        pick(0, m71(4, 7), m31(3, 4)), put(m71(4, 7)), put(m71(4, 7)), put(m71(4, 7)),
        pick(0, m53(4, 7), m31(4, 3)), put(m53(4, 7)), put(m53(4, 7)), put(m53(4, 7)),
    ] },
    // 188
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m53(4, 1)), put(m53(4, 1)),
        put(m31(4, 0)), put(m71(4, 0)), put(m71(4, 1)), put(m71(4, 1)),
        put(m71(4, 7)), put(m71(4, 7)), put(m71(4, 7)), put(m71(4, 7)),
        put(m53(4, 7)), put(m53(4, 7)), put(m53(4, 7)), put(m53(4, 7)),
    ] },
    // 189
    Entry { tests: &[], cells: &[
        put(m53(4, 1)), put(m53(4, 1)), put(m53(4, 1)), put(m53(4, 1)),
        put(m71(4, 1)), put(m71(4, 1)), put(m71(4, 1)), put(m71(4, 1)),
        put(m71(4, 7)), put(m71(4, 7)), put(m71(4, 7)), put(m71(4, 7)),
        put(m53(4, 7)), put(m53(4, 7)), put(m53(4, 7)), put(m53(4, 7)),
    ] },
    // 190
    Entry { tests: &[(1, 5)], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), pick(0, X, m211(1, 4, 5)), pick(0, X, m11(1, 5)),
        put(m31(4, 0)), put(m71(4, 0)), pick(0, X, m611(4, 5, 1)), pick(0, X, m53(5, 1)),
        put(m71(4, 7)), put(m71(4, 7)), put(m71(4, 7)), pick(0, m71(4, 7), m31(5, 4)),
        put(m53(4, 7)), put(m53(4, 7)), put(m53(4, 7)), pick(0, m53(4, 7), m31(4, 5)),
    ] },
    // 191
    Entry { tests: &[(3, 1), (1, 5)], cells: &[
        pick(0, X, m211(4, 1, 3)), put(X), put(X), pick(1, X, m211(4, 1, 5)),
        put(X), put(X), put(X), put(X),
        put(m71(4, 7)), put(m71(4, 7)), put(m71(4, 7)), put(m71(4, 7)),
        put(m53(4, 7)), put(m53(4, 7)), put(m53(4, 7)), put(m53(4, 7)),
    ] },
    // 192
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m521(4, 3, 6)), put(m71(4, 6)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 6)), put(m31(4, 6)), put(m71(4, 5)), put(m53(4, 5)),
    ] },
    // 193
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m521(4, 3, 6)), put(m71(4, 6)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 6)), put(m31(4, 6)), put(m71(4, 5)), put(m53(4, 5)),
    ] },
    // 194
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), put(m31(4, 2)), put(m53(4, 2)),
        put(m521(4, 3, 0)), put(m71(4, 0)), put(m71(4, 2)), put(m521(4, 5, 2)),
        put(m521(4, 3, 6)), put(m71(4, 6)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 6)), put(m31(4, 6)), put(m71(4, 5)), put(m53(4, 5)),
    ] },
    // 195
    Entry { tests: &[], cells: &[
        put(m53(4, 3)), put(m71(4, 3)), put(m31(4, 2)), put(m53(4, 2)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 2)), put(m521(4, 5, 2)),
        put(m521(4, 3, 6)), put(m71(4, 6)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 6)), put(m31(4, 6)), put(m71(4, 5)), put(m53(4, 5)),
    ] },
    // 196
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m521(4, 3, 6)), put(m71(4, 6)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 6)), put(m31(4, 6)), put(m71(4, 5)), put(m53(4, 5)),
    ] },
    // 197
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m521(4, 3, 6)), put(m71(4, 6)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 6)), put(m31(4, 6)), put(m71(4, 5)), put(m53(4, 5)),
    ] },
    // 198
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), put(m71(4, 5)), put(m53(4, 5)),
        put(m521(4, 3, 0)), put(m71(4, 0)), put(m71(4, 5)), put(m53(4, 5)),
        put(m521(4, 3, 6)), put(m71(4, 6)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 6)), put(m31(4, 6)), put(m71(4, 5)), put(m53(4, 5)),
    ] },
    // 199
    Entry { tests: &[], cells: &[
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
        put(m521(4, 3, 6)), put(m71(4, 6)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 6)), put(m31(4, 6)), put(m71(4, 5)), put(m53(4, 5)),
    ] },
    // 200
    Entry { tests: &[(7, 3)], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m31(4, 0)), put(m71(4, 0)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        pick(0, m31(4, 6), m211(3, 4, 7)), pick(0, m71(4, 6), m611(4, 3, 7)), put(m71(4, 5)), put(m53(4, 5)),
        pick(0, m53(4, 6), m11(7, 3)), pick(0, m31(4, 6), m53(7, 3)), pick(0, m71(4, 5), m31(7, 4)), pick(0, m53(4, 5), m31(4, 7)),
    ] },
    // 201
    Entry { tests: &[(7, 3)], cells: &[
        put(m53(4, 1)), put(m53(4, 1)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m71(4, 1)), put(m71(4, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        pick(0, m31(4, 6), m31(4, 3)), pick(0, m71(4, 6), X), put(m71(4, 5)), put(m53(4, 5)),
        pick(0, m53(4, 6), m211(4, 7, 3)), pick(0, m31(4, 6), m31(4, 7)), put(m71(4, 5)), put(m53(4, 5)),
    ] },
    // 202
    Entry { tests: &[(3, 1), (7, 3)], cells: &[
        pick(0, m53(4, 0), m211(4, 1, 3)), pick(0, m31(4, 0), m31(4, 1)), put(m31(4, 2)), put(m53(4, 2)),
        pick(0, m31(4, 0), m31(4, 3)), pick(0, m71(4, 0), X), put(m71(4, 2)), put(m521(4, 5, 2)),
        pick(1, m31(4, 6), m31(4, 3)), pick(1, m71(4, 6), X), put(m71(4, 5)), put(m53(4, 5)),
        pick(1, m53(4, 6), m211(4, 7, 3)), pick(1, m31(4, 6), m31(4, 7)), put(m71(4, 5)), put(m53(4, 5)),
    ] },
    // 203
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m11(1, 3)), pick(0, X, m11(1, 4)), put(m31(4, 2)), put(m53(4, 2)),
        pick(0, X, m11(3, 4)), put(X), put(m71(4, 2)), put(m521(4, 5, 2)),
        put(m31(4, 6)), put(m71(4, 6)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 6)), put(m31(4, 6)), put(m71(4, 5)), put(m53(4, 5)),
    ] },
    // 204
    Entry { tests: &[(7, 3)], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m31(4, 0)), put(m71(4, 0)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        pick(0, m31(4, 6), m211(3, 4, 7)), pick(0, m71(4, 6), m611(4, 3, 7)), put(m71(4, 5)), put(m53(4, 5)),
        pick(0, m53(4, 6), m11(7, 3)), pick(0, m31(4, 6), m53(7, 3)), pick(0, m71(4, 5), m31(7, 4)), pick(0, m53(4, 5), m31(4, 7)),
    ] },
    // 205
    Entry { tests: &[(7, 3)], cells: &[
        put(m53(4, 1)), put(m53(4, 1)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m71(4, 1)), put(m71(4, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        pick(0, m31(4, 6), m31(4, 3)), pick(0, m71(4, 6), X), put(m71(4, 5)), put(m53(4, 5)),
        pick(0, m53(4, 6), m211(4, 7, 3)), pick(0, m31(4, 6), m31(4, 7)), put(m71(4, 5)), put(m53(4, 5)),
    ] },
    // 206
    Entry { tests: &[(3, 1), (7, 3)], cells: &[
        pick(0, m53(4, 0), m211(4, 1, 3)), pick(0, m31(4, 0), m31(4, 1)), put(m71(4, 5)), put(m53(4, 5)),
        pick(0, m31(4, 0), m31(4, 3)), pick(0, m71(4, 0), X), put(m71(4, 5)), put(m53(4, 5)),
        pick(1, m31(4, 6), m31(4, 3)), pick(1, m71(4, 6), X), put(m71(4, 5)), put(m53(4, 5)),
        pick(1, m53(4, 6), m211(4, 7, 3)), pick(1, m31(4, 6), m31(4, 7)), put(m71(4, 5)), put(m53(4, 5)),
    ] },
    // 207
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m11(1, 3)), pick(0, X, m53(1, 3)), pick(0, m71(4, 5), m31(1, 4)), pick(0, m53(4, 5), m31(4, 1)),
        pick(0, X, m211(3, 4, 1)), pick(0, X, m611(4, 3, 1)), put(m71(4, 5)), put(m53(4, 5)),
        put(m31(4, 6)), put(m71(4, 6)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 6)), put(m31(4, 6)), put(m71(4, 5)), put(m53(4, 5)),
    ] },
    // 208
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 2)), put(m31(4, 2)),
        put(m521(4, 3, 6)), put(m71(4, 6)), put(X), pick(0, X, m11(5, 4)),
        put(m53(4, 6)), put(m31(4, 6)), pick(0, X, m11(7, 4)), pick(0, X, m11(7, 5)),
    ] },
    // 209
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 2)), put(m31(4, 2)),
        put(m521(4, 3, 6)), put(m71(4, 6)), put(X), pick(0, X, m11(5, 4)),
        put(m53(4, 6)), put(m31(4, 6)), pick(0, X, m11(7, 4)), pick(0, X, m11(7, 5)),
    ] },
    // 210
    Entry { tests: &[(5, 7)], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), put(m31(4, 2)), put(m53(4, 2)),
        put(m521(4, 3, 0)), put(m71(4, 0)), put(m71(4, 2)), put(m31(4, 2)),
        put(m521(4, 3, 6)), put(m71(4, 6)), put(X), pick(0, X, m11(5, 4)),
        put(m53(4, 6)), put(m31(4, 6)), pick(0, X, m11(7, 4)), pick(0, X, m11(7, 5)),
    ] },
    // 211
    Entry { tests: &[(5, 7)], cells: &[
        put(m53(4, 3)), put(m71(4, 3)), put(m31(4, 2)), put(m53(4, 2)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 2)), put(m31(4, 2)),
        put(m521(4, 3, 6)), put(m71(4, 6)), put(X), pick(0, X, m11(5, 4)),
        put(m53(4, 6)), put(m31(4, 6)), pick(0, X, m11(7, 4)), pick(0, X, m11(7, 5)),
    ] },
    // 212
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m53(4, 1)), pick(0, m53(4, 1), m31(4, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 1)), pick(0, m71(4, 1), m31(5, 4)),
        put(m521(4, 3, 6)), put(m71(4, 6)), pick(0, X, m611(4, 5, 7)), pick(0, X, m53(5, 7)),
        put(m53(4, 6)), put(m31(4, 6)), pick(0, X, m211(7, 4, 5)), pick(0, X, m11(7, 5)),
    ] },
    // 213
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m53(4, 1)), pick(0, m53(4, 1), m31(4, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 1)), pick(0, m71(4, 1), m31(5, 4)),
        put(m521(4, 3, 6)), put(m71(4, 6)), pick(0, X, m611(4, 5, 7)), pick(0, X, m53(5, 7)),
        put(m53(4, 6)), put(m31(4, 6)), pick(0, X, m211(7, 4, 5)), pick(0, X, m11(7, 5)),
    ] },
    // 214
    Entry { tests: &[(1, 5), (5, 7)], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), pick(0, X, m11(1, 4)), pick(0, X, m11(1, 5)),
        put(m521(4, 3, 0)), put(m71(4, 0)), put(X), pick(0, X, m11(5, 4)),
        put(m521(4, 3, 6)), put(m71(4, 6)), put(X), pick(1, X, m11(5, 4)),
        put(m53(4, 6)), put(m31(4, 6)), pick(1, X, m11(7, 4)), pick(1, X, m11(7, 5)),
    ] },
    // 215
    Entry { tests: &[(1, 5), (5, 7)], cells: &[
        put(m53(4, 3)), put(m71(4, 3)), put(X), pick(0, X, m211(4, 1, 5)),
        put(m53(4, 3)), put(m71(4, 3)), put(X), put(X),
        put(m521(4, 3, 6)), put(m71(4, 6)), put(X), pick(1, X, m11(5, 4)),
        put(m53(4, 6)), put(m31(4, 6)), pick(1, X, m11(7, 4)), pick(1, X, m11(7, 5)),
    ] },
    // 216
    Entry { tests: &[(5, 7)], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m31(4, 0)), put(m71(4, 0)), put(m71(4, 2)), put(m31(4, 2)),
        put(m31(4, 6)), put(m71(4, 6)), put(X), pick(0, X, m11(5, 4)),
        put(m53(4, 6)), put(m31(4, 6)), pick(0, X, m11(7, 4)), pick(0, X, m11(7, 5)),
    ] },
    // 217
    Entry { tests: &[(5, 7)], cells: &[
        put(m53(4, 1)), put(m53(4, 1)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m71(4, 1)), put(m71(4, 1)), put(m71(4, 2)), put(m31(4, 2)),
        put(m31(4, 6)), put(m71(4, 6)), put(X), pick(0, X, m11(5, 4)),
        put(m53(4, 6)), put(m31(4, 6)), pick(0, X, m11(7, 4)), pick(0, X, m11(7, 5)),
    ] },
    // 218
    Entry { tests: &[(3, 1), (1, 5), (7, 3), (5, 7)], cells: &[
        pick(0, m53(4, 0), m211(4, 1, 3)), pick(0, m31(4, 0), m31(4, 1)), pick(1, m31(4, 2), m31(4, 1)), pick(1, m53(4, 2), m211(4, 1, 5)),
        pick(0, m31(4, 0), m31(4, 3)), pick(0, m71(4, 0), X), pick(1, m71(4, 2), X), pick(1, m31(4, 2), m31(4, 5)),
        pick(2, m31(4, 6), m31(4, 3)), pick(2, m71(4, 6), X), put(X), pick(3, X, m11(5, 4)),
        pick(2, m53(4, 6), m211(4, 7, 3)), pick(2, m31(4, 6), m31(4, 7)), pick(3, X, m11(7, 4)), pick(3, X, m11(7, 5)),
    ] },
    // 219
    Entry { tests: &[(3, 1), (5, 7)], cells: &[
        pick(0, X, m11(1, 3)), pick(0, X, m11(1, 4)), put(m31(4, 2)), put(m53(4, 2)),
        pick(0, X, m11(3, 4)), put(X), put(m71(4, 2)), put(m31(4, 2)),
        put(m31(4, 6)), put(m71(4, 6)), put(X), pick(1, X, m11(5, 4)),
        put(m53(4, 6)), put(m31(4, 6)), pick(1, X, m11(7, 4)), pick(1, X, m11(7, 5)),
    ] },
    // 220
    Entry { tests: &[(7, 3), (5, 7)], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m53(4, 1)), put(m53(4, 1)),
        put(m31(4, 0)), put(m71(4, 0)), put(m71(4, 1)), put(m71(4, 1)),
        pick(0, m31(4, 6), m31(4, 3)), pick(0, m71(4, 6), X), put(X), pick(1, X, m11(5, 4)),
        pick(0, m53(4, 6), m211(4, 7, 3)), pick(0, m31(4, 6), m31(4, 7)), pick(1, X, m11(7, 4)), pick(1, X, m11(7, 5)),
    ] },
    // 221
    Entry { tests: &[(5, 7)], cells: &[
        put(m53(4, 1)), put(m53(4, 1)), put(m53(4, 1)), pick(0, m53(4, 1), m31(4, 5)),
        put(m71(4, 1)), put(m71(4, 1)), put(m71(4, 1)), pick(0, m71(4, 1), m31(5, 4)),
        put(m31(4, 6)), put(m71(4, 6)), pick(0, X, m611(4, 5, 7)), pick(0, X, m53(5, 7)),
        put(m53(4, 6)), put(m31(4, 6)), pick(0, X, m211(7, 4, 5)), pick(0, X, m11(7, 5)),
    ] },
    // 222
    Entry { tests: &[(1, 5), (5, 7)], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), pick(0, X, m11(1, 4)), pick(0, X, m11(1, 5)),
        put(m31(4, 0)), put(m71(4, 0)), put(X), pick(0, X, m11(5, 4)),
        put(m31(4, 6)), put(m71(4, 6)), put(X), pick(1, X, m11(5, 4)),
        put(m53(4, 6)), put(m31(4, 6)), pick(1, X, m11(7, 4)), pick(1, X, m11(7, 5)),
    ] },
    // 223
    Entry { tests: &[(3, 1), (1, 5), (5, 7)], cells: &[
        pick(0, X, m11(1, 3)), pick(0, X, m11(1, 4)), put(X), pick(1, X, m211(4, 1, 5)),
        pick(0, X, m11(3, 4)), put(X), put(X), put(X),
        put(m31(4, 6)), put(m71(4, 6)), put(X), pick(2, X, m11(5, 4)),
        put(m53(4, 6)), put(m31(4, 6)), pick(2, X, m11(7, 4)), pick(2, X, m11(7, 5)),
    ] },
    // 224
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
    ] },
    // 225
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
    ] },
    // 226
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), put(m31(4, 2)), put(m53(4, 2)),
        put(m521(4, 3, 0)), put(m71(4, 0)), put(m71(4, 2)), put(m521(4, 5, 2)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
    ] },
    // 227
    Entry { tests: &[], cells: &[
        put(m53(4, 3)), put(m71(4, 3)), put(m31(4, 2)), put(m53(4, 2)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 2)), put(m521(4, 5, 2)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
    ] },
    // 228
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
    ] },
    // 229
    Entry { tests: &[], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
    ] },
    // 230
    Entry { tests: &[], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), put(m71(4, 5)), put(m53(4, 5)),
        put(m521(4, 3, 0)), put(m71(4, 0)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
    ] },
    // 231
    Entry { tests: &[], cells: &[
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 5)), put(m53(4, 5)),
    ] },
    // 232
    Entry { tests: &[(7, 3)], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m31(4, 0)), put(m71(4, 0)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        pick(0, X, m211(3, 4, 7)), pick(0, X, m611(4, 3, 7)), put(m71(4, 5)), put(m53(4, 5)),
        pick(0, X, m11(7, 3)), pick(0, X, m53(7, 3)), pick(0, m71(4, 5), m31(7, 4)), pick(0, m53(4, 5), m31(4, 7)),
    ] },
    // 233
    Entry { tests: &[(7, 3)], cells: &[
        put(m53(4, 1)), put(m53(4, 1)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m71(4, 1)), put(m71(4, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(X), put(X), put(m71(4, 5)), put(m53(4, 5)),
        pick(0, X, m211(4, 7, 3)), put(X), put(m71(4, 5)), put(m53(4, 5)),
    ] },
    // 234
    Entry { tests: &[(3, 1), (7, 3)], cells: &[
        pick(0, m53(4, 0), m211(4, 1, 3)), pick(0, m31(4, 0), m31(4, 1)), put(m31(4, 2)), put(m53(4, 2)),
        pick(0, m31(4, 0), m31(4, 3)), pick(0, m71(4, 0), X), put(m71(4, 2)), put(m521(4, 5, 2)),
        pick(1, X, m11(3, 4)), put(X), put(m71(4, 5)), put(m53(4, 5)),
        pick(1, X, m11(7, 3)), pick(1, X, m11(7, 4)), put(m71(4, 5)), put(m53(4, 5)),
    ] },
    // 235
    Entry { tests: &[(3, 1), (7, 3)], cells: &[
        pick(0, X, m11(1, 3)), pick(0, X, m11(1, 4)), put(m31(4, 2)), put(m53(4, 2)),
        pick(0, X, m11(3, 4)), put(X), put(m71(4, 2)), put(m521(4, 5, 2)),
        put(X), put(X), put(m71(4, 5)), put(m53(4, 5)),
        pick(1, X, m211(4, 7, 3)), put(X), put(m71(4, 5)), put(m53(4, 5)),
    ] },
    // 236
    Entry { tests: &[(7, 3)], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m31(4, 0)), put(m71(4, 0)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        pick(0, X, m211(3, 4, 7)), pick(0, X, m611(4, 3, 7)), put(m71(4, 5)), put(m53(4, 5)),
        pick(0, X, m11(7, 3)), pick(0, X, m53(7, 3)), pick(0, m71(4, 5), m31(7, 4)), pick(0, m53(4, 5), m31(4, 7)),
    ] },
    // 237
    Entry { tests: &[(7, 3)], cells: &[
        put(m53(4, 1)), put(m53(4, 1)), put(m521(4, 1, 5)), put(m211(4, 1, 5)),
        put(m71(4, 1)), put(m71(4, 1)), put(m611(4, 5, 1)), put(m521(4, 5, 1)),
        put(X), put(X), put(m71(4, 5)), put(m53(4, 5)),
        pick(0, X, m211(4, 7, 3)), put(X), put(m71(4, 5)), put(m53(4, 5)),
    ] },
    // 238
    Entry { tests: &[(7, 3)], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), put(m71(4, 5)), put(m53(4, 5)),
        put(m31(4, 0)), put(m71(4, 0)), put(m71(4, 5)), put(m53(4, 5)),
        pick(0, X, m211(3, 4, 7)), pick(0, X, m611(4, 3, 7)), put(m71(4, 5)), put(m53(4, 5)),
        pick(0, X, m11(7, 3)), pick(0, X, m53(7, 3)), pick(0, m71(4, 5), m31(7, 4)), pick(0, m53(4, 5), m31(4, 7)),
    ] },
    // 239
    Entry { tests: &[(3, 1), (7, 3)], cells: &[
        pick(0, X, m211(4, 1, 3)), put(X), put(m71(4, 5)), put(m53(4, 5)),
        put(X), put(X), put(m71(4, 5)), put(m53(4, 5)),
        put(X), put(X), put(m71(4, 5)), put(m53(4, 5)),
        pick(1, X, m211(4, 7, 3)), put(X), put(m71(4, 5)), put(m53(4, 5)),
    ] },
    // 240
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 2)), put(m31(4, 2)),
        put(m53(4, 3)), put(m71(4, 3)), pick(0, X, m611(4, 5, 7)), pick(0, X, m211(5, 4, 7)),
        pick(0, m53(4, 3), m31(4, 7)), pick(0, m71(4, 3), m31(7, 4)), pick(0, X, m53(7, 5)), pick(0, X, m11(7, 5)),
    ] },
    // 241
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 2)), put(m31(4, 2)),
        put(m53(4, 3)), put(m71(4, 3)), pick(0, X, m611(4, 5, 7)), pick(0, X, m211(5, 4, 7)),
        pick(0, m53(4, 3), m31(4, 7)), pick(0, m71(4, 3), m31(7, 4)), pick(0, X, m53(7, 5)), pick(0, X, m11(7, 5)),
    ] },
    // 242
    Entry { tests: &[(1, 5), (5, 7)], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), pick(0, m31(4, 2), m31(4, 1)), pick(0, m53(4, 2), m211(4, 1, 5)),
        put(m521(4, 3, 0)), put(m71(4, 0)), pick(0, m71(4, 2), X), pick(0, m31(4, 2), m31(4, 5)),
        put(m53(4, 3)), put(m71(4, 3)), put(X), pick(1, X, m11(5, 4)),
        put(m53(4, 3)), put(m71(4, 3)), pick(1, X, m11(7, 4)), pick(1, X, m11(7, 5)),
    ] },
    // 243
    Entry { tests: &[(5, 7)], cells: &[
        put(m53(4, 3)), put(m71(4, 3)), put(m31(4, 2)), put(m53(4, 2)),
        put(m53(4, 3)), put(m71(4, 3)), put(m71(4, 2)), put(m31(4, 2)),
        put(m53(4, 3)), put(m71(4, 3)), pick(0, X, m611(4, 5, 7)), pick(0, X, m211(5, 4, 7)),
        pick(0, m53(4, 3), m31(4, 7)), pick(0, m71(4, 3), m31(7, 4)), pick(0, X, m53(7, 5)), pick(0, X, m11(7, 5)),
    ] },
    // 244
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m53(4, 1)), put(m53(4, 1)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 1)), put(m71(4, 1)),
        put(m53(4, 3)), put(m71(4, 3)), put(X), put(X),
        put(m53(4, 3)), put(m71(4, 3)), put(X), pick(0, X, m211(4, 7, 5)),
    ] },
    // 245
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 1, 3)), put(m521(4, 1, 3)), put(m53(4, 1)), put(m53(4, 1)),
        put(m521(4, 3, 1)), put(m611(4, 3, 1)), put(m71(4, 1)), put(m71(4, 1)),
        put(m53(4, 3)), put(m71(4, 3)), put(X), put(X),
        put(m53(4, 3)), put(m71(4, 3)), put(X), pick(0, X, m211(4, 7, 5)),
    ] },
    // 246
    Entry { tests: &[(1, 5), (5, 7)], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), pick(0, X, m11(1, 4)), pick(0, X, m11(1, 5)),
        put(m521(4, 3, 0)), put(m71(4, 0)), put(X), pick(0, X, m11(5, 4)),
        put(m53(4, 3)), put(m71(4, 3)), put(X), put(X),
        put(m53(4, 3)), put(m71(4, 3)), put(X), pick(1, X, m211(4, 7, 5)),
    ] },
    // 247
    Entry { tests: &[(1, 5), (5, 7)], cells: &[
        put(m53(4, 3)), put(m71(4, 3)), put(X), pick(0, X, m211(4, 1, 5)),
        put(m53(4, 3)), put(m71(4, 3)), put(X), put(X),
        put(m53(4, 3)), put(m71(4, 3)), put(X), put(X),
        put(m53(4, 3)), put(m71(4, 3)), put(X), pick(1, X, m211(4, 7, 5)),
    ] },
    // 248
    Entry { tests: &[(7, 3), (5, 7)], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m31(4, 0)), put(m71(4, 0)), put(m71(4, 2)), put(m31(4, 2)),
        pick(0, X, m11(3, 4)), put(X), put(X), pick(1, X, m11(5, 4)),
        pick(0, X, m11(7, 3)), pick(0, X, m11(7, 4)), pick(1, X, m11(7, 4)), pick(1, X, m11(7, 5)),
    ] },
    // 249
    Entry { tests: &[(5, 7), (7, 3)], cells: &[
        put(m53(4, 1)), put(m53(4, 1)), put(m521(4, 1, 2)), put(m53(4, 2)),
        put(m71(4, 1)), put(m71(4, 1)), put(m71(4, 2)), put(m31(4, 2)),
        put(X), put(X), put(X), pick(0, X, m11(5, 4)),
        pick(1, X, m211(4, 7, 3)), put(X), pick(0, X, m11(7, 4)), pick(0, X, m11(7, 5)),
    ] },
    // 250
    Entry { tests: &[(7, 3), (5, 7)], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), put(m31(4, 2)), put(m53(4, 2)),
        put(m31(4, 0)), put(m71(4, 0)), put(m71(4, 2)), put(m31(4, 2)),
        pick(0, X, m11(3, 4)), put(X), put(X), pick(1, X, m11(5, 4)),
        pick(0, X, m11(7, 3)), pick(0, X, m11(7, 4)), pick(1, X, m11(7, 4)), pick(1, X, m11(7, 5)),
    ] },
    // 251
    Entry { tests: &[(3, 1), (5, 7), (7, 3)], cells: &[
        pick(0, X, m11(1, 3)), pick(0, X, m11(1, 4)), put(m31(4, 2)), put(m53(4, 2)),
        pick(0, X, m11(3, 4)), put(X), put(m71(4, 2)), put(m31(4, 2)),
        put(X), put(X), put(X), pick(1, X, m11(5, 4)),
        pick(2, X, m211(4, 7, 3)), put(X), pick(1, X, m11(7, 4)), pick(1, X, m11(7, 5)),
    ] },
    // 252
    Entry { tests: &[(7, 3), (5, 7)], cells: &[
        put(m53(4, 0)), put(m521(4, 1, 0)), put(m53(4, 1)), put(m53(4, 1)),
        put(m31(4, 0)), put(m71(4, 0)), put(m71(4, 1)), put(m71(4, 1)),
        pick(0, X, m11(3, 4)), put(X), put(X), put(X),
        pick(0, X, m11(7, 3)), pick(0, X, m11(7, 4)), put(X), pick(1, X, m211(4, 7, 5)),
    ] },
    // 253
    Entry { tests: &[(7, 3), (5, 7)], cells: &[
        put(m53(4, 1)), put(m53(4, 1)), put(m53(4, 1)), put(m53(4, 1)),
        put(m71(4, 1)), put(m71(4, 1)), put(m71(4, 1)), put(m71(4, 1)),
        put(X), put(X), put(X), put(X),
        pick(0, X, m211(4, 7, 3)), put(X), put(X), pick(1, X, m211(4, 7, 5)),
    ] },
    // 254
    Entry { tests: &[(1, 5), (7, 3), (5, 7)], cells: &[
        put(m53(4, 0)), put(m31(4, 0)), pick(0, X, m11(1, 4)), pick(0, X, m11(1, 5)),
        put(m31(4, 0)), put(m71(4, 0)), put(X), pick(0, X, m11(5, 4)),
        pick(1, X, m11(3, 4)), put(X), put(X), put(X),
        pick(1, X, m11(7, 3)), pick(1, X, m11(7, 4)), put(X), pick(2, X, m211(4, 7, 5)),
    ] },
    // 255
    Entry { tests: &[(3, 1), (1, 5), (7, 3), (5, 7)], cells: &[
        pick(0, X, m211(4, 1, 3)), put(X), put(X), pick(1, X, m211(4, 1, 5)),
        put(X), put(X), put(X), put(X),
        put(X), put(X), put(X), put(X),
        pick(2, X, m211(4, 7, 3)), put(X), put(X), pick(3, X, m211(4, 7, 5)),
    ] },
];
