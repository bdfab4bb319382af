//! Cell programs for the 3x filter.
//!
//! Each entry lists the secondary neighbor pairs it compares, then nine
//! cells in row-major order covering the 3x3 output block.

use super::{pick, put, Entry, X};
use super::{m11, m211, m277, m31, m71};

#[rustfmt::skip]
pub(super) static ENTRIES: [Entry; 256] = [
    // 0
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 1
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 2
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(X), put(m31(4, 2)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 3
    Entry { tests: &[], cells: &[
        put(m31(4, 3)), put(X), put(m31(4, 2)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 4
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 5
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 6
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 7
    Entry { tests: &[], cells: &[
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 8
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(X), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 9
    Entry { tests: &[], cells: &[
        put(m31(4, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(X), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 10
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, m31(4, 0), m277(4, 3, 1)), pick(0, X, m71(4, 1)), put(m31(4, 2)),
        pick(0, X, m71(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 11
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m277(4, 3, 1)), pick(0, X, m71(4, 1)), put(m31(4, 2)),
        pick(0, X, m71(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 12
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(X), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 13
    Entry { tests: &[], cells: &[
        put(m31(4, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(X), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 14
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, m31(4, 0), m11(3, 1)), pick(0, X, m31(1, 4)), pick(0, m31(4, 5), m211(4, 1, 5)),
        pick(0, X, m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 15
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m11(3, 1)), pick(0, X, m31(1, 4)), pick(0, m31(4, 5), m211(4, 1, 5)),
        pick(0, X, m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 16
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 2)),
        put(m31(4, 3)), put(X), put(X),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 17
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 2)),
        put(m31(4, 3)), put(X), put(X),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 18
    Entry { tests: &[(1, 5)], cells: &[
        put(m31(4, 0)), pick(0, X, m71(4, 1)), pick(0, m31(4, 2), m277(4, 1, 5)),
        put(m31(4, 3)), put(X), pick(0, X, m71(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 19
    Entry { tests: &[(1, 5)], cells: &[
        pick(0, m31(4, 3), m211(4, 3, 1)), pick(0, X, m31(1, 4)), pick(0, m31(4, 2), m11(1, 5)),
        put(m31(4, 3)), put(X), pick(0, X, m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 20
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 1)),
        put(m31(4, 3)), put(X), put(X),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 21
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 1)),
        put(m31(4, 3)), put(X), put(X),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 22
    Entry { tests: &[(1, 5)], cells: &[
        put(m31(4, 0)), pick(0, X, m71(4, 1)), pick(0, X, m277(4, 1, 5)),
        put(m31(4, 3)), put(X), pick(0, X, m71(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 23
    Entry { tests: &[(1, 5)], cells: &[
        pick(0, m31(4, 3), m211(4, 3, 1)), pick(0, X, m31(1, 4)), pick(0, X, m11(1, 5)),
        put(m31(4, 3)), put(X), pick(0, X, m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 24
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m31(4, 2)),
        put(X), put(X), put(X),
        put(m31(4, 6)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 25
    Entry { tests: &[], cells: &[
        put(m31(4, 1)), put(m31(4, 1)), put(m31(4, 2)),
        put(X), put(X), put(X),
        put(m31(4, 6)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 26
    Entry { tests: &[(3, 1), (1, 5)], cells: &[
        pick(0, X, m277(4, 3, 1)), put(X), pick(1, X, m277(4, 1, 5)),
        pick(0, X, m71(4, 3)), put(X), pick(1, X, m71(4, 5)),
        put(m31(4, 6)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 27
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m277(4, 3, 1)), pick(0, X, m71(4, 1)), put(m31(4, 2)),
        pick(0, X, m71(4, 3)), put(X), put(X),
        put(m31(4, 6)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 28
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m31(4, 1)),
        put(X), put(X), put(X),
        put(m31(4, 6)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 29
    Entry { tests: &[], cells: &[
        put(m31(4, 1)), put(m31(4, 1)), put(m31(4, 1)),
        put(X), put(X), put(X),
        put(m31(4, 6)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 30
    Entry { tests: &[(1, 5)], cells: &[
        put(m31(4, 0)), pick(0, X, m71(4, 1)), pick(0, X, m277(4, 1, 5)),
        put(X), put(X), pick(0, X, m71(4, 5)),
        put(m31(4, 6)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 31
    Entry { tests: &[(3, 1), (1, 5)], cells: &[
        pick(0, X, m277(4, 3, 1)), put(X), pick(1, X, m277(4, 1, 5)),
        pick(0, X, m71(4, 3)), put(X), pick(1, X, m71(4, 5)),
        put(m31(4, 6)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 32
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 33
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 34
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(X), put(m31(4, 2)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 35
    Entry { tests: &[], cells: &[
        put(m31(4, 3)), put(X), put(m31(4, 2)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 36
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 37
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 38
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 39
    Entry { tests: &[], cells: &[
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 40
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(X), put(X), put(m31(4, 5)),
        put(m31(4, 7)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 41
    Entry { tests: &[], cells: &[
        put(m31(4, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(X), put(X), put(m31(4, 5)),
        put(m31(4, 7)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 42
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, m31(4, 0), m11(3, 1)), pick(0, X, m31(4, 1)), put(m31(4, 2)),
        pick(0, X, m31(3, 4)), put(X), put(m31(4, 5)),
        pick(0, m31(4, 7), m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 43
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m11(3, 1)), pick(0, X, m31(4, 1)), put(m31(4, 2)),
        pick(0, X, m31(3, 4)), put(X), put(m31(4, 5)),
        pick(0, m31(4, 7), m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 44
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(X), put(X), put(m31(4, 5)),
        put(m31(4, 7)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 45
    Entry { tests: &[], cells: &[
        put(m31(4, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(X), put(X), put(m31(4, 5)),
        put(m31(4, 7)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 46
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, m31(4, 0), m211(4, 3, 1)), put(X), put(m31(4, 5)),
        put(X), put(X), put(m31(4, 5)),
        put(m31(4, 7)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 47
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m211(4, 3, 1)), put(X), put(m31(4, 5)),
        put(X), put(X), put(m31(4, 5)),
        put(m31(4, 7)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 48
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 2)),
        put(m31(4, 3)), put(X), put(X),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 49
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 2)),
        put(m31(4, 3)), put(X), put(X),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 50
    Entry { tests: &[(1, 5)], cells: &[
        put(m31(4, 0)), pick(0, X, m71(4, 1)), pick(0, m31(4, 2), m277(4, 1, 5)),
        put(m31(4, 3)), put(X), pick(0, X, m71(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 51
    Entry { tests: &[(1, 5)], cells: &[
        pick(0, m31(4, 3), m211(4, 3, 1)), pick(0, X, m31(1, 4)), pick(0, m31(4, 2), m11(1, 5)),
        put(m31(4, 3)), put(X), pick(0, X, m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 52
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 1)),
        put(m31(4, 3)), put(X), put(X),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 53
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 1)),
        put(m31(4, 3)), put(X), put(X),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 54
    Entry { tests: &[(1, 5)], cells: &[
        put(m31(4, 0)), pick(0, X, m71(4, 1)), pick(0, X, m277(4, 1, 5)),
        put(m31(4, 3)), put(X), pick(0, X, m71(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 55
    Entry { tests: &[(1, 5)], cells: &[
        pick(0, m31(4, 3), m211(4, 3, 1)), pick(0, X, m31(1, 4)), pick(0, X, m11(1, 5)),
        put(m31(4, 3)), put(X), pick(0, X, m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 56
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m31(4, 2)),
        put(X), put(X), put(X),
        put(m31(4, 7)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 57
    Entry { tests: &[], cells: &[
        put(m31(4, 1)), put(m31(4, 1)), put(m31(4, 2)),
        put(X), put(X), put(X),
        put(m31(4, 7)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 58
    Entry { tests: &[(3, 1), (1, 5)], cells: &[
        pick(0, m31(4, 0), m211(4, 3, 1)), put(X), pick(1, m31(4, 2), m211(4, 1, 5)),
        put(X), put(X), put(X),
        put(m31(4, 7)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 59
    Entry { tests: &[(3, 1), (1, 5)], cells: &[
        pick(0, X, m277(4, 3, 1)), pick(0, X, m71(4, 1)), pick(1, m31(4, 2), m211(4, 1, 5)),
        pick(0, X, m71(4, 3)), put(X), put(X),
        put(m31(4, 7)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 60
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m31(4, 1)),
        put(X), put(X), put(X),
        put(m31(4, 7)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 61
    Entry { tests: &[], cells: &[
        put(m31(4, 1)), put(m31(4, 1)), put(m31(4, 1)),
        put(X), put(X), put(X),
        put(m31(4, 7)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 62
    Entry { tests: &[(1, 5)], cells: &[
        put(m31(4, 0)), pick(0, X, m71(4, 1)), pick(0, X, m277(4, 1, 5)),
        put(X), put(X), pick(0, X, m71(4, 5)),
        put(m31(4, 7)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 63
    Entry { tests: &[(3, 1), (1, 5)], cells: &[
        pick(0, X, m211(4, 3, 1)), put(X), pick(1, X, m277(4, 1, 5)),
        put(X), put(X), pick(1, X, m71(4, 5)),
        put(m31(4, 7)), put(m31(4, 7)), put(m31(4, 8)),
    ] },
    // 64
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(X), put(m31(4, 8)),
    ] },
    // 65
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(X), put(m31(4, 8)),
    ] },
    // 66
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(X), put(m31(4, 2)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(X), put(m31(4, 8)),
    ] },
    // 67
    Entry { tests: &[], cells: &[
        put(m31(4, 3)), put(X), put(m31(4, 2)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(X), put(m31(4, 8)),
    ] },
    // 68
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(X), put(m31(4, 8)),
    ] },
    // 69
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(X), put(m31(4, 8)),
    ] },
    // 70
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(X), put(m31(4, 8)),
    ] },
    // 71
    Entry { tests: &[], cells: &[
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(X), put(m31(4, 8)),
    ] },
    // 72
    Entry { tests: &[(7, 3)], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m211(4, 1, 5)),
        pick(0, X, m71(4, 3)), put(X), put(m31(4, 5)),
        pick(0, m31(4, 6), m277(4, 7, 3)), pick(0, X, m71(4, 7)), put(m31(4, 8)),
    ] },
    // 73
    Entry { tests: &[(7, 3)], cells: &[
        pick(0, m31(4, 1), m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        pick(0, X, m31(3, 4)), put(X), put(m31(4, 5)),
        pick(0, m31(4, 6), m11(7, 3)), pick(0, X, m31(4, 7)), put(m31(4, 8)),
    ] },
    // 74
    Entry { tests: &[(3, 1), (7, 3)], cells: &[
        pick(0, X, m277(4, 3, 1)), pick(0, X, m71(4, 1)), put(m31(4, 2)),
        put(X), put(X), put(m31(4, 5)),
        pick(1, X, m277(4, 7, 3)), pick(1, X, m71(4, 7)), put(m31(4, 8)),
    ] },
    // 75
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m277(4, 3, 1)), pick(0, X, m71(4, 1)), put(m31(4, 2)),
        pick(0, X, m71(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(X), put(m31(4, 8)),
    ] },
    // 76
    Entry { tests: &[(7, 3)], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m211(4, 1, 5)),
        pick(0, X, m71(4, 3)), put(X), put(m31(4, 5)),
        pick(0, m31(4, 6), m277(4, 7, 3)), pick(0, X, m71(4, 7)), put(m31(4, 8)),
    ] },
    // 77
    Entry { tests: &[(7, 3)], cells: &[
        pick(0, m31(4, 1), m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        pick(0, X, m31(3, 4)), put(X), put(m31(4, 5)),
        pick(0, m31(4, 6), m11(7, 3)), pick(0, X, m31(4, 7)), put(m31(4, 8)),
    ] },
    // 78
    Entry { tests: &[(3, 1), (7, 3)], cells: &[
        pick(0, m31(4, 0), m211(4, 3, 1)), put(X), put(m31(4, 5)),
        put(X), put(X), put(m31(4, 5)),
        pick(1, m31(4, 6), m211(4, 7, 3)), put(X), put(m31(4, 8)),
    ] },
    // 79
    Entry { tests: &[(3, 1), (7, 3)], cells: &[
        pick(0, X, m277(4, 3, 1)), pick(0, X, m71(4, 1)), put(m31(4, 5)),
        pick(0, X, m71(4, 3)), put(X), put(m31(4, 5)),
        pick(1, m31(4, 6), m211(4, 7, 3)), put(X), put(m31(4, 8)),
    ] },
    // 80
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 2)),
        put(m31(4, 3)), put(X), pick(0, X, m71(4, 5)),
        put(m31(4, 6)), pick(0, X, m71(4, 7)), pick(0, m31(4, 8), m277(4, 5, 7)),
    ] },
    // 81
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 2)),
        put(m31(4, 3)), put(X), pick(0, X, m71(4, 5)),
        put(m31(4, 6)), pick(0, X, m71(4, 7)), pick(0, m31(4, 8), m277(4, 5, 7)),
    ] },
    // 82
    Entry { tests: &[(1, 5), (5, 7)], cells: &[
        put(m31(4, 0)), pick(0, X, m71(4, 1)), pick(0, X, m277(4, 1, 5)),
        put(m31(4, 3)), put(X), put(X),
        put(m31(4, 6)), pick(1, X, m71(4, 7)), pick(1, X, m277(4, 5, 7)),
    ] },
    // 83
    Entry { tests: &[(1, 5), (5, 7)], cells: &[
        put(m31(4, 3)), put(X), pick(0, m31(4, 2), m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(X),
        put(m31(4, 6)), put(X), pick(1, m31(4, 8), m211(4, 5, 7)),
    ] },
    // 84
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), pick(0, m31(4, 1), m211(4, 1, 5)),
        put(m31(4, 3)), put(X), pick(0, X, m31(5, 4)),
        put(m31(4, 6)), pick(0, X, m31(4, 7)), pick(0, m31(4, 8), m11(5, 7)),
    ] },
    // 85
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), pick(0, m31(4, 1), m211(4, 1, 5)),
        put(m31(4, 3)), put(X), pick(0, X, m31(5, 4)),
        put(m31(4, 6)), pick(0, X, m31(4, 7)), pick(0, m31(4, 8), m11(5, 7)),
    ] },
    // 86
    Entry { tests: &[(1, 5)], cells: &[
        put(m31(4, 0)), pick(0, X, m71(4, 1)), pick(0, X, m277(4, 1, 5)),
        put(m31(4, 3)), put(X), pick(0, X, m71(4, 5)),
        put(m31(4, 6)), put(X), put(m31(4, 8)),
    ] },
    // 87
    Entry { tests: &[(1, 5), (5, 7)], cells: &[
        put(m31(4, 3)), pick(0, X, m71(4, 1)), pick(0, X, m277(4, 1, 5)),
        put(m31(4, 3)), put(X), pick(0, X, m71(4, 5)),
        put(m31(4, 6)), put(X), pick(1, m31(4, 8), m211(4, 5, 7)),
    ] },
    // 88
    Entry { tests: &[(7, 3), (5, 7)], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m31(4, 2)),
        pick(0, X, m71(4, 3)), put(X), pick(1, X, m71(4, 5)),
        pick(0, X, m277(4, 7, 3)), put(X), pick(1, X, m277(4, 5, 7)),
    ] },
    // 89
    Entry { tests: &[(7, 3), (5, 7)], cells: &[
        put(m31(4, 1)), put(m31(4, 1)), put(m31(4, 2)),
        put(X), put(X), put(X),
        pick(0, m31(4, 6), m211(4, 7, 3)), put(X), pick(1, m31(4, 8), m211(4, 5, 7)),
    ] },
    // 90
    Entry { tests: &[(3, 1), (1, 5), (7, 3), (5, 7)], cells: &[
        pick(0, m31(4, 0), m211(4, 3, 1)), put(X), pick(1, m31(4, 2), m211(4, 1, 5)),
        put(X), put(X), put(X),
        pick(2, m31(4, 6), m211(4, 7, 3)), put(X), pick(3, m31(4, 8), m211(4, 5, 7)),
    ] },
    // 91
    Entry { tests: &[(3, 1), (1, 5), (7, 3), (5, 7)], cells: &[
        pick(0, X, m277(4, 3, 1)), pick(0, X, m71(4, 1)), pick(1, m31(4, 2), m211(4, 1, 5)),
        pick(0, X, m71(4, 3)), put(X), put(X),
        pick(2, m31(4, 6), m211(4, 7, 3)), put(X), pick(3, m31(4, 8), m211(4, 5, 7)),
    ] },
    // 92
    Entry { tests: &[(7, 3), (5, 7)], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m31(4, 1)),
        put(X), put(X), put(X),
        pick(0, m31(4, 6), m211(4, 7, 3)), put(X), pick(1, m31(4, 8), m211(4, 5, 7)),
    ] },
    // 93
    Entry { tests: &[(7, 3), (5, 7)], cells: &[
        put(m31(4, 1)), put(m31(4, 1)), put(m31(4, 1)),
        put(X), put(X), put(X),
        pick(0, m31(4, 6), m211(4, 7, 3)), put(X), pick(1, m31(4, 8), m211(4, 5, 7)),
    ] },
    // 94
    Entry { tests: &[(3, 1), (1, 5), (7, 3), (5, 7)], cells: &[
        pick(0, m31(4, 0), m211(4, 3, 1)), pick(1, X, m71(4, 1)), pick(1, X, m277(4, 1, 5)),
        put(X), put(X), pick(1, X, m71(4, 5)),
        pick(2, m31(4, 6), m211(4, 7, 3)), put(X), pick(3, m31(4, 8), m211(4, 5, 7)),
    ] },
    // 95
    Entry { tests: &[(3, 1), (1, 5)], cells: &[
        pick(0, X, m277(4, 3, 1)), put(X), pick(1, X, m277(4, 1, 5)),
        pick(0, X, m71(4, 3)), put(X), pick(1, X, m71(4, 5)),
        put(m31(4, 6)), put(X), put(m31(4, 8)),
    ] },
    // 96
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 8)),
    ] },
    // 97
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 8)),
    ] },
    // 98
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(X), put(m31(4, 2)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 8)),
    ] },
    // 99
    Entry { tests: &[], cells: &[
        put(m31(4, 3)), put(X), put(m31(4, 2)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 8)),
    ] },
    // 100
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 8)),
    ] },
    // 101
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 8)),
    ] },
    // 102
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 8)),
    ] },
    // 103
    Entry { tests: &[], cells: &[
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 8)),
    ] },
    // 104
    Entry { tests: &[(7, 3)], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m211(4, 1, 5)),
        pick(0, X, m71(4, 3)), put(X), put(m31(4, 5)),
        pick(0, X, m277(4, 7, 3)), pick(0, X, m71(4, 7)), put(m31(4, 8)),
    ] },
    // 105
    Entry { tests: &[(7, 3)], cells: &[
        pick(0, m31(4, 1), m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        pick(0, X, m31(3, 4)), put(X), put(m31(4, 5)),
        pick(0, X, m11(7, 3)), pick(0, X, m31(4, 7)), put(m31(4, 8)),
    ] },
    // 106
    Entry { tests: &[(7, 3)], cells: &[
        put(m31(4, 0)), put(X), put(m31(4, 2)),
        pick(0, X, m71(4, 3)), put(X), put(m31(4, 5)),
        pick(0, X, m277(4, 7, 3)), pick(0, X, m71(4, 7)), put(m31(4, 8)),
    ] },
    // 107
    Entry { tests: &[(3, 1), (7, 3)], cells: &[
        pick(0, X, m277(4, 3, 1)), pick(0, X, m71(4, 1)), put(m31(4, 2)),
        put(X), put(X), put(m31(4, 5)),
        pick(1, X, m277(4, 7, 3)), pick(1, X, m71(4, 7)), put(m31(4, 8)),
    ] },
    // 108
    Entry { tests: &[(7, 3)], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m211(4, 1, 5)),
        pick(0, X, m71(4, 3)), put(X), put(m31(4, 5)),
        pick(0, X, m277(4, 7, 3)), pick(0, X, m71(4, 7)), put(m31(4, 8)),
    ] },
    // 109
    Entry { tests: &[(7, 3)], cells: &[
        pick(0, m31(4, 1), m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        pick(0, X, m31(3, 4)), put(X), put(m31(4, 5)),
        pick(0, X, m11(7, 3)), pick(0, X, m31(4, 7)), put(m31(4, 8)),
    ] },
    // 110
    Entry { tests: &[(7, 3)], cells: &[
        put(m31(4, 0)), put(X), put(m31(4, 5)),
        pick(0, X, m71(4, 3)), put(X), put(m31(4, 5)),
        pick(0, X, m277(4, 7, 3)), pick(0, X, m71(4, 7)), put(m31(4, 8)),
    ] },
    // 111
    Entry { tests: &[(3, 1), (7, 3)], cells: &[
        pick(0, X, m211(4, 3, 1)), put(X), put(m31(4, 5)),
        put(X), put(X), put(m31(4, 5)),
        pick(1, X, m277(4, 7, 3)), pick(1, X, m71(4, 7)), put(m31(4, 8)),
    ] },
    // 112
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 2)),
        put(m31(4, 3)), put(X), pick(0, X, m31(4, 5)),
        pick(0, m31(4, 3), m211(4, 7, 3)), pick(0, X, m31(7, 4)), pick(0, m31(4, 8), m11(5, 7)),
    ] },
    // 113
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 2)),
        put(m31(4, 3)), put(X), pick(0, X, m31(4, 5)),
        pick(0, m31(4, 3), m211(4, 7, 3)), pick(0, X, m31(7, 4)), pick(0, m31(4, 8), m11(5, 7)),
    ] },
    // 114
    Entry { tests: &[(1, 5), (5, 7)], cells: &[
        put(m31(4, 0)), put(X), pick(0, m31(4, 2), m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(X),
        put(m31(4, 3)), put(X), pick(1, m31(4, 8), m211(4, 5, 7)),
    ] },
    // 115
    Entry { tests: &[(1, 5), (5, 7)], cells: &[
        put(m31(4, 3)), put(X), pick(0, m31(4, 2), m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(X),
        put(m31(4, 3)), put(X), pick(1, m31(4, 8), m211(4, 5, 7)),
    ] },
    // 116
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 1)),
        put(m31(4, 3)), put(X), put(X),
        put(m31(4, 3)), put(X), pick(0, m31(4, 8), m211(4, 5, 7)),
    ] },
    // 117
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 1)),
        put(m31(4, 3)), put(X), put(X),
        put(m31(4, 3)), put(X), pick(0, m31(4, 8), m211(4, 5, 7)),
    ] },
    // 118
    Entry { tests: &[(1, 5)], cells: &[
        put(m31(4, 0)), pick(0, X, m71(4, 1)), pick(0, X, m277(4, 1, 5)),
        put(m31(4, 3)), put(X), pick(0, X, m71(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 8)),
    ] },
    // 119
    Entry { tests: &[(1, 5)], cells: &[
        pick(0, m31(4, 3), m211(4, 3, 1)), pick(0, X, m31(1, 4)), pick(0, X, m11(1, 5)),
        put(m31(4, 3)), put(X), pick(0, X, m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 8)),
    ] },
    // 120
    Entry { tests: &[(7, 3)], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m31(4, 2)),
        pick(0, X, m71(4, 3)), put(X), put(X),
        pick(0, X, m277(4, 7, 3)), pick(0, X, m71(4, 7)), put(m31(4, 8)),
    ] },
    // 121
    Entry { tests: &[(7, 3), (5, 7)], cells: &[
        put(m31(4, 1)), put(m31(4, 1)), put(m31(4, 2)),
        pick(0, X, m71(4, 3)), put(X), put(X),
        pick(0, X, m277(4, 7, 3)), pick(0, X, m71(4, 7)), pick(1, m31(4, 8), m211(4, 5, 7)),
    ] },
    // 122
    Entry { tests: &[(3, 1), (1, 5), (7, 3), (5, 7)], cells: &[
        pick(0, m31(4, 0), m211(4, 3, 1)), put(X), pick(1, m31(4, 2), m211(4, 1, 5)),
        pick(2, X, m71(4, 3)), put(X), put(X),
        pick(2, X, m277(4, 7, 3)), pick(2, X, m71(4, 7)), pick(3, m31(4, 8), m211(4, 5, 7)),
    ] },
    // 123
    Entry { tests: &[(3, 1), (7, 3)], cells: &[
        pick(0, X, m277(4, 3, 1)), pick(0, X, m71(4, 1)), put(m31(4, 2)),
        put(X), put(X), put(X),
        pick(1, X, m277(4, 7, 3)), pick(1, X, m71(4, 7)), put(m31(4, 8)),
    ] },
    // 124
    Entry { tests: &[(7, 3)], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m31(4, 1)),
        pick(0, X, m71(4, 3)), put(X), put(X),
        pick(0, X, m277(4, 7, 3)), pick(0, X, m71(4, 7)), put(m31(4, 8)),
    ] },
    // 125
    Entry { tests: &[(7, 3)], cells: &[
        pick(0, m31(4, 1), m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 1)),
        pick(0, X, m31(3, 4)), put(X), put(X),
        pick(0, X, m11(7, 3)), pick(0, X, m31(4, 7)), put(m31(4, 8)),
    ] },
    // 126
    Entry { tests: &[(1, 5), (7, 3)], cells: &[
        put(m31(4, 0)), pick(0, X, m71(4, 1)), pick(0, X, m277(4, 1, 5)),
        pick(1, X, m71(4, 3)), put(X), pick(0, X, m71(4, 5)),
        pick(1, X, m277(4, 7, 3)), pick(1, X, m71(4, 7)), put(m31(4, 8)),
    ] },
    // 127
    Entry { tests: &[(3, 1), (1, 5), (7, 3)], cells: &[
        pick(0, X, m211(4, 3, 1)), pick(0, X, m71(4, 1)), pick(1, X, m277(4, 1, 5)),
        pick(0, X, m71(4, 3)), put(X), pick(1, X, m71(4, 5)),
        pick(2, X, m277(4, 7, 3)), pick(2, X, m71(4, 7)), put(m31(4, 8)),
    ] },
    // 128
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 129
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 130
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(X), put(m31(4, 2)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 131
    Entry { tests: &[], cells: &[
        put(m31(4, 3)), put(X), put(m31(4, 2)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 132
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 133
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 134
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 135
    Entry { tests: &[], cells: &[
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 136
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(X), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 137
    Entry { tests: &[], cells: &[
        put(m31(4, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(X), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 138
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, m31(4, 0), m277(4, 3, 1)), pick(0, X, m71(4, 1)), put(m31(4, 2)),
        pick(0, X, m71(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 139
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m277(4, 3, 1)), pick(0, X, m71(4, 1)), put(m31(4, 2)),
        pick(0, X, m71(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 140
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(X), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 141
    Entry { tests: &[], cells: &[
        put(m31(4, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(X), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 142
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, m31(4, 0), m11(3, 1)), pick(0, X, m31(1, 4)), pick(0, m31(4, 5), m211(4, 1, 5)),
        pick(0, X, m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 143
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m11(3, 1)), pick(0, X, m31(1, 4)), pick(0, m31(4, 5), m211(4, 1, 5)),
        pick(0, X, m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 144
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 2)),
        put(m31(4, 3)), put(X), put(X),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 7)),
    ] },
    // 145
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 2)),
        put(m31(4, 3)), put(X), put(X),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 7)),
    ] },
    // 146
    Entry { tests: &[(1, 5)], cells: &[
        put(m31(4, 0)), pick(0, X, m31(4, 1)), pick(0, m31(4, 2), m11(1, 5)),
        put(m31(4, 3)), put(X), pick(0, X, m31(5, 4)),
        put(m211(4, 7, 3)), put(m31(4, 7)), pick(0, m31(4, 7), m211(4, 5, 7)),
    ] },
    // 147
    Entry { tests: &[(1, 5)], cells: &[
        put(m31(4, 3)), put(X), pick(0, m31(4, 2), m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(X),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 7)),
    ] },
    // 148
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 1)),
        put(m31(4, 3)), put(X), put(X),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 7)),
    ] },
    // 149
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 1)),
        put(m31(4, 3)), put(X), put(X),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 7)),
    ] },
    // 150
    Entry { tests: &[(1, 5)], cells: &[
        put(m31(4, 0)), pick(0, X, m31(4, 1)), pick(0, X, m11(1, 5)),
        put(m31(4, 3)), put(X), pick(0, X, m31(5, 4)),
        put(m211(4, 7, 3)), put(m31(4, 7)), pick(0, m31(4, 7), m211(4, 5, 7)),
    ] },
    // 151
    Entry { tests: &[(1, 5)], cells: &[
        put(m31(4, 3)), put(X), pick(0, X, m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(X),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 7)),
    ] },
    // 152
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m31(4, 2)),
        put(X), put(X), put(X),
        put(m31(4, 6)), put(m31(4, 7)), put(m31(4, 7)),
    ] },
    // 153
    Entry { tests: &[], cells: &[
        put(m31(4, 1)), put(m31(4, 1)), put(m31(4, 2)),
        put(X), put(X), put(X),
        put(m31(4, 6)), put(m31(4, 7)), put(m31(4, 7)),
    ] },
    // 154
    Entry { tests: &[(3, 1), (1, 5)], cells: &[
        pick(0, m31(4, 0), m211(4, 3, 1)), put(X), pick(1, m31(4, 2), m211(4, 1, 5)),
        put(X), put(X), put(X),
        put(m31(4, 6)), put(m31(4, 7)), put(m31(4, 7)),
    ] },
    // 155
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m277(4, 3, 1)), pick(0, X, m71(4, 1)), put(m31(4, 2)),
        pick(0, X, m71(4, 3)), put(X), put(X),
        put(m31(4, 6)), put(m31(4, 7)), put(m31(4, 7)),
    ] },
    // 156
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m31(4, 1)),
        put(X), put(X), put(X),
        put(m31(4, 6)), put(m31(4, 7)), put(m31(4, 7)),
    ] },
    // 157
    Entry { tests: &[], cells: &[
        put(m31(4, 1)), put(m31(4, 1)), put(m31(4, 1)),
        put(X), put(X), put(X),
        put(m31(4, 6)), put(m31(4, 7)), put(m31(4, 7)),
    ] },
    // 158
    Entry { tests: &[(3, 1), (1, 5)], cells: &[
        pick(0, m31(4, 0), m211(4, 3, 1)), pick(1, X, m71(4, 1)), pick(1, X, m277(4, 1, 5)),
        put(X), put(X), pick(1, X, m71(4, 5)),
        put(m31(4, 6)), put(m31(4, 7)), put(m31(4, 7)),
    ] },
    // 159
    Entry { tests: &[(3, 1), (1, 5)], cells: &[
        pick(0, X, m277(4, 3, 1)), put(X), pick(1, X, m211(4, 1, 5)),
        pick(0, X, m71(4, 3)), put(X), put(X),
        put(m31(4, 6)), put(m31(4, 7)), put(m31(4, 7)),
    ] },
    // 160
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 161
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 162
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(X), put(m31(4, 2)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 163
    Entry { tests: &[], cells: &[
        put(m31(4, 3)), put(X), put(m31(4, 2)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 164
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 165
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 166
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 167
    Entry { tests: &[], cells: &[
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 168
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(X), put(X), put(m31(4, 5)),
        put(m31(4, 7)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 169
    Entry { tests: &[], cells: &[
        put(m31(4, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(X), put(X), put(m31(4, 5)),
        put(m31(4, 7)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 170
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, m31(4, 0), m11(3, 1)), pick(0, X, m31(4, 1)), put(m31(4, 2)),
        pick(0, X, m31(3, 4)), put(X), put(m31(4, 5)),
        pick(0, m31(4, 7), m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 171
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m11(3, 1)), pick(0, X, m31(4, 1)), put(m31(4, 2)),
        pick(0, X, m31(3, 4)), put(X), put(m31(4, 5)),
        pick(0, m31(4, 7), m211(4, 7, 3)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 172
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(X), put(X), put(m31(4, 5)),
        put(m31(4, 7)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 173
    Entry { tests: &[], cells: &[
        put(m31(4, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(X), put(X), put(m31(4, 5)),
        put(m31(4, 7)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 174
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, m31(4, 0), m211(4, 3, 1)), put(X), put(m31(4, 5)),
        put(X), put(X), put(m31(4, 5)),
        put(m31(4, 7)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 175
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m211(4, 3, 1)), put(X), put(m31(4, 5)),
        put(X), put(X), put(m31(4, 5)),
        put(m31(4, 7)), put(m31(4, 7)), put(m211(4, 5, 7)),
    ] },
    // 176
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 2)),
        put(m31(4, 3)), put(X), put(X),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 7)),
    ] },
    // 177
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 2)),
        put(m31(4, 3)), put(X), put(X),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 7)),
    ] },
    // 178
    Entry { tests: &[(1, 5)], cells: &[
        put(m31(4, 0)), pick(0, X, m31(4, 1)), pick(0, m31(4, 2), m11(1, 5)),
        put(m31(4, 3)), put(X), pick(0, X, m31(5, 4)),
        put(m211(4, 7, 3)), put(m31(4, 7)), pick(0, m31(4, 7), m211(4, 5, 7)),
    ] },
    // 179
    Entry { tests: &[(1, 5)], cells: &[
        put(m31(4, 3)), put(X), pick(0, m31(4, 2), m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(X),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 7)),
    ] },
    // 180
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 1)),
        put(m31(4, 3)), put(X), put(X),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 7)),
    ] },
    // 181
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 1)),
        put(m31(4, 3)), put(X), put(X),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 7)),
    ] },
    // 182
    Entry { tests: &[(1, 5)], cells: &[
        put(m31(4, 0)), pick(0, X, m31(4, 1)), pick(0, X, m11(1, 5)),
        put(m31(4, 3)), put(X), pick(0, X, m31(5, 4)),
        put(m211(4, 7, 3)), put(m31(4, 7)), pick(0, m31(4, 7), m211(4, 5, 7)),
    ] },
    // 183
    Entry { tests: &[(1, 5)], cells: &[
        put(m31(4, 3)), put(X), pick(0, X, m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(X),
        put(m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 7)),
    ] },
    // 184
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m31(4, 2)),
        put(X), put(X), put(X),
        put(m31(4, 7)), put(m31(4, 7)), put(m31(4, 7)),
    ] },
    // 185
    Entry { tests: &[], cells: &[
        put(m31(4, 1)), put(m31(4, 1)), put(m31(4, 2)),
        put(X), put(X), put(X),
        put(m31(4, 7)), put(m31(4, 7)), put(m31(4, 7)),
    ] },
    // 186
    Entry { tests: &[(3, 1), (1, 5)], cells: &[
        pick(0, m31(4, 0), m211(4, 3, 1)), put(X), pick(1, m31(4, 2), m211(4, 1, 5)),
        put(X), put(X), put(X),
        put(m31(4, 7)), put(m31(4, 7)), put(m31(4, 7)),
    ] },
    // 187
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m11(3, 1)), pick(0, X, m31(4, 1)), put(m31(4, 2)),
        pick(0, X, m31(3, 4)), put(X), put(X),
        pick(0, m31(4, 7), m211(4, 7, 3)), put(m31(4, 7)), put(m31(4, 7)),
    ] },
    // 188
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m31(4, 1)),
        put(X), put(X), put(X),
        put(m31(4, 7)), put(m31(4, 7)), put(m31(4, 7)),
    ] },
    // 189
    Entry { tests: &[], cells: &[
        put(m31(4, 1)), put(m31(4, 1)), put(m31(4, 1)),
        put(X), put(X), put(X),
        put(m31(4, 7)), put(m31(4, 7)), put(m31(4, 7)),
    ] },
    // 190
    Entry { tests: &[(1, 5)], cells: &[
        put(m31(4, 0)), pick(0, X, m31(4, 1)), pick(0, X, m11(1, 5)),
        put(X), put(X), pick(0, X, m31(5, 4)),
        put(m31(4, 7)), put(m31(4, 7)), pick(0, m31(4, 7), m211(4, 5, 7)),
    ] },
    // 191
    Entry { tests: &[(3, 1), (1, 5)], cells: &[
        pick(0, X, m211(4, 3, 1)), put(X), pick(1, X, m211(4, 1, 5)),
        put(X), put(X), put(X),
        put(m31(4, 7)), put(m31(4, 7)), put(m31(4, 7)),
    ] },
    // 192
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(X), put(m31(4, 5)),
    ] },
    // 193
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(X), put(m31(4, 5)),
    ] },
    // 194
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(X), put(m31(4, 2)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(X), put(m31(4, 5)),
    ] },
    // 195
    Entry { tests: &[], cells: &[
        put(m31(4, 3)), put(X), put(m31(4, 2)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(X), put(m31(4, 5)),
    ] },
    // 196
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(X), put(m31(4, 5)),
    ] },
    // 197
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(X), put(m31(4, 5)),
    ] },
    // 198
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(X), put(m31(4, 5)),
    ] },
    // 199
    Entry { tests: &[], cells: &[
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(X), put(m31(4, 5)),
    ] },
    // 200
    Entry { tests: &[(7, 3)], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m211(4, 1, 5)),
        pick(0, X, m31(4, 3)), put(X), put(m31(4, 5)),
        pick(0, m31(4, 6), m11(7, 3)), pick(0, X, m31(7, 4)), pick(0, m31(4, 5), m211(4, 5, 7)),
    ] },
    // 201
    Entry { tests: &[(7, 3)], cells: &[
        put(m31(4, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(X), put(X), put(m31(4, 5)),
        pick(0, m31(4, 6), m211(4, 7, 3)), put(X), put(m31(4, 5)),
    ] },
    // 202
    Entry { tests: &[(3, 1), (7, 3)], cells: &[
        pick(0, m31(4, 0), m211(4, 3, 1)), put(X), put(m31(4, 2)),
        put(X), put(X), put(m31(4, 5)),
        pick(1, m31(4, 6), m211(4, 7, 3)), put(X), put(m31(4, 5)),
    ] },
    // 203
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m277(4, 3, 1)), pick(0, X, m71(4, 1)), put(m31(4, 2)),
        pick(0, X, m71(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(X), put(m31(4, 5)),
    ] },
    // 204
    Entry { tests: &[(7, 3)], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m211(4, 1, 5)),
        pick(0, X, m31(4, 3)), put(X), put(m31(4, 5)),
        pick(0, m31(4, 6), m11(7, 3)), pick(0, X, m31(7, 4)), pick(0, m31(4, 5), m211(4, 5, 7)),
    ] },
    // 205
    Entry { tests: &[(7, 3)], cells: &[
        put(m31(4, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(X), put(X), put(m31(4, 5)),
        pick(0, m31(4, 6), m211(4, 7, 3)), put(X), put(m31(4, 5)),
    ] },
    // 206
    Entry { tests: &[(3, 1), (7, 3)], cells: &[
        pick(0, m31(4, 0), m211(4, 3, 1)), put(X), put(m31(4, 5)),
        put(X), put(X), put(m31(4, 5)),
        pick(1, m31(4, 6), m211(4, 7, 3)), put(X), put(m31(4, 5)),
    ] },
    // 207
    Entry { tests: &[(3, 1)], cells: &[
        pick(0, X, m11(3, 1)), pick(0, X, m31(1, 4)), pick(0, m31(4, 5), m211(4, 1, 5)),
        pick(0, X, m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 6)), put(X), put(m31(4, 5)),
    ] },
    // 208
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 2)),
        put(m31(4, 3)), put(X), pick(0, X, m71(4, 5)),
        put(m31(4, 6)), pick(0, X, m71(4, 7)), pick(0, X, m277(4, 5, 7)),
    ] },
    // 209
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 2)),
        put(m31(4, 3)), put(X), pick(0, X, m71(4, 5)),
        put(m31(4, 6)), pick(0, X, m71(4, 7)), pick(0, X, m277(4, 5, 7)),
    ] },
    // 210
    Entry { tests: &[(5, 7)], cells: &[
        put(m31(4, 0)), put(X), put(m31(4, 2)),
        put(m31(4, 3)), put(X), pick(0, X, m71(4, 5)),
        put(m31(4, 6)), pick(0, X, m71(4, 7)), pick(0, X, m277(4, 5, 7)),
    ] },
    // 211
    Entry { tests: &[(5, 7)], cells: &[
        put(m31(4, 3)), put(X), put(m31(4, 2)),
        put(m31(4, 3)), put(X), pick(0, X, m71(4, 5)),
        put(m31(4, 6)), pick(0, X, m71(4, 7)), pick(0, X, m277(4, 5, 7)),
    ] },
    // 212
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), pick(0, m31(4, 1), m211(4, 1, 5)),
        put(m31(4, 3)), put(X), pick(0, X, m31(5, 4)),
        put(m31(4, 6)), pick(0, X, m31(4, 7)), pick(0, X, m11(5, 7)),
    ] },
    // 213
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), pick(0, m31(4, 1), m211(4, 1, 5)),
        put(m31(4, 3)), put(X), pick(0, X, m31(5, 4)),
        put(m31(4, 6)), pick(0, X, m31(4, 7)), pick(0, X, m11(5, 7)),
    ] },
    // 214
    Entry { tests: &[(1, 5), (5, 7)], cells: &[
        put(m31(4, 0)), pick(0, X, m71(4, 1)), pick(0, X, m277(4, 1, 5)),
        put(m31(4, 3)), put(X), put(X),
        put(m31(4, 6)), pick(1, X, m71(4, 7)), pick(1, X, m277(4, 5, 7)),
    ] },
    // 215
    Entry { tests: &[(1, 5), (5, 7)], cells: &[
        put(m31(4, 3)), put(X), pick(0, X, m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(X),
        put(m31(4, 6)), pick(1, X, m71(4, 7)), pick(1, X, m277(4, 5, 7)),
    ] },
    // 216
    Entry { tests: &[(5, 7)], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m31(4, 2)),
        put(X), put(X), pick(0, X, m71(4, 5)),
        put(m31(4, 6)), pick(0, X, m71(4, 7)), pick(0, X, m277(4, 5, 7)),
    ] },
    // 217
    Entry { tests: &[(5, 7)], cells: &[
        put(m31(4, 1)), put(m31(4, 1)), put(m31(4, 2)),
        put(X), put(X), pick(0, X, m71(4, 5)),
        put(m31(4, 6)), pick(0, X, m71(4, 7)), pick(0, X, m277(4, 5, 7)),
    ] },
    // 218
    Entry { tests: &[(3, 1), (1, 5), (7, 3), (5, 7)], cells: &[
        pick(0, m31(4, 0), m211(4, 3, 1)), put(X), pick(1, m31(4, 2), m211(4, 1, 5)),
        put(X), put(X), pick(3, X, m71(4, 5)),
        pick(2, m31(4, 6), m211(4, 7, 3)), pick(3, X, m71(4, 7)), pick(3, X, m277(4, 5, 7)),
    ] },
    // 219
    Entry { tests: &[(3, 1), (5, 7)], cells: &[
        pick(0, X, m277(4, 3, 1)), pick(0, X, m71(4, 1)), put(m31(4, 2)),
        pick(0, X, m71(4, 3)), put(X), pick(1, X, m71(4, 5)),
        put(m31(4, 6)), pick(1, X, m71(4, 7)), pick(1, X, m277(4, 5, 7)),
    ] },
    // 220
    Entry { tests: &[(7, 3), (5, 7)], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m31(4, 1)),
        put(X), put(X), pick(1, X, m71(4, 5)),
        pick(0, m31(4, 6), m211(4, 7, 3)), pick(1, X, m71(4, 7)), pick(1, X, m277(4, 5, 7)),
    ] },
    // 221
    Entry { tests: &[(5, 7)], cells: &[
        put(m31(4, 1)), put(m31(4, 1)), pick(0, m31(4, 1), m211(4, 1, 5)),
        put(X), put(X), pick(0, X, m31(5, 4)),
        put(m31(4, 6)), pick(0, X, m31(4, 7)), pick(0, X, m11(5, 7)),
    ] },
    // 222
    Entry { tests: &[(1, 5), (5, 7)], cells: &[
        put(m31(4, 0)), pick(0, X, m71(4, 1)), pick(0, X, m277(4, 1, 5)),
        put(X), put(X), put(X),
        put(m31(4, 6)), pick(1, X, m71(4, 7)), pick(1, X, m277(4, 5, 7)),
    ] },
    // 223
    Entry { tests: &[(3, 1), (1, 5), (5, 7)], cells: &[
        pick(0, X, m277(4, 3, 1)), pick(1, X, m71(4, 1)), pick(1, X, m211(4, 1, 5)),
        pick(0, X, m71(4, 3)), put(X), pick(1, X, m71(4, 5)),
        put(m31(4, 6)), pick(2, X, m71(4, 7)), pick(2, X, m277(4, 5, 7)),
    ] },
    // 224
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
    ] },
    // 225
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
    ] },
    // 226
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(X), put(m31(4, 2)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
    ] },
    // 227
    Entry { tests: &[], cells: &[
        put(m31(4, 3)), put(X), put(m31(4, 2)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
    ] },
    // 228
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
    ] },
    // 229
    Entry { tests: &[], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
    ] },
    // 230
    Entry { tests: &[], cells: &[
        put(m31(4, 0)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
    ] },
    // 231
    Entry { tests: &[], cells: &[
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
        put(m31(4, 3)), put(X), put(m31(4, 5)),
    ] },
    // 232
    Entry { tests: &[(7, 3)], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m211(4, 1, 5)),
        pick(0, X, m31(4, 3)), put(X), put(m31(4, 5)),
        pick(0, X, m11(7, 3)), pick(0, X, m31(7, 4)), pick(0, m31(4, 5), m211(4, 5, 7)),
    ] },
    // 233
    Entry { tests: &[(7, 3)], cells: &[
        put(m31(4, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(X), put(X), put(m31(4, 5)),
        pick(0, X, m211(4, 7, 3)), put(X), put(m31(4, 5)),
    ] },
    // 234
    Entry { tests: &[(3, 1), (7, 3)], cells: &[
        pick(0, m31(4, 0), m211(4, 3, 1)), put(X), put(m31(4, 2)),
        pick(1, X, m71(4, 3)), put(X), put(m31(4, 5)),
        pick(1, X, m277(4, 7, 3)), pick(1, X, m71(4, 7)), put(m31(4, 5)),
    ] },
    // 235
    Entry { tests: &[(3, 1), (7, 3)], cells: &[
        pick(0, X, m277(4, 3, 1)), pick(0, X, m71(4, 1)), put(m31(4, 2)),
        put(X), put(X), put(m31(4, 5)),
        pick(1, X, m211(4, 7, 3)), put(X), put(m31(4, 5)),
    ] },
    // 236
    Entry { tests: &[(7, 3)], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m211(4, 1, 5)),
        pick(0, X, m31(4, 3)), put(X), put(m31(4, 5)),
        pick(0, X, m11(7, 3)), pick(0, X, m31(7, 4)), pick(0, m31(4, 5), m211(4, 5, 7)),
    ] },
    // 237
    Entry { tests: &[(7, 3)], cells: &[
        put(m31(4, 1)), put(m31(4, 1)), put(m211(4, 1, 5)),
        put(X), put(X), put(m31(4, 5)),
        pick(0, X, m211(4, 7, 3)), put(X), put(m31(4, 5)),
    ] },
    // 238
    Entry { tests: &[(7, 3)], cells: &[
        put(m31(4, 0)), put(X), put(m31(4, 5)),
        pick(0, X, m31(4, 3)), put(X), put(m31(4, 5)),
        pick(0, X, m11(7, 3)), pick(0, X, m31(7, 4)), pick(0, m31(4, 5), m211(4, 5, 7)),
    ] },
    // 239
    Entry { tests: &[(3, 1), (7, 3)], cells: &[
        pick(0, X, m211(4, 3, 1)), put(X), put(m31(4, 5)),
        put(X), put(X), put(m31(4, 5)),
        pick(1, X, m211(4, 7, 3)), put(X), put(m31(4, 5)),
    ] },
    // 240
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 2)),
        put(m31(4, 3)), put(X), pick(0, X, m31(4, 5)),
        pick(0, m31(4, 3), m211(4, 7, 3)), pick(0, X, m31(7, 4)), pick(0, X, m11(5, 7)),
    ] },
    // 241
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 2)),
        put(m31(4, 3)), put(X), pick(0, X, m31(4, 5)),
        pick(0, m31(4, 3), m211(4, 7, 3)), pick(0, X, m31(7, 4)), pick(0, X, m11(5, 7)),
    ] },
    // 242
    Entry { tests: &[(1, 5), (5, 7)], cells: &[
        put(m31(4, 0)), put(X), pick(0, m31(4, 2), m211(4, 1, 5)),
        put(m31(4, 3)), put(X), pick(1, X, m71(4, 5)),
        put(m31(4, 3)), pick(1, X, m71(4, 7)), pick(1, X, m277(4, 5, 7)),
    ] },
    // 243
    Entry { tests: &[(5, 7)], cells: &[
        put(m31(4, 3)), put(X), put(m31(4, 2)),
        put(m31(4, 3)), put(X), pick(0, X, m31(4, 5)),
        pick(0, m31(4, 3), m211(4, 7, 3)), pick(0, X, m31(7, 4)), pick(0, X, m11(5, 7)),
    ] },
    // 244
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 1)),
        put(m31(4, 3)), put(X), put(X),
        put(m31(4, 3)), put(X), pick(0, X, m211(4, 5, 7)),
    ] },
    // 245
    Entry { tests: &[(5, 7)], cells: &[
        put(m211(4, 3, 1)), put(m31(4, 1)), put(m31(4, 1)),
        put(m31(4, 3)), put(X), put(X),
        put(m31(4, 3)), put(X), pick(0, X, m211(4, 5, 7)),
    ] },
    // 246
    Entry { tests: &[(1, 5), (5, 7)], cells: &[
        put(m31(4, 0)), pick(0, X, m71(4, 1)), pick(0, X, m277(4, 1, 5)),
        put(m31(4, 3)), put(X), put(X),
        put(m31(4, 3)), put(X), pick(1, X, m211(4, 5, 7)),
    ] },
    // 247
    Entry { tests: &[(1, 5), (5, 7)], cells: &[
        put(m31(4, 3)), put(X), pick(0, X, m211(4, 1, 5)),
        put(m31(4, 3)), put(X), put(X),
        put(m31(4, 3)), put(X), pick(1, X, m211(4, 5, 7)),
    ] },
    // 248
    Entry { tests: &[(7, 3), (5, 7)], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m31(4, 2)),
        pick(0, X, m71(4, 3)), put(X), pick(1, X, m71(4, 5)),
        pick(0, X, m277(4, 7, 3)), put(X), pick(1, X, m277(4, 5, 7)),
    ] },
    // 249
    Entry { tests: &[(7, 3), (5, 7)], cells: &[
        put(m31(4, 1)), put(m31(4, 1)), put(m31(4, 2)),
        put(X), put(X), pick(1, X, m71(4, 5)),
        pick(0, X, m211(4, 7, 3)), put(X), pick(1, X, m277(4, 5, 7)),
    ] },
    // 250
    Entry { tests: &[(7, 3), (5, 7)], cells: &[
        put(m31(4, 0)), put(X), put(m31(4, 2)),
        pick(0, X, m71(4, 3)), put(X), pick(1, X, m71(4, 5)),
        pick(0, X, m277(4, 7, 3)), put(X), pick(1, X, m277(4, 5, 7)),
    ] },
    // 251
    Entry { tests: &[(3, 1), (7, 3), (5, 7)], cells: &[
        pick(0, X, m277(4, 3, 1)), pick(0, X, m71(4, 1)), put(m31(4, 2)),
        pick(1, X, m71(4, 3)), put(X), pick(2, X, m71(4, 5)),
        pick(1, X, m211(4, 7, 3)), pick(1, X, m71(4, 7)), pick(2, X, m277(4, 5, 7)),
    ] },
    // 252
    Entry { tests: &[(7, 3), (5, 7)], cells: &[
        put(m31(4, 0)), put(m31(4, 1)), put(m31(4, 1)),
        pick(0, X, m71(4, 3)), put(X), put(X),
        pick(0, X, m277(4, 7, 3)), put(X), pick(1, X, m211(4, 5, 7)),
    ] },
    // 253
    Entry { tests: &[(7, 3), (5, 7)], cells: &[
        put(m31(4, 1)), put(m31(4, 1)), put(m31(4, 1)),
        put(X), put(X), put(X),
        pick(0, X, m211(4, 7, 3)), put(X), pick(1, X, m211(4, 5, 7)),
    ] },
    // 254
    Entry { tests: &[(1, 5), (7, 3), (5, 7)], cells: &[
        put(m31(4, 0)), pick(0, X, m71(4, 1)), pick(0, X, m277(4, 1, 5)),
        pick(1, X, m71(4, 3)), put(X), pick(2, X, m71(4, 5)),
        pick(1, X, m277(4, 7, 3)), pick(2, X, m71(4, 7)), pick(2, X, m211(4, 5, 7)),
    ] },
    // 255
    Entry { tests: &[(3, 1), (1, 5), (7, 3), (5, 7)], cells: &[
        pick(0, X, m211(4, 3, 1)), put(X), pick(1, X, m211(4, 1, 5)),
        put(X), put(X), put(X),
        pick(2, X, m211(4, 7, 3)), put(X), pick(3, X, m211(4, 5, 7)),
    ] },
];
