// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::collections::HashMap;

crate::define_id! {
    /// Test ID type for macro verification.
    pub struct TestId;
}

#[test]
fn define_id_hash_map_lookup() {
    let mut map = HashMap::new();
    map.insert(TestId::new("k"), 42);
    assert_eq!(map.get("k"), Some(&42));
}

#[test]
fn define_id_display_and_eq() {
    let id = TestId::from("run-7");
    assert_eq!(id.to_string(), "run-7");
    assert_eq!(id, "run-7");
}

#[yare::parameterized(
    truncates = { "abcdefghijklmnop", 8, "abcdefgh" },
    shorter = { "abc", 8, "abc" },
    exact = { "abcdefgh", 8, "abcdefgh" },
)]
fn define_id_short(input: &str, n: usize, expected: &str) {
    assert_eq!(TestId::new(input).short(n), expected);
}

#[test]
fn short_respects_char_boundaries() {
    // "→" is three bytes; cutting inside it must back off
    assert_eq!(short("a→b", 2), "a");
    assert_eq!(short("a→b", 4), "a→");
}

#[test]
fn uuid_gen_creates_unique_ids() {
    let id_gen = UuidIdGen;
    let id1 = id_gen.next();
    let id2 = id_gen.next();
    assert_ne!(id1, id2);
    assert_eq!(id1.len(), 36);
}

#[test]
fn sequential_gen_creates_predictable_ids() {
    let id_gen = SequentialIdGen::new("rec");
    assert_eq!(id_gen.next(), "rec-1");
    assert_eq!(id_gen.next(), "rec-2");
    assert_eq!(id_gen.next(), "rec-3");
}

#[test]
fn sequential_gen_is_cloneable_and_shared() {
    let id_gen1 = SequentialIdGen::new("shared");
    let id_gen2 = id_gen1.clone();
    assert_eq!(id_gen1.next(), "shared-1");
    assert_eq!(id_gen2.next(), "shared-2");
    assert_eq!(id_gen1.next(), "shared-3");
}
