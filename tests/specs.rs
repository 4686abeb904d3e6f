// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Black-box specs for the `jsr` binary.

#[path = "specs/cli/mod.rs"]
mod cli;
#[path = "specs/prelude.rs"]
mod prelude;
