// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core editing rules with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) to ensure testability.
//!
//! # Modules
//!
//! - [`editing`]: Meme editing types ([`ContrastPercent`](editing::ContrastPercent),
//!   [`TextColor`](editing::TextColor), [`TextPosition`](editing::TextPosition))

pub mod editing;
