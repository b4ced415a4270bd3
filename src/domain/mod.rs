//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains some of:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching the feed
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `state.rs` — State containers with explicit transitions
//! - `client.rs` — Sub-client with HTTP methods

pub mod exchange;
pub mod price;
pub mod selector;
pub mod swap_form;
pub mod token;
