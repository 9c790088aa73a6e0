//! Adapter utilities for the `loopview` crate.
//!
//! `loopview` is UI-agnostic and only knows the [`loopview::DataSource`] capability. This crate
//! provides the two ready-made data sources: index-driven ([`IndexSource`]) and list-driven
//! ([`ListSource`]).
//!
//! It also carries optional conveniences that are not part of the renderer itself. Nothing in
//! `loopview` depends on them, and a host can ignore them entirely:
//!
//! - Scroll anchoring across data changes ([`ScrollAnchor`])
//! - Offset tweens ([`Tween`]) driven by a frame [`Controller`]
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod anchor;
mod controller;
mod source;
mod tween;

#[cfg(test)]
mod tests;

pub use anchor::{ScrollAnchor, apply_anchor, capture_first_visible_anchor};
pub use controller::Controller;
pub use source::{IndexSource, ListSource};
pub use tween::{Easing, Tween};
