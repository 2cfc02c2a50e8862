//! `librjs` is the library that powers the rjs notebook.
//!
//! `rjs` is a rust rendition of a JavaScript language cheat sheet. Instead of
//! a script read top-to-bottom, the material is a set of runnable topics that
//! print one line per demonstration. `rjs` differs from the sheet it was
//! ported from in a number of ways namely:
//! - `rjs` models dynamic values with a `Value` sum type and a queryable
//!   `type_of` tag (the sheet leans on the host language's `typeof`)
//! - `rjs` models prototypal delegation as an explicit own-properties-then-
//!   parent lookup over a shared reference (the sheet relies on the runtime's
//!   implicit prototype chain)
//! - `rjs` collapses the sheet's duplicated sections into a single topic set
#![warn(clippy::pedantic)]

pub mod core;
