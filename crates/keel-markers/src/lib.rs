#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]

//! Copy/move capability markers.
//!
//! A type embeds exactly one marker as a private field to declare which of
//! duplication (clone) and relocation (move) it permits. The markers are
//! zero-size and purely type-level: they add no runtime state or cost, and
//! `Drop` on the adopter is never affected.
//!
//! | Marker             | Duplication | Relocation                  |
//! |--------------------|-------------|-----------------------------|
//! | [`NoClone`]        | rejected    | allowed                     |
//! | [`NoMove`]         | allowed     | rejected once pinned        |
//! | [`NoCloneNoMove`]  | rejected    | rejected once pinned        |
//!
//! ("Move-only with no restrictions" is every Rust type's default, so it
//! needs no marker.)
//!
//! Duplication is suppressed through the trait system: a field that is not
//! `Clone` makes `#[derive(Clone)]` on the adopter a compile error.
//! Relocation is suppressed through pinning: the `NoMove*` markers contain
//! [`core::marker::PhantomPinned`], so adopters are `!Unpin` and safe code
//! cannot move a pinned instance. Both violations surface as compile errors,
//! never as runtime failures.
//!
//! Adopt at most one marker per type; the profiles are mutually exclusive by
//! intent, and stacking them either repeats a restriction or contradicts a
//! derive you asked for.

mod no_clone;
mod no_clone_no_move;
mod no_move;

pub use no_clone::NoClone;
pub use no_clone_no_move::NoCloneNoMove;
pub use no_move::NoMove;
