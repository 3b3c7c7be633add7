#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]

//! Build-time environment classification.
//!
//! Three independent classification groups, each resolved exactly once per
//! build into an associated `CURRENT` constant:
//!
//! - [`Os`] — operating-system family of the compilation target.
//! - [`Channel`] — identity (release channel) and version of the compiling
//!   toolchain, captured by the build script.
//! - [`Arch`] — instruction-set architecture of the compilation target.
//!
//! Within each group exactly one variant holds; anything unrecognized
//! degrades to `Unknown` rather than failing the build, so downstream
//! `match`es stay exhaustive on targets this crate has never seen:
//!
//! ```
//! use keel_platform::Os;
//!
//! let sep = match Os::CURRENT {
//!     Os::Windows => '\\',
//!     _ => '/',
//! };
//! assert!(sep == '/' || sep == '\\');
//! ```
//!
//! Everything here is a `const`: there is no runtime detection, no state,
//! and no failure mode.

mod arch;
mod os;
mod toolchain;

pub use arch::Arch;
pub use os::Os;
pub use toolchain::Channel;
