#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]

//! Umbrella crate over the two `keel` facilities. Depend on this for both,
//! or on [`keel-platform`](keel_platform) / [`keel-markers`](keel_markers)
//! individually; the facilities share nothing.
//!
//! ```
//! use keel::{Arch, NoClone, Os};
//!
//! // Select an implementation at build time; Unknown keeps the match total.
//! let page_size_hint = match Os::CURRENT {
//!     Os::Windows => 64 * 1024,
//!     _ => 4 * 1024,
//! };
//! assert!(page_size_hint >= 4 * 1024);
//! assert!(Arch::CURRENT.bits() <= 64);
//!
//! // Declare a capability profile by embedding a marker.
//! struct Session {
//!     token: u64,
//!     _marker: NoClone,
//! }
//! let session = Session { token: 9, _marker: NoClone::new() };
//! let moved = session;
//! assert_eq!(moved.token, 9);
//! ```

pub use keel_markers as markers;
pub use keel_platform as platform;

pub use keel_markers::{NoClone, NoCloneNoMove, NoMove};
pub use keel_platform::{Arch, Channel, Os};
