//! Identity of the toolchain that compiled the current build.
//!
//! Rust has a single compiler, so "compiler vendor" re-expresses as the
//! release channel of the rustc in use. The build script runs
//! `$RUSTC --version` once and bakes the result in; nothing here touches the
//! environment at runtime.

use std::fmt;

/// Release channel of the compiling rustc, resolved at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    Stable,
    Beta,
    Nightly,
    /// Locally built toolchains report `-dev`.
    Dev,
    /// The toolchain could not be identified. [`Channel::VERSION`] is empty
    /// in this case; the build still succeeds.
    Unknown,
}

impl Channel {
    /// Channel of the toolchain that compiled this crate.
    pub const CURRENT: Channel = if cfg!(keel_channel = "stable") {
        Channel::Stable
    } else if cfg!(keel_channel = "beta") {
        Channel::Beta
    } else if cfg!(keel_channel = "nightly") {
        Channel::Nightly
    } else if cfg!(keel_channel = "dev") {
        Channel::Dev
    } else {
        Channel::Unknown
    };

    /// Release triple of the compiling rustc, e.g. `"1.82.0"`. Empty when
    /// the toolchain could not be identified; prefer [`Channel::version`]
    /// unless an infallible `&str` is needed.
    pub const VERSION: &'static str = env!("KEEL_RUSTC_VERSION");

    /// All channels.
    pub const ALL: &'static [Channel] = &[
        Channel::Stable,
        Channel::Beta,
        Channel::Nightly,
        Channel::Dev,
        Channel::Unknown,
    ];

    /// [`Channel::VERSION`] as an option, `None` when unidentified.
    pub const fn version() -> Option<&'static str> {
        if Self::VERSION.is_empty() {
            None
        } else {
            Some(Self::VERSION)
        }
    }

    /// Lower-case channel name, matching the `-<channel>` suffix rustc
    /// reports (stable reports no suffix).
    pub const fn name(self) -> &'static str {
        match self {
            Channel::Stable => "stable",
            Channel::Beta => "beta",
            Channel::Nightly => "nightly",
            Channel::Dev => "dev",
            Channel::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_lists_every_channel_once() {
        assert_eq!(Channel::ALL.len(), 5);
        let unique: HashSet<&str> = Channel::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(unique.len(), Channel::ALL.len());
    }

    #[test]
    fn version_option_tracks_emptiness() {
        match Channel::version() {
            Some(v) => assert_eq!(v, Channel::VERSION),
            None => assert!(Channel::VERSION.is_empty()),
        }
    }

    #[test]
    fn display_matches_name() {
        for channel in Channel::ALL {
            assert_eq!(channel.to_string(), channel.name());
        }
    }
}
