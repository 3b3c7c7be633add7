//! Operating-system family of the compilation target.

use std::fmt;

/// Operating-system family, resolved at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Os {
    Windows,
    MacOs,
    Ios,
    VisionOs,
    Android,
    Linux,
    /// WebAssembly targets, including Emscripten.
    Web,
    /// No recognized OS signal. Still a valid classification: downstream
    /// `match`es keep an `Unknown` arm instead of breaking on new targets.
    Unknown,
}

impl Os {
    /// The target's OS family, resolved once per build.
    ///
    /// The chain is ordered by signal specificity and is pinned here as
    /// configuration: `wasm` before any OS key (Emscripten also reports a
    /// unix-flavored OS), `android` before `linux` (Android layers on a
    /// Linux kernel), and the Apple mobile systems before `macos`. First
    /// match wins; no match resolves to [`Os::Unknown`].
    pub const CURRENT: Os = if cfg!(target_family = "wasm") {
        Os::Web
    } else if cfg!(target_os = "android") {
        Os::Android
    } else if cfg!(target_os = "ios") {
        Os::Ios
    } else if cfg!(target_os = "visionos") {
        Os::VisionOs
    } else if cfg!(target_os = "macos") {
        Os::MacOs
    } else if cfg!(target_os = "windows") {
        Os::Windows
    } else if cfg!(target_os = "linux") {
        Os::Linux
    } else {
        Os::Unknown
    };

    /// All families, in precedence order.
    pub const ALL: &'static [Os] = &[
        Os::Web,
        Os::Android,
        Os::Ios,
        Os::VisionOs,
        Os::MacOs,
        Os::Windows,
        Os::Linux,
        Os::Unknown,
    ];

    /// Lower-case family name, matching `std::env::consts::OS` for every
    /// named desktop/mobile variant.
    pub const fn name(self) -> &'static str {
        match self {
            Os::Windows => "windows",
            Os::MacOs => "macos",
            Os::Ios => "ios",
            Os::VisionOs => "visionos",
            Os::Android => "android",
            Os::Linux => "linux",
            Os::Web => "web",
            Os::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_lists_every_family_once() {
        assert_eq!(Os::ALL.len(), 8);
        let unique: HashSet<&str> = Os::ALL.iter().map(|os| os.name()).collect();
        assert_eq!(unique.len(), Os::ALL.len());
    }

    #[test]
    fn display_matches_name() {
        for os in Os::ALL {
            assert_eq!(os.to_string(), os.name());
        }
    }
}
