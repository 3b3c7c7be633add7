//! Instruction-set architecture of the compilation target.

use std::fmt;

/// CPU architecture family, resolved at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Arch {
    /// 64-bit Intel/AMD.
    X86_64,
    /// 32-bit Intel/AMD.
    X86,
    /// 64-bit ARM (aarch64).
    Arm64,
    /// 32-bit ARM.
    Arm,
    Unknown,
}

impl Arch {
    /// The target's architecture family, resolved once per build.
    ///
    /// `target_arch` keys are already mutually exclusive, so unlike
    /// [`crate::Os`] there is no layered-signal ordering to pin; the 64-bit
    /// variants are still listed first for readability.
    pub const CURRENT: Arch = if cfg!(target_arch = "x86_64") {
        Arch::X86_64
    } else if cfg!(target_arch = "aarch64") {
        Arch::Arm64
    } else if cfg!(target_arch = "x86") {
        Arch::X86
    } else if cfg!(target_arch = "arm") {
        Arch::Arm
    } else {
        Arch::Unknown
    };

    /// All families.
    pub const ALL: &'static [Arch] = &[
        Arch::X86_64,
        Arch::X86,
        Arch::Arm64,
        Arch::Arm,
        Arch::Unknown,
    ];

    /// Canonical rustc name, matching `std::env::consts::ARCH` for every
    /// named variant.
    pub const fn name(self) -> &'static str {
        match self {
            Arch::X86_64 => "x86_64",
            Arch::X86 => "x86",
            Arch::Arm64 => "aarch64",
            Arch::Arm => "arm",
            Arch::Unknown => "unknown",
        }
    }

    /// Register width in bits; `0` for [`Arch::Unknown`].
    pub const fn bits(self) -> u32 {
        match self {
            Arch::X86_64 | Arch::Arm64 => 64,
            Arch::X86 | Arch::Arm => 32,
            Arch::Unknown => 0,
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
