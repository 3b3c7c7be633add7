//! End-to-end tests through the umbrella crate: both facilities used
//! together, the way a dependent would.

use keel::{Arch, Channel, NoCloneNoMove, Os};
use std::sync::OnceLock;

/// Build-time host description, singular by profile: lives behind a fixed
/// accessor and is never cloned or relocated.
struct HostProfile {
    os: Os,
    arch: Arch,
    channel: Channel,
    _marker: NoCloneNoMove,
}

static HOST: OnceLock<HostProfile> = OnceLock::new();

fn host() -> &'static HostProfile {
    HOST.get_or_init(|| HostProfile {
        os: Os::CURRENT,
        arch: Arch::CURRENT,
        channel: Channel::CURRENT,
        _marker: NoCloneNoMove::new(),
    })
}

#[test]
fn host_profile_is_singular_and_classified() {
    assert!(std::ptr::eq(host(), host()));
    assert_eq!(host().os, Os::CURRENT);
    assert_eq!(host().arch, Arch::CURRENT);
    assert_eq!(host().channel, Channel::CURRENT);
}

#[test]
fn facade_and_component_paths_agree() {
    assert_eq!(Os::CURRENT, keel::platform::Os::CURRENT);
    assert_eq!(Arch::CURRENT, keel::platform::Arch::CURRENT);
    assert_eq!(Channel::VERSION, keel::platform::Channel::VERSION);
}

#[test]
fn classification_selects_an_implementation() {
    // The canonical consumption pattern: exhaustive branch per group, with
    // Unknown arms, so the selection is total on any target.
    let loader = match Os::CURRENT {
        Os::Windows => "win32",
        Os::MacOs | Os::Ios | Os::VisionOs => "darwin",
        Os::Android | Os::Linux => "posix",
        Os::Web => "wasm",
        Os::Unknown => "generic",
    };
    let lanes = match Arch::CURRENT {
        Arch::X86_64 | Arch::Arm64 => 64,
        Arch::X86 | Arch::Arm => 32,
        Arch::Unknown => 0,
    };
    assert!(!loader.is_empty());
    assert_eq!(lanes, Arch::CURRENT.bits());
}
