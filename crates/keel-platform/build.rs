//! Captures the identity of the rustc that compiles this crate.
//!
//! Emits `KEEL_RUSTC_VERSION` (release triple, empty when unidentifiable)
//! and a `keel_channel` cfg consumed by `Channel::CURRENT`. Failure to
//! identify the toolchain is not a build error: the crate degrades to
//! `Channel::Unknown` with no version.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=RUSTC");
    println!(
        "cargo:rustc-check-cfg=cfg(keel_channel, values(\"stable\", \"beta\", \"nightly\", \"dev\"))"
    );

    match rustc_identity() {
        Some((version, channel)) => {
            println!("cargo:rustc-env=KEEL_RUSTC_VERSION={version}");
            println!("cargo:rustc-cfg=keel_channel=\"{channel}\"");
        }
        None => {
            println!("cargo:rustc-env=KEEL_RUSTC_VERSION=");
        }
    }
}

/// Runs `$RUSTC --version` and parses e.g. `rustc 1.82.0-nightly (f6e511e 2024-10-15)`
/// into `("1.82.0", "nightly")`. Returns `None` for anything that does not
/// look like a rustc version banner.
fn rustc_identity() -> Option<(String, &'static str)> {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let output = Command::new(rustc).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let banner = String::from_utf8(output.stdout).ok()?;
    let tail = banner.trim().strip_prefix("rustc ")?;
    let token = tail.split_whitespace().next()?;

    let (release, suffix) = match token.split_once('-') {
        Some((release, suffix)) => (release, Some(suffix)),
        None => (token, None),
    };

    let mut parts = release.split('.');
    let numeric = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !(parts.clone().count() == 3 && parts.all(numeric)) {
        return None;
    }

    let channel = match suffix {
        None => "stable",
        Some(s) if s.starts_with("beta") => "beta",
        Some(s) if s.starts_with("nightly") => "nightly",
        Some(s) if s.starts_with("dev") => "dev",
        Some(_) => return None,
    };

    Some((release.to_string(), channel))
}
