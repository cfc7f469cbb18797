//! Build metadata for the startup banner

use std::process::Command;

fn main() {
    println!(
        "cargo:rustc-env=MOVIWEB_GIT_REV={}",
        git_rev().unwrap_or_else(|| "unreleased".to_string())
    );
    println!(
        "cargo:rustc-env=MOVIWEB_BUILD_TIME={}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "cargo:rustc-env=MOVIWEB_BUILD_PROFILE={}",
        std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string())
    );

    // No rerun-if-changed directives, so the timestamp refreshes every build
}

/// Working-tree revision from `git describe`, marked when dirty
fn git_rev() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    let rev = rev.trim();
    if rev.is_empty() {
        None
    } else {
        Some(rev.to_string())
    }
}
