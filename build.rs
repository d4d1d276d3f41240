//! Embeds the build version into the binary.
use std::process::Command;

fn main() {
    // SETUP_GEN_VERSION wins (release builds); otherwise use git describe.
    if let Ok(version) = std::env::var("SETUP_GEN_VERSION") {
        println!("cargo:rustc-env=SETUP_GEN_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        println!("cargo:rustc-env=SETUP_GEN_VERSION={version}");
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=SETUP_GEN_VERSION");
}
