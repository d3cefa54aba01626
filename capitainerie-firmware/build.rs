//! Build script for capitainerie-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Checks the logo asset has the size the renderer expects

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

/// 240 x 240 pixels, two bytes each
const LOGO_BYTES: u64 = 240 * 240 * 2;

fn main() {
    setup_linker();
    check_logo();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Fail early on a logo that would be rejected at runtime
fn check_logo() {
    println!("cargo:rerun-if-changed=assets/logo.raw");

    let size = match fs::metadata("assets/logo.raw") {
        Ok(meta) => meta.len(),
        Err(e) => panic!("assets/logo.raw not readable: {}", e),
    };
    if size != LOGO_BYTES {
        panic!(
            "assets/logo.raw is {} bytes, expected {} (240x240 RGB565, big-endian)",
            size, LOGO_BYTES
        );
    }
}
