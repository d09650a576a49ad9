//! Build script for vibra-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates vibration.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use vibra_core::config::{parse_config, ParseError};
use vibra_core::{DEFAULT_VIBRATION_MS, MAX_PATTERN_LEN};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate vibration.toml so a bad config fails the build, not the boot
///
/// The file must be valid TOML and must also be readable by the firmware's
/// own `parse_config`, which only understands a subset of TOML.
fn validate_config() {
    println!("cargo:rerun-if-changed=vibration.toml");

    let config_path = Path::new("vibration.toml");
    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => panic!("vibration.toml: cannot read file: {e}"),
    };

    if let Err(e) = content.parse::<toml::Table>() {
        panic!("vibration.toml: invalid TOML: {e}");
    }

    match parse_config(&content) {
        Ok(config) => println!(
            "cargo:warning=vibration.toml: default={}ms max={}ms pattern={:?}",
            config.default_duration_ms,
            config.max_duration_ms,
            config.demo_pattern.as_slice()
        ),
        Err(ParseError::InvalidSection) => {
            panic!("vibration.toml: malformed [section] header")
        }
        Err(ParseError::InvalidValue) => panic!(
            "vibration.toml: default_ms/max_ms must be plain decimal integers \
             (no underscores, hex or signs) and pattern must be an array"
        ),
        Err(ParseError::InvalidPattern(reason)) => panic!(
            "vibration.toml: pattern must be a single-line array of non-negative \
             integers with at most {MAX_PATTERN_LEN} entries ({reason:?})"
        ),
        Err(ParseError::Inconsistent) => panic!(
            "vibration.toml: default_ms exceeds max_ms (an absent default_ms \
             means {DEFAULT_VIBRATION_MS} ms)"
        ),
    }
}
