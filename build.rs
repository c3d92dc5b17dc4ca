//! Build script for spotsafe.
//!
//! Copies `.env.example` into the local data directory so a configuration
//! template sits next to where `.env` is read from:
//! - Linux: `~/.local/share/spotsafe/.env.example`
//! - macOS: `~/Library/Application Support/spotsafe/.env.example`
//! - Windows: `%LOCALAPPDATA%/spotsafe/.env.example`
//!
//! Failing to copy only emits a cargo warning; the build itself never fails
//! because of the template.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    if !env_example_path.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
        return Ok(());
    }

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spotsafe");

    let copied = fs::create_dir_all(&out_dir)
        .and_then(|_| fs::copy(&env_example_path, out_dir.join(".env.example")));
    if let Err(e) = copied {
        println!(
            "cargo:warning=could not copy .env.example to {}: {}",
            out_dir.display(),
            e
        );
    }

    Ok(())
}
