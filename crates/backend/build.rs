use std::env;
use std::fs;
use std::path::Path;

/// Copies the workspace `config.toml` next to the built gateway binary.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let profile = env::var("PROFILE").expect("PROFILE is set by cargo");

    // OUT_DIR is target/<profile>/build/backend-xxx/out
    let Some(target_dir) = Path::new(&out_dir).ancestors().find(|p| p.ends_with(&profile)) else {
        println!("cargo:warning=target profile directory not found, config.toml not copied");
        return;
    };

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("backend lives in crates/backend");
    let source_config = workspace_root.join("config.toml");

    if !source_config.exists() {
        println!("cargo:warning=no config.toml at {:?}, the gateway will use its embedded default", source_config);
        return;
    }
    let dest_config = target_dir.join("config.toml");
    if let Err(e) = fs::copy(&source_config, &dest_config) {
        panic!("failed to copy config.toml: {e}");
    }
}
