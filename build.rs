use std::env;
use std::fs;
use std::io;
use std::path::Path;
use toml::Value;

/// Renders `APP_METADATA_<KEY>` string constants for `include!`.
fn render_constants(entries: &[(String, String)]) -> String {
    entries
        .iter()
        .map(|(key, value)| format!("#[allow(unused)]\npub const APP_METADATA_{}: &str = {:?};\n", key.to_uppercase(), value))
        .collect()
}

fn package_metadata(manifest: &Value) -> Vec<(String, String)> {
    manifest
        .get("package")
        .and_then(|pkg| pkg.get("metadata"))
        .and_then(|meta| meta.as_table())
        .map(|table| {
            table
                .iter()
                .filter_map(|(key, value)| value.as_str().map(|v| (key.clone(), v.to_string())))
                .collect()
        })
        .unwrap_or_default()
}

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=Cargo.toml");

    let manifest: Value = toml::from_str(&fs::read_to_string("Cargo.toml")?)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let mut entries = vec![
        ("NAME".to_string(), env::var("CARGO_PKG_NAME").unwrap_or_else(|_| "poolside".to_string())),
        ("VERSION".to_string(), env::var("CARGO_PKG_VERSION").unwrap_or_default()),
        ("DESCRIPTION".to_string(), env::var("CARGO_PKG_DESCRIPTION").unwrap_or_default()),
    ];
    entries.extend(package_metadata(&manifest));

    let out_dir = env::var("OUT_DIR").map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?;
    fs::write(Path::new(&out_dir).join("app_metadata.rs"), render_constants(&entries))
}
