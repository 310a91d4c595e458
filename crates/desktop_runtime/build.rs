use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowDefaults {
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppManifest {
    schema_version: u32,
    app_id: String,
    display_name: String,
    icon_glyph: String,
    show_on_desktop: bool,
    desktop_order: u32,
    window_defaults: WindowDefaults,
}

#[derive(Debug, Deserialize)]
struct BuiltinAppsFile {
    apps: Vec<AppManifest>,
}

fn app_manifest_paths(root: &Path) -> Vec<PathBuf> {
    ["playlist_manager", "radio_player"]
        .iter()
        .map(|name| {
            root.join("..")
                .join("apps")
                .join(name)
                .join("app.manifest.toml")
        })
        .collect()
}

fn read_manifest_source(path: &Path) -> String {
    println!("cargo:rerun-if-changed={}", path.display());
    fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()))
}

fn check_manifest(path: &Path, manifest: &AppManifest) {
    if manifest.schema_version != 1 {
        panic!(
            "manifest schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }
    if manifest.window_defaults.width <= 0 || manifest.window_defaults.height <= 0 {
        panic!(
            "manifest {} declares a non-positive default size for {}",
            path.display(),
            manifest.app_id
        );
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let mut manifests = Vec::<AppManifest>::new();

    let builtin_path = crate_root.join("builtin_apps.toml");
    let builtin: BuiltinAppsFile = toml::from_str(&read_manifest_source(&builtin_path))
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", builtin_path.display()));
    for manifest in builtin.apps {
        check_manifest(&builtin_path, &manifest);
        manifests.push(manifest);
    }

    for path in app_manifest_paths(&crate_root) {
        let manifest: AppManifest = toml::from_str(&read_manifest_source(&path))
            .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
        check_manifest(&path, &manifest);
        manifests.push(manifest);
    }

    if let Some(dup) = manifests
        .iter()
        .enumerate()
        .find(|(i, m)| manifests[..*i].iter().any(|prev| prev.app_id == m.app_id))
    {
        panic!("duplicate app id `{}` in app manifests", dup.1.app_id);
    }

    manifests.sort_by(|a, b| {
        a.desktop_order
            .cmp(&b.desktop_order)
            .then_with(|| a.app_id.cmp(&b.app_id))
    });
    let json = serde_json::to_string_pretty(&manifests).expect("serialize app manifest catalog");
    let generated = format!(
        "/// Build-time generated app manifest catalog JSON.\n\
pub const APP_MANIFEST_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
