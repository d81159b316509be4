use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowManifest {
    id: String,
    title: String,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct IconManifest {
    id: String,
    label: String,
    window: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    y: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
enum StartMenuAction {
    OpenWindow {
        window: String,
        #[serde(default)]
        refresh_weather: bool,
    },
    ShutDown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StartMenuManifest {
    id: String,
    label: String,
    #[serde(flatten)]
    action: StartMenuAction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShellManifest {
    schema_version: u32,
    #[serde(default)]
    boot_window: Option<String>,
    windows: Vec<WindowManifest>,
    #[serde(default)]
    icons: Vec<IconManifest>,
    #[serde(default)]
    start_menu: Vec<StartMenuManifest>,
}

fn require_window(windows: &BTreeSet<&str>, window: &str, referenced_by: &str) {
    if !windows.contains(window) {
        panic!("{referenced_by} references undeclared window `{window}`");
    }
}

fn validate(manifest: &ShellManifest) {
    if manifest.schema_version != 1 {
        panic!(
            "shell manifest schema mismatch: expected 1 found {}",
            manifest.schema_version
        );
    }

    let mut windows = BTreeSet::new();
    for window in &manifest.windows {
        if !windows.insert(window.id.as_str()) {
            panic!("duplicate window id `{}`", window.id);
        }
    }

    if let Some(boot) = &manifest.boot_window {
        require_window(&windows, boot, "boot_window");
    }

    let mut icons = BTreeSet::new();
    for icon in &manifest.icons {
        if !icons.insert(icon.id.as_str()) {
            panic!("duplicate icon id `{}`", icon.id);
        }
        require_window(&windows, &icon.window, &format!("icon `{}`", icon.id));
    }

    let mut entries = BTreeSet::new();
    for entry in &manifest.start_menu {
        if !entries.insert(entry.id.as_str()) {
            panic!("duplicate start menu entry `{}`", entry.id);
        }
        if let StartMenuAction::OpenWindow { window, .. } = &entry.action {
            require_window(&windows, window, &format!("start menu entry `{}`", entry.id));
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("shell.manifest.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: ShellManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&manifest);

    let json = serde_json::to_string_pretty(&manifest).expect("serialize shell catalog");
    let generated = format!(
        "/// Build-time generated shell catalog JSON.\n\
pub const SHELL_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("shell_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
