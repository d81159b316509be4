//! Declared shell contents: window surfaces, desktop icons, and start-menu entries.
//!
//! The built-in catalog comes from `shell.manifest.toml`, validated and converted to JSON by the
//! build script.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    model::{
        default_icon_position, DesktopIcon, DesktopState, IconId, Rect, StartMenuAction,
        StartMenuEntry, WindowId, WindowRecord, DEFAULT_ICON_SIZE,
    },
    registry::WindowRegistry,
};

include!(concat!(env!("OUT_DIR"), "/shell_catalog_generated.rs"));

pub const SHELL_CATALOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowManifest {
    pub id: WindowId,
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconManifest {
    pub id: IconId,
    pub label: String,
    pub window: WindowId,
    #[serde(default)]
    pub x: Option<i32>,
    #[serde(default)]
    pub y: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellCatalog {
    pub schema_version: u32,
    #[serde(default)]
    pub boot_window: Option<WindowId>,
    pub windows: Vec<WindowManifest>,
    #[serde(default)]
    pub icons: Vec<IconManifest>,
    #[serde(default)]
    pub start_menu: Vec<StartMenuEntry>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("failed to parse shell catalog: {0}")]
    Parse(String),
    #[error("unsupported shell catalog schema version {0}")]
    SchemaVersion(u32),
    #[error("duplicate {kind} id `{id}`")]
    DuplicateId { kind: &'static str, id: String },
    #[error("{referenced_by} references undeclared window `{window}`")]
    UnknownWindow {
        referenced_by: String,
        window: WindowId,
    },
}

impl ShellCatalog {
    /// Catalog embedded at build time.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(SHELL_CATALOG_JSON)
    }

    /// Parses and validates a catalog payload.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Self =
            serde_json::from_str(raw).map_err(|err| CatalogError::Parse(err.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.schema_version != SHELL_CATALOG_SCHEMA_VERSION {
            return Err(CatalogError::SchemaVersion(self.schema_version));
        }

        let mut windows = BTreeSet::new();
        for window in &self.windows {
            if !windows.insert(&window.id) {
                return Err(CatalogError::DuplicateId {
                    kind: "window",
                    id: window.id.to_string(),
                });
            }
        }
        let require = |window: &WindowId, referenced_by: String| {
            if windows.contains(window) {
                Ok(())
            } else {
                Err(CatalogError::UnknownWindow {
                    referenced_by,
                    window: window.clone(),
                })
            }
        };

        if let Some(boot) = &self.boot_window {
            require(boot, "boot_window".to_string())?;
        }

        let mut icons = BTreeSet::new();
        for icon in &self.icons {
            if !icons.insert(&icon.id) {
                return Err(CatalogError::DuplicateId {
                    kind: "icon",
                    id: icon.id.to_string(),
                });
            }
            require(&icon.window, format!("icon `{}`", icon.id))?;
        }

        let mut entries = BTreeSet::new();
        for entry in &self.start_menu {
            if !entries.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    kind: "start menu entry",
                    id: entry.id.clone(),
                });
            }
            if let StartMenuAction::OpenWindow { window, .. } = &entry.action {
                require(window, format!("start menu entry `{}`", entry.id))?;
            }
        }
        Ok(())
    }

    /// Builds the initial desktop: every window closed at its declared geometry, icons laid out
    /// down the left edge unless the catalog places them.
    pub fn initial_state(&self) -> DesktopState {
        let windows = self
            .windows
            .iter()
            .map(|w| {
                WindowRecord::new(
                    w.id.clone(),
                    w.title.clone(),
                    Rect::new(w.x, w.y, w.width, w.height),
                )
            })
            .collect();
        let icons = self
            .icons
            .iter()
            .enumerate()
            .map(|(index, icon)| {
                let fallback = default_icon_position(index);
                DesktopIcon {
                    id: icon.id.clone(),
                    label: icon.label.clone(),
                    window_id: icon.window.clone(),
                    rect: Rect::new(
                        icon.x.unwrap_or(fallback.x),
                        icon.y.unwrap_or(fallback.y),
                        DEFAULT_ICON_SIZE,
                        DEFAULT_ICON_SIZE,
                    ),
                }
            })
            .collect();

        DesktopState {
            registry: WindowRegistry::new(windows),
            icons,
            start_menu: self.start_menu.clone(),
            ..DesktopState::default()
        }
    }
}
