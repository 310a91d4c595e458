//! App registry: manifest metadata compiled in by `build.rs`, bound to mount functions by id.

mod placeholders;

use std::sync::OnceLock;

use desktop_app_contract::{AppModule, ApplicationId, WindowSize};
use leptos::logging;
use serde::Deserialize;
use thiserror::Error;

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

#[derive(Debug, Clone, Deserialize)]
struct CatalogWindowDefaults {
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogEntry {
    app_id: String,
    display_name: String,
    icon_glyph: String,
    show_on_desktop: bool,
    desktop_order: u32,
    window_defaults: CatalogWindowDefaults,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures turning the generated catalog into a registry.
pub enum CatalogError {
    /// The catalog JSON does not match the manifest shape.
    #[error("app catalog is malformed: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone)]
/// Everything the shell needs to show an icon for and open an app.
pub struct AppDescriptor {
    /// Unique app id.
    pub id: ApplicationId,
    /// Icon label and window title.
    pub display_name: String,
    /// Emoji glyph drawn as the desktop icon.
    pub icon_glyph: String,
    /// Size requested when the app opens, before clamping.
    pub default_size: WindowSize,
    /// Whether the app gets a desktop icon.
    pub show_on_desktop: bool,
    /// Icon sort key.
    pub desktop_order: u32,
    /// Content factory.
    pub module: AppModule,
}

#[derive(Debug, Clone, Default)]
/// Immutable ordered set of app descriptors.
pub struct AppRegistry {
    descriptors: Vec<AppDescriptor>,
}

impl AppRegistry {
    /// Creates a registry, keeping the first descriptor for any repeated id.
    pub fn new(descriptors: Vec<AppDescriptor>) -> Self {
        let mut unique: Vec<AppDescriptor> = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            if unique.iter().any(|d| d.id == descriptor.id) {
                logging::warn!("duplicate app descriptor `{}` ignored", descriptor.id);
                continue;
            }
            unique.push(descriptor);
        }
        Self {
            descriptors: unique,
        }
    }

    /// Joins catalog metadata with mount functions.
    ///
    /// Entries without a module, or modules without an entry, are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] when `raw` is not a manifest list.
    pub fn from_catalog_json(
        raw: &str,
        modules: &[(&str, AppModule)],
    ) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> =
            serde_json::from_str(raw).map_err(|err| CatalogError::Malformed(err.to_string()))?;

        for (module_id, _) in modules {
            if !entries.iter().any(|entry| entry.app_id == *module_id) {
                logging::warn!("app module `{module_id}` has no manifest; skipped");
            }
        }

        let mut descriptors = Vec::with_capacity(entries.len());
        for entry in entries {
            let Some((_, module)) = modules.iter().find(|(id, _)| *id == entry.app_id) else {
                logging::warn!("app manifest `{}` has no module; skipped", entry.app_id);
                continue;
            };
            let id = match ApplicationId::new(entry.app_id) {
                Ok(id) => id,
                Err(err) => {
                    logging::warn!("{err}; skipped");
                    continue;
                }
            };
            descriptors.push(AppDescriptor {
                id,
                display_name: entry.display_name,
                icon_glyph: entry.icon_glyph,
                default_size: WindowSize::new(
                    entry.window_defaults.width,
                    entry.window_defaults.height,
                ),
                show_on_desktop: entry.show_on_desktop,
                desktop_order: entry.desktop_order,
                module: *module,
            });
        }
        descriptors.sort_by_key(|descriptor| descriptor.desktop_order);
        Ok(Self::new(descriptors))
    }

    /// Looks up a descriptor by id.
    pub fn get(&self, app_id: &ApplicationId) -> Option<&AppDescriptor> {
        self.descriptors.iter().find(|d| &d.id == app_id)
    }

    /// All descriptors in icon order.
    pub fn iter(&self) -> impl Iterator<Item = &AppDescriptor> + '_ {
        self.descriptors.iter()
    }

    /// Descriptors that get a desktop icon, in icon order.
    pub fn desktop_icons(&self) -> impl Iterator<Item = &AppDescriptor> + '_ {
        self.iter().filter(|descriptor| descriptor.show_on_desktop)
    }
}

fn bound_modules() -> [(&'static str, AppModule); 7] {
    [
        (
            "system.my-computer",
            AppModule::new(placeholders::mount_my_computer_app),
        ),
        (
            "system.my-documents",
            AppModule::new(placeholders::mount_my_documents_app),
        ),
        (
            "system.internet-explorer",
            AppModule::new(placeholders::mount_internet_explorer_app),
        ),
        (
            "system.recycle-bin",
            AppModule::new(placeholders::mount_recycle_bin_app),
        ),
        (
            "media.media-player",
            AppModule::new(placeholders::mount_media_player_app),
        ),
        (
            desktop_app_playlist_manager::APP_ID,
            AppModule::new(desktop_app_playlist_manager::mount_playlist_manager_app),
        ),
        (
            desktop_app_radio_player::APP_ID,
            AppModule::new(desktop_app_radio_player::mount_radio_player_app),
        ),
    ]
}

/// Returns the process-wide registry built from the generated manifest catalog.
pub fn app_registry() -> &'static AppRegistry {
    static REGISTRY: OnceLock<AppRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        AppRegistry::from_catalog_json(APP_MANIFEST_CATALOG_JSON, &bound_modules()).unwrap_or_else(
            |err| {
                logging::warn!("{err}; desktop starts without apps");
                AppRegistry::default()
            },
        )
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn generated_catalog_binds_every_manifest() {
        let registry = app_registry();
        let ids: Vec<&str> = registry.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "system.my-computer",
                "system.my-documents",
                "system.internet-explorer",
                "system.recycle-bin",
                "media.media-player",
                "media.playlist-manager",
                "media.radio-player",
            ]
        );
    }

    #[test]
    fn radio_player_is_not_a_desktop_icon() {
        let icons: Vec<&str> = app_registry()
            .desktop_icons()
            .map(|d| d.display_name.as_str())
            .collect();
        assert_eq!(
            icons,
            vec![
                "My Computer",
                "My Documents",
                "Internet Explorer",
                "Recycle Bin",
                "Media Player",
                "Playlist Manager",
            ]
        );
    }

    #[test]
    fn builtin_defaults_match_the_manifests() {
        let documents = app_registry()
            .get(&ApplicationId::trusted("system.my-documents"))
            .expect("documents registered");
        assert_eq!(documents.icon_glyph, "📁");
        assert_eq!(documents.default_size, WindowSize::new(300, 200));
        assert_eq!(
            app_registry()
                .get(&ApplicationId::trusted("media.radio-player"))
                .map(|d| d.default_size),
            Some(WindowSize::new(376, 535))
        );
    }

    #[test]
    fn unbound_manifests_and_orphan_modules_are_skipped() {
        let raw = r#"[
            {"app_id":"test.bound","display_name":"Bound","icon_glyph":"B","show_on_desktop":true,
             "desktop_order":2,"window_defaults":{"width":300,"height":200}},
            {"app_id":"test.unbound","display_name":"Unbound","icon_glyph":"U","show_on_desktop":true,
             "desktop_order":1,"window_defaults":{"width":300,"height":200}}
        ]"#;
        let module = AppModule::new(placeholders::mount_my_computer_app);
        let registry =
            AppRegistry::from_catalog_json(raw, &[("test.bound", module), ("test.orphan", module)])
                .expect("catalog parses");

        let ids: Vec<&str> = registry.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["test.bound"]);
        assert!(registry
            .get(&ApplicationId::trusted("test.unbound"))
            .is_none());
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        let err = AppRegistry::from_catalog_json("{}", &[]).expect_err("object is not a list");
        assert!(matches!(err, CatalogError::Malformed(_)));
    }
}
