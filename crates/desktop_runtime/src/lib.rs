//! Window manager for the nostalgia desktop: geometry clamp, app registry, window store,
//! reducer, theme table, and the Leptos shell that renders them.

pub mod app_runtime;
pub mod apps;
pub mod clock;
pub mod components;
mod effect_executor;
pub mod geometry;
mod host;
pub mod model;
pub mod persistence;
pub mod reducer;
mod runtime_context;
pub mod theme;
pub mod window_store;

pub use apps::{app_registry, AppDescriptor, AppRegistry, CatalogError};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use theme::{ThemeDescriptor, ThemeName};
pub use window_store::WindowStore;
