use leptos::{create_effect, logging, spawn_local, Callable, Callback};

use crate::{host::DesktopHostContext, persistence, reducer::DesktopAction};

pub(super) fn install_boot_hydration(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    create_effect(move |_| {
        let prefs = host.prefs_store();
        spawn_local(async move {
            match persistence::load_theme(prefs.as_ref()).await {
                Ok(Some(theme_name)) => dispatch.call(DesktopAction::HydrateTheme { theme_name }),
                Ok(None) => {}
                Err(err) => logging::warn!("theme hydrate failed: {err}"),
            }
        });
    });
}
