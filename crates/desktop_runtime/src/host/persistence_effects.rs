use leptos::{logging, spawn_local, SignalWithUntracked};

use crate::{host::DesktopHostContext, persistence, runtime_context::DesktopRuntimeContext};

pub(super) fn persist_theme(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    let theme = runtime.state.with_untracked(|state| state.theme);
    let prefs = host.prefs_store();
    spawn_local(async move {
        if let Err(err) = persistence::persist_theme(prefs.as_ref(), theme).await {
            logging::warn!("persist theme failed: {err}");
        }
    });
}
