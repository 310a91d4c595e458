//! Runtime-effect dispatch for the desktop host boundary.

use crate::{
    app_runtime::dispose_window_session,
    host::{persistence_effects, DesktopHostContext},
    reducer::RuntimeEffect,
    runtime_context::DesktopRuntimeContext,
};

pub(super) fn run_runtime_effect(
    host: DesktopHostContext,
    runtime: DesktopRuntimeContext,
    effect: RuntimeEffect,
) {
    match effect {
        RuntimeEffect::PersistTheme => persistence_effects::persist_theme(host, runtime),
        RuntimeEffect::DisposeWindow(instance_id) => {
            dispose_window_session(runtime.app_runtime, &instance_id);
        }
    }
}
