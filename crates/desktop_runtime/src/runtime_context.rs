//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, runtime effect queue, per-window resource
//! sessions, and host bootstrap wiring. UI composition stays in [`crate::components`].

use leptos::*;
use platform_host::{HostServices, UserSession};

use crate::{
    app_runtime::{sync_runtime_sessions, AppRuntimeState},
    apps::{app_registry, AppRegistry},
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Signed-in user the desktop was opened for.
    pub session: StoredValue<UserSession>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag/resize interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Per-window resource sessions.
    pub app_runtime: RwSignal<AppRuntimeState>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// App registry backing the desktop icons.
    pub fn registry(&self) -> &'static AppRegistry {
        app_registry()
    }
}

/// Applies one action to the signals and queues its effects.
pub(crate) fn apply_action(
    state: RwSignal<DesktopState>,
    interaction: RwSignal<InteractionState>,
    effects: RwSignal<Vec<RuntimeEffect>>,
    app_runtime: RwSignal<AppRuntimeState>,
    registry: &AppRegistry,
    action: DesktopAction,
) {
    let mut desktop = state.get_untracked();
    let mut ui = interaction.get_untracked();
    let previous_desktop = desktop.clone();
    let previous_ui = ui.clone();

    let new_effects = reduce_desktop(&mut desktop, &mut ui, registry, action);

    if desktop.windows != previous_desktop.windows {
        sync_runtime_sessions(app_runtime, &desktop.windows);
    }
    if desktop != previous_desktop {
        state.set(desktop);
    }
    if ui != previous_ui {
        interaction.set(ui);
    }
    if !new_effects.is_empty() {
        effects.update(|queue| queue.extend(new_effects));
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and boots persisted state.
pub fn DesktopProvider(
    /// Injected browser or in-memory host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Signed-in user; scopes playlist storage.
    session: UserSession,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::new(host_services));
    let session = store_value(session);
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let app_runtime = create_rw_signal(AppRuntimeState::default());

    let dispatch = Callback::new(move |action: DesktopAction| {
        apply_action(
            state,
            interaction,
            effects,
            app_runtime,
            app_registry(),
            action,
        );
    });

    let runtime = DesktopRuntimeContext {
        host,
        session,
        state,
        interaction,
        effects,
        app_runtime,
        dispatch,
    };

    provide_context(runtime);

    runtime.host.get_value().install_boot_hydration(dispatch);
    effect_executor::install(runtime);
    logging::log!(
        "desktop booted for {} with {} registered apps",
        runtime.session.with_value(|s| s.email.clone()),
        app_registry().iter().count()
    );

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::{ApplicationId, InstanceId};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        app_runtime::register_window_disposer, model::DesktopBounds,
        window_store::tests::test_registry,
    };

    #[test]
    fn closing_through_the_reducer_queues_disposal_and_clears_the_session() {
        let runtime = create_runtime();
        let state = create_rw_signal(DesktopState::default());
        let interaction = create_rw_signal(InteractionState::default());
        let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
        let app_runtime = create_rw_signal(AppRuntimeState::default());
        let registry = test_registry();
        let id = InstanceId::new("test.alpha");
        let disposed = std::rc::Rc::new(std::cell::Cell::new(0));

        apply_action(
            state,
            interaction,
            effects,
            app_runtime,
            &registry,
            DesktopAction::ActivateApp {
                app_id: ApplicationId::trusted("test.alpha"),
                bounds: DesktopBounds::new(1000, 700),
            },
        );
        let counter = disposed.clone();
        register_window_disposer(
            app_runtime,
            &id,
            Box::new(move || counter.set(counter.get() + 1)),
        );

        apply_action(
            state,
            interaction,
            effects,
            app_runtime,
            &registry,
            DesktopAction::CloseWindow {
                instance_id: id.clone(),
            },
        );

        assert_eq!(
            effects.get_untracked(),
            vec![RuntimeEffect::DisposeWindow(id)]
        );
        assert_eq!(disposed.get(), 1);
        assert!(state.with_untracked(|s| s.windows.is_empty()));
        runtime.dispose();
    }
}
