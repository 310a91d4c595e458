use std::rc::Rc;

use desktop_app_contract::{
    AppCommand, AppMountContext, AppServices, InstanceId, LifecycleService, PlaylistService,
};
use platform_host::next_monotonic_timestamp_ms;
use system_ui::{
    InlineMessage, ResizeHandle, WindowBody, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::*;
use crate::{
    app_runtime::register_window_disposer,
    model::{ResizeEdge, WindowContent, WindowRect},
};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn frame_style(rect: WindowRect) -> String {
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;",
        rect.x, rect.y, rect.w, rect.h
    )
}

#[component]
pub(super) fn DesktopWindow(instance_id: InstanceId, surface: NodeRef<html::Div>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let id = store_value(instance_id);

    let title = Signal::derive(move || {
        runtime.state.with(|s| {
            id.with_value(|id| s.windows.get(id).map(|w| w.title().to_string()))
                .unwrap_or_default()
        })
    });
    let rect = Signal::derive(move || {
        let preview = runtime
            .interaction
            .with(|interaction| id.with_value(|id| interaction.preview_for(id)));
        preview.or_else(|| {
            runtime
                .state
                .with(|s| id.with_value(|id| s.windows.get(id).map(|w| w.rect())))
        })
    });
    let interacting = Signal::derive(move || {
        runtime
            .interaction
            .with(|interaction| id.with_value(|id| interaction.preview_for(id).is_some()))
    });

    let close = Callback::new(move |_| {
        runtime.dispatch_action(DesktopAction::CloseWindow {
            instance_id: id.get_value(),
        })
    });
    let begin_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginMove {
            instance_id: id.get_value(),
            pointer: pointer_from_pointer_event(&ev),
            bounds: desktop_bounds(runtime, surface),
        });
    });

    view! {
        <WindowFrame
            style=Signal::derive(move || rect.get().map(frame_style).unwrap_or_default())
            aria_label=title
            interacting=interacting
            data_window=id.get_value().to_string()
        >
            <WindowTitleBar on_pointerdown=begin_move>
                <WindowTitle>{move || title.get()}</WindowTitle>
                <WindowControls>
                    <WindowControlButton aria_label="Close window" on_click=close>
                        "×"
                    </WindowControlButton>
                </WindowControls>
            </WindowTitleBar>
            <WindowBody>
                <WindowContents instance_id=id.get_value() surface=surface />
            </WindowBody>
            {ResizeEdge::ALL
                .into_iter()
                .map(|edge| view! { <WindowResizeHandle instance_id=id.get_value() edge=edge surface=surface /> })
                .collect_view()}
        </WindowFrame>
    }
}

#[component]
fn WindowResizeHandle(
    instance_id: InstanceId,
    edge: ResizeEdge,
    surface: NodeRef<html::Div>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let id = store_value(instance_id);

    let on_pointerdown = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            instance_id: id.get_value(),
            edge,
            pointer: pointer_from_pointer_event(&ev),
            bounds: desktop_bounds(runtime, surface),
        });
    });

    view! { <ResizeHandle edge=edge.slot() on_pointerdown=on_pointerdown /> }
}

fn window_services(
    runtime: DesktopRuntimeContext,
    instance_id: InstanceId,
    surface: NodeRef<html::Div>,
) -> AppServices {
    let owner = instance_id.clone();
    let sender = Callback::new(move |command: AppCommand| match command {
        AppCommand::OpenNewWindow(intent) => {
            runtime.dispatch_action(DesktopAction::OpenAdHoc {
                intent,
                bounds: desktop_bounds(runtime, surface),
                created_at_ms: next_monotonic_timestamp_ms(),
            });
        }
        AppCommand::CloseWindow => runtime.dispatch_action(DesktopAction::CloseWindow {
            instance_id: owner.clone(),
        }),
        AppCommand::SetTheme { theme_name } => {
            runtime.dispatch_action(DesktopAction::SetTheme { theme_name })
        }
    });
    let active_theme = Signal::derive(move || {
        runtime
            .state
            .with(|s| s.theme.display_name().to_string())
    });
    let lifecycle = LifecycleService::new(Rc::new(move |dispose| {
        register_window_disposer(runtime.app_runtime, &instance_id, dispose)
    }));
    let playlists = PlaylistService::new(
        runtime.host.with_value(|host| host.playlist_sync()),
        runtime.session.with_value(|session| session.user_id.clone()),
    );
    AppServices::new(sender, active_theme, lifecycle, playlists)
}

#[component]
fn WindowContents(instance_id: InstanceId, surface: NodeRef<html::Div>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let content = runtime
        .state
        .with_untracked(|s| s.windows.get(&instance_id).map(|w| w.content().clone()));

    match content {
        Some(WindowContent::Component {
            app_id,
            module,
            props,
        }) => {
            let services = window_services(runtime, instance_id.clone(), surface);
            module.mount(AppMountContext {
                app_id,
                window_id: instance_id,
                props,
                services,
            })
        }
        Some(WindowContent::Error { message }) => {
            view! { <InlineMessage message=message /> }.into_view()
        }
        None => ().into_view(),
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::{ApplicationId, OpenWindowIntent};
    use platform_host::{HostServices, MemoryAuthGate, UserSession};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        app_runtime::AppRuntimeState,
        host::DesktopHostContext,
        model::{DesktopBounds, DesktopState, InteractionState},
        reducer::RuntimeEffect,
        runtime_context::apply_action,
        window_store::tests::test_registry,
    };

    fn test_runtime() -> DesktopRuntimeContext {
        let state = create_rw_signal(DesktopState::default());
        let interaction = create_rw_signal(InteractionState::default());
        let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
        let app_runtime = create_rw_signal(AppRuntimeState::default());
        let registry = store_value(test_registry());
        let dispatch = Callback::new(move |action: DesktopAction| {
            registry.with_value(|registry| {
                apply_action(state, interaction, effects, app_runtime, registry, action)
            });
        });
        DesktopRuntimeContext {
            host: store_value(DesktopHostContext::new(HostServices::in_memory(
                MemoryAuthGate::default(),
            ))),
            session: store_value(UserSession {
                user_id: "ada".to_string(),
                email: "ada@example.com".to_string(),
            }),
            state,
            interaction,
            effects,
            app_runtime,
            dispatch,
        }
    }

    fn open_player(runtime: DesktopRuntimeContext, created_at_ms: u64) {
        runtime.dispatch_action(DesktopAction::OpenAdHoc {
            intent: OpenWindowIntent {
                title: "OldRadioPlayer".to_string(),
                app_id: ApplicationId::trusted("test.player"),
                props: serde_json::json!({ "current_index": 0 }),
                size: None,
            },
            bounds: DesktopBounds::new(1000, 700),
            created_at_ms,
        });
    }

    fn live_ids(runtime: DesktopRuntimeContext) -> Vec<String> {
        runtime.state.with_untracked(|s| {
            s.windows
                .list()
                .map(|w| w.instance_id().as_str().to_string())
                .collect()
        })
    }

    #[test]
    fn close_capability_targets_only_its_own_window() {
        let reactive = create_runtime();
        let runtime = test_runtime();
        let surface = create_node_ref::<html::Div>();

        open_player(runtime, 42);
        open_player(runtime, 42);
        assert_eq!(
            live_ids(runtime),
            vec!["OldRadioPlayer-42".to_string(), "OldRadioPlayer-42-2".to_string()]
        );

        let second = window_services(runtime, InstanceId::new("OldRadioPlayer-42-2"), surface);
        second.window.close();
        assert_eq!(live_ids(runtime), vec!["OldRadioPlayer-42".to_string()]);

        second.window.close();
        assert_eq!(live_ids(runtime), vec!["OldRadioPlayer-42".to_string()]);
        reactive.dispose();
    }

    #[test]
    fn theme_capability_reads_and_switches_the_desktop_theme() {
        let reactive = create_runtime();
        let runtime = test_runtime();
        let services = window_services(
            runtime,
            InstanceId::new("OldRadioPlayer-1"),
            create_node_ref::<html::Div>(),
        );

        assert_eq!(services.theme.active_theme(), "Windows 95");
        services.theme.set_theme("Old Radio");
        assert_eq!(services.theme.active_theme(), "Old Radio");
        reactive.dispose();
    }
}
