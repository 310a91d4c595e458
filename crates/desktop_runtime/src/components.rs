//! Desktop shell UI composition and interaction surfaces.

mod top_bar;
mod window;

use leptos::*;
use system_ui::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer,
};

use self::{top_bar::TopBar, window::DesktopWindow};

use crate::{
    apps::AppDescriptor,
    model::{DesktopBounds, PointerPosition},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the full desktop shell UI and processes queued [`crate::RuntimeEffect`] values.
pub fn DesktopShell(
    /// Invoked when the user asks to sign out from the top strip.
    #[prop(optional)]
    on_sign_out: Option<Callback<()>>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let surface = create_node_ref::<html::Div>();

    let on_pointer_move = Callback::new(move |ev: web_sys::PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        let (dragging, resizing) = runtime.interaction.with_untracked(|interaction| {
            (interaction.dragging.is_some(), interaction.resizing.is_some())
        });

        if dragging {
            runtime.dispatch_action(DesktopAction::UpdateMove { pointer });
        }
        if resizing {
            runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
        }
    });
    let on_pointer_end = Callback::new(move |_: web_sys::PointerEvent| {
        end_active_pointer_interaction(runtime, surface)
    });

    view! {
        <DesktopRoot
            id="desktop-shell-root"
            theme=Signal::derive(move || state.with(|s| s.theme.token().to_string()))
            style=Signal::derive(move || state.with(|s| s.theme.descriptor().css_variables()))
            on_pointermove=on_pointer_move
            on_pointerup=on_pointer_end
        >
            <TopBar on_sign_out=on_sign_out />
            <DesktopBackdrop node_ref=surface>
                <DesktopIconGrid>
                    <For
                        each={move || {
                            runtime
                                .registry()
                                .desktop_icons()
                                .cloned()
                                .collect::<Vec<AppDescriptor>>()
                        }}
                        key=|app| app.id.clone()
                        let:app
                    >
                        {{
                            let app_id = app.id.clone();
                            let label = app.display_name.clone();
                            view! {
                                <DesktopIconButton
                                    title=label.clone()
                                    aria_label=format!("Open {label}")
                                    data_app=app_id.to_string()
                                    on_click=Callback::new(move |_| {
                                        runtime.dispatch_action(DesktopAction::ActivateApp {
                                            app_id: app_id.clone(),
                                            bounds: desktop_bounds(runtime, surface),
                                        });
                                    })
                                >
                                    <span data-ui-slot="glyph" aria-hidden="true">{app.icon_glyph.clone()}</span>
                                    <span data-ui-slot="label">{label.clone()}</span>
                                </DesktopIconButton>
                            }
                        }}
                    </For>
                </DesktopIconGrid>

                <DesktopWindowLayer>
                    <For
                        each=move || {
                            state.with(|s| {
                                s.windows
                                    .list()
                                    .map(|w| w.instance_id().clone())
                                    .collect::<Vec<_>>()
                            })
                        }
                        key=|instance_id| instance_id.clone()
                        let:instance_id
                    >
                        <DesktopWindow instance_id=instance_id surface=surface />
                    </For>
                </DesktopWindowLayer>
            </DesktopBackdrop>
        </DesktopRoot>
    }
}

/// Measures the desktop surface for geometry clamping.
pub(crate) fn desktop_bounds(
    runtime: DesktopRuntimeContext,
    surface: NodeRef<html::Div>,
) -> DesktopBounds {
    runtime.host.with_value(|host| host.desktop_bounds(surface))
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext, surface: NodeRef<html::Div>) {
    let (dragging, resizing) = runtime.interaction.with_untracked(|interaction| {
        (interaction.dragging.is_some(), interaction.resizing.is_some())
    });
    if dragging {
        runtime.dispatch_action(DesktopAction::EndMove {
            bounds: desktop_bounds(runtime, surface),
        });
    }
    if resizing {
        runtime.dispatch_action(DesktopAction::EndResize {
            bounds: desktop_bounds(runtime, surface),
        });
    }
}
