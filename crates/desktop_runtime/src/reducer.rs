//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use desktop_app_contract::{ApplicationId, InstanceId, OpenWindowIntent};

use crate::{
    apps::AppRegistry,
    geometry::{drag_preview, resize_preview},
    model::{
        DesktopBounds, DesktopState, DragSession, InteractionState, PointerPosition, ResizeEdge,
        ResizeSession,
    },
    theme::ThemeName,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Desktop icon activated: open the app unless it is already open.
    ActivateApp {
        /// App behind the icon.
        app_id: ApplicationId,
        /// Desktop bounds measured at activation.
        bounds: DesktopBounds,
    },
    /// Hosted content asked for a brand-new window.
    OpenAdHoc {
        /// Title, module, props, and size of the new window.
        intent: OpenWindowIntent,
        /// Desktop bounds measured at request time.
        bounds: DesktopBounds,
        /// Creation timestamp used to derive the instance id.
        created_at_ms: u64,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        instance_id: InstanceId,
    },
    /// Begin dragging a window.
    BeginMove {
        /// Window being dragged.
        instance_id: InstanceId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
        /// Desktop bounds measured at drag start.
        bounds: DesktopBounds,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active drag and commit its position.
    EndMove {
        /// Desktop bounds re-measured at drag stop.
        bounds: DesktopBounds,
    },
    /// Begin resizing a window.
    BeginResize {
        /// Window being resized.
        instance_id: InstanceId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
        /// Desktop bounds measured at resize start.
        bounds: DesktopBounds,
    },
    /// Update an in-progress window resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active resize and commit its size.
    EndResize {
        /// Desktop bounds re-measured at resize stop.
        bounds: DesktopBounds,
    },
    /// Switch theme by display name; unknown names select Windows XP.
    SetTheme {
        /// Theme display name.
        theme_name: String,
    },
    /// Restore the persisted theme at boot without persisting it again.
    HydrateTheme {
        /// Persisted theme display name.
        theme_name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Persist the active theme name.
    PersistTheme,
    /// Release everything the window's content registered for disposal.
    DisposeWindow(InstanceId),
}

/// Applies a [`DesktopAction`] and collects the resulting side effects.
///
/// Total: actions naming windows that are not open, and gesture updates with no gesture in
/// flight, leave the state untouched.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    registry: &AppRegistry,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::ActivateApp { app_id, bounds } => {
            state.windows.open_from_registry(registry, &app_id, bounds);
        }
        DesktopAction::OpenAdHoc {
            intent,
            bounds,
            created_at_ms,
        } => {
            state
                .windows
                .open_ad_hoc(registry, intent, bounds, created_at_ms);
        }
        DesktopAction::CloseWindow { instance_id } => {
            if interaction
                .dragging
                .as_ref()
                .is_some_and(|session| session.instance_id == instance_id)
            {
                interaction.dragging = None;
            }
            if interaction
                .resizing
                .as_ref()
                .is_some_and(|session| session.instance_id == instance_id)
            {
                interaction.resizing = None;
            }
            if state.windows.close(&instance_id) {
                effects.push(RuntimeEffect::DisposeWindow(instance_id));
            }
        }
        DesktopAction::BeginMove {
            instance_id,
            pointer,
            bounds,
        } => {
            if let Some(window) = state.windows.get(&instance_id) {
                let rect_start = window.rect();
                interaction.resizing = None;
                interaction.dragging = Some(DragSession {
                    instance_id,
                    pointer_start: pointer,
                    rect_start,
                    bounds,
                    preview: rect_start,
                });
            }
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_mut() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                session.preview = drag_preview(session.rect_start, dx, dy, session.bounds);
            }
        }
        DesktopAction::EndMove { bounds } => {
            if let Some(session) = interaction.dragging.take() {
                state.windows.move_window(
                    &session.instance_id,
                    session.preview.position(),
                    bounds,
                );
            }
        }
        DesktopAction::BeginResize {
            instance_id,
            edge,
            pointer,
            bounds,
        } => {
            if let Some(window) = state.windows.get(&instance_id) {
                let rect_start = window.rect();
                interaction.dragging = None;
                interaction.resizing = Some(ResizeSession {
                    instance_id,
                    edge,
                    pointer_start: pointer,
                    rect_start,
                    bounds,
                    preview: rect_start,
                });
            }
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(session) = interaction.resizing.as_mut() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                session.preview =
                    resize_preview(session.rect_start, session.edge, dx, dy, session.bounds);
            }
        }
        DesktopAction::EndResize { bounds } => {
            if let Some(session) = interaction.resizing.take() {
                state
                    .windows
                    .resize(&session.instance_id, session.preview.size(), bounds);
            }
        }
        DesktopAction::SetTheme { theme_name } => {
            state.theme = ThemeName::resolve(&theme_name);
            effects.push(RuntimeEffect::PersistTheme);
        }
        DesktopAction::HydrateTheme { theme_name } => {
            state.theme = ThemeName::resolve(&theme_name);
        }
    }
    effects
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::{
        model::{WindowPosition, WindowRect, WindowSize},
        window_store::tests::test_registry,
    };

    fn open(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        registry: &AppRegistry,
        app_id: &str,
        bounds: DesktopBounds,
    ) -> InstanceId {
        let effects = reduce_desktop(
            state,
            interaction,
            registry,
            DesktopAction::ActivateApp {
                app_id: ApplicationId::trusted(app_id),
                bounds,
            },
        );
        assert!(effects.is_empty());
        InstanceId::new(app_id)
    }

    fn pointer(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    #[test]
    fn activating_an_icon_twice_opens_one_window() {
        let registry = test_registry();
        let bounds = DesktopBounds::new(1000, 700);
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, &registry, "test.alpha", bounds);
        open(&mut state, &mut interaction, &registry, "test.alpha", bounds);

        assert_eq!(state.windows.len(), 1);
    }

    #[test]
    fn unknown_icon_is_a_noop() {
        let registry = test_registry();
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(
            &mut state,
            &mut interaction,
            &registry,
            "test.nothing",
            DesktopBounds::new(800, 600),
        );
        assert!(state.windows.is_empty());
    }

    #[test]
    fn closing_emits_a_dispose_effect_once() {
        let registry = test_registry();
        let bounds = DesktopBounds::new(1000, 700);
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction, &registry, "test.alpha", bounds);

        let first = reduce_desktop(
            &mut state,
            &mut interaction,
            &registry,
            DesktopAction::CloseWindow {
                instance_id: id.clone(),
            },
        );
        let second = reduce_desktop(
            &mut state,
            &mut interaction,
            &registry,
            DesktopAction::CloseWindow { instance_id: id.clone() },
        );

        assert_eq!(first, vec![RuntimeEffect::DisposeWindow(id)]);
        assert_eq!(second, Vec::new());
        assert!(state.windows.is_empty());
    }

    #[test]
    fn ad_hoc_requests_open_side_by_side_windows() {
        let registry = test_registry();
        let bounds = DesktopBounds::new(1000, 700);
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        for _ in 0..3 {
            reduce_desktop(
                &mut state,
                &mut interaction,
                &registry,
                DesktopAction::OpenAdHoc {
                    intent: OpenWindowIntent {
                        title: "OldRadioPlayer".to_string(),
                        app_id: ApplicationId::trusted("test.player"),
                        props: json!({ "playlist": [], "current_index": 0 }),
                        size: Some(WindowSize::new(376, 535)),
                    },
                    bounds,
                    created_at_ms: 42,
                },
            );
        }

        assert_eq!(state.windows.len(), 3);
        let mut ids: Vec<&str> = state.windows.list().map(|w| w.instance_id().as_str()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn drag_previews_then_commits_clamped_position() {
        let registry = test_registry();
        let bounds = DesktopBounds::new(800, 600);
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction, &registry, "test.alpha", bounds);

        reduce_desktop(
            &mut state,
            &mut interaction,
            &registry,
            DesktopAction::BeginMove {
                instance_id: id.clone(),
                pointer: pointer(60, 60),
                bounds,
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            &registry,
            DesktopAction::UpdateMove {
                pointer: pointer(860, 20),
            },
        );

        assert_eq!(
            interaction.preview_for(&id),
            Some(WindowRect { x: 500, y: 10, w: 300, h: 200 })
        );
        assert_eq!(
            state.windows.get(&id).map(|w| w.position()),
            Some(WindowPosition::new(50, 50))
        );

        reduce_desktop(
            &mut state,
            &mut interaction,
            &registry,
            DesktopAction::EndMove { bounds },
        );
        assert_eq!(interaction, InteractionState::default());
        assert_eq!(
            state.windows.get(&id).map(|w| w.position()),
            Some(WindowPosition::new(500, 10))
        );
    }

    #[test]
    fn drag_commit_uses_bounds_measured_at_stop() {
        let registry = test_registry();
        let wide = DesktopBounds::new(1200, 700);
        let narrow = DesktopBounds::new(800, 600);
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction, &registry, "test.alpha", wide);

        reduce_desktop(
            &mut state,
            &mut interaction,
            &registry,
            DesktopAction::BeginMove {
                instance_id: id.clone(),
                pointer: pointer(0, 0),
                bounds: wide,
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            &registry,
            DesktopAction::UpdateMove {
                pointer: pointer(800, 0),
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            &registry,
            DesktopAction::EndMove { bounds: narrow },
        );

        assert_eq!(
            state.windows.get(&id).map(|w| w.position()),
            Some(WindowPosition::new(500, 50))
        );
    }

    #[test]
    fn resize_commits_ceiling_and_floor() {
        let registry = test_registry();
        let bounds = DesktopBounds::new(800, 600);
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction, &registry, "test.alpha", bounds);

        reduce_desktop(
            &mut state,
            &mut interaction,
            &registry,
            DesktopAction::BeginResize {
                instance_id: id.clone(),
                edge: ResizeEdge::SouthEast,
                pointer: pointer(350, 250),
                bounds,
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            &registry,
            DesktopAction::UpdateResize {
                pointer: pointer(1200, 100),
            },
        );
        assert_eq!(
            interaction.preview_for(&id),
            Some(WindowRect { x: 50, y: 50, w: 750, h: 150 })
        );

        reduce_desktop(
            &mut state,
            &mut interaction,
            &registry,
            DesktopAction::EndResize { bounds },
        );
        let window = state.windows.get(&id).expect("live window");
        assert_eq!(window.size(), WindowSize::new(640, 150));
        assert_eq!(window.position(), WindowPosition::new(50, 50));
    }

    #[test]
    fn closing_a_window_mid_drag_drops_the_gesture() {
        let registry = test_registry();
        let bounds = DesktopBounds::new(800, 600);
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction, &registry, "test.alpha", bounds);

        reduce_desktop(
            &mut state,
            &mut interaction,
            &registry,
            DesktopAction::BeginMove {
                instance_id: id.clone(),
                pointer: pointer(0, 0),
                bounds,
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            &registry,
            DesktopAction::CloseWindow { instance_id: id },
        );
        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            &registry,
            DesktopAction::EndMove { bounds },
        );

        assert!(effects.is_empty());
        assert_eq!(interaction, InteractionState::default());
        assert!(state.windows.is_empty());
    }

    #[test]
    fn gesture_updates_without_a_session_are_ignored() {
        let registry = test_registry();
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let before = state.clone();

        reduce_desktop(
            &mut state,
            &mut interaction,
            &registry,
            DesktopAction::UpdateMove {
                pointer: pointer(10, 10),
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            &registry,
            DesktopAction::EndResize {
                bounds: DesktopBounds::new(800, 600),
            },
        );

        assert_eq!(state, before);
    }

    #[test]
    fn theme_switch_leaves_windows_untouched() {
        let registry = test_registry();
        let bounds = DesktopBounds::new(1000, 700);
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, &registry, "test.alpha", bounds);
        assert_eq!(state.theme, ThemeName::Windows95);
        let windows_before = state.windows.clone();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            &registry,
            DesktopAction::SetTheme {
                theme_name: "macOS".to_string(),
            },
        );

        assert_eq!(effects, vec![RuntimeEffect::PersistTheme]);
        assert_eq!(state.theme, ThemeName::MacOs);
        assert_eq!(state.windows, windows_before);
    }

    #[test]
    fn hydrating_an_unknown_theme_falls_back_without_persisting() {
        let registry = test_registry();
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            &registry,
            DesktopAction::HydrateTheme {
                theme_name: "Bubblegum".to_string(),
            },
        );

        assert!(effects.is_empty());
        assert_eq!(state.theme, ThemeName::WindowsXp);
    }
}
