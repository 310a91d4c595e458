//! Playlist Manager: edits the signed-in user's playlists and launches player windows.

mod editor;

use desktop_app_contract::{AppMountContext, ApplicationId, PlaylistService, WindowSize};
use leptos::*;
use platform_host::PlaylistLibrary;
use system_ui::prelude::*;

use crate::editor::{
    track_from_form, ManagerState, PLAYER_WINDOW_HEIGHT, PLAYER_WINDOW_TITLE,
    PLAYER_WINDOW_WIDTH,
};

/// Registry id of the playlist manager module.
pub const APP_ID: &str = "media.playlist-manager";

const RADIO_PLAYER_APP_ID: &str = "media.radio-player";

/// Mounts the playlist manager into a desktop window.
pub fn mount_playlist_manager_app(context: AppMountContext) -> View {
    view! { <PlaylistManagerApp context=context /> }.into_view()
}

fn save_library(playlists: PlaylistService, library: PlaylistLibrary, status: RwSignal<String>) {
    spawn_local(async move {
        if let Err(err) = playlists.save(&library).await {
            logging::warn!("playlist save failed for `{}`: {err}", playlists.user_id());
            status.set(format!("Could not save playlists: {err}"));
        }
    });
}

#[component]
fn PlaylistManagerApp(context: AppMountContext) -> impl IntoView {
    let state = create_rw_signal(ManagerState::default());
    let status = create_rw_signal(String::new());
    let loading = create_rw_signal(true);
    let new_name = create_rw_signal(String::new());
    let rename_to = create_rw_signal(String::new());
    let track_id = create_rw_signal(String::new());
    let track_title = create_rw_signal(String::new());
    let track_length = create_rw_signal(String::new());

    let playlists = store_value(context.services.playlists.clone());
    let window = context.services.window;

    spawn_local(async move {
        let result = playlists.get_value().load().await;
        match result {
            Ok(library) => state.update(|s| s.replace_library(library)),
            Err(err) => {
                logging::warn!("playlist load failed: {err}");
                status.set(format!("Could not load playlists: {err}"));
            }
        }
        loading.set(false);
    });

    let commit = move || {
        status.set(String::new());
        save_library(
            playlists.get_value(),
            state.with_untracked(|s| s.library().clone()),
            status,
        );
    };

    let on_create = Callback::new(move |_| {
        let name = new_name.get_untracked();
        match state.try_update(|s| s.create(&name)) {
            Some(Ok(true)) => {
                new_name.set(String::new());
                commit();
            }
            Some(Ok(false)) => status.set(format!("A playlist named `{}` already exists.", name.trim())),
            Some(Err(err)) => status.set(err.to_string()),
            None => {}
        }
    });

    let on_rename = Callback::new(move |_| {
        let target = rename_to.get_untracked();
        match state.try_update(|s| s.rename_selected(&target)) {
            Some(Ok(())) => {
                rename_to.set(String::new());
                commit();
            }
            Some(Err(err)) => status.set(err.to_string()),
            None => {}
        }
    });

    let on_add_track = Callback::new(move |_| {
        let track = track_from_form(
            &track_id.get_untracked(),
            &track_title.get_untracked(),
            &track_length.get_untracked(),
        );
        let track = match track {
            Ok(track) => track,
            Err(message) => {
                status.set(message);
                return;
            }
        };
        match state.try_update(|s| s.add_to_selected(track)) {
            Some(Ok(_)) => {
                track_id.set(String::new());
                track_title.set(String::new());
                track_length.set(String::new());
                commit();
            }
            Some(Err(err)) => status.set(err.to_string()),
            None => {}
        }
    });

    let delete_playlist = move |name: String| {
        if !state.try_update(|s| s.delete(&name)).unwrap_or(false) {
            return;
        }
        status.set(String::new());
        let playlists = playlists.get_value();
        spawn_local(async move {
            if let Err(err) = playlists.remove(&name).await {
                logging::warn!("playlist delete failed for `{name}`: {err}");
                status.set(format!("Could not delete `{name}`: {err}"));
            }
        });
    };

    let play_playlist = move |name: String| {
        match state.with_untracked(|s| s.player_props(&name)) {
            Some(props) => {
                status.set(String::new());
                window.open_new_window(
                    PLAYER_WINDOW_TITLE,
                    ApplicationId::trusted(RADIO_PLAYER_APP_ID),
                    props,
                    Some(WindowSize::new(PLAYER_WINDOW_WIDTH, PLAYER_WINDOW_HEIGHT)),
                );
            }
            None => {
                logging::warn!("playlist `{name}` is empty or does not exist");
                status.set(format!("`{name}` has no tracks to play."));
            }
        }
    };

    let remove_track = move |index: usize| match state.try_update(|s| s.remove_from_selected(index)) {
        Some(Ok(_)) => commit(),
        Some(Err(err)) => status.set(err.to_string()),
        None => {}
    };

    let bind = |signal: RwSignal<String>| {
        Callback::new(move |ev: web_sys::Event| signal.set(event_target_value(&ev)))
    };

    view! {
        <Stack gap=LayoutGap::Md layout_class="playlist-manager">
            <Heading>"Playlist Manager"</Heading>
            <Cluster>
                <TextField
                    placeholder="New playlist name"
                    aria_label="New playlist name"
                    value=new_name
                    on_input=bind(new_name)
                />
                <Button variant=ButtonVariant::Primary on_click=on_create>
                    "Create Playlist"
                </Button>
            </Cluster>
            <InlineMessage message=status />
            <FieldGroup title="Playlists">
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <Text tone=TextTone::Secondary>"Loading playlists..."</Text> }
                >
                    <Show
                        when=move || state.with(|s| !s.library().is_empty())
                        fallback=|| view! { <EmptyState>"No playlists yet."</EmptyState> }
                    >
                        <ListSurface aria_label="Playlists">
                            <For
                                each=move || state.with(ManagerState::summaries)
                                key=|summary| summary.clone()
                                let:summary
                            >
                                {
                                    let (name, count) = summary;
                                    let select_name = name.clone();
                                    let play_name = name.clone();
                                    let delete_name = name.clone();
                                    let is_selected = {
                                        let name = name.clone();
                                        move || state.with(|s| s.selected() == Some(name.as_str()))
                                    };
                                    view! {
                                        <li
                                            class="playlist-manager-entry"
                                            data-selected=move || is_selected().to_string()
                                            on:click=move |_| state.update(|s| s.select(&select_name))
                                        >
                                            <Text>{format!("{name} ({count} tracks)")}</Text>
                                            <Cluster>
                                                <Button
                                                    size=ButtonSize::Sm
                                                    on_click=Callback::new(move |event: ev::MouseEvent| {
                                                        event.stop_propagation();
                                                        play_playlist(play_name.clone());
                                                    })
                                                >
                                                    "Play"
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Sm
                                                    variant=ButtonVariant::Danger
                                                    on_click=Callback::new(move |event: ev::MouseEvent| {
                                                        event.stop_propagation();
                                                        delete_playlist(delete_name.clone());
                                                    })
                                                >
                                                    "Delete"
                                                </Button>
                                            </Cluster>
                                        </li>
                                    }
                                }
                            </For>
                        </ListSurface>
                    </Show>
                </Show>
            </FieldGroup>
            <Show when=move || state.with(|s| s.selected().is_some()) fallback=|| ()>
                <FieldGroup title="Songs">
                    <Heading>{move || state.with(|s| s.selected().unwrap_or_default().to_string())}</Heading>
                    <Cluster>
                        <TextField
                            placeholder="Rename to"
                            aria_label="Rename playlist"
                            value=rename_to
                            on_input=bind(rename_to)
                        />
                        <Button size=ButtonSize::Sm on_click=on_rename>"Rename"</Button>
                    </Cluster>
                    <ListSurface aria_label="Songs">
                        {move || {
                            state
                                .with(ManagerState::selected_tracks)
                                .into_iter()
                                .enumerate()
                                .map(|(index, track)| {
                                    view! {
                                        <li class="playlist-manager-song">
                                            <Text>{track.title}</Text>
                                            <Button
                                                size=ButtonSize::Sm
                                                on_click=Callback::new(move |_| remove_track(index))
                                            >
                                                "Remove"
                                            </Button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ListSurface>
                    <Cluster>
                        <TextField
                            placeholder="Video id"
                            aria_label="Video id"
                            value=track_id
                            on_input=bind(track_id)
                        />
                        <TextField
                            placeholder="Title"
                            aria_label="Track title"
                            value=track_title
                            on_input=bind(track_title)
                        />
                        <TextField
                            placeholder="m:ss"
                            aria_label="Track length"
                            value=track_length
                            on_input=bind(track_length)
                        />
                        <Button size=ButtonSize::Sm on_click=on_add_track>"Add Song"</Button>
                    </Cluster>
                </FieldGroup>
            </Show>
            <Cluster>
                <Button on_click=Callback::new(move |_| window.close())>"Close"</Button>
            </Cluster>
        </Stack>
    }
}
