//! Old Radio Player: plays through a playlist handed over at window-open time.

mod deck;

use std::time::Duration;

use desktop_app_contract::AppMountContext;
use leptos::*;
use system_ui::prelude::*;

use crate::deck::{format_position, PlaybackDeck, RadioPlayerProps};

/// Registry id of the radio player module.
pub const APP_ID: &str = "media.radio-player";

/// Mounts the radio player into a desktop window.
pub fn mount_radio_player_app(context: AppMountContext) -> View {
    view! { <RadioPlayerApp context=context /> }.into_view()
}

fn deck_from_props(props: &serde_json::Value) -> PlaybackDeck {
    match serde_json::from_value::<RadioPlayerProps>(props.clone()) {
        Ok(props) => PlaybackDeck::new(props.playlist, props.current_index),
        Err(err) => {
            logging::warn!("radio player props rejected: {err}");
            PlaybackDeck::new(Vec::new(), 0)
        }
    }
}

#[component]
fn RadioPlayerApp(context: AppMountContext) -> impl IntoView {
    let deck = create_rw_signal(deck_from_props(&context.props));
    let window = context.services.window;

    match set_interval_with_handle(move || deck.update(PlaybackDeck::tick), Duration::from_secs(1)) {
        Ok(interval) => {
            context.services.lifecycle.on_dispose(move || interval.clear());
            on_cleanup(move || interval.clear());
        }
        Err(err) => logging::warn!("radio player tick unavailable: {err:?}"),
    }

    let tracks = create_memo(move |_| deck.with(|d| d.tracks().to_vec()));
    let on_seek = Callback::new(move |ev: web_sys::Event| {
        if let Ok(secs) = event_target_value(&ev).parse::<u32>() {
            deck.update(|deck| deck.seek(secs));
        }
    });

    view! {
        <Stack gap=LayoutGap::Sm layout_class="radio-player">
            <Cluster layout_class="radio-player-header">
                <Heading>"VintageSound"</Heading>
                <Button
                    variant=ButtonVariant::Quiet
                    size=ButtonSize::Sm
                    aria_label="Close player"
                    on_click=Callback::new(move |_| window.close())
                >
                    "×"
                </Button>
            </Cluster>
            <div class="radio-player-marquee" role="status">
                <span>{move || deck.with(PlaybackDeck::now_playing_text)}</span>
            </div>
            <Cluster layout_class="radio-player-controls">
                <Button aria_label="Previous track" on_click=Callback::new(move |_| deck.update(PlaybackDeck::previous))>
                    "⏮"
                </Button>
                <Button
                    variant=ButtonVariant::Primary
                    aria_label=Signal::derive(move || {
                        let label = if deck.with(PlaybackDeck::is_playing) { "Pause" } else { "Play" };
                        label.to_string()
                    })
                    pressed=Signal::derive(move || deck.with(PlaybackDeck::is_playing))
                    on_click=Callback::new(move |_| deck.update(PlaybackDeck::toggle_play))
                >
                    {move || if deck.with(PlaybackDeck::is_playing) { "⏸" } else { "▶" }}
                </Button>
                <Button aria_label="Next track" on_click=Callback::new(move |_| deck.update(PlaybackDeck::next))>
                    "⏭"
                </Button>
            </Cluster>
            <FieldGroup title="Tuning">
                <RangeField
                    aria_label="Seek"
                    ui_slot="radio-seek"
                    min="0"
                    max=Signal::derive(move || deck.with(|d| d.duration_secs().to_string()))
                    value=Signal::derive(move || deck.with(|d| d.position_secs().to_string()))
                    on_input=on_seek
                />
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    {move || {
                        deck.with(|d| {
                            format!(
                                "{} / {}",
                                format_position(d.position_secs()),
                                format_position(d.duration_secs()),
                            )
                        })
                    }}
                </Text>
            </FieldGroup>
            <Show
                when=move || tracks.with(|tracks| !tracks.is_empty())
                fallback=|| view! { <EmptyState>"No tracks queued."</EmptyState> }
            >
                <ListSurface aria_label="Tracks" layout_class="radio-player-tracks">
                    {move || {
                        tracks
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, track)| {
                                let active = move || deck.with(|d| d.current_index() == index);
                                view! {
                                    <li
                                        class="radio-player-track"
                                        data-active=move || active().to_string()
                                        on:click=move |_| deck.update(|d| d.select(index))
                                    >
                                        {track.title}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ListSurface>
            </Show>
        </Stack>
    }
}
