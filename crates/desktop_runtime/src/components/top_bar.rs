use std::time::Duration;

use platform_host::local_clock_time;
use system_ui::{Button, ButtonSize, ButtonVariant, SelectField, Text, TextRole, TopStrip, TopStripSection};

use super::*;
use crate::{clock::format_clock_time, theme::ThemeName};

#[component]
pub(super) fn TopBar(#[prop(default = None)] on_sign_out: Option<Callback<()>>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let clock_now = create_rw_signal(local_clock_time());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(local_clock_time()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let active_theme =
        Signal::derive(move || runtime.state.with(|s| s.theme.display_name().to_string()));
    let on_theme_change = Callback::new(move |ev: web_sys::Event| {
        runtime.dispatch_action(DesktopAction::SetTheme {
            theme_name: event_target_value(&ev),
        });
    });
    let user_email = runtime.session.with_value(|session| session.email.clone());

    view! {
        <TopStrip aria_label="Desktop top bar">
            <TopStripSection ui_slot="start">
                <Text role=TextRole::Label>"Start"</Text>
                <SelectField
                    aria_label="Theme"
                    ui_slot="theme-selector"
                    value=active_theme
                    on_change=on_theme_change
                >
                    {ThemeName::ALL
                        .into_iter()
                        .map(|theme| {
                            let name = theme.display_name();
                            view! { <option value=name>{name}</option> }
                        })
                        .collect_view()}
                </SelectField>
            </TopStripSection>
            <TopStripSection ui_slot="clock">
                <Text role=TextRole::Label>{move || format_clock_time(clock_now.get())}</Text>
            </TopStripSection>
            <TopStripSection ui_slot="session">
                <Text role=TextRole::Caption>{user_email}</Text>
                {on_sign_out.map(|on_sign_out| {
                    view! {
                        <Button
                            variant=ButtonVariant::Quiet
                            size=ButtonSize::Sm
                            on_click=Callback::new(move |_| on_sign_out.call(()))
                        >
                            "Sign out"
                        </Button>
                    }
                })}
            </TopStripSection>
        </TopStrip>
    }
}
