use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use platform_host::{validate_credentials, HostServices, UserSession};
use platform_host_web::{build_host_services, WebProfileAuthGate};
use system_ui::prelude::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    let host = store_value(build_host_services());
    let session = create_rw_signal(WebProfileAuthGate::default().restore_session());

    let on_signed_in = Callback::new(move |user: UserSession| {
        logging::log!("signed in as {}", user.email);
        session.set(Some(user));
    });
    let on_sign_out = Callback::new(move |()| {
        let auth = host.with_value(|host| host.auth.clone());
        spawn_local(async move {
            if let Err(err) = auth.sign_out().await {
                logging::warn!("sign out failed: {err}");
            }
        });
        session.set(None);
    });

    view! {
        <Title text="Nostalgia Desktop" />
        <Meta name="description" content="A skinnable retro desktop with playlists and an old radio." />

        <main class="site-root">
            {move || match session.get() {
                Some(user) => view! {
                    <DesktopProvider host_services=host.get_value() session=user>
                        <DesktopShell on_sign_out=on_sign_out />
                    </DesktopProvider>
                }
                .into_view(),
                None => view! { <SignInScreen host=host.get_value() on_signed_in=on_signed_in /> }
                    .into_view(),
            }}
        </main>
    }
}

#[component]
pub fn SignInScreen(host: HostServices, on_signed_in: Callback<UserSession>) -> impl IntoView {
    let auth = store_value(host.auth);
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(String::new());
    let pending = create_rw_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let (email, password) = (email.get_untracked(), password.get_untracked());
        if let Err(err) = validate_credentials(&email, &password) {
            error.set(err.to_string());
            return;
        }
        error.set(String::new());
        pending.set(true);
        let auth = auth.get_value();
        spawn_local(async move {
            let result = auth.sign_in(&email, &password).await;
            pending.set(false);
            match result {
                Ok(user) => on_signed_in.call(user),
                Err(err) => error.set(err.to_string()),
            }
        });
    };

    view! {
        <form class="sign-in-screen" on:submit=on_submit>
            <Stack gap=LayoutGap::Md layout_class="sign-in-panel">
                <Heading>"Welcome back"</Heading>
                <Text tone=TextTone::Secondary>"Sign in to open your desktop."</Text>
                <TextField
                    input_type="email"
                    autocomplete="email"
                    placeholder="Email"
                    aria_label="Email"
                    value=email
                    on_input=Callback::new(move |ev: web_sys::Event| email.set(event_target_value(&ev)))
                />
                <TextField
                    input_type="password"
                    autocomplete="current-password"
                    placeholder="Password"
                    aria_label="Password"
                    value=password
                    on_input=Callback::new(move |ev: web_sys::Event| password.set(event_target_value(&ev)))
                />
                <InlineMessage message=error />
                <Button variant=ButtonVariant::Primary submit=true disabled=pending>
                    {move || if pending.get() { "Signing in..." } else { "Sign In" }}
                </Button>
            </Stack>
        </form>
    }
}
