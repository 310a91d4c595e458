//! Shared contract types between the desktop window manager runtime and hosted content.
//!
//! Content never reaches into the shell. Everything it may do to the desktop (spawn a new
//! top-level window, close its own window, switch theme, release resources on close) arrives as
//! a capability in the [`AppServices`] bundle injected per window instance.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use leptos::{Callable, Callback, Signal, SignalGet, View};
use platform_host::{PlaylistLibrary, PlaylistSync};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable identifier for an app package/module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Returns an app identifier when `raw` conforms to the `segment.segment...` policy.
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if is_valid_application_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!(
                "invalid application id `{raw}`; expected namespaced dotted segments"
            ))
        }
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creates an id without validation for compile-time/runtime trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_valid_application_id(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > 120 {
        return false;
    }

    let mut count = 0usize;
    for part in raw.split('.') {
        count += 1;
        if part.is_empty() || part.len() > 32 {
            return false;
        }
        let bytes = part.as_bytes();
        if !bytes[0].is_ascii_lowercase() {
            return false;
        }
        if !bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
        {
            return false;
        }
        if part.ends_with('-') {
            return false;
        }
    }

    count >= 2
}

/// Identifier of one open window instance, unique among live instances.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(String);

impl InstanceId {
    /// Wraps a raw instance id.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Window width/height in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl WindowSize {
    /// Creates a size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Request from hosted content for a brand-new top-level window.
pub struct OpenWindowIntent {
    /// Title shown in the new window's header; also the stem of its instance id.
    pub title: String,
    /// Registered module that renders the window body.
    pub app_id: ApplicationId,
    /// Property bag handed to the module when it mounts.
    pub props: Value,
    /// Requested size; the module's default size when absent.
    pub size: Option<WindowSize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Transport commands emitted by app services to the desktop runtime.
pub enum AppCommand {
    /// Open a new window next to the sender.
    OpenNewWindow(OpenWindowIntent),
    /// Close the sender's own window.
    CloseWindow,
    /// Switch the desktop theme by display name.
    SetTheme {
        /// Theme display name (for example `Old Radio`).
        theme_name: String,
    },
}

#[derive(Clone, Copy)]
/// Window integration service.
pub struct WindowService {
    sender: Callback<AppCommand>,
}

impl WindowService {
    /// Requests a new top-level window hosting `app_id` with `props`.
    pub fn open_new_window(
        &self,
        title: impl Into<String>,
        app_id: ApplicationId,
        props: Value,
        size: Option<WindowSize>,
    ) {
        self.sender.call(AppCommand::OpenNewWindow(OpenWindowIntent {
            title: title.into(),
            app_id,
            props,
            size,
        }));
    }

    /// Closes the window this service was issued to.
    pub fn close(&self) {
        self.sender.call(AppCommand::CloseWindow);
    }
}

#[derive(Clone, Copy)]
/// Theme context: the active theme name plus a setter.
pub struct ThemeService {
    sender: Callback<AppCommand>,
    active_theme: Signal<String>,
}

impl ThemeService {
    /// Returns the active theme display name (reactive).
    pub fn active_theme(&self) -> String {
        self.active_theme.get()
    }

    /// Switches the desktop theme; unknown names fall back to the default theme.
    pub fn set_theme(&self, theme_name: impl Into<String>) {
        self.sender.call(AppCommand::SetTheme {
            theme_name: theme_name.into(),
        });
    }
}

/// Disposal hook registered by content.
pub type Disposer = Box<dyn FnOnce()>;

#[derive(Clone)]
/// Scoped-resource registration for the hosting window.
///
/// Disposers run exactly once when the window leaves the store, whichever path closed it.
pub struct LifecycleService {
    register: Rc<dyn Fn(Disposer)>,
}

impl LifecycleService {
    /// Creates a lifecycle service from the runtime's registration hook.
    pub fn new(register: Rc<dyn Fn(Disposer)>) -> Self {
        Self { register }
    }

    /// Registers `dispose` to run when the window closes.
    pub fn on_dispose(&self, dispose: impl FnOnce() + 'static) {
        (self.register)(Box::new(dispose));
    }
}

#[derive(Clone)]
/// Playlist collaborator scoped to the signed-in user.
pub struct PlaylistService {
    sync: Rc<dyn PlaylistSync>,
    user_id: String,
}

impl PlaylistService {
    /// Binds a playlist backend to `user_id`.
    pub fn new(sync: Rc<dyn PlaylistSync>, user_id: impl Into<String>) -> Self {
        Self {
            sync,
            user_id: user_id.into(),
        }
    }

    /// Returns the user the service is scoped to.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Loads the user's library.
    ///
    /// # Errors
    ///
    /// Returns the backend's error message.
    pub async fn load(&self) -> Result<PlaylistLibrary, String> {
        self.sync.load_playlists(&self.user_id).await
    }

    /// Stores the user's full library.
    ///
    /// # Errors
    ///
    /// Returns the backend's error message.
    pub async fn save(&self, library: &PlaylistLibrary) -> Result<(), String> {
        self.sync.save_playlists(&self.user_id, library).await
    }

    /// Deletes one playlist from the backend.
    ///
    /// # Errors
    ///
    /// Returns the backend's error message.
    pub async fn remove(&self, name: &str) -> Result<(), String> {
        self.sync.remove_playlist(&self.user_id, name).await
    }
}

#[derive(Clone)]
/// Injected app services bundle.
pub struct AppServices {
    /// Window spawning and self-close.
    pub window: WindowService,
    /// Theme context.
    pub theme: ThemeService,
    /// Disposal registration.
    pub lifecycle: LifecycleService,
    /// Playlist collaborator.
    pub playlists: PlaylistService,
}

impl AppServices {
    /// Creates service handles from the runtime command callback.
    pub fn new(
        sender: Callback<AppCommand>,
        active_theme: Signal<String>,
        lifecycle: LifecycleService,
        playlists: PlaylistService,
    ) -> Self {
        Self {
            window: WindowService { sender },
            theme: ThemeService {
                sender,
                active_theme,
            },
            lifecycle,
            playlists,
        }
    }
}

#[derive(Clone)]
/// App mount context injected by the desktop runtime per window instance.
pub struct AppMountContext {
    /// App id of the mounted module.
    pub app_id: ApplicationId,
    /// Instance id of the hosting window, fixed at creation.
    pub window_id: InstanceId,
    /// Property bag supplied at window-open time.
    pub props: Value,
    /// Runtime service bundle bound to this window.
    pub services: AppServices,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mountable content factory.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use leptos::create_runtime;
    use platform_host::MemoryPlaylistSync;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn application_id_requires_dotted_namespaces() {
        assert!(ApplicationId::new("system.my-computer").is_ok());
        assert!(ApplicationId::new("media.radio-player").is_ok());
        assert!(ApplicationId::new("radio").is_err());
        assert!(ApplicationId::new("Media.radio").is_err());
        assert!(ApplicationId::new("media..radio").is_err());
        assert!(ApplicationId::new("media.radio-").is_err());
    }

    #[test]
    fn window_and_theme_services_emit_commands() {
        let runtime = create_runtime();
        let sent = Rc::new(RefCell::new(Vec::new()));
        let sink = sent.clone();
        let sender = Callback::new(move |command: AppCommand| sink.borrow_mut().push(command));
        let services = AppServices::new(
            sender,
            Signal::derive(|| "Windows 95".to_string()),
            LifecycleService::new(Rc::new(|_| {})),
            PlaylistService::new(Rc::new(MemoryPlaylistSync::default()), "ada"),
        );

        services.window.open_new_window(
            "OldRadioPlayer",
            ApplicationId::trusted("media.radio-player"),
            serde_json::json!({ "current_index": 0 }),
            Some(WindowSize::new(376, 535)),
        );
        services.window.close();
        services.theme.set_theme("macOS");

        assert_eq!(services.theme.active_theme(), "Windows 95");
        assert_eq!(
            sent.borrow().clone(),
            vec![
                AppCommand::OpenNewWindow(OpenWindowIntent {
                    title: "OldRadioPlayer".to_string(),
                    app_id: ApplicationId::trusted("media.radio-player"),
                    props: serde_json::json!({ "current_index": 0 }),
                    size: Some(WindowSize::new(376, 535)),
                }),
                AppCommand::CloseWindow,
                AppCommand::SetTheme {
                    theme_name: "macOS".to_string(),
                },
            ]
        );
        runtime.dispose();
    }

    #[test]
    fn lifecycle_service_forwards_disposers() {
        let registered: Rc<RefCell<Vec<Disposer>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = registered.clone();
        let lifecycle = LifecycleService::new(Rc::new(move |d| sink.borrow_mut().push(d)));
        let fired = Rc::new(RefCell::new(false));
        let flag = fired.clone();

        lifecycle.on_dispose(move || *flag.borrow_mut() = true);
        for dispose in registered.borrow_mut().drain(..) {
            dispose();
        }

        assert!(*fired.borrow());
    }
}
