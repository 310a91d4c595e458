//! Ordered store of open window instances.
//!
//! Every operation is total: unknown ids are ignored and out-of-range geometry is clamped, so the
//! bounding invariants hold after each call. Insertion order doubles as z-order.

use desktop_app_contract::{ApplicationId, InstanceId, OpenWindowIntent};

use crate::{
    apps::AppRegistry,
    geometry::{clamp_position, settle_size},
    model::{
        DesktopBounds, WindowContent, WindowInstance, WindowPosition, WindowSize,
        DEFAULT_WINDOW_ORIGIN, ERROR_WINDOW_SIZE,
    },
};

#[derive(Debug, Clone, PartialEq, Default)]
/// Live windows in insertion order.
pub struct WindowStore {
    windows: Vec<WindowInstance>,
}

impl WindowStore {
    /// Opens the registry app `app_id` unless an instance of it is already open.
    ///
    /// Returns the new instance id, or `None` when the app is unknown or already open.
    pub fn open_from_registry(
        &mut self,
        registry: &AppRegistry,
        app_id: &ApplicationId,
        bounds: DesktopBounds,
    ) -> Option<InstanceId> {
        let descriptor = registry.get(app_id)?;
        let instance_id = InstanceId::new(app_id.as_str());
        if self.contains(&instance_id) {
            return None;
        }

        self.push(
            instance_id.clone(),
            descriptor.display_name.clone(),
            WindowContent::Component {
                app_id: app_id.clone(),
                module: descriptor.module,
                props: serde_json::Value::Null,
            },
            descriptor.default_size,
            bounds,
        );
        Some(instance_id)
    }

    /// Opens a window for `intent` unconditionally and returns its id.
    ///
    /// The id is `{title}-{created_at_ms}`, suffixed with `-2`, `-3`, ... if that id is live.
    /// An app id missing from the registry yields an error window instead of a component.
    pub fn open_ad_hoc(
        &mut self,
        registry: &AppRegistry,
        intent: OpenWindowIntent,
        bounds: DesktopBounds,
        created_at_ms: u64,
    ) -> InstanceId {
        let OpenWindowIntent {
            title,
            app_id,
            props,
            size,
        } = intent;
        let instance_id = self.unused_instance_id(&format!("{title}-{created_at_ms}"));

        let (content, default_size) = match registry.get(&app_id) {
            Some(descriptor) => (
                WindowContent::Component {
                    app_id,
                    module: descriptor.module,
                    props,
                },
                descriptor.default_size,
            ),
            None => (
                WindowContent::Error {
                    message: format!("No application is registered as `{app_id}`."),
                },
                ERROR_WINDOW_SIZE,
            ),
        };

        self.push(
            instance_id.clone(),
            title,
            content,
            size.unwrap_or(default_size),
            bounds,
        );
        instance_id
    }

    /// Removes `instance_id`. Returns whether a window was removed.
    pub fn close(&mut self, instance_id: &InstanceId) -> bool {
        let before = self.windows.len();
        self.windows
            .retain(|window| &window.instance_id != instance_id);
        self.windows.len() != before
    }

    /// Moves a window to `position`.
    ///
    /// The size is settled against `bounds` first, so a desktop that shrank since the window
    /// opened still ends up containing it.
    pub fn move_window(
        &mut self,
        instance_id: &InstanceId,
        position: WindowPosition,
        bounds: DesktopBounds,
    ) -> bool {
        let Some(window) = self.get_mut(instance_id) else {
            return false;
        };
        window.size = settle_size(window.size, bounds);
        window.position = clamp_position(position, window.size, bounds);
        true
    }

    /// Resizes a window: 80% ceiling, then the 200x150 floor.
    ///
    /// The position is kept unless the new size would overflow the desktop, in which case it is
    /// pulled back just enough.
    pub fn resize(
        &mut self,
        instance_id: &InstanceId,
        size: WindowSize,
        bounds: DesktopBounds,
    ) -> bool {
        let Some(window) = self.get_mut(instance_id) else {
            return false;
        };
        window.size = settle_size(size, bounds);
        window.position = clamp_position(window.position, window.size, bounds);
        true
    }

    /// Iterates live windows in insertion order. Each call starts a fresh pass.
    pub fn list(&self) -> impl Iterator<Item = &WindowInstance> + Clone + '_ {
        self.windows.iter()
    }

    /// Looks up a live window.
    pub fn get(&self, instance_id: &InstanceId) -> Option<&WindowInstance> {
        self.windows
            .iter()
            .find(|window| &window.instance_id == instance_id)
    }

    /// Whether `instance_id` is live.
    pub fn contains(&self, instance_id: &InstanceId) -> bool {
        self.get(instance_id).is_some()
    }

    /// Number of live windows.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Whether no window is open.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    fn get_mut(&mut self, instance_id: &InstanceId) -> Option<&mut WindowInstance> {
        self.windows
            .iter_mut()
            .find(|window| &window.instance_id == instance_id)
    }

    fn unused_instance_id(&self, stem: &str) -> InstanceId {
        let mut candidate = InstanceId::new(stem);
        let mut suffix = 2u32;
        while self.contains(&candidate) {
            candidate = InstanceId::new(format!("{stem}-{suffix}"));
            suffix += 1;
        }
        candidate
    }

    fn push(
        &mut self,
        instance_id: InstanceId,
        title: String,
        content: WindowContent,
        requested: WindowSize,
        bounds: DesktopBounds,
    ) {
        let size = settle_size(requested, bounds);
        let position = clamp_position(DEFAULT_WINDOW_ORIGIN, size, bounds);
        self.windows.push(WindowInstance {
            instance_id,
            title,
            content,
            position,
            size,
        });
    }
}
