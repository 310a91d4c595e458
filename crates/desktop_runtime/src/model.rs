//! Window-manager data model: geometry, window instances, content, and pointer interaction.

use desktop_app_contract::{AppModule, ApplicationId, InstanceId};
pub use desktop_app_contract::WindowSize;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{theme::ThemeName, window_store::WindowStore};

/// Smallest width a window can be resized to.
pub const MIN_WINDOW_WIDTH: i32 = 200;
/// Smallest height a window can be resized to.
pub const MIN_WINDOW_HEIGHT: i32 = 150;
/// Where every new window is placed before clamping.
pub const DEFAULT_WINDOW_ORIGIN: WindowPosition = WindowPosition { x: 50, y: 50 };
/// Size of a window whose content could not be resolved.
pub const ERROR_WINDOW_SIZE: WindowSize = WindowSize::new(300, 200);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Top-left corner of a window in desktop-local pixels.
pub struct WindowPosition {
    /// Horizontal offset.
    pub x: i32,
    /// Vertical offset.
    pub y: i32,
}

impl WindowPosition {
    /// Creates a position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Measured size of the desktop surface that bounds every window.
pub struct DesktopBounds {
    /// Surface width in pixels.
    pub width: i32,
    /// Surface height in pixels.
    pub height: i32,
}

impl DesktopBounds {
    /// Creates bounds; negative measurements collapse to zero.
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width: if width < 0 { 0 } else { width },
            height: if height < 0 { 0 } else { height },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Position plus size, used for in-gesture previews.
pub struct WindowRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl WindowRect {
    /// Builds a rect from its parts.
    pub const fn from_parts(position: WindowPosition, size: WindowSize) -> Self {
        Self {
            x: position.x,
            y: position.y,
            w: size.width,
            h: size.height,
        }
    }

    /// Returns the top-left corner.
    pub const fn position(self) -> WindowPosition {
        WindowPosition::new(self.x, self.y)
    }

    /// Returns the size.
    pub const fn size(self) -> WindowSize {
        WindowSize::new(self.w, self.h)
    }

    /// Returns the rect translated by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

#[derive(Debug, Clone)]
/// What a window renders, decided once when the window opens.
pub enum WindowContent {
    /// A registered module mounted with `props`.
    Component {
        /// Module kind.
        app_id: ApplicationId,
        /// Mount function resolved from the registry.
        module: AppModule,
        /// Property bag handed to the module.
        props: Value,
    },
    /// The request could not be resolved; the window shows `message` instead.
    Error {
        /// Human-readable reason.
        message: String,
    },
}

impl WindowContent {
    /// Returns the module kind for component content.
    pub fn app_id(&self) -> Option<&ApplicationId> {
        match self {
            Self::Component { app_id, .. } => Some(app_id),
            Self::Error { .. } => None,
        }
    }
}

impl PartialEq for WindowContent {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Component {
                    app_id: a, props: pa, ..
                },
                Self::Component {
                    app_id: b, props: pb, ..
                },
            ) => a == b && pa == pb,
            (Self::Error { message: a }, Self::Error { message: b }) => a == b,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// One open window. Title and content are fixed at creation.
pub struct WindowInstance {
    pub(crate) instance_id: InstanceId,
    pub(crate) title: String,
    pub(crate) content: WindowContent,
    pub(crate) position: WindowPosition,
    pub(crate) size: WindowSize,
}

impl WindowInstance {
    /// Unique id among live windows.
    pub fn instance_id(&self) -> &InstanceId {
        &self.instance_id
    }

    /// Header text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Resolved content.
    pub fn content(&self) -> &WindowContent {
        &self.content
    }

    /// Top-left corner.
    pub fn position(&self) -> WindowPosition {
        self.position
    }

    /// Current size.
    pub fn size(&self) -> WindowSize {
        self.size
    }

    /// Position and size as one rect.
    pub fn rect(&self) -> WindowRect {
        WindowRect::from_parts(self.position, self.size)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Everything the shell renders: open windows plus the active theme.
pub struct DesktopState {
    /// Open windows in z-order.
    pub windows: WindowStore,
    /// Active theme.
    pub theme: ThemeName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Pointer coordinates in client pixels.
pub struct PointerPosition {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Edge or corner grabbed by a resize gesture. Only edges that leave the origin fixed exist.
pub enum ResizeEdge {
    /// Right edge.
    East,
    /// Bottom edge.
    South,
    /// Bottom-right corner.
    SouthEast,
}

impl ResizeEdge {
    /// All grabbable edges.
    pub const ALL: [Self; 3] = [Self::East, Self::South, Self::SouthEast];

    /// Stable slot token used by the handle markup.
    pub fn slot(self) -> &'static str {
        match self {
            Self::East => "edge-e",
            Self::South => "edge-s",
            Self::SouthEast => "edge-se",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// In-progress drag.
pub struct DragSession {
    /// Window being dragged.
    pub instance_id: InstanceId,
    /// Pointer position at drag start.
    pub pointer_start: PointerPosition,
    /// Window rect at drag start.
    pub rect_start: WindowRect,
    /// Desktop bounds measured at drag start.
    pub bounds: DesktopBounds,
    /// Rect the frame currently renders at.
    pub preview: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// In-progress resize.
pub struct ResizeSession {
    /// Window being resized.
    pub instance_id: InstanceId,
    /// Grabbed edge.
    pub edge: ResizeEdge,
    /// Pointer position at resize start.
    pub pointer_start: PointerPosition,
    /// Window rect at resize start.
    pub rect_start: WindowRect,
    /// Desktop bounds measured at resize start.
    pub bounds: DesktopBounds,
    /// Rect the frame currently renders at.
    pub preview: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Pointer interaction state; at most one gesture is active.
pub struct InteractionState {
    /// Active drag.
    pub dragging: Option<DragSession>,
    /// Active resize.
    pub resizing: Option<ResizeSession>,
}

impl InteractionState {
    /// Returns the rect `instance_id` should render at while a gesture is in flight.
    pub fn preview_for(&self, instance_id: &InstanceId) -> Option<WindowRect> {
        if let Some(drag) = self
            .dragging
            .as_ref()
            .filter(|session| &session.instance_id == instance_id)
        {
            return Some(drag.preview);
        }
        self.resizing
            .as_ref()
            .filter(|session| &session.instance_id == instance_id)
            .map(|session| session.preview)
    }
}
