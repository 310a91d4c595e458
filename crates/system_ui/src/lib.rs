//! Shared UI primitive library for the desktop shell chrome and hosted apps.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM contract consumed by
//! the theme stylesheets. Apps should compose these primitives instead of emitting ad hoc control
//! markup, so a theme switch restyles every window body the same way it restyles the chrome.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Button, ButtonSize, ButtonVariant, Cluster, DesktopBackdrop, DesktopIconButton,
    DesktopIconGrid, DesktopRoot, DesktopWindowLayer, EmptyState, FieldGroup, Heading,
    InlineMessage, LayoutGap, ListSurface, RangeField, ResizeHandle, SelectField,
    Stack, Text, TextField, TextRole, TextTone, TopStrip, TopStripSection, WindowBody,
    WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonSize, ButtonVariant, Cluster, EmptyState, FieldGroup, Heading,
        InlineMessage, LayoutGap, ListSurface, RangeField, SelectField, Stack, Text,
        TextField, TextRole, TextTone,
    };
}
