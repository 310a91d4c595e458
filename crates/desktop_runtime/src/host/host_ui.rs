use leptos::{html, NodeRef};

use crate::model::DesktopBounds;

const FALLBACK_BOUNDS: DesktopBounds = DesktopBounds::new(1024, 736);

pub(super) fn measure_desktop_bounds(surface: NodeRef<html::Div>) -> DesktopBounds {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(element) = surface.get_untracked() {
            let rect = element.get_bounding_client_rect();
            return DesktopBounds::new(rect.width() as i32, rect.height() as i32);
        }
        return desktop_viewport_bounds();
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = surface;
        FALLBACK_BOUNDS
    }
}

#[cfg(target_arch = "wasm32")]
fn desktop_viewport_bounds() -> DesktopBounds {
    let Some(window) = web_sys::window() else {
        return FALLBACK_BOUNDS;
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .map(|value| value as i32)
        .unwrap_or(FALLBACK_BOUNDS.width);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .map(|value| value as i32)
        .unwrap_or(FALLBACK_BOUNDS.height);
    DesktopBounds::new(width, height)
}
