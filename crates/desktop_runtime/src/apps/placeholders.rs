//! Built-in desktop apps whose windows only show a short static body.

use desktop_app_contract::AppMountContext;
use leptos::*;
use system_ui::prelude::*;

#[component]
fn PlaceholderBody(heading: &'static str, detail: &'static str) -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Sm layout_class="app-placeholder">
            <Heading>{heading}</Heading>
            <Text tone=TextTone::Secondary>{detail}</Text>
        </Stack>
    }
}

/// Mounts the My Computer window body.
pub(super) fn mount_my_computer_app(_: AppMountContext) -> View {
    view! { <PlaceholderBody heading="My Computer" detail="Local Disk (C:) and a floppy drive that nobody has used since 1998." /> }
        .into_view()
}

/// Mounts the My Documents window body.
pub(super) fn mount_my_documents_app(_: AppMountContext) -> View {
    view! { <PlaceholderBody heading="My Documents" detail="This folder is empty." /> }.into_view()
}

/// Mounts the Internet Explorer window body.
pub(super) fn mount_internet_explorer_app(_: AppMountContext) -> View {
    view! { <PlaceholderBody heading="Internet Explorer" detail="The page cannot be displayed. Check your dial-up connection." /> }
        .into_view()
}

/// Mounts the Recycle Bin window body.
pub(super) fn mount_recycle_bin_app(_: AppMountContext) -> View {
    view! { <PlaceholderBody heading="Recycle Bin" detail="The Recycle Bin is empty." /> }.into_view()
}

/// Mounts the Media Player window body.
pub(super) fn mount_media_player_app(_: AppMountContext) -> View {
    view! { <PlaceholderBody heading="Media Player" detail="Open the Playlist Manager to queue something up." /> }
        .into_view()
}
