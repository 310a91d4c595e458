use super::*;

#[component]
/// Shared text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Shared heading primitive.
pub fn Heading(
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-heading", layout_class)
            role="heading"
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-variant=TextRole::Title.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Inline collaborator status line; renders nothing while `message` is empty.
pub fn InlineMessage(
    #[prop(default = TextTone::Danger)] tone: TextTone,
    #[prop(into)] message: MaybeSignal<String>,
) -> impl IntoView {
    let message = Signal::derive(move || message.get());

    view! {
        <Show when=move || !message.get().is_empty() fallback=|| ()>
            <p
                class="ui-inline-message"
                role="status"
                data-ui-primitive="true"
                data-ui-kind="inline-message"
                data-ui-tone=tone.token()
            >
                {move || message.get()}
            </p>
        </Show>
    }
}

#[component]
/// Empty state content block.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {children()}
        </div>
    }
}

#[component]
/// Scrollable list container.
pub fn ListSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <ul
            class=merge_layout_class("ui-list-surface", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="list-surface"
        >
            {children()}
        </ul>
    }
}
