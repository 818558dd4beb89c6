use dioxus::prelude::*;

/// Open/closed state shared by the sidebar and its triggers.
///
/// `open` drives the docked column on wide screens; `overlay_open` drives
/// the drawer shown over the page on narrow ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
    pub overlay_open: bool,
}

/// Provides sidebar state to its children.
#[component]
pub fn SidebarProvider(#[props(default = true)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState {
        open: default_open,
        overlay_open: false,
    });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-open": if state().open { "true" } else { "false" },
            {children}
        }
    }
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

/// Collapsible navigation column. Narrow viewports get a tap-to-close backdrop.
#[component]
pub fn Sidebar(children: Element) -> Element {
    let mut state = use_sidebar();
    let SidebarState { open, overlay_open } = state();

    rsx! {
        if overlay_open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.with_mut(|s| s.overlay_open = false),
            }
        }
        aside {
            class: "sidebar",
            "data-state": if open { "open" } else { "closed" },
            "data-overlay": if overlay_open { "open" } else { "closed" },
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-header", {children} }
    }
}

#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        nav { class: "sidebar-content", {children} }
    }
}

#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

#[component]
pub fn SidebarGroupLabel(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-group-label", {children} }
    }
}

#[component]
pub fn SidebarMenu(children: Element) -> Element {
    rsx! {
        ul { class: "sidebar-menu", {children} }
    }
}

#[component]
pub fn SidebarMenuItem(children: Element) -> Element {
    rsx! {
        li { class: "sidebar-menu-item", {children} }
    }
}

/// Visual body of a menu entry; wrap it in a router `Link`.
///
/// Selecting an entry closes the drawer on narrow screens.
#[component]
pub fn SidebarMenuButton(#[props(default = false)] active: bool, children: Element) -> Element {
    let mut state = use_sidebar();

    rsx! {
        span {
            class: "sidebar-menu-button",
            "data-active": if active { "true" } else { "false" },
            "aria-current": if active { "page" } else { "false" },
            onclick: move |_| state.with_mut(|s| s.overlay_open = false),
            {children}
        }
    }
}

/// Button that opens or closes the sidebar.
#[component]
pub fn SidebarTrigger(children: Element) -> Element {
    let mut state = use_sidebar();

    rsx! {
        button {
            class: "sidebar-trigger",
            r#type: "button",
            "aria-label": "Toggle sidebar",
            onclick: move |_| {
                state.with_mut(|s| {
                    s.open = !s.open;
                    s.overlay_open = !s.overlay_open;
                });
            },
            {children}
        }
    }
}

/// Content column beside the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        main { class: "sidebar-inset", {children} }
    }
}
