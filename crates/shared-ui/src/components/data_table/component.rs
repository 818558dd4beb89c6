use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowDown, LdArrowUp, LdArrowUpDown};
use dioxus_free_icons::Icon;

/// Sort state shown next to a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortIndicator {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortIndicator {
    /// Value for the `aria-sort` attribute.
    pub fn aria(&self) -> &'static str {
        match self {
            SortIndicator::Unsorted => "none",
            SortIndicator::Ascending => "ascending",
            SortIndicator::Descending => "descending",
        }
    }
}

/// Scrollable table wrapper with co-located styles.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// Wraps header cells in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

/// Plain, non-interactive column header.
#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { {children} }
    }
}

/// Column header that cycles its sort when clicked.
#[component]
pub fn DataTableSortColumn(
    label: String,
    #[props(default)] indicator: SortIndicator,
    on_toggle: EventHandler<()>,
) -> Element {
    rsx! {
        th { "aria-sort": indicator.aria(),
            button {
                class: "data-table-sort",
                r#type: "button",
                "data-sorted": if indicator == SortIndicator::Unsorted { "false" } else { "true" },
                onclick: move |_| on_toggle.call(()),
                span { "{label}" }
                match indicator {
                    SortIndicator::Ascending => rsx! {
                        Icon::<LdArrowUp> { icon: LdArrowUp, width: 14, height: 14 }
                    },
                    SortIndicator::Descending => rsx! {
                        Icon::<LdArrowDown> { icon: LdArrowDown, width: 14, height: 14 }
                    },
                    SortIndicator::Unsorted => rsx! {
                        Icon::<LdArrowUpDown> { icon: LdArrowUpDown, width: 14, height: 14 }
                    },
                }
            }
        }
    }
}

/// Table row; clickable when `onclick` is set.
#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let has_click = onclick.is_some();
    rsx! {
        tr {
            class: if has_click { "data-table-row clickable" } else { "data-table-row" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

/// Full-width row shown when the table has no data.
#[component]
pub fn DataTableEmpty(colspan: usize, children: Element) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan: "{colspan}", {children} }
        }
    }
}
