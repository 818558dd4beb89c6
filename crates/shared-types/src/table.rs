use std::cmp::Ordering;

use crate::order::OrderRecord;

/// Rows shown by the orders table; there are no pagination controls.
pub const PAGE_SIZE: usize = 10;

/// Columns of the orders table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderColumn {
    Action,
    OrderId,
    Status,
    Customer,
    Address,
    Distance,
}

pub const ALL_COLUMNS: &[OrderColumn] = &[
    OrderColumn::Action,
    OrderColumn::OrderId,
    OrderColumn::Status,
    OrderColumn::Customer,
    OrderColumn::Address,
    OrderColumn::Distance,
];

impl OrderColumn {
    pub fn header(&self) -> &'static str {
        match self {
            OrderColumn::Action => "ACTIONS",
            OrderColumn::OrderId => "ORDER",
            OrderColumn::Status => "STATUS",
            OrderColumn::Customer => "CUSTOMER",
            OrderColumn::Address => "ADDRESS",
            OrderColumn::Distance => "DISTANCE (KM)",
        }
    }

    /// The action column only hosts the open-detail control.
    pub fn is_sortable(&self) -> bool {
        !matches!(self, OrderColumn::Action)
    }

    fn compare(&self, a: &OrderRecord, b: &OrderRecord) -> Ordering {
        match self {
            OrderColumn::Action => Ordering::Equal,
            OrderColumn::OrderId => a.order_id.cmp(&b.order_id),
            OrderColumn::Status => a.status.cmp(&b.status),
            OrderColumn::Customer => a
                .customer_name
                .to_lowercase()
                .cmp(&b.customer_name.to_lowercase()),
            OrderColumn::Address => a.address.to_lowercase().cmp(&b.address.to_lowercase()),
            OrderColumn::Distance => a.distance_km.total_cmp(&b.distance_km),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Current sort of the table; `None` keeps input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub sort: Option<(OrderColumn, SortDirection)>,
}

impl SortState {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn by(column: OrderColumn, direction: SortDirection) -> Self {
        Self {
            sort: Some((column, direction)),
        }
    }

    /// Direction applied to `column`, if it is the sorted one.
    pub fn direction_of(&self, column: OrderColumn) -> Option<SortDirection> {
        match self.sort {
            Some((c, d)) if c == column => Some(d),
            _ => None,
        }
    }

    /// Header click: ascending, then descending, then back to unsorted.
    /// Clicking a different column starts over at ascending.
    pub fn toggle(self, column: OrderColumn) -> Self {
        if !column.is_sortable() {
            return self;
        }
        match self.direction_of(column) {
            None => Self::by(column, SortDirection::Ascending),
            Some(SortDirection::Ascending) => Self::by(column, SortDirection::Descending),
            Some(SortDirection::Descending) => Self::unsorted(),
        }
    }

    /// Stable sort of `orders` without touching the input.
    ///
    /// Ties keep their input order in both directions.
    pub fn apply<'a>(&self, orders: &'a [OrderRecord]) -> Vec<&'a OrderRecord> {
        let mut rows: Vec<&OrderRecord> = orders.iter().collect();
        if let Some((column, direction)) = self.sort {
            rows.sort_by(|a, b| {
                let ord = column.compare(a, b);
                match direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }
        rows
    }

    /// First [`PAGE_SIZE`] rows of the current sort order.
    pub fn visible_rows<'a>(&self, orders: &'a [OrderRecord]) -> Vec<&'a OrderRecord> {
        let mut rows = self.apply(orders);
        rows.truncate(PAGE_SIZE);
        rows
    }
}
