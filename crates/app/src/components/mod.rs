pub mod map_widget;
pub mod order_workflow;
pub mod orders_table;
pub mod signature_pad;
