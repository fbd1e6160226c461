//! Orders domain module.
//!
//! This crate contains the order model, operator-input parsing, and report
//! rendering, implemented purely as deterministic domain logic (no IO, no
//! storage).

pub mod order;
pub mod report;

pub use order::{LineItem, Order, parse_price, parse_quantity};
pub use report::{format_order_detail, format_report, format_selection_list, group_thousands};
