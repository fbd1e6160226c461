//! Text renderings of order lists.
//!
//! Everything here is a pure projection of its input: no IO, no mutation.
//! Callers decide where the text goes.
//!
//! Each view is a `Display` wrapper over borrowed orders; the `format_*`
//! functions render it to a `String`.

use core::fmt;

use crate::order::{LineItem, Order};

/// Shown by [`format_report`] when there is nothing to report.
pub const NO_ORDERS_MESSAGE: &str = "=> No orders yet";

const RULE_WIDTH: usize = 50;

/// Format an integer with `,` between groups of three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn rule(f: &mut fmt::Formatter<'_>, ch: char, width: usize) -> fmt::Result {
    writeln!(f, "{}", ch.to_string().repeat(width))
}

/// Pending-orders report over a borrowed list.
struct Report<'a>(&'a [Order]);

impl Report<'_> {
    fn write_order(f: &mut fmt::Formatter<'_>, position: usize, order: &Order) -> fmt::Result {
        writeln!(f, "Order #{position}")?;
        writeln!(f, "Order ID: {}", order.order_id)?;
        writeln!(f, "Customer: {}", order.customer)?;
        rule(f, '-', RULE_WIDTH)?;
        writeln!(f, "Item\tUnit Price\tQty\tSubtotal")?;
        rule(f, '-', RULE_WIDTH)?;
        for item in &order.items {
            Self::write_row(f, item)?;
        }
        rule(f, '-', RULE_WIDTH)?;
        writeln!(f, "Order Total: {}", group_thousands(order.total()))?;
        rule(f, '=', RULE_WIDTH)
    }

    fn write_row(f: &mut fmt::Formatter<'_>, item: &LineItem) -> fmt::Result {
        writeln!(
            f,
            "{}\t{}\t{}\t{}",
            item.name,
            group_thousands(item.price),
            item.quantity,
            group_thousands(item.subtotal()),
        )
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "{NO_ORDERS_MESSAGE}");
        }

        writeln!(f, "\n{0} Order Report {0}", "=".repeat(20))?;
        for (position, order) in self.0.iter().enumerate() {
            Self::write_order(f, position + 1, order)?;
        }
        Ok(())
    }
}

struct SelectionList<'a>(&'a [Order]);

impl fmt::Display for SelectionList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n{0} Pending Orders {0}", "=".repeat(8))?;
        for (position, order) in self.0.iter().enumerate() {
            writeln!(
                f,
                "{}. Order ID: {} - Customer: {}",
                position + 1,
                order.order_id,
                order.customer
            )?;
        }
        rule(f, '=', 30)
    }
}

struct OrderDetail<'a>(&'a Order);

impl fmt::Display for OrderDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = self.0;
        writeln!(f, "Order ID: {}", order.order_id)?;
        writeln!(f, "Customer: {}", order.customer)?;
        writeln!(f, "Items:")?;
        for item in &order.items {
            writeln!(
                f,
                "  - {} x {} @ {} = {}",
                item.name,
                item.quantity,
                group_thousands(item.price),
                group_thousands(item.subtotal()),
            )?;
        }
        writeln!(f, "Total: {}", group_thousands(order.total()))
    }
}

/// Render the pending-orders report.
///
/// For each order, in list order: its 1-based position, id and customer, one
/// row per line item (name, unit price, quantity, subtotal), then the total.
pub fn format_report(orders: &[Order]) -> String {
    Report(orders).to_string()
}

/// One line per pending order, numbered for the fulfillment prompt.
pub fn format_selection_list(orders: &[Order]) -> String {
    SelectionList(orders).to_string()
}

/// Detailed view of a single order, used to confirm a fulfillment.
pub fn format_order_detail(order: &Order) -> String {
    OrderDetail(order).to_string()
}
