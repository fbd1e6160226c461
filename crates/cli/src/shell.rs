//! Interactive menu loop.
//!
//! ```text
//! 1. Create order   -> OrderManager::create_order
//! 2. Show report    -> format_report(list_pending)
//! 3. Fulfill order  -> OrderManager::fulfill_selection
//! 4. Exit           (blank input or end of input also exits)
//! ```
//!
//! Every `OrderError` is turned into a `=> Error: ...` line and the loop goes
//! back to the menu. Only terminal I/O failures end the loop early.

use std::io::{self, BufRead, Write};

use ordertrack_core::OrderId;
use ordertrack_infra::{OrderListStore, OrderManager};
use ordertrack_sales::{
    LineItem, format_order_detail, format_report, format_selection_list, parse_price,
    parse_quantity,
};

use crate::prompt::Prompter;

const MENU: &str = "\
*************** Menu ***************
1. Create order
2. Show order report
3. Fulfill order
4. Exit
************************************";

/// Menu entries, parsed from the operator's choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateOrder,
    ShowReport,
    FulfillOrder,
    Exit,
}

impl MenuChoice {
    /// Blank input means exit; unknown text is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "" | "4" => Some(Self::Exit),
            "1" => Some(Self::CreateOrder),
            "2" => Some(Self::ShowReport),
            "3" => Some(Self::FulfillOrder),
            _ => None,
        }
    }
}

/// The interactive shell, driven by any line reader and writer.
pub struct Shell<'m, P, F, R, W> {
    manager: &'m OrderManager<P, F>,
    prompt: Prompter<R, W>,
}

impl<'m, P, F, R, W> Shell<'m, P, F, R, W>
where
    P: OrderListStore,
    F: OrderListStore,
    R: BufRead,
    W: Write,
{
    pub fn new(manager: &'m OrderManager<P, F>, input: R, output: W) -> Self {
        Self {
            manager,
            prompt: Prompter::new(input, output),
        }
    }

    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }

    /// Run the menu loop until the operator exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.prompt.say(MENU)?;
            let Some(answer) = self.prompt.ask("Select an option (Enter to exit): ")? else {
                break;
            };

            match MenuChoice::parse(&answer) {
                Some(MenuChoice::CreateOrder) => self.create_order()?,
                Some(MenuChoice::ShowReport) => self.show_report()?,
                Some(MenuChoice::FulfillOrder) => self.fulfill_order()?,
                Some(MenuChoice::Exit) => break,
                None => self.prompt.say("=> Please enter a valid option (1-4)")?,
            }
        }

        tracing::debug!("shell exiting");
        self.prompt.flush()
    }

    fn create_order(&mut self) -> io::Result<()> {
        let Some(raw_id) = self.prompt.ask("Order ID: ")? else {
            return Ok(());
        };
        let id = OrderId::new(&raw_id);
        if let Err(err) = self.manager.ensure_id_available(&id) {
            return self.prompt.say(&format!("=> Error: {err}"));
        }

        let Some(customer) = self.prompt.ask("Customer name: ")? else {
            return Ok(());
        };

        let mut items = Vec::new();
        loop {
            let Some(name) = self.prompt.ask("Item name (blank to finish): ")? else {
                return Ok(());
            };
            if name.is_empty() {
                break;
            }
            let Some(price) = self.prompt.ask_until("Price: ", parse_price)? else {
                return Ok(());
            };
            let Some(quantity) = self.prompt.ask_until("Quantity: ", parse_quantity)? else {
                return Ok(());
            };

            match LineItem::new(&name, price, quantity) {
                Ok(item) => items.push(item),
                Err(err) => self.prompt.say(&format!("=> Error: {err}"))?,
            }
        }

        match self.manager.create_order(&id, &customer, items) {
            Ok(order) => self
                .prompt
                .say(&format!("=> Order {} added!", order.order_id)),
            Err(err) => self.prompt.say(&format!("=> Error: {err}")),
        }
    }

    fn show_report(&mut self) -> io::Result<()> {
        let orders = self.manager.list_pending();
        self.prompt.write_raw(&format_report(&orders))
    }

    fn fulfill_order(&mut self) -> io::Result<()> {
        let pending = self.manager.list_pending();
        if pending.is_empty() {
            return self.prompt.say("=> No orders to fulfill");
        }
        self.prompt.write_raw(&format_selection_list(&pending))?;

        let Some(answer) = self
            .prompt
            .ask("Select the order to fulfill (number, or Enter to cancel): ")?
        else {
            return Ok(());
        };

        match self.manager.fulfill_selection(&answer) {
            Ok(Some(order)) => {
                self.prompt
                    .say(&format!("=> Order {} fulfilled:", order.order_id))?;
                self.prompt.write_raw(&format_order_detail(&order))
            }
            Ok(None) => Ok(()),
            Err(err) => self.prompt.say(&format!("=> Error: {err}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choice_parsing() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::CreateOrder));
        assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::ShowReport));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::FulfillOrder));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse(""), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse("create"), None);
    }
}
