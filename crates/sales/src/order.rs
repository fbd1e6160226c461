use serde::{Deserialize, Serialize};

use ordertrack_core::{Entity, OrderError, OrderId, OrderResult, ValueObject};

/// Order line: product name, unit price, quantity.
///
/// Field names match the persisted file schema (`name`, `price`, `quantity`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    /// Unit price in whole currency units.
    pub price: u64,
    pub quantity: u64,
}

impl ValueObject for LineItem {}

impl LineItem {
    /// Build a validated line. The name is trimmed; quantity must be positive.
    pub fn new(name: impl AsRef<str>, price: u64, quantity: u64) -> OrderResult<Self> {
        if quantity == 0 {
            return Err(OrderError::InvalidQuantity(0));
        }

        Ok(Self {
            name: name.as_ref().trim().to_string(),
            price,
            quantity,
        })
    }

    pub fn subtotal(&self) -> u64 {
        self.price.saturating_mul(self.quantity)
    }

    fn validate(&self) -> OrderResult<()> {
        if self.quantity == 0 {
            return Err(OrderError::InvalidQuantity(0));
        }
        Ok(())
    }
}

/// A customer's order, as stored in the pending and fulfilled lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub customer: String,
    pub items: Vec<LineItem>,
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.order_id
    }
}

impl Order {
    /// Build a validated order. The customer name is trimmed.
    ///
    /// Fails with `EmptyItems` when there are no lines; each line is checked
    /// again so hand-built `LineItem`s cannot bypass the quantity rule.
    pub fn new(
        order_id: OrderId,
        customer: impl AsRef<str>,
        items: Vec<LineItem>,
    ) -> OrderResult<Self> {
        if items.is_empty() {
            return Err(OrderError::EmptyItems);
        }
        for item in &items {
            item.validate()?;
        }

        Ok(Self {
            order_id,
            customer: customer.as_ref().trim().to_string(),
            items,
        })
    }

    pub fn total(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, item| acc.saturating_add(item.subtotal()))
    }
}

/// Outcome of reading a whole number from operator input.
enum Whole {
    NonNegative(u64),
    Negative(i64),
}

fn parse_whole(input: &str) -> OrderResult<Whole> {
    let trimmed = input.trim();
    if let Ok(value) = trimmed.parse::<u64>() {
        return Ok(Whole::NonNegative(value));
    }
    match trimmed.parse::<i64>() {
        Ok(value) if value < 0 => Ok(Whole::Negative(value)),
        Ok(value) => Ok(Whole::NonNegative(value as u64)),
        Err(_) => Err(OrderError::invalid_number(trimmed)),
    }
}

/// Parse a unit price typed by the operator.
///
/// Non-integer text is `InvalidNumber`; a negative value is `InvalidPrice`.
pub fn parse_price(input: &str) -> OrderResult<u64> {
    match parse_whole(input)? {
        Whole::NonNegative(value) => Ok(value),
        Whole::Negative(value) => Err(OrderError::InvalidPrice(value)),
    }
}

/// Parse a quantity typed by the operator.
///
/// Non-integer text is `InvalidNumber`; zero or a negative value is `InvalidQuantity`.
pub fn parse_quantity(input: &str) -> OrderResult<u64> {
    match parse_whole(input)? {
        Whole::NonNegative(0) => Err(OrderError::InvalidQuantity(0)),
        Whole::NonNegative(value) => Ok(value),
        Whole::Negative(value) => Err(OrderError::InvalidQuantity(value)),
    }
}
