use std::sync::Arc;

use chrono::NaiveDate;

use stockroom_core::{Entity, Money};
use stockroom_parties::Customer;
use stockroom_products::Product;

stockroom_core::numeric_id! {
    /// Order line identifier.
    pub struct OrderLineId;
}

stockroom_core::numeric_id! {
    /// Customer order identifier.
    pub struct CustomerOrderId;
}

/// Order line: product, quantity, unit price.
///
/// The unit price is captured when the line is created and does not follow
/// later changes to the product.
#[derive(Debug, Clone)]
pub struct OrderLine {
    id: OrderLineId,
    product: Arc<Product>,
    quantity: u32,
    unit_price: Money,
}

impl OrderLine {
    pub fn new(
        id: OrderLineId,
        product: Arc<Product>,
        quantity: u32,
        unit_price: Money,
    ) -> Self {
        Self {
            id,
            product,
            quantity,
            unit_price,
        }
    }

    pub fn product(&self) -> &Arc<Product> {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// `quantity × unit_price`.
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

impl Entity for OrderLine {
    type Id = OrderLineId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl core::fmt::Display for OrderLine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "OrderLine(id={}, product={}, qty={}, unit_price={})",
            self.id,
            self.product.name(),
            self.quantity,
            self.unit_price
        )
    }
}

/// A customer's order with its lines in the order they were added.
#[derive(Debug, Clone)]
pub struct CustomerOrder {
    id: CustomerOrderId,
    customer: Arc<Customer>,
    date: NaiveDate,
    status: String,
    lines: Vec<OrderLine>,
}

impl CustomerOrder {
    pub fn new(
        id: CustomerOrderId,
        customer: Arc<Customer>,
        date: NaiveDate,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id,
            customer,
            date,
            status: status.into(),
            lines: Vec::new(),
        }
    }

    pub fn customer(&self) -> &Arc<Customer> {
        &self.customer
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Free-text status (e.g. "Pending").
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn add_order_line(&mut self, line: OrderLine) {
        tracing::debug!(
            order_id = %self.id,
            line_id = %line.id,
            line_total = %line.line_total(),
            "order line added"
        );
        self.lines.push(line);
    }

    /// Sum of all line totals; zero for an order without lines.
    pub fn total(&self) -> Money {
        self.lines.iter().map(OrderLine::line_total).sum()
    }
}

impl Entity for CustomerOrder {
    type Id = CustomerOrderId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl core::fmt::Display for CustomerOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "CustomerOrder(id={}, customer={}, total={})",
            self.id,
            self.customer.name(),
            self.total()
        )
    }
}
