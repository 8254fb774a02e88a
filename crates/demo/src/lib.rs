//! `stockroom-demo` — the fixed warehouse walkthrough.
//!
//! Builds a small catalog, stocks it, writes off defective units, takes an
//! order and records the sale, writing each step's result to `out`.

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use chrono::NaiveDate;

use stockroom_auth::{User, UserId, UserRole};
use stockroom_core::{DomainError, Entity, Money};
use stockroom_inventory::{InventoryRecord, InventoryRecordId, WarehouseCell, WarehouseCellId};
use stockroom_parties::{Address, Customer, CustomerId, Supplier, SupplierId};
use stockroom_products::{Category, CategoryId, Product, ProductId};
use stockroom_sales::{CustomerOrder, CustomerOrderId, OrderLine, OrderLineId, Sale, SaleId};

/// Outcome of [`run_scenario`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioReport {
    pub order_total: Money,
    /// Engine V6 units left after the defect write-off.
    pub engine_v6_remaining: u32,
    /// Error returned by the oversized second defect report.
    pub rejected_defect: Option<DomainError>,
}

pub fn run_scenario<W: Write>(out: &mut W, today: NaiveDate) -> anyhow::Result<ScenarioReport> {
    let _span = tracing::info_span!("scenario", %today).entered();

    let engines = Arc::new(Category::new(CategoryId::new(1), "Engines"));
    let v6 = Arc::new(Product::new(
        ProductId::new(101),
        "Engine V6",
        Money::from_major(2500),
        engines.clone(),
    ));
    let v8 = Arc::new(Product::new(
        ProductId::new(102),
        "Engine V8",
        Money::from_major(4000),
        engines,
    ));

    let mut supplier = Supplier::new(SupplierId::new(201), "Motors");
    supplier.add_product(v6.clone());
    supplier.add_product(v8.clone());

    let cell = Arc::new(WarehouseCell::new(WarehouseCellId::new(301), "A1", 100));
    let mut v6_stock = InventoryRecord::new(
        InventoryRecordId::new(401),
        v6.clone(),
        cell.clone(),
        10,
    );
    let v8_stock = InventoryRecord::new(InventoryRecordId::new(402), v8.clone(), cell, 5);

    v6_stock
        .report_defect(2)
        .context("writing off defective Engine V6 units")?;

    let address = Address::new("Ukraine", "Kyiv", "Khreshchatyk");
    let customer = Arc::new(Customer::new(
        CustomerId::new(501),
        "Пан Роман",
        "pan@roman.com",
        Some(address),
    ));
    writeln!(out, "{customer}")?;

    let mut order = CustomerOrder::new(CustomerOrderId::new(601), customer, today, "Pending");

    writeln!(out, "{} {}", v6.price(), v8.price())?;
    order.add_order_line(OrderLine::new(OrderLineId::new(701), v6.clone(), 2, v6.price()));
    order.add_order_line(OrderLine::new(OrderLineId::new(702), v8.clone(), 1, v8.price()));

    let order_total = order.total();
    writeln!(out, "{order_total}")?;
    tracing::info!(order_id = %order.id(), total = %order_total, "order priced");

    let sale = Sale::new(SaleId::new(801), today, order_total);
    sale.write_receipt(out).context("writing sale receipt")?;

    let manager = User::new(
        UserId::new(901),
        "Manager1",
        "manager1",
        "pass",
        UserRole::Manager,
    );
    writeln!(out, "{manager}")?;

    for product in supplier.provided_products() {
        writeln!(out, "{product}")?;
    }

    writeln!(out, "{v6_stock}")?;
    writeln!(out, "{v8_stock}")?;

    let rejected_defect = v6_stock.report_defect(9).err();
    if let Some(err) = &rejected_defect {
        writeln!(out, "Defect report rejected: {err}")?;
    }

    Ok(ScenarioReport {
        order_total,
        engine_v6_remaining: v6_stock.available_quantity(),
        rejected_defect,
    })
}
