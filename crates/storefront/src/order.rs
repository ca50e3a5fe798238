//! Order composer: immutable cart snapshots with customer details.
//!
//! Placing an order validates the customer's shipping details and freezes
//! the cart into value-copied lines resolved against the store at that
//! moment. The snapshot is decoupled from later cart mutation - clearing
//! the cart after a successful export leaves the order intact for
//! rendering the confirmation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use sk_accessories_core::{OrderId, Price, ProductId};

use crate::cart::CartLedger;
use crate::store::ProductStore;

/// Errors from order placement.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// A required customer field was empty after trimming.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The cart has no lines to order.
    #[error("cannot place an order with an empty cart")]
    EmptyCart,

    /// A cart line references a product the store no longer resolves.
    #[error("cart references unknown product: {0}")]
    UnknownProduct(ProductId),
}

/// Validated customer shipping details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub shop_name: String,
    pub address: String,
    pub phone: String,
    pub city: String,
}

impl CustomerDetails {
    /// Build details from raw form input, trimming and requiring all four
    /// fields.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::MissingField`] naming the first empty field.
    pub fn new(shop_name: &str, address: &str, phone: &str, city: &str) -> Result<Self, OrderError> {
        let shop_name = shop_name.trim();
        let address = address.trim();
        let phone = phone.trim();
        let city = city.trim();
        if shop_name.is_empty() {
            return Err(OrderError::MissingField("shop_name"));
        }
        if address.is_empty() {
            return Err(OrderError::MissingField("address"));
        }
        if phone.is_empty() {
            return Err(OrderError::MissingField("phone"));
        }
        if city.is_empty() {
            return Err(OrderError::MissingField("city"));
        }
        Ok(Self {
            shop_name: shop_name.to_owned(),
            address: address.to_owned(),
            phone: phone.to_owned(),
            city: city.to_owned(),
        })
    }
}

/// One order line, value-copied from the cart and the store at placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub code: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Price,
    pub uom: String,
}

impl OrderLine {
    /// Line subtotal (`unit_price * quantity`).
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.unit_price.times(self.quantity)
    }
}

/// An immutable point-in-time order snapshot.
///
/// Consumed once for confirmation/export, then discarded. No mutating
/// methods exist; fields are read-only accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer: CustomerDetails,
    lines: Vec<OrderLine>,
    placed_at: DateTime<Utc>,
}

impl Order {
    #[must_use]
    pub const fn id(&self) -> OrderId {
        self.id
    }

    #[must_use]
    pub const fn customer(&self) -> &CustomerDetails {
        &self.customer
    }

    #[must_use]
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    #[must_use]
    pub const fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    /// Sum of line subtotals.
    #[must_use]
    pub fn grand_total(&self) -> Decimal {
        self.lines.iter().map(OrderLine::subtotal).sum()
    }

    /// Compose the textual share fallback used when image sharing is
    /// unavailable: shipping details, itemized lines, and the grand total.
    #[must_use]
    pub fn share_message(&self) -> String {
        use std::fmt::Write;

        let mut message = String::from("*New Order for SK Accessories*\n\n");
        let _ = writeln!(message, "*Shop Name:* {}", self.customer.shop_name);
        let _ = writeln!(
            message,
            "*Address:* {}, {}",
            self.customer.address, self.customer.city
        );
        let _ = writeln!(message, "*Phone:* {}", self.customer.phone);
        message.push_str("\n*Order Items:*\n");
        for line in &self.lines {
            let _ = writeln!(
                message,
                "- {} x {} (@ {})",
                line.quantity, line.name, line.unit_price
            );
        }
        let _ = write!(
            message,
            "\n*Grand Total: Rs. {:.2}*\n\nThank you!",
            self.grand_total()
        );
        message
    }

    /// Suggested file name for the exported confirmation image.
    #[must_use]
    pub fn export_file_name(&self) -> String {
        format!(
            "order-{}-{}.jpg",
            self.customer.shop_name.replace(' ', "_"),
            self.placed_at.timestamp_millis()
        )
    }
}

/// Snapshot the cart plus customer details into an immutable [`Order`].
///
/// The cart is not consumed or cleared; the confirmation flow clears it
/// separately once the export finishes, so a validation failure leaves the
/// cart exactly as it was.
///
/// # Errors
///
/// Returns [`OrderError::EmptyCart`] for an empty cart, or
/// [`OrderError::UnknownProduct`] if a line cannot be resolved against the
/// store.
pub fn place_order(
    cart: &CartLedger,
    store: &ProductStore,
    customer: CustomerDetails,
) -> Result<Order, OrderError> {
    if cart.is_empty() {
        return Err(OrderError::EmptyCart);
    }

    let lines = cart
        .lines()
        .iter()
        .map(|item| {
            let product = store
                .find_by_id(item.product_id)
                .ok_or(OrderError::UnknownProduct(item.product_id))?;
            Ok(OrderLine {
                product_id: product.id,
                code: product.code.clone(),
                name: product.name.clone(),
                quantity: item.quantity,
                unit_price: product.price,
                uom: product.uom.clone(),
            })
        })
        .collect::<Result<Vec<_>, OrderError>>()?;

    let order = Order {
        id: OrderId::new(),
        customer,
        lines,
        placed_at: Utc::now(),
    };
    info!(order_id = %order.id(), lines = order.lines().len(), "Order placed");
    Ok(order)
}
