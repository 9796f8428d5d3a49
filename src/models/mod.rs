//! Diesel models for the locally-owned domain slices.

mod cart;
mod favourite;
mod order;
mod order_item;
mod payment;

pub use cart::{Cart, NewCart, UpdateCart};
pub use favourite::Favourite;
pub use order::{NewOrder, Order, UpdateOrder};
pub use order_item::{OrderItem, UpdateOrderItem};
pub use payment::{NewPayment, Payment, PaymentStatus, UpdatePayment};
