pub mod aggregate;

pub use aggregate::{Order, OrderId, OrderLine, OrderStatus, StatusUpdateRequest};
