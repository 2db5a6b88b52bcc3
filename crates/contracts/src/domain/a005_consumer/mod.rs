pub mod aggregate;

pub use aggregate::{BulkStatusRequest, Consumer, ConsumerId};
