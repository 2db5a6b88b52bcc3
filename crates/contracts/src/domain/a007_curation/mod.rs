pub mod aggregate;

pub use aggregate::{BulkActiveRequest, CurationSlot, CurationSlotDto, CurationSlotId};
