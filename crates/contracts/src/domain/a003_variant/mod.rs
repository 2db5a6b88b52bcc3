pub mod aggregate;

pub use aggregate::{all_sold_out, Inventory, Media, MediaKind, Variant, VariantDto, VariantId};
