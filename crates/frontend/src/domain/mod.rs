pub mod a001_category;
pub mod a002_product;
pub mod a003_variant;
pub mod a004_order;
pub mod a005_consumer;
pub mod a006_inquire;
pub mod a007_curation;
pub mod a008_video;
pub mod a009_template;
