pub mod general;
pub mod media;
pub mod variants;

pub use general::GeneralTab;
pub use media::MediaTab;
pub use variants::VariantsTab;
