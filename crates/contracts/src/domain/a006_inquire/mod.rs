pub mod aggregate;

pub use aggregate::{AnswerRequest, Inquire, InquireId, ResolveRequest};
