pub mod message;
pub mod types;

pub use message::{ClientRequest, ClientResponse};
pub use types::{ImageResult, ImageResultSet, TranslationRecord};
