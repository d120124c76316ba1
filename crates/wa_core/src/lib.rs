pub mod error;
pub mod text;
pub mod types;

pub use error::{Error, Result};
pub use types::{Article, ArticleDetail, ExtractedFields, ExtractionResult, Keywords};
