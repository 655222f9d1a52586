//! Clients for the three external services and the traits the pipeline
//! uses to reach them.

pub mod fact_check;
pub mod huggingface;
pub mod traits;
pub mod web_search;

pub use fact_check::FactCheckClient;
pub use huggingface::HuggingFaceClient;
pub use traits::{ClassifyProvider, FactCheckProvider, WebSearchProvider};
pub use web_search::CustomSearchClient;
