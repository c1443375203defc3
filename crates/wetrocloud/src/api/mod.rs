//! API endpoint implementations.

mod collections;
mod conversion;
mod generation;
mod resources;

pub use collections::CollectionsApi;
pub use conversion::ConversionApi;
pub use generation::GenerationApi;
pub use resources::ResourcesApi;
