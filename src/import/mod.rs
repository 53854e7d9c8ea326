pub mod matcher;
pub mod pipeline;
pub mod renderer;

pub use matcher::match_reviews;
pub use pipeline::{ImportPipeline, ImportReport};
pub use renderer::render;
