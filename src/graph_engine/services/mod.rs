mod component_filter;
mod graph_builder;
mod layout_engine;
mod merger;

pub use component_filter::ComponentFilter;
pub use graph_builder::GraphBuilder;
pub use layout_engine::{LayoutBounds, LayoutConfig, LayoutEngine};
pub use merger::Merger;
