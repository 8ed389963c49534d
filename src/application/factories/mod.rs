mod exporter_factory;
mod presenter_factory;

pub use exporter_factory::ExporterFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
