mod visualize_sbom;

pub use visualize_sbom::VisualizeSbomUseCase;
