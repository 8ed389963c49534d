/// Ports module defining the interfaces between the core and infrastructure
///
/// Only outbound (driven) ports exist: the CLI drives the use case directly.
pub mod outbound;
