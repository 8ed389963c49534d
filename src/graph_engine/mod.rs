/// Graph engine - domain model and pure services
///
/// Nothing in this module performs I/O. Every service is a total function
/// over immutable inputs.
pub mod domain;
pub mod services;
