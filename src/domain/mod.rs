// Domain layer: passenger model and ports (interfaces). No dependencies on
// artifact formats or the CLI.

pub mod model;
pub mod ports;
