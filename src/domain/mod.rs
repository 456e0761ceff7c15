// Domain layer: models and ports shared by the formatter, config sources and budget editor.

pub mod model;
pub mod ports;
