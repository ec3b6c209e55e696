// Domain layer: spot/query models and the catalog port. Search logic lives in core.

pub mod model;
pub mod ports;
