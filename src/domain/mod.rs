// Domain layer: cart models, notification catalogue and ports (interfaces).

pub mod messages;
pub mod model;
pub mod ports;
