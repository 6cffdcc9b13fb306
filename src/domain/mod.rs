// Domain layer: payload models, widget states and the ports the widget talks through.

pub mod model;
pub mod ports;
pub mod state;
