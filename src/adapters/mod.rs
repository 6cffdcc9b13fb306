// Adapters layer: concrete implementations of the domain ports (HTTP source, render targets).

pub mod http;
pub mod target;
