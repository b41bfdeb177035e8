// Domain layer: wire model parsed at the API boundary and the ports the core talks through.

pub mod model;
pub mod ports;
