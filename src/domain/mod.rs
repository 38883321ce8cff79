// Domain layer: table/record models, team codes and ports. No I/O lives here.

pub mod model;
pub mod ports;
pub mod team;
