// Domain layer: plain data types and ports. No rendering or file handling here.

pub mod model;
pub mod ports;
