// Domain layer: the nullable reference model. No external dependencies beyond std.

pub mod model;
