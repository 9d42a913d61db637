mod alerts_created;

pub use alerts_created::*;
