pub mod counter;
pub mod fault;
pub mod model;
