pub mod controller;
pub mod model;
pub mod service;

pub use controller::*;
pub use model::*;
pub use service::*;
