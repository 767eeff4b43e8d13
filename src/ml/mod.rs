pub mod forecast;
pub mod model;
pub mod scaler;
