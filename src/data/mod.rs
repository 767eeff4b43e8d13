pub mod dataset;
pub mod series;

pub use dataset::load_dataset;
pub use series::SalesSeries;
