pub mod destinations;
pub mod upload;
