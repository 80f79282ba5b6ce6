pub mod extract;
pub mod plan;
pub mod upload;
