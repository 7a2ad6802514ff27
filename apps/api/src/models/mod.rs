pub mod assessment;
pub mod result;
pub mod user;
