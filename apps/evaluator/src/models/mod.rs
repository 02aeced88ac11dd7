pub mod result;
pub mod resume;
pub mod role;
