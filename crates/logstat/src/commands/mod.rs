pub mod extract;
pub mod manifest;
