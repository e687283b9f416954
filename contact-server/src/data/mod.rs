pub mod contact_repository;
pub mod memory;
pub mod user_repository;
