pub mod inmemory_repo;
pub mod sqlite_repo;
