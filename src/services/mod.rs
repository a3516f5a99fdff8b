mod database;

pub use database::TodoDb;
