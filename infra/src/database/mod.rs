//! Database access: connection pooling and repository implementations

pub mod connection;
pub mod mysql;

pub use connection::create_pool;
pub use mysql::MySqlUserRepository;
