pub mod frame;
pub mod ports;
pub mod row_pool;
