pub mod dispatch;
pub mod review;
pub mod scans;
pub mod schema;
pub mod shared;
pub mod status;
