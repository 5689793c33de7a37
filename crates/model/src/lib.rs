pub mod decimal;
pub mod errors;
pub mod ids;
pub mod order;
pub mod statistics;
pub mod status;
