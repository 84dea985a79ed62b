pub mod fixed_array;
pub mod get;
pub mod iter;
