mod handler;
mod model;

pub use handler::{check_result, submit_code};
