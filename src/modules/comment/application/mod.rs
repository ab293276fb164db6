pub mod comment_use_cases;
pub mod ports;
pub mod services;
