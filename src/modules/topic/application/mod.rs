pub mod ports;
pub mod services;
pub mod topic_use_cases;
