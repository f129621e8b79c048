pub mod location_handler;
pub mod location_logger;
pub mod page_handler;
pub mod validator;
