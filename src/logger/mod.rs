pub mod setup_logger;
