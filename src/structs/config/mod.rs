pub mod setup_defaults;
