mod common;
mod defaults_file;
