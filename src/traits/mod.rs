pub mod manifest_writer;
