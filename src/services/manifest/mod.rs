pub mod jq_writer;
pub mod text_writer;
