pub mod application_reader;
pub mod record_writer;
