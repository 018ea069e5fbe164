pub mod quote_writer;
pub mod request_reader;
