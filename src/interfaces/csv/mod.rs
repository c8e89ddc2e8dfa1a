pub mod event_writer;
pub mod instruction_reader;
