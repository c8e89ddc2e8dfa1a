use crate::domain::payment::PaymentEvent;
use crate::error::Result;
use std::io::Write;

/// Writes payment events as CSV to any `Write` sink.
pub struct EventWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> EventWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Serializes the events in the order given, header first, and flushes.
    pub fn write_events(&mut self, events: Vec<PaymentEvent>) -> Result<()> {
        for event in events {
            self.writer.serialize(event)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
