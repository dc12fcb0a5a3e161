use crate::domain::loan::LoanRecord;
use crate::domain::risk::Recommendation;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

/// The flat shape written to the output CSV: identification, the three
/// amortization figures, and the risk verdict. Risk factors stay out of the
/// tabular output.
#[derive(Debug, Serialize)]
struct RecordRow {
    id: u32,
    borrower: String,
    periodic_payment: Decimal,
    total_interest: Decimal,
    total_amount: Decimal,
    risk_score: u8,
    recommendation: Recommendation,
}

impl From<LoanRecord> for RecordRow {
    fn from(record: LoanRecord) -> Self {
        Self {
            id: record.application.id,
            borrower: record.application.borrower,
            periodic_payment: record.schedule.periodic_payment,
            total_interest: record.schedule.total_interest,
            total_amount: record.schedule.total_amount,
            risk_score: record.risk.score,
            recommendation: record.risk.recommendation,
        }
    }
}

/// Writes processed loan records as CSV to any `Write` sink.
pub struct RecordWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Serializes all records and flushes the sink.
    pub fn write_records(&mut self, records: Vec<LoanRecord>) -> Result<()> {
        for record in records {
            self.writer.serialize(RecordRow::from(record))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
