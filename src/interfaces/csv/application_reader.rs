use crate::domain::loan::{LoanApplication, LoanTerms, LoanType, PaymentFrequency};
use crate::error::{LoanError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One row of the applications CSV. Kept flat so `csv` can deserialize it
/// directly; converted to the nested domain shape afterwards.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ApplicationRow {
    pub id: u32,
    pub borrower: String,
    pub r#type: LoanType,
    pub principal: Decimal,
    pub rate: Decimal,
    pub term_months: u32,
    pub frequency: PaymentFrequency,
    pub purpose: Option<String>,
    pub collateral: Option<String>,
    pub co_signer: Option<String>,
}

impl From<ApplicationRow> for LoanApplication {
    fn from(row: ApplicationRow) -> Self {
        Self {
            id: row.id,
            borrower: row.borrower,
            loan_type: row.r#type,
            terms: LoanTerms {
                principal: row.principal,
                annual_rate_percent: row.rate,
                term_months: row.term_months,
                frequency: row.frequency,
            },
            purpose: row.purpose,
            collateral: row.collateral,
            co_signer: row.co_signer,
        }
    }
}

/// Reads loan applications from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<LoanApplication>`. It handles whitespace trimming and flexible
/// record lengths automatically; empty optional columns become `None`.
pub struct ApplicationReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ApplicationReader<R> {
    /// Creates a new `ApplicationReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes applications.
    ///
    /// This allows for processing large files in a streaming fashion without
    /// loading the entire dataset into memory.
    pub fn applications(self) -> impl Iterator<Item = Result<LoanApplication>> {
        self.reader.into_deserialize().map(|result| {
            result
                .map(|row: ApplicationRow| row.into())
                .map_err(LoanError::from)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const HEADER: &str =
        "id,borrower,type,principal,rate,term_months,frequency,purpose,collateral,co_signer";

    #[test]
    fn test_reads_full_row() {
        let csv = format!(
            "{}\n1, alice, PERSONAL, 25000, 5.25, 36, MONTHLY, Debt consolidation, Vehicle, Bob",
            HEADER
        );
        let mut iter = ApplicationReader::new(csv.as_bytes()).applications();

        let application = iter.next().unwrap().unwrap();
        assert_eq!(application.id, 1);
        assert_eq!(application.borrower, "alice");
        assert_eq!(application.loan_type, LoanType::Personal);
        assert_eq!(application.terms.principal, dec!(25000));
        assert_eq!(application.terms.annual_rate_percent, dec!(5.25));
        assert_eq!(application.terms.term_months, 36);
        assert_eq!(application.terms.frequency, PaymentFrequency::Monthly);
        assert_eq!(application.purpose.as_deref(), Some("Debt consolidation"));
        assert_eq!(application.collateral.as_deref(), Some("Vehicle"));
        assert_eq!(application.co_signer.as_deref(), Some("Bob"));
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_empty_optional_columns_become_none() {
        let csv = format!("{}\n2,bob,AUTO,15000,3.5,120,MONTHLY,,,", HEADER);
        let application = ApplicationReader::new(csv.as_bytes())
            .applications()
            .next()
            .unwrap()
            .unwrap();

        assert!(application.purpose.is_none());
        assert!(application.collateral.is_none());
        assert!(application.co_signer.is_none());
    }

    #[test]
    fn test_malformed_row_yields_error_and_stream_continues() {
        let csv = format!(
            "{}\n1,alice,PERSONAL,not-a-number,5.25,36,MONTHLY,,,\n2,bob,AUTO,15000,3.5,120,MONTHLY,,,",
            HEADER
        );
        let mut iter = ApplicationReader::new(csv.as_bytes()).applications();

        assert!(iter.next().unwrap().is_err());
        let application = iter.next().unwrap().unwrap();
        assert_eq!(application.id, 2);
    }

    #[test]
    fn test_unknown_frequency_is_an_error() {
        let csv = format!("{}\n1,alice,PERSONAL,25000,5.25,36,DAILY,,,", HEADER);
        let result = ApplicationReader::new(csv.as_bytes())
            .applications()
            .next()
            .unwrap();
        assert!(result.is_err());
    }
}
