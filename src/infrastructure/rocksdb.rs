use crate::domain::loan::LoanRecord;
use crate::domain::payment::Payment;
use crate::domain::ports::{LoanStore, PaymentStore};
use crate::error::{LoanError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing loan records.
pub const CF_LOANS: &str = "loans";
/// Column Family for storing payments, grouped by loan.
pub const CF_PAYMENTS: &str = "payments";

/// A persistent store implementation using RocksDB.
///
/// Handles storage for both `LoanRecord` and `Payment` entities using
/// separate Column Families. Values are JSON-encoded; keys are big-endian
/// loan ids so iteration order follows id order.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the required column families ("loans" and "payments")
    /// exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_loans = ColumnFamilyDescriptor::new(CF_LOANS, Options::default());
        let cf_payments = ColumnFamilyDescriptor::new(CF_PAYMENTS, Options::default());

        let db = DB::open_cf_descriptors(&opts, path, vec![cf_loans, cf_payments])
            .map_err(|e| LoanError::InternalError(Box::new(e)))?;

        Ok(Self { db: Arc::new(db) })
    }

    fn cf_handle(&self, name: &str) -> Result<&rocksdb::ColumnFamily> {
        self.db.cf_handle(name).ok_or_else(|| {
            LoanError::InternalError(Box::new(std::io::Error::other(format!(
                "Column family {} not found",
                name
            ))))
        })
    }
}

#[async_trait]
impl LoanStore for RocksDBStore {
    async fn store(&self, record: LoanRecord) -> Result<()> {
        let cf = self.cf_handle(CF_LOANS)?;

        let key = record.id().to_be_bytes();
        let value =
            serde_json::to_vec(&record).map_err(|e| LoanError::InternalError(Box::new(e)))?;

        self.db
            .put_cf(cf, key, value)
            .map_err(|e| LoanError::InternalError(Box::new(e)))?;

        Ok(())
    }

    async fn get(&self, loan_id: u32) -> Result<Option<LoanRecord>> {
        let cf = self.cf_handle(CF_LOANS)?;

        let key = loan_id.to_be_bytes();
        let result = self
            .db
            .get_cf(cf, key)
            .map_err(|e| LoanError::InternalError(Box::new(e)))?;

        match result {
            Some(bytes) => {
                let record = serde_json::from_slice(&bytes)
                    .map_err(|e| LoanError::InternalError(Box::new(e)))?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn get_all(&self) -> Result<Vec<LoanRecord>> {
        let cf = self.cf_handle(CF_LOANS)?;

        let mut records = Vec::new();
        let iter = self.db.iterator_cf(cf, rocksdb::IteratorMode::Start);

        for item in iter {
            let (_key, value) = item.map_err(|e| LoanError::InternalError(Box::new(e)))?;
            let record: LoanRecord = serde_json::from_slice(&value)
                .map_err(|e| LoanError::InternalError(Box::new(e)))?;
            records.push(record);
        }

        Ok(records)
    }
}

#[async_trait]
impl PaymentStore for RocksDBStore {
    async fn store(&self, payment: Payment) -> Result<()> {
        let cf = self.cf_handle(CF_PAYMENTS)?;

        let key = payment.loan_id.to_be_bytes();
        let mut payments: Vec<Payment> = match self
            .db
            .get_cf(cf, key)
            .map_err(|e| LoanError::InternalError(Box::new(e)))?
        {
            Some(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| LoanError::InternalError(Box::new(e)))?,
            None => Vec::new(),
        };
        payments.push(payment);

        let value =
            serde_json::to_vec(&payments).map_err(|e| LoanError::InternalError(Box::new(e)))?;
        self.db
            .put_cf(cf, key, value)
            .map_err(|e| LoanError::InternalError(Box::new(e)))?;

        Ok(())
    }

    async fn for_loan(&self, loan_id: u32) -> Result<Vec<Payment>> {
        let cf = self.cf_handle(CF_PAYMENTS)?;

        let key = loan_id.to_be_bytes();
        match self
            .db
            .get_cf(cf, key)
            .map_err(|e| LoanError::InternalError(Box::new(e)))?
        {
            Some(bytes) => {
                serde_json::from_slice(&bytes).map_err(|e| LoanError::InternalError(Box::new(e)))
            }
            None => Ok(Vec::new()),
        }
    }
}
