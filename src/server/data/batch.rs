//! Shared scaffolding for read batches.
//!
//! A batch is a fixed sequence of queries executed on one read-only snapshot transaction.
//! Each query runs as a named step bounded by the configured step timeout and raced against
//! the caller's cancellation signal. The first failing step aborts the batch; dropping the
//! `BatchContext` drops the transaction, which rolls it back.

use std::{collections::HashMap, future::Future, hash::Hash, time::Duration};

use sea_orm::{
    AccessMode, DatabaseConnection, DatabaseTransaction, DbBackend, DbErr, IsolationLevel,
    TransactionTrait,
};
use tokio::{sync::watch, time::Instant};

use crate::server::{error::aggregation::AggregationError, model::order::AggregationOptions};

/// Read side of a cancellation flag.
///
/// Cloned into every request. Once the paired `CancelHandle` fires, every batch step still
/// running fails with `AggregationError::Cancelled`.
#[derive(Debug, Clone)]
pub struct CancelSignal {
    rx: watch::Receiver<bool>,
}

/// Write side of a cancellation flag.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelSignal {
    /// Creates a connected handle and signal.
    pub fn channel() -> (CancelHandle, CancelSignal) {
        let (tx, rx) = watch::channel(false);
        (CancelHandle { tx }, CancelSignal { rx })
    }

    /// A signal that never fires.
    #[cfg(test)]
    pub fn never() -> Self {
        let (_tx, rx) = watch::channel(false);
        Self { rx }
    }

    #[cfg(test)]
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once cancellation was requested. Pends forever if the handle is gone
    /// without having fired.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        let closed = rx.wait_for(|cancelled| *cancelled).await.is_err();
        if closed {
            std::future::pending::<()>().await;
        }
    }
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

/// Number of rows a step produced, for the step log line.
pub trait RowCount {
    fn row_count(&self) -> usize;
}

impl<T> RowCount for Vec<T> {
    fn row_count(&self) -> usize {
        self.len()
    }
}

impl<T> RowCount for Option<T> {
    fn row_count(&self) -> usize {
        usize::from(self.is_some())
    }
}

/// One read-only snapshot plus the limits every step runs under.
pub struct BatchContext {
    txn: DatabaseTransaction,
    step_timeout: Duration,
    cancel: CancelSignal,
    started: Instant,
}

impl BatchContext {
    /// Opens the snapshot transaction.
    ///
    /// Uses `REPEATABLE READ` + `READ ONLY` where the backend supports setting them. SQLite
    /// transactions are already serializable snapshots and reject both options, so it gets
    /// a plain transaction.
    ///
    /// # Arguments
    /// - `db` - Connection pool the transaction is taken from
    /// - `options` - Step timeout of the batch
    /// - `cancel` - Caller's cancellation signal
    ///
    /// # Returns
    /// - `Ok(BatchContext)` - Transaction open, ready to run steps
    /// - `Err(AggregationError)` - Could not begin the transaction, or cancelled while waiting
    ///   for a pooled connection
    pub async fn begin(
        db: &DatabaseConnection,
        options: &AggregationOptions,
        cancel: CancelSignal,
    ) -> Result<Self, AggregationError> {
        let (isolation, access) = match db.get_database_backend() {
            DbBackend::Sqlite => (None, None),
            _ => (
                Some(IsolationLevel::RepeatableRead),
                Some(AccessMode::ReadOnly),
            ),
        };

        let txn = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(AggregationError::Cancelled { step: "begin" }),
            txn = db.begin_with_config(isolation, access) => txn,
        }
        .map_err(|source| AggregationError::Storage {
            step: "begin",
            source,
        })?;

        Ok(Self {
            txn,
            step_timeout: options.step_timeout,
            cancel,
            started: Instant::now(),
        })
    }

    /// Connection every step's query must run on.
    pub fn conn(&self) -> &DatabaseTransaction {
        &self.txn
    }

    /// Runs one query of the batch.
    ///
    /// # Arguments
    /// - `name` - Step name used in logs and errors
    /// - `query` - Query future, built on `self.conn()`
    ///
    /// # Returns
    /// - `Ok(T)` - Rows of the step
    /// - `Err(AggregationError::Cancelled)` - Cancellation fired before the query finished
    /// - `Err(AggregationError::StepTimeout)` - Query exceeded the step timeout
    /// - `Err(AggregationError::Storage)` - Query failed
    pub async fn step<T, F>(&self, name: &'static str, query: F) -> Result<T, AggregationError>
    where
        T: RowCount,
        F: Future<Output = Result<T, DbErr>>,
    {
        let started = Instant::now();

        let outcome = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return Err(AggregationError::Cancelled { step: name }),
            outcome = tokio::time::timeout(self.step_timeout, query) => outcome,
        };

        let rows = match outcome {
            Err(_) => {
                return Err(AggregationError::StepTimeout {
                    step: name,
                    timeout: self.step_timeout,
                })
            }
            Ok(Err(source)) => return Err(AggregationError::Storage { step: name, source }),
            Ok(Ok(rows)) => rows,
        };

        tracing::info!(
            step = name,
            rows = rows.row_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "batch step"
        );

        Ok(rows)
    }

    /// Closes the snapshot. `aggregates` is the number of top-level objects built from it.
    pub async fn commit(self, aggregates: usize) -> Result<(), AggregationError> {
        self.txn
            .commit()
            .await
            .map_err(|source| AggregationError::Storage {
                step: "commit",
                source,
            })?;

        tracing::info!(
            aggregates,
            elapsed_ms = self.started.elapsed().as_millis() as u64,
            "batch complete"
        );

        Ok(())
    }
}

/// Groups rows by correlation key, keeping each group in query order.
pub fn group_by<K, T, U>(
    rows: impl IntoIterator<Item = T>,
    key: impl Fn(&T) -> K,
    mut convert: impl FnMut(T) -> U,
) -> HashMap<K, Vec<U>>
where
    K: Eq + Hash,
{
    let mut groups: HashMap<K, Vec<U>> = HashMap::new();
    for row in rows {
        groups.entry(key(&row)).or_default().push(convert(row));
    }
    groups
}
