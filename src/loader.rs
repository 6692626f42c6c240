use tracing::info;

use crate::error::Result;
use crate::record::EmbassyRecord;
use crate::store::EmbassyStore;

/// Inserts `records` one at a time and stops at the first failure.
///
/// Records inserted before the failure stay in the store.
pub async fn load(store: &dyn EmbassyStore, records: &[EmbassyRecord]) -> Result<usize> {
    for (inserted, record) in records.iter().enumerate() {
        if let Err(err) = store.insert(record).await {
            info!("Stopped after {} of {} records", inserted, records.len());
            return Err(err);
        }

        info!("Inserted embassy: {:?}", record);
    }

    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::error::EmbassyError;

    struct FlakyStore {
        fail_at: usize,
        attempts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl EmbassyStore for FlakyStore {
        async fn insert(&self, record: &EmbassyRecord) -> Result<()> {
            let mut attempts = self.attempts.lock().unwrap();
            attempts.push(record.name.clone());

            if attempts.len() == self.fail_at {
                return Err(EmbassyError::Insert("duplicate key".to_owned()));
            }

            Ok(())
        }
    }

    fn named(name: &str) -> EmbassyRecord {
        EmbassyRecord {
            name: name.to_owned(),
            ..EmbassyRecord::default()
        }
    }

    #[tokio::test]
    async fn inserts_every_record() {
        let store = FlakyStore {
            fail_at: usize::MAX,
            attempts: Mutex::new(Vec::new()),
        };
        let records = vec![named("a"), named("b")];

        assert_eq!(load(&store, &records).await.unwrap(), 2);
        assert_eq!(*store.attempts.lock().unwrap(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn stops_at_first_failure() {
        let store = FlakyStore {
            fail_at: 2,
            attempts: Mutex::new(Vec::new()),
        };
        let records = vec![named("a"), named("b"), named("c")];

        let err = load(&store, &records).await.unwrap_err();

        assert!(matches!(err, EmbassyError::Insert(_)));
        assert_eq!(*store.attempts.lock().unwrap(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn empty_input_is_a_no_op() {
        let store = FlakyStore {
            fail_at: 1,
            attempts: Mutex::new(Vec::new()),
        };

        assert_eq!(load(&store, &[]).await.unwrap(), 0);
        assert!(store.attempts.lock().unwrap().is_empty());
    }
}
