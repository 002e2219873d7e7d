use async_trait::async_trait;
use models::parcel::Parcel;

use crate::errors::ServiceError;

/// Persistence operations over the parcels table.
///
/// Every call is a direct round trip to the backend. Updates and deletes that
/// match no row fail with [`ServiceError::NotFound`].
#[async_trait]
pub trait ParcelStore: Send + Sync {
    /// Insert a parcel and return the number the backend assigned to it.
    /// `parcel.number` is ignored.
    async fn add(&self, parcel: &Parcel) -> Result<i32, ServiceError>;
    async fn get(&self, number: i32) -> Result<Parcel, ServiceError>;
    /// Parcels of one client ordered by number; empty when the client has none.
    async fn get_by_client(&self, client: i32) -> Result<Vec<Parcel>, ServiceError>;
    async fn set_address(&self, number: i32, address: &str) -> Result<(), ServiceError>;
    async fn set_status(&self, number: i32, status: &str) -> Result<(), ServiceError>;
    async fn delete(&self, number: i32) -> Result<(), ServiceError>;
}

/// Simple in-memory mock store for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::Mutex;

    #[derive(Default)]
    pub struct MockParcelStore {
        inner: Mutex<Inner>,
    }

    #[derive(Default)]
    struct Inner {
        last_number: i32,
        parcels: BTreeMap<i32, Parcel>, // key: number
    }

    impl MockParcelStore {
        pub async fn count(&self) -> usize {
            self.inner.lock().await.parcels.len()
        }
    }

    fn missing(number: i32) -> ServiceError {
        ServiceError::not_found(&format!("parcel {number}"))
    }

    #[async_trait]
    impl ParcelStore for MockParcelStore {
        async fn add(&self, parcel: &Parcel) -> Result<i32, ServiceError> {
            let mut inner = self.inner.lock().await;
            inner.last_number += 1;
            let number = inner.last_number;
            let mut stored = parcel.clone();
            stored.number = number;
            if stored.created_at.is_empty() {
                stored.created_at = models::parcel::now_rfc3339();
            }
            inner.parcels.insert(number, stored);
            Ok(number)
        }

        async fn get(&self, number: i32) -> Result<Parcel, ServiceError> {
            let inner = self.inner.lock().await;
            inner.parcels.get(&number).cloned().ok_or_else(|| missing(number))
        }

        async fn get_by_client(&self, client: i32) -> Result<Vec<Parcel>, ServiceError> {
            let inner = self.inner.lock().await;
            Ok(inner.parcels.values().filter(|p| p.client == client).cloned().collect())
        }

        async fn set_address(&self, number: i32, address: &str) -> Result<(), ServiceError> {
            let mut inner = self.inner.lock().await;
            let p = inner.parcels.get_mut(&number).ok_or_else(|| missing(number))?;
            p.address = address.to_string();
            Ok(())
        }

        async fn set_status(&self, number: i32, status: &str) -> Result<(), ServiceError> {
            let mut inner = self.inner.lock().await;
            let p = inner.parcels.get_mut(&number).ok_or_else(|| missing(number))?;
            p.status = status.to_string();
            Ok(())
        }

        async fn delete(&self, number: i32) -> Result<(), ServiceError> {
            let mut inner = self.inner.lock().await;
            inner.parcels.remove(&number).map(|_| ()).ok_or_else(|| missing(number))
        }
    }
}
