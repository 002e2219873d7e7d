use std::sync::Arc;
use tracing::instrument;

use models::parcel::Parcel;

use crate::errors::ServiceError;
use crate::parcel::store::ParcelStore;

/// Application-facing entry point for parcels.
/// Delegates to the wrapped store; errors are returned as the store produced them.
pub struct ParcelService<S: ParcelStore> {
    store: Arc<S>,
}

impl<S: ParcelStore> Clone for ParcelService<S> {
    fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: ParcelStore> ParcelService<S> {
    pub fn new(store: Arc<S>) -> Self { Self { store } }

    pub fn store(&self) -> &S { &self.store }

    /// Persist a new parcel and return its number.
    ///
    /// # Examples
    /// ```
    /// use service::parcel::{status, Parcel, ParcelService};
    /// use service::parcel::store::mock::MockParcelStore;
    /// use std::sync::Arc;
    /// let svc = ParcelService::new(Arc::new(MockParcelStore::default()));
    /// let id = tokio_test::block_on(svc.add(&Parcel::new(1000, status::REGISTERED, "test"))).unwrap();
    /// let stored = tokio_test::block_on(svc.get(id)).unwrap();
    /// assert_eq!(stored.address, "test");
    /// ```
    #[instrument(skip(self, parcel), fields(client = parcel.client))]
    pub async fn add(&self, parcel: &Parcel) -> Result<i32, ServiceError> { self.store.add(parcel).await }

    #[instrument(skip(self))]
    pub async fn get(&self, number: i32) -> Result<Parcel, ServiceError> { self.store.get(number).await }

    #[instrument(skip(self))]
    pub async fn get_by_client(&self, client: i32) -> Result<Vec<Parcel>, ServiceError> {
        self.store.get_by_client(client).await
    }

    #[instrument(skip(self))]
    pub async fn set_address(&self, number: i32, address: &str) -> Result<(), ServiceError> {
        self.store.set_address(number, address).await
    }

    #[instrument(skip(self))]
    pub async fn set_status(&self, number: i32, status: &str) -> Result<(), ServiceError> {
        self.store.set_status(number, status).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, number: i32) -> Result<(), ServiceError> { self.store.delete(number).await }
}
