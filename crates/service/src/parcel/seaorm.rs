use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};
use tracing::{debug, instrument};

use models::parcel::{self, Parcel};

use crate::errors::ServiceError;
use crate::parcel::store::ParcelStore;

/// SeaORM-backed store; works against any backend the connection was opened for.
pub struct SeaOrmParcelStore {
    pub db: DatabaseConnection,
}

impl SeaOrmParcelStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn missing(number: i32) -> ServiceError {
    ServiceError::not_found(&format!("parcel {number}"))
}

#[async_trait]
impl ParcelStore for SeaOrmParcelStore {
    #[instrument(level = "debug", skip(self, parcel), fields(client = parcel.client))]
    async fn add(&self, parcel: &Parcel) -> Result<i32, ServiceError> {
        let created_at = if parcel.created_at.is_empty() {
            parcel::now_rfc3339()
        } else {
            parcel.created_at.clone()
        };
        let am = parcel::ActiveModel {
            number: NotSet, // auto-increment by DB
            client: Set(parcel.client),
            status: Set(parcel.status.clone()),
            address: Set(parcel.address.clone()),
            created_at: Set(created_at),
        };
        let number = parcel::Entity::insert(am).exec(&self.db).await?.last_insert_id;
        if number <= 0 {
            return Err(ServiceError::Db(format!("backend assigned invalid parcel number {number}")));
        }
        debug!(number, "parcel added");
        Ok(number)
    }

    #[instrument(level = "debug", skip(self))]
    async fn get(&self, number: i32) -> Result<Parcel, ServiceError> {
        parcel::Entity::find_by_id(number)
            .one(&self.db)
            .await?
            .ok_or_else(|| missing(number))
    }

    #[instrument(level = "debug", skip(self))]
    async fn get_by_client(&self, client: i32) -> Result<Vec<Parcel>, ServiceError> {
        let rows = parcel::Entity::find()
            .filter(parcel::Column::Client.eq(client))
            .order_by_asc(parcel::Column::Number)
            .all(&self.db)
            .await?;
        debug!(count = rows.len(), "parcels by client");
        Ok(rows)
    }

    #[instrument(level = "debug", skip(self))]
    async fn set_address(&self, number: i32, address: &str) -> Result<(), ServiceError> {
        let res = parcel::Entity::update_many()
            .col_expr(parcel::Column::Address, Expr::value(address))
            .filter(parcel::Column::Number.eq(number))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            return Err(missing(number));
        }
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    async fn set_status(&self, number: i32, status: &str) -> Result<(), ServiceError> {
        let res = parcel::Entity::update_many()
            .col_expr(parcel::Column::Status, Expr::value(status))
            .filter(parcel::Column::Number.eq(number))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            return Err(missing(number));
        }
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    async fn delete(&self, number: i32) -> Result<(), ServiceError> {
        let res = parcel::Entity::delete_by_id(number).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(missing(number));
        }
        debug!("parcel deleted");
        Ok(())
    }
}
