//! `parcels` table: one row per shipment.
use chrono::{SecondsFormat, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "parcels")]
pub struct Model {
    /// Assigned by the backend on insert; 0 until then.
    #[sea_orm(primary_key)]
    pub number: i32,
    #[sea_orm(indexed)]
    pub client: i32,
    #[sea_orm(column_type = "Text")]
    pub status: String,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    /// RFC3339, written once on insert.
    #[sea_orm(column_type = "Text")]
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub type Parcel = Model;

/// Common status labels. The store accepts any string.
pub mod status {
    pub const REGISTERED: &str = "registered";
    pub const SENT: &str = "sent";
    pub const DELIVERED: &str = "delivered";
}

impl Model {
    /// Unsaved parcel stamped with the current time.
    pub fn new(client: i32, status: &str, address: &str) -> Self {
        Self {
            number: 0,
            client,
            status: status.to_string(),
            address: address.to_string(),
            created_at: now_rfc3339(),
        }
    }
}

pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
