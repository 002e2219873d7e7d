pub mod store;
pub mod seaorm;
pub mod service;

pub use models::parcel::{status, Parcel};
pub use seaorm::SeaOrmParcelStore;
pub use service::ParcelService;
pub use store::ParcelStore;
