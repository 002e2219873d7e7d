use crate::db::{connect_with_config, ensure_schema};
use crate::parcel::{self, status, Parcel};
use anyhow::Result;
use configs::DatabaseConfig;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, Set};

async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect_with_config(&DatabaseConfig::sqlite_memory()).await?;
    ensure_schema(&db).await?;
    Ok(db)
}

#[test]
fn new_parcel_is_unsaved_and_stamped() {
    let p = Parcel::new(1000, status::REGISTERED, "test");
    assert_eq!(p.number, 0);
    assert_eq!(p.client, 1000);
    assert_eq!(p.status, "registered");
    assert!(chrono::DateTime::parse_from_rfc3339(&p.created_at).is_ok());
}

#[test]
fn serializes_with_snake_case_fields() {
    let p = Parcel {
        number: 7,
        client: 42,
        status: status::SENT.into(),
        address: "Main st. 1".into(),
        created_at: "2024-01-02T03:04:05Z".into(),
    };
    let v = serde_json::to_value(&p).unwrap();
    assert_eq!(v["number"], 7);
    assert_eq!(v["client"], 42);
    assert_eq!(v["status"], "sent");
    assert_eq!(v["created_at"], "2024-01-02T03:04:05Z");
}

/// Insert assigns increasing numbers and rows read back unchanged
#[tokio::test]
async fn test_insert_assigns_numbers() -> Result<()> {
    let db = setup_test_db().await?;

    let mut numbers = vec![];
    for i in 0..3 {
        let am = parcel::ActiveModel {
            number: NotSet,
            client: Set(5),
            status: Set(status::REGISTERED.into()),
            address: Set(format!("address {i}")),
            created_at: Set("2024-01-02T03:04:05Z".into()),
        };
        let saved = am.insert(&db).await?;
        assert!(saved.number > 0);
        numbers.push(saved.number);
    }
    assert!(numbers.windows(2).all(|w| w[0] < w[1]));

    let found = parcel::Entity::find_by_id(numbers[1]).one(&db).await?.expect("row");
    assert_eq!(found.address, "address 1");
    assert_eq!(found.created_at, "2024-01-02T03:04:05Z");
    Ok(())
}
