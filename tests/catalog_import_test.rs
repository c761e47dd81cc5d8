use anyhow::Result;
use chrono::{Duration, TimeZone, Utc};
use kit_orders::utils::validation::Validate;
use kit_orders::{
    CsvKitSource, FixedClock, KitOrderError, OrderCatalogService, SessionConfig, ValidationError,
};
use rust_decimal_macros::dec;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn write_csv(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[test]
fn test_import_catalog_from_csv() -> Result<()> {
    let csv = write_csv(
        "kit_id,variant,base_price\n2,Basic Kit+,100.0\n3,Advanced Kit,199.99\n",
    )?;

    let mut service = OrderCatalogService::new(FixedClock::new(Utc::now()));
    let imported = service.import_from(&CsvKitSource::new(csv.path()))?;

    assert_eq!(imported, 2);
    assert_eq!(service.kit(3).map(|kit| kit.base_price), Some(dec!(199.99)));
    Ok(())
}

#[test]
fn test_csv_with_duplicate_row_imports_nothing() -> Result<()> {
    let csv = write_csv(
        "kit_id,variant,base_price\n2,Basic Kit+,100.0\n3,Advanced Kit,199.99\n2,Again,5\n",
    )?;

    let mut service = OrderCatalogService::new(FixedClock::new(Utc::now()));
    let err = service
        .import_from(&CsvKitSource::new(csv.path()))
        .unwrap_err();

    assert!(matches!(
        err,
        KitOrderError::ValidationError(ValidationError::DuplicateKitId { kit_id: 2 })
    ));
    assert_eq!(service.kits().count(), 1);
    Ok(())
}

#[test]
fn test_header_only_csv_is_empty_batch() -> Result<()> {
    let csv = write_csv("kit_id,variant,base_price\n")?;

    let mut service = OrderCatalogService::new(FixedClock::new(Utc::now()));
    let err = service
        .import_from(&CsvKitSource::new(csv.path()))
        .unwrap_err();

    assert!(matches!(
        err,
        KitOrderError::ValidationError(ValidationError::EmptyImportBatch)
    ));
    Ok(())
}

#[test]
fn test_session_replaces_default_catalog_and_places_orders() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let session_path = temp_dir.path().join("session.toml");
    std::fs::write(
        &session_path,
        r#"
[catalog]
clear_default = true

[[catalog.kits]]
kit_id = 1
variant = "Basic Kit"
base_price = "98.99"

[[catalog.kits]]
kit_id = 2
variant = "Basic Kit+"
base_price = "100.0"

[[orders]]
customer_id = 1
kit_id = 1
quantity = 5
delivery_in_days = 5

[[orders]]
customer_id = 2
kit_id = 2
quantity = 50
delivery_in_days = 2

[[orders]]
customer_id = 1
kit_id = 2
quantity = 10
delivery_date = "2024-07-01T00:00:00Z"
"#,
    )?;

    let session = SessionConfig::from_file(&session_path)?;
    session.validate()?;

    let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let mut service = OrderCatalogService::new(FixedClock::new(now));
    if session.catalog.clear_default {
        service.clear_kits();
    }
    service.import_from(&session)?;

    for order in &session.orders {
        service.place_order(order.to_request(now)?)?;
    }

    let customer_one = service.get_customer_orders(1);
    assert_eq!(customer_one.len(), 2);
    assert_eq!(customer_one[0].id, 1);
    assert_eq!(customer_one[0].expected_delivery_date, now + Duration::days(5));
    assert_eq!(customer_one[0].total_price, dec!(494.95));
    assert_eq!(customer_one[1].id, 3);
    assert_eq!(customer_one[1].total_price, dec!(950));

    let customer_two = service.get_customer_orders(2);
    assert_eq!(customer_two.len(), 1);
    assert_eq!(customer_two[0].total_price, dec!(4250));
    Ok(())
}

#[test]
fn test_orders_serialize_with_exact_totals() -> Result<()> {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let mut service = OrderCatalogService::new(FixedClock::new(now));
    let session = SessionConfig::from_toml_str(
        r#"
[[orders]]
customer_id = 4
kit_id = 1
quantity = 10
delivery_in_days = 1
"#,
    )?;
    service.place_order(session.orders[0].to_request(now)?)?;

    let json = serde_json::to_value(service.get_customer_orders(4))?;
    assert_eq!(json[0]["total_price"], "940.405");
    assert_eq!(json[0]["expected_delivery_date"], "2024-06-02T00:00:00Z");
    Ok(())
}
