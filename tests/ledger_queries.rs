//! Consultas agregadas del dashboard contra PostgreSQL real.
//!
//! Requieren `DATABASE_URL`; se lanzan con `cargo test -- --ignored`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;
use uuid::Uuid;

use car_yard::config::DatabaseConfig;
use car_yard::database::DatabaseConnection;
use car_yard::dto::car_dto::CreateCarRequest;
use car_yard::dto::sale_dto::CreateSaleRequest;
use car_yard::dto::service_record_dto::CreateServiceRecordRequest;
use car_yard::models::car::Car;
use car_yard::models::sale::Sale;
use car_yard::models::service_record::ServiceRecord;
use car_yard::repositories::car_repository::CarRepository;
use car_yard::repositories::dashboard_repository::DashboardRepository;
use car_yard::repositories::sale_repository::SaleRepository;
use car_yard::repositories::service_record_repository::ServiceRecordRepository;
use car_yard::services::fleet_statistics::{compute_fleet_statistics, FleetStatistics};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn unique_plate() -> String {
    format!("T{}", &Uuid::new_v4().simple().to_string()[..5]).to_uppercase()
}

fn car_request(purchase_price: i64) -> CreateCarRequest {
    CreateCarRequest {
        registration_plate: unique_plate(),
        make: "Toyota".to_string(),
        model: "Corolla".to_string(),
        year: 2012,
        color: None,
        odometer: None,
        vin: None,
        registration_expiry: date(2025, 6, 1),
        wof_expiry: date(2025, 6, 1),
        purchase_date: date(2024, 1, 1),
        purchase_price: Decimal::from(purchase_price),
        notes: None,
    }
}

fn service_request(cost: i64) -> CreateServiceRecordRequest {
    CreateServiceRecordRequest {
        service_date: date(2024, 1, 10),
        service_type: "repair".to_string(),
        description: "Brake pads".to_string(),
        cost: Decimal::from(cost),
        provider: None,
        notes: None,
    }
}

fn sale_request(car_id: Uuid, sale_price: i64) -> CreateSaleRequest {
    CreateSaleRequest {
        car_id,
        sale_date: date(2024, 1, 31),
        sale_price: Decimal::from(sale_price),
        customer_name: "Aroha Ngata".to_string(),
        customer_email: None,
        customer_phone: "0211234567".to_string(),
        customer_license_number: "AB123456".to_string(),
        customer_license_version: None,
        payment_method: "cash".to_string(),
        payment_status: None,
        payment_notes: None,
        notes: None,
    }
}

async fn stats_from_single_rows(
    cars: &CarRepository,
    services: &ServiceRecordRepository,
    sales: &SaleRepository,
) -> FleetStatistics {
    let all_cars: Vec<Car> = cars
        .find_all(None, None)
        .await
        .unwrap()
        .into_iter()
        .map(|row| row.car)
        .collect();

    let mut expenses_by_car: HashMap<Uuid, Vec<ServiceRecord>> = HashMap::new();
    let mut sales_by_car: HashMap<Uuid, Sale> = HashMap::new();
    for car in &all_cars {
        expenses_by_car.insert(car.id, services.find_by_car(car.id).await.unwrap());
        if let Some(sale) = sales.find_plain_by_car_id(car.id).await.unwrap() {
            sales_by_car.insert(car.id, sale);
        }
    }

    compute_fleet_statistics(&all_cars, &expenses_by_car, &sales_by_car)
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_ledger_queries_match_per_car_figures() {
    if std::env::var("DATABASE_URL").is_err() {
        return;
    }

    let connection = DatabaseConnection::new(&DatabaseConfig::default()).await.unwrap();
    connection.run_migrations().await.unwrap();
    let pool = connection.pool().clone();

    let cars = CarRepository::new(pool.clone());
    let services = ServiceRecordRepository::new(pool.clone());
    let sales = SaleRepository::new(pool.clone());
    let dashboard = DashboardRepository::new(pool);

    // Coche vendido con varios gastos: el join con la venta no debe duplicarlos
    let sold = cars.create(&car_request(5000)).await.unwrap();
    for cost in [200, 300, 100] {
        services.create(sold.id, &service_request(cost)).await.unwrap();
    }
    let sale = sales.create(&sale_request(sold.id, 8000)).await.unwrap();

    let active = cars.create(&car_request(4000)).await.unwrap();
    for cost in [150, 50] {
        services.create(active.id, &service_request(cost)).await.unwrap();
    }

    let ledger = dashboard.stock_ledger().await.unwrap();
    let batched = FleetStatistics::from_ledger(&ledger);
    let single_rows = stats_from_single_rows(&cars, &services, &sales).await;

    let sold_row = ledger.iter().find(|row| row.car_id == sold.id).unwrap();
    let active_row = ledger.iter().find(|row| row.car_id == active.id).unwrap();
    let sold_report = dashboard
        .sold_cars()
        .await
        .unwrap()
        .into_iter()
        .find(|row| row.car_id == sold.id)
        .unwrap();

    sales.delete(sale.id).await.unwrap();
    cars.delete_active(sold.id).await.unwrap();
    cars.delete_active(active.id).await.unwrap();

    assert_eq!(batched, single_rows);
    assert_eq!(sold_row.total_service_cost, Decimal::from(600));
    assert_eq!(sold_row.sale_price, Some(Decimal::from(8000)));
    assert_eq!(active_row.total_service_cost, Decimal::from(200));
    assert_eq!(active_row.sale_price, None);
    assert_eq!(sold_report.total_service_cost, Decimal::from(600));
    assert_eq!(sold_report.sale_price, Decimal::from(8000));
}
