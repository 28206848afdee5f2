//! Estadísticas globales del patio
//!
//! Se alimenta de una sola consulta agregada (`StockLedgerRow`, una fila
//! por coche) y pliega los totales en memoria.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::car::{Car, CarStatus};
use crate::models::dashboard::StockLedgerRow;
use crate::models::sale::Sale;
use crate::models::service_record::ServiceRecord;
use crate::services::cost_calculator::{compute_profit_summary, cost_summary_from_totals};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FleetStatistics {
    pub total_cars: i64,
    pub active_cars: i64,
    pub sold_cars: i64,
    pub total_revenue: Decimal,
    pub total_purchase_costs: Decimal,
    pub total_service_costs: Decimal,
    pub total_costs: Decimal,
    pub total_profit: Decimal,
    pub average_profit: Decimal,
}

impl FleetStatistics {
    /// Pliega las filas del libro de stock.
    ///
    /// El beneficio solo cuenta coches `sold` con venta registrada; la media
    /// se divide entre todos los coches `sold` y se redondea a céntimos.
    pub fn from_ledger(rows: &[StockLedgerRow]) -> Self {
        let mut stats = FleetStatistics {
            total_cars: 0,
            active_cars: 0,
            sold_cars: 0,
            total_revenue: Decimal::ZERO,
            total_purchase_costs: Decimal::ZERO,
            total_service_costs: Decimal::ZERO,
            total_costs: Decimal::ZERO,
            total_profit: Decimal::ZERO,
            average_profit: Decimal::ZERO,
        };

        for row in rows {
            stats.total_cars += 1;
            stats.total_purchase_costs += row.purchase_price;
            stats.total_service_costs += row.total_service_cost;

            if let Some(sale_price) = row.sale_price {
                stats.total_revenue += sale_price;
            }

            match row.status {
                CarStatus::Active => stats.active_cars += 1,
                CarStatus::Sold => {
                    stats.sold_cars += 1;
                    if let Some(sale_price) = row.sale_price {
                        let costs = cost_summary_from_totals(row.purchase_price, row.total_service_cost);
                        stats.total_profit += compute_profit_summary(&costs, sale_price).profit;
                    }
                }
            }
        }

        stats.total_costs = stats.total_purchase_costs + stats.total_service_costs;
        if stats.sold_cars > 0 {
            stats.average_profit = (stats.total_profit / Decimal::from(stats.sold_cars)).round_dp(2);
        }

        stats
    }
}

/// Construye el libro de stock a partir de registros sueltos.
pub fn ledger_from_records(
    cars: &[Car],
    expenses_by_car: &HashMap<Uuid, Vec<ServiceRecord>>,
    sales_by_car: &HashMap<Uuid, Sale>,
) -> Vec<StockLedgerRow> {
    cars.iter()
        .map(|car| StockLedgerRow {
            car_id: car.id,
            status: car.status,
            purchase_price: car.purchase_price,
            total_service_cost: expenses_by_car
                .get(&car.id)
                .map(|records| records.iter().map(|r| r.cost).sum())
                .unwrap_or(Decimal::ZERO),
            sale_price: sales_by_car.get(&car.id).map(|sale| sale.sale_price),
        })
        .collect()
}

/// Estadísticas a partir de coches, gastos y ventas ya cargados.
pub fn compute_fleet_statistics(
    cars: &[Car],
    expenses_by_car: &HashMap<Uuid, Vec<ServiceRecord>>,
    sales_by_car: &HashMap<Uuid, Sale>,
) -> FleetStatistics {
    FleetStatistics::from_ledger(&ledger_from_records(cars, expenses_by_car, sales_by_car))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: CarStatus, purchase: i64, service: i64, sale: Option<i64>) -> StockLedgerRow {
        StockLedgerRow {
            car_id: Uuid::new_v4(),
            status,
            purchase_price: Decimal::from(purchase),
            total_service_cost: Decimal::from(service),
            sale_price: sale.map(Decimal::from),
        }
    }

    #[test]
    fn test_empty_fleet() {
        let stats = FleetStatistics::from_ledger(&[]);

        assert_eq!(stats.total_cars, 0);
        assert_eq!(stats.total_profit, Decimal::ZERO);
        assert_eq!(stats.average_profit, Decimal::ZERO);
    }

    #[test]
    fn test_no_sold_cars_has_zero_average() {
        let rows = vec![
            row(CarStatus::Active, 4000, 250, None),
            row(CarStatus::Active, 6000, 0, None),
        ];
        let stats = FleetStatistics::from_ledger(&rows);

        assert_eq!(stats.active_cars, 2);
        assert_eq!(stats.sold_cars, 0);
        assert_eq!(stats.average_profit, Decimal::ZERO);
        assert_eq!(stats.total_purchase_costs, Decimal::from(10000));
        assert_eq!(stats.total_service_costs, Decimal::from(250));
        assert_eq!(stats.total_costs, Decimal::from(10250));
    }

    #[test]
    fn test_profit_and_average() {
        // total_cost = 3000 + 0 + 65 + 1000 = 4065
        // +1000 -> vendido a 5065, -200 -> vendido a 3865
        let rows = vec![
            row(CarStatus::Sold, 3000, 0, Some(5065)),
            row(CarStatus::Sold, 3000, 0, Some(3865)),
            row(CarStatus::Active, 8000, 400, None),
        ];
        let stats = FleetStatistics::from_ledger(&rows);

        assert_eq!(stats.total_cars, 3);
        assert_eq!(stats.sold_cars, 2);
        assert_eq!(stats.active_cars, 1);
        assert_eq!(stats.total_profit, Decimal::from(800));
        assert_eq!(stats.average_profit, Decimal::from(400));
        assert_eq!(stats.total_revenue, Decimal::from(5065 + 3865));
        assert_eq!(stats.total_purchase_costs, Decimal::from(14000));
        assert_eq!(stats.total_service_costs, Decimal::from(400));
    }

    #[test]
    fn test_sold_car_without_sale_counts_in_average_only() {
        let rows = vec![
            row(CarStatus::Sold, 3000, 0, Some(5065)),
            row(CarStatus::Sold, 2000, 0, None),
        ];
        let stats = FleetStatistics::from_ledger(&rows);

        assert_eq!(stats.total_profit, Decimal::from(1000));
        assert_eq!(stats.average_profit, Decimal::from(500));
    }

    #[test]
    fn test_average_profit_rounds_to_cents() {
        let rows = vec![
            row(CarStatus::Sold, 3000, 0, Some(4066)),
            row(CarStatus::Sold, 3000, 0, Some(4065)),
            row(CarStatus::Sold, 3000, 0, Some(4065)),
        ];
        let stats = FleetStatistics::from_ledger(&rows);

        assert_eq!(stats.total_profit, Decimal::from(1));
        assert_eq!(stats.average_profit, Decimal::new(33, 2));
        assert_eq!(serde_json::to_value(&stats).unwrap()["average_profit"], "0.33");
    }

    #[test]
    fn test_from_records_matches_ledger() {
        use chrono::{NaiveDate, Utc};

        let bought = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let car = Car {
            id: Uuid::new_v4(),
            registration_plate: "ABC123".to_string(),
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2012,
            color: None,
            odometer: None,
            vin: None,
            registration_expiry: bought,
            wof_expiry: bought,
            purchase_date: bought,
            purchase_price: Decimal::from(5000),
            status: CarStatus::Sold,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let expense = |cost: i64| ServiceRecord {
            id: Uuid::new_v4(),
            car_id: car.id,
            service_date: bought,
            service_type: "repair".to_string(),
            description: "Brake pads".to_string(),
            cost: Decimal::from(cost),
            provider: None,
            notes: None,
            created_at: Utc::now(),
        };
        let sale = Sale {
            id: Uuid::new_v4(),
            car_id: car.id,
            sale_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            sale_price: Decimal::from(8000),
            customer_name: "Aroha".to_string(),
            customer_email: None,
            customer_phone: "0211234567".to_string(),
            customer_license_number: "AB123456".to_string(),
            customer_license_version: None,
            payment_method: "cash".to_string(),
            payment_status: "completed".to_string(),
            payment_notes: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let expenses = HashMap::from([(car.id, vec![expense(200), expense(300)])]);
        let sales = HashMap::from([(car.id, sale)]);
        let stats = compute_fleet_statistics(&[car], &expenses, &sales);

        assert_eq!(stats.total_service_costs, Decimal::from(500));
        assert_eq!(stats.total_profit, Decimal::from(1435));
        assert_eq!(stats.average_profit, Decimal::from(1435));
    }
}
