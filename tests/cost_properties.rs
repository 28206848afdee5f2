use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use car_yard::models::car::CarStatus;
use car_yard::models::dashboard::StockLedgerRow;
use car_yard::services::cost_calculator::{
    compute_cost_summary, compute_profit_summary, cost_summary_from_totals, days_to_sell, MIN_MARGIN, WOF_FEE,
};
use car_yard::services::fleet_statistics::FleetStatistics;

fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

#[test]
fn test_aggregated_totals_match_itemised_expenses() {
    let expenses = [cents(12_550), cents(8_999), cents(1), cents(0)];
    let itemised = compute_cost_summary(cents(450_000), expenses);
    let aggregated = cost_summary_from_totals(cents(450_000), expenses.iter().copied().sum());

    assert_eq!(itemised, aggregated);
}

#[test]
fn test_fixed_charges_added_once() {
    let summary = compute_cost_summary(cents(100_000), [cents(5_000)]);

    assert_eq!(
        summary.total_cost - summary.purchase_price - summary.total_service_cost,
        WOF_FEE + MIN_MARGIN
    );
}

#[test]
fn test_fleet_profit_matches_per_car_profit() {
    let cars = [
        (cents(500_000), cents(50_000), Some(cents(800_000))),
        (cents(300_000), cents(0), Some(cents(350_000))),
        (cents(200_000), cents(12_345), None),
    ];

    let rows: Vec<StockLedgerRow> = cars
        .iter()
        .map(|(purchase, service, sale)| StockLedgerRow {
            car_id: Uuid::new_v4(),
            status: if sale.is_some() { CarStatus::Sold } else { CarStatus::Active },
            purchase_price: *purchase,
            total_service_cost: *service,
            sale_price: *sale,
        })
        .collect();

    let expected: Decimal = cars
        .iter()
        .filter_map(|(purchase, service, sale)| {
            sale.map(|price| compute_profit_summary(&cost_summary_from_totals(*purchase, *service), price).profit)
        })
        .sum();

    let stats = FleetStatistics::from_ledger(&rows);
    assert_eq!(stats.total_profit, expected);
    assert_eq!(stats.average_profit, expected / Decimal::from(2));
    assert_eq!(stats.total_costs, stats.total_purchase_costs + stats.total_service_costs);
}

#[test]
fn test_days_to_sell_across_leap_day() {
    let bought = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    let sold = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

    assert_eq!(days_to_sell(bought, sold), 29);
}

#[test]
fn test_profit_serializes_margin_as_null_for_free_sale() {
    let summary = compute_cost_summary(cents(10_000), Vec::new());
    let profit = compute_profit_summary(&summary, Decimal::ZERO);
    let json = serde_json::to_value(profit).unwrap();

    assert!(json["margin"].is_null());
}
