use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::models::dashboard::SoldCarRow;
use crate::services::cost_calculator::{
    compute_profit_summary, cost_summary_from_totals, days_to_sell,
};

// Fila del informe de pérdidas y ganancias
#[derive(Debug, Serialize)]
pub struct ProfitLossItem {
    pub car_id: Uuid,
    pub registration_plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub sale_date: NaiveDate,
    pub purchase_price: Decimal,
    pub service_costs: Decimal,
    pub total_cost: Decimal,
    pub sale_price: Decimal,
    pub profit: Decimal,
    pub margin: Option<Decimal>,
    pub days_to_sell: i64,
}

impl From<SoldCarRow> for ProfitLossItem {
    fn from(row: SoldCarRow) -> Self {
        let costs = cost_summary_from_totals(row.purchase_price, row.total_service_cost);
        let profit = compute_profit_summary(&costs, row.sale_price);

        Self {
            days_to_sell: days_to_sell(row.purchase_date, row.sale_date),
            car_id: row.car_id,
            registration_plate: row.registration_plate,
            make: row.make,
            model: row.model,
            year: row.year,
            sale_date: row.sale_date,
            purchase_price: row.purchase_price,
            service_costs: costs.total_service_cost,
            total_cost: costs.total_cost,
            sale_price: row.sale_price,
            profit: profit.profit,
            margin: profit.margin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profit_loss_item_from_row() {
        let row = SoldCarRow {
            car_id: Uuid::new_v4(),
            registration_plate: "ABC123".to_string(),
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2012,
            purchase_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            purchase_price: Decimal::from(5000),
            total_service_cost: Decimal::from(500),
            sale_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            sale_price: Decimal::from(8000),
        };
        let item = ProfitLossItem::from(row);

        assert_eq!(item.service_costs, Decimal::from(500));
        assert_eq!(item.total_cost, Decimal::from(6565));
        assert_eq!(item.profit, Decimal::from(1435));
        assert_eq!(item.margin, Some(Decimal::new(179375, 6)));
        assert_eq!(item.days_to_sell, 30);
    }
}
