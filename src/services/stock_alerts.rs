//! Alertas de stock: vencimientos de registro/WOF y coches envejecidos

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::models::dashboard::{AgingRow, ExpiryRow};
use crate::services::cost_calculator::days_in_stock;

/// Ventana de aviso antes del vencimiento
pub const EXPIRY_WARNING_DAYS: i64 = 30;

/// Días en stock a partir de los cuales un coche se considera envejecido
pub const AGING_THRESHOLD_DAYS: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    Expired,
    ExpiringSoon,
    Valid,
}

impl ExpiryStatus {
    pub fn from_days_until(days: i64) -> Self {
        if days < 0 {
            ExpiryStatus::Expired
        } else if days <= EXPIRY_WARNING_DAYS {
            ExpiryStatus::ExpiringSoon
        } else {
            ExpiryStatus::Valid
        }
    }
}

pub fn days_until(expiry: NaiveDate, today: NaiveDate) -> i64 {
    (expiry - today).num_days()
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpiryAlert {
    pub id: Uuid,
    pub registration_plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub registration_expiry: NaiveDate,
    pub wof_expiry: NaiveDate,
    pub reg_status: ExpiryStatus,
    pub wof_status: ExpiryStatus,
    pub reg_days_until_expiry: i64,
    pub wof_days_until_expiry: i64,
}

impl ExpiryAlert {
    pub fn from_row(row: ExpiryRow, today: NaiveDate) -> Self {
        let reg_days = days_until(row.registration_expiry, today);
        let wof_days = days_until(row.wof_expiry, today);

        Self {
            id: row.id,
            registration_plate: row.registration_plate,
            make: row.make,
            model: row.model,
            year: row.year,
            registration_expiry: row.registration_expiry,
            wof_expiry: row.wof_expiry,
            reg_status: ExpiryStatus::from_days_until(reg_days),
            wof_status: ExpiryStatus::from_days_until(wof_days),
            reg_days_until_expiry: reg_days,
            wof_days_until_expiry: wof_days,
        }
    }

    pub fn needs_attention(&self) -> bool {
        self.reg_status != ExpiryStatus::Valid || self.wof_status != ExpiryStatus::Valid
    }
}

/// Coches con registro o WOF vencido o a punto de vencer
pub fn expiry_alerts(rows: Vec<ExpiryRow>, today: NaiveDate) -> Vec<ExpiryAlert> {
    rows.into_iter()
        .map(|row| ExpiryAlert::from_row(row, today))
        .filter(ExpiryAlert::needs_attention)
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct AgingStockItem {
    pub id: Uuid,
    pub registration_plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub purchase_date: NaiveDate,
    pub purchase_price: Decimal,
    pub days_in_stock: i64,
}

/// Coches activos con al menos `AGING_THRESHOLD_DAYS` en stock, el más antiguo primero
pub fn aging_stock(rows: Vec<AgingRow>, today: NaiveDate) -> Vec<AgingStockItem> {
    let mut items: Vec<AgingStockItem> = rows
        .into_iter()
        .map(|row| AgingStockItem {
            days_in_stock: days_in_stock(row.purchase_date, today),
            id: row.id,
            registration_plate: row.registration_plate,
            make: row.make,
            model: row.model,
            year: row.year,
            purchase_date: row.purchase_date,
            purchase_price: row.purchase_price,
        })
        .filter(|item| item.days_in_stock >= AGING_THRESHOLD_DAYS)
        .collect();

    items.sort_by_key(|item| item.purchase_date);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expiry_row(registration_expiry: NaiveDate, wof_expiry: NaiveDate) -> ExpiryRow {
        ExpiryRow {
            id: Uuid::new_v4(),
            registration_plate: "KIWI1".to_string(),
            make: "Mazda".to_string(),
            model: "Demio".to_string(),
            year: 2009,
            registration_expiry,
            wof_expiry,
        }
    }

    fn aging_row(purchase_date: NaiveDate) -> AgingRow {
        AgingRow {
            id: Uuid::new_v4(),
            registration_plate: "ABC123".to_string(),
            make: "Honda".to_string(),
            model: "Fit".to_string(),
            year: 2010,
            purchase_date,
            purchase_price: Decimal::from(3500),
        }
    }

    #[test]
    fn test_expiry_status_boundaries() {
        assert_eq!(ExpiryStatus::from_days_until(-1), ExpiryStatus::Expired);
        assert_eq!(ExpiryStatus::from_days_until(0), ExpiryStatus::ExpiringSoon);
        assert_eq!(ExpiryStatus::from_days_until(30), ExpiryStatus::ExpiringSoon);
        assert_eq!(ExpiryStatus::from_days_until(31), ExpiryStatus::Valid);
    }

    #[test]
    fn test_expiry_alert_days() {
        let today = date(2024, 6, 1);
        let alert = ExpiryAlert::from_row(expiry_row(date(2024, 5, 20), date(2024, 9, 1)), today);

        assert_eq!(alert.reg_days_until_expiry, -12);
        assert_eq!(alert.reg_status, ExpiryStatus::Expired);
        assert_eq!(alert.wof_days_until_expiry, 92);
        assert_eq!(alert.wof_status, ExpiryStatus::Valid);
        assert!(alert.needs_attention());
    }

    #[test]
    fn test_expiry_alerts_skip_valid_cars() {
        let today = date(2024, 6, 1);
        let rows = vec![
            expiry_row(date(2025, 1, 1), date(2025, 1, 1)),
            expiry_row(date(2025, 1, 1), date(2024, 6, 15)),
        ];
        let alerts = expiry_alerts(rows, today);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].wof_status, ExpiryStatus::ExpiringSoon);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_value(ExpiryStatus::ExpiringSoon).unwrap();
        assert_eq!(json, "expiring_soon");
    }

    #[test]
    fn test_aging_stock_threshold_and_order() {
        let today = date(2024, 6, 1);
        let rows = vec![
            aging_row(date(2024, 4, 2)),
            aging_row(date(2024, 1, 10)),
            aging_row(date(2024, 4, 3)),
        ];
        let items = aging_stock(rows, today);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].purchase_date, date(2024, 1, 10));
        assert_eq!(items[1].days_in_stock, 60);
    }
}
