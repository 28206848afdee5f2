//! Cálculo de costes y beneficios por coche
//!
//! Funciones puras: reciben valores ya leídos de la base de datos y
//! devuelven los importes derivados. No hacen I/O ni guardan estado.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Tasa fija de WOF por coche (NZD)
pub const WOF_FEE: Decimal = Decimal::from_parts(65, 0, 0, false, 0);

/// Margen mínimo fijo por coche (NZD)
pub const MIN_MARGIN: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Coste total de un coche en stock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostSummary {
    pub purchase_price: Decimal,
    pub total_service_cost: Decimal,
    pub wof_fee: Decimal,
    pub min_margin: Decimal,
    pub total_cost: Decimal,
}

/// Resultado de la venta frente al coste total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfitSummary {
    pub sale_price: Decimal,
    pub total_cost: Decimal,
    pub profit: Decimal,
    /// `profit / sale_price`; `None` cuando el precio de venta es 0
    pub margin: Option<Decimal>,
}

/// Margen mínimo aplicado a un coche.
///
/// Es plano para cualquier precio de compra. Hubo una intención de
/// escalarlo para coches de más de $3000 que nunca llegó a definirse;
/// hasta que exista esa regla se mantiene el valor fijo.
pub fn minimum_margin(_purchase_price: Decimal) -> Decimal {
    MIN_MARGIN
}

/// Suma precio de compra, gastos de taller, WOF y margen mínimo.
pub fn compute_cost_summary<I>(purchase_price: Decimal, expense_costs: I) -> CostSummary
where
    I: IntoIterator<Item = Decimal>,
{
    let total_service_cost: Decimal = expense_costs.into_iter().sum();
    cost_summary_from_totals(purchase_price, total_service_cost)
}

/// Igual que `compute_cost_summary` cuando la suma de gastos ya viene
/// agregada por la consulta (`SUM(cost)`).
pub fn cost_summary_from_totals(purchase_price: Decimal, total_service_cost: Decimal) -> CostSummary {
    let min_margin = minimum_margin(purchase_price);

    CostSummary {
        purchase_price,
        total_service_cost,
        wof_fee: WOF_FEE,
        min_margin,
        total_cost: purchase_price + total_service_cost + WOF_FEE + min_margin,
    }
}

/// Beneficio y margen de un coche vendido.
pub fn compute_profit_summary(cost_summary: &CostSummary, sale_price: Decimal) -> ProfitSummary {
    let profit = sale_price - cost_summary.total_cost;
    let margin = if sale_price > Decimal::ZERO {
        profit.checked_div(sale_price)
    } else {
        None
    };

    ProfitSummary {
        sale_price,
        total_cost: cost_summary.total_cost,
        profit,
        margin,
    }
}

/// Días completos entre la compra y la fecha de referencia.
///
/// Puede ser negativo si la compra es posterior a la referencia; el valor
/// se devuelve tal cual para que el dato erróneo sea visible.
pub fn days_in_stock(purchase_date: NaiveDate, reference_date: NaiveDate) -> i64 {
    (reference_date - purchase_date).num_days()
}

/// Días entre la compra y la venta.
pub fn days_to_sell(purchase_date: NaiveDate, sale_date: NaiveDate) -> i64 {
    days_in_stock(purchase_date, sale_date)
}

/// Días en stock hasta hoy si el coche sigue activo, o hasta la venta.
pub fn stock_age(purchase_date: NaiveDate, sale_date: Option<NaiveDate>, today: NaiveDate) -> i64 {
    match sale_date {
        Some(sold_on) => days_to_sell(purchase_date, sold_on),
        None => days_in_stock(purchase_date, today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: i64) -> Decimal {
        Decimal::from(value)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_constants() {
        assert_eq!(WOF_FEE, dec(65));
        assert_eq!(MIN_MARGIN, dec(1000));
    }

    #[test]
    fn test_cost_summary_with_expenses() {
        let summary = compute_cost_summary(dec(5000), vec![dec(200), dec(300)]);

        assert_eq!(summary.purchase_price, dec(5000));
        assert_eq!(summary.total_service_cost, dec(500));
        assert_eq!(summary.wof_fee, dec(65));
        assert_eq!(summary.min_margin, dec(1000));
        assert_eq!(summary.total_cost, dec(6565));
    }

    #[test]
    fn test_cost_summary_without_expenses() {
        let summary = compute_cost_summary(dec(2500), Vec::new());

        assert_eq!(summary.total_service_cost, Decimal::ZERO);
        assert_eq!(summary.total_cost, dec(2500) + dec(65) + dec(1000));
    }

    #[test]
    fn test_margin_is_flat_above_three_thousand() {
        let cheap = compute_cost_summary(dec(1500), Vec::new());
        let dear = compute_cost_summary(dec(15000), Vec::new());

        assert_eq!(cheap.min_margin, dear.min_margin);
        assert_eq!(dear.min_margin, dec(1000));
    }

    #[test]
    fn test_total_cost_never_below_purchase_price() {
        let prices = [0, 1, 999, 3000, 3001, 25000];
        let expenses: [&[i64]; 3] = [&[], &[0], &[150, 0, 80]];

        for price in prices {
            for costs in expenses {
                let summary = compute_cost_summary(dec(price), costs.iter().map(|c| dec(*c)));
                assert!(summary.total_cost >= summary.purchase_price);
            }
        }
    }

    #[test]
    fn test_cents_do_not_drift() {
        let costs = vec![Decimal::new(10, 2); 10];
        let summary = compute_cost_summary(Decimal::new(100000, 2), costs);

        assert_eq!(summary.total_service_cost, Decimal::new(100, 2));
        assert_eq!(summary.total_cost, Decimal::new(206600, 2));
    }

    #[test]
    fn test_profit_summary_example() {
        let summary = compute_cost_summary(dec(5000), vec![dec(200), dec(300)]);
        let profit = compute_profit_summary(&summary, dec(8000));

        assert_eq!(profit.total_cost, dec(6565));
        assert_eq!(profit.profit, dec(1435));
        assert_eq!(profit.margin, Some(Decimal::new(179375, 6)));
    }

    #[test]
    fn test_profit_summary_is_idempotent() {
        let summary = compute_cost_summary(Decimal::new(499999, 2), vec![Decimal::new(3333, 2)]);
        let first = compute_profit_summary(&summary, Decimal::new(750050, 2));
        let second = compute_profit_summary(&summary, Decimal::new(750050, 2));

        assert_eq!(first, second);
        assert_eq!(first.profit, first.sale_price - summary.total_cost);
    }

    #[test]
    fn test_negative_profit_is_allowed() {
        let summary = compute_cost_summary(dec(5000), Vec::new());
        let profit = compute_profit_summary(&summary, dec(5000));

        assert_eq!(profit.profit, dec(-1065));
        assert!(profit.margin.unwrap() < Decimal::ZERO);
    }

    #[test]
    fn test_zero_sale_price_has_no_margin() {
        let summary = compute_cost_summary(dec(100), Vec::new());
        let profit = compute_profit_summary(&summary, Decimal::ZERO);

        assert_eq!(profit.profit, dec(-1165));
        assert_eq!(profit.margin, None);
    }

    #[test]
    fn test_days_to_sell() {
        assert_eq!(days_to_sell(date(2024, 1, 1), date(2024, 1, 31)), 30);
        assert_eq!(days_to_sell(date(2024, 2, 28), date(2024, 3, 1)), 2);
    }

    #[test]
    fn test_days_in_stock_future_purchase_is_negative() {
        assert_eq!(days_in_stock(date(2024, 6, 10), date(2024, 6, 1)), -9);
    }

    #[test]
    fn test_stock_age_uses_sale_date_when_sold() {
        let bought = date(2024, 1, 1);
        let today = date(2024, 12, 31);

        assert_eq!(stock_age(bought, Some(date(2024, 1, 31)), today), 30);
        assert_eq!(stock_age(bought, None, today), 365);
    }
}
