//! Fecha de referencia del negocio

use chrono::{Local, NaiveDate};

/// Hoy en la zona horaria local del proceso.
///
/// La zona se configura con `TZ` (p. ej. `TZ=Pacific/Auckland`); sin ella
/// se usa la del sistema. Los días en stock y los vencimientos se cuentan
/// desde esta fecha.
pub fn business_today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_business_today_within_a_day_of_utc() {
        let utc_today = Utc::now().date_naive();
        let today = business_today();

        assert!(today >= utc_today - Duration::days(1));
        assert!(today <= utc_today + Duration::days(1));
    }
}
