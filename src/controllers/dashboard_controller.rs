use crate::dto::api_response::ApiResponse;
use crate::dto::dashboard_dto::ProfitLossItem;
use crate::models::dashboard::MonthlySalesRow;
use crate::repositories::dashboard_repository::DashboardRepository;
use crate::services::fleet_statistics::FleetStatistics;
use crate::services::stock_alerts::{
    aging_stock, expiry_alerts, AgingStockItem, ExpiryAlert, AGING_THRESHOLD_DAYS, EXPIRY_WARNING_DAYS,
};
use crate::utils::dates::business_today;
use crate::utils::errors::AppError;
use chrono::{Duration, Months};
use sqlx::PgPool;

pub struct DashboardController {
    repository: DashboardRepository,
}

impl DashboardController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DashboardRepository::new(pool),
        }
    }

    pub async fn statistics(&self) -> Result<ApiResponse<FleetStatistics>, AppError> {
        let ledger = self.repository.stock_ledger().await?;
        Ok(ApiResponse::success(FleetStatistics::from_ledger(&ledger)))
    }

    pub async fn profit_loss(&self) -> Result<ApiResponse<Vec<ProfitLossItem>>, AppError> {
        let rows = self.repository.sold_cars().await?;
        Ok(ApiResponse::list(rows.into_iter().map(ProfitLossItem::from).collect()))
    }

    pub async fn expiry_alerts(&self) -> Result<ApiResponse<Vec<ExpiryAlert>>, AppError> {
        let today = business_today();
        let horizon = today + Duration::days(EXPIRY_WARNING_DAYS);

        let rows = self.repository.expiring_cars(horizon).await?;
        Ok(ApiResponse::list(expiry_alerts(rows, today)))
    }

    pub async fn aging_stock(&self) -> Result<ApiResponse<Vec<AgingStockItem>>, AppError> {
        let today = business_today();
        let cutoff = today - Duration::days(AGING_THRESHOLD_DAYS);

        let rows = self.repository.aging_cars(cutoff).await?;
        Ok(ApiResponse::list(aging_stock(rows, today)))
    }

    pub async fn monthly_sales(&self) -> Result<ApiResponse<Vec<MonthlySalesRow>>, AppError> {
        let today = business_today();
        let since = today.checked_sub_months(Months::new(12)).unwrap_or(today);

        let rows = self.repository.monthly_sales(since).await?;
        Ok(ApiResponse::list(rows))
    }
}
