use axum::{extract::State, routing::get, Json, Router};
use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::api_response::ApiResponse;
use crate::dto::dashboard_dto::ProfitLossItem;
use crate::models::dashboard::MonthlySalesRow;
use crate::services::fleet_statistics::FleetStatistics;
use crate::services::stock_alerts::{AgingStockItem, ExpiryAlert};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/dashboard/stats", get(get_statistics))
        .route("/dashboard/profit-loss", get(get_profit_loss))
        .route("/dashboard/expiry-alerts", get(get_expiry_alerts))
        .route("/dashboard/aging-stock", get(get_aging_stock))
        .route("/dashboard/monthly-sales", get(get_monthly_sales))
}

async fn get_statistics(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<FleetStatistics>>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    Ok(Json(controller.statistics().await?))
}

async fn get_profit_loss(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ProfitLossItem>>>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    Ok(Json(controller.profit_loss().await?))
}

async fn get_expiry_alerts(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ExpiryAlert>>>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    Ok(Json(controller.expiry_alerts().await?))
}

async fn get_aging_stock(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<AgingStockItem>>>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    Ok(Json(controller.aging_stock().await?))
}

async fn get_monthly_sales(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<MonthlySalesRow>>>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    Ok(Json(controller.monthly_sales().await?))
}
