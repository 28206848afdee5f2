use crate::dto::api_response::ApiResponse;
use crate::dto::car_dto::{
    CarCostsResponse, CarDetailResponse, CarListItem, CarListQuery, CreateCarRequest, UpdateCarRequest,
};
use crate::models::car::{Car, CarStatus};
use crate::repositories::car_repository::CarRepository;
use crate::repositories::sale_repository::SaleRepository;
use crate::repositories::service_record_repository::ServiceRecordRepository;
use crate::services::cost_calculator::{compute_cost_summary, compute_profit_summary, days_to_sell, stock_age};
use crate::utils::dates::business_today;
use crate::utils::errors::{bad_request_error, not_found_error, AppError};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct CarController {
    cars: CarRepository,
    service_records: ServiceRecordRepository,
    sales: SaleRepository,
}

impl CarController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            cars: CarRepository::new(pool.clone()),
            service_records: ServiceRecordRepository::new(pool.clone()),
            sales: SaleRepository::new(pool),
        }
    }

    async fn find_car(&self, id: Uuid) -> Result<Car, AppError> {
        self.cars
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Car"))
    }

    pub async fn list(&self, query: CarListQuery) -> Result<ApiResponse<Vec<CarListItem>>, AppError> {
        let today = business_today();
        let cars = self.cars.find_all(query.status, query.search.as_deref()).await?;

        let items = cars
            .into_iter()
            .map(|row| CarListItem {
                days_in_stock: stock_age(row.car.purchase_date, row.sale_date, today),
                car: row.car,
            })
            .collect();

        Ok(ApiResponse::list(items))
    }

    pub async fn get_detail(&self, id: Uuid) -> Result<ApiResponse<CarDetailResponse>, AppError> {
        let car = self.find_car(id).await?;
        let service_records = self.service_records.find_by_car(id).await?;
        let sale = match car.status {
            CarStatus::Sold => self.sales.find_plain_by_car_id(id).await?,
            CarStatus::Active => None,
        };

        let costs = compute_cost_summary(car.purchase_price, service_records.iter().map(|r| r.cost));
        let profit = sale.as_ref().map(|s| compute_profit_summary(&costs, s.sale_price));
        let sale_date = sale.as_ref().map(|s| s.sale_date);

        let response = CarDetailResponse {
            days_in_stock: stock_age(car.purchase_date, sale_date, business_today()),
            days_to_sell: sale_date.map(|sold_on| days_to_sell(car.purchase_date, sold_on)),
            car,
            service_records,
            sale,
            costs,
            profit,
        };

        Ok(ApiResponse::success(response))
    }

    pub async fn get_costs(&self, id: Uuid) -> Result<ApiResponse<CarCostsResponse>, AppError> {
        let car = self.find_car(id).await?;
        let service_records = self.service_records.find_by_car(id).await?;
        let costs = compute_cost_summary(car.purchase_price, service_records.iter().map(|r| r.cost));

        let profit = match car.status {
            CarStatus::Sold => self
                .sales
                .find_plain_by_car_id(id)
                .await?
                .map(|sale| compute_profit_summary(&costs, sale.sale_price)),
            CarStatus::Active => None,
        };

        Ok(ApiResponse::success(CarCostsResponse {
            car_id: car.id,
            costs,
            profit,
        }))
    }

    pub async fn create(&self, mut request: CreateCarRequest) -> Result<ApiResponse<Car>, AppError> {
        request.registration_plate = request.registration_plate.trim().to_uppercase();
        request.validate()?;

        let car = self.cars.create(&request).await?;
        log::info!("🚗 Coche creado: {} ({} {})", car.registration_plate, car.make, car.model);

        Ok(ApiResponse::success_with_message(car, "Car created successfully".to_string()))
    }

    pub async fn update(&self, id: Uuid, mut request: UpdateCarRequest) -> Result<ApiResponse<Car>, AppError> {
        request.registration_plate = request.registration_plate.map(|p| p.trim().to_uppercase());
        request.validate()?;

        let car = self
            .cars
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("Car"))?;

        Ok(ApiResponse::success_with_message(car, "Car updated successfully".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let car = self.find_car(id).await?;

        if car.status == CarStatus::Sold || !self.cars.delete_active(id).await? {
            return Err(bad_request_error(
                "Cannot delete a sold car. Delete the sale record first.",
            ));
        }

        log::info!("🗑️ Coche eliminado: {}", car.registration_plate);
        Ok(())
    }
}
