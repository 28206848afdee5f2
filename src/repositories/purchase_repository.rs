use crate::dto::purchase_dto::CreatePurchaseRequest;
use crate::models::purchase::Purchase;
use crate::utils::errors::{map_unique_violation, AppError};
use sqlx::PgPool;
use uuid::Uuid;

pub struct PurchaseRepository {
    pool: PgPool,
}

impl PurchaseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: &CreatePurchaseRequest) -> Result<Purchase, AppError> {
        sqlx::query_as::<_, Purchase>(
            r#"
            INSERT INTO purchases (
                id, car_id, purchase_date, purchase_price, seller_name, seller_email, seller_phone,
                seller_address, seller_license_number, seller_license_version, payment_method, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.car_id)
        .bind(request.purchase_date)
        .bind(request.purchase_price)
        .bind(&request.seller_name)
        .bind(&request.seller_email)
        .bind(&request.seller_phone)
        .bind(&request.seller_address)
        .bind(request.seller_license_number.to_uppercase())
        .bind(&request.seller_license_version)
        .bind(&request.payment_method)
        .bind(&request.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "A purchase agreement already exists for this car"))
    }

    pub async fn find_by_car_id(&self, car_id: Uuid) -> Result<Option<Purchase>, AppError> {
        let purchase = sqlx::query_as::<_, Purchase>("SELECT * FROM purchases WHERE car_id = $1")
            .bind(car_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(purchase)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM purchases WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
