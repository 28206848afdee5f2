use crate::dto::customer_dto::CustomerRequest;
use crate::models::customer::{Customer, CustomerPurchase, CustomerWithStats};
use crate::utils::errors::{map_unique_violation, AppError};
use sqlx::PgPool;
use uuid::Uuid;

const DUPLICATE_PHONE: &str = "A customer with this phone number already exists";

pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Clientes con número de compras y total gastado, en una sola consulta
    pub async fn find_all_with_stats(&self, search: Option<&str>) -> Result<Vec<CustomerWithStats>, AppError> {
        let pattern = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{}%", s));

        let customers = sqlx::query_as::<_, CustomerWithStats>(
            r#"
            SELECT cu.*,
                   COUNT(s.id) AS purchase_count,
                   COALESCE(SUM(s.sale_price), 0) AS total_spent
            FROM customers cu
            LEFT JOIN sales s ON s.customer_phone = cu.phone
            WHERE $1::text IS NULL
               OR cu.name ILIKE $1
               OR cu.phone ILIKE $1
               OR cu.email ILIKE $1
            GROUP BY cu.id
            ORDER BY cu.created_at DESC
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(customer)
    }

    /// Compras asociadas por teléfono
    pub async fn find_purchases(&self, phone: &str) -> Result<Vec<CustomerPurchase>, AppError> {
        let purchases = sqlx::query_as::<_, CustomerPurchase>(
            r#"
            SELECT s.id AS sale_id, s.car_id, s.sale_date, s.sale_price, s.payment_method, s.payment_status,
                   c.registration_plate, c.make, c.model, c.year
            FROM sales s
            JOIN cars c ON c.id = s.car_id
            WHERE s.customer_phone = $1
            ORDER BY s.sale_date DESC
            "#,
        )
        .bind(phone)
        .fetch_all(&self.pool)
        .await?;

        Ok(purchases)
    }

    pub async fn create(&self, request: &CustomerRequest) -> Result<Customer, AppError> {
        sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (id, name, email, phone, address, license_number, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.address)
        .bind(request.license_number.as_ref().map(|l| l.to_uppercase()))
        .bind(&request.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, DUPLICATE_PHONE))
    }

    pub async fn update(&self, id: Uuid, request: &CustomerRequest) -> Result<Option<Customer>, AppError> {
        sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET name = $2, email = $3, phone = $4, address = $5, license_number = $6, notes = $7,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.address)
        .bind(request.license_number.as_ref().map(|l| l.to_uppercase()))
        .bind(&request.notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, DUPLICATE_PHONE))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
