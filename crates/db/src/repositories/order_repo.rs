//! Repository for the `orders` table, including the transactional
//! placement sequence.

use sqlx::PgPool;

use atelier_core::status::OrderStatus;
use atelier_core::types::DbId;

use crate::models::customer::{CreateCustomer, Customer};
use crate::models::order::{NewOrder, Order, OrderWithDetails};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tracking_id, customer_id, fabric_id, garment_id, customizations, \
                       measurements, price, status, urgent, special_instructions, \
                       estimated_completion, created_at, updated_at";

/// Joined columns for [`OrderWithDetails`].
const DETAIL_COLUMNS: &str = "o.id, o.tracking_id, \
     o.customer_id, c.name AS customer_name, c.phone AS customer_phone, \
     o.fabric_id, f.name AS fabric_name, f.price_per_meter AS fabric_price_per_meter, \
     o.garment_id, g.name AS garment_name, g.base_price AS garment_base_price, \
     o.customizations, o.measurements, o.price, o.status, o.urgent, \
     o.special_instructions, o.estimated_completion, o.created_at";

const DETAIL_JOINS: &str = "FROM orders o \
     JOIN customers c ON c.id = o.customer_id \
     JOIN fabrics f ON f.id = o.fabric_id \
     JOIN garments g ON g.id = o.garment_id";

/// Why an order placement was rejected.
///
/// Database-level failures are kept separate from the stock guard so the API
/// layer can map them to different responses.
#[derive(Debug, thiserror::Error)]
pub enum PlaceOrderError {
    /// The fabric no longer exists or has been deactivated.
    #[error("Fabric {0} is not available")]
    FabricUnavailable(DbId),

    /// The fabric does not hold enough meters for this order. The whole
    /// transaction is rolled back; stock is never driven negative.
    #[error("Insufficient stock: {available} m available, {required} m required")]
    InsufficientStock { available: i64, required: i64 },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Provides order queries and the placement transaction.
pub struct OrderRepo;

impl OrderRepo {
    /// Place an order: insert the customer, insert the order, and deduct
    /// fabric stock, all inside a single transaction.
    ///
    /// The fabric row is locked (`FOR UPDATE`) before the stock check so two
    /// concurrent placements cannot both pass the guard. Any failure rolls
    /// the whole sequence back; there are no partial records to clean up.
    pub async fn place(
        pool: &PgPool,
        customer: &CreateCustomer,
        order: &NewOrder,
    ) -> Result<(Customer, Order), PlaceOrderError> {
        let mut tx = pool.begin().await?;

        // Lock the fabric row and check availability before writing anything.
        let stock: Option<i64> = sqlx::query_scalar(
            "SELECT stock_meters FROM fabrics WHERE id = $1 AND is_active FOR UPDATE",
        )
        .bind(order.fabric_id)
        .fetch_optional(&mut *tx)
        .await?;

        let available = match stock {
            Some(meters) => meters,
            None => return Err(PlaceOrderError::FabricUnavailable(order.fabric_id)),
        };
        if available < order.fabric_meters {
            return Err(PlaceOrderError::InsufficientStock {
                available,
                required: order.fabric_meters,
            });
        }

        let customer_query = "INSERT INTO customers (name, phone, email, measurements)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, phone, email, measurements, created_at, updated_at";
        let created_customer = sqlx::query_as::<_, Customer>(customer_query)
            .bind(&customer.name)
            .bind(&customer.phone)
            .bind(&customer.email)
            .bind(&order.measurements)
            .fetch_one(&mut *tx)
            .await?;

        let order_query = format!(
            "INSERT INTO orders (tracking_id, customer_id, fabric_id, garment_id, \
                                 customizations, measurements, price, status, urgent, \
                                 special_instructions, estimated_completion)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        let created_order = sqlx::query_as::<_, Order>(&order_query)
            .bind(&order.tracking_id)
            .bind(created_customer.id)
            .bind(order.fabric_id)
            .bind(order.garment_id)
            .bind(&order.customizations)
            .bind(&order.measurements)
            .bind(order.price)
            .bind(OrderStatus::default().as_str())
            .bind(order.urgent)
            .bind(&order.special_instructions)
            .bind(order.estimated_completion)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("UPDATE fabrics SET stock_meters = stock_meters - $2, updated_at = NOW() WHERE id = $1")
            .bind(order.fabric_id)
            .bind(order.fabric_meters)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok((created_customer, created_order))
    }

    /// List all orders with customer/fabric/garment details, newest first
    /// (admin screen).
    pub async fn list_with_details(pool: &PgPool) -> Result<Vec<OrderWithDetails>, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} {DETAIL_JOINS} ORDER BY o.created_at DESC");
        sqlx::query_as::<_, OrderWithDetails>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find an order by its customer-facing tracking ID.
    pub async fn find_by_tracking_id(
        pool: &PgPool,
        tracking_id: &str,
    ) -> Result<Option<OrderWithDetails>, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} {DETAIL_JOINS} WHERE o.tracking_id = $1");
        sqlx::query_as::<_, OrderWithDetails>(&query)
            .bind(tracking_id)
            .fetch_optional(pool)
            .await
    }

    /// Find an order by its internal id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = $1");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Set an order's status (admin action). Any of the eight lifecycle
    /// states may be assigned; last write wins across concurrent admins.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: OrderStatus,
    ) -> Result<Option<Order>, sqlx::Error> {
        let query = format!(
            "UPDATE orders SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }
}
