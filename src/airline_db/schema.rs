//! Table definitions, created on startup when absent

use deadpool_postgres::Pool;

use crate::airline_db::error::Result;

/// DDL for both tables. `booking_details.flight_id` is not a
/// foreign key; existence is checked by the booking operation.
pub const CREATE_TABLES_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS flight_schedule (
    flight_id         VARCHAR(50) PRIMARY KEY,
    departure_airport VARCHAR(100) NOT NULL,
    arrival_airport   VARCHAR(100) NOT NULL,
    departure_date    DATE NOT NULL,
    departure_time    VARCHAR(20) NOT NULL,
    price             DOUBLE PRECISION NOT NULL
);

CREATE TABLE IF NOT EXISTS booking_details (
    booking_id      VARCHAR(50) PRIMARY KEY,
    flight_id       VARCHAR(50) NOT NULL,
    passenger_name  VARCHAR(100) NOT NULL,
    passport_number VARCHAR(50) NOT NULL,
    booking_date    VARCHAR(20) NOT NULL
);
"#;

/// Create both tables if they do not exist yet
pub async fn ensure_schema(pool: &Pool) -> Result<()> {
    let conn = pool.get().await?;
    conn.batch_execute(CREATE_TABLES_SQL).await?;
    tracing::info!("airline schema ready");
    Ok(())
}
