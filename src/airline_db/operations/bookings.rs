use deadpool_postgres::Pool;
use tokio_postgres::Row;
use uuid::Uuid;

use crate::airline_db::{
    error::{Error, Result},
    operations::flights::get_flight_in_transaction,
    types::{BookingRecord, BookingResult, FlightRecord},
};

/// Length of generated booking references
pub const BOOKING_ID_LEN: usize = 8;

/// Generate a short booking reference (leading hex digits of a v4 UUID)
pub fn generate_booking_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(BOOKING_ID_LEN);
    id
}

/// Current local time in the stored `booking_date` format
pub fn booking_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Book a seat on a scheduled flight
///
/// # Behavior
///
/// 1. **Existence check**: The flight is looked up inside the same
///    transaction as the insert. A missing flight yields a failed
///    `BookingResult` and nothing is written.
/// 2. **Atomic**: The booking row is committed only after the insert succeeds.
///    Any error after `BEGIN` rolls the transaction back before returning.
/// 3. **Snapshot**: A confirmed result embeds the flight row as read in the
///    transaction.
///
/// # Errors
///
/// * `Error::PoolError` - If no connection can be checked out
/// * `Error::DatabaseError` / `Error::TransactionError` - For SQL or transaction failures
pub async fn create_booking(
    pool: &Pool,
    flight_id: &str,
    passenger_name: &str,
    passport_number: &str,
) -> Result<BookingResult> {
    let mut conn = pool.get().await?;
    let txn = conn
        .transaction()
        .await
        .map_err(|e| Error::TransactionError(format!("Failed to begin transaction: {}", e)))?;

    let booking = BookingRecord {
        booking_id: generate_booking_id(),
        flight_id: flight_id.to_string(),
        passenger_name: passenger_name.to_string(),
        passport_number: passport_number.to_string(),
        booking_date: booking_timestamp(),
    };

    match insert_if_flight_exists(&txn, &booking).await {
        Ok(Some(flight)) => {
            txn.commit()
                .await
                .map_err(|e| Error::TransactionError(format!("Failed to commit: {}", e)))?;
            tracing::info!(
                booking_id = %booking.booking_id,
                flight_id = %booking.flight_id,
                "booking saved"
            );
            Ok(BookingResult::confirmed(booking.booking_id, flight))
        }
        Ok(None) => {
            txn.rollback()
                .await
                .map_err(|e| Error::TransactionError(format!("Failed to roll back: {}", e)))?;
            tracing::info!(flight_id = %flight_id, "booking rejected, flight not in schedule");
            Ok(BookingResult::flight_not_found(flight_id))
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::warn!(error = %rollback_err, "rollback after failed booking also failed");
            }
            Err(e)
        }
    }
}

async fn insert_if_flight_exists(
    txn: &deadpool_postgres::Transaction<'_>,
    booking: &BookingRecord,
) -> Result<Option<FlightRecord>> {
    let Some(flight) = get_flight_in_transaction(txn, &booking.flight_id).await? else {
        return Ok(None);
    };

    txn.execute(
        "INSERT INTO booking_details \
             (booking_id, flight_id, passenger_name, passport_number, booking_date) \
         VALUES ($1, $2, $3, $4, $5)",
        &[
            &booking.booking_id,
            &booking.flight_id,
            &booking.passenger_name,
            &booking.passport_number,
            &booking.booking_date,
        ],
    )
    .await?;

    Ok(Some(flight))
}

/// Fetch one booking by reference
pub async fn get_booking(pool: &Pool, booking_id: &str) -> Result<Option<BookingRecord>> {
    let conn = pool.get().await?;
    conn.query_opt(
        "SELECT booking_id, flight_id, passenger_name, passport_number, booking_date \
         FROM booking_details WHERE booking_id = $1",
        &[&booking_id],
    )
    .await?
    .as_ref()
    .map(booking_from_row)
    .transpose()
}

/// All bookings recorded against a flight ID, oldest first
pub async fn bookings_for_flight(pool: &Pool, flight_id: &str) -> Result<Vec<BookingRecord>> {
    let conn = pool.get().await?;
    let rows = conn
        .query(
            "SELECT booking_id, flight_id, passenger_name, passport_number, booking_date \
             FROM booking_details WHERE flight_id = $1 \
             ORDER BY booking_date, booking_id",
            &[&flight_id],
        )
        .await?;

    rows.iter().map(booking_from_row).collect()
}

fn booking_from_row(row: &Row) -> Result<BookingRecord> {
    let decode = |e: tokio_postgres::Error| {
        Error::DatabaseError(format!("Failed to decode booking_details row: {}", e))
    };

    Ok(BookingRecord {
        booking_id: row.try_get("booking_id").map_err(decode)?,
        flight_id: row.try_get("flight_id").map_err(decode)?,
        passenger_name: row.try_get("passenger_name").map_err(decode)?,
        passport_number: row.try_get("passport_number").map_err(decode)?,
        booking_date: row.try_get("booking_date").map_err(decode)?,
    })
}
