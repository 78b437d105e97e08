use chrono::NaiveDate;
use deadpool_postgres::Pool;
use tokio_postgres::Row;

use crate::airline_db::{
    error::{Error, Result},
    types::FlightRecord,
};

const FLIGHT_COLUMNS: &str =
    "flight_id, departure_airport, arrival_airport, departure_date, departure_time, price";

/// Parse a `YYYY-MM-DD` date as sent by the model
pub fn parse_flight_date(date: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")?)
}

/// Find scheduled flights between two airports on one date
///
/// Airport codes match case-insensitively but otherwise exactly (no
/// wildcard semantics). Results are ordered by departure time.
///
/// # Errors
///
/// * `Error::ValidationError` - If `date` is not `YYYY-MM-DD`
/// * `Error::PoolError` / `Error::DatabaseError` - For connection or SQL errors
pub async fn find_flights(
    pool: &Pool,
    departure_airport: &str,
    arrival_airport: &str,
    date: &str,
) -> Result<Vec<FlightRecord>> {
    let date = parse_flight_date(date)?;
    let conn = pool.get().await?;

    let sql = format!(
        "SELECT {} FROM flight_schedule \
         WHERE LOWER(departure_airport) = LOWER($1) \
           AND LOWER(arrival_airport) = LOWER($2) \
           AND departure_date = $3 \
         ORDER BY departure_time, flight_id",
        FLIGHT_COLUMNS
    );

    let rows = conn
        .query(&sql, &[&departure_airport, &arrival_airport, &date])
        .await?;

    rows.iter().map(flight_from_row).collect()
}

/// Fetch one flight by ID inside an open transaction
pub(crate) async fn get_flight_in_transaction(
    txn: &deadpool_postgres::Transaction<'_>,
    flight_id: &str,
) -> Result<Option<FlightRecord>> {
    let sql = format!("SELECT {} FROM flight_schedule WHERE flight_id = $1", FLIGHT_COLUMNS);

    txn.query_opt(&sql, &[&flight_id])
        .await?
        .as_ref()
        .map(flight_from_row)
        .transpose()
}

/// Insert or replace a schedule row (seed data)
pub async fn upsert_flight(pool: &Pool, flight: &FlightRecord) -> Result<()> {
    let conn = pool.get().await?;
    conn.execute(
        "INSERT INTO flight_schedule \
             (flight_id, departure_airport, arrival_airport, departure_date, departure_time, price) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         ON CONFLICT (flight_id) DO UPDATE SET \
             departure_airport = EXCLUDED.departure_airport, \
             arrival_airport = EXCLUDED.arrival_airport, \
             departure_date = EXCLUDED.departure_date, \
             departure_time = EXCLUDED.departure_time, \
             price = EXCLUDED.price",
        &[
            &flight.flight_id,
            &flight.departure_airport,
            &flight.arrival_airport,
            &flight.departure_date,
            &flight.departure_time,
            &flight.price,
        ],
    )
    .await?;
    Ok(())
}

/// Decode a schedule row
pub(crate) fn flight_from_row(row: &Row) -> Result<FlightRecord> {
    let decode = |e: tokio_postgres::Error| {
        Error::DatabaseError(format!("Failed to decode flight_schedule row: {}", e))
    };

    Ok(FlightRecord {
        flight_id: row.try_get("flight_id").map_err(decode)?,
        departure_airport: row.try_get("departure_airport").map_err(decode)?,
        arrival_airport: row.try_get("arrival_airport").map_err(decode)?,
        departure_date: row.try_get("departure_date").map_err(decode)?,
        departure_time: row.try_get("departure_time").map_err(decode)?,
        price: row.try_get("price").map_err(decode)?,
    })
}
