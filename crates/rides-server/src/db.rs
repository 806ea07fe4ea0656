use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use thiserror::Error;
use tracing::debug;

use rides_core::model::{NewRide, Ride, RidePage};
use rides_core::params::page_offset;

/// A failure reported by the store. Displays the store's own message.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("{}", store_message(.0))]
    Sqlx(#[from] sqlx::Error),
}

/// Database errors are reported with the driver's message alone, without
/// sqlx's "error returned from database" prefix.
fn store_message(e: &sqlx::Error) -> String {
    match e {
        sqlx::Error::Database(db) => db.message().to_string(),
        other => other.to_string(),
    }
}

const RIDE_COLUMNS: &str = "rideID, created, startLat, startLong, endLat, endLong, \
                            riderName, driverName, driverVehicle";

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the pool and make sure the `Rides` table exists.
    ///
    /// Every connection to an in-memory SQLite database sees its own empty
    /// database, so those are pinned to one connection that is never recycled.
    pub async fn new(url: &str, max_connections: u32) -> Result<Self, DbError> {
        let options = if is_in_memory(url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };
        let pool = options.connect(url).await?;
        let db = Self { pool };
        db.run_migrations().await?;
        Ok(db)
    }

    async fn run_migrations(&self) -> Result<(), DbError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS Rides (
                rideID INTEGER PRIMARY KEY AUTOINCREMENT,
                startLat REAL NOT NULL,
                startLong REAL NOT NULL,
                endLat REAL NOT NULL,
                endLong REAL NOT NULL,
                riderName TEXT NOT NULL,
                driverName TEXT NOT NULL,
                driverVehicle TEXT NOT NULL,
                created TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Close the pool. Later calls fail with a store error.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    // -----------------------------------------------------------------------
    // Rides
    // -----------------------------------------------------------------------

    /// Insert a ride and return the id the store assigned to it.
    pub async fn insert_ride(&self, ride: &NewRide) -> Result<i64, DbError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO Rides (startLat, startLong, endLat, endLong, riderName, driverName, driverVehicle)
             VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING rideID",
        )
        .bind(ride.start_lat)
        .bind(ride.start_long)
        .bind(ride.end_lat)
        .bind(ride.end_long)
        .bind(&ride.rider_name)
        .bind(&ride.driver_name)
        .bind(&ride.driver_vehicle)
        .fetch_one(&self.pool)
        .await?;
        debug!(ride_id = id, "inserted ride");
        Ok(id)
    }

    /// Rides with the given id: empty when there is none.
    pub async fn find_rides_by_id(&self, id: i64) -> Result<Vec<Ride>, DbError> {
        let rows = sqlx::query(&format!(
            "SELECT {RIDE_COLUMNS} FROM Rides WHERE rideID = ?"
        ))
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_ride).collect()
    }

    /// One page of rides in insertion order plus the total row count.
    /// Pages are 1-indexed; `page <= 0` (or NaN) returns every row.
    pub async fn list_rides(&self, page: f64, page_size: i64) -> Result<RidePage, DbError> {
        let rows = if let Some(offset) = page_offset(page, page_size) {
            sqlx::query(&format!(
                "SELECT {RIDE_COLUMNS} FROM Rides ORDER BY rideID LIMIT ? OFFSET ?"
            ))
            .bind(page_size)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query(&format!("SELECT {RIDE_COLUMNS} FROM Rides ORDER BY rideID"))
                .fetch_all(&self.pool)
                .await?
        };

        Ok(RidePage {
            rows: rows.iter().map(row_to_ride).collect::<Result<_, _>>()?,
            total_count: self.count_rides().await?,
        })
    }

    pub async fn count_rides(&self) -> Result<i64, DbError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT count(*) FROM Rides")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

fn row_to_ride(row: &SqliteRow) -> Result<Ride, DbError> {
    Ok(Ride {
        ride_id: row.try_get("rideID")?,
        created: row.try_get("created")?,
        start_lat: row.try_get("startLat")?,
        start_long: row.try_get("startLong")?,
        end_lat: row.try_get("endLat")?,
        end_long: row.try_get("endLong")?,
        rider_name: row.try_get("riderName")?,
        driver_name: row.try_get("driverName")?,
        driver_vehicle: row.try_get("driverVehicle")?,
    })
}
