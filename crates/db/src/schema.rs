use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Needed for `boat_id WITH =` inside a GiST exclusion constraint
    sqlx::query("CREATE EXTENSION IF NOT EXISTS btree_gist;")
        .execute(pool)
        .await?;

    // Create boats table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS boats (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            location VARCHAR(255) NULL,
            capacity INTEGER NOT NULL CHECK (capacity > 0),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create bookings table. Dates and times are stored naive, exactly as
    // booked; the exclusion constraint uses half-open ranges so back-to-back
    // rentals are accepted.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            boat_id UUID NOT NULL REFERENCES boats(id),
            customer_name VARCHAR(255) NOT NULL,
            start_date DATE NOT NULL,
            start_time TIME NOT NULL,
            end_date DATE NOT NULL,
            end_time TIME NOT NULL,
            status VARCHAR(16) NOT NULL DEFAULT 'pending'
                CHECK (status IN ('pending', 'confirmed', 'cancelled', 'completed', 'refunded')),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_booking_range
                CHECK ((end_date + end_time) > (start_date + start_time)),
            CONSTRAINT no_overlapping_bookings EXCLUDE USING gist (
                boat_id WITH =,
                tsrange(start_date + start_time, end_date + end_time, '[)') WITH &&
            ) WHERE (status NOT IN ('cancelled', 'refunded'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_bookings_boat_id ON bookings(boat_id);",
        "CREATE INDEX IF NOT EXISTS idx_bookings_start_date ON bookings(start_date);",
        "CREATE INDEX IF NOT EXISTS idx_bookings_end_date ON bookings(end_date);",
        "CREATE INDEX IF NOT EXISTS idx_bookings_status ON bookings(status);",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
