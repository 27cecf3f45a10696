use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use tracing::{info, warn};

const CREATE_TABLES: [&str; 4] = [
    r#"
    CREATE TABLE IF NOT EXISTS employee (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        name            VARCHAR(100) NOT NULL,
        designation     VARCHAR(100) NOT NULL,
        date_of_joining DATE NOT NULL,
        department      VARCHAR(100) NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS attendance (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        employee_id INTEGER NOT NULL REFERENCES employee(id) ON DELETE RESTRICT,
        date        DATE NOT NULL,
        status      VARCHAR(10) NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_employee_department ON employee(department)",
    "CREATE INDEX IF NOT EXISTS idx_attendance_employee ON attendance(employee_id)",
];

// children first, the foreign key would block the other order
const DROP_TABLES: [&str; 2] = ["DROP TABLE IF EXISTS attendance", "DROP TABLE IF EXISTS employee"];

pub async fn init_db(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    // every connection to `:memory:` opens a fresh database, so pin a single one
    let pool = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new().connect_with(options).await?
    };

    Ok(pool)
}

/// Creates missing tables and indexes. Existing rows are left alone.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for statement in CREATE_TABLES {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    info!("Schema ready");
    Ok(())
}

/// Drops both tables and recreates them empty.
pub async fn reset_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    warn!("Resetting schema, all employees and attendance records will be deleted");

    let mut tx = pool.begin().await?;
    for statement in DROP_TABLES {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    ensure_schema(pool).await
}
