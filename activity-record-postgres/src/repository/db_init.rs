//! Database initialization and cleanup utilities
//!
//! Applies the SQL files under `migrations/` and `cleanup/` directly, for
//! environments that manage the schema without the sqlx migrator.

use sqlx::PgPool;
use std::fs;
use std::path::Path;

/// Initialize the database by executing migration files in ascending order
///
/// # Example
///
/// ```rust,no_run
/// use sqlx::PgPool;
/// use activity_record_postgres::repository::db_init::init_database;
///
/// # async fn example(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// init_database(pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let migrations_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations");
    execute_sql_files_in_order(pool, &migrations_dir, true).await
}

/// Cleanup the database by executing cleanup files in descending order
///
/// # Example
///
/// ```rust,no_run
/// use sqlx::PgPool;
/// use activity_record_postgres::repository::db_init::cleanup_database;
///
/// # async fn example(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// cleanup_database(pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn cleanup_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let cleanup_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("cleanup");
    execute_sql_files_in_order(pool, &cleanup_dir, false).await
}

/// Sorted `.sql` file names of `dir`, ascending or descending.
fn sql_files_in_order(dir: &Path, ascending: bool) -> Result<Vec<std::path::PathBuf>, sqlx::Error> {
    let mut paths: Vec<_> = fs::read_dir(dir)
        .map_err(sqlx::Error::Io)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("sql"))
        .collect();

    paths.sort();
    if !ascending {
        paths.reverse();
    }
    Ok(paths)
}

async fn execute_sql_files_in_order(
    pool: &PgPool,
    dir: &Path,
    ascending: bool,
) -> Result<(), sqlx::Error> {
    for path in sql_files_in_order(dir, ascending)? {
        tracing::info!(file = %path.display(), "Executing schema file");
        let sql = fs::read_to_string(&path).map_err(sqlx::Error::Io)?;
        sqlx::raw_sql(&sql).execute(pool).await?;
    }

    Ok(())
}
