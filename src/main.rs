use clap::Parser;
use schema_book::{DbConfig, DbConn, OutputDir, book, group, logging, meta};

/// A tool for generating a GitBook-style schema reference for a MySQL
/// database: a table of contents, a navigation manifest, and one detail page
/// per logical table with its columns and `CREATE TABLE` statement.
#[derive(Parser, Debug)]
#[command(name = "schema-book", disable_help_flag = true)]
struct Args {
    /// The MySQL server host, with an optional port (e.g. `127.0.0.1:3306`).
    #[arg(short = 'h', long, default_value = "", env = "SCHEMA_BOOK_HOST")]
    host: String,

    /// The user to authenticate as.
    #[arg(short = 'u', long, default_value = "", env = "SCHEMA_BOOK_USER")]
    user: String,

    /// The password to authenticate with.
    #[arg(short = 'p', long, default_value = "", env = "SCHEMA_BOOK_PASSWORD")]
    password: String,

    /// The database whose schema will be documented.
    #[arg(long = "db", default_value = "", env = "SCHEMA_BOOK_DB")]
    database: String,

    /// Collapse tables that differ only by a trailing numeric shard suffix
    /// (e.g. `orders_2023`, `events7`) into a single documented table. Pass
    /// `--filter false` to document every physical table separately.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    filter: bool,

    /// The base output directory. Pages are written to `<out>/<db>/`, which is
    /// destroyed and recreated on every run.
    #[arg(long, short, default_value = "./data")]
    out: String,

    /// Print help.
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    logging::init();
    let args = Args::parse();
    let Args {
        host,
        user,
        password,
        database,
        filter,
        out,
        help: _,
    } = args;

    let config = DbConfig {
        host,
        user,
        password,
        database,
    };

    // The output directory is wiped before the first query runs, so a failed
    // run never leaves last run's pages behind as if they were current.
    let out_dir = OutputDir::reset(&out, &config.database)?;
    tracing::info!(path = %out_dir.path().display(), "output directory ready");

    let mut conn = DbConn::connect(&config).await?;

    let tables = meta::list_tables(&mut *conn).await?;
    tracing::info!(tables = tables.len(), "enumerated tables");

    let mut groups = group::group_tables(&tables, filter);
    for group in groups.values_mut() {
        group.comment = meta::fetch_status(&mut *conn, &group.real_name).await?;
        group.columns = meta::fetch_columns(&mut *conn, &group.real_name).await?;
        group.create_sql = meta::fetch_create_statement(&mut *conn, &group.real_name).await?;
    }

    let pages = book::render(&groups);
    for page in &pages {
        out_dir.write(&page.filename, &page.content)?;
    }
    tracing::info!(groups = groups.len(), pages = pages.len(), "book written");

    Ok(())
}
