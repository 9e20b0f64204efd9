//! Database connection setup.

use sqlx::{
    Connection as _,
    mysql::{MySqlConnectOptions, MySqlConnection},
};
use tracing::instrument;

use crate::Error;

const DEFAULT_PORT: u16 = 3306;

/// Connection parameters, taken verbatim from the CLI.
#[derive(Clone)]
pub struct DbConfig {
    /// Server host, with an optional `:port` suffix.
    pub host: String,
    pub user: String,
    pub password: String,
    /// The database whose schema gets documented.
    pub database: String,
}

impl DbConfig {
    fn connect_options(&self) -> MySqlConnectOptions {
        let (host, port) = split_host_port(&self.host);

        let mut options = MySqlConnectOptions::new()
            .host(host)
            .port(port)
            .username(&self.user)
            .database(&self.database);
        if !self.password.is_empty() {
            options = options.password(&self.password);
        }
        options
    }
}

fn split_host_port(host: &str) -> (&str, u16) {
    match host.rsplit_once(':') {
        Some((stripped, port)) => match port.parse() {
            Ok(port) => (stripped, port),
            // Not a port suffix, keep the whole string as the host.
            Err(_) => (host, DEFAULT_PORT),
        },
        None => (host, DEFAULT_PORT),
    }
}

/// A dedicated connection to the documented database.
///
/// The whole run is sequential, so a single connection is opened once and
/// reused for every query. No pool.
#[derive(Debug)]
pub struct DbConn(MySqlConnection);

impl DbConn {
    /// Set up a connection to the documented database.
    #[instrument(skip_all, err)]
    pub async fn connect(config: &DbConfig) -> Result<Self, Error> {
        MySqlConnection::connect_with(&config.connect_options())
            .await
            .map(Self)
            .map_err(Error::ConnectionError)
    }
}

impl std::ops::Deref for DbConn {
    type Target = MySqlConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for DbConn {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_with_port_suffix_is_split() {
        assert_eq!(split_host_port("db.internal:3307"), ("db.internal", 3307));
    }

    #[test]
    fn bare_host_gets_default_port() {
        assert_eq!(split_host_port("localhost"), ("localhost", DEFAULT_PORT));
    }

    #[test]
    fn non_numeric_suffix_is_part_of_the_host() {
        assert_eq!(split_host_port("host:name"), ("host:name", DEFAULT_PORT));
    }
}
