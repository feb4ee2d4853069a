use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use anteroom::api::App;
use anteroom::identity::EnvIdentity;
use anteroom::probe::HttpProbe;
use anteroom::storage::FileStore;

fn main() -> anyhow::Result<()> {
    // Init logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();
    fmt().with_env_filter(filter).init();

    // Startup banner at info level so something always prints at default verbosity
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "<unset>".to_string());
    let db_folder = std::env::var("ANTEROOM_DB_FOLDER").unwrap_or_else(|_| "dbs".to_string());
    let identity_var =
        std::env::var("ANTEROOM_IDENTITY_VAR").unwrap_or_else(|_| "ANTEROOM_IDENTITY".to_string());
    info!(
        target: "anteroom",
        "Anteroom starting: RUST_LOG='{}', db_root='{}', identity_var='{}'",
        rust_log, db_folder, identity_var
    );

    let store = Arc::new(FileStore::open(&db_folder)?);
    let identity = Arc::new(EnvIdentity::new(identity_var));
    let probe = Arc::new(HttpProbe::new()?);
    let app = App::new(store, identity, probe);

    // Emit the visibility report for the page shell as JSON on stdout.
    let report = app.visibility();
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
