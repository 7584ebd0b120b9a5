use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::EntryStore;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rWorkLog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    // opening the store runs the pending migrations
    let store = EntryStore::open(&db_path)?;

    println!("✅ Database initialized at {}", &db_path);
    println!("📊 Entries stored: {}", store.count()?);

    // internal log is best effort
    if let Err(e) = log::ttlog(
        store.conn(),
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    println!("🎉 rWorkLog initialization completed!");
    Ok(())
}
