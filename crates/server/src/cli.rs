use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[clap(name = "exercise tracker")]
pub struct Cli {
    /// Storage connection string, a SQLite file path or `file:` URI
    #[clap(long, env = "MONGO_URI", default_value = "exercise-track.sqlite")]
    pub database_uri: String,
    #[clap(long, env, default_value = "3000")]
    pub port: u16,
    #[clap(long, env, default_value = "0.0.0.0")]
    pub bind_addr: String,
    /// Directory holding the landing page, `index.html`
    #[clap(long, env, default_value = "views")]
    pub views_dir: PathBuf,
    /// Static assets served from the site root
    #[clap(long, env, default_value = "public")]
    pub public_dir: PathBuf,
}
