use crate::Config;
use anyhow::Result;
use std::path::PathBuf;

pub async fn run(path: PathBuf, title: Option<String>) -> Result<()> {
    let site_title = title.unwrap_or_else(|| "My Site".to_string());

    std::fs::create_dir_all(&path)?;
    std::fs::create_dir_all(path.join("data"))?;
    std::fs::create_dir_all(path.join("uploads"))?;

    let config = Config::default_with_title(&site_title);
    std::fs::write(path.join("vitrine.toml"), toml::to_string_pretty(&config)?)?;

    tracing::info!("Created new site at {:?}", path);
    tracing::info!("Run 'vitrine migrate' to set up the database");
    tracing::info!("Run 'vitrine serve' to start the server");

    Ok(())
}
