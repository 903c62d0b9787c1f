use crate::config::{self, Config};
use anyhow::{Context, Result};
use serde_json::Value;

pub fn list(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("# {}", config::config_path()?.display());
    println!("{}", toml_str);
    Ok(())
}

/// Resolve a dotted key such as "display.upper" to its value.
pub fn lookup(config: &Config, key: &str) -> Result<Value> {
    let root = serde_json::to_value(config).context("Failed to serialize config")?;

    key.split('.').try_fold(root, |node, part| match node {
        Value::Object(mut table) => table.remove(part).with_context(|| {
            let known: Vec<&String> = table.keys().collect();
            format!("Unknown config key '{}' (expected one of {:?})", key, known)
        }),
        _ => anyhow::bail!("Config key '{}' goes past a value at '{}'", key, part),
    })
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    match lookup(config, key)? {
        Value::String(s) => println!("{}", s),
        Value::Object(_) => anyhow::bail!("'{}' is a section, use 'tomato config list'", key),
        v => println!("{}", v),
    }
    Ok(())
}

/// Write a default config file unless one already exists.
pub fn init(force: bool) -> Result<()> {
    let path = config::config_path()?;
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}. Use --force to overwrite",
            path.display()
        );
    }

    config::save_to_path(&Config::default(), &path)?;
    println!("✓ Wrote {}", path.display());
    Ok(())
}
