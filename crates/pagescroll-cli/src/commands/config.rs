use std::path::Path;

use anyhow::Result;

use pagescroll_core::WidgetConfig;

pub fn run(config: &WidgetConfig, path: &Path, write: bool) -> Result<()> {
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(config)?);

    if write {
        config.save_to(path)?;
        println!("Saved configuration to {}", path.display());
    }

    Ok(())
}
