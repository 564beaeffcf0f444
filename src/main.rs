use anyhow::{Context, Result};
use inkpost::{Config, PostStore, generate_site};

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    // Seeds only when no store file exists; a load failure falls back to
    // an empty store without writing anything back
    let store = PostStore::load_or_seed(&config.store);

    let pages = generate_site(&config.output, &config.blog_title(), &store)
        .context("Failed to generate site")?;

    println!(
        "Generated {} pages for {} posts in {}",
        pages,
        store.len(),
        config.output.display()
    );

    if config.open {
        let index = config.output.join("index.html");
        if let Err(e) = open::that(&index) {
            eprintln!("Warning: Failed to open {}: {}", index.display(), e);
        }
    }

    Ok(())
}
