//! Durable post storage.
//!
//! Posts are held in an explicitly owned collection and persisted as a
//! JSON file. Load and save are the only storage boundary calls; nothing
//! in the rendering pipeline touches storage state.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::util::{current_date, slugify};

/// A single blog post.
///
/// `content` is the raw markdown string fed to the renderer; `date` is an
/// ISO-style date string formatted for display at the page layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub date: String,
}

impl Post {
    /// Creates a post with a slug derived from the title.
    pub fn new(id: u64, title: impl Into<String>, content: impl Into<String>, date: impl Into<String>) -> Self {
        let title = title.into();
        let slug = slugify(&title);
        Self {
            id,
            slug,
            title,
            content: content.into(),
            date: date.into(),
        }
    }
}

/// Owned collection of posts with JSON-file persistence.
#[derive(Debug, Default, Clone)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads posts from a JSON file.
    ///
    /// A missing file is not an error and loads as an empty store, so a
    /// first run starts from nothing.
    ///
    /// # Arguments
    ///
    /// * `path`: Path to the store file
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::new());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read post store: {}", path.display()))?;
        let posts: Vec<Post> = serde_json::from_str(&raw)
            .with_context(|| format!("Post store is not valid JSON: {}", path.display()))?;

        Ok(Self { posts })
    }

    /// Loads the store for site generation, seeding on first run.
    ///
    /// A missing file seeds the welcome post and persists it. An existing
    /// file that fails to load is reported and generation proceeds from
    /// an empty store, but the file on disk is left untouched: a parse
    /// failure (say, a trailing comma from hand-editing) must never cost
    /// the user their posts.
    pub fn load_or_seed(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            let mut store = Self::new();
            store.seed_welcome_post();
            if let Err(e) = store.save(path) {
                eprintln!("Warning: Failed to save post store: {e:#}");
            }
            return store;
        }

        match Self::load(path) {
            Ok(store) => store,
            Err(e) => {
                eprintln!("Warning: Failed to load post store: {e:#}");
                Self::new()
            }
        }
    }

    /// Saves all posts to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or the write fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let raw = serde_json::to_string_pretty(&self.posts).context("Failed to serialize posts")?;
        fs::write(path, raw)
            .with_context(|| format!("Failed to write post store: {}", path.display()))?;
        Ok(())
    }

    /// Returns all posts in stored order.
    pub fn list(&self) -> &[Post] {
        &self.posts
    }

    /// Finds a post by its slug.
    pub fn find_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.slug == slug)
    }

    /// Appends a post.
    pub fn add(&mut self, post: Post) {
        self.posts.push(post);
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Seeds the store with a welcome post demonstrating the markup set.
    ///
    /// Used on first run so the generated site is never empty.
    pub fn seed_welcome_post(&mut self) {
        let content = "\
# Welcome to Your Blog

This is a sample post showing what the renderer understands.

## Formatting

- **Bold** for emphasis
- *Italic* for asides
- `inline code` for identifiers
- [Links](https://example.com) open in a new tab

> Blockquotes work too, one line at a time.

### Code

```
fn main() {
    println!(\"hello, blog\");
}
```

Edit `posts.json` to replace this post with your own writing.";

        self.add(Post::new(1, "Welcome to Your Blog", content, current_date()));
    }
}
