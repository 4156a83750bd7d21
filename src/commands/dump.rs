//! Dump parsed data as JSON

use anyhow::{Context, Result};
use std::path::Path;

use crate::Wxr2Md;

/// JSON dump of the whole export, or of the single post with `slug`
pub fn run(app: &Wxr2Md, input: &Path, slug: Option<&str>) -> Result<String> {
    let posts = app.load(input)?;

    let json = match slug {
        Some(slug) => posts
            .get(slug)
            .with_context(|| format!("No post with slug {:?}", slug))?
            .to_json()?,
        None => posts.to_json()?,
    };

    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wxr::SAMPLE;

    fn app_with_sample() -> (tempfile::TempDir, Wxr2Md) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("blog.xml"), SAMPLE).unwrap();
        let app = Wxr2Md::new(dir.path()).unwrap();
        (dir, app)
    }

    #[test]
    fn test_dump_everything() {
        let (_dir, app) = app_with_sample();
        let json = run(&app, Path::new("blog.xml"), None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "Field Notes");
        assert_eq!(value["posts"][3]["name"], "about");
    }

    #[test]
    fn test_dump_one_post() {
        let (_dir, app) = app_with_sample();
        let json = run(&app, Path::new("blog.xml"), Some("second-post")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["id"], "15");
        assert_eq!(value["categories"][0]["type"], "category");

        assert!(run(&app, Path::new("blog.xml"), Some("missing")).is_err());
    }
}
