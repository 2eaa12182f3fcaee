//! Articles from markdown files in a content directory.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::frontmatter::{parse_meta, split_front_matter};
use super::{Article, ArticleContent, ArticleSource, LoadError, Slug};

const EXTENSION: &str = "md";

/// Content tree where `guides/install.md` is the article `guides/install`.
pub struct LocalArticles {
    root: PathBuf,
}

impl LocalArticles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns file backing a slug.
    pub fn file_path(&self, slug: &Slug) -> PathBuf {
        let mut path = self.root.clone();
        if let Some((last, dirs)) = slug.segments().split_last() {
            path.extend(dirs);
            path.push(format!("{}.{}", last, EXTENSION));
        }
        path
    }

    fn collect(&self, dir: &Path, out: &mut Vec<Slug>) -> Result<(), LoadError> {
        let entries = fs::read_dir(dir).map_err(|source| LoadError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| LoadError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })?;

            if file_type.is_dir() {
                self.collect(&path, out)?;
                continue;
            }

            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }

            match self.slug_for(&path) {
                Some(slug) => out.push(slug),
                None => warn!(path = %path.display(), "skipping article with unusable path"),
            }
        }

        Ok(())
    }

    fn slug_for(&self, path: &Path) -> Option<Slug> {
        let relative = path.strip_prefix(&self.root).ok()?.with_extension("");
        let segments = relative
            .components()
            .map(|c| c.as_os_str().to_str())
            .collect::<Option<Vec<_>>>()?;
        Slug::new(segments)
    }
}

impl ArticleSource for LocalArticles {
    fn slugs(&self) -> Result<Vec<Slug>, LoadError> {
        let mut slugs = Vec::new();
        self.collect(&self.root, &mut slugs)?;
        slugs.sort();
        Ok(slugs)
    }

    fn load(&self, slug: &Slug) -> Result<Article, LoadError> {
        let path = self.file_path(slug);

        let text = fs::read_to_string(&path).map_err(|e| {
            debug!(path = %path.display(), error = %e, "cannot read article");
            LoadError::NotFound(slug.route())
        })?;

        let (front_matter, body) = split_front_matter(&text);
        let meta = parse_meta(front_matter.unwrap_or_default()).map_err(|e| {
            warn!(path = %path.display(), error = %e, "invalid front matter");
            LoadError::NotFound(slug.route())
        })?;

        Ok(Article {
            slug: slug.clone(),
            meta,
            content: ArticleContent::Markdown(body.to_string()),
        })
    }
}
