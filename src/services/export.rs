use crate::domain::ArticlesDocument;
use crate::services::assembly::{fetch_document, Interactions, PageAssembler};
use crate::store::DocumentKind;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const TOP_LEVEL_PAGES: [&str; 3] = ["index.html", "about.html", "howto.html"];

/// Site-relative paths of every page known to the content: the fixed top-level pages plus
/// one page per article id in `articles.json`.
pub async fn site_pages(assembler: &PageAssembler) -> Vec<String> {
    let mut pages: Vec<String> = TOP_LEVEL_PAGES.iter().map(|p| p.to_string()).collect();

    let location = assembler.locate("/index.html");
    if let Some(articles) =
        fetch_document(assembler.store(), &location, DocumentKind::Articles).await
    {
        let nested_dir = assembler.nested_dir();
        pages.extend(
            ArticlesDocument(articles)
                .article_ids()
                .into_iter()
                .map(|id| format!("{}/{}.html", nested_dir, id)),
        );
    }

    pages
}

/// Renders every known page into `out_dir`, mirroring the site layout.
pub async fn export_site(assembler: &PageAssembler, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for page in site_pages(assembler).await {
        let assembled = assembler
            .assemble(&format!("/{}", page), &Interactions::default())
            .await;

        let target = out_dir.join(&page);
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        tokio::fs::write(&target, assembled.html())
            .await
            .with_context(|| format!("Failed to write {}", target.display()))?;

        tracing::info!("Exported {} as '{}'", target.display(), assembled.key);
        written.push(target);
    }

    Ok(written)
}
