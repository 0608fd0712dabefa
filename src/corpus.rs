//! Reading a link graph out of a directory of HTML pages.

use crate::{LinkGraph, Result};
use regex::Regex;
use std::{collections::BTreeSet, fs, path::Path};
use tracing::{debug, warn};

const ANCHOR: &str = r#"<a\s+(?:[^>]*?)href="([^"]*)""#;

/// Pulls `href` targets out of `<a>` tags.
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    anchor: Regex,
}

impl LinkExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            anchor: Regex::new(ANCHOR)?,
        })
    }

    pub fn extract(&self, html: &str) -> BTreeSet<String> {
        self.anchor
            .captures_iter(html)
            .filter_map(|cap| cap.get(1))
            .map(|m| m.as_str().to_owned())
            .collect()
    }
}

/// Builds the link graph of every `.html` file directly inside `dir`.
///
/// Page ids are file names. Links to files outside the directory, and a
/// page's links to itself, do not make it into the graph.
pub fn crawl(dir: impl AsRef<Path>) -> Result<LinkGraph> {
    let dir = dir.as_ref();
    let extractor = LinkExtractor::new()?;
    let mut pages = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            warn!(name = ?entry.file_name(), "skipping file with non UTF-8 name");
            continue;
        };
        if !name.ends_with(".html") {
            continue;
        }
        let contents = fs::read_to_string(entry.path())?;
        let mut links = extractor.extract(&contents);
        links.remove(name);
        pages.push((name.to_owned(), links));
    }
    let graph = LinkGraph::new(pages);
    debug!(
        dir = %dir.display(),
        pages = graph.len(),
        links = graph.link_count(),
        "crawled corpus"
    );
    Ok(graph)
}
