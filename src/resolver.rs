use derive_more::derive::Display;

pub const DEFAULT_NESTED_DIR: &str = "articles";

/// Which content subtree and renderer apply to a page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum PageKey {
    #[display("index")]
    Index,
    #[display("about")]
    About,
    #[display("howto")]
    Howto,
    #[display("{_0}")]
    Article(String),
}

impl PageKey {
    /// Relative prefix from the page back to the site root; only nested pages need one.
    pub fn base_path(&self) -> &'static str {
        match self {
            PageKey::Article(_) => "../",
            _ => "",
        }
    }
}

/// Where a page lives: its key plus the relative prefix that leads back to the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    pub path: String,
    pub key: PageKey,
    pub base: &'static str,
}

impl PageLocation {
    pub fn resolve(path: &str, nested_dir: &str) -> Self {
        Self {
            path: path.to_string(),
            key: resolve_page_key(path, nested_dir),
            base: base_path(path, nested_dir),
        }
    }

    /// Site-relative path of one of the shared data documents, as seen from this page.
    pub fn document_path(&self, name: &str) -> String {
        document_path(&self.path, self.base, name)
    }
}

fn is_nested(path: &str, nested_dir: &str) -> bool {
    path.contains(&format!("/{}/", nested_dir)) || path.contains(&format!("\\{}\\", nested_dir))
}

// last path segment without its extension
fn page_name(path: &str) -> &str {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    file_name.strip_suffix(".html").unwrap_or(file_name)
}

pub fn resolve_page_key(path: &str, nested_dir: &str) -> PageKey {
    // nested pages are addressed by their own file name
    if is_nested(path, nested_dir) {
        return PageKey::Article(page_name(path).to_string());
    }

    if path.contains("about") {
        PageKey::About
    } else if path.contains("howto") {
        PageKey::Howto
    } else {
        PageKey::Index
    }
}

pub fn base_path(path: &str, nested_dir: &str) -> &'static str {
    if is_nested(path, nested_dir) {
        "../"
    } else {
        ""
    }
}

// joins `{base}data/{name}.json` onto the directory of `page_path` and folds `.` / `..`
pub fn document_path(page_path: &str, base: &str, name: &str) -> String {
    let normalized = page_path.replace('\\', "/");
    let directory = match normalized.rfind('/') {
        Some(index) => &normalized[..index],
        None => "",
    };

    let joined = format!("{}/{}data/{}.json", directory, base, name);
    normalize_path_string(&joined)
}

pub fn normalize_path_string(path: &str) -> String {
    let mut components: Vec<&str> = Vec::new();

    for component in path.split(['/', '\\']) {
        match component {
            "" | "." => {}
            ".." => {
                components.pop();
            }
            other => components.push(other),
        }
    }

    components.join("/")
}
