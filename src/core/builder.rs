use crate::config::ConfigStore;
use crate::domain::ports::TextSource;
use crate::utils::error::Result;

/// Outcome of assembling `.gitignore` contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOutput {
    pub contents: String,
    /// Number of URLs whose text made it into `contents`.
    pub fetched: usize,
    /// URLs that yielded nothing, in input order.
    pub skipped: Vec<String>,
}

pub struct GitignoreBuilder<S: TextSource> {
    source: S,
}

impl<S: TextSource> GitignoreBuilder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetches every URL in order and concatenates the texts.
    ///
    /// A failed fetch is logged and contributes nothing. Each text is
    /// terminated with a newline so consecutive sources never share a line.
    pub async fn build<U: AsRef<str>>(&self, urls: &[U]) -> BuildOutput {
        let mut output = BuildOutput::default();

        for url in urls {
            let url = url.as_ref();
            match self.source.fetch_text(url).await {
                Some(text) => {
                    output.contents.push_str(&text);
                    if !text.is_empty() && !text.ends_with('\n') {
                        output.contents.push('\n');
                    }
                    output.fetched += 1;
                }
                None => {
                    tracing::warn!("Skipping '{}': no contents retrieved", url);
                    output.skipped.push(url.to_string());
                }
            }
        }

        tracing::debug!(
            "Assembled {} bytes from {} of {} URLs",
            output.contents.len(),
            output.fetched,
            urls.len()
        );
        output
    }

    /// Resolves `recipe` through the store, then builds its URLs.
    pub async fn build_recipe(&self, store: &ConfigStore, recipe: &str) -> Result<BuildOutput> {
        let urls = store.recipe_urls(recipe)?;
        tracing::info!("Recipe '{}' resolved to {} URLs", recipe, urls.len());
        Ok(self.build(&urls).await)
    }
}
