use async_trait::async_trait;

/// Source of template text addressed by URL.
///
/// Implementations never fail the caller: any fetch problem is logged and
/// reported as `None` so one dead link does not abort a build.
#[async_trait]
pub trait TextSource: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Option<String>;
}
