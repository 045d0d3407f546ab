//! Command-line flow shared by the binary and the tests.

use crate::config::store::find_recipe;
use crate::config::CliConfig;
use crate::core::builder::{BuildOutput, GitignoreBuilder};
use crate::domain::ports::TextSource;
use crate::utils::error::Result;
use crate::utils::io::write_text_to_file;
use std::io::Write;
use std::path::Path;

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// `--files`: the data-file paths were printed.
    ShowedFiles,
    Built(BuildOutput),
}

/// Runs the CLI against `source`, writing stdout-bound text to `out`.
///
/// Recipes are loaded once; an unknown recipe is rejected before any
/// template is loaded or URL fetched.
pub async fn run<S, W>(config: &CliConfig, source: S, out: &mut W) -> Result<RunOutcome>
where
    S: TextSource,
    W: Write,
{
    let store = config.store();

    if config.files {
        writeln!(out, "recipes file: {}", store.paths().recipes_file().display())?;
        writeln!(out, "templates file: {}", store.paths().templates_file().display())?;
        return Ok(RunOutcome::ShowedFiles);
    }

    // clap requires RECIPE unless --files is given
    let name = config.recipe.as_deref().unwrap_or_default();
    let recipes = store.load_recipes()?;
    let recipe = find_recipe(&recipes, name)?;

    eprintln!("Building .gitignore contents using recipe: '{}' ...", name);
    let templates = store.load_templates()?;
    let urls = recipe.urls(&templates);
    tracing::info!("Recipe '{}' resolved to {} URLs", name, urls.len());
    let output = GitignoreBuilder::new(source).build(&urls).await;
    eprintln!("...done!");

    if !output.skipped.is_empty() {
        eprintln!(
            "⚠️  {} of {} URLs could not be fetched and were left out",
            output.skipped.len(),
            output.skipped.len() + output.fetched
        );
    }

    eprintln!("Writing the result to: '{}' ...", config.output);
    if config.writes_to_stdout() {
        out.write_all(output.contents.as_bytes())?;
        out.flush()?;
    } else {
        write_text_to_file(&output.contents, Path::new(&config.output))?;
    }
    eprintln!("...all done!");

    Ok(RunOutcome::Built(output))
}
