use crate::domain::defaults::{all_recipes, all_templates};
use crate::domain::{Recipe, Recipes, Templates};
use crate::utils::error::{ConfigError, Result};
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "gitignore-builder";

pub const RECIPES_FILENAME: &str = "recipes.json";

pub const TEMPLATES_FILENAME: &str = "templates.json";

/// Locations of the per-user data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    config_dir: PathBuf,
}

impl ConfigPaths {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Platform config directory for this app, e.g. `~/.config/gitignore-builder`.
    ///
    /// Falls back to `./.gitignore-builder` when the platform reports none.
    pub fn user_default() -> Self {
        let config_dir = dirs::config_dir().map_or_else(
            || PathBuf::from(format!(".{}", APP_NAME)),
            |dir| dir.join(APP_NAME),
        );
        Self::new(config_dir)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn recipes_file(&self) -> PathBuf {
        self.config_dir.join(RECIPES_FILENAME)
    }

    pub fn templates_file(&self) -> PathBuf {
        self.config_dir.join(TEMPLATES_FILENAME)
    }
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self::user_default()
    }
}

/// Loads recipes and templates, writing the bundled defaults on first use.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    paths: ConfigPaths,
}

impl ConfigStore {
    pub fn new(paths: ConfigPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    /// Writes the bundled templates to `templates.json`, replacing any existing file.
    pub fn init_templates_file(&self) -> Result<()> {
        let file = self.paths.templates_file();
        tracing::info!("Initializing templates file at: '{}'", file.display());
        all_templates().save(&file)
    }

    /// Writes the bundled recipes to `recipes.json`, replacing any existing file.
    pub fn init_recipes_file(&self) -> Result<()> {
        let file = self.paths.recipes_file();
        tracing::info!("Initializing recipes file at: '{}'", file.display());
        all_recipes().save(&file)
    }

    pub fn load_templates(&self) -> Result<Templates> {
        let file = self.paths.templates_file();

        if !file.exists() {
            self.init_templates_file()?;
        }

        tracing::info!("Loading templates from file: '{}'", file.display());
        let templates = Templates::load(&file)?;

        tracing::info!("...done! (got [ {} ] templates)", templates.len());
        Ok(templates)
    }

    pub fn load_recipes(&self) -> Result<Recipes> {
        let file = self.paths.recipes_file();

        if !file.exists() {
            self.init_recipes_file()?;
        }

        tracing::info!("Loading recipes from file: '{}'", file.display());
        let recipes = Recipes::load(&file)?;

        tracing::info!("...done! (got [ {} ] recipes)", recipes.len());
        Ok(recipes)
    }

    pub fn recipe_names(&self) -> Result<Vec<String>> {
        let recipes = self.load_recipes()?;
        Ok(recipes.names().into_iter().map(str::to_string).collect())
    }

    /// Ordered URL list for the named recipe.
    pub fn recipe_urls(&self, name: &str) -> Result<Vec<String>> {
        let recipes = self.load_recipes()?;
        let recipe = find_recipe(&recipes, name)?;

        let templates = self.load_templates()?;
        Ok(recipe.urls(&templates).into_iter().map(str::to_string).collect())
    }
}

/// Looks up `name`, reporting the valid names when it is absent.
pub fn find_recipe<'a>(recipes: &'a Recipes, name: &str) -> Result<&'a Recipe> {
    recipes.find(name).ok_or_else(|| ConfigError::UnknownRecipe {
        name: name.to_string(),
        available: recipes.names().into_iter().map(str::to_string).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Template;
    use crate::utils::error::ErrorKind;
    use tempfile::TempDir;

    fn store_in(dir: &Path) -> ConfigStore {
        ConfigStore::new(ConfigPaths::new(dir))
    }

    #[test]
    fn test_config_paths() {
        let paths = ConfigPaths::new("/tmp/app");
        assert_eq!(paths.recipes_file(), Path::new("/tmp/app/recipes.json"));
        assert_eq!(paths.templates_file(), Path::new("/tmp/app/templates.json"));
    }

    #[test]
    fn test_user_default_ends_with_app_name() {
        let paths = ConfigPaths::user_default();
        assert!(paths.config_dir().ends_with(".gitignore-builder") || paths.config_dir().ends_with(APP_NAME));
    }

    #[test]
    fn test_load_recipes_initializes_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir.path().join("config"));
        let file = store.paths().recipes_file();
        assert!(!file.exists());

        let recipes = store.load_recipes().unwrap();

        assert!(file.is_file());
        assert_eq!(recipes, all_recipes());
    }

    #[test]
    fn test_load_templates_initializes_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(temp_dir.path());

        let templates = store.load_templates().unwrap();

        assert!(store.paths().templates_file().is_file());
        assert_eq!(templates, all_templates());
    }

    #[test]
    fn test_load_reads_existing_files() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(temp_dir.path());

        let recipes = Recipes::new(all_recipes().recipes()[1..].to_vec()).unwrap();
        recipes.save(store.paths().recipes_file()).unwrap();
        let templates = Templates::new(all_templates().templates()[1..].to_vec()).unwrap();
        templates.save(store.paths().templates_file()).unwrap();

        assert_eq!(store.load_recipes().unwrap(), recipes);
        assert_eq!(store.load_templates().unwrap(), templates);
    }

    #[test]
    fn test_load_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(temp_dir.path());

        let first = store.load_recipes().unwrap();
        let text = std::fs::read_to_string(store.paths().recipes_file()).unwrap();
        let second = store.load_recipes().unwrap();

        assert_eq!(first, second);
        assert_eq!(std::fs::read_to_string(store.paths().recipes_file()).unwrap(), text);
    }

    #[test]
    fn test_load_reports_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(temp_dir.path());
        std::fs::write(store.paths().recipes_file(), r#"{"recipes": []}"#).unwrap();

        let err = store.load_recipes().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(err.field(), Some("recipes"));
    }

    #[test]
    fn test_recipe_urls() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(temp_dir.path());

        Recipes::new(vec![Recipe::new("mini", &["linux", "ghost", "python"]).unwrap()])
            .unwrap()
            .save(store.paths().recipes_file())
            .unwrap();
        Templates::new(vec![
            Template::new("python", &["p1", "p2"]).unwrap(),
            Template::new("linux", &["l1"]).unwrap(),
        ])
        .unwrap()
        .save(store.paths().templates_file())
        .unwrap();

        assert_eq!(store.recipe_names().unwrap(), ["mini"]);
        assert_eq!(store.recipe_urls("mini").unwrap(), ["l1", "p1", "p2"]);

        let err = store.recipe_urls("nope").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownRecipe { ref name, ref available }
            if name == "nope" && available == &["mini"]));
    }

    #[test]
    fn test_init_files_write_into_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir.path().join("nested"));

        store.init_recipes_file().unwrap();
        store.init_templates_file().unwrap();

        assert_eq!(Recipes::load(store.paths().recipes_file()).unwrap(), all_recipes());
        assert_eq!(Templates::load(store.paths().templates_file()).unwrap(), all_templates());
    }

    #[test]
    fn test_init_recipes_file_restores_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(temp_dir.path());
        std::fs::write(store.paths().recipes_file(), "not json").unwrap();

        store.init_recipes_file().unwrap();

        assert_eq!(store.load_recipes().unwrap(), all_recipes());
    }
}
