//! Recipes: a recipe name plus the ordered template names it combines.

use crate::domain::template::Templates;
use crate::utils::error::{ConfigError, Result};
use crate::utils::json::{parse_json_text, read_json_text, save_json, to_ascii_json};
use crate::utils::validation::{
    index_path, validate_array, validate_items, validate_non_empty_list,
    validate_non_empty_string, validate_required_field, validate_string,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::ops::Add;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    name: String,
    templates: Vec<String>,
}

impl Recipe {
    pub fn new<S: AsRef<str>>(name: &str, templates: &[S]) -> Result<Self> {
        let templates: Vec<&str> = templates.iter().map(AsRef::as_ref).collect();
        Self::from_value(&json!({ "name": name, "templates": templates }))
    }

    pub(crate) fn new_unchecked(name: &str, templates: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            templates: templates.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Template names, in the order their contents are assembled.
    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    pub fn as_value(&self) -> Value {
        json!({ "name": self.name, "templates": self.templates })
    }

    /// Parses a recipe from a JSON mapping.
    ///
    /// Unlike template URLs, a blank template name is an error at its index.
    /// The name is fully validated before `templates` is looked at, so a
    /// blank name wins over a badly typed template list.
    pub fn from_value(data: &Value) -> Result<Self> {
        let data_name = validate_required_field("data", data, "name")?;
        let data_templates = validate_required_field("data", data, "templates")?;

        let name = validate_non_empty_string("name", validate_string("name", data_name)?)?;

        let items = validate_array("templates", data_templates)?;
        let templates = items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let path = index_path("templates", idx);
                validate_non_empty_string(&path, validate_string(&path, item)?)
            })
            .collect::<Result<Vec<_>>>()?;
        let templates = validate_non_empty_list("templates", templates, data_templates)?;

        Ok(Self { name, templates })
    }

    /// URLs of every template this recipe names, in recipe order.
    ///
    /// Names without a matching template are logged and skipped.
    pub fn urls<'a>(&self, templates: &'a Templates) -> Vec<&'a str> {
        let mut urls = Vec::new();
        for template_name in &self.templates {
            match templates.find(template_name) {
                Some(template) => urls.extend(template.urls().iter().map(String::as_str)),
                None => tracing::warn!(
                    "Recipe '{}' references unknown template '{}', skipping",
                    self.name,
                    template_name
                ),
            }
        }
        urls
    }
}

/// Ordered, non-empty collection of [`Recipe`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipes {
    recipes: Vec<Recipe>,
}

impl Recipes {
    pub fn new(recipes: Vec<Recipe>) -> Result<Self> {
        if recipes.is_empty() {
            return Err(ConfigError::Value {
                field: "recipes".to_string(),
                actual_value: json!([]),
            });
        }
        Ok(Self { recipes })
    }

    pub(crate) fn new_unchecked(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn find(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.recipes.iter().map(Recipe::name).collect()
    }

    pub fn as_value(&self) -> Value {
        let recipes: Vec<Value> = self.recipes.iter().map(Recipe::as_value).collect();
        json!({ "recipes": recipes })
    }

    pub fn as_json(&self) -> Result<String> {
        to_ascii_json(self)
    }

    pub fn save(&self, file: impl AsRef<Path>) -> Result<()> {
        save_json(file.as_ref(), self)
    }

    pub fn from_value(data: &Value) -> Result<Self> {
        let data_recipes = validate_required_field("data", data, "recipes")?;
        let items = validate_array("recipes", data_recipes)?;

        let recipes = validate_items("recipes", items, Recipe::from_value)?;
        let recipes = validate_non_empty_list("recipes", recipes, data_recipes)?;

        Ok(Self { recipes })
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Self::from_value(&parse_json_text(text)?)
    }

    pub fn load(file: impl AsRef<Path>) -> Result<Self> {
        let text = read_json_text(file.as_ref())?;
        Self::from_json(&text)
    }
}

impl Add for Recipes {
    type Output = Recipes;

    fn add(mut self, other: Recipes) -> Recipes {
        self.recipes.extend(other.recipes);
        self
    }
}

impl<'a> IntoIterator for &'a Recipes {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}
