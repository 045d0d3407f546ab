//! Templates: named lists of URLs pointing at plain-text `.gitignore` sources.
//!
//! The bundled templates are written to `templates.json` in the user config
//! directory on first use. From then on that file is the source the builder
//! reads when it follows a recipe.

use crate::utils::error::{ConfigError, Result};
use crate::utils::json::{parse_json_text, read_json_text, save_json, to_ascii_json};
use crate::utils::validation::{
    validate_array, validate_items, validate_non_empty_list, validate_non_empty_string,
    validate_required_field, validate_string, validate_string_items,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::ops::Add;
use std::path::Path;

/// A named list of URLs, each pointing at sample `.gitignore` contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    name: String,
    urls: Vec<String>,
}

impl Template {
    /// Builds a template, applying the same rules as [`Template::from_value`].
    pub fn new<S: AsRef<str>>(name: &str, urls: &[S]) -> Result<Self> {
        let urls: Vec<&str> = urls.iter().map(AsRef::as_ref).collect();
        Self::from_value(&json!({ "name": name, "urls": urls }))
    }

    pub(crate) fn new_unchecked(name: &str, urls: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            urls: urls.iter().map(|u| u.to_string()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn as_value(&self) -> Value {
        json!({ "name": self.name, "urls": self.urls })
    }

    /// Parses a template from a JSON mapping.
    ///
    /// Both keys must be present before any type is checked; all types are
    /// checked before any value. Blank URLs are dropped silently, but at
    /// least one URL must remain.
    pub fn from_value(data: &Value) -> Result<Self> {
        let data_name = validate_required_field("data", data, "name")?;
        let data_urls = validate_required_field("data", data, "urls")?;

        let raw_name = validate_string("name", data_name)?;
        let raw_urls = validate_string_items("urls", validate_array("urls", data_urls)?)?;

        let name = validate_non_empty_string("name", raw_name)?;
        let urls: Vec<String> = raw_urls
            .into_iter()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .collect();
        let urls = validate_non_empty_list("urls", urls, data_urls)?;

        Ok(Self { name, urls })
    }
}

/// Ordered, non-empty collection of [`Template`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Templates {
    templates: Vec<Template>,
}

impl Templates {
    pub fn new(templates: Vec<Template>) -> Result<Self> {
        if templates.is_empty() {
            return Err(ConfigError::Value {
                field: "templates".to_string(),
                actual_value: json!([]),
            });
        }
        Ok(Self { templates })
    }

    pub(crate) fn new_unchecked(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.templates.iter()
    }

    /// First template with exactly this name.
    pub fn find(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.templates.iter().map(Template::name).collect()
    }

    pub fn as_value(&self) -> Value {
        let templates: Vec<Value> = self.templates.iter().map(Template::as_value).collect();
        json!({ "templates": templates })
    }

    pub fn as_json(&self) -> Result<String> {
        to_ascii_json(self)
    }

    pub fn save(&self, file: impl AsRef<Path>) -> Result<()> {
        save_json(file.as_ref(), self)
    }

    pub fn from_value(data: &Value) -> Result<Self> {
        let data_templates = validate_required_field("data", data, "templates")?;
        let items = validate_array("templates", data_templates)?;

        let templates = validate_items("templates", items, Template::from_value)?;
        let templates = validate_non_empty_list("templates", templates, data_templates)?;

        Ok(Self { templates })
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Self::from_value(&parse_json_text(text)?)
    }

    pub fn load(file: impl AsRef<Path>) -> Result<Self> {
        let text = read_json_text(file.as_ref())?;
        Self::from_json(&text)
    }
}

impl Add for Templates {
    type Output = Templates;

    fn add(mut self, other: Templates) -> Templates {
        self.templates.extend(other.templates);
        self
    }
}

impl<'a> IntoIterator for &'a Templates {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}
