//! Bundled sample data written to the config directory on first use.

use crate::domain::recipe::{Recipe, Recipes};
use crate::domain::template::{Template, Templates};

pub fn os_templates() -> Templates {
    Templates::new_unchecked(vec![
        Template::new_unchecked(
            "linux",
            &[
                "https://github.com/github/gitignore/raw/main/Global/Linux.gitignore",
                "https://www.toptal.com/developers/gitignore/api/linux",
            ],
        ),
        Template::new_unchecked(
            "macos",
            &[
                "https://github.com/github/gitignore/raw/main/Global/macOS.gitignore",
                "https://www.toptal.com/developers/gitignore/api/macos",
            ],
        ),
        Template::new_unchecked(
            "windows",
            &[
                "https://github.com/github/gitignore/raw/main/Global/Windows.gitignore",
                "https://www.toptal.com/developers/gitignore/api/windows",
            ],
        ),
    ])
}

pub fn ide_templates() -> Templates {
    Templates::new_unchecked(vec![
        Template::new_unchecked(
            "android_studio",
            &[
                "https://github.com/github/gitignore/raw/main/Android.gitignore",
                "https://www.toptal.com/developers/gitignore/api/android,androidstudio",
            ],
        ),
        Template::new_unchecked(
            "eclipse",
            &[
                "https://github.com/github/gitignore/raw/main/Global/Eclipse.gitignore",
                "https://www.toptal.com/developers/gitignore/api/eclipse",
            ],
        ),
        Template::new_unchecked(
            "netbeans",
            &[
                "https://github.com/github/gitignore/raw/main/Global/NetBeans.gitignore",
                "https://www.toptal.com/developers/gitignore/api/netbeans",
            ],
        ),
        Template::new_unchecked(
            "intellij",
            &[
                "https://github.com/github/gitignore/raw/main/Global/JetBrains.gitignore",
                "https://www.toptal.com/developers/gitignore/api/intellij,intellij+all,intellij+iml",
            ],
        ),
        Template::new_unchecked(
            "pycharm",
            &[
                "https://github.com/github/gitignore/raw/main/Global/JetBrains.gitignore",
                "https://www.toptal.com/developers/gitignore/api/pycharm,pycharm+all,pycharm+iml,pydev",
            ],
        ),
        Template::new_unchecked(
            "jupyter_notebooks",
            &[
                "https://github.com/github/gitignore/raw/main/community/Python/JupyterNotebooks.gitignore",
                "https://www.toptal.com/developers/gitignore/api/jupyternotebooks",
            ],
        ),
        Template::new_unchecked(
            "visual_studio",
            &[
                "https://github.com/github/gitignore/raw/main/VisualStudio.gitignore",
                "https://www.toptal.com/developers/gitignore/api/visualstudio,visualstudiocode",
            ],
        ),
    ])
}

pub fn lang_templates() -> Templates {
    Templates::new_unchecked(vec![
        Template::new_unchecked(
            "java",
            &[
                "https://github.com/github/gitignore/raw/main/Java.gitignore",
                "https://github.com/github/gitignore/raw/main/JBoss.gitignore",
                "https://github.com/github/gitignore/raw/main/Maven.gitignore",
                "https://github.com/github/gitignore/raw/main/Gradle.gitignore",
                "https://github.com/github/gitignore/raw/main/Global/JDeveloper.gitignore",
                "https://github.com/github/gitignore/raw/main/Global/JEnv.gitignore",
                "https://github.com/github/gitignore/raw/main/community/Java/JBoss4.gitignore",
                "https://github.com/github/gitignore/raw/main/community/Java/JBoss6.gitignore",
                "https://www.toptal.com/developers/gitignore/api/java,gradle,maven",
            ],
        ),
        Template::new_unchecked(
            "python",
            &[
                "https://github.com/github/gitignore/raw/main/Python.gitignore",
                "https://github.com/github/gitignore/raw/main/community/Python/Nikola.gitignore",
                "https://github.com/pyscaffold/pyscaffold/raw/master/src/pyscaffold/templates/gitignore.template",
                "https://www.toptal.com/developers/gitignore/api/python,pythonvanilla,django,flask",
            ],
        ),
    ])
}

/// OS, IDE and language templates, in that order.
pub fn all_templates() -> Templates {
    os_templates() + ide_templates() + lang_templates()
}

pub fn all_recipes() -> Recipes {
    Recipes::new_unchecked(vec![
        Recipe::new_unchecked(
            "android",
            &[
                "linux",
                "macos",
                "windows",
                "android_studio",
                "eclipse",
                "netbeans",
                "intellij",
                "java",
            ],
        ),
        Recipe::new_unchecked(
            "java",
            &["linux", "macos", "windows", "eclipse", "netbeans", "intellij", "java"],
        ),
        Recipe::new_unchecked(
            "python",
            &[
                "linux",
                "macos",
                "windows",
                "pycharm",
                "jupyter_notebooks",
                "visual_studio",
                "python",
            ],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_templates_pass_validation() {
        let templates = all_templates();
        assert_eq!(templates.len(), 12);
        assert_eq!(Templates::from_value(&templates.as_value()).unwrap(), templates);
    }

    #[test]
    fn test_bundled_recipes_pass_validation() {
        let recipes = all_recipes();
        assert_eq!(recipes.names(), ["android", "java", "python"]);
        assert_eq!(Recipes::from_value(&recipes.as_value()).unwrap(), recipes);
    }

    #[test]
    fn test_bundled_recipes_reference_bundled_templates() {
        let templates = all_templates();
        for recipe in &all_recipes() {
            for name in recipe.templates() {
                assert!(templates.find(name).is_some(), "{} -> {}", recipe.name(), name);
            }
        }
    }
}
