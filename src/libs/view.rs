//! HTML rendering for pages and fragments.
//!
//! Handlers only see the [`Render`] trait: give it a template name and a
//! [`ViewData`] value and get HTML back. [`View`] is the implementation used
//! by the server. It keeps named template sources and fills `{{ key }}`
//! placeholders from the data.
//!
//! ## Templates
//!
//! | Name               | Data             | Produces                          |
//! |--------------------|------------------|-----------------------------------|
//! | `home`             | `Empty`          | full page that loads the list     |
//! | `task_list`        | `Tasks`          | `<ul>` fragment with every task   |
//! | `task_item`        | `Task`           | one `<li>`, used by `task_list`   |
//! | `add_task_form`    | `Empty`          | create form fragment              |
//! | `update_task_form` | `Task`           | edit form pre-filled with a task  |
//!
//! ## Placeholders
//!
//! A task exposes `id`, `task`, `checked` (`checked` or empty) and `status`
//! (`done` or `open`). A list exposes `items` and `count`. Every value is
//! HTML-escaped except `items`, which is already rendered markup.

use super::task::Task;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const HOME: &str = "home";
pub const TASK_LIST: &str = "task_list";
pub const TASK_ITEM: &str = "task_item";
pub const ADD_TASK_FORM: &str = "add_task_form";
pub const UPDATE_TASK_FORM: &str = "update_task_form";

const TEMPLATE_EXTENSION: &str = "html";

const BUILTIN_TEMPLATES: [(&str, &str); 5] = [
    (HOME, include_str!("../../templates/home.html")),
    (TASK_LIST, include_str!("../../templates/task_list.html")),
    (TASK_ITEM, include_str!("../../templates/task_item.html")),
    (ADD_TASK_FORM, include_str!("../../templates/add_task_form.html")),
    (UPDATE_TASK_FORM, include_str!("../../templates/update_task_form.html")),
];

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template '{0}' is not registered")]
    UnknownTemplate(String),

    #[error("template '{template}' uses '{key}', which has no value")]
    MissingValue { template: String, key: String },

    #[error("template '{template}' has an unterminated placeholder")]
    Unterminated { template: String },

    #[error("failed to load templates from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Data handed to a template.
#[derive(Debug, Clone, Copy)]
pub enum ViewData<'a> {
    Empty,
    Task(&'a Task),
    Tasks(&'a [Task]),
}

/// Turns a named template and data into HTML.
pub trait Render: Send + Sync {
    fn render(&self, template: &str, data: ViewData<'_>) -> Result<String, RenderError>;
}

/// A placeholder value: plain text is escaped on output, markup is not.
enum Slot {
    Text(String),
    Markup(String),
}

/// Named template sources with `{{ key }}` substitution.
#[derive(Debug, Clone)]
pub struct View {
    templates: HashMap<String, String>,
}

impl View {
    /// Templates compiled into the binary.
    pub fn builtin() -> Self {
        let templates = BUILTIN_TEMPLATES.iter().map(|(name, source)| (name.to_string(), source.to_string())).collect();
        View { templates }
    }

    /// Built-in templates overridden by every `*.html` file in `dir`.
    ///
    /// Each file registers under its stem, so `dir/home.html` replaces `home`.
    /// Files with other extensions are ignored.
    pub fn from_dir(dir: &Path) -> Result<Self, RenderError> {
        let io_error = |source: std::io::Error| RenderError::Io {
            path: dir.display().to_string(),
            source,
        };

        let mut view = View::builtin();
        for entry in fs::read_dir(dir).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(TEMPLATE_EXTENSION) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let source = fs::read_to_string(&path).map_err(io_error)?;
            view.templates.insert(name.to_string(), source);
        }

        Ok(view)
    }

    /// Registers or replaces a single template.
    pub fn with_template(mut self, name: &str, source: &str) -> Self {
        self.templates.insert(name.to_string(), source.to_string());
        self
    }

    /// Registered template names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn source(&self, template: &str) -> Result<&str, RenderError> {
        self.templates
            .get(template)
            .map(String::as_str)
            .ok_or_else(|| RenderError::UnknownTemplate(template.to_string()))
    }

    fn context(&self, data: ViewData<'_>) -> Result<Vec<(&'static str, Slot)>, RenderError> {
        let context = match data {
            ViewData::Empty => Vec::new(),
            ViewData::Task(task) => vec![
                ("id", Slot::Text(task.id.to_string())),
                ("task", Slot::Text(task.task.clone())),
                ("checked", Slot::Text(if task.done { "checked" } else { "" }.to_string())),
                ("status", Slot::Text(if task.done { "done" } else { "open" }.to_string())),
            ],
            ViewData::Tasks(tasks) => {
                let mut items = String::new();
                for task in tasks {
                    items.push_str(&self.render(TASK_ITEM, ViewData::Task(task))?);
                }
                vec![("items", Slot::Markup(items)), ("count", Slot::Text(tasks.len().to_string()))]
            }
        };
        Ok(context)
    }
}

impl Default for View {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Render for View {
    fn render(&self, template: &str, data: ViewData<'_>) -> Result<String, RenderError> {
        let source = self.source(template)?;
        let context = self.context(data)?;
        fill(template, source, &context)
    }
}

fn fill(template: &str, source: &str, context: &[(&'static str, Slot)]) -> Result<String, RenderError> {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after.find("}}").ok_or_else(|| RenderError::Unterminated {
            template: template.to_string(),
        })?;
        let key = after[..end].trim();

        match context.iter().find(|(name, _)| *name == key) {
            Some((_, Slot::Text(value))) => escape_into(&mut out, value),
            Some((_, Slot::Markup(value))) => out.push_str(value),
            None => {
                return Err(RenderError::MissingValue {
                    template: template.to_string(),
                    key: key.to_string(),
                })
            }
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    Ok(out)
}

fn escape_into(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
