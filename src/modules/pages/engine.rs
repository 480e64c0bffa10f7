use std::path::Path;

use minijinja::Environment;

use crate::api::error;

/// Template engine for the HTML pages.
///
/// Templates are loaded once at startup from the templates directory; names
/// and sources are leaked into `'static` since they live for the whole
/// process.
#[derive(Clone)]
pub struct PageEngine {
    env: Environment<'static>,
}

impl PageEngine {
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, error::SystemError> {
        let mut env = Environment::new();

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "html") {
                let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                    continue;
                };
                let source = std::fs::read_to_string(&path)?;
                let static_name: &'static str = Box::leak(name.to_string().into_boxed_str());
                let static_source: &'static str = Box::leak(source.into_boxed_str());
                env.add_template(static_name, static_source)?;
            }
        }

        Ok(Self { env })
    }

    pub fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String, error::SystemError> {
        let template = self.env.get_template(name)?;
        Ok(template.render(ctx)?)
    }
}
