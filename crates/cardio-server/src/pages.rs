//! HTML pages rendered from the embedded templates.

use minijinja::{context, Environment};

const INDEX: &str = "index.html";
const RESULT: &str = "result.html";

/// Compiled page templates. Autoescaping is on for `.html` names.
pub struct Pages {
    env: Environment<'static>,
}

impl Pages {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(INDEX, include_str!("../templates/index.html"))?;
        env.add_template(RESULT, include_str!("../templates/result.html"))?;
        Ok(Self { env })
    }

    /// The input form.
    pub fn index(&self) -> Result<String, minijinja::Error> {
        self.env.get_template(INDEX)?.render(context! {})
    }

    /// The result page showing a single message.
    pub fn result(&self, prediction: &str) -> Result<String, minijinja::Error> {
        self.env
            .get_template(RESULT)?
            .render(context! { prediction => prediction })
    }
}
