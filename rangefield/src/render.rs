//! Presentation seam between the field and the hosting form framework.
//!
//! Once per presentation pass the framework invokes [`RangeField::field`]
//! with a [`RenderContext`]. The context is the page-side capability
//! object: it carries the "emit scripts at the end of the document"
//! request and the base field-rendering routine the field delegates to.
//!
//! Embedding the configuration into the page happens in two separate
//! steps so the encoder stays swappable: [`SliderConfig::to_json`]
//! produces the JSON text, [`js_assignment`] prepends the fixed
//! `var <name> = ` prefix. The result travels to the template under the
//! `JSConfig` property.

use indexmap::IndexMap;
use tracing::debug;

use crate::{RangeField, RangeFieldError};

/// Rendering property under which the widget configuration reaches the
/// template.
pub const JS_CONFIG_PROPERTY: &str = "JSConfig";

/// Template properties handed to the base field-rendering routine.
pub type FieldProperties = IndexMap<String, String>;

/// Identity of the field as seen by the rendering delegate.
#[derive(Debug, Clone)]
pub struct FieldHandle {
    pub name: String,
    pub title: Option<String>,
    pub value: Option<f64>,
    pub input_type: &'static str,
}

/// Page-side capabilities a field needs during one presentation pass.
pub trait RenderContext {
    /// Requests that scripts are emitted at the end of the document.
    /// Idempotent; a render pass may request it any number of times.
    fn defer_scripts(&mut self);

    /// Base field-rendering routine of the hosting framework. Receives
    /// the field identity and the augmented template properties, returns
    /// the rendered markup.
    fn render_field(&mut self, field: &FieldHandle, properties: &FieldProperties) -> String;
}

/// Builds the script-variable assignment embedded in the page.
///
/// The widget reads its configuration from a page-global variable named
/// after the field, so the prefix is exactly `var <name> = `.
pub fn js_assignment(name: &str, json: &str) -> String {
    format!("var {name} = {json}")
}

impl RangeField {
    /// Renders the field for one presentation pass.
    ///
    /// In order: requests deferred scripts on the page, builds the
    /// widget configuration, injects the `JSConfig` property, then
    /// delegates to the base rendering routine with the augmented
    /// properties and returns its output.
    pub fn field(
        &mut self,
        ctx: &mut dyn RenderContext,
        mut properties: FieldProperties,
    ) -> Result<String, RangeFieldError> {
        ctx.defer_scripts();

        let config = self.build();
        let json = config.to_json()?;
        properties.insert(
            JS_CONFIG_PROPERTY.to_string(),
            js_assignment(self.name(), &json),
        );

        debug!(field = %self.name(), "Rendering range field");
        let handle = self.handle();
        Ok(ctx.render_field(&handle, &properties))
    }

    /// The field identity passed to the rendering delegate.
    pub fn handle(&self) -> FieldHandle {
        FieldHandle {
            name: self.name().to_string(),
            title: self.title().map(str::to_string),
            value: self.value(),
            input_type: Self::INPUT_TYPE,
        }
    }
}

/// Minimal in-memory page, for examples and tests.
///
/// Renders the hidden backing input, a mount point for the widget, and
/// the injected configuration script. A real hosting framework supplies
/// its own [`RenderContext`] instead.
#[derive(Debug, Default)]
pub struct PageContext {
    scripts_deferred: bool,
}

impl PageContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a field has requested deferred scripts on this page.
    pub fn scripts_deferred(&self) -> bool {
        self.scripts_deferred
    }
}

impl RenderContext for PageContext {
    fn defer_scripts(&mut self) {
        if !self.scripts_deferred {
            debug!("Deferring scripts to end of document");
            self.scripts_deferred = true;
        }
    }

    fn render_field(&mut self, field: &FieldHandle, properties: &FieldProperties) -> String {
        let mut markup = String::new();
        if let Some(title) = &field.title {
            markup.push_str(&format!(
                "<label for=\"{}\">{}</label>\n",
                field.name, title
            ));
        }
        let value = field.value.map(|v| v.to_string()).unwrap_or_default();
        markup.push_str(&format!(
            "<input type=\"{}\" id=\"{}\" name=\"{}\" value=\"{}\" />\n",
            field.input_type, field.name, field.name, value
        ));
        markup.push_str(&format!(
            "<div class=\"rangefield\" data-field=\"{}\"></div>\n",
            field.name
        ));
        if let Some(js_config) = properties.get(JS_CONFIG_PROPERTY) {
            markup.push_str(&format!("<script>{js_config}</script>\n"));
        }
        markup
    }
}
