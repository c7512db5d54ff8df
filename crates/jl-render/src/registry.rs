use std::collections::HashMap;

use jl_types::FieldValue;

use crate::context::RenderContext;
use crate::renderer::Renderer;

/// Field names conventionally rendered by a dedicated strategy.
const BUILTIN_FIELDS: &[(&str, Renderer)] = &[
    ("level", Renderer::Level),
    ("severity", Renderer::Level),
    ("error", Renderer::Error),
    ("err", Renderer::Error),
    ("exception", Renderer::Exception),
    ("trace", Renderer::Trace),
    ("stack_trace", Renderer::Trace),
    ("extra", Renderer::Extra),
];

/// Maps field names to the strategy used to render them.
///
/// Fields without an entry use [`Renderer::Default`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRenderers {
    fields: HashMap<String, Renderer>,
}

impl FieldRenderers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let fields = BUILTIN_FIELDS
            .iter()
            .map(|(name, renderer)| (name.to_string(), *renderer))
            .collect();
        Self { fields }
    }

    pub fn set(&mut self, field: impl Into<String>, renderer: Renderer) {
        self.fields.insert(field.into(), renderer);
    }

    pub fn remove(&mut self, field: &str) -> Option<Renderer> {
        self.fields.remove(field)
    }

    pub fn renderer_for(&self, field: &str) -> Renderer {
        self.fields.get(field).copied().unwrap_or_default()
    }

    pub fn render_field(
        &self,
        ctx: &RenderContext,
        field: &str,
        value: &FieldValue<'_>,
    ) -> String {
        self.renderer_for(field).render(ctx, value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
