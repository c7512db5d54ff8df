use std::fmt;
use std::str::FromStr;

use jl_types::FieldValue;
use serde::{Deserialize, Serialize};

use crate::context::RenderContext;
use crate::error::Error;
use crate::strategies::{
    render_default, render_error, render_exception, render_extra, render_level, render_trace,
};

/// Function form of a rendering strategy.
pub type RenderFn = fn(&RenderContext, &FieldValue<'_>) -> String;

/// The known rendering strategies, selectable per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Renderer {
    #[default]
    Default,
    Error,
    Trace,
    Exception,
    Extra,
    Level,
}

impl Renderer {
    pub const ALL: [Renderer; 6] = [
        Renderer::Default,
        Renderer::Error,
        Renderer::Trace,
        Renderer::Exception,
        Renderer::Extra,
        Renderer::Level,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Renderer::Default => "default",
            Renderer::Error => "error",
            Renderer::Trace => "trace",
            Renderer::Exception => "exception",
            Renderer::Extra => "extra",
            Renderer::Level => "level",
        }
    }

    pub fn as_fn(self) -> RenderFn {
        match self {
            Renderer::Default => render_default,
            Renderer::Error => render_error,
            Renderer::Trace => render_trace,
            Renderer::Exception => render_exception,
            Renderer::Extra => render_extra,
            Renderer::Level => render_level,
        }
    }

    pub fn render(self, ctx: &RenderContext, value: &FieldValue<'_>) -> String {
        (self.as_fn())(ctx, value)
    }
}

impl fmt::Display for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Renderer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Renderer::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownRenderer(s.to_string()))
    }
}
