//! Expression rendering API
//!
//! This module provides the stage/format dispatch behind the CLI: pick
//! what to extract from an expression (tokens, shape, or sum) and how to
//! render it (simple, json, or yaml). Specs are written as strings like
//! `"sum-simple"` or `"tokens-json"`.

use crate::calc::calculate::{calculate, CalculateError};
use crate::calc::lexer::{tokenize, Token};
use crate::calc::shape::{classify, Shape};
use std::fmt;

/// Represents the rendering stage (what data to extract)
#[derive(Debug, Clone, PartialEq)]
pub enum RenderStage {
    Tokens,
    Shape,
    Sum,
}

/// Represents the output format
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
}

/// Represents a complete rendering specification
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSpec {
    pub stage: RenderStage,
    pub format: OutputFormat,
}

impl RenderSpec {
    /// Parse a spec string like "sum-simple" or "tokens-json"
    pub fn from_string(spec_str: &str) -> Result<Self, RenderError> {
        let parts: Vec<&str> = spec_str.split('-').collect();
        if parts.len() < 2 {
            return Err(RenderError::InvalidSpec(spec_str.to_string()));
        }

        let stage = match parts[0] {
            "tokens" => RenderStage::Tokens,
            "shape" => RenderStage::Shape,
            "sum" => RenderStage::Sum,
            _ => return Err(RenderError::InvalidStage(parts[0].to_string())),
        };

        let format = match parts[1..].join("-").as_str() {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            _ => return Err(RenderError::InvalidFormat(parts[1..].join("-"))),
        };

        Ok(RenderSpec { stage, format })
    }

    /// Get all available rendering specifications
    pub fn available_specs() -> Vec<RenderSpec> {
        let stages = [RenderStage::Tokens, RenderStage::Shape, RenderStage::Sum];
        let formats = [OutputFormat::Simple, OutputFormat::Json, OutputFormat::Yaml];

        let mut specs = Vec::new();
        for stage in &stages {
            for format in &formats {
                specs.push(RenderSpec {
                    stage: stage.clone(),
                    format: format.clone(),
                });
            }
        }
        specs
    }
}

/// Errors that can occur during rendering
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    InvalidSpec(String),
    InvalidStage(String),
    InvalidFormat(String),
    Calculation(CalculateError),
    Serialization(String),
}

impl std::error::Error for RenderError {}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidSpec(spec) => {
                write!(f, "Invalid spec: {} (expected <stage>-<format>)", spec)
            }
            RenderError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            RenderError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            RenderError::Calculation(err) => write!(f, "Calculation failed: {}", err),
            RenderError::Serialization(msg) => write!(f, "Serialization failed: {}", msg),
        }
    }
}

impl From<CalculateError> for RenderError {
    fn from(err: CalculateError) -> Self {
        RenderError::Calculation(err)
    }
}

/// Process an expression according to the given rendering specification
pub fn process(text: Option<&str>, spec: &RenderSpec) -> Result<String, RenderError> {
    match spec.stage {
        RenderStage::Tokens => {
            let tokens = tokenize(text.unwrap_or(""));
            render_tokens(&tokens, &spec.format)
        }
        RenderStage::Shape => render_shape(&classify(text), &spec.format),
        RenderStage::Sum => {
            let total = calculate(text)?;
            render_sum(total, &spec.format)
        }
    }
}

/// Render tokens according to the specified format
fn render_tokens(tokens: &[Token], format: &OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for token in tokens {
                result.push_str(&token.to_string());
                if matches!(token, Token::Newline) {
                    result.push('\n');
                }
            }
            Ok(result)
        }
        OutputFormat::Json => serde_json::to_string_pretty(tokens)
            .map_err(|e| RenderError::Serialization(e.to_string())),
        OutputFormat::Yaml => {
            serde_yaml::to_string(tokens).map_err(|e| RenderError::Serialization(e.to_string()))
        }
    }
}

/// Render a classified shape according to the specified format
fn render_shape(shape: &Shape<'_>, format: &OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Simple => Ok(shape.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(shape)
            .map_err(|e| RenderError::Serialization(e.to_string())),
        OutputFormat::Yaml => {
            serde_yaml::to_string(shape).map_err(|e| RenderError::Serialization(e.to_string()))
        }
    }
}

/// Render a computed sum according to the specified format
fn render_sum(total: i64, format: &OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Simple => Ok(total.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(&total)
            .map_err(|e| RenderError::Serialization(e.to_string())),
        OutputFormat::Yaml => {
            serde_yaml::to_string(&total).map_err(|e| RenderError::Serialization(e.to_string()))
        }
    }
}

/// Get all available spec strings
pub fn available_renderings() -> Vec<String> {
    RenderSpec::available_specs()
        .into_iter()
        .map(|spec| {
            format!(
                "{}-{}",
                match spec.stage {
                    RenderStage::Tokens => "tokens",
                    RenderStage::Shape => "shape",
                    RenderStage::Sum => "sum",
                },
                match spec.format {
                    OutputFormat::Simple => "simple",
                    OutputFormat::Json => "json",
                    OutputFormat::Yaml => "yaml",
                }
            )
        })
        .collect()
}
