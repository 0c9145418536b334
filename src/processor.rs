//! Query processing API
//!
//! Lets tools pick what to extract from a query (its tokens, its AST or the final
//! filter) and in which format. A format string names the stage and the format,
//! e.g. `token-json` or `ast-treeviz`; the bare `filter` is the canonical output.

use crate::error::ParseError;
use crate::lexer::{lex, Token};
use crate::options::ParserOptions;
use thiserror::Error;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
    Filter,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
    Treeviz,
    Canonical,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

/// Errors that can occur during processing
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ProcessingSpec {
    /// Parse a format string like "filter", "token-simple" or "ast-json"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        if format_str == "filter" {
            return Ok(ProcessingSpec {
                stage: ProcessingStage::Filter,
                format: OutputFormat::Canonical,
            });
        }

        let Some((stage, format)) = format_str.split_once('-') else {
            return Err(ProcessingError::InvalidFormat(format_str.to_string()));
        };

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            "treeviz" => OutputFormat::Treeviz,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        // Validate stage/format compatibility
        match (stage, format) {
            (ProcessingStage::Token, OutputFormat::Simple | OutputFormat::Json) => {}
            (ProcessingStage::Ast, OutputFormat::Json | OutputFormat::Yaml) => {}
            (ProcessingStage::Ast, OutputFormat::Treeviz) => {}
            _ => {
                return Err(ProcessingError::InvalidFormatType(format!(
                    "Format '{:?}' not supported for {:?} stage",
                    format, stage
                )))
            }
        }

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Filter,
                format: OutputFormat::Canonical,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Treeviz,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Yaml,
            },
        ]
    }

    /// The format string that [`from_string`](Self::from_string) maps to this spec
    pub fn name(&self) -> String {
        let format = match self.format {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Canonical => return "filter".to_string(),
        };
        let stage = match self.stage {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
            ProcessingStage::Filter => "filter",
        };
        format!("{}-{}", stage, format)
    }
}

/// Process a query according to the given specification
pub fn process_str(
    source: &str,
    spec: &ProcessingSpec,
    options: &ParserOptions,
) -> Result<String, ProcessingError> {
    log::debug!("processing query as {}", spec.name());

    match spec.stage {
        ProcessingStage::Token => {
            let tokens = lex(source, options)?;
            format_tokens(&tokens, spec.format)
        }
        ProcessingStage::Ast => {
            let query = crate::parser::parse_query(source, options)?;
            match spec.format {
                OutputFormat::Treeviz => Ok(crate::formats::to_treeviz_str(&query)),
                OutputFormat::Json => serde_json::to_string_pretty(&query)
                    .map_err(|e| ProcessingError::Serialization(e.to_string())),
                OutputFormat::Yaml => serde_yaml::to_string(&query)
                    .map_err(|e| ProcessingError::Serialization(e.to_string())),
                other => Err(ProcessingError::InvalidFormatType(format!(
                    "{:?} only works with the token stage",
                    other
                ))),
            }
        }
        ProcessingStage::Filter => Ok(crate::api::parse_with_options(source, options)?),
    }
}

/// Format tokens according to the specified format
fn format_tokens(tokens: &[Token], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => Ok(tokens.iter().map(|token| token.to_string()).collect()),
        OutputFormat::Json => serde_json::to_string_pretty(tokens)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        other => Err(ProcessingError::InvalidFormatType(format!(
            "{:?} only works with the ast stage",
            other
        ))),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::name)
        .collect()
}
