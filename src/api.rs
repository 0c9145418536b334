//! Calling conventions over the parsing pipeline
//!
//! The pipeline is a pure synchronous function. [`QueryParser`] wraps it in the
//! three styles callers expect: a direct result, a callback invoked before the
//! call returns, and futures that complete on the tokio scheduler.

use crate::error::ParseError;
use crate::options::ParserOptions;
use tokio::task::JoinHandle;

/// Parse `input` with default options and return the canonical filter string
pub fn parse(input: &str) -> Result<String, ParseError> {
    parse_with_options(input, &ParserOptions::default())
}

/// Parse `input` and return the canonical filter string
pub fn parse_with_options(input: &str, options: &ParserOptions) -> Result<String, ParseError> {
    let query = crate::parser::parse_query(input, options)?;
    Ok(crate::formats::serialize(&query))
}

/// A parser bound to a set of options. Holds no other state, so one instance can
/// serve any number of calls, from any thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryParser {
    options: ParserOptions,
}

impl QueryParser {
    pub fn new(options: ParserOptions) -> Self {
        QueryParser { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    pub fn parse_sync(&self, input: &str) -> Result<String, ParseError> {
        parse_with_options(input, &self.options)
    }

    /// Parse and hand the result to `callback` before returning.
    /// On failure the callback is not invoked and the error is returned.
    pub fn parse<F>(&self, input: &str, callback: F) -> Result<(), ParseError>
    where
        F: FnOnce(&str),
    {
        let filter = self.parse_sync(input)?;
        callback(&filter);
        Ok(())
    }

    /// Parse on the async scheduler. The future yields once before doing any
    /// work, so the result is never available synchronously.
    pub async fn parse_async(&self, input: &str) -> Result<String, ParseError> {
        tokio::task::yield_now().await;
        self.parse_sync(input)
    }

    /// Parse on a spawned task and hand the result to `callback` from there.
    /// Must be called from within a tokio runtime.
    pub fn parse_async_with<F>(&self, input: &str, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<String, ParseError>) + Send + 'static,
    {
        let parser = *self;
        let input = input.to_string();
        tokio::spawn(async move {
            let result = parser.parse_async(&input).await;
            if let Err(err) = &result {
                log::debug!("async parse failed: {}", err);
            }
            callback(result);
        })
    }
}
