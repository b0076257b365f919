//! Error types for devws-core

use thiserror::Error;

/// Errors that can occur while converting devfile tools into recipes.
///
/// The message text of the three recipe-resolution variants is part of the
/// external contract and asserted verbatim by API consumers.
#[derive(Debug, Error)]
pub enum DevfileError {
    #[error(
        "Unable to process tool '{tool}' of type '{tool_type}' since there is no recipe \
         content provider supplied. That means you're trying to submit an devfile with \
         recipe-type tools to the bare devfile API or used factory URL does not support \
         this feature."
    )]
    MissingContentProvider { tool: String, tool_type: String },

    #[error("Error during recipe content retrieval for tool '{tool}': {message}")]
    ContentFetch { tool: String, message: String },

    #[error("Error occurred during parsing list from file {location} for tool '{tool}': {message}")]
    ContentParse {
        location: String,
        tool: String,
        message: String,
    },

    #[error("Failed to serialize recipe content for tool '{tool}': {message}")]
    RecipeSerialize { tool: String, message: String },

    #[error("Invalid devfile: {0}")]
    InvalidDevfile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
