//! Common imports for working with the Anthropic API.
//!
//! This module re-exports the most commonly used types.
//!
//! ```rust,no_run
//! use anthropic_api::prelude::*;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Anthropic::new("your-api-key");
//! let request = ChatRequest::builder()
//!     .model(Model::Claude35Sonnet20241022)
//!     .messages(vec![Message::from("Hello!")])
//!     .build();
//!
//! let response = client.send(&request).await?;
//! # Ok(())
//! # }
//! ```

pub use crate::{
    Anthropic,
    AnthropicRequestError,
    ChatRequest,
    ChatResponse,
    Model,
    message::{Content, Message, Messages, Role, StringOrContents, Text},
    response::{StopReason, Usage},
};
