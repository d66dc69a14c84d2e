//! # bot-core
//!
//! Core types and traits for the productivity bot: [`Bot`], [`Handler`], message and user types,
//! [`Reply`] display blocks, and tracing initialization. Transport-agnostic; used by
//! handler-chain, productivity and bot-telegram.

pub mod bot;
pub mod error;
pub mod logger;
pub mod reply;
pub mod types;

pub use bot::Bot;
pub use error::{DbotError, Result};
pub use logger::init_tracing;
pub use reply::{Embed, EmbedField, Reply};
pub use types::{Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};
