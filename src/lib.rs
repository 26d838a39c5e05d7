//! Calm Quest: backend for an interactive anxiety-relief story game
//!
//! This library provides:
//! - Prompt templates for story, character and interaction generation
//! - A thin client for the Gemini `generateContent` API
//! - A recovery cascade that coerces free-form model output into
//!   structured character records, with fixed defaults on failure
//! - An axum HTTP server exposing the game endpoints
//!
//! # Example
//!
//! ```no_run
//! use calm_quest::{recover_characters, RecoveryResult};
//!
//! let raw = r#"[{"name": "冷靜的智者", "description": "...", "help": "..."}]"#;
//! match recover_characters(raw) {
//!     RecoveryResult::Recovered(characters) => println!("{:?}", characters),
//!     RecoveryResult::Unrecovered => println!("falling back to defaults"),
//! }
//! ```

pub mod config;
pub mod fallback;
pub mod gemini;
pub mod prompts;
pub mod recovery;
pub mod server;

// Re-export main types for library users
pub use config::GeminiConfig;
pub use gemini::{GeminiClient, GeminiError};
pub use recovery::{recover_characters, CharacterRecord, RecoveryResult};
pub use server::{create_router, run_server, AppState};

// Re-export common types
pub type Result<T> = std::result::Result<T, anyhow::Error>;
