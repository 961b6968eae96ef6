//! Conversation session management.
//!
//! A `ChatSession` owns the transcript and the prompt composer for one
//! interactive session and turns each user input into one model call.

mod chat;
mod manager;

#[cfg(test)]
mod tests;

pub use manager::ChatSession;
