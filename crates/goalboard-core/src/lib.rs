//! Goalboard View-Model Core
//!
//! Browser-independent state and data shaping for the goalboard frontend:
//! wire models, heatmap aggregation, list filters, chat sessions.

pub mod calendar;
pub mod categories;
pub mod chat;
pub mod epoch;
pub mod error;
pub mod filters;
pub mod goal_form;
pub mod heatmap;
pub mod models;
pub mod palette;
pub mod schema;

pub use error::ApiError;
pub use epoch::{RequestEpoch, Settled};
