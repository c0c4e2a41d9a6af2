//! Protocol Request Handlers
//!
//! Handler modules for the commands understood by the dispatcher.

pub mod nodes;
