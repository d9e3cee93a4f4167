//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, MessageSink)
//! but are themselves concrete structs, not traits.

mod message;

pub use message::MessageService;
