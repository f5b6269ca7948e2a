//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Cache warmup: appends filler records to the growth buffer every tick

mod warmup;

pub use warmup::spawn_warmup_task;
