pub mod dom;
pub mod services;

pub use services::{BrowserTimeProvider, ConsoleLogger};
