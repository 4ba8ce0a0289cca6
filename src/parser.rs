mod base;
mod interface;
mod middleware;
mod printer;

pub use base::ParseError;
pub(crate) use base::Initializer;
pub(crate) use interface::{ConsoleInterface, UserInterface};
pub(crate) use middleware::invoke;
pub(crate) use printer::ErrorContext;

#[cfg(test)]
pub(crate) use interface::util;
