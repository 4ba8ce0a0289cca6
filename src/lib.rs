//! `argschema` is a command line parser for Rust, configured by a compact schema string.
//!
//! Where most command line parsers are configured through a builder or derive Api, `argschema` takes its entire configuration from one string.
//! Each flag is a single character, and the schema declares what type of value that flag holds.
//! The parser then applies the Cli tokens onto the declared flags, failing loudly on anything the schema does not allow.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/server.rs")]
//! ```
//!
//! ```console
//! $ server -v -p8080 -d/srv/www
//! Serving '/srv/www' on port 8080 (verbose).
//!
//! $ server -p80x
//! Parse error: '80x' cannot convert to an integer for flag 'p'.
//! -p80x
//!   ^
//! ```
//!
//! # Schema
//! A schema is a comma separated list of *descriptors*, one per flag.
//! Each descriptor is the flag identifier, optionally followed by a *type marker*:
//!
//! ```console
//! Descriptor | Type    | Initial | Cli example
//! -----------------------------------------------
//! c          | boolean | false   | -c
//! c#         | integer | 0       | -c80
//! c*         | string  | ""      | -c/home/logs
//! ```
//!
//! The schema is rejected with a [`SchemaError`] when a descriptor is empty (ex: `"l,,p#"`), carries an unknown type marker (ex: `"p!"`), is longer than two characters, or repeats a flag identifier.
//!
//! # Cli Semantics
//! * Each token takes the shape `<marker><flag>[value]`.
//! The marker (conventionally `-`) is skipped without validation, and the value runs to the end of the token.
//! For example, `-p80` supplies `80` to the flag `p`.
//! * A boolean flag is set to `true` when supplied; any value is ignored.
//! * An integer flag parses its value as a base-10 `i32`.
//! * A string flag takes its value verbatim, which may be empty.
//! * Tokens are applied in order; when a flag repeats, the last token wins.
//! * Declared flags that are not supplied keep their initial value.
//!
//! Construction fails with a [`ParseError`] on a token shorter than two characters, a flag the schema does not declare, or an integer value that does not parse.
//! There is no partially constructed [`Args`]: any failure discards the whole parse.
//!
//! # Access
//! [`Args::has`] reports whether the schema declares a flag (supplied or not).
//! The typed getters ([`Args::get_boolean`], [`Args::get_integer`], [`Args::get_string`]) fail with [`AccessError::OutOfRange`] when the flag is undeclared or declared with another type.
//! These failures leave the [`Args`] intact.
//!
//! # Features
//! * `tracing_debug`: Debug level [tracing](https://docs.rs/tracing) of schema compilation and token application.
mod api;
mod model;
mod parser;
mod schema;
mod tokens;

pub use api::*;
pub use model::*;
pub use parser::ParseError;
pub use schema::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {
            assert!(
                $base.contains($sub),
                "'{b}' does not contain '{s}'",
                b = $base,
                s = $sub,
            );
        };
    }

    pub(crate) use assert_contains;
}
