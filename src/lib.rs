//! # avsc-alias
//!
//! Add snake_case aliases to every record and field of an
//! [Apache Avro](https://avro.apache.org/) schema, so consumers that expect
//! snake_case names can read data written with CamelCase or mixedCase ones.
//!
//! Primary names are never changed. An alias is appended to each record and
//! field (existing aliases are kept), walking nested records through field
//! types, array items and unions.
//!
//! ## Example (Programmatic Usage)
//!
//! ```
//! use serde_json::json;
//! use avsc_alias::aliaser::add_aliases_to_avro_schema;
//!
//! let schema = json!({
//!     "type": "record",
//!     "name": "UserOrder",
//!     "fields": [{ "name": "orderId", "type": "string" }]
//! });
//!
//! let aliased = add_aliases_to_avro_schema(schema, "User").unwrap();
//! assert_eq!(aliased["aliases"], json!(["order"]));
//! assert_eq!(aliased["fields"][0]["aliases"], json!(["order_id"]));
//! ```
//!
//! ## Example (CLI)
//!
//! ```bash
//! avsc-alias user_order.avsc user_order.aliased.avsc --prefix User
//! ```
//!
//! ## Known limitations
//!
//! - Acronyms are split letter by letter: `HTTPServer` gets the alias
//!   `h_t_t_p_server`.
//! - Records nested in a `map`'s `values` are not aliased, and named type
//!   references (`"type": "com.example.Address"`) are not followed.
//! - Running twice appends a second, identical alias everywhere.
//!
//! ## Crate Layout
//!
//! - [`avro`] — Classification of schema nodes and type references
//! - [`common`] — Name casing and JSON path helpers
//! - [`aliaser`] — The alias injector and schema file I/O
//! - [`error`] — Error type shared by all of the above
//!
//! The CLI binary is enabled with the `cli` feature.
pub mod aliaser;
pub mod avro;
pub mod common;
pub mod error;

pub use aliaser::{add_aliases_to_avro_file, add_aliases_to_avro_schema, AliasInjector, AliasStats};
pub use error::{AliasError, Result};
