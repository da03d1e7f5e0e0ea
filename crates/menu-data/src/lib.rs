//! # Menu Data Crate
//!
//! Domain types and parsing for a district's FamilyMenu data.
//!
//! ## Main Components
//!
//! - **types**: `MenuItem`, `ExtractOptions` and the field alias tables
//! - **dates**: the requested `DateRange` and tolerant date parsing
//! - **document**: format sniffing of a response body (JSON, then XML)
//! - **extract**: JSON and XML walkers producing `MenuItem`s
//! - **error**: error types for this crate
//!
//! ## Example Usage
//!
//! ```ignore
//! use menu_data::{DateRange, ExtractOptions, MenuDocument};
//!
//! let range = DateRange::build(start, 5, true)?;
//! let doc = MenuDocument::sniff(&raw_body)?;
//! let items = doc.extract(&ExtractOptions::new("Lunch"));
//! ```

pub mod dates;
pub mod document;
pub mod error;
pub mod extract;
pub mod types;

pub use dates::{DateRange, MAX_DAYS, api_date, parse_flexible_date, parse_start_date};
pub use document::MenuDocument;
pub use error::{MenuError, Result};
pub use types::{ExtractOptions, MenuItem};
