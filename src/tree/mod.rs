//! The application-supplied node tree.
//!
//! # Data Flow
//! ```text
//! Root node
//!     → attribute "withDefault" → Site (site marker)
//!         → attribute "index"   → Exposed handler
//!         → attribute "helper"  → Function (callable, not exposed)
//!     → attribute "static"      → Container (groups children, no marker)
//! ```
//!
//! # Design Decisions
//! - Attribute lookup is explicit (`Node::lookup`), no reflection
//! - "Absent" (`None`) is distinct from "present but empty" (`Child::Empty`)
//! - Attribute enumeration is sorted by name

pub mod node;
pub mod site;

pub use node::{Child, Function, Node};
pub use site::{Attributes, Container, Site};
