//! Builds a single HTML element string with an inline `style` attribute.
//!
//! ```
//! use tagstyle_lib::StyleBuilder;
//!
//! let html = StyleBuilder::new("div", "X")
//!     .background_color("yellow")
//!     .border_radius("10px")
//!     .build();
//! assert_eq!(html, r#"<div style="background-color:yellow;border-radius:10px;">X</div>"#);
//! ```

pub mod style;
pub mod tag_builder;

pub use style::declaration::{Declaration, DeclarationParseError};
pub use style::properties::{is_known_property, PROPERTIES};
pub use tag_builder::StyleBuilder;
