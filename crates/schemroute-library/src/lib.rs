//! Component catalog for schemroute.
//!
//! Maps each [`ComponentKind`] to a body [`Footprint`](schemroute_grid::Footprint)
//! and a default pin layout, and places those pins in canvas space for a
//! component at a given position and rotation.
//!
//! ```
//! use schemroute_core::{Direction, Point};
//! use schemroute_library::{place_pin, ComponentKind, ComponentLibrary};
//!
//! let library = ComponentLibrary::builtin();
//! let resistor = library.resolve(ComponentKind::Resistor);
//! let pin = resistor.pin("2").unwrap();
//!
//! let ep = place_pin(Point::new(100.0, 50.0), 90.0, pin);
//! assert_eq!(ep.position, Point::new(100.0, 90.0));
//! assert_eq!(ep.direction, Some(Direction::Down));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod def;
pub mod kind;
pub mod pin;

pub use catalog::ComponentLibrary;
pub use def::ComponentDef;
pub use kind::{Category, ComponentKind, ParseKindError};
pub use pin::{find_pin, place_pin, quarter_turns, rotate_offset, PinDef};
