//! Reading and writing meshes as OBJ-style text.
//!
//! Malformed records never fail a load; they surface as
//! [`MeshWarning`](crate::errors::MeshWarning)s on the returned mesh. Only
//! filesystem failures are errors.

mod obj;

pub use obj::{load_obj, parse_obj, save_obj, to_obj_string};
