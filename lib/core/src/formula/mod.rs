pub use atom::{Atom, AtomId};
pub use conn::Conn;
pub use expr::Formula;

pub mod atom;
pub mod conn;
pub mod expr;
