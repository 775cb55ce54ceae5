//! Grammar productions, split by document area.

mod executable;
mod type_system;
mod value;
