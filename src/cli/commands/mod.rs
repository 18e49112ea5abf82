pub mod invoke;
pub mod list;
pub mod run;

pub use invoke::*;
pub use list::*;
pub use run::*;
