//! Text-Import/Export für Punktlisten.
//!
//! Das Format besteht aus zwei getrennten Listen (X und Y), wie sie im
//! Einstellungs-Panel angezeigt, kopiert und wieder eingefügt werden.

pub mod parser;
pub mod writer;

pub use parser::parse_point_list;
pub use writer::format_point_list;
