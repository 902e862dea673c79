pub mod mark;
pub mod value;

pub use mark::{MarkItem, MarkType};
pub use value::{FieldRecord, FieldValue};
