pub mod ast;
pub mod file_reader;
pub mod loc;
mod named_ref;
mod operation_kind;
pub mod schema;
pub mod types;

pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use operation_kind::OperationKind;
