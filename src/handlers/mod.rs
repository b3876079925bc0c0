pub mod get;
pub mod object;
pub mod put;

pub use get::get_object;
pub use object::object_handler;
pub use put::put_object;
