pub mod inspector;
pub mod resolver;

// Re-export commonly used types
pub use inspector::{ProcessInspector, PsInspector};
pub use resolver::{PushResolver, non_option_arguments, refspec_destination, remote_of_upstream};
