mod heartbeat;
mod script;

pub use heartbeat::heartbeat_handler;
pub use script::script_handler;
