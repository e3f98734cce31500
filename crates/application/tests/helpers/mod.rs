
pub use mock_ports::*;
