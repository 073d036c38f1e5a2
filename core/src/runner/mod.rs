mod traits;
mod types;

pub use traits::RobotRunner;
pub use types::{exit_code, ProcessOutput};
