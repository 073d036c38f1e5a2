pub mod docker;
pub mod replay;

pub use docker::DockerRobotRunner;
pub use replay::ReplayRobotRunner;
