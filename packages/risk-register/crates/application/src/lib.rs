pub mod dashboard;
pub mod error;
pub mod shell;

pub use dashboard::Dashboard;
pub use error::ShellError;
pub use shell::RegisterShell;
