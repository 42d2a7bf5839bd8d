pub mod beauty;
pub mod components;
pub mod diagnostic;
pub mod theme;

pub use theme::{Icon, Theme};

pub fn info(message: impl AsRef<str>) {
    let msg = format!("{} {}", Icon::Info, message.as_ref());
    if cliclack::log::info(&msg).is_err() {
        println!("{}", msg);
    }
}

pub fn success(message: impl AsRef<str>) {
    let msg = Theme::success(message.as_ref());
    if cliclack::log::success(&msg).is_err() {
        println!("{}", msg);
    }
}

pub fn warn(message: impl AsRef<str>) {
    let msg = Theme::warning(message.as_ref());
    if cliclack::log::warning(&msg).is_err() {
        println!("{}", msg);
    }
}

pub fn error(message: impl AsRef<str>) {
    let msg = Theme::error(message.as_ref());
    if cliclack::log::error(&msg).is_err() {
        eprintln!("{}", msg);
    }
}

/// Multi-line output (tables, charts) printed as-is below the prompt rail.
pub fn block(content: impl AsRef<str>) {
    println!("{}\n", content.as_ref());
}
