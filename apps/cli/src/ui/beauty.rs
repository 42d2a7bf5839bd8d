use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};
use std::io::{stdout, Write};

pub fn print_header(color: bool) -> std::io::Result<()> {
    let mut stdout = stdout();
    if color {
        stdout.execute(SetForegroundColor(Color::DarkBlue))?;
    }
    writeln!(stdout, "  ___ _    _     ___          _    _           ")?;
    writeln!(stdout, " | _ (_)__| |__ | _ \\___ __ _(_)__| |_ ___ _ _ ")?;
    writeln!(stdout, " |   / (_-< / / |   / -_) _` | (_-<  _/ -_) '_|")?;
    writeln!(stdout, " |_|_\\_/__/_\\_\\ |_|_\\___\\__, |_/__/\\__\\___|_|  ")?;
    writeln!(stdout, "                        |___/                 ")?;
    writeln!(stdout, "  Security, Compliance & Operational Risk Assessment")?;
    if color {
        stdout.execute(ResetColor)?;
    }
    writeln!(stdout)?;
    Ok(())
}
