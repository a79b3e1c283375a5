use colored::{ColoredString, Colorize};
use env_logger::{Builder, Env};
use log::Level;
use std::io::Write;
use std::time::Duration;

pub fn init_logging() {
    let logging_env = Env::default().filter_or("RUST_LOG", "info");
    Builder::from_env(logging_env)
        .format(|buf, record| {
            let target = record
                .target()
                .split("::")
                .last()
                .unwrap_or_default()
                .to_ascii_lowercase();
            let target = match record.level() {
                Level::Error => target.bold().red(),
                Level::Warn => target.bold().yellow(),
                _ => target.bold().bright_yellow(),
            };

            writeln!(
                buf,
                "{} {} {}",
                chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
                target,
                record.args()
            )
        })
        .init();
}

pub fn format_elapsed(elapsed: Duration) -> ColoredString {
    match elapsed.as_secs() {
        secs if secs > 2 => format!("{}s", secs).red(),
        secs if secs > 0 => format!("{}s", secs).yellow(),
        _ => match elapsed.as_millis() {
            millis if millis > 500 => format!("{}ms", millis).yellow(),
            millis if millis > 0 => format!("{}ms", millis).normal(),
            _ => format!("{}μs", elapsed.as_micros()).normal(),
        },
    }
}
