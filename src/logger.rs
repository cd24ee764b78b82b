use chrono::Utc;
use std::sync::OnceLock;

static LOG_PATH: OnceLock<Option<String>> = OnceLock::new();

/// Sets the log destination once; later calls are ignored.
pub fn init_logger(path: Option<String>) {
    _ = LOG_PATH.set(path);
}

pub fn log_path() -> Option<&'static str> {
    LOG_PATH.get().and_then(|path| path.as_deref())
}

pub fn get_timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)*) => {
        {
            use std::fs::OpenOptions;
            use std::io::Write;

            let timestamp = $crate::logger::get_timestamp();
            let log_line = format!("[{}] [{}:{}] [{}] {}\n", timestamp, file!(), line!(), $level, &format!($($arg)*));

            if let Some(file_path) = $crate::logger::log_path() {
                if let Ok(mut file) = OpenOptions::new()
                    .append(true)
                    .create(true)
                    .open(file_path)
                {
                    _ = file.write_all(log_line.as_bytes());
                }
            } else {
                print!("{}", log_line);
            }
        }
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        log!("INFO", $($arg)*);
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        log!("WARN", $($arg)*);
    };
}
