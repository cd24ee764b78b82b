#[derive(Debug)]
pub struct Config {
    /// Grid dimension: number of banks and of cells per bank.
    pub size: usize,
    pub log_file_path: Option<String>,
}
