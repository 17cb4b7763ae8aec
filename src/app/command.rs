/// Side effects requested by the reducer and executed by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the matching pipeline for a validated, non-empty query.
    Search(String),
    /// Write a hex color to the system clipboard.
    Copy(String),
}
