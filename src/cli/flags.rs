#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub upper: bool,
    pub digits: bool,
    pub symbols: bool,
    pub no_lower: bool,
    /// Raw -l value; validated later so field messages stay uniform.
    pub length_raw: Option<String>,
}
