use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Lines,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    #[serde(default)]
    pub output: OutputFormat,

    #[serde(default)]
    pub trim_tokens: bool,

    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_delimiter() -> char {
    ','
}
fn default_extensions() -> Vec<String> {
    vec!["txt".to_string(), "csv".to_string(), "tsv".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            delimiter: default_delimiter(),
            output: OutputFormat::Lines,
            trim_tokens: false,
            extensions: default_extensions(),
        }
    }
}
