use std::path::PathBuf;

use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Config {
    pub test: Vec<Test>,
}

#[derive(Deserialize, Debug)]
pub struct Test {
    #[serde(rename = "description")]
    pub description_path: PathBuf,
    #[serde(rename = "original")]
    pub original_image: PathBuf,
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_scale")]
    pub scale: u32,
}

fn default_mode() -> String {
    "lit".into()
}

fn default_scale() -> u32 {
    2
}
