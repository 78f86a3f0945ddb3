use clap::{Parser, ValueEnum};
use directory_crawl::{DirectoryConfig, Stage};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "directory-crawl")]
#[command(about = "Crawls a business directory for contact details")]
#[command(version)]
pub struct Args {
    /// Part of the crawl to run
    #[arg(short, long, value_enum, default_value_t = StageArg::Details)]
    pub stage: StageArg,

    /// JSON configuration file (defaults are used for missing keys)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Business URL list to read (details stage)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Where to write business details
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Where to write the business URL list (urls stage)
    #[arg(long)]
    pub urls_output: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StageArg {
    Details,
    Urls,
    All,
}

impl From<StageArg> for Stage {
    fn from(arg: StageArg) -> Self {
        match arg {
            StageArg::Details => Stage::Details,
            StageArg::Urls => Stage::Urls,
            StageArg::All => Stage::All,
        }
    }
}

impl Args {
    /// Apply path overrides on top of a loaded configuration
    ///
    /// The details stage reads the URL list, so `--input` and `--urls-output`
    /// both point at `url_list_path`; `--input` wins when both are given.
    pub fn apply(&self, config: &mut DirectoryConfig) {
        if let Some(path) = &self.urls_output {
            config.url_list_path = path.clone();
        }
        if let Some(path) = &self.input {
            config.url_list_path = path.clone();
        }
        if let Some(path) = &self.output {
            config.details_path = path.clone();
        }
    }
}
