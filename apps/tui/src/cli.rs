use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "heatmap",
    version,
    about = "Monthly global land-surface temperature heat map"
)]
pub struct CliArgs {
    /// Fetch the dataset from this URL
    #[arg(long, value_name = "URL", conflicts_with = "input")]
    pub url: Option<String>,

    /// Read the dataset from a local JSON file
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Write the chart as a standalone HTML page
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write only the chart as an SVG document
    #[arg(long, value_name = "PATH")]
    pub svg: Option<PathBuf>,

    /// Print stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless stats as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl CliArgs {
    /// Flags win over the environment and `.env`. The `.env` file is loaded
    /// first so flags overwrite it; a source flag blanks the competing
    /// source variable, which a later `.env` load leaves alone.
    pub fn apply_env_overrides(&self) {
        dotenv::dotenv().ok();

        if let Some(url) = &self.url {
            std::env::set_var("HEATMAP_DATA_URL", url);
            std::env::set_var("HEATMAP_DATA_FILE", "");
        }
        if let Some(path) = &self.input {
            std::env::set_var("HEATMAP_DATA_FILE", path);
            std::env::set_var("HEATMAP_DATA_URL", "");
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
            std::env::set_var("HEATMAP_LOG", "debug");
        }
    }

    /// True when an export was requested and no stats output was asked for.
    pub const fn export_only(&self) -> bool {
        (self.output.is_some() || self.svg.is_some()) && !self.headless && !self.json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heatmap::config::log_filter;
    use heatmap::{DataSource, SourceConfig};

    #[test]
    fn parses_export_flags() {
        let args = CliArgs::parse_from(["heatmap", "--input", "data.json", "-o", "out.html"]);
        assert_eq!(args.input, Some(PathBuf::from("data.json")));
        assert_eq!(args.output, Some(PathBuf::from("out.html")));
        assert!(args.export_only());
    }

    #[test]
    fn export_with_json_still_prints_stats() {
        let args = CliArgs::parse_from(["heatmap", "--svg", "chart.svg", "--json"]);
        assert!(!args.export_only());
    }

    #[test]
    fn url_and_input_conflict() {
        let result = CliArgs::try_parse_from(["heatmap", "--url", "http://x", "--input", "d.json"]);
        assert!(result.is_err());
    }

    // The only test that touches the process environment.
    #[test]
    fn flags_override_environment() {
        std::env::set_var("HEATMAP_DATA_FILE", "/tmp/from_env.json");
        CliArgs::parse_from(["heatmap", "--url", "http://cli.example/data.json"])
            .apply_env_overrides();
        assert_eq!(
            SourceConfig::from_env().source,
            DataSource::Remote("http://cli.example/data.json".to_string())
        );

        std::env::set_var("HEATMAP_DATA_URL", "http://env.example/data.json");
        CliArgs::parse_from(["heatmap", "--input", "local.json"]).apply_env_overrides();
        assert_eq!(
            SourceConfig::from_env().source,
            DataSource::File(PathBuf::from("local.json"))
        );

        std::env::set_var("HEATMAP_LOG", "warn");
        CliArgs::parse_from(["heatmap", "--debug"]).apply_env_overrides();
        assert_eq!(log_filter(), "debug");

        for key in ["HEATMAP_DATA_FILE", "HEATMAP_DATA_URL", "HEATMAP_LOG", "DEBUG"] {
            std::env::remove_var(key);
        }
    }
}
