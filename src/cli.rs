use std::path::PathBuf;

use clap::Parser;

use crate::models::SourceKind;

#[derive(Parser, Debug)]
#[command(
    name = "update-licence-lists",
    about = "Refresh the free-licence identifier lists from Fedora, SPDX and SUSE data",
    version
)]
pub struct Cli {
    /// Directory the lists are written to [default: licences]
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Config file [default: ./.licence-lists/config.toml, fallback ~/.config/licence-lists/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Do not refresh a source (repeatable); its list on disk is still merged
    #[arg(long, value_name = "SOURCE")]
    pub skip: Vec<SourceArg>,

    /// Do not write the combined list
    #[arg(long)]
    pub no_merge: bool,

    /// Summary format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum SourceArg {
    Fedora,
    Spdx,
    Suse,
}

impl From<&SourceArg> for SourceKind {
    fn from(arg: &SourceArg) -> Self {
        match arg {
            SourceArg::Fedora => SourceKind::Fedora,
            SourceArg::Spdx => SourceKind::Spdx,
            SourceArg::Suse => SourceKind::Suse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["update-licence-lists"]).unwrap();
        assert!(cli.output_dir.is_none());
        assert!(cli.skip.is_empty());
        assert!(!cli.no_merge);
        assert!(matches!(cli.report, ReportFormat::Terminal));
    }

    #[test]
    fn test_skip_is_repeatable() {
        let cli = Cli::try_parse_from([
            "update-licence-lists",
            "--skip",
            "suse",
            "--skip",
            "fedora",
            "--output-dir",
            "/tmp/licences",
        ])
        .unwrap();
        let skipped: Vec<SourceKind> = cli.skip.iter().map(Into::into).collect();
        assert_eq!(skipped, [SourceKind::Suse, SourceKind::Fedora]);
        assert_eq!(cli.output_dir, Some(PathBuf::from("/tmp/licences")));
    }

    #[test]
    fn test_unknown_source_rejected() {
        assert!(Cli::try_parse_from(["update-licence-lists", "--skip", "debian"]).is_err());
    }
}
