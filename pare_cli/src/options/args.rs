use clap::Parser;

/// program to fetch a web page and reduce its markup to content.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// The page URL to fetch.
    #[clap(short, long)]
    pub url: String,
    /// Destination file for the reduced markup, written as UTF-8 text.
    #[clap(short, long)]
    pub output: String,
    /// Strip all HTML tags, keeping only text content, instead of
    /// preserving the content-bearing tags.
    #[clap(long)]
    pub strip_all_tags: bool,
    /// User-Agent
    #[clap(short, long)]
    pub agent: Option<String>,
    /// Print the reduction statistics as JSON on standard output.
    #[clap(long)]
    pub stats: bool,
    /// Print reduction diagnostics on standard output
    #[clap(short, long)]
    pub verbose: bool,
}
