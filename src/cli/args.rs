use clap::{ArgGroup, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "dlt")]
#[command(about = "Translate text or markdown files via DeepL or a proxy endpoint")]
#[command(version)]
pub struct Args {
    /// Suppress status output on stderr
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate inline text or the text portions of a markdown file
    #[command(group(ArgGroup::new("input").required(true).args(["text", "file"])))]
    Translate {
        /// Text to translate
        #[arg(short = 'c', long)]
        text: Option<String>,

        /// Path of a markdown file to translate
        #[arg(short = 'f', long)]
        file: Option<String>,

        /// Output file path; file mode defaults to <input>.deepl.md
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Source language code, like EN (the default)
        #[arg(short = 's', long)]
        source_lang: Option<String>,

        /// Target language code, like ZH (the default)
        #[arg(short = 't', long)]
        target_lang: Option<String>,

        /// Proxy API url, like http://127.0.0.1/v2/translate; the free-tier
        /// API is used when unset
        #[arg(short = 'p', long)]
        proxy_api: Option<String>,

        /// DeepL auth key for the free-tier API
        #[arg(short = 'k', long, env = "DEEPL_AUTH_KEY", hide_env_values = true)]
        auth_key: Option<String>,
    },

    /// List supported language codes
    Languages,
}
