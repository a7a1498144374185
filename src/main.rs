use anyhow::Result;
use clap::Parser;

use dlt_cli::cli::commands::translate;
use dlt_cli::cli::{Args, Command};
use dlt_cli::output::{self, OutputConfig};
use dlt_cli::translation::print_languages;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        ..OutputConfig::default()
    });

    match args.command {
        Command::Languages => {
            print_languages();
        }
        Command::Translate {
            text,
            file,
            output,
            source_lang,
            target_lang,
            proxy_api,
            auth_key,
        } => {
            let options = translate::TranslateOptions {
                text,
                file,
                output,
                source_lang,
                target_lang,
                proxy_api,
                auth_key,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
