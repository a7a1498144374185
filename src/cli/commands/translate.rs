use std::path::Path;

use anyhow::{Context, Result};
use futures_util::{StreamExt, pin_mut};

use crate::config::{self, ResolveOptions, ResolvedConfig};
use crate::fs::atomic_write;
use crate::input::InputReader;
use crate::markdown;
use crate::sink::Sink;
use crate::status;
use crate::translation::{
    Backend, DocumentTranslator, Translate, TranslationRequest, validate_language,
};
use crate::ui::Spinner;

/// CLI arguments of the translate subcommand, untangled from clap.
pub struct TranslateOptions {
    pub text: Option<String>,
    pub file: Option<String>,
    pub output: Option<String>,
    pub source_lang: Option<String>,
    pub target_lang: Option<String>,
    pub proxy_api: Option<String>,
    pub auth_key: Option<String>,
}

/// Entry point of the translate subcommand. Resolves configuration, selects
/// the backend, then dispatches to text or file mode.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config_file = config::load_config_file()?;
    let resolved = config::resolve_config(
        &ResolveOptions {
            source_lang: options.source_lang,
            target_lang: options.target_lang,
            auth_key: options.auth_key,
            proxy_api: options.proxy_api,
        },
        &config_file,
    );

    validate_language(&resolved.source_lang)?;
    validate_language(&resolved.target_lang)?;

    let backend = Backend::select(resolved.proxy_api.as_deref(), &resolved.auth_key)?;

    if let Some(text) = options.text {
        translate_text(&text, &backend, &resolved, options.output.as_deref()).await
    } else if let Some(file) = options.file {
        translate_file(&file, backend, &resolved, options.output.as_deref()).await
    } else {
        // clap's input group guarantees one of the two is present
        anyhow::bail!("either --text or --file must be given")
    }
}

/// Translates one inline string. The result goes to stdout, or replaces the
/// output file when one is given. A backend failure here is fatal.
async fn translate_text<B: Translate>(
    text: &str,
    backend: &B,
    resolved: &ResolvedConfig,
    output: Option<&str>,
) -> Result<()> {
    let request = TranslationRequest {
        text: text.to_string(),
        source_lang: resolved.source_lang.clone(),
        target_lang: resolved.target_lang.clone(),
    };

    let spinner = Spinner::new("Translating...");
    let result = backend.translate(&request).await;
    spinner.stop();

    let translated = result.context("translate error")?;
    match output {
        Some(path) => atomic_write(path, &translated)?,
        None => println!("{translated}"),
    }

    Ok(())
}

/// Translates a markdown file segment by segment, appending each finished
/// chunk to the output file as it is produced. Per-line backend failures
/// fall back to the original line; sink I/O failures abort the run.
async fn translate_file<B: Translate>(
    file: &str,
    backend: B,
    resolved: &ResolvedConfig,
    output: Option<&str>,
) -> Result<()> {
    let content = InputReader::read_file(file)?;
    let segments = markdown::segment(&content);

    let output_path = output.map_or_else(|| default_output_path(file), ToString::to_string);
    status!("begin to write result to {output_path}");

    let sink = Sink::open(Path::new(&output_path)).await?;
    let (tx, writer) = sink.spawn();

    let translator =
        DocumentTranslator::new(backend, &resolved.source_lang, &resolved.target_lang);
    let stream = translator.translate_stream(segments);
    pin_mut!(stream);

    while let Some(chunk) = stream.next().await {
        if tx.send(chunk).await.is_err() {
            // writer task died; its I/O error surfaces on join below
            break;
        }
    }
    drop(tx);

    let written = writer.await.context("writer task failed")??;
    status!("translator finished, {written} bytes written to {output_path}");

    Ok(())
}

/// Derives the default output path from the input path: a trailing `.md`
/// becomes `.deepl.md`, anything else gets `.deepl.md` appended.
fn default_output_path(input: &str) -> String {
    input.strip_suffix(".md").map_or_else(
        || format!("{input}.deepl.md"),
        |stem| format!("{stem}.deepl.md"),
    )
}
