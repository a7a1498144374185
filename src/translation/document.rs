//! Segment-by-segment document translation.
//!
//! Consumes the segments produced by [`crate::markdown::segment`] in order
//! and yields one output chunk per segment, newline-terminated and ready to
//! append to the output file. Code blocks and image lines pass through
//! untouched; only plain text lines reach the backend.

use std::time::Duration;

use futures_util::Stream;
use rand::Rng;

use crate::markdown::{Segment, SegmentKind};
use crate::ui::Style;
use crate::{status, warn};

use super::backend::{Translate, TranslationRequest};

/// Lines starting with a bare image reference are copied through verbatim.
const IMAGE_PREFIX: &str = "![](";

/// Default pacing unit: one draw step is one second of sleep.
const PACE_UNIT: Duration = Duration::from_secs(1);

/// Translates a segmented document, emitting output chunks in source order.
///
/// Each text line's translation completes before the next line's call
/// begins; the stream is finite and consumed once.
pub struct DocumentTranslator<B> {
    backend: B,
    source_lang: String,
    target_lang: String,
    pace_unit: Duration,
}

impl<B: Translate> DocumentTranslator<B> {
    pub fn new(backend: B, source_lang: &str, target_lang: &str) -> Self {
        Self {
            backend,
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
            pace_unit: PACE_UNIT,
        }
    }

    /// Replaces the pacing unit. Tests run with `Duration::ZERO`.
    pub fn with_pace_unit(mut self, pace_unit: Duration) -> Self {
        self.pace_unit = pace_unit;
        self
    }

    /// Lazily turns segments into newline-terminated output chunks.
    ///
    /// A failed backend call falls back to the original line and the run
    /// continues; the failure is reported on stderr.
    pub fn translate_stream(self, segments: Vec<Segment>) -> impl Stream<Item = String> {
        async_stream::stream! {
            for segment in segments {
                match segment.kind {
                    SegmentKind::Code => {
                        yield format!("{}\n", segment.lines.join("\n"));
                    }
                    SegmentKind::Text => {
                        let line = segment.lines.into_iter().next().unwrap_or_default();
                        if line.is_empty() {
                            yield "\n".to_string();
                        } else if line.starts_with(IMAGE_PREFIX) {
                            yield format!("{line}\n");
                        } else {
                            yield self.translate_line(&line).await;
                        }
                    }
                }
            }
        }
    }

    /// Translates one text line, falling back to the original on error, then
    /// pauses before the next backend call.
    async fn translate_line(&self, line: &str) -> String {
        let request = TranslationRequest {
            text: line.to_string(),
            source_lang: self.source_lang.clone(),
            target_lang: self.target_lang.clone(),
        };

        let chunk = match self.backend.translate(&request).await {
            Ok(translated) => {
                status!("source text: {line}, target text: {translated}");
                format!("{translated}\n")
            }
            Err(err) => {
                warn!("{} {err:#}", Style::warning("translate error:"));
                format!("{line}\n")
            }
        };

        self.pace().await;
        chunk
    }

    /// Rate-limit pause after a backend call, success or failure.
    async fn pace(&self) {
        if self.pace_unit.is_zero() {
            return;
        }
        let steps = pace_steps(rand::rng().random_range(0..20));
        status!("random sleep {steps}s");
        tokio::time::sleep(self.pace_unit * steps as u32).await;
    }
}

/// Maps a raw 0..20 draw onto the effective delay steps: draws below 5 are
/// shifted up by 5, so the result is always in 5..20 and 5..10 is twice as
/// likely as 10..20. The skew is intentional and pinned by tests.
fn pace_steps(raw: u64) -> u64 {
    if raw < 5 { raw + 5 } else { raw }
}
