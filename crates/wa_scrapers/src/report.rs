use std::path::{Path, PathBuf};

use tracing::{info, warn};
use wa_core::{ExtractionResult, Result};
use wa_inference::prompts::summary_prompt;
use wa_inference::{GenerationOptions, InferenceModel};

/// A written companion summary.
#[derive(Debug, Clone)]
pub struct Summary {
    pub path: PathBuf,
    pub text: String,
}

/// `reports/vr.json` -> `reports/vr_summary.md`.
pub fn summary_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "articles".to_string());
    output.with_file_name(format!("{}_summary.md", stem))
}

pub async fn write_result(path: &Path, result: &ExtractionResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    tokio::fs::write(path, json).await?;
    info!("💾 Saved {} articles to {}", result.total, path.display());
    Ok(())
}

/// Asks the model for an overall report and writes it next to `output`.
/// Any failure is logged and reported as `None`.
pub async fn write_summary(model: &dyn InferenceModel, result: &ExtractionResult, output: &Path) -> Option<Summary> {
    let articles_json = match serde_json::to_string_pretty(&result.articles) {
        Ok(json) => json,
        Err(e) => {
            warn!("⚠️ Could not serialize articles for the summary: {}", e);
            return None;
        }
    };

    let text = match model
        .complete(&summary_prompt(&articles_json), &GenerationOptions::summary())
        .await
    {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            warn!("⚠️ Summary generation returned no text");
            return None;
        }
        Err(e) => {
            warn!("⚠️ Summary generation failed: {}", e);
            return None;
        }
    };

    let path = summary_path(output);
    if let Err(e) = tokio::fs::write(&path, &text).await {
        warn!("⚠️ Failed to write summary to {}: {}", path.display(), e);
        return None;
    }
    info!("📝 Summary saved to {}", path.display());
    Some(Summary { path, text })
}
