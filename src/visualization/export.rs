use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::history::{LossSummary, TrainingHistory};

/// Export a loss history to CSV format
pub fn export_history_csv<P: AsRef<Path>>(history: &TrainingHistory, path: P) -> Result<()> {
    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);

    writeln!(file, "epoch,train_loss,val_loss")?;
    for (epoch, (train, val)) in history
        .train_loss()
        .iter()
        .zip(history.val_loss())
        .enumerate()
    {
        writeln!(file, "{},{},{}", epoch, train, val)?;
    }

    file.flush()?;
    Ok(())
}

/// Export a loss history as Keras-style JSON (`{"loss": [...], "val_loss": [...]}`)
pub fn export_history_json<P: AsRef<Path>>(history: &TrainingHistory, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(history)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Export the best-epoch summary as a two-key JSON mapping
pub fn export_summary_json<P: AsRef<Path>>(summary: &LossSummary, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json)?;
    Ok(())
}
