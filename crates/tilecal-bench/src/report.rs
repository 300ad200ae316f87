use std::path::{Path, PathBuf};

use tilecal_sim::EventOutput;

/// Summary of a processed run.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RunSummary {
    pub run: u32,
    pub events: usize,
    pub workers: usize,
    pub mean_signal: f64,
    pub rms_signal: f64,
    pub mean_leakage: f64,
    pub mean_energy_deposit: f64,
    pub discarded_steps: usize,
    pub output: Option<PathBuf>,
}

/// Reduce event outputs to run statistics. RMS is taken about the mean.
pub fn summarize(run: u32, workers: usize, outputs: &[EventOutput]) -> RunSummary {
    let n = outputs.len();
    let mean = |f: &dyn Fn(&EventOutput) -> f64| {
        if n == 0 {
            0.0
        } else {
            outputs.iter().map(f).sum::<f64>() / n as f64
        }
    };

    let mean_signal = mean(&|o| o.row.signal_sum);
    let rms_signal = mean(&|o| (o.row.signal_sum - mean_signal).powi(2)).sqrt();

    RunSummary {
        run,
        events: n,
        workers,
        mean_signal,
        rms_signal,
        mean_leakage: mean(&|o| o.row.leakage),
        mean_energy_deposit: mean(&|o| o.row.energy_deposit),
        discarded_steps: outputs.iter().map(|o| o.tally.outside_window).sum(),
        output: None,
    }
}

/// Format a run summary as a markdown table.
pub fn format_markdown(summary: &RunSummary) -> String {
    let mut out = String::new();
    out.push_str("| Run | Events | Workers | Mean SdepSum | RMS SdepSum | Mean ELeak (MeV) | Mean EDep (MeV) | Discarded steps |\n");
    out.push_str("|-----|--------|---------|--------------|-------------|------------------|-----------------|-----------------|\n");
    out.push_str(&format!(
        "| {} | {} | {} | {:.2} | {:.2} | {:.2} | {:.2} | {} |\n",
        summary.run,
        summary.events,
        summary.workers,
        summary.mean_signal,
        summary.rms_signal,
        summary.mean_leakage,
        summary.mean_energy_deposit,
        summary.discarded_steps,
    ));
    if let Some(path) = &summary.output {
        out.push_str(&format!("\nRows written to `{}`\n", path.display()));
    }
    out
}

/// Save a run summary as pretty JSON.
pub fn save_summary(path: &Path, summary: &RunSummary) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(summary).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

/// Name of the summary file of a run.
pub fn summary_file_name(run: u32) -> String {
    format!("TileCalTBsummary_Run{run}.json")
}
