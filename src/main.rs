use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

use resumatch::models::Feedback;
use resumatch::{
    BatchResult, BatchRunner, Config, Error, FileTextSource, JdSource, StrategyKind,
};

#[derive(Parser, Debug)]
#[command(name = "resumatch")]
#[command(version = "0.1.0")]
#[command(about = "Score candidate resumes against a job description")]
struct Args {
    /// Path to the job description document
    #[arg(short, long, conflicts_with = "jd_text")]
    jd: Option<PathBuf>,

    /// Raw job description text, as an alternative to --jd
    #[arg(long)]
    jd_text: Option<String>,

    /// Resume files to score
    #[arg(value_name = "RESUME")]
    resumes: Vec<PathBuf>,

    /// Directory of resumes to score (scanned recursively)
    #[arg(short = 'd', long)]
    resume_dir: Option<PathBuf>,

    /// Scoring strategy (auto, weighted, overlap, tfidf)
    #[arg(short, long, default_value = "auto")]
    strategy: String,

    /// Output format (text, json, csv)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("resumatch=info".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env();

    let jd = resolve_jd_source(&args)?;
    let resume_paths = collect_resume_paths(&args, &config)?;
    let strategy = resolve_strategy(&args, &config)?;

    let runner = BatchRunner::new(FileTextSource)
        .with_strategy(strategy)
        .with_progress(true);

    tracing::info!("Scoring {} candidate files", resume_paths.len());
    let result = match runner.run(&jd, &resume_paths) {
        Ok(result) => result,
        Err(e @ Error::EmptyBatch { .. }) | Err(e @ Error::MalformedJd(_)) => {
            // Distinct user-visible outcomes, not stack traces.
            eprintln!("{e}");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    if !result.skipped.is_empty() {
        tracing::warn!(
            "{} candidate file(s) skipped as unreadable",
            result.skipped.len()
        );
    }

    output_result(&result, &args, &config)?;
    Ok(())
}

fn resolve_jd_source(args: &Args) -> anyhow::Result<JdSource> {
    match (&args.jd, &args.jd_text) {
        (Some(path), _) => Ok(JdSource::Path(path.clone())),
        (None, Some(text)) => Ok(JdSource::Text(text.clone())),
        (None, None) => anyhow::bail!("either --jd or --jd-text is required"),
    }
}

/// Positional paths keep their given order; directory entries are sorted
/// by path so discovery order (and therefore tie order) is deterministic.
fn collect_resume_paths(args: &Args, config: &Config) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = args.resumes.clone();

    let dir = args
        .resume_dir
        .clone()
        .or_else(|| config.resume_dir.as_ref().map(PathBuf::from));

    if let Some(dir) = dir {
        let mut found: Vec<PathBuf> = WalkDir::new(&dir)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .collect();
        found.sort();
        paths.extend(found);
    }

    Ok(paths)
}

fn resolve_strategy(args: &Args, config: &Config) -> anyhow::Result<Option<StrategyKind>> {
    if args.strategy == "auto" {
        return Ok(config.strategy);
    }
    args.strategy
        .parse()
        .map(Some)
        .map_err(|e: String| anyhow::anyhow!(e))
}

fn output_result(result: &BatchResult, args: &Args, config: &Config) -> anyhow::Result<()> {
    let output = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(result)?,
        "csv" => resumatch::output::to_csv(result)?,
        _ => format_text(result),
    };

    let path = args
        .output
        .clone()
        .or_else(|| config.output_path.as_ref().map(PathBuf::from));

    if let Some(path) = path {
        std::fs::write(&path, &output)?;
        tracing::info!("Output written to: {}", path.display());
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_text(result: &BatchResult) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n=== Resume Match Results ({} strategy) ===\n\n",
        result.strategy
    ));

    if let Some(ref criteria) = result.criteria {
        output.push_str("JD criteria:\n");
        if !criteria.skills.is_empty() {
            output.push_str(&format!("  Skills: {}\n", criteria.skills.join(", ")));
        }
        if !criteria.education.is_empty() {
            output.push_str(&format!("  Education: {}\n", criteria.education));
        }
        if criteria.experience_years > 0 {
            output.push_str(&format!("  Experience: {} years\n", criteria.experience_years));
        }
        if !criteria.keywords.is_empty() {
            output.push_str(&format!("  Keywords: {}\n", criteria.keywords.join(", ")));
        }
        output.push('\n');
    }

    for (rank, row) in result.rows.iter().enumerate() {
        output.push_str(&format!(
            "{}. {}: {:.2} ({})\n",
            rank + 1,
            row.filename,
            row.score,
            row.verdict
        ));

        match &row.feedback {
            Feedback::Breakdown(report) => {
                for (name, verdict) in report.categories() {
                    let mark = if verdict.matched { "+" } else { "-" };
                    output.push_str(&format!("   {} {}: {}\n", mark, name, verdict.reason));
                }
            }
            Feedback::LineOverlap { matched, unmatched } => {
                output.push_str(&format!(
                    "   {}/{} JD lines found\n",
                    matched.len(),
                    matched.len() + unmatched.len()
                ));
                for line in unmatched.iter().take(5) {
                    output.push_str(&format!("   - missing: {}\n", line));
                }
            }
            Feedback::Similarity => {
                output.push_str("   holistic TF-IDF similarity, no category breakdown\n");
            }
        }
    }

    if !result.skipped.is_empty() {
        output.push_str("\nSkipped (unreadable):\n");
        for skip in &result.skipped {
            output.push_str(&format!("  - {}: {}\n", skip.filename, skip.reason));
        }
    }

    output.push_str(&format!(
        "\nScored on: {}\n",
        result.scored_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
