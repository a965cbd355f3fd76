mod cli;

use markcut::{config, loader, pipeline::CutExecutor, planner, report};
use markcut_av::{tools, Ffmpeg};

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "markcut=trace,markcut_av=trace,markcut_common=debug".to_string()
        } else {
            "markcut=info,markcut_av=info".to_string()
        }
    });

    // stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let mut config = config::load_config_or_default(cli.config.as_deref())?;

    // CLI flags override the config file
    if let Some(output) = cli.output {
        config.output.output = output;
    }
    if let Some(jobs) = cli.jobs {
        config.pipeline.jobs = jobs;
    }
    if let Some(ffmpeg) = cli.ffmpeg {
        config.tools.ffmpeg_path = Some(ffmpeg);
    }
    if cli.overwrite {
        config.tools.overwrite = true;
    }
    config::validate_config(&config)?;

    let boundaries = loader::load(&cli.csv, cli.delay)
        .with_context(|| format!("Failed to load timestamps from {:?}", cli.csv))?;
    let plan = planner::plan_with(&boundaries, &config.output.chunk_naming())
        .with_context(|| format!("Failed to plan cuts from {:?}", cli.csv))?;

    if cli.dry_run {
        tracing::info!("[DRY RUN] {} chunks planned, nothing will be written", plan.len());
        return print_report(&plan, cli.json);
    }

    let ffmpeg = Ffmpeg::discover(&config.tools)?;
    let info = tools::describe(ffmpeg.path());
    tracing::debug!(
        "ffmpeg: {} ({})",
        info.path.display(),
        info.version.as_deref().unwrap_or("unknown version")
    );

    let executor = CutExecutor::new(&ffmpeg, config.output.workspace()).jobs(config.pipeline.jobs);

    match cli.chunk {
        Some(index) => {
            let summary = executor
                .execute_chunk(&cli.input, &plan, index)
                .with_context(|| format!("Failed to render chunk {index}"))?;
            for chunk in &summary.chunks {
                tracing::info!("{} is rendered", chunk.display());
            }
            Ok(())
        }
        None => {
            let summary = executor
                .execute(&cli.input, &plan)
                .with_context(|| format!("Failed to cut {:?}", cli.input))?;
            if let Some(output) = &summary.output {
                tracing::info!("{} is ready", output.display());
            }
            print_report(&plan, cli.json)
        }
    }
}

fn print_report(plan: &planner::CutPlan, json: bool) -> Result<()> {
    if json {
        println!("{}", report::render_json(plan)?);
    } else {
        print!("{}", report::render_text(plan));
    }
    Ok(())
}
