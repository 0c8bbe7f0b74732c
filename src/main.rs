// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::env;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use dagwood_pipeline::config::{load_config, PipelineBuilder};
use dagwood_pipeline::traits::ModuleInputs;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <pipeline.yaml> [pipeline2.yaml ...] <input_text>", args[0]);
        eprintln!("Example: {} pipelines/shout.yaml \"hello world\"", args[0]);
        eprintln!("Log level is read from RUST_LOG, e.g. RUST_LOG=debug");
        std::process::exit(1);
    }

    // The last argument is the input text; everything between is a pipeline file
    let input_text = &args[args.len() - 1];
    let config_files = &args[1..args.len() - 1];

    let mut failures = 0;
    for (i, config_file) in config_files.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(80));
        }

        if let Err(e) = run_single_config(config_file, input_text).await {
            eprintln!("❌ Failed to execute {}: {:#}", config_file, e);
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{} of {} pipelines failed", failures, config_files.len());
    }
    Ok(())
}

/// Load, build and run one pipeline description against the input text.
async fn run_single_config(config_file: &str, input_text: &str) -> Result<()> {
    let config = load_config(config_file)
        .with_context(|| format!("loading pipeline description {}", config_file))?;
    let pipeline = PipelineBuilder::from_config(&config)
        .with_context(|| format!("building pipeline from {}", config_file))?;

    let input_keys = pipeline.try_input_keys()?;
    let Some(slot) = input_keys.single() else {
        bail!(
            "the root module must declare exactly one input slot to take text from the command line, found {}",
            input_keys.len()
        );
    };

    println!("📋 Pipeline: {}", config_file);
    println!("   Modules: {}, root: {}", pipeline.modules().len(), pipeline.root_keys().join(", "));

    let inputs = ModuleInputs::from([(slot.clone(), Value::String(input_text.to_string()))]);
    let start = Instant::now();
    let result = pipeline.run(inputs).await?;
    let elapsed = start.elapsed();

    match result {
        Value::String(text) => println!("✅ Result: {}", text),
        other => println!("✅ Result:\n{}", serde_json::to_string_pretty(&other)?),
    }
    println!("⏱️  Completed in {:.2?}", elapsed);

    Ok(())
}
