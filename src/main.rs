mod cli;
mod config;

use cli::Args;
use config::ConfigFile;
use sbom_graph::adapters::outbound::console::StderrProgressReporter;
use sbom_graph::adapters::outbound::filesystem::FileSystemReader;
use sbom_graph::adapters::outbound::generators::SbomJsonGenerator;
use sbom_graph::application::dto::{OutputFormat, VisualizationRequest};
use sbom_graph::application::factories::{ExporterFactory, PresenterFactory, PresenterType};
use sbom_graph::application::use_cases::VisualizeSbomUseCase;
use sbom_graph::graph_engine::domain::ExportOptions;
use sbom_graph::ports::outbound::{GeneratorConfig, ProgressReporter};
use sbom_graph::shared::error::{ExitCode, SbomError};
use sbom_graph::shared::Result;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(exit_code_for(&e).as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with code 2 on usage errors)
    let args = Args::parse_args();

    // Load config file: explicit path or auto-discovery
    let config = match &args.config {
        Some(path) => {
            let loaded = config::load_config_from_path(path)?;
            if !args.quiet {
                eprintln!("📄 Loaded config from: {}", path.display());
            }
            loaded
        }
        None => {
            let cwd = std::env::current_dir()?;
            config::discover_config(&cwd)?.unwrap_or_default()
        }
    };

    let format = resolve_format(&args, &config)?;
    let options = build_export_options(&args, &config);
    let request = build_request(&args, &config)?;

    // Create adapters (Dependency Injection)
    let progress_reporter = reporter_for(&args);
    let use_case = VisualizeSbomUseCase::new(
        FileSystemReader::new(),
        SbomJsonGenerator::new(),
        reporter_for(&args),
    );

    // Execute use case
    let response = use_case.execute(request)?;

    progress_reporter.report(ExporterFactory::progress_message(format));
    let exporter = ExporterFactory::create(format);
    let document = exporter.export(&response.forest, &response.components, &options)?;

    let presenter = PresenterFactory::create(PresenterType::for_output(args.output.clone()));
    presenter.present(&document)?;

    progress_reporter.report_completion(&format!(
        "🎉 Exported {} component(s) as {}",
        response.statistics.total, format
    ));
    Ok(())
}

fn reporter_for(args: &Args) -> StderrProgressReporter {
    if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    }
}

/// CLI flag first, then config file, then HTML
fn resolve_format(args: &Args, config: &ConfigFile) -> Result<OutputFormat> {
    if let Some(format) = args.format {
        return Ok(format);
    }
    match &config.format {
        Some(value) => value.parse::<OutputFormat>().map_err(|message: String| {
            SbomError::Validation {
                message: format!("config field 'format': {}", message),
            }
            .into()
        }),
        None => Ok(OutputFormat::default()),
    }
}

/// CLI `--no-*` flags switch sections off regardless of the config file
fn build_export_options(args: &Args, config: &ConfigFile) -> ExportOptions {
    let mut options = ExportOptions::new()
        .include_metadata(!args.no_metadata && config.include_metadata.unwrap_or(true))
        .include_legend(!args.no_legend && config.include_legend.unwrap_or(true))
        .include_statistics(!args.no_statistics && config.include_statistics.unwrap_or(true))
        .matrix_mode(args.matrix || config.matrix_mode.unwrap_or(false));

    if let Some(title) = args.title.as_ref().or(config.title.as_ref()) {
        options = options.title(title.as_str());
    }
    if let Some(description) = args.description.as_ref().or(config.description.as_ref()) {
        options = options.description(description.as_str());
    }
    options
}

fn build_request(args: &Args, config: &ConfigFile) -> Result<VisualizationRequest> {
    // Config patterns first, then CLI patterns, without duplicates
    let mut exclude_patterns: Vec<String> = Vec::new();
    let config_patterns = config.exclude_components.iter().flatten();
    for pattern in config_patterns.chain(args.exclude.iter()) {
        if !exclude_patterns.contains(pattern) {
            exclude_patterns.push(pattern.clone());
        }
    }

    let generator_config = GeneratorConfig {
        include_dev_dependencies: args.include_dev,
        include_optional_dependencies: args.include_optional,
        ..GeneratorConfig::default()
    };

    VisualizationRequest::builder()
        .sources(args.inputs.iter().cloned())
        .root(args.root.clone().or_else(|| config.root.clone()))
        .exclude_patterns(exclude_patterns)
        .types(args.types.clone())
        .risk_levels(args.risk_levels.clone())
        .search(args.search.clone())
        .vulnerable_only(args.vulnerable_only)
        .generator_config(generator_config)
        .layout(config.layout_config())
        .build()
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<SbomError>() {
        Some(SbomError::Validation { .. }) => ExitCode::InvalidArguments,
        _ => ExitCode::ApplicationError,
    }
}
