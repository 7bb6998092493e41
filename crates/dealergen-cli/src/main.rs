mod logging;
mod output;
mod settings;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand, ValueEnum};
use dealergen_core::{
    Catalog, DATASET_VERSION, Error as CoreError, ViewKind, validate_dataset,
};
use dealergen_generate::generators::{DEFAULT_SLUG_WORDS, GeneratorRegistry, SlugGenerator};
use dealergen_generate::{
    CountParams, DatasetEngine, GenerationError, UniqueSampler, VinScope, default_catalog,
    generate_counted, load_catalog_file,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use settings::{DealergenSettings, LogFormat, SettingsError, load_settings, save_settings};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "dealergen", version, about = "Synthetic dealer-network datasets")]
struct Cli {
    /// TOML settings file.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Catalog JSON to use instead of the embedded one.
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,
    /// Log filter directive, e.g. `debug` or `dealergen_generate=trace`.
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,
    /// Append logs to this file instead of stderr.
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a dealer network with its summary.
    Solution(SolutionArgs),
    /// Standard (non-exotic) catalog entries.
    Cars(CatalogArgs),
    /// Exotic catalog entries.
    Exotics(CatalogArgs),
    /// Distinct groups of a catalog view.
    Groups(ViewArgs),
    /// Distinct makes of a catalog view.
    Makes(ViewArgs),
    /// Exotic/standard counts over the vehicles of a generated network.
    Stats(StatsArgs),
    /// Palette colors.
    Colors(CountArgs),
    /// 40-character hex hashes.
    Hash(CountArgs),
    /// Hyphen-joined lorem slugs.
    ///
    /// `--count` is the number of slugs, like every counted request. For a
    /// single slug of N words (the GraphQL `slug(count: N)` shape) omit
    /// `--count` and pass `--words N`.
    Slug(SlugArgs),
    /// Version 4 UUIDs.
    Uuid(CountArgs),
    /// Write the effective settings as TOML.
    InitConfig(InitConfigArgs),
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Write JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Single-line JSON.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// Keep entries whose group contains this text.
    #[arg(long)]
    group: Option<String>,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct SolutionArgs {
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum)]
    view: Option<ViewArg>,
    #[arg(long, value_enum)]
    vin_scope: Option<VinScopeArg>,
    /// Check the dataset invariants before printing.
    #[arg(long, default_value_t = false)]
    validate: bool,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct ViewArgs {
    #[arg(long, value_enum, default_value_t = ViewArg::Standard)]
    view: ViewArg,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct StatsArgs {
    /// Count the raw catalog entries instead of a generated network.
    #[arg(long, default_value_t = false)]
    catalog_only: bool,
    #[arg(long)]
    seed: Option<u64>,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct CountArgs {
    /// Number of distinct values; omit for a single bare value.
    #[arg(long, allow_hyphen_values = true)]
    count: Option<String>,
    #[arg(long)]
    seed: Option<u64>,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct SlugArgs {
    /// Lorem words per slug.
    #[arg(long, default_value_t = DEFAULT_SLUG_WORDS)]
    words: usize,
    #[command(flatten)]
    count: CountArgs,
}

#[derive(Args, Debug)]
struct InitConfigArgs {
    #[arg(long, default_value = "dealergen.toml")]
    out: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ViewArg {
    Standard,
    Exotic,
    All,
}

impl From<ViewArg> for ViewKind {
    fn from(value: ViewArg) -> Self {
        match value {
            ViewArg::Standard => ViewKind::Standard,
            ViewArg::Exotic => ViewKind::Exotic,
            ViewArg::All => ViewKind::All,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VinScopeArg {
    Dealer,
    Network,
}

impl From<VinScopeArg> for VinScope {
    fn from(value: VinScopeArg) -> Self {
        match value {
            VinScopeArg::Dealer => VinScope::Dealer,
            VinScopeArg::Network => VinScope::Network,
        }
    }
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        settings.log.level = level;
    }
    if let Some(format) = cli.log_format {
        settings.log.format = format;
    }
    if cli.log_file.is_some() {
        settings.log.file = cli.log_file;
    }
    if cli.catalog.is_some() {
        settings.catalog = cli.catalog;
    }

    if let Command::InitConfig(args) = &cli.command {
        save_settings(&args.out, &settings)?;
        return Ok(());
    }

    logging::init_logging(&settings.log)?;
    tracing::debug!(
        event = "cli_started",
        dataset_version = DATASET_VERSION,
        config = ?cli.config
    );

    let catalog = resolve_catalog(&settings)?;
    run(cli.command, settings, catalog)
}

fn run(
    command: Command,
    settings: DealergenSettings,
    catalog: Arc<Catalog>,
) -> Result<(), CliError> {
    match command {
        Command::Solution(args) => {
            let mut options = settings.generate.clone();
            if args.seed.is_some() {
                options.seed = args.seed;
            }
            if let Some(view) = args.view {
                options.view = view.into();
            }
            if let Some(scope) = args.vin_scope {
                options.vin_scope = scope.into();
            }

            let engine = DatasetEngine::new(catalog, options)?.with_palette(settings.palette)?;
            let dataset = engine.build_dataset()?;
            if args.validate {
                validate_dataset(&dataset)?;
                tracing::info!(event = "dataset_validated", id = dataset.id);
            }
            emit(&dataset, &args.output)
        }
        Command::Cars(args) => list_entries(&catalog, ViewKind::Standard, &args),
        Command::Exotics(args) => list_entries(&catalog, ViewKind::Exotic, &args),
        Command::Groups(args) => emit(&catalog.view(args.view.into()).groups, &args.output),
        Command::Makes(args) => emit(&catalog.view(args.view.into()).makes, &args.output),
        Command::Stats(args) => {
            let mut options = settings.generate.clone();
            if args.seed.is_some() {
                options.seed = args.seed;
            }
            let engine = DatasetEngine::new(catalog, options)?.with_palette(settings.palette)?;
            let stats = if args.catalog_only {
                engine.catalog_stats()
            } else {
                engine.network_stats(&mut seeded_rng(engine.options().seed))?
            };
            emit(&stats, &args.output)
        }
        Command::Colors(args) => {
            let registry = GeneratorRegistry::with_palette(&settings.palette);
            counted(&registry, "color", &args, &settings)
        }
        Command::Hash(args) => counted(&GeneratorRegistry::new(), "hash", &args, &settings),
        Command::Uuid(args) => counted(&GeneratorRegistry::new(), "uuid", &args, &settings),
        Command::Slug(args) => {
            let mut registry = GeneratorRegistry::new();
            registry.register_generator(Box::new(SlugGenerator::new(args.words)));
            counted(&registry, "slug", &args.count, &settings)
        }
        Command::InitConfig(_) => Ok(()),
    }
}

fn counted(
    registry: &GeneratorRegistry,
    id: &str,
    args: &CountArgs,
    settings: &DealergenSettings,
) -> Result<(), CliError> {
    let params = CountParams::parse(args.count.as_deref())?;
    let generator = registry.require(id)?;
    let sampler = UniqueSampler::new(settings.generate.retry_multiplier);
    let mut rng = seeded_rng(args.seed.or(settings.generate.seed));

    let values = generate_counted(generator, &params, &sampler, &mut rng)?;
    tracing::debug!(
        event = "counted_generated",
        generator = id,
        query = %params.to_query(),
        values = values.len()
    );
    emit(&values, &args.output)
}

fn resolve_catalog(settings: &DealergenSettings) -> Result<Arc<Catalog>, CliError> {
    let catalog = match &settings.catalog {
        Some(path) => Arc::new(load_catalog_file(path)?),
        None => default_catalog()?,
    };
    let catalog = match &settings.classifier {
        Some(classifier) => Arc::new(catalog.as_ref().clone().with_classifier(classifier.clone())),
        None => catalog,
    };
    let source = settings
        .catalog
        .as_deref()
        .map_or_else(|| "embedded".to_string(), |path| path.display().to_string());
    tracing::debug!(event = "catalog_loaded", source = %source, entries = catalog.len());
    Ok(catalog)
}

fn list_entries(catalog: &Catalog, kind: ViewKind, args: &CatalogArgs) -> Result<(), CliError> {
    let view = catalog.view(kind);
    match args.group.as_deref() {
        Some(fragment) => emit(&view.in_group(fragment), &args.output),
        None => emit(&view.cars, &args.output),
    }
}

fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    }
}

fn emit<T: Serialize>(value: &T, args: &OutputArgs) -> Result<(), CliError> {
    output::emit_json(value, args.out.as_deref(), args.compact)?;
    if let Some(path) = args.out.as_deref() {
        log_written(path);
    }
    Ok(())
}

fn log_written(path: &Path) {
    tracing::info!(event = "output_written", path = %path.display());
}
