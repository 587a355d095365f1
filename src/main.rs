use std::path::Path;

use clap::Parser;

use a11y_guard::audit::{Auditor, ComponentType};
use a11y_guard::cli::{AuditArgs, Cli, ColorChoice, Commands, InitArgs, RulesArgs};
use a11y_guard::config::{Config, ConfigLoader, FileConfigLoader};
use a11y_guard::error::A11yGuardError;
use a11y_guard::output::{
    BadgeRenderer, ColorMode, JsonFormatter, MarkdownFormatter, OutputFormat, ReportFormatter,
    TextFormatter,
};
use a11y_guard::rules::RuleId;
use a11y_guard::scanner::{ComponentFilter, DirectoryScanner};
use a11y_guard::{EXIT_BELOW_THRESHOLD, EXIT_CONFIG_ERROR, EXIT_SUCCESS};

/// Fixed component file extension selected by the scanner.
const COMPONENT_EXTENSION: &str = "vue";

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Audit(args) => run_audit(args, &cli),
        Commands::Rules(args) => run_rules(args),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

fn run_audit(args: &AuditArgs, cli: &Cli) -> i32 {
    match run_audit_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_audit_impl(args: &AuditArgs, cli: &Cli) -> a11y_guard::Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args)?;
    config.validate()?;

    // 3. Build the scanner
    let filter = ComponentFilter::new(COMPONENT_EXTENSION, &config.exclude)?;
    let scanner = DirectoryScanner::new(filter);

    // 4. Run the audit
    let verbose = cli.verbose.max(config.verbosity);
    let auditor = Auditor::new(scanner, config.rules.clone())
        .with_allowed_types(config.component_types.clone())
        .with_verbose(verbose);
    let target = if args.path == Path::new(".") {
        config.target.clone()
    } else {
        args.path.clone()
    };
    let report = auditor.audit(&target);

    // 5. Format and write the report
    let format: OutputFormat = config
        .output
        .format
        .parse()
        .map_err(A11yGuardError::Config)?;
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_report(format, &report, color_mode, verbose)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 6. Badge on request
    if let Some(badge_path) = config.output.badge.as_deref() {
        let svg = BadgeRenderer::new().render(report.summary.overall_conformity_percent);
        std::fs::write(badge_path, svg)?;
        if !cli.quiet {
            eprintln!("Badge written to {}", badge_path.display());
        }
    }

    // 7. Map conformity to the exit code; the engine only reports the number
    if !args.warn_only && report.summary.overall_conformity_percent < config.min_conformity {
        if !cli.quiet {
            eprintln!(
                "Overall conformity {:.1}% is below the required {:.1}%",
                report.summary.overall_conformity_percent, config.min_conformity
            );
        }
        return Ok(EXIT_BELOW_THRESHOLD);
    }
    Ok(EXIT_SUCCESS)
}

fn load_config(path: Option<&Path>, no_config: bool) -> a11y_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }
    FileConfigLoader.load(path)
}

fn apply_cli_overrides(config: &mut Config, args: &AuditArgs) -> a11y_guard::Result<()> {
    if let Some(rules) = &args.rules {
        config.rules = rules
            .iter()
            .map(|r| {
                r.parse::<RuleId>()
                    .map_err(|_| A11yGuardError::UnknownRule(r.clone()))
            })
            .collect::<a11y_guard::Result<Vec<_>>>()?;
    }
    if let Some(min_conformity) = args.min_conformity {
        config.min_conformity = min_conformity;
    }
    if let Some(types) = &args.component_types {
        config.component_types = types
            .iter()
            .map(|t| t.parse::<ComponentType>().map_err(A11yGuardError::Config))
            .collect::<a11y_guard::Result<Vec<_>>>()?;
    }
    config.exclude.extend(args.exclude.clone());
    if let Some(format) = args.format {
        config.output.format = match format {
            OutputFormat::Text => "text".to_string(),
            OutputFormat::Json => "json".to_string(),
            OutputFormat::Markdown => "markdown".to_string(),
        };
    }
    if let Some(badge) = &args.badge {
        config.output.badge = Some(badge.clone());
    }
    Ok(())
}

fn format_report(
    format: OutputFormat,
    report: &a11y_guard::audit::AuditResult,
    color_mode: ColorMode,
    verbose: u8,
) -> a11y_guard::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
        OutputFormat::Markdown => MarkdownFormatter::new().format(report),
    }
}

fn write_output(path: Option<&Path>, output: &str, quiet: bool) -> a11y_guard::Result<()> {
    match path {
        Some(file) => {
            std::fs::write(file, output)?;
            if !quiet {
                eprintln!("Report written to {}", file.display());
            }
        }
        None => {
            if !quiet {
                println!("{output}");
            }
        }
    }
    Ok(())
}

fn run_rules(args: &RulesArgs) -> i32 {
    for rule in RuleId::ALL {
        let info = rule.info();
        println!("{} {} ({})", rule.criterion(), info.name, info.slug);
        if args.long {
            println!("    {}", info.long_description);
        } else {
            println!("    {}", info.short_description);
        }
    }
    EXIT_SUCCESS
}

fn run_init(args: &InitArgs) -> i32 {
    if args.output.exists() && !args.force {
        eprintln!(
            "Error: {} already exists (use --force to overwrite)",
            args.output.display()
        );
        return EXIT_CONFIG_ERROR;
    }
    match std::fs::write(&args.output, FileConfigLoader::default_toml()) {
        Ok(()) => {
            println!("Created {}", args.output.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: failed to write config: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}
