use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mobile_assets::batch::{self, Mode, RunSummary};
use mobile_assets::config::Config;
use mobile_assets::layout::ProjectLayout;
use mobile_assets::targets::{self, ColorMode};

#[derive(Parser)]
#[command(name = "mobile-assets")]
#[command(about = "Generate Android and iOS launcher icons and splash screens from one logo", long_about = None)]
struct Cli {
    /// Root of the React Native project (contains assets/, android/ and ios/)
    #[arg(short, long, global = true, default_value = ".")]
    project_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate launcher icons and the Android adaptive icon layers
    Icons,
    /// Generate splash screens
    Splash,
    /// Copy generated Android splash screens into res/drawable-*
    SyncSplash,
    /// Copy assets/bootsplash logos into res/drawable-*/bootsplash_logo.png
    SyncBootsplash,
    /// Generate icons and splash screens, then run both Android sync steps
    All,
    /// Print every target that would be generated
    List,
    /// Write a mobile-assets.yaml with the default settings
    InitConfig {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let project = ProjectLayout::new(cli.project_dir);

    match cli.command {
        Commands::Icons => run_modes(&project, &[Mode::Icons]),
        Commands::Splash => run_modes(&project, &[Mode::Splash]),
        Commands::SyncSplash => run_modes(&project, &[Mode::SyncSplash]),
        Commands::SyncBootsplash => run_modes(&project, &[Mode::SyncBootsplash]),
        Commands::All => run_modes(
            &project,
            &[Mode::Icons, Mode::Splash, Mode::SyncSplash, Mode::SyncBootsplash],
        ),
        Commands::List => {
            list_command(&project);
            Ok(())
        }
        Commands::InitConfig { force } => init_config_command(&project, force),
    }
}

fn mode_title(mode: Mode) -> &'static str {
    match mode {
        Mode::Icons => "🎨 Generating app icons",
        Mode::Splash => "🖼️  Generating splash screens",
        Mode::SyncSplash => "🔄 Updating Android splash screens",
        Mode::SyncBootsplash => "🔄 Updating Android bootsplash logos",
    }
}

fn run_modes(project: &ProjectLayout, modes: &[Mode]) -> Result<()> {
    let config = Config::load_or_default(&project.config_file())?;

    let mut total = RunSummary::default();
    for &mode in modes {
        println!();
        println!("{}...", mode_title(mode));

        let summary = batch::run(mode, project, &config)
            .with_context(|| format!("Failed to run {:?}", mode))?;

        println!("📊 Success: {}", summary);
        total.merge(summary);
    }

    println!();
    println!("{}", "=".repeat(60));
    if total.is_complete() {
        println!("✨ Asset generation complete! ({})", total);
    } else {
        println!("⚠️  Asset generation finished with {} failure(s) ({})", total.failed(), total);
        for failure in &total.failures {
            println!("   ✗ {}: {}", failure.name, failure.error);
        }
    }
    println!("{}", "=".repeat(60));

    Ok(())
}

fn list_command(project: &ProjectLayout) {
    println!("Source logo: {}", project.source_logo().display());
    println!();

    println!("Icons:");
    for target in targets::icon_targets() {
        let alpha = match target.color_mode {
            ColorMode::PreserveAlpha => "rgba",
            ColorMode::FlattenOnWhite => "rgb",
        };
        println!(
            "  {:8} {:4}x{:<4} {:4}  {}",
            target.platform,
            target.size,
            target.size,
            alpha,
            target.output_path(project).display()
        );
    }
    for layer in targets::ADAPTIVE_LAYERS {
        println!("  {:8} adaptive    {}", "Android", layer.output_path(project).display());
    }
    println!();

    println!("Splash screens:");
    for target in targets::splash_targets() {
        println!(
            "  {:8} {:4}x{:<4} logo {:3}  {}",
            target.platform,
            target.width,
            target.height,
            target.logo_size,
            target.output_path(project).display()
        );
    }
    println!();

    println!("Bootsplash logos:");
    for logo in targets::BOOTSPLASH_LOGOS {
        println!(
            "  {} -> {}",
            logo.source_path(project).display(),
            logo.installed_path(project).display()
        );
    }
}

fn init_config_command(project: &ProjectLayout, force: bool) -> Result<()> {
    let path = project.config_file();
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    Config::default().save(&path)?;
    println!("Created default config at: {}", path.display());
    Ok(())
}
