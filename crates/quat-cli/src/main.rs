mod config;

use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quat_core::{
    Color, HELP, Layout, Module, ModuleId, PressOutcome, Role, SLOT_COUNT, SubmitOutcome,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "quat", about = "Quaternions puzzle solver and simulator")]
struct Cli {
    /// Puzzle config (TOML). Falls back to $QUAT_CONFIG.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for the random layout when the config has none
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Module number shown in logs
    #[arg(long, global = true, default_value_t = 1)]
    id: u32,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the layout, Table A, every pipeline stage and the answer
    Solve,

    /// Play the module from stdin, one text command per line
    Play,

    /// Export layout and derivation to a JSON file
    Export {
        /// Output file path
        path: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Solve => cmd_solve(&cli),
        Commands::Play => cmd_play(&cli),
        Commands::Export { path } => cmd_export(&cli, path),
    }
}

fn build_module(cli: &Cli) -> Result<Module> {
    let config = config::load(cli.config.as_deref())?;
    let id = ModuleId(cli.id);

    let layout = match &config.layout {
        Some(layout) => layout.build().context("invalid layout")?,
        None => {
            let mut rng = match cli.seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_os_rng(),
            };
            Layout::random(&mut rng)
        }
    };

    Ok(Module::new(id, layout, &config.edgework))
}

fn print_layout(layout: &Layout) {
    let roles = layout.roles;
    let paint = |role: Role| {
        let color = roles.color(role);
        format!("{color} ({})", color.equation_hex())
    };
    println!("i² = j² = k² = ijk = −1");
    println!("real:       {}", paint(Role::Real));
    println!("i:          {}", paint(Role::I));
    println!("j:          {}", paint(Role::J));
    println!("k:          {}", paint(Role::K));

    let buttons: Vec<String> = (0..SLOT_COUNT)
        .map(|i| format!("{i}={}", layout.buttons.color_of(i)))
        .collect();
    println!("buttons:    {}", buttons.join(", "));
    println!("submit:     {} → {}", layout.submit, layout.selection());
    println!("clear:      {}", layout.clear);
}

fn cmd_solve(cli: &Cli) -> Result<()> {
    let module = build_module(cli)?;
    print_layout(module.layout());

    let applicable = module.table_a().applicable(&module.layout().roles);
    if applicable.is_empty() {
        println!("table A:    (none)");
    } else {
        let names: Vec<&str> = applicable.iter().map(|c| Color::name(*c)).collect();
        println!("table A:    {}", names.join(", "));
    }

    let d = module.derivation();
    println!("components: {:?}", d.initial);
    println!("swapped:    {:?}", d.swapped);
    println!("inverted:   {:?}", d.inverted);
    println!(
        "q₁ = {}{}",
        d.q1,
        if d.q1_conjugated { " (conjugated)" } else { "" }
    );
    println!(
        "q₂ = {}{}",
        d.q2,
        if d.q2_conjugated { " (conjugated)" } else { "" }
    );
    println!("{} = {}", d.order.label(), d.product);
    println!("answer:     {}", d.answer);
    Ok(())
}

fn cmd_play(cli: &Cli) -> Result<()> {
    let mut module = build_module(cli)?;
    module.activate();
    println!("{HELP}");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text.eq_ignore_ascii_case("help") {
            println!("{HELP}");
            continue;
        }

        let Some(outcomes) = module.run_command(text) else {
            println!("unrecognized command: {text}");
            continue;
        };

        let verdict = outcomes.iter().find_map(|o| match o {
            PressOutcome::Submitted(s) => Some(*s),
            _ => None,
        });
        println!("display: {}", module.session().input());
        match verdict {
            Some(SubmitOutcome::Correct) => {
                println!("correct! module disarmed");
                return Ok(());
            }
            Some(SubmitOutcome::Strike) => println!("strike!"),
            Some(SubmitOutcome::Ignored) | None => {}
        }
    }

    println!("strikes: {}", module.session().strikes());
    Ok(())
}

#[derive(Serialize)]
struct Export<'a> {
    module: ModuleId,
    layout: &'a Layout,
    table_a: &'a quat_core::TableA,
    derivation: &'a quat_core::Derivation,
}

fn cmd_export(cli: &Cli, path: &Path) -> Result<()> {
    let module = build_module(cli)?;
    let export = Export {
        module: module.id(),
        layout: module.layout(),
        table_a: module.table_a(),
        derivation: module.derivation(),
    };

    let json = serde_json::to_string_pretty(&export).context("failed to serialize derivation")?;
    std::fs::write(path, &json).with_context(|| format!("failed to write {}", path.display()))?;

    println!("exported to {}", path.display());
    Ok(())
}
