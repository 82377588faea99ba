use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "codewalk", version)]
struct Cli {
    /// Log compiler internals (overrides RUST_LOG with `debug`).
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse and validate a script.
    Check(CheckArgs),
    /// Compile a script and print a per-frame summary.
    Compile(CompileArgs),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct CompileArgs {
    /// Input script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Compile only this scene (0-based).
    #[arg(long)]
    scene: Option<usize>,

    /// Identifier source for minted keys.
    #[arg(long, value_enum, default_value_t = KeysChoice::Random)]
    keys: KeysChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KeysChoice {
    /// Random UUID v4 keys.
    Random,
    /// `k0`, `k1`, ... for reproducible output.
    Sequential,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Compile(args) => cmd_compile(args),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(path: &Path) -> anyhow::Result<codewalk::Script> {
    let script = codewalk::Script::from_path(path)
        .with_context(|| format!("load script '{}'", path.display()))?;
    script
        .validate()
        .with_context(|| format!("validate script '{}'", path.display()))?;
    Ok(script)
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let script = load(&args.in_path)?;
    let steps: usize = script.scenes().iter().map(|s| s.len()).sum();
    eprintln!(
        "ok: {} scene(s), {steps} step(s) in {}",
        script.len(),
        args.in_path.display()
    );
    Ok(())
}

fn cmd_compile(args: CompileArgs) -> anyhow::Result<()> {
    let script = load(&args.in_path)?;

    let keys: Arc<dyn codewalk::IdentitySource> = match args.keys {
        KeysChoice::Random => Arc::new(codewalk::RandomKeys),
        KeysChoice::Sequential => Arc::new(codewalk::SequentialKeys::new("k")),
    };
    let compiler = codewalk::SceneCompiler::new(keys);

    let sequences = match args.scene {
        Some(i) => {
            let scene = script
                .scenes()
                .get(i)
                .with_context(|| format!("scene {i} out of range (script has {})", script.len()))?;
            vec![compiler.compile(scene).with_context(|| format!("compile scene {i}"))?]
        }
        None => compiler.compile_script(&script).context("compile script")?,
    };

    for seq in &sequences {
        print_sequence(seq);
    }
    Ok(())
}

fn print_sequence(seq: &codewalk::Sequence) {
    println!("sequence {} ({} frame(s))", seq.key(), seq.len());
    for frame in seq.frames() {
        let link = |k: Option<&codewalk::Key>| k.map_or_else(|| "-".to_string(), |k| k.to_string());
        println!(
            "  [{}] {}  prev={} next={}",
            frame.index(),
            frame.key(),
            link(frame.prev()),
            link(frame.next())
        );
        println!("      line: {}", frame.line());
        let t = frame.transition();
        println!("      initial: {:?}", t.initial.tokens());
        println!("      animate: {:?}", t.animate.tokens());
        let entering: Vec<&str> = t.entering().map(|c| c.value.as_str()).collect();
        println!("      entering: {entering:?}");
    }
}
