//! songsmith command line front end: a terminal view of the songwriting tools.

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
    thread,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use crossbeam_channel::{select, unbounded, Receiver};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use songsmith::{
    catalog::{section_info, RHYME_SCHEMES, SONG_STRUCTURES},
    config::parse_duration,
    platform::{disable_wake_lock, enable_wake_lock},
    prelude::*,
};

// -------------------------------------------------------------------------------------------------

/// Songwriting practice tools: chord progressions, song structures and object writing.
#[derive(Parser, Debug)]
#[command(name = "songsmith")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Seed for random prompt picking
    #[arg(long, value_name = "N", global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the diatonic chords of a major key
    Chords { key: String },
    /// Show the keys related to a major key
    Related { key: String },
    /// Suggest chords which may follow the given progression
    Suggest {
        key: String,
        /// Chords played so far
        chords: Vec<String>,
    },
    /// Resolve a common progression by name, or roman numerals, in a key
    Apply {
        key: String,
        /// Progression name such as "Pop", or roman numerals such as "I bVII IV"
        #[arg(required = true)]
        template: Vec<String>,
    },
    /// List the common progression templates
    Progressions,
    /// List song structures or show one in detail
    Structures { name: Option<String> },
    /// List rhyme schemes or show one in detail
    Rhymes { name: Option<String> },
    /// Run the timed object writing exercise
    Write {
        /// JSON file with the writing prompts
        #[arg(long, value_name = "PATH")]
        prompts: Option<PathBuf>,
        /// Exercise length in seconds
        #[arg(long, value_name = "SECS", value_parser = parse_duration_arg)]
        duration: Option<u32>,
    },
    /// Generate a new prompt file with an external text generation service
    #[cfg(feature = "generator")]
    GeneratePrompts {
        /// Where to write the prompts
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

fn parse_duration_arg(value: &str) -> Result<u32, String> {
    parse_duration(value).map_err(|err| format!("{:#}", err))
}

// -------------------------------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    init_logging(config.log_level_for_verbosity(cli.verbose));

    match cli.command {
        Command::Chords { key } => show_chords(&Key::try_from(key.as_str())?),
        Command::Related { key } => show_related(&Key::try_from(key.as_str())?),
        Command::Suggest { key, chords } => {
            let key = Key::try_from(key.as_str())?;
            println!("{}", suggest_next(chords.as_slice(), &key).join("  "));
        }
        Command::Apply { key, template } => {
            let key = Key::try_from(key.as_str())?;
            let chords = match common_progression(&template.join(" ")) {
                Some(template) => template.chords(&key),
                None => apply_template(template.as_slice(), &key),
            };
            println!("{}", chords.join("  "));
        }
        Command::Progressions => show_progressions(),
        Command::Structures { name } => show_structures(name.as_deref())?,
        Command::Rhymes { name } => show_rhymes(name.as_deref())?,
        Command::Write { prompts, duration } => {
            if let Some(prompts) = prompts {
                config.prompts_path = prompts;
            }
            if let Some(duration) = duration {
                config.duration = duration;
            }
            run_exercise(&config)?;
        }
        #[cfg(feature = "generator")]
        Command::GeneratePrompts { output } => {
            use songsmith::generator::{generate_prompts, write_prompts, GeneratorConfig};
            let output = output.unwrap_or_else(|| config.prompts_path.clone());
            let generator_config = GeneratorConfig::from_env(output)?;
            let prompts = generate_prompts(&generator_config)?;
            write_prompts(&prompts, &generator_config.output)?;
            println!(
                "Successfully generated {} prompts\nSaved to: {}",
                prompts.len(),
                generator_config.output.display()
            );
        }
    }
    Ok(())
}

fn init_logging(level: log::LevelFilter) {
    TermLogger::init(
        level,
        ConfigBuilder::default().build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .unwrap_or_else(|err| {
        eprintln!("init_logger error: {:?}", err);
    });
}

// -------------------------------------------------------------------------------------------------

fn show_chords(key: &Key) {
    println!("Chords in {} major", key);
    for chord in key.chords() {
        println!(
            "  {:<5} {:<7} {}",
            chord.degree().numeral(),
            chord.label(),
            chord.degree().function_name()
        );
    }
}

fn show_related(key: &Key) {
    match key.related() {
        Some(related) => {
            println!("Related keys of {} major", key);
            println!("  Dominant        {}", related.dominant);
            println!("  Subdominant     {}", related.subdominant);
            println!("  Relative minor  {}", related.relative_minor);
            println!("  Parallel minor  {}", related.parallel_minor);
        }
        None => println!(
            "Related keys are unavailable for {}. Circle of fifths: {}",
            key,
            circle_of_fifths()
                .iter()
                .map(|k| k.name())
                .collect::<Vec<_>>()
                .join(" ")
        ),
    }
}

fn show_progressions() {
    for template in COMMON_PROGRESSIONS {
        println!(
            "  {:<11} {:<16} {}",
            template.name,
            template.tokens.join(" "),
            template.description
        );
    }
}

fn show_structures(name: Option<&str>) -> anyhow::Result<()> {
    let Some(name) = name else {
        for structure in SONG_STRUCTURES {
            println!("  {:<24} {}", structure.name, structure.description);
        }
        return Ok(());
    };
    let structure =
        song_structure(name).with_context(|| format!("unknown song structure '{}'", name))?;
    println!("{}\n{}\n", structure.name, structure.description);
    for section in structure.sections {
        match section_info(section) {
            Some(info) => println!("  {:<12} {} bars", section, info.bars),
            None => println!("  {}", section),
        }
    }
    println!("\nSection Guide");
    for section in structure.unique_sections() {
        if let Some(info) = section_info(section) {
            println!("  {:<12} {}", section, info.purpose);
        }
    }
    println!("\nExamples");
    for example in structure.examples {
        println!("  - {}", example);
    }
    Ok(())
}

fn show_rhymes(name: Option<&str>) -> anyhow::Result<()> {
    let Some(name) = name else {
        for scheme in RHYME_SCHEMES {
            println!("  {:<12} {}", scheme.name, scheme.description);
        }
        return Ok(());
    };
    let scheme = rhyme_scheme(name).with_context(|| format!("unknown rhyme scheme '{}'", name))?;
    println!("{}\n{}\n", scheme.name, scheme.description);
    println!("  {}\n", scheme.pattern.join(" "));
    println!("Example");
    for line in scheme.example.lines() {
        println!("  {}", line);
    }
    println!("\nCommon Usage\n  {}", scheme.usage);
    Ok(())
}

// -------------------------------------------------------------------------------------------------

/// Reads lines from stdin on a background thread.
fn spawn_input_reader() -> Receiver<String> {
    let (sender, receiver) = unbounded();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if sender.send(line.trim().to_ascii_lowercase()).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    log::warn!("Failed to read input: {}", err);
                    break;
                }
            }
        }
    });
    receiver
}

fn render(exercise: &Exercise) {
    let prompt = exercise.prompt().unwrap_or_default();
    match exercise.state() {
        ExerciseState::Running => print!("\r  {}  {}  ", exercise.formatted_time(), prompt),
        ExerciseState::Complete => {
            print!("\r\nTime's up!\n  {}\n[s]tart again, [q]uit > ", prompt)
        }
        ExerciseState::Idle => {}
    }
    let _ = io::stdout().flush();
}

fn run_exercise(config: &Config) -> anyhow::Result<()> {
    // without prompts, the exercise can't start
    let prompts = PromptSource::load(&config.prompts_path)?;

    let exercise = Exercise::new(prompts, Box::new(TerminalBell))
        .with_duration(config.duration)
        .with_picker(PromptPicker::new(config.seed));
    let mut driver = ExerciseDriver::new(exercise);

    let (interrupt_sender, interrupts) = unbounded();
    ctrlc::set_handler(move || {
        let _ = interrupt_sender.send(());
    })
    .context("Failed to install Ctrl-C handler")?;
    let input = spawn_input_reader();

    let mut wake_lock = NoWakeLock;
    if !enable_wake_lock(&mut wake_lock) {
        println!("Note: the screen may go to sleep during the exercise.");
    }

    println!(
        "Object Writing: write freely for {} using all your senses.",
        format_time(driver.exercise().duration())
    );
    println!("Commands: [n]ew prompt, [r]estart timer, [q]uit\n");

    let result = drive_exercise(&mut driver, &input, &interrupts);

    driver.reset();
    disable_wake_lock(&mut wake_lock);
    println!();
    result
}

fn drive_exercise(
    driver: &mut ExerciseDriver,
    input: &Receiver<String>,
    interrupts: &Receiver<()>,
) -> anyhow::Result<()> {
    driver.handle_command(ExerciseCommand::Start)?;
    render(driver.exercise());
    loop {
        let ticks = driver.ticks();
        select! {
            recv(ticks) -> tick => {
                driver
                    .handle_tick(tick)
                    .context("Exercise timer stopped")?;
                render(driver.exercise());
            }
            recv(input) -> line => {
                let command = match line.as_deref() {
                    Ok("n") => Some(ExerciseCommand::NewPrompt),
                    Ok("r") => Some(ExerciseCommand::Restart),
                    Ok("s") => Some(ExerciseCommand::Start),
                    Ok("q") | Err(_) => return Ok(()),
                    Ok(_) => None,
                };
                if let Some(command) = command {
                    driver.handle_command(command)?;
                }
                render(driver.exercise());
            }
            recv(interrupts) -> _ => return Ok(()),
        }
    }
}
