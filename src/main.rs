//! Wordle Analysis - CLI
//!
//! Play Wordle in the terminal, get help solving a game, or prepare the data
//! files the solver uses.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use env_logger::Env;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use wordle_analysis::{
    commands::{build_cache, print_frequencies, progress_bar, run_play, run_solve},
    config::{DEFAULT_ROUNDS, SolverConfig},
    core::CandidateSet,
    game::{PlaySession, SolveSession},
    output::print_ranking,
    solver::{DEFAULT_THRESHOLD, Sampling, Solver},
    wordlists::{DEFAULT_LOCALE, FrequencyOracle, FrequencyTable, known_words, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_analysis",
    about = "Play Wordle or get suggestions that shrink the candidate list fastest",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Newline-delimited word list
    #[arg(short, long, global = true, default_value = "english3.txt")]
    dictionary: PathBuf,

    /// Word frequency table, one `word frequency` pair per line
    #[arg(short, long, global = true, default_value = "frequencies.txt")]
    frequencies: PathBuf,

    /// First-guess cache file
    #[arg(short, long, global = true, default_value = "first_guess.json")]
    cache: PathBuf,

    /// Guesses allowed per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_ROUNDS)]
    rounds: usize,

    /// Expected remaining fraction above which the most common word is suggested
    #[arg(short, long, global = true, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Score only this many randomly sampled guesses per round
    #[arg(long, global = true)]
    sample: Option<usize>,

    /// Seed for sampling and for picking the secret
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Locale passed to the frequency table
    #[arg(long, global = true, default_value = DEFAULT_LOCALE)]
    locale: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess a hidden word
    Play,

    /// Get suggestions for a game played elsewhere
    Solve,

    /// Rank every common word as an opening guess and save the result
    BuildCache,

    /// List dictionary words by frequency
    Frequencies {
        /// Show only the most frequent words
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

impl Cli {
    fn solver_config(&self) -> Result<SolverConfig> {
        if !(0.0..=1.0).contains(&self.threshold) {
            bail!("threshold must be between 0 and 1, got {}", self.threshold);
        }
        if self.rounds == 0 {
            bail!("a game needs at least one round");
        }
        if self.sample == Some(0) {
            bail!("--sample must score at least one guess");
        }

        let sampling = self.sample.map_or_else(Sampling::exhaustive, |size| {
            Sampling::sample(size, self.seed.unwrap_or(0))
        });
        Ok(SolverConfig {
            threshold: self.threshold,
            sampling,
            rounds: self.rounds,
            locale: self.locale.clone(),
            ..SolverConfig::default()
        })
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.solver_config()?;

    let table = FrequencyTable::load(&cli.frequencies, &config.locale).with_context(|| {
        format!(
            "failed to load word frequencies from {}",
            cli.frequencies.display()
        )
    })?;
    let words = load_from_file(&cli.dictionary, config.word_length)
        .with_context(|| format!("failed to read dictionary {}", cli.dictionary.display()))?;
    let dictionary = CandidateSet::new(known_words(words, &table, &config.locale));
    if dictionary.is_empty() {
        bail!(
            "no {}-letter words with a known frequency in {}",
            config.word_length,
            cli.dictionary.display()
        );
    }

    let solver = Solver::new(&table, config);

    match cli.command {
        Commands::Play => run_play_command(&solver, dictionary, cli.seed),
        Commands::Solve => run_solve_command(&solver, dictionary, &cli.cache),
        Commands::BuildCache => run_build_cache_command(&solver, &dictionary, &cli.cache),
        Commands::Frequencies { limit } => print_frequencies(
            &table,
            dictionary.words(),
            table.locale(),
            limit,
            io::stdout().lock(),
        )
        .context("failed to write frequencies"),
    }
}

fn run_play_command<O>(
    solver: &Solver<'_, O>,
    dictionary: CandidateSet,
    seed: Option<u64>,
) -> Result<()>
where
    O: FrequencyOracle + ?Sized,
{
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut session = PlaySession::new(solver, dictionary, &mut rng)?;
    let end = run_play(&mut session, io::stdin().lock(), io::stdout().lock())?;
    log::debug!("play session ended: {end:?}");
    Ok(())
}

fn run_solve_command<O>(
    solver: &Solver<'_, O>,
    dictionary: CandidateSet,
    cache_path: &Path,
) -> Result<()>
where
    O: FrequencyOracle + ?Sized,
{
    let cache = solver.load_cache(&dictionary, cache_path);
    let mut session = SolveSession::new(solver, dictionary, cache.as_ref());
    let end = run_solve(&mut session, io::stdin().lock(), io::stdout().lock())?;
    log::debug!("solve session ended: {end:?}");
    Ok(())
}

fn run_build_cache_command<O>(
    solver: &Solver<'_, O>,
    dictionary: &CandidateSet,
    path: &Path,
) -> Result<()>
where
    O: FrequencyOracle + ?Sized,
{
    let progress = progress_bar(0);
    let cache = build_cache(solver, dictionary, &progress)?;
    cache
        .save(path)
        .with_context(|| format!("failed to write cache to {}", path.display()))?;

    let mut out = io::stdout().lock();
    writeln!(
        out,
        "Saved {} opening guesses to {}. Best first guesses:",
        cache.len(),
        path.display()
    )?;
    print_ranking(&mut out, &cache.entries()[..cache.len().min(10)])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("wordle_analysis").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults_give_default_config() {
        let config = parse(&["solve"]).solver_config().unwrap();
        assert_eq!(config, SolverConfig::default());
    }

    #[test]
    fn sample_and_seed_build_sampling() {
        let config = parse(&["play", "--sample", "50", "--seed", "9"])
            .solver_config()
            .unwrap();
        assert_eq!(config.sampling, Sampling::sample(50, 9));
    }

    #[test]
    fn zero_sample_is_rejected() {
        assert!(parse(&["solve", "--sample", "0"]).solver_config().is_err());
    }

    #[test]
    fn out_of_range_settings_are_rejected() {
        assert!(parse(&["play", "--rounds", "0"]).solver_config().is_err());
        assert!(parse(&["play", "--threshold", "1.5"]).solver_config().is_err());
    }
}
