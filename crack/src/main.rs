use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use cryptanalysis::{
    AnalyzerConfig, CipherKind, Cryptanalyst, Dictionary, SubstitutionRecovery, WordList,
};
use log::{error, info, warn};

/// Command-line arguments for the ciphertext-only cracker.
#[derive(Parser, Debug)]
#[command(version, about = "Recovers key and plaintext from ROT-X, Vigenere or substitution ciphertext")]
struct Cli {
    /// Cipher the ciphertext was produced with
    #[arg(short, long, value_enum, help = "Cipher used to produce the ciphertext")]
    cipher: CipherArg,

    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: PathBuf,

    /// Word list, one word per line
    #[arg(short, long, help = "Path to the dictionary (one word per line)")]
    dictionary: PathBuf,

    /// Path to the output file where decrypted text will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text (stdout if omitted)")]
    output: Option<PathBuf>,

    /// Seed for the substitution search
    #[arg(short, long, help = "Seed for the substitution search (random if omitted)")]
    seed: Option<u64>,

    #[arg(long, default_value_t = cryptanalysis::config::DEFAULT_ROUNDS, help = "Substitution hill-climbing rounds")]
    rounds: usize,

    #[arg(long, default_value_t = cryptanalysis::config::DEFAULT_MOVES_PER_ROUND, help = "Swaps tried per round")]
    moves: usize,

    #[arg(long, default_value_t = cryptanalysis::config::DEFAULT_KEY_LENGTHS.start, help = "Shortest Vigenere key length tried")]
    min_key_length: usize,

    /// Exclusive upper bound
    #[arg(long, default_value_t = cryptanalysis::config::DEFAULT_KEY_LENGTHS.end, help = "Vigenere key lengths stop below this value")]
    max_key_length: usize,

    #[arg(short, long, help = "Log analysis progress")]
    verbose: bool,
}

/// Enum representing the cipher to attack.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CipherArg {
    /// Caesar / ROT-X shift cipher
    Rotx,
    /// Vigenère cipher
    Vigenere,
    /// Monoalphabetic substitution cipher
    Substitution,
}

impl From<CipherArg> for CipherKind {
    fn from(arg: CipherArg) -> Self {
        match arg {
            CipherArg::Rotx => CipherKind::RotX,
            CipherArg::Vigenere => CipherKind::Vigenere,
            CipherArg::Substitution => CipherKind::Substitution,
        }
    }
}

impl Cli {
    fn config(&self) -> AnalyzerConfig {
        let config = AnalyzerConfig::default()
            .with_key_lengths(self.min_key_length..self.max_key_length)
            .with_rounds(self.rounds)
            .with_moves_per_round(self.moves);

        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

/// Main entry point for the cracker.
fn main() {
    let cli: Cli = Cli::parse();

    let level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(&cli) {
        error!("{e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let input: String = std::fs::read_to_string(&cli.file)?;
    let ciphertext = input.trim_end_matches(['\n', '\r']);

    let dictionary = WordList::from_reader(BufReader::new(File::open(&cli.dictionary)?))?;
    info!("Loaded {} dictionary words", dictionary.len());

    let analyst = Cryptanalyst::new(dictionary, cli.config())?;
    let kind = CipherKind::from(cli.cipher);

    let (key, plaintext) = match kind {
        CipherKind::Substitution => {
            let SubstitutionRecovery {
                key,
                plaintext,
                verified,
                ..
            } = analyst.substitution(ciphertext)?;
            if !verified {
                warn!("Best-effort substitution key; plaintext contains non-dictionary words");
            }
            (key.to_string(), plaintext)
        }
        _ => {
            let recovery = analyst.analyze(kind, ciphertext)?;
            (recovery.key.to_string(), recovery.plaintext)
        }
    };

    // Output key to stdout
    println!("{key}");

    match &cli.output {
        Some(path) => std::fs::write(path, &plaintext)?,
        None => println!("{plaintext}"),
    }

    Ok(())
}
