//! rune512 CLI: byte payloads <-> Rune-512 text.

use clap::{Args, Parser, Subcommand};
use rune512::Profile;
use std::io::Read;
use std::process;

#[derive(Parser)]
#[command(name = "rune512", about = "Rune-512 encode/decode")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a string
    Encode(EncodeArgs),
    /// Decode a string
    Decode(DecodeArgs),
}

#[derive(Args)]
struct EncodeArgs {
    /// The string to encode. Reads from stdin if not provided.
    string: Option<String>,

    /// Interpret the input as a hex-encoded string.
    #[arg(long)]
    hex: bool,

    /// Use the framed profile (magic prefix + SHA-256 tag).
    #[arg(long)]
    framed: bool,
}

#[derive(Args)]
struct DecodeArgs {
    /// The string to decode. Reads from stdin if not provided.
    string: Option<String>,

    /// Output the result as a hex-encoded string.
    #[arg(long)]
    hex: bool,

    /// Use the framed profile (magic prefix + SHA-256 tag).
    #[arg(long)]
    framed: bool,
}

fn read_input(arg: Option<String>) -> String {
    match arg {
        Some(s) => s,
        None => {
            let mut buf = String::new();
            if let Err(err) = std::io::stdin().read_to_string(&mut buf) {
                eprintln!("error: {err}");
                process::exit(1);
            }
            buf.trim().to_string()
        }
    }
}

fn profile(framed: bool) -> Profile {
    if framed {
        Profile::Framed
    } else {
        Profile::Fast
    }
}

fn main() {
    pretty_env_logger::init();

    match Cli::parse().command {
        Command::Encode(args) => {
            let input = read_input(args.string);
            let payload = if args.hex {
                match hex::decode(&input) {
                    Ok(bytes) => bytes,
                    Err(_) => {
                        eprintln!("error: invalid hex string");
                        process::exit(1);
                    }
                }
            } else {
                input.into_bytes()
            };
            println!("{}", profile(args.framed).encode(&payload));
        }
        Command::Decode(args) => {
            let input = read_input(args.string);
            match profile(args.framed).decode(&input) {
                Ok((payload, _consumed)) => {
                    if args.hex {
                        println!("{}", hex::encode(payload));
                    } else {
                        println!("{}", String::from_utf8_lossy(&payload));
                    }
                }
                Err(err) => {
                    eprintln!("error: {err}");
                    process::exit(1);
                }
            }
        }
    }
}
