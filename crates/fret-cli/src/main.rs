use clap::{Parser, Subcommand};
use fret_fetch::{Search, SongDetail, UgClient};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fret")]
#[command(about = "fret — fetch and reformat guitar tabs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search tabs by song title
    Search {
        /// Search term
        term: String,

        /// Result page to fetch
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch a tab and print it as plain text
    Show {
        /// Tab path, e.g. artist/song-chords-123 or /tab/artist/song-chords-123
        path: String,
    },

    /// Fetch a tab and print the annotated HTML fragment
    Html {
        /// Tab path
        path: String,
    },

    /// Fetch a tab and export it as a ChordPro document
    Chordpro {
        /// Tab path
        path: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Search { term, page, json } => cmd_search(&term, page, json),
        Command::Show { path } => cmd_show(&path),
        Command::Html { path } => cmd_html(&path),
        Command::Chordpro { path, output } => cmd_chordpro(&path, output.as_deref()),
    }
}

fn client() -> UgClient {
    match UgClient::new() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn fetch_tab(path: &str) -> SongDetail {
    match client().tab(path) {
        Ok(song) => song,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_search(term: &str, page: u32, json: bool) {
    let search = match client().search(term, page) {
        Ok(search) => search,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if json {
        match serde_json::to_string_pretty(&search) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    print_search(&search);
}

fn print_search(search: &Search) {
    if search.results.is_empty() {
        println!("No results.");
        return;
    }

    for (i, result) in search.results.iter().enumerate() {
        println!(
            "{:2}. {} - {} (ver {}) ({} {}/5 - {} votes)",
            i + 1,
            result.artist_name,
            result.song_name,
            result.version,
            result.kind,
            result.rating,
            result.votes,
        );
        println!("    {}", result.tab_url);
    }
    println!();
    println!("page {} of {}", search.current_page, search.total_pages);
}

fn cmd_show(path: &str) {
    let song = fetch_tab(path);

    println!(
        "{} - {} (ver {}) ({} {}/5)",
        song.artist_name, song.song_name, song.version, song.kind, song.rating
    );
    for (label, value) in [
        ("difficulty", &song.difficulty),
        ("key", &song.key),
        ("capo", &song.capo),
        ("tuning", &song.tuning),
    ] {
        if let Some(value) = value {
            println!("{label}: {value}");
        }
    }
    if !song.chords.is_empty() {
        let names: Vec<&str> = song.chords.keys().map(String::as_str).collect();
        println!("chords: {}", names.join(", "));
    }
    println!();
    println!("{}", fret_render::render_plain(&song.raw_tab));

    if !song.versions.is_empty() {
        println!();
        println!("other versions:");
        for version in &song.versions {
            println!(
                "  {} - {} (ver {}) ({} {}/5 - {} votes)",
                version.artist_name,
                version.song_name,
                version.version,
                version.kind,
                version.rating,
                version.votes,
            );
            println!("    {}", version.tab_url);
        }
    }
}

fn cmd_html(path: &str) {
    let song = fetch_tab(path);
    println!("{}", fret_render::render_html(&song.raw_tab));
}

fn cmd_chordpro(path: &str, output: Option<&std::path::Path>) {
    let song = fetch_tab(path);
    let doc = fret_render::render_chordpro(&song);

    match output {
        Some(file) => {
            if let Err(e) = std::fs::write(file, &doc) {
                eprintln!("Error writing {}: {e}", file.display());
                std::process::exit(1);
            }
            eprintln!("Wrote: {}", file.display());
        }
        None => print!("{doc}"),
    }
}
