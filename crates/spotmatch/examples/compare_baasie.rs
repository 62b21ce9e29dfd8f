use spotmatch::{Fingerprint, Matcher};
use std::error::Error;
use std::path::{Path, PathBuf};

#[derive(serde::Deserialize)]
struct FingerprintFile {
    refs: [[f64; 2]; 3],
    spots: Vec<[f64; 2]>,
}

fn load(path: &Path) -> Result<Fingerprint, Box<dyn Error>> {
    let file: FingerprintFile = serde_json::from_str(&std::fs::read_to_string(path)?)?;
    Ok(Fingerprint::from_spots(file.refs, &file.spots))
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let args: Vec<String> = std::env::args().collect();
    let (path1, path2) = match args.len() {
        1 => (data_dir.join("baasie1.json"), data_dir.join("baasie2.json")),
        3 => (PathBuf::from(&args[1]), PathBuf::from(&args[2])),
        _ => {
            eprintln!("Usage: {} [<source.json> <target.json>]", args[0]);
            std::process::exit(2);
        }
    };

    let f1 = load(&path1)?;
    let f2 = load(&path2)?;
    let result = Matcher::default().compare_two(&f1, &f2);

    println!(
        "Score {:.6} (initial {:.6}) with {} pairs, {}/{} triples evaluated.",
        result.score,
        result.initial_score,
        result.pair_count,
        result.stats.n_triples_evaluated,
        result.stats.n_triples_total
    );
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
