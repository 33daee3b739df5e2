use std::env;

use phoneme_length::{Lexicon, Resolver, data};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = env::args()
        .nth(1)
        .or_else(|| env::var("PHONEME_LEXICON").ok())
        .ok_or("usage: vocabulary_lengths <cmudict file> (or set PHONEME_LEXICON)")?;
    let lexicon = if path.ends_with(".json") {
        Lexicon::from_json_file(&path)?
    } else {
        Lexicon::from_cmudict_file(&path)?
    };
    let resolver = Resolver::new(lexicon);

    for (name, words) in [
        ("split contractions", data::CONTRACTIONS_SPLIT),
        ("intact contractions", data::CONTRACTIONS_INTACT),
    ] {
        let chosen: Vec<String> = resolver
            .primary_pronunciations(words)
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("=== {name} ===");
        println!("pronunciations: {chosen:?}");
        println!("phoneme lengths: {:?}", resolver.resolve(words));
    }
    Ok(())
}
