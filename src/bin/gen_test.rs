//! Synthetic transcript generator for stress testing chatsum.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [files] [lines] [output_dir]
//! Example: cargo run --features gen-test --bin gen_test -- 50 20000 stress_data

use rand::Rng;
use rand::seq::SliceRandom;
use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

const TOPICS: &[&str] = &[
    "python", "rust", "compiler", "borrow", "lifetime", "iterator", "closure", "async",
    "runtime", "database", "index", "query", "cache", "thread", "mutex", "channel", "parser",
    "tokenizer", "keyword", "stopword", "benchmark", "allocation", "vector", "hashmap",
];

const USER_TEMPLATES: &[&str] = &[
    "How do I use {} in a real project?",
    "I'm stuck with {} again, can you help?",
    "What's the difference between {} and {}?",
    "Why doesn't my {} compile?",
    "Could you explain {} with 3 examples?",
];

const AI_TEMPLATES: &[&str] = &[
    "Sure! A {} is usually paired with a {}.",
    "You'll want to check the {} first, then the {}.",
    "The {} won't work here because of the {}.",
    "Think of {} as a kind of {}, it isn't magic.",
    "Step 1: profile the {}. Step 2: replace the {}.",
];

/// Lines that must not be classified as either speaker.
const NOISE_LINES: &[&str] = &[
    "",
    "   ",
    "System: session restarted",
    "user: lowercase prefix is ignored",
    "Assistant: unknown role is ignored",
    "[2024-01-15 10:32:00]",
    "---------------------------------",
    "Привет мир! 你好 🌍",
];

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let files: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(10);
    let lines: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(10_000);
    let output = args.get(3).map_or("stress_data", String::as_str);

    println!("🧪 Transcript Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Files:  {}", files);
    println!("   Lines:  {} per file", lines);
    println!("   Output: {}", output);
    println!();

    fs::create_dir_all(output)?;

    let start = std::time::Instant::now();
    let mut rng = rand::thread_rng();
    let mut bytes_written = 0usize;
    let mut messages = 0usize;

    for i in 0..files {
        let path = Path::new(output).join(format!("chat_{:04}.txt", i + 1));
        let (bytes, count) = generate_transcript(&path, lines, &mut rng)?;
        bytes_written += bytes;
        messages += count;
        eprint!("\r   Generated {}/{} files", i + 1, files);
    }

    let elapsed = start.elapsed();
    let mb = bytes_written as f64 / 1_000_000.0;

    println!("\n\n✅ Done!");
    println!("   Messages: {}", messages);
    println!("   Size:     {:.2} MB", mb);
    println!("   Time:     {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Writes one transcript and returns (bytes written, speaker lines written).
fn generate_transcript(path: &Path, lines: usize, rng: &mut impl Rng) -> io::Result<(usize, usize)> {
    let file = File::create(path)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);
    let mut bytes_written = 0usize;
    let mut messages = 0usize;

    for i in 0..lines {
        let line = if rng.gen_range(0..10) == 0 {
            NOISE_LINES.choose(rng).copied().unwrap_or_default().to_string()
        } else {
            messages += 1;
            // Alternate speakers, with the occasional double turn
            if i % 2 == 0 || rng.gen_range(0..20) == 0 {
                format!("User: {}", fill(USER_TEMPLATES, rng))
            } else {
                format!("AI: {}", fill(AI_TEMPLATES, rng))
            }
        };

        writeln!(writer, "{}", line)?;
        bytes_written += line.len() + 1;
    }

    writer.flush()?;
    Ok((bytes_written, messages))
}

/// Picks a template and replaces each `{}` with a random topic.
fn fill(templates: &[&str], rng: &mut impl Rng) -> String {
    let template = templates.choose(rng).copied().unwrap_or("{}");
    let mut out = String::with_capacity(template.len() + 16);
    let mut parts = template.split("{}").peekable();
    while let Some(part) = parts.next() {
        out.push_str(part);
        if parts.peek().is_some() {
            out.push_str(TOPICS.choose(rng).copied().unwrap_or("rust"));
        }
    }
    out
}
