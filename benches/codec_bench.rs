// Performance benchmarks for emoji-codes conversion operations

use emoji_codes::{AnnotationEntry, DemojizeOptions, EmojiCodec, EmojizeOptions};
use std::time::Instant;

fn main() {
    println!("🏃 emoji-codes Performance Benchmarks\n");

    let codec = EmojiCodec::new();

    // Warmup compiles the `en` matcher once.
    let _ = codec.demojize("\u{1F44D}", &DemojizeOptions::default());

    bench_emojize(&codec);
    bench_demojize(&codec);
    bench_positions(&codec);
    bench_import();

    println!("\n✅ Benchmarks completed!");
}

fn bench_emojize(codec: &EmojiCodec) {
    println!("📝 EMOJIZE (shortcodes → unicode)");
    println!("─────────────────────────────────");

    let samples = vec![
        "short :thumbs_up:",
        "mixed :fire: prose with :rocket: and :red_heart: inside",
        "no shortcodes in this sentence at all",
    ];

    for sample in samples {
        let start = Instant::now();
        for _ in 0..1000 {
            let _ = codec.emojize(sample, &EmojizeOptions::default());
        }
        let duration = start.elapsed();

        println!(
            "  {:<55} 1000 iters in {:.3}ms",
            truncate(sample, 52),
            duration.as_secs_f64() * 1000.0
        );
    }
    println!();
}

fn bench_demojize(codec: &EmojiCodec) {
    println!("🔍 DEMOJIZE (unicode → shortcodes)");
    println!("──────────────────────────────────");

    let samples = vec![
        "short \u{1F44D}",
        "mixed \u{1F525} prose with \u{1F680} and \u{2764}\u{FE0F}\u{200D}\u{1F525} inside",
        "no emoji in this sentence at all",
    ];

    for sample in samples {
        let start = Instant::now();
        for _ in 0..1000 {
            let _ = codec.demojize(sample, &DemojizeOptions::default());
        }
        let duration = start.elapsed();

        println!(
            "  {:<55} 1000 iters in {:.3}ms",
            truncate(sample, 52),
            duration.as_secs_f64() * 1000.0
        );
    }
    println!();
}

fn bench_positions(codec: &EmojiCodec) {
    println!("📍 POSITIONS & COUNT");
    println!("─────────────────────");

    let text = "a \u{1F600} b \u{1F1FA}\u{1F1F8} c \u{2764}\u{FE0F}\u{200D}\u{1F525} d \u{1F44D}\u{1F3FB}"
        .repeat(50);

    let start = Instant::now();
    let count = codec.emoji_count(&text, "en").expect("count failed");
    let duration = start.elapsed();

    println!(
        "  {} bytes, {} emoji counted in {:.3}ms",
        text.len(),
        count,
        duration.as_secs_f64() * 1000.0
    );
    println!();
}

fn bench_import() {
    println!("📦 IMPORT");
    println!("──────────");

    let entries: Vec<AnnotationEntry> = (0..500)
        .map(|i| {
            AnnotationEntry::new(
                &format!("\u{1F600}{}", i),
                &format!("synthetic entry number {}", i),
            )
        })
        .collect();

    let mut codec = EmojiCodec::new();
    let start = Instant::now();
    codec
        .import_annotations(&entries, "zz", false, "_")
        .expect("import failed");
    let duration = start.elapsed();

    println!(
        "  {} entries installed in {:.3}ms",
        entries.len(),
        duration.as_secs_f64() * 1000.0
    );

    let (languages, total) = codec.stats();
    println!("\n📊 Store Statistics");
    println!("────────────────────");
    println!("  Languages: {}", languages);
    println!("  Entries: {}", total);
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max).collect();
        format!("{}…", cut)
    }
}
