//! Benchmarks for script parsing.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use nuextern::parse_commands;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

/// A script with `count` subcommands, each with its own suggestion list.
fn generated_script(count: usize) -> String {
    let mut script = String::from("module completions {\n\n");
    for i in 0..count {
        script.push_str(&format!(
            "  def \"nu-complete tool sub{i} mode\" [] {{\n    [ \"fast\" \"slow\" ]\n  }}\n\n"
        ));
        script.push_str(&format!("  # Subcommand {i}\n"));
        script.push_str(&format!("  export extern \"tool sub{i}\" [\n"));
        script.push_str(&format!(
            "    --mode: string@\"nu-complete tool sub{i} mode\"  # Mode\n"
        ));
        script.push_str("    --verbose(-v)             # Print more output\n");
        script.push_str("    ...paths: path            # Inputs\n");
        script.push_str("  ]\n\n");
    }
    script.push_str("}\n");
    script
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let fixture = load_fixture("tool.nu");
    let small = "  export extern \"foo\" [\n    --bar: string # help\n  ]\n";
    let large = generated_script(200);

    group.bench_function("parse_single_command", |b| {
        b.iter(|| parse_commands(black_box(small)).unwrap())
    });

    group.bench_function("parse_fixture", |b| {
        b.iter(|| parse_commands(black_box(&fixture)).unwrap())
    });

    group.bench_function("parse_generated_200", |b| {
        b.iter(|| parse_commands(black_box(&large)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_parsing);
criterion_main!(benches);
