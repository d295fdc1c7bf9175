use std::fs;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use takeout_chat_viewer::load_export;
use tempfile::TempDir;

/// Generate a synthetic Groups tree with N conversations of M messages each
fn generate_export(num_conversations: usize, messages_each: usize) -> TempDir {
    let root = TempDir::new().unwrap();

    for c in 0..num_conversations {
        let dir = root.path().join(format!("DM {:04x}", c));
        fs::create_dir_all(&dir).unwrap();

        let mut records = Vec::with_capacity(messages_each);
        for m in 0..messages_each {
            let email = if m % 2 == 0 { "me@example.com" } else { "peer@example.com" };
            let labels = if m % 17 == 0 { r#"{"label_type":"PINNED"}"# } else { "" };
            records.push(format!(
                r#"{{"creator":{{"name":"Sender {}","email":"{}"}},"created_date":"Saturday, 3 June 2023 at 14:{:02}:00 UTC","text":"Benchmark message {} with some realistic length to it","message_labels":[{}]}}"#,
                m,
                email,
                m % 60,
                m,
                labels
            ));
        }

        fs::write(
            dir.join("messages.json"),
            format!(r#"{{"messages":[{}]}}"#, records.join(",")),
        )
        .unwrap();
    }

    root
}

fn bench_load_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_export");

    for (conversations, messages) in [(10, 50), (50, 200), (200, 200)] {
        let export = generate_export(conversations, messages);
        let total = (conversations * messages) as u64;

        group.throughput(Throughput::Elements(total));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", conversations, messages)),
            &export,
            |b, export| {
                b.iter(|| load_export(black_box(export.path()), None).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_load_export);
criterion_main!(benches);
