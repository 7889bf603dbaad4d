//! Benchmarks for the hot path: classification and reply serialization.

use bytes::Bytes;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hookbridge_core::{InboundEvent, RelayReply};
use serde_json::json;

fn classification_benchmark(c: &mut Criterion) {
    let handshake =
        Bytes::from(json!({ "type": "url_verification", "challenge": "tok" }).to_string());
    let event = Bytes::from(
        json!({
            "header": { "event_type": "im.message.receive_v1" },
            "event": { "message": { "content": "hello" } }
        })
        .to_string(),
    );

    c.bench_function("classify_handshake", |b| {
        b.iter(|| {
            InboundEvent::parse(black_box(handshake.clone())).expect("valid JSON").kind()
        });
    });

    c.bench_function("classify_platform_event", |b| {
        b.iter(|| InboundEvent::parse(black_box(event.clone())).expect("valid JSON").kind());
    });
}

fn reply_benchmark(c: &mut Criterion) {
    c.bench_function("serialize_forward_ack", |b| {
        b.iter(|| serde_json::to_vec(&RelayReply::forwarded()).expect("serializable"));
    });
}

criterion_group!(benches, classification_benchmark, reply_benchmark);
criterion_main!(benches);
