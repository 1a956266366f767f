//! Stack Operation Benchmarks
//!
//! Benchmarks for the stack data path covering:
//! - LinkedStack push/pop, base/sweep, rotate
//! - Policy-gated pushes on a full stack (reject vs evict)
//! - Executor overhead for a push/pop round trip
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench stack_ops
//!
//! # Specific categories
//! cargo bench --bench stack_ops -- "linked_stack"
//! cargo bench --bench stack_ops -- "policy"
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use piladb::engine::config::vars;
use piladb::storage::LinkedStack;
use piladb::{Command, EvictionPolicy, Executor, StackCapacity, Value};

// =============================================================================
// Constants and Configuration
// =============================================================================

/// Stack sizes for scaling benchmarks.
const STACK_SIZES: &[usize] = &[16, 1_024, 65_536];

fn filled(size: usize) -> LinkedStack<Value> {
    let stack = LinkedStack::new();
    for i in 0..size {
        stack.push(Value::Int(i as i64));
    }
    stack
}

// =============================================================================
// LinkedStack
// =============================================================================

fn bench_linked_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("linked_stack");
    group.throughput(Throughput::Elements(1));

    for &size in STACK_SIZES {
        group.bench_with_input(BenchmarkId::new("push_pop", size), &size, |b, &size| {
            let stack = filled(size);
            b.iter(|| {
                stack.push(black_box(Value::Int(1)));
                black_box(stack.pop())
            })
        });

        group.bench_with_input(BenchmarkId::new("base_sweep", size), &size, |b, &size| {
            let stack = filled(size);
            b.iter(|| {
                stack.base(black_box(Value::Int(1)));
                black_box(stack.sweep())
            })
        });

        group.bench_with_input(BenchmarkId::new("rotate", size), &size, |b, &size| {
            let stack = filled(size);
            b.iter(|| black_box(stack.rotate()))
        });

        group.bench_with_input(BenchmarkId::new("peek", size), &size, |b, &size| {
            let stack = filled(size);
            b.iter(|| black_box(stack.peek()))
        });
    }

    group.finish();
}

// =============================================================================
// Policy
// =============================================================================

fn bench_policy(c: &mut Criterion) {
    let mut group = c.benchmark_group("policy");
    let max = 1_024;

    group.bench_function("reject_when_full", |b| {
        let stack = filled(max);
        let policy = EvictionPolicy::new(StackCapacity::Bounded(max), false);
        b.iter(|| black_box(stack.push_with_policy(Value::Int(1), &policy)))
    });

    group.bench_function("evict_when_full", |b| {
        let stack = filled(max);
        let policy = EvictionPolicy::new(StackCapacity::Bounded(max), true);
        b.iter(|| black_box(stack.push_with_policy(Value::Int(1), &policy)))
    });

    group.finish();
}

// =============================================================================
// Executor
// =============================================================================

fn bench_executor(c: &mut Criterion) {
    let executor = Executor::default();
    executor
        .execute(Command::CreateDatabase { name: "db".into() })
        .unwrap();
    executor
        .execute(Command::CreateStack {
            database: "db".into(),
            name: "s".into(),
        })
        .unwrap();
    executor
        .execute(Command::ConfigSet {
            key: vars::MAX_STACK_SIZE.into(),
            value: Value::Int(1_000_000),
        })
        .unwrap();

    c.bench_function("executor/push_pop", |b| {
        b.iter(|| {
            executor
                .execute(Command::Push {
                    database: "db".into(),
                    stack: "s".into(),
                    element: Value::Int(1),
                })
                .unwrap();
            black_box(
                executor
                    .execute(Command::Pop {
                        database: "db".into(),
                        stack: "s".into(),
                    })
                    .unwrap(),
            )
        })
    });
}

criterion_group!(benches, bench_linked_stack, bench_policy, bench_executor);
criterion_main!(benches);
