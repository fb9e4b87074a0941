//! Benchmarks for the Vela parser.
//!
//! This module contains comprehensive benchmarks for parser performance:
//! - Simple constructs (functions, expressions)
//! - Complex constructs (data declarations, control flow)
//! - Scaling with increasing code size
//! - AST traversal operations
//! - Node allocation patterns
//!
//! Run with: `cargo bench --package vela-parser`

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use vela_parser::parser::Parser;
use vela_source::types::{FileID, SourceManager};

// Test data for benchmarks
const SIMPLE_FUNCTION: &str = r"
fun add: i32 a i32 b -> i32 = a + b
";

const FIBONACCI: &str = r"
fun fibonacci: i32 n -> i32 =
    if n < 2:
        return n
    return fibonacci(n - 1) + fibonacci(n - 2)

result = fibonacci(10)
";

const DATA_DEFINITION: &str = r"
data Point = Point(i32, i32)

fun distance: Point a Point b -> i32 =
    match a:
        Point(ax, ay) ->
            match b:
                Point(bx, by) -> (ax - bx) * (ax - bx) + (ay - by) * (ay - by)
";

const COMPLEX_EXPRESSIONS: &str = r"
result = ((a + b) * (c - d) / e) + f % g as i64
condition = (x > 0 and y < 100) or (z == 42 and w != 0)
items = [1, 2, 3, 4, 5]
pair = (x, y)
";

const CONTROL_FLOW: &str = r"
fun process: i32 item =
    if item > 0:
        if item % 2 == 0:
            print(item)
        else:
            print(item)
    elif item < 0:
        print(item)
    else:
        continue

    while count > 0:
        count = count - 1
";

const COMPREHENSIVE: &str = r"
import std/collections

data Tree = Leaf | Node(Tree, i32, Tree)

trait Show:
    fun show: i32 x -> i32

ext Tree as Show:
    fun show: Tree self -> i32 =
        match self:
            Leaf -> 0
            Node(left, value, right) -> value

fun insert: Tree tree i32 value -> Tree =
    match tree:
        Leaf -> Node(Leaf, value, Leaf)
        Node(left, existing, right) ->
            if value < existing:
                Node(insert(left, value), existing, right)
            else:
                Node(left, existing, insert(right, value))

fun main =
    mut t = Leaf
    t = insert(t, 5)
    t = insert(t, 3)
    print(t)
";

/// Benchmark parsing a simple function
fn bench_simple_function(crit: &mut Criterion) {
    let source_manager = Arc::new(SourceManager::new());
    let file_id = FileID::new(0);

    let _ = crit.bench_function("parse_simple_function", |bencher| {
        bencher.iter(|| {
            let mut parser =
                Parser::new(black_box(SIMPLE_FUNCTION), file_id, source_manager.clone());
            parser.parse_program()
        });
    });
}

/// Benchmark parsing fibonacci function
fn bench_fibonacci(crit: &mut Criterion) {
    let source_manager = Arc::new(SourceManager::new());
    let file_id = FileID::new(0);

    let _ = crit.bench_function("parse_fibonacci", |bencher| {
        bencher.iter(|| {
            let mut parser = Parser::new(black_box(FIBONACCI), file_id, source_manager.clone());
            parser.parse_program()
        });
    });
}

/// Benchmark parsing a data declaration with pattern matching
fn bench_data_definition(crit: &mut Criterion) {
    let source_manager = Arc::new(SourceManager::new());
    let file_id = FileID::new(0);

    let _ = crit.bench_function("parse_data_definition", |bencher| {
        bencher.iter(|| {
            let mut parser =
                Parser::new(black_box(DATA_DEFINITION), file_id, source_manager.clone());
            parser.parse_program()
        });
    });
}

/// Benchmark parsing complex expressions
fn bench_complex_expressions(crit: &mut Criterion) {
    let source_manager = Arc::new(SourceManager::new());
    let file_id = FileID::new(0);

    let _ = crit.bench_function("parse_complex_expressions", |bencher| {
        bencher.iter(|| {
            let mut parser =
                Parser::new(black_box(COMPLEX_EXPRESSIONS), file_id, source_manager.clone());
            parser.parse_program()
        });
    });
}

/// Benchmark parsing control flow statements
fn bench_control_flow(crit: &mut Criterion) {
    let source_manager = Arc::new(SourceManager::new());
    let file_id = FileID::new(0);

    let _ = crit.bench_function("parse_control_flow", |bencher| {
        bencher.iter(|| {
            let mut parser = Parser::new(black_box(CONTROL_FLOW), file_id, source_manager.clone());
            parser.parse_program()
        });
    });
}

/// Benchmark parsing comprehensive code
fn bench_comprehensive(crit: &mut Criterion) {
    let source_manager = Arc::new(SourceManager::new());
    let file_id = FileID::new(0);

    let mut group = crit.benchmark_group("parse_comprehensive");
    let _ = group.throughput(Throughput::Bytes(COMPREHENSIVE.len() as u64));
    let _ = group.bench_function("comprehensive", |bencher| {
        bencher.iter(|| {
            let mut parser = Parser::new(black_box(COMPREHENSIVE), file_id, source_manager.clone());
            parser.parse_program()
        });
    });

    group.finish();
}

/// Benchmark parsing with varying code sizes
fn bench_scaling(crit: &mut Criterion) {
    let source_manager = Arc::new(SourceManager::new());
    let file_id = FileID::new(0);

    let mut group = crit.benchmark_group("parse_scaling");

    for size in &[10, 50, 100, 500] {
        // Generate code with N simple functions
        let code = (0..*size).fold(String::new(), |acc, idx| {
            format!("{acc}\nfun func_{idx}: i32 x -> i32 = x * {idx}\n")
        });

        let _ = group.throughput(Throughput::Bytes(code.len() as u64));
        let _ =
            group.bench_with_input(BenchmarkId::from_parameter(size), &code, |bencher, code| {
                bencher.iter(|| {
                    let mut parser = Parser::new(black_box(code), file_id, source_manager.clone());
                    parser.parse_program()
                });
            });
    }

    group.finish();
}

/// Benchmark AST traversal operations
fn bench_ast_traversal(crit: &mut Criterion) {
    let source_manager = Arc::new(SourceManager::new());
    let file_id = FileID::new(0);

    // Parse once to get AST - use simple function for faster parsing
    let mut parser = Parser::new(SIMPLE_FUNCTION, file_id, source_manager);
    let root_id = parser.parse_program().expect("Failed to parse");

    // Get AST reference for benchmarking
    let ast = parser.ast();

    let _ = crit.bench_function("ast_pre_order_traversal", |bencher| {
        bencher.iter(|| {
            let nodes = black_box(ast.collect_nodes_pre_order(root_id));
            nodes.len()
        });
    });

    let _ = crit.bench_function("ast_post_order_traversal", |bencher| {
        bencher.iter(|| {
            let nodes = black_box(ast.collect_nodes_post_order(root_id));
            nodes.len()
        });
    });
}

/// Benchmark node allocation patterns
fn bench_node_allocation(crit: &mut Criterion) {
    let source_manager = Arc::new(SourceManager::new());
    let file_id = FileID::new(0);

    let mut group = crit.benchmark_group("node_allocation");

    // Measure allocation overhead for different constructs
    let _ = group.bench_function("allocate_simple_function", |bencher| {
        bencher.iter(|| {
            let mut parser =
                Parser::new(black_box(SIMPLE_FUNCTION), file_id, source_manager.clone());
            parser.parse_program()
        });
    });

    let _ = group.bench_function("allocate_data_definition", |bencher| {
        bencher.iter(|| {
            let mut parser =
                Parser::new(black_box(DATA_DEFINITION), file_id, source_manager.clone());
            parser.parse_program()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_simple_function,
    bench_fibonacci,
    bench_data_definition,
    bench_complex_expressions,
    bench_control_flow,
    bench_comprehensive,
    bench_scaling,
    bench_ast_traversal,
    bench_node_allocation,
);
criterion_main!(benches);
