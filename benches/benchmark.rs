use criterion::{criterion_group, criterion_main, Criterion};

use aoc_search::{Cost, Direction, Graph, Region2D, Search, Vector2D};

const SIZE: i32 = 141;

type Pos = Vector2D<i32>;

/// Deterministic 1..=9 weights on a SIZE x SIZE grid.
fn weights() -> Vec<Cost> {
    let mut state = 0x9e37_79b9_7f4a_7c15_u64;
    (0..SIZE * SIZE)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state % 9 + 1
        })
        .collect()
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
struct Crucible {
    pos: Pos,
    dir: Direction,
    streak: u8,
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let weights = weights();
    let area = Region2D::new(0..=SIZE - 1, 0..=SIZE - 1);
    let weight = |p: Pos| weights[(p.y * SIZE + p.x) as usize];
    let (start, end) = (area.min(), area.max());

    let grid = |p: &Pos| {
        p.neighbors()
            .into_iter()
            .filter(|q| area.contains(*q))
            .map(|q| (q, weight(q)))
            .collect::<Vec<_>>()
    };

    c.bench_function("dijkstra", |b| {
        b.iter(|| {
            Search::new()
                .goal(|p: &Pos| *p == end)
                .run(&grid, start)
                .cost()
        })
    });

    c.bench_function("astar", |b| {
        b.iter(|| {
            Search::new()
                .heuristic(|p: &Pos| p.manhattan_distance(end) as Cost)
                .goal(|p: &Pos| *p == end)
                .run(&grid, start)
                .cost()
        })
    });

    c.bench_function("flood", |b| b.iter(|| grid.search(start).tree().len()));

    let crucible = |s: &Crucible| {
        Direction::ALL
            .into_iter()
            .filter(|&d| d != s.dir.flip() && !(d == s.dir && s.streak == 3))
            .map(|d| (d, s.pos.moved(d)))
            .filter(|(_, pos)| area.contains(*pos))
            .map(|(d, pos)| {
                let streak = if d == s.dir { s.streak + 1 } else { 1 };
                (Crucible { pos, dir: d, streak }, weight(pos))
            })
            .collect::<Vec<_>>()
    };

    c.bench_function("crucible", |b| {
        b.iter(|| {
            let from = Crucible {
                pos: start,
                dir: Direction::Right,
                streak: 0,
            };
            Search::new()
                .goal(|s: &Crucible| s.pos == end)
                .run(&crucible, from)
                .cost()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
