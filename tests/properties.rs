use std::collections::VecDeque;

use mazegen::{Canvas, Maze, MazeConfig};

/// Cells joined by an open passage, as pairs of cell indices.
fn passages(canvas: &Canvas, width: usize, height: usize) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    for row in 0..height {
        for col in 0..width {
            let id = row * width + col;
            let is_open = |other| canvas[Canvas::passage_position((col, row), other)].is_open();
            if col + 1 < width && is_open((col + 1, row)) {
                edges.push((id, id + 1));
            }
            if row + 1 < height && is_open((col, row + 1)) {
                edges.push((id, id + width));
            }
        }
    }
    edges
}

fn assert_spanning_tree(maze: &Maze) {
    let (width, height) = (maze.width(), maze.height());
    let cells = width * height;
    let edges = passages(maze.canvas(), width, height);
    assert_eq!(edges.len(), cells - 1, "{}x{} maze", width, height);

    let mut adjacency = vec![Vec::new(); cells];
    for &(a, b) in &edges {
        adjacency[a].push(b);
        adjacency[b].push(a);
    }
    let mut seen = vec![false; cells];
    let mut queue = VecDeque::from([0]);
    seen[0] = true;
    while let Some(cell) = queue.pop_front() {
        for &next in &adjacency[cell] {
            if !seen[next] {
                seen[next] = true;
                queue.push_back(next);
            }
        }
    }
    // Connected with cells - 1 edges, hence acyclic
    assert!(seen.iter().all(|&s| s), "{}x{} maze is not connected", width, height);
}

#[test]
fn spanning_tree_for_many_shapes() {
    for width in 1..=7 {
        for height in 1..=7 {
            for seed in [0, 1, 99] {
                let config = MazeConfig::new(width, height).seed(seed);
                let maze = Maze::from_config(&config).unwrap();
                assert_spanning_tree(&maze);
            }
        }
    }
}

#[test]
fn spanning_tree_for_unseeded_maze() {
    let maze = Maze::new(25, 15, false).unwrap();
    assert!(maze.report().completed);
    assert_spanning_tree(&maze);
}

#[test]
fn large_maze_does_not_overflow_the_stack() {
    let maze = Maze::from_config(&MazeConfig::new(400, 400).seed(5)).unwrap();
    assert_eq!(maze.report().visited, 160_000);
    assert_eq!(maze.report().passages, 159_999);
}

#[test]
fn long_strip_is_accepted() {
    let maze = Maze::from_config(&MazeConfig::new(3000, 1).seed(1)).unwrap();
    assert_eq!(maze.canvas().columns(), 12_001);
    assert_eq!(maze.canvas().rows(), 3);
    assert_spanning_tree(&maze);
}

#[test]
fn canvas_dimensions() {
    for (width, height) in [(1, 1), (3, 8), (12, 2)] {
        let maze = Maze::new(width, height, false).unwrap();
        assert_eq!(maze.canvas().columns(), 4 * width + 1);
        assert_eq!(maze.canvas().rows(), 2 * height + 1);
    }
}

#[test]
fn border_openings_always_open() {
    for seed in 0..20 {
        let maze = Maze::from_config(&MazeConfig::new(5, 4).seed(seed)).unwrap();
        let canvas = maze.canvas();
        assert!(canvas[(2, 0)].is_open());
        assert!(canvas[(canvas.columns() - 3, canvas.rows() - 1)].is_open());
    }
}

#[test]
fn same_seed_same_output() {
    let render = |seed| {
        let mut maze = Maze::from_config(&MazeConfig::new(10, 7).seed(seed)).unwrap();
        let mut buf = Vec::new();
        maze.write_to(&mut buf, false).unwrap();
        buf
    };
    assert_eq!(render(2024), render(2024));
}

#[test]
fn output_uses_only_walls_and_spaces() {
    let mut maze = Maze::from_config(&MazeConfig::new(6, 6).seed(3)).unwrap();
    let mut buf = Vec::new();
    maze.write_to(&mut buf, false).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.chars().all(|c| matches!(c, 'X' | ' ' | '\n')));
    assert!(text.ends_with("X\n\n"));
    assert_eq!(text.lines().count(), 2 * 6 + 1 + 1);
}
