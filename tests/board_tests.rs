use boggle_solver::{enumerate_neighbors, Adjacency, Board, Cell, SolveError};

fn grid(size: usize) -> Board {
    let rows = (0..size).map(|_| vec!['a'; size]).collect();
    Board::new(rows).unwrap()
}

#[test]
fn test_neighbor_counts_on_clipped_board() {
    for size in 2..=6 {
        let board = grid(size);
        let last = size - 1;
        for cell in board.cells() {
            let on_row_edge = cell.row == 0 || cell.row == last;
            let on_col_edge = cell.col == 0 || cell.col == last;
            let expected = match (on_row_edge, on_col_edge) {
                (true, true) => 3,
                (true, false) | (false, true) => 5,
                (false, false) => 8,
            };
            assert_eq!(
                board.neighbors(cell).len(),
                expected,
                "cell {} on {}x{} board",
                cell,
                size,
                size
            );
        }
    }
}

#[test]
fn test_neighbors_exclude_self_and_are_adjacent() {
    let board = grid(5);
    for cell in board.cells() {
        for n in board.neighbors(cell) {
            assert_ne!(n, cell);
            assert!(n.row.abs_diff(cell.row) <= 1);
            assert!(n.col.abs_diff(cell.col) <= 1);
        }
    }
}

#[test]
fn test_neighbor_order_is_fixed() {
    let board = grid(3);
    let neighbors = enumerate_neighbors(&board, Cell::new(1, 1));
    assert_eq!(
        neighbors,
        vec![
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(0, 2),
            Cell::new(1, 0),
            Cell::new(1, 2),
            Cell::new(2, 0),
            Cell::new(2, 1),
            Cell::new(2, 2),
        ]
    );

    let corner = enumerate_neighbors(&board, Cell::new(0, 0));
    assert_eq!(corner, vec![Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)]);
}

#[test]
fn test_single_cell_board_has_no_neighbors() {
    let board = grid(1);
    assert!(board.neighbors(Cell::new(0, 0)).is_empty());
}

#[test]
fn test_wrapping_gives_full_neighborhood() {
    let board = grid(4).with_adjacency(Adjacency::Wrapping);
    for cell in board.cells() {
        assert_eq!(board.neighbors(cell).len(), 8);
    }

    let corner = board.neighbors(Cell::new(0, 0));
    assert!(corner.contains(&Cell::new(3, 3)));
    assert!(corner.contains(&Cell::new(0, 3)));
    assert!(corner.contains(&Cell::new(3, 0)));
}

#[test]
#[should_panic]
fn test_neighbors_of_off_board_cell_panics() {
    let board = grid(3);
    board.neighbors(Cell::new(3, 0));
}

#[test]
fn test_non_square_board_is_rejected() {
    let result = Board::new(vec![vec!['a', 'b'], vec!['c']]);
    assert!(matches!(result, Err(SolveError::Configuration(_))));

    let result = Board::parse("abc/def");
    assert!(matches!(result, Err(SolveError::Configuration(_))));
}

#[test]
fn test_empty_board_is_rejected() {
    assert!(matches!(Board::new(vec![]), Err(SolveError::Configuration(_))));
    assert!(matches!(Board::parse(""), Err(SolveError::Configuration(_))));
}

#[test]
fn test_non_letters_are_rejected() {
    let result = Board::parse("a1/bc");
    assert!(matches!(result, Err(SolveError::Configuration(_))));
}

#[test]
fn test_parse_accepts_separators_and_uppercase() {
    let a = Board::parse("c a/t s").unwrap();
    let b = Board::parse("CA\nTS").unwrap();
    let c = Board::parse("c,a\nt,s\n").unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(a.letter(Cell::new(0, 1)), 'a');
    assert_eq!(a.letter(Cell::new(1, 0)), 't');
}

#[test]
fn test_random_board_is_reproducible() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let a = Board::random(6, &mut StdRng::seed_from_u64(7)).unwrap();
    let b = Board::random(6, &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.size(), 6);
    assert!(a.cells().into_iter().all(|c| a.letter(c).is_ascii_lowercase()));
}

#[test]
fn test_display_prints_one_row_per_line() {
    let board = Board::parse("ca/ts").unwrap();
    assert_eq!(board.to_string(), "c a\nt s\n");
}

#[test]
fn test_cells_are_row_major() {
    let board = grid(2);
    assert_eq!(
        board.cells(),
        vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)]
    );
}
