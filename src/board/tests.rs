use super::*;
use crate::error::GameError;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2.row, 7);
    assert_eq!(pos2.col, 7);
}

#[test]
fn test_pos_from_xy() {
    let pos = Pos::from_xy(3, 10).unwrap();
    assert_eq!(pos.col, 3);
    assert_eq!(pos.row, 10);
    assert_eq!((pos.x(), pos.y()), (3, 10));

    assert_eq!(Pos::from_xy(-1, 0), Err(GameError::OutOfBounds { x: -1, y: 0 }));
    assert_eq!(Pos::from_xy(0, 15), Err(GameError::OutOfBounds { x: 0, y: 15 }));
    assert_eq!(Pos::from_xy(15, 15), Err(GameError::OutOfBounds { x: 15, y: 15 }));
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(0, 0);
    assert_eq!(pos.offset(1, 1, 3), Some(Pos::new(3, 3)));
    assert_eq!(pos.offset(-1, 0, 1), None);
    assert_eq!(Pos::new(14, 14).offset(0, 1, 1), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
    assert_eq!(Board::new().size(), 15);
}

#[test]
fn test_place_and_get() {
    let mut board = Board::new();
    assert!(board.is_board_empty());
    board.place(Pos::new(7, 7), Stone::Black).unwrap();
    assert_eq!(board.get(Pos::new(7, 7)), Stone::Black);
    assert_eq!(board.get(Pos::new(7, 8)), Stone::Empty);
    assert_eq!(board.stone_count(), 1);
    assert!(!board.is_board_empty());
}

#[test]
fn test_place_occupied_rejected() {
    let mut board = Board::new();
    let pos = Pos::new(2, 3);
    board.place(pos, Stone::White).unwrap();
    assert_eq!(board.place(pos, Stone::Black), Err(GameError::CellOccupied(pos)));
    assert_eq!(board.place(pos, Stone::White), Err(GameError::CellOccupied(pos)));
    assert_eq!(board.get(pos), Stone::White);
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_place_empty_stone_rejected() {
    let mut board = Board::new();
    assert!(board.place(Pos::new(0, 0), Stone::Empty).is_err());
    assert!(board.is_board_empty());
}

#[test]
fn test_get_xy_bounds() {
    let mut board = Board::new();
    board.place(Pos::new(4, 9), Stone::Black).unwrap();
    assert_eq!(board.get_xy(9, 4), Ok(Stone::Black));
    assert_eq!(board.get_xy(15, 0), Err(GameError::OutOfBounds { x: 15, y: 0 }));
    assert_eq!(board.get_xy(0, -3), Err(GameError::OutOfBounds { x: 0, y: -3 }));
}

#[test]
fn test_get_is_idempotent() {
    let mut board = Board::new();
    board.place(Pos::new(1, 1), Stone::White).unwrap();
    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        assert_eq!(board.get(pos), board.get(pos));
    }
}

#[test]
fn test_is_full() {
    let mut board = Board::new();
    for idx in 0..TOTAL_CELLS - 1 {
        let stone = if idx % 2 == 0 { Stone::Black } else { Stone::White };
        board.place(Pos::from_index(idx), stone).unwrap();
    }
    assert!(!board.is_full());
    assert_eq!(board.empty_cells().collect::<Vec<_>>(), vec![Pos::new(14, 14)]);

    board.place(Pos::new(14, 14), Stone::Black).unwrap();
    assert!(board.is_full());
    assert_eq!(board.empty_cells().count(), 0);
}

#[test]
fn test_empty_cells_row_major() {
    let mut board = Board::new();
    board.place(Pos::new(0, 0), Stone::Black).unwrap();
    let cells: Vec<Pos> = board.empty_cells().take(2).collect();
    assert_eq!(cells, vec![Pos::new(0, 1), Pos::new(0, 2)]);
    assert_eq!(board.empty_cells().count(), TOTAL_CELLS - 1);
}

#[test]
fn test_bitboard_iter_ones() {
    let mut bb = Bitboard::new();
    bb.set(Pos::new(0, 3));
    bb.set(Pos::new(14, 14));
    bb.set(Pos::new(9, 2));
    let ones: Vec<Pos> = bb.iter_ones().collect();
    assert_eq!(ones, vec![Pos::new(0, 3), Pos::new(9, 2), Pos::new(14, 14)]);
    assert_eq!(bb.count(), 3);
}
