//! Tests for full games played through `Round`.

use tictactoe_core::{Cell, Coord, Mark, Outcome, PlaceError, Ply, Round, rules};

fn at(col: usize, row: usize) -> Coord {
    Coord::new(col, row).expect("on board")
}

fn play(round: &mut Round, coords: &[(usize, usize)]) -> Vec<Ply> {
    coords
        .iter()
        .map(|&(col, row)| round.place(at(col, row)).expect("legal move"))
        .collect()
}

#[test]
fn test_game_lifecycle() {
    let mut round = Round::new(Mark::Cross);
    assert_eq!(round.to_move(), Mark::Cross);

    let ply = round.place(at(1, 1)).expect("valid move");
    assert_eq!(ply, Ply::Continue { next: Mark::Nought });
    assert_eq!(round.to_move(), Mark::Nought);
}

#[test]
fn test_rejected_move_does_not_switch_turn() {
    let mut round = Round::new(Mark::Cross);
    round.place(at(1, 1)).unwrap();

    let result = round.place(at(1, 1));
    assert!(matches!(result, Err(PlaceError::Occupied(_))));
    assert_eq!(round.board().get(1, 1), Cell::Marked(Mark::Cross));
    assert_eq!(round.to_move(), Mark::Nought);

    // The retry on a free cell is still O's move
    round.place(at(0, 0)).unwrap();
    assert_eq!(round.board().get(0, 0), Cell::Marked(Mark::Nought));
}

#[test]
fn test_nine_move_game_won_on_diagonal() {
    let mut round = Round::new(Mark::Cross);
    let plies = play(
        &mut round,
        &[
            (0, 0),
            (1, 0),
            (1, 1),
            (2, 0),
            (2, 1),
            (0, 1),
            (0, 2),
            (1, 2),
            (2, 2),
        ],
    );

    assert_eq!(plies.len(), 9);
    assert!(
        plies[..8]
            .iter()
            .all(|ply| matches!(ply, Ply::Continue { .. }))
    );
    assert_eq!(plies[8], Ply::Finished(Outcome::Winner(Mark::Cross)));
    assert_eq!(round.outcome(), Some(Outcome::Winner(Mark::Cross)));
    assert!(rules::is_full(round.board()));
}

#[test]
fn test_draw_detection() {
    let mut round = Round::new(Mark::Cross);
    let plies = play(
        &mut round,
        &[
            (0, 0),
            (1, 1),
            (2, 0),
            (1, 0),
            (0, 1),
            (2, 1),
            (1, 2),
            (0, 2),
            (2, 2),
        ],
    );

    assert_eq!(plies.last(), Some(&Ply::Finished(Outcome::Draw)));
    assert!(rules::is_draw(round.board()));
}

#[test]
fn test_restart_after_win() {
    let mut round = Round::new(Mark::Nought);
    play(&mut round, &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]);
    assert_eq!(round.outcome(), Some(Outcome::Winner(Mark::Nought)));

    round.reset();
    assert_eq!(round.to_move(), Mark::Nought);
    assert_eq!(round.board().occupied(), 0);
    assert_eq!(round.place(at(2, 0)), Ok(Ply::Continue { next: Mark::Cross }));
}
