use serde::Deserialize;

use chess9_engine::board::{
    find_forced_mate, search, Board, Position, SearchConfig, SearchState, Square, MATE_SCORE,
};

#[derive(Deserialize)]
struct ProblemSet {
    problems: Vec<Problem>,
}

#[derive(Deserialize)]
struct Problem {
    name: String,
    board: String,
    solution: String,
}

fn load() -> Vec<Problem> {
    let data = include_str!("data/mate_in_one.json");
    let set: ProblemSet = serde_json::from_str(data).expect("invalid mate_in_one.json");
    set.problems
}

fn position_of(problem: &Problem) -> Position {
    let board = Board::from_text(&problem.board)
        .unwrap_or_else(|e| panic!("{}: bad board text: {e}", problem.name));
    Position::from_board(board)
}

fn squares(coord: &str) -> (Square, Square) {
    (coord[0..2].parse().unwrap(), coord[2..4].parse().unwrap())
}

#[test]
fn listed_solutions_deliver_mate() {
    for problem in load() {
        let mut position = position_of(&problem);
        let defender = position.side_to_move().opponent();
        let (from, to) = squares(&problem.solution);
        position
            .apply_move(from, to, None)
            .unwrap_or_else(|e| panic!("{}: {e}", problem.name));
        assert!(
            position.is_checkmate(defender),
            "{}: {} is not mate",
            problem.name,
            problem.solution
        );
    }
}

#[test]
fn mate_solver_finds_mate_in_one() {
    for problem in load() {
        let mut position = position_of(&problem);
        let side = position.side_to_move();
        let line = find_forced_mate(&mut position, side, 1)
            .unwrap()
            .unwrap_or_else(|| panic!("{}: no mate found", problem.name));
        assert_eq!(line.len(), 1, "{}", problem.name);

        position.apply(line[0]).unwrap();
        assert!(position.is_checkmate(side.opponent()), "{}", problem.name);
    }
}

#[test]
fn search_scores_mate_in_one() {
    for problem in load() {
        let mut position = position_of(&problem);
        let side = position.side_to_move();
        let mut state = SearchState::new(1);
        let result = search(&mut position, side, SearchConfig::depth(3), &mut state).unwrap();

        assert_eq!(result.score, MATE_SCORE - 1, "{}", problem.name);
        assert_eq!(result.mate_in(), Some(1), "{}", problem.name);
        let mv = result.best_move.unwrap();
        position.apply(mv).unwrap();
        assert!(position.is_checkmate(side.opponent()), "{}", problem.name);
    }
}
