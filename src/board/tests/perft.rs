//! Perft node counts for move generation correctness.
//!
//! Castling is not generated and promotions always produce a queen, so
//! positions where either matters carry counts for those rules.

use super::game;
use crate::board::GameState;
use std::time::Instant;

struct TestPosition {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(usize, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1",
        depths: &[(1, 20), (2, 400), (3, 8902)],
    },
    TestPosition {
        name: "Position 3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depths: &[(1, 14), (2, 191), (3, 2812), (4, 43238)],
    },
    TestPosition {
        name: "Position 6",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        depths: &[(1, 46), (2, 2079)],
    },
    TestPosition {
        name: "En Passant Capture",
        fen: "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        depths: &[(1, 31), (2, 707), (3, 21637)],
    },
    TestPosition {
        name: "Queen Promotion",
        fen: "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
        depths: &[(1, 15), (2, 210), (3, 3253)],
    },
    TestPosition {
        name: "Rooks Without Castling",
        fen: "r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1",
        depths: &[(1, 24), (2, 482), (3, 11522)],
    },
];

#[test]
fn test_all_perft_positions() {
    for position in TEST_POSITIONS {
        let mut g = game(position.fen);

        for &(depth, expected) in position.depths {
            let start = Instant::now();
            let nodes = g.perft(depth);
            let duration = start.elapsed();

            println!("  {} depth {}: {} nodes in {:?}", position.name, depth, nodes, duration);

            assert_eq!(
                nodes, expected,
                "Perft failed for position '{}' at depth {}. Expected: {}, Got: {}",
                position.name, depth, expected, nodes
            );
        }
        assert_eq!(g.to_fen(), game(position.fen).to_fen());
    }
}

#[test]
fn test_perft_depth_zero_is_one() {
    assert_eq!(GameState::new().perft(0), 1);
}

#[test]
#[ignore = "slow in debug builds"]
fn test_perft_initial_depth_4() {
    assert_eq!(GameState::new().perft(4), 197_281);
}
