//! Console driver for the board engine
//!
//! Stands in for the presentation layer: it selects squares, invokes the
//! move command, and re-renders from board state after every call. Turn
//! alternation lives here, not in the engine - the engine will happily move
//! either side on request.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use chess_logic_core::{Board, PieceColor, Square};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut board = Board::standard();
    let mut turn = PieceColor::White;

    println!("{board}");
    println!("enter moves as <from> <to> (e.g. \"e2 e3\"), or \"quit\"");
    print_prompt(turn)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        if input.is_empty() {
            print_prompt(turn)?;
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }

        match run_move(&mut board, turn, input) {
            Ok(true) => {
                turn = turn.opposite();
                println!("{board}");
                if board.is_in_check(turn) {
                    println!("{:?} is in check!", turn);
                }
            }
            Ok(false) => {}
            Err(err) => println!("{err:#}"),
        }

        print_prompt(turn)?;
    }

    Ok(())
}

/// Parse and execute one move command; returns whether the board changed
fn run_move(board: &mut Board, turn: PieceColor, input: &str) -> Result<bool> {
    let mut tokens = input.split_whitespace();
    let from = parse_square(tokens.next().context("expected: <from> <to>")?)?;
    let to = parse_square(tokens.next().context("expected: <from> <to>")?)?;

    // Turn order is a driver concern: the engine only checks legality.
    let mover = board.cell(from).figure().map(|figure| figure.color);
    if mover != Some(turn) {
        println!("{:?} to move", turn);
        return Ok(false);
    }

    match board.move_figure(from, to) {
        Ok(Some(captured)) => {
            info!(
                "[CONSOLE] {:?} takes {:?} on {to}",
                turn, captured.piece_type
            );
            Ok(true)
        }
        Ok(None) => Ok(true),
        Err(err) => {
            println!("{err}");
            Ok(false)
        }
    }
}

fn parse_square(token: &str) -> Result<Square> {
    Square::from_algebraic(token).with_context(|| format!("bad square: {token}"))
}

fn print_prompt(turn: PieceColor) -> Result<()> {
    print!("{:?}> ", turn);
    io::stdout().flush()?;
    Ok(())
}
