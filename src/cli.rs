//! Interactive prompt and report for the `poker-odds` binary.
//!
//! Both sides take their reader/writer as arguments so a scripted session can
//! drive them the same way a terminal does.

use crate::cards::{Rank, Suit};
use crate::hand::{validate_holdem, Board, HoleCards};
use crate::odds::{Distribution, Method};
use std::io::{self, BufRead, Write};

/// Ask for hole cards, then community cards, until each is valid.
///
/// Invalid answers are reported on `out` and asked again. Running out of
/// input before both answers are in is an [`io::ErrorKind::UnexpectedEof`].
///
/// ```
/// use poker_odds::cli::prompt;
///
/// let mut out = Vec::new();
/// let (hole, board) = prompt("AS KS\n\n".as_bytes(), &mut out).unwrap();
/// assert_eq!(hole.as_array().map(|c| c.to_string()), ["AS", "KS"]);
/// assert!(board.is_empty());
/// ```
pub fn prompt<R: BufRead, W: Write>(input: R, out: &mut W) -> io::Result<(HoleCards, Board)> {
    writeln!(out, "\nPoker Hand Odds Calculator v{}", crate::VERSION)?;
    writeln!(out, "Card Ranks: {}", Rank::ALL.iter().map(|r| r.to_char()).collect::<String>())?;
    writeln!(out, "Card Suits: {}", Suit::ALL.iter().map(|s| s.to_char()).collect::<String>())?;

    let mut lines = input.lines();
    let mut ask = |out: &mut W, question: &str| -> io::Result<String> {
        write!(out, "\n{question}")?;
        out.flush()?;
        match lines.next() {
            Some(line) => line,
            None => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed")),
        }
    };

    let hole = loop {
        let line = ask(out, "Enter your hole cards (e.g. 'AS TH' for Ace of Spades and Ten of Hearts): ")?;
        match line.parse::<HoleCards>() {
            Ok(hole) => break hole,
            Err(e) => writeln!(out, "Invalid hole card input ({e}) - enter 2 valid hole cards")?,
        }
    };

    let board = loop {
        let line = ask(out, "Enter community cards (leave blank if none): ")?;
        let checked = line.parse::<Board>().and_then(|board| {
            validate_holdem(&hole, &board)?;
            Method::for_board(board.len())?;
            Ok(board)
        });
        match checked {
            Ok(board) => break board,
            Err(e) => writeln!(out, "Invalid community card input ({e}) - enter 0, 2, 3, 4 or 5 valid cards")?,
        }
    };

    log::debug!("prompted board of {} card(s)", board.len());
    Ok((hole, board))
}

/// Print the made hand (complete boards only) and one `Name: xx.xx%` line per
/// category, strongest first.
pub fn report<W: Write>(out: &mut W, dist: &Distribution) -> io::Result<()> {
    writeln!(out, "Hand Probabilities:")?;
    for (category, p) in dist.iter() {
        writeln!(out, "{category}: {:.2}%", p * 100.0)?;
    }
    if let Some(best) = dist.made_hand() {
        let cards: Vec<String> = best.cards.iter().map(|c| c.to_string()).collect();
        writeln!(out, "\nBest hand: {} ({})", best.category, cards.join(" "))?;
    }
    log::info!("{} over {} outcomes", dist.method(), dist.outcomes());
    Ok(())
}
