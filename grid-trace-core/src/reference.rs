//! Straightforward word search, one word at a time, without any shared state.
//! Slow, but simple enough to check the [BoardWalker](crate::BoardWalker) against.

use crate::{Board, CellIndex};
use std::collections::HashSet;

/// An element of the backtracking stack: a cell of the path being built
/// and the next of its neighbors to try.
struct StackEntry {
    cell: CellIndex,
    next_neighbor: usize,
}

fn trace_from(board: &Board, word: &[u8], start: CellIndex, visited: &mut [bool]) -> Option<Vec<CellIndex>> {
    let mut stack = vec![StackEntry {
        cell: start,
        next_neighbor: 0,
    }];
    visited[start.get()] = true;

    loop {
        let depth = stack.len();
        if depth == 0 || depth == word.len() {
            break;
        }

        let next_letter = word[depth];
        let entry = &mut stack[depth - 1];
        let slots = board.neighbor_slots(entry.cell);
        let next = slots[entry.next_neighbor..]
            .iter()
            .position(|slot| {
                slot.map_or(false, |n| !visited[n.get()] && board.letter(n) == next_letter)
            })
            .map(|offset| entry.next_neighbor + offset);

        match next.and_then(|i| slots[i].map(|cell| (i, cell))) {
            Some((i, cell)) => {
                entry.next_neighbor = i + 1;
                visited[cell.get()] = true;
                stack.push(StackEntry {
                    cell,
                    next_neighbor: 0,
                });
            }
            None => {
                // Backtrack
                visited[entry.cell.get()] = false;
                stack.pop();
            }
        }
    }

    let path: Vec<_> = stack.iter().map(|e| e.cell).collect();
    for &cell in &path {
        visited[cell.get()] = false;
    }

    if path.len() == word.len() {
        Some(path)
    } else {
        None
    }
}

/// Return a path of adjacent distinct cells spelling the word, if there is one.
pub fn trace_word(board: &Board, word: &str) -> Option<Vec<CellIndex>> {
    let bytes = word.as_bytes();
    let first = *bytes.first()?;
    let mut visited = vec![false; board.len()];

    board
        .cells_with(first)
        .iter()
        .find_map(|&start| trace_from(board, bytes, start, &mut visited))
}

/// Return the words that can be traced on the board, in input order, without duplicates.
pub fn find_words_naive<S: AsRef<str>>(board: &Board, words: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| word.len() <= board.len() && trace_word(board, word).is_some())
        .filter(|word| seen.insert(*word))
        .map(str::to_owned)
        .collect()
}
