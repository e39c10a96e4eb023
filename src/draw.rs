use std::io;

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

use crate::error::WalkError;
use crate::types::Grid;

/// Symbols for increasing visit counts. The last two are only ever placed
/// by `WalkBoard::finalize`.
pub const SYMBOLS: [char; 17] = [
    ' ', '.', 'o', '+', '=', '*', 'B', 'O', 'X', '@', '%', '&', '#', '/', '^', 'S', 'E',
];

/// Cell value marking where the walk started
pub const START_MARKER: u32 = SYMBOLS.len() as u32 - 2;
/// Cell value marking where the walk ended
pub const END_MARKER: u32 = SYMBOLS.len() as u32 - 1;

const BORDER: &str = "+-----------------+";

/// Render the board as text, one line per row with the row index on the right
pub fn render(grid: &Grid) -> Result<String, WalkError> {
    let mut out = String::new();
    out.push_str(BORDER);
    out.push('\n');

    for y in 0..grid.get_height() {
        out.push('|');
        for x in 0..grid.get_width() {
            let count = grid.get_visits(x, y);
            let symbol = SYMBOLS
                .get(count as usize)
                .ok_or(WalkError::SymbolOverflow { x, y, count })?;
            out.push(*symbol);
        }
        out.push_str(&format!("|{y}\n"));
    }

    out.push_str(BORDER);
    out.push('\n');
    Ok(out)
}

/// Write one frame of art to the terminal, optionally wiping the previous one
pub fn draw_frame<W: io::Write>(out: &mut W, art: &str, clear: bool) -> io::Result<()> {
    if clear {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    out.write_all(art.as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{digest, types::WalkBoard};

    #[test]
    fn markers_are_last_two_symbols() {
        assert_eq!(SYMBOLS[START_MARKER as usize], 'S');
        assert_eq!(SYMBOLS[END_MARKER as usize], 'E');
    }

    #[test]
    fn empty_grid() {
        let art = render(&Grid::new()).unwrap();
        let lines: Vec<_> = art.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], BORDER);
        assert_eq!(lines[10], BORDER);
        for (y, line) in lines[1..10].iter().enumerate() {
            assert_eq!(*line, format!("|{}|{y}", " ".repeat(17)));
        }
    }

    #[test]
    fn counts_map_to_symbols() {
        let mut grid = Grid::new();
        grid.set(0, 0, 1);
        grid.set(1, 0, 2);
        grid.set(16, 8, 14);
        let art = render(&grid).unwrap();
        let lines: Vec<_> = art.lines().collect();
        assert_eq!(lines[1], "|.o               |0");
        assert_eq!(lines[9], "|                ^|8");
    }

    #[test]
    fn overflow_is_reported() {
        let mut grid = Grid::new();
        grid.set(3, 2, 17);
        assert_eq!(
            render(&grid),
            Err(WalkError::SymbolOverflow { x: 3, y: 2, count: 17 })
        );
        assert_eq!(grid.get_visits(3, 2), 17);
    }

    #[test]
    fn final_art_for_single_byte() {
        let mut board = WalkBoard::new();
        board.load(digest::decode("00").unwrap()).unwrap();
        while board.step().unwrap() {}
        board.finalize().unwrap();

        let expected = [
            "+-----------------+",
            "|    E            |0",
            "|     .           |1",
            "|      .          |2",
            "|       .         |3",
            "|        S        |4",
            "|                 |5",
            "|                 |6",
            "|                 |7",
            "|                 |8",
            "+-----------------+",
        ];
        assert_eq!(board.render().unwrap(), expected.join("\n") + "\n");
    }

    #[test]
    fn plain_frame_is_just_the_art() {
        let art = render(&Grid::new()).unwrap();
        let mut buf = Vec::new();
        draw_frame(&mut buf, &art, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), art);
    }

    #[test]
    fn cleared_frame_starts_with_escape() {
        let art = render(&Grid::new()).unwrap();
        let mut buf = Vec::new();
        draw_frame(&mut buf, &art, true).unwrap();
        let frame = String::from_utf8(buf).unwrap();
        assert!(frame.starts_with('\x1b'));
        assert!(frame.ends_with(&art));
    }
}
