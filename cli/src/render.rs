use std::io::{self, Write};

use minefield_core::{BoardView, CellView, Reveal, RevealOutcome};

pub fn glyph(cell: CellView) -> char {
    match cell {
        CellView::Hidden => '#',
        CellView::Empty => '-',
        CellView::Numbered(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        CellView::Mine => 'X',
    }
}

pub fn board(view: &BoardView, out: &mut impl Write) -> io::Result<()> {
    let (_, height) = view.size;
    for y in 0..height {
        let row: Vec<String> = view.row(y).map(|cell| glyph(cell).to_string()).collect();
        writeln!(out, "{}", row.join(" "))?;
    }
    if view.game_over {
        writeln!(out, "Game Over")?;
    }
    Ok(())
}

pub fn reveal(reveal: &Reveal, out: &mut impl Write) -> io::Result<()> {
    match reveal.outcome {
        RevealOutcome::GameOver => writeln!(out, "Boom."),
        RevealOutcome::Numbered(count) => writeln!(out, "{count} adjacent mines"),
        RevealOutcome::Empty => writeln!(out, "Opened {} cells", reveal.changed.len()),
        RevealOutcome::Mine | RevealOutcome::Safe => writeln!(out, "Already open"),
    }
}
