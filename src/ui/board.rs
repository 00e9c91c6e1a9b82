use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use shakmaty::fen::{Fen, ParseFenError};
use shakmaty::{Board, File, Piece, Rank, Role, Square};

use crate::app::BoardOptions;

const LIGHT_SQUARE: Color = Color::Rgb(240, 217, 181);
const DARK_SQUARE: Color = Color::Rgb(181, 136, 99);
const WHITE_PIECE: Color = Color::Rgb(255, 255, 255);
const BLACK_PIECE: Color = Color::Rgb(20, 20, 20);
const NOTATION: Color = Color::Rgb(107, 114, 128);

/// Draws the piece placement of `fen`. The FEN is only read, never checked for legality.
pub fn render_board(f: &mut Frame, area: Rect, fen: &str, options: BoardOptions) {
    let (lines, title) = match board_lines(fen, options) {
        Ok((lines, turn)) => (lines, format!(" {} to move ", side_name(turn))),
        Err(error) => {
            tracing::debug!(%error, fen, "unreadable position");
            (
                vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        " Unreadable position",
                        Style::default().fg(Color::Red),
                    )),
                ],
                " Board ".to_string(),
            )
        }
    };

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}

fn side_name(color: shakmaty::Color) -> &'static str {
    match color {
        shakmaty::Color::White => "White",
        shakmaty::Color::Black => "Black",
    }
}

/// Text rows of the board as seen from the side at the bottom, plus the side to move
pub fn board_lines(
    fen: &str,
    options: BoardOptions,
) -> Result<(Vec<Line<'static>>, shakmaty::Color), ParseFenError> {
    let fen: Fen = fen.parse()?;
    let setup = fen.as_setup();

    let mut ranks = Rank::ALL;
    let mut files = File::ALL;
    if options.flipped {
        files.reverse();
    } else {
        ranks.reverse();
    }

    let mut lines: Vec<Line<'static>> = ranks
        .iter()
        .map(|&rank| rank_line(&setup.board, rank, &files, options))
        .collect();

    if options.show_notation {
        let mut spans = vec![Span::raw("  ")];
        spans.extend(files.iter().map(|file| {
            Span::styled(
                format!(" {} ", file.char()),
                Style::default().fg(NOTATION).add_modifier(Modifier::BOLD),
            )
        }));
        lines.push(Line::from(spans));
    }

    Ok((lines, setup.turn))
}

fn rank_line(board: &Board, rank: Rank, files: &[File; 8], options: BoardOptions) -> Line<'static> {
    let mut spans = Vec::with_capacity(9);
    if options.show_notation {
        spans.push(Span::styled(
            format!("{} ", rank.char()),
            Style::default().fg(NOTATION).add_modifier(Modifier::BOLD),
        ));
    }
    for &file in files {
        let square = Square::from_coords(file, rank);
        let background = if (u32::from(file) + u32::from(rank)) % 2 == 0 {
            DARK_SQUARE
        } else {
            LIGHT_SQUARE
        };
        let (symbol, foreground) = match board.piece_at(square) {
            Some(piece) => (
                piece_symbol(piece, options.unicode_pieces),
                if piece.color.is_white() {
                    WHITE_PIECE
                } else {
                    BLACK_PIECE
                },
            ),
            None => (' ', background),
        };
        spans.push(Span::styled(
            format!(" {} ", symbol),
            Style::default()
                .fg(foreground)
                .bg(background)
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

/// Solid glyphs for both sides; the foreground colour tells them apart
fn piece_symbol(piece: Piece, unicode: bool) -> char {
    if !unicode {
        return piece.char();
    }
    match piece.role {
        Role::King => '♚',
        Role::Queen => '♛',
        Role::Rook => '♜',
        Role::Bishop => '♝',
        Role::Knight => '♞',
        Role::Pawn => '♟',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::STARTING_FEN;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn letters() -> BoardOptions {
        BoardOptions {
            show_notation: true,
            unicode_pieces: false,
            flipped: false,
        }
    }

    #[test]
    fn test_starting_position_white_at_bottom() {
        let (lines, turn) = board_lines(STARTING_FEN, letters()).unwrap();
        assert_eq!(lines.len(), 9);
        assert_eq!(turn, shakmaty::Color::White);
        assert_eq!(text(&lines[0]), "8  r  n  b  q  k  b  n  r ");
        assert_eq!(text(&lines[7]), "1  R  N  B  Q  K  B  N  R ");
        assert_eq!(text(&lines[8]), "   a  b  c  d  e  f  g  h ");
    }

    #[test]
    fn test_flipped_board_puts_black_at_bottom() {
        let options = BoardOptions {
            flipped: true,
            ..letters()
        };
        let (lines, _) = board_lines(STARTING_FEN, options).unwrap();
        assert_eq!(text(&lines[0]), "1  R  N  B  K  Q  B  N  R ");
        assert_eq!(text(&lines[7]), "8  r  n  b  k  q  b  n  r ");
        assert_eq!(text(&lines[8]), "   h  g  f  e  d  c  b  a ");
    }

    #[test]
    fn test_without_notation() {
        let options = BoardOptions {
            show_notation: false,
            ..letters()
        };
        let (lines, _) = board_lines(STARTING_FEN, options).unwrap();
        assert_eq!(lines.len(), 8);
        assert_eq!(text(&lines[4]), "                        ");
    }

    #[test]
    fn test_unicode_glyphs_and_side_to_move() {
        let options = BoardOptions {
            unicode_pieces: true,
            ..letters()
        };
        let fen = "4k3/8/8/8/8/8/8/4K3 b - - 0 1";
        let (lines, turn) = board_lines(fen, options).unwrap();
        assert_eq!(turn, shakmaty::Color::Black);
        assert!(text(&lines[0]).contains('♚'));
        assert!(text(&lines[7]).contains('♚'));
    }

    #[test]
    fn test_a1_is_dark() {
        let (lines, _) = board_lines(STARTING_FEN, letters()).unwrap();
        let a1 = &lines[7].spans[1];
        assert_eq!(a1.style.bg, Some(DARK_SQUARE));
        let h1 = &lines[7].spans[8];
        assert_eq!(h1.style.bg, Some(LIGHT_SQUARE));
    }

    #[test]
    fn test_unreadable_fen() {
        assert!(board_lines("not a fen", letters()).is_err());
    }
}
