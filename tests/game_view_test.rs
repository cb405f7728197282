use tui_2048::core::{Board, BoardSnapshot, GameConfig, GameState};
use tui_2048::view::GameView;

fn snapshot_of(rows: [[u32; 4]; 4]) -> BoardSnapshot {
    let state = GameState::from_board(Board::from_rows(rows), GameConfig::with_seed(1));
    state.snapshot()
}

#[test]
fn game_view_renders_one_line_per_row() {
    let snap = snapshot_of([[0; 4]; 4]);
    let text = GameView::default().render(&snap);

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    for line in lines {
        assert_eq!(line, "    .    .    .    .");
    }
}

#[test]
fn game_view_renders_tile_labels() {
    let snap = snapshot_of([[2, 0, 0, 1024], [0; 4], [0; 4], [4096, 0, 0, 8]]);
    let text = GameView::default().render(&snap);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "    2    .    . 1024");
    assert_eq!(lines[3], " 4096    .    .    8");
}

#[test]
fn game_view_marks_the_winning_tile() {
    let snap = snapshot_of([[2048, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let text = GameView::default().render(&snap);

    assert_eq!(text.lines().next(), Some("*2048    2    .    ."));
}

#[test]
fn game_view_renders_malformed_value_as_empty() {
    let mut snap = BoardSnapshot::default();
    snap.cells[1][2] = 3;
    snap.cells[1][3] = 16;

    let text = GameView::default().render(&snap);
    assert_eq!(text.lines().nth(1), Some("    .    .    .   16"));
}

#[test]
fn game_view_render_into_reuses_buffer() {
    let view = GameView::new(3, '-');
    let mut buf = String::from("stale");

    view.render_into(&snapshot_of([[8, 0, 0, 0], [0; 4], [0; 4], [0; 4]]), &mut buf);
    assert!(buf.starts_with("  8  -  -  -\n"));
    assert_eq!(buf.lines().count(), 4);
}
