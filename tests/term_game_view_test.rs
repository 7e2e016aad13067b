use blockfall::core::{Game, GameConfig, GameSnapshot, ManualClock, ScriptedShapes};
use blockfall::term::{changed_rows, piece_color, FrameBuffer, GameView, Viewport};
use blockfall::types::{Move, PieceKind, Status};

fn game_with(kind: PieceKind) -> Game<ManualClock, ScriptedShapes> {
    Game::with_sources(
        GameConfig::default(),
        ManualClock::new(),
        ScriptedShapes::repeat(kind),
    )
    .unwrap()
}

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = game_with(PieceKind::T).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_spawned_piece_near_top() {
    let snap = game_with(PieceKind::I).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // I spawns on board row 18, which is screen row 1 + (19 - 18) = 2.
    // Columns 3..=6 map to screen x 7..=14.
    for x in 7..=14 {
        let cell = fb.get(x, 2).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, piece_color(PieceKind::I));
        assert!(cell.style.bold, "active piece is bold");
    }
    assert_eq!(fb.get(5, 2).unwrap().ch, '·');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut game = game_with(PieceKind::O);
    while game.apply_move(Move::MoveDown) {}
    let snap = game.snapshot();

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // The O locked at board x 4..=5, rows 0..=1: screen x 9..=12, rows 19..=20.
    for y in [19, 20] {
        for x in 9..=12 {
            let cell = fb.get(x, y).unwrap();
            assert_eq!(cell.ch, '█');
            assert!(!cell.style.bold, "locked blocks are not bold");
        }
    }
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = game_with(PieceKind::L).snapshot();
    snap.score = 1234;

    let text = screen_text(&GameView::default().render(&snap, Viewport::new(60, 22)));
    assert!(text.contains("SCORE"));
    assert!(text.contains("1234"));
    assert!(text.contains("PIECE"));
    assert!(text.contains("pause"));

    let narrow = screen_text(&GameView::default().render(&snap, Viewport::new(22, 22)));
    assert!(!narrow.contains("SCORE"));
}

#[test]
fn term_view_overlays_status() {
    let mut game = game_with(PieceKind::S);
    game.update(Move::Pause);
    let text = screen_text(&GameView::default().render(&game.snapshot(), Viewport::new(40, 24)));
    assert!(text.contains("PAUSED"));

    let mut snap = GameSnapshot::empty(10, 20);
    snap.status = Status::GameOver;
    let text = screen_text(&GameView::default().render(&snap, Viewport::new(40, 24)));
    assert!(text.contains("GAME OVER"));
    assert!(!text.contains("PAUSED"));
}

#[test]
fn one_row_fall_changes_only_nearby_rows() {
    let clock = ManualClock::new();
    let mut game = Game::with_sources(
        GameConfig::default(),
        clock.clone(),
        ScriptedShapes::repeat(PieceKind::I),
    )
    .unwrap();
    let view = GameView::default();
    let vp = Viewport::new(22, 22);

    let before = view.render(&game.snapshot(), vp);
    clock.advance_ms(1001);
    game.update(Move::NoMove);
    let after = view.render(&game.snapshot(), vp);

    // Board rows 18 and 17 are screen rows 2 and 3.
    let rows: Vec<u16> = changed_rows(&before, &after).collect();
    assert_eq!(rows, vec![2, 3]);
}
