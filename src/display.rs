//! Rendering layer — all terminal output lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state. No game logic is performed; this module only scales field
//! coordinates onto terminal cells and translates state into terminal
//! commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use invaders::entities::{GameState, GameStatus};

// ── Colour palette ───────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_COUNT: Color = Color::Green;
const C_DEFENDER: Color = Color::White;
const C_INVADER: Color = Color::Green;
const C_BOMB: Color = Color::Magenta;
const C_MISSILE: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

// ── Layout ───────────────────────────────────────────────────────────────────
//
// Row 0 is the HUD, row 1 and row rows-2 are the border bars, the last row
// is the controls hint. The playfield maps onto the cells in between.

struct Viewport {
    cols: u16,
    rows: u16,
    inner_w: i32,
    inner_h: i32,
}

impl Viewport {
    fn new(cols: u16, rows: u16) -> Self {
        Viewport {
            cols,
            rows,
            inner_w: cols.saturating_sub(2) as i32,
            inner_h: rows.saturating_sub(4) as i32,
        }
    }

    /// Map a field position to a terminal cell inside the border.
    fn cell(&self, state: &GameState, x: i32, y: i32) -> (u16, u16) {
        let fx = state.config.field_width.max(1);
        let fy = state.config.field_height.max(1);
        let cx = (x.clamp(0, fx - 1) * self.inner_w / fx) as u16 + 1;
        let cy = (y.clamp(0, fy - 1) * self.inner_h / fy) as u16 + 2;
        (cx, cy)
    }
}

// ── Public entry point ───────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let vp = Viewport::new(cols, rows);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, &vp)?;
    draw_hud(out, state, &vp)?;

    for inv in &state.invaders {
        let (cx, cy) = vp.cell(state, inv.x + inv.width / 2, inv.y);
        out.queue(cursor::MoveTo(cx, cy))?;
        out.queue(style::SetForegroundColor(C_INVADER))?;
        out.queue(Print("▼"))?;
    }
    for bomb in &state.bombs {
        let (cx, cy) = vp.cell(state, bomb.x, bomb.y);
        out.queue(cursor::MoveTo(cx, cy))?;
        out.queue(style::SetForegroundColor(C_BOMB))?;
        out.queue(Print("●"))?;
    }
    for missile in &state.missiles {
        let (cx, cy) = vp.cell(state, missile.x, missile.y);
        out.queue(cursor::MoveTo(cx, cy))?;
        out.queue(style::SetForegroundColor(C_MISSILE))?;
        out.queue(Print("║"))?;
    }

    draw_defender(out, state, &vp)?;
    draw_controls_hint(out, &vp)?;

    match state.status {
        GameStatus::Lost => draw_overlay(
            out,
            &vp,
            "GAME  OVER",
            Color::Red,
            &format!("Final Score: {}", state.score),
        )?,
        GameStatus::Won => draw_overlay(
            out,
            &vp,
            "YOU  WIN",
            Color::Green,
            &format!("Final Score: {}", state.score),
        )?,
        GameStatus::Running => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, vp.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ───────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, vp: &Viewport) -> std::io::Result<()> {
    let w = vp.cols as usize;
    let h = vp.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(vp.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ──────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, vp: &Viewport) -> std::io::Result<()> {
    // Score — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>8}", state.score)))?;

    // Invaders left in the whole game — right
    let remaining = state.invaders.len() as u32
        + (state.config.max_invaders - state.invaders_spawned);
    let text = format!("Invaders: {:>3}", remaining);
    let rx = vp.cols.saturating_sub(text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_COUNT))?;
    out.queue(Print(&text))?;

    Ok(())
}

// ── Entities ─────────────────────────────────────────────────────────────────

fn draw_defender<W: Write>(out: &mut W, state: &GameState, vp: &Viewport) -> std::io::Result<()> {
    let d = &state.defender;
    let (cx, cy) = vp.cell(state, d.x + d.width / 2, d.y);
    out.queue(style::SetForegroundColor(C_DEFENDER))?;
    out.queue(cursor::MoveTo(cx, cy))?;
    out.queue(Print("▲"))?;
    Ok(())
}

// ── Controls hint (last row) ─────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, vp: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, vp.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Fire   Q : Quit"))?;
    Ok(())
}

// ── Terminal-state overlay ───────────────────────────────────────────────────

fn draw_overlay<W: Write>(
    out: &mut W,
    vp: &Viewport,
    title: &str,
    color: Color,
    score_line: &str,
) -> std::io::Result<()> {
    let boxed = format!("║    {}    ║", title);
    let bar = "═".repeat(boxed.chars().count() - 2);
    let top = format!("╔{}╗", bar);
    let bottom = format!("╚{}╝", bar);
    let lines: &[(&str, Color)] = &[
        (&top, color),
        (&boxed, color),
        (&bottom, color),
        (score_line, Color::Yellow),
        ("Q - Quit", Color::White),
    ];

    let cx = vp.cols / 2;
    let start_row = (vp.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
