//! Board, entity and text drawing for one frame.

use daycrawl_app::app_loop::AppState;
use daycrawl_app::format_seed;
use daycrawl_app::ui_text::overlay_text;
use daycrawl_core::{CollectibleKind, EntityState, Game, HazardKind, Tile};
use macroquad::prelude::*;

const HUD_HEIGHT: f32 = 40.0;
const COUNTER_FONT_SIZE: f32 = 28.0;
const OVERLAY_FONT_SIZE: f32 = 40.0;
const SEED_FONT_SIZE: f32 = 16.0;
const ENTITY_INSET: f32 = 0.15;

const FLOOR_SHADES: [Color; 4] = [
    Color { r: 0.16, g: 0.13, b: 0.10, a: 1.0 },
    Color { r: 0.18, g: 0.14, b: 0.11, a: 1.0 },
    Color { r: 0.15, g: 0.12, b: 0.09, a: 1.0 },
    Color { r: 0.19, g: 0.15, b: 0.12, a: 1.0 },
];
const BOUNDARY_COLOR: Color = Color { r: 0.32, g: 0.30, b: 0.28, a: 1.0 };

/// Maps grid coordinates (up is +y) to screen pixels.
struct BoardView {
    origin_x: f32,
    origin_y: f32,
    cell: f32,
    rows: i32,
}

impl BoardView {
    fn fit(columns: i32, rows: i32) -> Self {
        let width = (columns + 2) as f32;
        let height = (rows + 2) as f32;
        let cell = (screen_width() / width).min((screen_height() - HUD_HEIGHT) / height);
        Self {
            origin_x: (screen_width() - cell * width) / 2.0,
            origin_y: (screen_height() - HUD_HEIGHT - cell * height) / 2.0,
            cell,
            rows,
        }
    }

    fn top_left(&self, x: f32, y: f32) -> (f32, f32) {
        (self.origin_x + (x + 1.0) * self.cell, self.origin_y + (self.rows as f32 - y) * self.cell)
    }

    fn fill(&self, x: f32, y: f32, inset: f32, color: Color) {
        let (sx, sy) = self.top_left(x, y);
        let pad = self.cell * inset;
        draw_rectangle(sx + pad, sy + pad, self.cell - 2.0 * pad, self.cell - 2.0 * pad, color);
    }
}

pub fn draw_frame(game: &Game, app_state: &AppState, run_seed: u64) {
    clear_background(BLACK);
    let state = game.state();
    let view = BoardView::fit(state.board.columns, state.board.rows);

    for (pos, tile) in state.board.cells() {
        let color = match tile {
            Tile::Floor { variant } => FLOOR_SHADES[usize::from(variant) % FLOOR_SHADES.len()],
            Tile::Boundary { .. } => BOUNDARY_COLOR,
        };
        view.fill(pos.x as f32, pos.y as f32, 0.0, color);
    }
    let (exit_x, exit_y) = view.top_left(state.exit.x as f32, state.exit.y as f32);
    draw_rectangle_lines(exit_x, exit_y, view.cell, view.cell, 3.0, GOLD);

    // Pickups underneath anything standing on them.
    let mut entities: Vec<_> = state.entities.iter().collect();
    entities.sort_by_key(|(_, entity)| !matches!(entity.state, EntityState::Collectible { .. }));
    for (id, entity) in entities {
        let Some((x, y)) = game.render_position(id) else {
            continue;
        };
        view.fill(x, y, ENTITY_INSET, entity_color(&entity.state));
    }

    draw_hud(&app_state.counter, run_seed);
    if let Some(text) = overlay_text(&app_state.mode) {
        draw_rectangle(0.0, 0.0, screen_width(), screen_height(), BLACK);
        draw_centered(&text, screen_height() / 2.0, OVERLAY_FONT_SIZE, WHITE);
    }
}

fn entity_color(state: &EntityState) -> Color {
    match state {
        EntityState::Obstacle { hp, .. } => {
            Color { r: 0.45, g: 0.30, b: 0.15, a: 0.4 + 0.2 * (*hp).clamp(0, 3) as f32 }
        }
        EntityState::Collectible { kind: CollectibleKind::Food } => GREEN,
        EntityState::Collectible { kind: CollectibleKind::Soda } => SKYBLUE,
        EntityState::Hazard { kind: HazardKind::Stalker, .. } => RED,
        EntityState::Hazard { kind: HazardKind::Brute, .. } => MAROON,
        EntityState::Controlled { .. } => YELLOW,
    }
}

fn draw_hud(counter: &str, run_seed: u64) {
    draw_centered(counter, screen_height() - HUD_HEIGHT / 3.0, COUNTER_FONT_SIZE, WHITE);
    let seed_label = format!("Seed: {}", format_seed(run_seed));
    draw_text(&seed_label, 8.0, screen_height() - 8.0, SEED_FONT_SIZE, GRAY);
}

fn draw_centered(text: &str, baseline: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, (screen_width() - dims.width) / 2.0, baseline, font_size, color);
}
