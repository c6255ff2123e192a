//! Plain-text rendering of the arena, one character per grid cell.

use rat_agent::{Agent, AgentState, Sex};
use rat_core::Point;
use rat_world::{ItemKind, World};

/// Draw `world` and `agents` as rows of characters.
///
/// `#` wall, `*` food, `!` poison, `m`/`f` awake rat by sex, `z` sleeping,
/// `x` dead.  Later layers overwrite earlier ones.
pub fn frame(world: &World, agents: &[Agent], cell: i32) -> String {
    let cols = (world.width() / cell).max(0) as usize;
    let rows = (world.height() / cell).max(0) as usize;
    let mut grid = vec![vec!['.'; cols]; rows];

    for (r, row) in grid.iter_mut().enumerate() {
        for (c, ch) in row.iter_mut().enumerate() {
            let centre = Point::new(c as i32 * cell + cell / 2, r as i32 * cell + cell / 2);
            if world.is_inside_any_wall(centre) {
                *ch = '#';
            }
        }
    }

    let mut plot = |p: Point, ch: char| {
        let (c, r) = (p.x / cell, p.y / cell);
        if let Some(slot) = grid.get_mut(r as usize).and_then(|row| row.get_mut(c as usize)) {
            *slot = ch;
        }
    };
    for item in world.items() {
        plot(item.rect.center(), match item.kind {
            ItemKind::Food   => '*',
            ItemKind::Poison => '!',
        });
    }
    for agent in agents {
        let ch = match (agent.state(), agent.tag().sex) {
            (AgentState::Dead { .. }, _)    => 'x',
            (AgentState::Asleep { .. }, _)  => 'z',
            (AgentState::Awake, Sex::Male)   => 'm',
            (AgentState::Awake, Sex::Female) => 'f',
        };
        plot(agent.rect().center(), ch);
    }

    let mut out = String::with_capacity(rows * (cols + 1));
    for row in grid {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// Short label for a rat's state.
pub fn state_label(state: AgentState) -> String {
    match state {
        AgentState::Awake                 => "awake".into(),
        AgentState::Asleep { remaining }  => format!("asleep ({remaining})"),
        AgentState::Dead { fading }       => format!("dead ({fading})"),
    }
}
